//! Quill CLI.

use quillc::commands::{lex_file, parse_lex_args};

fn main() {
    quillc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            let (path, options) = parse_lex_args(&args[2..]);
            let Some(path) = path else {
                eprintln!("Usage: quillc lex <file> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --stop-on-unknown   Fail on the first unrecognized byte");
                eprintln!("  --summary           Print token and unknown counts");
                eprintln!("  --positions         Prefix each token with line:col");
                std::process::exit(1);
            };
            lex_file(path, &options);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("quillc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Quill front-end driver");
    println!();
    println!("Usage: quillc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>           Tokenize a file and print one token per line");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --stop-on-unknown   Fail on the first unrecognized byte");
    println!("  --summary           Print token and unknown counts");
    println!("  --positions         Prefix each token with line:col");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=quill_lexer=trace) for debug output.");
}
