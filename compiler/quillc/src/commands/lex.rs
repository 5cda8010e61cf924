//! The `lex` command: tokenize a file and print the token stream.

use quill_lexer::{Token, Tokenizer};

use super::read_file;

/// Options for `quillc lex`, parsed from command line flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Stop at the first unknown byte and fail (--stop-on-unknown)
    pub stop_on_unknown: bool,
    /// Print token and unknown counts after the tokens (--summary)
    pub summary: bool,
    /// Prefix each token with the `line:col` where its scan ended (--positions)
    pub positions: bool,
}

/// Rendered token stream for one source buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexReport {
    /// One rendered token per entry, `Eof` excluded.
    pub lines: Vec<String>,
    pub tokens: usize,
    pub unknown: usize,
    /// Scanning stopped early on an unknown byte.
    pub stopped_on_unknown: bool,
}

impl LexReport {
    pub fn summary_line(&self) -> String {
        format!("{} tokens, {} unknown", self.tokens, self.unknown)
    }
}

/// Split `lex` arguments into the file path and options.
///
/// The first non-flag argument is the path. Unrecognized flags are reported
/// and ignored.
pub fn parse_lex_args(args: &[String]) -> (Option<&str>, LexOptions) {
    let mut path = None;
    let mut options = LexOptions::default();

    for arg in args {
        match arg.as_str() {
            "--stop-on-unknown" => options.stop_on_unknown = true,
            "--summary" => options.summary = true,
            "--positions" => options.positions = true,
            flag if flag.starts_with('-') => {
                eprintln!("warning: unknown lex option '{flag}'");
            }
            file if path.is_none() => path = Some(file),
            extra => eprintln!("warning: ignoring extra argument '{extra}'"),
        }
    }

    (path, options)
}

/// Tokenize `source` and render every token up to end of input.
///
/// # Panics
///
/// Panics through the tokenizer's fatal path if the buffer ends inside a
/// string literal.
pub fn render_tokens(source: &[u8], options: &LexOptions) -> LexReport {
    let mut tokenizer = Tokenizer::new(source);
    let mut report = LexReport::default();

    loop {
        let token = tokenizer.next_token();
        if token.is_eof() {
            break;
        }

        report.tokens += 1;
        report.lines.push(if options.positions {
            format!("{}  {token}", tokenizer.position())
        } else {
            token.to_string()
        });

        if matches!(token, Token::Unknown { .. }) {
            report.unknown += 1;
            if options.stop_on_unknown {
                report.stopped_on_unknown = true;
                break;
            }
        }
    }

    tracing::debug!(
        tokens = report.tokens,
        unknown = report.unknown,
        "lex: rendered token stream"
    );
    report
}

/// Tokenize the file at `path` and print its tokens, one per line.
///
/// Exits with status 1 on an unreadable file, an unterminated string
/// literal, or (with `--stop-on-unknown`) an unknown byte.
pub fn lex_file(path: &str, options: &LexOptions) {
    let content = read_file(path);

    install_fatal_hook(path);
    let report = render_tokens(&content, options);

    for line in &report.lines {
        println!("{line}");
    }
    if options.summary {
        println!("{}", report.summary_line());
    }
    if report.stopped_on_unknown {
        eprintln!("error: {path}: stopped at unknown byte");
        std::process::exit(1);
    }
}

/// Report a fatal tokenizer error as `error: <path>:<message>` and exit 1.
///
/// The tokenizer aborts by panicking with the rendered error; this hook is
/// where that abort becomes a user-facing diagnostic.
fn install_fatal_hook(path: &str) {
    let path = path.to_owned();
    std::panic::set_hook(Box::new(move |info| {
        let payload = info.payload();
        let message = payload
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| payload.downcast_ref::<&str>().copied())
            .unwrap_or("internal error");
        eprintln!("error: {path}:{message}");
        std::process::exit(1);
    }));
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    // -- parse_lex_args --

    #[test]
    fn parse_path_only() {
        let args = args(&["main.ql"]);
        let (path, options) = parse_lex_args(&args);
        assert_eq!(path, Some("main.ql"));
        assert_eq!(options, LexOptions::default());
    }

    #[test]
    fn parse_flags_before_and_after_path() {
        let args = args(&["--summary", "main.ql", "--positions", "--stop-on-unknown"]);
        let (path, options) = parse_lex_args(&args);
        assert_eq!(path, Some("main.ql"));
        assert_eq!(
            options,
            LexOptions {
                stop_on_unknown: true,
                summary: true,
                positions: true,
            }
        );
    }

    #[test]
    fn parse_ignores_unknown_flags_and_extra_paths() {
        let args = args(&["--verbose", "a.ql", "b.ql"]);
        let (path, options) = parse_lex_args(&args);
        assert_eq!(path, Some("a.ql"));
        assert_eq!(options, LexOptions::default());
    }

    #[test]
    fn parse_missing_path() {
        let args = args(&["--summary"]);
        let (path, _) = parse_lex_args(&args);
        assert_eq!(path, None);
    }

    // -- render_tokens --

    #[test]
    fn renders_one_token_per_line() {
        let report = render_tokens(b"foo(12);", &LexOptions::default());
        assert_eq!(
            report.lines,
            vec!["Ident(foo)", "OpenParen", "Number(12)", "CloseParen", "Semi"]
        );
        assert_eq!(report.tokens, 5);
        assert_eq!(report.unknown, 0);
        assert!(!report.stopped_on_unknown);
    }

    #[test]
    fn empty_source_renders_nothing() {
        let report = render_tokens(b"  \n ", &LexOptions::default());
        assert_eq!(report, LexReport::default());
        assert_eq!(report.summary_line(), "0 tokens, 0 unknown");
    }

    #[test]
    fn renders_strings_and_unknowns() {
        let report = render_tokens(b"say \"hi\", #", &LexOptions::default());
        assert_eq!(
            report.lines,
            vec![
                "Ident(say)",
                "String(\"hi\")",
                "Comma",
                "(unknown:1:12: '#')"
            ]
        );
        assert_eq!(report.summary_line(), "4 tokens, 1 unknown");
    }

    #[test]
    fn positions_prefix_the_scan_end() {
        let options = LexOptions {
            positions: true,
            ..LexOptions::default()
        };
        let report = render_tokens(b"ab\ncd", &options);
        assert_eq!(report.lines, vec!["1:3  Ident(ab)", "2:2  Ident(cd)"]);
    }

    #[test]
    fn stop_on_unknown_halts_after_the_first_unknown() {
        let options = LexOptions {
            stop_on_unknown: true,
            ..LexOptions::default()
        };
        let report = render_tokens(b"a # b", &options);
        assert_eq!(report.lines, vec!["Ident(a)", "(unknown:1:4: '#')"]);
        assert_eq!(report.tokens, 2);
        assert_eq!(report.unknown, 1);
        assert!(report.stopped_on_unknown);
    }

    #[test]
    fn unknowns_are_counted_without_stopping() {
        let report = render_tokens(b"a # b", &LexOptions::default());
        assert_eq!(report.tokens, 3);
        assert_eq!(report.unknown, 1);
        assert!(!report.stopped_on_unknown);
    }

    #[test]
    #[should_panic(expected = "1:4: unterminated string literal")]
    fn unterminated_string_aborts_rendering() {
        render_tokens(b"x \"abc", &LexOptions::default());
    }
}
