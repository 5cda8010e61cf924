//! Command handlers for the Quill CLI.
//!
//! Shared utilities like `read_file` live in the module root.

mod lex;

pub use lex::{lex_file, parse_lex_args, render_tokens, LexOptions, LexReport};

/// Read a file from disk as raw bytes, exiting with a user-friendly error
/// message on failure.
pub(crate) fn read_file(path: &str) -> Vec<u8> {
    match std::fs::read(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}
