//! Tokenizer errors and the fail-fast path.
//!
//! The scanner has exactly one unrecoverable condition: the buffer ends
//! inside a string literal. There is no token that could describe the
//! partial literal, so [`Tokenizer::next_token`](crate::Tokenizer::next_token)
//! aborts through [`fail_fast`]. The panic message is the rendered error
//! (`LINE:COL: unterminated string literal`), so a driver's panic hook can
//! turn it into a diagnostic. [`Tokenizer::try_next_token`](crate::Tokenizer::try_next_token)
//! hands the same error back as a value, and keeps doing so on every later
//! call.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum LexError {
    /// End of buffer inside a string literal, with or without a pending
    /// escape. `line`/`col` is the position just after the opening quote.
    #[error("{line}:{col}: unterminated string literal")]
    UnterminatedString { line: u32, col: u32 },
}

/// Abort the scan. Never returns.
#[cold]
#[track_caller]
pub(crate) fn fail_fast(err: LexError) -> ! {
    tracing::error!(%err, "tokenizer: fatal error");
    panic!("{err}");
}
