//! Hand-written tokenizer for Quill.
//!
//! The tokenizer is pull-based: a parser asks for one [`Token`] at a time
//! with [`Tokenizer::next_token`], and may look one token ahead with
//! [`Tokenizer::peek_token`]. Tokens that carry text (`Ident`, `Number`,
//! `String`) borrow it from the input buffer; nothing is copied.
//!
//! # Layers
//!
//! - [`Cursor`]: byte reader with line/column tracking.
//! - [`Tokenizer`]: the scanning state machine built on the cursor.
//! - [`Token`] / [`TokenKind`]: scan results and their discriminants.
//! - [`LexError`]: the only error the scanner can hit (an unterminated
//!   string literal). [`Tokenizer::next_token`] treats it as fatal;
//!   [`Tokenizer::try_next_token`] hands it back to the caller.
//!
//! # Classification
//!
//! Classification is single-byte ASCII. Identifiers are runs of letters
//! only and numbers are runs of digits only, so `abc123` scans as
//! `Ident(abc)` followed by `Number(123)`.

mod cursor;
mod error;
mod token;
mod tokenizer;

pub use cursor::{Cursor, Position, StringDelim};
pub use error::LexError;
pub use token::{Token, TokenKind};
pub use tokenizer::{tokenize, Tokenizer};
