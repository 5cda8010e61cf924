//! The tokenizer state machine.
//!
//! One call to [`Tokenizer::next_token`] skips leading blanks and newlines,
//! then dispatches on the first byte of the token:
//!
//! | First byte        | Result                                  |
//! |-------------------|-----------------------------------------|
//! | end of buffer     | `Eof`                                   |
//! | `(` `)` `;` `,`   | the matching single-byte token          |
//! | ASCII letter      | `Ident` over the letter run             |
//! | ASCII digit       | `Number` over the digit run             |
//! | `"`               | `String`, or the fatal path if unclosed |
//! | anything else     | `Unknown` with the position after it    |
//!
//! Letter and digit runs stop on the first byte outside the class without
//! consuming it, so `abc123` is two tokens. Blank skipping happens only at
//! token start, never inside a token.
//!
//! The stopping byte is peeked, never read and stepped back over, so its
//! column is counted once: in `ab?` the `Unknown` for `?` reports column 4.
//!
//! An unterminated string literal ends the scan for good. After the first
//! [`LexError`], [`Tokenizer::try_next_token`] keeps returning it and
//! [`Tokenizer::next_token`] aborts; there is no way to resume past it.

use crate::cursor::{is_alpha, is_blank_or_newline, is_digit, Cursor, Position, StringDelim};
use crate::error::{fail_fast, LexError};
use crate::token::Token;

/// Pull-based tokenizer over a borrowed byte buffer.
///
/// The whole scanner state is its [`Cursor`], which is `Copy`; peeking
/// snapshots the cursor, scans, and restores it.
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
    /// First fatal error hit; once set, every later scan reports it.
    failed: Option<LexError>,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer at the start of `source`.
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(source),
            failed: None,
        }
    }

    /// Rewind to offset 0, line 1, column 1 and start a fresh scan.
    pub fn reset(&mut self) {
        self.cursor.reset();
        self.failed = None;
    }

    /// Returns `true` once the whole buffer has been consumed.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.cursor.is_eof()
    }

    /// Current line/column.
    #[inline]
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Byte offset of the next unread byte.
    #[inline]
    pub fn offset(&self) -> usize {
        self.cursor.pos()
    }

    /// Produce the next token.
    ///
    /// Returns `Eof` when the source is exhausted, and keeps returning it.
    ///
    /// # Panics
    ///
    /// Panics if the buffer ends inside a string literal. Use
    /// [`try_next_token`](Self::try_next_token) to get the error as a value.
    #[track_caller]
    pub fn next_token(&mut self) -> Token<'a> {
        match self.try_next_token() {
            Ok(token) => token,
            Err(err) => fail_fast(err),
        }
    }

    /// Return the token [`next_token`](Self::next_token) would produce,
    /// leaving the position unchanged.
    #[track_caller]
    pub fn peek_token(&mut self) -> Token<'a> {
        let saved = self.cursor;
        let token = self.next_token();
        self.cursor = saved;
        token
    }

    /// Produce the next token, reporting an unterminated string literal as
    /// an error instead of aborting.
    ///
    /// The error is terminal: every later call returns it again (never
    /// `Eof`) until [`reset`](Self::reset).
    pub fn try_next_token(&mut self) -> Result<Token<'a>, LexError> {
        if let Some(err) = self.failed {
            return Err(err);
        }

        self.cursor.eat_while(is_blank_or_newline);

        let start = self.cursor.pos();
        let Some(b) = self.cursor.bump() else {
            return Ok(Token::Eof);
        };

        let token = match b {
            b'(' => Token::OpenParen,
            b')' => Token::CloseParen,
            b';' => Token::Semi,
            b',' => Token::Comma,
            b'"' => {
                let scanned = self.string();
                if let Err(err) = scanned {
                    self.failed = Some(err);
                }
                return scanned;
            }
            _ if is_alpha(b) => {
                self.cursor.eat_while(is_alpha);
                Token::Ident(self.cursor.slice_from(start))
            }
            _ if is_digit(b) => {
                self.cursor.eat_while(is_digit);
                Token::Number(self.cursor.slice_from(start))
            }
            _ => self.unknown(b),
        };
        Ok(token)
    }

    /// Scan a string literal. The opening quote is already consumed.
    fn string(&mut self) -> Result<Token<'a>, LexError> {
        let open = self.cursor.position();
        let start = self.cursor.pos();
        let unterminated = LexError::UnterminatedString {
            line: open.line,
            col: open.col,
        };

        loop {
            match self.cursor.skip_to_string_delim() {
                StringDelim::Quote => {
                    let end = self.cursor.pos();
                    self.cursor.bump(); // closing '"'
                    return Ok(Token::String(self.cursor.slice(start, end)));
                }
                StringDelim::Backslash => {
                    self.cursor.bump(); // '\'
                    // The escaped byte is taken unconditionally, quote or not.
                    if self.cursor.bump().is_none() {
                        return Err(unterminated);
                    }
                }
                StringDelim::End => return Err(unterminated),
            }
        }
    }

    #[cold]
    fn unknown(&self, byte: u8) -> Token<'a> {
        let Position { line, col } = self.cursor.position();
        tracing::trace!(line, col, byte, "tokenizer: unknown byte");
        Token::Unknown { line, col, byte }
    }
}

/// Yields tokens up to, not including, `Eof`.
///
/// Panics on an unterminated string literal, like
/// [`Tokenizer::next_token`].
impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        match self.next_token() {
            Token::Eof => None,
            token => Some(token),
        }
    }
}

impl std::iter::FusedIterator for Tokenizer<'_> {}

/// Convenience function: tokenize a buffer and collect all tokens.
///
/// Returns every token except the final `Eof`. For streaming access or
/// lookahead, construct a [`Tokenizer`] directly.
pub fn tokenize(source: &[u8]) -> Vec<Token<'_>> {
    Tokenizer::new(source).collect()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
