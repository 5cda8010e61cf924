//! Token types produced by the tokenizer.

use std::fmt;

/// A scanned token.
///
/// `Ident`, `Number`, and `String` borrow their text from the input buffer.
/// A `String` view excludes the delimiting quotes and keeps escape sequences
/// verbatim (`"a\"b"` yields the four bytes `a\"b`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token<'a> {
    /// End of input. Returned again on every later call.
    Eof,
    /// A run of ASCII letters.
    Ident(&'a [u8]),
    /// A run of ASCII digits.
    Number(&'a [u8]),
    OpenParen,
    CloseParen,
    Semi,
    Comma,
    /// Contents of a double-quoted string literal.
    String(&'a [u8]),
    /// A byte that starts no token, with the position just after it.
    Unknown { line: u32, col: u32, byte: u8 },
}

/// Payload-free token discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    Eof = 0,
    Ident,
    Number,
    OpenParen,
    CloseParen,
    Semi,
    Comma,
    String,
    Unknown,
}

impl<'a> Token<'a> {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Eof => TokenKind::Eof,
            Token::Ident(_) => TokenKind::Ident,
            Token::Number(_) => TokenKind::Number,
            Token::OpenParen => TokenKind::OpenParen,
            Token::CloseParen => TokenKind::CloseParen,
            Token::Semi => TokenKind::Semi,
            Token::Comma => TokenKind::Comma,
            Token::String(_) => TokenKind::String,
            Token::Unknown { .. } => TokenKind::Unknown,
        }
    }

    /// The borrowed text of an `Ident`, `Number`, or `String` token.
    pub fn lexeme(&self) -> Option<&'a [u8]> {
        match *self {
            Token::Ident(text) | Token::Number(text) | Token::String(text) => Some(text),
            _ => None,
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self, Token::Eof)
    }
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Eof => "Eof",
            TokenKind::Ident => "Ident",
            TokenKind::Number => "Number",
            TokenKind::OpenParen => "OpenParen",
            TokenKind::CloseParen => "CloseParen",
            TokenKind::Semi => "Semi",
            TokenKind::Comma => "Comma",
            TokenKind::String => "String",
            TokenKind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Debug rendering: `Ident(foo)`, `String("a b")`, `(unknown:1:2: '#')`.
impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Eof => f.write_str("(eof)"),
            Token::Ident(text) => write!(f, "Ident({})", String::from_utf8_lossy(text)),
            Token::Number(text) => write!(f, "Number({})", String::from_utf8_lossy(text)),
            Token::OpenParen => f.write_str("OpenParen"),
            Token::CloseParen => f.write_str("CloseParen"),
            Token::Semi => f.write_str("Semi"),
            Token::Comma => f.write_str("Comma"),
            Token::String(text) => write!(f, "String(\"{}\")", String::from_utf8_lossy(text)),
            Token::Unknown { line, col, byte } => write!(
                f,
                "(unknown:{line}:{col}: '{}')",
                std::ascii::escape_default(*byte)
            ),
        }
    }
}
