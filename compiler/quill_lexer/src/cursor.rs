//! Byte cursor with line/column tracking.
//!
//! Every consumed byte updates the position: a newline (`\n`) increments
//! the line and resets the column to 0, any other byte increments the
//! column. A fresh cursor sits at line 1, column 1, so the column reported
//! after consuming the first byte of a line is one past its 1-based index.
//!
//! The cursor is [`Copy`]. Snapshotting and restoring a position is a plain
//! copy, which is how the tokenizer implements peeking.

use std::fmt;

/// A line/column pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub col: u32,
}

impl Position {
    /// The position of a freshly reset cursor.
    pub const START: Position = Position { line: 1, col: 1 };
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Byte class flags, indexed by byte value.
const ALPHA: u8 = 1 << 0;
const DIGIT: u8 = 1 << 1;
const BLANK: u8 = 1 << 2;
const NEWLINE: u8 = 1 << 3;

/// 256-byte classification table.
/// Table lookup replaces the multi-range `matches!` with a single indexed read.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static BYTE_CLASS: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0u16;
    while i < 256 {
        let b = i as u8;
        table[i as usize] = match b {
            b'a'..=b'z' | b'A'..=b'Z' => ALPHA,
            b'0'..=b'9' => DIGIT,
            b' ' | b'\t' => BLANK,
            b'\n' => NEWLINE,
            _ => 0,
        };
        i += 1;
    }
    table
};

/// ASCII letter (`isalpha` in the C locale).
#[inline]
pub(crate) fn is_alpha(b: u8) -> bool {
    BYTE_CLASS[b as usize] & ALPHA != 0
}

/// ASCII decimal digit.
#[inline]
pub(crate) fn is_digit(b: u8) -> bool {
    BYTE_CLASS[b as usize] & DIGIT != 0
}

/// Space, tab, or newline: the bytes skipped before a token.
#[inline]
pub(crate) fn is_blank_or_newline(b: u8) -> bool {
    BYTE_CLASS[b as usize] & (BLANK | NEWLINE) != 0
}

/// Where [`Cursor::skip_to_string_delim`] stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StringDelim {
    /// An unconsumed `"`.
    Quote,
    /// An unconsumed `\`.
    Backslash,
    /// End of buffer.
    End,
}

/// Byte reader over an immutable input buffer.
///
/// # Invariant
///
/// `pos <= buf.len()` and `line >= 1`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    /// Byte offset of the next unread byte.
    pos: usize,
    line: u32,
    col: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            line: Position::START.line,
            col: Position::START.col,
        }
    }

    /// Rewind to the start of the buffer (offset 0, line 1, column 1).
    pub fn reset(&mut self) {
        *self = Self::new(self.buf);
    }

    /// Returns `true` once every byte of the buffer has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Byte offset of the next unread byte.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn col(&self) -> u32 {
        self.col
    }

    #[inline]
    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            col: self.col,
        }
    }

    /// Returns the next unread byte without consuming it.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    /// Consume one byte, updating line and column.
    ///
    /// Returns `None` (and leaves the cursor untouched) at end of buffer.
    #[inline]
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.current()?;
        self.pos += 1;
        self.track(b);
        Some(b)
    }

    #[inline]
    fn track(&mut self, b: u8) {
        if b == b'\n' {
            self.col = 0;
            self.line += 1;
        } else {
            self.col += 1;
        }
    }

    /// Consume bytes while `pred` holds for the next unread byte.
    ///
    /// The first byte that fails `pred` stays unread, so the next scan
    /// starts on it.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(b) = self.current() {
            if !pred(b) {
                break;
            }
            self.pos += 1;
            self.track(b);
        }
    }

    /// Skip ordinary string content up to the next `"` or `\`.
    ///
    /// The delimiter found is left unconsumed. On [`StringDelim::End`] the
    /// cursor is at end of buffer. Line and column are updated over the
    /// skipped bytes exactly as byte-wise reading would.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "line/column counts are bounded by the u32 position fields"
    )]
    pub fn skip_to_string_delim(&mut self) -> StringDelim {
        let remaining = &self.buf[self.pos..];
        let (skip, delim) = match memchr::memchr2(b'"', b'\\', remaining) {
            Some(i) if remaining[i] == b'"' => (i, StringDelim::Quote),
            Some(i) => (i, StringDelim::Backslash),
            None => (remaining.len(), StringDelim::End),
        };
        let skipped = &remaining[..skip];

        match memchr::memrchr(b'\n', skipped) {
            Some(last_newline) => {
                let newlines = memchr::memchr_iter(b'\n', skipped).count();
                self.line += newlines as u32;
                self.col = (skipped.len() - last_newline - 1) as u32;
            }
            None => self.col += skipped.len() as u32,
        }
        self.pos += skip;
        delim
    }

    /// Extract `buf[start..end]`.
    ///
    /// # Contract
    ///
    /// `start <= end <= pos`: slices only cover bytes already consumed.
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        debug_assert!(
            end <= self.pos,
            "slice end {end} is past the cursor {}",
            self.pos
        );
        &self.buf[start..end]
    }

    /// Extract the bytes from `start` up to the cursor.
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        self.slice(start, self.pos)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
