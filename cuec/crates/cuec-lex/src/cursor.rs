//! Byte cursor for traversing source text.
//!
//! This module provides the `Cursor` struct which walks raw source bytes one
//! rune at a time. Source is not required to be valid UTF-8: undecodable
//! bytes become U+FFFD one byte at a time, and the cursor reports them
//! together with NUL bytes and misplaced byte order marks as [`Fault`]s for
//! the scanner to forward.

use std::fmt;

use crate::unicode::{decode_rune, BOM};

/// A per-rune fault detected while decoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fault {
    /// A NUL byte
    Nul,
    /// A byte sequence that is not valid UTF-8
    InvalidUtf8,
    /// A byte order mark anywhere but offset 0
    Bom,
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Fault::Nul => "illegal character NUL",
            Fault::InvalidUtf8 => "illegal UTF-8 encoding",
            Fault::Bom => "illegal byte order mark",
        })
    }
}

/// What happened while moving to the next rune.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Step {
    /// Offset of a line that starts at the new rune
    pub line_start: Option<usize>,
    /// Decoding fault at the new rune, with its offset
    pub fault: Option<(usize, Fault)>,
}

/// A cursor over source bytes.
///
/// The cursor always holds one decoded rune, `current()`, located at
/// `offset()`. `None` marks the end of input.
///
/// # Example
///
/// ```
/// use cuec_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("aŝ\n".as_bytes());
/// cursor.advance();
/// assert_eq!(cursor.current(), Some('a'));
/// cursor.advance();
/// assert_eq!((cursor.current(), cursor.offset()), (Some('ŝ'), 1));
/// cursor.advance();
/// assert_eq!(cursor.offset(), 3);
/// cursor.advance();
/// assert_eq!(cursor.current(), None);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source bytes being traversed.
    src: &'a [u8],

    /// Current rune, `None` at the end of input.
    ch: Option<char>,

    /// Offset of the current rune.
    offset: usize,

    /// Offset of the byte after the current rune.
    rd_offset: usize,

    /// Offset of the first byte of the current line.
    line_offset: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned before the first rune.
    ///
    /// Call [`Cursor::advance`] once to load the first rune.
    pub fn new(src: &'a [u8]) -> Self {
        Self {
            src,
            ch: Some(' '),
            offset: 0,
            rd_offset: 0,
            line_offset: 0,
        }
    }

    /// Moves to the next rune.
    pub fn advance(&mut self) -> Step {
        let mut step = Step::default();
        let prev = self.ch;

        if self.rd_offset >= self.src.len() {
            self.offset = self.src.len();
            if prev == Some('\n') {
                self.line_offset = self.offset;
                step.line_start = Some(self.offset);
            }
            self.ch = None;
            return step;
        }

        self.offset = self.rd_offset;
        if prev == Some('\n') {
            self.line_offset = self.offset;
            step.line_start = Some(self.offset);
        }

        let (ch, width) = match self.src[self.rd_offset] {
            0 => {
                step.fault = Some((self.offset, Fault::Nul));
                ('\0', 1)
            }
            b if b.is_ascii() => (b as char, 1),
            _ => match decode_rune(&self.src[self.rd_offset..]) {
                Some((BOM, width)) if self.offset > 0 => {
                    step.fault = Some((self.offset, Fault::Bom));
                    (BOM, width)
                }
                Some(decoded) => decoded,
                None => {
                    step.fault = Some((self.offset, Fault::InvalidUtf8));
                    (char::REPLACEMENT_CHARACTER, 1)
                }
            },
        };

        self.rd_offset += width;
        self.ch = Some(ch);
        step
    }

    /// The current rune.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.ch
    }

    /// Reports whether the current rune is `c`.
    #[inline]
    pub fn is(&self, c: char) -> bool {
        self.ch == Some(c)
    }

    /// Offset of the current rune.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Offset where the current line starts.
    #[inline]
    pub fn line_offset(&self) -> usize {
        self.line_offset
    }

    /// The byte after the current rune, without decoding it.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.src.get(self.rd_offset).copied()
    }

    /// Source bytes from `offset` to the end.
    #[inline]
    pub fn rest_from(&self, offset: usize) -> &'a [u8] {
        self.src.get(offset..).unwrap_or_default()
    }

    /// Source bytes in `start..end`.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        self.src.get(start..end).unwrap_or_default()
    }

    /// Total length of the source.
    #[inline]
    pub fn len(&self) -> usize {
        self.src.len()
    }

    /// Reports whether the source is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.src.is_empty()
    }
}
