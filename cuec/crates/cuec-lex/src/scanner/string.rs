//! String literal lexing.
//!
//! This module handles the quoted string families (`'…'`, `"…"` and their
//! triple-quoted multi-line forms), raw strings delimited by backticks,
//! escape validation, and the interpolation hand-back protocol.

use super::core::{literal, QuoteInfo, Scanner};
use crate::mode::Mode;
use crate::token::Token;
use crate::unicode::{escape_digit_val, format_char};

const MAX_RUNE: u32 = char::MAX as u32;

impl<'a> Scanner<'a> {
    /// Lexes a literal opened by `quote` at `offs`.
    ///
    /// Two quotes in a row form a complete empty literal; three open a
    /// multi-line literal.
    pub(crate) fn scan_quoted(&mut self, quote: char, offs: usize) -> (Token, String) {
        self.advance();
        let mut count = 1;
        if self.cursor.is(quote) {
            self.advance();
            if !self.cursor.is(quote) {
                return (
                    Token::String,
                    literal(self.cursor.slice(offs, self.cursor.offset()), false),
                );
            }
            self.advance();
            count = 3;
        }
        self.scan_string(offs, QuoteInfo { ch: quote, count })
    }

    /// Lexes a string body up to its closing quotes or the next `\(`.
    ///
    /// The literal runs from `offs` to the closing quotes, or through the
    /// `(` of an interpolation slot, in which case the cursor stays on the
    /// `(` and the quote is pushed for [`Scanner::resume_interpolation`].
    pub(crate) fn scan_string(&mut self, offs: usize, quote: QuoteInfo) -> (Token, String) {
        let multiline = quote.count == 3;
        let mut has_cr = false;

        let (tok, end) = loop {
            let ch = match self.cursor.current() {
                Some(c) if multiline || c != '\n' => c,
                _ => {
                    self.error(offs, "string literal not terminated");
                    break (Token::String, self.cursor.offset());
                },
            };
            self.advance();

            if ch == quote.ch && self.consume_string_close(quote) {
                break (Token::String, self.cursor.offset());
            }
            if ch == '\r' && multiline {
                has_cr = true;
            }
            if ch == '\\' {
                if self.cursor.is('(') {
                    self.quote_stack.push(quote);
                    break (Token::Interpolation, self.cursor.offset() + 1);
                }
                self.scan_escape(quote.ch);
            }
        };

        (tok, literal(self.cursor.slice(offs, end), has_cr))
    }

    /// Consumes the rest of a closing quote sequence, if it is one. The
    /// first quote character has already been consumed.
    fn consume_string_close(&mut self, quote: QuoteInfo) -> bool {
        let more = quote.count - 1;
        let ahead = self.cursor.rest_from(self.cursor.offset());
        let closes = ahead.len() >= more && ahead[..more].iter().all(|&b| char::from(b) == quote.ch);
        if closes {
            for _ in 0..more {
                self.advance();
            }
        }
        closes
    }

    /// Validates the escape sequence after a backslash.
    ///
    /// Returns false after reporting a malformed escape. The offending
    /// character is left for the string loop.
    fn scan_escape(&mut self, quote: char) -> bool {
        let offs = self.cursor.offset();
        let (mut n, base, max) = match self.cursor.current() {
            Some(c) if matches!(c, 'a' | 'b' | 'f' | 'n' | 'r' | 't' | 'v' | '\\' | '/') || c == quote => {
                self.advance();
                return true;
            },
            Some('0'..='7') => (3, 8, 255),
            Some('x') => {
                self.advance();
                (2, 16, 255)
            },
            Some('u') => {
                self.advance();
                (4, 16, MAX_RUNE)
            },
            Some('U') => {
                self.advance();
                (8, 16, MAX_RUNE)
            },
            Some(_) => {
                self.error(offs, "unknown escape sequence");
                return false;
            },
            None => {
                self.error(offs, "escape sequence not terminated");
                return false;
            },
        };

        let mut value: u32 = 0;
        while n > 0 {
            let Some(d) = escape_digit_val(self.cursor.current()).filter(|&d| d < base) else {
                let at = self.cursor.offset();
                let msg = match self.cursor.current() {
                    Some(c) => format!("illegal character {} in escape sequence", format_char(c)),
                    None => "escape sequence not terminated".to_string(),
                };
                self.error(at, &msg);
                return false;
            };
            value = value * base + d;
            self.advance();
            n -= 1;
        }

        if value > max || (0xD800..0xE000).contains(&value) {
            self.error(offs, "escape sequence is invalid Unicode code point");
            return false;
        }
        true
    }

    /// Lexes a backtick raw string. No escapes; carriage returns are
    /// dropped from the literal.
    pub(crate) fn scan_raw_string(&mut self) -> (Token, String) {
        let offs = self.cursor.offset();
        let mut has_cr = false;
        self.advance();

        loop {
            match self.cursor.current() {
                None => {
                    self.error(offs, "raw string literal not terminated");
                    break;
                },
                Some(c) => {
                    self.advance();
                    if c == '`' {
                        break;
                    }
                    if c == '\r' {
                        has_cr = true;
                    }
                },
            }
        }

        (
            Token::String,
            literal(self.cursor.slice(offs, self.cursor.offset()), has_cr),
        )
    }

    /// Continues a string after the parser consumed the `)` closing an
    /// interpolation slot.
    ///
    /// `quote` and `level` name the slot being closed: the quote character
    /// of the enclosing string and the slot's nesting depth, starting at 1.
    /// A mismatch with the scanner's own record is reported as "invalid
    /// interpolation nesting", and scanning resumes with the recorded
    /// quote anyway.
    ///
    /// Returns the text from the `)` up to and including the closing quotes,
    /// or through the `(` of the next slot. Commas are inserted after the
    /// resumed literal as after any string.
    ///
    /// # Example
    ///
    /// ```
    /// use cuec_lex::{Mode, Scanner, Token};
    /// use cuec_util::FileSet;
    ///
    /// let src = br#""a\(x)b""#;
    /// let fset = FileSet::new();
    /// let file = fset.add_file("t.cue", None, src.len()).unwrap();
    /// let mut s = Scanner::new(file, src, None, Mode::empty()).unwrap();
    ///
    /// assert_eq!(s.next_token().2, r#""a\("#);
    /// assert_eq!(s.next_token().1, Token::LParen);
    /// assert_eq!(s.next_token().2, "x");
    /// assert_eq!(s.next_token().1, Token::RParen);
    /// assert_eq!(s.resume_interpolation('"', 1), r#")b""#);
    /// ```
    pub fn resume_interpolation(&mut self, quote: char, level: usize) -> String {
        let offs = self.cursor.offset().saturating_sub(1);
        let depth = self.quote_stack.len();
        let info = match self.quote_stack.pop() {
            Some(info) if info.ch == quote && level == depth => info,
            recorded => {
                self.error(offs, "invalid interpolation nesting");
                recorded.unwrap_or(QuoteInfo { ch: quote, count: 1 })
            },
        };

        let (_, lit) = self.scan_string(offs, info);
        if !self.mode.contains(Mode::DONT_INSERT_COMMAS) {
            self.insert_eol = true;
        }
        lit
    }
}
