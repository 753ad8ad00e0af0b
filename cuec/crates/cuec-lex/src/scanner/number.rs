//! Number literal lexing.
//!
//! This module handles integers in all radixes, decimal floats, digit
//! separators and the `K M G T P E` unit suffixes (with an optional `i`
//! for binary scale).

use super::core::{literal, Scanner};
use crate::token::Token;
use crate::unicode::digit_val;

impl<'a> Scanner<'a> {
    /// Lexes a number literal.
    ///
    /// With `seen_decimal_point` the cursor is at a `.` known to be followed
    /// by a digit.
    ///
    /// # Number Formats
    ///
    /// - Decimal: `42`, `1_000`
    /// - Hexadecimal: `0xFF`, binary: `0b1010`, octal: `0o777`
    /// - Float: `3.14`, `.5`, `1e10`, `2.5e-3`, `1E5`
    /// - With unit: `4Ki`, `1.5G`, `.3Mi` (always INT)
    pub(crate) fn scan_number(&mut self, seen_decimal_point: bool) -> (Token, String) {
        let offs = self.cursor.offset();

        if seen_decimal_point {
            self.advance();
            self.scan_mantissa(10, false);
            let tok = self.scan_exponent(Token::Float);
            return (tok, self.number_literal(offs));
        }

        if self.cursor.is('0') {
            self.advance();
            let radix = match self.cursor.current() {
                Some('x' | 'X') => Some((16, "hexadecimal")),
                Some('b' | 'B') => Some((2, "binary")),
                Some('o' | 'O') => Some((8, "octal")),
                _ => None,
            };
            if let Some((base, name)) = radix {
                self.advance();
                self.scan_mantissa(base, true);
                if self.cursor.offset() - offs <= 2 {
                    self.error(offs, &format!("illegal {name} number"));
                }
                return (Token::Int, self.number_literal(offs));
            }

            if matches!(self.cursor.current(), Some('0'..='9' | '_')) {
                // a separator may not follow the leading 0
                self.scan_mantissa(10, true);
            }
            let digits = self.cursor.slice(offs + 1, self.cursor.offset());
            if digits.iter().any(u8::is_ascii_digit) && !self.at_fraction() && !self.at_exponent()
            {
                // only 0 itself may start with 0
                self.error(offs, "illegal integer number");
                return (Token::Int, self.number_literal(offs));
            }
        } else {
            self.scan_mantissa(10, false);
        }

        let tok = self.scan_fraction();
        (tok, self.number_literal(offs))
    }

    fn scan_fraction(&mut self) -> Token {
        let mut tok = Token::Int;
        if self.at_fraction() {
            tok = Token::Float;
            self.advance();
            self.scan_mantissa(10, false);
        }
        self.scan_exponent(tok)
    }

    /// A `.` that is not the first of two periods (`1..2`).
    fn at_fraction(&self) -> bool {
        self.cursor.is('.') && self.cursor.peek() != Some(b'.')
    }

    /// `e` always starts an exponent; `E` only when a digit or sign follows,
    /// otherwise it is the exa unit.
    fn at_exponent(&self) -> bool {
        match self.cursor.current() {
            Some('e') => true,
            Some('E') => matches!(self.cursor.peek(), Some(b'0'..=b'9' | b'+' | b'-')),
            _ => false,
        }
    }

    fn scan_exponent(&mut self, tok: Token) -> Token {
        if self.at_exponent() {
            self.advance();
            if matches!(self.cursor.current(), Some('+' | '-')) {
                self.advance();
            }
            self.scan_mantissa(10, false);
            return Token::Float;
        }

        if matches!(
            self.cursor.current(),
            Some('K' | 'M' | 'G' | 'T' | 'P' | 'E')
        ) {
            self.advance();
            if self.cursor.is('i') {
                self.advance();
            }
            return Token::Int;
        }
        tok
    }

    /// Consumes a run of digits in `base`, including `_` separators.
    ///
    /// A separator may not follow another separator, may not end the run
    /// and, right after a radix prefix, may not start it.
    fn scan_mantissa(&mut self, base: u32, after_prefix: bool) {
        let mut last: Option<char> = None;
        let mut reported = None;

        while digit_val(self.cursor.current()) < base {
            let ch = self.cursor.current();
            if ch == Some('_') && (last == Some('_') || (after_prefix && last.is_none())) {
                let at = self.cursor.offset();
                self.error(at, "illegal '_' in number");
                reported = Some(at);
            }
            last = ch;
            self.advance();
        }

        if last == Some('_') {
            let at = self.cursor.offset() - 1;
            if reported != Some(at) {
                self.error(at, "illegal '_' in number");
            }
        }
    }

    fn number_literal(&self, offs: usize) -> String {
        literal(self.cursor.slice(offs, self.cursor.offset()), false)
    }
}
