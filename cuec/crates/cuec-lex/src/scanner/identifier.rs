//! Identifier and keyword lexing.

use super::core::{literal, Scanner};
use crate::token::Token;
use crate::unicode::{is_digit, is_letter};

impl<'a> Scanner<'a> {
    /// Scans the rest of an identifier that started at `start`.
    pub(crate) fn scan_identifier(&mut self, start: usize) -> String {
        while self
            .cursor
            .current()
            .is_some_and(|c| is_letter(c) || is_digit(c) || c == '_')
        {
            self.advance();
        }
        literal(self.cursor.slice(start, self.cursor.offset()), false)
    }

    /// Scans a token starting with `_`: bottom, an identifier, or the
    /// malformed `_|`.
    pub(crate) fn scan_underscore(&mut self, start: usize) -> (Token, String) {
        self.advance();
        if !self.cursor.is('|') {
            return (Token::Ident, self.scan_identifier(start));
        }

        self.advance();
        if !self.cursor.is('_') {
            self.error(start, "illegal token '_|'; expected '_'");
            return (Token::Illegal, "_|".to_string());
        }
        self.advance();
        (Token::Bottom, "_|_".to_string())
    }
}
