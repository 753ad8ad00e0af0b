//! Operator and punctuation lexing.
//!
//! This module handles operators, delimiters and stray characters that do
//! not start any token.

use super::core::Scanner;
use crate::token::Token;
use crate::unicode::{format_char, BOM};

impl<'a> Scanner<'a> {
    /// Lexes the operator or delimiter starting with `c` at `offset`.
    ///
    /// Anything else is returned as [`Token::Illegal`] with the character as
    /// its literal.
    pub(crate) fn scan_operator(&mut self, c: char, offset: usize) -> (Token, String) {
        self.advance();
        let tok = match c {
            '+' => Token::Add,
            '-' => Token::Sub,
            '*' => Token::Mul,
            '/' => Token::Quo,
            '%' => Token::Rem,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '[' => Token::LBrack,
            ']' => Token::RBrack,
            '{' => Token::LBrace,
            '}' => Token::RBrace,
            ':' => Token::Colon,
            ',' => return (Token::Comma, ",".to_string()),
            ';' => return (Token::Semicolon, ";".to_string()),
            '.' => self.scan_period(),
            '&' => self.follow('&', Token::Land, Token::Unify),
            '|' => self.follow('|', Token::Lor, Token::Disjunction),
            '=' => self.follow('=', Token::Eql, Token::Bind),
            '!' => self.follow('=', Token::Neq, Token::Not),
            '>' => self.follow('=', Token::Geq, Token::Gtr),
            '<' => {
                if self.cursor.is('-') {
                    self.advance();
                    Token::Arrow
                } else {
                    self.follow('=', Token::Leq, Token::Lss)
                }
            },
            _ => return self.illegal_character(c, offset),
        };
        (tok, String::new())
    }

    /// Handles: `.`, `...`
    fn scan_period(&mut self) -> Token {
        if self.cursor.is('.') && self.cursor.peek() == Some(b'.') {
            self.advance();
            self.advance();
            Token::Ellipsis
        } else {
            Token::Period
        }
    }

    /// Returns `two` after consuming `next` if it follows, otherwise `one`.
    fn follow(&mut self, next: char, two: Token, one: Token) -> Token {
        if self.cursor.is(next) {
            self.advance();
            two
        } else {
            one
        }
    }

    fn illegal_character(&mut self, c: char, offset: usize) -> (Token, String) {
        // NUL, stray BOMs and undecodable bytes were reported while reading
        let undecodable =
            c == char::REPLACEMENT_CHARACTER && self.cursor.offset() - offset == 1;
        if c != BOM && c != '\0' && !undecodable {
            self.error(offset, &format!("illegal character {}", format_char(c)));
        }
        (Token::Illegal, c.to_string())
    }
}
