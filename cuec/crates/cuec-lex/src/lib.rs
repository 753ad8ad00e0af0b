//! cuec-lex - Lexical Scanner for the Cue Configuration Language
//!
//! This crate turns configuration source text into a stream of tokens for
//! the parser. Each token comes with a compact position into a
//! [`cuec_util::FileSet`] and the literal source text that produced it.
//!
//! # Overview
//!
//! The scanner is restartable and never gives up on bad input: lexical
//! faults are handed to an optional [`cuec_util::ErrorHandler`], counted, and
//! scanning continues with the next token. Like Go and the languages derived
//! from it, the grammar uses commas as separators and lets the scanner insert
//! them at line ends, so that most configurations need none written out.
//!
//! # Example Usage
//!
//! ```
//! use cuec_lex::{Mode, Scanner, Token};
//! use cuec_util::{ErrorList, FileSet};
//!
//! let src = b"port: 8080\nname: \"web\"\n";
//! let fset = FileSet::new();
//! let file = fset.add_file("service.cue", None, src.len()).unwrap();
//! let mut errors = ErrorList::new();
//!
//! let mut scanner = Scanner::new(file, src, Some(&mut errors), Mode::empty()).unwrap();
//! let (pos, tok, lit) = scanner.next_token();
//! assert_eq!((tok, lit.as_str()), (Token::Ident, "port"));
//! assert_eq!(fset.position(pos).to_string(), "service.cue:1:1");
//!
//! let rest: Vec<Token> = scanner.map(|(_, tok, _)| tok).collect();
//! assert_eq!(rest[2], Token::Comma);
//! assert!(errors.is_empty());
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`scanner`] - Main scanner implementation
//! - [`cursor`] - Rune cursor over the source bytes
//! - [`mode`] - Scanner mode flags and their serde form
//! - [`unicode`] - Character classes and escape digit helpers
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `true`, `false`, `null`, `for`, `if`, `in`, `let`
//!
//! ## Literals
//!
//! - **Integer**: `42`, `1_000`, `0xFF`, `0b1010`, `0o777`, `4Ki`, `1.5G`
//! - **Float**: `3.14`, `.5`, `1e10`, `1E5`, `2.5e-3`
//! - **String**: `"hello"`, `'bytes'`, `"""` multi-line `"""`, `` `raw` ``
//! - **Interpolation**: the part of a string up to a `\(` slot
//! - **Bottom**: `_|_`
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `%`
//! - **Comparison**: `==`, `!=`, `<`, `>`, `<=`, `>=`
//! - **Logical**: `&&`, `||`, `!`
//! - **Values**: `&` (unify), `|` (disjunction), `=`, `<-`
//!
//! ## Delimiters
//!
//! `(`, `)`, `[`, `]`, `{`, `}`, `,`, `;`, `.`, `...`, `:`
//!
//! # Comma Insertion
//!
//! A newline or the end of input after an identifier, a basic literal,
//! `true`, `false`, `null`, `_|_`, `;`, `)`, `]` or `}` produces a [`Token::Comma`]
//! whose literal is `"\n"` and whose position is marked
//! [`cuec_util::RelPos::Elided`]. [`Mode::DONT_INSERT_COMMAS`] turns this off.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod mode;
pub mod scanner;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod conformance;

// Re-export main types for convenience
pub use mode::{Mode, ScanConfig};
pub use scanner::{Interpolation, Scanner};
pub use token::Token;
