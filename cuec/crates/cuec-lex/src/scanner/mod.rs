//! Scanner module.
//!
//! This module organizes the scanner implementation into smaller, focused components:
//! - `core` - Scanner state, initialisation, dispatch and comma insertion
//! - `identifier` - Identifiers, keywords and `_|_`
//! - `number` - Number literals with radix prefixes and unit suffixes
//! - `string` - Quoted and raw strings, escapes and interpolation resume
//! - `operator` - Operator and punctuation lexing
//! - `comment` - Comments, line directives and the end-of-line lookahead

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::{Interpolation, Scanner};
