//! Diagnostic module - Lexical fault collection.
//!
//! This module provides the [`ErrorHandler`] sink the scanner reports faults
//! through, and [`ErrorList`], the standard sink that collects them, orders
//! them and collapses cascades down to one diagnostic per line.
//!
//! # Examples
//!
//! ```
//! use cuec_util::diagnostic::{ErrorHandler, ErrorList};
//! use cuec_util::pos::Position;
//!
//! let mut list = ErrorList::new();
//! list.report(Position::default(), "illegal character U+0023 '#'");
//!
//! assert_eq!(list.len(), 1);
//! assert!(list.err().is_err());
//! ```

mod list;

pub use list::ErrorList;

use std::fmt;

use crate::pos::Position;

/// A sink for lexical faults.
///
/// The scanner calls [`ErrorHandler::report`] synchronously, exactly once per
/// fault, in scan order. Any `FnMut(Position, &str)` closure is a handler.
///
/// # Examples
///
/// ```
/// use cuec_util::diagnostic::ErrorHandler;
/// use cuec_util::pos::Position;
///
/// let mut count = 0;
/// let mut handler = |_: Position, _: &str| count += 1;
/// handler.report(Position::default(), "boom");
/// assert_eq!(count, 1);
/// ```
pub trait ErrorHandler {
    /// Records a fault at `pos`.
    fn report(&mut self, pos: Position, msg: &str);
}

impl<F> ErrorHandler for F
where
    F: FnMut(Position, &str),
{
    fn report(&mut self, pos: Position, msg: &str) {
        self(pos, msg)
    }
}

impl ErrorHandler for ErrorList {
    fn report(&mut self, pos: Position, msg: &str) {
        self.add_new(pos, msg);
    }
}

/// A single fault with its resolved position.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    /// Where the fault was detected
    pub pos: Position,
    /// What went wrong
    pub msg: String,
}

impl Diagnostic {
    /// Creates a diagnostic.
    pub fn new(pos: Position, msg: impl Into<String>) -> Self {
        Self {
            pos,
            msg: msg.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.pos.filename.is_empty() || self.pos.is_valid() {
            write!(f, "{}: {}", self.pos, self.msg)
        } else {
            f.write_str(&self.msg)
        }
    }
}

impl std::error::Error for Diagnostic {}
