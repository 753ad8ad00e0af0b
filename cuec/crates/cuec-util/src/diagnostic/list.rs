//! Ordered fault lists.

use std::fmt;

use super::Diagnostic;
use crate::pos::Position;

/// A list of diagnostics in discovery order.
///
/// [`ErrorList::sort`] imposes a deterministic order and
/// [`ErrorList::remove_multiples`] keeps only the first fault of every
/// physical line.
///
/// # Examples
///
/// ```
/// use cuec_util::diagnostic::ErrorList;
/// use cuec_util::pos::Position;
///
/// let line = |l| Position { filename: "f".into(), offset: 0, line: l, column: 1 };
/// let mut list = ErrorList::new();
/// list.add_new(line(2), "b");
/// list.add_new(line(1), "a");
/// list.add_new(line(2), "c");
///
/// list.remove_multiples();
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.to_string(), "f:1:1: a (and 1 more errors)");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorList {
    errors: Vec<Diagnostic>,
}

impl ErrorList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a fault at `pos`.
    pub fn add_new(&mut self, pos: Position, msg: impl Into<String>) {
        self.errors.push(Diagnostic::new(pos, msg));
    }

    /// Appends an existing diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.errors.push(diagnostic);
    }

    /// Number of collected faults.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Reports whether no fault has been collected.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over the faults in their current order.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.errors.iter()
    }

    /// Drops every fault.
    pub fn reset(&mut self) {
        self.errors.clear();
    }

    /// Sorts by filename, line and column; ties are broken by message.
    pub fn sort(&mut self) {
        self.errors.sort_by(|a, b| {
            let ka = (&a.pos.filename, a.pos.line, a.pos.column, &a.msg);
            let kb = (&b.pos.filename, b.pos.line, b.pos.column, &b.msg);
            ka.cmp(&kb)
        });
    }

    /// Sorts the list and keeps the first fault per (filename, line).
    pub fn remove_multiples(&mut self) {
        self.sort();
        self.errors
            .dedup_by(|b, a| a.pos.filename == b.pos.filename && a.pos.line == b.pos.line);
    }

    /// Returns `Err(self)` if the list holds any fault.
    pub fn err(&self) -> Result<(), ErrorList> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.clone())
        }
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.as_slice() {
            [] => f.write_str("no errors"),
            [only] => write!(f, "{only}"),
            [first, rest @ ..] => write!(f, "{first} (and {} more errors)", rest.len()),
        }
    }
}

impl std::error::Error for ErrorList {}

impl IntoIterator for ErrorList {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
