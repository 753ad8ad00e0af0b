//! Position module - Source location tracking.
//!
//! This module provides the compact [`Pos`] handle handed out by the scanner,
//! the [`RelPos`] classification of a token against its predecessor, and the
//! human-readable [`Position`] a `Pos` resolves to through the [`FileSet`]
//! that produced it.
//!
//! # Examples
//!
//! ```
//! use cuec_util::pos::{FileSet, RelPos};
//!
//! let fset = FileSet::new();
//! let file = fset.add_file("a.cue", None, 12).unwrap();
//! file.add_line(6);
//!
//! let pos = file.pos(8, RelPos::Blank);
//! let position = fset.position(pos);
//! assert_eq!(position.to_string(), "a.cue:2:3");
//! ```

mod file_set;

pub use file_set::{File, FileSet};

use std::fmt;

/// Relative position of a token with respect to the token before it.
///
/// Tools that re-render source use this to reproduce the original layout
/// without keeping the whitespace around.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RelPos {
    /// No relative position information
    #[default]
    NoRelPos,
    /// The token was synthesized and has no source text (an inserted comma)
    Elided,
    /// The token immediately follows its predecessor
    NoSpace,
    /// Spaces or tabs separate the token from its predecessor
    Blank,
    /// The token starts on the line after its predecessor
    Newline,
    /// At least one blank line separates the token from its predecessor
    NewSection,
}

impl RelPos {
    /// Name used when printing the classification.
    pub fn as_str(self) -> &'static str {
        match self {
            RelPos::NoRelPos => "invalid",
            RelPos::Elided => "elided",
            RelPos::NoSpace => "nospace",
            RelPos::Blank => "blank",
            RelPos::Newline => "newline",
            RelPos::NewSection => "section",
        }
    }
}

impl fmt::Display for RelPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad so `{:<7}` lines up token dumps
        f.pad(self.as_str())
    }
}

/// A compact, opaque source position.
///
/// A `Pos` is an offset into the flat address space of a [`FileSet`] plus the
/// token's [`RelPos`]. It is only meaningful when resolved through the file
/// set that produced it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pos {
    /// Offset in the file set address space; 0 means "no position"
    index: usize,
    rel: RelPos,
}

impl Pos {
    /// The invalid position.
    pub const NONE: Pos = Pos {
        index: 0,
        rel: RelPos::NoRelPos,
    };

    #[inline]
    pub(crate) const fn new(index: usize, rel: RelPos) -> Self {
        Self { index, rel }
    }

    /// Offset of this position in the file set address space.
    #[inline]
    pub const fn index(self) -> usize {
        self.index
    }

    /// Reports whether the position refers to a file.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.index != 0
    }

    /// The relative position of the token.
    #[inline]
    pub const fn rel_pos(self) -> RelPos {
        self.rel
    }

    /// Returns a copy of this position with a different relative position.
    #[inline]
    pub const fn with_rel(self, rel: RelPos) -> Self {
        Self {
            index: self.index,
            rel,
        }
    }
}

/// A resolved source location.
///
/// # Examples
///
/// ```
/// use cuec_util::pos::Position;
///
/// let pos = Position {
///     filename: "config.cue".to_string(),
///     offset: 14,
///     line: 2,
///     column: 5,
/// };
/// assert_eq!(pos.to_string(), "config.cue:2:5");
/// assert_eq!(Position::default().to_string(), "-");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// Filename, possibly rewritten by a line directive
    pub filename: String,
    /// Byte offset within the file, starting at 0
    pub offset: usize,
    /// Line number, starting at 1
    pub line: usize,
    /// Column number in bytes, starting at 1
    pub column: usize,
}

impl Position {
    /// Reports whether the position carries line information.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.line > 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.filename.is_empty(), self.is_valid()) {
            (false, true) => write!(f, "{}:{}:{}", self.filename, self.line, self.column),
            (true, true) => write!(f, "{}:{}", self.line, self.column),
            (false, false) => f.write_str(&self.filename),
            (true, false) => f.write_str("-"),
        }
    }
}
