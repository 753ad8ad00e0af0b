//! cuec-util - Source Positions and Diagnostics
//!
//! This crate provides the foundation the cuec scanner builds on: a registry
//! of source files sharing one offset space, compact positions that resolve
//! to `file:line:column`, and the sink through which lexical faults are
//! reported and collected.
//!
//! # Example Usage
//!
//! ```
//! use cuec_util::{ErrorHandler, ErrorList, FileSet, RelPos};
//!
//! let fset = FileSet::new();
//! let file = fset.add_file("config.cue", None, 16).unwrap();
//! file.add_line(8);
//!
//! let mut errors = ErrorList::new();
//! let pos = file.pos(10, RelPos::NoRelPos);
//! errors.report(fset.position(pos), "illegal character U+0023 '#'");
//!
//! assert_eq!(errors.to_string(), "config.cue:2:3: illegal character U+0023 '#'");
//! ```
//!
//! # Module Structure
//!
//! - [`pos`] - Positions, files and the file set
//! - [`diagnostic`] - Fault sinks and the sortable error list
//! - [`error`] - Errors raised by the file set itself

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod diagnostic;
pub mod error;
pub mod pos;

pub use diagnostic::{Diagnostic, ErrorHandler, ErrorList};
pub use error::{FileSetError, FileSetResult};
pub use pos::{File, FileSet, Pos, Position, RelPos};
