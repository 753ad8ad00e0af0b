//! Core error types for cuec-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for file set operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileSetError {
    /// The requested base overlaps a file that is already registered
    #[error("invalid base {base} for file {name:?}: next free base is {next}")]
    InvalidBase {
        /// Name of the file being added
        name: String,
        /// Requested base offset
        base: usize,
        /// Lowest base that does not collide with an existing file
        next: usize,
    },

    /// The file size does not match the source handed to a scanner
    #[error("file {name:?} has size {file_size}, but source is {src_len} bytes")]
    SizeMismatch {
        /// Name of the registered file
        name: String,
        /// Size recorded when the file was added
        file_size: usize,
        /// Length of the source slice
        src_len: usize,
    },
}

/// Result type alias for file set operations
pub type FileSetResult<T> = std::result::Result<T, FileSetError>;
