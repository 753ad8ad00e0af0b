//! File set for managing source units in a shared offset space.
//!
//! This module provides the [`FileSet`] registry and the [`File`] handles it
//! hands out. Files learn their line starts incrementally while a scanner
//! walks them, and may collect line-directive overrides that rewrite the
//! reported filename and line of everything after them.

use std::sync::Arc;

use parking_lot::RwLock;

use super::{Pos, Position, RelPos};
use crate::error::{FileSetError, FileSetResult};

/// A line-directive override: positions at or after `offset` report
/// `filename`, with the line at `offset` numbered `line`.
#[derive(Clone, Debug, PartialEq, Eq)]
struct LineInfo {
    offset: usize,
    filename: String,
    line: usize,
}

#[derive(Debug)]
struct LineTables {
    /// Offsets of the first byte of each line; always starts with 0
    lines: Vec<usize>,
    /// Overrides ordered by strictly increasing offset
    infos: Vec<LineInfo>,
}

/// A single source unit registered in a [`FileSet`].
///
/// Name, base and size are fixed at registration. The line table and the
/// override list only ever grow, so a `File` can be shared read-only between
/// scanners while the one scanner walking it appends lines.
///
/// # Examples
///
/// ```
/// use cuec_util::pos::{FileSet, RelPos};
///
/// let fset = FileSet::new();
/// let file = fset.add_file("main.cue", None, 10).unwrap();
/// file.add_line(4);
///
/// let position = file.position(file.pos(5, RelPos::NoSpace));
/// assert_eq!((position.line, position.column), (2, 2));
/// ```
#[derive(Debug)]
pub struct File {
    name: String,
    base: usize,
    size: usize,
    tables: RwLock<LineTables>,
}

impl File {
    fn new(name: String, base: usize, size: usize) -> Self {
        Self {
            name,
            base,
            size,
            tables: RwLock::new(LineTables {
                lines: vec![0],
                infos: Vec::new(),
            }),
        }
    }

    /// The file name used at registration.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Start of this file in the file set address space.
    #[inline]
    pub fn base(&self) -> usize {
        self.base
    }

    /// Size of the file in bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of lines discovered so far.
    pub fn line_count(&self) -> usize {
        self.tables.read().lines.len()
    }

    /// A snapshot of the line start table.
    pub fn lines(&self) -> Vec<usize> {
        self.tables.read().lines.clone()
    }

    /// Records the start of a new line.
    ///
    /// The offset is ignored unless it lies past the last recorded line start
    /// and inside the file, which makes repeated calls for the same newline
    /// harmless.
    pub fn add_line(&self, offset: usize) {
        let mut tables = self.tables.write();
        let last = tables.lines.last().copied().unwrap_or(0);
        if last < offset && offset < self.size {
            tables.lines.push(offset);
        }
    }

    /// Installs a line-directive override effective from `offset`.
    ///
    /// Overrides must be added in increasing offset order; out-of-order or
    /// out-of-range records are dropped.
    pub fn add_line_info(&self, offset: usize, filename: impl Into<String>, line: usize) {
        let mut tables = self.tables.write();
        let in_order = tables.infos.last().map_or(true, |last| last.offset < offset);
        if in_order && offset < self.size {
            tables.infos.push(LineInfo {
                offset,
                filename: filename.into(),
                line,
            });
        }
    }

    /// Returns the position for a byte offset in this file.
    ///
    /// Offsets past the end of the file are clamped to the end.
    #[inline]
    pub fn pos(&self, offset: usize, rel: RelPos) -> Pos {
        Pos::new(self.base + offset.min(self.size), rel)
    }

    /// Returns the byte offset of `pos` within this file.
    #[inline]
    pub fn offset(&self, pos: Pos) -> usize {
        pos.index().saturating_sub(self.base).min(self.size)
    }

    /// Resolves `pos`, honouring line directives.
    pub fn position(&self, pos: Pos) -> Position {
        self.resolve(pos, true)
    }

    /// Resolves `pos` against the physical line table only.
    pub fn unadjusted_position(&self, pos: Pos) -> Position {
        self.resolve(pos, false)
    }

    fn resolve(&self, pos: Pos, adjusted: bool) -> Position {
        if !pos.is_valid() {
            return Position::default();
        }
        let offset = self.offset(pos);
        let (filename, line, column) = self.unpack(offset, adjusted);
        Position {
            filename,
            offset,
            line,
            column,
        }
    }

    fn unpack(&self, offset: usize, adjusted: bool) -> (String, usize, usize) {
        let tables = self.tables.read();
        let index = line_index(&tables.lines, offset);
        let mut filename = self.name.clone();
        let mut line = index + 1;
        let column = offset - tables.lines[index] + 1;

        if adjusted {
            let applicable = tables.infos.partition_point(|info| info.offset <= offset);
            if let Some(info) = applicable.checked_sub(1).map(|i| &tables.infos[i]) {
                filename = info.filename.clone();
                let directive_line = line_index(&tables.lines, info.offset);
                // shift so that the line holding `info.offset` reads `info.line`
                line = (line + info.line).saturating_sub(directive_line + 1);
            }
        }
        (filename, line, column)
    }
}

/// Index of the line containing `offset`. `lines` always starts with 0.
fn line_index(lines: &[usize], offset: usize) -> usize {
    lines.partition_point(|&start| start <= offset).saturating_sub(1)
}

#[derive(Debug)]
struct FileSetInner {
    /// Next free base
    base: usize,
    /// Registered files, ordered by base
    files: Vec<Arc<File>>,
}

/// A registry of source files sharing one offset space.
///
/// Files occupy disjoint ranges `[base, base + size]`; the file set is
/// append-only and may be shared across threads.
///
/// # Examples
///
/// ```
/// use cuec_util::pos::FileSet;
///
/// let fset = FileSet::new();
/// let a = fset.add_file("a.cue", None, 10).unwrap();
/// let b = fset.add_file("b.cue", None, 5).unwrap();
/// assert_eq!(a.base(), 1);
/// assert_eq!(b.base(), 12);
/// assert!(fset.add_file("c.cue", Some(3), 1).is_err());
/// ```
#[derive(Debug)]
pub struct FileSet {
    inner: RwLock<FileSetInner>,
}

impl FileSet {
    /// Creates an empty file set.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(FileSetInner {
                base: 1,
                files: Vec::new(),
            }),
        }
    }

    /// The lowest base the next file may use.
    pub fn base(&self) -> usize {
        self.inner.read().base
    }

    /// Registers a new file of `size` bytes.
    ///
    /// With `base == None` the file is placed at [`FileSet::base`]. An explicit
    /// base below that would overlap an existing file and is rejected.
    pub fn add_file(
        &self,
        name: impl Into<String>,
        base: Option<usize>,
        size: usize,
    ) -> FileSetResult<Arc<File>> {
        let name = name.into();
        let mut inner = self.inner.write();
        let base = base.unwrap_or(inner.base);
        if base < inner.base {
            return Err(FileSetError::InvalidBase {
                name,
                base,
                next: inner.base,
            });
        }

        tracing::debug!(name = %name, base, size, "registered file");
        let file = Arc::new(File::new(name, base, size));
        // +1 so that the EOF position of one file differs from the next base
        inner.base = base + size + 1;
        inner.files.push(Arc::clone(&file));
        Ok(file)
    }

    /// Returns the file containing `pos`, if any.
    pub fn file(&self, pos: Pos) -> Option<Arc<File>> {
        if !pos.is_valid() {
            return None;
        }
        let inner = self.inner.read();
        let index = pos.index();
        let after = inner.files.partition_point(|f| f.base() <= index);
        let file = inner.files.get(after.checked_sub(1)?)?;
        (index <= file.base() + file.size()).then(|| Arc::clone(file))
    }

    /// Resolves `pos`, honouring line directives of its file.
    pub fn position(&self, pos: Pos) -> Position {
        self.file(pos)
            .map(|file| file.position(pos))
            .unwrap_or_default()
    }

    /// All registered files in base order.
    pub fn files(&self) -> Vec<Arc<File>> {
        self.inner.read().files.clone()
    }
}

impl Default for FileSet {
    fn default() -> Self {
        Self::new()
    }
}
