//! Comment scanning.
//!
//! This module handles `//` and `/* */` comments, the `//line` directives
//! they may carry, and the lookahead that decides whether a pending comma
//! goes before a run of trailing comments.

use super::core::{literal, Scanner};

const LINE_DIRECTIVE: &[u8] = b"//line ";

impl<'a> Scanner<'a> {
    /// Scans a comment starting at the current `/`.
    ///
    /// Returns the comment text with carriage returns removed. A `//`
    /// comment stops before the newline.
    pub(crate) fn scan_comment(&mut self) -> String {
        let offs = self.cursor.offset();
        let mut has_cr = false;
        self.advance();

        if self.cursor.is('/') {
            self.advance();
            while let Some(c) = self.cursor.current() {
                if c == '\n' {
                    break;
                }
                if c == '\r' {
                    has_cr = true;
                }
                self.advance();
            }
            if offs == self.cursor.line_offset() {
                self.interpret_line_comment(offs, self.cursor.offset());
            }
        } else {
            self.advance();
            let mut closed = false;
            while let Some(c) = self.cursor.current() {
                if c == '\r' {
                    has_cr = true;
                }
                self.advance();
                if c == '*' && self.cursor.is('/') {
                    self.advance();
                    closed = true;
                    break;
                }
            }
            if !closed {
                self.error(offs, "comment not terminated");
            }
        }

        literal(self.cursor.slice(offs, self.cursor.offset()), has_cr)
    }

    /// Installs the override of a `//line name:line` comment at the start
    /// of a line. Malformed directives are ignored.
    fn interpret_line_comment(&mut self, start: usize, end: usize) {
        let text = self.cursor.slice(start, end);
        let Some(rest) = text.strip_prefix(LINE_DIRECTIVE) else {
            return;
        };
        let Some(colon) = rest.iter().rposition(|&b| b == b':') else {
            return;
        };
        let line = match std::str::from_utf8(&rest[colon + 1..]).map(str::parse::<usize>) {
            Ok(Ok(line)) if line > 0 => line,
            _ => return,
        };

        let name = String::from_utf8_lossy(&rest[..colon]);
        let name = name.trim();
        let filename = if name.is_empty() {
            String::new()
        } else {
            let cleaned = clean_path(name);
            if cleaned.starts_with('/') {
                cleaned
            } else {
                join_path(&self.dir, &cleaned)
            }
        };

        // the directive describes the line after the comment
        let offset = self.cursor.line_offset() + text.len() + 1;
        tracing::trace!(offset, filename = %filename, line, "line directive");
        self.file.add_line_info(offset, filename, line);
    }

    /// Reports whether only comments remain before the end of the line.
    ///
    /// Looks ahead from the current `/` without moving the cursor. A `//`
    /// comment always reaches the end of the line; so does a block comment
    /// that spans a newline or runs to the end of input.
    pub(crate) fn find_line_end(&self) -> bool {
        let src = self.cursor.rest_from(self.cursor.offset());
        let mut i = 0;

        while src.get(i) == Some(&b'/') {
            match src.get(i + 1) {
                Some(b'/') => return true,
                Some(b'*') => i += 2,
                _ => return false,
            }
            loop {
                match src.get(i) {
                    None => break,
                    Some(b'\n') => return true,
                    Some(b'*') if src.get(i + 1) == Some(&b'/') => {
                        i += 2;
                        break;
                    },
                    Some(_) => i += 1,
                }
            }
            while matches!(src.get(i), Some(b' ' | b'\t' | b'\r')) {
                i += 1;
            }
            match src.get(i) {
                None | Some(b'\n') => return true,
                Some(b'/') => {},
                Some(_) => return false,
            }
        }
        false
    }
}

/// Directory part of a file name, including the trailing `/`.
pub(crate) fn dir_of(name: &str) -> String {
    name.rfind('/')
        .map(|i| name[..=i].to_string())
        .unwrap_or_default()
}

/// Lexically normalises a slash-separated path.
fn clean_path(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {},
            ".." => {
                if parts.last().is_some_and(|last| *last != "..") {
                    parts.pop();
                } else if !rooted {
                    parts.push("..");
                }
            },
            segment => parts.push(segment),
        }
    }

    let joined = parts.join("/");
    if rooted {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

fn join_path(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else {
        clean_path(&format!("{dir}{name}"))
    }
}
