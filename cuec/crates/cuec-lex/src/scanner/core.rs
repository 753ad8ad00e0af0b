//! Core scanner implementation.
//!
//! This module contains the main Scanner struct, its (re)initialisation,
//! the token dispatch loop and the comma insertion rule.

use std::sync::Arc;

use cuec_util::{ErrorHandler, File, FileSetError, FileSetResult, Pos, RelPos};

use crate::cursor::{Cursor, Step};
use crate::mode::Mode;
use crate::token::Token;
use crate::unicode::{is_letter, BOM};

/// The quote that opened a string literal and how many times it was repeated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct QuoteInfo {
    pub(crate) ch: char,
    /// 1 for single-line literals, 3 for multi-line ones
    pub(crate) count: usize,
}

/// An interpolation slot the scanner is waiting to have closed.
///
/// Obtained from [`Scanner::interpolation`] right after an
/// [`Token::Interpolation`] token and handed back through
/// [`Scanner::resume`] once the parser has consumed the slot's closing `)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interpolation {
    /// Quote character of the enclosing string
    pub quote: char,
    /// Number of quote characters delimiting the string (1 or 3)
    pub quotes: usize,
    /// Nesting level of the slot, starting at 1
    pub level: usize,
}

/// Scanner for configuration source text.
///
/// The scanner walks one [`File`]'s bytes and returns `(Pos, Token, String)`
/// triples until [`Token::Eof`]. Lexical faults go to the optional
/// [`ErrorHandler`] and never stop the scan.
///
/// # Example
///
/// ```
/// use cuec_lex::{Mode, Scanner, Token};
/// use cuec_util::FileSet;
///
/// let src = b"a: 1\nb: \"x\"";
/// let fset = FileSet::new();
/// let file = fset.add_file("example.cue", None, src.len()).unwrap();
/// let mut scanner = Scanner::new(file, src, None, Mode::empty()).unwrap();
///
/// let tokens: Vec<Token> = scanner.by_ref().map(|(_, tok, _)| tok).collect();
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Ident, Token::Colon, Token::Int, Token::Comma,
///         Token::Ident, Token::Colon, Token::String, Token::Comma,
///     ]
/// );
/// assert_eq!(scanner.error_count(), 0);
/// ```
pub struct Scanner<'a> {
    /// File being scanned; receives line starts and line directives.
    pub(crate) file: Arc<File>,

    /// Directory part of the file name, including the trailing separator.
    pub(crate) dir: String,

    /// Cursor over the source bytes.
    pub(crate) cursor: Cursor<'a>,

    /// Sink for lexical faults.
    handler: Option<&'a mut dyn ErrorHandler>,

    pub(crate) mode: Mode,

    /// Whitespace seen since the last returned token.
    lines_since_last: usize,
    spaces_since_last: usize,

    /// Whether a newline or EOF at this point produces a comma.
    pub(crate) insert_eol: bool,

    /// Quotes of the strings with an open interpolation slot, innermost last.
    pub(crate) quote_stack: Vec<QuoteInfo>,

    error_count: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over `src`, which must be the contents of `file`.
    ///
    /// # Errors
    ///
    /// [`FileSetError::SizeMismatch`] when `src` is not exactly as long as
    /// the size `file` was registered with.
    pub fn new(
        file: Arc<File>,
        src: &'a [u8],
        handler: Option<&'a mut dyn ErrorHandler>,
        mode: Mode,
    ) -> FileSetResult<Self> {
        check_size(&file, src)?;
        let mut scanner = Self {
            dir: super::comment::dir_of(file.name()),
            file,
            cursor: Cursor::new(src),
            handler,
            mode,
            lines_since_last: 0,
            spaces_since_last: 0,
            insert_eol: false,
            quote_stack: Vec::new(),
            error_count: 0,
        };
        scanner.start();
        Ok(scanner)
    }

    /// Prepares the scanner to scan a different file from the beginning.
    ///
    /// Every piece of state from the previous scan is discarded, including
    /// the fault count and any open interpolation slots.
    ///
    /// # Errors
    ///
    /// [`FileSetError::SizeMismatch`] as for [`Scanner::new`]; the scanner
    /// is left untouched in that case.
    pub fn init(
        &mut self,
        file: Arc<File>,
        src: &'a [u8],
        handler: Option<&'a mut dyn ErrorHandler>,
        mode: Mode,
    ) -> FileSetResult<()> {
        check_size(&file, src)?;
        self.dir = super::comment::dir_of(file.name());
        self.file = file;
        self.cursor = Cursor::new(src);
        self.handler = handler;
        self.mode = mode;
        self.lines_since_last = 0;
        self.spaces_since_last = 0;
        self.insert_eol = false;
        self.quote_stack.clear();
        self.error_count = 0;
        self.start();
        Ok(())
    }

    fn start(&mut self) {
        self.advance();
        if self.cursor.is(BOM) {
            self.advance();
        }
        tracing::debug!(
            file = %self.file.name(),
            size = self.file.size(),
            mode = ?self.mode,
            "scanner initialised"
        );
    }

    /// The file being scanned.
    pub fn file(&self) -> &Arc<File> {
        &self.file
    }

    /// Number of faults encountered since the last initialisation.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Moves to the next rune, recording line starts and decoding faults.
    pub(crate) fn advance(&mut self) {
        let Step { line_start, fault } = self.cursor.advance();
        if let Some(offset) = line_start {
            self.file.add_line(offset);
        }
        if let Some((offset, fault)) = fault {
            self.error(offset, &fault.to_string());
        }
    }

    /// Reports a fault at a byte offset of the current file.
    pub(crate) fn error(&mut self, offset: usize, msg: &str) {
        self.error_count += 1;
        tracing::trace!(file = %self.file.name(), offset, msg, "lexical fault");
        if let Some(handler) = self.handler.as_deref_mut() {
            let position = self.file.position(self.file.pos(offset, RelPos::NoRelPos));
            handler.report(position, msg);
        }
    }

    /// Returns the next token.
    ///
    /// At the end of input the scanner keeps returning [`Token::Eof`]. The
    /// literal is the token's source text for identifiers, keywords, basic
    /// literals and comments, `","` for a written comma, `"\n"` for an
    /// inserted one and empty for all other tokens.
    pub fn next_token(&mut self) -> (Pos, Token, String) {
        loop {
            self.skip_whitespace();

            let rel = self.rel_pos();
            let offset = self.cursor.offset();
            let pos = self.file.pos(offset, rel);

            let (tok, lit) = match self.cursor.current() {
                Some(c) if is_letter(c) => {
                    let lit = self.scan_identifier(offset);
                    let tok = if lit.len() > 1 {
                        Token::lookup(&lit)
                    } else {
                        Token::Ident
                    };
                    (tok, lit)
                },
                Some(c) if c.is_ascii_digit() => self.scan_number(false),
                None => {
                    if self.insert_eol {
                        self.insert_eol = false;
                        return (self.elided(offset), Token::Comma, "\n".to_string());
                    }
                    (Token::Eof, String::new())
                },
                Some('\n') => {
                    // only reached with a comma pending
                    self.insert_eol = false;
                    let elided = self.elided(offset);
                    self.advance();
                    self.skip_whitespace();
                    if self.cursor.is(',') {
                        continue;
                    }
                    return (elided, Token::Comma, "\n".to_string());
                },
                Some('/') if matches!(self.cursor.peek(), Some(b'/' | b'*')) => {
                    if self.insert_eol && self.find_line_end() {
                        self.insert_eol = false;
                        return (self.elided(offset), Token::Comma, "\n".to_string());
                    }
                    let comment = self.scan_comment();
                    if !self.mode.contains(Mode::SCAN_COMMENTS) {
                        self.insert_eol = false;
                        continue;
                    }
                    (Token::Comment, comment)
                },
                Some('_') => self.scan_underscore(offset),
                Some(quote @ ('"' | '\'')) => self.scan_quoted(quote, offset),
                Some('`') => self.scan_raw_string(),
                Some('.') if matches!(self.cursor.peek(), Some(b'0'..=b'9')) => {
                    self.scan_number(true)
                },
                Some(c) => self.scan_operator(c, offset),
            };

            self.insert_eol = if self.mode.contains(Mode::DONT_INSERT_COMMAS) {
                false
            } else if tok == Token::Illegal {
                self.insert_eol
            } else {
                tok.ends_line()
            };
            self.lines_since_last = 0;
            self.spaces_since_last = 0;
            return (pos, tok, lit);
        }
    }

    /// The innermost interpolation slot still waiting to be closed.
    pub fn interpolation(&self) -> Option<Interpolation> {
        self.quote_stack.last().map(|quote| Interpolation {
            quote: quote.ch,
            quotes: quote.count,
            level: self.quote_stack.len(),
        })
    }

    /// Resumes string scanning for a slot returned by
    /// [`Scanner::interpolation`]. See [`Scanner::resume_interpolation`].
    pub fn resume(&mut self, state: Interpolation) -> String {
        self.resume_interpolation(state.quote, state.level)
    }

    fn elided(&self, offset: usize) -> Pos {
        self.file.pos(offset, RelPos::Elided)
    }

    fn rel_pos(&self) -> RelPos {
        match (self.lines_since_last, self.spaces_since_last) {
            (lines, _) if lines > 1 => RelPos::NewSection,
            (1, _) => RelPos::Newline,
            (_, spaces) if spaces > 0 => RelPos::Blank,
            _ => RelPos::NoSpace,
        }
    }

    /// Skips blanks. Stops at a newline when a comma is pending.
    fn skip_whitespace(&mut self) {
        loop {
            match self.cursor.current() {
                Some(' ' | '\t') => self.spaces_since_last += 1,
                Some('\n') => {
                    self.lines_since_last += 1;
                    if self.insert_eol {
                        return;
                    }
                },
                Some('\r') => {},
                _ => return,
            }
            self.advance();
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = (Pos, Token, String);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.next_token();
        (item.1 != Token::Eof).then_some(item)
    }
}

fn check_size(file: &File, src: &[u8]) -> FileSetResult<()> {
    if file.size() == src.len() {
        Ok(())
    } else {
        Err(FileSetError::SizeMismatch {
            name: file.name().to_string(),
            file_size: file.size(),
            src_len: src.len(),
        })
    }
}

/// Converts literal bytes to text, dropping carriage returns if asked to.
pub(crate) fn literal(bytes: &[u8], strip_cr: bool) -> String {
    if strip_cr {
        let kept: Vec<u8> = bytes.iter().copied().filter(|&b| b != b'\r').collect();
        String::from_utf8_lossy(&kept).into_owned()
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    }
}
