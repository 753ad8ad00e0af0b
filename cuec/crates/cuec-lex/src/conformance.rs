//! Conformance tests for cuec-lex
//!
//! Whole-file scans checked token by token: positions, literals, comma
//! insertion, line directives, interpolation hand-back and fault reporting.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{Mode, Scanner, Token};
    use cuec_util::{ErrorList, FileSet, Pos, Position, RelPos};
    use pretty_assertions::assert_eq;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Class {
        Special,
        Literal,
        Operator,
        Keyword,
    }

    fn token_class(tok: Token) -> Class {
        if tok.is_literal() {
            Class::Literal
        } else if tok.is_operator() {
            Class::Operator
        } else if tok.is_keyword() {
            Class::Keyword
        } else {
            Class::Special
        }
    }

    fn strip_cr(s: &str) -> String {
        s.chars().filter(|&c| c != '\r').collect()
    }

    fn newline_count(s: &str) -> usize {
        s.bytes().filter(|&b| b == b'\n').count()
    }

    const TOKENS: &[(Token, &str, Class)] = &[
        // special
        (Token::Comment, "/* a comment */", Class::Special),
        (Token::Comment, "// a comment \n", Class::Special),
        (Token::Comment, "/*\r*/", Class::Special),
        (Token::Comment, "//\r\n", Class::Special),
        // identifiers and basic literals
        (Token::Bottom, "_|_", Class::Literal),
        (Token::Bottom, "_|_", Class::Literal),
        (Token::Ident, "foobar", Class::Literal),
        (Token::Ident, "a۰۱۸", Class::Literal),
        (Token::Ident, "foo६४", Class::Literal),
        (Token::Ident, "bar９８７６", Class::Literal),
        (Token::Ident, "ŝ", Class::Literal),
        (Token::Ident, "ŝfoo", Class::Literal),
        (Token::Int, "0", Class::Literal),
        (Token::Int, "1", Class::Literal),
        (Token::Int, "123456789012345678890", Class::Literal),
        (Token::Int, "12345_67890_12345_6788_90", Class::Literal),
        (Token::Int, "1234567M", Class::Literal),
        (Token::Int, "1234567Mi", Class::Literal),
        (Token::Int, "1234567", Class::Literal),
        (Token::Int, ".3Mi", Class::Literal),
        (Token::Int, "3.3Mi", Class::Literal),
        (Token::Int, "0xcafebabe", Class::Literal),
        (Token::Int, "0b1100_1001", Class::Literal),
        (Token::Int, "0o1234567", Class::Literal),
        (Token::Float, "0.", Class::Literal),
        (Token::Float, ".0", Class::Literal),
        (Token::Float, "3.14159265", Class::Literal),
        (Token::Float, "1e0", Class::Literal),
        (Token::Float, "1e+100", Class::Literal),
        (Token::Float, "1e-100", Class::Literal),
        (Token::Float, "2.71828e-1000", Class::Literal),
        (Token::String, "`aa\n\n`", Class::Literal),
        (Token::String, "'a'", Class::Literal),
        (Token::String, "'\\000'", Class::Literal),
        (Token::String, "'\\xFF'", Class::Literal),
        (Token::String, "'\\uff16'", Class::Literal),
        (Token::String, "'\\U0000ff16'", Class::Literal),
        (Token::String, "'foobar'", Class::Literal),
        (Token::String, "`foo\n\t                        bar`", Class::Literal),
        (Token::String, "`foobar`", Class::Literal),
        (Token::String, "`\r`", Class::Literal),
        (Token::String, "`foo\r\nbar`", Class::Literal),
        (Token::String, "'\\r'", Class::Literal),
        (Token::String, "'foo\\r\\nbar'", Class::Literal),
        (Token::String, "\"foobar\"", Class::Literal),
        (Token::String, "\"\"\"\\n  foobar\\n  \"\"\"", Class::Literal),
        // operators and delimiters
        (Token::Add, "+", Class::Operator),
        (Token::Sub, "-", Class::Operator),
        (Token::Mul, "*", Class::Operator),
        (Token::Quo, "/", Class::Operator),
        (Token::Rem, "%", Class::Operator),
        (Token::Unify, "&", Class::Operator),
        (Token::Disjunction, "|", Class::Operator),
        (Token::Land, "&&", Class::Operator),
        (Token::Lor, "||", Class::Operator),
        (Token::Eql, "==", Class::Operator),
        (Token::Lss, "<", Class::Operator),
        (Token::Gtr, ">", Class::Operator),
        (Token::Bind, "=", Class::Operator),
        (Token::Not, "!", Class::Operator),
        (Token::Neq, "!=", Class::Operator),
        (Token::Leq, "<=", Class::Operator),
        (Token::Geq, ">=", Class::Operator),
        (Token::Ellipsis, "...", Class::Operator),
        (Token::LParen, "(", Class::Operator),
        (Token::LBrack, "[", Class::Operator),
        (Token::LBrace, "{", Class::Operator),
        (Token::Comma, ",", Class::Operator),
        (Token::Semicolon, ";", Class::Operator),
        (Token::Period, ".", Class::Operator),
        (Token::RParen, ")", Class::Operator),
        (Token::RBrack, "]", Class::Operator),
        (Token::RBrace, "}", Class::Operator),
        (Token::Colon, ":", Class::Operator),
        // keywords
        (Token::True, "true", Class::Keyword),
        (Token::False, "false", Class::Keyword),
        (Token::Null, "null", Class::Keyword),
        (Token::For, "for", Class::Keyword),
        (Token::If, "if", Class::Keyword),
        (Token::In, "in", Class::Keyword),
    ];

    const WHITESPACE: &str = "  \t  \n\n\n";

    fn token_source() -> String {
        TOKENS
            .iter()
            .flat_map(|(_, lit, _)| [*lit, WHITESPACE])
            .collect()
    }

    /// Literal the scanner should report for a table entry.
    fn expected_literal(tok: Token, lit: &str) -> String {
        match tok {
            Token::Comment => {
                let lit = strip_cr(lit);
                // a `//` comment stops before its newline
                if lit.as_bytes()[1] == b'/' {
                    lit[..lit.len() - 1].to_string()
                } else {
                    lit
                }
            },
            Token::Comma => ",".to_string(),
            Token::Semicolon => ";".to_string(),
            Token::String if lit.starts_with('`') => strip_cr(lit),
            tok if tok.is_literal() || tok.is_keyword() => lit.to_string(),
            _ => String::new(),
        }
    }

    #[test]
    fn test_scan_every_token() {
        let src = token_source();
        let fset = FileSet::new();
        let file = fset.add_file("", None, src.len()).unwrap();
        let mut s = Scanner::new(
            file,
            src.as_bytes(),
            None,
            Mode::SCAN_COMMENTS | Mode::DONT_INSERT_COMMAS,
        )
        .unwrap();

        let mut want_pos = Position {
            filename: String::new(),
            offset: 0,
            line: 1,
            column: 1,
        };
        let mut entries = TOKENS.iter();
        loop {
            let (pos, tok, lit) = s.next_token();
            if tok == Token::Eof {
                want_pos.line = newline_count(&src);
                want_pos.column = 2;
            }
            assert_eq!(fset.position(pos), want_pos, "position of {lit:?}");

            let (want_tok, want_lit, want_class) = entries
                .next()
                .copied()
                .unwrap_or((Token::Eof, "", Class::Special));
            assert_eq!(tok, want_tok, "token for {lit:?}");
            assert_eq!(token_class(tok), want_class, "class of {lit:?}");
            assert_eq!(lit, expected_literal(want_tok, want_lit));

            if tok == Token::Eof {
                break;
            }
            want_pos.offset += want_lit.len() + WHITESPACE.len();
            want_pos.line += newline_count(want_lit) + newline_count(WHITESPACE);
        }
        assert_eq!(s.error_count(), 0);
    }

    // `#` marks a comma written in the source, `?` a comma the scanner
    // must insert right after it.
    const COMMA_LINES: &[&str] = &[
        "",
        "\u{feff}#,",
        "#,",
        "foo?\n",
        "_foo?\n",
        "123?\n",
        "1.2?\n",
        "'x'?\n",
        "_|_?\n",
        "_|_?\n",
        "\"x\"?\n",
        "`x`?\n",
        "\"\"\"\n\t\tfoo\n\t\t\"\"\"?\n",
        "'''\n\t\tfoo\n\t\t'''?\n",
        "+\n",
        "-\n",
        "*\n",
        "/\n",
        "%\n",
        "&\n",
        "|\n",
        "&&\n",
        "||\n",
        "<-\n",
        "->\n",
        "==\n",
        "<\n",
        ">\n",
        "=\n",
        "!\n",
        "!=\n",
        "<=\n",
        ">=\n",
        ":=\n",
        "...\n",
        "(\n",
        "[\n",
        "[[\n",
        "{\n",
        "{{\n",
        "#,\n",
        ".\n",
        ")?\n",
        "]?\n",
        "]]?\n",
        "}?\n",
        "}}?\n",
        ":\n",
        ";?\n",
        "true?\n",
        "false?\n",
        "null?\n",
        "foo?//comment\n",
        "foo?//comment",
        "foo?/*comment*/\n",
        "foo?/*\n*/",
        "foo?/*comment*/    \n",
        "foo?/*\n*/    ",
        "foo    ?// comment\n",
        "foo    ?// comment",
        "foo    ?/*comment*/\n",
        "foo    ?/*\n*/",
        "foo    ?/*  */ /* \n */ bar?/**/\n",
        "foo    ?/*0*/ /*1*/ /*2*/\n",
        "foo    ?/*comment*/    \n",
        "foo    ?/*0*/ /*1*/ /*2*/    \n",
        "foo\t?/**/ /*-------------*/       /*----\n*/bar       ?/*  \n*/baa?\n",
        "foo    ?/* an EOF terminates a line */",
        "foo    ?/* an EOF terminates a line */ /*",
        "foo    ?/* an EOF terminates a line */ //",
    ];

    fn check_commas(line: &str, mode: Mode) {
        let fset = FileSet::new();
        let file = fset.add_file("TestCommas", None, line.len()).unwrap();
        let mut s = Scanner::new(Arc::clone(&file), line.as_bytes(), None, mode).unwrap();

        let (mut pos, mut tok, mut lit) = s.next_token();
        while tok != Token::Eof {
            if tok == Token::Illegal {
                let want_lit = if lit.starts_with('#') { "," } else { "\n" };
                let mut want_pos = file.position(pos);
                want_pos.offset += 1;
                want_pos.column += 1;

                (pos, tok, lit) = s.next_token();
                assert_eq!(tok, Token::Comma, "{line:?} ({mode:?}): expected a comma");
                assert_eq!(lit, want_lit, "{line:?} ({mode:?})");
                assert_eq!(file.position(pos), want_pos, "{line:?} ({mode:?})");
            } else {
                assert_ne!(tok, Token::Comma, "{line:?} ({mode:?}): unexpected comma");
            }
            (pos, tok, lit) = s.next_token();
        }
    }

    #[test]
    fn test_comma_insertion() {
        for line in COMMA_LINES {
            check_commas(line, Mode::empty());
            check_commas(line, Mode::SCAN_COMMENTS);

            // trailing newlines must not change the outcome
            let mut trimmed = *line;
            while let Some(shorter) = trimmed.strip_suffix('\n') {
                trimmed = shorter;
                check_commas(trimmed, Mode::empty());
                check_commas(trimmed, Mode::SCAN_COMMENTS);
            }
        }
    }

    #[test]
    fn test_relative_positions() {
        let src = "
	package foo

	// comment
	a: /* a */1
	b :    5 /*
	   line one
	   line two
	*/
	c: \"dfs\"
	";
        let want = [
            "newline IDENT    package",
            "blank   IDENT    foo",
            "elided  ,        \n",
            "section COMMENT  // comment",
            "newline IDENT    a",
            "nospace :        ",
            "blank   COMMENT  /* a */",
            "nospace INT      1",
            "elided  ,        \n",
            "newline IDENT    b",
            "blank   :        ",
            "blank   INT      5",
            "elided  ,        \n",
            "blank   COMMENT  /*\n\t   line one\n\t   line two\n\t*/",
            "newline IDENT    c",
            "nospace :        ",
            "blank   STRING   \"dfs\"",
            "elided  ,        \n",
        ];

        let fset = FileSet::new();
        let file = fset.add_file("TestCommas", None, src.len()).unwrap();
        let got: Vec<String> = Scanner::new(file, src.as_bytes(), None, Mode::SCAN_COMMENTS)
            .unwrap()
            .map(|(pos, tok, lit)| format!("{:<7} {:<8} {}", pos.rel_pos(), tok, lit))
            .collect();
        assert_eq!(got, want);
    }

    #[test]
    fn test_line_directives() {
        // one token per segment
        let segments: &[(&str, &str, usize)] = &[
            ("  line1", "dir/TestLineComments", 1),
            ("\nline2", "dir/TestLineComments", 2),
            ("\nline3  //line File1.go:100", "dir/TestLineComments", 3),
            ("\nline4", "dir/TestLineComments", 4),
            ("\n//line File1.go:100\n  line100", "dir/File1.go", 100),
            ("\n//line  \t :42\n  line1", "", 42),
            ("\n//line File2.go:200\n  line200", "dir/File2.go", 200),
            ("\n//line foo\t:42\n  line42", "dir/foo", 42),
            ("\n //line foo:42\n  line44", "dir/foo", 44),
            ("\n//line foo 42\n  line46", "dir/foo", 46),
            ("\n//line foo:42 extra text\n  line48", "dir/foo", 48),
            ("\n//line ./foo:42\n  line42", "dir/foo", 42),
            ("\n//line a/b/c/File1.go:100\n  line100", "dir/a/b/c/File1.go", 100),
            ("\n//line /bar:42\n  line42", "/bar", 42),
        ];
        let src: String = segments.iter().map(|(text, _, _)| *text).collect();

        let fset = FileSet::new();
        let file = fset
            .add_file("dir/TestLineComments", None, src.len())
            .unwrap();
        let mut s = Scanner::new(
            Arc::clone(&file),
            src.as_bytes(),
            None,
            Mode::DONT_INSERT_COMMAS,
        )
        .unwrap();

        for (text, filename, line) in segments {
            let (pos, _, lit) = s.next_token();
            let position = file.position(pos);
            assert_eq!(
                (position.filename.as_str(), position.line),
                (*filename, *line),
                "{lit:?} from segment {text:?}"
            );
        }
        assert_eq!(s.error_count(), 0);
    }

    #[test]
    fn test_reinitialise() {
        let fset = FileSet::new();
        let src1 = "false true { }";
        let f1 = fset.add_file("src1", None, src1.len()).unwrap();
        let mut s = Scanner::new(f1, src1.as_bytes(), None, Mode::DONT_INSERT_COMMAS).unwrap();
        s.next_token();
        s.next_token();
        assert_eq!(s.next_token().1, Token::LBrace);

        let src2 = "null true { ]";
        let f2 = fset.add_file("src2", None, src2.len()).unwrap();
        s.init(f2, src2.as_bytes(), None, Mode::DONT_INSERT_COMMAS)
            .unwrap();
        assert_eq!(s.file().size(), src2.len());
        assert_eq!(s.next_token().1, Token::Null);
        assert_eq!(s.error_count(), 0);
    }

    #[test]
    fn test_interpolation_templates() {
        let trim = |s: &str| {
            s.trim_matches(|c| matches!(c, '"' | '\\' | '(' | ')'))
                .to_string()
        };
        let sources = [
            r#""first\(first)\\second\(second)""#,
            r#""level\( ["foo", "level", level ][2] )end\( end )""#,
            r#""level\( { "foo": 1, "bar": level } )end\(end)""#,
        ];

        for (i, src) in sources.iter().enumerate() {
            let fset = FileSet::new();
            let file = fset.add_file(format!("tsrc{i}"), None, src.len()).unwrap();
            let mut errors = ErrorList::new();
            let mut idents = 0;
            {
                let mut s =
                    Scanner::new(file, src.as_bytes(), Some(&mut errors), Mode::SCAN_COMMENTS)
                        .unwrap();
                let mut depth = 0;
                let mut expected = String::new();
                loop {
                    let (_, tok, lit) = s.next_token();
                    match tok {
                        Token::Eof => break,
                        Token::LParen => depth += 1,
                        Token::RParen => {
                            depth -= 1;
                            if depth == 0 {
                                expected = trim(&s.resume_interpolation('"', 1));
                            }
                        },
                        Token::Interpolation => expected = trim(&lit),
                        Token::Ident => {
                            assert_eq!(lit, expected, "{src}");
                            idents += 1;
                        },
                        _ => {},
                    }
                }
            }
            assert_eq!(idents, 2, "{src}");
            assert!(errors.is_empty(), "{src}: {errors}");
        }
    }

    #[test]
    fn test_error_list_one_per_line() {
        let src = concat!(
            "#\n",
            "# #\n",
            "//line File2:20\n",
            "#\n",
            "//line File2:1\n",
            "# #\n",
            "//line File1:1\n",
            "# # #",
        );

        let fset = FileSet::new();
        let file = fset.add_file("File1", None, src.len()).unwrap();
        let mut list = ErrorList::new();
        let count = {
            let mut s =
                Scanner::new(file, src.as_bytes(), Some(&mut list), Mode::DONT_INSERT_COMMAS)
                    .unwrap();
            while s.next_token().1 != Token::Eof {}
            s.error_count()
        };

        assert_eq!(list.len(), count);
        assert_eq!(list.len(), 9);

        list.sort();
        assert_eq!(list.len(), 9);

        list.remove_multiples();
        let lines: Vec<String> = list
            .iter()
            .map(|d| format!("{}:{}", d.pos.filename, d.pos.line))
            .collect();
        assert_eq!(lines, ["File1:1", "File1:2", "File2:1", "File2:20"]);
    }

    fn check_error(src: &[u8], want_tok: Token, want_offset: usize, want_lit: &str, want_err: &str) {
        let fset = FileSet::new();
        let file = fset.add_file("", None, src.len()).unwrap();
        let mut errors = ErrorList::new();
        let (tok, lit) = {
            let mut s = Scanner::new(
                file,
                src,
                Some(&mut errors),
                Mode::SCAN_COMMENTS | Mode::DONT_INSERT_COMMAS,
            )
            .unwrap();
            let (_, tok, lit) = s.next_token();
            (tok, lit)
        };

        let shown = String::from_utf8_lossy(src);
        assert_eq!(tok, want_tok, "{shown:?}");
        if tok != Token::Illegal {
            assert_eq!(lit, want_lit, "{shown:?}");
        }
        let want_count = usize::from(!want_err.is_empty());
        assert_eq!(errors.len(), want_count, "{shown:?}: {errors}");
        if let Some(last) = errors.iter().last() {
            assert_eq!(last.msg, want_err, "{shown:?}");
            assert_eq!(last.pos.offset, want_offset, "{shown:?}");
        }
    }

    #[test]
    fn test_scan_errors() {
        let quote = "illegal character U+0022 '\"' in escape sequence";
        let cases: &[(&str, Token, usize, &str, &str)] = &[
            ("\u{7}", Token::Illegal, 0, "", "illegal character U+0007"),
            ("?", Token::Illegal, 0, "", "illegal character U+003F '?'"),
            ("…", Token::Illegal, 0, "", "illegal character U+2026 '…'"),
            ("_|", Token::Illegal, 0, "", "illegal token '_|'; expected '_'"),
            (r#""\8""#, Token::String, 2, r#""\8""#, "unknown escape sequence"),
            (
                r#""\08""#,
                Token::String,
                3,
                r#""\08""#,
                "illegal character U+0038 '8' in escape sequence",
            ),
            (r#""\x""#, Token::String, 3, r#""\x""#, quote),
            (r#""\x0""#, Token::String, 4, r#""\x0""#, quote),
            (
                r#""\x0g""#,
                Token::String,
                4,
                r#""\x0g""#,
                "illegal character U+0067 'g' in escape sequence",
            ),
            (r#""\u""#, Token::String, 3, r#""\u""#, quote),
            (r#""\u0""#, Token::String, 4, r#""\u0""#, quote),
            (r#""\u00""#, Token::String, 5, r#""\u00""#, quote),
            (r#""\u000""#, Token::String, 6, r#""\u000""#, quote),
            (r#""\u0000""#, Token::String, 0, r#""\u0000""#, ""),
            (r#""\U""#, Token::String, 3, r#""\U""#, quote),
            (r#""\U0""#, Token::String, 4, r#""\U0""#, quote),
            (r#""\U00""#, Token::String, 5, r#""\U00""#, quote),
            (r#""\U000""#, Token::String, 6, r#""\U000""#, quote),
            (r#""\U0000""#, Token::String, 7, r#""\U0000""#, quote),
            (r#""\U00000""#, Token::String, 8, r#""\U00000""#, quote),
            (r#""\U000000""#, Token::String, 9, r#""\U000000""#, quote),
            (r#""\U0000000""#, Token::String, 10, r#""\U0000000""#, quote),
            (r#""\U00000000""#, Token::String, 0, r#""\U00000000""#, ""),
            (
                r#""\Uffffffff""#,
                Token::String,
                2,
                r#""\Uffffffff""#,
                "escape sequence is invalid Unicode code point",
            ),
            ("'", Token::String, 0, "'", "string literal not terminated"),
            (r#""""#, Token::String, 0, r#""""#, ""),
            (r#""abc"#, Token::String, 0, r#""abc"#, "string literal not terminated"),
            (r#"""abc"#, Token::String, 0, r#""""#, ""),
            (r#""""abc"#, Token::String, 0, r#""""abc"#, "string literal not terminated"),
            ("'''abc", Token::String, 0, "'''abc", "string literal not terminated"),
            ("\"abc\n", Token::String, 0, r#""abc"#, "string literal not terminated"),
            ("\"abc\n   ", Token::String, 0, r#""abc"#, "string literal not terminated"),
            ("``", Token::String, 0, "``", ""),
            ("`", Token::String, 0, "`", "raw string literal not terminated"),
            ("''", Token::String, 0, "''", ""),
            ("/**/", Token::Comment, 0, "/**/", ""),
            ("/*", Token::Comment, 0, "/*", "comment not terminated"),
            ("0", Token::Int, 0, "0", ""),
            ("077", Token::Int, 0, "077", "illegal integer number"),
            ("078.", Token::Float, 0, "078.", ""),
            ("07801234567.", Token::Float, 0, "07801234567.", ""),
            ("078e0", Token::Float, 0, "078e0", ""),
            ("078", Token::Int, 0, "078", "illegal integer number"),
            ("07800000009", Token::Int, 0, "07800000009", "illegal integer number"),
            ("0x", Token::Int, 0, "0x", "illegal hexadecimal number"),
            ("0X", Token::Int, 0, "0X", "illegal hexadecimal number"),
            ("0Xbeef_", Token::Int, 6, "0Xbeef_", "illegal '_' in number"),
            ("0b", Token::Int, 0, "0b", "illegal binary number"),
            ("0o", Token::Int, 0, "0o", "illegal octal number"),
            ("\"abc\0def\"", Token::String, 4, "\"abc\0def\"", "illegal character NUL"),
            ("\u{feff}\u{feff}", Token::Illegal, 3, "", "illegal byte order mark"),
            ("//\u{feff}", Token::Comment, 2, "//\u{feff}", "illegal byte order mark"),
            (
                "\"abc\u{feff}def\"",
                Token::String,
                4,
                "\"abc\u{feff}def\"",
                "illegal byte order mark",
            ),
        ];

        for (src, tok, offset, lit, err) in cases {
            check_error(src.as_bytes(), *tok, *offset, lit, err);
        }

        // undecodable bytes read as U+FFFD
        check_error(
            b"\"abc\x80def\"",
            Token::String,
            4,
            "\"abc\u{fffd}def\"",
            "illegal UTF-8 encoding",
        );
    }

    #[test]
    fn test_skipped_comments_leave_no_literals() {
        let src = "
		a: {
			A: 1 // foo
		}

		b: {
			B: 2
			// foo
		}

		c: 3 // foo

		d: 4
		// foo

		b anycode(): {
		// foo
		}
	";
        let fset = FileSet::new();
        let file = fset.add_file("", None, src.len()).unwrap();
        for (pos, tok, lit) in Scanner::new(file, src.as_bytes(), None, Mode::empty()).unwrap() {
            let class = token_class(tok);
            assert!(
                lit.is_empty()
                    || class == Class::Keyword
                    || class == Class::Literal
                    || tok == Token::Comma,
                "{}: tok = {tok}, lit = {lit:?}",
                fset.position(pos)
            );
        }
    }

    #[test]
    fn test_scanning_with_trace_logging() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();

        let src = "//line gen.cue:10\na: # \"open";
        let fset = FileSet::new();
        let file = fset.add_file("in.cue", None, src.len()).unwrap();
        let mut s = Scanner::new(file, src.as_bytes(), None, Mode::empty()).unwrap();
        while s.next_token().1 != Token::Eof {}
        assert_eq!(s.error_count(), 2);
    }

    // ------------------------------------------------------------------------
    // PROPERTY-BASED TESTS - Using proptest for arbitrary inputs
    // ------------------------------------------------------------------------

    fn scan_collect(fset: &FileSet, src: &[u8], mode: Mode) -> (Vec<(Pos, Token, String)>, usize) {
        let file = fset.add_file("fuzz", None, src.len()).unwrap();
        let mut s = Scanner::new(file, src, None, mode).unwrap();
        let mut toks = Vec::new();
        loop {
            let item = s.next_token();
            if item.1 == Token::Eof {
                break;
            }
            toks.push(item);
            assert!(toks.len() <= 2 * src.len() + 2, "scanner made no progress");
        }
        (toks, s.error_count())
    }

    #[test]
    fn test_property_arbitrary_bytes_reach_eof() {
        use proptest::prelude::*;

        proptest!(|(src in prop::collection::vec(any::<u8>(), 0..256))| {
            let fset = FileSet::new();
            let file = fset.add_file("fuzz", None, src.len()).unwrap();
            let mut errors = ErrorList::new();
            let count = {
                let mut s = Scanner::new(file, &src, Some(&mut errors), Mode::SCAN_COMMENTS).unwrap();
                let mut steps = 0;
                while s.next_token().1 != Token::Eof {
                    steps += 1;
                    assert!(steps <= 2 * src.len() + 2, "scanner made no progress");
                }
                s.error_count()
            };
            assert_eq!(count, errors.len());
        });
    }

    #[test]
    fn test_property_reinit_matches_fresh_scanner() {
        use proptest::prelude::*;

        let text = "[a-z_0-9 \t\n,:{}()\\[\\]\"'`/*#|.\\\\]{0,64}";
        proptest!(|(first in text, second in text)| {
            let fset = FileSet::new();
            let (fresh, fresh_errors) = scan_collect(&fset, second.as_bytes(), Mode::SCAN_COMMENTS);

            let f1 = fset.add_file("first", None, first.len()).unwrap();
            let f2 = fset.add_file("second", None, second.len()).unwrap();
            let mut s = Scanner::new(f1, first.as_bytes(), None, Mode::empty()).unwrap();
            while s.next_token().1 != Token::Eof {}
            s.init(f2, second.as_bytes(), None, Mode::SCAN_COMMENTS).unwrap();

            let mut reused = Vec::new();
            loop {
                let (_, tok, lit) = s.next_token();
                if tok == Token::Eof {
                    break;
                }
                reused.push((tok, lit));
            }
            let fresh: Vec<(Token, String)> =
                fresh.into_iter().map(|(_, tok, lit)| (tok, lit)).collect();
            assert_eq!(reused, fresh);
            assert_eq!(s.error_count(), fresh_errors);
        });
    }

    #[test]
    fn test_property_no_consecutive_inserted_commas() {
        use proptest::prelude::*;

        proptest!(|(src in "[a-z0-9 \t\n,:{}()\\[\\]\"/*#]{0,64}")| {
            let fset = FileSet::new();
            let (toks, _) = scan_collect(&fset, src.as_bytes(), Mode::empty());
            let inserted = |(pos, tok, _): &(Pos, Token, String)| {
                *tok == Token::Comma && pos.rel_pos() == RelPos::Elided
            };
            for pair in toks.windows(2) {
                assert!(
                    !(inserted(&pair[0]) && inserted(&pair[1])),
                    "{src:?}: {pair:?}"
                );
            }
        });
    }
}
