//! Token definitions for the cuec scanner.
//!
//! A token is only a tag. The source text backing it travels next to it in
//! the `(Pos, Token, String)` triple returned by
//! [`Scanner::next_token`](crate::Scanner::next_token).

use std::fmt;

/// Lexical tokens of the configuration language.
///
/// # Example
///
/// ```
/// use cuec_lex::Token;
///
/// assert_eq!(Token::lookup("null"), Token::Null);
/// assert_eq!(Token::lookup("package"), Token::Ident);
/// assert_eq!(Token::Land.to_string(), "&&");
/// assert_eq!(Token::Ident.to_string(), "IDENT");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Token {
    // ===== Special =====
    /// An unrecognised character or malformed token
    Illegal,
    /// End of input
    Eof,
    /// A `//` or `/* */` comment
    Comment,

    // ===== Literals =====
    /// Identifier: `foo`, `_bar`, `ŝ`
    Ident,
    /// Integer literal, optionally with a unit suffix: `12`, `0xff`, `4Ki`
    Int,
    /// Floating point literal: `1.5`, `1e10`
    Float,
    /// Complete string literal of any family
    String,
    /// String fragment ending in an interpolation slot `\(`
    Interpolation,
    /// The bottom value `_|_`
    Bottom,

    // ===== Operators =====
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Quo,
    /// `%`
    Rem,
    /// `&`
    Unify,
    /// `|`
    Disjunction,
    /// `&&`
    Land,
    /// `||`
    Lor,
    /// `=`
    Bind,
    /// `==`
    Eql,
    /// `<`
    Lss,
    /// `>`
    Gtr,
    /// `!`
    Not,
    /// `<-`
    Arrow,
    /// `!=`
    Neq,
    /// `<=`
    Leq,
    /// `>=`
    Geq,
    /// `(`
    LParen,
    /// `[`
    LBrack,
    /// `{`
    LBrace,
    /// `,`, written or inserted at a line end
    Comma,
    /// `;`
    Semicolon,
    /// `.`
    Period,
    /// `...`
    Ellipsis,
    /// `)`
    RParen,
    /// `]`
    RBrack,
    /// `}`
    RBrace,
    /// `:`
    Colon,

    // ===== Keywords =====
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// `for`
    For,
    /// `if`
    If,
    /// `in`
    In,
    /// `let`
    Let,
}

impl Token {
    /// Maps an identifier to its keyword token, or [`Token::Ident`].
    pub fn lookup(ident: &str) -> Token {
        match ident {
            "true" => Token::True,
            "false" => Token::False,
            "null" => Token::Null,
            "for" => Token::For,
            "if" => Token::If,
            "in" => Token::In,
            "let" => Token::Let,
            _ => Token::Ident,
        }
    }

    /// Reports whether the token is an identifier or a basic literal.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Token::Ident
                | Token::Int
                | Token::Float
                | Token::String
                | Token::Interpolation
                | Token::Bottom
        )
    }

    /// Reports whether the token is an operator or delimiter.
    pub fn is_operator(self) -> bool {
        (Token::Add..=Token::Colon).contains(&self)
    }

    /// Reports whether the token is a keyword.
    pub fn is_keyword(self) -> bool {
        (Token::True..=Token::Let).contains(&self)
    }

    /// Binding strength of a binary operator; 0 for everything else.
    ///
    /// ```
    /// use cuec_lex::Token;
    ///
    /// assert!(Token::Mul.precedence() > Token::Add.precedence());
    /// assert!(Token::Unify.precedence() > Token::Disjunction.precedence());
    /// assert_eq!(Token::Not.precedence(), 0);
    /// ```
    pub fn precedence(self) -> u8 {
        match self {
            Token::Disjunction => 1,
            Token::Unify => 2,
            Token::Lor => 3,
            Token::Land => 4,
            Token::Eql | Token::Neq | Token::Lss | Token::Leq | Token::Gtr | Token::Geq => 5,
            Token::Add | Token::Sub => 6,
            Token::Mul | Token::Quo | Token::Rem => 7,
            _ => 0,
        }
    }

    /// Source spelling of operators and keywords, class name otherwise.
    pub fn as_str(self) -> &'static str {
        match self {
            Token::Illegal => "ILLEGAL",
            Token::Eof => "EOF",
            Token::Comment => "COMMENT",
            Token::Ident => "IDENT",
            Token::Int => "INT",
            Token::Float => "FLOAT",
            Token::String => "STRING",
            Token::Interpolation => "INTERPOLATION",
            Token::Bottom => "_|_",
            Token::Add => "+",
            Token::Sub => "-",
            Token::Mul => "*",
            Token::Quo => "/",
            Token::Rem => "%",
            Token::Unify => "&",
            Token::Disjunction => "|",
            Token::Land => "&&",
            Token::Lor => "||",
            Token::Bind => "=",
            Token::Eql => "==",
            Token::Lss => "<",
            Token::Gtr => ">",
            Token::Not => "!",
            Token::Arrow => "<-",
            Token::Neq => "!=",
            Token::Leq => "<=",
            Token::Geq => ">=",
            Token::LParen => "(",
            Token::LBrack => "[",
            Token::LBrace => "{",
            Token::Comma => ",",
            Token::Semicolon => ";",
            Token::Period => ".",
            Token::Ellipsis => "...",
            Token::RParen => ")",
            Token::RBrack => "]",
            Token::RBrace => "}",
            Token::Colon => ":",
            Token::True => "true",
            Token::False => "false",
            Token::Null => "null",
            Token::For => "for",
            Token::If => "if",
            Token::In => "in",
            Token::Let => "let",
        }
    }

    /// Reports whether a newline after this token ends a declaration.
    pub(crate) fn ends_line(self) -> bool {
        matches!(
            self,
            Token::Ident
                | Token::True
                | Token::False
                | Token::Null
                | Token::Int
                | Token::Float
                | Token::String
                | Token::Bottom
                | Token::Semicolon
                | Token::RParen
                | Token::RBrack
                | Token::RBrace
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
