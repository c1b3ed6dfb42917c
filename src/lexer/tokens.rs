use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        // data types
        map.insert("count", TokenKind::Int);
        map.insert("glyph", TokenKind::Char);
        map.insert("fraction", TokenKind::Float);
        map.insert("twofold", TokenKind::Double);
        map.insert("verdict", TokenKind::Bool);
        map.insert("naught", TokenKind::Void);
        // noise words
        map.insert("volatile", TokenKind::Volatile);
        map.insert("register", TokenKind::Register);
        // stdin and stdout
        map.insert("sayeth", TokenKind::Out);
        map.insert("heareth", TokenKind::In);
        // declarations
        map.insert("fn", TokenKind::Function);
        map.insert("maketh", TokenKind::Let);
        // booleans
        map.insert("yay", TokenKind::True);
        map.insert("nay", TokenKind::False);
        // control flow
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("whilst", TokenKind::While);
        map.insert("for", TokenKind::For);
        map.insert("continue", TokenKind::Continue);
        map.insert("goto", TokenKind::Goto);
        map.insert("switch", TokenKind::Switch);
        map.insert("case", TokenKind::Case);
        map.insert("break", TokenKind::Break);
        map.insert("returneth", TokenKind::Return);
        map
    };
}

/// Looks up an identifier-shaped lexeme in the reserved word table.
///
/// Only an exact, case-sensitive match is a keyword; anything else is an identifier.
pub fn lookup_keyword(lexeme: &str) -> TokenKind {
    RESERVED_LOOKUP
        .get(lexeme)
        .copied()
        .unwrap_or(TokenKind::Identifier)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Lexical errors
    IllegalChar,
    EmptyCharError,
    MultiCharError,
    FloatError,
    UnterminatedString,

    EOF,

    BlockComment,
    LineComment,

    // Literals
    CharLiteral,
    StringLiteral,
    IntLiteral,
    FloatLiteral,

    // Symbols
    At,
    Tilde,
    Pipe,
    Ampersand,

    // Logical
    And,
    Or,
    Not,

    // Arithmetic
    Plus,
    Dash,
    Star,
    Exponent,
    Slash,
    FloorDiv,
    Percent,

    // Assignment
    Assignment,
    PlusEquals,
    MinusEquals,
    StarEquals,
    SlashEquals,
    PercentEquals,
    PlusPlus,
    MinusMinus,

    // Relational
    Equals,
    Greater,
    GreaterEquals,
    Less,
    LessEquals,
    NotEquals,

    // Delimiters
    Comma,
    Dot,
    Semicolon,
    Colon,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,

    // Data types
    Int,
    Char,
    Float,
    Double,
    Bool,
    Void,

    Identifier,
    Volatile,
    Register,

    Out,
    In,

    Function,
    Let,

    True,
    False,

    // Reserved
    If,
    Else,
    While,
    For,
    Continue,
    Goto,
    Switch,
    Case,
    Break,
    Return,
}

impl TokenKind {
    /// The five kinds the lexer produces for malformed input.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            TokenKind::IllegalChar
                | TokenKind::EmptyCharError
                | TokenKind::MultiCharError
                | TokenKind::FloatError
                | TokenKind::UnterminatedString
        )
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, TokenKind::BlockComment | TokenKind::LineComment)
    }

    pub fn is_data_type(&self) -> bool {
        matches!(
            self,
            TokenKind::Int
                | TokenKind::Char
                | TokenKind::Float
                | TokenKind::Double
                | TokenKind::Bool
                | TokenKind::Void
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    /// Formats the token as one row of a token listing: the kind, padded, then the lexeme
    /// for tokens whose text carries information.
    pub fn listing_row(&self) -> String {
        if self.is_one_of_many(&[
            TokenKind::Identifier,
            TokenKind::IntLiteral,
            TokenKind::FloatLiteral,
            TokenKind::CharLiteral,
            TokenKind::StringLiteral,
        ]) || self.kind.is_error()
        {
            format!("{:<20} {}", self.kind.to_string(), self.value)
        } else {
            self.kind.to_string()
        }
    }
}
