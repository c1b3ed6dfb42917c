use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

/// Declared type of a variable, parameter or function.
///
/// `String` has no keyword of its own: it is spelled as a pointer to a character, `glyph*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Int,
    Char,
    Float,
    Double,
    Bool,
    Void,
    String,
}

impl DataType {
    pub fn from_token_kind(kind: TokenKind) -> Option<DataType> {
        match kind {
            TokenKind::Int => Some(DataType::Int),
            TokenKind::Char => Some(DataType::Char),
            TokenKind::Float => Some(DataType::Float),
            TokenKind::Double => Some(DataType::Double),
            TokenKind::Bool => Some(DataType::Bool),
            TokenKind::Void => Some(DataType::Void),
            _ => None,
        }
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let spelling = match self {
            DataType::Int => "count",
            DataType::Char => "glyph",
            DataType::Float => "fraction",
            DataType::Double => "twofold",
            DataType::Bool => "verdict",
            DataType::Void => "naught",
            DataType::String => "glyph*",
        };
        write!(f, "{}", spelling)
    }
}

/// A decoded literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Integer(i64),
    Float(f32),
    Double(f64),
    Character(char),
    Boolean(bool),
    String(String),
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Integer(value) => write!(f, "{}", value),
            Literal::Float(value) => write!(f, "{:?}f", value),
            Literal::Double(value) => write!(f, "{:?}d", value),
            Literal::Character(value) => write!(f, "{:?}", value),
            Literal::Boolean(true) => write!(f, "yay"),
            Literal::Boolean(false) => write!(f, "nay"),
            Literal::String(value) => write!(f, "{:?}", value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    Increment,
    Decrement,
}

impl AssignOp {
    pub fn from_token_kind(kind: TokenKind) -> Option<AssignOp> {
        match kind {
            TokenKind::Assignment => Some(AssignOp::Assign),
            TokenKind::PlusEquals => Some(AssignOp::AddAssign),
            TokenKind::MinusEquals => Some(AssignOp::SubAssign),
            TokenKind::StarEquals => Some(AssignOp::MulAssign),
            TokenKind::SlashEquals => Some(AssignOp::DivAssign),
            TokenKind::PercentEquals => Some(AssignOp::ModAssign),
            TokenKind::PlusPlus => Some(AssignOp::Increment),
            TokenKind::MinusMinus => Some(AssignOp::Decrement),
            _ => None,
        }
    }

    /// Increment and decrement take no right-hand side.
    pub fn takes_value(&self) -> bool {
        !matches!(self, AssignOp::Increment | AssignOp::Decrement)
    }
}

impl Display for AssignOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            AssignOp::Assign => "=",
            AssignOp::AddAssign => "+=",
            AssignOp::SubAssign => "-=",
            AssignOp::MulAssign => "*=",
            AssignOp::DivAssign => "/=",
            AssignOp::ModAssign => "%=",
            AssignOp::Increment => "++",
            AssignOp::Decrement => "--",
        };
        write!(f, "{}", symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    FloorDiv,
    Mod,
    Pow,
    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    Equals,
    NotEquals,
    And,
    Or,
}

impl BinaryOp {
    pub fn from_token_kind(kind: TokenKind) -> Option<BinaryOp> {
        match kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Dash => Some(BinaryOp::Sub),
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::FloorDiv => Some(BinaryOp::FloorDiv),
            TokenKind::Percent => Some(BinaryOp::Mod),
            TokenKind::Exponent => Some(BinaryOp::Pow),
            TokenKind::Less => Some(BinaryOp::Less),
            TokenKind::LessEquals => Some(BinaryOp::LessEquals),
            TokenKind::Greater => Some(BinaryOp::Greater),
            TokenKind::GreaterEquals => Some(BinaryOp::GreaterEquals),
            TokenKind::Equals => Some(BinaryOp::Equals),
            TokenKind::NotEquals => Some(BinaryOp::NotEquals),
            TokenKind::And => Some(BinaryOp::And),
            TokenKind::Or => Some(BinaryOp::Or),
            _ => None,
        }
    }

    pub fn is_relational(&self) -> bool {
        matches!(
            self,
            BinaryOp::Less
                | BinaryOp::LessEquals
                | BinaryOp::Greater
                | BinaryOp::GreaterEquals
                | BinaryOp::Equals
                | BinaryOp::NotEquals
        )
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::FloorDiv => "//",
            BinaryOp::Mod => "%",
            BinaryOp::Pow => "**",
            BinaryOp::Less => "<",
            BinaryOp::LessEquals => "<=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEquals => ">=",
            BinaryOp::Equals => "==",
            BinaryOp::NotEquals => "!=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        };
        write!(f, "{}", symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Negate,
    Not,
}

impl Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOp::Negate => write!(f, "-"),
            UnaryOp::Not => write!(f, "!"),
        }
    }
}
