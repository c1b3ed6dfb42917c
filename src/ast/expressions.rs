use crate::Span;

use super::{
    ast::Node,
    types::{BinaryOp, Literal, UnaryOp},
};

/// Variable Expression
/// A reference to a named variable.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    pub name: String,
    pub span: Span,
}

/// Call Expression
/// A call to a named function. Input and output statements are desugared into calls
/// named after their keyword.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub name: String,
    pub arguments: Vec<Node>,
    pub span: Span,
}

/// Literal Expression
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: Literal,
    pub span: Span,
}

/// Binary Expression
/// Arithmetic, relational or logical operator applied to two operands.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Node>,
    pub operator: BinaryOp,
    pub right: Box<Node>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: UnaryOp,
    pub operand: Box<Node>,
    pub span: Span,
}
