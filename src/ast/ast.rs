use crate::Span;

use super::{
    expressions::{BinaryExpr, CallExpr, LiteralExpr, UnaryExpr, VariableExpr},
    statements::{
        AssignmentStmt, CompoundStmt, FnDefStmt, ForStmt, GotoStmt, IfStmt, ReturnStmt,
        VarDefStmt, WhileStmt,
    },
};

/// A node of the syntax tree.
///
/// Every node owns its children exclusively. The variant decides which payload exists,
/// so there is no way to read a field of the wrong kind of node.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    VarDef(VarDefStmt),
    Variable(VariableExpr),
    FnDef(FnDefStmt),
    Call(CallExpr),
    Literal(LiteralExpr),
    Assignment(AssignmentStmt),
    Compound(CompoundStmt),
    If(IfStmt),
    While(WhileStmt),
    For(ForStmt),
    Return(ReturnStmt),
    Goto(GotoStmt),
    Break(Span),
    Continue(Span),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    /// Placeholder for "nothing produced". The parser never emits it.
    #[default]
    NoOp,
}

/// Node Types
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum NodeType {
    VarDef,
    Variable,
    FnDef,
    Call,
    Literal,
    Assignment,
    Compound,
    If,
    While,
    For,
    Return,
    Goto,
    Break,
    Continue,
    Binary,
    Unary,
    NoOp,
}

impl Node {
    pub fn get_node_type(&self) -> NodeType {
        match self {
            Node::VarDef(_) => NodeType::VarDef,
            Node::Variable(_) => NodeType::Variable,
            Node::FnDef(_) => NodeType::FnDef,
            Node::Call(_) => NodeType::Call,
            Node::Literal(_) => NodeType::Literal,
            Node::Assignment(_) => NodeType::Assignment,
            Node::Compound(_) => NodeType::Compound,
            Node::If(_) => NodeType::If,
            Node::While(_) => NodeType::While,
            Node::For(_) => NodeType::For,
            Node::Return(_) => NodeType::Return,
            Node::Goto(_) => NodeType::Goto,
            Node::Break(_) => NodeType::Break,
            Node::Continue(_) => NodeType::Continue,
            Node::Binary(_) => NodeType::Binary,
            Node::Unary(_) => NodeType::Unary,
            Node::NoOp => NodeType::NoOp,
        }
    }

    /// Returns the source span of the node. `NoOp` has none.
    pub fn get_span(&self) -> Option<&Span> {
        match self {
            Node::VarDef(stmt) => Some(&stmt.span),
            Node::Variable(expr) => Some(&expr.span),
            Node::FnDef(stmt) => Some(&stmt.span),
            Node::Call(expr) => Some(&expr.span),
            Node::Literal(expr) => Some(&expr.span),
            Node::Assignment(stmt) => Some(&stmt.span),
            Node::Compound(stmt) => Some(&stmt.span),
            Node::If(stmt) => Some(&stmt.span),
            Node::While(stmt) => Some(&stmt.span),
            Node::For(stmt) => Some(&stmt.span),
            Node::Return(stmt) => Some(&stmt.span),
            Node::Goto(stmt) => Some(&stmt.span),
            Node::Break(span) | Node::Continue(span) => Some(span),
            Node::Binary(expr) => Some(&expr.span),
            Node::Unary(expr) => Some(&expr.span),
            Node::NoOp => None,
        }
    }

    /// Statements ending in a `{ }` block need no `;` after them.
    pub fn ends_with_block(&self) -> bool {
        matches!(
            self,
            Node::FnDef(_) | Node::If(_) | Node::While(_) | Node::For(_) | Node::Compound(_)
        )
    }

    pub fn as_compound(&self) -> Option<&CompoundStmt> {
        match self {
            Node::Compound(compound) => Some(compound),
            _ => None,
        }
    }
}
