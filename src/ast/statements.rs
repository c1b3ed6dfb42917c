use std::slice::Iter;

use crate::Span;

use super::{
    ast::Node,
    types::{AssignOp, DataType},
};

/// An ordered block of statements: the whole program, or the inside of `{ }`.
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundStmt {
    pub body: Vec<Node>,
    pub span: Span,
}

impl CompoundStmt {
    pub fn iter(&self) -> Iter<'_, Node> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Variable Definition
/// `value` is `None` when the variable is declared without an initializer.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDefStmt {
    pub data_type: DataType,
    pub name: String,
    pub value: Option<Box<Node>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub data_type: DataType,
    pub name: String,
    pub span: Span,
}

/// Function Definition
#[derive(Debug, Clone, PartialEq)]
pub struct FnDefStmt {
    pub return_type: DataType,
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub body: CompoundStmt,
    pub span: Span,
}

/// Assignment
/// `value` is `None` exactly when the operator is increment or decrement.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub target: String,
    pub operator: AssignOp,
    pub value: Option<Box<Node>>,
    pub span: Span,
}

/// If Statement
/// `else_body` holds either a `Compound` or, for `else if`, another `If`.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Box<Node>,
    pub then_body: CompoundStmt,
    pub else_body: Option<Box<Node>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Box<Node>,
    pub body: CompoundStmt,
    pub span: Span,
}

/// For Statement
/// `for (init; condition; step) { body }`
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub init: Box<Node>,
    pub condition: Box<Node>,
    pub step: Box<Node>,
    pub body: CompoundStmt,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Box<Node>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GotoStmt {
    pub label: String,
    pub span: Span,
}
