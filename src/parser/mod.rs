//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms the lexer's
//! token stream into an Abstract Syntax Tree. It has one function per grammar
//! production and handles:
//!
//! - Statement parsing (declarations, functions, assignments, control flow)
//! - Arithmetic expressions with conventional operator precedence
//! - Logical and relational conditions for `if`, `whilst` and `for`
//! - Fail-fast error reporting through `Result`
//!
//! Statements are dispatched on their first token through a handler table;
//! nesting of blocks and expressions is bounded by a configurable depth.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
