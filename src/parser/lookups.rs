use std::collections::HashMap;

use crate::{ast::ast::Node, errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser<'_>) -> Result<Node, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Declarations
    parser.stmt(TokenKind::Int, parse_declaration);
    parser.stmt(TokenKind::Char, parse_declaration);
    parser.stmt(TokenKind::Float, parse_declaration);
    parser.stmt(TokenKind::Double, parse_declaration);
    parser.stmt(TokenKind::Bool, parse_declaration);
    parser.stmt(TokenKind::Void, parse_declaration);
    parser.stmt(TokenKind::Let, parse_declaration);

    // Statement groups
    parser.stmt(TokenKind::In, parse_stmt_group);
    parser.stmt(TokenKind::Out, parse_stmt_group);
    parser.stmt(TokenKind::Identifier, parse_stmt_group);
    parser.stmt(TokenKind::If, parse_stmt_group);
    parser.stmt(TokenKind::For, parse_stmt_group);
    parser.stmt(TokenKind::While, parse_stmt_group);
    parser.stmt(TokenKind::Return, parse_stmt_group);
    parser.stmt(TokenKind::Goto, parse_stmt_group);
    parser.stmt(TokenKind::Break, parse_stmt_group);
    parser.stmt(TokenKind::Continue, parse_stmt_group);

    // Functions and bare blocks
    parser.stmt(TokenKind::Function, parse_fn_decl_stmt);
    parser.stmt(TokenKind::OpenCurly, parse_block_stmt);
}

// Lookup table inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
