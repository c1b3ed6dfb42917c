//! Parser state and the token-consumption primitives.
//!
//! The parser pulls tokens from the lexer on demand, keeping the current token
//! (one token of lookahead) and the previously consumed one. Grammar productions
//! live in `stmt` and `expr` as free functions over `&mut Parser`; statement
//! dispatch goes through the handler table built in `lookups`.

use std::{collections::HashMap, mem};

use tracing::debug;

use crate::{
    ast::{ast::Node, types::DataType},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{create_token_lookups, StmtHandler, StmtLookup},
    stmt::parse_program,
};

/// How deeply blocks and expressions may nest before parsing stops with
/// `ErrorImpl::NestingTooDeep`.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser<'a> {
    /// Source of tokens, advanced one token at a time
    lexer: Lexer<'a>,
    /// Lookahead token
    current_token: Token,
    /// The token consumed most recently
    previous_token: Token,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    depth: usize,
    max_depth: usize,
    /// Greater than zero while parsing an `if`/`whilst`/`for` condition
    condition_depth: usize,
    /// Declared type of the variable whose initializer is being parsed
    literal_hint: Option<DataType>,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        Parser::with_max_depth(lexer, DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(mut lexer: Lexer<'a>, max_depth: usize) -> Self {
        let current_token = next_significant_token(&mut lexer);

        let mut parser = Parser {
            lexer,
            previous_token: current_token.clone(),
            current_token,
            stmt_lookup: HashMap::new(),
            depth: 0,
            max_depth,
            condition_depth: 0,
            literal_hint: None,
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Parses the whole token stream, returning the root `Compound` node.
    pub fn parse(mut self) -> Result<Node, Error> {
        parse_program(&mut self)
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    pub fn previous_token(&self) -> &Token {
        &self.previous_token
    }

    /// Advances to the next token and returns the one just consumed.
    pub fn advance(&mut self) -> &Token {
        let next = next_significant_token(&mut self.lexer);
        self.previous_token = mem::replace(&mut self.current_token, next);
        &self.previous_token
    }

    /// Consumes the current token if it is of `expected_kind`, otherwise fails with
    /// an error naming both the token found and the kind that was expected.
    pub fn eat(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current_token.kind != expected_kind {
            return Err(self.unexpected_token(expected_kind));
        }

        debug!(kind = ?self.current_token.kind, lexeme = %self.current_token.value, "eating token");
        Ok(self.advance().clone())
    }

    /// Error for a current token that is not of `expected_kind`. Malformed tokens
    /// report their lexical error instead.
    pub fn unexpected_token(&self, expected_kind: TokenKind) -> Error {
        if let Some(error) = Error::from_error_token(&self.current_token) {
            return error;
        }

        debug!(found = ?self.current_token.kind, expected = ?expected_kind, "syntax error");
        Error::new(
            ErrorImpl::UnexpectedToken {
                found: self.current_token.kind,
                expected: expected_kind,
                lexeme: self.current_token.value.clone(),
            },
            self.get_position(),
        )
    }

    /// Error for a current token that no production accepts.
    pub fn unexpected_detailed(&self, message: &str) -> Error {
        if let Some(error) = Error::from_error_token(&self.current_token) {
            return error;
        }

        debug!(found = ?self.current_token.kind, reason = message, "syntax error");
        Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: self.current_token.value.clone(),
                message: String::from(message),
            },
            self.get_position(),
        )
    }

    /// Runs `production` one nesting level deeper, failing instead once the
    /// configured maximum depth would be exceeded.
    pub fn nested<T>(
        &mut self,
        production: impl FnOnce(&mut Parser<'a>) -> Result<T, Error>,
    ) -> Result<T, Error> {
        self.descend()?;
        let result = production(self);
        self.ascend(1);

        result
    }

    /// Takes one nesting level, failing once the configured maximum depth would be
    /// exceeded. Every successful call must be matched by `ascend`.
    pub fn descend(&mut self) -> Result<(), Error> {
        if self.depth >= self.max_depth {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: self.max_depth,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    /// Gives back `levels` nesting levels taken by `descend`.
    pub fn ascend(&mut self, levels: usize) {
        self.depth -= levels;
    }

    pub fn in_condition(&self) -> bool {
        self.condition_depth > 0
    }

    pub fn enter_condition(&mut self) {
        self.condition_depth += 1;
    }

    pub fn leave_condition(&mut self) {
        self.condition_depth -= 1;
    }

    pub fn literal_hint(&self) -> Option<DataType> {
        self.literal_hint
    }

    /// Replaces the literal hint, returning the previous one so it can be restored.
    pub fn set_literal_hint(&mut self, hint: Option<DataType>) -> Option<DataType> {
        mem::replace(&mut self.literal_hint, hint)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the start position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token.span.start
    }

    /// Returns the end position of the most recently consumed token.
    pub fn get_previous_end(&self) -> Position {
        self.previous_token.span.end
    }
}

/// Pulls the next token that is not a comment.
fn next_significant_token(lexer: &mut Lexer) -> Token {
    loop {
        let token = lexer.next_token();
        if !token.kind.is_comment() {
            return token;
        }
    }
}

/// Parses `source` into a syntax tree.
///
/// Returns the root `Compound` node holding the top-level statements in source
/// order, or the first lexical or syntax error encountered.
pub fn parse(source: &str) -> Result<Node, Error> {
    Parser::new(Lexer::new(source)).parse()
}
