use thiserror::Error;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position,
};

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} (line {}, column {})", .position.line, .position.column)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// Builds the error for a token the lexer flagged as malformed, or `None` if the
    /// token is well-formed.
    pub fn from_error_token(token: &Token) -> Option<Self> {
        let lexeme = token.value.clone();

        let error_impl = match token.kind {
            TokenKind::IllegalChar => ErrorImpl::IllegalCharacter { lexeme },
            TokenKind::EmptyCharError => ErrorImpl::EmptyCharLiteral,
            TokenKind::MultiCharError => ErrorImpl::MultiCharLiteral { lexeme },
            TokenKind::FloatError => ErrorImpl::MalformedFloat { lexeme },
            TokenKind::UnterminatedString => ErrorImpl::UnterminatedString,
            _ => return None,
        };

        Some(Error::new(error_impl, token.span.start))
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn is_lexical(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::IllegalCharacter { .. }
                | ErrorImpl::EmptyCharLiteral
                | ErrorImpl::MultiCharLiteral { .. }
                | ErrorImpl::MalformedFloat { .. }
                | ErrorImpl::UnterminatedString
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => "IllegalCharacter",
            ErrorImpl::EmptyCharLiteral => "EmptyCharLiteral",
            ErrorImpl::MultiCharLiteral { .. } => "MultiCharLiteral",
            ErrorImpl::MalformedFloat { .. } => "MalformedFloat",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => ErrorTip::None,
            ErrorImpl::EmptyCharLiteral => ErrorTip::Suggestion(String::from(
                "a character literal needs exactly one character between its quotes",
            )),
            ErrorImpl::MultiCharLiteral { lexeme } => ErrorTip::Suggestion(format!(
                "`{}` holds more than one character, use double quotes for a string",
                lexeme
            )),
            ErrorImpl::MalformedFloat { lexeme } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, a float takes a single decimal point",
                lexeme
            )),
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("add a closing `\"` to the string"))
            }
            ErrorImpl::UnexpectedToken {
                found,
                expected,
                lexeme,
            } => {
                if *expected == TokenKind::Semicolon {
                    ErrorTip::Suggestion(format!(
                        "Unexpected token: `{}` ({}), did you miss a semicolon?",
                        lexeme, found
                    ))
                } else {
                    ErrorTip::Suggestion(format!(
                        "Unexpected token: `{}` ({}), expected {}",
                        lexeme, found, expected
                    ))
                }
            }
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "blocks and expressions may nest at most {} levels deep",
                limit
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl std::fmt::Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("illegal character: {lexeme:?}")]
    IllegalCharacter { lexeme: String },
    #[error("empty character literal")]
    EmptyCharLiteral,
    #[error("multi-character literal: {lexeme:?}")]
    MultiCharLiteral { lexeme: String },
    #[error("malformed float literal: {lexeme:?}")]
    MalformedFloat { lexeme: String },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unexpected token {found} ({lexeme:?}), expected {expected}")]
    UnexpectedToken {
        found: TokenKind,
        expected: TokenKind,
        lexeme: String,
    },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("nesting exceeds the limit of {limit}")]
    NestingTooDeep { limit: usize },
}
