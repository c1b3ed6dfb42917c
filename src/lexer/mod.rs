//! Lexical analysis module for the front end.
//!
//! This module contains the lexer that turns source text into a stream of
//! classified tokens, pulled one at a time by the parser. It handles:
//!
//! - Keyword lookup for identifier-shaped lexemes
//! - Integer, float, character and string literals
//! - One-character lookahead for compound operators
//! - `##` block and `#` line comments, with line/column tracking
//! - Lexical errors, surfaced as dedicated token kinds rather than aborts

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
