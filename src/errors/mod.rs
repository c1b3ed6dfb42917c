//! Error types for the front end.
//!
//! - Lexical errors, one variant per malformed-token kind
//! - Syntax errors raised by the parser, carrying the found and expected tokens
//! - Names and suggestions used when rendering diagnostics

pub mod errors;
