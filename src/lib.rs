#![allow(clippy::module_inception)]

pub mod ast;
pub mod diagnostics;
pub mod errors;
pub mod lexer;
pub mod logging;
pub mod macros;
pub mod options;
pub mod parser;
pub mod source_file;

extern crate regex;

/// A location in the source buffer. `line` and `column` are 1-based,
/// `offset` is a byte offset from the start of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Position {
            offset: saturate(offset),
            line: saturate(line),
            column: saturate(column),
        }
    }
}

/// Locations past `u32::MAX` are pinned to it rather than wrapped.
fn saturate(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn len(&self) -> usize {
        (self.end.offset - self.start.offset) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.end.offset == self.start.offset
    }
}

/// Finds the line containing `position`.
///
/// Returns the 1-based line number, the line text (including its newline, if any)
/// and the offset of `position` within that line. A position one past the end of
/// the source resolves to the last line, so errors reported at EOF still render.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    // position == source.len(): either an empty source or the end of the last line
    match source.rsplit_once('\n') {
        Some((_, "")) => Some((line_number, String::new(), 0)),
        Some((_, last)) => Some((line_number - 1, last.to_string(), last.len())),
        None => Some((1, source.to_string(), source.len())),
    }
}
