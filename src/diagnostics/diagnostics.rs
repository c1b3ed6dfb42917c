use tracing::{error, warn};

use crate::{
    errors::errors::{Error, ErrorTip},
    get_line_at_position,
    lexer::{lexer::Lexer, tokens::Token},
};

/*
    Error: IllegalCharacter
      illegal character: "$"
    -> main.rens:20:9
       |
    20 | count a = $;
       | ----------^
*/

/// Renders a lexical error token, or returns `None` if `token` is not one.
///
/// The caret run covers the offending lexeme, clipped to the end of its line.
pub fn render_lexical_error(lexer: &Lexer, token: &Token, source_name: &str) -> Option<String> {
    let error = Error::from_error_token(token)?;

    let mut lines = header(&error, source_name);
    lines.insert(2, format!("  lexeme: {:?}", token.value));
    lines.extend(source_excerpt(lexer.source(), &error, token.span.len()));

    Some(lines.join("\n"))
}

/// Writes the rendering of a lexical error token to stderr. Returns whether `token`
/// was an error token. Scanning is left to the caller.
pub fn report_lexical_error(lexer: &Lexer, token: &Token, source_name: &str) -> bool {
    match render_lexical_error(lexer, token, source_name) {
        Some(rendered) => {
            warn!(
                kind = ?token.kind,
                line = token.span.start.line,
                column = token.span.start.column,
                "lexical error"
            );
            eprintln!("{}", rendered);
            true
        }
        None => false,
    }
}

/// Renders any front-end error with a single caret under its position.
pub fn render_error(error: &Error, source: &str, source_name: &str) -> String {
    let mut lines = header(error, source_name);
    lines.extend(source_excerpt(source, error, 1));

    lines.join("\n")
}

pub fn display_error(error: &Error, source: &str, source_name: &str) {
    error!(kind = error.get_error_name(), "{}", error);
    eprintln!("{}", render_error(error, source, source_name));
}

fn header(error: &Error, source_name: &str) -> Vec<String> {
    let position = error.get_position();

    let title = match error.get_tip() {
        ErrorTip::None => format!("Error: {}", error.get_error_name()),
        tip => format!("Error: {} ({})", error.get_error_name(), tip),
    };

    vec![
        title,
        format!("  {}", error.get_internal_error()),
        format!("-> {}:{}:{}", source_name, position.line, position.column),
    ]
}

fn source_excerpt(source: &str, error: &Error, width: usize) -> Vec<String> {
    let Some((line, line_text, line_pos)) =
        get_line_at_position(source, error.get_position().offset)
    else {
        return Vec::new();
    };

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    let line_text = line_text.trim_end_matches(|c: char| c == '\n' || c == '\r');
    let trimmed = line_text.trim_start();
    let removed_whitespace = line_text.len() - trimmed.len();

    // Offsets are in bytes, the caret line is drawn in characters
    let arrows = line_text
        .get(removed_whitespace..line_pos)
        .map_or(0, |before| before.chars().count())
        + 1;
    let width = line_text
        .get(line_pos..)
        .map_or(0, |rest| {
            rest.char_indices()
                .take_while(|(index, _)| *index < width)
                .count()
        })
        .max(1);

    vec![
        format!("{:>padding$}", "|"),
        format!("{} | {}", line_str, trimmed),
        format!("{:>padding$} {:->arrows$}{}", "|", "^", "^".repeat(width - 1)),
    ]
}
