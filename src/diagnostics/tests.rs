//! Unit tests for error rendering.

use crate::{
    diagnostics::diagnostics::{render_error, render_lexical_error, report_lexical_error},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    parser::parser::parse,
};

fn first_error_token(lexer: &mut Lexer) -> Token {
    loop {
        let token = lexer.next_token();
        assert_ne!(token.kind, TokenKind::EOF, "no error token in source");
        if token.kind.is_error() {
            return token;
        }
    }
}

#[test]
fn test_render_illegal_character() {
    let mut lexer = Lexer::new("count a = $;");
    let token = first_error_token(&mut lexer);

    let rendered = render_lexical_error(&lexer, &token, "main.rens").unwrap();

    assert_eq!(
        rendered,
        "Error: IllegalCharacter\n  illegal character: \"$\"\n  lexeme: \"$\"\n-> main.rens:1:11\n  |\n1 | count a = $;\n  | ----------^"
    );
}

#[test]
fn test_render_caret_run_covers_lexeme() {
    let mut lexer = Lexer::new("glyph c = 'ab';");
    let token = first_error_token(&mut lexer);

    let rendered = render_lexical_error(&lexer, &token, "main.rens").unwrap();

    assert!(rendered.starts_with("Error: MultiCharLiteral"));
    assert!(rendered.ends_with("  | ----------^^^^"));
}

#[test]
fn test_render_unterminated_string_is_clipped_to_line() {
    let mut lexer = Lexer::new("sayeth(\"abc\ncount x;");
    let token = first_error_token(&mut lexer);

    let rendered = render_lexical_error(&lexer, &token, "main.rens").unwrap();

    assert!(rendered.contains("-> main.rens:1:8"));
    assert!(rendered.contains("1 | sayeth(\"abc\n"));
    assert!(rendered.ends_with("  | -------^^^^"));
}

#[test]
fn test_valid_token_is_not_reported() {
    let mut lexer = Lexer::new("count");
    let token = lexer.next_token();

    assert!(render_lexical_error(&lexer, &token, "main.rens").is_none());
    assert!(!report_lexical_error(&lexer, &token, "main.rens"));
}

#[test]
fn test_report_lexical_error() {
    let mut lexer = Lexer::new("count x = 1.2.3;");
    let token = first_error_token(&mut lexer);

    assert_eq!(token.kind, TokenKind::FloatError);
    assert!(report_lexical_error(&lexer, &token, "main.rens"));
}

#[test]
fn test_render_syntax_error() {
    let source = "count = 5;";
    let error = parse(source).unwrap_err();

    let rendered = render_error(&error, source, "main.rens");

    assert_eq!(
        rendered,
        "Error: UnexpectedToken (Unexpected token: `=` (Assignment), expected Identifier)\n  unexpected token Assignment (\"=\"), expected Identifier\n-> main.rens:1:7\n  |\n1 | count = 5;\n  | ------^"
    );
}

#[test]
fn test_render_strips_indentation() {
    let source = "{\n    count = 5;\n}";
    let error = parse(source).unwrap_err();

    let rendered = render_error(&error, source, "main.rens");

    assert!(rendered.contains("2 | count = 5;"));
    assert!(rendered.ends_with("  | ------^"));
}

#[test]
fn test_render_error_at_end_of_input() {
    let source = "count x = 5";
    let error = parse(source).unwrap_err();

    let rendered = render_error(&error, source, "main.rens");

    assert!(rendered.contains("did you miss a semicolon?"));
    assert!(rendered.ends_with("  | -----------^"));
}

#[test]
fn test_render_strips_tab_indentation() {
    let source = "{\n\t\tcount = 5;\n}";
    let error = parse(source).unwrap_err();

    let rendered = render_error(&error, source, "main.rens");

    assert!(rendered.contains("2 | count = 5;"));
    assert!(rendered.ends_with("  | ------^"));
}

#[test]
fn test_render_counts_columns_in_characters() {
    let mut lexer = Lexer::new("sayeth(\"héllo\", $);");
    let token = first_error_token(&mut lexer);

    let rendered = render_lexical_error(&lexer, &token, "main.rens").unwrap();

    assert!(rendered.contains("1 | sayeth(\"héllo\", $);"));
    assert!(rendered.ends_with("  | ----------------^"));
}
