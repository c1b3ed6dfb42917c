//! Unit tests for the lexer module.
//!
//! Covers keywords and identifiers, numeric and text literals, operators,
//! comments, position tracking and the five lexical error kinds.

use super::{
    lexer::{tokenize, Lexer},
    tokens::{lookup_keyword, TokenKind},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "count glyph fraction twofold verdict naught maketh fn yay nay";
    let tokens = tokenize(source);

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[1].kind, TokenKind::Char);
    assert_eq!(tokens[2].kind, TokenKind::Float);
    assert_eq!(tokens[3].kind, TokenKind::Double);
    assert_eq!(tokens[4].kind, TokenKind::Bool);
    assert_eq!(tokens[5].kind, TokenKind::Void);
    assert_eq!(tokens[6].kind, TokenKind::Let);
    assert_eq!(tokens[7].kind, TokenKind::Function);
    assert_eq!(tokens[8].kind, TokenKind::True);
    assert_eq!(tokens[9].kind, TokenKind::False);
    assert_eq!(tokens[10].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_control_keywords() {
    let source = "if else whilst for continue goto switch case break returneth sayeth heareth";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::If,
            TokenKind::Else,
            TokenKind::While,
            TokenKind::For,
            TokenKind::Continue,
            TokenKind::Goto,
            TokenKind::Switch,
            TokenKind::Case,
            TokenKind::Break,
            TokenKind::Return,
            TokenKind::Out,
            TokenKind::In,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_keyword_boundary() {
    let tokens = tokenize("counts count Count");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "counts");
    assert_eq!(tokens[1].kind, TokenKind::Int);
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(lookup_keyword("coun"), TokenKind::Identifier);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar_baz _underscore CamelCase");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "bar_baz");
    assert_eq!(tokens[2].value, "_underscore");
    assert_eq!(tokens[3].value, "CamelCase");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_identifiers_stop_at_digits() {
    let tokens = tokenize("abc12");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "abc");
    assert_eq!(tokens[1].kind, TokenKind::IntLiteral);
    assert_eq!(tokens[1].value, "12");
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0 1.2.3");

    assert_eq!(tokens[0].kind, TokenKind::IntLiteral);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::FloatLiteral);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::IntLiteral);
    assert_eq!(tokens[3].kind, TokenKind::FloatError);
    assert_eq!(tokens[3].value, "1.2.3");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hello" "multiple words" "quote\"test""#);

    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].value, "multiple words");
    assert_eq!(tokens[2].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[2].value, r#"quote\"test"#);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_unterminated_string() {
    let tokens = tokenize("count x;\nsayeth(\"abc");

    let error = tokens
        .iter()
        .find(|token| token.kind == TokenKind::UnterminatedString)
        .unwrap();
    assert_eq!(error.value, "\"abc");
    assert_eq!(error.span.start.line, 2);
    assert_eq!(error.span.start.column, 8);
    assert_eq!(tokens.last().unwrap().kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_chars() {
    let tokens = tokenize(r"'a' '\n' '\'' '\\'");

    assert_eq!(tokens[0].kind, TokenKind::CharLiteral);
    assert_eq!(tokens[0].value, "a");
    assert_eq!(tokens[1].kind, TokenKind::CharLiteral);
    assert_eq!(tokens[1].value, r"\n");
    assert_eq!(tokens[2].value, r"\'");
    assert_eq!(tokens[3].value, r"\\");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_char_literal_errors() {
    let tokens = tokenize("'' 'ab' 'x");

    assert_eq!(tokens[0].kind, TokenKind::EmptyCharError);
    assert_eq!(tokens[1].kind, TokenKind::MultiCharError);
    assert_eq!(tokens[1].value, "'ab'");
    // a lone quote is illegal, scanning resumes right after it
    assert_eq!(tokens[2].kind, TokenKind::IllegalChar);
    assert_eq!(tokens[2].value, "'");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "x");
}

#[test]
fn test_unknown_char_escape() {
    let tokens = tokenize(r"'\q' x");

    assert_eq!(tokens[0].kind, TokenKind::IllegalChar);
    assert_eq!(tokens[0].value, r"'\q'");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
}

#[test]
fn test_tokenize_operators() {
    let source = "+ - * / % ** // ++ -- += -= *= /= %= = == ! != < <= > >= & && | ||";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Exponent,
            TokenKind::FloorDiv,
            TokenKind::PlusPlus,
            TokenKind::MinusMinus,
            TokenKind::PlusEquals,
            TokenKind::MinusEquals,
            TokenKind::StarEquals,
            TokenKind::SlashEquals,
            TokenKind::PercentEquals,
            TokenKind::Assignment,
            TokenKind::Equals,
            TokenKind::Not,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::LessEquals,
            TokenKind::Greater,
            TokenKind::GreaterEquals,
            TokenKind::Ampersand,
            TokenKind::And,
            TokenKind::Pipe,
            TokenKind::Or,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) [ ] { } , . ; : @ ~"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::At,
            TokenKind::Tilde,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_operators_without_spaces() {
    assert_eq!(
        kinds("x+=1;y**2"),
        vec![
            TokenKind::Identifier,
            TokenKind::PlusEquals,
            TokenKind::IntLiteral,
            TokenKind::Semicolon,
            TokenKind::Identifier,
            TokenKind::Exponent,
            TokenKind::IntLiteral,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_comments_are_skipped() {
    let source = "# line comment\ncount ## block\ncomment ## x";
    let tokens = tokenize(source);

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].span.start.line, 2);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[1].span.start.line, 3);
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_comments_can_be_emitted() {
    let mut lexer = Lexer::with_comments("# note\n## block ## count");

    let line = lexer.next_token();
    assert_eq!(line.kind, TokenKind::LineComment);
    assert_eq!(line.value, "# note");

    let block = lexer.next_token();
    assert_eq!(block.kind, TokenKind::BlockComment);
    assert_eq!(block.value, "## block ##");

    assert_eq!(lexer.next_token().kind, TokenKind::Int);
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_unterminated_block_comment_reaches_eof() {
    assert_eq!(kinds("count ## never closed\n x"), vec![TokenKind::Int, TokenKind::EOF]);
}

#[test]
fn test_illegal_character() {
    let tokens = tokenize("count $x");

    assert_eq!(tokens[1].kind, TokenKind::IllegalChar);
    assert_eq!(tokens[1].value, "$");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
}

#[test]
fn test_eof_is_sticky() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.span.start.offset, 1);
    }
}

#[test]
fn test_nul_terminates_input() {
    assert_eq!(kinds("x\0y"), vec![TokenKind::Identifier, TokenKind::EOF]);
}

#[test]
fn test_positions() {
    let tokens = tokenize("count x;\n  x = 5;");

    assert_eq!(tokens[0].span.start.line, 1);
    assert_eq!(tokens[0].span.start.column, 1);
    assert_eq!(tokens[1].span.start.column, 7);
    assert_eq!(tokens[3].value, "x");
    assert_eq!(tokens[3].span.start.line, 2);
    assert_eq!(tokens[3].span.start.column, 3);
    assert_eq!(tokens[5].span.start.offset, 15);
    assert_eq!(tokens[5].span.len(), 1);
}

#[test]
fn test_line_tracking_through_strings() {
    let mut lexer = Lexer::new("\"a\nb\" x");

    assert_eq!(lexer.next_token().kind, TokenKind::StringLiteral);
    let x = lexer.next_token();
    assert_eq!(x.span.start.line, 2);
    assert_eq!(x.span.start.column, 4);
    assert_eq!(lexer.line_number(), 2);
    assert_eq!(lexer.line_start(), 3);
}

#[test]
fn test_tokenization_is_idempotent() {
    let source = "fn count main() { count x = 1.5; sayeth(\"hi\", x); } 'ab' 1.2.3";

    assert_eq!(tokenize(source), tokenize(source));
}

#[test]
fn test_lexer_iterator_stops_before_eof() {
    let tokens: Vec<_> = Lexer::new("count x").collect();

    assert_eq!(tokens.len(), 2);
    assert!(tokens.iter().all(|token| token.kind != TokenKind::EOF));
}
