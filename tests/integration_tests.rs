//! Integration tests for the end-to-end front end.
//!
//! These tests drive the public API the way the driver does: loading a source file,
//! tokenizing it, parsing it into an AST and rendering either the tree or the error.

use std::{env, fs, path::PathBuf};

use renaisscript::{
    ast::ast::{Node, NodeType},
    diagnostics::diagnostics::{render_error, render_lexical_error},
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::TokenKind,
    },
    parser::parser::{parse, Parser},
    source_file::load_source,
};

const PROGRAM: &str = "\
## Sums the first n numbers ##
fn count sum(count n) {
    count total = 0;
    for (count i = 1; i <= n; i++) {
        total += i;
    }
    returneth total;
}

count main() {
    glyph* greeting = \"hello\\n\";
    sayeth(greeting, sum(10));
    if (sum(3) == 6 && !nay) {
        sayeth(\"ok\");
    } else {
        goto fail;
    }
    returneth 0;
}
";

fn temp_source(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(format!("{}-{}", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_parse_complete_program() {
    let ast = parse(PROGRAM).expect("program should parse");

    let root = ast.as_compound().expect("root should be a compound");
    let types: Vec<NodeType> = root.iter().map(Node::get_node_type).collect();
    assert_eq!(types, vec![NodeType::FnDef, NodeType::FnDef]);

    match &root.body[1] {
        Node::FnDef(main) => {
            assert_eq!(main.name, "main");
            assert_eq!(main.body.len(), 4);
        }
        other => panic!("expected main, got {:?}", other),
    }
}

#[test]
fn test_display_complete_program() {
    let rendered = parse(PROGRAM).unwrap().to_string();

    assert!(rendered.starts_with("Compound\n  FnDef count sum(count n)\n"));
    assert!(rendered.contains("      For\n        VarDef count i\n"));
    assert!(rendered.contains("      Call sayeth\n        Variable greeting\n        Call sum\n"));
    assert!(rendered.contains("      Goto fail\n"));
}

#[test]
fn test_tokenize_and_parse_agree_on_comments() {
    let tokens = tokenize(PROGRAM);
    assert!(tokens.iter().all(|token| !token.kind.is_error()));
    assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::EOF));

    let with_comments = Parser::new(Lexer::with_comments(PROGRAM)).parse();
    assert_eq!(with_comments, parse(PROGRAM));
}

#[test]
fn test_lexing_is_idempotent() {
    assert_eq!(tokenize(PROGRAM), tokenize(PROGRAM));
}

#[test]
fn test_token_listing() {
    let rows: Vec<String> = tokenize("count x = 42;")
        .iter()
        .map(|token| token.listing_row())
        .collect();

    assert_eq!(
        rows,
        vec![
            "Int".to_string(),
            format!("{:<20} x", "Identifier"),
            "Assignment".to_string(),
            format!("{:<20} 42", "IntLiteral"),
            "Semicolon".to_string(),
            "EOF".to_string(),
        ]
    );
}

#[test]
fn test_every_lexical_error_is_rendered() {
    let source = "count a = $;\nglyph b = '';\nfraction c = 1.2.3;";
    let mut lexer = Lexer::new(source);
    let mut rendered = Vec::new();

    loop {
        let token = lexer.next_token();
        if token.kind == TokenKind::EOF {
            break;
        }
        if let Some(report) = render_lexical_error(&lexer, &token, "errors.rens") {
            rendered.push(report);
        }
    }

    assert_eq!(rendered.len(), 3);
    assert!(rendered[0].contains("-> errors.rens:1:11"));
    assert!(rendered[1].starts_with("Error: EmptyCharLiteral"));
    assert!(rendered[2].contains("3 | fraction c = 1.2.3;"));
}

#[test]
fn test_syntax_error_rendering() {
    let source = "count main() {\n    count = 5;\n}\n";
    let error = parse(source).unwrap_err();

    assert_eq!(error.get_position().line, 2);

    let rendered = render_error(&error, source, "main.rens");
    assert!(rendered.starts_with("Error: UnexpectedToken"));
    assert!(rendered.contains("2 | count = 5;"));
}

#[test]
fn test_load_and_parse_source_file() {
    let path = temp_source("program.rens", PROGRAM);

    let source = load_source(&path);
    fs::remove_file(&path).unwrap();

    let ast = parse(&source.unwrap()).unwrap();
    assert_eq!(ast.as_compound().map(|root| root.len()), Some(2));
}

#[test]
fn test_load_rejects_other_extensions() {
    let path = temp_source("program.txt", PROGRAM);

    let result = load_source(&path);
    fs::remove_file(&path).unwrap();

    assert!(result.is_err());
}
