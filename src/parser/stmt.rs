use crate::{
    ast::{
        ast::Node,
        expressions::CallExpr,
        statements::{
            AssignmentStmt, CompoundStmt, FnDefStmt, ForStmt, GotoStmt, IfStmt, Parameter,
            ReturnStmt, VarDefStmt, WhileStmt,
        },
        types::{AssignOp, DataType},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Position, Span,
};

use super::{
    expr::{parse_call_expr, parse_expr, parse_logical_expr},
    parser::Parser,
};

/// Parses every top-level statement up to EOF into the root `Compound`.
pub fn parse_program(parser: &mut Parser) -> Result<Node, Error> {
    let start = Position::new(0, 1, 1);
    let body = parse_statements(parser, TokenKind::EOF)?;

    Ok(Node::Compound(CompoundStmt {
        body,
        span: Span {
            start,
            end: parser.get_position(),
        },
    }))
}

/// Parses statements until `closing` is the current token, leaving it unconsumed.
///
/// Stray `;` between statements are skipped. Every statement that does not end in a
/// `{ }` block must be followed by a `;`.
pub fn parse_statements(parser: &mut Parser, closing: TokenKind) -> Result<Vec<Node>, Error> {
    let mut body = Vec::new();

    loop {
        match parser.current_token_kind() {
            TokenKind::Semicolon => {
                parser.advance();
            }
            kind if kind == closing => break,
            TokenKind::EOF => return Err(parser.unexpected_token(closing)),
            _ => {
                let stmt = parse_stmt(parser)?;
                if !stmt.ends_with_block() {
                    parser.eat(TokenKind::Semicolon)?;
                }
                body.push(stmt);
            }
        }
    }

    Ok(body)
}

pub fn parse_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let handler = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();

    match handler {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected_detailed("expected the start of a statement")),
    }
}

/// `{ statements }`
pub fn parse_block(parser: &mut Parser) -> Result<CompoundStmt, Error> {
    parser.nested(|parser| {
        let start = parser.eat(TokenKind::OpenCurly)?.span.start;
        let body = parse_statements(parser, TokenKind::CloseCurly)?;
        let end = parser.eat(TokenKind::CloseCurly)?.span.end;

        Ok(CompoundStmt {
            body,
            span: Span { start, end },
        })
    })
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Node, Error> {
    Ok(Node::Compound(parse_block(parser)?))
}

/// A type keyword, with `glyph*` read as the string type.
pub fn parse_type(parser: &mut Parser) -> Result<DataType, Error> {
    let data_type = match DataType::from_token_kind(parser.current_token_kind()) {
        Some(data_type) => data_type,
        None => return Err(parser.unexpected_detailed("expected a type")),
    };
    parser.advance();

    if data_type == DataType::Char && parser.current_token_kind() == TokenKind::Star {
        parser.advance();
        return Ok(DataType::String);
    }

    Ok(data_type)
}

/// `[maketh] type IDENT [= expr]`, or a function definition when `(` follows the name.
pub fn parse_declaration(parser: &mut Parser) -> Result<Node, Error> {
    let start = parser.get_position();

    if parser.current_token_kind() == TokenKind::Let {
        parser.advance();
    }

    let data_type = parse_type(parser)?;
    let name = parser.eat(TokenKind::Identifier)?;

    if parser.current_token_kind() == TokenKind::OpenParen {
        return parse_fn_rest(parser, start, data_type, name.value);
    }

    if data_type == DataType::Void {
        return Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: name.value,
                message: String::from("a variable cannot be declared naught"),
            },
            name.span.start,
        ));
    }

    let value = if parser.current_token_kind() == TokenKind::Assignment {
        parser.advance();

        let previous_hint = parser.set_literal_hint(Some(data_type));
        let value = parse_expr(parser);
        parser.set_literal_hint(previous_hint);

        Some(Box::new(value?))
    } else {
        None
    };

    Ok(Node::VarDef(VarDefStmt {
        data_type,
        name: name.value,
        value,
        span: Span {
            start,
            end: parser.get_previous_end(),
        },
    }))
}

/// `fn type IDENT ( params ) { body }`
pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let start = parser.eat(TokenKind::Function)?.span.start;
    let return_type = parse_type(parser)?;
    let name = parser.eat(TokenKind::Identifier)?.value;

    parse_fn_rest(parser, start, return_type, name)
}

fn parse_fn_rest(
    parser: &mut Parser,
    start: Position,
    return_type: DataType,
    name: String,
) -> Result<Node, Error> {
    parser.eat(TokenKind::OpenParen)?;

    let mut parameters = Vec::new();
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            parameters.push(parse_parameter(parser)?);

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance();
        }
    }

    parser.eat(TokenKind::CloseParen)?;
    let body = parse_block(parser)?;

    Ok(Node::FnDef(FnDefStmt {
        return_type,
        name,
        parameters,
        span: Span {
            start,
            end: body.span.end,
        },
        body,
    }))
}

fn parse_parameter(parser: &mut Parser) -> Result<Parameter, Error> {
    let start = parser.get_position();
    let data_type = parse_type(parser)?;

    if data_type == DataType::Void {
        return Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.previous_token().value.clone(),
                message: String::from("a parameter cannot be naught"),
            },
            start,
        ));
    }

    let name = parser.eat(TokenKind::Identifier)?;

    Ok(Parameter {
        data_type,
        name: name.value,
        span: Span {
            start,
            end: name.span.end,
        },
    })
}

pub fn parse_stmt_group(parser: &mut Parser) -> Result<Node, Error> {
    match parser.current_token_kind() {
        TokenKind::In | TokenKind::Out => parse_io_stmt(parser),
        TokenKind::Identifier => parse_identifier_stmt(parser),
        TokenKind::If => parse_if_stmt(parser),
        TokenKind::While => parse_while_stmt(parser),
        TokenKind::For => parse_for_stmt(parser),
        TokenKind::Return => parse_return_stmt(parser),
        TokenKind::Goto => parse_goto_stmt(parser),
        TokenKind::Break => Ok(Node::Break(parser.advance().span)),
        TokenKind::Continue => Ok(Node::Continue(parser.advance().span)),
        _ => Err(parser.unexpected_detailed("expected a statement")),
    }
}

/// `heareth ( expr )` and `sayeth ( expr {, expr} )`, both built as calls named
/// after their keyword.
pub fn parse_io_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let keyword = parser.advance().clone();
    parser.eat(TokenKind::OpenParen)?;

    let mut arguments = vec![parse_expr(parser)?];
    if keyword.kind == TokenKind::Out {
        while parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            arguments.push(parse_expr(parser)?);
        }
    }

    let end = parser.eat(TokenKind::CloseParen)?.span.end;

    Ok(Node::Call(CallExpr {
        name: keyword.value,
        arguments,
        span: Span {
            start: keyword.span.start,
            end,
        },
    }))
}

/// A call when the identifier is followed by `(`, an assignment otherwise.
pub fn parse_identifier_stmt(parser: &mut Parser) -> Result<Node, Error> {
    parser.eat(TokenKind::Identifier)?;

    if parser.current_token_kind() == TokenKind::OpenParen {
        return parse_call_expr(parser);
    }

    parse_assignment(parser)
}

/// Assignment to the identifier just consumed.
pub fn parse_assignment(parser: &mut Parser) -> Result<Node, Error> {
    let target = parser.previous_token().clone();

    let operator = match AssignOp::from_token_kind(parser.current_token_kind()) {
        Some(operator) => operator,
        None => return Err(parser.unexpected_token(TokenKind::Assignment)),
    };
    parser.advance();

    let value = if operator.takes_value() {
        Some(Box::new(parse_expr(parser)?))
    } else {
        None
    };

    Ok(Node::Assignment(AssignmentStmt {
        target: target.value,
        operator,
        value,
        span: Span {
            start: target.span.start,
            end: parser.get_previous_end(),
        },
    }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let start = parser.eat(TokenKind::If)?.span.start;

    let condition = parse_condition(parser)?;
    let then_body = parse_block(parser)?;

    let else_body = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();

        if parser.current_token_kind() == TokenKind::If {
            Some(Box::new(parser.nested(parse_if_stmt)?))
        } else {
            Some(Box::new(Node::Compound(parse_block(parser)?)))
        }
    } else {
        None
    };

    Ok(Node::If(IfStmt {
        condition: Box::new(condition),
        then_body,
        else_body,
        span: Span {
            start,
            end: parser.get_previous_end(),
        },
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let start = parser.eat(TokenKind::While)?.span.start;

    let condition = parse_condition(parser)?;
    let body = parse_block(parser)?;

    Ok(Node::While(WhileStmt {
        condition: Box::new(condition),
        span: Span {
            start,
            end: body.span.end,
        },
        body,
    }))
}

/// `for ( init ; condition ; step ) { body }`
///
/// `init` is a declaration or an assignment, `step` an assignment or a call.
pub fn parse_for_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let start = parser.eat(TokenKind::For)?.span.start;
    parser.eat(TokenKind::OpenParen)?;

    let init = match parser.current_token_kind() {
        kind if kind.is_data_type() || kind == TokenKind::Let => parse_declaration(parser)?,
        TokenKind::Identifier => {
            parser.advance();
            parse_assignment(parser)?
        }
        _ => {
            return Err(parser.unexpected_detailed(
                "expected a declaration or an assignment to start the for loop",
            ))
        }
    };
    parser.eat(TokenKind::Semicolon)?;

    let condition = parse_logical_expr(parser)?;
    parser.eat(TokenKind::Semicolon)?;

    let step = match parser.current_token_kind() {
        TokenKind::Identifier => parse_identifier_stmt(parser)?,
        TokenKind::In | TokenKind::Out => parse_io_stmt(parser)?,
        _ => {
            return Err(parser.unexpected_detailed(
                "expected an assignment or a call as the for loop step",
            ))
        }
    };
    parser.eat(TokenKind::CloseParen)?;

    let body = parse_block(parser)?;

    Ok(Node::For(ForStmt {
        init: Box::new(init),
        condition: Box::new(condition),
        step: Box::new(step),
        span: Span {
            start,
            end: body.span.end,
        },
        body,
    }))
}

/// `returneth [expr]`
pub fn parse_return_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let start = parser.eat(TokenKind::Return)?.span.start;

    let value = match parser.current_token_kind() {
        TokenKind::Semicolon | TokenKind::CloseCurly | TokenKind::EOF => None,
        _ => Some(Box::new(parse_expr(parser)?)),
    };

    Ok(Node::Return(ReturnStmt {
        value,
        span: Span {
            start,
            end: parser.get_previous_end(),
        },
    }))
}

pub fn parse_goto_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let start = parser.eat(TokenKind::Goto)?.span.start;
    let label = parser.eat(TokenKind::Identifier)?;

    Ok(Node::Goto(GotoStmt {
        label: label.value,
        span: Span {
            start,
            end: label.span.end,
        },
    }))
}

/// `( condition )` of an `if` or `whilst`.
pub fn parse_condition(parser: &mut Parser) -> Result<Node, Error> {
    parser.eat(TokenKind::OpenParen)?;
    let condition = parse_logical_expr(parser)?;
    parser.eat(TokenKind::CloseParen)?;

    Ok(condition)
}
