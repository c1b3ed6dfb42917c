use crate::{
    ast::{
        ast::Node,
        expressions::{BinaryExpr, CallExpr, LiteralExpr, UnaryExpr, VariableExpr},
        types::{BinaryOp, DataType, Literal, UnaryOp},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::parser::Parser;

const ADDITIVE: &[TokenKind] = &[TokenKind::Plus, TokenKind::Dash];
const MULTIPLICATIVE: &[TokenKind] = &[
    TokenKind::Star,
    TokenKind::Slash,
    TokenKind::FloorDiv,
    TokenKind::Percent,
];
const RELATIONAL: &[TokenKind] = &[
    TokenKind::Less,
    TokenKind::LessEquals,
    TokenKind::Greater,
    TokenKind::GreaterEquals,
    TokenKind::Equals,
    TokenKind::NotEquals,
];

/// Arithmetic expression entry point.
pub fn parse_expr(parser: &mut Parser) -> Result<Node, Error> {
    parse_term(parser)
}

/// `factor {(+ | -) factor}`
pub fn parse_term(parser: &mut Parser) -> Result<Node, Error> {
    parse_chain(parser, parse_factor, ADDITIVE)
}

/// `unary {(* | / | // | %) unary}`
pub fn parse_factor(parser: &mut Parser) -> Result<Node, Error> {
    parse_chain(parser, parse_unary, MULTIPLICATIVE)
}

/// Prefix minus binds looser than `**`, so `-2 ** 2` is `-(2 ** 2)`.
pub fn parse_unary(parser: &mut Parser) -> Result<Node, Error> {
    if parser.current_token_kind() != TokenKind::Dash {
        return parse_expo(parser);
    }

    parser.nested(|parser| {
        let start = parser.advance().span.start;
        let operand = parse_unary(parser)?;

        Ok(unary(start, UnaryOp::Negate, operand))
    })
}

/// `primary [** unary]`, right-associative.
pub fn parse_expo(parser: &mut Parser) -> Result<Node, Error> {
    let base = parse_primary_expr(parser)?;

    if parser.current_token_kind() != TokenKind::Exponent {
        return Ok(base);
    }
    parser.advance();

    let exponent = parser.nested(parse_unary)?;
    Ok(binary(base, BinaryOp::Pow, exponent))
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Node, Error> {
    let token = parser.current_token().clone();

    let value = match token.kind {
        TokenKind::Identifier => {
            parser.advance();
            if parser.current_token_kind() == TokenKind::OpenParen {
                return parse_call_expr(parser);
            }

            return Ok(Node::Variable(VariableExpr {
                name: token.value,
                span: token.span,
            }));
        }
        TokenKind::OpenParen => return parse_grouping_expr(parser),
        TokenKind::IntLiteral => match token.value.parse::<i64>() {
            Ok(value) => Literal::Integer(value),
            Err(_) => return Err(number_error(&token)),
        },
        TokenKind::FloatLiteral => parse_float(parser, &token)?,
        TokenKind::CharLiteral => match decode_char(&token.value) {
            Some(value) => Literal::Character(value),
            None => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedTokenDetailed {
                        token: token.value.clone(),
                        message: String::from("invalid character literal"),
                    },
                    token.span.start,
                ))
            }
        },
        TokenKind::StringLiteral => Literal::String(decode_string(&token.value)),
        TokenKind::True => Literal::Boolean(true),
        TokenKind::False => Literal::Boolean(false),
        _ => return Err(parser.unexpected_detailed("expected an expression")),
    };

    parser.advance();

    Ok(Node::Literal(LiteralExpr {
        value,
        span: token.span,
    }))
}

/// Call to the identifier just consumed: `( [expr {, expr}] )`.
pub fn parse_call_expr(parser: &mut Parser) -> Result<Node, Error> {
    let name = parser.previous_token().clone();
    parser.eat(TokenKind::OpenParen)?;

    // Arguments are not part of the initializer's own type
    let previous_hint = parser.set_literal_hint(None);
    let arguments = parse_arguments(parser);
    parser.set_literal_hint(previous_hint);
    let arguments = arguments?;

    let end = parser.eat(TokenKind::CloseParen)?.span.end;

    Ok(Node::Call(CallExpr {
        name: name.value,
        arguments,
        span: Span {
            start: name.span.start,
            end,
        },
    }))
}

fn parse_arguments(parser: &mut Parser) -> Result<Vec<Node>, Error> {
    let mut arguments = Vec::new();
    if parser.current_token_kind() == TokenKind::CloseParen {
        return Ok(arguments);
    }

    loop {
        arguments.push(parse_expr(parser)?);

        if parser.current_token_kind() != TokenKind::Comma {
            return Ok(arguments);
        }
        parser.advance();
    }
}

/// `( expr )`. Inside a condition the group may hold a whole logical expression.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Node, Error> {
    parser.nested(|parser| {
        parser.eat(TokenKind::OpenParen)?;

        let expr = if parser.in_condition() {
            parse_logical_expr(parser)?
        } else {
            parse_expr(parser)?
        };

        parser.eat(TokenKind::CloseParen)?;
        Ok(expr)
    })
}

/// Condition entry point: `||` over `&&` over `!` over relational.
pub fn parse_logical_expr(parser: &mut Parser) -> Result<Node, Error> {
    parser.enter_condition();
    let result = parse_or_expr(parser);
    parser.leave_condition();

    result
}

fn parse_or_expr(parser: &mut Parser) -> Result<Node, Error> {
    parse_chain(parser, parse_and_expr, &[TokenKind::Or])
}

fn parse_and_expr(parser: &mut Parser) -> Result<Node, Error> {
    parse_chain(parser, parse_not_expr, &[TokenKind::And])
}

fn parse_not_expr(parser: &mut Parser) -> Result<Node, Error> {
    if parser.current_token_kind() != TokenKind::Not {
        return parse_relational_expr(parser);
    }

    parser.nested(|parser| {
        let start = parser.advance().span.start;
        let operand = parse_not_expr(parser)?;

        Ok(unary(start, UnaryOp::Not, operand))
    })
}

/// `expr [relop expr]`. Relational operators do not chain.
pub fn parse_relational_expr(parser: &mut Parser) -> Result<Node, Error> {
    let left = parse_expr(parser)?;

    match match_operator(parser, RELATIONAL) {
        Some(operator) => {
            parser.advance();
            let right = parse_expr(parser)?;
            Ok(binary(left, operator, right))
        }
        None => Ok(left),
    }
}

/// Left-associative `operand {operator operand}`. Each chained operator deepens the
/// tree by one level, so it is charged against the nesting limit until the chain ends.
fn parse_chain(
    parser: &mut Parser,
    operand: fn(&mut Parser) -> Result<Node, Error>,
    operators: &[TokenKind],
) -> Result<Node, Error> {
    let mut left = operand(parser)?;
    let mut levels = 0;

    let result = loop {
        let Some(operator) = match_operator(parser, operators) else {
            break Ok(left);
        };
        if let Err(error) = parser.descend() {
            break Err(error);
        }
        levels += 1;

        parser.advance();
        match operand(parser) {
            Ok(right) => left = binary(left, operator, right),
            Err(error) => break Err(error),
        }
    };

    parser.ascend(levels);
    result
}

fn match_operator(parser: &Parser, kinds: &[TokenKind]) -> Option<BinaryOp> {
    let kind = parser.current_token_kind();
    if kinds.contains(&kind) {
        BinaryOp::from_token_kind(kind)
    } else {
        None
    }
}

fn binary(left: Node, operator: BinaryOp, right: Node) -> Node {
    let span = Span {
        start: left.get_span().map(|span| span.start).unwrap_or_default(),
        end: right.get_span().map(|span| span.end).unwrap_or_default(),
    };

    Node::Binary(BinaryExpr {
        left: Box::new(left),
        operator,
        right: Box::new(right),
        span,
    })
}

fn unary(start: Position, operator: UnaryOp, operand: Node) -> Node {
    let end = operand.get_span().map(|span| span.end).unwrap_or(start);

    Node::Unary(UnaryExpr {
        operator,
        operand: Box::new(operand),
        span: Span { start, end },
    })
}

/// Float literals are single precision unless they initialize a `twofold`.
fn parse_float(parser: &Parser, token: &Token) -> Result<Literal, Error> {
    let literal = if parser.literal_hint() == Some(DataType::Double) {
        token.value.parse::<f64>().map(Literal::Double)
    } else {
        token.value.parse::<f32>().map(Literal::Float)
    };

    literal.map_err(|_| number_error(token))
}

fn number_error(token: &Token) -> Error {
    Error::new(
        ErrorImpl::NumberParseError {
            token: token.value.clone(),
        },
        token.span.start,
    )
}

fn unescape(escaped: char) -> Option<char> {
    match escaped {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '0' => Some('\0'),
        '\\' => Some('\\'),
        '\'' => Some('\''),
        '"' => Some('"'),
        _ => None,
    }
}

/// Decodes the body of a character literal: one raw character or one escape.
pub fn decode_char(lexeme: &str) -> Option<char> {
    let mut chars = lexeme.chars();

    match (chars.next()?, chars.next(), chars.next()) {
        ('\\', Some(escaped), None) => unescape(escaped),
        (c, None, None) => Some(c),
        _ => None,
    }
}

/// Decodes the body of a string literal. Unknown escapes are kept as written.
pub fn decode_string(lexeme: &str) -> String {
    let mut decoded = String::with_capacity(lexeme.len());
    let mut chars = lexeme.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }

        match chars.next() {
            Some(escaped) => match unescape(escaped) {
                Some(unescaped) => decoded.push(unescaped),
                None => {
                    decoded.push('\\');
                    decoded.push(escaped);
                }
            },
            None => decoded.push('\\'),
        }
    }

    decoded
}
