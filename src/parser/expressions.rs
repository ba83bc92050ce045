//! Expression parsing: the precedence ladder from assignment down to
//! primaries, plus brace initializer lists.

use super::{utils, ParseError, Parser};
use crate::ast::{Expr, ExprKind, SourcePos};
use crate::lexer::TokenType;

pub fn parse_expression(parser: &mut Parser) -> Result<Expr, ParseError> {
    parse_assignment(parser)
}

/// Assignment is right-associative; any expression may appear on the
/// left, the checker rejects invalid lvalues.
fn parse_assignment(parser: &mut Parser) -> Result<Expr, ParseError> {
    let expr = parse_or(parser)?;

    if parser.match_token(&TokenType::Assign) {
        let value = parse_assignment(parser)?;
        let pos = SourcePos::span(expr.pos, value.pos);
        return Ok(Expr::new(
            ExprKind::Assign {
                target: Box::new(expr),
                value: Box::new(value),
            },
            pos,
        ));
    }

    Ok(expr)
}

fn parse_or(parser: &mut Parser) -> Result<Expr, ParseError> {
    let mut expr = parse_and(parser)?;

    while parser.match_token(&TokenType::Or) {
        let op = utils::binary_operator_from_token(parser.previous())?;
        let right = parse_and(parser)?;
        expr = make_binary(expr, op, right);
    }

    Ok(expr)
}

fn parse_and(parser: &mut Parser) -> Result<Expr, ParseError> {
    let mut expr = parse_equality(parser)?;

    while parser.match_token(&TokenType::And) {
        let op = utils::binary_operator_from_token(parser.previous())?;
        let right = parse_equality(parser)?;
        expr = make_binary(expr, op, right);
    }

    Ok(expr)
}

fn parse_equality(parser: &mut Parser) -> Result<Expr, ParseError> {
    let mut expr = parse_comparison(parser)?;

    while parser.match_token(&TokenType::EqualEqual) || parser.match_token(&TokenType::NotEqual) {
        let op = utils::binary_operator_from_token(parser.previous())?;
        let right = parse_comparison(parser)?;
        expr = make_binary(expr, op, right);
    }

    Ok(expr)
}

fn parse_comparison(parser: &mut Parser) -> Result<Expr, ParseError> {
    let mut expr = parse_term(parser)?;

    while parser.match_token(&TokenType::Less)
        || parser.match_token(&TokenType::LessEqual)
        || parser.match_token(&TokenType::Greater)
        || parser.match_token(&TokenType::GreaterEqual)
    {
        let op = utils::binary_operator_from_token(parser.previous())?;
        let right = parse_term(parser)?;
        expr = make_binary(expr, op, right);
    }

    Ok(expr)
}

fn parse_term(parser: &mut Parser) -> Result<Expr, ParseError> {
    let mut expr = parse_factor(parser)?;

    while parser.match_token(&TokenType::Plus) || parser.match_token(&TokenType::Minus) {
        let op = utils::binary_operator_from_token(parser.previous())?;
        let right = parse_factor(parser)?;
        expr = make_binary(expr, op, right);
    }

    Ok(expr)
}

fn parse_factor(parser: &mut Parser) -> Result<Expr, ParseError> {
    let mut expr = parse_unary(parser)?;

    while parser.match_token(&TokenType::Star) || parser.match_token(&TokenType::Slash) {
        let op = utils::binary_operator_from_token(parser.previous())?;
        let right = parse_unary(parser)?;
        expr = make_binary(expr, op, right);
    }

    Ok(expr)
}

fn parse_unary(parser: &mut Parser) -> Result<Expr, ParseError> {
    if parser.match_token(&TokenType::Plus)
        || parser.match_token(&TokenType::Minus)
        || parser.match_token(&TokenType::Not)
    {
        let op_token = parser.previous().clone();
        let op = utils::unary_operator_from_token(&op_token)?;
        let operand = parse_unary(parser)?;
        let pos = SourcePos::span(op_token.pos, operand.pos);
        return Ok(Expr::new(
            ExprKind::Unary {
                op,
                op_class: None,
                operand: Box::new(operand),
            },
            pos,
        ));
    }

    parse_primary(parser)
}

fn parse_primary(parser: &mut Parser) -> Result<Expr, ParseError> {
    let token = parser.peek().clone();
    match token.token_type {
        TokenType::IntLiteral(value) => {
            parser.advance();
            Ok(Expr::new(ExprKind::IntLit(value), token.pos))
        }
        TokenType::FloatLiteral(value) => {
            parser.advance();
            Ok(Expr::new(ExprKind::FloatLit(value), token.pos))
        }
        TokenType::BooleanLiteral(value) => {
            parser.advance();
            Ok(Expr::new(ExprKind::BoolLit(value), token.pos))
        }
        TokenType::StringLiteral(ref value) => {
            parser.advance();
            Ok(Expr::new(ExprKind::StringLit(value.clone()), token.pos))
        }
        TokenType::Identifier(ref name) => {
            parser.advance();
            parse_identifier_postfix(parser, name.clone(), token.pos)
        }
        TokenType::LeftParen => {
            parser.advance();
            let expr = parse_expression(parser)?;
            parser.consume(&TokenType::RightParen, "Expected ')' after expression")?;
            Ok(expr)
        }
        _ => Err(ParseError {
            message: format!("Expected expression, got {:?}", token.token_type),
            line: token.pos.line_start,
        }),
    }
}

/// An identifier may stand alone, be called, or be indexed. Calls and
/// one-dimensional indexing are the only postfix forms in VC.
fn parse_identifier_postfix(
    parser: &mut Parser,
    name: String,
    start: SourcePos,
) -> Result<Expr, ParseError> {
    if parser.match_token(&TokenType::LeftParen) {
        let mut args = Vec::new();
        if !parser.check(&TokenType::RightParen) {
            loop {
                args.push(parse_expression(parser)?);
                if !parser.match_token(&TokenType::Comma) {
                    break;
                }
            }
        }
        parser.consume(&TokenType::RightParen, "Expected ')' after arguments")?;
        return Ok(Expr::new(
            ExprKind::Call {
                name,
                symbol: None,
                args,
            },
            parser.span_from(start),
        ));
    }

    let var = Expr::new(ExprKind::Var { name, symbol: None }, start);

    if parser.match_token(&TokenType::LeftBracket) {
        let index = parse_expression(parser)?;
        parser.consume(&TokenType::RightBracket, "Expected ']' after index expression")?;
        return Ok(Expr::new(
            ExprKind::Index {
                base: Box::new(var),
                index: Box::new(index),
            },
            parser.span_from(start),
        ));
    }

    Ok(var)
}

/// An initializer is either a single expression or a brace-enclosed
/// element list (arrays only; the checker enforces that).
pub fn parse_initializer(parser: &mut Parser) -> Result<Expr, ParseError> {
    if !parser.check(&TokenType::LeftBrace) {
        return parse_expression(parser);
    }

    let start = parser.start_pos();
    parser.advance();

    let mut elements = Vec::new();
    if !parser.check(&TokenType::RightBrace) {
        loop {
            elements.push(parse_expression(parser)?);
            if !parser.match_token(&TokenType::Comma) {
                break;
            }
        }
    }

    parser.consume(&TokenType::RightBrace, "Expected '}' after initializer list")?;

    Ok(Expr::new(
        ExprKind::ArrayInit { elements },
        parser.span_from(start),
    ))
}

fn make_binary(left: Expr, op: crate::ast::BinaryOperator, right: Expr) -> Expr {
    let pos = SourcePos::span(left.pos, right.pos);
    Expr::new(
        ExprKind::Binary {
            op,
            op_class: None,
            left: Box::new(left),
            right: Box::new(right),
        },
        pos,
    )
}
