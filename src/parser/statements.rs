//! Statement parsing: compound blocks, control flow and expression
//! statements.

use super::{declarations, expressions, types, ParseError, Parser};
use crate::ast::Stmt;
use crate::lexer::TokenType;

/// Parses a compound statement: `{ var-decl* stmt* }`. Declarations
/// precede statements, as VC requires.
pub fn parse_compound(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let start = parser.start_pos();
    parser.consume(&TokenType::LeftBrace, "Expected '{' before block")?;

    let mut decls = Vec::new();
    while types::is_type_start(parser) {
        decls.extend(declarations::parse_var_decl(parser)?);
    }

    let mut stmts = Vec::new();
    while !parser.check(&TokenType::RightBrace) && !parser.is_at_end() {
        stmts.push(parse_statement(parser)?);
    }

    parser.consume(&TokenType::RightBrace, "Expected '}' after block")?;

    Ok(Stmt::Compound {
        decls,
        stmts,
        pos: parser.span_from(start),
    })
}

pub fn parse_statement(parser: &mut Parser) -> Result<Stmt, ParseError> {
    if parser.check(&TokenType::LeftBrace) {
        return parse_compound(parser);
    }

    if parser.match_token(&TokenType::If) {
        return parse_if(parser);
    }

    if parser.match_token(&TokenType::For) {
        return parse_for(parser);
    }

    if parser.match_token(&TokenType::While) {
        return parse_while(parser);
    }

    if parser.match_token(&TokenType::Break) {
        let start = parser.end_pos();
        parser.consume(&TokenType::Semicolon, "Expected ';' after 'break'")?;
        return Ok(Stmt::Break {
            pos: parser.span_from(start),
        });
    }

    if parser.match_token(&TokenType::Continue) {
        let start = parser.end_pos();
        parser.consume(&TokenType::Semicolon, "Expected ';' after 'continue'")?;
        return Ok(Stmt::Continue {
            pos: parser.span_from(start),
        });
    }

    if parser.match_token(&TokenType::Return) {
        return parse_return(parser);
    }

    if parser.match_token(&TokenType::Semicolon) {
        return Ok(Stmt::Empty {
            pos: parser.end_pos(),
        });
    }

    let expr = expressions::parse_expression(parser)?;
    parser.consume(&TokenType::Semicolon, "Expected ';' after expression")?;
    Ok(Stmt::Expr(expr))
}

fn parse_if(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let start = parser.end_pos();
    parser.consume(&TokenType::LeftParen, "Expected '(' after 'if'")?;
    let cond = expressions::parse_expression(parser)?;
    parser.consume(&TokenType::RightParen, "Expected ')' after if condition")?;

    let then_branch = Box::new(parse_statement(parser)?);

    let else_branch = if parser.match_token(&TokenType::Else) {
        Some(Box::new(parse_statement(parser)?))
    } else {
        None
    };

    Ok(Stmt::If {
        cond,
        then_branch,
        else_branch,
        pos: parser.span_from(start),
    })
}

fn parse_while(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let start = parser.end_pos();
    parser.consume(&TokenType::LeftParen, "Expected '(' after 'while'")?;
    let cond = expressions::parse_expression(parser)?;
    parser.consume(&TokenType::RightParen, "Expected ')' after while condition")?;

    let body = Box::new(parse_statement(parser)?);

    Ok(Stmt::While {
        cond,
        body,
        pos: parser.span_from(start),
    })
}

fn parse_for(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let start = parser.end_pos();
    parser.consume(&TokenType::LeftParen, "Expected '(' after 'for'")?;

    // All three slots are optional expressions
    let init = if parser.check(&TokenType::Semicolon) {
        None
    } else {
        Some(expressions::parse_expression(parser)?)
    };
    parser.consume(&TokenType::Semicolon, "Expected ';' after for initializer")?;

    let cond = if parser.check(&TokenType::Semicolon) {
        None
    } else {
        Some(expressions::parse_expression(parser)?)
    };
    parser.consume(&TokenType::Semicolon, "Expected ';' after loop condition")?;

    let step = if parser.check(&TokenType::RightParen) {
        None
    } else {
        Some(expressions::parse_expression(parser)?)
    };
    parser.consume(&TokenType::RightParen, "Expected ')' after for clauses")?;

    let body = Box::new(parse_statement(parser)?);

    Ok(Stmt::For {
        init,
        cond,
        step,
        body,
        pos: parser.span_from(start),
    })
}

fn parse_return(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let start = parser.end_pos();
    let value = if parser.check(&TokenType::Semicolon) {
        None
    } else {
        Some(expressions::parse_expression(parser)?)
    };

    parser.consume(&TokenType::Semicolon, "Expected ';' after return value")?;
    Ok(Stmt::Return {
        value,
        pos: parser.span_from(start),
    })
}
