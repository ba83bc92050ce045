//! Declaration parsing: the program top level, function declarations
//! and variable declarator lists.
//!
//! A top-level declaration starts with a type; whether it is a function
//! or a variable list is decided by the token after the identifier.

use super::{expressions, statements, types, ParseError, Parser};
use crate::ast::{Decl, FuncDecl, ParamDecl, Program, SourcePos, Type, VarDecl};
use crate::lexer::TokenType;

pub fn parse_program(parser: &mut Parser) -> Result<Program, ParseError> {
    let mut decls = Vec::new();

    while !parser.is_at_end() {
        parse_declaration(parser, &mut decls)?;
    }

    Ok(Program { decls })
}

fn parse_declaration(parser: &mut Parser, decls: &mut Vec<Decl>) -> Result<(), ParseError> {
    let start = parser.start_pos();
    let base_type = types::parse_type(parser)?;
    let name = parser.consume_identifier("Expected identifier after type")?;

    if parser.check(&TokenType::LeftParen) {
        decls.push(Decl::Func(parse_func_decl(parser, base_type, name, start)?));
    } else {
        for var in parse_declarator_list(parser, base_type, name, start)? {
            decls.push(Decl::Var(var));
        }
    }

    Ok(())
}

fn parse_func_decl(
    parser: &mut Parser,
    return_type: Type,
    name: String,
    start: SourcePos,
) -> Result<FuncDecl, ParseError> {
    parser.consume(&TokenType::LeftParen, "Expected '(' after function name")?;

    let mut params = Vec::new();
    if !parser.check(&TokenType::RightParen) {
        loop {
            params.push(parse_param(parser)?);
            if !parser.match_token(&TokenType::Comma) {
                break;
            }
        }
    }

    parser.consume(&TokenType::RightParen, "Expected ')' after parameters")?;

    let body = statements::parse_compound(parser)?;

    Ok(FuncDecl {
        return_type,
        name,
        params,
        body,
        pos: parser.span_from(start),
    })
}

fn parse_param(parser: &mut Parser) -> Result<ParamDecl, ParseError> {
    let start = parser.start_pos();
    let base = types::parse_type(parser)?;
    let name = parser.consume_identifier("Expected parameter name")?;
    let param_type = types::parse_array_suffix(parser, base)?;

    Ok(ParamDecl {
        param_type,
        name,
        pos: parser.span_from(start),
    })
}

/// Parses a local variable declaration: `type declarator (, declarator)* ;`.
/// Each declarator expands to its own `VarDecl` sharing the base type.
pub fn parse_var_decl(parser: &mut Parser) -> Result<Vec<VarDecl>, ParseError> {
    let start = parser.start_pos();
    let base_type = types::parse_type(parser)?;
    let name = parser.consume_identifier("Expected identifier after type")?;
    parse_declarator_list(parser, base_type, name, start)
}

fn parse_declarator_list(
    parser: &mut Parser,
    base_type: Type,
    first_name: String,
    start: SourcePos,
) -> Result<Vec<VarDecl>, ParseError> {
    let mut decls = Vec::new();
    let mut name = first_name;
    let mut decl_start = start;

    loop {
        let var_type = types::parse_array_suffix(parser, base_type.clone())?;
        let init = if parser.match_token(&TokenType::Assign) {
            Some(expressions::parse_initializer(parser)?)
        } else {
            None
        };
        decls.push(VarDecl {
            var_type,
            name,
            init,
            pos: parser.span_from(decl_start),
        });

        if !parser.match_token(&TokenType::Comma) {
            break;
        }
        decl_start = parser.start_pos();
        name = parser.consume_identifier("Expected identifier after ','")?;
    }

    parser.consume(
        &TokenType::Semicolon,
        "Expected ';' after variable declaration",
    )?;

    Ok(decls)
}
