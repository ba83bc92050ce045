//! Type parsing: the primitive type keywords and the array declarator
//! suffix.

use super::{ParseError, Parser};
use crate::ast::Type;
use crate::lexer::TokenType;

pub fn is_type_start(parser: &Parser) -> bool {
    matches!(
        parser.peek().token_type,
        TokenType::Void
            | TokenType::Boolean
            | TokenType::Int
            | TokenType::Float
            | TokenType::StringKw
    )
}

pub fn parse_type(parser: &mut Parser) -> Result<Type, ParseError> {
    if parser.match_token(&TokenType::Void) {
        Ok(Type::Void)
    } else if parser.match_token(&TokenType::Boolean) {
        Ok(Type::Boolean)
    } else if parser.match_token(&TokenType::Int) {
        Ok(Type::Int)
    } else if parser.match_token(&TokenType::Float) {
        Ok(Type::Float)
    } else if parser.match_token(&TokenType::StringKw) {
        Ok(Type::String)
    } else {
        Err(ParseError {
            message: "Expected type".to_string(),
            line: parser.peek().pos.line_start,
        })
    }
}

/// Parses an optional `[ size? ]` suffix after a declarator name,
/// turning the base type into an array type. The size may be omitted
/// (`int a[]`); the checker then requires an initializer to infer it.
pub fn parse_array_suffix(parser: &mut Parser, base: Type) -> Result<Type, ParseError> {
    if !parser.match_token(&TokenType::LeftBracket) {
        return Ok(base);
    }

    let size = if let TokenType::IntLiteral(n) = &parser.peek().token_type {
        let n = *n as usize;
        parser.advance();
        Some(n)
    } else {
        None
    };

    parser.consume(&TokenType::RightBracket, "Expected ']' after array size")?;

    Ok(Type::Array {
        elem: Box::new(base),
        size,
    })
}
