//! Parser helpers shared across submodules.

use super::ParseError;
use crate::ast::{BinaryOperator, UnaryOperator};
use crate::lexer::{Token, TokenType};

/// Converts a token to a binary operator
pub fn binary_operator_from_token(token: &Token) -> Result<BinaryOperator, ParseError> {
    match &token.token_type {
        TokenType::Plus => Ok(BinaryOperator::Plus),
        TokenType::Minus => Ok(BinaryOperator::Minus),
        TokenType::Star => Ok(BinaryOperator::Star),
        TokenType::Slash => Ok(BinaryOperator::Slash),
        TokenType::EqualEqual => Ok(BinaryOperator::EqualEqual),
        TokenType::NotEqual => Ok(BinaryOperator::NotEqual),
        TokenType::Less => Ok(BinaryOperator::Less),
        TokenType::LessEqual => Ok(BinaryOperator::LessEqual),
        TokenType::Greater => Ok(BinaryOperator::Greater),
        TokenType::GreaterEqual => Ok(BinaryOperator::GreaterEqual),
        TokenType::And => Ok(BinaryOperator::And),
        TokenType::Or => Ok(BinaryOperator::Or),
        _ => Err(ParseError {
            message: format!("Invalid binary operator: {:?}", token.token_type),
            line: token.pos.line_start,
        }),
    }
}

/// Converts a token to a unary operator
pub fn unary_operator_from_token(token: &Token) -> Result<UnaryOperator, ParseError> {
    match &token.token_type {
        TokenType::Plus => Ok(UnaryOperator::Plus),
        TokenType::Minus => Ok(UnaryOperator::Minus),
        TokenType::Not => Ok(UnaryOperator::Not),
        _ => Err(ParseError {
            message: format!("Invalid unary operator: {:?}", token.token_type),
            line: token.pos.line_start,
        }),
    }
}
