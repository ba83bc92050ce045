#[cfg(test)]
mod tests {
    use crate::lexer::{tokenize, TokenType};

    #[test]
    fn test_keywords_and_identifiers() {
        let tokens = tokenize("int x; while whilst").unwrap();
        let types: Vec<_> = tokens.iter().map(|t| t.token_type.clone()).collect();
        assert_eq!(
            types,
            vec![
                TokenType::Int,
                TokenType::Identifier("x".to_string()),
                TokenType::Semicolon,
                TokenType::While,
                TokenType::Identifier("whilst".to_string()),
                TokenType::Eof,
            ]
        );
    }

    #[test]
    fn test_operators() {
        let tokens = tokenize("+ - * / < <= > >= == != = && || !").unwrap();
        let types: Vec<_> = tokens.iter().map(|t| t.token_type.clone()).collect();
        assert_eq!(
            types,
            vec![
                TokenType::Plus,
                TokenType::Minus,
                TokenType::Star,
                TokenType::Slash,
                TokenType::Less,
                TokenType::LessEqual,
                TokenType::Greater,
                TokenType::GreaterEqual,
                TokenType::EqualEqual,
                TokenType::NotEqual,
                TokenType::Assign,
                TokenType::And,
                TokenType::Or,
                TokenType::Not,
                TokenType::Eof,
            ]
        );
    }

    #[test]
    fn test_int_literal() {
        let tokens = tokenize("42").unwrap();
        assert_eq!(tokens[0].token_type, TokenType::IntLiteral(42));
    }

    #[test]
    fn test_float_literal_forms() {
        let tokens = tokenize("1.5 .5 2. 1e3 1.5e-2").unwrap();
        assert_eq!(tokens[0].token_type, TokenType::FloatLiteral(1.5));
        assert_eq!(tokens[1].token_type, TokenType::FloatLiteral(0.5));
        assert_eq!(tokens[2].token_type, TokenType::FloatLiteral(2.0));
        assert_eq!(tokens[3].token_type, TokenType::FloatLiteral(1000.0));
        assert_eq!(tokens[4].token_type, TokenType::FloatLiteral(0.015));
    }

    #[test]
    fn test_exponent_needs_digits() {
        // the trailing 'e' is not an exponent, it starts an identifier
        let tokens = tokenize("12e").unwrap();
        assert_eq!(tokens[0].token_type, TokenType::IntLiteral(12));
        assert_eq!(tokens[1].token_type, TokenType::Identifier("e".to_string()));
    }

    #[test]
    fn test_boolean_literals() {
        let tokens = tokenize("true false").unwrap();
        assert_eq!(tokens[0].token_type, TokenType::BooleanLiteral(true));
        assert_eq!(tokens[1].token_type, TokenType::BooleanLiteral(false));
    }

    #[test]
    fn test_string_literal_with_escapes() {
        let tokens = tokenize("\"a\\tb\\n\\\"c\\\"\"").unwrap();
        assert_eq!(
            tokens[0].token_type,
            TokenType::StringLiteral("a\tb\n\"c\"".to_string())
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        let tokens = tokenize("int a; // trailing\n/* block\n comment */ float b;").unwrap();
        let types: Vec<_> = tokens.iter().map(|t| t.token_type.clone()).collect();
        assert_eq!(
            types,
            vec![
                TokenType::Int,
                TokenType::Identifier("a".to_string()),
                TokenType::Semicolon,
                TokenType::Float,
                TokenType::Identifier("b".to_string()),
                TokenType::Semicolon,
                TokenType::Eof,
            ]
        );
    }

    #[test]
    fn test_token_positions() {
        let tokens = tokenize("int x;\nfloat y;").unwrap();
        assert_eq!(tokens[0].pos.line_start, 1);
        assert_eq!(tokens[0].pos.col_start, 1);
        assert_eq!(tokens[0].pos.col_finish, 3);
        assert_eq!(tokens[1].pos.col_start, 5);
        assert_eq!(tokens[3].pos.line_start, 2);
        assert_eq!(tokens[3].pos.col_start, 1);
    }

    #[test]
    fn test_unterminated_string() {
        assert!(tokenize("\"abc").is_err());
        assert!(tokenize("\"abc\ndef\"").is_err());
    }

    #[test]
    fn test_illegal_escape() {
        assert!(tokenize("\"a\\qb\"").is_err());
    }

    #[test]
    fn test_unterminated_comment() {
        assert!(tokenize("/* no end").is_err());
    }

    #[test]
    fn test_stray_ampersand() {
        assert!(tokenize("a & b").is_err());
    }
}
