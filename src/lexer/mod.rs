use std::fmt;

use crate::ast::SourcePos;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenType {
    // Keywords
    Boolean,
    Break,
    Continue,
    Else,
    Float,
    For,
    If,
    Int,
    Return,
    StringKw,
    Void,
    While,

    // Identifiers and literals
    Identifier(String),
    IntLiteral(i64),
    FloatLiteral(f64),
    BooleanLiteral(bool),
    StringLiteral(String),

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Not,
    NotEqual,
    Assign,
    EqualEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    And,
    Or,

    // Separators
    LeftBrace,
    RightBrace,
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    Semicolon,
    Comma,

    Eof,
}

#[derive(Debug, Clone)]
pub struct Token {
    pub token_type: TokenType,
    pub lexeme: String,
    pub pos: SourcePos,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} '{}'", self.token_type, self.lexeme)
    }
}

#[derive(Debug)]
pub struct LexerError {
    pub message: String,
    pub line: usize,
}

impl fmt::Display for LexerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lexer error on line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for LexerError {}

pub fn tokenize(source: &str) -> Result<Vec<Token>, LexerError> {
    let mut lexer = Lexer::new(source);
    lexer.tokenize()
}

pub struct Lexer {
    source: String,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
    column: usize,
    token_line: usize,
    token_column: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            column: 1,
            token_line: 1,
            token_column: 1,
        }
    }

    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexerError> {
        while !self.is_at_end() {
            self.skip_whitespace_and_comments()?;
            if self.is_at_end() {
                break;
            }

            self.start = self.current;
            self.token_line = self.line;
            self.token_column = self.column;
            self.scan_token()?;
        }

        self.tokens.push(Token {
            token_type: TokenType::Eof,
            lexeme: "".to_string(),
            pos: SourcePos {
                line_start: self.line,
                col_start: self.column,
                line_finish: self.line,
                col_finish: self.column,
            },
        });

        Ok(self.tokens.clone())
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<(), LexerError> {
        loop {
            match self.peek() {
                ' ' | '\r' | '\t' | '\n' => {
                    self.advance();
                }
                '/' => {
                    if self.peek_next() == '/' {
                        while self.peek() != '\n' && !self.is_at_end() {
                            self.advance();
                        }
                    } else if self.peek_next() == '*' {
                        let open_line = self.line;
                        self.advance();
                        self.advance();
                        loop {
                            if self.is_at_end() {
                                return Err(LexerError {
                                    message: "Unterminated comment".to_string(),
                                    line: open_line,
                                });
                            }
                            if self.peek() == '*' && self.peek_next() == '/' {
                                self.advance();
                                self.advance();
                                break;
                            }
                            self.advance();
                        }
                    } else {
                        break;
                    }
                }
                _ => break,
            }
            if self.is_at_end() {
                break;
            }
        }
        Ok(())
    }

    fn scan_token(&mut self) -> Result<(), LexerError> {
        let c = self.advance();
        match c {
            '{' => self.add_token(TokenType::LeftBrace),
            '}' => self.add_token(TokenType::RightBrace),
            '(' => self.add_token(TokenType::LeftParen),
            ')' => self.add_token(TokenType::RightParen),
            '[' => self.add_token(TokenType::LeftBracket),
            ']' => self.add_token(TokenType::RightBracket),
            ';' => self.add_token(TokenType::Semicolon),
            ',' => self.add_token(TokenType::Comma),
            '+' => self.add_token(TokenType::Plus),
            '-' => self.add_token(TokenType::Minus),
            '*' => self.add_token(TokenType::Star),
            '/' => self.add_token(TokenType::Slash),
            '!' => {
                let token_type = if self.match_char('=') {
                    TokenType::NotEqual
                } else {
                    TokenType::Not
                };
                self.add_token(token_type);
            }
            '=' => {
                let token_type = if self.match_char('=') {
                    TokenType::EqualEqual
                } else {
                    TokenType::Assign
                };
                self.add_token(token_type);
            }
            '<' => {
                let token_type = if self.match_char('=') {
                    TokenType::LessEqual
                } else {
                    TokenType::Less
                };
                self.add_token(token_type);
            }
            '>' => {
                let token_type = if self.match_char('=') {
                    TokenType::GreaterEqual
                } else {
                    TokenType::Greater
                };
                self.add_token(token_type);
            }
            '&' => {
                if self.match_char('&') {
                    self.add_token(TokenType::And);
                } else {
                    return Err(LexerError {
                        message: "Unexpected character: &".to_string(),
                        line: self.line,
                    });
                }
            }
            '|' => {
                if self.match_char('|') {
                    self.add_token(TokenType::Or);
                } else {
                    return Err(LexerError {
                        message: "Unexpected character: |".to_string(),
                        line: self.line,
                    });
                }
            }
            '"' => self.string()?,
            '.' => {
                if self.peek().is_ascii_digit() {
                    self.number(true)?;
                } else {
                    return Err(LexerError {
                        message: "Unexpected character: .".to_string(),
                        line: self.line,
                    });
                }
            }
            '0'..='9' => self.number(false)?,
            'a'..='z' | 'A'..='Z' | '_' => self.identifier(),
            _ => {
                return Err(LexerError {
                    message: format!("Unexpected character: {}", c),
                    line: self.line,
                });
            }
        }

        Ok(())
    }

    fn identifier(&mut self) {
        while self.peek().is_ascii_alphanumeric() || self.peek() == '_' {
            self.advance();
        }

        let text = self.source[self.start..self.current].to_string();
        let token_type = match text.as_str() {
            "boolean" => TokenType::Boolean,
            "break" => TokenType::Break,
            "continue" => TokenType::Continue,
            "else" => TokenType::Else,
            "float" => TokenType::Float,
            "for" => TokenType::For,
            "if" => TokenType::If,
            "int" => TokenType::Int,
            "return" => TokenType::Return,
            "string" => TokenType::StringKw,
            "void" => TokenType::Void,
            "while" => TokenType::While,
            "true" => TokenType::BooleanLiteral(true),
            "false" => TokenType::BooleanLiteral(false),
            _ => TokenType::Identifier(text),
        };

        self.add_token(token_type);
    }

    fn number(&mut self, started_with_dot: bool) -> Result<(), LexerError> {
        let mut is_float = started_with_dot;

        if !started_with_dot {
            while self.peek().is_ascii_digit() {
                self.advance();
            }
            // fraction: "1.2" and "2." are both valid float forms
            if self.peek() == '.' {
                is_float = true;
                self.advance();
            }
        }
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        // Exponent needs at least one digit after e/E (and optional sign),
        // otherwise the e/E belongs to whatever follows
        if self.peek() == 'e' || self.peek() == 'E' {
            let saved_current = self.current;
            let saved_column = self.column;
            self.advance();
            if self.peek() == '+' || self.peek() == '-' {
                self.advance();
            }
            if self.peek().is_ascii_digit() {
                is_float = true;
                while self.peek().is_ascii_digit() {
                    self.advance();
                }
            } else {
                self.current = saved_current;
                self.column = saved_column;
            }
        }

        let text = &self.source[self.start..self.current];
        if is_float {
            match text.parse::<f64>() {
                Ok(value) => self.add_token(TokenType::FloatLiteral(value)),
                Err(_) => {
                    return Err(LexerError {
                        message: format!("Invalid float literal: {}", text),
                        line: self.line,
                    });
                }
            }
        } else {
            match text.parse::<i64>() {
                Ok(value) => self.add_token(TokenType::IntLiteral(value)),
                Err(_) => {
                    return Err(LexerError {
                        message: format!("Invalid integer literal: {}", text),
                        line: self.line,
                    });
                }
            }
        }
        Ok(())
    }

    fn string(&mut self) -> Result<(), LexerError> {
        let mut value = String::new();

        loop {
            if self.is_at_end() || self.peek() == '\n' {
                return Err(LexerError {
                    message: "Unterminated string".to_string(),
                    line: self.line,
                });
            }
            match self.advance() {
                '"' => break,
                '\\' => {
                    let escape = self.advance();
                    match escape {
                        'b' => value.push('\u{0008}'),
                        'f' => value.push('\u{000C}'),
                        'n' => value.push('\n'),
                        'r' => value.push('\r'),
                        't' => value.push('\t'),
                        '\'' => value.push('\''),
                        '"' => value.push('"'),
                        '\\' => value.push('\\'),
                        _ => {
                            return Err(LexerError {
                                message: format!("Illegal escape character: \\{}", escape),
                                line: self.line,
                            });
                        }
                    }
                }
                c => value.push(c),
            }
        }

        self.add_token(TokenType::StringLiteral(value));
        Ok(())
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.peek() != expected {
            return false;
        }

        self.advance();
        true
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current..].chars().next().unwrap_or('\0')
        }
    }

    fn peek_next(&self) -> char {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next().unwrap_or('\0')
    }

    fn advance(&mut self) -> char {
        if self.is_at_end() {
            return '\0';
        }

        let ch = self.source[self.current..].chars().next().unwrap_or('\0');
        self.current += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        ch
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn add_token(&mut self, token_type: TokenType) {
        let lexeme = self.source[self.start..self.current].to_string();
        self.tokens.push(Token {
            token_type,
            lexeme,
            pos: SourcePos {
                line_start: self.token_line,
                col_start: self.token_column,
                line_finish: self.line,
                col_finish: self.column.saturating_sub(1),
            },
        });
    }
}
