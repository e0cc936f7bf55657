#![allow(dead_code)]

use graphql_lexer::{LexError, Lexer, Source, Token, TokenKind};

/// Lex `body` under the default name and return the first token.
pub fn first_token(body: &str) -> Token {
    let source = Source::from_body(body);
    Lexer::new(&source)
        .next_token()
        .unwrap_or_else(|e| panic!("unexpected error for {body:?}:\n{e}"))
}

/// Lex `body` under the default name and return the first error.
pub fn first_error(body: &str) -> LexError {
    let source = Source::from_body(body);
    match Lexer::new(&source).next_token() {
        Ok(token) => panic!("expected an error for {body:?}, got {token:?}"),
        Err(e) => e,
    }
}

/// Every token before EOF.
pub fn lex_all(source: &Source) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer
            .next_token()
            .unwrap_or_else(|e| panic!("unexpected error:\n{e}"));
        if token.kind == TokenKind::Eof {
            return tokens;
        }
        tokens.push(token);
    }
}

pub fn token(kind: TokenKind, start: usize, end: usize, value: &str) -> Token {
    Token {
        kind,
        start,
        end,
        value: value.to_string(),
    }
}
