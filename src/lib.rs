//! Lexical scanner for GraphQL documents.
//!
//! Turns a named document body into position-tagged tokens, and
//! reports the first lexical error with a caret-annotated snippet of
//! the offending line.
//!
//! # Quick start
//!
//! ## Tokenize a whole document
//!
//! ```
//! use graphql_lexer::{Source, TokenKind, tokenize};
//!
//! let source = Source::from_body("{ user(id: 4) { name } }");
//! let tokens = tokenize(&source).unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::BraceL);
//! assert_eq!(tokens[1].value, "user");
//! assert!(tokens.last().unwrap().is_eof());
//! ```
//!
//! ## Pull tokens one at a time
//!
//! ```
//! use graphql_lexer::{Lexer, Source, TokenKind};
//!
//! let source = Source::new("query.graphql", "a ?");
//! let mut lexer = Lexer::new(&source);
//! assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Name);
//!
//! let err = lexer.next_token().unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Syntax Error query.graphql (1:3) Unexpected character \"?\".\n\n1: a ?\n     ^\n"
//! );
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

pub mod lexer;
pub mod location;
pub mod source;
pub mod token;

pub use lexer::{LexError, LexErrorKind, Lexer, NumberError, tokenize};
pub use location::{SourceLocation, locate, render};
pub use source::Source;
pub use token::{Token, TokenKind};

/// Crate-level error returned by [`tokenize_str`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A lexer error.
    #[error("{0}")]
    Lex(#[from] LexError),
}

/// Tokenize a document body under the default source name.
pub fn tokenize_str(body: &str) -> Result<Vec<Token>, Error> {
    Ok(tokenize(&Source::from_body(body))?)
}
