//! Lexer shared by the Turtle and N-Triples parsers, built on winnow.

pub mod chars;
pub mod lexer;
pub mod token;

pub use lexer::{line_col, strip_bom, tokenize, Lexer};
pub use token::{Token, TokenKind};
