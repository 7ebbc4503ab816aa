#![allow(clippy::module_inception)]

use errors::errors::Error;
use lazy_static::lazy_static;
use lexer::{lexer::Scanner, tokens::Token};

pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

pub use config::{LexerConfig, SymbolPolicy};

lazy_static! {
    /// Scanner over the standard pattern table, compiled on first use.
    static ref DEFAULT_SCANNER: Scanner = Scanner::default();
}

/// Lexes `source` with the standard pattern table and default configuration.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    DEFAULT_SCANNER.lex(source)
}
