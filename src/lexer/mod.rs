//! Lexical analysis for the Lisp notation.
//!
//! This module contains the scanner that splits source text into tokens.
//! It handles:
//!
//! - An ordered, compiled pattern table deciding lexical priority
//! - The scan loop producing a gapless, offset-tagged token sequence
//! - Rendering token sequences for debugging and reconstruction

pub mod lexer;
pub mod patterns;
pub mod printer;
pub mod tokens;
