//! Error types for the lexer.
//!
//! This module defines the errors a pattern table or a lex call can
//! produce:
//!
//! - Configuration errors raised while compiling a pattern table
//! - Lex failures carrying the byte offset of the offending input
//! - Short tips a front end can show next to the message

pub mod errors;
