//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PATTERN!` - Creates a (pattern source, TokenKind) table entry
//!
//! These macros keep the pattern table and the scan loop free of
//! boilerplate.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$text` - The matched text (anything convertible into `String`)
/// * `$offset` - Byte offset of the match in the original input
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42", 0);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $offset:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            text: ::std::string::String::from($text),
            offset: $offset,
        }
    };
}

/// Creates a pattern table entry pairing a regex source with the kind it
/// produces. The source is anchored when the table is compiled.
///
/// # Example
///
/// ```ignore
/// let entry = MK_PATTERN!("\\(", TokenKind::OpenParen);
/// ```
#[macro_export]
macro_rules! MK_PATTERN {
    ($source:expr, $kind:expr) => {
        (::std::string::String::from($source), $kind)
    };
}
