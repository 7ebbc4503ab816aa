use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::TokenKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("pattern {pattern:?} for {kind} is invalid: {message}")]
    Configuration {
        pattern: String,
        kind: TokenKind,
        message: String,
    },
    #[error("no pattern matches {found:?} at offset {offset}")]
    NoMatch { offset: usize, found: char },
    #[error("pattern for {kind} matched an empty prefix at offset {offset}")]
    ZeroWidthMatch { offset: usize, kind: TokenKind },
    #[error("input of {len} bytes exceeds the limit of {limit} bytes")]
    InputTooLarge { len: usize, limit: usize },
}

impl Error {
    pub fn get_error_name(&self) -> &str {
        match self {
            Error::Configuration { .. } => "ConfigurationError",
            Error::NoMatch { .. } => "NoMatch",
            Error::ZeroWidthMatch { .. } => "ZeroWidthMatch",
            Error::InputTooLarge { .. } => "InputTooLarge",
        }
    }

    /// Byte offset in the input the error refers to, if any.
    pub fn get_offset(&self) -> Option<usize> {
        match self {
            Error::NoMatch { offset, .. } | Error::ZeroWidthMatch { offset, .. } => Some(*offset),
            Error::Configuration { .. } | Error::InputTooLarge { .. } => None,
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            Error::Configuration { .. } => ErrorTip::None,
            Error::NoMatch { found, .. } => {
                ErrorTip::Suggestion(format!("Unexpected character `{}`", found.escape_debug()))
            }
            Error::ZeroWidthMatch { kind, .. } => ErrorTip::Suggestion(format!(
                "The {} pattern can match empty text, fix the pattern table",
                kind
            )),
            Error::InputTooLarge { limit, .. } => ErrorTip::Suggestion(format!(
                "Split the input or raise the limit above {} bytes",
                limit
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}
