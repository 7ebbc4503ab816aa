use regex::Regex;

use crate::{config::SymbolPolicy, errors::errors::Error, MK_PATTERN};

use super::tokens::TokenKind;

pub const WHITESPACE: &str = r"[ \t\n\r]+";
pub const COMMENT: &str = r";[^\r\n]*";
pub const QUOTE: &str = r"'";
pub const OPEN_PAREN: &str = r"\(";
pub const CLOSE_PAREN: &str = r"\)";
// Only the `token` group is consumed; the trailing non-digit keeps `01234`
// from lexing as `0` then `1234`.
pub const INTEGER: &str = r"(?P<token>0|-?[1-9][0-9]*)(?:[^0-9]|\z)";
pub const SYMBOL_STRICT: &str = r#"[^0-9 \t\n\r':#"()][^ \t\n\r()]*"#;
pub const SYMBOL_PERMISSIVE: &str = r#"[^0-9 \t\n\r':#"][^ \t\n\r]*"#;
// A backslash escapes a quote or a raw tab, newline or carriage return.
pub const STRING: &str = r#""(?:\\["\n\r\t]|[^"\n\r\t])*""#;

/// Name of the capture group that, when present, bounds the consumed text.
/// Anything the pattern matches after it is lookahead only.
pub const TOKEN_GROUP: &str = "token";

/// The standard table in priority order. Earlier entries win over later ones
/// whenever both match at the same position.
pub fn standard_entries(policy: SymbolPolicy) -> Vec<(String, TokenKind)> {
    let symbol = match policy {
        SymbolPolicy::Strict => SYMBOL_STRICT,
        SymbolPolicy::Permissive => SYMBOL_PERMISSIVE,
    };

    vec![
        MK_PATTERN!(WHITESPACE, TokenKind::Whitespace),
        MK_PATTERN!(COMMENT, TokenKind::Comment),
        MK_PATTERN!(QUOTE, TokenKind::Quote),
        MK_PATTERN!(OPEN_PAREN, TokenKind::OpenParen),
        MK_PATTERN!(CLOSE_PAREN, TokenKind::CloseParen),
        MK_PATTERN!(INTEGER, TokenKind::Integer),
        MK_PATTERN!(symbol, TokenKind::Symbol),
        MK_PATTERN!(STRING, TokenKind::String),
    ]
}

#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    kind: TokenKind,
    priority: usize,
    has_token_group: bool,
}

impl Pattern {
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn priority(&self) -> usize {
        self.priority
    }

    /// The anchored source the matcher was compiled from.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Length in bytes of the prefix of `here` this pattern accepts.
    pub fn match_len(&self, here: &str) -> Option<usize> {
        if self.has_token_group {
            let captures = self.regex.captures(here)?;
            return Some(captures.name(TOKEN_GROUP).map_or(0, |m| m.end()));
        }

        self.regex.find(here).map(|m| m.end())
    }
}

/// Ordered, compiled set of patterns. Immutable once built.
#[derive(Debug, Clone)]
pub struct PatternTable {
    patterns: Vec<Pattern>,
}

impl PatternTable {
    pub fn new<S: AsRef<str>>(entries: &[(S, TokenKind)]) -> Result<PatternTable, Error> {
        let mut patterns = Vec::with_capacity(entries.len());

        for (priority, (source, kind)) in entries.iter().enumerate() {
            let source = source.as_ref();

            if kind.is_reserved() {
                return Err(Error::Configuration {
                    pattern: source.to_string(),
                    kind: *kind,
                    message: String::from("token kind is reserved"),
                });
            }

            let regex = Regex::new(&format!(r"\A(?:{})", source)).map_err(|e| {
                Error::Configuration {
                    pattern: source.to_string(),
                    kind: *kind,
                    message: e.to_string(),
                }
            })?;

            let has_token_group = regex.capture_names().any(|name| name == Some(TOKEN_GROUP));

            patterns.push(Pattern {
                regex,
                kind: *kind,
                priority,
                has_token_group,
            });
        }

        Ok(PatternTable { patterns })
    }

    pub fn standard(policy: SymbolPolicy) -> Result<PatternTable, Error> {
        PatternTable::new(&standard_entries(policy))
    }

    /// Kind and match length of the first pattern, in priority order, that
    /// accepts a prefix of `here`. The length may be zero; rejecting that is
    /// up to the caller.
    pub fn first_match(&self, here: &str) -> Option<(TokenKind, usize)> {
        self.patterns
            .iter()
            .find_map(|pattern| pattern.match_len(here).map(|end| (pattern.kind, end)))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
