//! Turning token sequences back into text.

use super::tokens::{Token, TokenKind};

/// One line per token: offset, kind and quoted text, in aligned columns.
pub fn render_tokens(tokens: &[Token]) -> String {
    let offset_width = tokens
        .iter()
        .map(|t| t.offset.to_string().len())
        .max()
        .unwrap_or(0);
    let kind_width = tokens
        .iter()
        .map(|t| t.kind.to_string().len())
        .max()
        .unwrap_or(0);

    let mut result = String::new();
    for token in tokens {
        result.push_str(&format!(
            "{:>offset_width$}  {:<kind_width$}  {:?}\n",
            token.offset,
            token.kind.to_string(),
            token.text,
        ));
    }

    result
}

/// Exact source text: every token's text in order.
pub fn reconstruct(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

/// Tokens a parser consumes, with whitespace and comments left out.
pub fn significant(tokens: &[Token]) -> impl Iterator<Item = &Token> {
    tokens.iter().filter(|t| !t.is_trivia())
}

/// Normalised layout of the source. Comments and original whitespace are
/// dropped, adjacent tokens are joined by a single space except right after
/// `(` and right before `)`.
pub fn pretty_print(tokens: &[Token]) -> String {
    let mut result = String::new();
    let mut previous: Option<TokenKind> = None;

    for token in significant(tokens) {
        if let Some(prev) = previous {
            if prev != TokenKind::OpenParen && token.kind != TokenKind::CloseParen {
                result.push(' ');
            }
        }

        result.push_str(&token.text);
        previous = Some(token.kind);
    }

    result
}
