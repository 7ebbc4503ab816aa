use std::fmt::Display;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    OpenParen,
    CloseParen,
    Symbol,
    String,
    Integer,
    Quote, // '

    Comment,
    Whitespace,

    // Reserved: no pattern produces these yet
    Float,
    CommaSplice,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl TokenKind {
    /// Kinds kept in the enum for downstream matches but never emitted.
    pub fn is_reserved(&self) -> bool {
        matches!(self, TokenKind::Float | TokenKind::CommaSplice)
    }

    pub fn is_paren(&self) -> bool {
        matches!(self, TokenKind::OpenParen | TokenKind::CloseParen)
    }

    /// Whitespace and comments, which a parser skips.
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub offset: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}\t{:?}", self.offset, self.kind, self.text)
    }
}

impl Token {
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte offset one past the last byte of the token.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    pub fn is_paren(&self) -> bool {
        self.kind.is_paren()
    }

    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }
}
