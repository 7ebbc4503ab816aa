use tracing::{debug, trace};

use crate::{config::LexerConfig, errors::errors::Error, MK_TOKEN};

use super::{patterns::PatternTable, tokens::Token};

const DEFAULT_TOKEN_CAPACITY: usize = 128;

/// Position of a single lex call. Lives on the stack of `Scanner::lex`, so
/// one scanner can serve any number of calls at once.
struct Cursor<'a> {
    remaining: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn new(source: &'a str) -> Self {
        Cursor {
            remaining: source,
            offset: 0,
        }
    }

    fn at_eof(&self) -> bool {
        self.remaining.is_empty()
    }

    fn at(&self) -> Option<char> {
        self.remaining.chars().next()
    }

    fn advance_n(&mut self, n: usize) -> &'a str {
        let (matched, rest) = self.remaining.split_at(n);
        self.remaining = rest;
        self.offset += n;
        matched
    }
}

#[derive(Debug, Clone)]
pub struct Scanner {
    table: PatternTable,
    max_input_len: usize,
}

impl Default for Scanner {
    fn default() -> Self {
        Scanner::with_config(&LexerConfig::default()).expect("standard pattern table must compile")
    }
}

impl Scanner {
    pub fn new(table: PatternTable) -> Scanner {
        Scanner {
            table,
            max_input_len: LexerConfig::default().max_input_len,
        }
    }

    pub fn with_config(config: &LexerConfig) -> Result<Scanner, Error> {
        Ok(Scanner {
            table: PatternTable::standard(config.symbol_policy)?,
            max_input_len: config.max_input_len,
        })
    }

    pub fn with_max_input_len(mut self, limit: usize) -> Scanner {
        self.max_input_len = limit;
        self
    }

    pub fn table(&self) -> &PatternTable {
        &self.table
    }

    /// Splits `source` into a gapless sequence of tokens. Fails without
    /// partial output as soon as no pattern accepts the remaining input.
    pub fn lex(&self, source: &str) -> Result<Vec<Token>, Error> {
        if source.len() > self.max_input_len {
            return Err(Error::InputTooLarge {
                len: source.len(),
                limit: self.max_input_len,
            });
        }

        debug!(len = source.len(), "lexing input");

        let mut cursor = Cursor::new(source);
        let mut tokens = Vec::with_capacity(DEFAULT_TOKEN_CAPACITY);

        while !cursor.at_eof() {
            let (kind, end) = match self.table.first_match(cursor.remaining) {
                Some(found) => found,
                None => {
                    let error = Error::NoMatch {
                        offset: cursor.offset,
                        found: cursor.at().unwrap_or_default(),
                    };
                    debug!(%error, "lexing failed");
                    return Err(error);
                }
            };

            if end == 0 {
                let error = Error::ZeroWidthMatch {
                    offset: cursor.offset,
                    kind,
                };
                debug!(%error, "lexing failed");
                return Err(error);
            }

            let offset = cursor.offset;
            let text = cursor.advance_n(end);
            trace!(offset, %kind, text, "token");
            tokens.push(MK_TOKEN!(kind, text, offset));
        }

        debug!(tokens = tokens.len(), "lexing finished");
        Ok(tokens)
    }
}
