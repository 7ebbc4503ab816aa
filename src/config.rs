//! Scanner configuration.
//!
//! The symbol rule has gone through several incompatible variants over the
//! life of the notation, so the body restriction is a policy choice rather
//! than a fixed rule. The input cap bounds the work a single lex call does.

/// Largest input accepted by default: 16 MiB.
pub const DEFAULT_MAX_INPUT_LEN: usize = 16 * 1024 * 1024;

/// Which characters a symbol body may contain.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub enum SymbolPolicy {
    /// Bodies stop at whitespace and at `(` or `)`, so `foo)` is a symbol
    /// followed by a close paren.
    #[default]
    Strict,
    /// Bodies stop only at whitespace, so `foo)` is a single symbol.
    Permissive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerConfig {
    pub symbol_policy: SymbolPolicy,
    pub max_input_len: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            symbol_policy: SymbolPolicy::default(),
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }
}

impl LexerConfig {
    pub fn with_symbol_policy(mut self, policy: SymbolPolicy) -> Self {
        self.symbol_policy = policy;
        self
    }

    pub fn with_max_input_len(mut self, limit: usize) -> Self {
        self.max_input_len = limit;
        self
    }
}
