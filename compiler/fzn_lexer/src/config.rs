//! Lexer configuration.

use fzn_lexer_core::Tier;

/// Options for [`lex`](crate::lex).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LexerConfig {
    /// Which vocabulary the scanner recognizes.
    pub tier: Tier,
    /// Keep comments and whitespace in the output list.
    pub retain_hidden: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            tier: Tier::Base,
            retain_hidden: true,
        }
    }
}

impl LexerConfig {
    /// Extended vocabulary, hidden tokens retained.
    pub fn extended() -> Self {
        LexerConfig {
            tier: Tier::Extended,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.tier = tier;
        self
    }

    #[must_use]
    pub fn with_retain_hidden(mut self, retain_hidden: bool) -> Self {
        self.retain_hidden = retain_hidden;
        self
    }
}
