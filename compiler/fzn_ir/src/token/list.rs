//! Ordered token storage for a whole input.

use std::fmt;
use std::ops::Index;

use super::{Token, TokenKind};

/// All tokens of one input, both channels, in source order.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct TokenList<'src> {
    tokens: Vec<Token<'src>>,
}

impl<'src> TokenList<'src> {
    /// Create a new empty token list.
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    /// Create a new token list with pre-allocated capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    /// Append a token.
    #[inline]
    pub fn push(&mut self, token: Token<'src>) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token<'src>> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token<'src>> {
        self.tokens.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token<'src>] {
        &self.tokens
    }

    /// The parser-facing view: default-channel tokens only.
    pub fn default_channel(&self) -> impl Iterator<Item = &Token<'src>> + '_ {
        self.tokens.iter().filter(|t| !t.is_hidden())
    }

    /// Comments and whitespace only.
    pub fn hidden_channel(&self) -> impl Iterator<Item = &Token<'src>> + '_ {
        self.tokens.iter().filter(|t| t.is_hidden())
    }

    /// Kinds of all tokens, in order.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    /// Concatenated text of every token.
    ///
    /// Equals the scanned input when the scan reported no skipped
    /// characters and hidden tokens were retained.
    pub fn reconstruct(&self) -> String {
        let capacity = self.tokens.iter().map(|t| t.text.len()).sum();
        let mut out = String::with_capacity(capacity);
        for token in &self.tokens {
            out.push_str(token.text);
        }
        out
    }
}

impl<'src> Index<usize> for TokenList<'src> {
    type Output = Token<'src>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl<'a, 'src> IntoIterator for &'a TokenList<'src> {
    type Item = &'a Token<'src>;
    type IntoIter = std::slice::Iter<'a, Token<'src>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl<'src> IntoIterator for TokenList<'src> {
    type Item = Token<'src>;
    type IntoIter = std::vec::IntoIter<Token<'src>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'src> FromIterator<Token<'src>> for TokenList<'src> {
    fn from_iter<I: IntoIterator<Item = Token<'src>>>(iter: I) -> Self {
        TokenList {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl<'src> Extend<Token<'src>> for TokenList<'src> {
    fn extend<I: IntoIterator<Item = Token<'src>>>(&mut self, iter: I) {
        self.tokens.extend(iter);
    }
}

impl fmt::Debug for TokenList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}
