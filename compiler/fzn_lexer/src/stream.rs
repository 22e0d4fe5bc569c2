//! Parser-facing token stream.
//!
//! Delivers only default-channel tokens. Hidden tokens skipped on the way
//! are kept in order in a side buffer so layout-aware consumers can still
//! see them.

use fzn_ir::Token;
use fzn_lexer_core::Tier;

use crate::{DiagnosticSink, LexError, Scanner};

pub struct TokenStream<'src, S: DiagnosticSink = Vec<LexError>> {
    scanner: Scanner<'src, S>,
    hidden: Vec<Token<'src>>,
    peeked: Option<Option<Token<'src>>>,
}

impl<'src> TokenStream<'src> {
    pub fn new(source: &'src str, tier: Tier) -> Self {
        Self::from_scanner(Scanner::new(source, tier))
    }
}

impl<'src, S: DiagnosticSink> TokenStream<'src, S> {
    pub fn from_scanner(scanner: Scanner<'src, S>) -> Self {
        TokenStream {
            scanner,
            hidden: Vec::new(),
            peeked: None,
        }
    }

    /// Consume and return the next default-channel token.
    pub fn next_token(&mut self) -> Option<Token<'src>> {
        match self.peeked.take() {
            Some(peeked) => peeked,
            None => self.advance(),
        }
    }

    /// The next default-channel token without consuming it.
    ///
    /// Hidden tokens before it are moved to the side buffer now.
    pub fn peek_token(&mut self) -> Option<Token<'src>> {
        match self.peeked {
            Some(peeked) => peeked,
            None => {
                let token = self.advance();
                self.peeked = Some(token);
                token
            }
        }
    }

    /// Hidden tokens skipped so far, in source order.
    pub fn hidden(&self) -> &[Token<'src>] {
        &self.hidden
    }

    /// Drain the hidden-token buffer.
    pub fn take_hidden(&mut self) -> Vec<Token<'src>> {
        std::mem::take(&mut self.hidden)
    }

    pub fn scanner(&self) -> &Scanner<'src, S> {
        &self.scanner
    }

    pub fn into_scanner(self) -> Scanner<'src, S> {
        self.scanner
    }

    fn advance(&mut self) -> Option<Token<'src>> {
        loop {
            let token = self.scanner.next_token()?;
            if token.is_hidden() {
                self.hidden.push(token);
            } else {
                return Some(token);
            }
        }
    }
}

impl<'src, S: DiagnosticSink> Iterator for TokenStream<'src, S> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        self.next_token()
    }
}
