//! Token scanner: raw tokens with positions, flags, and error reporting.
//!
//! Wraps [`RawScanner`] and turns each `(tag, len)` pair into a [`Token`]
//! borrowing the source. Errors go to a [`DiagnosticSink`] and scanning
//! continues:
//! - an unrecognized character is reported and skipped
//! - an unterminated literal is reported and emitted up to end of input
//! - each malformed escape inside a literal is reported at its own span
//! - a char literal with zero or several characters is reported once

use fzn_ir::{Position, Span, Token, TokenFlags, TokenKind};
use fzn_lexer_core::{Cursor, RawScanner, RawTag, Tier, Vocabulary};

use crate::literal::{self, Escapes};
use crate::{DiagnosticSink, LexError};

/// Pull-based scanner over one source text.
///
/// Yields tokens of both channels in source order. `None` means end of
/// input and stays `None` on later calls.
pub struct Scanner<'src, S: DiagnosticSink = Vec<LexError>> {
    raw: RawScanner<'src>,
    /// Line and column of the next unread byte.
    position: Position,
    /// A hidden token has been produced since the last default-channel one.
    after_trivia: bool,
    peeked: Option<Option<Token<'src>>>,
    sink: S,
}

impl<'src> Scanner<'src> {
    /// Scanner collecting errors into a `Vec`.
    pub fn new(source: &'src str, tier: Tier) -> Self {
        Self::with_sink(source, tier, Vec::new())
    }
}

impl<'src, S: DiagnosticSink> Scanner<'src, S> {
    /// Scanner reporting errors to `sink`.
    pub fn with_sink(source: &'src str, tier: Tier, sink: S) -> Self {
        Scanner {
            raw: RawScanner::new(Cursor::new(source), Vocabulary::for_tier(tier)),
            position: Position::START,
            after_trivia: false,
            peeked: None,
            sink,
        }
    }

    pub fn tier(&self) -> Tier {
        self.raw.vocabulary().tier()
    }

    /// Consume and return the next token of either channel.
    pub fn next_token(&mut self) -> Option<Token<'src>> {
        match self.peeked.take() {
            Some(peeked) => peeked,
            None => self.scan(),
        }
    }

    /// The next token without consuming it.
    ///
    /// Scanned once and cached, so any error it carries is reported once.
    pub fn peek_token(&mut self) -> Option<Token<'src>> {
        match self.peeked {
            Some(peeked) => peeked,
            None => {
                let token = self.scan();
                self.peeked = Some(token);
                token
            }
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn scan(&mut self) -> Option<Token<'src>> {
        loop {
            let start = self.raw.pos();
            let raw = self.raw.next_token();
            let end = start + raw.len;
            let text = self.raw.slice(start, end);
            let span = Span::new(start, end);
            let position = self.position;
            self.position = position.advanced_by(text);

            match raw.tag {
                RawTag::Eof => return None,
                RawTag::Unrecognized => {
                    let found = text.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                    self.report(LexError::unrecognized_character(span, position, found));
                }
                RawTag::Token(kind) => {
                    let mut token = Token::new(kind, text, span, position);
                    self.check_escapes(&mut token);
                    self.check_char_shape(&mut token);
                    return Some(self.finish(token));
                }
                RawTag::Unterminated(kind) => {
                    let delimiter = if kind == TokenKind::Char { '\'' } else { '"' };
                    self.report(LexError::unterminated_literal(
                        span, position, delimiter, text,
                    ));
                    let mut token = Token::new(kind, text, span, position);
                    token.flags |= TokenFlags::HAS_ERROR | TokenFlags::UNTERMINATED;
                    self.check_escapes(&mut token);
                    return Some(self.finish(token));
                }
            }
        }
    }

    /// Report each malformed escape inside a string or char literal.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets inside a token are bounded by its u32 span"
    )]
    fn check_escapes(&mut self, token: &mut Token<'src>) {
        if !matches!(token.kind, TokenKind::Str | TokenKind::Char) {
            return;
        }
        let text = token.text;
        for (at, scan) in Escapes::new(text) {
            if scan.is_valid() {
                continue;
            }
            let end = at + scan.len as usize;
            let (Some(before), Some(escape)) = (text.get(..at), text.get(at..end)) else {
                continue;
            };
            let offset = token.span.start + before.len() as u32;
            let span = Span::new(offset, offset + scan.len);
            let position = token.position.advanced_by(before);
            self.report(LexError::malformed_escape(span, position, escape));
            token.flags |= TokenFlags::HAS_ERROR;
        }
    }

    /// A closed char literal holds exactly one character or escape.
    ///
    /// Skipped once an escape error was reported for the token.
    fn check_char_shape(&mut self, token: &mut Token<'src>) {
        if token.flags.has_error() {
            return;
        }
        let error = match literal::char_count(token) {
            Some(0) => LexError::empty_char_literal(token.span, token.position, token.text),
            Some(n) if n > 1 => {
                LexError::multi_char_literal(token.span, token.position, token.text)
            }
            _ => return,
        };
        self.report(error);
        token.flags |= TokenFlags::HAS_ERROR;
    }

    /// Track trivia and mark the first default-channel token after it.
    fn finish(&mut self, mut token: Token<'src>) -> Token<'src> {
        if token.is_hidden() {
            self.after_trivia = true;
        } else if std::mem::take(&mut self.after_trivia) {
            token.flags |= TokenFlags::AFTER_TRIVIA;
        }
        token
    }

    fn report(&mut self, error: LexError) {
        tracing::trace!(
            code = %error.code(),
            span = %error.span,
            position = %error.position,
            "{}",
            error.kind
        );
        self.sink.report(error);
    }
}

impl<'src, S: DiagnosticSink> Iterator for Scanner<'src, S> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        self.next_token()
    }
}
