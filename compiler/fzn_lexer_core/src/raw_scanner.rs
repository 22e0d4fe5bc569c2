//! Maximal-munch driver producing `(RawTag, len)` pairs.
//!
//! At each position every active rule is tried: the literal trie yields the
//! longest literal prefix, and each structural matcher that can start with
//! the current byte reports its own accepted length. The longest candidate
//! wins; on equal length the rule declared first wins.
//!
//! Errors are encoded as tags, not `Result`s. A position no rule accepts
//! yields [`RawTag::Unrecognized`] spanning one character, so the caller can
//! report it and continue. A string or char literal that reaches end of
//! input yields [`RawTag::Unterminated`] spanning to the end.

use fzn_ir::TokenKind;

use crate::cursor::Cursor;
use crate::vocabulary::{Vocabulary, RULES};

/// What a raw token is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RawTag {
    /// A complete token of the given kind.
    Token(TokenKind),
    /// A string or char literal closed by end of input.
    Unterminated(TokenKind),
    /// One character no rule accepts.
    Unrecognized,
    /// End of input. Always `len == 0`.
    Eof,
}

/// A raw token: tag plus byte length. The start is the scanner position
/// before the call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

const _: () = assert!(std::mem::size_of::<RawToken>() <= 8);

/// Best candidate so far at the current position.
#[derive(Copy, Clone, Debug)]
struct Candidate {
    len: u32,
    rule: u16,
    kind: TokenKind,
    terminated: bool,
}

impl Candidate {
    /// Longer wins; on equal length, lower rule index wins.
    #[inline]
    fn beats(&self, other: &Candidate) -> bool {
        self.len > other.len || (self.len == other.len && self.rule < other.rule)
    }
}

/// Allocation-free scanner over one input and one vocabulary.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
    vocab: &'a Vocabulary,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>, vocab: &'a Vocabulary) -> Self {
        Self { cursor, vocab }
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    #[inline]
    pub fn vocabulary(&self) -> &'a Vocabulary {
        self.vocab
    }

    /// Source text between two offsets.
    #[inline]
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        self.cursor.slice(start, end)
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    pub fn next_token(&mut self) -> RawToken {
        if self.cursor.is_eof() {
            return RawToken {
                tag: RawTag::Eof,
                len: 0,
            };
        }

        let token = match self.munch() {
            Some(c) if c.terminated => RawToken {
                tag: RawTag::Token(c.kind),
                len: c.len,
            },
            Some(c) => RawToken {
                tag: RawTag::Unterminated(c.kind),
                len: c.len,
            },
            None => RawToken {
                tag: RawTag::Unrecognized,
                len: self.cursor.current_char_width(),
            },
        };
        self.cursor.advance_n(token.len);
        token
    }

    /// Run every active rule at the current position and pick the winner.
    fn munch(&self) -> Option<Candidate> {
        let mut best: Option<Candidate> = None;
        let mut offer = |candidate: Candidate| {
            let wins = match &best {
                Some(b) => candidate.beats(b),
                None => true,
            };
            if wins {
                best = Some(candidate);
            }
        };

        if let Some((len, rule)) = self.vocab.trie().longest_prefix(self.cursor.rest()) {
            offer(Candidate {
                len,
                rule,
                kind: RULES[rule as usize].kind,
                terminated: true,
            });
        }

        let first = self.cursor.current();
        for rule in self.vocab.structural() {
            if !rule.pattern.can_start_with(first) {
                continue;
            }
            if let Some(m) = rule.pattern.scan(self.cursor) {
                offer(Candidate {
                    len: m.len,
                    rule: rule.index,
                    kind: rule.kind,
                    terminated: m.terminated,
                });
            }
        }

        best.filter(|c| c.len > 0)
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let token = self.next_token();
        (token.tag != RawTag::Eof).then_some(token)
    }
}
