//! Tokens produced by the scanner.

mod flags;
mod kind;
mod list;

use std::fmt;

pub use flags::TokenFlags;
pub use kind::TokenKind;
pub use list::TokenList;

use crate::{Position, Span};

/// Which stream a token is delivered on.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    /// Parser-visible tokens.
    #[default]
    Default,
    /// Comments and whitespace. Recorded, never handed to the grammar.
    Hidden,
}

/// A token borrowing its text from the scanned input.
///
/// `text` is always `&input[span.to_range()]`.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Span,
    /// Line and column of the first character.
    pub position: Position,
    pub flags: TokenFlags,
}

impl<'src> Token<'src> {
    /// Create a token with no flags set.
    #[inline]
    pub fn new(kind: TokenKind, text: &'src str, span: Span, position: Position) -> Self {
        Token {
            kind,
            text,
            span,
            position,
            flags: TokenFlags::empty(),
        }
    }

    /// The channel this token is routed to.
    #[inline]
    pub const fn channel(&self) -> Channel {
        self.kind.channel()
    }

    /// Check if this token is hidden from the grammar.
    #[inline]
    pub const fn is_hidden(&self) -> bool {
        matches!(self.kind.channel(), Channel::Hidden)
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({:?}) @ {:?}",
            self.kind.symbolic_name(),
            self.text,
            self.span
        )?;
        if !self.flags.is_empty() {
            write!(f, " {:?}", self.flags)?;
        }
        Ok(())
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Token;
    // kind 1 + flags 1 + pad 6, text 16, span 8, position 8
    crate::static_assert_size!(Token<'static>, 40);
}

#[cfg(test)]
mod tests;
