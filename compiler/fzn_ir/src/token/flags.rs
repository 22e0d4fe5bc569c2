//! Per-token metadata flags.

use bitflags::bitflags;

bitflags! {
    /// Per-token metadata set by the scanner.
    ///
    /// Computed once when the token is produced. Consumers use these to skip
    /// re-validating literals and to preserve layout without looking at the
    /// hidden channel.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TokenFlags: u8 {
        /// A lexical error was reported inside this token.
        const HAS_ERROR = 1 << 0;
        /// String or char literal closed implicitly by end of input.
        const UNTERMINATED = 1 << 1;
        /// Default-channel token directly preceded by hidden tokens.
        const AFTER_TRIVIA = 1 << 2;
    }
}

impl TokenFlags {
    /// Check if a lexical error was reported inside this token.
    #[inline]
    pub const fn has_error(self) -> bool {
        self.contains(Self::HAS_ERROR)
    }

    /// Check if whitespace or a comment preceded this token.
    #[inline]
    pub const fn after_trivia(self) -> bool {
        self.contains(Self::AFTER_TRIVIA)
    }
}

const _: () = assert!(size_of::<TokenFlags>() == 1);
