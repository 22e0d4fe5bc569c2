//! Shared types for the FlatZinc lexical layer.
//!
//! This crate holds the contract between the scanner and its consumers:
//! source spans and positions, the named token kinds the grammar is written
//! against, channels, per-token flags, and token lists.

/// Compile-time size assertion.
///
/// Fails to compile if `$ty` does not have exactly `$size` bytes.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod token;

pub use span::{Position, Span};
pub use token::{Channel, Token, TokenFlags, TokenKind, TokenList};
