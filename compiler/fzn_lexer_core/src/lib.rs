//! Low-level scanning for FlatZinc and its extended dialect.
//!
//! The core produces `(tag, len)` pairs from a [`Cursor`] using the
//! maximal-munch rule over an ordered [`Vocabulary`]: the longest accepting
//! rule wins, and among rules accepting at the same length the one declared
//! first wins. It does not track lines, decode escapes, or report errors;
//! those belong to `fzn_lexer`.

mod cursor;
pub mod escape;
mod pattern;
mod raw_scanner;
mod source_buffer;
pub mod vocabulary;

pub use cursor::Cursor;
pub use escape::{scan_escape, Escape, EscapeScan};
pub use pattern::{Munch, Structural};
pub use raw_scanner::{RawScanner, RawTag, RawToken};
pub use source_buffer::SourceBuffer;
pub use vocabulary::{Pattern, Rule, Tier, UnknownTier, Vocabulary};
