//! Source location spans and line/column positions.
//!
//! Spans are compact 8-byte byte ranges. Positions are 1-based line/column
//! pairs where the column counts characters, not bytes.

use std::fmt;

/// Source location span.
///
/// Layout: 8 bytes total
/// - start: u32 - byte offset from input start
/// - end: u32 - byte offset (exclusive)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Check if span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if an offset is within this span.
    #[inline]
    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Create a point span (zero-length).
    #[inline]
    pub const fn point(offset: u32) -> Span {
        Span {
            start: offset,
            end: offset,
        }
    }

    /// Convert to a `std::ops::Range`.
    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A 1-based line/column location.
///
/// `\n` is the only line break. The column counts Unicode scalar values
/// from the start of the line, so a tab or a multi-byte character each
/// occupy one column.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// The first character of any input.
    pub const START: Position = Position { line: 1, column: 1 };

    /// Create a new position.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    /// The position just past `text`, when `text` starts at `self`.
    #[must_use]
    pub fn advanced_by(self, text: &str) -> Position {
        match text.rfind('\n') {
            Some(last_newline) => {
                let newlines = text.bytes().filter(|&b| b == b'\n').count();
                let tail = &text[last_newline + 1..];
                Position {
                    line: self.line.saturating_add(saturate(newlines)),
                    column: saturate(tail.chars().count()).saturating_add(1),
                }
            }
            None => Position {
                line: self.line,
                column: self.column.saturating_add(saturate(text.chars().count())),
            },
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[inline]
fn saturate(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Position, Span};
    crate::static_assert_size!(Span, 8);
    crate::static_assert_size!(Position, 8);
}
