//! Escape sequence recognition shared by string and char literals.
//!
//! Three dialects:
//! - short: `\b \t \n \f \r \" \' \\`
//! - Unicode: `\u` followed by exactly four hex digits
//! - octal: `\ddd`, greedy; three digits only when the first is `0`-`3`,
//!   otherwise two, otherwise one
//!
//! The scanner uses the length to find the end of a literal; the decoder in
//! `fzn_lexer` uses the decoded character.

use crate::Cursor;

/// A recognized escape.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Escape {
    /// A well-formed escape and the character it denotes.
    Char(char),
    /// An introducer that no dialect accepts.
    Malformed,
}

/// Result of [`scan_escape`]: what was found and how many bytes it spans.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EscapeScan {
    pub escape: Escape,
    pub len: u32,
}

impl EscapeScan {
    #[inline]
    fn ok(c: char, len: u32) -> Self {
        EscapeScan {
            escape: Escape::Char(c),
            len,
        }
    }

    #[inline]
    fn malformed(len: u32) -> Self {
        EscapeScan {
            escape: Escape::Malformed,
            len,
        }
    }

    /// Check if the escape is well-formed.
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self.escape, Escape::Char(_))
    }
}

/// Recognize the escape at the start of `bytes`.
///
/// `bytes[0]` must be `\`. A malformed escape spans the backslash and the
/// character after it (if any), except `\u` without four hex digits, which
/// spans only `\u` so the digits that follow stay ordinary content. A
/// Unicode escape naming a surrogate is malformed and spans all six bytes.
pub fn scan_escape(bytes: &[u8]) -> EscapeScan {
    debug_assert_eq!(bytes.first(), Some(&b'\\'));
    let Some(&next) = bytes.get(1) else {
        return EscapeScan::malformed(1);
    };
    match next {
        b'b' => EscapeScan::ok('\u{8}', 2),
        b't' => EscapeScan::ok('\t', 2),
        b'n' => EscapeScan::ok('\n', 2),
        b'f' => EscapeScan::ok('\u{c}', 2),
        b'r' => EscapeScan::ok('\r', 2),
        b'"' => EscapeScan::ok('"', 2),
        b'\'' => EscapeScan::ok('\'', 2),
        b'\\' => EscapeScan::ok('\\', 2),
        b'u' => unicode(bytes),
        b'0'..=b'7' => octal(bytes),
        other => EscapeScan::malformed(1 + Cursor::utf8_char_width(other).min(rest_len(bytes))),
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "only the length of the unread tail after the backslash, capped at 4"
)]
fn rest_len(bytes: &[u8]) -> u32 {
    (bytes.len() - 1).min(4) as u32
}

fn unicode(bytes: &[u8]) -> EscapeScan {
    let Some(digits) = bytes.get(2..6) else {
        return EscapeScan::malformed(2);
    };
    let mut value = 0u32;
    for &d in digits {
        let Some(v) = char::from(d).to_digit(16) else {
            return EscapeScan::malformed(2);
        };
        value = value * 16 + v;
    }
    match char::from_u32(value) {
        Some(c) => EscapeScan::ok(c, 6),
        None => EscapeScan::malformed(6),
    }
}

fn octal(bytes: &[u8]) -> EscapeScan {
    let is_octal = |i: usize| bytes.get(i).is_some_and(|b| (b'0'..=b'7').contains(b));
    let digits: u32 = if bytes[1] <= b'3' && is_octal(2) && is_octal(3) {
        3
    } else if is_octal(2) {
        2
    } else {
        1
    };
    let value = bytes[1..=digits as usize]
        .iter()
        .fold(0u32, |acc, &d| acc * 8 + u32::from(d - b'0'));
    // At most \377, always a valid scalar value.
    let c = char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER);
    EscapeScan::ok(c, 1 + digits)
}
