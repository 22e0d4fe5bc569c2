//! Decoding literal token text into values.
//!
//! String and char contents use the three escape dialects recognized by
//! [`scan_escape`]. Malformed escapes decode to U+FFFD; the scanner has
//! already reported them when it produced the token.

use fzn_ir::{Token, TokenKind};
use fzn_lexer_core::{scan_escape, Escape, EscapeScan};

/// Escapes in literal content, in order, as `(byte offset, scan)`.
///
/// Every `\` in a scanned literal is an escape introducer, so the walk
/// jumps from one backslash to the next.
pub(crate) struct Escapes<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Escapes<'a> {
    pub(crate) fn new(content: &'a str) -> Self {
        Escapes {
            bytes: content.as_bytes(),
            pos: 0,
        }
    }
}

impl Iterator for Escapes<'_> {
    type Item = (usize, EscapeScan);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.bytes.get(self.pos..)?;
        let at = self.pos + memchr::memchr(b'\\', rest)?;
        let scan = scan_escape(&self.bytes[at..]);
        self.pos = at + scan.len as usize;
        Some((at, scan))
    }
}

/// Decode literal content (without delimiters).
pub fn unescape(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut copied = 0;
    for (at, scan) in Escapes::new(content) {
        out.push_str(&content[copied..at]);
        out.push(match scan.escape {
            Escape::Char(c) => c,
            Escape::Malformed => char::REPLACEMENT_CHARACTER,
        });
        copied = at + scan.len as usize;
    }
    if let Some(tail) = content.get(copied..) {
        out.push_str(tail);
    }
    out
}

/// Text between the delimiters. An unterminated literal has no closing one.
fn content<'src>(token: &Token<'src>, quote: char) -> Option<&'src str> {
    let body = token.text.strip_prefix(quote)?;
    if token.flags.contains(fzn_ir::TokenFlags::UNTERMINATED) {
        Some(body)
    } else {
        body.strip_suffix(quote)
    }
}

/// Decoded value of a `STRING` token.
pub fn string_value(token: &Token<'_>) -> Option<String> {
    if token.kind != TokenKind::Str {
        return None;
    }
    content(token, '"').map(unescape)
}

/// Decoded value of a `CHAR` token. `None` if the literal was cut short by
/// end of input.
pub fn char_value(token: &Token<'_>) -> Option<char> {
    if token.kind != TokenKind::Char {
        return None;
    }
    let decoded = unescape(content(token, '\'')?);
    let mut chars = decoded.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Number of characters a `CHAR` token decodes to, escapes counting once.
pub(crate) fn char_count(token: &Token<'_>) -> Option<usize> {
    if token.kind != TokenKind::Char {
        return None;
    }
    content(token, '\'').map(|body| unescape(body).chars().count())
}

/// Value of an `INT_CONST` token. `None` on overflow.
pub fn int_value(token: &Token<'_>) -> Option<i64> {
    if token.kind != TokenKind::IntConst {
        return None;
    }
    token.text.parse().ok()
}

/// Value of a `FLOAT_CONST` token. `None` if it does not fit in an `f64`.
pub fn float_value(token: &Token<'_>) -> Option<f64> {
    if token.kind != TokenKind::FloatConst {
        return None;
    }
    token
        .text
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
