//! Structural patterns: rules whose text is not a fixed literal.
//!
//! Each matcher takes a copy of the cursor positioned at the candidate
//! token start and returns how many bytes the pattern accepts there, or
//! `None` if it accepts nothing. Matchers never consume partial input on
//! failure; the driver compares their lengths against the literal trie.

use crate::escape::scan_escape;
use crate::Cursor;

/// The structural pattern families.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Structural {
    /// `[A-Za-z_][A-Za-z0-9_]*`
    Identifier,
    /// `[+-]?[0-9]+`
    IntConst,
    /// `[+-]?[0-9]+ ('.' [0-9]+ EXPONENT? | EXPONENT)`
    FloatConst,
    /// `"` (escape | not `\` or `"`)* `"`
    Str,
    /// `'` (escape | not `'` or `\`) `'`
    Char,
    /// `%` to end of line, terminator included.
    Comment,
    /// One of space, tab, `\r`, `\n`.
    Whitespace,
}

/// An accepted structural match.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Munch {
    /// Accepted length in bytes. Never zero.
    pub len: u32,
    /// `false` when a string or char literal ran into end of input before
    /// its closing delimiter; the match then extends to end of input.
    pub terminated: bool,
}

impl Munch {
    #[inline]
    fn complete(start: u32, end: Cursor<'_>) -> Option<Self> {
        let len = end.pos() - start;
        (len > 0).then_some(Munch {
            len,
            terminated: true,
        })
    }

    #[inline]
    fn unterminated(start: u32, end: Cursor<'_>) -> Option<Self> {
        Some(Munch {
            len: end.pos() - start,
            terminated: false,
        })
    }
}

impl Structural {
    /// Run this pattern at the cursor position.
    #[inline]
    pub fn scan(self, cursor: Cursor<'_>) -> Option<Munch> {
        match self {
            Structural::Identifier => identifier(cursor),
            Structural::IntConst => int_const(cursor),
            Structural::FloatConst => float_const(cursor),
            Structural::Str => string(cursor),
            Structural::Char => char_literal(cursor),
            Structural::Comment => comment(cursor),
            Structural::Whitespace => whitespace(cursor),
        }
    }

    /// Whether a token of this pattern can begin with `byte`.
    ///
    /// Lets the driver skip matchers that cannot apply.
    #[inline]
    pub fn can_start_with(self, byte: u8) -> bool {
        match self {
            Structural::Identifier => is_ident_start(byte),
            Structural::IntConst | Structural::FloatConst => {
                byte.is_ascii_digit() || byte == b'+' || byte == b'-'
            }
            Structural::Str => byte == b'"',
            Structural::Char => byte == b'\'',
            Structural::Comment => byte == b'%',
            Structural::Whitespace => matches!(byte, b' ' | b'\t' | b'\r' | b'\n'),
        }
    }
}

#[inline]
fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn identifier(mut c: Cursor<'_>) -> Option<Munch> {
    let start = c.pos();
    if !is_ident_start(c.current()) {
        return None;
    }
    c.advance();
    c.eat_while(is_ident_continue);
    Munch::complete(start, c)
}

/// Optional sign followed by at least one digit.
fn signed_digits(c: &mut Cursor<'_>) -> bool {
    if matches!(c.current(), b'+' | b'-') {
        c.advance();
    }
    if !c.current().is_ascii_digit() {
        return false;
    }
    c.eat_while(|b| b.is_ascii_digit());
    true
}

fn int_const(mut c: Cursor<'_>) -> Option<Munch> {
    let start = c.pos();
    if !signed_digits(&mut c) {
        return None;
    }
    Munch::complete(start, c)
}

/// `[eE][+-]?[0-9]+`, consumed only if complete.
fn exponent(c: &mut Cursor<'_>) -> bool {
    if !matches!(c.current(), b'e' | b'E') {
        return false;
    }
    let mut probe = *c;
    probe.advance();
    if !signed_digits(&mut probe) {
        return false;
    }
    *c = probe;
    true
}

fn float_const(mut c: Cursor<'_>) -> Option<Munch> {
    let start = c.pos();
    if !signed_digits(&mut c) {
        return None;
    }
    if c.current() == b'.' && c.peek().is_ascii_digit() {
        c.advance();
        c.eat_while(|b| b.is_ascii_digit());
        exponent(&mut c);
        return Munch::complete(start, c);
    }
    if exponent(&mut c) {
        return Munch::complete(start, c);
    }
    None
}

fn string(mut c: Cursor<'_>) -> Option<Munch> {
    let start = c.pos();
    if c.current() != b'"' {
        return None;
    }
    c.advance();
    loop {
        match c.skip_to_literal_delim(b'"') {
            b'"' => {
                c.advance();
                return Munch::complete(start, c);
            }
            b'\\' => {
                let esc = scan_escape(c.rest());
                c.advance_n(esc.len);
            }
            _ => return Munch::unterminated(start, c),
        }
    }
}

/// A quote, its elements, and the closing quote on the same line.
///
/// Element count is checked by the lexer, so `''` and `'ab'` are whole
/// tokens here. Without a closing quote on the line the token stops after
/// its first element.
fn char_literal(mut c: Cursor<'_>) -> Option<Munch> {
    let start = c.pos();
    if c.current() != b'\'' {
        return None;
    }
    c.advance();

    if c.is_eof() || matches!(c.current(), b'\n' | b'\r') {
        return Munch::unterminated(start, c);
    }
    if c.current() == b'\'' {
        c.advance();
        return Munch::complete(start, c);
    }
    eat_char_element(&mut c);

    let mut ahead = c;
    loop {
        match ahead.current() {
            b'\'' => {
                ahead.advance();
                return Munch::complete(start, ahead);
            }
            b'\n' | b'\r' => break,
            _ if ahead.is_eof() => break,
            _ => eat_char_element(&mut ahead),
        }
    }
    Munch::unterminated(start, c)
}

/// One character or escape. An escape introducer never swallows a line
/// break.
fn eat_char_element(c: &mut Cursor<'_>) {
    if c.current() == b'\\' && !matches!(c.peek(), b'\n' | b'\r' | 0) {
        let esc = scan_escape(c.rest());
        c.advance_n(esc.len);
    } else {
        c.advance_char();
    }
}

fn comment(mut c: Cursor<'_>) -> Option<Munch> {
    let start = c.pos();
    if c.current() != b'%' {
        return None;
    }
    c.advance();
    match c.eat_until_line_break() {
        b'\n' => c.advance(),
        // `\r\n` belongs to the comment; a lone `\r` does not.
        b'\r' if c.peek() == b'\n' => c.advance_n(2),
        _ => {}
    }
    Munch::complete(start, c)
}

fn whitespace(mut c: Cursor<'_>) -> Option<Munch> {
    let start = c.pos();
    if c.is_eof() || !matches!(c.current(), b' ' | b'\t' | b'\r' | b'\n') {
        return None;
    }
    c.advance();
    Munch::complete(start, c)
}
