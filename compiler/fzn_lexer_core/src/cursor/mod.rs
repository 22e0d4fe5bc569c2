//! Byte cursor over borrowed source text.
//!
//! Reads past the end of the source return `0x00`, so pattern matchers can
//! look ahead without bounds checks of their own. A `0x00` inside the source
//! is distinguished from end of input by [`Cursor::is_eof`].

/// Cursor over a source string.
///
/// The cursor is [`Copy`]; matchers take a copy, advance it speculatively,
/// and report how far they got without disturbing the caller's position.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    /// Current read position (byte index into `src`).
    pos: u32,
    /// Scanned length. Sources over `u32::MAX` bytes are truncated here.
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            source_len: u32::try_from(src.len()).unwrap_or(u32::MAX),
        }
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        if pos < self.source_len {
            self.src.as_bytes()[pos as usize]
        } else {
            0
        }
    }

    /// Returns the byte at the current position, `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos.saturating_add(1))
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Returns `true` if the cursor has reached EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the scanned source.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// The unread source bytes.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        let start = self.pos.min(self.source_len) as usize;
        &self.src.as_bytes()[start..self.source_len as usize]
    }

    /// Extract a source substring as `&str`.
    ///
    /// # Contract
    ///
    /// `start..end` must fall within the source and on character boundaries.
    /// Token boundaries produced by the scanner always do.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.src[start as usize..end as usize]
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false`, or the loop stops only at EOF.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// Uses the leading byte to determine character width:
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Width in bytes of the character at the current position, 0 at EOF.
    #[inline]
    pub fn current_char_width(&self) -> u32 {
        if self.is_eof() {
            0
        } else {
            Self::utf8_char_width(self.current()).min(self.source_len - self.pos)
        }
    }

    /// Advance the cursor past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = self.current_char_width();
        self.advance_n(width);
    }

    /// Advance to the next `\n` or `\r`, or to EOF.
    ///
    /// Returns the byte found, or 0 for EOF. Used for comment bodies.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < rest().len() <= source_len which fits in u32"
    )]
    pub fn eat_until_line_break(&mut self) -> u8 {
        if let Some(offset) = memchr::memchr2(b'\n', b'\r', self.rest()) {
            self.pos += offset as u32;
            self.current()
        } else {
            self.pos = self.source_len;
            0
        }
    }

    /// Advance past ordinary literal content to the next `quote` or `\`.
    ///
    /// Returns the byte found, or 0 for EOF.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < rest().len() <= source_len which fits in u32"
    )]
    pub fn skip_to_literal_delim(&mut self, quote: u8) -> u8 {
        if let Some(offset) = memchr::memchr2(quote, b'\\', self.rest()) {
            self.pos += offset as u32;
            self.current()
        } else {
            self.pos = self.source_len;
            0
        }
    }
}

#[cfg(test)]
mod tests;
