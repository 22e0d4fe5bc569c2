//! Owned source text for scanning.
//!
//! Scanners borrow their input; a `SourceBuffer` is what owns it when the
//! input comes from a stream instead of an existing `&str`. The buffer is
//! released when dropped, whether or not scanning succeeded.

use std::io::{self, Read};

use crate::Cursor;

/// Owned, validated UTF-8 source text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceBuffer {
    text: String,
}

impl SourceBuffer {
    /// Take ownership of already-decoded source text.
    pub fn new(text: impl Into<String>) -> Self {
        SourceBuffer { text: text.into() }
    }

    /// Read a complete input stream.
    ///
    /// Fails with [`io::ErrorKind::InvalidData`] if the stream is not UTF-8,
    /// or with the reader's own error.
    pub fn from_reader<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(SourceBuffer { text })
    }

    /// The source text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Create a [`Cursor`] positioned at byte 0.
    #[inline]
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.text)
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the source is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<String> for SourceBuffer {
    fn from(text: String) -> Self {
        SourceBuffer { text }
    }
}

impl From<&str> for SourceBuffer {
    fn from(text: &str) -> Self {
        SourceBuffer {
            text: text.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests;
