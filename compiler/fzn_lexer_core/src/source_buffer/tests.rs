use std::io::{self, Read};

use super::*;

#[test]
fn from_reader_reads_everything() {
    let input: &[u8] = b"var int: x;\n";
    let buf = SourceBuffer::from_reader(input);
    assert!(matches!(buf, Ok(ref b) if b.as_str() == "var int: x;\n"));
}

#[test]
fn from_reader_rejects_invalid_utf8() {
    let input: &[u8] = &[b'v', 0xFF, b'r'];
    let err = SourceBuffer::from_reader(input).err();
    assert_eq!(err.map(|e| e.kind()), Some(io::ErrorKind::InvalidData));
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
    }
}

#[test]
fn from_reader_propagates_reader_errors() {
    let err = SourceBuffer::from_reader(FailingReader).err();
    assert_eq!(err.map(|e| e.kind()), Some(io::ErrorKind::BrokenPipe));
}

#[test]
fn empty_buffer() {
    let buf = SourceBuffer::default();
    assert!(buf.is_empty());
    assert_eq!(buf.len(), 0);
    assert!(buf.cursor().is_eof());
}

#[test]
fn conversions_keep_text() {
    assert_eq!(SourceBuffer::from("abc").as_str(), "abc");
    assert_eq!(SourceBuffer::from(String::from("xy")).as_str(), "xy");
    assert_eq!(SourceBuffer::new("q").len(), 1);
}
