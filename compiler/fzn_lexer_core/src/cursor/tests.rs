use super::*;

#[test]
fn reads_past_end_return_zero() {
    let c = Cursor::new("ab");
    assert_eq!(c.current(), b'a');
    assert_eq!(c.peek(), b'b');
    let mut c = Cursor::new("ab");
    c.advance();
    assert_eq!(c.peek(), 0);
    c.advance();
    assert_eq!(c.current(), 0);
}

#[test]
fn interior_null_is_not_eof() {
    let mut c = Cursor::new("a\0b");
    c.advance();
    assert_eq!(c.current(), 0);
    assert!(!c.is_eof());
    c.advance_n(2);
    assert!(c.is_eof());
}

#[test]
fn eat_while_stops_at_eof() {
    let mut c = Cursor::new("abc123");
    c.eat_while(|b| b.is_ascii_alphanumeric());
    assert!(c.is_eof());
    assert_eq!(c.slice(0, c.pos()), "abc123");
}

#[test]
fn rest_and_slice() {
    let mut c = Cursor::new("var x");
    c.advance_n(3);
    assert_eq!(c.rest(), b" x");
    assert_eq!(c.slice(0, 3), "var");
}

#[test]
fn advance_char_multibyte() {
    let mut c = Cursor::new("é→x");
    c.advance_char();
    assert_eq!(c.pos(), 2);
    assert_eq!(c.current_char_width(), 3);
    c.advance_char();
    assert_eq!(c.pos(), 5);
    assert_eq!(c.current(), b'x');
    c.advance_char();
    assert!(c.is_eof());
    assert_eq!(c.current_char_width(), 0);
}

#[test]
fn utf8_widths() {
    assert_eq!(Cursor::utf8_char_width(b'a'), 1);
    assert_eq!(Cursor::utf8_char_width(0xC3), 2);
    assert_eq!(Cursor::utf8_char_width(0xE2), 3);
    assert_eq!(Cursor::utf8_char_width(0xF0), 4);
    assert_eq!(Cursor::utf8_char_width(0x80), 1);
}

#[test]
fn eat_until_line_break_finds_lf_and_cr() {
    let mut c = Cursor::new("% abc\r\nx");
    assert_eq!(c.eat_until_line_break(), b'\r');
    assert_eq!(c.pos(), 5);

    let mut c = Cursor::new("% abc\nx");
    assert_eq!(c.eat_until_line_break(), b'\n');
    assert_eq!(c.pos(), 5);

    let mut c = Cursor::new("% abc");
    assert_eq!(c.eat_until_line_break(), 0);
    assert!(c.is_eof());
}

#[test]
fn skip_to_literal_delim() {
    let mut c = Cursor::new("\"ab\\\"c\"");
    c.advance();
    assert_eq!(c.skip_to_literal_delim(b'"'), b'\\');
    assert_eq!(c.pos(), 3);
    c.advance_n(2);
    assert_eq!(c.skip_to_literal_delim(b'"'), b'"');
    assert_eq!(c.pos(), 6);

    let mut c = Cursor::new("'abc");
    c.advance();
    assert_eq!(c.skip_to_literal_delim(b'\''), 0);
    assert!(c.is_eof());
}
