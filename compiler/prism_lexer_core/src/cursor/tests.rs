use crate::SourceBuffer;
use pretty_assertions::assert_eq;

#[test]
fn peeks_past_end_are_zero() {
    let buf = SourceBuffer::new(b"ab");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.peek(), b'b');
    assert_eq!(cursor.peek2(), 0);
    assert_eq!(cursor.peek_at(500), 0);
    cursor.advance_n(2);
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

#[test]
fn interior_nul_is_not_eof() {
    let buf = SourceBuffer::new(b"a\0b");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

#[test]
fn slices() {
    let buf = SourceBuffer::new(b"foo.bar");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b.is_ascii_alphabetic());
    assert_eq!(cursor.slice_from(0), b"foo");
    assert_eq!(cursor.rest(), b".bar");
    assert_eq!(cursor.slice(4, 100), b"bar");
    assert_eq!(cursor.slice(9, 100), b"");
}

#[test]
fn eat_and_starts_with() {
    let buf = SourceBuffer::new(b"<<~EOS");
    let mut cursor = buf.cursor();
    assert!(cursor.starts_with(b"<<"));
    assert!(!cursor.eat(b'>'));
    assert!(cursor.eat_str(b"<<~"));
    assert_eq!(cursor.pos(), 3);
    assert!(!cursor.eat_str(b"EOSX"));
    assert_eq!(cursor.eat_while(|b| b.is_ascii_uppercase()), 3);
    assert!(!cursor.eat(b'E'));
}

#[test]
fn newline_scan() {
    let buf = SourceBuffer::new(b"# comment\nx");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.pos(), 9);
    cursor.advance();
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
}

#[test]
fn find_and_set_pos() {
    let buf = SourceBuffer::new(b"abc\ndef\n");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.find(b'\n'), Some(3));
    cursor.set_pos(5);
    assert_eq!(cursor.find(b'\n'), Some(7));
    assert_eq!(cursor.find(b'z'), None);
    cursor.set_pos(1000);
    assert_eq!(cursor.pos(), 8);
}

#[test]
fn string_delimiters() {
    let buf = SourceBuffer::new(b"abc#{x}\"");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(b'"', None, true), b'#');
    assert_eq!(cursor.pos(), 3);

    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(b'"', None, false), b'"');
    assert_eq!(cursor.pos(), 7);

    let buf = SourceBuffer::new(b"a(b)c)");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(b')', Some(b'('), false), b'(');

    let buf = SourceBuffer::new(b"plain");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(b'"', None, true), 0);
    assert!(cursor.is_eof());
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn string_scan_stops_at_first_interesting_byte(
            bytes in proptest::collection::vec(
                prop_oneof![Just(b'a'), Just(b'"'), Just(b'\\'), Just(b'\n'), Just(b'#'), Just(b'(')],
                0..64,
            )
        ) {
            let buf = SourceBuffer::new(&bytes);
            let mut cursor = buf.cursor();
            let found = cursor.skip_to_string_delim(b'"', Some(b'('), true);
            let expected = bytes.iter().position(|&b| b != b'a');
            match expected {
                Some(index) => {
                    prop_assert_eq!(cursor.pos() as usize, index);
                    prop_assert_eq!(found, bytes[index]);
                }
                None => prop_assert!(cursor.is_eof()),
            }
        }
    }
}
