use super::*;

#[test]
fn empty_source() {
    let buf = SourceBuffer::new(b"");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert!(buf.as_bytes().is_empty());
    assert_eq!(buf.as_sentinel_bytes()[0], 0);
    assert!(buf.cursor().is_eof());
}

#[test]
fn ascii_source() {
    let buf = SourceBuffer::new(b"puts 1");
    assert_eq!(buf.len(), 6);
    assert_eq!(buf.as_bytes(), b"puts 1");
    assert_eq!(buf.as_sentinel_bytes()[6], 0);
    assert!(!buf.has_bom());
}

#[test]
fn non_utf8_bytes_are_kept() {
    let source = b"# coding: iso-8859-1\n\xE9 = 1\n";
    let buf = SourceBuffer::new(source);
    assert_eq!(buf.as_bytes(), source);
}

#[test]
fn padded_to_cache_line() {
    for len in [0, 1, 10, 63, 64, 65, 127, 128, 1000] {
        let source = vec![b'x'; len];
        let buf = SourceBuffer::new(&source);
        assert_eq!(buf.as_sentinel_bytes().len() % CACHE_LINE, 0, "len {len}");
        assert!(buf.as_sentinel_bytes()[len..].iter().all(|&b| b == 0));
    }
}

#[test]
fn bom_is_skipped_by_cursor() {
    let buf = SourceBuffer::new(b"\xEF\xBB\xBFx = 1");
    assert!(buf.has_bom());
    assert_eq!(buf.bom_len(), 3);
    let cursor = buf.cursor();
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn partial_bom_is_content() {
    let buf = SourceBuffer::new(b"\xEF\xBBx");
    assert!(!buf.has_bom());
    assert_eq!(buf.cursor().pos(), 0);
}
