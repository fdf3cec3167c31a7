use super::*;
use pretty_assertions::assert_eq;

fn run(input: &[u8], mode: UnescapeMode) -> (Unescaped, Vec<DiagnosticId>) {
    let mut errors = DiagnosticList::new();
    let mut ctx = UnescapeContext {
        encoding: Encoding::UTF_8,
        offset: 10,
        single_character: false,
        errors: &mut errors,
    };
    let result = unescape(input, mode, &mut ctx);
    (result, errors.ids())
}

fn all(input: &[u8]) -> Vec<u8> {
    let (result, errors) = run(input, UnescapeMode::All);
    assert_eq!(errors, vec![], "{input:?}");
    result.bytes
}

const QUOTE: Delimiter = Delimiter::new(b'\'', None);
const PAREN: Delimiter = Delimiter::new(b')', Some(b'('));

// === Modes ===

#[test]
fn none_copies_verbatim() {
    let (result, errors) = run(br"a\nb\\", UnescapeMode::None);
    assert_eq!(result.bytes, br"a\nb\\".to_vec());
    assert!(errors.is_empty());
}

#[test]
fn minimal_only_backslash_and_delimiter() {
    let (result, _) = run(br"it\'s \\ \n", UnescapeMode::Minimal(QUOTE));
    assert_eq!(result.bytes, br"it's \ \n".to_vec());
}

#[test]
fn minimal_bracket_pair() {
    let (result, _) = run(br"\(a\) \[", UnescapeMode::Minimal(PAREN));
    assert_eq!(result.bytes, br"(a) \[".to_vec());
}

#[test]
fn whitespace_mode_escaped_space() {
    let (result, _) = run(br"a\ b", UnescapeMode::Whitespace(PAREN));
    assert_eq!(result.bytes, b"a b".to_vec());
    let (result, _) = run(b"a\\\nb\\t", UnescapeMode::Whitespace(PAREN));
    assert_eq!(result.bytes, b"a\nb\\t".to_vec());
}

// === Named and numeric escapes ===

#[test]
fn named_escapes() {
    assert_eq!(
        all(br"\a\b\e\f\n\r\s\t\v"),
        vec![0x07, 0x08, 0x1b, 0x0c, b'\n', b'\r', b' ', b'\t', 0x0b]
    );
    assert_eq!(all(br#"\\\'\"\q"#), br#"\'"q"#.to_vec());
}

#[test]
fn octal_escapes() {
    assert_eq!(all(br"\0"), vec![0]);
    assert_eq!(all(br"\101\1012"), b"AA2".to_vec());
    assert_eq!(all(br"\777"), vec![0xff]);
}

#[test]
fn hex_escapes() {
    assert_eq!(all(br"\x41\x9"), vec![b'A', 9]);
    assert_eq!(all(br"\x414"), b"A4".to_vec());
}

#[test]
fn hex_escape_without_digits() {
    let (result, errors) = run(br"\xg", UnescapeMode::All);
    assert_eq!(result.bytes, b"g".to_vec());
    assert_eq!(errors, vec![DiagnosticId::EscapeInvalidHexadecimal]);
}

#[test]
fn line_continuation_produces_nothing() {
    assert_eq!(all(b"a\\\nb"), b"ab".to_vec());
    assert_eq!(all(b"a\\\r\nb"), b"ab".to_vec());
}

#[test]
fn trailing_backslash_is_kept() {
    assert_eq!(all(b"a\\"), b"a\\".to_vec());
}

// === Unicode ===

#[test]
fn unicode_fixed_width() {
    let (result, errors) = run(br"\u00e9", UnescapeMode::All);
    assert_eq!(result.bytes, "é".as_bytes().to_vec());
    assert!(result.forced_utf8);
    assert!(errors.is_empty());
}

#[test]
fn unicode_fixed_width_too_short() {
    let (_, errors) = run(br"\u12", UnescapeMode::All);
    assert_eq!(errors, vec![DiagnosticId::EscapeInvalidUnicode]);
}

#[test]
fn unicode_braces_multiple_codepoints() {
    assert_eq!(all(br"\u{41 42}"), b"AB".to_vec());
    assert_eq!(all(br"\u{ 3042 }"), "あ".as_bytes().to_vec());
}

#[test]
fn unicode_braces_errors() {
    let (_, errors) = run(br"\u{}", UnescapeMode::All);
    assert_eq!(errors, vec![DiagnosticId::EscapeInvalidUnicode]);

    let (_, errors) = run(br"\u{1234567}", UnescapeMode::All);
    assert_eq!(errors, vec![DiagnosticId::EscapeInvalidUnicodeLong]);

    let (_, errors) = run(br"\u{41", UnescapeMode::All);
    assert_eq!(errors, vec![DiagnosticId::EscapeInvalidUnicodeTerm]);
}

#[test]
fn unicode_out_of_range_emits_replacement() {
    let (result, errors) = run(br"\u{110000}", UnescapeMode::All);
    assert_eq!(result.bytes, "\u{FFFD}".as_bytes().to_vec());
    assert_eq!(errors, vec![DiagnosticId::EscapeInvalidUnicode]);
}

#[test]
fn unicode_in_character_literal_is_single() {
    let mut errors = DiagnosticList::new();
    let mut ctx = UnescapeContext {
        encoding: Encoding::UTF_8,
        offset: 0,
        single_character: true,
        errors: &mut errors,
    };
    unescape(br"\u{41 42}", UnescapeMode::All, &mut ctx);
    assert_eq!(errors.ids(), vec![DiagnosticId::EscapeInvalidUnicodeLiteral]);
}

#[test]
fn mixed_encoding_is_reported() {
    let mut errors = DiagnosticList::new();
    let mut ctx = UnescapeContext {
        encoding: Encoding::UTF_8,
        offset: 0,
        single_character: false,
        errors: &mut errors,
    };
    unescape(br"\u3042\xff", UnescapeMode::All, &mut ctx);
    assert_eq!(errors.ids(), vec![DiagnosticId::MixedEncoding]);
    assert_eq!(
        errors.as_slice()[0].message(),
        "UTF-8 mixed within UTF-8 source"
    );
}

// === Control and meta ===

#[test]
fn control_escapes() {
    assert_eq!(all(br"\ca\C-a\c?"), vec![0x01, 0x01, 0x7f]);
}

#[test]
fn meta_escapes() {
    let (result, _) = run(br"\M-a\M-\C-a\c\M-a", UnescapeMode::All);
    assert_eq!(result.bytes, vec![0xe1, 0x81, 0x81]);
    assert!(result.forced_binary);
}

#[test]
fn control_meta_errors() {
    let (_, errors) = run(br"\c\ca", UnescapeMode::All);
    assert_eq!(errors, vec![DiagnosticId::EscapeInvalidControlRepeat]);

    let (_, errors) = run(br"\M-\M-a", UnescapeMode::All);
    assert_eq!(errors, vec![DiagnosticId::EscapeInvalidMetaRepeat]);

    let (_, errors) = run(br"\Ma", UnescapeMode::All);
    assert_eq!(errors, vec![DiagnosticId::EscapeInvalidMeta]);

    let (_, errors) = run(br"\C-\u0041", UnescapeMode::All);
    assert_eq!(errors, vec![DiagnosticId::EscapeInvalidUnicodeCmFlags]);
}

#[test]
fn error_spans_are_absolute() {
    let mut errors = DiagnosticList::new();
    let mut ctx = UnescapeContext {
        encoding: Encoding::UTF_8,
        offset: 10,
        single_character: false,
        errors: &mut errors,
    };
    unescape(br"ab\xz", UnescapeMode::All, &mut ctx);
    assert_eq!(errors.as_slice()[0].span, Span::new(12, 14));
}

// === escape_len ===

#[test]
fn escape_lengths() {
    let len = |input: &[u8]| escape_len(input, 0, Encoding::UTF_8);
    assert_eq!(len(br"\n"), 2);
    assert_eq!(len(br"\x4142"), 4);
    assert_eq!(len(br"\1234"), 4);
    assert_eq!(len(br"\u{41 42}x"), 9);
    assert_eq!(len(br"\M-\C-x"), 7);
    assert_eq!(len("\\é".as_bytes()), 3);
    assert_eq!(len(b"\\"), 1);
    assert_eq!(escape_len(br"ab\t", 2, Encoding::UTF_8), 2);
}

#[test]
fn shift_jis_trail_byte_is_not_an_escape() {
    // 0x95 0x5C is one Shift_JIS character whose trail byte is `\`.
    let mut errors = DiagnosticList::new();
    let mut ctx = UnescapeContext {
        encoding: Encoding::SHIFT_JIS,
        offset: 0,
        single_character: false,
        errors: &mut errors,
    };
    let result = unescape(b"\x95\x5cn", UnescapeMode::All, &mut ctx);
    assert_eq!(result.bytes, b"\x95\x5cn".to_vec());
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn never_panics(input in proptest::collection::vec(any::<u8>(), 0..64)) {
            for mode in [
                UnescapeMode::None,
                UnescapeMode::Minimal(QUOTE),
                UnescapeMode::Whitespace(PAREN),
                UnescapeMode::All,
            ] {
                let _ = run(&input, mode);
            }
            for pos in 0..input.len() {
                prop_assert!(escape_len(&input, pos, Encoding::UTF_8) <= input.len() - pos);
            }
        }

        #[test]
        fn backslash_free_input_is_unchanged(input in "[a-z ]{0,32}") {
            let (result, errors) = run(input.as_bytes(), UnescapeMode::All);
            prop_assert_eq!(result.bytes, input.as_bytes().to_vec());
            prop_assert!(errors.is_empty());
        }
    }
}
