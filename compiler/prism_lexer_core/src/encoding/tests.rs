use super::*;
use pretty_assertions::assert_eq;

#[test]
fn find_utf8_and_suffixes() {
    assert_eq!(Encoding::find(b"utf-8"), Some(Encoding::UTF_8));
    assert_eq!(Encoding::find(b"UTF-8-UNIX"), Some(Encoding::UTF_8));
    assert_eq!(Encoding::find(b"UTF-8-MAC"), Some(Encoding::UTF_8));
    assert_eq!(Encoding::find(b"utf-8-hfs"), Some(Encoding::UTF8_MAC));
}

#[test]
fn find_aliases_ignoring_case() {
    assert_eq!(Encoding::find(b"binary"), Some(Encoding::ASCII_8BIT));
    assert_eq!(Encoding::find(b"ascii"), Some(Encoding::US_ASCII));
    assert_eq!(Encoding::find(b"SJIS"), Some(Encoding::WINDOWS_31J));
    assert_eq!(Encoding::find(b"euc-jp"), Some(Encoding::EUC_JP));
    assert_eq!(Encoding::find(b"iso-8859-1"), Some(Encoding::ISO_8859_1));
    assert_eq!(Encoding::find(b"Shift_JIS"), Some(Encoding::SHIFT_JIS));
}

#[test]
fn find_unknown() {
    assert_eq!(Encoding::find(b"klingon"), None);
    assert_eq!(Encoding::find(b""), None);
    assert_eq!(Encoding::find(b"UTF"), None);
}

#[test]
fn registry_is_consistent() {
    let all = Encoding::all();
    assert_eq!(all[0], Encoding::UTF_8);
    for encoding in all {
        if !encoding.name().starts_with("UTF-8") {
            assert_eq!(
                Encoding::find(encoding.name().as_bytes()),
                Some(*encoding),
                "{encoding} must be findable by its own name"
            );
        }
    }
}

#[test]
fn equality_is_by_name() {
    assert_eq!(Encoding::default(), Encoding::UTF_8);
    assert_ne!(Encoding::UTF_8, Encoding::UTF8_MAC);
    assert_eq!(Encoding::UTF_8.to_string(), "UTF-8");
    assert_eq!(format!("{:?}", Encoding::BIG5), "Encoding(Big5)");
}

#[test]
fn utf8_family() {
    assert!(Encoding::UTF_8.is_utf8());
    assert!(Encoding::UTF8_MAC.is_utf8());
    assert!(!Encoding::CESU_8.is_utf8());
}

#[test]
fn utf8_widths() {
    let utf8 = Encoding::UTF_8;
    assert_eq!(utf8.char_width(b"a"), 1);
    assert_eq!(utf8.char_width("é".as_bytes()), 2);
    assert_eq!(utf8.char_width("€".as_bytes()), 3);
    assert_eq!(utf8.char_width("😀".as_bytes()), 4);
    assert_eq!(utf8.char_width(b""), 0);
}

#[test]
fn utf8_rejects_malformed() {
    let utf8 = Encoding::UTF_8;
    // lone continuation
    assert_eq!(utf8.char_width(b"\x80"), 0);
    // overlong
    assert_eq!(utf8.char_width(b"\xC0\xAF"), 0);
    assert_eq!(utf8.char_width(b"\xE0\x80\xAF"), 0);
    // surrogate
    assert_eq!(utf8.char_width(b"\xED\xA0\x80"), 0);
    // above U+10FFFF
    assert_eq!(utf8.char_width(b"\xF4\x90\x80\x80"), 0);
    // truncated
    assert_eq!(utf8.char_width(b"\xE2\x82"), 0);
}

#[test]
fn utf8_classes() {
    let utf8 = Encoding::UTF_8;
    assert_eq!(utf8.alpha_char("é".as_bytes()), 2);
    assert_eq!(utf8.alpha_char("日".as_bytes()), 3);
    assert_eq!(utf8.alpha_char("€".as_bytes()), 0);
    assert_eq!(utf8.alnum_char(b"7"), 1);
    assert_eq!(utf8.alpha_char(b"7"), 0);
    assert!(utf8.is_upper_char("É".as_bytes()));
    assert!(utf8.is_upper_char("Ω".as_bytes()));
    assert!(!utf8.is_upper_char("ω".as_bytes()));
    assert!(!utf8.is_upper_char(b"a"));
}

#[test]
fn identifier_widths() {
    let utf8 = Encoding::UTF_8;
    assert_eq!(utf8.ident_start_width(b"_x"), 1);
    assert_eq!(utf8.ident_start_width(b"1"), 0);
    assert_eq!(utf8.ident_char_width(b"1"), 1);
    assert_eq!(utf8.ident_start_width(b"-"), 0);
    // non-alphabetic but valid characters still count
    assert_eq!(utf8.ident_start_width("€".as_bytes()), 3);
    assert_eq!(utf8.ident_start_width(b"\xFF"), 0);
}

#[test]
fn cesu8_surrogate_pairs() {
    let cesu = Encoding::CESU_8;
    // U+1F600 as a surrogate pair
    assert_eq!(cesu.char_width(b"\xED\xA0\xBD\xED\xB8\x80"), 6);
    assert_eq!(cesu.char_width("é".as_bytes()), 2);
    assert_eq!(cesu.char_width(b"\xF0\x9F\x98\x80"), 0);
}

#[test]
fn shift_jis() {
    let sjis = Encoding::SHIFT_JIS;
    assert_eq!(sjis.char_width(b"a"), 1);
    // half-width katakana
    assert_eq!(sjis.char_width(b"\xB1"), 1);
    assert_eq!(sjis.char_width(b"\x82\xA0"), 2);
    assert_eq!(sjis.char_width(b"\x82\x7F"), 0);
    assert_eq!(sjis.char_width(b"\x82"), 0);
    // full-width A
    assert!(sjis.is_upper_char(b"\x82\x60"));
    assert!(!sjis.is_upper_char(b"\x82\x81"));
    assert_eq!(sjis.alpha_char(b"\xB1"), 1);
    assert_eq!(sjis.alpha_char(b"\x82\xA0"), 2);
}

#[test]
fn euc_jp() {
    let euc = Encoding::EUC_JP;
    assert_eq!(euc.char_width(b"\xA4\xA2"), 2);
    assert_eq!(euc.char_width(b"\x8F\xA1\xA1"), 3);
    assert_eq!(euc.char_width(b"\xA4"), 0);
    assert!(euc.is_upper_char(b"\xA3\xC1"));
    assert!(!euc.is_upper_char(b"\xA3\xE1"));
    assert!(euc.is_upper_char(b"Q"));
    assert_eq!(euc.alpha_char(b"\xA4\xA2"), 0);
    // multibyte characters still start identifiers
    assert_eq!(euc.ident_start_width(b"\xA4\xA2"), 2);
}

#[test]
fn other_multibyte_widths() {
    assert_eq!(Encoding::BIG5.char_width(b"\xA4\x40"), 2);
    assert_eq!(Encoding::BIG5.char_width(b"\x80"), 0);
    assert_eq!(Encoding::GBK.char_width(b"\x80"), 1);
    assert_eq!(Encoding::GBK.char_width(b"\x81\x40"), 2);
    assert_eq!(Encoding::GBK.char_width(b"\x81\x7F"), 0);
    assert_eq!(Encoding::GB18030.char_width(b"\x81\x30\x81\x30"), 4);
    assert_eq!(Encoding::EUC_KR.char_width(b"\xB0\xA1"), 2);
    assert_eq!(Encoding::EUC_TW.char_width(b"\x8E\xA2\xA1\xA1"), 4);
    assert_eq!(Encoding::CP949.char_width(b"\x81\x41"), 2);
    assert_eq!(Encoding::EMACS_MULE.char_width(b"\x81\xA0"), 2);
}

#[test]
fn single_byte_tables() {
    let latin1 = Encoding::ISO_8859_1;
    assert_eq!(latin1.char_width(b"\xE9"), 1);
    assert_eq!(latin1.alpha_char(b"\xE9"), 1);
    assert!(latin1.is_upper_char(b"\xC9"));
    assert!(!latin1.is_upper_char(b"\xE9"));
    assert_eq!(latin1.alpha_char(b"\xD7"), 0);

    let ascii = Encoding::US_ASCII;
    assert_eq!(ascii.char_width(b"\xE9"), 0);
    assert_eq!(Encoding::ASCII_8BIT.char_width(b"\xE9"), 1);
    assert_eq!(Encoding::ASCII_8BIT.alpha_char(b"\xE9"), 0);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn widths_never_exceed_input(
            bytes in proptest::collection::vec(any::<u8>(), 0..8),
            index in 0..90usize,
        ) {
            let all = Encoding::all();
            let encoding = all[index % all.len()];
            prop_assert!(encoding.char_width(&bytes) <= bytes.len());
            prop_assert!(encoding.alpha_char(&bytes) <= bytes.len());
            prop_assert!(encoding.ident_char_width(&bytes) <= bytes.len());
        }

        #[test]
        fn utf8_agrees_with_std(s in "\\PC{1,4}") {
            let bytes = s.as_bytes();
            let first = s.chars().next().map_or(0, char::len_utf8);
            prop_assert_eq!(Encoding::UTF_8.char_width(bytes), first);
        }
    }
}
