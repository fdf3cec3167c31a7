use super::*;
use pretty_assertions::assert_eq;

fn pairs(text: &str) -> Vec<(&str, &str)> {
    parse(text.as_bytes())
        .into_iter()
        .map(|entry| (&text[entry.key], &text[entry.value]))
        .collect()
}

#[test]
fn simple_pair() {
    assert_eq!(
        pairs(" frozen_string_literal: true"),
        vec![("frozen_string_literal", "true")]
    );
    assert_eq!(pairs("encoding:ascii  "), vec![("encoding", "ascii")]);
}

#[test]
fn ordinary_comments_are_not_magic() {
    assert_eq!(pairs(" just a note"), vec![]);
    assert_eq!(pairs(" note: this has more words"), vec![]);
    assert_eq!(pairs(" : value"), vec![]);
    assert_eq!(pairs(" key:"), vec![]);
}

#[test]
fn emacs_style() {
    assert_eq!(
        pairs(" -*- coding: utf-8; frozen-string-literal: false -*-"),
        vec![("coding", "utf-8"), ("frozen-string-literal", "false")]
    );
    assert_eq!(pairs(" -*- mode: \"ruby\" -*-"), vec![("mode", "ruby")]);
}

#[test]
fn emacs_without_close_is_ignored() {
    assert_eq!(pairs(" -*- coding: utf-8"), vec![]);
}

#[test]
fn emacs_skips_non_pairs() {
    assert_eq!(
        pairs(" -*- ruby; coding: binary -*-"),
        vec![("coding", "binary")]
    );
}

#[test]
fn key_classification() {
    assert_eq!(MagicKey::classify(b"Coding"), MagicKey::Encoding);
    assert_eq!(MagicKey::classify(b"ENCODING"), MagicKey::Encoding);
    assert_eq!(
        MagicKey::classify(b"frozen-string-literal"),
        MagicKey::FrozenStringLiteral
    );
    assert_eq!(MagicKey::classify(b"warn_indent"), MagicKey::WarnIndent);
    assert_eq!(
        MagicKey::classify(b"shareable_constant_value"),
        MagicKey::ShareableConstantValue
    );
    assert_eq!(MagicKey::classify(b"typed"), MagicKey::Other);
}

#[test]
fn editor_encoding_declarations() {
    let text = " vim: set fileencoding=utf-8 :";
    let range = encoding_name(text.as_bytes()).map(|r| &text[r]);
    assert_eq!(range, Some("utf-8"));

    let text = " encoding: Shift_JIS";
    assert_eq!(
        encoding_name(text.as_bytes()).map(|r| &text[r]),
        Some("Shift_JIS")
    );
    assert_eq!(encoding_name(b" decoding things"), None);
}
