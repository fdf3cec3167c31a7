use super::*;
use pretty_assertions::assert_eq;

const ALL: [&[u8]; 41] = [
    b"__ENCODING__", b"__LINE__", b"__FILE__", b"BEGIN", b"END", b"alias", b"and", b"begin",
    b"break", b"case", b"class", b"def", b"defined?", b"do", b"else", b"elsif", b"end",
    b"ensure", b"false", b"for", b"if", b"in", b"module", b"next", b"nil", b"not", b"or",
    b"redo", b"rescue", b"retry", b"return", b"self", b"super", b"then", b"true", b"undef",
    b"unless", b"until", b"when", b"while", b"yield",
];

#[test]
fn every_reserved_word_resolves() {
    for word in ALL {
        let found = lookup(word);
        assert!(found.is_some(), "{}", String::from_utf8_lossy(word));
        assert!(found.is_some_and(|k| k.kind.is_keyword()));
    }
}

#[test]
fn identifiers_are_not_keywords() {
    for word in [&b"x"[..], b"iff", b"Def", b"ends", b"defined", b"__END__", b"puts"] {
        assert_eq!(lookup(word), None);
    }
}

#[test]
fn modifier_forms() {
    let modifiers: Vec<_> = ALL
        .iter()
        .filter_map(|word| lookup(word).and_then(|k| k.modifier))
        .collect();
    assert_eq!(
        modifiers,
        vec![
            TokenKind::KeywordIfModifier,
            TokenKind::KeywordRescueModifier,
            TokenKind::KeywordUnlessModifier,
            TokenKind::KeywordUntilModifier,
            TokenKind::KeywordWhileModifier,
        ]
    );
}

#[test]
fn keyword_states() {
    let state = |word: &[u8]| lookup(word).map(|k| k.state);
    assert_eq!(state(b"def"), Some(LexState::FNAME));
    assert_eq!(state(b"alias"), Some(LexState::FNAME | LexState::FITEM));
    assert_eq!(state(b"return"), Some(LexState::MID));
    assert_eq!(state(b"class"), Some(LexState::CLASS));
    assert_eq!(state(b"end"), Some(LexState::END));
}

#[test]
fn public_keyword_check() {
    assert!(is_keyword(b"while"));
    assert!(!is_keyword(b"whilst"));
}
