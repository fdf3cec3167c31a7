use super::*;

#[test]
fn membership() {
    let set = TokenSet::new()
        .with(TokenKind::Eof)
        .with(TokenKind::KeywordYield);
    assert!(set.contains(TokenKind::Eof));
    assert!(set.contains(TokenKind::KeywordYield));
    assert!(!set.contains(TokenKind::KeywordEnd));
}

#[test]
fn union_keeps_both_sides() {
    let left = TokenSet::new().with(TokenKind::Comma);
    let right = TokenSet::new().with(TokenKind::KeywordLine);
    let both = left.union(right);
    assert!(both.contains(TokenKind::Comma));
    assert!(both.contains(TokenKind::KeywordLine));
    assert_eq!(TokenSet::default(), TokenSet::new());
}

#[test]
fn predefined_sets() {
    assert!(TERMINATORS.contains(TokenKind::Semicolon));
    assert!(CLOSERS.contains(TokenKind::KeywordEnd));
    assert!(!CLOSERS.contains(TokenKind::Newline));
    assert!(EXPRESSION_START.contains(TokenKind::BraceLeft));
    assert!(!COMMAND_ARGUMENT_START.contains(TokenKind::BraceLeft));
    assert!(COMMAND_ARGUMENT_START.contains(TokenKind::UMinusNum));
    assert!(!COMMAND_ARGUMENT_START.contains(TokenKind::Minus));
    assert!(STATEMENT_START.contains(TokenKind::KeywordAlias));
    assert!(!EXPRESSION_START.contains(TokenKind::KeywordAlias));
    assert!(LIST_CLOSERS.contains(TokenKind::Pipe));
}
