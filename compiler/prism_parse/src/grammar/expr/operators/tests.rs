use super::*;
use pretty_assertions::assert_eq;

#[test]
fn factor_binds_tighter_than_term() {
    let plus = infix_power(TokenKind::Plus).map(|p| p.left);
    let star = infix_power(TokenKind::Star).map(|p| p.left);
    assert!(star > plus);
}

#[test]
fn exponent_is_right_associative() {
    let power = infix_power(TokenKind::StarStar);
    assert_eq!(power.map(|p| p.left == p.right), Some(true));
}

#[test]
fn equality_is_nonassociative() {
    assert_eq!(infix_power(TokenKind::EqualEqual).map(|p| p.nonassoc), Some(true));
    assert_eq!(infix_power(TokenKind::Plus).map(|p| p.nonassoc), Some(false));
}

#[test]
fn prefix_tokens_are_not_infix() {
    assert_eq!(infix_power(TokenKind::UMinus), None);
    assert_eq!(infix_power(TokenKind::Bang), None);
    assert_eq!(infix_power(TokenKind::Newline), None);
}

#[test]
fn operator_writes_name_their_method() {
    assert_eq!(operator_write_method(TokenKind::LessLessEqual), Some(&b"<<"[..]));
    assert_eq!(operator_write_method(TokenKind::PipePipeEqual), None);
}
