use super::*;
use pretty_assertions::assert_eq;

#[test]
fn display_lists_bits_in_order() {
    assert_eq!(LexState::empty().to_string(), "NONE");
    assert_eq!((LexState::BEG | LexState::LABEL).to_string(), "BEG|LABEL");
    assert_eq!(
        (LexState::ARG | LexState::LABELED).to_string(),
        "ARG|LABELED"
    );
    assert_eq!(LexState::END_ANY.to_string(), "END|ENDARG|ENDFN");
}

#[test]
fn beginning_states() {
    assert!(LexState::BEG.is_beg());
    assert!(LexState::MID.is_beg());
    assert!(LexState::CLASS.is_beg());
    assert!((LexState::ARG | LexState::LABELED).is_beg());
    assert!(!LexState::ARG.is_beg());
    assert!(!(LexState::END | LexState::LABEL).is_beg());
}

#[test]
fn state_stack_is_lifo() {
    let mut stack = StateStack::default();
    assert!(!stack.is_set());
    stack.push(true);
    stack.push(false);
    assert!(!stack.is_set());
    stack.pop();
    assert!(stack.is_set());
    stack.pop();
    assert!(!stack.is_set());
}
