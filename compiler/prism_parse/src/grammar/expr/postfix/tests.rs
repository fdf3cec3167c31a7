use super::*;
use crate::tests::{error_ids, first_statement};
use pretty_assertions::assert_eq;

/// Method name and receiver kind of the outermost call in `source`.
fn call_shape(source: &[u8]) -> (Vec<u8>, Option<&'static str>, NodeFlags) {
    let (result, node) = first_statement(source);
    let NodeKind::Call { receiver, name, .. } = result.ast.kind(node) else {
        panic!("expected call");
    };
    let receiver = receiver.map(|receiver| result.ast.kind(receiver).name());
    let flags = result.ast.flags(node) & !NodeFlags::NEWLINE;
    (result.constants.get(name).to_vec(), receiver, flags)
}

#[test]
fn method_name_tokens() {
    assert!(is_method_name(TokenKind::Identifier));
    assert!(is_method_name(TokenKind::KeywordClass));
    assert!(is_method_name(TokenKind::BracketLeftRightEqual));
    assert!(!is_method_name(TokenKind::Comma));
    assert!(!is_method_name(TokenKind::ParenthesisLeft));
}

#[test]
fn dotted_and_safe_navigation_calls() {
    let (name, receiver, flags) = call_shape(b"a.b");
    assert_eq!(name, b"b");
    assert_eq!(receiver, Some("Call"));
    assert!(!flags.contains(NodeFlags::SAFE_NAVIGATION));

    let (name, _, flags) = call_shape(b"a&.b");
    assert_eq!(name, b"b");
    assert!(flags.contains(NodeFlags::SAFE_NAVIGATION));

    let (name, _, _) = call_shape(b"a.class");
    assert_eq!(name, b"class");
}

#[test]
fn implicit_call_method() {
    let (name, receiver, _) = call_shape(b"handler.(1)");
    assert_eq!(name, b"call");
    assert_eq!(receiver, Some("Call"));
}

#[test]
fn self_receiver_ignores_visibility() {
    let (_, receiver, flags) = call_shape(b"self.secret");
    assert_eq!(receiver, Some("Self"));
    assert!(flags.contains(NodeFlags::IGNORE_VISIBILITY));
}

#[test]
fn scope_resolution_calls_and_paths() {
    let (name, receiver, _) = call_shape(b"Foo::bar");
    assert_eq!(name, b"bar");
    assert_eq!(receiver, Some("ConstantRead"));

    let (name, _, _) = call_shape(b"Foo::Bar(1)");
    assert_eq!(name, b"Bar");

    let (result, node) = first_statement(b"Foo::Bar");
    assert_eq!(result.ast.kind(node).name(), "ConstantPath");
}

#[test]
fn indexing_is_a_call() {
    let (result, node) = first_statement(b"list[1, 2]");
    let NodeKind::Call {
        name,
        arguments: Some(arguments),
        ..
    } = result.ast.kind(node)
    else {
        panic!("expected index call");
    };
    assert_eq!(result.constants.get(name), b"[]");
    let NodeKind::Arguments { arguments } = result.ast.kind(arguments) else {
        panic!("expected arguments");
    };
    assert_eq!(result.ast.list(arguments).len(), 2);

    let (name, _, _) = call_shape(b"list[]");
    assert_eq!(name, b"[]");
    assert!(error_ids(b"list[1").contains(&DiagnosticId::ExpectRbracket));
}

#[test]
fn missing_method_name() {
    assert!(error_ids(b"a.").contains(&DiagnosticId::ExpectExpressionAfterOperator));
}

#[test]
fn brace_block_after_command_arguments() {
    assert!(error_ids(b"foo 1 { }").contains(&DiagnosticId::ArgumentUnexpectedBlock));
}
