use super::*;
use crate::tests::{error_ids, first_statement, node_names};
use pretty_assertions::assert_eq;

#[test]
fn attribute_names() {
    assert!(is_attribute_name(b"name"));
    assert!(is_attribute_name(b"_private"));
    assert!(is_attribute_name(b"Upper"));
    assert!(!is_attribute_name(b"empty?"));
    assert!(!is_attribute_name(b"save!"));
    assert!(!is_attribute_name(b"+"));
    assert!(!is_attribute_name(b"[]"));
    assert!(!is_attribute_name(b""));
}

#[test]
fn readonly_kinds() {
    assert!(is_readonly(&NodeKind::SelfValue));
    assert!(is_readonly(&NodeKind::SourceLine));
    assert!(!is_readonly(&NodeKind::Missing));
}

#[test]
fn bare_identifier_becomes_local() {
    assert_eq!(
        node_names(b"a = a"),
        ["Program", "Statements", "LocalVariableWrite", "LocalVariableRead"]
    );
}

#[test]
fn attribute_write_calls_setter() {
    let (result, call) = first_statement(b"foo.bar = 1");
    let NodeKind::Call { name, arguments, .. } = result.ast.kind(call) else {
        panic!("expected call");
    };
    assert_eq!(result.constants.get(name), b"bar=");
    assert!(arguments.is_some());
    assert!(result.ast.flags(call).contains(NodeFlags::ATTRIBUTE_WRITE));
}

#[test]
fn index_write_appends_value() {
    let (result, call) = first_statement(b"a[1, 2] = 3");
    let NodeKind::Call {
        name,
        arguments: Some(arguments),
        ..
    } = result.ast.kind(call)
    else {
        panic!("expected call with arguments");
    };
    assert_eq!(result.constants.get(name), b"[]=");
    let NodeKind::Arguments { arguments } = result.ast.kind(arguments) else {
        panic!("expected arguments");
    };
    assert_eq!(result.ast.list(arguments).len(), 3);
}

#[test]
fn multiple_assignment_with_splat() {
    let (result, write) = first_statement(b"a, *b, c = 1, 2, 3");
    let NodeKind::MultiWrite {
        lefts,
        rest,
        rights,
        value,
    } = result.ast.kind(write)
    else {
        panic!("expected multi write");
    };
    assert_eq!(result.ast.list(lefts).len(), 1);
    assert!(rest.is_some());
    assert_eq!(result.ast.list(rights).len(), 1);
    assert_eq!(result.ast.kind(value).name(), "Array");
}

#[test]
fn nested_targets() {
    let (result, write) = first_statement(b"(a, b), c = x");
    let NodeKind::MultiWrite { lefts, .. } = result.ast.kind(write) else {
        panic!("expected multi write");
    };
    let lefts = result.ast.list(lefts);
    assert_eq!(result.ast.kind(lefts[0]).name(), "MultiTarget");
    assert_eq!(result.ast.kind(lefts[1]).name(), "LocalVariableTarget");
}

#[test]
fn trailing_comma_is_implicit_rest() {
    let (result, write) = first_statement(b"a, = list");
    let NodeKind::MultiWrite { rest: Some(rest), .. } = result.ast.kind(write) else {
        panic!("expected rest");
    };
    assert_eq!(result.ast.kind(rest), NodeKind::ImplicitRest);
}

#[test]
fn rescue_modifier_binds_to_value() {
    assert_eq!(
        node_names(b"a = b rescue c"),
        [
            "Program",
            "Statements",
            "LocalVariableWrite",
            "RescueModifier",
            "Call",
            "Call"
        ]
    );
}

#[test]
fn operator_write_declares_target() {
    assert_eq!(
        node_names(b"x += 1"),
        ["Program", "Statements", "OperatorWrite", "LocalVariableTarget", "Integer"]
    );
}

#[test]
fn write_errors() {
    assert_eq!(error_ids(b"self = 1"), [DiagnosticId::WriteTargetReadonly]);
    assert_eq!(error_ids(b"def m; C = 1; end"), [DiagnosticId::WriteTargetInMethod]);
    assert_eq!(error_ids(b"a.b(1) += 2"), [DiagnosticId::OperatorWriteArguments]);
    assert_eq!(error_ids(b"a, b += 1"), [DiagnosticId::OperatorMultiAssign]);
    assert_eq!(error_ids(b"a, b ||= 1"), [DiagnosticId::PipepipeeqMultiAssign]);
    assert_eq!(error_ids(b"*a, *b = c"), [DiagnosticId::MultiAssignMultiSplats]);
    assert_eq!(error_ids(b"_1 = 2"), [DiagnosticId::ParameterNumberedReserved]);
}

#[test]
fn void_values_cannot_be_assigned() {
    for source in [
        &b"x = return 1"[..],
        b"x = (return)",
        b"x = begin\n  return\nend",
        b"loop { x = break }",
        b"x = if a then return else next end",
        b"x += return",
    ] {
        assert!(
            error_ids(source).contains(&DiagnosticId::VoidExpression),
            "{}",
            String::from_utf8_lossy(source)
        );
    }

    for source in [&b"x = 1"[..], b"x = if a then return else 1 end", b"x = (a; 1)"] {
        assert!(
            !error_ids(source).contains(&DiagnosticId::VoidExpression),
            "{}",
            String::from_utf8_lossy(source)
        );
    }
}
