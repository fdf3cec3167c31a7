use super::*;
use crate::tests::{error_ids, find_named, first_statement, node_names, parse_source, warning_ids};
use pretty_assertions::assert_eq;

#[test]
fn literal_names() {
    assert_eq!(literal_name(&NodeKind::Float { value: 1.5 }), Some("float"));
    assert_eq!(literal_name(&NodeKind::Missing), None);
}

#[test]
fn if_elsif_else_chain() {
    let (result, node) = first_statement(b"if a\n  1\nelsif b\n  2\nelse\n  3\nend");
    assert!(result.is_success());
    let NodeKind::If {
        subsequent: Some(elsif),
        ..
    } = result.ast.kind(node)
    else {
        panic!("expected if with elsif");
    };
    let NodeKind::If {
        subsequent: Some(else_clause),
        ..
    } = result.ast.kind(elsif)
    else {
        panic!("expected nested if");
    };
    assert_eq!(result.ast.kind(else_clause).name(), "Else");
}

#[test]
fn unless_with_then() {
    assert_eq!(
        node_names(b"unless a then b end"),
        ["Program", "Statements", "Unless", "Call", "Statements", "Call"]
    );
}

#[test]
fn missing_predicate_and_end() {
    let errors = error_ids(b"if\n");
    assert!(errors.contains(&DiagnosticId::ConditionalIfPredicate));
    assert!(errors.contains(&DiagnosticId::ConditionalTerm));
    assert!(error_ids(b"if a\nelse\n").contains(&DiagnosticId::ConditionalTermElse));
}

#[test]
fn range_predicate_becomes_flip_flop() {
    let result = parse_source(b"if a..b then c end");
    let flip_flop = find_named(&result, "FlipFlop");
    assert!(!result.ast.flags(flip_flop).contains(NodeFlags::STATIC_LITERAL));
    assert_eq!(warning_ids(b"if 1..2 then c end").len(), 2);
}

#[test]
fn literal_predicate_warns() {
    assert_eq!(
        warning_ids(b"if 1 then a end"),
        [DiagnosticId::LiteralInCondition]
    );
}

#[test]
fn while_and_until_loops() {
    let (result, node) = first_statement(b"while a do b end");
    assert!(result.is_success());
    assert_eq!(result.ast.kind(node).name(), "While");
    let (result, node) = first_statement(b"until a\n  b\nend");
    assert!(result.is_success());
    assert_eq!(result.ast.kind(node).name(), "Until");
    assert!(error_ids(b"while a\n").contains(&DiagnosticId::WhileTerm));
}

#[test]
fn do_after_while_predicate_belongs_to_loop() {
    let (result, node) = first_statement(b"while foo x do bar end");
    assert!(result.is_success());
    assert_eq!(result.ast.kind(node).name(), "While");
    assert!(result.ast.find(node, |kind| matches!(kind, NodeKind::Block { .. })).is_none());
}

#[test]
fn for_loop_declares_index() {
    let (result, node) = first_statement(b"for i in list do i end");
    assert!(result.is_success());
    let NodeKind::For { index, .. } = result.ast.kind(node) else {
        panic!("expected for");
    };
    assert_eq!(result.ast.kind(index).name(), "LocalVariableTarget");
    let read = find_named(&result, "LocalVariableRead");
    assert!(read.index() > index.index());
}

#[test]
fn for_with_multiple_targets() {
    let (result, node) = first_statement(b"for a, b in pairs\nend");
    let NodeKind::For { index, .. } = result.ast.kind(node) else {
        panic!("expected for");
    };
    assert_eq!(result.ast.kind(index).name(), "MultiTarget");
    assert!(error_ids(b"for in x; end").contains(&DiagnosticId::ForIndex));
}

#[test]
fn case_when_collects_conditions() {
    let (result, node) = first_statement(b"case x\nwhen 1, 2 then a\nwhen *list\n  b\nelse c\nend");
    assert!(result.is_success());
    let NodeKind::Case {
        conditions,
        else_clause,
        ..
    } = result.ast.kind(node)
    else {
        panic!("expected case");
    };
    assert_eq!(result.ast.list(conditions).len(), 2);
    assert!(else_clause.is_some());
}

#[test]
fn duplicate_when_reports_the_latest_occurrence() {
    let result = parse_source(b"case x\nwhen 1\nwhen 1\nwhen 1\nend");
    let messages: Vec<&str> = result.warnings.iter().map(|warning| warning.message()).collect();
    assert_eq!(
        messages,
        [
            "'when' clause on line 3 duplicates 'when' clause on line 2 and is ignored",
            "'when' clause on line 4 duplicates 'when' clause on line 3 and is ignored",
        ]
    );
}

#[test]
fn case_without_predicate() {
    let (result, node) = first_statement(b"case\nwhen a then 1\nend");
    assert!(result.is_success());
    let NodeKind::Case { predicate, .. } = result.ast.kind(node) else {
        panic!("expected case");
    };
    assert!(predicate.is_none());
}

#[test]
fn case_without_when() {
    assert!(error_ids(b"case x\nend").contains(&DiagnosticId::CaseMissingConditions));
}

#[test]
fn begin_with_all_clauses() {
    let (result, node) =
        first_statement(b"begin\n  a\nrescue Foo, Bar => e\n  b\nrescue\n  c\nelse\n  d\nensure\n  f\nend");
    assert!(result.is_success());
    let NodeKind::Begin {
        rescue_clause: Some(rescue),
        else_clause,
        ensure_clause,
        ..
    } = result.ast.kind(node)
    else {
        panic!("expected begin with rescue");
    };
    let NodeKind::Rescue {
        exceptions,
        reference,
        subsequent,
        ..
    } = result.ast.kind(rescue)
    else {
        panic!("expected rescue");
    };
    assert_eq!(result.ast.list(exceptions).len(), 2);
    assert!(reference.is_some());
    assert!(subsequent.is_some());
    assert!(else_clause.is_some());
    assert!(ensure_clause.is_some());
}

#[test]
fn else_without_rescue() {
    assert!(error_ids(b"begin\na\nelse\nb\nend").contains(&DiagnosticId::BeginLonelyElse));
}

#[test]
fn retry_outside_rescue() {
    assert_eq!(error_ids(b"retry"), [DiagnosticId::InvalidRetryWithoutRescue]);
    assert!(error_ids(b"begin\nrescue\n  retry\nend").is_empty());
}

#[test]
fn jumps_carry_arguments() {
    let (result, node) = first_statement(b"return 1, 2");
    let NodeKind::Return {
        arguments: Some(arguments),
    } = result.ast.kind(node)
    else {
        panic!("expected return with arguments");
    };
    let NodeKind::Arguments { arguments } = result.ast.kind(arguments) else {
        panic!("expected arguments");
    };
    assert_eq!(result.ast.list(arguments).len(), 2);
    let (result, node) = first_statement(b"break");
    assert_eq!(result.ast.kind(node), NodeKind::Break { arguments: None });
}

#[test]
fn return_and_yield_in_class_body() {
    assert!(error_ids(b"class A\n  return\nend").contains(&DiagnosticId::ReturnInvalid));
    assert!(error_ids(b"class A\n  yield\nend").contains(&DiagnosticId::InvalidYield));
    assert!(error_ids(b"def a\n  yield 1\nend").is_empty());
}

#[test]
fn bare_super_forwards() {
    let result = parse_source(b"def a\n  super\nend");
    find_named(&result, "ForwardingSuper");
    let result = parse_source(b"def a\n  super()\nend");
    find_named(&result, "Super");
}
