use super::{error_ids, find_named, node_names, parse_source};
use prism_diagnostic::DiagnosticId;
use prism_ir::NodeKind;

#[test]
fn stray_closer_at_top_level_is_skipped() {
    assert_eq!(error_ids(b"foo)"), [DiagnosticId::UnexpectedTokenIgnore]);
    assert_eq!(node_names(b"foo)"), ["Program", "Statements", "Call"]);
}

#[test]
fn closer_of_parent_construct_ends_inner_list() {
    let errors = error_ids(b"begin\n  if x then y\n  rescue\nend\n");
    assert!(errors.contains(&DiagnosticId::UnexpectedTokenCloseContext));
    assert!(errors.contains(&DiagnosticId::ConditionalTerm));
    assert!(!errors.contains(&DiagnosticId::BeginTerm));

    let result = parse_source(b"begin\n  if x then y\n  rescue\nend\n");
    let begin = find_named(&result, "Begin");
    let NodeKind::Begin { rescue_clause, .. } = result.ast.kind(begin) else {
        panic!("expected begin");
    };
    assert!(rescue_clause.is_some());
}

#[test]
fn missing_ends_are_reported_per_construct() {
    let errors = error_ids(b"def a\n  if b\n    c\n");
    assert!(errors.contains(&DiagnosticId::ConditionalTerm));
    assert!(errors.contains(&DiagnosticId::DefTerm));
    assert_eq!(errors.len(), 2);
}

#[test]
fn missing_operand_becomes_placeholder() {
    let result = parse_source(b"1 +");
    assert!(result.errors.contains(DiagnosticId::ExpectExpressionAfterOperator));
    find_named(&result, "Missing");
}

#[test]
fn unterminated_strings() {
    assert!(error_ids(b"'abc").contains(&DiagnosticId::StringLiteralTerm));
    assert!(error_ids(b"\"abc #{1}").contains(&DiagnosticId::StringInterpolatedTerm));
}

#[test]
fn unclosed_brackets() {
    assert!(error_ids(b"[1, 2").contains(&DiagnosticId::ArrayTerm));
    assert!(error_ids(b"{ a: 1").contains(&DiagnosticId::HashTerm));
    assert!(error_ids(b"foo(1, 2").contains(&DiagnosticId::ArgumentTermParen));
}

#[test]
fn parsing_continues_after_an_error() {
    let result = parse_source(b"x = )\ny = 2\n");
    assert!(!result.is_success());
    let names = {
        let mut names = Vec::new();
        result.ast.walk(result.root, |id, _| names.push(result.ast.kind(id).name()));
        names
    };
    assert!(names.contains(&"LocalVariableWrite"));
    assert!(names.contains(&"Integer"));
}

#[test]
fn errors_are_sorted_by_location() {
    let result = parse_source(b"foo)\nbar]\n");
    let starts: Vec<u32> = result.errors.iter().map(|diagnostic| diagnostic.span.start).collect();
    let mut sorted = starts.clone();
    sorted.sort_unstable();
    assert_eq!(starts, sorted);
    assert_eq!(starts.len(), 2);
}
