use super::*;
use crate::tests::{error_ids, find_named, first_statement, parse_source};
use crate::ParseResult;
use pretty_assertions::assert_eq;

/// The pattern of the first `in` clause.
fn first_pattern(source: &[u8]) -> (ParseResult, NodeId) {
    let result = parse_source(source);
    let clause = find_named(&result, "In");
    let NodeKind::In { pattern, .. } = result.ast.kind(clause) else {
        panic!("expected in clause");
    };
    (result, pattern)
}

#[test]
fn element_enders() {
    assert!(ends_pattern_element(TokenKind::Comma));
    assert!(ends_pattern_element(TokenKind::KeywordThen));
    assert!(!ends_pattern_element(TokenKind::Pipe));
    assert!(starts_hash_pattern(TokenKind::Label));
    assert!(!starts_hash_pattern(TokenKind::Identifier));
}

#[test]
fn array_pattern_with_rest() {
    let (result, pattern) = first_pattern(b"case x\nin [1, *rest] then rest\nend");
    assert!(result.is_success());
    let NodeKind::ArrayPattern {
        requireds,
        rest: Some(rest),
        posts,
        ..
    } = result.ast.kind(pattern)
    else {
        panic!("expected array pattern with rest");
    };
    assert_eq!(result.ast.list(requireds).len(), 1);
    assert!(posts.is_empty());
    assert_eq!(result.ast.kind(rest).name(), "Splat");
    find_named(&result, "LocalVariableRead");
}

#[test]
fn unbracketed_top_level_list() {
    let (result, pattern) = first_pattern(b"case x\nin a, *b\nend");
    assert!(result.is_success());
    assert_eq!(result.ast.kind(pattern).name(), "ArrayPattern");
}

#[test]
fn trailing_comma_is_implicit_rest() {
    let (result, pattern) = first_pattern(b"case x\nin [a,]\nend");
    let NodeKind::ArrayPattern { rest: Some(rest), .. } = result.ast.kind(pattern) else {
        panic!("expected array pattern with rest");
    };
    assert_eq!(result.ast.kind(rest), NodeKind::ImplicitRest);
}

#[test]
fn find_pattern() {
    let (result, pattern) = first_pattern(b"case x\nin [*, 1, *post]\nend");
    assert!(result.is_success());
    let NodeKind::FindPattern { requireds, .. } = result.ast.kind(pattern) else {
        panic!("expected find pattern");
    };
    assert_eq!(result.ast.list(requireds).len(), 1);
}

#[test]
fn too_many_splats() {
    assert!(error_ids(b"case x\nin [*a, *b, *c]\nend").contains(&DiagnosticId::PatternRest));
}

#[test]
fn hash_pattern_with_capture_and_nil_rest() {
    let (result, pattern) = first_pattern(b"case x\nin {name: String => n, **nil}\nend");
    assert!(result.is_success());
    let NodeKind::HashPattern {
        elements,
        rest: Some(rest),
        ..
    } = result.ast.kind(pattern)
    else {
        panic!("expected hash pattern with rest");
    };
    assert_eq!(result.ast.kind(rest), NodeKind::NoKeywordsParameter);
    let [pair] = result.ast.list(elements) else {
        panic!("expected one pair");
    };
    let NodeKind::Assoc { value, .. } = result.ast.kind(*pair) else {
        panic!("expected assoc");
    };
    assert_eq!(result.ast.kind(value).name(), "CapturePattern");
}

#[test]
fn key_without_value_binds_local() {
    let (result, pattern) = first_pattern(b"case x\nin {name:}\n  name\nend");
    assert!(result.is_success());
    let implicit = result
        .ast
        .find(pattern, |kind| matches!(kind, NodeKind::Implicit { .. }));
    assert!(implicit.is_some());
    let read = find_named(&result, "LocalVariableRead");
    let NodeKind::LocalVariableRead { name, depth } = result.ast.kind(read) else {
        panic!("expected local read");
    };
    assert_eq!(result.constants.get(name), b"name");
    assert_eq!(depth, 0);
}

#[test]
fn hash_pattern_errors() {
    assert!(error_ids(b"case x\nin {1}\nend").contains(&DiagnosticId::PatternHashKey));
    assert!(error_ids(b"case x\nin {**r, a: 1}\nend").contains(&DiagnosticId::PatternExpressionAfterRest));
}

#[test]
fn constant_with_arguments() {
    let (result, pattern) = first_pattern(b"case x\nin Point(x:, y:)\nend");
    let NodeKind::HashPattern {
        constant: Some(constant),
        elements,
        ..
    } = result.ast.kind(pattern)
    else {
        panic!("expected hash pattern with constant");
    };
    assert_eq!(result.ast.kind(constant).name(), "ConstantRead");
    assert_eq!(result.ast.list(elements).len(), 2);

    let (result, pattern) = first_pattern(b"case x\nin A::B[1, 2]\nend");
    let NodeKind::ArrayPattern {
        constant: Some(constant),
        ..
    } = result.ast.kind(pattern)
    else {
        panic!("expected array pattern with constant");
    };
    assert_eq!(result.ast.kind(constant).name(), "ConstantPath");
}

#[test]
fn alternatives_and_ranges() {
    let (result, pattern) = first_pattern(b"case x\nin 1 | 2 | 3\nend");
    assert_eq!(result.ast.kind(pattern).name(), "AlternationPattern");

    let (result, pattern) = first_pattern(b"case x\nin 1...5\nend");
    let NodeKind::Range { left, right } = result.ast.kind(pattern) else {
        panic!("expected range");
    };
    assert!(left.is_some() && right.is_some());
    assert!(result.ast.flags(pattern).contains(NodeFlags::EXCLUDE_END));

    let (result, pattern) = first_pattern(b"case x\nin ..5\nend");
    assert_eq!(
        result.ast.kind(pattern),
        NodeKind::Range {
            left: None,
            right: Some(find_named(&result, "Integer"))
        }
    );
}

#[test]
fn guard_wraps_pattern() {
    let (result, pattern) = first_pattern(b"case x\nin a if a > 1\nend");
    assert!(result.is_success());
    let NodeKind::If { predicate, .. } = result.ast.kind(pattern) else {
        panic!("expected guard");
    };
    let receiver = result
        .ast
        .find(predicate, |kind| matches!(kind, NodeKind::LocalVariableRead { .. }));
    assert!(receiver.is_some());
    let (result, pattern) = first_pattern(b"case x\nin a unless a\nend");
    assert_eq!(result.ast.kind(pattern).name(), "Unless");
}

#[test]
fn pinned_values() {
    let (result, pattern) = first_pattern(b"y = 1\ncase x\nin ^y\nend");
    let NodeKind::PinnedVariable { variable } = result.ast.kind(pattern) else {
        panic!("expected pinned variable");
    };
    assert_eq!(result.ast.kind(variable).name(), "LocalVariableRead");

    let (result, pattern) = first_pattern(b"case x\nin ^(1 + 1)\nend");
    assert_eq!(result.ast.kind(pattern).name(), "PinnedExpression");
    let (result, pattern) = first_pattern(b"case x\nin ^@a\nend");
    assert_eq!(result.ast.kind(pattern).name(), "PinnedVariable");
}

#[test]
fn hash_pattern_keys_must_be_unique() {
    for source in [
        &b"case x\nin {a: 1, a: 2} then 1\nend"[..],
        b"case x\nin a:, a: 1\nend",
        b"x => {a: 1, b:, a: Integer}",
    ] {
        assert!(
            error_ids(source).contains(&DiagnosticId::PatternHashKeyDuplicate),
            "{}",
            String::from_utf8_lossy(source)
        );
    }

    let result = parse_source(b"case x\nin {a: 1, b: 2} then 1\nin {a: 3} then 2\nend");
    assert!(result.is_success());
}

#[test]
fn case_in_without_predicate() {
    assert!(error_ids(b"case\nin 1\nend").contains(&DiagnosticId::CaseMatchMissingPredicate));
}

#[test]
fn case_in_with_else() {
    let (result, node) = first_statement(b"case x\nin 1 then :one\nin 2 then :two\nelse :other\nend");
    assert!(result.is_success());
    let NodeKind::CaseMatch {
        conditions,
        else_clause,
        ..
    } = result.ast.kind(node)
    else {
        panic!("expected case match");
    };
    assert_eq!(result.ast.list(conditions).len(), 2);
    assert!(else_clause.is_some());
}

#[test]
fn rightward_match_operators() {
    let (result, node) = first_statement(b"config => {host:}");
    assert!(result.is_success());
    assert_eq!(result.ast.kind(node).name(), "MatchRequired");
    let NodeKind::Program { locals, .. } = result.ast.kind(result.root) else {
        panic!("expected program");
    };
    assert_eq!(result.ast.locals(locals).len(), 1);

    let (result, node) = first_statement(b"value in Integer | Float");
    assert!(result.is_success());
    let NodeKind::MatchPredicate { pattern, .. } = result.ast.kind(node) else {
        panic!("expected match predicate");
    };
    assert_eq!(result.ast.kind(pattern).name(), "AlternationPattern");
}
