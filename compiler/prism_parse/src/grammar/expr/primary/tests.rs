use super::*;
use crate::tests::{error_ids, find_named, first_statement, node_names, parse_source};
use num_bigint::BigInt;
use pretty_assertions::assert_eq;

#[test]
fn numbered_parameter_names() {
    assert_eq!(numbered_parameter(b"_1"), Some(1));
    assert_eq!(numbered_parameter(b"_9"), Some(9));
    assert_eq!(numbered_parameter(b"_0"), None);
    assert_eq!(numbered_parameter(b"_10"), None);
    assert_eq!(numbered_parameter(b"x"), None);
}

#[test]
fn integer_radixes() {
    for (source, value, flag) in [
        (&b"0b101"[..], 5, NodeFlags::BINARY),
        (b"0o17", 15, NodeFlags::OCTAL),
        (b"1_000", 1000, NodeFlags::DECIMAL),
        (b"0xff", 255, NodeFlags::HEXADECIMAL),
    ] {
        let (result, node) = first_statement(source);
        let NodeKind::Integer { value: id } = result.ast.kind(node) else {
            panic!("expected integer");
        };
        assert_eq!(result.ast.integer(id), &BigInt::from(value));
        assert_eq!(result.ast.flags(node) & !NodeFlags::NEWLINE, NodeFlags::STATIC_LITERAL | flag);
    }
}

#[test]
fn negative_literals_and_powers() {
    let (result, node) = first_statement(b"-1");
    let NodeKind::Integer { value } = result.ast.kind(node) else {
        panic!("expected integer");
    };
    assert_eq!(result.ast.integer(value), &BigInt::from(-1));

    let (result, node) = first_statement(b"-2 ** 2");
    let NodeKind::Call {
        name,
        receiver: Some(receiver),
        ..
    } = result.ast.kind(node)
    else {
        panic!("expected call with receiver");
    };
    assert_eq!(result.constants.get(name), b"-@");
    assert_eq!(result.ast.kind(receiver).name(), "Call");
}

#[test]
fn float_rational_imaginary() {
    let (result, node) = first_statement(b"1.5");
    assert_eq!(result.ast.kind(node), NodeKind::Float { value: 1.5 });
    let (result, node) = first_statement(b"3r");
    assert_eq!(result.ast.kind(node).name(), "Rational");
    assert_eq!(
        node_names(b"2i"),
        ["Program", "Statements", "Imaginary", "Integer"]
    );
}

#[test]
fn keyword_literals() {
    assert_eq!(
        node_names(b"[nil, true, false, self, __LINE__, __ENCODING__]"),
        [
            "Program",
            "Statements",
            "Array",
            "Nil",
            "True",
            "False",
            "Self",
            "SourceLine",
            "SourceEncoding"
        ]
    );
}

#[test]
fn array_static_flag() {
    let (result, node) = first_statement(b"[1, :a, 'b']");
    assert!(result.ast.flags(node).contains(NodeFlags::STATIC_LITERAL));
    let (result, node) = first_statement(b"[1, a]");
    assert!(!result.ast.flags(node).contains(NodeFlags::STATIC_LITERAL));
    let (result, node) = first_statement(b"[*a, 1]");
    assert!(result.ast.flags(node).contains(NodeFlags::CONTAINS_SPLAT));
    assert!(error_ids(b"[1 2]").contains(&DiagnosticId::ArraySeparator));
}

#[test]
fn keyword_hash_in_array() {
    assert_eq!(
        node_names(b"[1, a: 2]"),
        ["Program", "Statements", "Array", "Integer", "KeywordHash", "Assoc", "Symbol", "Integer"]
    );
}

#[test]
fn hash_elements() {
    let (result, node) = first_statement(b"{ a: 1, \"b\": 2, 3 => 4, **c }");
    assert!(result.is_success());
    let NodeKind::Hash { elements } = result.ast.kind(node) else {
        panic!("expected hash");
    };
    let names: Vec<&str> = result
        .ast
        .list(elements)
        .iter()
        .map(|&element| result.ast.kind(element).name())
        .collect();
    assert_eq!(names, ["Assoc", "Assoc", "Assoc", "AssocSplat"]);
}

#[test]
fn implicit_hash_values() {
    let result = parse_source(b"x = 1\n{ x:, Y:, z: }");
    let implicit_values: Vec<&str> = {
        let mut names = Vec::new();
        result.ast.walk(result.root, |id, _| {
            if let NodeKind::Implicit { value } = result.ast.kind(id) {
                names.push(result.ast.kind(value).name());
            }
        });
        names
    };
    assert_eq!(implicit_values, ["LocalVariableRead", "ConstantRead", "Call"]);
}

#[test]
fn parentheses_and_empty_parentheses() {
    assert_eq!(
        node_names(b"(1; 2)"),
        ["Program", "Statements", "Parentheses", "Statements", "Integer", "Integer"]
    );
    let (result, node) = first_statement(b"()");
    assert_eq!(result.ast.kind(node), NodeKind::Parentheses { body: None });
}

#[test]
fn constants_and_paths() {
    assert_eq!(
        node_names(b"::A::B"),
        ["Program", "Statements", "ConstantPath", "ConstantPath"]
    );
    assert_eq!(error_ids(b"::"), [DiagnosticId::ConstantPathColonColonConstant]);
}

#[test]
fn identifiers_resolve_to_locals_or_calls() {
    let (result, node) = first_statement(b"foo");
    assert!(result.ast.flags(node).contains(NodeFlags::VARIABLE_CALL));
    let (result, node) = first_statement(b"foo?");
    assert!(!result.ast.flags(node).contains(NodeFlags::VARIABLE_CALL));
    let result = parse_source(b"a = 1; a");
    find_named(&result, "LocalVariableRead");
}

#[test]
fn circular_parameter_default() {
    assert_eq!(error_ids(b"def m(a = a); end"), [DiagnosticId::ParameterCircular]);
}

#[test]
fn numbered_parameters_in_blocks() {
    let result = parse_source(b"list.map { _1 + _2 }");
    let node = find_named(&result, "NumberedParameters");
    assert_eq!(result.ast.kind(node), NodeKind::NumberedParameters { maximum: 2 });
    assert!(error_ids(b"list.map { |x| _1 }").contains(&DiagnosticId::NumberedParameterNotAllowed));
}

#[test]
fn prefix_operators_are_calls() {
    for (source, method) in [(&b"!a"[..], &b"!"[..]), (b"-a", b"-@"), (b"~a", b"~"), (b"not a", b"!")] {
        let (result, node) = first_statement(source);
        let NodeKind::Call { name, .. } = result.ast.kind(node) else {
            panic!("expected call");
        };
        assert_eq!(result.constants.get(name), method);
    }
}

#[test]
fn defined_forms() {
    assert_eq!(
        node_names(b"defined?(@a)"),
        ["Program", "Statements", "Defined", "InstanceVariableRead"]
    );
    assert_eq!(
        node_names(b"defined? a"),
        ["Program", "Statements", "Defined", "Call"]
    );
}

#[test]
fn statement_keywords_inside_expressions() {
    assert!(error_ids(b"x = alias a b").contains(&DiagnosticId::StatementAlias));
}

#[test]
fn empty_array_elements() {
    let result = parse_source(b"[1, , 2]");
    assert_eq!(result.errors.ids(), [DiagnosticId::ArrayElement]);
    let array = find_named(&result, "Array");
    let NodeKind::Array { elements } = result.ast.kind(array) else {
        panic!("expected array");
    };
    assert_eq!(result.ast.list(elements).len(), 2);
}

#[test]
fn unterminated_parentheses() {
    assert!(error_ids(b"(").contains(&DiagnosticId::ExpectExpressionAfterLparen));
    assert!(error_ids(b"(a, b").contains(&DiagnosticId::ExpectRparenAfterMulti));
    let errors = error_ids(b"(a + b");
    assert!(errors.contains(&DiagnosticId::ExpectRparen));
    assert!(!errors.contains(&DiagnosticId::ExpectRparenAfterMulti));
}
