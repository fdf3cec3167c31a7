use super::*;
use crate::tests::{error_ids, find_named, first_statement, node_names, parse_source, warning_ids};
use crate::ParseResult;
use pretty_assertions::assert_eq;

/// The `Parameters` node of the first `def` in `source`.
fn def_parameters(source: &[u8]) -> (ParseResult, NodeKind) {
    let (result, def) = first_statement(source);
    let NodeKind::Def {
        parameters: Some(parameters),
        ..
    } = result.ast.kind(def)
    else {
        panic!("expected def with parameters");
    };
    let kind = result.ast.kind(parameters);
    (result, kind)
}

#[test]
fn order_follows_parameter_kinds() {
    assert!(Order::Leading < Order::Optional);
    assert!(Order::Rest < Order::Keyword);
    assert!(Order::KeywordRest < Order::Block);
    assert!(ParameterOwner::BareDef.is_method());
    assert!(!ParameterOwner::Lambda.is_method());
}

#[test]
fn every_parameter_kind() {
    let (result, parameters) = def_parameters(b"def m(a, b = 1, *c, d, e:, f: 2, **g, &h)\nend");
    assert!(result.is_success());
    let NodeKind::Parameters {
        requireds,
        optionals,
        rest,
        posts,
        keywords,
        keyword_rest,
        block,
    } = parameters
    else {
        panic!("expected parameters");
    };
    assert_eq!(result.ast.list(requireds).len(), 1);
    assert_eq!(result.ast.list(optionals).len(), 1);
    assert_eq!(result.ast.list(posts).len(), 1);
    let keyword_names: Vec<&str> = result
        .ast
        .list(keywords)
        .iter()
        .map(|&keyword| result.ast.kind(keyword).name())
        .collect();
    assert_eq!(keyword_names, ["RequiredKeywordParameter", "OptionalKeywordParameter"]);
    assert!(rest.is_some());
    assert!(keyword_rest.is_some());
    assert!(block.is_some());
}

#[test]
fn parameters_become_def_locals() {
    let (result, def) = first_statement(b"def m(a, b)\n  c = a\nend");
    let NodeKind::Def { locals, .. } = result.ast.kind(def) else {
        panic!("expected def");
    };
    let names: Vec<&[u8]> = result
        .ast
        .locals(locals)
        .iter()
        .map(|&name| result.constants.get(name))
        .collect();
    assert_eq!(names, [&b"a"[..], b"b", b"c"]);
}

#[test]
fn bare_parameters_end_at_newline() {
    let (result, parameters) = def_parameters(b"def m a, b\n  a\nend");
    assert!(result.is_success());
    let NodeKind::Parameters { requireds, .. } = parameters else {
        panic!("expected parameters");
    };
    assert_eq!(result.ast.list(requireds).len(), 2);
}

#[test]
fn repeated_parameter_names() {
    assert_eq!(error_ids(b"def m(a, a); end"), [DiagnosticId::ParameterNameRepeat]);
    let (result, parameters) = def_parameters(b"def m(_, _); end");
    assert!(result.is_success());
    let NodeKind::Parameters { requireds, .. } = parameters else {
        panic!("expected parameters");
    };
    let second = result.ast.list(requireds)[1];
    assert!(result.ast.flags(second).contains(NodeFlags::REPEATED_PARAMETER));
}

#[test]
fn parameter_order_errors() {
    assert!(error_ids(b"def m(&b, a); end").contains(&DiagnosticId::ParameterOrder));
    assert!(error_ids(b"def m(k:, *r); end").contains(&DiagnosticId::ParameterOrder));
    assert!(error_ids(b"def m(*a, *b); end").contains(&DiagnosticId::ParameterSplatMulti));
    assert!(error_ids(b"def m(a,); end").contains(&DiagnosticId::ParameterWildLooseComma));
}

#[test]
fn formal_argument_kinds() {
    assert_eq!(error_ids(b"def m(@a); end"), [DiagnosticId::ArgumentFormalIvar]);
    assert_eq!(error_ids(b"def m($a); end"), [DiagnosticId::ArgumentFormalGlobal]);
    assert_eq!(error_ids(b"def m(A); end"), [DiagnosticId::ArgumentFormalConstant]);
}

#[test]
fn numbered_parameter_names_are_reserved() {
    assert_eq!(error_ids(b"def m(_1); end"), [DiagnosticId::ParameterNumberedReserved]);
}

#[test]
fn anonymous_forwarding() {
    let result = parse_source(b"def m(*, **, &)\n  n(*, **, &)\nend");
    assert!(result.is_success());
    let result = parse_source(b"def m(...)\n  n(...)\nend");
    assert!(result.is_success());
    find_named(&result, "ForwardingParameter");
    find_named(&result, "ForwardingArguments");
}

#[test]
fn forwarding_outside_method_parameters() {
    assert!(error_ids(b"-> (...) {}").contains(&DiagnosticId::ParameterUnexpectedFwd));
}

#[test]
fn destructured_parameter() {
    let (result, parameters) = def_parameters(b"def m((a, *b), c); end");
    let NodeKind::Parameters { requireds, .. } = parameters else {
        panic!("expected parameters");
    };
    let first = result.ast.list(requireds)[0];
    let NodeKind::MultiTarget { lefts, rest, .. } = result.ast.kind(first) else {
        panic!("expected multi target");
    };
    assert_eq!(result.ast.list(lefts).len(), 1);
    assert!(rest.is_some());
}

#[test]
fn singleton_and_endless_defs() {
    let (result, def) = first_statement(b"def self.m = 1");
    assert!(result.is_success());
    let NodeKind::Def {
        receiver: Some(receiver),
        body: Some(body),
        ..
    } = result.ast.kind(def)
    else {
        panic!("expected endless singleton def");
    };
    assert_eq!(result.ast.kind(receiver), NodeKind::SelfValue);
    assert_eq!(result.ast.kind(body).name(), "Statements");

    assert_eq!(error_ids(b"def m=(v) = v"), [DiagnosticId::DefEndlessSetter]);
}

#[test]
fn keyword_and_operator_method_names() {
    for source in [&b"def end; end"[..], b"def +(other); end", b"def []=(k, v); end", b"def obj.class; end"] {
        let (result, def) = first_statement(source);
        assert!(result.is_success(), "{}", String::from_utf8_lossy(source));
        assert_eq!(result.ast.kind(def).name(), "Def");
    }
}

#[test]
fn def_body_with_rescue() {
    let (result, def) = first_statement(b"def m\n  a\nrescue\n  b\nend");
    let NodeKind::Def { body: Some(body), .. } = result.ast.kind(def) else {
        panic!("expected def body");
    };
    assert_eq!(result.ast.kind(body).name(), "Begin");
}

#[test]
fn class_forms() {
    let (result, class) = first_statement(b"class A::B < C\nend");
    assert!(result.is_success());
    let NodeKind::Class {
        constant_path,
        superclass,
        name,
        ..
    } = result.ast.kind(class)
    else {
        panic!("expected class");
    };
    assert_eq!(result.ast.kind(constant_path).name(), "ConstantPath");
    assert!(superclass.is_some());
    assert_eq!(result.constants.get(name), b"B");

    assert_eq!(
        node_names(b"class << self\nend"),
        ["Program", "Statements", "SingletonClass", "Self"]
    );
}

#[test]
fn class_and_module_errors() {
    assert!(error_ids(b"def m\n  class A; end\nend").contains(&DiagnosticId::ClassInMethod));
    assert!(error_ids(b"def m\n  module A; end\nend").contains(&DiagnosticId::ModuleInMethod));
    assert!(error_ids(b"class a; end").contains(&DiagnosticId::ClassName));
    assert!(error_ids(b"module M\n").contains(&DiagnosticId::ModuleTerm));
}

#[test]
fn alias_forms() {
    assert_eq!(
        node_names(b"alias new old"),
        ["Program", "Statements", "Alias", "Symbol", "Symbol"]
    );
    assert_eq!(
        node_names(b"alias :new :old"),
        ["Program", "Statements", "Alias", "Symbol", "Symbol"]
    );
    assert_eq!(
        node_names(b"alias $new $old"),
        ["Program", "Statements", "AliasGlobal", "GlobalVariableRead", "GlobalVariableRead"]
    );
    assert!(error_ids(b"alias $new foo").contains(&DiagnosticId::AliasArgument));
}

#[test]
fn alias_symbol_names_lex_the_second_name_as_a_method_name() {
    for source in [&b"alias :new :old"[..], b"alias :new old", b"alias :\"new\" :old"] {
        let result = parse_source(source);
        assert!(result.is_success(), "{}", String::from_utf8_lossy(source));
        assert_eq!(
            node_names(source),
            ["Program", "Statements", "Alias", "Symbol", "Symbol"],
            "{}",
            String::from_utf8_lossy(source)
        );
    }
}

#[test]
fn undef_names() {
    let (result, undef) = first_statement(b"undef a, :b, c\nd");
    let NodeKind::Undef { names } = result.ast.kind(undef) else {
        panic!("expected undef");
    };
    assert_eq!(result.ast.list(names).len(), 3);
    assert!(result.is_success());
}

#[test]
fn execution_blocks() {
    assert_eq!(
        node_names(b"BEGIN { a }"),
        ["Program", "Statements", "PreExecution", "Statements", "Call"]
    );
    assert!(error_ids(b"def m\n  BEGIN { }\nend").contains(&DiagnosticId::BeginUpcaseToplevel));
    assert_eq!(warning_ids(b"def m\n  END { }\nend"), [DiagnosticId::EndInMethod]);
}

#[test]
fn parameter_names_cannot_be_method_names() {
    assert!(error_ids(b"def m(a?); end").contains(&DiagnosticId::ParameterMethodName));
    assert!(error_ids(b"def m(a, b!); end").contains(&DiagnosticId::ParameterMethodName));
    assert!(parse_source(b"def m(a, b); end").is_success());
}
