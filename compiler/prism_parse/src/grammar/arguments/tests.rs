use super::*;
use crate::tests::{error_ids, find_named, first_statement, node_names, parse_source, warning_ids};
use crate::ParseResult;
use pretty_assertions::assert_eq;

/// Kind names of the arguments of the first call in `source`.
fn argument_names(source: &[u8]) -> (ParseResult, Vec<&'static str>) {
    let result = parse_source(source);
    let call = find_named(&result, "Call");
    let NodeKind::Call {
        arguments: Some(arguments),
        ..
    } = result.ast.kind(call)
    else {
        panic!("expected call with arguments");
    };
    let NodeKind::Arguments { arguments } = result.ast.kind(arguments) else {
        panic!("expected arguments");
    };
    let names = result
        .ast
        .list(arguments)
        .iter()
        .map(|&argument| result.ast.kind(argument).name())
        .collect();
    (result, names)
}

#[test]
fn parenthesized_and_command_arguments() {
    let (result, names) = argument_names(b"foo(1, *rest, key: 2)");
    assert!(result.is_success());
    assert_eq!(names, ["Integer", "Splat", "KeywordHash"]);

    let (result, names) = argument_names(b"puts 1, 2");
    assert!(result.is_success());
    assert_eq!(names, ["Integer", "Integer"]);
}

#[test]
fn keyword_hash_flags() {
    let result = parse_source(b"foo(a: 1, b: 2)");
    let hash = find_named(&result, "KeywordHash");
    assert!(result.ast.flags(hash).contains(NodeFlags::SYMBOL_KEYS));
    let result = parse_source(b"foo(\"a\" => 1)");
    let hash = find_named(&result, "KeywordHash");
    assert!(!result.ast.flags(hash).contains(NodeFlags::SYMBOL_KEYS));
}

#[test]
fn arguments_carry_splat_and_keyword_flags() {
    let result = parse_source(b"foo(*a, b: 1)");
    let arguments = find_named(&result, "Arguments");
    let flags = result.ast.flags(arguments);
    assert!(flags.contains(NodeFlags::CONTAINS_SPLAT));
    assert!(flags.contains(NodeFlags::CONTAINS_KEYWORDS));
}

#[test]
fn block_argument_is_separate() {
    let (result, call) = first_statement(b"foo(a, &blk)");
    let NodeKind::Call {
        block: Some(block), ..
    } = result.ast.kind(call)
    else {
        panic!("expected call with block argument");
    };
    assert_eq!(result.ast.kind(block).name(), "BlockArgument");
    assert!(error_ids(b"foo(&a, &b)").contains(&DiagnosticId::ArgumentBlockMulti));
    assert!(error_ids(b"foo(&a, 1)").contains(&DiagnosticId::ArgumentAfterBlock));
}

#[test]
fn anonymous_arguments_need_forwarding() {
    assert!(error_ids(b"foo(*)").contains(&DiagnosticId::ArgumentNoForwardingStar));
    assert!(error_ids(b"foo(&)").contains(&DiagnosticId::ArgumentNoForwardingAmp));
    assert!(error_ids(b"foo(...)").contains(&DiagnosticId::ArgumentNoForwardingEllipses));
    assert!(error_ids(b"def m(...)\n  foo(..., 1)\nend").contains(&DiagnosticId::ArgumentAfterForwardingEllipses));
}

#[test]
fn duplicated_keys_warn() {
    assert_eq!(warning_ids(b"foo(a: 1, a: 2)"), [DiagnosticId::DuplicatedHashKey]);
    assert_eq!(warning_ids(b"{ 1 => :a, 1.0 => :b }"), Vec::<DiagnosticId>::new());
}

#[test]
fn brace_and_do_blocks() {
    let (result, call) = first_statement(b"list.each { |x| x }");
    assert!(result.is_success());
    let NodeKind::Call {
        block: Some(block), ..
    } = result.ast.kind(call)
    else {
        panic!("expected call with block");
    };
    let NodeKind::Block {
        locals,
        parameters: Some(parameters),
        ..
    } = result.ast.kind(block)
    else {
        panic!("expected block with parameters");
    };
    assert_eq!(result.ast.locals(locals).len(), 1);
    assert_eq!(result.ast.kind(parameters).name(), "BlockParameters");

    let (result, call) = first_statement(b"list.each do |x|\n  x\nend");
    assert!(result.is_success());
    let NodeKind::Call { block, .. } = result.ast.kind(call) else {
        panic!("expected call");
    };
    assert!(block.is_some());
}

#[test]
fn do_block_binds_to_command() {
    let (result, call) = first_statement(b"foo bar do\n  1\nend");
    assert!(result.is_success());
    let NodeKind::Call { name, block, .. } = result.ast.kind(call) else {
        panic!("expected call");
    };
    assert_eq!(result.constants.get(name), b"foo");
    assert!(block.is_some());
}

#[test]
fn block_locals_and_empty_parameters() {
    let result = parse_source(b"foo { |a; b, c| }");
    assert!(result.is_success());
    let parameters = find_named(&result, "BlockParameters");
    let NodeKind::BlockParameters { locals, .. } = result.ast.kind(parameters) else {
        panic!("expected block parameters");
    };
    assert_eq!(result.ast.list(locals).len(), 2);

    assert_eq!(
        node_names(b"foo { || }"),
        ["Program", "Statements", "Call", "Block", "BlockParameters"]
    );
}

#[test]
fn block_trailing_comma_is_implicit_rest() {
    let result = parse_source(b"foo { |a,| a }");
    assert!(result.is_success());
    find_named(&result, "ImplicitRest");
}

#[test]
fn unterminated_blocks() {
    assert!(error_ids(b"foo {").contains(&DiagnosticId::BlockTermBrace));
    assert!(error_ids(b"foo do\n").contains(&DiagnosticId::BlockTermEnd));
    assert!(error_ids(b"foo { |a }").contains(&DiagnosticId::BlockParamPipeTerm));
}

#[test]
fn lambdas() {
    let (result, lambda) = first_statement(b"->(a, b = 1) { a + b }");
    assert!(result.is_success());
    let NodeKind::Lambda { locals, parameters, .. } = result.ast.kind(lambda) else {
        panic!("expected lambda");
    };
    assert_eq!(result.ast.locals(locals).len(), 2);
    assert!(parameters.is_some());

    let (result, lambda) = first_statement(b"-> do 1 end");
    assert!(result.is_success());
    assert_eq!(result.ast.kind(lambda).name(), "Lambda");

    let result = parse_source(b"-> { _1 }");
    find_named(&result, "NumberedParameters");

    assert!(error_ids(b"->(a)").contains(&DiagnosticId::LambdaOpen));
}

#[test]
fn numbered_parameters_need_an_empty_parameter_list() {
    for source in [&b"-> { _1 }"[..], b"-> do _1 end", b"[1].each { _1 }"] {
        let result = parse_source(source);
        assert!(result.is_success(), "{}", String::from_utf8_lossy(source));
        find_named(&result, "NumberedParameters");
    }

    for source in [&b"->() { _1 }"[..], b"->(a) { _1 }", b"[1].each { |a| _1 }", b"[1].each { || _1 }"] {
        assert!(
            error_ids(source).contains(&DiagnosticId::NumberedParameterNotAllowed),
            "{}",
            String::from_utf8_lossy(source)
        );
    }
}

#[test]
fn keywords_before_positional_arguments() {
    assert!(error_ids(b"foo(a: 1, 2)").contains(&DiagnosticId::ArgumentBareHash));
    assert!(error_ids(b"foo 1, b: 2, 3").contains(&DiagnosticId::ArgumentBareHash));
    assert!(parse_source(b"foo(1, a: 2)").is_success());
    assert!(parse_source(b"foo(1, :a => 2)").is_success());
}

#[test]
fn forwarding_in_unparenthesized_arguments() {
    let result = parse_source(b"def m(...)\n  foo 1, ...\nend");
    assert!(result.errors.ids().contains(&DiagnosticId::ArgumentForwardingUnbound));
    find_named(&result, "ForwardingArguments");

    assert!(parse_source(b"def m(...)\n  foo(1, ...)\nend").is_success());
}
