use super::{first_statement, parse_source, warning_ids};
use crate::{lex, parse, FrozenStringLiteral, Options, Scope};
use pretty_assertions::assert_eq;
use prism_diagnostic::DiagnosticId;
use prism_ir::{NodeFlags, NodeKind};
use prism_lexer::TokenKind;
use proptest::prelude::*;

#[test]
fn empty_source_is_an_empty_program() {
    let result = parse_source(b"");
    assert!(result.is_success());
    let NodeKind::Program { statements, .. } = result.ast.kind(result.root) else {
        panic!("expected program");
    };
    let NodeKind::Statements { body } = result.ast.kind(statements) else {
        panic!("expected statements");
    };
    assert!(body.is_empty());
}

#[test]
fn two_assignments_and_line_offsets() {
    let result = parse_source(b"x = 1\ny = 2\n");
    assert!(result.is_success());
    assert_eq!(result.newlines.offsets(), &[0, 6, 12]);
    assert_eq!(
        result.dump(),
        "@ Program (0...11) locals=[x, y]\n\
         \x20 @ Statements (0...11)\n\
         \x20   @ LocalVariableWrite (0...5) name=x depth=0 flags=NEWLINE\n\
         \x20     @ Integer (4...5) value=1 flags=STATIC_LITERAL|DECIMAL\n\
         \x20   @ LocalVariableWrite (6...11) name=y depth=0 flags=NEWLINE\n\
         \x20     @ Integer (10...11) value=2 flags=STATIC_LITERAL|DECIMAL\n"
    );
    let NodeKind::Program { locals, .. } = result.ast.kind(result.root) else {
        panic!("expected program");
    };
    assert_eq!(result.ast.locals(locals).len(), 2);
}

#[test]
fn newline_flag_marks_first_statement_per_line() {
    let result = parse_source(b"a; b\nc");
    let NodeKind::Program { statements, .. } = result.ast.kind(result.root) else {
        panic!("expected program");
    };
    let NodeKind::Statements { body } = result.ast.kind(statements) else {
        panic!("expected statements");
    };
    let flags: Vec<bool> = result
        .ast
        .list(body)
        .iter()
        .map(|&node| result.ast.flags(node).contains(NodeFlags::NEWLINE))
        .collect();
    assert_eq!(flags, [true, false, true]);
}

#[test]
fn unterminated_def_reports_both_closers() {
    let result = parse_source(b"def foo(");
    assert_eq!(
        result.errors.ids(),
        [DiagnosticId::DefParamsTermParen, DiagnosticId::DefTerm]
    );
    assert!(!result.is_success());
}

#[test]
fn warnings_dropped_without_verbose() {
    let source = b"{ a: 1, a: 2 }";
    assert_eq!(warning_ids(source), [DiagnosticId::DuplicatedHashKey]);
    let quiet = parse(source, &Options::new().with_verbose(false));
    assert!(quiet.warnings.is_empty());
}

#[test]
fn duplicated_when_clause_warns() {
    assert_eq!(
        warning_ids(b"case x\nwhen 1 then a\nwhen 1 then b\nend"),
        [DiagnosticId::DuplicatedWhenClause]
    );
}

#[test]
fn scopes_from_options_make_locals() {
    let options = Options::new().with_scope(Scope::new(["foo"]));
    let result = parse(b"foo", &options);
    let NodeKind::Program { statements, .. } = result.ast.kind(result.root) else {
        panic!("expected program");
    };
    let read = result
        .ast
        .find(statements, |kind| matches!(kind, NodeKind::LocalVariableRead { .. }));
    let Some(read) = read else {
        panic!("expected a local read");
    };
    assert_eq!(
        result.ast.kind(read),
        NodeKind::LocalVariableRead {
            name: result.constants.find(b"foo").expect("interned"),
            depth: 1,
        }
    );
}

#[test]
fn named_captures_declare_locals() {
    let (result, node) = first_statement(b"/(?<year>\\d+)/ =~ input");
    let NodeKind::MatchWrite { targets, .. } = result.ast.kind(node) else {
        panic!("expected match write");
    };
    assert_eq!(result.ast.list(targets).len(), 1);
    let (result, node) = first_statement(b"input =~ /(?<year>\\d+)/");
    assert_eq!(result.ast.kind(node).name(), "Call");
}

#[test]
fn frozen_string_literal_option_and_comment() {
    let options = Options::new().with_frozen_string_literal(FrozenStringLiteral::Enabled);
    let result = parse(b"'a'", &options);
    let string = super::find_named(&result, "String");
    assert!(result.ast.flags(string).contains(NodeFlags::FROZEN));

    let result = parse(b"# frozen_string_literal: false\n'a'", &options);
    let string = super::find_named(&result, "String");
    assert!(result.ast.flags(string).contains(NodeFlags::MUTABLE));
    assert_eq!(result.frozen_string_literal, Some(false));
}

#[test]
fn file_keyword_uses_filepath() {
    let options = Options::new().with_filepath("lib/a.rb");
    let result = parse(b"__FILE__", &options);
    let node = super::find_named(&result, "SourceFile");
    let NodeKind::SourceFile { filepath } = result.ast.kind(node) else {
        panic!("expected source file");
    };
    assert_eq!(result.ast.string(filepath), b"lib/a.rb");
}

#[test]
fn start_line_shifts_line_numbers() {
    let result = parse(b"a\nb", &Options::new().with_line(10));
    assert_eq!(result.line_column(2).line, 11);
    assert_eq!(result.line_column(2).column, 0);
}

#[test]
fn lex_reports_tokens_in_order() {
    let result = lex(b"foo = 1 # note\n", &Options::default());
    let kinds: Vec<TokenKind> = result.tokens.iter().map(|lexed| lexed.token.kind).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::Identifier,
            TokenKind::Equal,
            TokenKind::Integer,
            TokenKind::Comment,
            TokenKind::Newline,
            TokenKind::Eof,
        ]
    );
    assert_eq!(result.comments.len(), 1);
}

#[test]
fn data_section_is_located() {
    let result = parse_source(b"a\n__END__\nraw bytes\n");
    assert!(result.is_success());
    assert!(result.data_loc.is_some());
}

proptest! {
    #[test]
    fn parser_never_panics(source in proptest::collection::vec(any::<u8>(), 0..64)) {
        let result = parse(&source, &Options::default());
        prop_assert!(result.ast.len() > 0);
    }

    #[test]
    fn ruby_like_input_never_panics(source in "[a-z0-9 =+*(){}\\[\\]|&.,:;'\"#\n<>~^!?@$%/-]{0,48}") {
        let result = parse(source.as_bytes(), &Options::default());
        prop_assert!(result.ast.len() > 0);
    }
}
