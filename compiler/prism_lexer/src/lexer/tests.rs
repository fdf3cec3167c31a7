use super::*;
use pretty_assertions::assert_eq;
use TokenKind as T;

struct Locals(&'static [&'static str]);

impl LocalTable for Locals {
    fn is_local(&self, name: &[u8]) -> bool {
        self.0.iter().any(|local| local.as_bytes() == name)
    }
}

fn lex_with<L: LocalTable>(source: &str, locals: &L) -> (Vec<(TokenKind, String)>, LexOutput) {
    let buffer = SourceBuffer::new(source.as_bytes());
    let mut lexer = Lexer::new(&buffer, LexerConfig::default());
    let mut tokens = Vec::new();
    for _ in 0..10_000 {
        let token = lexer.next_token(locals);
        if token.kind == T::Eof {
            break;
        }
        let text = String::from_utf8_lossy(token.text(buffer.as_bytes())).into_owned();
        tokens.push((token.kind, text));
    }
    (tokens, lexer.finish())
}

fn lex(source: &str) -> Vec<(TokenKind, String)> {
    lex_with(source, &()).0
}

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).into_iter().map(|(kind, _)| kind).collect()
}

fn significant(source: &str) -> Vec<TokenKind> {
    kinds(source)
        .into_iter()
        .filter(|kind| !kind.is_trivia())
        .collect()
}

#[test]
fn empty_source() {
    let (tokens, output) = lex_with("", &());
    assert!(tokens.is_empty());
    assert_eq!(output.newlines.offsets(), &[0]);
    assert!(output.errors.is_empty());
}

#[test]
fn assignment_and_newlines() {
    let (tokens, output) = lex_with("x = 1\ny = 2\n", &());
    assert_eq!(
        tokens.iter().map(|(kind, _)| *kind).collect::<Vec<_>>(),
        vec![
            T::Identifier,
            T::Equal,
            T::Integer,
            T::Newline,
            T::Identifier,
            T::Equal,
            T::Integer,
            T::Newline,
        ]
    );
    assert_eq!(output.newlines.offsets(), &[0, 6, 12]);
}

#[test]
fn newline_after_operator_is_ignored() {
    assert_eq!(
        kinds("1 +\n2"),
        vec![T::Integer, T::Plus, T::IgnoredNewline, T::Integer]
    );
}

#[test]
fn leading_dot_continues_call() {
    assert_eq!(
        kinds("foo\n  .bar"),
        vec![T::Identifier, T::IgnoredNewline, T::Dot, T::Identifier]
    );
    assert_eq!(
        kinds("foo\n&.bar"),
        vec![T::Identifier, T::IgnoredNewline, T::AmpersandDot, T::Identifier]
    );
}

#[test]
fn line_continuation() {
    let (tokens, output) = lex_with("a \\\n+ b", &());
    assert_eq!(
        tokens.iter().map(|(kind, _)| *kind).collect::<Vec<_>>(),
        vec![T::Identifier, T::Plus, T::Identifier]
    );
    assert_eq!(output.newlines.offsets(), &[0, 4]);
}

#[test]
fn keywords_and_modifiers() {
    assert_eq!(
        significant("if x then y end"),
        vec![
            T::KeywordIf,
            T::Identifier,
            T::KeywordThen,
            T::Identifier,
            T::KeywordEnd
        ]
    );
    assert_eq!(
        significant("y if x"),
        vec![T::Identifier, T::KeywordIfModifier, T::Identifier]
    );
    assert_eq!(
        significant("return if x"),
        vec![T::KeywordReturn, T::KeywordIfModifier, T::Identifier]
    );
}

#[test]
fn keyword_after_dot_is_identifier() {
    assert_eq!(
        significant("x.class.end"),
        vec![T::Identifier, T::Dot, T::Identifier, T::Dot, T::Identifier]
    );
}

#[test]
fn method_name_suffixes() {
    assert_eq!(
        lex("empty? save! a!=b"),
        vec![
            (T::Identifier, "empty?".into()),
            (T::Identifier, "save!".into()),
            (T::Identifier, "a".into()),
            (T::BangEqual, "!=".into()),
            (T::Identifier, "b".into()),
        ]
    );
}

#[test]
fn constants_and_labels() {
    assert_eq!(
        lex("Foo::Bar"),
        vec![
            (T::Constant, "Foo".into()),
            (T::ColonColon, "::".into()),
            (T::Constant, "Bar".into()),
        ]
    );
    assert_eq!(
        significant("foo(a: 1, if: 2)"),
        vec![
            T::Identifier,
            T::ParenthesisLeft,
            T::Label,
            T::Integer,
            T::Comma,
            T::Label,
            T::Integer,
            T::ParenthesisRight,
        ]
    );
}

#[test]
fn setter_name_in_definition() {
    assert_eq!(
        lex("def foo=(v)")[..3].to_vec(),
        vec![
            (T::KeywordDef, "def".into()),
            (T::Identifier, "foo=".into()),
            (T::ParenthesisLeft, "(".into()),
        ]
    );
}

#[test]
fn local_variable_changes_minus() {
    let locals = Locals(&["x"]);
    let (tokens, _) = lex_with("x -1", &locals);
    assert_eq!(tokens[1].0, T::Minus);

    let (tokens, output) = lex_with("x -1", &());
    assert_eq!(tokens[1].0, T::UMinusNum);
    assert!(output
        .warnings
        .contains(DiagnosticId::AmbiguousFirstArgumentMinus));
}

#[test]
fn splat_and_double_splat() {
    assert_eq!(significant("*a"), vec![T::UStar, T::Identifier]);
    assert_eq!(significant("a * b"), vec![T::Identifier, T::Star, T::Identifier]);
    assert_eq!(significant("**h"), vec![T::UStarStar, T::Identifier]);

    let (tokens, output) = lex_with("foo *args", &());
    assert_eq!(tokens[1].0, T::UStar);
    assert!(output.warnings.contains(DiagnosticId::AmbiguousPrefixStar));
}

#[test]
fn operators() {
    assert_eq!(
        significant("a <=> b == c === d =~ e != f"),
        vec![
            T::Identifier,
            T::LessEqualGreater,
            T::Identifier,
            T::EqualEqual,
            T::Identifier,
            T::EqualEqualEqual,
            T::Identifier,
            T::EqualTilde,
            T::Identifier,
            T::BangEqual,
            T::Identifier,
        ]
    );
    assert_eq!(
        significant("a ||= b &&= c **= 2"),
        vec![
            T::Identifier,
            T::PipePipeEqual,
            T::Identifier,
            T::AmpersandAmpersandEqual,
            T::Identifier,
            T::StarStarEqual,
            T::Integer,
        ]
    );
}

#[test]
fn ranges() {
    assert_eq!(significant("1..2"), vec![T::Integer, T::DotDot, T::Integer]);
    assert_eq!(significant("..2"), vec![T::UDotDot, T::Integer]);
    assert_eq!(significant("1...2"), vec![T::Integer, T::DotDotDot, T::Integer]);
}

#[test]
fn brackets() {
    assert_eq!(
        significant("[1][0]"),
        vec![
            T::BracketLeftArray,
            T::Integer,
            T::BracketRight,
            T::BracketLeft,
            T::Integer,
            T::BracketRight,
        ]
    );
    assert_eq!(
        significant("foo [1]"),
        vec![T::Identifier, T::BracketLeftArray, T::Integer, T::BracketRight]
    );
    assert_eq!(
        significant("def []=(k, v)")[..2].to_vec(),
        vec![T::KeywordDef, T::BracketLeftRightEqual]
    );
}

#[test]
fn spaced_parenthesis_in_command() {
    assert_eq!(
        significant("foo (1)"),
        vec![
            T::Identifier,
            T::ParenthesisLeftParentheses,
            T::Integer,
            T::ParenthesisRight
        ]
    );
    assert_eq!(
        significant("foo(1)"),
        vec![T::Identifier, T::ParenthesisLeft, T::Integer, T::ParenthesisRight]
    );
}

#[test]
fn numbers() {
    assert_eq!(
        lex("42 0x1F 0b101 0o17 017 1_000 3.14 1e10 2r 1.5ri 3i"),
        vec![
            (T::Integer, "42".into()),
            (T::Integer, "0x1F".into()),
            (T::Integer, "0b101".into()),
            (T::Integer, "0o17".into()),
            (T::Integer, "017".into()),
            (T::Integer, "1_000".into()),
            (T::Float, "3.14".into()),
            (T::Float, "1e10".into()),
            (T::RationalNumber, "2r".into()),
            (T::ImaginaryNumber, "1.5ri".into()),
            (T::ImaginaryNumber, "3i".into()),
        ]
    );
}

#[test]
fn number_method_call() {
    assert_eq!(
        significant("10.times"),
        vec![T::Integer, T::Dot, T::Identifier]
    );
}

#[test]
fn number_errors() {
    let (_, output) = lex_with("1__2", &());
    assert!(output.errors.contains(DiagnosticId::InvalidNumberUnderscore));

    let (_, output) = lex_with("1_", &());
    assert!(output.errors.contains(DiagnosticId::NumberLiteralUnderscore));

    let (_, output) = lex_with("0x", &());
    assert!(output.errors.contains(DiagnosticId::InvalidNumberHexadecimal));

    let (_, output) = lex_with("09", &());
    assert!(output.errors.contains(DiagnosticId::InvalidNumberOctal));

    let (_, output) = lex_with("1e+", &());
    assert!(output.errors.contains(DiagnosticId::InvalidFloatExponent));
}

#[test]
fn simple_strings() {
    assert_eq!(
        lex("'a' \"b\""),
        vec![
            (T::StringBegin, "'".into()),
            (T::StringContent, "a".into()),
            (T::StringEnd, "'".into()),
            (T::StringBegin, "\"".into()),
            (T::StringContent, "b".into()),
            (T::StringEnd, "\"".into()),
        ]
    );
}

#[test]
fn escaped_quote_stays_in_content() {
    assert_eq!(
        lex(r"'it\'s'"),
        vec![
            (T::StringBegin, "'".into()),
            (T::StringContent, r"it\'s".into()),
            (T::StringEnd, "'".into()),
        ]
    );
}

#[test]
fn interpolation() {
    assert_eq!(
        lex("\"a#{b}c\""),
        vec![
            (T::StringBegin, "\"".into()),
            (T::StringContent, "a".into()),
            (T::EmbExprBegin, "#{".into()),
            (T::Identifier, "b".into()),
            (T::EmbExprEnd, "}".into()),
            (T::StringContent, "c".into()),
            (T::StringEnd, "\"".into()),
        ]
    );
}

#[test]
fn hash_inside_interpolation_keeps_braces_balanced() {
    assert_eq!(
        significant("\"#{ {a: 1} }\""),
        vec![
            T::StringBegin,
            T::EmbExprBegin,
            T::BraceLeft,
            T::Label,
            T::Integer,
            T::BraceRight,
            T::EmbExprEnd,
            T::StringEnd,
        ]
    );
}

#[test]
fn embedded_variable() {
    assert_eq!(
        lex("\"#@a #$b\""),
        vec![
            (T::StringBegin, "\"".into()),
            (T::EmbVar, "#".into()),
            (T::InstanceVariable, "@a".into()),
            (T::StringContent, " ".into()),
            (T::EmbVar, "#".into()),
            (T::GlobalVariable, "$b".into()),
            (T::StringEnd, "\"".into()),
        ]
    );
}

#[test]
fn quoted_label() {
    assert_eq!(
        significant("{\"a\": 1}"),
        vec![
            T::BraceLeft,
            T::StringBegin,
            T::StringContent,
            T::LabelEnd,
            T::Integer,
            T::BraceRight,
        ]
    );
}

#[test]
fn symbols() {
    assert_eq!(
        lex(":foo"),
        vec![(T::SymbolBegin, ":".into()), (T::Identifier, "foo".into())]
    );
    assert_eq!(
        lex(":\"bar\""),
        vec![
            (T::SymbolBegin, ":\"".into()),
            (T::StringContent, "bar".into()),
            (T::StringEnd, "\"".into()),
        ]
    );
    assert_eq!(
        significant(":+ :[]="),
        vec![T::SymbolBegin, T::Plus, T::SymbolBegin, T::BracketLeftRightEqual]
    );
}

#[test]
fn ternary_versus_character_literal() {
    assert_eq!(
        significant("a ? b : c"),
        vec![
            T::Identifier,
            T::QuestionMark,
            T::Identifier,
            T::Colon,
            T::Identifier
        ]
    );
    assert_eq!(lex("?a"), vec![(T::CharacterLiteral, "?a".into())]);
    assert_eq!(lex(r"?\n"), vec![(T::CharacterLiteral, r"?\n".into())]);
}

#[test]
fn percent_lists() {
    assert_eq!(
        lex("%w[a b]"),
        vec![
            (T::PercentLowerW, "%w[".into()),
            (T::StringContent, "a".into()),
            (T::WordsSep, " ".into()),
            (T::StringContent, "b".into()),
            (T::StringEnd, "]".into()),
        ]
    );
    assert_eq!(
        kinds("%i(a)"),
        vec![T::PercentLowerI, T::StringContent, T::StringEnd]
    );
}

#[test]
fn percent_string_nests_delimiters() {
    assert_eq!(
        lex("%q(a(b)c)"),
        vec![
            (T::StringBegin, "%q(".into()),
            (T::StringContent, "a(b)c".into()),
            (T::StringEnd, ")".into()),
        ]
    );
}

#[test]
fn percent_operator_after_value() {
    assert_eq!(significant("a % b"), vec![T::Identifier, T::Percent, T::Identifier]);
    assert_eq!(significant("a %= b"), vec![T::Identifier, T::PercentEqual, T::Identifier]);
}

#[test]
fn invalid_percent_literal() {
    let (_, output) = lex_with("%z(a)", &());
    assert!(output.errors.contains(DiagnosticId::InvalidPercent));
}

#[test]
fn regexp_with_options() {
    assert_eq!(
        lex("/a+/im"),
        vec![
            (T::RegexpBegin, "/".into()),
            (T::StringContent, "a+".into()),
            (T::RegexpEnd, "/im".into()),
        ]
    );
}

#[test]
fn division_is_not_regexp() {
    let locals = Locals(&["a"]);
    let (tokens, _) = lex_with("a / 2", &locals);
    assert_eq!(tokens[1].0, T::Slash);
}

#[test]
fn unknown_regexp_option() {
    let (_, output) = lex_with("/a/q", &());
    let message = output.errors.iter().next().map(|d| d.message().to_owned());
    assert_eq!(message.as_deref(), Some("unknown regexp option: q"));
}

#[test]
fn heredoc() {
    let source = "foo(<<~EOS, 1)\n  hello\n  world\nEOS\nbar\n";
    let (tokens, output) = lex_with(source, &());
    assert_eq!(
        tokens,
        vec![
            (T::Identifier, "foo".into()),
            (T::ParenthesisLeft, "(".into()),
            (T::HeredocStart, "<<~EOS".into()),
            (T::StringContent, "  hello\n".into()),
            (T::StringContent, "  world\n".into()),
            (T::HeredocEnd, "EOS\n".into()),
            (T::Comma, ",".into()),
            (T::Integer, "1".into()),
            (T::ParenthesisRight, ")".into()),
            (T::Newline, "\n".into()),
            (T::Identifier, "bar".into()),
            (T::Newline, "\n".into()),
        ]
    );
    assert_eq!(output.newlines.offsets(), &[0, 15, 23, 31, 35, 39]);
    assert!(output.errors.is_empty());
}

#[test]
fn two_heredocs_on_one_line() {
    let source = "a(<<A, <<B)\n1\nA\n2\nB\nc";
    assert_eq!(
        lex(source),
        vec![
            (T::Identifier, "a".into()),
            (T::ParenthesisLeft, "(".into()),
            (T::HeredocStart, "<<A".into()),
            (T::StringContent, "1\n".into()),
            (T::HeredocEnd, "A\n".into()),
            (T::Comma, ",".into()),
            (T::HeredocStart, "<<B".into()),
            (T::StringContent, "2\n".into()),
            (T::HeredocEnd, "B\n".into()),
            (T::ParenthesisRight, ")".into()),
            (T::Newline, "\n".into()),
            (T::Identifier, "c".into()),
        ]
    );
}

#[test]
fn unterminated_heredoc() {
    let (_, output) = lex_with("<<EOS\nabc\n", &());
    assert!(output.errors.contains(DiagnosticId::HeredocTerm));
}

#[test]
fn shift_is_not_heredoc() {
    let locals = Locals(&["a"]);
    let (tokens, _) = lex_with("a <<b", &locals);
    assert_eq!(tokens[1].0, T::LessLess);
}

#[test]
fn comments_are_recorded() {
    let (tokens, output) = lex_with("# hi\nx # there\n", &());
    assert_eq!(tokens[0], (T::Comment, "# hi".into()));
    assert_eq!(output.comments.len(), 2);
}

#[test]
fn embedded_document() {
    let source = "=begin\ndoc\n=end\nx\n";
    let (tokens, output) = lex_with(source, &());
    assert_eq!(
        tokens.iter().map(|(kind, _)| *kind).collect::<Vec<_>>(),
        vec![
            T::EmbDocBegin,
            T::EmbDocLine,
            T::EmbDocEnd,
            T::Identifier,
            T::Newline
        ]
    );
    assert_eq!(output.comments.len(), 1);
    assert_eq!(output.comments[0].kind, prism_ir::CommentKind::EmbDoc);
}

#[test]
fn unterminated_embedded_document() {
    let (_, output) = lex_with("=begin\nno end", &());
    assert!(output.errors.contains(DiagnosticId::EmbdocTerm));
}

#[test]
fn data_after_end_marker() {
    let source = "p 1\n__END__\nraw data\n";
    let (tokens, output) = lex_with(source, &());
    assert_eq!(tokens.last().map(|(kind, _)| *kind), Some(T::DataEnd));
    assert_eq!(output.data_loc, Some(Span::new(4, 21)));
}

#[test]
fn magic_comments() {
    let (_, output) = lex_with("# frozen_string_literal: true\nx", &());
    assert_eq!(output.frozen_string_literal, Some(true));
    assert_eq!(output.magic_comments.len(), 1);

    let (_, output) = lex_with("x\n# frozen_string_literal: true\n", &());
    assert_eq!(output.frozen_string_literal, None);

    let (_, output) = lex_with("# frozen_string_literal: maybe\n", &());
    assert!(output
        .warnings
        .contains(DiagnosticId::InvalidMagicCommentValue));
}

#[test]
fn encoding_magic_comment() {
    let (_, output) = lex_with("# encoding: ascii-8bit\n", &());
    assert_eq!(output.encoding.name(), "ASCII-8BIT");
    assert!(output.encoding_changed);

    let (_, output) = lex_with("#!/usr/bin/env ruby\n# -*- coding: us-ascii -*-\n", &());
    assert_eq!(output.encoding.name(), "US-ASCII");

    let (_, output) = lex_with("\n\n# encoding: ascii-8bit\n", &());
    assert!(!output.encoding_changed);
    assert!(output
        .warnings
        .contains(DiagnosticId::EncodingMagicCommentIgnored));

    let (_, output) = lex_with("# encoding: klingon\n", &());
    assert!(output
        .errors
        .contains(DiagnosticId::InvalidEncodingMagicComment));
}

#[test]
fn locked_encoding_ignores_magic_comment() {
    let buffer = SourceBuffer::new(b"# encoding: ascii-8bit\n");
    let mut lexer = Lexer::new(
        &buffer,
        LexerConfig {
            encoding: Encoding::UTF_8,
            encoding_locked: true,
        },
    );
    while lexer.next_token(&()).kind != T::Eof {}
    let output = lexer.finish();
    assert!(!output.encoding_changed);
    assert!(output.encoding.is_utf8());
}

#[test]
fn variables() {
    assert_eq!(
        lex("@a @@b $c $1 $& $-w"),
        vec![
            (T::InstanceVariable, "@a".into()),
            (T::ClassVariable, "@@b".into()),
            (T::GlobalVariable, "$c".into()),
            (T::NthReference, "$1".into()),
            (T::BackReference, "$&".into()),
            (T::GlobalVariable, "$-w".into()),
        ]
    );
}

#[test]
fn incomplete_variables() {
    let (_, output) = lex_with("@", &());
    assert!(output
        .errors
        .contains(DiagnosticId::IncompleteVariableInstance));
    let (_, output) = lex_with("@@1", &());
    assert!(output.errors.contains(DiagnosticId::IncompleteVariableClass));
}

#[test]
fn invalid_character_is_skipped() {
    let (tokens, output) = lex_with("a \\ b", &());
    assert_eq!(
        tokens.iter().map(|(kind, _)| *kind).collect::<Vec<_>>(),
        vec![T::Identifier, T::Identifier]
    );
    let message = output.errors.iter().next().map(|d| d.message().to_owned());
    assert_eq!(message.as_deref(), Some("invalid character `\\`"));
}

#[test]
fn nul_ends_the_script() {
    assert_eq!(kinds("a\0b"), vec![T::Identifier]);
}

#[test]
fn lambda_braces() {
    let buffer = SourceBuffer::new(b"-> { 1 }");
    let mut lexer = Lexer::new(&buffer, LexerConfig::default());
    assert_eq!(lexer.next_token(&()).kind, T::MinusGreater);
    let previous = lexer.set_lambda_enclosure_nesting(lexer.enclosure_nesting());
    assert_eq!(previous, -1);
    assert_eq!(lexer.next_token(&()).kind, T::LambdaBegin);
}

#[test]
fn do_in_loop_predicate() {
    let buffer = SourceBuffer::new(b"while x do end");
    let mut lexer = Lexer::new(&buffer, LexerConfig::default());
    assert_eq!(lexer.next_token(&()).kind, T::KeywordWhile);
    lexer.push_do_loop(true);
    assert_eq!(lexer.next_token(&()).kind, T::Identifier);
    assert_eq!(lexer.next_token(&()).kind, T::KeywordDoLoop);
    lexer.pop_do_loop();
    assert_eq!(lexer.next_token(&()).kind, T::KeywordEnd);
}

#[test]
fn unterminated_string_stops_at_eof() {
    assert_eq!(kinds("\"abc"), vec![T::StringBegin, T::StringContent]);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn lexing_terminates_and_spans_stay_in_bounds(source in proptest::collection::vec(any::<u8>(), 0..200)) {
            let buffer = SourceBuffer::new(&source);
            let mut lexer = Lexer::new(&buffer, LexerConfig::default());
            let len = buffer.len();
            let mut eof = false;
            for _ in 0..(source.len() * 4 + 16) {
                let token = lexer.next_token(&());
                prop_assert!(token.span.start <= token.span.end);
                prop_assert!(token.span.end <= len);
                if token.kind == TokenKind::Eof {
                    eof = true;
                    break;
                }
            }
            prop_assert!(eof);
        }

        #[test]
        fn newline_offsets_are_sorted(source in "[a-z \n\"'#{}<~A-Z]{0,80}") {
            let (_, output) = lex_with(&source, &());
            let offsets = output.newlines.offsets();
            prop_assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }
}
