#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::parse_invocation;
use pretty_assertions::assert_eq;

fn invocation(list: &[&str]) -> Invocation {
    let mut args: Vec<String> = list.iter().map(|&arg| arg.to_owned()).collect();
    args.extend(["--color".to_owned(), "never".to_owned()]);
    parse_invocation(&args).unwrap()
}

#[test]
fn parse_dumps_the_tree() {
    let reports = parse_inputs(&invocation(&["-e", "x = 1"]), false).unwrap();
    assert_eq!(
        reports,
        [Report {
            stdout: "@ Program (0...5) locals=[x]\n\
                     \x20 @ Statements (0...5)\n\
                     \x20   @ LocalVariableWrite (0...5) name=x depth=0 flags=NEWLINE\n\
                     \x20     @ Integer (4...5) value=1 flags=STATIC_LITERAL|DECIMAL\n"
                .to_owned(),
            stderr: String::new(),
            failed: false,
        }]
    );
}

#[test]
fn parse_reports_data_section() {
    let reports = parse_inputs(&invocation(&["-e", "a\n__END__\nraw\n"]), false).unwrap();
    assert!(reports[0].stdout.contains("__END__ "));
}

#[test]
fn errors_are_rendered_with_location() {
    let reports = parse_inputs(&invocation(&["-e", "foo )"]), false).unwrap();
    let report = &reports[0];
    assert!(report.failed);
    assert!(report.stderr.starts_with("-e:1:5: error: "), "{}", report.stderr);
    assert!(report.stderr.contains("1 | foo )\n"));
}

#[test]
fn lex_lists_tokens_with_state() {
    let reports = lex_inputs(&invocation(&["-e", "foo = 1"]), false).unwrap();
    let lines: Vec<&str> = reports[0].stdout.lines().collect();
    assert!(lines[0].starts_with("IDENTIFIER"));
    assert!(lines[0].ends_with("\"foo\""));
    assert!(lines.iter().any(|line| line.starts_with("INTEGER")));
    assert!(lines.last().is_some_and(|line| line.starts_with("EOF")));
    assert!(!reports[0].failed);
}

#[test]
fn check_prints_syntax_ok_or_a_summary() {
    let reports = check_inputs(&invocation(&["-e", "puts 1", "-e", "def m("]), false).unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].stdout, "-e: Syntax OK\n");
    assert!(!reports[0].failed);

    assert!(reports[1].failed);
    assert_eq!(reports[1].stdout, "");
    assert!(reports[1].stderr.contains("syntax error"));
}

#[test]
fn warnings_do_not_fail_and_can_be_silenced() {
    let source = "{ a: 1, a: 2 }";
    let reports = check_inputs(&invocation(&["-e", source]), false).unwrap();
    assert!(!reports[0].failed);
    assert!(reports[0].stderr.contains("warning"));

    let reports = check_inputs(&invocation(&["--no-warnings", "-e", source]), false).unwrap();
    assert_eq!(reports[0].stderr, "");
}

#[test]
fn start_line_shifts_locations() {
    let reports = check_inputs(&invocation(&["--line", "40", "-e", "foo )"]), false).unwrap();
    assert!(reports[0].stderr.starts_with("-e:40:5: error: "), "{}", reports[0].stderr);
}

#[test]
fn unreadable_input_fails_the_command() {
    let err = check_inputs(&invocation(&["/nonexistent/prism/input.rb"]), false).unwrap_err();
    assert!(matches!(err, CliError::NotFound { .. }));
}
