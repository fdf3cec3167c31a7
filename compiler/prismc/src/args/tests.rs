#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|&arg| arg.to_owned()).collect()
}

#[test]
fn files_and_inline_code_keep_their_order() {
    let invocation = parse_invocation(&args(&["a.rb", "-e", "1 + 2", "b.rb"])).unwrap();
    assert_eq!(
        invocation.inputs,
        [
            Input::File(PathBuf::from("a.rb")),
            Input::Inline("1 + 2".to_owned()),
            Input::File(PathBuf::from("b.rb")),
        ]
    );
    assert_eq!(invocation.color, ColorMode::Auto);
}

#[test]
fn flags_shape_the_options() {
    let invocation = parse_invocation(&args(&[
        "--line",
        "10",
        "--encoding=Shift_JIS",
        "--frozen-string-literal",
        "--no-warnings",
        "--color",
        "never",
        "x.rb",
    ]))
    .unwrap();
    let options = &invocation.options;
    assert_eq!(options.line, 10);
    assert_eq!(options.encoding.name(), "Shift_JIS");
    assert_eq!(options.frozen_string_literal, FrozenStringLiteral::Enabled);
    assert!(!options.verbose);
    assert_eq!(invocation.color, ColorMode::Never);
}

#[test]
fn bad_flags_are_errors() {
    let err = |list: &[&str]| parse_invocation(&args(list)).unwrap_err().to_string();
    assert_eq!(err(&[]), "no input: give a file path or -e <code>");
    assert_eq!(err(&["-e"]), "missing value for '-e'");
    assert_eq!(err(&["--line", "ten", "x.rb"]), "invalid line number 'ten'");
    assert_eq!(err(&["--encoding", "EBCDIC-X", "x.rb"]), "unknown encoding 'EBCDIC-X'");
    assert_eq!(
        err(&["--color=sometimes", "x.rb"]),
        "invalid color mode 'sometimes' (expected auto, always or never)"
    );
    assert_eq!(err(&["--verbose", "x.rb"]), "unknown option '--verbose'");
}

#[test]
fn inline_input_reads_its_code() {
    let input = Input::Inline("puts 1".to_owned());
    assert_eq!(input.display_name(), "-e");
    assert_eq!(input.read().unwrap(), b"puts 1");
}

#[test]
fn missing_file_is_not_found() {
    let input = Input::File(PathBuf::from("/nonexistent/prism/input.rb"));
    let err = input.read().unwrap_err();
    assert!(matches!(err, CliError::NotFound { .. }));
    assert_eq!(err.to_string(), "cannot find file '/nonexistent/prism/input.rb'");
}
