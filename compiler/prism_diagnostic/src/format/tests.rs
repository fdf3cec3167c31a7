use super::*;
use pretty_assertions::assert_eq;

#[test]
fn substitutes_integers() {
    let rendered = format_message("too few arguments (%d for %d)", &[1.into(), 2.into()]);
    assert_eq!(rendered, Ok("too few arguments (1 for 2)".to_string()));
}

#[test]
fn substitutes_strings() {
    let rendered = format_message("UTF-8 mixed within %s source", &["EUC-JP".into()]);
    assert_eq!(rendered, Ok("UTF-8 mixed within EUC-JP source".to_string()));
}

#[test]
fn precision_truncates() {
    let rendered = format_message("%.2s is reserved for numbered parameters", &["_1abc".into()]);
    assert_eq!(rendered, Ok("_1 is reserved for numbered parameters".to_string()));
}

#[test]
fn star_precision_takes_whole_slice() {
    let rendered = format_message("key %.*s is duplicated", &[":foo".into()]);
    assert_eq!(rendered, Ok("key :foo is duplicated".to_string()));
}

#[test]
fn literal_percent() {
    assert_eq!(format_message("100%% sure", &[]), Ok("100% sure".to_string()));
}

#[test]
fn missing_argument() {
    assert_eq!(
        format_message("%d for %d", &[1.into()]),
        Err(FormatError::MissingArgument { index: 1, given: 1 })
    );
}

#[test]
fn mismatched_argument() {
    assert_eq!(
        format_message("%d", &["one".into()]),
        Err(FormatError::TypeMismatch {
            index: 0,
            expected: "an integer"
        })
    );
    assert_eq!(
        format_message("%s", &[1.into()]),
        Err(FormatError::TypeMismatch {
            index: 0,
            expected: "a string"
        })
    );
}

#[test]
fn leftover_arguments() {
    assert_eq!(
        format_message("no conversions", &[1.into()]),
        Err(FormatError::UnusedArguments { unused: 1 })
    );
}

#[test]
fn unknown_conversion_and_truncation() {
    assert_eq!(
        format_message("a `%i` list", &[]),
        Err(FormatError::UnknownConversion { conversion: 'i' })
    );
    assert_eq!(format_message("trailing %", &[]), Err(FormatError::Truncated));
}

#[test]
fn conversion_detection() {
    assert!(has_conversions("key %s"));
    assert!(has_conversions("%.2s is reserved"));
    assert!(!has_conversions("expected a symbol in a `%i` list"));
    assert!(!has_conversions("invalid `%` token"));
}

#[test]
fn multibyte_arguments_are_kept_whole() {
    let rendered = format_message("%.1s!", &["ßx".into()]);
    assert_eq!(rendered, Ok("ß!".to_string()));
}
