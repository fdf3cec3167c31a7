use super::*;
use pretty_assertions::assert_eq;

fn names(source: &str) -> Vec<String> {
    named_captures(source.as_bytes())
        .into_iter()
        .map(|range| source[range].to_owned())
        .collect()
}

#[test]
fn angle_and_quote_groups() {
    assert_eq!(names(r"(?<year>\d+)-(?'month'\d+)"), ["year", "month"]);
}

#[test]
fn skips_escapes_and_classes() {
    assert_eq!(names(r"\(?<no>x)[(?<nor>)](?<yes>.)"), ["yes"]);
}

#[test]
fn skips_lookbehind_and_comments() {
    assert_eq!(names(r"(?<=a)(?<!b)(?# (?<c>) )(?<d>e)"), ["d"]);
}

#[test]
fn unterminated_names_are_ignored() {
    assert!(names("(?<abc").is_empty());
    assert!(names("(?<>x)").is_empty());
}

#[test]
fn local_names() {
    assert!(is_local_name(b"year"));
    assert!(is_local_name(b"_x1"));
    assert!(!is_local_name(b"Year"));
    assert!(!is_local_name(b"1st"));
    assert!(!is_local_name(b"class"));
    assert!(!is_local_name(b""));
}
