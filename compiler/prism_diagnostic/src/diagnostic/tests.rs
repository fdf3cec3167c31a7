use super::*;

#[test]
fn static_message_is_borrowed() {
    let diagnostic = Diagnostic::new(Span::new(0, 3), DiagnosticId::DefTerm);
    assert!(!diagnostic.is_owned());
    assert_eq!(
        diagnostic.message(),
        "expected an `end` to close the `def` statement"
    );
    assert_eq!(diagnostic.severity(), Severity::Error);
}

#[test]
fn formatted_message_is_owned() {
    let diagnostic = Diagnostic::formatted(
        Span::new(0, 3),
        DiagnosticId::MixedEncoding,
        "UTF-8 mixed within Shift_JIS source".to_string(),
    );
    assert!(diagnostic.is_owned());
    assert_eq!(diagnostic.message(), "UTF-8 mixed within Shift_JIS source");
}

#[test]
fn display_includes_severity() {
    let diagnostic = Diagnostic::new(Span::new(0, 1), DiagnosticId::AmbiguousSlash);
    assert_eq!(
        diagnostic.to_string(),
        "warning: ambiguous `/`; wrap regexp in parentheses or add a space after `/` operator"
    );
}

#[test]
fn severity_orders_errors_first() {
    assert!(Severity::Error < Severity::Warning);
    assert_eq!(Severity::Warning.to_string(), "warning");
}
