use super::*;
use pretty_assertions::assert_eq;

#[test]
fn append_keeps_detection_order() {
    let mut list = DiagnosticList::new();
    list.append(Span::new(10, 11), DiagnosticId::DefTerm);
    list.append(Span::new(0, 1), DiagnosticId::DefParamsTermParen);
    assert_eq!(
        list.ids(),
        vec![DiagnosticId::DefTerm, DiagnosticId::DefParamsTermParen]
    );
    assert!(list.iter().all(|diagnostic| !diagnostic.is_owned()));
}

#[test]
fn append_format_owns_its_message() {
    let mut list = DiagnosticList::new();
    let result = list.append_format(
        Span::new(0, 2),
        DiagnosticId::DuplicatedHashKey,
        &[":a".into(), 3.into()],
    );
    assert_eq!(result, Ok(()));
    let diagnostic = &list.as_slice()[0];
    assert!(diagnostic.is_owned());
    assert_eq!(diagnostic.message(), "key :a is duplicated and overwritten on line 3");
    assert_ne!(diagnostic.message(), DiagnosticId::DuplicatedHashKey.message());
}

#[test]
fn failed_format_appends_nothing() {
    let mut list = DiagnosticList::new();
    let result = list.append_format(Span::new(0, 1), DiagnosticId::MixedEncoding, &[]);
    assert!(result.is_err());
    assert!(list.is_empty());
}

#[test]
fn many_static_then_clear() {
    let mut list = DiagnosticList::new();
    for offset in 0..1000 {
        list.append(Span::point(offset), DiagnosticId::InvalidToken);
    }
    assert_eq!(list.len(), 1000);
    list.clear();
    assert!(list.is_empty());
}

#[test]
fn sort_by_location() {
    let mut list = DiagnosticList::new();
    list.append(Span::new(8, 9), DiagnosticId::ArrayTerm);
    list.append(Span::new(2, 3), DiagnosticId::HashTerm);
    list.sort();
    assert_eq!(list.ids(), vec![DiagnosticId::HashTerm, DiagnosticId::ArrayTerm]);
}

#[test]
fn contains_by_id() {
    let mut list = DiagnosticList::new();
    list.append(Span::new(0, 1), DiagnosticId::AmbiguousSlash);
    list.append(Span::new(1, 2), DiagnosticId::ArrayTerm);
    assert!(list.contains(DiagnosticId::ArrayTerm));
    assert!(!list.contains(DiagnosticId::HashTerm));
}
