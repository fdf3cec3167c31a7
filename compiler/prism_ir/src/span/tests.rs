use super::*;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert!(span.contains(10));
    assert!(span.contains(19));
    assert!(!span.contains(20));
}

#[test]
fn test_span_merge_is_order_independent() {
    let a = Span::new(20, 30);
    let b = Span::new(10, 25);
    assert_eq!(a.merge(b), Span::new(10, 30));
    assert_eq!(b.merge(a), Span::new(10, 30));
}

#[test]
fn test_span_point() {
    let point = Span::point(42);
    assert!(point.is_empty());
    assert_eq!(point.len(), 0);
    assert!(!point.contains(42));
}

#[test]
fn test_span_slice() {
    let source = b"x = 1\n";
    assert_eq!(Span::new(0, 1).slice(source), b"x");
    assert_eq!(Span::new(4, 5).slice(source), b"1");
    assert_eq!(Span::new(4, 99).slice(source), b"");
}

#[test]
fn test_span_formatting() {
    let span = Span::new(100, 200);
    assert_eq!(format!("{span:?}"), "100..200");
    assert_eq!(format!("{span}"), "(100...200)");
    assert_eq!(Span::default(), Span::DUMMY);
}
