use super::*;

#[test]
fn magic_comment_slices_source() {
    let source = b"# frozen_string_literal: true\n";
    let magic = MagicComment {
        key: Span::new(2, 23),
        value: Span::new(25, 29),
    };
    assert_eq!(magic.key(source), b"frozen_string_literal");
    assert_eq!(magic.value(source), b"true");
}

#[test]
fn comment_debug_format() {
    let comment = Comment::new(CommentKind::EmbDoc, Span::new(0, 12));
    assert_eq!(format!("{comment:?}"), "EmbDoc @ 0..12");
}
