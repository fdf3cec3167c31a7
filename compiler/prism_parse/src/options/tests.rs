use super::*;
use pretty_assertions::assert_eq;

#[test]
fn defaults() {
    let options = Options::new();
    assert_eq!(options.line, 1);
    assert_eq!(options.frozen_string_literal, FrozenStringLiteral::Unset);
    assert!(options.verbose);
    assert!(options.scopes.is_empty());
    assert!(options.on_encoding_changed.is_none());
}

#[test]
fn builder_chain() {
    let options = Options::new()
        .with_filepath("lib/foo.rb")
        .with_line(10)
        .with_frozen_string_literal(FrozenStringLiteral::Enabled)
        .with_verbose(false)
        .with_scope(Scope::new(["a", "b"]).with_forwarding(Forwarding::BLOCK));

    assert_eq!(options.filepath, "lib/foo.rb");
    assert_eq!(options.line, 10);
    assert!(!options.verbose);
    assert_eq!(options.scopes[0].locals, vec![b"a".to_vec(), b"b".to_vec()]);
    assert_eq!(options.scopes[0].forwarding, Forwarding::BLOCK);
}

#[test]
fn debug_hides_callback() {
    let options = Options::new().on_encoding_changed(|_| {});
    let shown = format!("{options:?}");
    assert!(shown.contains("on_encoding_changed: true"));
}
