use super::*;

#[test]
fn insert_deduplicates() {
    let mut pool = ConstantPool::new();
    let foo = pool.insert(b"foo");
    let bar = pool.insert(b"bar");
    assert_ne!(foo, bar);
    assert_eq!(pool.insert(b"foo"), foo);
    assert_eq!(pool.len(), 2);
}

#[test]
fn get_and_find() {
    let mut pool = ConstantPool::with_capacity(4);
    let id = pool.insert(b"@ivar");
    assert_eq!(pool.get(id), b"@ivar");
    assert_eq!(pool.find(b"@ivar"), Some(id));
    assert_eq!(pool.find(b"missing"), None);
}

#[test]
fn non_utf8_names_are_kept_verbatim() {
    let mut pool = ConstantPool::new();
    let id = pool.insert(&[0x82, 0xA0]);
    assert_eq!(pool.get(id), &[0x82, 0xA0]);
    assert_eq!(pool.display(id), "\u{FFFD}\u{FFFD}");
}

#[test]
fn foreign_id_is_empty() {
    let mut other = ConstantPool::new();
    other.insert(b"a");
    let id = other.insert(b"b");
    let pool = ConstantPool::new();
    assert!(pool.get(id).is_empty());
    assert!(pool.is_empty());
}
