use super::*;
use pretty_assertions::assert_eq;

fn pool_with(names: &[&str]) -> (ConstantPool, Vec<ConstantId>) {
    let mut pool = ConstantPool::new();
    let ids = names.iter().map(|name| pool.insert(name.as_bytes())).collect();
    (pool, ids)
}

#[test]
fn depth_counts_blocks() {
    let (_, ids) = pool_with(&["a", "b"]);
    let mut scopes = Scopes::new();
    scopes.push(ScopeKind::Top);
    scopes.add_local(ids[0]);
    scopes.push(ScopeKind::Block);
    scopes.push(ScopeKind::Lambda);
    scopes.add_local(ids[1]);

    assert_eq!(scopes.find(ids[0]), Some(2));
    assert_eq!(scopes.find(ids[1]), Some(0));
}

#[test]
fn def_closes_scope() {
    let (_, ids) = pool_with(&["a"]);
    let mut scopes = Scopes::new();
    scopes.push(ScopeKind::Top);
    scopes.add_local(ids[0]);
    scopes.push(ScopeKind::Def);
    assert_eq!(scopes.find(ids[0]), None);

    scopes.pop();
    assert_eq!(scopes.find(ids[0]), Some(0));
}

#[test]
fn eval_scopes_are_visible() {
    let (_, ids) = pool_with(&["outer"]);
    let mut scopes = Scopes::new();
    scopes.push(ScopeKind::Eval);
    scopes.add_local(ids[0]);
    scopes.push(ScopeKind::Top);
    assert_eq!(scopes.find(ids[0]), Some(1));
}

#[test]
fn add_local_reports_duplicates() {
    let (_, ids) = pool_with(&["a"]);
    let mut scopes = Scopes::new();
    scopes.push(ScopeKind::Top);
    assert!(scopes.add_local(ids[0]));
    assert!(!scopes.add_local(ids[0]));
    assert_eq!(scopes.pop().locals(), &[ids[0]]);
}

#[test]
fn numbered_parameters() {
    let mut scopes = Scopes::new();
    scopes.push(ScopeKind::Top);
    assert_eq!(scopes.use_numbered(1), Err(NumberedError::NotInBlock));

    scopes.push(ScopeKind::Block);
    assert_eq!(scopes.use_numbered(2), Ok(()));
    assert_eq!(scopes.use_numbered(1), Ok(()));

    scopes.push(ScopeKind::Block);
    assert_eq!(scopes.use_numbered(1), Err(NumberedError::OuterScope));
    scopes.pop();

    let frame = scopes.pop();
    assert_eq!(frame.numbered_maximum(), 2);

    scopes.push(ScopeKind::Block);
    scopes.mark_parameters();
    assert_eq!(scopes.use_numbered(1), Err(NumberedError::NotAllowed));
}

#[test]
fn forwarding_skips_blocks() {
    let mut scopes = Scopes::new();
    scopes.push(ScopeKind::Def);
    scopes.add_forwarding(Forwarding::ALL);
    scopes.push(ScopeKind::Block);
    assert_eq!(scopes.forwarding(), Forwarding::ALL);
}

#[test]
fn lexer_view() {
    let (pool, ids) = pool_with(&["x"]);
    let mut scopes = Scopes::new();
    scopes.push(ScopeKind::Top);
    scopes.add_local(ids[0]);
    let locals = Locals {
        scopes: &scopes,
        constants: &pool,
    };
    assert!(locals.is_local(b"x"));
    assert!(!locals.is_local(b"y"));
}
