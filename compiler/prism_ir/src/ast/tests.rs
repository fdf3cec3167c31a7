use super::*;
use crate::ConstantPool;
use num_bigint::BigInt;
use pretty_assertions::assert_eq;

/// Builds `x = 1` by hand.
fn assignment(ast: &mut Ast, pool: &mut ConstantPool) -> NodeId {
    let value_id = ast.alloc_integer(BigInt::from(1));
    let one = ast.alloc_with_flags(
        NodeKind::Integer { value: value_id },
        Span::new(4, 5),
        NodeFlags::DECIMAL | NodeFlags::STATIC_LITERAL,
    );
    let x = pool.insert(b"x");
    let write = ast.alloc(
        NodeKind::LocalVariableWrite {
            name: x,
            depth: 0,
            value: one,
        },
        Span::new(0, 5),
    );
    let body = ast.alloc_list(&[write]);
    let statements = ast.alloc(NodeKind::Statements { body }, Span::new(0, 5));
    let locals = ast.alloc_locals(&[x]);
    ast.alloc(NodeKind::Program { locals, statements }, Span::new(0, 6))
}

#[test]
fn alloc_and_read_back() {
    let mut ast = Ast::new();
    let mut pool = ConstantPool::new();
    let root = assignment(&mut ast, &mut pool);

    assert_eq!(ast.len(), 4);
    assert_eq!(ast.kind(root).name(), "Program");
    let NodeKind::Program { statements, locals } = ast.kind(root) else {
        panic!("expected program");
    };
    assert_eq!(ast.locals(locals), &[pool.insert(b"x")]);
    let NodeKind::Statements { body } = ast.kind(statements) else {
        panic!("expected statements");
    };
    assert_eq!(ast.list(body).len(), 1);
}

#[test]
fn empty_lists_share_the_empty_range() {
    let mut ast = Ast::new();
    assert_eq!(ast.alloc_list(&[]), NodeRange::EMPTY);
    assert_eq!(ast.alloc_locals(&[]), ConstantRange::EMPTY);
    assert!(ast.list(NodeRange::EMPTY).is_empty());
}

#[test]
fn children_in_source_order() {
    let mut ast = Ast::new();
    let left = ast.alloc(NodeKind::True, Span::new(0, 4));
    let right = ast.alloc(NodeKind::False, Span::new(8, 13));
    let and = ast.alloc(NodeKind::And { left, right }, Span::new(0, 13));
    assert_eq!(ast.children(and).as_slice(), &[left, right]);
    assert!(ast.children(left).is_empty());
}

#[test]
fn find_walks_pre_order() {
    let mut ast = Ast::new();
    let mut pool = ConstantPool::new();
    let root = assignment(&mut ast, &mut pool);
    let found = ast.find(root, |kind| matches!(kind, NodeKind::Integer { .. }));
    let Some(found) = found else {
        panic!("integer not found");
    };
    assert_eq!(ast.span(found), Span::new(4, 5));
    assert_eq!(ast.find(root, |kind| matches!(kind, NodeKind::Nil)), None);
}

#[test]
fn dump_renders_tree() {
    let mut ast = Ast::new();
    let mut pool = ConstantPool::new();
    let root = assignment(&mut ast, &mut pool);
    assert_eq!(
        ast.dump(root, &pool),
        "\
@ Program (0...6) locals=[x]
  @ Statements (0...5)
    @ LocalVariableWrite (0...5) name=x depth=0
      @ Integer (4...5) value=1 flags=STATIC_LITERAL|DECIMAL
"
    );
}

#[test]
fn flags_mutation() {
    let mut ast = Ast::new();
    let id = ast.alloc(NodeKind::Nil, Span::new(0, 3));
    ast.add_flags(id, NodeFlags::STATIC_LITERAL | NodeFlags::NEWLINE);
    ast.remove_flags(id, NodeFlags::NEWLINE);
    assert_eq!(ast.flags(id), NodeFlags::STATIC_LITERAL);
}

#[test]
fn regexp_option_lookup() {
    assert_eq!(NodeFlags::regexp_option(b'i'), Some(NodeFlags::IGNORE_CASE));
    assert_eq!(NodeFlags::regexp_option(b'n'), Some(NodeFlags::ASCII_8BIT));
    assert_eq!(NodeFlags::regexp_option(b'z'), None);
}
