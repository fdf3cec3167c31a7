//! Flat syntax tree arena.
//!
//! Every node of one parse lives in a single [`Ast`]. Children are usually
//! allocated before their parents; recovery may patch a node in place with
//! [`Ast::set_kind`]. Side pools hold data that does not fit a `Copy` node:
//! child lists, local tables, unescaped strings and big integers.

mod dump;
mod flags;
mod kind;
mod walk;

pub use flags::NodeFlags;
pub use kind::NodeKind;
pub use walk::Children;

use crate::{ConstantId, Span};
use num_bigint::BigInt;
use std::fmt;

/// Index of a node in its [`Ast`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Slice of the arena's shared child list pool.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct NodeRange {
    pub start: u32,
    pub len: u32,
}

impl NodeRange {
    pub const EMPTY: NodeRange = NodeRange { start: 0, len: 0 };

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Debug for NodeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeRange({}..{})", self.start, self.start + self.len)
    }
}

/// Slice of the arena's local-variable name pool.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Debug)]
pub struct ConstantRange {
    pub start: u32,
    pub len: u32,
}

impl ConstantRange {
    pub const EMPTY: ConstantRange = ConstantRange { start: 0, len: 0 };

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Index of an unescaped byte string.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct StringId(u32);

/// Index of an arbitrary precision integer value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct IntegerId(u32);

/// One syntax tree node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
    pub flags: NodeFlags,
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{NodeId, NodeRange};
    crate::static_assert_size!(NodeId, 4);
    crate::static_assert_size!(NodeRange, 8);
}

/// Arena owning every node of one parse.
#[derive(Clone, Debug, Default)]
pub struct Ast {
    nodes: Vec<Node>,
    lists: Vec<NodeId>,
    locals: Vec<ConstantId>,
    strings: Vec<Box<[u8]>>,
    integers: Vec<BigInt>,
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "arena sizes are bounded by the u32 source length"
)]
#[inline]
fn to_u32(len: usize) -> u32 {
    len as u32
}

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size for a source of `source_len` bytes.
    pub fn with_capacity(source_len: usize) -> Self {
        let estimate = source_len / 4;
        Ast {
            nodes: Vec::with_capacity(estimate),
            lists: Vec::with_capacity(estimate / 2),
            locals: Vec::new(),
            strings: Vec::new(),
            integers: Vec::new(),
        }
    }

    #[inline]
    pub fn alloc(&mut self, kind: NodeKind, span: Span) -> NodeId {
        self.alloc_with_flags(kind, span, NodeFlags::empty())
    }

    pub fn alloc_with_flags(&mut self, kind: NodeKind, span: Span, flags: NodeFlags) -> NodeId {
        let id = NodeId(to_u32(self.nodes.len()));
        self.nodes.push(Node { kind, span, flags });
        id
    }

    /// Copy `ids` into the list pool.
    pub fn alloc_list(&mut self, ids: &[NodeId]) -> NodeRange {
        if ids.is_empty() {
            return NodeRange::EMPTY;
        }
        let start = to_u32(self.lists.len());
        self.lists.extend_from_slice(ids);
        NodeRange {
            start,
            len: to_u32(ids.len()),
        }
    }

    /// Copy a local table into the locals pool.
    pub fn alloc_locals(&mut self, names: &[ConstantId]) -> ConstantRange {
        if names.is_empty() {
            return ConstantRange::EMPTY;
        }
        let start = to_u32(self.locals.len());
        self.locals.extend_from_slice(names);
        ConstantRange {
            start,
            len: to_u32(names.len()),
        }
    }

    pub fn alloc_string(&mut self, bytes: impl Into<Box<[u8]>>) -> StringId {
        let id = StringId(to_u32(self.strings.len()));
        self.strings.push(bytes.into());
        id
    }

    pub fn alloc_integer(&mut self, value: BigInt) -> IntegerId {
        let id = IntegerId(to_u32(self.integers.len()));
        self.integers.push(value);
        id
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    #[inline]
    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.nodes[id.index()].kind
    }

    #[inline]
    pub fn span(&self, id: NodeId) -> Span {
        self.nodes[id.index()].span
    }

    #[inline]
    pub fn flags(&self, id: NodeId) -> NodeFlags {
        self.nodes[id.index()].flags
    }

    #[inline]
    pub fn add_flags(&mut self, id: NodeId, flags: NodeFlags) {
        self.nodes[id.index()].flags |= flags;
    }

    #[inline]
    pub fn remove_flags(&mut self, id: NodeId, flags: NodeFlags) {
        self.nodes[id.index()].flags.remove(flags);
    }

    #[inline]
    pub fn set_kind(&mut self, id: NodeId, kind: NodeKind) {
        self.nodes[id.index()].kind = kind;
    }

    #[inline]
    pub fn set_span(&mut self, id: NodeId, span: Span) {
        self.nodes[id.index()].span = span;
    }

    pub fn list(&self, range: NodeRange) -> &[NodeId] {
        let start = range.start as usize;
        &self.lists[start..start + range.len()]
    }

    pub fn locals(&self, range: ConstantRange) -> &[ConstantId] {
        let start = range.start as usize;
        &self.locals[start..start + range.len()]
    }

    pub fn string(&self, id: StringId) -> &[u8] {
        &self.strings[id.0 as usize]
    }

    pub fn integer(&self, id: IntegerId) -> &BigInt {
        &self.integers[id.0 as usize]
    }

    /// Number of nodes allocated.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every node in allocation order, children before parents.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(to_u32(index)), node))
    }
}

#[cfg(test)]
mod tests;
