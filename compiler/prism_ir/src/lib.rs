//! Prism IR - data produced by one parse of a Ruby source file.
//!
//! - [`Span`] byte ranges into the original source
//! - [`NewlineList`] for offset to line/column resolution
//! - [`ConstantPool`] interning identifier bytes per parse
//! - [`Comment`] and [`MagicComment`] side records
//! - The [`Ast`] arena holding every [`Node`] of the tree
//!
//! # Design
//!
//! Nodes never own their children. A node refers to children by [`NodeId`]
//! and to child lists by [`NodeRange`], both indices into the [`Ast`] that
//! created them. Dropping the `Ast` frees the whole tree at once.

/// Compile-time assertion that a type has a specific size.
///
/// Used to keep the hot arena types from growing by accident.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod comment;
mod constant_pool;
mod newline;
mod span;

pub use ast::{
    Ast, ConstantRange, IntegerId, Node, NodeFlags, NodeId, NodeKind, NodeRange, StringId,
};
pub use comment::{Comment, CommentKind, MagicComment};
pub use constant_pool::{ConstantId, ConstantPool};
pub use newline::{LineColumn, NewlineList};
pub use span::Span;
