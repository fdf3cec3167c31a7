//! Comment side records produced by the lexer.
//!
//! Comments never appear in the syntax tree; the driver returns them next to
//! it so tools like formatters and documentation extractors can reattach them.

use super::Span;
use std::fmt;

/// Where a comment came from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CommentKind {
    /// `# text` up to the end of the line.
    Inline,
    /// `=begin` ... `=end` embedded document.
    EmbDoc,
    /// Everything after a `__END__` line.
    DataEnd,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Comment {
    pub kind: CommentKind,
    /// Covers the full comment including its `#` or `=begin` marker.
    pub span: Span,
}

impl Comment {
    #[inline]
    pub fn new(kind: CommentKind, span: Span) -> Self {
        Comment { kind, span }
    }
}

impl fmt::Debug for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// A `# key: value` pragma such as `frozen_string_literal: true`.
///
/// Both parts are spans into the source; the value is not interpreted here.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct MagicComment {
    pub key: Span,
    pub value: Span,
}

impl MagicComment {
    #[inline]
    pub fn key<'a>(&self, source: &'a [u8]) -> &'a [u8] {
        self.key.slice(source)
    }

    #[inline]
    pub fn value<'a>(&self, source: &'a [u8]) -> &'a [u8] {
        self.value.slice(source)
    }
}

#[cfg(test)]
mod tests;
