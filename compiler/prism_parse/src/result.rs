//! What a parse or a lex hands back.

use prism_diagnostic::DiagnosticList;
use prism_ir::{Ast, Comment, ConstantPool, LineColumn, MagicComment, NewlineList, NodeId, Span};
use prism_lexer::{LexState, Token};
use prism_lexer_core::Encoding;

/// The tree and everything collected alongside it.
///
/// Owns all of its data; dropping it frees the whole tree.
#[derive(Debug)]
pub struct ParseResult {
    pub ast: Ast,
    /// The `Program` node.
    pub root: NodeId,
    pub constants: ConstantPool,
    pub comments: Vec<Comment>,
    pub magic_comments: Vec<MagicComment>,
    /// Sorted by position.
    pub errors: DiagnosticList,
    /// Sorted by position. Empty unless the parse was verbose.
    pub warnings: DiagnosticList,
    pub newlines: NewlineList,
    /// Encoding in effect at the end of the source.
    pub encoding: Encoding,
    /// Span of the data after `__END__`.
    pub data_loc: Option<Span>,
    /// `frozen_string_literal` magic comment value.
    pub frozen_string_literal: Option<bool>,
    /// Line number of the first source line.
    pub start_line: i32,
}

impl ParseResult {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn line_column(&self, offset: u32) -> LineColumn {
        self.newlines.line_column(offset, self.start_line)
    }

    /// Indented tree dump for debugging and snapshot tests.
    pub fn dump(&self) -> String {
        self.ast.dump(self.root, &self.constants)
    }
}

/// A token and the lexer state right after it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LexedToken {
    pub token: Token,
    pub state: LexState,
}

/// Every token of a source, trivia included, as the parser saw them.
#[derive(Debug)]
pub struct LexResult {
    pub tokens: Vec<LexedToken>,
    pub comments: Vec<Comment>,
    pub magic_comments: Vec<MagicComment>,
    pub errors: DiagnosticList,
    pub warnings: DiagnosticList,
    pub newlines: NewlineList,
    pub encoding: Encoding,
    pub data_loc: Option<Span>,
}
