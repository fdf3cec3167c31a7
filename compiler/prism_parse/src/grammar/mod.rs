//! Grammar productions.
//!
//! Each module extends `Parser` with one family of productions:
//!
//! - [`expr`]: precedence climbing, primaries, calls and assignment
//! - [`arguments`]: call arguments, blocks and lambdas
//! - [`strings`]: strings, symbols, regexps, heredocs and `%` lists
//! - [`control`]: conditionals, loops, `case` and `begin`/`rescue`
//! - [`definitions`]: `def`, parameters, `class`, `module`, `alias`, `undef`
//! - [`patterns`]: `case`/`in`, `=>` and `in` pattern matching
//!
//! Every production returns a node. When input is missing or malformed a
//! diagnostic is recorded and a `Missing` placeholder stands in.

mod arguments;
mod control;
mod definitions;
mod expr;
mod patterns;
mod strings;

pub(crate) use expr::bp;

use crate::context::{self, ParseContext, Terminators};
use crate::recovery::{CLOSERS, STATEMENT_START};
use crate::Parser;
use prism_diagnostic::{DiagnosticId, FormatArg};
use prism_ir::{NodeFlags, NodeId, NodeKind, NodeRange, Span};
use prism_lexer::TokenKind;
use smallvec::SmallVec;

impl Parser<'_> {
    /// Parse the whole source. The first token has not been lexed yet.
    pub(crate) fn parse_program(&mut self) -> NodeId {
        self.advance();
        let statements = match self.parse_statements(context::PROGRAM) {
            Some(statements) => statements,
            None => self.empty_statements(Span::point(self.current.span.start.min(self.previous.span.end))),
        };
        let frame = self.scopes.pop();
        let locals = self.ast.alloc_locals(frame.locals());
        let span = self.span(statements);
        self.node(NodeKind::Program { locals, statements }, span)
    }

    /// Parse statements until a token of `terminators` (left unconsumed).
    ///
    /// A closing token that belongs to an enclosing construct ends the
    /// list early with an error; any other stray token is skipped.
    pub(crate) fn parse_statements(&mut self, terminators: Terminators) -> Option<NodeId> {
        self.closers.push(terminators);
        let body = self.with_context(ParseContext::empty(), ParseContext::NO_DO_BLOCK, |p| {
            p.parse_statement_list(terminators)
        });
        self.closers.pop();

        let (&first, &last) = (body.first()?, body.last()?);
        let span = self.span(first).merge(self.span(last));
        let body = self.ast.alloc_list(&body);
        Some(self.node(NodeKind::Statements { body }, span))
    }

    fn parse_statement_list(&mut self, terminators: Terminators) -> SmallVec<[NodeId; 8]> {
        let mut body = SmallVec::new();
        let mut last_line = None;
        loop {
            self.skip_terminators();
            let kind = self.current.kind;
            if kind == TokenKind::Eof || terminators.set.contains(kind) {
                break;
            }
            if CLOSERS.contains(kind) || !STATEMENT_START.contains(kind) {
                if self.recover_stray_token() {
                    break;
                }
                continue;
            }

            let start = self.current.span;
            let statement = self.parse_statement();
            let line = self.line_of(self.span(statement).start);
            if last_line != Some(line) {
                self.ast.add_flags(statement, NodeFlags::NEWLINE);
                last_line = Some(line);
            }
            body.push(statement);

            let kind = self.current.kind;
            if matches!(kind, TokenKind::Newline | TokenKind::Semicolon | TokenKind::Eof)
                || terminators.set.contains(kind)
            {
                continue;
            }
            if self.current.span == start {
                self.error_unexpected(DiagnosticId::UnexpectedTokenIgnore);
                self.advance();
            } else if !CLOSERS.contains(kind) {
                self.error(Span::point(self.previous.span.end), DiagnosticId::ExpectEolAfterStatement);
            }
        }
        body
    }

    /// Handle a token that cannot start a statement. Returns `true` when it
    /// closes an enclosing construct and the current list should end.
    fn recover_stray_token(&mut self) -> bool {
        let kind = self.current.kind;
        if CLOSERS.contains(kind) {
            let parent = self
                .closers
                .iter()
                .rev()
                .skip(1)
                .find(|closer| closer.set.contains(kind))
                .copied();
            if let Some(parent) = parent {
                tracing::debug!(token = kind.name(), parent = parent.name, "closing parent construct");
                self.error_format(
                    self.current.span,
                    DiagnosticId::UnexpectedTokenCloseContext,
                    &[FormatArg::from(kind.display_name()), FormatArg::from(parent.name)],
                );
                return true;
            }
        }
        self.error_unexpected(DiagnosticId::UnexpectedTokenIgnore);
        self.advance();
        false
    }

    pub(crate) fn parse_statement(&mut self) -> NodeId {
        self.parse_expression(bp::STATEMENT, true, DiagnosticId::CannotParseExpression)
    }

    /// The statement list was opened at the top level of the program.
    pub(crate) fn at_top_level(&self) -> bool {
        self.closers.len() <= 1
    }

    /// Wrap a single node in a `Statements` node.
    pub(crate) fn single_statement(&mut self, node: NodeId) -> NodeId {
        let span = self.span(node);
        let body = self.ast.alloc_list(&[node]);
        self.node(NodeKind::Statements { body }, span)
    }

    pub(crate) fn empty_statements(&mut self, span: Span) -> NodeId {
        self.node(NodeKind::Statements { body: NodeRange::EMPTY }, span)
    }
}
