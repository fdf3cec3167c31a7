//! Token navigation and the helpers every grammar module shares.
//!
//! The parser looks one token ahead. Lexing is lazy because the lexer
//! needs the parser's feedback (declared locals, lambda and loop nesting)
//! before it can read the next token correctly.

use crate::context::ParseContext;
use crate::recovery::TokenSet;
use crate::result::LexedToken;
use crate::scope::Locals;
use crate::static_literals::LiteralContext;
use crate::Parser;
use prism_diagnostic::{DiagnosticId, FormatArg};
use prism_ir::{ConstantId, NodeFlags, NodeId, NodeKind, Span};
use prism_lexer::{Token, TokenKind};

impl<'src> Parser<'src> {
    // ─── Tokens ───

    /// Move to the next significant token. Trivia is recorded, not returned.
    pub(crate) fn advance(&mut self) {
        self.previous = self.current;
        if self.current.kind == TokenKind::Eof {
            return;
        }
        loop {
            let locals = Locals {
                scopes: &self.scopes,
                constants: &self.constants,
            };
            let token = self.lexer.next_token(&locals);
            if let Some(recorded) = &mut self.recorded {
                recorded.push(LexedToken {
                    token,
                    state: self.lexer.state(),
                });
            }
            if !token.kind.is_trivia() {
                self.current = token;
                return;
            }
        }
    }

    #[inline]
    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    #[inline]
    pub(crate) fn at_any(&self, set: TokenSet) -> bool {
        set.contains(self.current.kind)
    }

    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume `kind` or report `id` just after the previous token.
    pub(crate) fn expect(&mut self, kind: TokenKind, id: DiagnosticId) -> bool {
        if self.eat(kind) {
            return true;
        }
        self.error(Span::point(self.previous.span.end), id);
        false
    }

    /// Skip significant newlines, as inside brackets.
    pub(crate) fn skip_newlines(&mut self) {
        while self.at(TokenKind::Newline) {
            self.advance();
        }
    }

    /// Skip newlines and semicolons. Returns whether any were skipped.
    pub(crate) fn skip_terminators(&mut self) -> bool {
        let mut skipped = false;
        while self.at(TokenKind::Newline) || self.at(TokenKind::Semicolon) {
            self.advance();
            skipped = true;
        }
        skipped
    }

    /// Source bytes of `token`.
    #[inline]
    pub(crate) fn text(&self, token: Token) -> &'src [u8] {
        token.text(self.source)
    }

    pub(crate) fn intern(&mut self, name: &[u8]) -> ConstantId {
        self.constants.insert(name)
    }

    pub(crate) fn intern_token(&mut self, token: Token) -> ConstantId {
        let text = self.text(token);
        self.constants.insert(text)
    }

    /// Whitespace directly precedes the current token.
    pub(crate) fn space_before_current(&self) -> bool {
        let start = self.current.span.start as usize;
        start > 0 && matches!(self.source.get(start - 1), Some(b' ' | b'\t' | b'\n'))
    }

    /// Whitespace directly follows the current token.
    pub(crate) fn space_after_current(&self) -> bool {
        let end = self.current.span.end as usize;
        matches!(self.source.get(end), None | Some(b' ' | b'\t' | b'\n' | b'\r'))
    }

    // ─── Diagnostics ───

    pub(crate) fn error(&mut self, span: Span, id: DiagnosticId) {
        self.errors.append(span, id);
    }

    pub(crate) fn error_format(&mut self, span: Span, id: DiagnosticId, args: &[FormatArg<'_>]) {
        if let Err(err) = self.errors.append_format(span, id, args) {
            tracing::error!(?id, %err, "diagnostic template");
            self.errors.append(span, id);
        }
    }

    pub(crate) fn warn(&mut self, span: Span, id: DiagnosticId) {
        self.warnings.append(span, id);
    }

    pub(crate) fn warn_format(&mut self, span: Span, id: DiagnosticId, args: &[FormatArg<'_>]) {
        if let Err(err) = self.warnings.append_format(span, id, args) {
            tracing::error!(?id, %err, "diagnostic template");
            self.warnings.append(span, id);
        }
    }

    /// Report the current token as unexpected, naming it.
    pub(crate) fn error_unexpected(&mut self, id: DiagnosticId) {
        let name = self.current.kind.display_name();
        self.error_format(self.current.span, id, &[FormatArg::from(name)]);
    }

    // ─── Nodes ───

    #[inline]
    pub(crate) fn node(&mut self, kind: NodeKind, span: Span) -> NodeId {
        self.ast.alloc(kind, span)
    }

    #[inline]
    pub(crate) fn node_with_flags(&mut self, kind: NodeKind, span: Span, flags: NodeFlags) -> NodeId {
        self.ast.alloc_with_flags(kind, span, flags)
    }

    #[inline]
    pub(crate) fn span(&self, node: NodeId) -> Span {
        self.ast.span(node)
    }

    #[inline]
    pub(crate) fn kind(&self, node: NodeId) -> NodeKind {
        self.ast.kind(node)
    }

    /// Placeholder for an expression that should be here but is not.
    pub(crate) fn missing(&mut self) -> NodeId {
        self.node(NodeKind::Missing, Span::point(self.previous.span.end))
    }

    /// Span from `start` to the end of the previous token.
    pub(crate) fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.previous.span.end.max(start))
    }

    pub(crate) fn line_of(&self, offset: u32) -> i32 {
        self.lexer.newlines().line(offset, self.options.line)
    }

    pub(crate) fn literal_context(&self) -> LiteralContext<'_> {
        LiteralContext {
            ast: &self.ast,
            source: self.source,
            newlines: self.lexer.newlines(),
            start_line: self.options.line,
            encoding: self.lexer.encoding(),
        }
    }

    // ─── Context ───

    /// Run `f` with `add` set and `remove` cleared, restoring afterwards.
    pub(crate) fn with_context<T>(
        &mut self,
        add: ParseContext,
        remove: ParseContext,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let saved = self.context;
        self.context = (saved - remove) | add;
        let result = f(self);
        self.context = saved;
        result
    }
}
