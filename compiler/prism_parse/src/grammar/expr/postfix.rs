//! Method calls, scope resolution and indexing.

use crate::context::ParseContext;
use crate::grammar::arguments::CallArguments;
use crate::Parser;
use prism_diagnostic::DiagnosticId;
use prism_ir::{ConstantId, NodeFlags, NodeId, NodeKind};
use prism_lexer::TokenKind;

/// Tokens that can name a method after `.`, `::`, `def`, `alias` or `:`.
pub(crate) fn is_method_name(kind: TokenKind) -> bool {
    use TokenKind as T;
    kind.is_keyword()
        || matches!(
            kind,
            T::Identifier
                | T::Constant
                | T::Backtick
                | T::BracketLeftRight
                | T::BracketLeftRightEqual
                | T::Plus
                | T::Minus
                | T::UPlus
                | T::UMinus
                | T::Star
                | T::StarStar
                | T::Slash
                | T::Percent
                | T::EqualEqual
                | T::EqualEqualEqual
                | T::EqualTilde
                | T::BangTilde
                | T::BangEqual
                | T::Bang
                | T::Tilde
                | T::Less
                | T::LessEqual
                | T::Greater
                | T::GreaterEqual
                | T::LessEqualGreater
                | T::LessLess
                | T::GreaterGreater
                | T::Ampersand
                | T::Pipe
                | T::Caret
        )
}

impl Parser<'_> {
    /// Arguments and block of a call whose name has just been consumed.
    ///
    /// `vcall` marks a receiverless name that could have been a local
    /// variable; it gets `VARIABLE_CALL` when nothing follows.
    pub(crate) fn parse_call_rest(
        &mut self,
        receiver: Option<NodeId>,
        name: ConstantId,
        start: u32,
        command: bool,
        vcall: bool,
        flags: NodeFlags,
    ) -> NodeId {
        let parenthesized = self.at(TokenKind::ParenthesisLeft);
        let arguments = if parenthesized {
            self.parse_parenthesized_arguments()
        } else if command && self.at_command_argument() {
            self.parse_command_arguments()
        } else {
            CallArguments::default()
        };
        let command_arguments = !parenthesized && arguments.arguments.is_some();
        let block = self.parse_call_block(arguments.block, command_arguments);

        let mut flags = flags;
        if vcall && receiver.is_none() && !parenthesized && arguments.arguments.is_none() && block.is_none() {
            flags |= NodeFlags::VARIABLE_CALL;
        }
        if receiver.is_some_and(|receiver| matches!(self.kind(receiver), NodeKind::SelfValue)) {
            flags |= NodeFlags::IGNORE_VISIBILITY;
        }
        let span = self.span_from(start);
        self.node_with_flags(
            NodeKind::Call {
                receiver,
                name,
                arguments: arguments.arguments,
                block,
            },
            span,
            flags,
        )
    }

    /// A `{ }` or `do end` block following a call, merged with any `&block`
    /// argument.
    pub(crate) fn parse_call_block(&mut self, argument: Option<NodeId>, command_arguments: bool) -> Option<NodeId> {
        let block = if self.at(TokenKind::BraceLeft) {
            if command_arguments {
                self.error(self.current.span, DiagnosticId::ArgumentUnexpectedBlock);
            }
            Some(self.parse_block())
        } else if self.at(TokenKind::KeywordDo) && !self.context.contains(ParseContext::NO_DO_BLOCK) {
            Some(self.parse_block())
        } else {
            None
        };
        match (argument, block) {
            (Some(argument), Some(block)) => {
                self.error(self.span(block), DiagnosticId::ArgumentBlockMulti);
                Some(argument)
            }
            (argument, None) => argument,
            (None, block) => block,
        }
    }

    /// `receiver.name`, `receiver&.name` and `receiver.()`.
    pub(crate) fn parse_method_call(&mut self, receiver: NodeId, command: bool) -> NodeId {
        let operator = self.current;
        self.advance();
        let flags = if operator.kind == TokenKind::AmpersandDot {
            NodeFlags::SAFE_NAVIGATION
        } else {
            NodeFlags::empty()
        };
        let start = self.span(receiver).start;

        let name = if self.at(TokenKind::ParenthesisLeft) {
            self.intern(b"call")
        } else if is_method_name(self.current.kind) {
            let token = self.current;
            self.advance();
            self.intern_token(token)
        } else {
            self.error(self.current.span, DiagnosticId::ExpectExpressionAfterOperator);
            self.intern(b"")
        };
        self.parse_call_rest(Some(receiver), name, start, command, false, flags)
    }

    /// `Parent::Name` is a constant path; `Parent::name` and `Parent::Name()`
    /// are method calls.
    pub(crate) fn parse_scope_resolution(&mut self, parent: NodeId, command: bool) -> NodeId {
        let start = self.span(parent).start;
        self.advance();
        let token = self.current;
        match token.kind {
            TokenKind::Constant => {
                self.advance();
                let name = self.intern_token(token);
                if self.at(TokenKind::ParenthesisLeft) || (command && self.at_command_argument()) {
                    return self.parse_call_rest(Some(parent), name, start, command, false, NodeFlags::empty());
                }
                let span = self.span_from(start);
                self.node(
                    NodeKind::ConstantPath {
                        parent: Some(parent),
                        name,
                    },
                    span,
                )
            }
            kind if is_method_name(kind) => {
                self.advance();
                let name = self.intern_token(token);
                self.parse_call_rest(Some(parent), name, start, command, false, NodeFlags::empty())
            }
            _ => self.constant_path(Some(parent), start),
        }
    }

    /// `receiver[arguments]`, a call to `[]`.
    pub(crate) fn parse_index(&mut self, receiver: NodeId) -> NodeId {
        let start = self.span(receiver).start;
        self.advance();
        let arguments = self.with_context(ParseContext::empty(), ParseContext::NO_DO_BLOCK, |p| {
            p.parse_argument_list(Some(TokenKind::BracketRight))
        });
        self.skip_newlines();
        self.expect(TokenKind::BracketRight, DiagnosticId::ExpectRbracket);
        let name = self.intern(b"[]");
        let block = self.parse_call_block(arguments.block, false);
        let span = self.span_from(start);
        self.node(
            NodeKind::Call {
                receiver: Some(receiver),
                name,
                arguments: arguments.arguments,
                block,
            },
            span,
        )
    }
}

#[cfg(test)]
mod tests;
