//! Call arguments, hash elements, blocks and lambdas.

use super::bp;
use crate::context::{self, ParseContext};
use crate::options::Forwarding;
use crate::recovery::{EXPRESSION_START, LIST_CLOSERS};
use crate::scope::ScopeKind;
use crate::static_literals::{inspect, StaticLiterals};
use crate::Parser;
use prism_diagnostic::{DiagnosticId, FormatArg};
use prism_ir::{ConstantRange, NodeFlags, NodeId, NodeKind, NodeRange, Span};
use prism_lexer::TokenKind;
use smallvec::SmallVec;

/// What follows a method name.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct CallArguments {
    /// The `Arguments` node, absent when there are no arguments.
    pub(crate) arguments: Option<NodeId>,
    /// A `&block` argument.
    pub(crate) block: Option<NodeId>,
}

impl Parser<'_> {
    /// `(args)`. The current token is the opening parenthesis.
    pub(crate) fn parse_parenthesized_arguments(&mut self) -> CallArguments {
        self.advance();
        let arguments = self.with_context(ParseContext::empty(), ParseContext::NO_DO_BLOCK, |p| {
            p.parse_argument_list(Some(TokenKind::ParenthesisRight))
        });
        self.skip_newlines();
        self.expect(TokenKind::ParenthesisRight, DiagnosticId::ArgumentTermParen);
        arguments
    }

    /// Arguments of a call without parentheses, as in `puts a, b`. A `do`
    /// inside them belongs to this call.
    pub(crate) fn parse_command_arguments(&mut self) -> CallArguments {
        self.with_context(ParseContext::NO_DO_BLOCK, ParseContext::empty(), |p| {
            p.parse_argument_list(None)
        })
    }

    /// Comma-separated arguments up to `closer`, or up to the first token
    /// that does not continue the list when there is no closer.
    pub(crate) fn parse_argument_list(&mut self, closer: Option<TokenKind>) -> CallArguments {
        use TokenKind as T;
        let mut arguments: SmallVec<[NodeId; 8]> = SmallVec::new();
        let mut assocs: SmallVec<[NodeId; 4]> = SmallVec::new();
        let mut literals = StaticLiterals::new();
        let mut block: Option<NodeId> = None;
        let mut forwarding_all = false;
        let mut flags = NodeFlags::empty();
        let mut first = true;

        loop {
            if closer.is_some() {
                self.skip_newlines();
                if self.at_any(LIST_CLOSERS) {
                    break;
                }
            }
            if block.is_some() {
                self.error(self.current.span, DiagnosticId::ArgumentAfterBlock);
            }
            if forwarding_all {
                self.error(self.current.span, DiagnosticId::ArgumentAfterForwardingEllipses);
            }

            match self.current.kind {
                T::Ampersand => {
                    let argument = self.parse_block_argument();
                    if block.is_some() {
                        self.error(self.span(argument), DiagnosticId::ArgumentBlockMulti);
                    }
                    block = Some(argument);
                }
                T::UStar | T::Star => {
                    let star = self.current;
                    if !assocs.is_empty() {
                        self.error(star.span, DiagnosticId::ArgumentSplatAfterAssocSplat);
                    }
                    let splat = self.parse_splat(DiagnosticId::ExpectExpressionAfterSplat);
                    if matches!(self.kind(splat), NodeKind::Splat { expression: None })
                        && !self.scopes.forwarding().contains(Forwarding::POSITIONALS)
                    {
                        self.error(star.span, DiagnosticId::ArgumentNoForwardingStar);
                    }
                    flags |= NodeFlags::CONTAINS_SPLAT;
                    arguments.push(splat);
                }
                T::UStarStar | T::StarStar | T::Label => {
                    assocs.push(self.parse_assoc(&mut literals, None));
                }
                T::UDotDotDot | T::DotDotDot if closer.is_none() || closer == Some(T::ParenthesisRight) => {
                    let dots = self.current;
                    self.advance();
                    if closer.is_none() && !self.at_any(EXPRESSION_START) {
                        self.error(dots.span, DiagnosticId::ArgumentForwardingUnbound);
                        forwarding_all = true;
                        arguments.push(self.node(NodeKind::ForwardingArguments, dots.span));
                    } else if self.at(T::ParenthesisRight) || self.at(T::Comma) {
                        if !self.scopes.forwarding().contains(Forwarding::ALL) {
                            self.error(dots.span, DiagnosticId::ArgumentNoForwardingEllipses);
                        }
                        forwarding_all = true;
                        arguments.push(self.node(NodeKind::ForwardingArguments, dots.span));
                    } else {
                        let right =
                            self.parse_expression(bp::RANGE + 1, false, DiagnosticId::ExpectArgument);
                        let span = dots.span.merge(self.span(right));
                        arguments.push(self.node_with_flags(
                            NodeKind::Range {
                                left: None,
                                right: Some(right),
                            },
                            span,
                            NodeFlags::EXCLUDE_END,
                        ));
                    }
                }
                _ => {
                    let argument = self.parse_expression(bp::DEFINED, first, DiagnosticId::ExpectArgument);
                    if self.at(T::EqualGreater) || self.previous.kind == T::LabelEnd {
                        assocs.push(self.parse_assoc(&mut literals, Some(argument)));
                    } else {
                        // `foo(a: 1, 2)`: keywords must come last.
                        if let (Some(&head), Some(&tail)) = (assocs.first(), assocs.last()) {
                            let span = self.span(head).merge(self.span(tail));
                            self.error(span, DiagnosticId::ArgumentBareHash);
                        }
                        self.flush_keyword_hash(&mut assocs, &mut arguments);
                        arguments.push(argument);
                    }
                }
            }
            first = false;
            if !self.eat(T::Comma) {
                break;
            }
        }

        if !assocs.is_empty() {
            flags |= NodeFlags::CONTAINS_KEYWORDS;
            self.flush_keyword_hash(&mut assocs, &mut arguments);
        }
        let arguments = match (arguments.first(), arguments.last()) {
            (Some(&first), Some(&last)) => {
                let span = self.span(first).merge(self.span(last));
                let list = self.ast.alloc_list(&arguments);
                Some(self.node_with_flags(NodeKind::Arguments { arguments: list }, span, flags))
            }
            _ => None,
        };
        CallArguments { arguments, block }
    }

    /// `&expr`, or a bare `&` forwarding the enclosing method's block.
    fn parse_block_argument(&mut self) -> NodeId {
        let ampersand = self.current;
        self.advance();
        let expression = if self.at_any(EXPRESSION_START) {
            Some(self.parse_expression(bp::DEFINED, false, DiagnosticId::ExpectArgument))
        } else {
            if !self.scopes.forwarding().contains(Forwarding::BLOCK) {
                self.error(ampersand.span, DiagnosticId::ArgumentNoForwardingAmp);
            }
            None
        };
        let span = self.span_from(ampersand.span.start);
        self.node(NodeKind::BlockArgument { expression }, span)
    }

    /// Gather pending `key => value` elements into one `KeywordHash`.
    pub(crate) fn flush_keyword_hash(
        &mut self,
        assocs: &mut SmallVec<[NodeId; 4]>,
        elements: &mut SmallVec<[NodeId; 8]>,
    ) {
        let (Some(&first), Some(&last)) = (assocs.first(), assocs.last()) else {
            return;
        };
        let symbol_keys = assocs.iter().all(|&assoc| match self.kind(assoc) {
            NodeKind::Assoc { key, .. } => matches!(self.kind(key), NodeKind::Symbol { .. }),
            _ => false,
        });
        let flags = if symbol_keys {
            NodeFlags::SYMBOL_KEYS
        } else {
            NodeFlags::empty()
        };
        let span = self.span(first).merge(self.span(last));
        let list = self.ast.alloc_list(assocs);
        assocs.clear();
        elements.push(self.node_with_flags(NodeKind::KeywordHash { elements: list }, span, flags));
    }

    /// One hash element: `key => value`, `key: value`, `"key": value`,
    /// `key:` with an implicit value, or `**splat`.
    ///
    /// `key` is the already parsed key when the caller could not tell the
    /// element from a plain expression until it saw `=>` or `":`.
    pub(crate) fn parse_assoc(&mut self, literals: &mut StaticLiterals, key: Option<NodeId>) -> NodeId {
        use TokenKind as T;
        let key = match key {
            Some(key) => key,
            None => match self.current.kind {
                T::UStarStar | T::StarStar => return self.parse_assoc_splat(),
                T::Label => self.parse_label_key(),
                _ => self.parse_expression(bp::DEFINED, false, DiagnosticId::HashKey),
            },
        };

        let value = match self.previous.kind {
            T::Label | T::LabelEnd => {
                if self.at_any(EXPRESSION_START) {
                    self.parse_expression(bp::DEFINED, false, DiagnosticId::HashExpressionAfterLabel)
                } else {
                    self.implicit_value(key)
                }
            }
            _ => {
                self.expect(T::EqualGreater, DiagnosticId::HashRocket);
                self.parse_expression(bp::DEFINED, false, DiagnosticId::HashValue)
            }
        };

        self.check_duplicate_key(literals, key);
        let span = self.span(key).merge(self.span(value));
        self.node(NodeKind::Assoc { key, value }, span)
    }

    fn check_duplicate_key(&mut self, literals: &mut StaticLiterals, key: NodeId) {
        let ctx = self.literal_context();
        let Some(previous) = literals.add(&ctx, key) else {
            return;
        };
        let inspected = inspect(&ctx, previous);
        let line = self.line_of(self.span(key).start);
        self.warn_format(
            self.span(previous),
            DiagnosticId::DuplicatedHashKey,
            &[FormatArg::from(&inspected), FormatArg::from(line)],
        );
    }

    /// `foo:` as a symbol key.
    fn parse_label_key(&mut self) -> NodeId {
        let token = self.current;
        self.advance();
        let text = self.text(token);
        let name = text.strip_suffix(b":").unwrap_or(text);
        let flags = self.symbol_flags(name, false, false);
        let value = self.ast.alloc_string(name);
        self.node_with_flags(NodeKind::Symbol { value }, token.span, flags)
    }

    /// `{x:}` reads the local `x`, or calls `x` when there is none.
    fn implicit_value(&mut self, key: NodeId) -> NodeId {
        let key_span = self.span(key);
        let span = Span::new(key_span.start, key_span.end.saturating_sub(1).max(key_span.start));
        let text = span.slice(self.source);
        let name = self.intern(text);
        let value = if let Some(depth) = self.scopes.find(name) {
            self.node(NodeKind::LocalVariableRead { name, depth }, span)
        } else if text.first().is_some_and(u8::is_ascii_uppercase) {
            self.node(NodeKind::ConstantRead { name }, span)
        } else {
            self.node_with_flags(
                NodeKind::Call {
                    receiver: None,
                    name,
                    arguments: None,
                    block: None,
                },
                span,
                NodeFlags::VARIABLE_CALL,
            )
        };
        self.node(NodeKind::Implicit { value }, span)
    }

    /// `**hash`, or a bare `**` forwarding the enclosing keyword rest.
    fn parse_assoc_splat(&mut self) -> NodeId {
        let operator = self.current;
        self.advance();
        let value = if self.at_any(EXPRESSION_START) {
            Some(self.parse_expression(bp::DEFINED, false, DiagnosticId::ExpectExpressionAfterSplatHash))
        } else {
            if !self.scopes.forwarding().contains(Forwarding::KEYWORDS) {
                self.error(operator.span, DiagnosticId::ExpectExpressionAfterSplatHash);
            }
            None
        };
        let span = self.span_from(operator.span.start);
        self.node(NodeKind::AssocSplat { value }, span)
    }

    // ─── Blocks ───

    /// `{ |params| body }` or `do |params| body end`.
    pub(crate) fn parse_block(&mut self) -> NodeId {
        let opening = self.current;
        self.advance();
        self.scopes.push(ScopeKind::Block);
        let parameters = self.parse_block_parameters();
        let body = if opening.kind == TokenKind::BraceLeft {
            let body = self.parse_statements(context::BRACE_BLOCK);
            self.expect(TokenKind::BraceRight, DiagnosticId::BlockTermBrace);
            body
        } else {
            let body = self.parse_body(opening.span.start, context::DO_BLOCK);
            self.expect(TokenKind::KeywordEnd, DiagnosticId::BlockTermEnd);
            body
        };
        let (locals, parameters) = self.pop_block_scope(parameters, opening.span);
        let span = self.span_from(opening.span.start);
        self.node(
            NodeKind::Block {
                locals,
                parameters,
                body,
            },
            span,
        )
    }

    /// Close a block or lambda scope. Without declared parameters, uses of
    /// `_1`..`_9` produce the parameter list.
    fn pop_block_scope(&mut self, parameters: Option<NodeId>, opening: Span) -> (ConstantRange, Option<NodeId>) {
        let frame = self.scopes.pop();
        let locals = self.ast.alloc_locals(frame.locals());
        let parameters = match parameters {
            None if frame.numbered_maximum() > 0 => Some(self.node(
                NodeKind::NumberedParameters {
                    maximum: frame.numbered_maximum(),
                },
                opening,
            )),
            parameters => parameters,
        };
        (locals, parameters)
    }

    /// `|a, b; c|`, `||`, or nothing.
    fn parse_block_parameters(&mut self) -> Option<NodeId> {
        let start = self.current.span.start;
        if self.eat(TokenKind::PipePipe) {
            self.scopes.mark_parameters();
            let span = self.span_from(start);
            return Some(self.node(
                NodeKind::BlockParameters {
                    parameters: None,
                    locals: NodeRange::EMPTY,
                },
                span,
            ));
        }
        if !self.eat(TokenKind::Pipe) {
            return None;
        }
        self.scopes.mark_parameters();
        let parameters = self.parse_parameters(super::definitions::ParameterOwner::Block);
        let locals = self.parse_block_locals();
        self.expect(TokenKind::Pipe, DiagnosticId::BlockParamPipeTerm);
        let span = self.span_from(start);
        Some(self.node(NodeKind::BlockParameters { parameters, locals }, span))
    }

    /// Block-local variables after `;` in a parameter list.
    fn parse_block_locals(&mut self) -> NodeRange {
        if !self.eat(TokenKind::Semicolon) {
            return NodeRange::EMPTY;
        }
        let mut locals: SmallVec<[NodeId; 4]> = SmallVec::new();
        loop {
            if !self.at(TokenKind::Identifier) {
                self.error(self.current.span, DiagnosticId::BlockParamLocalVariable);
                break;
            }
            let token = self.current;
            self.advance();
            let name = self.intern_token(token);
            if !self.scopes.add_local(name) {
                self.error(token.span, DiagnosticId::ParameterNameRepeat);
            }
            locals.push(self.node(NodeKind::BlockLocalVariable { name }, token.span));
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.ast.alloc_list(&locals)
    }

    // ─── Lambdas ───

    /// `->(params) { body }` or `-> params do body end`.
    pub(crate) fn parse_lambda(&mut self) -> NodeId {
        let arrow = self.current;
        let saved = self
            .lexer
            .set_lambda_enclosure_nesting(self.lexer.enclosure_nesting());
        self.advance();
        self.scopes.push(ScopeKind::Lambda);

        let start = self.current.span.start;
        let parenthesized = matches!(
            self.current.kind,
            TokenKind::ParenthesisLeft | TokenKind::ParenthesisLeftParentheses
        );
        if parenthesized {
            self.advance();
        }
        let parameters = self.parse_parameters(super::definitions::ParameterOwner::Lambda);
        let locals = self.parse_block_locals();
        if parenthesized {
            self.skip_newlines();
            self.expect(TokenKind::ParenthesisRight, DiagnosticId::ExpectRparen);
        }
        let explicit = parenthesized || parameters.is_some() || !locals.is_empty();
        if explicit {
            self.scopes.mark_parameters();
        }
        let parameters = explicit.then(|| {
            let span = self.span_from(start);
            self.node(NodeKind::BlockParameters { parameters, locals }, span)
        });
        self.lexer.set_lambda_enclosure_nesting(saved);

        let body = if self.eat(TokenKind::LambdaBegin) {
            let body = self.parse_statements(context::LAMBDA_BRACE);
            self.expect(TokenKind::BraceRight, DiagnosticId::LambdaTermBrace);
            body
        } else if self.at(TokenKind::KeywordDo) {
            let start = self.current.span.start;
            self.advance();
            let body = self.parse_body(start, context::LAMBDA_DO);
            self.expect(TokenKind::KeywordEnd, DiagnosticId::LambdaTermEnd);
            body
        } else {
            self.error(self.current.span, DiagnosticId::LambdaOpen);
            None
        };

        let (locals, parameters) = self.pop_block_scope(parameters, arrow.span);
        let span = self.span_from(arrow.span.start);
        self.node(
            NodeKind::Lambda {
                locals,
                parameters,
                body,
            },
            span,
        )
    }
}

#[cfg(test)]
mod tests;
