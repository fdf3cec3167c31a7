//! Conditionals, loops, `case`/`when`, `begin` bodies and jumps.

use super::bp;
use crate::context::{self, ParseContext, Terminators};
use crate::recovery::{TokenSet, EXPRESSION_START, TERMINATORS};
use crate::static_literals::StaticLiterals;
use crate::Parser;
use prism_diagnostic::{DiagnosticId, FormatArg};
use prism_ir::{NodeFlags, NodeId, NodeKind, Span};
use prism_lexer::TokenKind;
use smallvec::SmallVec;

/// What may end the predicate of `if`, `unless`, `when` and `rescue`.
const PREDICATE_END: TokenSet = TERMINATORS.union(TokenSet::new().with(TokenKind::KeywordThen));

/// Name used in "literal in condition" warnings.
fn literal_name(kind: &NodeKind) -> Option<&'static str> {
    let name = match kind {
        NodeKind::String { .. } | NodeKind::InterpolatedString { .. } => "string",
        NodeKind::Symbol { .. } | NodeKind::InterpolatedSymbol { .. } => "symbol",
        NodeKind::RegularExpression { .. } | NodeKind::InterpolatedRegularExpression { .. } => "regex",
        NodeKind::Integer { .. } => "integer",
        NodeKind::Float { .. } => "float",
        NodeKind::Rational { .. } => "rational",
        NodeKind::Imaginary { .. } => "imaginary",
        _ => return None,
    };
    Some(name)
}

/// The pieces of a body that may carry `rescue`, `else` and `ensure`.
struct BodyParts {
    statements: Option<NodeId>,
    rescue_clause: Option<NodeId>,
    else_clause: Option<NodeId>,
    ensure_clause: Option<NodeId>,
}

impl BodyParts {
    fn has_clauses(&self) -> bool {
        self.rescue_clause.is_some() || self.else_clause.is_some() || self.ensure_clause.is_some()
    }

    fn into_kind(self) -> NodeKind {
        NodeKind::Begin {
            statements: self.statements,
            rescue_clause: self.rescue_clause,
            else_clause: self.else_clause,
            ensure_clause: self.ensure_clause,
        }
    }
}

impl Parser<'_> {
    /// Adjust a node used as a condition: a range becomes a flip-flop and
    /// literals draw a warning.
    pub(crate) fn conditional_predicate(&mut self, predicate: NodeId) -> NodeId {
        match self.kind(predicate) {
            NodeKind::Range { left, right } => {
                for end in [left, right].into_iter().flatten() {
                    if matches!(self.kind(end), NodeKind::Integer { .. }) {
                        self.warn(self.span(end), DiagnosticId::IntegerInFlipFlop);
                    }
                }
                self.ast.set_kind(predicate, NodeKind::FlipFlop { left, right });
                self.ast.remove_flags(predicate, NodeFlags::STATIC_LITERAL);
            }
            NodeKind::And { left, right } | NodeKind::Or { left, right } => {
                self.conditional_predicate(left);
                self.conditional_predicate(right);
            }
            NodeKind::Parentheses { body: Some(body) } => {
                let single = match self.kind(body) {
                    NodeKind::Statements { body } => match self.ast.list(body) {
                        [single] => Some(*single),
                        _ => None,
                    },
                    _ => None,
                };
                if let Some(single) = single {
                    self.conditional_predicate(single);
                }
            }
            kind => {
                if let Some(name) = literal_name(&kind) {
                    self.warn_format(self.span(predicate), DiagnosticId::LiteralInCondition, &[FormatArg::from(name)]);
                }
            }
        }
        predicate
    }

    /// Predicate of `if`, `unless`, `while`, `until` and the separator
    /// after it. `separator` is the keyword that may replace a newline.
    fn parse_predicate(&mut self, id: DiagnosticId, separator: TokenKind) -> NodeId {
        let predicate = self.parse_expression(bp::MODIFIER + 1, true, id);
        let predicate = self.conditional_predicate(predicate);
        self.parse_separator(separator, DiagnosticId::ConditionalPredicateTerm);
        predicate
    }

    /// `then`, `do`, or a newline/semicolon (optionally followed by
    /// `then`).
    pub(crate) fn parse_separator(&mut self, separator: TokenKind, id: DiagnosticId) {
        let terminated = self.at_any(TERMINATORS);
        self.skip_terminators();
        if !self.eat(separator) && !terminated {
            self.error(Span::point(self.previous.span.end), id);
        }
    }

    pub(crate) fn parse_else(&mut self, terminators: Terminators) -> NodeId {
        let start = self.current.span.start;
        self.advance();
        let statements = self.parse_statements(terminators);
        let span = self.span_from(start);
        self.node(NodeKind::Else { statements }, span)
    }

    /// Expect the `end` of a conditional, naming the `else` clause when
    /// there is one.
    fn expect_conditional_end(&mut self, else_clause: Option<NodeId>) {
        let id = match else_clause.map(|clause| self.kind(clause)) {
            Some(NodeKind::Else { .. }) => DiagnosticId::ConditionalTermElse,
            _ => DiagnosticId::ConditionalTerm,
        };
        self.expect(TokenKind::KeywordEnd, id);
    }

    // ─── if / unless ───

    pub(crate) fn parse_if(&mut self) -> NodeId {
        let start = self.current.span.start;
        self.advance();
        let predicate = self.parse_predicate(DiagnosticId::ConditionalIfPredicate, TokenKind::KeywordThen);
        let statements = self.parse_statements(context::IF);
        let subsequent = self.parse_if_subsequent();
        self.expect_conditional_end(subsequent);
        let span = self.span_from(start);
        self.node(
            NodeKind::If {
                predicate,
                statements,
                subsequent,
            },
            span,
        )
    }

    fn parse_if_subsequent(&mut self) -> Option<NodeId> {
        match self.current.kind {
            TokenKind::KeywordElsif => {
                let start = self.current.span.start;
                self.advance();
                let predicate =
                    self.parse_predicate(DiagnosticId::ConditionalElsifPredicate, TokenKind::KeywordThen);
                let statements = self.parse_statements(context::IF);
                let span = self.span_from(start);
                let subsequent = self.parse_if_subsequent();
                let span = subsequent.map_or(span, |subsequent| span.merge(self.span(subsequent)));
                Some(self.node(
                    NodeKind::If {
                        predicate,
                        statements,
                        subsequent,
                    },
                    span,
                ))
            }
            TokenKind::KeywordElse => Some(self.parse_else(context::ELSE)),
            _ => None,
        }
    }

    pub(crate) fn parse_unless(&mut self) -> NodeId {
        let start = self.current.span.start;
        self.advance();
        let predicate = self.parse_predicate(DiagnosticId::ConditionalUnlessPredicate, TokenKind::KeywordThen);
        let statements = self.parse_statements(context::UNLESS);
        let else_clause = self.at(TokenKind::KeywordElse).then(|| self.parse_else(context::ELSE));
        self.expect_conditional_end(else_clause);
        let span = self.span_from(start);
        self.node(
            NodeKind::Unless {
                predicate,
                statements,
                else_clause,
            },
            span,
        )
    }

    // ─── Loops ───

    /// `while` and `until`. A `do` after the predicate belongs to the loop,
    /// not to a call in the predicate.
    pub(crate) fn parse_loop(&mut self) -> NodeId {
        let keyword = self.current;
        let until = keyword.kind == TokenKind::KeywordUntil;
        self.lexer.push_do_loop(true);
        self.advance();
        let id = if until {
            DiagnosticId::ConditionalUntilPredicate
        } else {
            DiagnosticId::ConditionalWhilePredicate
        };
        let predicate = self.parse_expression(bp::MODIFIER + 1, true, id);
        self.lexer.pop_do_loop();
        let predicate = self.conditional_predicate(predicate);
        self.parse_separator(TokenKind::KeywordDoLoop, DiagnosticId::ConditionalPredicateTerm);

        let statements = self.parse_statements(context::LOOP);
        let term = if until {
            DiagnosticId::UntilTerm
        } else {
            DiagnosticId::WhileTerm
        };
        self.expect(TokenKind::KeywordEnd, term);
        let span = self.span_from(keyword.span.start);
        let kind = if until {
            NodeKind::Until { predicate, statements }
        } else {
            NodeKind::While { predicate, statements }
        };
        self.node(kind, span)
    }

    /// `for index in collection do ... end`.
    pub(crate) fn parse_for(&mut self) -> NodeId {
        let start = self.current.span.start;
        self.advance();
        let index = if self.at_any(EXPRESSION_START) {
            let first = self.parse_expression(bp::INDEX, false, DiagnosticId::ForIndex);
            if self.at(TokenKind::Comma) {
                self.parse_multi_write(first)
            } else {
                self.to_target(first)
            }
        } else {
            self.error(self.current.span, DiagnosticId::ForIndex);
            self.missing()
        };

        self.lexer.push_do_loop(true);
        self.expect(TokenKind::KeywordIn, DiagnosticId::ForIn);
        let collection = self.parse_expression(bp::MODIFIER + 1, true, DiagnosticId::ForCollection);
        self.lexer.pop_do_loop();
        self.parse_separator(TokenKind::KeywordDoLoop, DiagnosticId::ConditionalPredicateTerm);

        let statements = self.parse_statements(context::LOOP);
        self.expect(TokenKind::KeywordEnd, DiagnosticId::ForTerm);
        let span = self.span_from(start);
        self.node(
            NodeKind::For {
                index,
                collection,
                statements,
            },
            span,
        )
    }

    // ─── case ───

    pub(crate) fn parse_case(&mut self) -> NodeId {
        let keyword = self.current;
        self.advance();
        // The newline after `case` is not a token, so `case\nwhen` arrives
        // here at `when`.
        let bare = self.at_any(TERMINATORS) || self.at(TokenKind::KeywordWhen) || self.at(TokenKind::KeywordIn);
        let predicate = (!bare)
            .then(|| self.parse_expression(bp::MATCH + 1, true, DiagnosticId::CaseExpressionAfterCase));
        self.skip_terminators();

        match self.current.kind {
            TokenKind::KeywordWhen => self.parse_case_when(keyword.span.start, predicate),
            TokenKind::KeywordIn => self.parse_case_in(keyword.span.start, predicate),
            _ => {
                self.error(keyword.span, DiagnosticId::CaseMissingConditions);
                let else_clause = self
                    .at(TokenKind::KeywordElse)
                    .then(|| self.parse_else(context::CASE_ELSE));
                self.expect(TokenKind::KeywordEnd, DiagnosticId::CaseTerm);
                let span = self.span_from(keyword.span.start);
                self.node(
                    NodeKind::Case {
                        predicate,
                        conditions: prism_ir::NodeRange::EMPTY,
                        else_clause,
                    },
                    span,
                )
            }
        }
    }

    fn parse_case_when(&mut self, start: u32, predicate: Option<NodeId>) -> NodeId {
        let mut conditions: SmallVec<[NodeId; 8]> = SmallVec::new();
        let mut literals = StaticLiterals::new();
        while self.at(TokenKind::KeywordWhen) {
            conditions.push(self.parse_when(&mut literals));
        }
        let else_clause = self
            .at(TokenKind::KeywordElse)
            .then(|| self.parse_else(context::CASE_ELSE));
        self.expect(TokenKind::KeywordEnd, DiagnosticId::CaseTerm);
        let conditions = self.ast.alloc_list(&conditions);
        let span = self.span_from(start);
        self.node(
            NodeKind::Case {
                predicate,
                conditions,
                else_clause,
            },
            span,
        )
    }

    fn parse_when(&mut self, literals: &mut StaticLiterals) -> NodeId {
        let start = self.current.span.start;
        self.advance();
        let mut conditions: SmallVec<[NodeId; 4]> = SmallVec::new();
        loop {
            let condition = if self.at(TokenKind::UStar) || self.at(TokenKind::Star) {
                self.parse_splat(DiagnosticId::ExpectExpressionAfterSplat)
            } else {
                let condition = self.parse_expression(bp::DEFINED, false, DiagnosticId::CaseExpressionAfterWhen);
                self.check_duplicate_when(literals, condition);
                condition
            };
            conditions.push(condition);
            if !self.eat(TokenKind::Comma) {
                break;
            }
            self.skip_newlines();
        }
        self.parse_separator(TokenKind::KeywordThen, DiagnosticId::ExpectWhenDelimiter);
        let statements = self.parse_statements(context::WHEN);
        let conditions = self.ast.alloc_list(&conditions);
        let span = self.span_from(start);
        self.node(NodeKind::When { conditions, statements }, span)
    }

    fn check_duplicate_when(&mut self, literals: &mut StaticLiterals, condition: NodeId) {
        let ctx = self.literal_context();
        let Some(previous) = literals.add(&ctx, condition) else {
            return;
        };
        let line = self.line_of(self.span(condition).start);
        let previous_line = self.line_of(self.span(previous).start);
        self.warn_format(
            self.span(condition),
            DiagnosticId::DuplicatedWhenClause,
            &[FormatArg::from(line), FormatArg::from(previous_line)],
        );
    }

    // ─── begin / rescue / else / ensure ───

    pub(crate) fn parse_begin(&mut self) -> NodeId {
        let start = self.current.span.start;
        self.advance();
        let parts = self.parse_body_parts(context::BEGIN);
        self.expect(TokenKind::KeywordEnd, DiagnosticId::BeginTerm);
        let span = self.span_from(start);
        self.node(parts.into_kind(), span)
    }

    /// A body that may carry `rescue`/`else`/`ensure` clauses, as in `def`,
    /// `class` or a `do` block. Without clauses this is just the statements.
    pub(crate) fn parse_body(&mut self, start: u32, terminators: Terminators) -> Option<NodeId> {
        let parts = self.parse_body_parts(terminators);
        if !parts.has_clauses() {
            return parts.statements;
        }
        let span = self.span_from(start);
        Some(self.node(parts.into_kind(), span))
    }

    fn parse_body_parts(&mut self, terminators: Terminators) -> BodyParts {
        let statements = self.parse_statements(terminators);
        let rescue_clause = self.at(TokenKind::KeywordRescue).then(|| self.parse_rescue());
        let else_clause = if self.at(TokenKind::KeywordElse) {
            if rescue_clause.is_none() {
                self.error(self.current.span, DiagnosticId::BeginLonelyElse);
            }
            Some(self.parse_else(context::BODY_ELSE))
        } else {
            None
        };
        let ensure_clause = if self.at(TokenKind::KeywordEnsure) {
            let start = self.current.span.start;
            self.advance();
            let statements = self.parse_statements(context::ENSURE);
            let span = self.span_from(start);
            Some(self.node(NodeKind::Ensure { statements }, span))
        } else {
            None
        };
        BodyParts {
            statements,
            rescue_clause,
            else_clause,
            ensure_clause,
        }
    }

    /// `rescue A, B => e` and the clauses chained after it.
    fn parse_rescue(&mut self) -> NodeId {
        let start = self.current.span.start;
        self.advance();

        let mut exceptions: SmallVec<[NodeId; 4]> = SmallVec::new();
        if !self.at_any(PREDICATE_END) && !self.at(TokenKind::EqualGreater) {
            loop {
                let exception = if self.at(TokenKind::UStar) || self.at(TokenKind::Star) {
                    self.parse_splat(DiagnosticId::RescueExpression)
                } else {
                    self.parse_expression(bp::DEFINED, false, DiagnosticId::RescueExpression)
                };
                exceptions.push(exception);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
                self.skip_newlines();
            }
        }
        let reference = self.eat(TokenKind::EqualGreater).then(|| {
            let target = self.parse_expression(bp::INDEX, false, DiagnosticId::RescueVariable);
            self.to_target(target)
        });
        self.parse_separator(TokenKind::KeywordThen, DiagnosticId::RescueTerm);

        let statements = self.with_context(ParseContext::RESCUE, ParseContext::empty(), |p| {
            p.parse_statements(context::RESCUE)
        });
        let span = self.span_from(start);
        let subsequent = self.at(TokenKind::KeywordRescue).then(|| self.parse_rescue());
        let exceptions = self.ast.alloc_list(&exceptions);
        self.node(
            NodeKind::Rescue {
                exceptions,
                reference,
                statements,
                subsequent,
            },
            span,
        )
    }

    // ─── Jumps ───

    /// `return`, `break` and `next`, with optional values.
    pub(crate) fn parse_jump(&mut self) -> NodeId {
        let keyword = self.current;
        self.advance();
        let arguments = if self.at_command_argument() || self.at(TokenKind::ParenthesisLeft) {
            let arguments = self.parse_command_arguments();
            if let Some(block) = arguments.block {
                self.error(self.span(block), DiagnosticId::ArgumentUnexpectedBlock);
            }
            arguments.arguments
        } else {
            None
        };
        let span = self.span_from(keyword.span.start);
        let kind = match keyword.kind {
            TokenKind::KeywordReturn => {
                if self.context.contains(ParseContext::CLASS) {
                    self.error(keyword.span, DiagnosticId::ReturnInvalid);
                }
                NodeKind::Return { arguments }
            }
            TokenKind::KeywordBreak => NodeKind::Break { arguments },
            _ => NodeKind::Next { arguments },
        };
        self.node(kind, span)
    }

    pub(crate) fn parse_retry(&mut self) -> NodeId {
        let span = self.current.span;
        self.advance();
        if !self.context.contains(ParseContext::RESCUE) {
            self.error(span, DiagnosticId::InvalidRetryWithoutRescue);
        }
        self.node(NodeKind::Retry, span)
    }

    pub(crate) fn parse_yield(&mut self) -> NodeId {
        let keyword = self.current;
        self.advance();
        let arguments = if self.at(TokenKind::ParenthesisLeft) {
            self.parse_parenthesized_arguments()
        } else if self.at_command_argument() {
            self.parse_command_arguments()
        } else {
            super::arguments::CallArguments::default()
        };
        if let Some(block) = arguments.block {
            self.error(self.span(block), DiagnosticId::ArgumentUnexpectedBlock);
        }
        if self.context.contains(ParseContext::CLASS) {
            self.error(keyword.span, DiagnosticId::InvalidYield);
        }
        let span = self.span_from(keyword.span.start);
        self.node(
            NodeKind::Yield {
                arguments: arguments.arguments,
            },
            span,
        )
    }

    /// `super(args)` and `super args` pass explicit arguments; a bare
    /// `super` forwards the method's own.
    pub(crate) fn parse_super(&mut self) -> NodeId {
        let start = self.current.span.start;
        self.advance();
        let parenthesized = self.at(TokenKind::ParenthesisLeft);
        let arguments = if parenthesized {
            self.parse_parenthesized_arguments()
        } else if self.at_command_argument() {
            self.parse_command_arguments()
        } else {
            super::arguments::CallArguments::default()
        };
        let explicit = parenthesized || arguments.arguments.is_some() || arguments.block.is_some();
        let block = self.parse_call_block(arguments.block, !parenthesized && arguments.arguments.is_some());
        let span = self.span_from(start);
        let kind = if explicit {
            NodeKind::Super {
                arguments: arguments.arguments,
                block,
            }
        } else {
            NodeKind::ForwardingSuper { block }
        };
        self.node(kind, span)
    }
}

#[cfg(test)]
mod tests;
