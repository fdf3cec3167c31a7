//! Expression parsing.
//!
//! Precedence climbing over the binding powers in `operators`.
//!
//! # Module Structure
//!
//! - `operators`: binding powers of infix operators
//! - `primary`: literals, variables, keyword expressions and prefix operators
//! - `postfix`: method calls, `::` and indexing
//! - `assign`: assignment, operator assignment and write targets

mod assign;
mod operators;
mod postfix;
mod primary;

pub(crate) use operators::bp;
pub(crate) use postfix::is_method_name;
use operators::{infix_power, operator_write_method, BindingPower};

use crate::named_captures::{is_local_name, named_captures};
use crate::recovery::EXPRESSION_START;
use crate::Parser;
use prism_diagnostic::DiagnosticId;
use prism_ir::{ConstantId, NodeFlags, NodeId, NodeKind};
use prism_lexer::TokenKind;
use prism_stack::ensure_sufficient_stack;
use smallvec::SmallVec;

impl Parser<'_> {
    /// Parse an expression whose operators bind at least as tightly as
    /// `min_bp`.
    ///
    /// `command` allows a method call with unparenthesized arguments, as in
    /// `puts 1`. `id` is reported when no expression starts here.
    pub(crate) fn parse_expression(&mut self, min_bp: u8, command: bool, id: DiagnosticId) -> NodeId {
        ensure_sufficient_stack(|| self.parse_expression_inner(min_bp, command, id))
    }

    fn parse_expression_inner(&mut self, min_bp: u8, command: bool, id: DiagnosticId) -> NodeId {
        let start = self.current.span;
        let mut left = self.parse_primary(min_bp, command, id);
        if self.current.span == start {
            return left;
        }
        if min_bp <= bp::STATEMENT && self.starts_multi_write(left) {
            left = self.parse_multi_write(left);
        }

        let mut nonassoc = None;
        while let Some(power) = infix_power(self.current.kind) {
            if power.left < min_bp || nonassoc == Some(power.left) {
                break;
            }
            nonassoc = power.nonassoc.then_some(power.left);
            left = self.parse_infix(left, power, min_bp, command);
        }
        left
    }

    fn parse_infix(&mut self, left: NodeId, power: BindingPower, min_bp: u8, command: bool) -> NodeId {
        use TokenKind as T;
        match self.current.kind {
            T::Equal => self.parse_write(left, min_bp),
            T::AmpersandAmpersandEqual | T::PipePipeEqual => self.parse_logical_write(left, min_bp),
            T::KeywordAnd | T::KeywordOr | T::AmpersandAmpersand | T::PipePipe => {
                self.parse_logical(left, power)
            }
            T::KeywordIfModifier | T::KeywordUnlessModifier => {
                self.parse_conditional_modifier(left, power)
            }
            T::KeywordWhileModifier | T::KeywordUntilModifier => self.parse_loop_modifier(left, power),
            T::KeywordRescueModifier => {
                self.advance();
                let rescue_expression =
                    self.parse_expression(power.right, false, DiagnosticId::RescueModifierValue);
                let span = self.span(left).merge(self.span(rescue_expression));
                self.node(
                    NodeKind::RescueModifier {
                        expression: left,
                        rescue_expression,
                    },
                    span,
                )
            }
            T::QuestionMark => self.parse_ternary(left),
            T::DotDot | T::DotDotDot => self.parse_range(Some(left), power.right),
            T::EqualGreater | T::KeywordIn => self.parse_match_operator(left),
            T::Dot | T::AmpersandDot => self.parse_method_call(left, command),
            T::ColonColon => self.parse_scope_resolution(left, command),
            T::BracketLeft => self.parse_index(left),
            kind => match operator_write_method(kind) {
                Some(method) => self.parse_operator_write(left, method, min_bp),
                None => self.parse_binary(left, power),
            },
        }
    }

    /// `left op right` is a call to the method `op` on `left`.
    fn parse_binary(&mut self, left: NodeId, power: BindingPower) -> NodeId {
        let operator = self.current;
        self.advance();
        let right = self.parse_expression(power.right, false, DiagnosticId::ExpectExpressionAfterOperator);
        let name = self.intern_token(operator);
        let call = self.binary_call(left, name, right);
        if operator.kind == TokenKind::EqualTilde {
            return self.match_write(left, call);
        }
        call
    }

    pub(crate) fn binary_call(&mut self, receiver: NodeId, name: ConstantId, argument: NodeId) -> NodeId {
        let argument_span = self.span(argument);
        let list = self.ast.alloc_list(&[argument]);
        let arguments = self.node(NodeKind::Arguments { arguments: list }, argument_span);
        let span = self.span(receiver).merge(argument_span);
        self.node(
            NodeKind::Call {
                receiver: Some(receiver),
                name,
                arguments: Some(arguments),
                block: None,
            },
            span,
        )
    }

    /// `/(?<name>..)/ =~ value` declares a local for every named group.
    fn match_write(&mut self, regexp: NodeId, call: NodeId) -> NodeId {
        let NodeKind::RegularExpression { content } = self.kind(regexp) else {
            return call;
        };
        let pattern = self.ast.string(content).to_vec();
        let regexp_span = self.span(regexp);

        let mut names: SmallVec<[ConstantId; 4]> = SmallVec::new();
        let mut targets: SmallVec<[NodeId; 4]> = SmallVec::new();
        for range in named_captures(&pattern) {
            let text = &pattern[range];
            if !is_local_name(text) {
                continue;
            }
            let name = self.intern(text);
            if names.contains(&name) {
                continue;
            }
            names.push(name);
            let depth = match self.scopes.find(name) {
                Some(depth) => depth,
                None => {
                    self.scopes.add_local(name);
                    0
                }
            };
            targets.push(self.node(NodeKind::LocalVariableTarget { name, depth }, regexp_span));
        }
        if targets.is_empty() {
            return call;
        }
        let targets = self.ast.alloc_list(&targets);
        let span = self.span(call);
        self.node(NodeKind::MatchWrite { call, targets }, span)
    }

    fn parse_logical(&mut self, left: NodeId, power: BindingPower) -> NodeId {
        let operator = self.current.kind;
        self.advance();
        let keyword = matches!(operator, TokenKind::KeywordAnd | TokenKind::KeywordOr);
        let right = self.parse_expression(power.right, keyword, DiagnosticId::ExpectExpressionAfterOperator);
        let span = self.span(left).merge(self.span(right));
        let kind = if matches!(operator, TokenKind::KeywordAnd | TokenKind::AmpersandAmpersand) {
            NodeKind::And { left, right }
        } else {
            NodeKind::Or { left, right }
        };
        self.node(kind, span)
    }

    /// `statement if predicate` and `statement unless predicate`.
    fn parse_conditional_modifier(&mut self, statement: NodeId, power: BindingPower) -> NodeId {
        let unless = self.at(TokenKind::KeywordUnlessModifier);
        self.advance();
        let id = if unless {
            DiagnosticId::ConditionalUnlessPredicate
        } else {
            DiagnosticId::ConditionalIfPredicate
        };
        let predicate = self.parse_expression(power.right, true, id);
        let predicate = self.conditional_predicate(predicate);
        let statements = Some(self.single_statement(statement));
        let span = self.span(statement).merge(self.span(predicate));
        let kind = if unless {
            NodeKind::Unless {
                predicate,
                statements,
                else_clause: None,
            }
        } else {
            NodeKind::If {
                predicate,
                statements,
                subsequent: None,
            }
        };
        self.node(kind, span)
    }

    /// `statement while predicate`. A `begin` block runs before the first
    /// test.
    fn parse_loop_modifier(&mut self, statement: NodeId, power: BindingPower) -> NodeId {
        let until = self.at(TokenKind::KeywordUntilModifier);
        self.advance();
        let id = if until {
            DiagnosticId::ConditionalUntilPredicate
        } else {
            DiagnosticId::ConditionalWhilePredicate
        };
        let predicate = self.parse_expression(power.right, true, id);
        let predicate = self.conditional_predicate(predicate);
        let flags = if matches!(self.kind(statement), NodeKind::Begin { .. }) {
            NodeFlags::BEGIN_MODIFIER
        } else {
            NodeFlags::empty()
        };
        let statements = Some(self.single_statement(statement));
        let span = self.span(statement).merge(self.span(predicate));
        let kind = if until {
            NodeKind::Until { predicate, statements }
        } else {
            NodeKind::While { predicate, statements }
        };
        self.node_with_flags(kind, span, flags)
    }

    /// `predicate ? truthy : falsy` becomes an `If` with an `Else`.
    fn parse_ternary(&mut self, predicate: NodeId) -> NodeId {
        self.advance();
        let predicate = self.conditional_predicate(predicate);
        let truthy = self.parse_expression(bp::TERNARY, false, DiagnosticId::TernaryExpressionTrue);

        let colon = self.current.span;
        let falsy = if self.eat(TokenKind::Colon) {
            self.parse_expression(bp::TERNARY, false, DiagnosticId::TernaryExpressionFalse)
        } else {
            self.error(self.current.span, DiagnosticId::TernaryColon);
            self.missing()
        };

        let statements = Some(self.single_statement(truthy));
        let else_statements = Some(self.single_statement(falsy));
        let else_span = colon.merge(self.span(falsy));
        let subsequent = Some(self.node(
            NodeKind::Else {
                statements: else_statements,
            },
            else_span,
        ));
        let span = self.span(predicate).merge(self.span(falsy));
        self.node(
            NodeKind::If {
                predicate,
                statements,
                subsequent,
            },
            span,
        )
    }

    /// `left..right`, `left...`, `..right`. The current token is the
    /// operator.
    pub(crate) fn parse_range(&mut self, left: Option<NodeId>, right_bp: u8) -> NodeId {
        let operator = self.current;
        self.advance();
        let start = left.map_or(operator.span.start, |left| self.span(left).start);
        let right = self
            .at_any(EXPRESSION_START)
            .then(|| self.parse_expression(right_bp, false, DiagnosticId::ExpectExpressionAfterOperator));

        let mut flags = NodeFlags::empty();
        if matches!(operator.kind, TokenKind::DotDotDot | TokenKind::UDotDotDot) {
            flags |= NodeFlags::EXCLUDE_END;
        }
        let static_end = |node: Option<NodeId>| {
            node.map_or(true, |node| matches!(self.kind(node), NodeKind::Integer { .. } | NodeKind::Nil))
        };
        if static_end(left) && static_end(right) {
            flags |= NodeFlags::STATIC_LITERAL;
        }
        let span = self.span_from(start);
        self.node_with_flags(NodeKind::Range { left, right }, span, flags)
    }
}
