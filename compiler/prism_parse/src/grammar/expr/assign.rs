//! Assignment: `=`, operator assignment, `&&=`/`||=` and multiple
//! assignment.
//!
//! The left-hand side is parsed as an ordinary expression and rewritten
//! into a target once the assignment operator shows up. Rewriting a bare
//! identifier declares it as a local before the right-hand side is lexed,
//! so `a = a` reads the new local.

use super::bp;
use super::primary::numbered_parameter;
use crate::context::ParseContext;
use crate::recovery::EXPRESSION_START;
use crate::Parser;
use prism_diagnostic::{DiagnosticId, FormatArg};
use prism_ir::{ConstantId, NodeFlags, NodeId, NodeKind, Span};
use prism_lexer::TokenKind;
use smallvec::{smallvec, SmallVec};

/// Whether a method called `name` can be assigned through `recv.name =`.
fn is_attribute_name(name: &[u8]) -> bool {
    let Some(&first) = name.first() else {
        return false;
    };
    (first == b'_' || first.is_ascii_alphabetic() || first >= 0x80) && !name.ends_with(b"?") && !name.ends_with(b"!")
}

impl Parser<'_> {
    fn is_variable_call(&self, node: NodeId) -> bool {
        self.ast.flags(node).contains(NodeFlags::VARIABLE_CALL)
    }

    fn is_index_name(&self, name: ConstantId) -> bool {
        self.constants.get(name) == b"[]"
    }

    fn is_attribute(&self, name: ConstantId) -> bool {
        is_attribute_name(self.constants.get(name))
    }

    /// `_1 = x` and `|_1|` are rejected.
    pub(crate) fn check_numbered_reserved(&mut self, name: ConstantId, span: Span) {
        let text = self.constants.get(name);
        if numbered_parameter(text).is_some() {
            let display = self.constants.display(name);
            self.error_format(span, DiagnosticId::ParameterNumberedReserved, &[FormatArg::from(display.as_str())]);
        }
    }

    /// Rewrite `node` in place into an assignment target. Bare identifiers
    /// become locals of the current scope.
    pub(crate) fn to_target(&mut self, node: NodeId) -> NodeId {
        let span = self.span(node);
        let kind = match self.kind(node) {
            NodeKind::LocalVariableRead { name, depth } => {
                self.check_numbered_reserved(name, span);
                NodeKind::LocalVariableTarget { name, depth }
            }
            NodeKind::Call {
                receiver: None,
                name,
                arguments: None,
                block: None,
            } if self.is_variable_call(node) => {
                self.check_numbered_reserved(name, span);
                self.scopes.add_local(name);
                NodeKind::LocalVariableTarget { name, depth: 0 }
            }
            NodeKind::InstanceVariableRead { name } => NodeKind::InstanceVariableTarget { name },
            NodeKind::ClassVariableRead { name } => NodeKind::ClassVariableTarget { name },
            NodeKind::GlobalVariableRead { name } => NodeKind::GlobalVariableTarget { name },
            NodeKind::ConstantRead { name } => {
                self.check_constant_write(span);
                NodeKind::ConstantTarget { name }
            }
            NodeKind::ConstantPath { parent, name } => {
                self.check_constant_write(span);
                NodeKind::ConstantPathTarget { parent, name }
            }
            NodeKind::Call {
                receiver: Some(receiver),
                name,
                arguments: None,
                block: None,
            } if self.is_attribute(name) => {
                let name = self.setter_name(name);
                NodeKind::CallTarget { receiver, name }
            }
            NodeKind::Call {
                receiver: Some(receiver),
                name,
                arguments,
                block: None,
            } if self.is_index_name(name) => NodeKind::IndexTarget { receiver, arguments },
            NodeKind::Splat { expression } => {
                if let Some(expression) = expression {
                    let expression = self.to_target(expression);
                    self.ast.set_kind(
                        node,
                        NodeKind::Splat {
                            expression: Some(expression),
                        },
                    );
                }
                return node;
            }
            NodeKind::MultiTarget { .. } | NodeKind::ImplicitRest | NodeKind::Missing => return node,
            kind => {
                let id = if is_readonly(&kind) {
                    DiagnosticId::WriteTargetReadonly
                } else {
                    DiagnosticId::WriteTargetUnexpected
                };
                self.error(span, id);
                return node;
            }
        };
        self.ast.set_kind(node, kind);
        self.ast.remove_flags(node, NodeFlags::VARIABLE_CALL);
        node
    }

    fn check_constant_write(&mut self, span: Span) {
        if self.context.contains(ParseContext::DEF) {
            self.error(span, DiagnosticId::WriteTargetInMethod);
        }
    }

    fn setter_name(&mut self, name: ConstantId) -> ConstantId {
        let mut setter = self.constants.get(name).to_vec();
        setter.push(b'=');
        self.intern(&setter)
    }

    /// `target = value`. The current token is `=`.
    pub(super) fn parse_write(&mut self, target: NodeId, min_bp: u8) -> NodeId {
        let target_span = self.span(target);
        match self.kind(target) {
            NodeKind::Call {
                receiver: Some(receiver),
                name,
                arguments: None,
                block: None,
            } if self.is_attribute(name) => {
                self.advance();
                let value = self.parse_assignment_value(min_bp, true, DiagnosticId::ExpectExpressionAfterEqual);
                let setter = self.setter_name(name);
                let flags = self.ast.flags(target) | NodeFlags::ATTRIBUTE_WRITE;
                self.setter_call(receiver, setter, &[value], target_span, flags)
            }
            NodeKind::Call {
                receiver: Some(receiver),
                name,
                arguments,
                block: None,
            } if self.is_index_name(name) => {
                self.advance();
                let value = self.parse_assignment_value(min_bp, true, DiagnosticId::ExpectExpressionAfterEqual);
                let mut values: SmallVec<[NodeId; 4]> = arguments
                    .map(|arguments| match self.kind(arguments) {
                        NodeKind::Arguments { arguments } => self.ast.list(arguments).iter().copied().collect(),
                        _ => SmallVec::new(),
                    })
                    .unwrap_or_default();
                values.push(value);
                let setter = self.intern(b"[]=");
                let flags = self.ast.flags(target) | NodeFlags::ATTRIBUTE_WRITE;
                self.setter_call(receiver, setter, &values, target_span, flags)
            }
            NodeKind::MultiTarget { .. } | NodeKind::Splat { .. } => self.parse_multi_write(target),
            _ => {
                let target = self.to_target(target);
                self.advance();
                let value = self.parse_assignment_value(min_bp, true, DiagnosticId::ExpectExpressionAfterEqual);
                self.write_node(target, value)
            }
        }
    }

    /// `recv.name = value` and `recv[i] = value` are calls to the setter.
    fn setter_call(
        &mut self,
        receiver: NodeId,
        name: ConstantId,
        values: &[NodeId],
        target_span: Span,
        flags: NodeFlags,
    ) -> NodeId {
        let last = values.last().map_or(target_span, |&value| self.span(value));
        let first = values.first().map_or(target_span, |&value| self.span(value));
        let list = self.ast.alloc_list(values);
        let arguments = self.node(NodeKind::Arguments { arguments: list }, first.merge(last));
        self.node_with_flags(
            NodeKind::Call {
                receiver: Some(receiver),
                name,
                arguments: Some(arguments),
                block: None,
            },
            target_span.merge(last),
            flags,
        )
    }

    /// Combine a rewritten target with its value.
    fn write_node(&mut self, target: NodeId, value: NodeId) -> NodeId {
        let span = self.span(target).merge(self.span(value));
        let kind = match self.kind(target) {
            NodeKind::LocalVariableTarget { name, depth } => NodeKind::LocalVariableWrite { name, depth, value },
            NodeKind::InstanceVariableTarget { name } => NodeKind::InstanceVariableWrite { name, value },
            NodeKind::ClassVariableTarget { name } => NodeKind::ClassVariableWrite { name, value },
            NodeKind::GlobalVariableTarget { name } => NodeKind::GlobalVariableWrite { name, value },
            NodeKind::ConstantTarget { name } => NodeKind::ConstantWrite { name, value },
            NodeKind::ConstantPathTarget { .. } => NodeKind::ConstantPathWrite { target, value },
            // Not assignable; the error is already reported.
            _ => return value,
        };
        self.node(kind, span)
    }

    /// Right-hand side of an assignment. `a = 1, 2` and `a = *b` build an
    /// array when `list` allows it, and a trailing `rescue` modifier
    /// applies to the value rather than the whole assignment.
    fn parse_assignment_value(&mut self, min_bp: u8, list: bool, id: DiagnosticId) -> NodeId {
        let first = if list && (self.at(TokenKind::UStar) || self.at(TokenKind::Star)) {
            self.parse_splat(DiagnosticId::ExpectExpressionAfterSplat)
        } else {
            self.parse_expression(bp::ASSIGNMENT, true, id)
        };
        self.check_value_expression(first);

        let splat = matches!(self.kind(first), NodeKind::Splat { .. });
        let mut value = first;
        if list && (splat || (min_bp <= bp::STATEMENT && self.at(TokenKind::Comma))) {
            let mut elements: SmallVec<[NodeId; 8]> = smallvec![first];
            let mut flags = NodeFlags::empty();
            if splat {
                flags |= NodeFlags::CONTAINS_SPLAT;
            }
            while min_bp <= bp::STATEMENT && self.eat(TokenKind::Comma) {
                let element = if self.at(TokenKind::UStar) || self.at(TokenKind::Star) {
                    flags |= NodeFlags::CONTAINS_SPLAT;
                    self.parse_splat(DiagnosticId::ExpectExpressionAfterSplat)
                } else {
                    self.parse_expression(bp::ASSIGNMENT, false, DiagnosticId::ExpectExpressionAfterComma)
                };
                elements.push(element);
            }
            let span = self.span_from(self.span(first).start);
            let elements = self.ast.alloc_list(&elements);
            value = self.node_with_flags(NodeKind::Array { elements }, span, flags);
        }

        if min_bp <= bp::MODIFIER_RESCUE && self.eat(TokenKind::KeywordRescueModifier) {
            let rescue_expression =
                self.parse_expression(bp::MODIFIER_RESCUE + 1, false, DiagnosticId::RescueModifierValue);
            let span = self.span(value).merge(self.span(rescue_expression));
            value = self.node(
                NodeKind::RescueModifier {
                    expression: value,
                    rescue_expression,
                },
                span,
            );
        }
        value
    }

    /// `x = return 1` has no value to assign.
    fn check_value_expression(&mut self, node: NodeId) {
        if let Some(void) = self.void_statement(node) {
            self.error(self.span(void), DiagnosticId::VoidExpression);
        }
    }

    /// The jump that leaves `node` on every path, if any.
    fn void_statement(&self, node: NodeId) -> Option<NodeId> {
        match self.kind(node) {
            NodeKind::Return { .. }
            | NodeKind::Break { .. }
            | NodeKind::Next { .. }
            | NodeKind::Redo
            | NodeKind::Retry => Some(node),
            NodeKind::Statements { body } => {
                let last = *self.ast.list(body).last()?;
                self.void_statement(last)
            }
            NodeKind::Parentheses { body } => self.void_statement(body?),
            NodeKind::Begin {
                statements,
                rescue_clause: None,
                else_clause: None,
                ..
            } => self.void_statement(statements?),
            NodeKind::Else { statements } => self.void_statement(statements?),
            NodeKind::If {
                statements,
                subsequent,
                ..
            } => {
                let void = self.void_statement(statements?)?;
                self.void_statement(subsequent?)?;
                Some(void)
            }
            NodeKind::Unless {
                statements,
                else_clause,
                ..
            } => {
                let void = self.void_statement(statements?)?;
                self.void_statement(else_clause?)?;
                Some(void)
            }
            _ => None,
        }
    }

    /// Target of `op=`, `&&=` and `||=`. Calls with arguments or a block
    /// cannot be assigned through.
    fn operator_target(&mut self, target: NodeId) -> NodeId {
        if let NodeKind::Call {
            receiver: Some(_),
            name,
            arguments,
            block,
        } = self.kind(target)
        {
            let span = self.span(target);
            if block.is_some() {
                self.error(span, DiagnosticId::OperatorWriteBlock);
                return target;
            }
            if arguments.is_some() && !self.is_index_name(name) {
                self.error(span, DiagnosticId::OperatorWriteArguments);
                return target;
            }
        }
        self.to_target(target)
    }

    /// `target op= value`, where `method` is the operator it calls.
    pub(super) fn parse_operator_write(&mut self, target: NodeId, method: &'static [u8], min_bp: u8) -> NodeId {
        let target = self.operator_target(target);
        self.advance();
        let operator = self.intern(method);
        let value = self.parse_assignment_value(min_bp, false, DiagnosticId::ExpectExpressionAfterOperator);
        let span = self.span(target).merge(self.span(value));
        self.node(
            NodeKind::OperatorWrite {
                target,
                operator,
                value,
            },
            span,
        )
    }

    /// `target &&= value` and `target ||= value`.
    pub(super) fn parse_logical_write(&mut self, target: NodeId, min_bp: u8) -> NodeId {
        let and = self.at(TokenKind::AmpersandAmpersandEqual);
        let target = self.operator_target(target);
        self.advance();
        let id = if and {
            DiagnosticId::ExpectExpressionAfterAmpampeq
        } else {
            DiagnosticId::ExpectExpressionAfterPipepipeeq
        };
        let value = self.parse_assignment_value(min_bp, false, id);
        let span = self.span(target).merge(self.span(value));
        let kind = if and {
            NodeKind::AndWrite { target, value }
        } else {
            NodeKind::OrWrite { target, value }
        };
        self.node(kind, span)
    }

    // ─── Multiple assignment ───

    /// Whether `node` opens a target list, as in `a, b = ...` or `*a = ...`.
    pub(crate) fn starts_multi_write(&self, node: NodeId) -> bool {
        match self.kind(node) {
            NodeKind::Splat { .. } | NodeKind::MultiTarget { .. } => true,
            NodeKind::LocalVariableRead { .. }
            | NodeKind::InstanceVariableRead { .. }
            | NodeKind::ClassVariableRead { .. }
            | NodeKind::GlobalVariableRead { .. }
            | NodeKind::ConstantRead { .. }
            | NodeKind::ConstantPath { .. } => self.at(TokenKind::Comma),
            NodeKind::Call {
                receiver,
                name,
                arguments,
                block: None,
            } => {
                let assignable = match receiver {
                    None => self.is_variable_call(node),
                    Some(_) => {
                        (arguments.is_none() && self.is_attribute(name)) || self.is_index_name(name)
                    }
                };
                assignable && self.at(TokenKind::Comma)
            }
            _ => false,
        }
    }

    /// The rest of a target list starting with `first`, and the assignment
    /// that follows it. Inside parentheses the list is a nested target.
    pub(crate) fn parse_multi_write(&mut self, first: NodeId) -> NodeId {
        let start = self.span(first).start;
        let mut targets = TargetList::default();
        let first = self.to_target(first);
        self.push_target(&mut targets, first);

        while self.eat(TokenKind::Comma) {
            if self.at(TokenKind::UStar) || self.at(TokenKind::Star) {
                let star = self.current;
                self.advance();
                let expression = self.at_any(EXPRESSION_START).then(|| {
                    let expression = self.parse_expression(bp::INDEX, false, DiagnosticId::ExpectExpressionAfterStar);
                    self.to_target(expression)
                });
                let span = self.span_from(star.span.start);
                let splat = self.node(NodeKind::Splat { expression }, span);
                self.push_target(&mut targets, splat);
            } else if self.at_any(EXPRESSION_START) {
                let target = self.parse_expression(bp::INDEX, false, DiagnosticId::ExpectExpressionAfterComma);
                let target = self.to_target(target);
                self.push_target(&mut targets, target);
            } else {
                if targets.rest.is_none() {
                    let rest = self.node(NodeKind::ImplicitRest, self.previous.span);
                    targets.rest = Some(rest);
                }
                break;
            }
        }

        if let Some(lone) = targets.lone_multi_target() {
            if self.at(TokenKind::ParenthesisRight) {
                return lone;
            }
        }

        let lefts = self.ast.alloc_list(&targets.lefts);
        let rights = self.ast.alloc_list(&targets.rights);
        let rest = targets.rest;
        let target_span = self.span_from(start);

        match self.current.kind {
            TokenKind::Equal => {
                self.advance();
                let value = self.parse_assignment_value(bp::STATEMENT, true, DiagnosticId::ExpectExpressionAfterEqual);
                let span = target_span.merge(self.span(value));
                self.node(
                    NodeKind::MultiWrite {
                        lefts,
                        rest,
                        rights,
                        value,
                    },
                    span,
                )
            }
            TokenKind::ParenthesisRight | TokenKind::KeywordIn => {
                self.node(NodeKind::MultiTarget { lefts, rest, rights }, target_span)
            }
            kind => {
                let target = self.node(NodeKind::MultiTarget { lefts, rest, rights }, target_span);
                let id = match kind {
                    TokenKind::AmpersandAmpersandEqual => DiagnosticId::AmpampeqMultiAssign,
                    TokenKind::PipePipeEqual => DiagnosticId::PipepipeeqMultiAssign,
                    kind if super::operators::operator_write_method(kind).is_some() => {
                        DiagnosticId::OperatorMultiAssign
                    }
                    _ => {
                        self.error(target_span, DiagnosticId::WriteTargetUnexpected);
                        return target;
                    }
                };
                self.error(self.current.span, id);
                self.advance();
                let value =
                    self.parse_assignment_value(bp::STATEMENT, false, DiagnosticId::ExpectExpressionAfterOperator);
                let span = target_span.merge(self.span(value));
                self.node(
                    NodeKind::MultiWrite {
                        lefts,
                        rest,
                        rights,
                        value,
                    },
                    span,
                )
            }
        }
    }

    fn push_target(&mut self, targets: &mut TargetList, target: NodeId) {
        if matches!(self.kind(target), NodeKind::Splat { .. }) {
            if targets.rest.is_some() {
                self.error(self.span(target), DiagnosticId::MultiAssignMultiSplats);
                targets.rights.push(target);
            } else {
                targets.rest = Some(target);
            }
            return;
        }
        if matches!(self.kind(target), NodeKind::MultiTarget { .. }) {
            targets.nested += 1;
        }
        if targets.rest.is_some() {
            targets.rights.push(target);
        } else {
            targets.lefts.push(target);
        }
    }
}

#[derive(Default)]
struct TargetList {
    lefts: SmallVec<[NodeId; 4]>,
    rest: Option<NodeId>,
    rights: SmallVec<[NodeId; 4]>,
    nested: usize,
}

impl TargetList {
    /// `((a, b))` is the same target list as `(a, b)`.
    fn lone_multi_target(&self) -> Option<NodeId> {
        match (self.lefts.as_slice(), self.rest, self.rights.is_empty()) {
            ([only], None, true) if self.nested == 1 => Some(*only),
            _ => None,
        }
    }
}

fn is_readonly(kind: &NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::SelfValue
            | NodeKind::Nil
            | NodeKind::True
            | NodeKind::False
            | NodeKind::SourceFile { .. }
            | NodeKind::SourceLine
            | NodeKind::SourceEncoding
            | NodeKind::NumberedReferenceRead { .. }
            | NodeKind::BackReferenceRead { .. }
    )
}

#[cfg(test)]
mod tests;
