//! Child enumeration and depth-first traversal.

use super::{Ast, NodeId, NodeKind, NodeRange};
use smallvec::SmallVec;

/// Children of one node, inline for the common small case.
pub type Children = SmallVec<[NodeId; 8]>;

impl Ast {
    /// Direct children of `id` in source order.
    #[expect(clippy::too_many_lines, reason = "exhaustive NodeKind child dispatch")]
    pub fn children(&self, id: NodeId) -> Children {
        let mut out = Children::new();
        let one = |out: &mut Children, child: Option<NodeId>| {
            if let Some(child) = child {
                out.push(child);
            }
        };
        let many = |out: &mut Children, range: NodeRange| {
            out.extend_from_slice(self.list(range));
        };

        match self.kind(id) {
            NodeKind::Missing
            | NodeKind::Nil
            | NodeKind::True
            | NodeKind::False
            | NodeKind::SelfValue
            | NodeKind::Integer { .. }
            | NodeKind::Float { .. }
            | NodeKind::Rational { .. }
            | NodeKind::String { .. }
            | NodeKind::XString { .. }
            | NodeKind::Symbol { .. }
            | NodeKind::RegularExpression { .. }
            | NodeKind::SourceFile { .. }
            | NodeKind::SourceLine
            | NodeKind::SourceEncoding
            | NodeKind::ImplicitRest
            | NodeKind::LocalVariableRead { .. }
            | NodeKind::LocalVariableTarget { .. }
            | NodeKind::InstanceVariableRead { .. }
            | NodeKind::InstanceVariableTarget { .. }
            | NodeKind::ClassVariableRead { .. }
            | NodeKind::ClassVariableTarget { .. }
            | NodeKind::GlobalVariableRead { .. }
            | NodeKind::GlobalVariableTarget { .. }
            | NodeKind::BackReferenceRead { .. }
            | NodeKind::NumberedReferenceRead { .. }
            | NodeKind::ConstantRead { .. }
            | NodeKind::ConstantTarget { .. }
            | NodeKind::ForwardingArguments
            | NodeKind::BlockLocalVariable { .. }
            | NodeKind::NumberedParameters { .. }
            | NodeKind::Redo
            | NodeKind::Retry
            | NodeKind::RequiredParameter { .. }
            | NodeKind::RestParameter { .. }
            | NodeKind::RequiredKeywordParameter { .. }
            | NodeKind::KeywordRestParameter { .. }
            | NodeKind::NoKeywordsParameter
            | NodeKind::BlockParameter { .. }
            | NodeKind::ForwardingParameter => {}

            NodeKind::Program { statements, .. } => out.push(statements),
            NodeKind::Statements { body } => many(&mut out, body),
            NodeKind::Parentheses { body } => one(&mut out, body),
            NodeKind::Begin {
                statements,
                rescue_clause,
                else_clause,
                ensure_clause,
            } => {
                one(&mut out, statements);
                one(&mut out, rescue_clause);
                one(&mut out, else_clause);
                one(&mut out, ensure_clause);
            }
            NodeKind::Rescue {
                exceptions,
                reference,
                statements,
                subsequent,
            } => {
                many(&mut out, exceptions);
                one(&mut out, reference);
                one(&mut out, statements);
                one(&mut out, subsequent);
            }
            NodeKind::RescueModifier {
                expression,
                rescue_expression,
            } => {
                out.push(expression);
                out.push(rescue_expression);
            }
            NodeKind::Else { statements }
            | NodeKind::Ensure { statements }
            | NodeKind::PreExecution { statements }
            | NodeKind::PostExecution { statements }
            | NodeKind::EmbeddedStatements { statements } => one(&mut out, statements),
            NodeKind::Imaginary { numeric } => out.push(numeric),
            NodeKind::InterpolatedString { parts }
            | NodeKind::InterpolatedXString { parts }
            | NodeKind::InterpolatedSymbol { parts }
            | NodeKind::InterpolatedRegularExpression { parts } => many(&mut out, parts),
            NodeKind::EmbeddedVariable { variable } => out.push(variable),
            NodeKind::Array { elements }
            | NodeKind::Hash { elements }
            | NodeKind::KeywordHash { elements } => many(&mut out, elements),
            NodeKind::Assoc { key, value } => {
                out.push(key);
                out.push(value);
            }
            NodeKind::AssocSplat { value } => one(&mut out, value),
            NodeKind::Range { left, right } | NodeKind::FlipFlop { left, right } => {
                one(&mut out, left);
                one(&mut out, right);
            }
            NodeKind::Splat { expression } | NodeKind::BlockArgument { expression } => {
                one(&mut out, expression);
            }
            NodeKind::Implicit { value } => out.push(value),
            NodeKind::LocalVariableWrite { value, .. }
            | NodeKind::InstanceVariableWrite { value, .. }
            | NodeKind::ClassVariableWrite { value, .. }
            | NodeKind::GlobalVariableWrite { value, .. }
            | NodeKind::ConstantWrite { value, .. } => out.push(value),
            NodeKind::ConstantPath { parent, .. } | NodeKind::ConstantPathTarget { parent, .. } => {
                one(&mut out, parent);
            }
            NodeKind::ConstantPathWrite { target, value }
            | NodeKind::OperatorWrite { target, value, .. }
            | NodeKind::AndWrite { target, value }
            | NodeKind::OrWrite { target, value } => {
                out.push(target);
                out.push(value);
            }
            NodeKind::CallTarget { receiver, .. } => out.push(receiver),
            NodeKind::IndexTarget {
                receiver,
                arguments,
            } => {
                out.push(receiver);
                one(&mut out, arguments);
            }
            NodeKind::MultiTarget { lefts, rest, rights } => {
                many(&mut out, lefts);
                one(&mut out, rest);
                many(&mut out, rights);
            }
            NodeKind::MultiWrite {
                lefts,
                rest,
                rights,
                value,
            } => {
                many(&mut out, lefts);
                one(&mut out, rest);
                many(&mut out, rights);
                out.push(value);
            }
            NodeKind::MatchWrite { call, targets } => {
                out.push(call);
                many(&mut out, targets);
            }
            NodeKind::Call {
                receiver,
                arguments,
                block,
                ..
            } => {
                one(&mut out, receiver);
                one(&mut out, arguments);
                one(&mut out, block);
            }
            NodeKind::Arguments { arguments } => many(&mut out, arguments),
            NodeKind::Block {
                parameters, body, ..
            }
            | NodeKind::Lambda {
                parameters, body, ..
            } => {
                one(&mut out, parameters);
                one(&mut out, body);
            }
            NodeKind::BlockParameters { parameters, locals } => {
                one(&mut out, parameters);
                many(&mut out, locals);
            }
            NodeKind::Super { arguments, block } => {
                one(&mut out, arguments);
                one(&mut out, block);
            }
            NodeKind::ForwardingSuper { block } => one(&mut out, block),
            NodeKind::Yield { arguments }
            | NodeKind::Break { arguments }
            | NodeKind::Next { arguments }
            | NodeKind::Return { arguments } => one(&mut out, arguments),
            NodeKind::And { left, right }
            | NodeKind::Or { left, right }
            | NodeKind::AlternationPattern { left, right } => {
                out.push(left);
                out.push(right);
            }
            NodeKind::Defined { value } => out.push(value),
            NodeKind::If {
                predicate,
                statements,
                subsequent,
            } => {
                out.push(predicate);
                one(&mut out, statements);
                one(&mut out, subsequent);
            }
            NodeKind::Unless {
                predicate,
                statements,
                else_clause,
            } => {
                out.push(predicate);
                one(&mut out, statements);
                one(&mut out, else_clause);
            }
            NodeKind::While {
                predicate,
                statements,
            }
            | NodeKind::Until {
                predicate,
                statements,
            } => {
                out.push(predicate);
                one(&mut out, statements);
            }
            NodeKind::For {
                index,
                collection,
                statements,
            } => {
                out.push(index);
                out.push(collection);
                one(&mut out, statements);
            }
            NodeKind::Case {
                predicate,
                conditions,
                else_clause,
            }
            | NodeKind::CaseMatch {
                predicate,
                conditions,
                else_clause,
            } => {
                one(&mut out, predicate);
                many(&mut out, conditions);
                one(&mut out, else_clause);
            }
            NodeKind::When {
                conditions,
                statements,
            } => {
                many(&mut out, conditions);
                one(&mut out, statements);
            }
            NodeKind::In {
                pattern,
                statements,
            } => {
                out.push(pattern);
                one(&mut out, statements);
            }
            NodeKind::Def {
                receiver,
                parameters,
                body,
                ..
            } => {
                one(&mut out, receiver);
                one(&mut out, parameters);
                one(&mut out, body);
            }
            NodeKind::Parameters {
                requireds,
                optionals,
                rest,
                posts,
                keywords,
                keyword_rest,
                block,
            } => {
                many(&mut out, requireds);
                many(&mut out, optionals);
                one(&mut out, rest);
                many(&mut out, posts);
                many(&mut out, keywords);
                one(&mut out, keyword_rest);
                one(&mut out, block);
            }
            NodeKind::OptionalParameter { value, .. }
            | NodeKind::OptionalKeywordParameter { value, .. } => out.push(value),
            NodeKind::Class {
                constant_path,
                superclass,
                body,
                ..
            } => {
                out.push(constant_path);
                one(&mut out, superclass);
                one(&mut out, body);
            }
            NodeKind::SingletonClass {
                expression, body, ..
            } => {
                out.push(expression);
                one(&mut out, body);
            }
            NodeKind::Module {
                constant_path,
                body,
                ..
            } => {
                out.push(constant_path);
                one(&mut out, body);
            }
            NodeKind::Alias { new_name, old_name } | NodeKind::AliasGlobal { new_name, old_name } => {
                out.push(new_name);
                out.push(old_name);
            }
            NodeKind::Undef { names } => many(&mut out, names),
            NodeKind::MatchPredicate { value, pattern }
            | NodeKind::MatchRequired { value, pattern } => {
                out.push(value);
                out.push(pattern);
            }
            NodeKind::ArrayPattern {
                constant,
                requireds,
                rest,
                posts,
            } => {
                one(&mut out, constant);
                many(&mut out, requireds);
                one(&mut out, rest);
                many(&mut out, posts);
            }
            NodeKind::FindPattern {
                constant,
                left,
                requireds,
                right,
            } => {
                one(&mut out, constant);
                out.push(left);
                many(&mut out, requireds);
                out.push(right);
            }
            NodeKind::HashPattern {
                constant,
                elements,
                rest,
            } => {
                one(&mut out, constant);
                many(&mut out, elements);
                one(&mut out, rest);
            }
            NodeKind::CapturePattern { value, target } => {
                out.push(value);
                out.push(target);
            }
            NodeKind::PinnedExpression { expression } => out.push(expression),
            NodeKind::PinnedVariable { variable } => out.push(variable),
        }
        out
    }

    /// Pre-order depth-first walk starting at `root`.
    pub fn walk(&self, root: NodeId, mut visit: impl FnMut(NodeId, usize)) {
        let mut stack: SmallVec<[(NodeId, usize); 32]> = SmallVec::new();
        stack.push((root, 0));
        while let Some((id, depth)) = stack.pop() {
            visit(id, depth);
            for child in self.children(id).into_iter().rev() {
                stack.push((child, depth + 1));
            }
        }
    }

    /// First node under `root`, in pre-order, satisfying `predicate`.
    pub fn find(&self, root: NodeId, mut predicate: impl FnMut(&NodeKind) -> bool) -> Option<NodeId> {
        let mut found = None;
        self.walk(root, |id, _| {
            if found.is_none() && predicate(&self.kind(id)) {
                found = Some(id);
            }
        });
        found
    }
}
