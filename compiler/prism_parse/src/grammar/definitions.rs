//! `def` and parameter lists, `class`, `module`, `alias`, `undef`, and
//! `BEGIN`/`END` blocks.

use super::bp;
use super::expr::is_method_name;
use crate::context::{self, ParseContext};
use crate::options::Forwarding;
use crate::recovery::{EXPRESSION_START, TERMINATORS};
use crate::scope::ScopeKind;
use crate::Parser;
use prism_diagnostic::DiagnosticId;
use prism_ir::{ConstantId, NodeFlags, NodeId, NodeKind, Span};
use prism_lexer::{LexState, Token, TokenKind};
use smallvec::SmallVec;

/// Who owns a parameter list. Blocks and lambdas differ from methods in
/// what they accept and how far a default value extends.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum ParameterOwner {
    /// `def m(a, b)`
    Def,
    /// `def m a, b`, ended by a newline.
    BareDef,
    Block,
    Lambda,
}

impl ParameterOwner {
    fn is_method(self) -> bool {
        matches!(self, ParameterOwner::Def | ParameterOwner::BareDef)
    }
}

/// Position reached in a parameter list; each kind must come after the
/// previous ones.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
enum Order {
    Leading,
    Optional,
    Rest,
    Keyword,
    KeywordRest,
    Block,
}

#[derive(Default)]
struct ParameterList {
    requireds: SmallVec<[NodeId; 4]>,
    optionals: SmallVec<[NodeId; 4]>,
    rest: Option<NodeId>,
    posts: SmallVec<[NodeId; 4]>,
    keywords: SmallVec<[NodeId; 4]>,
    keyword_rest: Option<NodeId>,
    block: Option<NodeId>,
}

impl ParameterList {
    fn is_empty(&self) -> bool {
        self.requireds.is_empty()
            && self.optionals.is_empty()
            && self.rest.is_none()
            && self.posts.is_empty()
            && self.keywords.is_empty()
            && self.keyword_rest.is_none()
            && self.block.is_none()
    }

    /// Required parameters go before or after the rest parameter.
    fn push_required(&mut self, parameter: NodeId) {
        if self.rest.is_some() || !self.optionals.is_empty() {
            self.posts.push(parameter);
        } else {
            self.requireds.push(parameter);
        }
    }
}

impl Parser<'_> {
    /// Declare a parameter in the current scope. Repeating a name is an
    /// error unless it starts with `_`, and `a?` or `a!` name methods only.
    fn declare_parameter(&mut self, name: ConstantId, span: Span) -> NodeFlags {
        self.check_numbered_reserved(name, span);
        if matches!(self.constants.get(name).last(), Some(b'?' | b'!')) {
            self.error(span, DiagnosticId::ParameterMethodName);
        }
        if !self.scopes.declared_here(name) {
            self.scopes.add_local(name);
            return NodeFlags::empty();
        }
        if self.constants.get(name).starts_with(b"_") {
            NodeFlags::REPEATED_PARAMETER
        } else {
            self.error(span, DiagnosticId::ParameterNameRepeat);
            NodeFlags::empty()
        }
    }

    /// `@a`, `$a`, `@@a` and `A` cannot name a parameter.
    fn formal_argument_error(&mut self) -> bool {
        let id = match self.current.kind {
            TokenKind::InstanceVariable => DiagnosticId::ArgumentFormalIvar,
            TokenKind::GlobalVariable => DiagnosticId::ArgumentFormalGlobal,
            TokenKind::ClassVariable => DiagnosticId::ArgumentFormalClass,
            TokenKind::Constant => DiagnosticId::ArgumentFormalConstant,
            _ => return false,
        };
        self.error(self.current.span, id);
        self.advance();
        true
    }

    fn check_order(&mut self, order: &mut Order, next: Order, span: Span) {
        if next < *order {
            self.error(span, DiagnosticId::ParameterOrder);
        } else {
            *order = next;
        }
    }

    /// An optional name after `*`, `**` or `&`.
    fn parameter_name(&mut self) -> Option<(ConstantId, NodeFlags)> {
        if !self.at(TokenKind::Identifier) {
            return None;
        }
        let token = self.current;
        self.advance();
        let name = self.intern_token(token);
        let flags = self.declare_parameter(name, token.span);
        Some((name, flags))
    }

    /// Parameters of a method, block or lambda, up to (not including) the
    /// closing token. Returns `None` when the list is empty.
    pub(crate) fn parse_parameters(&mut self, owner: ParameterOwner) -> Option<NodeId> {
        use TokenKind as T;
        let start = self.current.span.start;
        let mut list = ParameterList::default();
        let mut order = Order::Leading;
        let multiline = owner != ParameterOwner::BareDef;

        loop {
            if multiline {
                self.skip_newlines();
            }
            let token = self.current;
            match token.kind {
                T::Identifier => {
                    self.advance();
                    let name = self.intern_token(token);
                    let flags = self.declare_parameter(name, token.span);
                    if self.at(T::Equal) {
                        self.check_order(&mut order, Order::Optional, token.span);
                        self.advance();
                        let value = self.parse_default_value(name, owner, DiagnosticId::ParameterNoDefault);
                        let span = token.span.merge(self.span(value));
                        list.optionals
                            .push(self.node_with_flags(NodeKind::OptionalParameter { name, value }, span, flags));
                    } else {
                        if order > Order::Rest {
                            self.error(token.span, DiagnosticId::ParameterOrder);
                        }
                        let parameter = self.node_with_flags(NodeKind::RequiredParameter { name }, token.span, flags);
                        list.push_required(parameter);
                    }
                }
                T::Label => {
                    self.advance();
                    self.check_order(&mut order, Order::Keyword, token.span);
                    let text = self.text(token);
                    let name = self.intern(text.strip_suffix(b":").unwrap_or(text));
                    let name_span = Span::new(token.span.start, token.span.end.saturating_sub(1));
                    let flags = self.declare_parameter(name, name_span);
                    let parameter = if self.at_default_keyword_value(owner) {
                        let value = self.parse_default_value(name, owner, DiagnosticId::ParameterNoDefaultKw);
                        let span = token.span.merge(self.span(value));
                        self.node_with_flags(NodeKind::OptionalKeywordParameter { name, value }, span, flags)
                    } else {
                        self.node_with_flags(NodeKind::RequiredKeywordParameter { name }, token.span, flags)
                    };
                    list.keywords.push(parameter);
                }
                T::UStar | T::Star => {
                    self.advance();
                    self.check_order(&mut order, Order::Rest, token.span);
                    let named = self.parameter_name();
                    if named.is_none() && owner.is_method() {
                        self.scopes.add_forwarding(Forwarding::POSITIONALS);
                    }
                    let (name, flags) = named.map_or((None, NodeFlags::empty()), |(name, flags)| (Some(name), flags));
                    let span = self.span_from(token.span.start);
                    let parameter = self.node_with_flags(NodeKind::RestParameter { name }, span, flags);
                    if list.rest.is_some() {
                        self.error(span, DiagnosticId::ParameterSplatMulti);
                    } else {
                        list.rest = Some(parameter);
                    }
                }
                T::UStarStar | T::StarStar => {
                    self.advance();
                    self.check_order(&mut order, Order::KeywordRest, token.span);
                    let parameter = if self.at(T::KeywordNil) {
                        self.advance();
                        let span = self.span_from(token.span.start);
                        self.node(NodeKind::NoKeywordsParameter, span)
                    } else {
                        let named = self.parameter_name();
                        if named.is_none() && owner.is_method() {
                            self.scopes.add_forwarding(Forwarding::KEYWORDS);
                        }
                        let (name, flags) =
                            named.map_or((None, NodeFlags::empty()), |(name, flags)| (Some(name), flags));
                        let span = self.span_from(token.span.start);
                        self.node_with_flags(NodeKind::KeywordRestParameter { name }, span, flags)
                    };
                    if list.keyword_rest.is_some() {
                        self.error(self.span(parameter), DiagnosticId::ParameterAssocSplatMulti);
                    } else {
                        list.keyword_rest = Some(parameter);
                    }
                }
                T::Ampersand => {
                    self.advance();
                    self.check_order(&mut order, Order::Block, token.span);
                    let named = self.parameter_name();
                    if named.is_none() && owner.is_method() {
                        self.scopes.add_forwarding(Forwarding::BLOCK);
                    }
                    let (name, flags) = named.map_or((None, NodeFlags::empty()), |(name, flags)| (Some(name), flags));
                    let span = self.span_from(token.span.start);
                    let parameter = self.node_with_flags(NodeKind::BlockParameter { name }, span, flags);
                    if list.block.is_some() {
                        self.error(span, DiagnosticId::ParameterBlockMulti);
                    } else {
                        list.block = Some(parameter);
                    }
                }
                T::UDotDotDot | T::DotDotDot => {
                    self.advance();
                    if owner.is_method() {
                        self.scopes.add_forwarding(Forwarding::ALL);
                    } else {
                        self.error(token.span, DiagnosticId::ParameterUnexpectedFwd);
                    }
                    self.check_order(&mut order, Order::KeywordRest, token.span);
                    let parameter = self.node(NodeKind::ForwardingParameter, token.span);
                    if list.keyword_rest.is_some() {
                        self.error(token.span, DiagnosticId::ParameterUnexpectedFwd);
                    } else {
                        list.keyword_rest = Some(parameter);
                    }
                }
                T::ParenthesisLeft | T::ParenthesisLeftParentheses => {
                    if order > Order::Rest {
                        self.error(token.span, DiagnosticId::ParameterOrder);
                    }
                    let parameter = self.parse_destructured_parameter();
                    list.push_required(parameter);
                }
                _ => {
                    if self.formal_argument_error() {
                        if !self.eat(T::Comma) {
                            break;
                        }
                        continue;
                    }
                    break;
                }
            }

            if !self.eat(T::Comma) {
                break;
            }
            if multiline {
                self.skip_newlines();
            }
            if matches!(self.current.kind, T::ParenthesisRight | T::Pipe | T::Semicolon | T::Newline) {
                if owner == ParameterOwner::Block && list.rest.is_none() && list.keywords.is_empty() {
                    list.rest = Some(self.node(NodeKind::ImplicitRest, self.previous.span));
                } else {
                    self.error(self.previous.span, DiagnosticId::ParameterWildLooseComma);
                }
                break;
            }
        }

        if list.is_empty() {
            return None;
        }
        let span = self.span_from(start);
        let requireds = self.ast.alloc_list(&list.requireds);
        let optionals = self.ast.alloc_list(&list.optionals);
        let posts = self.ast.alloc_list(&list.posts);
        let keywords = self.ast.alloc_list(&list.keywords);
        Some(self.node(
            NodeKind::Parameters {
                requireds,
                optionals,
                rest: list.rest,
                posts,
                keywords,
                keyword_rest: list.keyword_rest,
                block: list.block,
            },
            span,
        ))
    }

    /// A keyword parameter has a default unless the list continues.
    fn at_default_keyword_value(&self, owner: ParameterOwner) -> bool {
        if owner == ParameterOwner::Block && self.at(TokenKind::Pipe) {
            return false;
        }
        self.at_any(EXPRESSION_START)
    }

    /// Default value of an optional parameter. The parameter itself may not
    /// appear in it.
    fn parse_default_value(&mut self, name: ConstantId, owner: ParameterOwner, id: DiagnosticId) -> NodeId {
        let saved = self.circular_parameter.replace(name);
        let min_bp = if owner == ParameterOwner::Block {
            bp::BITWISE_OR + 1
        } else {
            bp::DEFINED
        };
        let value = self.parse_expression(min_bp, false, id);
        self.circular_parameter = saved;
        value
    }

    /// `(a, (b, *c))` in a parameter list.
    fn parse_destructured_parameter(&mut self) -> NodeId {
        let start = self.current.span.start;
        self.advance();
        let mut lefts: SmallVec<[NodeId; 4]> = SmallVec::new();
        let mut rights: SmallVec<[NodeId; 4]> = SmallVec::new();
        let mut rest: Option<NodeId> = None;

        loop {
            self.skip_newlines();
            let token = self.current;
            let parameter = match token.kind {
                TokenKind::ParenthesisLeft | TokenKind::ParenthesisLeftParentheses => {
                    self.parse_destructured_parameter()
                }
                TokenKind::UStar | TokenKind::Star => {
                    self.advance();
                    let expression = self.at(TokenKind::Identifier).then(|| {
                        let name_token = self.current;
                        self.advance();
                        let name = self.intern_token(name_token);
                        let flags = self.declare_parameter(name, name_token.span);
                        self.node_with_flags(NodeKind::RequiredParameter { name }, name_token.span, flags)
                    });
                    let span = self.span_from(token.span.start);
                    let splat = self.node(NodeKind::Splat { expression }, span);
                    if rest.is_some() {
                        self.error(span, DiagnosticId::ParameterSplatMulti);
                    } else {
                        rest = Some(splat);
                    }
                    if !self.eat(TokenKind::Comma) {
                        break;
                    }
                    continue;
                }
                TokenKind::Identifier => {
                    self.advance();
                    let name = self.intern_token(token);
                    let flags = self.declare_parameter(name, token.span);
                    self.node_with_flags(NodeKind::RequiredParameter { name }, token.span, flags)
                }
                _ => {
                    self.error(token.span, DiagnosticId::ExpectIdentReqParameter);
                    break;
                }
            };
            if rest.is_some() {
                rights.push(parameter);
            } else {
                lefts.push(parameter);
            }
            if !self.eat(TokenKind::Comma) {
                break;
            }
            if self.at(TokenKind::ParenthesisRight) && rest.is_none() {
                rest = Some(self.node(NodeKind::ImplicitRest, self.previous.span));
                break;
            }
        }
        self.skip_newlines();
        self.expect(TokenKind::ParenthesisRight, DiagnosticId::ExpectRparenReqParameter);
        let span = self.span_from(start);
        let lefts = self.ast.alloc_list(&lefts);
        let rights = self.ast.alloc_list(&rights);
        self.node(NodeKind::MultiTarget { lefts, rest, rights }, span)
    }

    // ─── def ───

    pub(crate) fn parse_def(&mut self) -> NodeId {
        let keyword = self.current;
        self.advance();
        let (receiver, name, name_span) = self.parse_def_name();

        self.scopes.push(ScopeKind::Def);
        let (parameters, body) = self.with_context(
            ParseContext::DEF,
            ParseContext::CLASS | ParseContext::RESCUE | ParseContext::NO_DO_BLOCK,
            |p| p.parse_def_rest(keyword.span.start, name, name_span),
        );
        let frame = self.scopes.pop();
        let locals = self.ast.alloc_locals(frame.locals());
        let span = self.span_from(keyword.span.start);
        self.node(
            NodeKind::Def {
                name,
                receiver,
                parameters,
                body,
                locals,
            },
            span,
        )
    }

    /// Parameters and body, from just after the method name.
    fn parse_def_rest(&mut self, start: u32, name: ConstantId, name_span: Span) -> (Option<NodeId>, Option<NodeId>) {
        let parenthesized = matches!(
            self.current.kind,
            TokenKind::ParenthesisLeft | TokenKind::ParenthesisLeftParentheses
        );
        let parameters = if parenthesized {
            self.advance();
            let parameters = self.parse_parameters(ParameterOwner::Def);
            self.skip_newlines();
            self.expect(TokenKind::ParenthesisRight, DiagnosticId::DefParamsTermParen);
            parameters
        } else if self.at_any(TERMINATORS) || self.at(TokenKind::Equal) {
            None
        } else {
            self.parse_parameters(ParameterOwner::BareDef)
        };

        if self.at(TokenKind::Equal) {
            if self.constants.get(name).ends_with(b"=") {
                self.error(name_span, DiagnosticId::DefEndlessSetter);
            }
            self.advance();
            let body = self.parse_endless_body();
            return (parameters, Some(body));
        }

        if !parenthesized && !self.at_any(TERMINATORS) {
            self.error(Span::point(self.previous.span.end), DiagnosticId::DefParamsTerm);
        }
        let body = self.parse_body(start, context::DEF);
        self.expect(TokenKind::KeywordEnd, DiagnosticId::DefTerm);
        (parameters, body)
    }

    /// `def m = value`, with an optional `rescue` modifier on the value.
    fn parse_endless_body(&mut self) -> NodeId {
        let mut value = self.parse_expression(bp::ASSIGNMENT, true, DiagnosticId::DefEndless);
        if self.eat(TokenKind::KeywordRescueModifier) {
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
        self.single_statement(value)
    }

    /// `name`, `recv.name` or `(expr).name` after `def`.
    fn parse_def_name(&mut self) -> (Option<NodeId>, ConstantId, Span) {
        use TokenKind as T;
        let token = self.current;
        match token.kind {
            T::ParenthesisLeft | T::ParenthesisLeftParentheses => {
                self.advance();
                let receiver = self.parse_expression(bp::STATEMENT, true, DiagnosticId::DefReceiver);
                self.skip_newlines();
                self.expect(T::ParenthesisRight, DiagnosticId::DefReceiverTerm);
                let span = self.span_from(token.span.start);
                let receiver = self.node(NodeKind::Parentheses { body: Some(receiver) }, span);
                self.parse_def_name_after_receiver(receiver)
            }
            T::InstanceVariable | T::ClassVariable | T::GlobalVariable | T::Identifier | T::Constant
            | T::KeywordSelf | T::KeywordNil | T::KeywordTrue | T::KeywordFalse
                if self.receiver_follows() =>
            {
                let receiver = self.def_receiver(token);
                self.parse_def_name_after_receiver(receiver)
            }
            kind if is_method_name(kind) => {
                self.advance();
                (None, self.intern_token(token), token.span)
            }
            _ => {
                self.error(token.span, DiagnosticId::DefName);
                (None, self.intern(b""), Span::point(token.span.start))
            }
        }
    }

    /// The current token is followed directly by `.` or `::`.
    fn receiver_follows(&self) -> bool {
        let end = self.current.span.end as usize;
        match self.source.get(end..) {
            Some([b'.', next, ..]) => *next != b'.',
            Some([b':', b':', ..]) => true,
            _ => false,
        }
    }

    /// Node for the singleton receiver named by `token`, which is current.
    fn def_receiver(&mut self, token: Token) -> NodeId {
        self.advance();
        let kind = match token.kind {
            TokenKind::KeywordSelf => NodeKind::SelfValue,
            TokenKind::KeywordNil => NodeKind::Nil,
            TokenKind::KeywordTrue => NodeKind::True,
            TokenKind::KeywordFalse => NodeKind::False,
            kind => {
                let name = self.intern_token(token);
                match kind {
                    TokenKind::InstanceVariable => NodeKind::InstanceVariableRead { name },
                    TokenKind::ClassVariable => NodeKind::ClassVariableRead { name },
                    TokenKind::GlobalVariable => NodeKind::GlobalVariableRead { name },
                    TokenKind::Constant => NodeKind::ConstantRead { name },
                    _ => match self.scopes.find(name) {
                        Some(depth) => NodeKind::LocalVariableRead { name, depth },
                        None => {
                            return self.node_with_flags(
                                NodeKind::Call {
                                    receiver: None,
                                    name,
                                    arguments: None,
                                    block: None,
                                },
                                token.span,
                                NodeFlags::VARIABLE_CALL,
                            )
                        }
                    },
                }
            }
        };
        self.node(kind, token.span)
    }

    /// The method name after `recv.`; the lexer reads it as a name even if
    /// it is a keyword or operator.
    fn parse_def_name_after_receiver(&mut self, receiver: NodeId) -> (Option<NodeId>, ConstantId, Span) {
        if !self.at(TokenKind::Dot) && !self.at(TokenKind::ColonColon) {
            self.error(self.current.span, DiagnosticId::DefReceiver);
            return (Some(receiver), self.intern(b""), Span::point(self.previous.span.end));
        }
        self.lexer.set_state(LexState::FNAME);
        self.advance();
        let token = self.current;
        if is_method_name(token.kind) {
            self.advance();
            (Some(receiver), self.intern_token(token), token.span)
        } else {
            self.error(token.span, DiagnosticId::DefNameAfterReceiver);
            (Some(receiver), self.intern(b""), Span::point(token.span.start))
        }
    }

    // ─── class / module ───

    pub(crate) fn parse_class(&mut self) -> NodeId {
        let keyword = self.current;
        self.advance();
        if self.at(TokenKind::LessLess) {
            return self.parse_singleton_class(keyword.span.start);
        }
        if self.context.contains(ParseContext::DEF) {
            self.error(keyword.span, DiagnosticId::ClassInMethod);
        }
        let (constant_path, name) = self.parse_namespace_path(DiagnosticId::ClassName);
        let superclass = self
            .eat(TokenKind::Less)
            .then(|| self.parse_expression(bp::INDEX, false, DiagnosticId::ClassSuperclass));
        if !self.at_any(TERMINATORS) && !self.at(TokenKind::KeywordEnd) {
            self.error(Span::point(self.previous.span.end), DiagnosticId::ClassUnexpectedEnd);
        }

        self.scopes.push(ScopeKind::Class);
        let body = self.with_context(
            ParseContext::CLASS,
            ParseContext::DEF | ParseContext::RESCUE | ParseContext::NO_DO_BLOCK,
            |p| p.parse_body(keyword.span.start, context::CLASS),
        );
        self.expect(TokenKind::KeywordEnd, DiagnosticId::ClassTerm);
        let frame = self.scopes.pop();
        let locals = self.ast.alloc_locals(frame.locals());
        let span = self.span_from(keyword.span.start);
        self.node(
            NodeKind::Class {
                locals,
                constant_path,
                superclass,
                body,
                name,
            },
            span,
        )
    }

    /// `class << expr`.
    fn parse_singleton_class(&mut self, start: u32) -> NodeId {
        self.advance();
        let expression = self.parse_expression(bp::NOT + 1, false, DiagnosticId::ExpectExpressionAfterLessLess);
        self.scopes.push(ScopeKind::Class);
        let body = self.with_context(
            ParseContext::CLASS,
            ParseContext::DEF | ParseContext::RESCUE | ParseContext::NO_DO_BLOCK,
            |p| p.parse_body(start, context::SINGLETON_CLASS),
        );
        self.expect(TokenKind::KeywordEnd, DiagnosticId::ClassTerm);
        let frame = self.scopes.pop();
        let locals = self.ast.alloc_locals(frame.locals());
        let span = self.span_from(start);
        self.node(
            NodeKind::SingletonClass {
                locals,
                expression,
                body,
            },
            span,
        )
    }

    pub(crate) fn parse_module(&mut self) -> NodeId {
        let keyword = self.current;
        self.advance();
        if self.context.contains(ParseContext::DEF) {
            self.error(keyword.span, DiagnosticId::ModuleInMethod);
        }
        let (constant_path, name) = self.parse_namespace_path(DiagnosticId::ModuleName);

        self.scopes.push(ScopeKind::Class);
        let body = self.with_context(
            ParseContext::CLASS,
            ParseContext::DEF | ParseContext::RESCUE | ParseContext::NO_DO_BLOCK,
            |p| p.parse_body(keyword.span.start, context::MODULE),
        );
        self.expect(TokenKind::KeywordEnd, DiagnosticId::ModuleTerm);
        let frame = self.scopes.pop();
        let locals = self.ast.alloc_locals(frame.locals());
        let span = self.span_from(keyword.span.start);
        self.node(
            NodeKind::Module {
                locals,
                constant_path,
                body,
                name,
            },
            span,
        )
    }

    /// `Name`, `Outer::Name` or `::Name` after `class` or `module`, and the
    /// last segment's name.
    fn parse_namespace_path(&mut self, id: DiagnosticId) -> (NodeId, ConstantId) {
        let path = self.parse_expression(bp::INDEX, false, id);
        match self.kind(path) {
            NodeKind::ConstantRead { name } | NodeKind::ConstantPath { name, .. } => (path, name),
            NodeKind::Missing => (path, self.intern(b"")),
            _ => {
                self.error(self.span(path), id);
                (path, self.intern(b""))
            }
        }
    }

    // ─── alias / undef ───

    pub(crate) fn parse_alias(&mut self) -> NodeId {
        let keyword = self.current;
        self.advance();
        if matches!(
            self.current.kind,
            TokenKind::GlobalVariable | TokenKind::BackReference | TokenKind::NthReference
        ) {
            let new_name = self.global_name();
            let old_name = if matches!(
                self.current.kind,
                TokenKind::GlobalVariable | TokenKind::BackReference | TokenKind::NthReference
            ) {
                self.global_name()
            } else {
                self.error(self.current.span, DiagnosticId::AliasArgument);
                self.missing()
            };
            let span = self.span_from(keyword.span.start);
            return self.node(NodeKind::AliasGlobal { new_name, old_name }, span);
        }

        let new_name = self.parse_method_name_symbol(DiagnosticId::AliasArgument, true);
        let old_name = self.parse_method_name_symbol(DiagnosticId::AliasArgument, false);
        let span = self.span_from(keyword.span.start);
        self.node(NodeKind::Alias { new_name, old_name }, span)
    }

    fn global_name(&mut self) -> NodeId {
        let token = self.current;
        self.advance();
        let name = self.intern_token(token);
        let kind = match token.kind {
            TokenKind::BackReference => NodeKind::BackReferenceRead { name },
            TokenKind::NthReference => {
                let number = self.text(token)[1..].iter().fold(0u32, |number, &digit| {
                    number.saturating_mul(10).saturating_add(u32::from(digit - b'0'))
                });
                NodeKind::NumberedReferenceRead { number }
            }
            _ => NodeKind::GlobalVariableRead { name },
        };
        self.node(kind, token.span)
    }

    /// A method name given as a bare word or a symbol. With `another_name`
    /// the token after it is read in method-name state.
    fn parse_method_name_symbol(&mut self, id: DiagnosticId, another_name: bool) -> NodeId {
        let token = self.current;
        let next_state = another_name.then_some(LexState::FNAME | LexState::FITEM);
        if token.kind == TokenKind::SymbolBegin {
            return self.parse_symbol(next_state);
        }
        if !is_method_name(token.kind) {
            self.error(token.span, id);
            return self.missing();
        }
        if let Some(state) = next_state {
            self.lexer.set_state(state);
        }
        self.advance();
        let text = self.text(token);
        let flags = self.symbol_flags(text, false, false);
        let value = self.ast.alloc_string(text);
        self.node_with_flags(NodeKind::Symbol { value }, token.span, flags)
    }

    pub(crate) fn parse_undef(&mut self) -> NodeId {
        let keyword = self.current;
        self.advance();
        let mut names: SmallVec<[NodeId; 4]> = SmallVec::new();
        loop {
            names.push(self.parse_method_name_symbol(DiagnosticId::UndefArgument, false));
            if !self.at(TokenKind::Comma) {
                break;
            }
            self.lexer.set_state(LexState::FNAME | LexState::FITEM);
            self.advance();
        }
        let names = self.ast.alloc_list(&names);
        let span = self.span_from(keyword.span.start);
        self.node(NodeKind::Undef { names }, span)
    }

    // ─── BEGIN / END ───

    /// `BEGIN { ... }` runs before the program and is only allowed at the
    /// top level; `END { ... }` runs at exit.
    pub(crate) fn parse_execution_block(&mut self) -> NodeId {
        let keyword = self.current;
        self.advance();
        let begin = keyword.kind == TokenKind::KeywordBeginUpcase;
        if begin && !self.at_top_level() {
            self.error(keyword.span, DiagnosticId::BeginUpcaseToplevel);
        }
        if !begin && self.context.contains(ParseContext::DEF) {
            self.warn(keyword.span, DiagnosticId::EndInMethod);
        }
        let (brace, term) = if begin {
            (DiagnosticId::BeginUpcaseBrace, DiagnosticId::BeginUpcaseTerm)
        } else {
            (DiagnosticId::EndUpcaseBrace, DiagnosticId::EndUpcaseTerm)
        };
        let statements = if self.expect(TokenKind::BraceLeft, brace) {
            let statements = self.parse_statements(context::PRE_POST_EXECUTION);
            self.expect(TokenKind::BraceRight, term);
            statements
        } else {
            None
        };
        let span = self.span_from(keyword.span.start);
        let kind = if begin {
            NodeKind::PreExecution { statements }
        } else {
            NodeKind::PostExecution { statements }
        };
        self.node(kind, span)
    }
}

#[cfg(test)]
mod tests;
