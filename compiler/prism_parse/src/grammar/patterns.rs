//! Pattern matching: `case ... in`, `expr => pattern` and `expr in pattern`.
//!
//! Identifiers in a pattern bind locals; `^name` pins an existing value.
//! At the top of an `in` clause the brackets of an array pattern and the
//! braces of a hash pattern may be left out.

use super::bp;
use crate::context;
use crate::recovery::EXPRESSION_START;
use crate::static_literals::StaticLiterals;
use crate::Parser;
use prism_diagnostic::DiagnosticId;
use prism_ir::{NodeFlags, NodeId, NodeKind, Span};
use prism_lexer::{Token, TokenKind};
use smallvec::SmallVec;

/// Tokens after which a hash pattern key has no value pattern.
fn ends_pattern_element(kind: TokenKind) -> bool {
    use TokenKind as T;
    matches!(
        kind,
        T::Comma
            | T::BraceRight
            | T::ParenthesisRight
            | T::BracketRight
            | T::Newline
            | T::Semicolon
            | T::KeywordThen
            | T::KeywordIfModifier
            | T::KeywordUnlessModifier
            | T::KeywordAnd
            | T::KeywordOr
            | T::Eof
    )
}

fn starts_hash_pattern(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Label | TokenKind::UStarStar | TokenKind::StarStar)
}

impl Parser<'_> {
    /// `value => pattern` or `value in pattern`.
    pub(crate) fn parse_match_operator(&mut self, value: NodeId) -> NodeId {
        let operator = self.current.kind;
        self.advance();
        let (id, required) = if operator == TokenKind::EqualGreater {
            (DiagnosticId::PatternExpressionAfterHrocket, true)
        } else {
            (DiagnosticId::PatternExpressionAfterIn, false)
        };
        let pattern = self.parse_pattern(id, false);
        let span = self.span(value).merge(self.span(pattern));
        let kind = if required {
            NodeKind::MatchRequired { value, pattern }
        } else {
            NodeKind::MatchPredicate { value, pattern }
        };
        self.node(kind, span)
    }

    /// `case predicate in ... end`; the current token is the first `in`.
    pub(crate) fn parse_case_in(&mut self, start: u32, predicate: Option<NodeId>) -> NodeId {
        if predicate.is_none() {
            self.error(Span::new(start, start + 4), DiagnosticId::CaseMatchMissingPredicate);
        }
        let mut conditions: SmallVec<[NodeId; 8]> = SmallVec::new();
        while self.at(TokenKind::KeywordIn) {
            let clause_start = self.current.span.start;
            self.advance();
            let mut pattern = self.parse_pattern(DiagnosticId::PatternExpressionAfterIn, true);
            if matches!(
                self.current.kind,
                TokenKind::KeywordIfModifier | TokenKind::KeywordUnlessModifier
            ) {
                pattern = self.parse_pattern_guard(pattern);
            }
            self.parse_separator(TokenKind::KeywordThen, DiagnosticId::ConditionalPredicateTerm);
            let statements = self.parse_statements(context::IN);
            let span = self.span_from(clause_start);
            conditions.push(self.node(NodeKind::In { pattern, statements }, span));
        }
        let else_clause = self
            .at(TokenKind::KeywordElse)
            .then(|| self.parse_else(context::CASE_ELSE));
        self.expect(TokenKind::KeywordEnd, DiagnosticId::CaseTerm);
        let conditions = self.ast.alloc_list(&conditions);
        let span = self.span_from(start);
        self.node(
            NodeKind::CaseMatch {
                predicate,
                conditions,
                else_clause,
            },
            span,
        )
    }

    /// `in pattern if guard` wraps the pattern in a conditional.
    fn parse_pattern_guard(&mut self, pattern: NodeId) -> NodeId {
        let unless = self.at(TokenKind::KeywordUnlessModifier);
        self.advance();
        let predicate = self.parse_expression(bp::MODIFIER + 1, false, DiagnosticId::ConditionalIfPredicate);
        let predicate = self.conditional_predicate(predicate);
        let statements = Some(self.single_statement(pattern));
        let span = self.span(pattern).merge(self.span(predicate));
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

    /// A whole pattern. With `top` an unbracketed list or unbraced hash is
    /// accepted.
    fn parse_pattern(&mut self, id: DiagnosticId, top: bool) -> NodeId {
        let start = self.current.span.start;
        if starts_hash_pattern(self.current.kind) {
            return self.parse_hash_pattern_body(None, None, start);
        }
        let first = if matches!(self.current.kind, TokenKind::UStar | TokenKind::Star) {
            self.parse_rest_pattern()
        } else {
            self.parse_pattern_alternatives(id)
        };
        let splat = matches!(self.kind(first), NodeKind::Splat { .. });
        if (top && self.at(TokenKind::Comma)) || splat {
            return self.parse_array_pattern_body(None, Some(first), None, start);
        }
        first
    }

    /// Alternatives joined by `|`, optionally captured with `=> name`.
    fn parse_pattern_alternatives(&mut self, id: DiagnosticId) -> NodeId {
        let mut node = self.parse_pattern_primitive(id);
        while self.eat(TokenKind::Pipe) {
            let right = self.parse_pattern_primitive(DiagnosticId::PatternExpressionAfterPipe);
            let span = self.span(node).merge(self.span(right));
            node = self.node(NodeKind::AlternationPattern { left: node, right }, span);
        }
        while self.eat(TokenKind::EqualGreater) {
            let target = if self.at(TokenKind::Identifier) {
                self.pattern_capture()
            } else {
                self.error(self.current.span, DiagnosticId::PatternIdentAfterHrocket);
                self.missing()
            };
            let span = self.span(node).merge(self.span(target));
            node = self.node(NodeKind::CapturePattern { value: node, target }, span);
        }
        node
    }

    fn parse_pattern_primitive(&mut self, id: DiagnosticId) -> NodeId {
        use TokenKind as T;
        let token = self.current;
        match token.kind {
            T::BracketLeftArray | T::BracketLeft => {
                self.advance();
                self.parse_bracketed_pattern(None, token.span.start, T::BracketRight)
            }
            T::BraceLeft => {
                self.advance();
                self.skip_newlines();
                self.parse_hash_pattern_body(None, Some(T::BraceRight), token.span.start)
            }
            T::ParenthesisLeft | T::ParenthesisLeftParentheses => {
                self.advance();
                self.skip_newlines();
                let inner = self.parse_pattern(DiagnosticId::PatternExpressionAfterParen, false);
                self.skip_newlines();
                self.expect(T::ParenthesisRight, DiagnosticId::PatternTermParen);
                inner
            }
            T::Caret => self.parse_pin(),
            T::Identifier => self.pattern_capture(),
            T::Constant | T::UColonColon => self.parse_constant_pattern(),
            T::UDotDot | T::UDotDotDot => {
                self.advance();
                let right = self.parse_pattern_value(DiagnosticId::PatternExpressionAfterRange);
                self.range_pattern(None, Some(right), token)
            }
            _ => {
                let value = self.parse_pattern_value(id);
                if matches!(self.current.kind, T::DotDot | T::DotDotDot) {
                    let operator = self.current;
                    self.advance();
                    let right = self.at_pattern_value().then(|| {
                        self.parse_pattern_value(DiagnosticId::PatternExpressionAfterRange)
                    });
                    return self.range_pattern(Some(value), right, operator);
                }
                value
            }
        }
    }

    /// A literal or other expression matched with `===`. Stops before `|`,
    /// `=>` and ranges, which have pattern meanings.
    fn parse_pattern_value(&mut self, id: DiagnosticId) -> NodeId {
        self.parse_expression(bp::BITWISE_OR + 1, false, id)
    }

    fn at_pattern_value(&self) -> bool {
        self.at_any(EXPRESSION_START) && !ends_pattern_element(self.current.kind)
    }

    fn range_pattern(&mut self, left: Option<NodeId>, right: Option<NodeId>, operator: Token) -> NodeId {
        let start = left.map_or(operator.span.start, |left| self.span(left).start);
        let end = right.map_or(operator.span.end, |right| self.span(right).end);
        let mut flags = NodeFlags::STATIC_LITERAL;
        if matches!(operator.kind, TokenKind::DotDotDot | TokenKind::UDotDotDot) {
            flags |= NodeFlags::EXCLUDE_END;
        }
        self.node_with_flags(NodeKind::Range { left, right }, Span::new(start, end), flags)
    }

    /// A bare identifier binds a local.
    fn pattern_capture(&mut self) -> NodeId {
        let token = self.current;
        self.advance();
        let name = self.intern_token(token);
        self.check_numbered_reserved(name, token.span);
        let depth = match self.scopes.find(name) {
            Some(depth) => depth,
            None => {
                self.scopes.add_local(name);
                0
            }
        };
        self.node(NodeKind::LocalVariableTarget { name, depth }, token.span)
    }

    /// `^name`, `^@ivar` or `^(expression)`.
    fn parse_pin(&mut self) -> NodeId {
        use TokenKind as T;
        let caret = self.current;
        self.advance();
        let token = self.current;
        match token.kind {
            T::ParenthesisLeft | T::ParenthesisLeftParentheses => {
                self.advance();
                self.skip_newlines();
                let expression = self.parse_expression(bp::STATEMENT, true, DiagnosticId::PatternExpressionAfterPin);
                self.skip_newlines();
                self.expect(T::ParenthesisRight, DiagnosticId::PatternTermParen);
                let span = self.span_from(caret.span.start);
                self.node(NodeKind::PinnedExpression { expression }, span)
            }
            T::Identifier => {
                self.advance();
                let name = self.intern_token(token);
                let depth = self.scopes.find(name).unwrap_or(0);
                let variable = self.node(NodeKind::LocalVariableRead { name, depth }, token.span);
                self.pinned_variable(caret.span.start, variable)
            }
            T::InstanceVariable => {
                let variable = self.variable(|name| NodeKind::InstanceVariableRead { name });
                self.pinned_variable(caret.span.start, variable)
            }
            T::ClassVariable => {
                let variable = self.variable(|name| NodeKind::ClassVariableRead { name });
                self.pinned_variable(caret.span.start, variable)
            }
            T::GlobalVariable => {
                let variable = self.variable(|name| NodeKind::GlobalVariableRead { name });
                self.pinned_variable(caret.span.start, variable)
            }
            _ => {
                self.error(Span::point(caret.span.end), DiagnosticId::PatternExpressionAfterPin);
                let variable = self.missing();
                self.pinned_variable(caret.span.start, variable)
            }
        }
    }

    fn pinned_variable(&mut self, start: u32, variable: NodeId) -> NodeId {
        let span = self.span_from(start);
        self.node(NodeKind::PinnedVariable { variable }, span)
    }

    /// `Const`, `A::B`, optionally followed by `(...)` or `[...]`.
    fn parse_constant_pattern(&mut self) -> NodeId {
        let start = self.current.span.start;
        let mut constant = if self.eat(TokenKind::UColonColon) {
            self.constant_path(None, start)
        } else {
            self.variable(|name| NodeKind::ConstantRead { name })
        };
        while self.eat(TokenKind::ColonColon) {
            constant = self.constant_path(Some(constant), start);
        }

        match self.current.kind {
            TokenKind::ParenthesisLeft | TokenKind::ParenthesisLeftParentheses if !self.space_before_current() => {
                self.advance();
                self.parse_bracketed_pattern(Some(constant), start, TokenKind::ParenthesisRight)
            }
            TokenKind::BracketLeft if !self.space_before_current() => {
                self.advance();
                self.parse_bracketed_pattern(Some(constant), start, TokenKind::BracketRight)
            }
            _ => constant,
        }
    }

    /// Contents of `[...]` or `Const(...)`: an array, find or hash pattern.
    fn parse_bracketed_pattern(&mut self, constant: Option<NodeId>, start: u32, closer: TokenKind) -> NodeId {
        self.skip_newlines();
        if starts_hash_pattern(self.current.kind) {
            self.parse_hash_pattern_body(constant, Some(closer), start)
        } else {
            self.parse_array_pattern_body(constant, None, Some(closer), start)
        }
    }

    /// `*name` or `*` in an array or find pattern.
    fn parse_rest_pattern(&mut self) -> NodeId {
        let star = self.current;
        self.advance();
        let expression = self.at(TokenKind::Identifier).then(|| self.pattern_capture());
        let span = self.span_from(star.span.start);
        self.node(NodeKind::Splat { expression }, span)
    }

    /// Elements of an array pattern up to `closer` (or the end of the
    /// pattern when unbracketed). Two splats at the ends make a find
    /// pattern.
    fn parse_array_pattern_body(
        &mut self,
        constant: Option<NodeId>,
        first: Option<NodeId>,
        closer: Option<TokenKind>,
        start: u32,
    ) -> NodeId {
        let mut items: SmallVec<[NodeId; 8]> = SmallVec::new();
        let mut trailing_comma = None;
        let mut expect_more = first.is_none();
        if let Some(first) = first {
            items.push(first);
            expect_more = self.eat(TokenKind::Comma);
            if expect_more {
                trailing_comma = Some(self.previous.span);
            }
        }

        while expect_more {
            if closer.is_some() {
                self.skip_newlines();
            }
            if closer.is_some_and(|closer| self.at(closer)) {
                break;
            }
            if closer.is_none() && ends_pattern_element(self.current.kind) {
                break;
            }
            trailing_comma = None;
            let id = if items.is_empty() {
                DiagnosticId::PatternExpressionAfterBracket
            } else {
                DiagnosticId::PatternExpressionAfterComma
            };
            let item = if matches!(self.current.kind, TokenKind::UStar | TokenKind::Star) {
                self.parse_rest_pattern()
            } else {
                self.parse_pattern_alternatives(id)
            };
            items.push(item);
            if !self.eat(TokenKind::Comma) {
                break;
            }
            trailing_comma = Some(self.previous.span);
        }

        if let Some(closer) = closer {
            self.skip_newlines();
            let id = if closer == TokenKind::BracketRight {
                DiagnosticId::PatternTermBracket
            } else {
                DiagnosticId::PatternTermParen
            };
            self.expect(closer, id);
        }
        let span = self.span_from(start);
        self.array_or_find_pattern(constant, &items, trailing_comma, span)
    }

    fn array_or_find_pattern(
        &mut self,
        constant: Option<NodeId>,
        items: &[NodeId],
        trailing_comma: Option<Span>,
        span: Span,
    ) -> NodeId {
        let is_splat = |p: &Self, node: NodeId| matches!(p.kind(node), NodeKind::Splat { .. });
        let splats: SmallVec<[usize; 2]> = items
            .iter()
            .enumerate()
            .filter(|&(_, &item)| is_splat(self, item))
            .map(|(index, _)| index)
            .collect();

        if let [first, last] = splats[..] {
            if first == 0 && last == items.len() - 1 && items.len() >= 3 {
                let requireds = self.ast.alloc_list(&items[1..last]);
                return self.node(
                    NodeKind::FindPattern {
                        constant,
                        left: items[0],
                        requireds,
                        right: items[last],
                    },
                    span,
                );
            }
        }

        let (rest, requireds, posts) = match splats.first() {
            Some(&index) => {
                for &extra in &splats[1..] {
                    self.error(self.span(items[extra]), DiagnosticId::PatternRest);
                }
                let posts: SmallVec<[NodeId; 4]> = items[index + 1..]
                    .iter()
                    .copied()
                    .filter(|&item| !is_splat(self, item))
                    .collect();
                (Some(items[index]), &items[..index], posts)
            }
            None => {
                let rest = trailing_comma.map(|comma| self.node(NodeKind::ImplicitRest, comma));
                (rest, items, SmallVec::new())
            }
        };
        let requireds = self.ast.alloc_list(requireds);
        let posts = self.ast.alloc_list(&posts);
        self.node(
            NodeKind::ArrayPattern {
                constant,
                requireds,
                rest,
                posts,
            },
            span,
        )
    }

    /// Keys of a hash pattern, with an optional `**rest` or `**nil` last.
    fn parse_hash_pattern_body(&mut self, constant: Option<NodeId>, closer: Option<TokenKind>, start: u32) -> NodeId {
        use TokenKind as T;
        let mut elements: SmallVec<[NodeId; 8]> = SmallVec::new();
        let mut rest: Option<NodeId> = None;
        let mut literals = StaticLiterals::new();

        loop {
            if closer.is_some() {
                self.skip_newlines();
            }
            if closer.is_some_and(|closer| self.at(closer)) {
                break;
            }
            let token = self.current;
            match token.kind {
                T::UStarStar | T::StarStar => {
                    self.advance();
                    let node = if self.at(T::KeywordNil) {
                        self.advance();
                        let span = self.span_from(token.span.start);
                        self.node(NodeKind::NoKeywordsParameter, span)
                    } else {
                        let value = self.at(T::Identifier).then(|| self.pattern_capture());
                        let span = self.span_from(token.span.start);
                        self.node(NodeKind::AssocSplat { value }, span)
                    };
                    if rest.is_some() {
                        self.error(self.span(node), DiagnosticId::PatternExpressionAfterRest);
                    } else {
                        rest = Some(node);
                    }
                }
                T::Label | T::StringBegin => {
                    if rest.is_some() {
                        self.error(token.span, DiagnosticId::PatternExpressionAfterRest);
                    }
                    elements.push(self.parse_hash_pattern_pair(&mut literals));
                }
                _ => {
                    let id = if elements.is_empty() && rest.is_none() {
                        DiagnosticId::PatternHashKey
                    } else {
                        DiagnosticId::PatternLabelAfterComma
                    };
                    self.error(token.span, id);
                    break;
                }
            }
            if !self.eat(T::Comma) {
                break;
            }
            if closer.is_none() && ends_pattern_element(self.current.kind) {
                break;
            }
        }

        if let Some(closer) = closer {
            self.skip_newlines();
            let id = if closer == T::BraceRight {
                DiagnosticId::PatternTermBrace
            } else if closer == T::BracketRight {
                DiagnosticId::PatternTermBracket
            } else {
                DiagnosticId::PatternTermParen
            };
            self.expect(closer, id);
        }
        let elements = self.ast.alloc_list(&elements);
        let span = self.span_from(start);
        self.node(
            NodeKind::HashPattern {
                constant,
                elements,
                rest,
            },
            span,
        )
    }

    /// `key: pattern`, or `key:` alone, which binds a local named `key`.
    /// A key may appear once per pattern.
    fn parse_hash_pattern_pair(&mut self, literals: &mut StaticLiterals) -> NodeId {
        let token = self.current;
        let key = if token.kind == TokenKind::Label {
            self.advance();
            let text = self.text(token);
            let name = text.strip_suffix(b":").unwrap_or(text);
            let flags = self.symbol_flags(name, false, false);
            let value = self.ast.alloc_string(name);
            self.node_with_flags(NodeKind::Symbol { value }, token.span, flags)
        } else {
            let key = self.parse_string_literal();
            if self.previous.kind != TokenKind::LabelEnd {
                self.error(self.span(key), DiagnosticId::PatternHashKeyLabel);
            }
            key
        };
        if literals.add(&self.literal_context(), key).is_some() {
            self.error(self.span(key), DiagnosticId::PatternHashKeyDuplicate);
        }

        let value = if ends_pattern_element(self.current.kind) {
            let target = self.implicit_capture(key);
            let span = self.span(key);
            self.node(NodeKind::Implicit { value: target }, span)
        } else {
            self.parse_pattern_alternatives(DiagnosticId::PatternExpressionAfterKey)
        };
        let span = self.span(key).merge(self.span(value));
        self.node(NodeKind::Assoc { key, value }, span)
    }

    /// The local bound by a key without a value pattern.
    fn implicit_capture(&mut self, key: NodeId) -> NodeId {
        let key_span = self.span(key);
        let name_bytes = match self.kind(key) {
            NodeKind::Symbol { value } => self.ast.string(value).to_vec(),
            _ => Vec::new(),
        };
        let name = self.intern(&name_bytes);
        if !name_bytes.is_empty() {
            self.check_numbered_reserved(name, key_span);
            if self.scopes.find(name).is_none() {
                self.scopes.add_local(name);
            }
        }
        let depth = self.scopes.find(name).unwrap_or(0);
        self.node(NodeKind::LocalVariableTarget { name, depth }, key_span)
    }
}

#[cfg(test)]
mod tests;
