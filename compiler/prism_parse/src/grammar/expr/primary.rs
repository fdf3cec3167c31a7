//! Primary expressions.
//!
//! Literals, variables, identifiers and constants (which may turn out to be
//! method calls), prefix operators, and dispatch to keyword constructs.

use super::bp;
use crate::context::{self, ParseContext};
use crate::recovery::{CLOSERS, COMMAND_ARGUMENT_START, EXPRESSION_START};
use crate::scope::NumberedError;
use crate::static_literals::StaticLiterals;
use crate::Parser;
use prism_diagnostic::DiagnosticId;
use prism_ir::{ConstantId, NodeFlags, NodeId, NodeKind, Span};
use prism_lexer::number::{float_value, integer_radix, integer_value, is_float_text, rational_value};
use prism_lexer::TokenKind;
use prism_lexer_core::chars::Radix;
use smallvec::SmallVec;

/// `_1` through `_9`.
pub(crate) fn numbered_parameter(name: &[u8]) -> Option<u8> {
    match name {
        [b'_', digit @ b'1'..=b'9'] => Some(digit - b'0'),
        _ => None,
    }
}

fn radix_flag(radix: Radix) -> NodeFlags {
    match radix {
        Radix::Binary => NodeFlags::BINARY,
        Radix::Octal => NodeFlags::OCTAL,
        Radix::Decimal => NodeFlags::DECIMAL,
        Radix::Hexadecimal => NodeFlags::HEXADECIMAL,
    }
}

impl Parser<'_> {
    pub(super) fn parse_primary(&mut self, min_bp: u8, command: bool, id: DiagnosticId) -> NodeId {
        use TokenKind as T;
        let token = self.current;
        match token.kind {
            T::Integer | T::Float | T::RationalNumber | T::ImaginaryNumber => {
                self.advance();
                self.numeric(self.text(token), token.span, false)
            }
            T::UMinusNum => self.parse_negative_number(),
            T::Identifier => self.parse_identifier(command),
            T::Constant => self.parse_constant(command),
            T::InstanceVariable => self.variable(|name| NodeKind::InstanceVariableRead { name }),
            T::ClassVariable => self.variable(|name| NodeKind::ClassVariableRead { name }),
            T::GlobalVariable => self.variable(|name| NodeKind::GlobalVariableRead { name }),
            T::BackReference => self.variable(|name| NodeKind::BackReferenceRead { name }),
            T::NthReference => {
                self.advance();
                let number = self.text(token)[1..].iter().fold(0u32, |number, &digit| {
                    number.saturating_mul(10).saturating_add(u32::from(digit - b'0'))
                });
                self.node(NodeKind::NumberedReferenceRead { number }, token.span)
            }
            T::KeywordNil => self.keyword_literal(NodeKind::Nil, NodeFlags::STATIC_LITERAL),
            T::KeywordTrue => self.keyword_literal(NodeKind::True, NodeFlags::STATIC_LITERAL),
            T::KeywordFalse => self.keyword_literal(NodeKind::False, NodeFlags::STATIC_LITERAL),
            T::KeywordSelf => self.keyword_literal(NodeKind::SelfValue, NodeFlags::empty()),
            T::KeywordLine => self.keyword_literal(NodeKind::SourceLine, NodeFlags::STATIC_LITERAL),
            T::KeywordEncoding => {
                self.keyword_literal(NodeKind::SourceEncoding, NodeFlags::STATIC_LITERAL)
            }
            T::KeywordFile => {
                self.advance();
                let filepath = self.ast.alloc_string(self.options.filepath.as_bytes());
                let flags = self.string_literal_flags();
                self.node_with_flags(NodeKind::SourceFile { filepath }, token.span, flags)
            }
            T::StringBegin
            | T::HeredocStart
            | T::CharacterLiteral
            | T::SymbolBegin
            | T::RegexpBegin
            | T::Backtick
            | T::PercentLowerX
            | T::PercentLowerW
            | T::PercentUpperW
            | T::PercentLowerI
            | T::PercentUpperI => self.parse_string_literal(),
            T::BracketLeftArray => self.parse_array(),
            T::BraceLeft => self.parse_hash(),
            T::ParenthesisLeft | T::ParenthesisLeftParentheses => self.parse_parentheses(),
            T::UColonColon => {
                self.advance();
                self.constant_path(None, token.span.start)
            }
            T::UDotDot | T::UDotDotDot => self.parse_range(None, bp::RANGE + 1),
            T::MinusGreater => self.parse_lambda(),
            T::UMinus | T::UPlus | T::Bang | T::Tilde => self.parse_unary(),
            T::KeywordNot => self.parse_not(),
            T::KeywordDefined => self.parse_defined(),
            T::UStar if min_bp <= bp::STATEMENT => self.parse_splat_target(),

            T::KeywordIf => self.parse_if(),
            T::KeywordUnless => self.parse_unless(),
            T::KeywordWhile | T::KeywordUntil => self.parse_loop(),
            T::KeywordFor => self.parse_for(),
            T::KeywordCase => self.parse_case(),
            T::KeywordBegin => self.parse_begin(),
            T::KeywordReturn | T::KeywordBreak | T::KeywordNext => self.parse_jump(),
            T::KeywordRedo => self.keyword_literal(NodeKind::Redo, NodeFlags::empty()),
            T::KeywordRetry => self.parse_retry(),
            T::KeywordYield => self.parse_yield(),
            T::KeywordSuper => self.parse_super(),
            T::KeywordDef => self.parse_def(),
            T::KeywordClass => self.parse_class(),
            T::KeywordModule => self.parse_module(),

            T::KeywordAlias | T::KeywordUndef | T::KeywordBeginUpcase | T::KeywordEndUpcase => {
                if min_bp > bp::STATEMENT {
                    let id = match token.kind {
                        T::KeywordAlias => DiagnosticId::StatementAlias,
                        T::KeywordUndef => DiagnosticId::StatementUndef,
                        T::KeywordBeginUpcase => DiagnosticId::StatementPreexeBegin,
                        _ => DiagnosticId::StatementPostexeEnd,
                    };
                    self.error(token.span, id);
                }
                match token.kind {
                    T::KeywordAlias => self.parse_alias(),
                    T::KeywordUndef => self.parse_undef(),
                    _ => self.parse_execution_block(),
                }
            }

            _ => {
                let span = if matches!(token.kind, T::Eof | T::Newline) {
                    Span::point(self.previous.span.end)
                } else {
                    token.span
                };
                self.error(span, id);
                self.missing()
            }
        }
    }

    fn keyword_literal(&mut self, kind: NodeKind, flags: NodeFlags) -> NodeId {
        let span = self.current.span;
        self.advance();
        self.node_with_flags(kind, span, flags)
    }

    pub(crate) fn variable(&mut self, kind: impl FnOnce(ConstantId) -> NodeKind) -> NodeId {
        let token = self.current;
        self.advance();
        let name = self.intern_token(token);
        self.node(kind(name), token.span)
    }

    // ─── Numbers ───

    /// Node for numeric literal text, with an optional leading minus
    /// already stripped from `text` but included in `span`.
    fn numeric(&mut self, text: &[u8], span: Span, negative: bool) -> NodeId {
        let flags = NodeFlags::STATIC_LITERAL;
        if let Some(inner) = text.strip_suffix(b"i") {
            let inner_span = Span::new(span.start, span.end.saturating_sub(1));
            let numeric = self.numeric(inner, inner_span, negative);
            return self.node_with_flags(NodeKind::Imaginary { numeric }, span, flags);
        }
        if let Some(inner) = text.strip_suffix(b"r") {
            let (mut numerator, denominator) = rational_value(inner);
            if negative {
                numerator = -numerator;
            }
            let numerator = self.ast.alloc_integer(numerator);
            let denominator = self.ast.alloc_integer(denominator);
            let radix = radix_flag(integer_radix(inner).0);
            return self.node_with_flags(
                NodeKind::Rational {
                    numerator,
                    denominator,
                },
                span,
                flags | radix,
            );
        }
        if is_float_text(text) {
            let value = float_value(text);
            let value = if negative { -value } else { value };
            return self.node_with_flags(NodeKind::Float { value }, span, flags);
        }
        let (mut value, radix) = integer_value(text);
        if negative {
            value = -value;
        }
        let value = self.ast.alloc_integer(value);
        self.node_with_flags(NodeKind::Integer { value }, span, flags | radix_flag(radix))
    }

    /// `-1` is a literal, but `-2 ** 2` is `-(2 ** 2)`.
    fn parse_negative_number(&mut self) -> NodeId {
        let minus = self.current;
        self.advance();
        let number = self.current;
        if !matches!(
            number.kind,
            TokenKind::Integer | TokenKind::Float | TokenKind::RationalNumber | TokenKind::ImaginaryNumber
        ) {
            self.error(number.span, DiagnosticId::UnaryReceiverMinus);
            return self.missing();
        }
        self.advance();
        let text = self.text(number);

        if !self.at(TokenKind::StarStar) {
            return self.numeric(text, minus.span.merge(number.span), true);
        }
        let base = self.numeric(text, number.span, false);
        let operator = self.current;
        self.advance();
        let exponent =
            self.parse_expression(bp::EXPONENT, false, DiagnosticId::ExpectExpressionAfterOperator);
        let power_name = self.intern_token(operator);
        let power = self.binary_call(base, power_name, exponent);
        let name = self.intern(b"-@");
        let span = minus.span.merge(self.span(power));
        self.node(
            NodeKind::Call {
                receiver: Some(power),
                name,
                arguments: None,
                block: None,
            },
            span,
        )
    }

    // ─── Names ───

    fn parse_identifier(&mut self, command: bool) -> NodeId {
        let token = self.current;
        self.advance();
        let text = self.text(token);
        let name = self.intern(text);

        if !self.at(TokenKind::ParenthesisLeft) {
            if let Some(number) = numbered_parameter(text) {
                match self.scopes.use_numbered(number) {
                    Ok(()) => {
                        for n in 1..=number {
                            let local = self.intern(format!("_{n}").as_bytes());
                            self.scopes.add_local(local);
                        }
                        return self.node(NodeKind::LocalVariableRead { name, depth: 0 }, token.span);
                    }
                    Err(NumberedError::NotAllowed) => {
                        self.error(token.span, DiagnosticId::NumberedParameterNotAllowed);
                    }
                    Err(NumberedError::OuterScope) => {
                        self.error(token.span, DiagnosticId::NumberedParameterOuterScope);
                    }
                    Err(NumberedError::NotInBlock) => {}
                }
            }
            if let Some(depth) = self.scopes.find(name) {
                if self.circular_parameter == Some(name) {
                    self.error(token.span, DiagnosticId::ParameterCircular);
                }
                return self.node(NodeKind::LocalVariableRead { name, depth }, token.span);
            }
        }

        let vcall = !matches!(text.last(), Some(b'?' | b'!'));
        self.parse_call_rest(None, name, token.span.start, command, vcall, NodeFlags::empty())
    }

    fn parse_constant(&mut self, command: bool) -> NodeId {
        let token = self.current;
        self.advance();
        let name = self.intern_token(token);
        if self.at(TokenKind::ParenthesisLeft) || (command && self.at_command_argument()) {
            return self.parse_call_rest(None, name, token.span.start, command, false, NodeFlags::empty());
        }
        self.node(NodeKind::ConstantRead { name }, token.span)
    }

    /// `::Name` after `parent` (or at the top level when `parent` is `None`).
    /// The `::` has been consumed.
    pub(crate) fn constant_path(&mut self, parent: Option<NodeId>, start: u32) -> NodeId {
        let name = if self.at(TokenKind::Constant) {
            let token = self.current;
            self.advance();
            self.intern_token(token)
        } else {
            self.error(self.current.span, DiagnosticId::ConstantPathColonColonConstant);
            self.intern(b"")
        };
        let span = self.span_from(start);
        self.node(NodeKind::ConstantPath { parent, name }, span)
    }

    /// Whether the current token starts the arguments of a command call.
    pub(crate) fn at_command_argument(&self) -> bool {
        match self.current.kind {
            TokenKind::Ampersand => self.space_before_current() && !self.space_after_current(),
            kind => COMMAND_ARGUMENT_START.contains(kind),
        }
    }

    // ─── Prefix operators ───

    fn parse_unary(&mut self) -> NodeId {
        let operator = self.current;
        self.advance();
        let (method, operand_bp, id): (&[u8], u8, DiagnosticId) = match operator.kind {
            TokenKind::UMinus => (b"-@", bp::UMINUS, DiagnosticId::UnaryReceiverMinus),
            TokenKind::UPlus => (b"+@", bp::UNARY, DiagnosticId::UnaryReceiverPlus),
            TokenKind::Tilde => (b"~", bp::UNARY, DiagnosticId::UnaryReceiverTilde),
            _ => (b"!", bp::UNARY, DiagnosticId::UnaryReceiverBang),
        };
        let receiver = self.parse_expression(operand_bp, false, id);
        let name = self.intern(method);
        let span = operator.span.merge(self.span(receiver));
        self.node(
            NodeKind::Call {
                receiver: Some(receiver),
                name,
                arguments: None,
                block: None,
            },
            span,
        )
    }

    /// `not expr` is a call to `!`.
    fn parse_not(&mut self) -> NodeId {
        let keyword = self.current;
        self.advance();
        let receiver = self.parse_expression(bp::NOT + 1, true, DiagnosticId::NotExpression);
        let name = self.intern(b"!");
        let span = keyword.span.merge(self.span(receiver));
        self.node(
            NodeKind::Call {
                receiver: Some(receiver),
                name,
                arguments: None,
                block: None,
            },
            span,
        )
    }

    fn parse_defined(&mut self) -> NodeId {
        let keyword = self.current;
        self.advance();
        let value = if self.at(TokenKind::ParenthesisLeft) {
            self.advance();
            self.skip_newlines();
            let value = self.with_context(
                ParseContext::empty(),
                ParseContext::NO_DO_BLOCK,
                |p| p.parse_expression(bp::STATEMENT, true, DiagnosticId::DefinedExpression),
            );
            self.skip_newlines();
            self.expect(TokenKind::ParenthesisRight, DiagnosticId::ExpectRparen);
            value
        } else {
            self.parse_expression(bp::DEFINED + 1, false, DiagnosticId::DefinedExpression)
        };
        let span = self.span_from(keyword.span.start);
        self.node(NodeKind::Defined { value }, span)
    }

    /// `*target` at the start of a statement, the rest of a multiple
    /// assignment.
    fn parse_splat_target(&mut self) -> NodeId {
        let star = self.current;
        self.advance();
        let expression = self
            .at_any(EXPRESSION_START)
            .then(|| self.parse_expression(bp::INDEX, false, DiagnosticId::ExpectExpressionAfterStar));
        let span = self.span_from(star.span.start);
        self.node(NodeKind::Splat { expression }, span)
    }

    // ─── Collections ───

    fn parse_array(&mut self) -> NodeId {
        let start = self.current.span.start;
        self.advance();
        let mut elements: SmallVec<[NodeId; 8]> = SmallVec::new();
        let mut assocs: SmallVec<[NodeId; 4]> = SmallVec::new();
        let mut literals = StaticLiterals::new();
        let mut flags = NodeFlags::STATIC_LITERAL;

        self.with_context(ParseContext::empty(), ParseContext::NO_DO_BLOCK, |p| loop {
            p.skip_newlines();
            if p.at(TokenKind::BracketRight) || p.at(TokenKind::Eof) {
                break;
            }
            // `[1, , 2]`
            if p.at(TokenKind::Comma) {
                p.error(p.current.span, DiagnosticId::ArrayElement);
                p.advance();
                continue;
            }
            match p.current.kind {
                TokenKind::Label | TokenKind::UStarStar | TokenKind::StarStar => {
                    assocs.push(p.parse_assoc(&mut literals, None));
                }
                kind => {
                    let element = if matches!(kind, TokenKind::UStar | TokenKind::Star) {
                        flags |= NodeFlags::CONTAINS_SPLAT;
                        p.parse_splat(DiagnosticId::ArrayExpressionAfterStar)
                    } else {
                        p.parse_expression(bp::DEFINED, false, DiagnosticId::ArrayExpression)
                    };
                    if p.at(TokenKind::EqualGreater) || p.previous.kind == TokenKind::LabelEnd {
                        assocs.push(p.parse_assoc(&mut literals, Some(element)));
                    } else {
                        p.flush_keyword_hash(&mut assocs, &mut elements);
                        elements.push(element);
                    }
                }
            }
            p.skip_newlines();
            if p.at(TokenKind::BracketRight) {
                break;
            }
            if !p.eat(TokenKind::Comma) {
                p.error(p.current.span, DiagnosticId::ArraySeparator);
                break;
            }
        });
        self.flush_keyword_hash(&mut assocs, &mut elements);

        self.skip_newlines();
        self.expect(TokenKind::BracketRight, DiagnosticId::ArrayTerm);
        if elements
            .iter()
            .any(|&element| !self.ast.flags(element).contains(NodeFlags::STATIC_LITERAL))
        {
            flags.remove(NodeFlags::STATIC_LITERAL);
        }
        let elements = self.ast.alloc_list(&elements);
        let span = self.span_from(start);
        self.node_with_flags(NodeKind::Array { elements }, span, flags)
    }

    /// `*expr` in an array or argument list. The current token is the star.
    pub(crate) fn parse_splat(&mut self, id: DiagnosticId) -> NodeId {
        let star = self.current;
        self.advance();
        let expression = self
            .at_any(EXPRESSION_START)
            .then(|| self.parse_expression(bp::DEFINED, false, id));
        let span = self.span_from(star.span.start);
        self.node(NodeKind::Splat { expression }, span)
    }

    fn parse_hash(&mut self) -> NodeId {
        let start = self.current.span.start;
        self.advance();
        let mut elements: SmallVec<[NodeId; 8]> = SmallVec::new();
        let mut literals = StaticLiterals::new();

        self.with_context(
            ParseContext::empty(),
            ParseContext::NO_DO_BLOCK,
            |p| loop {
                p.skip_newlines();
                if p.at(TokenKind::BraceRight) || p.at(TokenKind::Eof) {
                    break;
                }
                let element = p.parse_assoc(&mut literals, None);
                elements.push(element);
                p.skip_newlines();
                if !p.eat(TokenKind::Comma) {
                    break;
                }
            },
        );

        self.skip_newlines();
        self.expect(TokenKind::BraceRight, DiagnosticId::HashTerm);
        let elements = self.ast.alloc_list(&elements);
        let span = self.span_from(start);
        self.node(NodeKind::Hash { elements }, span)
    }

    // ─── Parentheses ───

    /// `(stmts)`, `()`, or a parenthesized multiple-assignment target list.
    fn parse_parentheses(&mut self) -> NodeId {
        let start = self.current.span.start;
        self.advance();
        self.skip_terminators();
        if self.eat(TokenKind::ParenthesisRight) {
            let span = self.span_from(start);
            return self.node(NodeKind::Parentheses { body: None }, span);
        }
        if self.at(TokenKind::Eof) || CLOSERS.contains(self.current.kind) {
            self.error(self.current.span, DiagnosticId::ExpectExpressionAfterLparen);
        }

        let body = self.parse_statements(context::PARENTHESES);
        let only = match body.map(|statements| self.kind(statements)) {
            Some(NodeKind::Statements { body: list }) => match self.ast.list(list) {
                [only] => Some(*only),
                _ => None,
            },
            _ => None,
        };
        let target = only.filter(|&only| matches!(self.kind(only), NodeKind::MultiTarget { .. }));
        let id = if target.is_some() {
            DiagnosticId::ExpectRparenAfterMulti
        } else {
            DiagnosticId::ExpectRparen
        };
        self.expect(TokenKind::ParenthesisRight, id);
        let span = self.span_from(start);

        if let Some(target) = target {
            self.ast.set_span(target, span);
            return target;
        }
        self.node(NodeKind::Parentheses { body }, span)
    }
}

#[cfg(test)]
mod tests;
