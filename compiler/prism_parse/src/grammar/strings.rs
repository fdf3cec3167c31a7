//! Strings, symbols, character literals, regexps, command strings,
//! heredocs and `%w`/`%i` lists.
//!
//! The lexer hands over raw content tokens between an opener and a closer.
//! Here they are unescaped according to the opener and assembled into
//! either a plain literal node or an interpolated node with parts.

use crate::context;
use crate::options::FrozenStringLiteral;
use crate::Parser;
use prism_diagnostic::DiagnosticId;
use prism_ir::{NodeFlags, NodeId, NodeKind, Span};
use prism_lexer::unescape::{unescape, Delimiter, UnescapeContext, UnescapeMode, Unescaped};
use prism_lexer::{LexState, Token, TokenKind};
use smallvec::SmallVec;

const TAB_WIDTH: usize = 8;

/// What a sequence of content becomes once assembled.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum LiteralKind {
    String,
    XString,
    Symbol,
    Regexp,
}

/// One piece of literal content: unescaped text or an interpolation.
enum Piece {
    Text { bytes: Unescaped, span: Span },
    Embedded(NodeId),
}

/// A heredoc body token before dedenting.
enum HeredocPart {
    /// Content; `line_start` when it begins a source line.
    Line { token: Token, line_start: bool },
    Embedded(NodeId),
}

/// Closing delimiter for an opening byte; brackets pair up.
fn delimiter_for(open: u8) -> Delimiter {
    match open {
        b'(' => Delimiter::new(b')', Some(b'(')),
        b'[' => Delimiter::new(b']', Some(b'[')),
        b'{' => Delimiter::new(b'}', Some(b'{')),
        b'<' => Delimiter::new(b'>', Some(b'<')),
        other => Delimiter::new(other, None),
    }
}

/// Escape processing for a string or symbol opened by `opener`.
fn quoted_mode(opener: &[u8]) -> UnescapeMode {
    let last = opener.last().copied().unwrap_or(b'"');
    match opener {
        [b'<', ..] => UnescapeMode::Minimal(Delimiter::new(b'\n', None)),
        [b'%', b'q' | b's', _] | [b':', b'\''] | [b'\''] => UnescapeMode::Minimal(delimiter_for(last)),
        _ => UnescapeMode::All,
    }
}

/// Columns of leading whitespace, with tabs advancing to the next stop.
fn indentation(line: &[u8]) -> usize {
    let mut column = 0;
    for &byte in line {
        match byte {
            b' ' => column += 1,
            b'\t' => column = (column / TAB_WIDTH + 1) * TAB_WIDTH,
            _ => break,
        }
    }
    column
}

/// A line of only whitespace ending in a newline.
fn is_blank_line(line: &[u8]) -> bool {
    line.ends_with(b"\n") && line.iter().all(|&b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
}

/// Remove up to `width` columns of leading whitespace. A tab that would
/// pass `width` is kept.
fn dedent(line: &[u8], width: usize) -> &[u8] {
    let mut column = 0;
    let mut index = 0;
    while index < line.len() && column < width {
        match line[index] {
            b' ' => column += 1,
            b'\t' => {
                let next = (column / TAB_WIDTH + 1) * TAB_WIDTH;
                if next > width {
                    break;
                }
                column = next;
            }
            _ => break,
        }
        index += 1;
    }
    &line[index..]
}

fn encoding_flags(bytes: &Unescaped) -> NodeFlags {
    let mut flags = NodeFlags::empty();
    if bytes.forced_utf8 {
        flags |= NodeFlags::FORCED_UTF8_ENCODING;
    }
    if bytes.forced_binary {
        flags |= NodeFlags::FORCED_BINARY_ENCODING;
    }
    flags
}

impl Parser<'_> {
    /// `FROZEN` or `MUTABLE` for a plain string, from the magic comment or
    /// else the option.
    pub(crate) fn string_literal_flags(&self) -> NodeFlags {
        let frozen = self.lexer.frozen_string_literal().or(match self.options.frozen_string_literal {
            FrozenStringLiteral::Enabled => Some(true),
            FrozenStringLiteral::Disabled => Some(false),
            FrozenStringLiteral::Unset => None,
        });
        match frozen {
            Some(true) => NodeFlags::FROZEN,
            Some(false) => NodeFlags::MUTABLE,
            None => NodeFlags::empty(),
        }
    }

    /// Flags of a symbol with the given unescaped value.
    pub(crate) fn symbol_flags(&self, value: &[u8], forced_utf8: bool, forced_binary: bool) -> NodeFlags {
        let encoding = if forced_utf8 {
            NodeFlags::FORCED_UTF8_ENCODING
        } else if forced_binary {
            NodeFlags::FORCED_BINARY_ENCODING
        } else if value.is_ascii() {
            NodeFlags::FORCED_US_ASCII_ENCODING
        } else {
            NodeFlags::empty()
        };
        NodeFlags::STATIC_LITERAL | encoding
    }

    /// Any literal whose opener is the current token.
    pub(crate) fn parse_string_literal(&mut self) -> NodeId {
        use TokenKind as T;
        match self.current.kind {
            T::StringBegin | T::CharacterLiteral | T::HeredocStart => self.parse_strings(),
            T::SymbolBegin => self.parse_symbol(None),
            T::RegexpBegin => self.parse_regexp(),
            T::Backtick | T::PercentLowerX => {
                let opener = self.current;
                self.advance();
                let pieces = self.parse_pieces(UnescapeMode::All);
                self.expect(T::StringEnd, DiagnosticId::XstringTerm);
                let span = self.span_from(opener.span.start);
                self.finish_literal(LiteralKind::XString, pieces, span, NodeFlags::empty())
            }
            _ => self.parse_list(),
        }
    }

    fn unescape_token(&mut self, token: Token, mode: UnescapeMode, single_character: bool) -> Unescaped {
        let text = self.text(token);
        self.unescape_bytes(text, token.span.start, mode, single_character)
    }

    fn unescape_bytes(&mut self, text: &[u8], offset: u32, mode: UnescapeMode, single_character: bool) -> Unescaped {
        let mut ctx = UnescapeContext {
            encoding: self.lexer.encoding(),
            offset,
            single_character,
            errors: &mut self.errors,
        };
        unescape(text, mode, &mut ctx)
    }

    /// Content, `#{...}` and `#@var` pieces up to the closing token, which
    /// is left current.
    fn parse_pieces(&mut self, mode: UnescapeMode) -> SmallVec<[Piece; 4]> {
        let mut pieces = SmallVec::new();
        loop {
            match self.current.kind {
                TokenKind::StringContent => {
                    let token = self.current;
                    self.advance();
                    let bytes = self.unescape_token(token, mode, false);
                    pieces.push(Piece::Text { bytes, span: token.span });
                }
                TokenKind::EmbExprBegin => pieces.push(Piece::Embedded(self.parse_embedded_statements())),
                TokenKind::EmbVar => pieces.push(Piece::Embedded(self.parse_embedded_variable())),
                _ => break,
            }
        }
        pieces
    }

    /// `#{ statements }`.
    fn parse_embedded_statements(&mut self) -> NodeId {
        let start = self.current.span.start;
        self.advance();
        let statements = self.parse_statements(context::EMBEXPR);
        self.expect(TokenKind::EmbExprEnd, DiagnosticId::EmbexprEnd);
        let span = self.span_from(start);
        self.node(NodeKind::EmbeddedStatements { statements }, span)
    }

    /// `#@ivar`, `#@@cvar` or `#$gvar`.
    fn parse_embedded_variable(&mut self) -> NodeId {
        let start = self.current.span.start;
        self.advance();
        let variable = match self.current.kind {
            TokenKind::InstanceVariable => self.variable(|name| NodeKind::InstanceVariableRead { name }),
            TokenKind::ClassVariable => self.variable(|name| NodeKind::ClassVariableRead { name }),
            TokenKind::GlobalVariable => self.variable(|name| NodeKind::GlobalVariableRead { name }),
            TokenKind::BackReference => self.variable(|name| NodeKind::BackReferenceRead { name }),
            _ => {
                self.error(Span::point(self.previous.span.end), DiagnosticId::EmbvarInvalid);
                if self.at(TokenKind::Missing) {
                    self.advance();
                }
                self.missing()
            }
        };
        let span = self.span_from(start);
        self.node(NodeKind::EmbeddedVariable { variable }, span)
    }

    /// Build the node for assembled pieces. Without interpolation the text
    /// is joined into one plain literal.
    fn finish_literal(
        &mut self,
        kind: LiteralKind,
        pieces: SmallVec<[Piece; 4]>,
        span: Span,
        extra: NodeFlags,
    ) -> NodeId {
        if pieces.iter().all(|piece| matches!(piece, Piece::Text { .. })) {
            let mut joined = Unescaped::default();
            for piece in pieces {
                if let Piece::Text { bytes, .. } = piece {
                    joined.bytes.extend_from_slice(&bytes.bytes);
                    joined.forced_utf8 |= bytes.forced_utf8;
                    joined.forced_binary |= bytes.forced_binary;
                }
            }
            return self.plain_literal(kind, joined, span, extra);
        }

        let mut parts: SmallVec<[NodeId; 4]> = SmallVec::new();
        for piece in pieces {
            match piece {
                Piece::Text { bytes, span } => {
                    if bytes.bytes.is_empty() {
                        continue;
                    }
                    let flags = NodeFlags::FROZEN | encoding_flags(&bytes);
                    let content = self.ast.alloc_string(bytes.bytes);
                    parts.push(self.node_with_flags(NodeKind::String { content }, span, flags));
                }
                Piece::Embedded(node) => parts.push(node),
            }
        }
        let parts = self.ast.alloc_list(&parts);
        let node_kind = match kind {
            LiteralKind::String => NodeKind::InterpolatedString { parts },
            LiteralKind::XString => NodeKind::InterpolatedXString { parts },
            LiteralKind::Symbol => NodeKind::InterpolatedSymbol { parts },
            LiteralKind::Regexp => NodeKind::InterpolatedRegularExpression { parts },
        };
        self.node_with_flags(node_kind, span, extra)
    }

    fn plain_literal(&mut self, kind: LiteralKind, bytes: Unescaped, span: Span, extra: NodeFlags) -> NodeId {
        let encoding = encoding_flags(&bytes);
        let (node_kind, flags) = match kind {
            LiteralKind::String => {
                let flags = self.string_literal_flags() | NodeFlags::STATIC_LITERAL | encoding;
                (NodeKind::String { content: self.ast.alloc_string(bytes.bytes) }, flags)
            }
            LiteralKind::XString => (NodeKind::XString { content: self.ast.alloc_string(bytes.bytes) }, encoding),
            LiteralKind::Symbol => {
                let flags = self.symbol_flags(&bytes.bytes, bytes.forced_utf8, bytes.forced_binary);
                (NodeKind::Symbol { value: self.ast.alloc_string(bytes.bytes) }, flags)
            }
            LiteralKind::Regexp => (
                NodeKind::RegularExpression { content: self.ast.alloc_string(bytes.bytes) },
                NodeFlags::STATIC_LITERAL | encoding,
            ),
        };
        self.node_with_flags(node_kind, span, flags | extra)
    }

    // ─── Strings ───

    /// One string, or adjacent strings concatenated: `"a" 'b'`.
    fn parse_strings(&mut self) -> NodeId {
        let start = self.current.span.start;
        let first = self.parse_single_string();
        if self.previous.kind == TokenKind::LabelEnd
            || !matches!(self.current.kind, TokenKind::StringBegin | TokenKind::CharacterLiteral)
        {
            return first;
        }

        let mut parts: SmallVec<[NodeId; 4]> = SmallVec::from_slice(&[first]);
        while matches!(self.current.kind, TokenKind::StringBegin | TokenKind::CharacterLiteral) {
            let part = self.parse_single_string();
            if self.previous.kind == TokenKind::LabelEnd {
                self.error(self.span(part), DiagnosticId::StringConcatenation);
            }
            parts.push(part);
        }
        let parts = self.ast.alloc_list(&parts);
        let span = self.span_from(start);
        self.node(NodeKind::InterpolatedString { parts }, span)
    }

    fn parse_single_string(&mut self) -> NodeId {
        let opener = self.current;
        match opener.kind {
            TokenKind::CharacterLiteral => {
                self.advance();
                let text = self.text(opener);
                let bytes = self.unescape_bytes(&text[1..], opener.span.start + 1, UnescapeMode::All, true);
                self.plain_literal(LiteralKind::String, bytes, opener.span, NodeFlags::empty())
            }
            TokenKind::HeredocStart => self.parse_heredoc(),
            _ => {
                self.advance();
                let mode = quoted_mode(self.text(opener));
                let pieces = self.parse_pieces(mode);
                let interpolated = pieces.iter().any(|piece| matches!(piece, Piece::Embedded(_)));
                if self.at(TokenKind::LabelEnd) {
                    self.advance();
                    let span = self.span_from(opener.span.start);
                    return self.finish_literal(LiteralKind::Symbol, pieces, span, NodeFlags::empty());
                }
                let id = if interpolated {
                    DiagnosticId::StringInterpolatedTerm
                } else {
                    DiagnosticId::StringLiteralTerm
                };
                self.expect(TokenKind::StringEnd, id);
                let span = self.span_from(opener.span.start);
                self.finish_literal(LiteralKind::String, pieces, span, NodeFlags::empty())
            }
        }
    }

    // ─── Heredocs ───

    /// `<<ID` and its body. The node spans the opener; parsing resumes on
    /// the opening line after the body.
    fn parse_heredoc(&mut self) -> NodeId {
        let opener = self.current;
        self.advance();
        let text = self.text(opener);
        let squiggly = text.get(2) == Some(&b'~');
        let quote = text.iter().skip(2).find(|&&b| matches!(b, b'\'' | b'"' | b'`')).copied();
        let mode = if quote == Some(b'\'') {
            UnescapeMode::None
        } else {
            UnescapeMode::All
        };

        let mut body: SmallVec<[HeredocPart; 8]> = SmallVec::new();
        loop {
            match self.current.kind {
                TokenKind::StringContent => {
                    let token = self.current;
                    let start = token.span.start as usize;
                    let line_start = start == 0 || self.source.get(start - 1) == Some(&b'\n');
                    self.advance();
                    body.push(HeredocPart::Line { token, line_start });
                }
                TokenKind::EmbExprBegin => body.push(HeredocPart::Embedded(self.parse_embedded_statements())),
                TokenKind::EmbVar => body.push(HeredocPart::Embedded(self.parse_embedded_variable())),
                _ => break,
            }
        }
        self.expect(TokenKind::HeredocEnd, DiagnosticId::HeredocTerm);

        let width = if squiggly { self.common_indentation(&body) } else { 0 };
        tracing::trace!(parts = body.len(), width, "heredoc assembled");

        let mut pieces: SmallVec<[Piece; 4]> = SmallVec::new();
        for part in body {
            let (token, line_start) = match part {
                HeredocPart::Embedded(node) => {
                    pieces.push(Piece::Embedded(node));
                    continue;
                }
                HeredocPart::Line { token, line_start } => (token, line_start),
            };
            let full = self.text(token);
            let text = if line_start && width > 0 { dedent(full, width) } else { full };
            let skipped = u32::try_from(full.len() - text.len()).unwrap_or(0);
            let bytes = self.unescape_bytes(text, token.span.start + skipped, mode, false);
            pieces.push(Piece::Text { bytes, span: token.span });
        }

        let kind = if quote == Some(b'`') {
            LiteralKind::XString
        } else {
            LiteralKind::String
        };
        self.finish_literal(kind, pieces, opener.span, NodeFlags::empty())
    }

    /// Smallest indentation over the body lines of a `<<~` heredoc.
    /// Blank lines do not count.
    fn common_indentation(&self, body: &[HeredocPart]) -> usize {
        body.iter()
            .filter_map(|part| match *part {
                HeredocPart::Line { token, line_start: true } => Some(self.text(token)),
                _ => None,
            })
            .filter(|line| !is_blank_line(line))
            .map(indentation)
            .min()
            .unwrap_or(0)
    }

    // ─── Symbols ───

    /// `:name`, `:"..."` or `%s(...)`. With `next_state` the token after
    /// the symbol is lexed in that state.
    pub(crate) fn parse_symbol(&mut self, next_state: Option<LexState>) -> NodeId {
        let opener = self.current;
        self.advance();
        let opener_text = self.text(opener);
        if opener_text == b":" {
            return self.parse_bare_symbol(opener, next_state);
        }

        let pieces = self.parse_pieces(quoted_mode(opener_text));
        let interpolated = pieces.iter().any(|piece| matches!(piece, Piece::Embedded(_)));
        let id = if interpolated {
            DiagnosticId::SymbolTermInterpolated
        } else {
            DiagnosticId::SymbolTermDynamic
        };
        if let (Some(state), true) = (next_state, self.at(TokenKind::StringEnd)) {
            self.lexer.set_state(state);
        }
        self.expect(TokenKind::StringEnd, id);
        let span = self.span_from(opener.span.start);
        self.finish_literal(LiteralKind::Symbol, pieces, span, NodeFlags::empty())
    }

    /// `:name`, `:+`, `:@ivar`, `:$0`. The name was lexed as a method name.
    fn parse_bare_symbol(&mut self, opener: Token, next_state: Option<LexState>) -> NodeId {
        use TokenKind as T;
        let token = self.current;
        let valid = super::expr::is_method_name(token.kind)
            || matches!(
                token.kind,
                T::InstanceVariable | T::ClassVariable | T::GlobalVariable | T::BackReference | T::NthReference
            );
        if !valid {
            self.error(Span::point(opener.span.end), DiagnosticId::SymbolInvalid);
            let value = self.ast.alloc_string(&b""[..]);
            return self.node_with_flags(NodeKind::Symbol { value }, opener.span, NodeFlags::STATIC_LITERAL);
        }
        if let Some(state) = next_state {
            self.lexer.set_state(state);
        }
        self.advance();
        let text = self.text(token);
        let flags = self.symbol_flags(text, false, false);
        let value = self.ast.alloc_string(text);
        let span = opener.span.merge(token.span);
        self.node_with_flags(NodeKind::Symbol { value }, span, flags)
    }

    // ─── Regexps ───

    /// `/.../opts` or `%r{...}opts`. Content is kept verbatim.
    fn parse_regexp(&mut self) -> NodeId {
        let opener = self.current;
        self.advance();
        let pieces = self.parse_pieces(UnescapeMode::None);
        let mut options = NodeFlags::empty();
        if self.at(TokenKind::RegexpEnd) {
            let closer = self.current;
            self.advance();
            for &option in self.text(closer).iter().skip(1) {
                if let Some(flag) = NodeFlags::regexp_option(option) {
                    options |= flag;
                }
            }
        } else {
            self.error(Span::point(self.previous.span.end), DiagnosticId::RegexpTerm);
        }
        let span = self.span_from(opener.span.start);
        self.finish_literal(LiteralKind::Regexp, pieces, span, options)
    }

    // ─── Lists ───

    /// `%w[a b]`, `%W[a#{b}]`, `%i[a b]` and `%I[a#{b}]`.
    fn parse_list(&mut self) -> NodeId {
        use TokenKind as T;
        let opener = self.current;
        self.advance();
        let (symbols, element_id, term_id) = match opener.kind {
            T::PercentLowerW => (false, DiagnosticId::ListWLowerElement, DiagnosticId::ListWLowerTerm),
            T::PercentUpperW => (false, DiagnosticId::ListWUpperElement, DiagnosticId::ListWUpperTerm),
            T::PercentLowerI => (true, DiagnosticId::ListILowerElement, DiagnosticId::ListILowerTerm),
            _ => (true, DiagnosticId::ListIUpperElement, DiagnosticId::ListIUpperTerm),
        };
        let opener_text = self.text(opener);
        let interpolation = matches!(opener.kind, T::PercentUpperW | T::PercentUpperI);
        let mode = if interpolation {
            UnescapeMode::All
        } else {
            UnescapeMode::Whitespace(delimiter_for(opener_text.last().copied().unwrap_or(b'(')))
        };
        let kind = if symbols {
            LiteralKind::Symbol
        } else {
            LiteralKind::String
        };

        let mut elements: SmallVec<[NodeId; 8]> = SmallVec::new();
        loop {
            match self.current.kind {
                T::WordsSep => self.advance(),
                T::StringContent | T::EmbExprBegin | T::EmbVar => {
                    let start = self.current.span.start;
                    let pieces = self.parse_pieces(mode);
                    let span = self.span_from(start);
                    elements.push(self.finish_literal(kind, pieces, span, NodeFlags::empty()));
                }
                T::StringEnd | T::Eof => break,
                _ => {
                    self.error(self.current.span, element_id);
                    self.advance();
                }
            }
        }
        self.expect(T::StringEnd, term_id);

        let mut flags = NodeFlags::STATIC_LITERAL;
        if elements
            .iter()
            .any(|&element| !self.ast.flags(element).contains(NodeFlags::STATIC_LITERAL))
        {
            flags.remove(NodeFlags::STATIC_LITERAL);
        }
        let elements = self.ast.alloc_list(&elements);
        let span = self.span_from(opener.span.start);
        self.node_with_flags(NodeKind::Array { elements }, span, flags)
    }
}
