//! Strings, symbols, character literals, `%` literals, regexps and
//! heredocs.
//!
//! Each literal pushes a [`LexMode`] at its opening token. While that mode
//! is on top the lexer produces content tokens until the terminator, which
//! pops it again. Content tokens hold raw source; escapes are resolved by
//! the parser through [`crate::unescape`].

use super::{width_u32, LexState, Lexer};
use crate::mode::{Delimiters, Heredoc, HeredocIndent, HeredocQuote, LexMode};
use crate::token::{Token, TokenKind};
use crate::unescape;
use prism_diagnostic::{DiagnosticId, FormatArg};
use prism_ir::Span;
use prism_lexer_core::chars;

impl Lexer<'_> {
    pub(super) fn push_string(&mut self, interpolation: bool, label_allowed: bool, opener: u8) {
        self.modes.push(LexMode::String {
            interpolation,
            label_allowed,
            delimiters: Delimiters::for_opener(opener),
        });
    }

    pub(super) fn push_regexp(&mut self, opener: u8) {
        self.modes.push(LexMode::Regexp {
            delimiters: Delimiters::for_opener(opener),
        });
    }

    /// Store updated nesting back into the mode on top.
    fn update_delimiters(&mut self, updated: Delimiters) {
        if let Some(
            LexMode::String { delimiters, .. }
            | LexMode::List { delimiters, .. }
            | LexMode::Regexp { delimiters },
        ) = self.modes.last_mut()
        {
            *delimiters = updated;
        }
    }

    // ─── Openers ───

    /// `%` as an operator or the start of a percent literal.
    pub(super) fn lex_percent(&mut self, peek: u8) -> TokenKind {
        let literal = self.state.is_beg() || (self.spcarg(peek) && peek != b'=');
        if !literal {
            if peek == b'=' {
                self.cursor.advance_n(2);
                self.state = LexState::BEG;
                return TokenKind::PercentEqual;
            }
            self.cursor.advance();
            self.operator_state();
            return TokenKind::Percent;
        }

        self.cursor.advance();
        let (letter, opener) = match (self.cursor.current(), self.cursor.peek()) {
            (letter, opener) if letter.is_ascii_alphabetic() && Self::percent_opener(opener) => {
                (Some(letter), opener)
            }
            (opener, _) if Self::percent_opener(opener) && !self.cursor.is_eof() => (None, opener),
            _ => {
                self.error(
                    Span::new(self.token_start, self.cursor.pos()),
                    DiagnosticId::InvalidPercent,
                );
                self.state = LexState::BEG;
                return TokenKind::Percent;
            }
        };

        let delimiters = Delimiters::for_opener(opener);
        let list = |interpolation| LexMode::List {
            interpolation,
            delimiters,
        };
        let string = |interpolation| LexMode::String {
            interpolation,
            label_allowed: false,
            delimiters,
        };
        let (kind, mode) = match letter {
            None | Some(b'Q') => (TokenKind::StringBegin, string(true)),
            Some(b'q') => (TokenKind::StringBegin, string(false)),
            Some(b'w') => (TokenKind::PercentLowerW, list(false)),
            Some(b'W') => (TokenKind::PercentUpperW, list(true)),
            Some(b'i') => (TokenKind::PercentLowerI, list(false)),
            Some(b'I') => (TokenKind::PercentUpperI, list(true)),
            Some(b's') => (TokenKind::SymbolBegin, string(false)),
            Some(b'r') => (TokenKind::RegexpBegin, LexMode::Regexp { delimiters }),
            Some(b'x') => (TokenKind::PercentLowerX, string(true)),
            Some(_) => {
                self.cursor.advance();
                self.error(
                    Span::new(self.token_start, self.cursor.pos()),
                    DiagnosticId::InvalidPercent,
                );
                self.state = LexState::BEG;
                return TokenKind::Percent;
            }
        };

        self.cursor.advance_n(if letter.is_some() { 2 } else { 1 });
        self.modes.push(mode);
        kind
    }

    fn percent_opener(b: u8) -> bool {
        b.is_ascii_punctuation() || b == b' '
    }

    /// `?` as the ternary operator or a character literal such as `?a`.
    pub(super) fn lex_question_mark(&mut self) -> TokenKind {
        if self.state.any(LexState::END_ANY) {
            self.cursor.advance();
            self.state = LexState::BEG;
            return TokenKind::QuestionMark;
        }

        self.cursor.advance();
        if self.cursor.is_eof() {
            self.error(
                Span::new(self.token_start, self.cursor.pos()),
                DiagnosticId::IncompleteQuestionMark,
            );
            self.state = LexState::BEG;
            return TokenKind::QuestionMark;
        }

        let rest = self.cursor.rest();
        let byte = rest[0];
        if chars::is_whitespace(byte) {
            self.state = LexState::BEG;
            return TokenKind::QuestionMark;
        }

        if byte == b'\\' {
            let len = unescape::escape_len(rest, 0, self.encoding);
            self.cursor.advance_n(width_u32(len));
            self.state = LexState::END;
            return TokenKind::CharacterLiteral;
        }

        let width = self.encoding.char_width(rest).max(1);
        // `a ?bc : d` is a ternary, not `?b` followed by `c`.
        if (byte.is_ascii_alphanumeric() || byte == b'_')
            && self.encoding.ident_char_width(&rest[width..]) > 0
        {
            self.state = LexState::BEG;
            return TokenKind::QuestionMark;
        }

        self.cursor.advance_n(width_u32(width));
        self.state = LexState::END;
        TokenKind::CharacterLiteral
    }

    // ─── Heredocs ───

    pub(super) fn heredoc_allowed(&self) -> bool {
        use LexState as S;
        !self.state.any(S::DOT | S::CLASS | S::END_ANY)
            && (!self.state.any(S::ARG_ANY) || self.state.any(S::LABELED) || self.space_seen)
    }

    /// `<<ID`, `<<-ID`, `<<~ID` or a quoted identifier, with the cursor just
    /// after `<<`. `None` when no identifier follows.
    pub(super) fn lex_heredoc_start(&mut self) -> Option<Token> {
        let rest = self.cursor.rest();
        let (indent, mut offset) = match rest.first() {
            Some(b'-') => (HeredocIndent::Dash, 1),
            Some(b'~') => (HeredocIndent::Tilde, 1),
            _ => (HeredocIndent::None, 0),
        };

        let base = self.cursor.pos();
        let (quote, ident_start, ident_end, opener_end) = match rest.get(offset) {
            Some(&q @ (b'\'' | b'"' | b'`')) => {
                let quote = match q {
                    b'\'' => HeredocQuote::Single,
                    b'`' => HeredocQuote::Backtick,
                    _ => HeredocQuote::Double,
                };
                let ident = &rest[offset + 1..];
                let close = ident.iter().position(|&b| b == q || b == b'\n');
                match close {
                    Some(len) if ident[len] == q => {
                        let start = base + width_u32(offset + 1);
                        (quote, start, start + width_u32(len), start + width_u32(len) + 1)
                    }
                    _ => {
                        let end = base + width_u32(offset + 1 + close.unwrap_or(ident.len()));
                        self.cursor.set_pos(end);
                        self.error(
                            Span::new(self.token_start, end),
                            DiagnosticId::HeredocIdentifier,
                        );
                        // Read the rest of the line as a plain string.
                        self.push_string(false, false, b'\n');
                        return Some(self.token(TokenKind::StringBegin));
                    }
                }
            }
            _ => {
                if self.encoding.ident_start_width(&rest[offset..]) == 0 {
                    return None;
                }
                let start = offset;
                loop {
                    let width = self.encoding.ident_char_width(&rest[offset..]);
                    if width == 0 {
                        break;
                    }
                    offset += width;
                }
                let ident_start = base + width_u32(start);
                let ident_end = base + width_u32(offset);
                (HeredocQuote::Double, ident_start, ident_end, ident_end)
            }
        };

        let next_start = opener_end;
        let token = Token::new(TokenKind::HeredocStart, Span::new(self.token_start, opener_end));

        let body_start = match self.heredoc_end {
            Some(end) => end,
            None => {
                self.cursor.set_pos(next_start);
                match self.cursor.find(b'\n') {
                    Some(newline) => {
                        self.record_newline(newline);
                        newline + 1
                    }
                    None => self.cursor.source_len(),
                }
            }
        };

        self.modes.push(LexMode::Heredoc(Heredoc {
            ident_start,
            ident_end,
            quote,
            indent,
            next_start,
        }));
        self.cursor.set_pos(body_start);
        self.state = LexState::END;
        tracing::trace!(ident_start, ident_end, body_start, "heredoc body");
        Some(token)
    }

    /// End of the terminator line if the cursor is at one.
    fn heredoc_terminator(&self, heredoc: &Heredoc) -> Option<u32> {
        let pos = self.cursor.pos();
        if !self.at_line_start(pos) {
            return None;
        }
        let mut at = pos as usize;
        if heredoc.indent != HeredocIndent::None {
            at += chars::strspn_inline_whitespace(&self.source[at..]);
        }
        let ident = &self.source[heredoc.ident_start as usize..heredoc.ident_end as usize];
        if !self.source[at..].starts_with(ident) {
            return None;
        }
        at += ident.len();
        match &self.source[at..] {
            [] => Some(width_u32(at)),
            [b'\n', ..] => Some(width_u32(at + 1)),
            [b'\r', b'\n', ..] => Some(width_u32(at + 2)),
            _ => None,
        }
    }

    /// One token of a heredoc body, or its terminator.
    pub(super) fn lex_heredoc(&mut self, heredoc: Heredoc) -> Token {
        self.token_start = self.cursor.pos();

        if let Some(line_end) = self.heredoc_terminator(&heredoc) {
            if line_end > 0 && self.source.get(line_end as usize - 1) == Some(&b'\n') {
                self.record_newline(line_end - 1);
            }
            let token = Token::new(TokenKind::HeredocEnd, Span::new(self.token_start, line_end));
            self.finish_heredoc(&heredoc, line_end);
            return token;
        }

        if self.cursor.is_eof() {
            self.error(
                Span::new(heredoc.ident_start, heredoc.ident_end),
                DiagnosticId::HeredocTerm,
            );
            let token = self.token(TokenKind::HeredocEnd);
            self.finish_heredoc(&heredoc, self.cursor.source_len());
            return token;
        }

        let interpolation = heredoc.interpolation();
        if interpolation {
            if let Some(token) = self.lex_interpolation_start() {
                return token;
            }
        }

        loop {
            if self.cursor.is_eof() {
                break;
            }
            match self.cursor.current() {
                b'\n' => {
                    self.record_newline(self.cursor.pos());
                    self.cursor.advance();
                    if heredoc.indent == HeredocIndent::Tilde
                        || self.heredoc_terminator(&heredoc).is_some()
                    {
                        break;
                    }
                }
                b'\\' if interpolation => {
                    self.skip_escape(true);
                    if self.at_line_start(self.cursor.pos())
                        && (heredoc.indent == HeredocIndent::Tilde
                            || self.heredoc_terminator(&heredoc).is_some())
                    {
                        break;
                    }
                }
                b'#' if interpolation && self.interpolation_follows() => break,
                _ => self.advance_character(),
            }
        }
        self.token(TokenKind::StringContent)
    }

    fn finish_heredoc(&mut self, heredoc: &Heredoc, body_end: u32) {
        self.modes.pop();
        self.heredoc_end = Some(body_end);
        self.cursor.set_pos(heredoc.next_start);
        self.state = LexState::END;
    }

    // ─── Content ───

    /// `#{`, `#@var` or `#$var` ahead.
    fn interpolation_follows(&self) -> bool {
        if self.cursor.current() != b'#' {
            return false;
        }
        let rest = &self.cursor.rest()[1..];
        match rest {
            [b'{', ..] => true,
            [b'@', b'@', tail @ ..] | [b'@', tail @ ..] => {
                self.encoding.ident_start_width(tail) > 0
            }
            [b'$', tail @ ..] => {
                self.encoding.ident_start_width(tail) > 0
                    || tail.first().is_some_and(|&b| chars::is_decimal_digit(b))
            }
            _ => false,
        }
    }

    /// `EmbExprBegin` or `EmbVar` when interpolation starts here.
    fn lex_interpolation_start(&mut self) -> Option<Token> {
        if !self.interpolation_follows() {
            return None;
        }
        if self.cursor.peek() == b'{' {
            self.cursor.advance_n(2);
            self.modes.push(LexMode::EmbExpr {
                saved_brace_nesting: self.brace_nesting,
            });
            self.brace_nesting = 0;
            self.state = LexState::BEG;
            self.command_start = true;
            return Some(self.token(TokenKind::EmbExprBegin));
        }
        self.cursor.advance();
        self.modes.push(LexMode::EmbVar);
        Some(self.token(TokenKind::EmbVar))
    }

    /// Skip an escape sequence. With `full` the sequence is measured the
    /// way it will be unescaped; otherwise it is the backslash and one
    /// character.
    fn skip_escape(&mut self, full: bool) {
        let rest = self.cursor.rest();
        let len = if full {
            unescape::escape_len(rest, 0, self.encoding)
        } else {
            1 + self.encoding.char_width(&rest[1..]).max(1)
        }
        .min(rest.len());

        let start = self.cursor.pos();
        for (index, &b) in rest[..len].iter().enumerate() {
            if b == b'\n' {
                self.record_newline(start + width_u32(index));
            }
        }
        self.cursor.advance_n(width_u32(len));
    }

    /// Advance over literal content up to the terminator, an interpolation,
    /// or (for lists) whitespace.
    fn scan_content(&mut self, delimiters: &mut Delimiters, interpolation: bool, words: bool, raw_escapes: bool) {
        loop {
            let byte = if words {
                self.cursor.current()
            } else {
                self.cursor.skip_to_string_delim(
                    delimiters.terminator,
                    delimiters.incrementor,
                    interpolation,
                )
            };
            if self.cursor.is_eof() {
                break;
            }
            match byte {
                b'\\' => self.skip_escape(interpolation && !raw_escapes),
                b if delimiters.incrementor == Some(b) => {
                    delimiters.nesting += 1;
                    self.cursor.advance();
                }
                b if b == delimiters.terminator => {
                    if delimiters.nesting == 0 {
                        break;
                    }
                    delimiters.nesting -= 1;
                    self.cursor.advance();
                }
                b'#' if interpolation && self.interpolation_follows() => break,
                b if words && chars::is_whitespace(b) => break,
                b'\n' => {
                    self.record_newline(self.cursor.pos());
                    self.cursor.advance();
                }
                _ => self.advance_character(),
            }
        }
    }

    /// Content of a string, symbol, backtick or `%q`/`%Q`/`%s`/`%x` literal.
    pub(super) fn lex_string(
        &mut self,
        interpolation: bool,
        label_allowed: bool,
        delimiters: Delimiters,
    ) -> Token {
        self.token_start = self.cursor.pos();
        if self.cursor.is_eof() {
            self.modes.pop();
            return self.token(TokenKind::Eof);
        }

        if self.cursor.current() == delimiters.terminator && delimiters.nesting == 0 {
            self.cursor.advance();
            self.modes.pop();
            if delimiters.terminator == b'\n' {
                self.record_newline(self.cursor.pos() - 1);
            }
            if label_allowed && self.cursor.current() == b':' && self.cursor.peek() != b':' {
                self.cursor.advance();
                self.state = LexState::ARG | LexState::LABELED;
                return self.token(TokenKind::LabelEnd);
            }
            self.state = LexState::END;
            return self.token(TokenKind::StringEnd);
        }

        if interpolation {
            if let Some(token) = self.lex_interpolation_start() {
                return token;
            }
        }

        let mut delimiters = delimiters;
        self.scan_content(&mut delimiters, interpolation, false, false);
        self.update_delimiters(delimiters);
        self.token(TokenKind::StringContent)
    }

    /// Elements and separators of `%w`, `%W`, `%i` and `%I`.
    pub(super) fn lex_list(&mut self, interpolation: bool, delimiters: Delimiters) -> Token {
        self.token_start = self.cursor.pos();
        if self.cursor.is_eof() {
            self.modes.pop();
            return self.token(TokenKind::Eof);
        }

        let separator = chars::strspn_whitespace(self.cursor.rest());
        if separator > 0 {
            for index in 0..separator {
                let at = self.token_start + width_u32(index);
                if self.source[at as usize] == b'\n' {
                    self.record_newline(at);
                }
            }
            self.cursor.advance_n(width_u32(separator));
            return self.token(TokenKind::WordsSep);
        }

        if self.cursor.current() == delimiters.terminator && delimiters.nesting == 0 {
            self.cursor.advance();
            self.modes.pop();
            self.state = LexState::END;
            return self.token(TokenKind::StringEnd);
        }

        if interpolation {
            if let Some(token) = self.lex_interpolation_start() {
                return token;
            }
        }

        let mut delimiters = delimiters;
        self.scan_content(&mut delimiters, interpolation, true, false);
        self.update_delimiters(delimiters);
        self.token(TokenKind::StringContent)
    }

    /// Regexp content, or the terminator with its option letters.
    pub(super) fn lex_regexp(&mut self, delimiters: Delimiters) -> Token {
        self.token_start = self.cursor.pos();
        if self.cursor.is_eof() {
            self.modes.pop();
            return self.token(TokenKind::Eof);
        }

        if self.cursor.current() == delimiters.terminator && delimiters.nesting == 0 {
            self.cursor.advance();
            let options_start = self.cursor.pos();
            self.cursor.eat_while(|b| b.is_ascii_alphabetic());
            let options = self.cursor.slice(options_start, self.cursor.pos());
            let unknown: String = options
                .iter()
                .filter(|&&b| !chars::is_regexp_option(b))
                .map(|&b| char::from(b))
                .collect();
            if !unknown.is_empty() {
                self.error_format(
                    Span::new(options_start, self.cursor.pos()),
                    DiagnosticId::RegexpUnknownOptions,
                    &[FormatArg::Str(&unknown)],
                );
            }
            self.modes.pop();
            self.state = LexState::END;
            return self.token(TokenKind::RegexpEnd);
        }

        if let Some(token) = self.lex_interpolation_start() {
            return token;
        }

        let mut delimiters = delimiters;
        self.scan_content(&mut delimiters, true, false, true);
        self.update_delimiters(delimiters);
        self.token(TokenKind::StringContent)
    }
}
