//! Whitespace, newlines, comments, embedded documents and `__END__`.

use super::{width_u32, Lexer};
use crate::magic_comment::{self, MagicKey};
use crate::mode::LexMode;
use crate::state::LexState;
use crate::token::{Token, TokenKind};
use prism_diagnostic::{DiagnosticId, FormatArg};
use prism_ir::{Comment, CommentKind, MagicComment, Span};
use prism_lexer_core::{chars, Encoding};

impl Lexer<'_> {
    /// Skip spaces, tabs and `\`-newline continuations. Returns whether
    /// anything was skipped.
    pub(super) fn skip_whitespace(&mut self) -> bool {
        let start = self.cursor.pos();
        loop {
            match self.cursor.current() {
                b' ' | b'\t' | 0x0b | 0x0c | b'\r' => self.cursor.advance(),
                b'\\' => {
                    let newline = match (self.cursor.peek(), self.cursor.peek2()) {
                        (b'\n', _) => 1,
                        (b'\r', b'\n') => 2,
                        _ => break,
                    };
                    let newline_pos = self.cursor.pos() + newline;
                    self.record_newline(newline_pos);
                    match self.heredoc_end.take() {
                        Some(end) => self.cursor.set_pos(end),
                        None => self.cursor.set_pos(newline_pos + 1),
                    }
                }
                _ => break,
            }
        }
        self.cursor.pos() != start
    }

    /// `\n` in code. Significant unless the expression obviously continues.
    pub(super) fn lex_newline(&mut self) -> Token {
        let newline_pos = self.cursor.pos();
        self.cursor.advance();
        self.record_newline(newline_pos);
        if let Some(end) = self.heredoc_end.take() {
            self.cursor.set_pos(end);
        }

        let span = Span::new(newline_pos, newline_pos + 1);
        if self.newline_ignored() || self.next_line_continues_call() {
            return Token::new(TokenKind::IgnoredNewline, span);
        }
        self.state = LexState::BEG;
        self.command_start = true;
        Token::new(TokenKind::Newline, span)
    }

    fn newline_ignored(&self) -> bool {
        use LexState as S;
        (self.state.any(S::BEG | S::CLASS | S::FNAME | S::DOT) && !self.state.any(S::LABELED))
            || self.state == (S::ARG | S::LABELED)
    }

    /// The next line starts with `.method` or `&.method`.
    fn next_line_continues_call(&self) -> bool {
        let rest = self.cursor.rest();
        let indent = chars::strspn_inline_whitespace(rest);
        match &rest[indent..] {
            [b'.', next, ..] => *next != b'.',
            [b'&', b'.', ..] => true,
            _ => false,
        }
    }

    /// `# ...` up to the end of the line.
    pub(super) fn lex_comment(&mut self) -> Token {
        let start = self.cursor.pos();
        self.cursor.eat_until_newline_or_eof();
        let span = Span::new(start, self.cursor.pos());
        self.comments.push(Comment::new(CommentKind::Inline, span));
        if !self.seen_token {
            self.magic_comment(start + 1, span.end);
        }
        Token::new(TokenKind::Comment, span)
    }

    fn magic_comment(&mut self, start: u32, end: u32) {
        let text = self.cursor.slice(start, end);
        let entries = magic_comment::parse(text);
        let encoding_line = self.on_encoding_line(start);
        let mut encoding_seen = false;

        for entry in entries {
            let key = Span::new(start + width_u32(entry.key.start), start + width_u32(entry.key.end));
            let value = Span::new(
                start + width_u32(entry.value.start),
                start + width_u32(entry.value.end),
            );
            self.magic_comments.push(MagicComment { key, value });

            let key_text = key.slice(self.source);
            let value_text = value.slice(self.source);
            match MagicKey::classify(key_text) {
                MagicKey::Encoding => {
                    encoding_seen = true;
                    if encoding_line {
                        self.change_encoding(value);
                    } else {
                        self.warning(value, DiagnosticId::EncodingMagicCommentIgnored);
                    }
                }
                MagicKey::FrozenStringLiteral => {
                    if value_text.eq_ignore_ascii_case(b"true") {
                        self.frozen_string_literal = Some(true);
                    } else if value_text.eq_ignore_ascii_case(b"false") {
                        self.frozen_string_literal = Some(false);
                    } else {
                        self.invalid_magic_value(key, value);
                    }
                }
                MagicKey::WarnIndent => {
                    if !value_text.eq_ignore_ascii_case(b"true")
                        && !value_text.eq_ignore_ascii_case(b"false")
                    {
                        self.invalid_magic_value(key, value);
                    }
                }
                MagicKey::ShareableConstantValue => {
                    const VALUES: [&[u8]; 4] = [
                        b"none",
                        b"literal",
                        b"experimental_everything",
                        b"experimental_copy",
                    ];
                    if !VALUES.contains(&value_text) {
                        self.invalid_magic_value(key, value);
                    }
                }
                MagicKey::Other => {}
            }
        }

        if !encoding_seen && encoding_line {
            if let Some(range) = magic_comment::encoding_name(text) {
                let name = Span::new(start + width_u32(range.start), start + width_u32(range.end));
                self.change_encoding(name);
            }
        }
    }

    fn invalid_magic_value(&mut self, key: Span, value: Span) {
        let key_text = String::from_utf8_lossy(key.slice(self.source)).into_owned();
        let value_text = String::from_utf8_lossy(value.slice(self.source)).into_owned();
        self.warning_format(
            value,
            DiagnosticId::InvalidMagicCommentValue,
            &[FormatArg::Str(&key_text), FormatArg::Str(&value_text)],
        );
    }

    /// Encoding comments count on the first line, or the second after a
    /// `#!` line.
    fn on_encoding_line(&self, offset: u32) -> bool {
        let line = self.newlines.line(offset, 1);
        line == 1 || (line == 2 && self.cursor.slice_from(self.source_start).starts_with(b"#!"))
    }

    fn change_encoding(&mut self, name: Span) {
        if self.encoding_locked {
            return;
        }
        match Encoding::find(name.slice(self.source)) {
            Some(encoding) => {
                tracing::debug!(
                    from = self.encoding.name(),
                    to = encoding.name(),
                    "source encoding changed by magic comment"
                );
                self.encoding = encoding;
                self.encoding_changed = true;
            }
            None => self.error(name, DiagnosticId::InvalidEncodingMagicComment),
        }
    }

    /// Consume the rest of the line including its `\n`.
    fn finish_line(&mut self) {
        self.cursor.eat_until_newline_or_eof();
        if !self.cursor.is_eof() {
            self.record_newline(self.cursor.pos());
            self.cursor.advance();
        }
    }

    /// `=begin` at the start of a line.
    pub(super) fn lex_embdoc_begin(&mut self) -> Token {
        let start = self.token_start;
        self.finish_line();
        self.modes.push(LexMode::EmbDoc { start });
        self.token(TokenKind::EmbDocBegin)
    }

    /// One line of an embedded document, or the `=end` line.
    pub(super) fn lex_embdoc_line(&mut self, start: u32) -> Token {
        self.token_start = self.cursor.pos();
        if self.cursor.is_eof() {
            self.modes.pop();
            let span = Span::new(start, self.cursor.pos());
            self.comments.push(Comment::new(CommentKind::EmbDoc, span));
            self.error(span, DiagnosticId::EmbdocTerm);
            return self.token(TokenKind::Eof);
        }

        let is_end = self.cursor.starts_with(b"=end") && {
            let after = self.cursor.peek_at(4);
            after == 0 || chars::is_whitespace(after)
        };
        self.finish_line();
        if !is_end {
            return self.token(TokenKind::EmbDocLine);
        }

        self.modes.pop();
        let span = Span::new(start, self.cursor.pos());
        self.comments.push(Comment::new(CommentKind::EmbDoc, span));
        self.state = LexState::BEG;
        self.command_start = true;
        self.token(TokenKind::EmbDocEnd)
    }

    /// `__END__` alone on a line, with the cursor just past it. Everything
    /// after the line is data.
    pub(super) fn lex_data_end(&mut self) -> Option<Token> {
        let pos = self.cursor.pos();
        let line_end = match (self.cursor.current(), self.cursor.peek()) {
            _ if self.cursor.is_eof() => pos,
            (b'\n', _) => pos + 1,
            (b'\r', b'\n') => pos + 2,
            _ => return None,
        };
        if line_end > pos {
            self.record_newline(line_end - 1);
        }

        let end = self.cursor.source_len();
        let data = Span::new(self.token_start, end);
        self.data_loc = Some(data);
        self.comments.push(Comment::new(CommentKind::DataEnd, data));
        self.cursor.set_pos(end);
        Some(Token::new(TokenKind::DataEnd, Span::new(self.token_start, line_end)))
    }
}
