//! Identifiers, constants, keywords, labels and variables.

use super::{width_u32, LexState, Lexer, LocalTable};
use crate::keywords;
use crate::token::{Token, TokenKind};
use prism_diagnostic::{DiagnosticId, FormatArg};
use prism_ir::Span;

/// `_1` through `_9`.
fn is_numbered_parameter(text: &[u8]) -> bool {
    matches!(text, [b'_', b'1'..=b'9'])
}

impl Lexer<'_> {
    fn eat_identifier_chars(&mut self) {
        loop {
            let width = self.encoding.ident_char_width(self.cursor.rest());
            if width == 0 {
                break;
            }
            self.cursor.advance_n(width_u32(width));
        }
    }

    /// An identifier, constant, keyword or label. `None` after reporting an
    /// invalid character, which is skipped.
    pub(super) fn lex_identifier<L: LocalTable + ?Sized>(
        &mut self,
        command_start: bool,
        locals: &L,
    ) -> Option<Token> {
        use LexState as S;
        use TokenKind as T;

        let rest = self.cursor.rest();
        let width = self.encoding.ident_start_width(rest);
        if width == 0 {
            self.invalid_character();
            return None;
        }
        let start = self.cursor.pos();
        let mut kind = if self.encoding.is_upper_char(rest) {
            T::Constant
        } else {
            T::Identifier
        };
        self.cursor.advance_n(width_u32(width));
        self.eat_identifier_chars();

        // `foo?` and `foo!`, but `foo!=` is `foo` `!=`.
        if matches!(self.cursor.current(), b'?' | b'!') {
            let suffix_allowed = self.cursor.peek() != b'='
                || matches!(self.cursor.peek2(), b'=' | b'~' | b'>');
            if suffix_allowed {
                self.cursor.advance();
                kind = T::Identifier;
            }
        }

        let previous = self.state;

        if self.label_possible(command_start)
            && self.cursor.current() == b':'
            && self.cursor.peek() != b':'
        {
            self.cursor.advance();
            self.state = S::ARG | S::LABELED;
            return Some(self.token(T::Label));
        }

        // Setter name in a definition: `def foo=(value)`.
        if previous.any(S::FNAME)
            && self.cursor.current() == b'='
            && !matches!(self.cursor.peek(), b'~' | b'>')
            && (self.cursor.peek() != b'=' || self.cursor.peek2() == b'>')
        {
            self.cursor.advance();
        }

        let text = self.cursor.slice(start, self.cursor.pos());

        if !previous.any(S::DOT) {
            if let Some(keyword) = keywords::lookup(text) {
                let kind = self.keyword_token(keyword, previous);
                return Some(self.token(kind));
            }
        }

        if text == b"__END__" && self.at_line_start(start) {
            if let Some(token) = self.lex_data_end() {
                return Some(token);
            }
        }

        self.state = if previous.any(S::BEG_ANY | S::ARG_ANY | S::DOT) {
            if command_start {
                S::CMDARG
            } else {
                S::ARG
            }
        } else if previous.any(S::FNAME) {
            S::ENDFN
        } else {
            S::END
        };

        if kind == T::Identifier
            && !previous.any(S::DOT | S::FNAME)
            && (locals.is_local(text) || is_numbered_parameter(text))
        {
            self.state = S::END | S::LABEL;
        }

        Some(self.token(kind))
    }

    fn keyword_token(&mut self, keyword: keywords::Keyword, previous: LexState) -> TokenKind {
        use LexState as S;

        if previous.any(S::FNAME) {
            self.state = S::ENDFN;
            return keyword.kind;
        }

        self.state = keyword.state;
        if keyword.state.any(S::BEG) {
            self.command_start = true;
        }

        if keyword.kind == TokenKind::KeywordDo {
            if self.lambda_enclosure_nesting == self.enclosure_nesting {
                return TokenKind::KeywordDo;
            }
            if self.do_loop_stack.is_set() {
                return TokenKind::KeywordDoLoop;
            }
            return TokenKind::KeywordDo;
        }

        if let Some(modifier) = keyword.modifier {
            if !previous.any(S::BEG | S::LABELED | S::CLASS) {
                self.state = S::BEG | S::LABEL;
                return modifier;
            }
        }
        keyword.kind
    }

    /// Report and skip one byte or character that cannot start a token.
    fn invalid_character(&mut self) {
        let start = self.cursor.pos();
        let byte = self.cursor.current();
        if byte >= 0x80 {
            // ident_start_width accepts any valid character, so this one is
            // malformed in the active encoding.
            self.cursor.advance();
            let name = self.encoding.name();
            self.error_format(
                Span::new(start, self.cursor.pos()),
                DiagnosticId::InvalidMultibyteCharacter,
                &[FormatArg::Str(name)],
            );
            return;
        }

        self.cursor.advance();
        let shown = if byte.is_ascii_graphic() {
            char::from(byte).to_string()
        } else {
            format!("\\x{byte:02X}")
        };
        self.error_format(
            Span::new(start, self.cursor.pos()),
            DiagnosticId::InvalidCharacter,
            &[FormatArg::Str(&shown)],
        );
    }

    /// `@ivar` or `@@cvar`.
    pub(super) fn lex_instance_variable(&mut self) -> TokenKind {
        self.cursor.advance();
        let class = self.cursor.eat(b'@');
        let kind = if class {
            TokenKind::ClassVariable
        } else {
            TokenKind::InstanceVariable
        };

        if self.encoding.ident_start_width(self.cursor.rest()) == 0 {
            let id = if class {
                DiagnosticId::IncompleteVariableClass
            } else {
                DiagnosticId::IncompleteVariableInstance
            };
            // `@1` is still consumed as one token.
            self.eat_identifier_chars();
            self.error(Span::new(self.token_start, self.cursor.pos()), id);
        } else {
            self.eat_identifier_chars();
        }

        self.state = if self.state.any(LexState::FNAME) {
            LexState::ENDFN
        } else {
            LexState::END
        };
        kind
    }

    /// `$name`, `$~`, `$-w`, `$1`, `$&` and friends.
    pub(super) fn lex_global_variable(&mut self) -> TokenKind {
        let fname = self.state.any(LexState::FNAME);
        self.cursor.advance();
        self.state = if fname {
            LexState::ENDFN
        } else {
            LexState::END
        };

        match self.cursor.current() {
            b'~' | b'*' | b'$' | b'?' | b'!' | b'@' | b'/' | b'\\' | b';' | b',' | b'.'
            | b'=' | b':' | b'<' | b'>' | b'"' | b'0' => {
                self.cursor.advance();
                TokenKind::GlobalVariable
            }
            b'&' | b'`' | b'\'' | b'+' => {
                self.cursor.advance();
                if fname {
                    TokenKind::GlobalVariable
                } else {
                    TokenKind::BackReference
                }
            }
            b'1'..=b'9' => {
                self.cursor.eat_while(|b| b.is_ascii_digit());
                if fname {
                    TokenKind::GlobalVariable
                } else {
                    TokenKind::NthReference
                }
            }
            b'-' => {
                self.cursor.advance();
                let width = self.encoding.ident_char_width(self.cursor.rest());
                self.cursor.advance_n(width_u32(width));
                TokenKind::GlobalVariable
            }
            _ if self.encoding.ident_start_width(self.cursor.rest()) > 0 => {
                self.eat_identifier_chars();
                TokenKind::GlobalVariable
            }
            _ => {
                self.error(
                    Span::new(self.token_start, self.cursor.pos()),
                    DiagnosticId::InvalidVariableGlobal,
                );
                TokenKind::GlobalVariable
            }
        }
    }

    /// The variable after `#` in an interpolating literal.
    pub(super) fn lex_embedded_variable(&mut self) -> Token {
        self.modes.pop();
        self.token_start = self.cursor.pos();
        let kind = match self.cursor.current() {
            b'@' => self.lex_instance_variable(),
            b'$' => self.lex_global_variable(),
            _ => {
                self.error(Span::point(self.token_start), DiagnosticId::InvalidToken);
                TokenKind::Missing
            }
        };
        self.token(kind)
    }
}
