//! The Ruby lexer.
//!
//! Ruby cannot be tokenized without context: `foo -1` and `foo - 1`, `x /y/`
//! and `x / y`, `a ? b : c` and `?a` all depend on what came before. The
//! lexer therefore carries a [`LexState`] that every token updates, and a
//! stack of [`LexMode`]s for literal content. The parser drives it one token
//! at a time and feeds back the one thing only it knows: which identifiers
//! are local variables.
//!
//! Side records (newline offsets, comments, magic comments, diagnostics) are
//! collected as tokens are produced and handed over by [`Lexer::finish`].
//!
//! # Layout
//!
//! - this file: state, mode dispatch, operators and brackets
//! - `names`: identifiers, keywords and variables
//! - `numeric`: numeric literals
//! - `literals`: strings, symbols, lists, regexps and heredocs
//! - `trivia`: whitespace, newlines, comments, `=begin` and `__END__`

mod literals;
mod names;
mod numeric;
mod trivia;

use crate::mode::LexMode;
use crate::state::{LexState, StateStack};
use crate::token::{Token, TokenKind};
use prism_diagnostic::{DiagnosticId, DiagnosticList, FormatArg};
use prism_ir::{Comment, MagicComment, NewlineList, Span};
use prism_lexer_core::{chars, Cursor, Encoding, SourceBuffer};
use smallvec::SmallVec;

/// Identifier names the parser has declared as local variables.
///
/// A local changes how the token after it is read: `x -1` subtracts when
/// `x` is a local and passes `-1` to a method `x` otherwise.
pub trait LocalTable {
    fn is_local(&self, name: &[u8]) -> bool;
}

/// No locals at all.
impl LocalTable for () {
    fn is_local(&self, _name: &[u8]) -> bool {
        false
    }
}

/// Settings the lexer takes from the parse options.
#[derive(Copy, Clone, Debug, Default)]
pub struct LexerConfig {
    /// Encoding the source starts in.
    pub encoding: Encoding,
    /// Ignore `encoding:` magic comments.
    pub encoding_locked: bool,
}

/// Everything the lexer collected besides tokens.
#[derive(Debug)]
pub struct LexOutput {
    pub newlines: NewlineList,
    pub comments: Vec<Comment>,
    pub magic_comments: Vec<MagicComment>,
    pub errors: DiagnosticList,
    pub warnings: DiagnosticList,
    /// Span of the data after `__END__`.
    pub data_loc: Option<Span>,
    /// Encoding in effect at the end of the source.
    pub encoding: Encoding,
    /// A magic comment switched the encoding.
    pub encoding_changed: bool,
    /// `frozen_string_literal` magic comment value.
    pub frozen_string_literal: Option<bool>,
}

pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    source: &'a [u8],
    /// Start of the first line, after any byte order mark.
    source_start: u32,
    encoding: Encoding,
    encoding_locked: bool,
    encoding_changed: bool,

    state: LexState,
    modes: SmallVec<[LexMode; 4]>,
    /// The next token starts a command, so an identifier is `CMDARG`.
    command_start: bool,
    /// Whitespace preceded the token being lexed.
    space_seen: bool,
    token_start: u32,
    /// A token other than trivia has been produced.
    seen_token: bool,

    /// Open `(`, `[` and `{`.
    enclosure_nesting: i32,
    /// `enclosure_nesting` at the most recent `->`, or -1.
    lambda_enclosure_nesting: i32,
    /// Open `{` since the innermost `#{`.
    brace_nesting: i32,
    do_loop_stack: StateStack,
    /// End of the last heredoc body started on the current line.
    heredoc_end: Option<u32>,

    newlines: NewlineList,
    comments: Vec<Comment>,
    magic_comments: Vec<MagicComment>,
    errors: DiagnosticList,
    warnings: DiagnosticList,
    data_loc: Option<Span>,
    frozen_string_literal: Option<bool>,
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "token widths are bounded by the u32 source length"
)]
#[inline]
fn width_u32(width: usize) -> u32 {
    width as u32
}

impl<'a> Lexer<'a> {
    pub fn new(buffer: &'a SourceBuffer, config: LexerConfig) -> Self {
        let cursor = buffer.cursor();
        let encoding = if buffer.has_bom() {
            Encoding::UTF_8
        } else {
            config.encoding
        };
        Lexer {
            cursor,
            source: buffer.as_bytes(),
            source_start: cursor.pos(),
            encoding,
            encoding_locked: config.encoding_locked,
            encoding_changed: false,
            state: LexState::BEG,
            modes: SmallVec::new(),
            command_start: true,
            space_seen: false,
            token_start: cursor.pos(),
            seen_token: false,
            enclosure_nesting: 0,
            lambda_enclosure_nesting: -1,
            brace_nesting: 0,
            do_loop_stack: StateStack::default(),
            heredoc_end: None,
            newlines: NewlineList::with_capacity(buffer.as_bytes().len() / 32 + 1),
            comments: Vec::new(),
            magic_comments: Vec::new(),
            errors: DiagnosticList::new(),
            warnings: DiagnosticList::new(),
            data_loc: None,
            frozen_string_literal: None,
        }
    }

    /// Produce the next token. Trivia (comments, ignored newlines, embedded
    /// documents, `__END__`) is returned too; the parser skips it.
    pub fn next_token<L: LocalTable + ?Sized>(&mut self, locals: &L) -> Token {
        let token = match self.modes.last().copied() {
            None | Some(LexMode::EmbExpr { .. }) => self.lex_code(locals),
            Some(LexMode::EmbVar) => self.lex_embedded_variable(),
            Some(LexMode::EmbDoc { start }) => self.lex_embdoc_line(start),
            Some(LexMode::Heredoc(heredoc)) => self.lex_heredoc(heredoc),
            Some(LexMode::List {
                interpolation,
                delimiters,
            }) => self.lex_list(interpolation, delimiters),
            Some(LexMode::Regexp { delimiters }) => self.lex_regexp(delimiters),
            Some(LexMode::String {
                interpolation,
                label_allowed,
                delimiters,
            }) => self.lex_string(interpolation, label_allowed, delimiters),
        };
        if !token.kind.is_trivia() && token.kind != TokenKind::Eof {
            self.seen_token = true;
        }
        tracing::trace!(?token, state = %self.state, "token");
        token
    }

    // ─── Parser feedback ───

    #[inline]
    pub fn state(&self) -> LexState {
        self.state
    }

    #[inline]
    pub fn set_state(&mut self, state: LexState) {
        self.state = state;
    }

    #[inline]
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn frozen_string_literal(&self) -> Option<bool> {
        self.frozen_string_literal
    }

    pub fn enclosure_nesting(&self) -> i32 {
        self.enclosure_nesting
    }

    /// Mark the `{` or `do` at `nesting` as a lambda body. Returns the
    /// previous value so the parser can restore it.
    pub fn set_lambda_enclosure_nesting(&mut self, nesting: i32) -> i32 {
        std::mem::replace(&mut self.lambda_enclosure_nesting, nesting)
    }

    /// Entering (`true`) or leaving a `while`/`until`/`for` predicate, where
    /// `do` belongs to the loop rather than to a block.
    pub fn push_do_loop(&mut self, value: bool) {
        self.do_loop_stack.push(value);
    }

    pub fn pop_do_loop(&mut self) {
        self.do_loop_stack.pop();
    }

    pub fn errors_mut(&mut self) -> &mut DiagnosticList {
        &mut self.errors
    }

    pub fn warnings_mut(&mut self) -> &mut DiagnosticList {
        &mut self.warnings
    }

    /// Line start offsets recorded so far.
    pub fn newlines(&self) -> &NewlineList {
        &self.newlines
    }

    pub fn finish(self) -> LexOutput {
        LexOutput {
            newlines: self.newlines,
            comments: self.comments,
            magic_comments: self.magic_comments,
            errors: self.errors,
            warnings: self.warnings,
            data_loc: self.data_loc,
            encoding: self.encoding,
            encoding_changed: self.encoding_changed,
            frozen_string_literal: self.frozen_string_literal,
        }
    }

    // ─── Helpers ───

    #[inline]
    fn token(&self, kind: TokenKind) -> Token {
        Token::new(kind, Span::new(self.token_start, self.cursor.pos()))
    }

    fn eof(&mut self) -> Token {
        self.token_start = self.cursor.pos();
        self.token(TokenKind::Eof)
    }

    fn error(&mut self, span: Span, id: DiagnosticId) {
        self.errors.append(span, id);
    }

    fn error_format(&mut self, span: Span, id: DiagnosticId, args: &[FormatArg<'_>]) {
        if let Err(error) = self.errors.append_format(span, id, args) {
            tracing::debug!(%error, ?id, "diagnostic template rejected its arguments");
            self.errors.append(span, id);
        }
    }

    fn warning(&mut self, span: Span, id: DiagnosticId) {
        self.warnings.append(span, id);
    }

    fn warning_format(&mut self, span: Span, id: DiagnosticId, args: &[FormatArg<'_>]) {
        if let Err(error) = self.warnings.append_format(span, id, args) {
            tracing::debug!(%error, ?id, "diagnostic template rejected its arguments");
            self.warnings.append(span, id);
        }
    }

    /// Record the `\n` at `newline_pos` unless a heredoc body already did.
    fn record_newline(&mut self, newline_pos: u32) {
        if newline_pos + 1 > self.newlines.last_offset() {
            self.newlines.append(newline_pos);
        }
    }

    /// Advance past one character of the active encoding.
    fn advance_character(&mut self) {
        let width = self.encoding.char_width(self.cursor.rest()).max(1);
        self.cursor.advance_n(width_u32(width));
    }

    fn at_line_start(&self, pos: u32) -> bool {
        pos == self.source_start || (pos > 0 && self.source.get(pos as usize - 1) == Some(&b'\n'))
    }

    /// State after a binary operator: `ARG` when the operator is a method
    /// name (`def +`, `x.+`), else `BEG`.
    fn operator_state(&mut self) {
        self.state = if self.state.any(LexState::FNAME | LexState::DOT) {
            LexState::ARG
        } else {
            LexState::BEG
        };
    }

    /// Spaced argument position: `foo -1`, `foo *args`, `foo /re/`.
    fn spcarg(&self, next: u8) -> bool {
        self.state.any(LexState::ARG_ANY) && self.space_seen && !chars::is_whitespace(next)
    }

    /// Whether a label (`name:`) may start here.
    fn label_possible(&self, command_start: bool) -> bool {
        (self.state.any(LexState::LABEL | LexState::ENDFN) && !command_start)
            || self.state.any(LexState::ARG_ANY)
    }

    // ─── Code ───

    fn lex_code<L: LocalTable + ?Sized>(&mut self, locals: &L) -> Token {
        loop {
            self.space_seen = self.skip_whitespace();
            self.token_start = self.cursor.pos();
            let command_start = std::mem::replace(&mut self.command_start, false);

            if self.cursor.is_eof() {
                return self.eof();
            }
            if let Some(token) = self.lex_code_byte(command_start, locals) {
                return token;
            }
            self.command_start = command_start;
        }
    }

    /// One token of Ruby code, or `None` after skipping an invalid byte.
    fn lex_code_byte<L: LocalTable + ?Sized>(
        &mut self,
        command_start: bool,
        locals: &L,
    ) -> Option<Token> {
        use LexState as S;
        use TokenKind as T;

        let byte = self.cursor.current();
        let peek = self.cursor.peek();
        let peek2 = self.cursor.peek2();

        let kind = match byte {
            // ─── End of script ───
            0x00 | 0x04 | 0x1a => return Some(self.eof()),

            // ─── Line structure ───
            b'\n' => return Some(self.lex_newline()),
            b'#' => return Some(self.lex_comment()),
            b';' => {
                self.cursor.advance();
                self.state = S::BEG;
                self.command_start = true;
                T::Semicolon
            }
            b',' => {
                self.cursor.advance();
                self.state = S::BEG | S::LABEL;
                T::Comma
            }

            // ─── Brackets ───
            b'(' => {
                let kind = if self.state.is_beg() || !self.space_seen {
                    T::ParenthesisLeft
                } else if self.state.any(S::ARG_ANY) || self.state.contains(S::END | S::LABEL) {
                    T::ParenthesisLeftParentheses
                } else {
                    T::ParenthesisLeft
                };
                self.cursor.advance();
                self.enclosure_nesting += 1;
                self.state = S::BEG | S::LABEL;
                kind
            }
            b')' => {
                self.cursor.advance();
                self.enclosure_nesting -= 1;
                self.state = S::ENDFN;
                T::ParenthesisRight
            }
            b'[' => self.lex_bracket_left(peek, peek2),
            b']' => {
                self.cursor.advance();
                self.enclosure_nesting -= 1;
                self.state = S::END;
                T::BracketRight
            }
            b'{' => self.lex_brace_left(),
            b'}' => self.lex_brace_right(),

            // ─── Operators ───
            b'*' => self.lex_star(peek, peek2),
            b'!' => {
                if self.state.any(S::FNAME | S::DOT) && peek == b'@' {
                    self.cursor.advance_n(2);
                    self.state = S::ARG;
                    return Some(self.token(T::Bang));
                }
                self.cursor.advance();
                let kind = if self.cursor.eat(b'=') {
                    T::BangEqual
                } else if self.cursor.eat(b'~') {
                    T::BangTilde
                } else {
                    T::Bang
                };
                self.operator_state();
                kind
            }
            b'=' => {
                if self.at_line_start(self.token_start) && self.cursor.starts_with(b"=begin") {
                    let after = self.cursor.peek_at(6);
                    if after == 0 || chars::is_whitespace(after) {
                        return Some(self.lex_embdoc_begin());
                    }
                }
                let kind = match (peek, peek2) {
                    (b'=', b'=') => T::EqualEqualEqual,
                    (b'=', _) => T::EqualEqual,
                    (b'~', _) => T::EqualTilde,
                    (b'>', _) => T::EqualGreater,
                    _ => T::Equal,
                };
                self.cursor.advance_n(match kind {
                    T::EqualEqualEqual => 3,
                    T::Equal => 1,
                    _ => 2,
                });
                self.operator_state();
                kind
            }
            b'<' => {
                if peek == b'<' && self.heredoc_allowed() {
                    self.cursor.advance_n(2);
                    if let Some(token) = self.lex_heredoc_start() {
                        return Some(token);
                    }
                    self.cursor.set_pos(self.token_start);
                }
                let (kind, width) = match (peek, peek2) {
                    (b'=', b'>') => (T::LessEqualGreater, 3),
                    (b'=', _) => (T::LessEqual, 2),
                    (b'<', b'=') => (T::LessLessEqual, 3),
                    (b'<', _) => (T::LessLess, 2),
                    _ => (T::Less, 1),
                };
                self.cursor.advance_n(width);
                if self.state.any(S::CLASS) {
                    self.command_start = true;
                }
                self.operator_state();
                kind
            }
            b'>' => {
                let (kind, width) = match (peek, peek2) {
                    (b'>', b'=') => (T::GreaterGreaterEqual, 3),
                    (b'>', _) => (T::GreaterGreater, 2),
                    (b'=', _) => (T::GreaterEqual, 2),
                    _ => (T::Greater, 1),
                };
                self.cursor.advance_n(width);
                self.operator_state();
                kind
            }
            b'&' => {
                let (kind, width) = match (peek, peek2) {
                    (b'&', b'=') => (T::AmpersandAmpersandEqual, 3),
                    (b'&', _) => (T::AmpersandAmpersand, 2),
                    (b'=', _) => (T::AmpersandEqual, 2),
                    (b'.', _) => (T::AmpersandDot, 2),
                    _ => (T::Ampersand, 1),
                };
                self.cursor.advance_n(width);
                match kind {
                    T::AmpersandDot => self.state = S::DOT,
                    T::Ampersand => self.operator_state(),
                    _ => self.state = S::BEG,
                }
                kind
            }
            b'|' => {
                let (kind, width) = match (peek, peek2) {
                    (b'|', b'=') => (T::PipePipeEqual, 3),
                    // `{ || }` is an empty parameter list, not `||`.
                    (b'|', _) if !self.state.any(S::BEG) => (T::PipePipe, 2),
                    (b'=', _) => (T::PipeEqual, 2),
                    _ => (T::Pipe, 1),
                };
                self.cursor.advance_n(width);
                self.state = match kind {
                    T::Pipe if self.state.any(S::FNAME | S::DOT) => S::ARG,
                    T::Pipe => S::BEG | S::LABEL,
                    _ => S::BEG,
                };
                kind
            }
            b'+' | b'-' => self.lex_plus_minus(byte, peek),
            b'.' => {
                let beg = self.state.is_beg();
                let kind = match (peek, peek2) {
                    (b'.', b'.') if beg => T::UDotDotDot,
                    (b'.', b'.') => T::DotDotDot,
                    (b'.', _) if beg => T::UDotDot,
                    (b'.', _) => T::DotDot,
                    _ => T::Dot,
                };
                self.cursor.advance_n(match kind {
                    T::UDotDotDot | T::DotDotDot => 3,
                    T::UDotDot | T::DotDot => 2,
                    _ => 1,
                });
                self.state = if kind == T::Dot { S::DOT } else { S::BEG };
                kind
            }
            b'~' => {
                self.cursor.advance();
                if self.state.any(S::FNAME | S::DOT) {
                    self.cursor.eat(b'@');
                    self.state = S::ARG;
                } else {
                    self.state = S::BEG;
                }
                T::Tilde
            }
            b'^' => {
                self.cursor.advance();
                let kind = if self.cursor.eat(b'=') {
                    T::CaretEqual
                } else {
                    T::Caret
                };
                self.operator_state();
                kind
            }
            b'%' => self.lex_percent(peek),
            b'/' => self.lex_slash(peek),
            b':' => self.lex_colon(peek),
            b'?' => self.lex_question_mark(),

            // ─── Literals ───
            b'0'..=b'9' => self.lex_number(),
            b'"' | b'\'' => {
                let label_allowed = self.label_possible(command_start);
                self.cursor.advance();
                self.push_string(byte == b'"', label_allowed, byte);
                T::StringBegin
            }
            b'`' => {
                self.cursor.advance();
                if self.state.any(S::FNAME) {
                    self.state = S::ENDFN;
                } else if self.state.any(S::DOT) {
                    self.state = S::ARG;
                } else {
                    self.push_string(true, false, b'`');
                }
                T::Backtick
            }

            // ─── Names ───
            b'@' => self.lex_instance_variable(),
            b'$' => self.lex_global_variable(),
            _ => return self.lex_identifier(command_start, locals),
        };
        Some(self.token(kind))
    }

    fn lex_bracket_left(&mut self, peek: u8, peek2: u8) -> TokenKind {
        use LexState as S;
        use TokenKind as T;

        if self.state.any(S::FNAME | S::DOT) {
            self.state = S::ARG;
            if peek == b']' && peek2 == b'=' {
                self.cursor.advance_n(3);
                return T::BracketLeftRightEqual;
            }
            if peek == b']' {
                self.cursor.advance_n(2);
                return T::BracketLeftRight;
            }
            self.cursor.advance();
            self.enclosure_nesting += 1;
            self.state = S::ARG | S::LABEL;
            return T::BracketLeft;
        }

        let kind = if self.state.is_beg()
            || (self.state.any(S::ARG_ANY) && (self.space_seen || self.state.any(S::LABELED)))
        {
            T::BracketLeftArray
        } else {
            T::BracketLeft
        };
        self.cursor.advance();
        self.enclosure_nesting += 1;
        self.state = S::BEG | S::LABEL;
        kind
    }

    fn lex_brace_left(&mut self) -> TokenKind {
        use LexState as S;

        let kind = if self.lambda_enclosure_nesting == self.enclosure_nesting {
            self.state = S::BEG;
            self.command_start = true;
            TokenKind::LambdaBegin
        } else if self.state.any(S::LABELED) {
            self.state = S::BEG | S::LABEL;
            TokenKind::BraceLeft
        } else if self.state.any(S::ARG_ANY | S::END | S::ENDFN | S::ENDARG) {
            // Block.
            self.state = S::BEG;
            self.command_start = true;
            TokenKind::BraceLeft
        } else {
            // Hash.
            self.state = S::BEG | S::LABEL;
            TokenKind::BraceLeft
        };
        self.cursor.advance();
        self.enclosure_nesting += 1;
        self.brace_nesting += 1;
        kind
    }

    fn lex_brace_right(&mut self) -> TokenKind {
        self.cursor.advance();
        self.state = LexState::END;
        if self.brace_nesting == 0 {
            if let Some(LexMode::EmbExpr {
                saved_brace_nesting,
            }) = self.modes.last().copied()
            {
                self.modes.pop();
                self.brace_nesting = saved_brace_nesting;
                return TokenKind::EmbExprEnd;
            }
        }
        self.brace_nesting -= 1;
        self.enclosure_nesting -= 1;
        TokenKind::BraceRight
    }

    fn lex_star(&mut self, peek: u8, peek2: u8) -> TokenKind {
        use TokenKind as T;

        if peek == b'*' {
            if peek2 == b'=' {
                self.cursor.advance_n(3);
                self.state = LexState::BEG;
                return T::StarStarEqual;
            }
            let spcarg = self.spcarg(self.cursor.peek_at(2));
            let kind = if spcarg || self.state.is_beg() {
                T::UStarStar
            } else {
                T::StarStar
            };
            self.cursor.advance_n(2);
            self.operator_state();
            return kind;
        }
        if peek == b'=' {
            self.cursor.advance_n(2);
            self.state = LexState::BEG;
            return T::StarEqual;
        }

        let spcarg = self.spcarg(peek);
        self.cursor.advance();
        let kind = if spcarg {
            self.warning(
                Span::new(self.token_start, self.cursor.pos()),
                DiagnosticId::AmbiguousPrefixStar,
            );
            T::UStar
        } else if self.state.is_beg() {
            T::UStar
        } else {
            T::Star
        };
        self.operator_state();
        kind
    }

    fn lex_plus_minus(&mut self, byte: u8, peek: u8) -> TokenKind {
        use LexState as S;
        use TokenKind as T;

        let minus = byte == b'-';
        if self.state.any(S::FNAME | S::DOT) {
            self.cursor.advance();
            self.cursor.eat(b'@');
            self.state = S::ARG;
            return if minus { T::Minus } else { T::Plus };
        }
        if peek == b'=' {
            self.cursor.advance_n(2);
            self.state = S::BEG;
            return if minus { T::MinusEqual } else { T::PlusEqual };
        }
        if minus && peek == b'>' {
            self.cursor.advance_n(2);
            self.state = S::ENDFN;
            return T::MinusGreater;
        }

        let spcarg = self.spcarg(peek);
        if self.state.is_beg() || spcarg {
            self.cursor.advance();
            if spcarg && !self.state.is_beg() {
                let id = if minus {
                    DiagnosticId::AmbiguousFirstArgumentMinus
                } else {
                    DiagnosticId::AmbiguousFirstArgumentPlus
                };
                self.warning(Span::new(self.token_start, self.cursor.pos()), id);
            }
            self.state = S::BEG;
            return match (minus, chars::is_decimal_digit(peek)) {
                (true, true) => T::UMinusNum,
                (true, false) => T::UMinus,
                (false, _) => T::UPlus,
            };
        }

        self.cursor.advance();
        self.state = S::BEG;
        if minus {
            T::Minus
        } else {
            T::Plus
        }
    }

    fn lex_slash(&mut self, peek: u8) -> TokenKind {
        if self.state.is_beg() {
            self.cursor.advance();
            self.push_regexp(b'/');
            return TokenKind::RegexpBegin;
        }
        if peek == b'=' {
            self.cursor.advance_n(2);
            self.state = LexState::BEG;
            return TokenKind::SlashEqual;
        }
        if self.spcarg(peek) {
            self.cursor.advance();
            self.warning(
                Span::new(self.token_start, self.cursor.pos()),
                DiagnosticId::AmbiguousSlash,
            );
            self.push_regexp(b'/');
            return TokenKind::RegexpBegin;
        }
        self.cursor.advance();
        self.operator_state();
        TokenKind::Slash
    }

    fn lex_colon(&mut self, peek: u8) -> TokenKind {
        use LexState as S;

        if peek == b':' {
            self.cursor.advance_n(2);
            if self.state.is_beg()
                || self.state.any(S::CLASS)
                || (self.state.any(S::ARG_ANY) && self.space_seen)
            {
                self.state = S::BEG;
                return TokenKind::UColonColon;
            }
            self.state = S::DOT;
            return TokenKind::ColonColon;
        }

        if self.state.any(S::END_ANY) || peek == 0 || chars::is_whitespace(peek) || peek == b'#' {
            self.cursor.advance();
            self.state = S::BEG;
            return TokenKind::Colon;
        }

        if peek == b'"' || peek == b'\'' {
            self.cursor.advance_n(2);
            self.push_string(peek == b'"', false, peek);
            return TokenKind::SymbolBegin;
        }

        self.cursor.advance();
        self.state = S::FNAME;
        TokenKind::SymbolBegin
    }
}

#[cfg(test)]
mod tests;
