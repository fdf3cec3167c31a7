//! Lex modes: what kind of text the cursor is in.
//!
//! Outside literals the lexer reads Ruby tokens. Opening a string, list,
//! regexp or heredoc pushes a mode that reads content until the matching
//! terminator; `#{` inside such content pushes `EmbExpr` to read Ruby tokens
//! again until the matching `}`.

/// Balanced delimiter pair of a literal: `%w(...)` nests on `(`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Delimiters {
    /// Opening bracket that increments nesting, when the pair is a bracket.
    pub incrementor: Option<u8>,
    pub terminator: u8,
    /// Unclosed incrementors seen so far.
    pub nesting: u32,
}

impl Delimiters {
    /// Delimiters for a literal opened with `open`. Brackets pair up; any
    /// other byte closes itself.
    pub fn for_opener(open: u8) -> Self {
        let (incrementor, terminator) = match open {
            b'(' => (Some(b'('), b')'),
            b'[' => (Some(b'['), b']'),
            b'{' => (Some(b'{'), b'}'),
            b'<' => (Some(b'<'), b'>'),
            other => (None, other),
        };
        Delimiters {
            incrementor,
            terminator,
            nesting: 0,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum HeredocQuote {
    /// `<<EOS` and `<<"EOS"`
    Double,
    /// `<<'EOS'`
    Single,
    /// ``<<`EOS` ``
    Backtick,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum HeredocIndent {
    /// Terminator must start the line.
    None,
    /// `<<-`: terminator may be indented.
    Dash,
    /// `<<~`: terminator may be indented and the body is dedented.
    Tilde,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Heredoc {
    pub ident_start: u32,
    pub ident_end: u32,
    pub quote: HeredocQuote,
    pub indent: HeredocIndent,
    /// Where lexing resumes on the opening line once the body is done.
    pub next_start: u32,
}

impl Heredoc {
    pub fn interpolation(&self) -> bool {
        self.quote != HeredocQuote::Single
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum LexMode {
    /// Ruby tokens inside `#{ ... }`. Holds the brace nesting of the
    /// enclosing code, restored at the closing `}`.
    EmbExpr { saved_brace_nesting: i32 },
    /// A single `@ivar`, `@@cvar` or `$gvar` after `#` in a literal.
    EmbVar,
    /// `=begin` ... `=end`, one line per token.
    EmbDoc { start: u32 },
    Heredoc(Heredoc),
    /// `%w`, `%W`, `%i`, `%I`.
    List {
        interpolation: bool,
        delimiters: Delimiters,
    },
    Regexp {
        delimiters: Delimiters,
    },
    /// Quoted strings, symbols, `%q`/`%Q`/`%s`/`%x` and backticks.
    String {
        interpolation: bool,
        /// A closing `":` turns the string into a label.
        label_allowed: bool,
        delimiters: Delimiters,
    },
}
