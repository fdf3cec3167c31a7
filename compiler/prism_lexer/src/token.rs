//! Token types produced by the lexer.

use prism_ir::Span;
use std::fmt;

/// A token with its span in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Zero-width token at `offset`, used for synthesized tokens.
    pub const fn missing(offset: u32) -> Self {
        Token {
            kind: TokenKind::Missing,
            span: Span::point(offset),
        }
    }

    /// Source bytes of this token.
    #[inline]
    pub fn text<'a>(&self, source: &'a [u8]) -> &'a [u8] {
        self.span.slice(source)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Every token Ruby source can produce.
///
/// Trivia (comments, embedded documents, ignored newlines, `__END__`) are
/// tokens too so that `lex` can report them; the parser skips them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    Eof,
    /// Synthesized by recovery; never produced from source.
    Missing,

    // Trivia
    Comment,
    EmbDocBegin,
    EmbDocLine,
    EmbDocEnd,
    IgnoredNewline,
    /// `__END__` marker; everything after it is data.
    DataEnd,

    // Punctuation and operators
    Ampersand,
    AmpersandAmpersand,
    AmpersandAmpersandEqual,
    AmpersandDot,
    AmpersandEqual,
    Backtick,
    Bang,
    BangEqual,
    BangTilde,
    BraceLeft,
    BraceRight,
    /// `[` as an index or method call.
    BracketLeft,
    /// `[` opening an array literal.
    BracketLeftArray,
    /// `[]` as a method name.
    BracketLeftRight,
    /// `[]=` as a method name.
    BracketLeftRightEqual,
    BracketRight,
    Caret,
    CaretEqual,
    Colon,
    ColonColon,
    Comma,
    Dot,
    DotDot,
    DotDotDot,
    Equal,
    EqualEqual,
    EqualEqualEqual,
    EqualGreater,
    EqualTilde,
    Greater,
    GreaterEqual,
    GreaterGreater,
    GreaterGreaterEqual,
    Less,
    LessEqual,
    LessEqualGreater,
    LessLess,
    LessLessEqual,
    Minus,
    MinusEqual,
    /// `->` lambda arrow.
    MinusGreater,
    Newline,
    /// `(` in expression position or a call's argument list.
    ParenthesisLeft,
    /// `(` after a space in command-argument position: `foo (1)`.
    ParenthesisLeftParentheses,
    ParenthesisRight,
    Percent,
    PercentEqual,
    Pipe,
    PipeEqual,
    PipePipe,
    PipePipeEqual,
    Plus,
    PlusEqual,
    QuestionMark,
    Semicolon,
    Slash,
    SlashEqual,
    Star,
    StarEqual,
    StarStar,
    StarStarEqual,
    Tilde,
    /// `::` at the start of an expression.
    UColonColon,
    /// `..` with no left operand.
    UDotDot,
    /// `...` with no left operand.
    UDotDotDot,
    UMinus,
    /// `-` directly before a numeric literal.
    UMinusNum,
    UPlus,
    /// `*` splat.
    UStar,
    /// `**` double splat.
    UStarStar,
    /// `{` opening a `->` lambda body.
    LambdaBegin,

    // Names
    Identifier,
    Constant,
    InstanceVariable,
    ClassVariable,
    GlobalVariable,
    /// `$&`, `` $` ``, `$'`, `$+`
    BackReference,
    /// `$1`, `$2`, ...
    NthReference,
    /// `name:` in a hash or keyword argument.
    Label,

    // Literals
    Integer,
    Float,
    RationalNumber,
    ImaginaryNumber,
    /// `?a`
    CharacterLiteral,
    StringBegin,
    StringContent,
    StringEnd,
    /// `":` closing a quoted label such as `"key": 1`.
    LabelEnd,
    /// `:` or `:"` or `%s(` opening a symbol.
    SymbolBegin,
    RegexpBegin,
    /// Closing delimiter plus option letters.
    RegexpEnd,
    /// `%x(` opening a command string.
    PercentLowerX,
    PercentLowerW,
    PercentUpperW,
    PercentLowerI,
    PercentUpperI,
    /// Whitespace between `%w` and `%i` list elements.
    WordsSep,
    HeredocStart,
    HeredocEnd,
    /// `#{`
    EmbExprBegin,
    /// `}` closing `#{`
    EmbExprEnd,
    /// `#` before `@ivar`, `@@cvar` or `$gvar` inside a string.
    EmbVar,

    // Keywords
    KeywordAlias,
    KeywordAnd,
    KeywordBegin,
    /// `BEGIN`
    KeywordBeginUpcase,
    KeywordBreak,
    KeywordCase,
    KeywordClass,
    KeywordDef,
    KeywordDefined,
    KeywordDo,
    /// `do` closing the predicate of `while`, `until` or `for`.
    KeywordDoLoop,
    KeywordElse,
    KeywordElsif,
    KeywordEnd,
    /// `END`
    KeywordEndUpcase,
    KeywordEnsure,
    KeywordFalse,
    KeywordFor,
    KeywordIf,
    KeywordIfModifier,
    KeywordIn,
    KeywordModule,
    KeywordNext,
    KeywordNil,
    KeywordNot,
    KeywordOr,
    KeywordRedo,
    KeywordRescue,
    KeywordRescueModifier,
    KeywordRetry,
    KeywordReturn,
    KeywordSelf,
    KeywordSuper,
    KeywordThen,
    KeywordTrue,
    KeywordUndef,
    KeywordUnless,
    KeywordUnlessModifier,
    KeywordUntil,
    KeywordUntilModifier,
    KeywordWhen,
    KeywordWhile,
    KeywordWhileModifier,
    KeywordYield,
    /// `__ENCODING__`
    KeywordEncoding,
    /// `__FILE__`
    KeywordFile,
    /// `__LINE__`
    KeywordLine,
}

impl TokenKind {
    /// Upper snake case name, as printed by `prism lex`.
    #[expect(clippy::too_many_lines, reason = "exhaustive TokenKind → name dispatch")]
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Missing => "MISSING",
            TokenKind::Comment => "COMMENT",
            TokenKind::EmbDocBegin => "EMBDOC_BEGIN",
            TokenKind::EmbDocLine => "EMBDOC_LINE",
            TokenKind::EmbDocEnd => "EMBDOC_END",
            TokenKind::IgnoredNewline => "IGNORED_NEWLINE",
            TokenKind::DataEnd => "__END__",
            TokenKind::Ampersand => "AMPERSAND",
            TokenKind::AmpersandAmpersand => "AMPERSAND_AMPERSAND",
            TokenKind::AmpersandAmpersandEqual => "AMPERSAND_AMPERSAND_EQUAL",
            TokenKind::AmpersandDot => "AMPERSAND_DOT",
            TokenKind::AmpersandEqual => "AMPERSAND_EQUAL",
            TokenKind::Backtick => "BACKTICK",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::BangTilde => "BANG_TILDE",
            TokenKind::BraceLeft => "BRACE_LEFT",
            TokenKind::BraceRight => "BRACE_RIGHT",
            TokenKind::BracketLeft => "BRACKET_LEFT",
            TokenKind::BracketLeftArray => "BRACKET_LEFT_ARRAY",
            TokenKind::BracketLeftRight => "BRACKET_LEFT_RIGHT",
            TokenKind::BracketLeftRightEqual => "BRACKET_LEFT_RIGHT_EQUAL",
            TokenKind::BracketRight => "BRACKET_RIGHT",
            TokenKind::Caret => "CARET",
            TokenKind::CaretEqual => "CARET_EQUAL",
            TokenKind::Colon => "COLON",
            TokenKind::ColonColon => "COLON_COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::DotDot => "DOT_DOT",
            TokenKind::DotDotDot => "DOT_DOT_DOT",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::EqualEqualEqual => "EQUAL_EQUAL_EQUAL",
            TokenKind::EqualGreater => "EQUAL_GREATER",
            TokenKind::EqualTilde => "EQUAL_TILDE",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::GreaterGreater => "GREATER_GREATER",
            TokenKind::GreaterGreaterEqual => "GREATER_GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::LessEqualGreater => "LESS_EQUAL_GREATER",
            TokenKind::LessLess => "LESS_LESS",
            TokenKind::LessLessEqual => "LESS_LESS_EQUAL",
            TokenKind::Minus => "MINUS",
            TokenKind::MinusEqual => "MINUS_EQUAL",
            TokenKind::MinusGreater => "MINUS_GREATER",
            TokenKind::Newline => "NEWLINE",
            TokenKind::ParenthesisLeft => "PARENTHESIS_LEFT",
            TokenKind::ParenthesisLeftParentheses => "PARENTHESIS_LEFT_PARENTHESES",
            TokenKind::ParenthesisRight => "PARENTHESIS_RIGHT",
            TokenKind::Percent => "PERCENT",
            TokenKind::PercentEqual => "PERCENT_EQUAL",
            TokenKind::Pipe => "PIPE",
            TokenKind::PipeEqual => "PIPE_EQUAL",
            TokenKind::PipePipe => "PIPE_PIPE",
            TokenKind::PipePipeEqual => "PIPE_PIPE_EQUAL",
            TokenKind::Plus => "PLUS",
            TokenKind::PlusEqual => "PLUS_EQUAL",
            TokenKind::QuestionMark => "QUESTION_MARK",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slash => "SLASH",
            TokenKind::SlashEqual => "SLASH_EQUAL",
            TokenKind::Star => "STAR",
            TokenKind::StarEqual => "STAR_EQUAL",
            TokenKind::StarStar => "STAR_STAR",
            TokenKind::StarStarEqual => "STAR_STAR_EQUAL",
            TokenKind::Tilde => "TILDE",
            TokenKind::UColonColon => "UCOLON_COLON",
            TokenKind::UDotDot => "UDOT_DOT",
            TokenKind::UDotDotDot => "UDOT_DOT_DOT",
            TokenKind::UMinus => "UMINUS",
            TokenKind::UMinusNum => "UMINUS_NUM",
            TokenKind::UPlus => "UPLUS",
            TokenKind::UStar => "USTAR",
            TokenKind::UStarStar => "USTAR_STAR",
            TokenKind::LambdaBegin => "LAMBDA_BEGIN",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Constant => "CONSTANT",
            TokenKind::InstanceVariable => "INSTANCE_VARIABLE",
            TokenKind::ClassVariable => "CLASS_VARIABLE",
            TokenKind::GlobalVariable => "GLOBAL_VARIABLE",
            TokenKind::BackReference => "BACK_REFERENCE",
            TokenKind::NthReference => "NTH_REFERENCE",
            TokenKind::Label => "LABEL",
            TokenKind::Integer => "INTEGER",
            TokenKind::Float => "FLOAT",
            TokenKind::RationalNumber => "RATIONAL_NUMBER",
            TokenKind::ImaginaryNumber => "IMAGINARY_NUMBER",
            TokenKind::CharacterLiteral => "CHARACTER_LITERAL",
            TokenKind::StringBegin => "STRING_BEGIN",
            TokenKind::StringContent => "STRING_CONTENT",
            TokenKind::StringEnd => "STRING_END",
            TokenKind::LabelEnd => "LABEL_END",
            TokenKind::SymbolBegin => "SYMBOL_BEGIN",
            TokenKind::RegexpBegin => "REGEXP_BEGIN",
            TokenKind::RegexpEnd => "REGEXP_END",
            TokenKind::PercentLowerX => "PERCENT_LOWER_X",
            TokenKind::PercentLowerW => "PERCENT_LOWER_W",
            TokenKind::PercentUpperW => "PERCENT_UPPER_W",
            TokenKind::PercentLowerI => "PERCENT_LOWER_I",
            TokenKind::PercentUpperI => "PERCENT_UPPER_I",
            TokenKind::WordsSep => "WORDS_SEP",
            TokenKind::HeredocStart => "HEREDOC_START",
            TokenKind::HeredocEnd => "HEREDOC_END",
            TokenKind::EmbExprBegin => "EMBEXPR_BEGIN",
            TokenKind::EmbExprEnd => "EMBEXPR_END",
            TokenKind::EmbVar => "EMBVAR",
            TokenKind::KeywordAlias => "KEYWORD_ALIAS",
            TokenKind::KeywordAnd => "KEYWORD_AND",
            TokenKind::KeywordBegin => "KEYWORD_BEGIN",
            TokenKind::KeywordBeginUpcase => "KEYWORD_BEGIN_UPCASE",
            TokenKind::KeywordBreak => "KEYWORD_BREAK",
            TokenKind::KeywordCase => "KEYWORD_CASE",
            TokenKind::KeywordClass => "KEYWORD_CLASS",
            TokenKind::KeywordDef => "KEYWORD_DEF",
            TokenKind::KeywordDefined => "KEYWORD_DEFINED",
            TokenKind::KeywordDo => "KEYWORD_DO",
            TokenKind::KeywordDoLoop => "KEYWORD_DO_LOOP",
            TokenKind::KeywordElse => "KEYWORD_ELSE",
            TokenKind::KeywordElsif => "KEYWORD_ELSIF",
            TokenKind::KeywordEnd => "KEYWORD_END",
            TokenKind::KeywordEndUpcase => "KEYWORD_END_UPCASE",
            TokenKind::KeywordEnsure => "KEYWORD_ENSURE",
            TokenKind::KeywordFalse => "KEYWORD_FALSE",
            TokenKind::KeywordFor => "KEYWORD_FOR",
            TokenKind::KeywordIf => "KEYWORD_IF",
            TokenKind::KeywordIfModifier => "KEYWORD_IF_MODIFIER",
            TokenKind::KeywordIn => "KEYWORD_IN",
            TokenKind::KeywordModule => "KEYWORD_MODULE",
            TokenKind::KeywordNext => "KEYWORD_NEXT",
            TokenKind::KeywordNil => "KEYWORD_NIL",
            TokenKind::KeywordNot => "KEYWORD_NOT",
            TokenKind::KeywordOr => "KEYWORD_OR",
            TokenKind::KeywordRedo => "KEYWORD_REDO",
            TokenKind::KeywordRescue => "KEYWORD_RESCUE",
            TokenKind::KeywordRescueModifier => "KEYWORD_RESCUE_MODIFIER",
            TokenKind::KeywordRetry => "KEYWORD_RETRY",
            TokenKind::KeywordReturn => "KEYWORD_RETURN",
            TokenKind::KeywordSelf => "KEYWORD_SELF",
            TokenKind::KeywordSuper => "KEYWORD_SUPER",
            TokenKind::KeywordThen => "KEYWORD_THEN",
            TokenKind::KeywordTrue => "KEYWORD_TRUE",
            TokenKind::KeywordUndef => "KEYWORD_UNDEF",
            TokenKind::KeywordUnless => "KEYWORD_UNLESS",
            TokenKind::KeywordUnlessModifier => "KEYWORD_UNLESS_MODIFIER",
            TokenKind::KeywordUntil => "KEYWORD_UNTIL",
            TokenKind::KeywordUntilModifier => "KEYWORD_UNTIL_MODIFIER",
            TokenKind::KeywordWhen => "KEYWORD_WHEN",
            TokenKind::KeywordWhile => "KEYWORD_WHILE",
            TokenKind::KeywordWhileModifier => "KEYWORD_WHILE_MODIFIER",
            TokenKind::KeywordYield => "KEYWORD_YIELD",
            TokenKind::KeywordEncoding => "KEYWORD___ENCODING__",
            TokenKind::KeywordFile => "KEYWORD___FILE__",
            TokenKind::KeywordLine => "KEYWORD___LINE__",
        }
    }

    /// Human readable description for diagnostics, e.g. "'end'" or
    /// "end-of-input".
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Eof => "end-of-input",
            TokenKind::Missing => "missing token",
            TokenKind::Comment => "comment",
            TokenKind::EmbDocBegin | TokenKind::EmbDocLine | TokenKind::EmbDocEnd => {
                "embedded document"
            }
            TokenKind::Newline | TokenKind::IgnoredNewline => "newline",
            TokenKind::DataEnd => "'__END__'",
            TokenKind::Ampersand => "'&'",
            TokenKind::AmpersandAmpersand => "'&&'",
            TokenKind::AmpersandAmpersandEqual => "'&&='",
            TokenKind::AmpersandDot => "'&.'",
            TokenKind::AmpersandEqual => "'&='",
            TokenKind::Backtick => "'`'",
            TokenKind::Bang => "'!'",
            TokenKind::BangEqual => "'!='",
            TokenKind::BangTilde => "'!~'",
            TokenKind::BraceLeft | TokenKind::LambdaBegin => "'{'",
            TokenKind::BraceRight => "'}'",
            TokenKind::BracketLeft | TokenKind::BracketLeftArray => "'['",
            TokenKind::BracketLeftRight => "'[]'",
            TokenKind::BracketLeftRightEqual => "'[]='",
            TokenKind::BracketRight => "']'",
            TokenKind::Caret => "'^'",
            TokenKind::CaretEqual => "'^='",
            TokenKind::Colon => "':'",
            TokenKind::ColonColon | TokenKind::UColonColon => "'::'",
            TokenKind::Comma => "','",
            TokenKind::Dot => "'.'",
            TokenKind::DotDot | TokenKind::UDotDot => "'..'",
            TokenKind::DotDotDot | TokenKind::UDotDotDot => "'...'",
            TokenKind::Equal => "'='",
            TokenKind::EqualEqual => "'=='",
            TokenKind::EqualEqualEqual => "'==='",
            TokenKind::EqualGreater => "'=>'",
            TokenKind::EqualTilde => "'=~'",
            TokenKind::Greater => "'>'",
            TokenKind::GreaterEqual => "'>='",
            TokenKind::GreaterGreater => "'>>'",
            TokenKind::GreaterGreaterEqual => "'>>='",
            TokenKind::Less => "'<'",
            TokenKind::LessEqual => "'<='",
            TokenKind::LessEqualGreater => "'<=>'",
            TokenKind::LessLess => "'<<'",
            TokenKind::LessLessEqual => "'<<='",
            TokenKind::Minus | TokenKind::UMinus | TokenKind::UMinusNum => "'-'",
            TokenKind::MinusEqual => "'-='",
            TokenKind::MinusGreater => "'->'",
            TokenKind::ParenthesisLeft | TokenKind::ParenthesisLeftParentheses => "'('",
            TokenKind::ParenthesisRight => "')'",
            TokenKind::Percent => "'%'",
            TokenKind::PercentEqual => "'%='",
            TokenKind::Pipe => "'|'",
            TokenKind::PipeEqual => "'|='",
            TokenKind::PipePipe => "'||'",
            TokenKind::PipePipeEqual => "'||='",
            TokenKind::Plus | TokenKind::UPlus => "'+'",
            TokenKind::PlusEqual => "'+='",
            TokenKind::QuestionMark => "'?'",
            TokenKind::Semicolon => "';'",
            TokenKind::Slash => "'/'",
            TokenKind::SlashEqual => "'/='",
            TokenKind::Star | TokenKind::UStar => "'*'",
            TokenKind::StarEqual => "'*='",
            TokenKind::StarStar | TokenKind::UStarStar => "'**'",
            TokenKind::StarStarEqual => "'**='",
            TokenKind::Tilde => "'~'",
            TokenKind::Identifier => "local variable or method",
            TokenKind::Constant => "constant",
            TokenKind::InstanceVariable => "instance variable",
            TokenKind::ClassVariable => "class variable",
            TokenKind::GlobalVariable => "global variable",
            TokenKind::BackReference => "back reference",
            TokenKind::NthReference => "numbered reference",
            TokenKind::Label => "label",
            TokenKind::Integer => "integer",
            TokenKind::Float => "float",
            TokenKind::RationalNumber => "rational number",
            TokenKind::ImaginaryNumber => "imaginary number",
            TokenKind::CharacterLiteral => "character literal",
            TokenKind::StringBegin => "string literal",
            TokenKind::StringContent => "string content",
            TokenKind::StringEnd => "string ending",
            TokenKind::LabelEnd => "label terminator",
            TokenKind::SymbolBegin => "symbol literal",
            TokenKind::RegexpBegin => "regular expression beginning",
            TokenKind::RegexpEnd => "regular expression ending",
            TokenKind::PercentLowerX => "'%x'",
            TokenKind::PercentLowerW => "'%w'",
            TokenKind::PercentUpperW => "'%W'",
            TokenKind::PercentLowerI => "'%i'",
            TokenKind::PercentUpperI => "'%I'",
            TokenKind::WordsSep => "string separator",
            TokenKind::HeredocStart => "heredoc beginning",
            TokenKind::HeredocEnd => "heredoc ending",
            TokenKind::EmbExprBegin => "'#{'",
            TokenKind::EmbExprEnd => "'}'",
            TokenKind::EmbVar => "'#'",
            TokenKind::KeywordAlias => "'alias'",
            TokenKind::KeywordAnd => "'and'",
            TokenKind::KeywordBegin => "'begin'",
            TokenKind::KeywordBeginUpcase => "'BEGIN'",
            TokenKind::KeywordBreak => "'break'",
            TokenKind::KeywordCase => "'case'",
            TokenKind::KeywordClass => "'class'",
            TokenKind::KeywordDef => "'def'",
            TokenKind::KeywordDefined => "'defined?'",
            TokenKind::KeywordDo | TokenKind::KeywordDoLoop => "'do'",
            TokenKind::KeywordElse => "'else'",
            TokenKind::KeywordElsif => "'elsif'",
            TokenKind::KeywordEnd => "'end'",
            TokenKind::KeywordEndUpcase => "'END'",
            TokenKind::KeywordEnsure => "'ensure'",
            TokenKind::KeywordFalse => "'false'",
            TokenKind::KeywordFor => "'for'",
            TokenKind::KeywordIf | TokenKind::KeywordIfModifier => "'if'",
            TokenKind::KeywordIn => "'in'",
            TokenKind::KeywordModule => "'module'",
            TokenKind::KeywordNext => "'next'",
            TokenKind::KeywordNil => "'nil'",
            TokenKind::KeywordNot => "'not'",
            TokenKind::KeywordOr => "'or'",
            TokenKind::KeywordRedo => "'redo'",
            TokenKind::KeywordRescue | TokenKind::KeywordRescueModifier => "'rescue'",
            TokenKind::KeywordRetry => "'retry'",
            TokenKind::KeywordReturn => "'return'",
            TokenKind::KeywordSelf => "'self'",
            TokenKind::KeywordSuper => "'super'",
            TokenKind::KeywordThen => "'then'",
            TokenKind::KeywordTrue => "'true'",
            TokenKind::KeywordUndef => "'undef'",
            TokenKind::KeywordUnless | TokenKind::KeywordUnlessModifier => "'unless'",
            TokenKind::KeywordUntil | TokenKind::KeywordUntilModifier => "'until'",
            TokenKind::KeywordWhen => "'when'",
            TokenKind::KeywordWhile | TokenKind::KeywordWhileModifier => "'while'",
            TokenKind::KeywordYield => "'yield'",
            TokenKind::KeywordEncoding => "'__ENCODING__'",
            TokenKind::KeywordFile => "'__FILE__'",
            TokenKind::KeywordLine => "'__LINE__'",
        }
    }

    /// Tokens the parser never sees.
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Comment
                | TokenKind::EmbDocBegin
                | TokenKind::EmbDocLine
                | TokenKind::EmbDocEnd
                | TokenKind::IgnoredNewline
                | TokenKind::DataEnd
        )
    }

    /// Keywords, in any of their forms.
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::KeywordAlias
                | TokenKind::KeywordAnd
                | TokenKind::KeywordBegin
                | TokenKind::KeywordBeginUpcase
                | TokenKind::KeywordBreak
                | TokenKind::KeywordCase
                | TokenKind::KeywordClass
                | TokenKind::KeywordDef
                | TokenKind::KeywordDefined
                | TokenKind::KeywordDo
                | TokenKind::KeywordDoLoop
                | TokenKind::KeywordElse
                | TokenKind::KeywordElsif
                | TokenKind::KeywordEnd
                | TokenKind::KeywordEndUpcase
                | TokenKind::KeywordEnsure
                | TokenKind::KeywordFalse
                | TokenKind::KeywordFor
                | TokenKind::KeywordIf
                | TokenKind::KeywordIfModifier
                | TokenKind::KeywordIn
                | TokenKind::KeywordModule
                | TokenKind::KeywordNext
                | TokenKind::KeywordNil
                | TokenKind::KeywordNot
                | TokenKind::KeywordOr
                | TokenKind::KeywordRedo
                | TokenKind::KeywordRescue
                | TokenKind::KeywordRescueModifier
                | TokenKind::KeywordRetry
                | TokenKind::KeywordReturn
                | TokenKind::KeywordSelf
                | TokenKind::KeywordSuper
                | TokenKind::KeywordThen
                | TokenKind::KeywordTrue
                | TokenKind::KeywordUndef
                | TokenKind::KeywordUnless
                | TokenKind::KeywordUnlessModifier
                | TokenKind::KeywordUntil
                | TokenKind::KeywordUntilModifier
                | TokenKind::KeywordWhen
                | TokenKind::KeywordWhile
                | TokenKind::KeywordWhileModifier
                | TokenKind::KeywordYield
                | TokenKind::KeywordEncoding
                | TokenKind::KeywordFile
                | TokenKind::KeywordLine
        )
    }

    /// Tokens that end a statement.
    pub const fn is_terminator(self) -> bool {
        matches!(
            self,
            TokenKind::Newline | TokenKind::Semicolon | TokenKind::Eof
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
