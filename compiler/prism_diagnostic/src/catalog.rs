//! The diagnostic catalog.
//!
//! Every error and warning the lexer and parser can report has one
//! [`DiagnosticId`]. The message text lives in [`DiagnosticId::message`] and the
//! severity in [`DiagnosticId::severity`], both exhaustive matches, so adding a
//! variant without either does not compile.
//!
//! Message style: lowercase start, correct articles, literal tokens in
//! backticks, no trailing punctuation, "cannot" rather than "can't".
//! Entries containing `%` conversions are templates for
//! [`crate::DiagnosticList::append_format`].

use crate::Severity;

/// Identifies one catalog entry. Errors come first, then warnings.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum DiagnosticId {
    // Errors
    AliasArgument,
    AmpampeqMultiAssign,
    ArgumentAfterBlock,
    ArgumentAfterForwardingEllipses,
    ArgumentBareHash,
    ArgumentBlockMulti,
    ArgumentFormalClass,
    ArgumentFormalConstant,
    ArgumentFormalGlobal,
    ArgumentFormalIvar,
    ArgumentForwardingUnbound,
    ArgumentNoForwardingAmp,
    ArgumentNoForwardingEllipses,
    ArgumentNoForwardingStar,
    ArgumentSplatAfterAssocSplat,
    ArgumentTermParen,
    ArgumentUnexpectedBlock,
    ArrayElement,
    ArrayExpression,
    ArrayExpressionAfterStar,
    ArraySeparator,
    ArrayTerm,
    BeginLonelyElse,
    BeginTerm,
    BeginUpcaseBrace,
    BeginUpcaseTerm,
    BeginUpcaseToplevel,
    BlockParamLocalVariable,
    BlockParamPipeTerm,
    BlockTermBrace,
    BlockTermEnd,
    CannotParseExpression,
    CaseExpressionAfterCase,
    CaseExpressionAfterWhen,
    CaseMatchMissingPredicate,
    CaseMissingConditions,
    CaseTerm,
    ClassInMethod,
    ClassName,
    ClassSuperclass,
    ClassTerm,
    ClassUnexpectedEnd,
    ConditionalElsifPredicate,
    ConditionalIfPredicate,
    ConditionalPredicateTerm,
    ConditionalTerm,
    ConditionalTermElse,
    ConditionalUnlessPredicate,
    ConditionalUntilPredicate,
    ConditionalWhilePredicate,
    ConstantPathColonColonConstant,
    DefinedExpression,
    DefEndless,
    DefEndlessSetter,
    DefName,
    DefNameAfterReceiver,
    DefParamsTerm,
    DefParamsTermParen,
    DefReceiver,
    DefReceiverTerm,
    DefTerm,
    EmbdocTerm,
    EmbexprEnd,
    EmbvarInvalid,
    EndUpcaseBrace,
    EndUpcaseTerm,
    EscapeInvalidControl,
    EscapeInvalidControlRepeat,
    EscapeInvalidHexadecimal,
    EscapeInvalidMeta,
    EscapeInvalidMetaRepeat,
    EscapeInvalidUnicode,
    EscapeInvalidUnicodeCmFlags,
    EscapeInvalidUnicodeLiteral,
    EscapeInvalidUnicodeLong,
    EscapeInvalidUnicodeTerm,
    ExpectArgument,
    ExpectEolAfterStatement,
    ExpectExpressionAfterAmpampeq,
    ExpectExpressionAfterComma,
    ExpectExpressionAfterEqual,
    ExpectExpressionAfterLessLess,
    ExpectExpressionAfterLparen,
    ExpectExpressionAfterOperator,
    ExpectExpressionAfterPipepipeeq,
    ExpectExpressionAfterSplat,
    ExpectExpressionAfterSplatHash,
    ExpectExpressionAfterStar,
    ExpectIdentReqParameter,
    ExpectRbracket,
    ExpectRparen,
    ExpectRparenAfterMulti,
    ExpectRparenReqParameter,
    ExpectWhenDelimiter,
    ForCollection,
    ForIn,
    ForIndex,
    ForTerm,
    HashExpressionAfterLabel,
    HashKey,
    HashRocket,
    HashTerm,
    HashValue,
    HeredocIdentifier,
    HeredocTerm,
    IncompleteQuestionMark,
    IncompleteVariableClass,
    IncompleteVariableInstance,
    InvalidCharacter,
    InvalidEncodingMagicComment,
    InvalidFloatExponent,
    InvalidMultibyteCharacter,
    InvalidNumberBinary,
    InvalidNumberDecimal,
    InvalidNumberHexadecimal,
    InvalidNumberOctal,
    InvalidNumberUnderscore,
    InvalidPercent,
    InvalidRetryWithoutRescue,
    InvalidToken,
    InvalidVariableGlobal,
    InvalidYield,
    LambdaOpen,
    LambdaTermBrace,
    LambdaTermEnd,
    ListILowerElement,
    ListILowerTerm,
    ListIUpperElement,
    ListIUpperTerm,
    ListWLowerElement,
    ListWLowerTerm,
    ListWUpperElement,
    ListWUpperTerm,
    MixedEncoding,
    ModuleInMethod,
    ModuleName,
    ModuleTerm,
    MultiAssignMultiSplats,
    NotExpression,
    NumberedParameterNotAllowed,
    NumberedParameterOuterScope,
    NumberLiteralUnderscore,
    OperatorMultiAssign,
    OperatorWriteArguments,
    OperatorWriteBlock,
    ParameterAssocSplatMulti,
    ParameterBlockMulti,
    ParameterCircular,
    ParameterMethodName,
    ParameterNameRepeat,
    ParameterNoDefault,
    ParameterNoDefaultKw,
    ParameterNumberedReserved,
    ParameterOrder,
    ParameterSplatMulti,
    ParameterUnexpectedFwd,
    ParameterWildLooseComma,
    PatternExpressionAfterBracket,
    PatternExpressionAfterComma,
    PatternExpressionAfterHrocket,
    PatternExpressionAfterIn,
    PatternExpressionAfterKey,
    PatternExpressionAfterParen,
    PatternExpressionAfterPin,
    PatternExpressionAfterPipe,
    PatternExpressionAfterRange,
    PatternExpressionAfterRest,
    PatternHashKey,
    PatternHashKeyDuplicate,
    PatternHashKeyLabel,
    PatternIdentAfterHrocket,
    PatternLabelAfterComma,
    PatternRest,
    PatternTermBrace,
    PatternTermBracket,
    PatternTermParen,
    PipepipeeqMultiAssign,
    RegexpTerm,
    RegexpUnknownOptions,
    RescueExpression,
    RescueModifierValue,
    RescueTerm,
    RescueVariable,
    ReturnInvalid,
    StatementAlias,
    StatementPostexeEnd,
    StatementPreexeBegin,
    StatementUndef,
    StringConcatenation,
    StringInterpolatedTerm,
    StringLiteralTerm,
    SymbolInvalid,
    SymbolTermDynamic,
    SymbolTermInterpolated,
    TernaryColon,
    TernaryExpressionFalse,
    TernaryExpressionTrue,
    UnaryReceiverBang,
    UnaryReceiverMinus,
    UnaryReceiverPlus,
    UnaryReceiverTilde,
    UndefArgument,
    UnexpectedTokenCloseContext,
    UnexpectedTokenIgnore,
    UntilTerm,
    VoidExpression,
    WhileTerm,
    WriteTargetInMethod,
    WriteTargetReadonly,
    WriteTargetUnexpected,
    XstringTerm,

    // Warnings
    AmbiguousFirstArgumentMinus,
    AmbiguousFirstArgumentPlus,
    AmbiguousPrefixStar,
    AmbiguousSlash,
    DuplicatedHashKey,
    DuplicatedWhenClause,
    EncodingMagicCommentIgnored,
    EndInMethod,
    IntegerInFlipFlop,
    InvalidMagicCommentValue,
    LiteralInCondition,
}

impl DiagnosticId {
    /// Every catalog entry, errors first.
    pub const ALL: [DiagnosticId; 222] = [
        DiagnosticId::AliasArgument,
        DiagnosticId::AmpampeqMultiAssign,
        DiagnosticId::ArgumentAfterBlock,
        DiagnosticId::ArgumentAfterForwardingEllipses,
        DiagnosticId::ArgumentBareHash,
        DiagnosticId::ArgumentBlockMulti,
        DiagnosticId::ArgumentFormalClass,
        DiagnosticId::ArgumentFormalConstant,
        DiagnosticId::ArgumentFormalGlobal,
        DiagnosticId::ArgumentFormalIvar,
        DiagnosticId::ArgumentForwardingUnbound,
        DiagnosticId::ArgumentNoForwardingAmp,
        DiagnosticId::ArgumentNoForwardingEllipses,
        DiagnosticId::ArgumentNoForwardingStar,
        DiagnosticId::ArgumentSplatAfterAssocSplat,
        DiagnosticId::ArgumentTermParen,
        DiagnosticId::ArgumentUnexpectedBlock,
        DiagnosticId::ArrayElement,
        DiagnosticId::ArrayExpression,
        DiagnosticId::ArrayExpressionAfterStar,
        DiagnosticId::ArraySeparator,
        DiagnosticId::ArrayTerm,
        DiagnosticId::BeginLonelyElse,
        DiagnosticId::BeginTerm,
        DiagnosticId::BeginUpcaseBrace,
        DiagnosticId::BeginUpcaseTerm,
        DiagnosticId::BeginUpcaseToplevel,
        DiagnosticId::BlockParamLocalVariable,
        DiagnosticId::BlockParamPipeTerm,
        DiagnosticId::BlockTermBrace,
        DiagnosticId::BlockTermEnd,
        DiagnosticId::CannotParseExpression,
        DiagnosticId::CaseExpressionAfterCase,
        DiagnosticId::CaseExpressionAfterWhen,
        DiagnosticId::CaseMatchMissingPredicate,
        DiagnosticId::CaseMissingConditions,
        DiagnosticId::CaseTerm,
        DiagnosticId::ClassInMethod,
        DiagnosticId::ClassName,
        DiagnosticId::ClassSuperclass,
        DiagnosticId::ClassTerm,
        DiagnosticId::ClassUnexpectedEnd,
        DiagnosticId::ConditionalElsifPredicate,
        DiagnosticId::ConditionalIfPredicate,
        DiagnosticId::ConditionalPredicateTerm,
        DiagnosticId::ConditionalTerm,
        DiagnosticId::ConditionalTermElse,
        DiagnosticId::ConditionalUnlessPredicate,
        DiagnosticId::ConditionalUntilPredicate,
        DiagnosticId::ConditionalWhilePredicate,
        DiagnosticId::ConstantPathColonColonConstant,
        DiagnosticId::DefinedExpression,
        DiagnosticId::DefEndless,
        DiagnosticId::DefEndlessSetter,
        DiagnosticId::DefName,
        DiagnosticId::DefNameAfterReceiver,
        DiagnosticId::DefParamsTerm,
        DiagnosticId::DefParamsTermParen,
        DiagnosticId::DefReceiver,
        DiagnosticId::DefReceiverTerm,
        DiagnosticId::DefTerm,
        DiagnosticId::EmbdocTerm,
        DiagnosticId::EmbexprEnd,
        DiagnosticId::EmbvarInvalid,
        DiagnosticId::EndUpcaseBrace,
        DiagnosticId::EndUpcaseTerm,
        DiagnosticId::EscapeInvalidControl,
        DiagnosticId::EscapeInvalidControlRepeat,
        DiagnosticId::EscapeInvalidHexadecimal,
        DiagnosticId::EscapeInvalidMeta,
        DiagnosticId::EscapeInvalidMetaRepeat,
        DiagnosticId::EscapeInvalidUnicode,
        DiagnosticId::EscapeInvalidUnicodeCmFlags,
        DiagnosticId::EscapeInvalidUnicodeLiteral,
        DiagnosticId::EscapeInvalidUnicodeLong,
        DiagnosticId::EscapeInvalidUnicodeTerm,
        DiagnosticId::ExpectArgument,
        DiagnosticId::ExpectEolAfterStatement,
        DiagnosticId::ExpectExpressionAfterAmpampeq,
        DiagnosticId::ExpectExpressionAfterComma,
        DiagnosticId::ExpectExpressionAfterEqual,
        DiagnosticId::ExpectExpressionAfterLessLess,
        DiagnosticId::ExpectExpressionAfterLparen,
        DiagnosticId::ExpectExpressionAfterOperator,
        DiagnosticId::ExpectExpressionAfterPipepipeeq,
        DiagnosticId::ExpectExpressionAfterSplat,
        DiagnosticId::ExpectExpressionAfterSplatHash,
        DiagnosticId::ExpectExpressionAfterStar,
        DiagnosticId::ExpectIdentReqParameter,
        DiagnosticId::ExpectRbracket,
        DiagnosticId::ExpectRparen,
        DiagnosticId::ExpectRparenAfterMulti,
        DiagnosticId::ExpectRparenReqParameter,
        DiagnosticId::ExpectWhenDelimiter,
        DiagnosticId::ForCollection,
        DiagnosticId::ForIn,
        DiagnosticId::ForIndex,
        DiagnosticId::ForTerm,
        DiagnosticId::HashExpressionAfterLabel,
        DiagnosticId::HashKey,
        DiagnosticId::HashRocket,
        DiagnosticId::HashTerm,
        DiagnosticId::HashValue,
        DiagnosticId::HeredocIdentifier,
        DiagnosticId::HeredocTerm,
        DiagnosticId::IncompleteQuestionMark,
        DiagnosticId::IncompleteVariableClass,
        DiagnosticId::IncompleteVariableInstance,
        DiagnosticId::InvalidCharacter,
        DiagnosticId::InvalidEncodingMagicComment,
        DiagnosticId::InvalidFloatExponent,
        DiagnosticId::InvalidMultibyteCharacter,
        DiagnosticId::InvalidNumberBinary,
        DiagnosticId::InvalidNumberDecimal,
        DiagnosticId::InvalidNumberHexadecimal,
        DiagnosticId::InvalidNumberOctal,
        DiagnosticId::InvalidNumberUnderscore,
        DiagnosticId::InvalidPercent,
        DiagnosticId::InvalidRetryWithoutRescue,
        DiagnosticId::InvalidToken,
        DiagnosticId::InvalidVariableGlobal,
        DiagnosticId::InvalidYield,
        DiagnosticId::LambdaOpen,
        DiagnosticId::LambdaTermBrace,
        DiagnosticId::LambdaTermEnd,
        DiagnosticId::ListILowerElement,
        DiagnosticId::ListILowerTerm,
        DiagnosticId::ListIUpperElement,
        DiagnosticId::ListIUpperTerm,
        DiagnosticId::ListWLowerElement,
        DiagnosticId::ListWLowerTerm,
        DiagnosticId::ListWUpperElement,
        DiagnosticId::ListWUpperTerm,
        DiagnosticId::MixedEncoding,
        DiagnosticId::ModuleInMethod,
        DiagnosticId::ModuleName,
        DiagnosticId::ModuleTerm,
        DiagnosticId::MultiAssignMultiSplats,
        DiagnosticId::NotExpression,
        DiagnosticId::NumberedParameterNotAllowed,
        DiagnosticId::NumberedParameterOuterScope,
        DiagnosticId::NumberLiteralUnderscore,
        DiagnosticId::OperatorMultiAssign,
        DiagnosticId::OperatorWriteArguments,
        DiagnosticId::OperatorWriteBlock,
        DiagnosticId::ParameterAssocSplatMulti,
        DiagnosticId::ParameterBlockMulti,
        DiagnosticId::ParameterCircular,
        DiagnosticId::ParameterMethodName,
        DiagnosticId::ParameterNameRepeat,
        DiagnosticId::ParameterNoDefault,
        DiagnosticId::ParameterNoDefaultKw,
        DiagnosticId::ParameterNumberedReserved,
        DiagnosticId::ParameterOrder,
        DiagnosticId::ParameterSplatMulti,
        DiagnosticId::ParameterUnexpectedFwd,
        DiagnosticId::ParameterWildLooseComma,
        DiagnosticId::PatternExpressionAfterBracket,
        DiagnosticId::PatternExpressionAfterComma,
        DiagnosticId::PatternExpressionAfterHrocket,
        DiagnosticId::PatternExpressionAfterIn,
        DiagnosticId::PatternExpressionAfterKey,
        DiagnosticId::PatternExpressionAfterParen,
        DiagnosticId::PatternExpressionAfterPin,
        DiagnosticId::PatternExpressionAfterPipe,
        DiagnosticId::PatternExpressionAfterRange,
        DiagnosticId::PatternExpressionAfterRest,
        DiagnosticId::PatternHashKey,
        DiagnosticId::PatternHashKeyDuplicate,
        DiagnosticId::PatternHashKeyLabel,
        DiagnosticId::PatternIdentAfterHrocket,
        DiagnosticId::PatternLabelAfterComma,
        DiagnosticId::PatternRest,
        DiagnosticId::PatternTermBrace,
        DiagnosticId::PatternTermBracket,
        DiagnosticId::PatternTermParen,
        DiagnosticId::PipepipeeqMultiAssign,
        DiagnosticId::RegexpTerm,
        DiagnosticId::RegexpUnknownOptions,
        DiagnosticId::RescueExpression,
        DiagnosticId::RescueModifierValue,
        DiagnosticId::RescueTerm,
        DiagnosticId::RescueVariable,
        DiagnosticId::ReturnInvalid,
        DiagnosticId::StatementAlias,
        DiagnosticId::StatementPostexeEnd,
        DiagnosticId::StatementPreexeBegin,
        DiagnosticId::StatementUndef,
        DiagnosticId::StringConcatenation,
        DiagnosticId::StringInterpolatedTerm,
        DiagnosticId::StringLiteralTerm,
        DiagnosticId::SymbolInvalid,
        DiagnosticId::SymbolTermDynamic,
        DiagnosticId::SymbolTermInterpolated,
        DiagnosticId::TernaryColon,
        DiagnosticId::TernaryExpressionFalse,
        DiagnosticId::TernaryExpressionTrue,
        DiagnosticId::UnaryReceiverBang,
        DiagnosticId::UnaryReceiverMinus,
        DiagnosticId::UnaryReceiverPlus,
        DiagnosticId::UnaryReceiverTilde,
        DiagnosticId::UndefArgument,
        DiagnosticId::UnexpectedTokenCloseContext,
        DiagnosticId::UnexpectedTokenIgnore,
        DiagnosticId::UntilTerm,
        DiagnosticId::VoidExpression,
        DiagnosticId::WhileTerm,
        DiagnosticId::WriteTargetInMethod,
        DiagnosticId::WriteTargetReadonly,
        DiagnosticId::WriteTargetUnexpected,
        DiagnosticId::XstringTerm,
        DiagnosticId::AmbiguousFirstArgumentMinus,
        DiagnosticId::AmbiguousFirstArgumentPlus,
        DiagnosticId::AmbiguousPrefixStar,
        DiagnosticId::AmbiguousSlash,
        DiagnosticId::DuplicatedHashKey,
        DiagnosticId::DuplicatedWhenClause,
        DiagnosticId::EncodingMagicCommentIgnored,
        DiagnosticId::EndInMethod,
        DiagnosticId::IntegerInFlipFlop,
        DiagnosticId::InvalidMagicCommentValue,
        DiagnosticId::LiteralInCondition,
    ];

    /// Catalog text, possibly a format template.
    #[expect(clippy::too_many_lines, reason = "exhaustive catalog dispatch")]
    pub const fn message(self) -> &'static str {
        match self {
            DiagnosticId::AliasArgument => "invalid argument being passed to `alias`; expected a bare word, symbol, constant, or global variable",
            DiagnosticId::AmpampeqMultiAssign => "unexpected `&&=` in a multiple assignment",
            DiagnosticId::ArgumentAfterBlock => "unexpected argument after a block argument",
            DiagnosticId::ArgumentAfterForwardingEllipses => "unexpected argument after `...`",
            DiagnosticId::ArgumentBareHash => "unexpected bare hash argument",
            DiagnosticId::ArgumentBlockMulti => "multiple block arguments; only one block is allowed",
            DiagnosticId::ArgumentFormalClass => "invalid formal argument; formal argument cannot be a class variable",
            DiagnosticId::ArgumentFormalConstant => "invalid formal argument; formal argument cannot be a constant",
            DiagnosticId::ArgumentFormalGlobal => "invalid formal argument; formal argument cannot be a global variable",
            DiagnosticId::ArgumentFormalIvar => "invalid formal argument; formal argument cannot be an instance variable",
            DiagnosticId::ArgumentForwardingUnbound => "unexpected `...` in a non-parenthesized call",
            DiagnosticId::ArgumentNoForwardingAmp => "unexpected `&` when the parent method is not forwarding",
            DiagnosticId::ArgumentNoForwardingEllipses => "unexpected `...` when the parent method is not forwarding",
            DiagnosticId::ArgumentNoForwardingStar => "unexpected `*` when the parent method is not forwarding",
            DiagnosticId::ArgumentSplatAfterAssocSplat => "unexpected `*` splat argument after a `**` keyword splat argument",
            DiagnosticId::ArgumentTermParen => "expected a `)` to close the arguments",
            DiagnosticId::ArgumentUnexpectedBlock => "unexpected `{` after a method call without parenthesis",
            DiagnosticId::ArrayElement => "expected an element for the array",
            DiagnosticId::ArrayExpression => "expected an expression for the array element",
            DiagnosticId::ArrayExpressionAfterStar => "expected an expression after `*` in the array",
            DiagnosticId::ArraySeparator => "expected a `,` separator for the array elements",
            DiagnosticId::ArrayTerm => "expected a `]` to close the array",
            DiagnosticId::BeginLonelyElse => "unexpected `else` in `begin` block; a `rescue` clause must precede `else`",
            DiagnosticId::BeginTerm => "expected an `end` to close the `begin` statement",
            DiagnosticId::BeginUpcaseBrace => "expected a `{` after `BEGIN`",
            DiagnosticId::BeginUpcaseTerm => "expected a `}` to close the `BEGIN` statement",
            DiagnosticId::BeginUpcaseToplevel => "BEGIN is permitted only at toplevel",
            DiagnosticId::BlockParamLocalVariable => "expected a local variable name in the block parameters",
            DiagnosticId::BlockParamPipeTerm => "expected the block parameters to end with `|`",
            DiagnosticId::BlockTermBrace => "expected a block beginning with `{` to end with `}`",
            DiagnosticId::BlockTermEnd => "expected a block beginning with `do` to end with `end`",
            DiagnosticId::CannotParseExpression => "cannot parse the expression",
            DiagnosticId::CaseExpressionAfterCase => "expected an expression after `case`",
            DiagnosticId::CaseExpressionAfterWhen => "expected an expression after `when`",
            DiagnosticId::CaseMatchMissingPredicate => "expected a predicate for a case matching statement",
            DiagnosticId::CaseMissingConditions => "expected a `when` or `in` clause after `case`",
            DiagnosticId::CaseTerm => "expected an `end` to close the `case` statement",
            DiagnosticId::ClassInMethod => "unexpected class definition in a method definition",
            DiagnosticId::ClassName => "expected a constant name after `class`",
            DiagnosticId::ClassSuperclass => "expected a superclass after `<`",
            DiagnosticId::ClassTerm => "expected an `end` to close the `class` statement",
            DiagnosticId::ClassUnexpectedEnd => "unexpected `end`, expecting ';' or '\\n'",
            DiagnosticId::ConditionalElsifPredicate => "expected a predicate expression for the `elsif` statement",
            DiagnosticId::ConditionalIfPredicate => "expected a predicate expression for the `if` statement",
            DiagnosticId::ConditionalPredicateTerm => "expected `then` or `;` or '\\n'",
            DiagnosticId::ConditionalTerm => "expected an `end` to close the conditional clause",
            DiagnosticId::ConditionalTermElse => "expected an `end` to close the `else` clause",
            DiagnosticId::ConditionalUnlessPredicate => "expected a predicate expression for the `unless` statement",
            DiagnosticId::ConditionalUntilPredicate => "expected a predicate expression for the `until` statement",
            DiagnosticId::ConditionalWhilePredicate => "expected a predicate expression for the `while` statement",
            DiagnosticId::ConstantPathColonColonConstant => "expected a constant after the `::` operator",
            DiagnosticId::DefinedExpression => "expected an expression after `defined?`",
            DiagnosticId::DefEndless => "could not parse the endless method body",
            DiagnosticId::DefEndlessSetter => "invalid method name; a setter method cannot be defined in an endless method definition",
            DiagnosticId::DefName => "expected a method name",
            DiagnosticId::DefNameAfterReceiver => "expected a method name after the receiver",
            DiagnosticId::DefParamsTerm => "expected a delimiter to close the parameters",
            DiagnosticId::DefParamsTermParen => "expected a `)` to close the parameters",
            DiagnosticId::DefReceiver => "expected a receiver for the method definition",
            DiagnosticId::DefReceiverTerm => "expected a `.` or `::` after the receiver in a method definition",
            DiagnosticId::DefTerm => "expected an `end` to close the `def` statement",
            DiagnosticId::EmbdocTerm => "could not find a terminator for the embedded document",
            DiagnosticId::EmbexprEnd => "expected a `}` to close the embedded expression",
            DiagnosticId::EmbvarInvalid => "invalid embedded variable",
            DiagnosticId::EndUpcaseBrace => "expected a `{` after `END`",
            DiagnosticId::EndUpcaseTerm => "expected a `}` to close the `END` statement",
            DiagnosticId::EscapeInvalidControl => "invalid control escape sequence",
            DiagnosticId::EscapeInvalidControlRepeat => "invalid control escape sequence; control cannot be repeated",
            DiagnosticId::EscapeInvalidHexadecimal => "invalid hexadecimal escape sequence",
            DiagnosticId::EscapeInvalidMeta => "invalid meta escape sequence",
            DiagnosticId::EscapeInvalidMetaRepeat => "invalid meta escape sequence; meta cannot be repeated",
            DiagnosticId::EscapeInvalidUnicode => "invalid Unicode escape sequence",
            DiagnosticId::EscapeInvalidUnicodeCmFlags => "invalid Unicode escape sequence; Unicode cannot be combined with control or meta flags",
            DiagnosticId::EscapeInvalidUnicodeLiteral => "invalid Unicode escape sequence; multiple codepoints are not allowed in a character literal",
            DiagnosticId::EscapeInvalidUnicodeLong => "invalid Unicode escape sequence; maximum length is 6 digits",
            DiagnosticId::EscapeInvalidUnicodeTerm => "invalid Unicode escape sequence; needs closing `}`",
            DiagnosticId::ExpectArgument => "expected an argument",
            DiagnosticId::ExpectEolAfterStatement => "expected a newline or semicolon after the statement",
            DiagnosticId::ExpectExpressionAfterAmpampeq => "expected an expression after `&&=`",
            DiagnosticId::ExpectExpressionAfterComma => "expected an expression after `,`",
            DiagnosticId::ExpectExpressionAfterEqual => "expected an expression after `=`",
            DiagnosticId::ExpectExpressionAfterLessLess => "expected an expression after `<<`",
            DiagnosticId::ExpectExpressionAfterLparen => "expected an expression after `(`",
            DiagnosticId::ExpectExpressionAfterOperator => "expected an expression after the operator",
            DiagnosticId::ExpectExpressionAfterPipepipeeq => "expected an expression after `||=`",
            DiagnosticId::ExpectExpressionAfterSplat => "expected an expression after `*` splat in an argument",
            DiagnosticId::ExpectExpressionAfterSplatHash => "expected an expression after `**` in a hash",
            DiagnosticId::ExpectExpressionAfterStar => "expected an expression after `*`",
            DiagnosticId::ExpectIdentReqParameter => "expected an identifier for the required parameter",
            DiagnosticId::ExpectRbracket => "expected a matching `]`",
            DiagnosticId::ExpectRparen => "expected a matching `)`",
            DiagnosticId::ExpectRparenAfterMulti => "expected a `)` after multiple assignment",
            DiagnosticId::ExpectRparenReqParameter => "expected a `)` to end a required parameter",
            DiagnosticId::ExpectWhenDelimiter => "expected a delimiter after the predicates of a `when` clause",
            DiagnosticId::ForCollection => "expected a collection after the `in` in a `for` statement",
            DiagnosticId::ForIn => "expected an `in` after the index in a `for` statement",
            DiagnosticId::ForIndex => "expected an index after `for`",
            DiagnosticId::ForTerm => "expected an `end` to close the `for` loop",
            DiagnosticId::HashExpressionAfterLabel => "expected an expression after the label in a hash",
            DiagnosticId::HashKey => "expected a key in the hash literal",
            DiagnosticId::HashRocket => "expected a `=>` between the hash key and value",
            DiagnosticId::HashTerm => "expected a `}` to close the hash literal",
            DiagnosticId::HashValue => "expected a value in the hash literal",
            DiagnosticId::HeredocIdentifier => "expected a heredoc identifier",
            DiagnosticId::HeredocTerm => "could not find a terminator for the heredoc",
            DiagnosticId::IncompleteQuestionMark => "incomplete expression at `?`",
            DiagnosticId::IncompleteVariableClass => "incomplete class variable",
            DiagnosticId::IncompleteVariableInstance => "incomplete instance variable",
            DiagnosticId::InvalidCharacter => "invalid character `%s`",
            DiagnosticId::InvalidEncodingMagicComment => "unknown or invalid encoding in the magic comment",
            DiagnosticId::InvalidFloatExponent => "invalid exponent",
            DiagnosticId::InvalidMultibyteCharacter => "invalid multibyte character in %s source",
            DiagnosticId::InvalidNumberBinary => "invalid binary number",
            DiagnosticId::InvalidNumberDecimal => "invalid decimal number",
            DiagnosticId::InvalidNumberHexadecimal => "invalid hexadecimal number",
            DiagnosticId::InvalidNumberOctal => "invalid octal number",
            DiagnosticId::InvalidNumberUnderscore => "invalid underscore placement in number",
            DiagnosticId::InvalidPercent => "invalid `%` token",
            DiagnosticId::InvalidRetryWithoutRescue => "invalid `retry` without `rescue`",
            DiagnosticId::InvalidToken => "invalid token",
            DiagnosticId::InvalidVariableGlobal => "invalid global variable",
            DiagnosticId::InvalidYield => "invalid `yield` in a class body",
            DiagnosticId::LambdaOpen => "expected a `do` keyword or a `{` to open the lambda block",
            DiagnosticId::LambdaTermBrace => "expected a lambda block beginning with `{` to end with `}`",
            DiagnosticId::LambdaTermEnd => "expected a lambda block beginning with `do` to end with `end`",
            DiagnosticId::ListILowerElement => "expected a symbol in a `%i` list",
            DiagnosticId::ListILowerTerm => "expected a closing delimiter for the `%i` list",
            DiagnosticId::ListIUpperElement => "expected a symbol in a `%I` list",
            DiagnosticId::ListIUpperTerm => "expected a closing delimiter for the `%I` list",
            DiagnosticId::ListWLowerElement => "expected a string in a `%w` list",
            DiagnosticId::ListWLowerTerm => "expected a closing delimiter for the `%w` list",
            DiagnosticId::ListWUpperElement => "expected a string in a `%W` list",
            DiagnosticId::ListWUpperTerm => "expected a closing delimiter for the `%W` list",
            DiagnosticId::MixedEncoding => "UTF-8 mixed within %s source",
            DiagnosticId::ModuleInMethod => "unexpected module definition in a method definition",
            DiagnosticId::ModuleName => "expected a constant name after `module`",
            DiagnosticId::ModuleTerm => "expected an `end` to close the `module` statement",
            DiagnosticId::MultiAssignMultiSplats => "multiple splats in multiple assignment",
            DiagnosticId::NotExpression => "expected an expression after `not`",
            DiagnosticId::NumberedParameterNotAllowed => "numbered parameters are not allowed when an ordinary parameter is defined",
            DiagnosticId::NumberedParameterOuterScope => "numbered parameter is already used in outer scope",
            DiagnosticId::NumberLiteralUnderscore => "number literal ending with a `_`",
            DiagnosticId::OperatorMultiAssign => "unexpected operator for a multiple assignment",
            DiagnosticId::OperatorWriteArguments => "unexpected operator after a call with arguments",
            DiagnosticId::OperatorWriteBlock => "unexpected operator after a call with a block",
            DiagnosticId::ParameterAssocSplatMulti => "unexpected multiple `**` splat parameters",
            DiagnosticId::ParameterBlockMulti => "multiple block parameters; only one block is allowed",
            DiagnosticId::ParameterCircular => "parameter default value references itself",
            DiagnosticId::ParameterMethodName => "unexpected name for a parameter",
            DiagnosticId::ParameterNameRepeat => "repeated parameter name",
            DiagnosticId::ParameterNoDefault => "expected a default value for the parameter",
            DiagnosticId::ParameterNoDefaultKw => "expected a default value for the keyword parameter",
            DiagnosticId::ParameterNumberedReserved => "%.2s is reserved for numbered parameters",
            DiagnosticId::ParameterOrder => "unexpected parameter order",
            DiagnosticId::ParameterSplatMulti => "unexpected multiple `*` splat parameters",
            DiagnosticId::ParameterUnexpectedFwd => "unexpected `...` in parameters",
            DiagnosticId::ParameterWildLooseComma => "unexpected `,` in parameters",
            DiagnosticId::PatternExpressionAfterBracket => "expected a pattern expression after the `[` operator",
            DiagnosticId::PatternExpressionAfterComma => "expected a pattern expression after `,`",
            DiagnosticId::PatternExpressionAfterHrocket => "expected a pattern expression after `=>`",
            DiagnosticId::PatternExpressionAfterIn => "expected a pattern expression after the `in` keyword",
            DiagnosticId::PatternExpressionAfterKey => "expected a pattern expression after the key",
            DiagnosticId::PatternExpressionAfterParen => "expected a pattern expression after the `(` operator",
            DiagnosticId::PatternExpressionAfterPin => "expected a pattern expression after the `^` pin operator",
            DiagnosticId::PatternExpressionAfterPipe => "expected a pattern expression after the `|` operator",
            DiagnosticId::PatternExpressionAfterRange => "expected a pattern expression after the range operator",
            DiagnosticId::PatternExpressionAfterRest => "unexpected pattern expression after the `**` expression",
            DiagnosticId::PatternHashKey => "expected a key in the hash pattern",
            DiagnosticId::PatternHashKeyDuplicate => "duplicated key name",
            DiagnosticId::PatternHashKeyLabel => "expected a label as the key in the hash pattern",
            DiagnosticId::PatternIdentAfterHrocket => "expected an identifier after the `=>` operator",
            DiagnosticId::PatternLabelAfterComma => "expected a label after the `,` in the hash pattern",
            DiagnosticId::PatternRest => "unexpected rest pattern",
            DiagnosticId::PatternTermBrace => "expected a `}` to close the pattern expression",
            DiagnosticId::PatternTermBracket => "expected a `]` to close the pattern expression",
            DiagnosticId::PatternTermParen => "expected a `)` to close the pattern expression",
            DiagnosticId::PipepipeeqMultiAssign => "unexpected `||=` in a multiple assignment",
            DiagnosticId::RegexpTerm => "expected a closing delimiter for the regular expression",
            DiagnosticId::RegexpUnknownOptions => "unknown regexp option: %s",
            DiagnosticId::RescueExpression => "expected a rescued expression",
            DiagnosticId::RescueModifierValue => "expected a value after the `rescue` modifier",
            DiagnosticId::RescueTerm => "expected a closing delimiter for the `rescue` clause",
            DiagnosticId::RescueVariable => "expected an exception variable after `=>` in a rescue statement",
            DiagnosticId::ReturnInvalid => "invalid `return` in a class or module body",
            DiagnosticId::StatementAlias => "unexpected `alias` at a non-statement position",
            DiagnosticId::StatementPostexeEnd => "unexpected `END` at a non-statement position",
            DiagnosticId::StatementPreexeBegin => "unexpected `BEGIN` at a non-statement position",
            DiagnosticId::StatementUndef => "unexpected `undef` at a non-statement position",
            DiagnosticId::StringConcatenation => "expected a string for concatenation",
            DiagnosticId::StringInterpolatedTerm => "expected a closing delimiter for the interpolated string",
            DiagnosticId::StringLiteralTerm => "expected a closing delimiter for the string literal",
            DiagnosticId::SymbolInvalid => "invalid symbol",
            DiagnosticId::SymbolTermDynamic => "expected a closing delimiter for the dynamic symbol",
            DiagnosticId::SymbolTermInterpolated => "expected a closing delimiter for the interpolated symbol",
            DiagnosticId::TernaryColon => "expected a `:` after the true expression of a ternary operator",
            DiagnosticId::TernaryExpressionFalse => "expected an expression after `:` in the ternary operator",
            DiagnosticId::TernaryExpressionTrue => "expected an expression after `?` in the ternary operator",
            DiagnosticId::UnaryReceiverBang => "expected a receiver for unary `!`",
            DiagnosticId::UnaryReceiverMinus => "expected a receiver for unary `-`",
            DiagnosticId::UnaryReceiverPlus => "expected a receiver for unary `+`",
            DiagnosticId::UnaryReceiverTilde => "expected a receiver for unary `~`",
            DiagnosticId::UndefArgument => "invalid argument being passed to `undef`; expected a bare word, constant, or symbol argument",
            DiagnosticId::UnexpectedTokenCloseContext => "unexpected %s, assuming it is closing the parent %s",
            DiagnosticId::UnexpectedTokenIgnore => "unexpected %s, ignoring it",
            DiagnosticId::UntilTerm => "expected an `end` to close the `until` statement",
            DiagnosticId::VoidExpression => "unexpected void value expression",
            DiagnosticId::WhileTerm => "expected an `end` to close the `while` statement",
            DiagnosticId::WriteTargetInMethod => "dynamic constant assignment",
            DiagnosticId::WriteTargetReadonly => "immutable variable as a write target",
            DiagnosticId::WriteTargetUnexpected => "unexpected write target",
            DiagnosticId::XstringTerm => "expected a closing delimiter for the `%x` or backtick string",
            DiagnosticId::AmbiguousFirstArgumentMinus => "ambiguous first argument; put parentheses or a space even after `-` operator",
            DiagnosticId::AmbiguousFirstArgumentPlus => "ambiguous first argument; put parentheses or a space even after `+` operator",
            DiagnosticId::AmbiguousPrefixStar => "ambiguous `*` has been interpreted as an argument prefix",
            DiagnosticId::AmbiguousSlash => "ambiguous `/`; wrap regexp in parentheses or add a space after `/` operator",
            DiagnosticId::DuplicatedHashKey => "key %s is duplicated and overwritten on line %d",
            DiagnosticId::DuplicatedWhenClause => "'when' clause on line %d duplicates 'when' clause on line %d and is ignored",
            DiagnosticId::EncodingMagicCommentIgnored => "encoding magic comment is ignored after the first line",
            DiagnosticId::EndInMethod => "END in method; use at_exit",
            DiagnosticId::IntegerInFlipFlop => "integer literal in flip-flop",
            DiagnosticId::InvalidMagicCommentValue => "invalid value for %s: %s",
            DiagnosticId::LiteralInCondition => "%s literal in condition",
        }
    }

    pub const fn severity(self) -> Severity {
        match self {
            DiagnosticId::AmbiguousFirstArgumentMinus
            | DiagnosticId::AmbiguousFirstArgumentPlus
            | DiagnosticId::AmbiguousPrefixStar
            | DiagnosticId::AmbiguousSlash
            | DiagnosticId::DuplicatedHashKey
            | DiagnosticId::DuplicatedWhenClause
            | DiagnosticId::EncodingMagicCommentIgnored
            | DiagnosticId::EndInMethod
            | DiagnosticId::IntegerInFlipFlop
            | DiagnosticId::InvalidMagicCommentValue
            | DiagnosticId::LiteralInCondition => Severity::Warning,
            DiagnosticId::AliasArgument
            | DiagnosticId::AmpampeqMultiAssign
            | DiagnosticId::ArgumentAfterBlock
            | DiagnosticId::ArgumentAfterForwardingEllipses
            | DiagnosticId::ArgumentBareHash
            | DiagnosticId::ArgumentBlockMulti
            | DiagnosticId::ArgumentFormalClass
            | DiagnosticId::ArgumentFormalConstant
            | DiagnosticId::ArgumentFormalGlobal
            | DiagnosticId::ArgumentFormalIvar
            | DiagnosticId::ArgumentForwardingUnbound
            | DiagnosticId::ArgumentNoForwardingAmp
            | DiagnosticId::ArgumentNoForwardingEllipses
            | DiagnosticId::ArgumentNoForwardingStar
            | DiagnosticId::ArgumentSplatAfterAssocSplat
            | DiagnosticId::ArgumentTermParen
            | DiagnosticId::ArgumentUnexpectedBlock
            | DiagnosticId::ArrayElement
            | DiagnosticId::ArrayExpression
            | DiagnosticId::ArrayExpressionAfterStar
            | DiagnosticId::ArraySeparator
            | DiagnosticId::ArrayTerm
            | DiagnosticId::BeginLonelyElse
            | DiagnosticId::BeginTerm
            | DiagnosticId::BeginUpcaseBrace
            | DiagnosticId::BeginUpcaseTerm
            | DiagnosticId::BeginUpcaseToplevel
            | DiagnosticId::BlockParamLocalVariable
            | DiagnosticId::BlockParamPipeTerm
            | DiagnosticId::BlockTermBrace
            | DiagnosticId::BlockTermEnd
            | DiagnosticId::CannotParseExpression
            | DiagnosticId::CaseExpressionAfterCase
            | DiagnosticId::CaseExpressionAfterWhen
            | DiagnosticId::CaseMatchMissingPredicate
            | DiagnosticId::CaseMissingConditions
            | DiagnosticId::CaseTerm
            | DiagnosticId::ClassInMethod
            | DiagnosticId::ClassName
            | DiagnosticId::ClassSuperclass
            | DiagnosticId::ClassTerm
            | DiagnosticId::ClassUnexpectedEnd
            | DiagnosticId::ConditionalElsifPredicate
            | DiagnosticId::ConditionalIfPredicate
            | DiagnosticId::ConditionalPredicateTerm
            | DiagnosticId::ConditionalTerm
            | DiagnosticId::ConditionalTermElse
            | DiagnosticId::ConditionalUnlessPredicate
            | DiagnosticId::ConditionalUntilPredicate
            | DiagnosticId::ConditionalWhilePredicate
            | DiagnosticId::ConstantPathColonColonConstant
            | DiagnosticId::DefinedExpression
            | DiagnosticId::DefEndless
            | DiagnosticId::DefEndlessSetter
            | DiagnosticId::DefName
            | DiagnosticId::DefNameAfterReceiver
            | DiagnosticId::DefParamsTerm
            | DiagnosticId::DefParamsTermParen
            | DiagnosticId::DefReceiver
            | DiagnosticId::DefReceiverTerm
            | DiagnosticId::DefTerm
            | DiagnosticId::EmbdocTerm
            | DiagnosticId::EmbexprEnd
            | DiagnosticId::EmbvarInvalid
            | DiagnosticId::EndUpcaseBrace
            | DiagnosticId::EndUpcaseTerm
            | DiagnosticId::EscapeInvalidControl
            | DiagnosticId::EscapeInvalidControlRepeat
            | DiagnosticId::EscapeInvalidHexadecimal
            | DiagnosticId::EscapeInvalidMeta
            | DiagnosticId::EscapeInvalidMetaRepeat
            | DiagnosticId::EscapeInvalidUnicode
            | DiagnosticId::EscapeInvalidUnicodeCmFlags
            | DiagnosticId::EscapeInvalidUnicodeLiteral
            | DiagnosticId::EscapeInvalidUnicodeLong
            | DiagnosticId::EscapeInvalidUnicodeTerm
            | DiagnosticId::ExpectArgument
            | DiagnosticId::ExpectEolAfterStatement
            | DiagnosticId::ExpectExpressionAfterAmpampeq
            | DiagnosticId::ExpectExpressionAfterComma
            | DiagnosticId::ExpectExpressionAfterEqual
            | DiagnosticId::ExpectExpressionAfterLessLess
            | DiagnosticId::ExpectExpressionAfterLparen
            | DiagnosticId::ExpectExpressionAfterOperator
            | DiagnosticId::ExpectExpressionAfterPipepipeeq
            | DiagnosticId::ExpectExpressionAfterSplat
            | DiagnosticId::ExpectExpressionAfterSplatHash
            | DiagnosticId::ExpectExpressionAfterStar
            | DiagnosticId::ExpectIdentReqParameter
            | DiagnosticId::ExpectRbracket
            | DiagnosticId::ExpectRparen
            | DiagnosticId::ExpectRparenAfterMulti
            | DiagnosticId::ExpectRparenReqParameter
            | DiagnosticId::ExpectWhenDelimiter
            | DiagnosticId::ForCollection
            | DiagnosticId::ForIn
            | DiagnosticId::ForIndex
            | DiagnosticId::ForTerm
            | DiagnosticId::HashExpressionAfterLabel
            | DiagnosticId::HashKey
            | DiagnosticId::HashRocket
            | DiagnosticId::HashTerm
            | DiagnosticId::HashValue
            | DiagnosticId::HeredocIdentifier
            | DiagnosticId::HeredocTerm
            | DiagnosticId::IncompleteQuestionMark
            | DiagnosticId::IncompleteVariableClass
            | DiagnosticId::IncompleteVariableInstance
            | DiagnosticId::InvalidCharacter
            | DiagnosticId::InvalidEncodingMagicComment
            | DiagnosticId::InvalidFloatExponent
            | DiagnosticId::InvalidMultibyteCharacter
            | DiagnosticId::InvalidNumberBinary
            | DiagnosticId::InvalidNumberDecimal
            | DiagnosticId::InvalidNumberHexadecimal
            | DiagnosticId::InvalidNumberOctal
            | DiagnosticId::InvalidNumberUnderscore
            | DiagnosticId::InvalidPercent
            | DiagnosticId::InvalidRetryWithoutRescue
            | DiagnosticId::InvalidToken
            | DiagnosticId::InvalidVariableGlobal
            | DiagnosticId::InvalidYield
            | DiagnosticId::LambdaOpen
            | DiagnosticId::LambdaTermBrace
            | DiagnosticId::LambdaTermEnd
            | DiagnosticId::ListILowerElement
            | DiagnosticId::ListILowerTerm
            | DiagnosticId::ListIUpperElement
            | DiagnosticId::ListIUpperTerm
            | DiagnosticId::ListWLowerElement
            | DiagnosticId::ListWLowerTerm
            | DiagnosticId::ListWUpperElement
            | DiagnosticId::ListWUpperTerm
            | DiagnosticId::MixedEncoding
            | DiagnosticId::ModuleInMethod
            | DiagnosticId::ModuleName
            | DiagnosticId::ModuleTerm
            | DiagnosticId::MultiAssignMultiSplats
            | DiagnosticId::NotExpression
            | DiagnosticId::NumberedParameterNotAllowed
            | DiagnosticId::NumberedParameterOuterScope
            | DiagnosticId::NumberLiteralUnderscore
            | DiagnosticId::OperatorMultiAssign
            | DiagnosticId::OperatorWriteArguments
            | DiagnosticId::OperatorWriteBlock
            | DiagnosticId::ParameterAssocSplatMulti
            | DiagnosticId::ParameterBlockMulti
            | DiagnosticId::ParameterCircular
            | DiagnosticId::ParameterMethodName
            | DiagnosticId::ParameterNameRepeat
            | DiagnosticId::ParameterNoDefault
            | DiagnosticId::ParameterNoDefaultKw
            | DiagnosticId::ParameterNumberedReserved
            | DiagnosticId::ParameterOrder
            | DiagnosticId::ParameterSplatMulti
            | DiagnosticId::ParameterUnexpectedFwd
            | DiagnosticId::ParameterWildLooseComma
            | DiagnosticId::PatternExpressionAfterBracket
            | DiagnosticId::PatternExpressionAfterComma
            | DiagnosticId::PatternExpressionAfterHrocket
            | DiagnosticId::PatternExpressionAfterIn
            | DiagnosticId::PatternExpressionAfterKey
            | DiagnosticId::PatternExpressionAfterParen
            | DiagnosticId::PatternExpressionAfterPin
            | DiagnosticId::PatternExpressionAfterPipe
            | DiagnosticId::PatternExpressionAfterRange
            | DiagnosticId::PatternExpressionAfterRest
            | DiagnosticId::PatternHashKey
            | DiagnosticId::PatternHashKeyDuplicate
            | DiagnosticId::PatternHashKeyLabel
            | DiagnosticId::PatternIdentAfterHrocket
            | DiagnosticId::PatternLabelAfterComma
            | DiagnosticId::PatternRest
            | DiagnosticId::PatternTermBrace
            | DiagnosticId::PatternTermBracket
            | DiagnosticId::PatternTermParen
            | DiagnosticId::PipepipeeqMultiAssign
            | DiagnosticId::RegexpTerm
            | DiagnosticId::RegexpUnknownOptions
            | DiagnosticId::RescueExpression
            | DiagnosticId::RescueModifierValue
            | DiagnosticId::RescueTerm
            | DiagnosticId::RescueVariable
            | DiagnosticId::ReturnInvalid
            | DiagnosticId::StatementAlias
            | DiagnosticId::StatementPostexeEnd
            | DiagnosticId::StatementPreexeBegin
            | DiagnosticId::StatementUndef
            | DiagnosticId::StringConcatenation
            | DiagnosticId::StringInterpolatedTerm
            | DiagnosticId::StringLiteralTerm
            | DiagnosticId::SymbolInvalid
            | DiagnosticId::SymbolTermDynamic
            | DiagnosticId::SymbolTermInterpolated
            | DiagnosticId::TernaryColon
            | DiagnosticId::TernaryExpressionFalse
            | DiagnosticId::TernaryExpressionTrue
            | DiagnosticId::UnaryReceiverBang
            | DiagnosticId::UnaryReceiverMinus
            | DiagnosticId::UnaryReceiverPlus
            | DiagnosticId::UnaryReceiverTilde
            | DiagnosticId::UndefArgument
            | DiagnosticId::UnexpectedTokenCloseContext
            | DiagnosticId::UnexpectedTokenIgnore
            | DiagnosticId::UntilTerm
            | DiagnosticId::VoidExpression
            | DiagnosticId::WhileTerm
            | DiagnosticId::WriteTargetInMethod
            | DiagnosticId::WriteTargetReadonly
            | DiagnosticId::WriteTargetUnexpected
            | DiagnosticId::XstringTerm => Severity::Error,
        }
    }

    #[inline]
    pub const fn is_error(self) -> bool {
        matches!(self.severity(), Severity::Error)
    }

    #[inline]
    pub const fn is_warning(self) -> bool {
        matches!(self.severity(), Severity::Warning)
    }

    /// Whether the message contains `%` conversions.
    pub fn is_template(self) -> bool {
        crate::format::has_conversions(self.message())
    }
}

#[cfg(test)]
mod tests;
