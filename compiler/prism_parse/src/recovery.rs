//! Token sets for lookahead decisions and error recovery.
//!
//! Membership is a bit test indexed by the `TokenKind` discriminant.

use prism_lexer::TokenKind;

/// A set of token kinds.
///
/// Four 64-bit words cover every `TokenKind` variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct TokenSet([u64; 4]);

impl TokenSet {
    #[inline]
    pub(crate) const fn new() -> Self {
        Self([0; 4])
    }

    #[inline]
    #[must_use]
    pub(crate) const fn with(self, kind: TokenKind) -> Self {
        let index = kind as usize;
        let mut words = self.0;
        words[index / 64] |= 1 << (index % 64);
        Self(words)
    }

    #[inline]
    #[must_use]
    pub(crate) const fn union(self, other: Self) -> Self {
        let mut words = self.0;
        let mut i = 0;
        while i < words.len() {
            words[i] |= other.0[i];
            i += 1;
        }
        Self(words)
    }

    #[inline]
    pub(crate) const fn contains(&self, kind: TokenKind) -> bool {
        let index = kind as usize;
        self.0[index / 64] & (1 << (index % 64)) != 0
    }
}

/// `\n` and `;`.
pub(crate) const TERMINATORS: TokenSet = TokenSet::new()
    .with(TokenKind::Newline)
    .with(TokenKind::Semicolon);

/// Tokens that end a statement list. Seeing one that does not belong to
/// the current construct means an enclosing construct is being closed.
pub(crate) const CLOSERS: TokenSet = TokenSet::new()
    .with(TokenKind::KeywordEnd)
    .with(TokenKind::BraceRight)
    .with(TokenKind::BracketRight)
    .with(TokenKind::ParenthesisRight)
    .with(TokenKind::EmbExprEnd)
    .with(TokenKind::KeywordElse)
    .with(TokenKind::KeywordElsif)
    .with(TokenKind::KeywordWhen)
    .with(TokenKind::KeywordIn)
    .with(TokenKind::KeywordRescue)
    .with(TokenKind::KeywordEnsure)
    .with(TokenKind::KeywordThen);

/// Literal and variable tokens that form a complete primary expression or
/// open one.
const PRIMARY_START: TokenSet = TokenSet::new()
    .with(TokenKind::Identifier)
    .with(TokenKind::Constant)
    .with(TokenKind::InstanceVariable)
    .with(TokenKind::ClassVariable)
    .with(TokenKind::GlobalVariable)
    .with(TokenKind::BackReference)
    .with(TokenKind::NthReference)
    .with(TokenKind::Integer)
    .with(TokenKind::Float)
    .with(TokenKind::RationalNumber)
    .with(TokenKind::ImaginaryNumber)
    .with(TokenKind::CharacterLiteral)
    .with(TokenKind::StringBegin)
    .with(TokenKind::SymbolBegin)
    .with(TokenKind::RegexpBegin)
    .with(TokenKind::Backtick)
    .with(TokenKind::PercentLowerX)
    .with(TokenKind::PercentLowerW)
    .with(TokenKind::PercentUpperW)
    .with(TokenKind::PercentLowerI)
    .with(TokenKind::PercentUpperI)
    .with(TokenKind::HeredocStart)
    .with(TokenKind::BracketLeftArray)
    .with(TokenKind::ParenthesisLeftParentheses)
    .with(TokenKind::UMinus)
    .with(TokenKind::UMinusNum)
    .with(TokenKind::UPlus)
    .with(TokenKind::Bang)
    .with(TokenKind::Tilde)
    .with(TokenKind::UColonColon)
    .with(TokenKind::UDotDot)
    .with(TokenKind::UDotDotDot)
    .with(TokenKind::MinusGreater)
    .with(TokenKind::KeywordBegin)
    .with(TokenKind::KeywordCase)
    .with(TokenKind::KeywordClass)
    .with(TokenKind::KeywordDef)
    .with(TokenKind::KeywordDefined)
    .with(TokenKind::KeywordFalse)
    .with(TokenKind::KeywordFor)
    .with(TokenKind::KeywordIf)
    .with(TokenKind::KeywordModule)
    .with(TokenKind::KeywordNil)
    .with(TokenKind::KeywordSelf)
    .with(TokenKind::KeywordSuper)
    .with(TokenKind::KeywordTrue)
    .with(TokenKind::KeywordUnless)
    .with(TokenKind::KeywordUntil)
    .with(TokenKind::KeywordWhile)
    .with(TokenKind::KeywordYield)
    .with(TokenKind::KeywordEncoding)
    .with(TokenKind::KeywordFile)
    .with(TokenKind::KeywordLine);

/// Tokens that can start an expression.
pub(crate) const EXPRESSION_START: TokenSet = PRIMARY_START
    .with(TokenKind::ParenthesisLeft)
    .with(TokenKind::BraceLeft)
    .with(TokenKind::KeywordNot)
    .with(TokenKind::KeywordBreak)
    .with(TokenKind::KeywordNext)
    .with(TokenKind::KeywordReturn)
    .with(TokenKind::KeywordRedo)
    .with(TokenKind::KeywordRetry);

/// Tokens that can start a statement.
pub(crate) const STATEMENT_START: TokenSet = EXPRESSION_START
    .with(TokenKind::UStar)
    .with(TokenKind::KeywordAlias)
    .with(TokenKind::KeywordUndef)
    .with(TokenKind::KeywordBeginUpcase)
    .with(TokenKind::KeywordEndUpcase);

/// Tokens that start the first argument of a call without parentheses.
///
/// The lexer already tells `foo -1` (`UMinusNum`) from `foo - 1` (`Minus`)
/// and `foo [1]` (`BracketLeftArray`) from `foo[1]` (`BracketLeft`).
pub(crate) const COMMAND_ARGUMENT_START: TokenSet = PRIMARY_START
    .with(TokenKind::UStar)
    .with(TokenKind::UStarStar)
    .with(TokenKind::Label);

/// Closing tokens of parenthesized and bracketed argument lists.
pub(crate) const LIST_CLOSERS: TokenSet = TokenSet::new()
    .with(TokenKind::ParenthesisRight)
    .with(TokenKind::BracketRight)
    .with(TokenKind::BraceRight)
    .with(TokenKind::Pipe)
    .with(TokenKind::Eof);

#[cfg(test)]
mod tests;
