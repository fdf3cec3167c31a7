//! Binding powers of infix operators.
//!
//! Levels step by two so that `level + 1` is free for the right operand of
//! a left-associative or non-associative operator.

use prism_lexer::TokenKind;

/// Precedence levels, loosest first.
pub(crate) mod bp {
    pub(crate) const STATEMENT: u8 = 2;
    pub(crate) const MODIFIER_RESCUE: u8 = 4;
    pub(crate) const MODIFIER: u8 = 6;
    pub(crate) const COMPOSITION: u8 = 8;
    pub(crate) const NOT: u8 = 10;
    pub(crate) const MATCH: u8 = 12;
    pub(crate) const DEFINED: u8 = 14;
    pub(crate) const ASSIGNMENT: u8 = 18;
    pub(crate) const TERNARY: u8 = 20;
    pub(crate) const RANGE: u8 = 22;
    pub(crate) const LOGICAL_OR: u8 = 24;
    pub(crate) const LOGICAL_AND: u8 = 26;
    pub(crate) const EQUALITY: u8 = 28;
    pub(crate) const COMPARISON: u8 = 30;
    pub(crate) const BITWISE_OR: u8 = 32;
    pub(crate) const BITWISE_AND: u8 = 34;
    pub(crate) const SHIFT: u8 = 36;
    pub(crate) const TERM: u8 = 38;
    pub(crate) const FACTOR: u8 = 40;
    pub(crate) const UMINUS: u8 = 42;
    pub(crate) const EXPONENT: u8 = 44;
    pub(crate) const UNARY: u8 = 46;
    pub(crate) const INDEX: u8 = 48;
    pub(crate) const CALL: u8 = 50;
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct BindingPower {
    pub(crate) left: u8,
    pub(crate) right: u8,
    /// `a == b == c` and `1..2..3` are rejected.
    pub(crate) nonassoc: bool,
}

impl BindingPower {
    const fn left(level: u8) -> Self {
        BindingPower {
            left: level,
            right: level + 1,
            nonassoc: false,
        }
    }

    const fn right(level: u8) -> Self {
        BindingPower {
            left: level,
            right: level,
            nonassoc: false,
        }
    }

    const fn nonassoc(level: u8) -> Self {
        BindingPower {
            left: level,
            right: level + 1,
            nonassoc: true,
        }
    }
}

/// Binding power of `kind` in infix position, if it is an infix operator.
pub(crate) fn infix_power(kind: TokenKind) -> Option<BindingPower> {
    use TokenKind as T;
    let power = match kind {
        T::KeywordRescueModifier => BindingPower::left(bp::MODIFIER_RESCUE),
        T::KeywordIfModifier
        | T::KeywordUnlessModifier
        | T::KeywordWhileModifier
        | T::KeywordUntilModifier => BindingPower::left(bp::MODIFIER),
        T::KeywordAnd | T::KeywordOr => BindingPower::left(bp::COMPOSITION),
        T::EqualGreater | T::KeywordIn => BindingPower::nonassoc(bp::MATCH),
        T::Equal
        | T::PlusEqual
        | T::MinusEqual
        | T::StarEqual
        | T::SlashEqual
        | T::PercentEqual
        | T::StarStarEqual
        | T::AmpersandEqual
        | T::PipeEqual
        | T::CaretEqual
        | T::LessLessEqual
        | T::GreaterGreaterEqual
        | T::AmpersandAmpersandEqual
        | T::PipePipeEqual => BindingPower::right(bp::ASSIGNMENT),
        T::QuestionMark => BindingPower::right(bp::TERNARY),
        T::DotDot | T::DotDotDot => BindingPower::nonassoc(bp::RANGE),
        T::PipePipe => BindingPower::left(bp::LOGICAL_OR),
        T::AmpersandAmpersand => BindingPower::left(bp::LOGICAL_AND),
        T::EqualEqual
        | T::EqualEqualEqual
        | T::BangEqual
        | T::EqualTilde
        | T::BangTilde
        | T::LessEqualGreater => BindingPower::nonassoc(bp::EQUALITY),
        T::Greater | T::GreaterEqual | T::Less | T::LessEqual => BindingPower::left(bp::COMPARISON),
        T::Pipe | T::Caret => BindingPower::left(bp::BITWISE_OR),
        T::Ampersand => BindingPower::left(bp::BITWISE_AND),
        T::LessLess | T::GreaterGreater => BindingPower::left(bp::SHIFT),
        T::Plus | T::Minus => BindingPower::left(bp::TERM),
        T::Star | T::Slash | T::Percent => BindingPower::left(bp::FACTOR),
        T::StarStar => BindingPower::right(bp::EXPONENT),
        T::BracketLeft => BindingPower::left(bp::INDEX),
        T::Dot | T::AmpersandDot | T::ColonColon => BindingPower::left(bp::CALL),
        _ => return None,
    };
    Some(power)
}

/// Method name of an operator-assignment token: `+=` calls `+`.
pub(crate) fn operator_write_method(kind: TokenKind) -> Option<&'static [u8]> {
    use TokenKind as T;
    let name: &'static [u8] = match kind {
        T::PlusEqual => b"+",
        T::MinusEqual => b"-",
        T::StarEqual => b"*",
        T::SlashEqual => b"/",
        T::PercentEqual => b"%",
        T::StarStarEqual => b"**",
        T::AmpersandEqual => b"&",
        T::PipeEqual => b"|",
        T::CaretEqual => b"^",
        T::LessLessEqual => b"<<",
        T::GreaterGreaterEqual => b">>",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests;
