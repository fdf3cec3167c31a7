//! Reserved word resolution.
//!
//! Ruby has 41 reserved words. Five of them (`if`, `unless`, `while`,
//! `until`, `rescue`) have a second modifier form used when they follow a
//! complete expression: `x = 1 if y`. Each keyword also fixes the lexer
//! state for the next token; `def` moves to `FNAME` so that `def +` reads
//! `+` as a method name.
//!
//! # Lookup
//!
//! The identifier's length is a first-pass filter (keywords are 2 to 12
//! bytes), then the bytes are matched against the keywords of that length.

use crate::state::LexState;
use crate::token::TokenKind;

/// A reserved word and how it affects the lexer.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Keyword {
    /// Token in statement position.
    pub kind: TokenKind,
    /// Token after a complete expression, for the five modifier keywords.
    pub modifier: Option<TokenKind>,
    /// State after the keyword.
    pub state: LexState,
}

const fn keyword(kind: TokenKind, state: LexState) -> Keyword {
    Keyword {
        kind,
        modifier: None,
        state,
    }
}

const fn modifier(kind: TokenKind, modifier: TokenKind, state: LexState) -> Keyword {
    Keyword {
        kind,
        modifier: Some(modifier),
        state,
    }
}

/// Whether `text` is a reserved word.
pub fn is_keyword(text: &[u8]) -> bool {
    lookup(text).is_some()
}

/// Look up a reserved word by its bytes.
#[inline]
pub(crate) fn lookup(text: &[u8]) -> Option<Keyword> {
    use LexState as S;
    use TokenKind as T;

    if !(2..=12).contains(&text.len()) {
        return None;
    }

    let found = match text.len() {
        2 => match text {
            b"do" => keyword(T::KeywordDo, S::BEG),
            b"if" => modifier(T::KeywordIf, T::KeywordIfModifier, S::BEG),
            b"in" => keyword(T::KeywordIn, S::BEG),
            b"or" => keyword(T::KeywordOr, S::BEG),
            _ => return None,
        },
        3 => match text {
            b"END" => keyword(T::KeywordEndUpcase, S::END),
            b"and" => keyword(T::KeywordAnd, S::BEG),
            b"def" => keyword(T::KeywordDef, S::FNAME),
            b"end" => keyword(T::KeywordEnd, S::END),
            b"for" => keyword(T::KeywordFor, S::BEG),
            b"nil" => keyword(T::KeywordNil, S::END),
            b"not" => keyword(T::KeywordNot, S::ARG),
            _ => return None,
        },
        4 => match text {
            b"case" => keyword(T::KeywordCase, S::BEG),
            b"else" => keyword(T::KeywordElse, S::BEG),
            b"next" => keyword(T::KeywordNext, S::MID),
            b"redo" => keyword(T::KeywordRedo, S::END),
            b"self" => keyword(T::KeywordSelf, S::END),
            b"then" => keyword(T::KeywordThen, S::BEG),
            b"true" => keyword(T::KeywordTrue, S::END),
            b"when" => keyword(T::KeywordWhen, S::BEG),
            _ => return None,
        },
        5 => match text {
            b"BEGIN" => keyword(T::KeywordBeginUpcase, S::END),
            b"alias" => keyword(T::KeywordAlias, S::FNAME.union(S::FITEM)),
            b"begin" => keyword(T::KeywordBegin, S::BEG),
            b"break" => keyword(T::KeywordBreak, S::MID),
            b"class" => keyword(T::KeywordClass, S::CLASS),
            b"elsif" => keyword(T::KeywordElsif, S::BEG),
            b"false" => keyword(T::KeywordFalse, S::END),
            b"retry" => keyword(T::KeywordRetry, S::END),
            b"super" => keyword(T::KeywordSuper, S::ARG),
            b"undef" => keyword(T::KeywordUndef, S::FNAME.union(S::FITEM)),
            b"until" => modifier(T::KeywordUntil, T::KeywordUntilModifier, S::BEG),
            b"while" => modifier(T::KeywordWhile, T::KeywordWhileModifier, S::BEG),
            b"yield" => keyword(T::KeywordYield, S::ARG),
            _ => return None,
        },
        6 => match text {
            b"ensure" => keyword(T::KeywordEnsure, S::BEG),
            b"module" => keyword(T::KeywordModule, S::BEG),
            b"rescue" => modifier(T::KeywordRescue, T::KeywordRescueModifier, S::MID),
            b"return" => keyword(T::KeywordReturn, S::MID),
            b"unless" => modifier(T::KeywordUnless, T::KeywordUnlessModifier, S::BEG),
            _ => return None,
        },
        8 => match text {
            b"__FILE__" => keyword(T::KeywordFile, S::END),
            b"__LINE__" => keyword(T::KeywordLine, S::END),
            b"defined?" => keyword(T::KeywordDefined, S::ARG),
            _ => return None,
        },
        12 => match text {
            b"__ENCODING__" => keyword(T::KeywordEncoding, S::END),
            _ => return None,
        },
        _ => return None,
    };
    Some(found)
}

#[cfg(test)]
mod tests;
