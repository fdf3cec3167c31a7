//! What the parser is inside of.

use crate::recovery::TokenSet;
use bitflags::bitflags;
use prism_lexer::TokenKind;

bitflags! {
    /// Enclosing constructs that change what is valid.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
    pub(crate) struct ParseContext: u16 {
        /// Method body.
        const DEF = 1 << 0;
        /// Class or module body outside any method.
        const CLASS = 1 << 1;
        /// `rescue` clause, where `retry` is allowed.
        const RESCUE = 1 << 2;
        /// A `do` here belongs to an enclosing command call.
        const NO_DO_BLOCK = 1 << 3;
    }
}

/// The tokens that end one statement list, and how to name it in
/// "assuming it is closing the parent ..." messages.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Terminators {
    pub(crate) set: TokenSet,
    pub(crate) name: &'static str,
}

const fn terminators(name: &'static str, kinds: &[TokenKind]) -> Terminators {
    let mut set = TokenSet::new();
    let mut i = 0;
    while i < kinds.len() {
        set = set.with(kinds[i]);
        i += 1;
    }
    Terminators { set, name }
}

use TokenKind as T;

/// Closing `end` of a body that may carry `rescue`, `else` and `ensure`.
const BODY_END: [TokenKind; 4] = [T::KeywordEnd, T::KeywordRescue, T::KeywordElse, T::KeywordEnsure];

pub(crate) const PROGRAM: Terminators = terminators("program", &[T::Eof]);
pub(crate) const DEF: Terminators = terminators("method definition", &BODY_END);
pub(crate) const CLASS: Terminators = terminators("class definition", &BODY_END);
pub(crate) const MODULE: Terminators = terminators("module definition", &BODY_END);
pub(crate) const SINGLETON_CLASS: Terminators = terminators("singleton class definition", &BODY_END);
pub(crate) const BEGIN: Terminators = terminators("'begin' statement", &BODY_END);
pub(crate) const DO_BLOCK: Terminators = terminators("'do' block", &BODY_END);
pub(crate) const LAMBDA_DO: Terminators = terminators("lambda 'do' block", &BODY_END);
pub(crate) const RESCUE: Terminators = terminators("'rescue' clause", &BODY_END);
pub(crate) const BODY_ELSE: Terminators =
    terminators("'else' clause", &[T::KeywordEnd, T::KeywordEnsure]);
pub(crate) const ENSURE: Terminators = terminators("'ensure' clause", &[T::KeywordEnd]);
pub(crate) const IF: Terminators =
    terminators("'if' statement", &[T::KeywordElsif, T::KeywordElse, T::KeywordEnd]);
pub(crate) const UNLESS: Terminators =
    terminators("'unless' statement", &[T::KeywordElse, T::KeywordEnd]);
pub(crate) const ELSE: Terminators = terminators("'else' clause", &[T::KeywordEnd]);
pub(crate) const LOOP: Terminators = terminators("loop", &[T::KeywordEnd]);
pub(crate) const WHEN: Terminators =
    terminators("'when' clause", &[T::KeywordWhen, T::KeywordElse, T::KeywordEnd]);
pub(crate) const IN: Terminators =
    terminators("'in' clause", &[T::KeywordIn, T::KeywordElse, T::KeywordEnd]);
pub(crate) const CASE_ELSE: Terminators = terminators("'case' statement", &[T::KeywordEnd]);
pub(crate) const BRACE_BLOCK: Terminators = terminators("block", &[T::BraceRight]);
pub(crate) const LAMBDA_BRACE: Terminators = terminators("lambda", &[T::BraceRight]);
pub(crate) const PARENTHESES: Terminators = terminators("parentheses", &[T::ParenthesisRight]);
pub(crate) const EMBEXPR: Terminators = terminators("interpolation", &[T::EmbExprEnd]);
pub(crate) const PRE_POST_EXECUTION: Terminators =
    terminators("'BEGIN' or 'END' block", &[T::BraceRight]);
