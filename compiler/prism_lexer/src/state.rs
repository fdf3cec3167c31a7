//! Lexer state bits and the small bit stacks the parser drives.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Context that decides how ambiguous characters are read.
    ///
    /// `foo -1` and `foo - 1` differ only in state: after an identifier in
    /// command position a spaced `-` followed by a digit is a negative
    /// literal, otherwise it is binary minus.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
    pub struct LexState: u16 {
        /// Start of an expression.
        const BEG = 1 << 0;
        /// After a complete value.
        const END = 1 << 1;
        /// After the closing paren of a command argument.
        const ENDARG = 1 << 2;
        /// After a method name in a definition.
        const ENDFN = 1 << 3;
        /// After a method name; arguments may follow.
        const ARG = 1 << 4;
        /// After a method name in command position.
        const CMDARG = 1 << 5;
        /// After `return`, `break`, `next` and `rescue`.
        const MID = 1 << 6;
        /// Expecting a method name after `def`, `alias` or `undef`.
        const FNAME = 1 << 7;
        /// After `.` or `&.`.
        const DOT = 1 << 8;
        /// After `class`, where `<<` is not a heredoc.
        const CLASS = 1 << 9;
        /// A label may appear.
        const LABEL = 1 << 10;
        /// Just read a label.
        const LABELED = 1 << 11;
        /// Symbol or method name position where `[]` stays one token.
        const FITEM = 1 << 12;

        const BEG_ANY = Self::BEG.bits() | Self::MID.bits() | Self::CLASS.bits();
        const ARG_ANY = Self::ARG.bits() | Self::CMDARG.bits();
        const END_ANY = Self::END.bits() | Self::ENDARG.bits() | Self::ENDFN.bits();
    }
}

impl LexState {
    const NAMES: [(LexState, &'static str); 13] = [
        (LexState::BEG, "BEG"),
        (LexState::END, "END"),
        (LexState::ENDARG, "ENDARG"),
        (LexState::ENDFN, "ENDFN"),
        (LexState::ARG, "ARG"),
        (LexState::CMDARG, "CMDARG"),
        (LexState::MID, "MID"),
        (LexState::FNAME, "FNAME"),
        (LexState::DOT, "DOT"),
        (LexState::CLASS, "CLASS"),
        (LexState::LABEL, "LABEL"),
        (LexState::LABELED, "LABELED"),
        (LexState::FITEM, "FITEM"),
    ];

    /// Whether any bit of `other` is set.
    #[inline]
    pub fn any(self, other: LexState) -> bool {
        self.intersects(other)
    }

    /// Beginning of an expression: any BEG bit, or exactly `ARG|LABELED`.
    #[inline]
    pub fn is_beg(self) -> bool {
        self.any(LexState::BEG_ANY) || self == (LexState::ARG | LexState::LABELED)
    }
}

impl fmt::Debug for LexState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Prints `BEG|LABEL`, or `NONE` for the empty state.
impl fmt::Display for LexState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("NONE");
        }
        let mut first = true;
        for (bit, name) in LexState::NAMES {
            if self.contains(bit) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Fixed-depth stack of booleans packed into a `u64`.
///
/// Tracks whether a `do` belongs to a loop predicate and whether a block
/// may attach at the current nesting level. Pushing past 64 levels drops
/// the oldest entry, which only matters for absurdly nested input.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct StateStack(u64);

impl StateStack {
    #[inline]
    pub fn push(&mut self, value: bool) {
        self.0 = (self.0 << 1) | u64::from(value);
    }

    #[inline]
    pub fn pop(&mut self) {
        self.0 >>= 1;
    }

    #[inline]
    pub fn is_set(self) -> bool {
        self.0 & 1 == 1
    }
}

#[cfg(test)]
mod tests;
