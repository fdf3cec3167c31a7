//! ASCII byte classes used by the lexer.
//!
//! Encoding-independent: every encoding Ruby accepts as source is an ASCII
//! superset, so whitespace, digits and regexp option letters are always
//! single bytes.

const WHITESPACE: u8 = 1 << 0;
const INLINE_WHITESPACE: u8 = 1 << 1;
const REGEXP_OPTION: u8 = 1 << 2;

static BYTE_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];
    table[b'\t' as usize] = WHITESPACE | INLINE_WHITESPACE;
    table[b'\n' as usize] = WHITESPACE;
    table[0x0b] = WHITESPACE | INLINE_WHITESPACE;
    table[0x0c] = WHITESPACE | INLINE_WHITESPACE;
    table[b'\r' as usize] = WHITESPACE | INLINE_WHITESPACE;
    table[b' ' as usize] = WHITESPACE | INLINE_WHITESPACE;
    let options = b"eimnosux";
    let mut index = 0;
    while index < options.len() {
        table[options[index] as usize] = REGEXP_OPTION;
        index += 1;
    }
    table
};

/// `\t \n \v \f \r` and space.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    BYTE_TABLE[b as usize] & WHITESPACE != 0
}

/// Whitespace other than `\n`.
#[inline]
pub fn is_inline_whitespace(b: u8) -> bool {
    BYTE_TABLE[b as usize] & INLINE_WHITESPACE != 0
}

/// One of the regexp option letters `e i m n o s u x`.
#[inline]
pub fn is_regexp_option(b: u8) -> bool {
    BYTE_TABLE[b as usize] & REGEXP_OPTION != 0
}

#[inline]
pub fn is_binary_digit(b: u8) -> bool {
    matches!(b, b'0' | b'1')
}

#[inline]
pub fn is_octal_digit(b: u8) -> bool {
    matches!(b, b'0'..=b'7')
}

#[inline]
pub fn is_decimal_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

#[inline]
pub fn is_hexadecimal_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

fn span_of(bytes: &[u8], pred: impl Fn(u8) -> bool) -> usize {
    bytes.iter().take_while(|&&b| pred(b)).count()
}

pub fn strspn_whitespace(bytes: &[u8]) -> usize {
    span_of(bytes, is_whitespace)
}

pub fn strspn_inline_whitespace(bytes: &[u8]) -> usize {
    span_of(bytes, is_inline_whitespace)
}

pub fn strspn_regexp_option(bytes: &[u8]) -> usize {
    span_of(bytes, is_regexp_option)
}

pub fn strspn_decimal_digit(bytes: &[u8]) -> usize {
    span_of(bytes, is_decimal_digit)
}

pub fn strspn_hexadecimal_digit(bytes: &[u8]) -> usize {
    span_of(bytes, is_hexadecimal_digit)
}

/// Radix of a numeric literal.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Radix {
    pub const fn value(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    #[inline]
    pub fn is_digit(self, b: u8) -> bool {
        match self {
            Radix::Binary => is_binary_digit(b),
            Radix::Octal => is_octal_digit(b),
            Radix::Decimal => is_decimal_digit(b),
            Radix::Hexadecimal => is_hexadecimal_digit(b),
        }
    }
}

/// Result of scanning the digits of a numeric literal.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DigitRun {
    /// Bytes consumed, digits and underscores.
    pub len: usize,
    /// Offset of the first misplaced underscore: a doubled `__` or a
    /// trailing `_`.
    pub invalid_underscore: Option<usize>,
}

/// Scan digits of `radix` with `_` separators.
pub fn strspn_number(bytes: &[u8], radix: Radix) -> DigitRun {
    let mut invalid_underscore = None;
    let mut previous_underscore = false;
    let mut len = 0;

    for &b in bytes {
        if b == b'_' {
            if previous_underscore && invalid_underscore.is_none() {
                invalid_underscore = Some(len);
            }
            previous_underscore = true;
        } else if radix.is_digit(b) {
            previous_underscore = false;
        } else {
            break;
        }
        len += 1;
    }

    if previous_underscore && invalid_underscore.is_none() {
        invalid_underscore = Some(len - 1);
    }

    DigitRun {
        len,
        invalid_underscore,
    }
}
