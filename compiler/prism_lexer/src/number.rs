//! Values of numeric literal tokens.
//!
//! The lexer has already validated the token text, so these functions only
//! convert. Underscores are separators and are ignored.

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use prism_lexer_core::chars::Radix;

/// Radix of an integer literal and the length of its prefix.
///
/// `0x`, `0b`, `0o`, `0d` and `0_` are two bytes; a bare leading `0`
/// followed by a digit is octal with a one-byte prefix.
pub fn integer_radix(text: &[u8]) -> (Radix, usize) {
    match text {
        [b'0', b'x' | b'X', ..] => (Radix::Hexadecimal, 2),
        [b'0', b'b' | b'B', ..] => (Radix::Binary, 2),
        [b'0', b'o' | b'O' | b'_', ..] => (Radix::Octal, 2),
        [b'0', b'd' | b'D', ..] => (Radix::Decimal, 2),
        [b'0', b'0'..=b'9', ..] => (Radix::Octal, 1),
        _ => (Radix::Decimal, 0),
    }
}

/// Value of an integer literal such as `1_000` or `0xff`.
pub fn integer_value(text: &[u8]) -> (BigInt, Radix) {
    let (radix, prefix) = integer_radix(text);
    let digits: Vec<u8> = text[prefix.min(text.len())..]
        .iter()
        .copied()
        .filter(|&b| b != b'_')
        .collect();
    let value = BigInt::parse_bytes(&digits, radix.value()).unwrap_or_else(BigInt::zero);
    (value, radix)
}

/// Value of a float literal such as `1.5e-3`.
pub fn float_value(text: &[u8]) -> f64 {
    let cleaned: String = text
        .iter()
        .filter(|&&b| b != b'_')
        .map(|&b| char::from(b))
        .collect();
    cleaned.parse().unwrap_or(0.0)
}

/// Whether decimal literal text has a fraction or an exponent.
pub fn is_float_text(text: &[u8]) -> bool {
    integer_radix(text) == (Radix::Decimal, 0)
        && text.iter().any(|&b| matches!(b, b'.' | b'e' | b'E'))
}

/// Numerator and denominator of a rational literal, without the `r`.
///
/// `1.5` is `3/2`; the fraction is reduced.
pub fn rational_value(text: &[u8]) -> (BigInt, BigInt) {
    if !is_float_text(text) {
        return (integer_value(text).0, BigInt::one());
    }

    let (mantissa, exponent) = match text.iter().position(|&b| matches!(b, b'e' | b'E')) {
        Some(index) => (&text[..index], exponent_value(&text[index + 1..])),
        None => (text, 0),
    };

    let mut digits = Vec::with_capacity(mantissa.len());
    let mut scale: i64 = 0;
    let mut after_point = false;
    for &b in mantissa {
        match b {
            b'.' => after_point = true,
            b'0'..=b'9' => {
                digits.push(b);
                if after_point {
                    scale += 1;
                }
            }
            _ => {}
        }
    }

    let mut numerator = BigInt::parse_bytes(&digits, 10).unwrap_or_else(BigInt::zero);
    let mut denominator = BigInt::one();
    let power = exponent - scale;
    let ten = BigInt::from(10u8);
    if power >= 0 {
        numerator *= num_traits::pow(ten, usize::try_from(power).unwrap_or(0));
    } else {
        denominator = num_traits::pow(ten, usize::try_from(-power).unwrap_or(0));
    }

    let divisor = gcd(numerator.abs(), denominator.clone());
    if !divisor.is_zero() && !divisor.is_one() {
        numerator /= &divisor;
        denominator /= &divisor;
    }
    (numerator, denominator)
}

fn exponent_value(text: &[u8]) -> i64 {
    let cleaned: String = text
        .iter()
        .filter(|&&b| b != b'_')
        .map(|&b| char::from(b))
        .collect();
    cleaned.parse::<i64>().unwrap_or(0).clamp(-10_000, 10_000)
}

fn gcd(mut a: BigInt, mut b: BigInt) -> BigInt {
    while !b.is_zero() {
        let remainder = &a % &b;
        a = b;
        b = remainder;
    }
    a
}

#[cfg(test)]
mod tests;
