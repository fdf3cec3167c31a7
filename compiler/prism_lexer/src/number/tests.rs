use super::*;
use pretty_assertions::assert_eq;

fn big(value: i64) -> BigInt {
    BigInt::from(value)
}

#[test]
fn radix_prefixes() {
    assert_eq!(integer_radix(b"0x1f"), (Radix::Hexadecimal, 2));
    assert_eq!(integer_radix(b"0B10"), (Radix::Binary, 2));
    assert_eq!(integer_radix(b"0o17"), (Radix::Octal, 2));
    assert_eq!(integer_radix(b"0_17"), (Radix::Octal, 2));
    assert_eq!(integer_radix(b"017"), (Radix::Octal, 1));
    assert_eq!(integer_radix(b"0d19"), (Radix::Decimal, 2));
    assert_eq!(integer_radix(b"0"), (Radix::Decimal, 0));
    assert_eq!(integer_radix(b"42"), (Radix::Decimal, 0));
}

#[test]
fn integer_values() {
    assert_eq!(integer_value(b"1_000"), (big(1000), Radix::Decimal));
    assert_eq!(integer_value(b"0xff"), (big(255), Radix::Hexadecimal));
    assert_eq!(integer_value(b"0b1010"), (big(10), Radix::Binary));
    assert_eq!(integer_value(b"017"), (big(15), Radix::Octal));
    assert_eq!(integer_value(b"0"), (big(0), Radix::Decimal));
}

#[test]
fn big_integers() {
    let (value, _) = integer_value(b"123456789012345678901234567890");
    assert_eq!(value.to_string(), "123456789012345678901234567890");
}

#[test]
fn float_values() {
    assert_eq!(float_value(b"1.5"), 1.5);
    assert_eq!(float_value(b"1_000.25"), 1000.25);
    assert_eq!(float_value(b"2e3"), 2000.0);
    assert_eq!(float_value(b"1.5E-1"), 0.15);
}

#[test]
fn float_text_detection() {
    assert!(is_float_text(b"1.5"));
    assert!(is_float_text(b"1e5"));
    assert!(!is_float_text(b"15"));
    assert!(!is_float_text(b"0xe"));
}

#[test]
fn rationals_are_reduced() {
    assert_eq!(rational_value(b"3"), (big(3), big(1)));
    assert_eq!(rational_value(b"1.5"), (big(3), big(2)));
    assert_eq!(rational_value(b"0.75"), (big(3), big(4)));
    assert_eq!(rational_value(b"0x10"), (big(16), big(1)));
    assert_eq!(rational_value(b"1.0"), (big(1), big(1)));
}

#[test]
fn rational_with_exponent() {
    assert_eq!(rational_value(b"1e2"), (big(100), big(1)));
    assert_eq!(rational_value(b"15e-1"), (big(3), big(2)));
}
