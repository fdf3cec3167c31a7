//! Numeric literals: `42`, `0x1F`, `0b1010`, `0o17`, `017`, `1_000`,
//! `3.14`, `1e10`, `2r`, `1.5ri`, `3i`.
//!
//! Only the shape is checked here. Values are computed from the token text
//! by [`crate::number`] when the parser builds the node.

use super::{width_u32, LexState, Lexer};
use crate::token::TokenKind;
use prism_diagnostic::DiagnosticId;
use prism_ir::Span;
use prism_lexer_core::chars::{self, Radix};

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80
}

impl Lexer<'_> {
    pub(super) fn lex_number(&mut self) -> TokenKind {
        let kind = if self.cursor.current() == b'0' {
            match self.cursor.peek() {
                b'x' | b'X' => self.prefixed_digits(Radix::Hexadecimal, DiagnosticId::InvalidNumberHexadecimal),
                b'b' | b'B' => self.prefixed_digits(Radix::Binary, DiagnosticId::InvalidNumberBinary),
                b'o' | b'O' | b'_' => self.prefixed_digits(Radix::Octal, DiagnosticId::InvalidNumberOctal),
                b'd' | b'D' => self.prefixed_digits(Radix::Decimal, DiagnosticId::InvalidNumberDecimal),
                b'0'..=b'7' => {
                    self.cursor.advance();
                    self.digits(Radix::Octal);
                    if chars::is_decimal_digit(self.cursor.current()) {
                        self.cursor.eat_while(|b| chars::is_decimal_digit(b) || b == b'_');
                        self.error(self.number_span(), DiagnosticId::InvalidNumberOctal);
                    }
                    TokenKind::Integer
                }
                b'8' | b'9' => {
                    self.cursor.advance();
                    self.cursor.eat_while(|b| chars::is_decimal_digit(b) || b == b'_');
                    self.error(self.number_span(), DiagnosticId::InvalidNumberOctal);
                    TokenKind::Integer
                }
                _ => {
                    self.cursor.advance();
                    self.fraction_and_exponent()
                }
            }
        } else {
            self.digits(Radix::Decimal);
            self.fraction_and_exponent()
        };

        self.state = LexState::END;
        self.suffixes(kind)
    }

    fn number_span(&self) -> Span {
        Span::new(self.token_start, self.cursor.pos())
    }

    /// Digits after a two-byte radix prefix.
    fn prefixed_digits(&mut self, radix: Radix, invalid: DiagnosticId) -> TokenKind {
        self.cursor.advance_n(2);
        let current = self.cursor.current();
        if !radix.is_digit(current) {
            if current == b'_' {
                self.cursor.eat_while(|b| radix.is_digit(b) || b == b'_');
            }
            self.error(self.number_span(), invalid);
            return TokenKind::Integer;
        }
        self.digits(radix);
        TokenKind::Integer
    }

    /// A run of digits with `_` separators.
    fn digits(&mut self, radix: Radix) {
        let rest = self.cursor.rest();
        let run = chars::strspn_number(rest, radix);
        let start = self.cursor.pos();
        self.cursor.advance_n(width_u32(run.len));

        if let Some(index) = run.invalid_underscore {
            let trailing = index + 1 == run.len && (index == 0 || rest[index - 1] != b'_');
            let at = start + width_u32(index);
            let id = if trailing {
                DiagnosticId::NumberLiteralUnderscore
            } else {
                DiagnosticId::InvalidNumberUnderscore
            };
            self.error(Span::new(at, at + 1), id);
        }
    }

    fn fraction_and_exponent(&mut self) -> TokenKind {
        let mut kind = TokenKind::Integer;

        if self.cursor.current() == b'.' && chars::is_decimal_digit(self.cursor.peek()) {
            self.cursor.advance();
            self.digits(Radix::Decimal);
            kind = TokenKind::Float;
        }

        if matches!(self.cursor.current(), b'e' | b'E') {
            let after = self.cursor.peek();
            let signed = matches!(after, b'+' | b'-');
            let digit = if signed { self.cursor.peek2() } else { after };
            if chars::is_decimal_digit(digit) {
                self.cursor.advance_n(if signed { 2 } else { 1 });
                self.digits(Radix::Decimal);
                kind = TokenKind::Float;
            } else if signed || !is_ident_byte(after) {
                self.cursor.advance_n(if signed { 2 } else { 1 });
                self.error(self.number_span(), DiagnosticId::InvalidFloatExponent);
                kind = TokenKind::Float;
            }
        }
        kind
    }

    /// `r` and `i` suffixes. `1e3r` is not rational.
    fn suffixes(&mut self, kind: TokenKind) -> TokenKind {
        let mut kind = kind;
        let text = self.cursor.slice(self.token_start, self.cursor.pos());
        let has_exponent =
            kind == TokenKind::Float && text.iter().any(|&b| matches!(b, b'e' | b'E'));

        if self.cursor.current() == b'r' && !has_exponent {
            let after = self.cursor.peek();
            let rational = !is_ident_byte(after)
                || (after == b'i' && !is_ident_byte(self.cursor.peek2()));
            if rational {
                self.cursor.advance();
                kind = TokenKind::RationalNumber;
            }
        }
        if self.cursor.current() == b'i' && !is_ident_byte(self.cursor.peek()) {
            self.cursor.advance();
            kind = TokenKind::ImaginaryNumber;
        }
        kind
    }
}
