//! Source encodings.
//!
//! An [`Encoding`] answers the questions the lexer asks of raw bytes: how
//! long is the next character, and is it alphabetic, alphanumeric or
//! uppercase. Single-byte encodings answer from a 256-entry table; the
//! multibyte ones validate lead and trail byte ranges and fall back to the
//! ASCII table for single-byte characters.
//!
//! UTF-8 and CESU-8 decode to a codepoint and classify it with the Latin-1
//! table below U+0100 and Rust's Unicode properties above.

mod registry;
mod tables;

use std::fmt;
use std::hash::{Hash, Hasher};

const ALPHABETIC: u8 = 1 << 0;
const ALPHANUMERIC: u8 = 1 << 1;
const UPPERCASE: u8 = 1 << 2;

/// How character boundaries are found.
#[derive(Copy, Clone, Debug)]
enum Width {
    Utf8,
    Cesu8,
    /// Only bytes below 0x80 are characters.
    UsAscii,
    /// Every byte is a character.
    Single,
    Big5,
    Cp949,
    EmacsMule,
    EucJp,
    EucKr,
    EucTw,
    Gb18030,
    Gbk,
    ShiftJis,
}

/// How characters are classified.
#[derive(Copy, Clone, Debug)]
enum Class {
    Unicode,
    Ascii,
    /// ASCII table, and nothing at or above 0x80 qualifies.
    Ascii7Bit,
    EucJp,
    ShiftJis,
    Table(&'static [u8; 256]),
}

/// One source encoding. Cheap to copy; compares by name.
#[derive(Copy, Clone)]
pub struct Encoding {
    name: &'static str,
    width: Width,
    class: Class,
}

impl Encoding {
    const fn new(name: &'static str, width: Width, class: Class) -> Self {
        Encoding { name, width, class }
    }

    /// Canonical Ruby name, e.g. `"UTF-8"` or `"Shift_JIS"`.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this is UTF-8 or one of its vendor variants.
    pub const fn is_utf8(&self) -> bool {
        matches!(self.width, Width::Utf8)
    }

    /// Byte length of the character at the start of `bytes`, or 0 if the
    /// bytes do not form a valid character.
    pub fn char_width(&self, bytes: &[u8]) -> usize {
        let Some(&lead) = bytes.first() else {
            return 0;
        };
        match self.width {
            Width::Utf8 => utf8_decode(bytes).map_or(0, |(_, width)| width),
            Width::Cesu8 => cesu8_decode(bytes).map_or(0, |(_, width)| width),
            Width::UsAscii => usize::from(lead < 0x80),
            Width::Single => 1,
            Width::Big5 => big5_width(bytes),
            Width::Cp949 => cp949_width(bytes),
            Width::EmacsMule => emacs_mule_width(bytes),
            Width::EucJp => euc_jp_width(bytes),
            Width::EucKr => euc_kr_width(bytes),
            Width::EucTw => euc_tw_width(bytes),
            Width::Gb18030 => gb18030_width(bytes),
            Width::Gbk => gbk_width(bytes),
            Width::ShiftJis => shift_jis_width(bytes),
        }
    }

    /// Byte length of the character at the start of `bytes` if it is
    /// alphabetic, else 0.
    pub fn alpha_char(&self, bytes: &[u8]) -> usize {
        self.classify(bytes, ALPHABETIC)
    }

    /// Byte length of the character at the start of `bytes` if it is
    /// alphanumeric, else 0.
    pub fn alnum_char(&self, bytes: &[u8]) -> usize {
        self.classify(bytes, ALPHANUMERIC)
    }

    /// Whether the character at the start of `bytes` is uppercase. Decides
    /// whether an identifier is a constant.
    pub fn is_upper_char(&self, bytes: &[u8]) -> bool {
        self.classify(bytes, UPPERCASE) > 0
    }

    /// Byte length of the character at the start of `bytes` if it may begin
    /// an identifier: an alphabetic character, `_`, or any valid non-ASCII
    /// character.
    pub fn ident_start_width(&self, bytes: &[u8]) -> usize {
        match bytes.first() {
            None => 0,
            Some(&b) if b < 0x80 => usize::from(table_has(&tables::ASCII, b, ALPHABETIC) || b == b'_'),
            Some(_) => match self.alpha_char(bytes) {
                0 => self.char_width(bytes),
                width => width,
            },
        }
    }

    /// Like [`ident_start_width`](Self::ident_start_width) but digits are
    /// allowed too.
    pub fn ident_char_width(&self, bytes: &[u8]) -> usize {
        match bytes.first() {
            None => 0,
            Some(&b) if b < 0x80 => usize::from(table_has(&tables::ASCII, b, ALPHANUMERIC) || b == b'_'),
            Some(_) => match self.alnum_char(bytes) {
                0 => self.char_width(bytes),
                width => width,
            },
        }
    }

    fn classify(&self, bytes: &[u8], bit: u8) -> usize {
        let Some(&lead) = bytes.first() else {
            return 0;
        };
        match self.class {
            Class::Table(table) => usize::from(table_has(table, lead, bit)),
            Class::Ascii => usize::from(table_has(&tables::ASCII, lead, bit)),
            Class::Ascii7Bit => usize::from(lead < 0x80 && table_has(&tables::ASCII, lead, bit)),
            Class::Unicode => {
                if lead < 0x80 {
                    return usize::from(table_has(&tables::UNICODE, lead, bit));
                }
                let decoded = match self.width {
                    Width::Cesu8 => cesu8_decode(bytes),
                    _ => utf8_decode(bytes),
                };
                match decoded {
                    Some((codepoint, width)) if unicode_has(codepoint, bit) => width,
                    _ => 0,
                }
            }
            Class::EucJp => {
                if bit != UPPERCASE {
                    return usize::from(lead < 0x80 && table_has(&tables::ASCII, lead, bit));
                }
                match (euc_jp_width(bytes), bytes) {
                    (1, _) => usize::from(table_has(&tables::ASCII, lead, bit)),
                    (2, [0xA3, 0xC1..=0xDA, ..] | [0xA6, 0xA1..=0xB8, ..] | [0xA7, 0xA1..=0xC1, ..]) => 2,
                    _ => 0,
                }
            }
            Class::ShiftJis => {
                let width = shift_jis_width(bytes);
                if bit != UPPERCASE {
                    return match width {
                        1 => usize::from(lead >= 0x80 || table_has(&tables::ASCII, lead, bit)),
                        width => width,
                    };
                }
                match (width, bytes) {
                    (1, _) => usize::from(table_has(&tables::ASCII, lead, bit)),
                    (2, [0x82, 0x60..=0x79, ..] | [0x83, 0x9F..=0xB6, ..] | [0x84, 0x40..=0x60, ..]) => 2,
                    _ => 0,
                }
            }
        }
    }

    /// Resolve an encoding name or alias, ignoring ASCII case.
    ///
    /// Any name starting with `UTF-8` resolves to UTF-8 (platform suffixes
    /// such as `UTF-8-UNIX` are ignored), except `UTF-8-HFS` which is
    /// `UTF8-MAC`.
    pub fn find(name: &[u8]) -> Option<Encoding> {
        if name.len() >= 5 && name[..5].eq_ignore_ascii_case(b"UTF-8") {
            if name[5..].eq_ignore_ascii_case(b"-HFS") {
                return Some(Encoding::UTF8_MAC);
            }
            return Some(Encoding::UTF_8);
        }
        registry::ALIASES
            .iter()
            .find(|(alias, _)| alias.as_bytes().eq_ignore_ascii_case(name))
            .map(|&(_, encoding)| encoding)
    }

    /// Every supported encoding, UTF-8 first.
    pub fn all() -> &'static [Encoding] {
        &registry::ALL
    }
}

impl Default for Encoding {
    fn default() -> Self {
        Encoding::UTF_8
    }
}

impl PartialEq for Encoding {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Encoding {}

impl Hash for Encoding {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Debug for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Encoding({})", self.name)
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[inline]
fn table_has(table: &[u8; 256], b: u8, bit: u8) -> bool {
    table[b as usize] & bit != 0
}

fn unicode_has(codepoint: u32, bit: u8) -> bool {
    if let Ok(latin1) = u8::try_from(codepoint) {
        return table_has(&tables::UNICODE, latin1, bit);
    }
    let Some(c) = char::from_u32(codepoint) else {
        return false;
    };
    match bit {
        ALPHABETIC => c.is_alphabetic(),
        ALPHANUMERIC => c.is_alphanumeric(),
        _ => c.is_uppercase(),
    }
}

#[inline]
fn is_continuation(b: u8) -> bool {
    (0x80..=0xBF).contains(&b)
}

/// Decode one well-formed UTF-8 character: no overlong forms, no
/// surrogates, nothing above U+10FFFF.
pub(crate) fn utf8_decode(bytes: &[u8]) -> Option<(u32, usize)> {
    let cont = |b: u8| u32::from(b & 0x3F);
    match *bytes {
        [b0, ..] if b0 < 0x80 => Some((u32::from(b0), 1)),
        [b0 @ 0xC2..=0xDF, b1, ..] if is_continuation(b1) => {
            Some(((u32::from(b0 & 0x1F) << 6) | cont(b1), 2))
        }
        [b0 @ 0xE0..=0xEF, b1, b2, ..] => {
            let second_ok = match b0 {
                0xE0 => (0xA0..=0xBF).contains(&b1),
                0xED => (0x80..=0x9F).contains(&b1),
                _ => is_continuation(b1),
            };
            (second_ok && is_continuation(b2))
                .then(|| ((u32::from(b0 & 0x0F) << 12) | (cont(b1) << 6) | cont(b2), 3))
        }
        [b0 @ 0xF0..=0xF4, b1, b2, b3, ..] => {
            let second_ok = match b0 {
                0xF0 => (0x90..=0xBF).contains(&b1),
                0xF4 => (0x80..=0x8F).contains(&b1),
                _ => is_continuation(b1),
            };
            (second_ok && is_continuation(b2) && is_continuation(b3)).then(|| {
                (
                    (u32::from(b0 & 0x07) << 18) | (cont(b1) << 12) | (cont(b2) << 6) | cont(b3),
                    4,
                )
            })
        }
        _ => None,
    }
}

/// CESU-8: UTF-8 with supplementary characters as encoded surrogate pairs.
fn cesu8_decode(bytes: &[u8]) -> Option<(u32, usize)> {
    let cont = |b: u8| u32::from(b & 0x3F);
    match *bytes {
        [b0, ..] if b0 < 0x80 => Some((u32::from(b0), 1)),
        [b0 @ 0xC2..=0xDF, b1 @ 0x80..=0xBF, ..] => Some(((u32::from(b0 & 0x1F) << 6) | cont(b1), 2)),
        [0xED, b1 @ 0xA0..=0xAF, b2 @ 0x80..=0xBF, 0xED, b4 @ 0xB0..=0xBF, b5 @ 0x80..=0xBF, ..] => {
            let high = (u32::from(b1 & 0x0F) << 6) | cont(b2);
            let low = (u32::from(b4 & 0x0F) << 6) | cont(b5);
            Some((0x10000 + (high << 10) + low, 6))
        }
        [0xED, b1 @ 0xA0..=0xBF, b2 @ 0x80..=0xBF, ..] => {
            Some(((0xD << 12) | (cont(b1) << 6) | cont(b2), 3))
        }
        [b0 @ 0xE0..=0xEF, b1 @ 0x80..=0xBF, b2 @ 0x80..=0xBF, ..] if b0 != 0xE0 || b1 >= 0xA0 => {
            Some(((u32::from(b0 & 0x0F) << 12) | (cont(b1) << 6) | cont(b2), 3))
        }
        _ => None,
    }
}

fn big5_width(bytes: &[u8]) -> usize {
    match *bytes {
        [b0, ..] if b0 < 0x80 => 1,
        [0xA1..=0xFE, 0x40..=0x7E | 0xA1..=0xFE, ..] => 2,
        _ => 0,
    }
}

fn cp949_width(bytes: &[u8]) -> usize {
    match *bytes {
        [b0, ..] if b0 <= 0x80 => 1,
        [0x81..=0xFE, 0x41..=0x5A | 0x61..=0x7A | 0x81..=0xFE, ..] => 2,
        _ => 0,
    }
}

fn emacs_mule_width(bytes: &[u8]) -> usize {
    match *bytes {
        [b0, ..] if b0 < 0x80 => 1,
        [0x81..=0x8F, 0xA0..=0xFF, ..] => 2,
        [0x90..=0x99, 0xA0..=0xFF, 0xA0..=0xFF, ..] | [0x9A | 0x9B, 0xE0..=0xEF, 0xA0..=0xFF, ..] => 3,
        [0x9C, 0xF0..=0xF4, 0xA0..=0xFF, 0xA0..=0xFF, ..] | [0x9D, 0xF5..=0xFE, 0xA0..=0xFF, 0xA0..=0xFF, ..] => 4,
        _ => 0,
    }
}

fn euc_jp_width(bytes: &[u8]) -> usize {
    match *bytes {
        [b0, ..] if b0 < 0x80 => 1,
        [0x8E | 0xA1..=0xFE, 0xA1..=0xFE, ..] => 2,
        [0x8F, 0xA1..=0xFE, 0xA1..=0xFE, ..] => 3,
        _ => 0,
    }
}

fn euc_kr_width(bytes: &[u8]) -> usize {
    match *bytes {
        [b0, ..] if b0 < 0x80 => 1,
        [0xA1..=0xFE, 0xA1..=0xFE, ..] => 2,
        _ => 0,
    }
}

fn euc_tw_width(bytes: &[u8]) -> usize {
    match *bytes {
        [b0, ..] if b0 < 0x80 => 1,
        [0xA1..=0xFE, 0xA1..=0xFE, ..] => 2,
        [0x8E, 0xA1..=0xB0, 0xA1..=0xFE, 0xA1..=0xFE, ..] => 4,
        _ => 0,
    }
}

fn gb18030_width(bytes: &[u8]) -> usize {
    match *bytes {
        [b0, ..] if b0 < 0x80 => 1,
        [0x81..=0xFE, 0x40..=0x7E | 0x80..=0xFE, ..] => 2,
        [0x81..=0xFE, 0x30..=0x39, 0x81..=0xFE, 0x30..=0x39, ..] => 4,
        _ => 0,
    }
}

fn gbk_width(bytes: &[u8]) -> usize {
    match *bytes {
        [b0, ..] if b0 <= 0x80 => 1,
        [b0, b1, ..] if gbk_pair(b0, b1) => 2,
        _ => 0,
    }
}

fn gbk_pair(b0: u8, b1: u8) -> bool {
    let high = (0xA1..=0xFE).contains(&b1);
    let low = (0x40..=0xA0).contains(&b1) && b1 != 0x7F;
    match b0 {
        0x81..=0xA0 => (0x40..=0xFE).contains(&b1) && b1 != 0x7F,
        0xA1..=0xFE => high || low,
        _ => false,
    }
}

fn shift_jis_width(bytes: &[u8]) -> usize {
    match *bytes {
        [b0, ..] if b0 < 0x80 || (0xA1..=0xDF).contains(&b0) => 1,
        [0x81..=0x9F | 0xE0..=0xFC, 0x40..=0x7E | 0x80..=0xFC, ..] => 2,
        _ => 0,
    }
}

#[cfg(test)]
mod tests;
