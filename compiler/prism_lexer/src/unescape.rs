//! Escape sequence processing for string-like literal content.
//!
//! The lexer hands over raw content bytes; this module turns them into the
//! bytes the literal denotes. How much is processed depends on the literal:
//!
//! | Mode         | Literals                                   |
//! |--------------|--------------------------------------------|
//! | `None`       | regexps, `<<'EOS'` heredocs                |
//! | `Minimal`    | `'...'`, `%q()`, `:'...'`, `%s()`          |
//! | `Whitespace` | `%w()`, `%i()`                             |
//! | `All`        | `"..."`, `%Q()`, `%W()`, `%I()`, backticks |
//!
//! Malformed escapes are reported and skipped; output is always produced.

use prism_diagnostic::{DiagnosticId, DiagnosticList, FormatArg};
use prism_ir::Span;
use prism_lexer_core::Encoding;

/// Closing (and for bracket pairs, opening) delimiter of a literal.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Delimiter {
    pub close: u8,
    pub open: Option<u8>,
}

impl Delimiter {
    pub const fn new(close: u8, open: Option<u8>) -> Self {
        Delimiter { close, open }
    }

    fn matches(self, byte: u8) -> bool {
        byte == self.close || self.open == Some(byte)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum UnescapeMode {
    /// Content is copied verbatim.
    None,
    /// Only `\\` and an escaped delimiter are processed.
    Minimal(Delimiter),
    /// `Minimal`, plus an escaped whitespace byte stands for itself.
    Whitespace(Delimiter),
    /// The full double-quoted escape grammar.
    All,
}

/// Where the content came from, for diagnostics.
pub struct UnescapeContext<'a> {
    pub encoding: Encoding,
    /// Source offset of the first content byte.
    pub offset: u32,
    /// Content of a `?x` character literal: at most one codepoint.
    pub single_character: bool,
    pub errors: &'a mut DiagnosticList,
}

/// Processed literal content.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Unescaped {
    pub bytes: Vec<u8>,
    /// A `\u` escape produced non-ASCII output.
    pub forced_utf8: bool,
    /// A byte escape produced a byte above `0x7F`.
    pub forced_binary: bool,
}

/// Unescape `input` according to `mode`.
pub fn unescape(input: &[u8], mode: UnescapeMode, ctx: &mut UnescapeContext<'_>) -> Unescaped {
    if mode == UnescapeMode::None || memchr::memchr(b'\\', input).is_none() {
        return Unescaped {
            bytes: input.to_vec(),
            ..Unescaped::default()
        };
    }

    let mut reader = Reader::new(input, ctx);
    while reader.pos < input.len() {
        if input[reader.pos] != b'\\' {
            reader.copy_character();
            continue;
        }
        match mode {
            UnescapeMode::None => reader.copy_character(),
            UnescapeMode::Minimal(delimiter) => reader.minimal(delimiter, false),
            UnescapeMode::Whitespace(delimiter) => reader.minimal(delimiter, true),
            UnescapeMode::All => reader.escape(),
        }
    }
    reader.finish()
}

/// Byte length of the escape sequence starting at the backslash `input[pos]`.
///
/// Returns at least 1 and never runs past the end of `input`.
pub fn escape_len(input: &[u8], pos: usize, encoding: Encoding) -> usize {
    if pos >= input.len() {
        return 0;
    }
    let mut scratch = DiagnosticList::new();
    let mut ctx = UnescapeContext {
        encoding,
        offset: 0,
        single_character: false,
        errors: &mut scratch,
    };
    let mut reader = Reader::new(input, &mut ctx);
    reader.pos = pos;
    reader.escape();
    (reader.pos - pos).max(1)
}

bitflags::bitflags! {
    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    struct EscapeFlags: u8 {
        const CONTROL = 1 << 0;
        const META = 1 << 1;
    }
}

struct Reader<'i, 'c> {
    input: &'i [u8],
    pos: usize,
    out: Vec<u8>,
    forced_utf8: bool,
    forced_binary: bool,
    encoding: Encoding,
    offset: u32,
    single_character: bool,
    errors: &'c mut DiagnosticList,
}

impl<'i, 'c> Reader<'i, 'c> {
    fn new(input: &'i [u8], ctx: &'c mut UnescapeContext<'_>) -> Self {
        Reader {
            input,
            pos: 0,
            out: Vec::with_capacity(input.len()),
            forced_utf8: false,
            forced_binary: false,
            encoding: ctx.encoding,
            offset: ctx.offset,
            single_character: ctx.single_character,
            errors: &mut *ctx.errors,
        }
    }

    fn finish(self) -> Unescaped {
        Unescaped {
            bytes: self.out,
            forced_utf8: self.forced_utf8,
            forced_binary: self.forced_binary,
        }
    }

    #[inline]
    fn peek(&self, n: usize) -> Option<u8> {
        self.input.get(self.pos + n).copied()
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "literal content offsets fit in the u32 source length"
    )]
    fn span(&self, start: usize, end: usize) -> Span {
        Span::new(
            self.offset + start as u32,
            self.offset + end.min(self.input.len()) as u32,
        )
    }

    fn error(&mut self, start: usize, id: DiagnosticId) {
        let span = self.span(start, self.pos);
        self.errors.append(span, id);
    }

    /// Copy one character, using the encoding so that a multibyte trail
    /// byte is never read as a backslash.
    fn copy_character(&mut self) {
        let width = self
            .encoding
            .char_width(&self.input[self.pos..])
            .max(1);
        let end = (self.pos + width).min(self.input.len());
        self.out.extend_from_slice(&self.input[self.pos..end]);
        self.pos = end;
    }

    fn minimal(&mut self, delimiter: Delimiter, whitespace: bool) {
        match self.peek(1) {
            Some(b'\\') => {
                self.out.push(b'\\');
                self.pos += 2;
            }
            Some(byte) if delimiter.matches(byte) => {
                self.out.push(byte);
                self.pos += 2;
            }
            Some(byte @ (b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')) if whitespace => {
                self.out.push(byte);
                self.pos += 2;
            }
            _ => {
                self.out.push(b'\\');
                self.pos += 1;
            }
        }
    }

    /// One full escape sequence; `self.pos` is at the backslash.
    fn escape(&mut self) {
        let start = self.pos;
        self.pos += 1;
        let Some(byte) = self.peek(0) else {
            self.out.push(b'\\');
            return;
        };

        match byte {
            b'\n' => self.pos += 1,
            b'\r' if self.peek(1) == Some(b'\n') => self.pos += 2,
            b'u' => {
                self.pos += 1;
                self.unicode(start);
            }
            b'c' | b'C' | b'M' => {
                if let Some(value) = self.escaped_byte(start, EscapeFlags::empty()) {
                    self.push_byte(value);
                }
            }
            b'x' | b'0'..=b'7' => {
                if let Some(value) = self.numeric(start) {
                    self.push_byte(value);
                }
            }
            _ => {
                if let Some(value) = named(byte) {
                    self.out.push(value);
                    self.pos += 1;
                } else {
                    // Unknown escapes stand for the character itself.
                    self.copy_character();
                }
            }
        }
    }

    fn push_byte(&mut self, value: u8) {
        if value >= 0x80 {
            self.forced_binary = true;
            if self.forced_utf8 {
                self.mixed_encoding();
            }
        }
        self.out.push(value);
    }

    fn mixed_encoding(&mut self) {
        let span = self.span(self.pos.saturating_sub(1), self.pos);
        let name = self.encoding.name();
        if self
            .errors
            .append_format(span, DiagnosticId::MixedEncoding, &[FormatArg::Str(name)])
            .is_err()
        {
            self.errors.append(span, DiagnosticId::MixedEncoding);
        }
    }

    /// `\xHH` or `\NNN`; `self.pos` is at `x` or the first octal digit.
    fn numeric(&mut self, start: usize) -> Option<u8> {
        if self.peek(0) == Some(b'x') {
            self.pos += 1;
            let mut value: u8 = 0;
            let mut digits = 0;
            while digits < 2 {
                match self.peek(0).and_then(|b| char::from(b).to_digit(16)) {
                    Some(digit) => {
                        value = (value << 4) | digit_u8(digit);
                        self.pos += 1;
                        digits += 1;
                    }
                    None => break,
                }
            }
            if digits == 0 {
                self.error(start, DiagnosticId::EscapeInvalidHexadecimal);
                return None;
            }
            return Some(value);
        }

        let mut value: u32 = 0;
        let mut digits = 0;
        while digits < 3 {
            match self.peek(0) {
                Some(b @ b'0'..=b'7') => {
                    value = (value << 3) | u32::from(b - b'0');
                    self.pos += 1;
                    digits += 1;
                }
                _ => break,
            }
        }
        Some(value.to_le_bytes()[0])
    }

    /// Control and meta escapes, possibly nested: `\C-x`, `\cx`, `\M-x`,
    /// `\M-\C-x`. `self.pos` is at `c`, `C` or `M`.
    fn escaped_byte(&mut self, start: usize, flags: EscapeFlags) -> Option<u8> {
        let (flag, repeat, invalid) = match self.peek(0) {
            Some(b'M') => (
                EscapeFlags::META,
                DiagnosticId::EscapeInvalidMetaRepeat,
                DiagnosticId::EscapeInvalidMeta,
            ),
            _ => (
                EscapeFlags::CONTROL,
                DiagnosticId::EscapeInvalidControlRepeat,
                DiagnosticId::EscapeInvalidControl,
            ),
        };

        if self.peek(0) == Some(b'c') {
            self.pos += 1;
        } else if self.peek(1) == Some(b'-') {
            self.pos += 2;
        } else {
            self.pos += 1;
            self.error(start, invalid);
            return None;
        }

        if flags.contains(flag) {
            self.error(start, repeat);
            return None;
        }
        let flags = flags | flag;

        let target = match self.peek(0) {
            None => {
                self.error(start, invalid);
                return None;
            }
            Some(b'\\') => {
                self.pos += 1;
                match self.peek(0) {
                    Some(b'c' | b'C' | b'M') => return self.escaped_byte(start, flags),
                    Some(b'u') => {
                        self.pos += 1;
                        self.error(start, DiagnosticId::EscapeInvalidUnicodeCmFlags);
                        return None;
                    }
                    Some(b'x' | b'0'..=b'7') => self.numeric(start)?,
                    Some(byte) => {
                        self.pos += 1;
                        named(byte).unwrap_or(byte)
                    }
                    None => {
                        self.error(start, invalid);
                        return None;
                    }
                }
            }
            Some(byte) if byte.is_ascii() => {
                self.pos += 1;
                byte
            }
            Some(_) => {
                self.skip_character();
                self.error(start, invalid);
                return None;
            }
        };

        Some(apply_flags(target, flags))
    }

    fn skip_character(&mut self) {
        let width = self
            .encoding
            .char_width(&self.input[self.pos..])
            .max(1);
        self.pos = (self.pos + width).min(self.input.len());
    }

    /// `\uHHHH` or `\u{H... H...}`; `self.pos` is after the `u`.
    fn unicode(&mut self, start: usize) {
        if self.peek(0) != Some(b'{') {
            let digits = self.input[self.pos..]
                .iter()
                .take(4)
                .take_while(|b| b.is_ascii_hexdigit())
                .count();
            if digits < 4 {
                self.pos += digits;
                self.error(start, DiagnosticId::EscapeInvalidUnicode);
                return;
            }
            let value = hex_value(&self.input[self.pos..self.pos + 4]);
            self.pos += 4;
            self.push_codepoint(start, value);
            return;
        }

        self.pos += 1;
        let mut codepoints = 0usize;
        loop {
            while matches!(self.peek(0), Some(b' ' | b'\t')) {
                self.pos += 1;
            }
            let digit_start = self.pos;
            while self.peek(0).is_some_and(|b| b.is_ascii_hexdigit()) {
                self.pos += 1;
            }
            let digits = self.pos - digit_start;
            if digits == 0 {
                break;
            }
            codepoints += 1;
            if codepoints == 2 && self.single_character {
                self.error(start, DiagnosticId::EscapeInvalidUnicodeLiteral);
            }
            if digits > 6 {
                self.error(digit_start, DiagnosticId::EscapeInvalidUnicodeLong);
                continue;
            }
            let value = hex_value(&self.input[digit_start..self.pos]);
            self.push_codepoint(digit_start, value);
        }

        if self.peek(0) == Some(b'}') {
            self.pos += 1;
            if codepoints == 0 {
                self.error(start, DiagnosticId::EscapeInvalidUnicode);
            }
        } else {
            self.error(start, DiagnosticId::EscapeInvalidUnicodeTerm);
        }
    }

    fn push_codepoint(&mut self, start: usize, value: u32) {
        let ch = match char::from_u32(value) {
            Some(ch) => ch,
            None => {
                self.error(start, DiagnosticId::EscapeInvalidUnicode);
                char::REPLACEMENT_CHARACTER
            }
        };
        if !ch.is_ascii() {
            self.forced_utf8 = true;
            if self.forced_binary {
                self.mixed_encoding();
            }
        }
        let mut buf = [0u8; 4];
        self.out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
    }
}

/// Value of a single-letter escape such as `\n`.
fn named(byte: u8) -> Option<u8> {
    Some(match byte {
        b'a' => 0x07,
        b'b' => 0x08,
        b'e' => 0x1b,
        b'f' => 0x0c,
        b'n' => b'\n',
        b'r' => b'\r',
        b's' => b' ',
        b't' => b'\t',
        b'v' => 0x0b,
        _ => return None,
    })
}

fn apply_flags(byte: u8, flags: EscapeFlags) -> u8 {
    let mut value = byte;
    if flags.contains(EscapeFlags::CONTROL) {
        value = if value == b'?' { 0x7f } else { value & 0x9f };
    }
    if flags.contains(EscapeFlags::META) {
        value |= 0x80;
    }
    value
}

fn digit_u8(digit: u32) -> u8 {
    digit.to_le_bytes()[0]
}

/// Parses at most six hex digits, so the value fits in a `u32`.
fn hex_value(digits: &[u8]) -> u32 {
    digits
        .iter()
        .filter_map(|&b| char::from(b).to_digit(16))
        .fold(0, |value, digit| (value << 4) | digit)
}

#[cfg(test)]
mod tests;
