//! Cursor over a zero-terminated source buffer.
//!
//! EOF is `pos >= source_len`. A `0x00` byte before that point is real
//! source content (Ruby treats it as an end-of-script marker, which is the
//! lexer's business, not the cursor's).

/// Earliest of two optional memchr hits.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Position in a [`SourceBuffer`](crate::SourceBuffer).
///
/// `Copy`, so the lexer snapshots it freely for look-ahead and for jumping
/// between a heredoc body and the rest of its opening line.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Source, sentinel and padding.
    buf: &'a [u8],
    pos: u32,
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

#[expect(
    clippy::cast_possible_truncation,
    reason = "offsets are bounded by source_len, which fits in u32"
)]
#[inline]
fn offset_u32(offset: usize) -> u32 {
    offset as u32
}

impl<'a> Cursor<'a> {
    /// `buf[source_len]` must be the `0x00` sentinel.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Byte at the current position; `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.peek_at(0)
    }

    #[inline]
    pub fn peek(&self) -> u8 {
        self.peek_at(1)
    }

    #[inline]
    pub fn peek2(&self) -> u8 {
        self.peek_at(2)
    }

    /// Byte `n` positions ahead, `0x00` past the end of the source.
    #[inline]
    pub fn peek_at(&self, n: u32) -> u8 {
        let index = self.pos as usize + n as usize;
        if index < self.source_len as usize {
            self.buf[index]
        } else {
            0
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Move to an absolute offset, clamped to the end of the source.
    #[inline]
    pub fn set_pos(&mut self, pos: u32) {
        self.pos = pos.min(self.source_len);
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Source bytes in `start..end`. Both ends are clamped to the source.
    pub fn slice(&self, start: u32, end: u32) -> &'a [u8] {
        let end = end.min(self.source_len) as usize;
        let start = (start as usize).min(end);
        &self.buf[start..end]
    }

    /// Source bytes from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a [u8] {
        self.slice(start, self.pos)
    }

    /// Source bytes from the current position to the end.
    pub fn rest(&self) -> &'a [u8] {
        self.slice(self.pos, self.source_len)
    }

    /// Whether the source continues with `prefix` at the current position.
    #[inline]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Consume `byte` if it is next.
    #[inline]
    pub fn eat(&mut self, byte: u8) -> bool {
        if !self.is_eof() && self.current() == byte {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume `prefix` if the source continues with it.
    pub fn eat_str(&mut self, prefix: &[u8]) -> bool {
        if self.starts_with(prefix) {
            self.pos += offset_u32(prefix.len());
            true
        } else {
            false
        }
    }

    /// Advance while `pred` holds for the current byte and input remains.
    /// Returns the number of bytes consumed.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> u32 {
        let start = self.pos;
        while self.pos < self.source_len && pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Advance to the next `\n` (not consuming it) or to EOF.
    pub fn eat_until_newline_or_eof(&mut self) {
        match memchr::memchr(b'\n', self.rest()) {
            Some(offset) => self.pos += offset_u32(offset),
            None => self.pos = self.source_len,
        }
    }

    /// Offset of the next `byte` at or after the current position.
    pub fn find(&self, byte: u8) -> Option<u32> {
        memchr::memchr(byte, self.rest()).map(|offset| self.pos + offset_u32(offset))
    }

    /// Advance past plain string content and return the byte found, or
    /// `0x00` at EOF.
    ///
    /// Stops at `terminator`, `incrementor` (nesting delimiter), a
    /// backslash, `#` when `interpolation` is on, and `\n` so the caller
    /// can record line starts.
    pub fn skip_to_string_delim(
        &mut self,
        terminator: u8,
        incrementor: Option<u8>,
        interpolation: bool,
    ) -> u8 {
        let remaining = self.rest();
        let primary = memchr::memchr3(terminator, b'\\', b'\n', remaining);
        let secondary = match (incrementor, interpolation) {
            (Some(open), true) => memchr::memchr2(open, b'#', remaining),
            (Some(open), false) => memchr::memchr(open, remaining),
            (None, true) => memchr::memchr(b'#', remaining),
            (None, false) => None,
        };

        match earliest_of(primary, secondary) {
            Some(offset) => {
                self.pos += offset_u32(offset);
                self.buf[self.pos as usize]
            }
            None => {
                self.pos = self.source_len;
                0
            }
        }
    }
}

#[cfg(test)]
mod tests;
