//! Zero-terminated source buffer.
//!
//! The buffer keeps a `0x00` sentinel after the source content, padded to
//! the next 64-byte boundary, so [`Cursor::peek`] and friends never need a
//! bounds check near the end of input.
//!
//! A leading UTF-8 byte order mark is recorded and skipped by
//! [`SourceBuffer::cursor`]; the lexer then starts in UTF-8.

use crate::Cursor;

const CACHE_LINE: usize = 64;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    buf: Vec<u8>,
    source_len: u32,
    bom_len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a padded buffer.
    ///
    /// Sources longer than `u32::MAX` bytes are truncated to `u32::MAX`;
    /// spans are 32-bit.
    pub fn new(source: &[u8]) -> Self {
        let source = &source[..source.len().min(u32::MAX as usize)];
        let source_len = source.len();
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source);

        let bom_len = if source.starts_with(UTF8_BOM) { 3 } else { 0 };

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
            bom_len,
        }
    }

    /// The source content without sentinel or padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// The whole buffer; the byte at [`len()`](Self::len) is the sentinel.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// A cursor positioned after the byte order mark, if any.
    pub fn cursor(&self) -> Cursor<'_> {
        let mut cursor = Cursor::new(&self.buf, self.source_len);
        cursor.advance_n(self.bom_len);
        cursor
    }

    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// True when the source starts with a UTF-8 byte order mark.
    pub fn has_bom(&self) -> bool {
        self.bom_len > 0
    }

    /// Byte length of the leading byte order mark (0 or 3).
    pub fn bom_len(&self) -> u32 {
        self.bom_len
    }
}

#[cfg(test)]
mod tests;
