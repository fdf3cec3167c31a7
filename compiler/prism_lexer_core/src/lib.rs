//! Byte-level building blocks for lexing Ruby source.
//!
//! Ruby source is a byte string in some encoding, not necessarily UTF-8, so
//! everything here works on `&[u8]`:
//!
//! - [`SourceBuffer`] owns a zero-terminated copy of the source and notes a
//!   leading UTF-8 byte order mark.
//! - [`Cursor`] walks the buffer with cheap look-ahead.
//! - [`chars`] classifies ASCII bytes (whitespace, digits, regexp options).
//! - [`Encoding`] answers character width and class questions for every
//!   encoding a magic comment can select.

pub mod chars;
mod cursor;
pub mod encoding;
mod source_buffer;

pub use cursor::Cursor;
pub use encoding::Encoding;
pub use source_buffer::SourceBuffer;
