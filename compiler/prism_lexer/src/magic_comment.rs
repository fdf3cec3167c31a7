//! Magic comment recognition.
//!
//! Two layouts are accepted:
//!
//! ```text
//! # frozen_string_literal: true
//! # -*- coding: utf-8; frozen-string-literal: false -*-
//! ```
//!
//! Keys compare case-insensitively with `-` and `_` interchangeable.
//! Offsets are relative to the comment text after `#`.

use std::ops::Range;

/// One `key: value` pair of a magic comment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MagicEntry {
    pub key: Range<usize>,
    pub value: Range<usize>,
}

/// Keys the lexer acts on.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum MagicKey {
    Encoding,
    FrozenStringLiteral,
    WarnIndent,
    ShareableConstantValue,
    Other,
}

impl MagicKey {
    pub fn classify(key: &[u8]) -> MagicKey {
        if key_eq(key, b"encoding") || key_eq(key, b"coding") {
            MagicKey::Encoding
        } else if key_eq(key, b"frozen_string_literal") {
            MagicKey::FrozenStringLiteral
        } else if key_eq(key, b"warn_indent") {
            MagicKey::WarnIndent
        } else if key_eq(key, b"shareable_constant_value") {
            MagicKey::ShareableConstantValue
        } else {
            MagicKey::Other
        }
    }
}

fn key_eq(key: &[u8], expected: &[u8]) -> bool {
    key.len() == expected.len()
        && key.iter().zip(expected).all(|(&a, &b)| {
            let a = if a == b'-' { b'_' } else { a.to_ascii_lowercase() };
            a == b
        })
}

fn is_blank(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | 0x0b | 0x0c | b'\r')
}

fn skip_blank(text: &[u8], mut pos: usize) -> usize {
    while pos < text.len() && is_blank(text[pos]) {
        pos += 1;
    }
    pos
}

fn find(text: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if from > text.len() {
        return None;
    }
    text[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|offset| from + offset)
}

/// Parse a comment's text (everything after `#`) into magic entries.
///
/// Returns an empty list for ordinary comments.
pub(crate) fn parse(text: &[u8]) -> Vec<MagicEntry> {
    if let Some(open) = find(text, b"-*-", 0) {
        let body_start = open + 3;
        return match find(text, b"-*-", body_start) {
            Some(close) => parse_emacs(text, body_start, close),
            None => Vec::new(),
        };
    }
    parse_simple(text).into_iter().collect()
}

/// `key: value` filling the whole comment.
fn parse_simple(text: &[u8]) -> Option<MagicEntry> {
    let key_start = skip_blank(text, 0);
    let mut pos = key_start;
    while pos < text.len() && text[pos] != b':' && !is_blank(text[pos]) {
        pos += 1;
    }
    let key_end = pos;
    if key_end == key_start || text.get(pos) != Some(&b':') {
        return None;
    }
    pos = skip_blank(text, pos + 1);
    let value_start = pos;
    while pos < text.len() && !is_blank(text[pos]) {
        pos += 1;
    }
    let value_end = pos;
    if value_end == value_start || skip_blank(text, pos) != text.len() {
        return None;
    }
    Some(MagicEntry {
        key: key_start..key_end,
        value: value_start..value_end,
    })
}

/// `key: value; key: value` between two `-*-` markers.
fn parse_emacs(text: &[u8], start: usize, end: usize) -> Vec<MagicEntry> {
    let mut entries = Vec::new();
    let mut pos = start;
    while pos < end {
        pos = skip_blank(text, pos);
        let key_start = pos;
        while pos < end && !matches!(text[pos], b':' | b';') && !is_blank(text[pos]) {
            pos += 1;
        }
        let key_end = pos;
        pos = skip_blank(text, pos).min(end);
        if pos >= end || text[pos] != b':' {
            // Not a pair; skip to the next separator.
            while pos < end && text[pos] != b';' {
                pos += 1;
            }
            pos += 1;
            continue;
        }
        pos = skip_blank(text, pos + 1).min(end);

        let (value_start, value_end) = if text.get(pos) == Some(&b'"') {
            let quoted_start = pos + 1;
            let mut close = quoted_start;
            while close < end && text[close] != b'"' {
                close += if text[close] == b'\\' { 2 } else { 1 };
            }
            let close = close.min(end);
            pos = close + 1;
            (quoted_start, close)
        } else {
            let value_start = pos;
            while pos < end && text[pos] != b';' && !is_blank(text[pos]) {
                pos += 1;
            }
            (value_start, pos)
        };

        if key_end > key_start && value_end > value_start {
            entries.push(MagicEntry {
                key: key_start..key_end,
                value: value_start..value_end,
            });
        }

        while pos < end && text[pos] != b';' {
            pos += 1;
        }
        pos += 1;
    }
    entries
}

/// Encoding name from a `coding: name` or `coding=name` anywhere in the
/// comment, as written by editors (`# vim: set fileencoding=utf-8 :`).
pub(crate) fn encoding_name(text: &[u8]) -> Option<Range<usize>> {
    let mut from = 0;
    while let Some(index) = find(text, b"coding", from) {
        let mut pos = index + b"coding".len();
        from = pos;
        if !matches!(text.get(pos), Some(b':' | b'=')) {
            continue;
        }
        pos = skip_blank(text, pos + 1);
        let start = pos;
        while pos < text.len() && (text[pos].is_ascii_alphanumeric() || matches!(text[pos], b'-' | b'_')) {
            pos += 1;
        }
        if pos > start {
            return Some(start..pos);
        }
    }
    None
}

#[cfg(test)]
mod tests;
