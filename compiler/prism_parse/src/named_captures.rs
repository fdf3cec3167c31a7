//! Named capture groups in a regexp body.
//!
//! `/(?<year>\d+)/ =~ line` declares `year` as a local, so the parser needs
//! the group names without a full regexp parser.

use std::ops::Range;

/// Byte ranges of the group names in `source`, in order of appearance.
///
/// Escapes, character classes, comment groups `(?#...)` and lookbehinds
/// `(?<=` `(?<!` are skipped. Names are returned as written; whether they
/// make valid local names is up to the caller.
pub fn named_captures(source: &[u8]) -> Vec<Range<usize>> {
    let mut names = Vec::new();
    let mut pos = 0;
    let mut class_depth = 0usize;

    while pos < source.len() {
        match source[pos] {
            b'\\' => pos += 2,
            b'[' => {
                class_depth += 1;
                pos += 1;
            }
            b']' if class_depth > 0 => {
                class_depth -= 1;
                pos += 1;
            }
            b'(' if class_depth == 0 && source.get(pos + 1) == Some(&b'?') => {
                pos += 2;
                match source.get(pos) {
                    Some(b'#') => pos = skip_comment(source, pos),
                    Some(&open @ (b'<' | b'\'')) => {
                        let close = if open == b'<' { b'>' } else { b'\'' };
                        if let Some(range) = group_name(source, pos + 1, close) {
                            pos = range.end + 1;
                            names.push(range);
                        } else {
                            pos += 1;
                        }
                    }
                    _ => {}
                }
            }
            _ => pos += 1,
        }
    }
    names
}

/// Past the `)` closing a `(?#...)` comment.
fn skip_comment(source: &[u8], from: usize) -> usize {
    let mut pos = from;
    while pos < source.len() {
        match source[pos] {
            b'\\' => pos += 2,
            b')' => return pos + 1,
            _ => pos += 1,
        }
    }
    source.len()
}

/// The name between `start` and `close`. Lookbehinds (`<=`, `<!`) and
/// empty or unterminated names are not groups.
fn group_name(source: &[u8], start: usize, close: u8) -> Option<Range<usize>> {
    if matches!(source.get(start), Some(b'=' | b'!')) {
        return None;
    }
    let length = source[start.min(source.len())..]
        .iter()
        .position(|&b| b == close || b == b')' || b == b'(')?;
    let end = start + length;
    (length > 0 && source[end] == close).then_some(start..end)
}

/// Whether a capture name can become a local variable.
pub(crate) fn is_local_name(name: &[u8]) -> bool {
    let Some(&first) = name.first() else {
        return false;
    };
    (first == b'_' || first.is_ascii_lowercase() || first >= 0x80)
        && name
            .iter()
            .all(|&b| b == b'_' || b.is_ascii_alphanumeric() || b >= 0x80)
        && !prism_lexer::is_keyword(name)
}

#[cfg(test)]
mod tests;
