//! Line-start index built while lexing.
//!
//! The lexer appends the position of every `\n` it consumes. Offsets stored
//! are the byte just after each newline, so `offsets[i]` is the first byte of
//! line `i + 1` (0-based). `offsets[0]` is always 0 and stands for line 1.

/// A resolved position. `line` is biased by the parse's start line and may
/// therefore be zero or negative for `eval` style fragments.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct LineColumn {
    pub line: i32,
    pub column: u32,
}

/// Sorted list of line-start byte offsets.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NewlineList {
    offsets: Vec<u32>,
}

impl NewlineList {
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Pre-size for a source of known length. A rough guess of one line per
    /// forty bytes avoids most reallocations.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut offsets = Vec::with_capacity(capacity.max(1));
        offsets.push(0);
        NewlineList { offsets }
    }

    /// Record the `\n` at byte `newline_pos`.
    ///
    /// Positions must be appended in strictly increasing order.
    #[inline]
    pub fn append(&mut self, newline_pos: u32) {
        let offset = newline_pos + 1;
        debug_assert!(
            offset > self.last_offset(),
            "newline at {newline_pos} appended out of order"
        );
        self.offsets.push(offset);
    }

    /// Offset of the start of the last recorded line.
    #[inline]
    pub fn last_offset(&self) -> u32 {
        self.offsets.last().copied().unwrap_or(0)
    }

    /// Index of the line containing `offset`, 0-based.
    fn line_index(&self, offset: u32) -> usize {
        match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        }
    }

    /// Line containing `offset`, counted from `start_line`.
    pub fn line(&self, offset: u32, start_line: i32) -> i32 {
        bias(self.line_index(offset), start_line)
    }

    /// Line and 0-based byte column of `offset`.
    pub fn line_column(&self, offset: u32, start_line: i32) -> LineColumn {
        let index = self.line_index(offset);
        LineColumn {
            line: bias(index, start_line),
            column: offset - self.offsets[index],
        }
    }

    /// Forget every recorded newline but keep the allocation.
    pub fn clear(&mut self) {
        self.offsets.truncate(1);
    }

    #[inline]
    pub fn offsets(&self) -> &[u32] {
        &self.offsets
    }

    /// Number of lines seen so far, including the sentinel line.
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Never true: the sentinel line is always present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl Default for NewlineList {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    reason = "line count is bounded by the u32 source length"
)]
fn bias(index: usize, start_line: i32) -> i32 {
    start_line.wrapping_add(index as i32)
}

#[cfg(test)]
mod tests;
