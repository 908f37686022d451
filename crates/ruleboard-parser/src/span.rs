//! Byte spans into the document source.

use std::ops::Range;

/// A half-open byte range `start..end` into the document source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a span from a byte range.
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    /// Span of the single character found at a 1-based line and column.
    ///
    /// `serde_json` reports error positions this way. The column counts
    /// bytes; a column of `0` points at the start of the line. Positions past
    /// the end of `source` are clamped to its end, and offsets are moved back
    /// to the nearest character boundary.
    pub fn at_line_column(source: &str, line: usize, column: usize) -> Self {
        let line_start: usize = source
            .split_inclusive('\n')
            .take(line.saturating_sub(1))
            .map(str::len)
            .sum();

        let mut start = (line_start + column.saturating_sub(1)).min(source.len());
        while !source.is_char_boundary(start) {
            start -= 1;
        }

        let end = source[start..]
            .chars()
            .next()
            .map_or(start, |c| start + c.len_utf8());

        Self::new(start..end)
    }

    /// Shift this span right by `offset` bytes.
    pub fn offset(self, offset: usize) -> Self {
        Self::new(self.start + offset..self.end + offset)
    }

    /// Get the start offset.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get the end offset (exclusive).
    pub fn end(&self) -> usize {
        self.end
    }

    /// Get the length in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range)
    }
}
