//! Source region tracking for identifier nodes
//!
//! Stores the byte range of an identifier part within the identifier string
//! for error reporting and editor highlighting.

use text_size::{TextRange, TextSize};

/// A half-open region `[start, end)` over an identifier string (byte offsets).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextRegion {
    range: TextRange,
}

impl TextRegion {
    /// Create a region from byte offsets.
    ///
    /// # Panics
    /// Panics if `start > end`.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            range: TextRange::new(to_size(start), to_size(end)),
        }
    }

    /// An empty region at `offset`.
    pub fn empty(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn start(&self) -> usize {
        u32::from(self.range.start()) as usize
    }

    pub fn end(&self) -> usize {
        u32::from(self.range.end()) as usize
    }

    pub fn len(&self) -> usize {
        u32::from(self.range.len()) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// The underlying `text-size` range.
    pub fn range(&self) -> TextRange {
        self.range
    }

    /// Check if `offset` falls within this region (the end is exclusive).
    pub fn contains(&self, offset: usize) -> bool {
        self.range.contains(to_size(offset))
    }

    /// True if `other` starts exactly `separator_width` bytes after this region ends.
    pub fn is_adjacent_to(&self, other: &TextRegion, separator_width: usize) -> bool {
        self.end() + separator_width == other.start()
    }

    /// Shift both bounds by `delta` bytes.
    pub fn offset(&self, delta: usize) -> Self {
        Self {
            range: self.range + to_size(delta),
        }
    }

    /// Move the start forward by `delta` bytes, clamped to the end.
    pub fn start_offset(&self, delta: usize) -> Self {
        let start = (self.start() + delta).min(self.end());
        Self::new(start, self.end())
    }

    /// The smallest region covering both regions.
    pub fn cover(&self, other: &TextRegion) -> Self {
        Self {
            range: self.range.cover(other.range),
        }
    }

    /// The text this region spans in `input`, or `None` if out of bounds.
    pub fn substring<'a>(&self, input: &'a str) -> Option<&'a str> {
        input.get(self.start()..self.end())
    }
}

impl From<TextRange> for TextRegion {
    fn from(range: TextRange) -> Self {
        Self { range }
    }
}

impl std::fmt::Display for TextRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start(), self.end())
    }
}

fn to_size(offset: usize) -> TextSize {
    TextSize::try_from(offset).unwrap_or(TextSize::new(u32::MAX))
}
