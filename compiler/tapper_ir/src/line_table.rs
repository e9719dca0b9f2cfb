//! Byte offset to line/column translation.

use crate::Position;

/// Pre-computed line offset table for line/column lookup.
///
/// Builds a table of byte offsets for each line start, so every token
/// position is an O(log L) binary search instead of a rescan of the source.
///
/// # Example
///
/// ```
/// use tapper_ir::{LineOffsetTable, Position};
///
/// let source = "a\n  [map]";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.position(source, 0), Position::new(1, 1));
/// assert_eq!(table.position(source, 4), Position::new(2, 3));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start (0-indexed lines internally).
    /// offsets[0] = 0 (line 1 starts at byte 0)
    /// offsets[1] = byte after first \n (line 2 start)
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    /// Build a line offset table from source text.
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                offsets.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineOffsetTable { offsets }
    }

    /// Get 1-based line number from a byte offset.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// Get the 1-based position of a byte offset.
    ///
    /// The column counts characters (not bytes) from the start of the line.
    pub fn position(&self, source: &str, offset: u32) -> Position {
        let line = self.line_from_offset(offset);
        let line_start = self
            .offsets
            .get((line - 1) as usize)
            .copied()
            .unwrap_or(0) as usize;
        let offset = (offset as usize).min(source.len());

        let column = source
            .get(line_start..offset)
            .map_or(0, |prefix| prefix.chars().count());
        let column = u32::try_from(column).unwrap_or(u32::MAX - 1) + 1;

        Position::new(line, column)
    }
}
