//! Shared utility functions.

/// Maps byte offsets in a source buffer to 1-based line numbers.
///
/// The parser reports positions as byte offsets into the source; findings
/// carry line numbers. One index is built per analyzed buffer and shared
/// by everything that needs the conversion.
///
/// # Examples
///
/// ```
/// use pysweep::utils::LineIndex;
///
/// let index = LineIndex::new("x = 1\ny = 2\n");
/// assert_eq!(index.line_of(0), 1);
/// assert_eq!(index.line_of(6), 2);
/// ```
#[derive(Debug)]
pub struct LineIndex {
    /// Byte offset of the first character of each line, ascending.
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (offset, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(offset + 1);
            }
        }
        Self { line_starts }
    }

    /// 1-based line containing the given byte offset. Offsets past the end
    /// of the buffer resolve to the last line.
    pub fn line_of(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(index) => index + 1,
            Err(index) => index,
        }
    }
}
