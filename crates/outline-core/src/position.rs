//! Byte offset to line number conversion.

/// Converts a byte offset into a 1-indexed line number.
pub trait PositionResolver {
    fn line_of(&self, offset: usize) -> usize;
}

/// Line-start table of a source text.
///
/// `\n`, `\r\n` and a lone `\r` each terminate a line.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    pub fn new(source: &[u8]) -> Self {
        let mut line_starts = vec![0];
        let mut i = 0;
        while i < source.len() {
            match source[i] {
                b'\n' => line_starts.push(i + 1),
                b'\r' => {
                    if source.get(i + 1) == Some(&b'\n') {
                        i += 1;
                    }
                    line_starts.push(i + 1);
                }
                _ => {}
            }
            i += 1;
        }
        Self {
            line_starts,
            len: source.len(),
        }
    }

    /// Number of lines, counting a trailing empty line after a final newline.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

impl PositionResolver for LineIndex {
    fn line_of(&self, offset: usize) -> usize {
        let offset = offset.min(self.len);
        self.line_starts.partition_point(|&start| start <= offset)
    }
}
