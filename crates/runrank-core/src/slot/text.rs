use crate::TEXT_CAPACITY;
use std::fmt;

///
/// TextBuffer
///
/// Owned fixed-capacity copy of the last text seen in one column.
/// Storage and comparison both stop at `TEXT_CAPACITY` bytes.
///

#[derive(Clone, Eq, PartialEq)]
pub struct TextBuffer([u8; TEXT_CAPACITY]);

impl TextBuffer {
    /// Build one zero-filled buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self([0; TEXT_CAPACITY])
    }

    /// Compare `bytes` against the stored prefix of the same length.
    ///
    /// Only `min(bytes.len(), TEXT_CAPACITY)` bytes take part, so an input
    /// shorter than the stored text matches when it is a prefix of it.
    #[must_use]
    pub fn matches(&self, bytes: &[u8]) -> bool {
        let len = bytes.len().min(TEXT_CAPACITY);

        self.0[..len] == bytes[..len]
    }

    /// Zero the buffer, then copy in at most `TEXT_CAPACITY` bytes.
    pub fn overwrite(&mut self, bytes: &[u8]) {
        let len = bytes.len().min(TEXT_CAPACITY);

        self.0.fill(0);
        self.0[..len].copy_from_slice(&bytes[..len]);
    }

    /// Stored text up to the first NUL byte.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        let end = self
            .0
            .iter()
            .position(|byte| *byte == 0)
            .unwrap_or(TEXT_CAPACITY);

        &self.0[..end]
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextBuffer")
            .field(&String::from_utf8_lossy(self.as_bytes()))
            .finish()
    }
}
