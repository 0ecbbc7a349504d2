//! Sentinel-terminated source buffer.
//!
//! The buffer appends a single `0x00` sentinel byte after the source
//! content, so the scanner can detect end-of-input with one comparison
//! instead of bounds-checking every read (see `Cursor::is_eof`).

use crate::Cursor;

/// An immutably-borrowed, sentinel-terminated view of C source text.
///
/// Unlike the reference tokenizer this crate replaces, `SourceBuffer` is
/// never written to by the scanner: string-literal escape resolution
/// writes into its own scratch buffer instead (see `cc_lexer::cooker`),
/// so the same `SourceBuffer` can be tokenized, re-tokenized, or shared
/// across callers.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// `source` bytes followed by exactly one `0x00` sentinel byte.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes the sentinel).
    source_len: u32,
}

impl SourceBuffer {
    /// Build a buffer from source text.
    ///
    /// Source longer than `u32::MAX` bytes is accepted but truncated to
    /// that length for the purposes of `len()`/`as_bytes()` — a tokenizer
    /// working on files that large has bigger problems than this crate.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let bytes = source.as_bytes();
        let source_len = u32::try_from(bytes.len()).unwrap_or(u32::MAX);
        let mut buf = Vec::with_capacity(bytes.len() + 1);
        buf.extend_from_slice(&bytes[..source_len as usize]);
        buf.push(0);
        Self { buf, source_len }
    }

    /// The source content, excluding the sentinel byte.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Number of bytes of source content.
    #[must_use]
    pub const fn len(&self) -> u32 {
        self.source_len
    }

    /// True if the source content is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// A cursor positioned at byte 0.
    #[must_use]
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer() {
        let buf = SourceBuffer::new("");
        assert!(buf.is_empty());
        assert_eq!(buf.len(), 0);
        assert!(buf.cursor().is_eof());
    }

    #[test]
    fn preserves_content() {
        let buf = SourceBuffer::new("int x;");
        assert_eq!(buf.as_bytes(), b"int x;");
        assert_eq!(buf.len(), 6);
    }

    #[test]
    fn cursor_sees_sentinel_past_content() {
        let buf = SourceBuffer::new("x");
        let mut c = buf.cursor();
        assert_eq!(c.bump(), b'x');
        assert!(c.is_eof());
        assert_eq!(c.peek(), 0);
    }
}
