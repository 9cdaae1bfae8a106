//! Sentinel-terminated line buffer for zero-bounds-check scanning.
//!
//! A scan operates on one line at a time. The buffer copies the line's bytes
//! and appends a `0x00` sentinel plus zero padding, so the scanner's
//! multi-byte lookahead (`peek_at`) never needs bounds checks: every read
//! past the content lands in padding and reads `0x00`.
//!
//! Lines arrive as `&str` from the editor's document model, so no encoding
//! detection happens here — interior nulls cannot occur in Rust strings'
//! problematic forms, and a `0x00` *content* byte is distinguished from the
//! sentinel by position.

use crate::cursor::Cursor;

/// Padding after the sentinel, sized for the longest fixed lookahead the
/// scanners use (`<![CDATA[` is 9 bytes).
const PAD: usize = 16;

/// One line of source text with sentinel termination.
#[derive(Clone, Debug)]
pub(crate) struct LineBuffer {
    /// `[line_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the line content (excludes sentinel and padding).
    len: u32,
}

impl LineBuffer {
    /// Copy `line` into a sentinel-terminated buffer.
    ///
    /// Lines longer than `u32::MAX` bytes are truncated at `u32::MAX` — a
    /// latency pathology, not a case the editor produces.
    pub(crate) fn new(line: &str) -> Self {
        let bytes = line.as_bytes();
        let mut buf = vec![0u8; bytes.len() + PAD];
        buf[..bytes.len()].copy_from_slice(bytes);
        let len = u32::try_from(bytes.len()).unwrap_or(u32::MAX);
        Self { buf, len }
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub(crate) fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.len)
    }

    /// Content length in bytes (excludes sentinel and padding).
    #[cfg(test)]
    pub(crate) fn len(&self) -> u32 {
        self.len
    }
}
