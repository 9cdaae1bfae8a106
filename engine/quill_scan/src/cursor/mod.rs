//! Zero-cost cursor over a sentinel-terminated line buffer.
//!
//! The cursor advances through the line byte-by-byte. EOL is detected when
//! the current byte equals the sentinel (`0x00`) and the position has
//! reached the line length; a `0x00` *content* byte at an earlier position
//! is ordinary input. No bounds checks in the common case — the sentinel
//! and padding guarantee safe reads for every fixed lookahead the scanners
//! perform.

/// Returns the earliest (minimum) of two optional positions.
///
/// Combines results from separate `memchr` calls when a scan needs more
/// needles than `memchr3` supports.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Zero-cost cursor over a sentinel-terminated byte buffer.
///
/// Created via `LineBuffer::cursor()`. The cursor is [`Copy`], enabling
/// cheap snapshots for backtracking (e.g. the regex-literal probe).
///
/// # Invariant
///
/// `buf[len] == 0x00` and all bytes after `len` are `0x00` padding, as
/// guaranteed by `LineBuffer` construction.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    buf: &'a [u8],
    pos: u32,
    len: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], len: u32) -> Self {
        debug_assert!((len as usize) < buf.len(), "sentinel must be in bounds");
        debug_assert!(buf[len as usize] == 0, "sentinel byte must be 0x00");
        Self { buf, pos: 0, len }
    }

    /// Byte at the current position (`0x00` at EOL).
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Byte one position ahead.
    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Byte two positions ahead.
    #[inline]
    pub(crate) fn peek2(&self) -> u8 {
        self.buf[self.pos as usize + 2]
    }

    /// Byte `n` positions ahead. Safe for `n` up to the padding size.
    #[inline]
    pub(crate) fn peek_at(&self, n: u32) -> u8 {
        self.buf
            .get(self.pos as usize + n as usize)
            .copied()
            .unwrap_or(0)
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub(crate) fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Advance past one full UTF-8 character.
    #[inline]
    pub(crate) fn advance_char(&mut self) {
        let width = match self.current() {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        };
        self.pos += width;
    }

    /// `true` once the cursor has consumed the whole line.
    #[inline]
    pub(crate) fn is_eol(&self) -> bool {
        self.pos >= self.len
    }

    /// Current byte offset in the line.
    #[inline]
    pub(crate) fn pos(&self) -> u32 {
        self.pos
    }

    /// Line content length in bytes.
    #[inline]
    pub(crate) fn len(&self) -> u32 {
        self.len
    }

    /// Jump to the end of the line.
    #[inline]
    pub(crate) fn seek_eol(&mut self) {
        self.pos = self.len;
    }

    /// A copy of this cursor whose line "ends" at byte `end`.
    ///
    /// Used by composite scanners to bound an embedded region at its close
    /// tag: `is_eol`, `remaining`, and all the `find_*` searches respect the
    /// limit. `current`/`peek` can still read the real bytes at and after
    /// the limit, so region scanning relies on the limit byte being `<` —
    /// no scanner predicate eats it and the per-token dispatch checks
    /// `is_eol` first.
    pub(crate) fn with_limit(&self, end: u32) -> Cursor<'a> {
        Cursor {
            buf: self.buf,
            pos: self.pos,
            len: end.min(self.len),
        }
    }

    /// Unconsumed content bytes (excludes sentinel and padding).
    #[inline]
    pub(crate) fn remaining(&self) -> &'a [u8] {
        &self.buf[self.pos as usize..self.len as usize]
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// `pred(0)` must return `false` so the sentinel terminates the loop;
    /// this is true for all classification predicates the scanners use.
    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Advance past horizontal whitespace (spaces and tabs).
    #[inline]
    pub(crate) fn eat_whitespace(&mut self) {
        loop {
            let b = self.buf[self.pos as usize];
            if b == b' ' || b == b'\t' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// `true` when the unconsumed input starts with `needle`.
    pub(crate) fn starts_with(&self, needle: &[u8]) -> bool {
        self.remaining().starts_with(needle)
    }

    /// Case-insensitive [`starts_with`](Self::starts_with) (ASCII only).
    pub(crate) fn starts_with_ignore_ascii_case(&self, needle: &[u8]) -> bool {
        let rem = self.remaining();
        rem.len() >= needle.len() && rem[..needle.len()].eq_ignore_ascii_case(needle)
    }

    /// Offset (relative to the current position) of the next `byte`, using
    /// SIMD-accelerated search over the remaining content.
    pub(crate) fn find_byte(&self, byte: u8) -> Option<u32> {
        memchr::memchr(byte, self.remaining()).and_then(|i| u32::try_from(i).ok())
    }

    /// Relative offset of the earliest of two bytes.
    pub(crate) fn find_byte2(&self, a: u8, b: u8) -> Option<u32> {
        memchr::memchr2(a, b, self.remaining()).and_then(|i| u32::try_from(i).ok())
    }

    /// Relative offset of the earliest of three bytes.
    pub(crate) fn find_byte3(&self, a: u8, b: u8, c: u8) -> Option<u32> {
        memchr::memchr3(a, b, c, self.remaining()).and_then(|i| u32::try_from(i).ok())
    }

    /// Relative offset of the next occurrence of `needle` (case-sensitive),
    /// using `memchr::memmem`.
    pub(crate) fn find_sub(&self, needle: &[u8]) -> Option<u32> {
        memchr::memmem::find(self.remaining(), needle).and_then(|i| u32::try_from(i).ok())
    }

    /// Relative offset of the next occurrence of `needle`, ASCII
    /// case-insensitive. The needle must start with a cased ASCII letter or
    /// a caseless byte.
    pub(crate) fn find_sub_ignore_ascii_case(&self, needle: &[u8]) -> Option<u32> {
        let Some(&first) = needle.first() else {
            return Some(0);
        };
        let rem = self.remaining();
        let (lo, hi) = (first.to_ascii_lowercase(), first.to_ascii_uppercase());
        let mut searched = 0usize;
        loop {
            let hit = if lo == hi {
                memchr::memchr(lo, &rem[searched..])
            } else {
                earliest_of(
                    memchr::memchr(lo, &rem[searched..]),
                    memchr::memchr(hi, &rem[searched..]),
                )
            };
            let at = searched + hit?;
            if rem.len() - at >= needle.len() && rem[at..at + needle.len()].eq_ignore_ascii_case(needle)
            {
                return u32::try_from(at).ok();
            }
            searched = at + 1;
        }
    }
}
