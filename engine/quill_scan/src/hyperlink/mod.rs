//! URL extraction inside comment and string tokens.
//!
//! A secondary pass applied after a comment/string span is recognized: the
//! first URL-shaped substring (a `proto://` scheme or a bare `www.`) is
//! split out as a separate token of the *same* type with the hyperlink flag
//! set, so the editor can offer click-to-open without changing the span's
//! semantics.
//!
//! Only the first URL per enclosing span is extracted. This is a pinned
//! limitation of the original engine, kept for compatibility (token
//! boundaries at line ends can look slightly off when a span holds several
//! URLs); the test suite asserts it rather than fixing it.

use quill_token::{TokenListBuilder, TokenType};

/// Emit `start..end` of the builder's line as `ty`, splitting out the first
/// URL-shaped substring (if any) as a hyperlink sub-token.
pub(crate) fn push_with_hyperlink(
    out: &mut TokenListBuilder<'_>,
    start: u32,
    end: u32,
    ty: TokenType,
    language_index: u8,
) {
    let text = out
        .line()
        .get(start as usize..end as usize)
        .unwrap_or("");
    match find_url(text) {
        Some((url_start, url_end)) => {
            let a = start + url_start;
            let b = start + url_end;
            out.push(start, a, ty, language_index);
            out.push_hyperlink(a, b, ty, language_index);
            out.push(b, end, ty, language_index);
        }
        None => out.push(start, end, ty, language_index),
    }
}

/// Find the first URL-shaped substring of `text`.
///
/// Returns byte offsets relative to `text`. Recognizes `scheme://…` (scheme
/// of two or more ASCII alphanumeric/`+`/`-`/`.` characters starting with a
/// letter) and bare `www.…`. The URL extends over URL-class characters and
/// is trimmed of trailing punctuation that usually belongs to the prose,
/// not the link.
#[allow(
    clippy::cast_possible_truncation,
    reason = "offsets are within one line, already bounded by u32"
)]
pub(crate) fn find_url(text: &str) -> Option<(u32, u32)> {
    let bytes = text.as_bytes();

    let scheme_hit = memchr::memmem::find(bytes, b"://").and_then(|sep| {
        let mut s = sep;
        while s > 0 && is_scheme_byte(bytes[s - 1]) {
            s -= 1;
        }
        let scheme_len = sep - s;
        (scheme_len >= 2 && bytes[s].is_ascii_alphabetic() && has_word_boundary(bytes, s))
            .then_some((s, sep + 3))
    });

    let www_hit = find_www(bytes);

    // Earliest hit wins; a `www.` inside an already-found scheme URL is the
    // same URL, which the ordering handles naturally.
    let (start, body) = match (scheme_hit, www_hit) {
        (Some(a), Some(b)) => {
            if a.0 <= b.0 {
                a
            } else {
                b
            }
        }
        (Some(a), None) => a,
        (None, Some(b)) => b,
        (None, None) => return None,
    };

    let mut end = body;
    while end < bytes.len() && is_url_byte(bytes[end]) {
        end += 1;
    }
    // Require at least one character of host/path after the marker.
    if end == body {
        return None;
    }
    // Trailing sentence punctuation belongs to the prose.
    while end > body && matches!(bytes[end - 1], b'.' | b',' | b';' | b':' | b')' | b'\'') {
        end -= 1;
    }
    if end == body {
        return None;
    }
    Some((start as u32, end as u32))
}

/// Find a `www.` occurrence that starts a word.
fn find_www(bytes: &[u8]) -> Option<(usize, usize)> {
    let mut from = 0;
    while let Some(i) = memchr::memmem::find(&bytes[from..], b"www.") {
        let at = from + i;
        if has_word_boundary(bytes, at) {
            return Some((at, at + 4));
        }
        from = at + 4;
    }
    None
}

/// `true` when `pos` is the start of the text or preceded by a byte that
/// cannot be part of a URL (so the match is not a suffix of a larger word).
fn has_word_boundary(bytes: &[u8], pos: usize) -> bool {
    pos == 0 || !is_url_byte(bytes[pos - 1])
}

fn is_scheme_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')
}

/// Characters that may appear in the body of a URL.
fn is_url_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'-' | b'.'
                | b'_'
                | b'~'
                | b':'
                | b'/'
                | b'?'
                | b'#'
                | b'['
                | b']'
                | b'@'
                | b'!'
                | b'$'
                | b'&'
                | b'\''
                | b'('
                | b')'
                | b'*'
                | b'+'
                | b','
                | b';'
                | b'='
                | b'%'
        )
}

#[cfg(test)]
mod tests;
