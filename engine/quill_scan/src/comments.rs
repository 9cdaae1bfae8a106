//! C-style `/* */` and `/** */` comment scanning, shared by the curly-brace
//! scanners.
//!
//! Doc comments are split into sub-tokens: block tags (`@param`) and inline
//! tags (`{@link …}`) as `CommentKeyword`, inline markup (`<code>`) as
//! `CommentMarkup`, everything else as `CommentDocumentation` run through
//! the hyperlink pass.

use quill_token::{TokenListBuilder, TokenType};

use crate::cursor::Cursor;
use crate::hyperlink::push_with_hyperlink;

/// Body of a `/* */` comment; the opener (if on this line) is consumed.
/// Returns `true` when the comment runs off the end of the line.
pub(crate) fn scan_block_comment(
    cur: &mut Cursor<'_>,
    out: &mut TokenListBuilder<'_>,
    start: u32,
    lang: u8,
) -> bool {
    match cur.find_sub(b"*/") {
        Some(rel) => {
            cur.advance_n(rel + 2);
            push_with_hyperlink(out, start, cur.pos(), TokenType::CommentMultiline, lang);
            false
        }
        None => {
            cur.seek_eol();
            push_with_hyperlink(out, start, cur.pos(), TokenType::CommentMultiline, lang);
            true
        }
    }
}

/// Body of a `/** */` doc comment; the opener (if on this line) is consumed.
/// Returns `true` when the comment runs off the end of the line.
pub(crate) fn scan_doc_comment(
    cur: &mut Cursor<'_>,
    out: &mut TokenListBuilder<'_>,
    start: u32,
    lang: u8,
) -> bool {
    let (end, suspended) = match cur.find_sub(b"*/") {
        Some(rel) => (cur.pos() + rel + 2, false),
        None => (cur.len(), true),
    };
    emit_doc_comment(cur, out, start, end, lang);
    suspended
}

/// Emit the doc-comment region `start..end`, cutting out tag and markup
/// sub-tokens. Leaves the cursor at `end`.
fn emit_doc_comment(
    cur: &mut Cursor<'_>,
    out: &mut TokenListBuilder<'_>,
    start: u32,
    end: u32,
    lang: u8,
) {
    let bytes = out.line().as_bytes();
    let mut seg_start = start;
    while cur.pos() < end {
        let at = cur.pos();
        match cur.current() {
            b'@' if cur.peek().is_ascii_alphabetic()
                && (at == 0 || !is_word_byte(bytes[at as usize - 1])) =>
            {
                push_with_hyperlink(out, seg_start, at, TokenType::CommentDocumentation, lang);
                cur.advance();
                cur.eat_while(|b| b.is_ascii_alphanumeric());
                out.push(at, cur.pos(), TokenType::CommentKeyword, lang);
                seg_start = cur.pos();
            }
            b'{' if cur.peek() == b'@' => {
                push_with_hyperlink(out, seg_start, at, TokenType::CommentDocumentation, lang);
                while cur.pos() < end && cur.current() != b'}' {
                    cur.advance_char();
                }
                if cur.pos() < end {
                    cur.advance();
                }
                out.push(at, cur.pos(), TokenType::CommentKeyword, lang);
                seg_start = cur.pos();
            }
            b'<' if cur.peek().is_ascii_alphabetic()
                || (cur.peek() == b'/' && cur.peek2().is_ascii_alphabetic()) =>
            {
                push_with_hyperlink(out, seg_start, at, TokenType::CommentDocumentation, lang);
                while cur.pos() < end && cur.current() != b'>' {
                    cur.advance_char();
                }
                if cur.pos() < end {
                    cur.advance();
                }
                out.push(at, cur.pos(), TokenType::CommentMarkup, lang);
                seg_start = cur.pos();
            }
            _ => cur.advance_char(),
        }
    }
    push_with_hyperlink(out, seg_start, end, TokenType::CommentDocumentation, lang);
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b >= 0x80
}
