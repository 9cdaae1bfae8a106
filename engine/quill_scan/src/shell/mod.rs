//! Unix shell line scanner.
//!
//! One cross-line construct: a double-quoted string left open at EOL (shell
//! strings legitimately span lines, no continuation backslash needed).
//! Single quotes and backquotes stay within a line. Variables are
//! recognized in `$name`, `${name}` and the special one-character forms.

use std::sync::OnceLock;

use rustc_hash::FxHashSet;
use tracing::trace;

use quill_token::{TokenList, TokenListBuilder, TokenType};

use crate::config::ScanConfig;
use crate::cursor::Cursor;
use crate::hyperlink::push_with_hyperlink;
use crate::line_buffer::LineBuffer;
use crate::state;
use crate::TokenScanner;

#[cfg(test)]
mod tests;

const LANG: u8 = 0;

/// The only suspended construct: an open double-quoted string.
const SUB_DOUBLE_QUOTE: u8 = 1;

/// The shell line scanner.
pub struct ShellScanner {
    config: ScanConfig,
}

impl ShellScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }
}

impl TokenScanner for ShellScanner {
    fn scan_line<'s>(
        &mut self,
        line: &'s str,
        incoming_state: i32,
        line_start_document_offset: u32,
    ) -> TokenList<'s> {
        let buf = LineBuffer::new(line);
        let mut cur = buf.cursor();
        let mut out = TokenListBuilder::new(line, line_start_document_offset);

        let resume_double = match state::decode(incoming_state) {
            Some((LANG, SUB_DOUBLE_QUOTE)) => true,
            Some(_) => {
                trace!(incoming_state, "unrecognized incoming state, scanning from the default state");
                false
            }
            None => {
                if incoming_state < 0 {
                    trace!(incoming_state, "unrecognized incoming state, scanning from the default state");
                }
                false
            }
        };
        if resume_double && scan_double_body(&mut cur, &mut out, 0) {
            return out.finish(state::encode(LANG, SUB_DOUBLE_QUOTE));
        }

        while !cur.is_eol() {
            let start = cur.pos();
            match cur.current() {
                b' ' | b'\t' => {
                    cur.eat_whitespace();
                    out.push(start, cur.pos(), TokenType::Whitespace, LANG);
                }
                b'#' => {
                    cur.seek_eol();
                    push_with_hyperlink(&mut out, start, cur.pos(), TokenType::CommentEol, LANG);
                }
                b'"' => {
                    cur.advance();
                    if scan_double_body(&mut cur, &mut out, start) {
                        return out.finish(state::encode(LANG, SUB_DOUBLE_QUOTE));
                    }
                }
                b'\'' => {
                    cur.advance();
                    match cur.find_byte(b'\'') {
                        Some(rel) => {
                            cur.advance_n(rel + 1);
                            out.push(start, cur.pos(), TokenType::LiteralChar, LANG);
                        }
                        None => {
                            cur.seek_eol();
                            out.push(start, cur.pos(), TokenType::ErrorChar, LANG);
                        }
                    }
                }
                b'`' => {
                    cur.advance();
                    // Unterminated command substitution just runs to EOL.
                    if let Some(rel) = cur.find_byte(b'`') {
                        cur.advance_n(rel + 1);
                    } else {
                        cur.seek_eol();
                    }
                    out.push(start, cur.pos(), TokenType::LiteralBackquote, LANG);
                }
                b'$' => scan_variable(&mut cur, &mut out, start),
                b'\\' => {
                    // Escaped character outside any quotes.
                    cur.advance();
                    if !cur.is_eol() {
                        cur.advance_char();
                    }
                    out.push(start, cur.pos(), TokenType::Identifier, LANG);
                }
                b'(' | b')' | b'[' | b']' | b'{' | b'}' | b';' => {
                    cur.advance();
                    out.push(start, cur.pos(), TokenType::Separator, LANG);
                }
                b'|' | b'&' | b'<' | b'>' | b'=' | b'!' | b'*' | b'?' | b'~' => {
                    cur.advance();
                    out.push(start, cur.pos(), TokenType::Operator, LANG);
                }
                b if is_word_byte(b) => {
                    cur.eat_while(is_word_byte);
                    let text = out
                        .line()
                        .get(start as usize..cur.pos() as usize)
                        .unwrap_or("");
                    out.push(start, cur.pos(), classify_word(text), LANG);
                }
                _ => {
                    cur.advance_char();
                    out.push(start, cur.pos(), TokenType::Identifier, LANG);
                }
            }
        }
        out.finish(0)
    }

    fn closest_standard_type(&self, internal_code: i32) -> TokenType {
        match state::decode(internal_code) {
            Some((LANG, SUB_DOUBLE_QUOTE)) => TokenType::LiteralStringDouble,
            _ => TokenType::from_code(internal_code).unwrap_or(TokenType::Null),
        }
    }

    fn line_comment_markers(
        &self,
        _language_index: u8,
    ) -> (Option<&'static str>, Option<&'static str>) {
        (Some("#"), None)
    }

    fn is_identifier_char(&self, _language_index: u8, ch: char) -> bool {
        ch.is_alphanumeric() || ch == '_' || ch == '-'
    }

    fn config(&self) -> &ScanConfig {
        &self.config
    }

    fn set_config(&mut self, config: ScanConfig) {
        self.config = config;
    }
}

/// Word bytes; `/` and `.` keep paths like `./bin/run` as one token.
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.' | b'/' | b'+' | b'%') || b >= 0x80
}

fn classify_word(text: &str) -> TokenType {
    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        return TokenType::LiteralNumberDecimalInt;
    }
    if keywords().contains(text) {
        return TokenType::ReservedWord;
    }
    if builtins().contains(text) {
        return TokenType::Function;
    }
    TokenType::Identifier
}

/// `$name`, `${name}`, or a special single-character parameter. A `$` that
/// starts none of these is plain text.
fn scan_variable(cur: &mut Cursor<'_>, out: &mut TokenListBuilder<'_>, start: u32) {
    cur.advance();
    match cur.current() {
        b'{' => {
            cur.advance();
            match cur.find_byte(b'}') {
                Some(rel) => {
                    cur.advance_n(rel + 1);
                    out.push(start, cur.pos(), TokenType::Variable, LANG);
                }
                None => {
                    cur.seek_eol();
                    out.push(start, cur.pos(), TokenType::ErrorIdentifier, LANG);
                }
            }
        }
        b'?' | b'#' | b'$' | b'@' | b'*' | b'!' | b'-' | b'0'..=b'9' => {
            cur.advance();
            out.push(start, cur.pos(), TokenType::Variable, LANG);
        }
        b if b.is_ascii_alphabetic() || b == b'_' => {
            cur.eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
            out.push(start, cur.pos(), TokenType::Variable, LANG);
        }
        _ => out.push(start, cur.pos(), TokenType::Identifier, LANG),
    }
}

/// Double-quoted string body; the opening quote (if on this line) is
/// consumed. Returns `true` when still open at EOL.
fn scan_double_body(cur: &mut Cursor<'_>, out: &mut TokenListBuilder<'_>, start: u32) -> bool {
    loop {
        match cur.find_byte2(b'"', b'\\') {
            None => {
                cur.seek_eol();
                push_with_hyperlink(out, start, cur.pos(), TokenType::LiteralStringDouble, LANG);
                return true;
            }
            Some(rel) => {
                cur.advance_n(rel);
                if cur.current() == b'"' {
                    cur.advance();
                    push_with_hyperlink(
                        out,
                        start,
                        cur.pos(),
                        TokenType::LiteralStringDouble,
                        LANG,
                    );
                    return false;
                }
                // Backslash escapes the next character, `\"` included.
                cur.advance();
                if cur.is_eol() {
                    push_with_hyperlink(
                        out,
                        start,
                        cur.pos(),
                        TokenType::LiteralStringDouble,
                        LANG,
                    );
                    return true;
                }
                cur.advance_char();
            }
        }
    }
}

/// Flow-control words.
fn keywords() -> &'static FxHashSet<&'static str> {
    static KEYWORDS: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    KEYWORDS.get_or_init(|| {
        [
            "case", "do", "done", "elif", "else", "esac", "fi", "for", "function", "if", "in",
            "select", "then", "time", "until", "while",
        ]
        .into_iter()
        .collect()
    })
}

/// Common builtins, painted with the function class.
fn builtins() -> &'static FxHashSet<&'static str> {
    static BUILTINS: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    BUILTINS.get_or_init(|| {
        [
            "alias", "bg", "cd", "echo", "eval", "exec", "exit", "export", "fg", "jobs", "kill",
            "local", "printf", "pwd", "read", "return", "set", "shift", "source", "test", "trap",
            "type", "ulimit", "umask", "unalias", "unset", "wait",
        ]
        .into_iter()
        .collect()
    })
}
