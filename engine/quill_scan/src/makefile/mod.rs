//! Makefile line scanner. Stateless across lines: every construct closes at
//! EOL, so the outgoing state is always the default.
//!
//! A leading tab marks a recipe line; the tab itself is whitespace and the
//! rest of the line scans with the same rules (variable references are what
//! matter inside recipes).

use std::sync::OnceLock;

use rustc_hash::FxHashSet;
use tracing::trace;

use quill_token::{TokenList, TokenListBuilder, TokenType};

use crate::config::ScanConfig;
use crate::cursor::Cursor;
use crate::hyperlink::push_with_hyperlink;
use crate::line_buffer::LineBuffer;
use crate::TokenScanner;


const LANG: u8 = 0;

/// The makefile line scanner.
pub struct MakefileScanner {
    config: ScanConfig,
}

impl MakefileScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }
}

impl TokenScanner for MakefileScanner {
    fn scan_line<'s>(
        &mut self,
        line: &'s str,
        incoming_state: i32,
        line_start_document_offset: u32,
    ) -> TokenList<'s> {
        let buf = LineBuffer::new(line);
        let mut cur = buf.cursor();
        let mut out = TokenListBuilder::new(line, line_start_document_offset);

        if incoming_state < 0 {
            trace!(incoming_state, "unrecognized incoming state, scanning from the default state");
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
                b'$' => scan_variable(&mut cur, &mut out, start),
                b'"' | b'\'' => {
                    let quote = cur.current();
                    cur.advance();
                    match cur.find_byte(quote) {
                        Some(rel) => {
                            cur.advance_n(rel + 1);
                            out.push(start, cur.pos(), TokenType::LiteralStringDouble, LANG);
                        }
                        None => {
                            cur.seek_eol();
                            out.push(start, cur.pos(), TokenType::ErrorStringDouble, LANG);
                        }
                    }
                }
                b':' | b'=' | b'?' | b'+' | b'!' | b'@' | b'|' | b'<' | b'>' | b'*' | b'\\' => {
                    // `:=`, `?=`, `+=`, `!=` assignment forms as one token.
                    if matches!(cur.current(), b':' | b'?' | b'+' | b'!') && cur.peek() == b'=' {
                        cur.advance_n(2);
                    } else {
                        cur.advance();
                    }
                    out.push(start, cur.pos(), TokenType::Operator, LANG);
                }
                b'(' | b')' | b'{' | b'}' | b';' | b',' => {
                    cur.advance();
                    out.push(start, cur.pos(), TokenType::Separator, LANG);
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
        TokenType::from_code(internal_code).unwrap_or(TokenType::Null)
    }

    fn line_comment_markers(
        &self,
        _language_index: u8,
    ) -> (Option<&'static str>, Option<&'static str>) {
        (Some("#"), None)
    }

    fn is_identifier_char(&self, _language_index: u8, ch: char) -> bool {
        ch.is_alphanumeric() || ch == '_' || ch == '-' || ch == '.'
    }

    fn config(&self) -> &ScanConfig {
        &self.config
    }

    fn set_config(&mut self, config: ScanConfig) {
        self.config = config;
    }
}

/// Word bytes; `%` keeps pattern-rule stems (`%.o`) in one token.
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.' | b'/' | b'%') || b >= 0x80
}

fn classify_word(text: &str) -> TokenType {
    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        return TokenType::LiteralNumberDecimalInt;
    }
    if directives().contains(text) {
        return TokenType::ReservedWord;
    }
    TokenType::Identifier
}

/// `$(NAME)`, `${NAME}`, or a single-character automatic variable like `$@`.
fn scan_variable(cur: &mut Cursor<'_>, out: &mut TokenListBuilder<'_>, start: u32) {
    cur.advance();
    let close = match cur.current() {
        b'(' => b')',
        b'{' => b'}',
        _ => {
            if cur.is_eol() {
                out.push(start, cur.pos(), TokenType::Identifier, LANG);
            } else {
                // Automatic variables: `$@`, `$<`, `$^`, `$?`, `$*`, `$$`.
                cur.advance_char();
                out.push(start, cur.pos(), TokenType::Variable, LANG);
            }
            return;
        }
    };
    cur.advance();
    match cur.find_byte(close) {
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

fn directives() -> &'static FxHashSet<&'static str> {
    static DIRECTIVES: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    DIRECTIVES.get_or_init(|| {
        [
            "define", "else", "endef", "endif", "export", "ifdef", "ifeq", "ifndef", "ifneq",
            "include", "override", "unexport", "vpath",
        ]
        .into_iter()
        .collect()
    })
}
