//! Scanner for C-family curly-brace languages.
//!
//! One engine parameterized by [`CDialect`]: the dialects share the whole
//! lexical shape (block/doc comments, double-quoted strings with escape
//! validation, char literals, the numeric sub-automaton, operator munching)
//! and differ in keyword tables plus a few dialect-only constructs —
//! preprocessor lines in C, `@Annotation` in Java.
//!
//! Multi-line constructs suspend into a [`Substate`] that crosses the line
//! boundary as a negative integer code; see [`crate::state`].

use quill_token::{TokenList, TokenListBuilder, TokenType};
use tracing::trace;

use crate::comments;
use crate::config::ScanConfig;
use crate::cursor::Cursor;
use crate::escape::{scan_escape, EscapeOutcome};
use crate::hyperlink::push_with_hyperlink;
use crate::line_buffer::LineBuffer;
use crate::state;
use crate::TokenScanner;

mod keywords;

#[cfg(test)]
mod tests;

/// Host language index; the C family embeds no sub-grammars.
const LANG: u8 = 0;

/// Which keyword/type tables and dialect-only constructs are active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CDialect {
    C,
    Java,
}

/// Suspended multi-line constructs of the C family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Substate {
    BlockComment,
    DocComment,
    /// Backslash-continued string; all escapes so far were valid.
    StringValid,
    /// Backslash-continued string containing an invalid escape.
    StringInvalid,
    CharValid,
    CharInvalid,
}

impl Substate {
    fn encode(self) -> i32 {
        let sub = match self {
            Substate::BlockComment => 1,
            Substate::DocComment => 2,
            Substate::StringValid => 3,
            Substate::StringInvalid => 4,
            Substate::CharValid => 5,
            Substate::CharInvalid => 6,
        };
        state::encode(LANG, sub)
    }

    fn decode(code: i32) -> Option<Self> {
        match state::decode(code)? {
            (LANG, 1) => Some(Substate::BlockComment),
            (LANG, 2) => Some(Substate::DocComment),
            (LANG, 3) => Some(Substate::StringValid),
            (LANG, 4) => Some(Substate::StringInvalid),
            (LANG, 5) => Some(Substate::CharValid),
            (LANG, 6) => Some(Substate::CharInvalid),
            _ => None,
        }
    }
}

/// The C-family line scanner.
pub struct CFamilyScanner {
    dialect: CDialect,
    config: ScanConfig,
}

impl CFamilyScanner {
    pub fn new(dialect: CDialect, config: ScanConfig) -> Self {
        Self { dialect, config }
    }

    pub fn dialect(&self) -> CDialect {
        self.dialect
    }

    /// Scan from the default state until EOL or a construct suspends.
    fn scan_default(&self, cur: &mut Cursor<'_>, out: &mut TokenListBuilder<'_>) -> i32 {
        while !cur.is_eol() {
            let start = cur.pos();
            match cur.current() {
                b' ' | b'\t' => {
                    cur.eat_whitespace();
                    out.push(start, cur.pos(), TokenType::Whitespace, LANG);
                }
                b'/' if cur.peek() == b'/' => {
                    cur.seek_eol();
                    push_with_hyperlink(out, start, cur.pos(), TokenType::CommentEol, LANG);
                }
                b'/' if cur.peek() == b'*' => {
                    let doc = cur.peek2() == b'*' && cur.peek_at(3) != b'/';
                    let suspended = if doc {
                        cur.advance_n(3);
                        comments::scan_doc_comment(cur, out, start, LANG)
                            .then_some(Substate::DocComment)
                    } else {
                        cur.advance_n(2);
                        comments::scan_block_comment(cur, out, start, LANG)
                            .then_some(Substate::BlockComment)
                    };
                    if let Some(sub) = suspended {
                        return sub.encode();
                    }
                }
                b'"' => {
                    cur.advance();
                    if let Some(sub) = scan_string_body(cur, out, start, true) {
                        return sub.encode();
                    }
                }
                b'\'' => {
                    cur.advance();
                    if let Some(sub) = scan_char_body(cur, out, start, true) {
                        return sub.encode();
                    }
                }
                b'0'..=b'9' => scan_number(cur, out, start),
                b'.' if cur.peek().is_ascii_digit() => scan_number(cur, out, start),
                b'#' if self.dialect == CDialect::C && out.last_significant().is_none() => {
                    cur.seek_eol();
                    out.push(start, cur.pos(), TokenType::Preprocessor, LANG);
                }
                b'@' if self.dialect == CDialect::Java && is_identifier_start(cur.peek()) => {
                    cur.advance();
                    cur.eat_while(is_identifier_byte);
                    out.push(start, cur.pos(), TokenType::Annotation, LANG);
                }
                b'(' | b')' | b'[' | b']' | b'{' | b'}' | b';' | b',' | b'.' => {
                    cur.advance();
                    out.push(start, cur.pos(), TokenType::Separator, LANG);
                }
                b'+' | b'-' | b'*' | b'/' | b'%' | b'=' | b'<' | b'>' | b'!' | b'&' | b'|'
                | b'^' | b'~' | b'?' | b':' => {
                    scan_operator(cur, out, start);
                }
                b if is_identifier_start(b) => {
                    cur.eat_while(is_identifier_byte);
                    let text = out.line().get(start as usize..cur.pos() as usize).unwrap_or("");
                    let ty = keywords::lookup(self.dialect, text).unwrap_or(TokenType::Identifier);
                    out.push(start, cur.pos(), ty, LANG);
                }
                _ => {
                    // Stray byte with no rule (`\`, `#` in Java, a lone backtick).
                    cur.advance_char();
                    out.push(start, cur.pos(), TokenType::ErrorIdentifier, LANG);
                }
            }
        }
        0
    }
}

impl TokenScanner for CFamilyScanner {
    fn scan_line<'s>(
        &mut self,
        line: &'s str,
        incoming_state: i32,
        line_start_document_offset: u32,
    ) -> TokenList<'s> {
        let buf = LineBuffer::new(line);
        let mut cur = buf.cursor();
        let mut out = TokenListBuilder::new(line, line_start_document_offset);

        let resume = Substate::decode(incoming_state);
        if incoming_state < 0 && resume.is_none() {
            trace!(incoming_state, "unrecognized incoming state, scanning from the default state");
        }
        if let Some(sub) = resume {
            let suspended = match sub {
                Substate::BlockComment => comments::scan_block_comment(&mut cur, &mut out, 0, LANG)
                    .then_some(Substate::BlockComment),
                Substate::DocComment => comments::scan_doc_comment(&mut cur, &mut out, 0, LANG)
                    .then_some(Substate::DocComment),
                Substate::StringValid => scan_string_body(&mut cur, &mut out, 0, true),
                Substate::StringInvalid => scan_string_body(&mut cur, &mut out, 0, false),
                Substate::CharValid => scan_char_body(&mut cur, &mut out, 0, true),
                Substate::CharInvalid => scan_char_body(&mut cur, &mut out, 0, false),
            };
            if let Some(sub) = suspended {
                return out.finish(sub.encode());
            }
        }
        let end = self.scan_default(&mut cur, &mut out);
        out.finish(end)
    }

    fn closest_standard_type(&self, internal_code: i32) -> TokenType {
        match Substate::decode(internal_code) {
            Some(Substate::BlockComment) => TokenType::CommentMultiline,
            Some(Substate::DocComment) => TokenType::CommentDocumentation,
            Some(Substate::StringValid) => TokenType::LiteralStringDouble,
            Some(Substate::StringInvalid) => TokenType::ErrorStringDouble,
            Some(Substate::CharValid) => TokenType::LiteralChar,
            Some(Substate::CharInvalid) => TokenType::ErrorChar,
            None => TokenType::from_code(internal_code).unwrap_or(TokenType::Null),
        }
    }

    fn line_comment_markers(
        &self,
        _language_index: u8,
    ) -> (Option<&'static str>, Option<&'static str>) {
        (Some("//"), None)
    }

    fn curly_braces_denote_code_blocks(&self, _language_index: u8) -> bool {
        true
    }

    fn is_identifier_char(&self, _language_index: u8, ch: char) -> bool {
        ch.is_alphanumeric() || ch == '_' || ch == '$'
    }

    fn config(&self) -> &ScanConfig {
        &self.config
    }

    fn set_config(&mut self, config: ScanConfig) {
        self.config = config;
    }
}

fn is_identifier_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$' || b >= 0x80
}

fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b >= 0x80
}

/// Body of a double-quoted string; the opening quote is already consumed.
///
/// `valid` carries the escape-validity flag, including across lines when the
/// string is backslash-continued. An unterminated string *without* a
/// continuation backslash is an error token and the state resets — these
/// dialects do not let a bare string run off the end of a line.
fn scan_string_body(
    cur: &mut Cursor<'_>,
    out: &mut TokenListBuilder<'_>,
    start: u32,
    mut valid: bool,
) -> Option<Substate> {
    loop {
        match cur.find_byte2(b'"', b'\\') {
            None => {
                cur.seek_eol();
                out.push(start, cur.pos(), TokenType::ErrorStringDouble, LANG);
                return None;
            }
            Some(rel) => {
                cur.advance_n(rel);
                if cur.current() == b'"' {
                    cur.advance();
                    if valid {
                        push_with_hyperlink(
                            out,
                            start,
                            cur.pos(),
                            TokenType::LiteralStringDouble,
                            LANG,
                        );
                    } else {
                        out.push(start, cur.pos(), TokenType::ErrorStringDouble, LANG);
                    }
                    return None;
                }
                match scan_escape(cur) {
                    EscapeOutcome::Valid => {}
                    EscapeOutcome::Invalid => valid = false,
                    EscapeOutcome::LineContinuation => {
                        let (ty, sub) = if valid {
                            (TokenType::LiteralStringDouble, Substate::StringValid)
                        } else {
                            (TokenType::ErrorStringDouble, Substate::StringInvalid)
                        };
                        out.push(start, cur.pos(), ty, LANG);
                        return Some(sub);
                    }
                }
            }
        }
    }
}

/// Body of a single-quoted char literal; the opening quote is consumed.
fn scan_char_body(
    cur: &mut Cursor<'_>,
    out: &mut TokenListBuilder<'_>,
    start: u32,
    mut valid: bool,
) -> Option<Substate> {
    loop {
        match cur.find_byte2(b'\'', b'\\') {
            None => {
                cur.seek_eol();
                out.push(start, cur.pos(), TokenType::ErrorChar, LANG);
                return None;
            }
            Some(rel) => {
                cur.advance_n(rel);
                if cur.current() == b'\'' {
                    cur.advance();
                    let ty = if valid {
                        TokenType::LiteralChar
                    } else {
                        TokenType::ErrorChar
                    };
                    out.push(start, cur.pos(), ty, LANG);
                    return None;
                }
                match scan_escape(cur) {
                    EscapeOutcome::Valid => {}
                    EscapeOutcome::Invalid => valid = false,
                    EscapeOutcome::LineContinuation => {
                        let (ty, sub) = if valid {
                            (TokenType::LiteralChar, Substate::CharValid)
                        } else {
                            (TokenType::ErrorChar, Substate::CharInvalid)
                        };
                        out.push(start, cur.pos(), ty, LANG);
                        return Some(sub);
                    }
                }
            }
        }
    }
}

/// Numeric literal sub-automaton.
///
/// Recognizes, most specific first: hex (`0x`, optional `l`/`L`, `_`
/// separators), binary (`0b`), octal (leading `0`, painted with the
/// hexadecimal type — a compatibility quirk), decimal, and floats with
/// optional exponent and `f`/`F`/`d`/`D` suffix. Trailing identifier
/// characters reclassify the whole span as a number-format error instead of
/// silently splitting it.
fn scan_number(cur: &mut Cursor<'_>, out: &mut TokenListBuilder<'_>, start: u32) {
    let mut ty;
    if cur.current() == b'0' && matches!(cur.peek(), b'x' | b'X') {
        cur.advance_n(2);
        cur.eat_while(|b| b.is_ascii_hexdigit() || b == b'_');
        if matches!(cur.current(), b'l' | b'L') {
            cur.advance();
        }
        ty = TokenType::LiteralNumberHexadecimal;
    } else if cur.current() == b'0' && matches!(cur.peek(), b'b' | b'B') {
        cur.advance_n(2);
        cur.eat_while(|b| matches!(b, b'0' | b'1' | b'_'));
        if matches!(cur.current(), b'l' | b'L') {
            cur.advance();
        }
        // Binary shares the hexadecimal paint class.
        ty = TokenType::LiteralNumberHexadecimal;
    } else {
        let leading_zero = cur.current() == b'0';
        let mut digits = 0u32;
        let mut all_octal = true;
        while cur.current().is_ascii_digit() || cur.current() == b'_' {
            if matches!(cur.current(), b'8' | b'9') {
                all_octal = false;
            }
            cur.advance();
            digits += 1;
        }
        let mut float = false;
        if cur.current() == b'.' && cur.peek().is_ascii_digit() {
            float = true;
            cur.advance();
            cur.eat_while(|b| b.is_ascii_digit() || b == b'_');
        }
        if matches!(cur.current(), b'e' | b'E')
            && (cur.peek().is_ascii_digit()
                || (matches!(cur.peek(), b'+' | b'-') && cur.peek2().is_ascii_digit()))
        {
            float = true;
            cur.advance();
            if matches!(cur.current(), b'+' | b'-') {
                cur.advance();
            }
            cur.eat_while(|b| b.is_ascii_digit());
        }
        if matches!(cur.current(), b'f' | b'F' | b'd' | b'D') {
            float = true;
            cur.advance();
        } else if !float && matches!(cur.current(), b'l' | b'L') {
            cur.advance();
        }
        ty = if float {
            TokenType::LiteralNumberFloat
        } else if leading_zero && all_octal && digits > 1 {
            // Octal paints with the hexadecimal type.
            TokenType::LiteralNumberHexadecimal
        } else {
            TokenType::LiteralNumberDecimalInt
        };
    }
    if is_identifier_byte(cur.current()) {
        cur.eat_while(is_identifier_byte);
        ty = TokenType::ErrorNumberFormat;
    }
    out.push(start, cur.pos(), ty, LANG);
}

/// Longest-match operator munching.
fn scan_operator(cur: &mut Cursor<'_>, out: &mut TokenListBuilder<'_>, start: u32) {
    const MULTI: &[&[u8]] = &[
        b">>>=", b">>>", b"<<=", b">>=", b"->", b"==", b"!=", b"<=", b">=", b"&&", b"||",
        b"++", b"--", b"+=", b"-=", b"*=", b"/=", b"%=", b"&=", b"|=", b"^=", b"<<", b">>",
    ];
    for op in MULTI {
        if cur.starts_with(op) {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "operator lexemes are at most four bytes"
            )]
            cur.advance_n(op.len() as u32);
            out.push(start, cur.pos(), TokenType::Operator, LANG);
            return;
        }
    }
    cur.advance();
    out.push(start, cur.pos(), TokenType::Operator, LANG);
}
