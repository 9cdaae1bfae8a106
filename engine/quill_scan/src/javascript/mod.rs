//! JavaScript line scanner.
//!
//! Beyond the shared curly-brace machinery (comments, escapes, the numeric
//! sub-automaton) this scanner carries the three genuinely hard JS rules:
//!
//! - **Regex vs. division**: `/` opens a regular-expression literal only
//!   when the last significant token could not end an expression — an
//!   operator (other than `++`/`--`), an opening bracket, a separator, or
//!   nothing at all. After an identifier, number, or closing bracket it is
//!   division.
//! - **Template literals**: backtick text with `${…}` interpolations that
//!   re-enter ordinary expression scanning, nestable, then resume template
//!   text after the matching `}`.
//! - **Version-gated keywords**: the dialect table consults
//!   [`JsVersion`](crate::JsVersion) and the E4X flag from the scanner's
//!   configuration.
//!
//! The whole engine is written against a caller-supplied language index and
//! cursor so the HTML composite can run it over a `<script>` region
//! mid-line; standalone scanning is the `lang = 0`, whole-line case.

use tracing::trace;

use quill_token::{TokenList, TokenListBuilder, TokenType};

use crate::comments;
use crate::config::ScanConfig;
use crate::cursor::Cursor;
use crate::escape::{scan_escape, EscapeOutcome};
use crate::hyperlink::push_with_hyperlink;
use crate::line_buffer::LineBuffer;
use crate::state;
use crate::TokenScanner;

mod keywords;


/// Language index when scanning standalone (not embedded in markup).
const LANG: u8 = 0;

/// Suspended multi-line constructs of the JavaScript grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum JsSubstate {
    BlockComment,
    DocComment,
    /// Backslash-continued double-quoted string, escapes valid so far.
    DoubleValid,
    DoubleInvalid,
    SingleValid,
    SingleInvalid,
    /// Open template literal; templates continue across lines unescaped.
    TemplateValid,
    TemplateInvalid,
}

impl JsSubstate {
    pub(crate) fn substate_code(self) -> u8 {
        match self {
            JsSubstate::BlockComment => 1,
            JsSubstate::DocComment => 2,
            JsSubstate::DoubleValid => 3,
            JsSubstate::DoubleInvalid => 4,
            JsSubstate::SingleValid => 5,
            JsSubstate::SingleInvalid => 6,
            JsSubstate::TemplateValid => 7,
            JsSubstate::TemplateInvalid => 8,
        }
    }

    pub(crate) fn from_substate(code: u8) -> Option<Self> {
        match code {
            1 => Some(JsSubstate::BlockComment),
            2 => Some(JsSubstate::DocComment),
            3 => Some(JsSubstate::DoubleValid),
            4 => Some(JsSubstate::DoubleInvalid),
            5 => Some(JsSubstate::SingleValid),
            6 => Some(JsSubstate::SingleInvalid),
            7 => Some(JsSubstate::TemplateValid),
            8 => Some(JsSubstate::TemplateInvalid),
            _ => None,
        }
    }

    /// The paintable type an open construct renders as while being edited.
    pub(crate) fn closest_standard_type(self) -> TokenType {
        match self {
            JsSubstate::BlockComment => TokenType::CommentMultiline,
            JsSubstate::DocComment => TokenType::CommentDocumentation,
            JsSubstate::DoubleValid => TokenType::LiteralStringDouble,
            JsSubstate::DoubleInvalid | JsSubstate::TemplateInvalid => {
                TokenType::ErrorStringDouble
            }
            JsSubstate::SingleValid => TokenType::LiteralChar,
            JsSubstate::SingleInvalid => TokenType::ErrorChar,
            JsSubstate::TemplateValid => TokenType::LiteralBackquote,
        }
    }

    fn encode(self) -> i32 {
        state::encode(LANG, self.substate_code())
    }

    fn decode(code: i32) -> Option<Self> {
        let (lang, sub) = state::decode(code)?;
        if lang != LANG {
            return None;
        }
        Self::from_substate(sub)
    }
}

/// The JavaScript line scanner.
pub struct JavaScriptScanner {
    config: ScanConfig,
}

impl JavaScriptScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Scan JavaScript until the cursor's end-of-line (which may be an
    /// embedded region's close-tag limit), emitting with `lang`.
    ///
    /// `resume` re-enters a construct suspended on the previous line.
    /// Returns the substate to suspend into when the region's characters
    /// run out mid-construct.
    pub(crate) fn scan_region(
        &self,
        cur: &mut Cursor<'_>,
        out: &mut TokenListBuilder<'_>,
        lang: u8,
        resume: Option<JsSubstate>,
    ) -> Option<JsSubstate> {
        if let Some(sub) = resume {
            let start = cur.pos();
            let suspended = match sub {
                JsSubstate::BlockComment => comments::scan_block_comment(cur, out, start, lang)
                    .then_some(JsSubstate::BlockComment),
                JsSubstate::DocComment => comments::scan_doc_comment(cur, out, start, lang)
                    .then_some(JsSubstate::DocComment),
                JsSubstate::DoubleValid => scan_quoted(cur, out, start, b'"', true, lang),
                JsSubstate::DoubleInvalid => scan_quoted(cur, out, start, b'"', false, lang),
                JsSubstate::SingleValid => scan_quoted(cur, out, start, b'\'', true, lang),
                JsSubstate::SingleInvalid => scan_quoted(cur, out, start, b'\'', false, lang),
                JsSubstate::TemplateValid => self.scan_template_body(cur, out, start, true, lang),
                JsSubstate::TemplateInvalid => {
                    self.scan_template_body(cur, out, start, false, lang)
                }
            };
            if suspended.is_some() {
                return suspended;
            }
        }
        while !cur.is_eol() {
            if let Some(sub) = self.scan_token(cur, out, lang) {
                return Some(sub);
            }
        }
        None
    }

    /// Scan one token from the default state.
    fn scan_token(
        &self,
        cur: &mut Cursor<'_>,
        out: &mut TokenListBuilder<'_>,
        lang: u8,
    ) -> Option<JsSubstate> {
        let start = cur.pos();
        match cur.current() {
            b' ' | b'\t' => {
                cur.eat_whitespace();
                out.push(start, cur.pos(), TokenType::Whitespace, lang);
            }
            b'/' if cur.peek() == b'/' => {
                cur.seek_eol();
                push_with_hyperlink(out, start, cur.pos(), TokenType::CommentEol, lang);
            }
            b'/' if cur.peek() == b'*' => {
                let doc = cur.peek2() == b'*' && cur.peek_at(3) != b'/';
                let suspended = if doc {
                    cur.advance_n(3);
                    comments::scan_doc_comment(cur, out, start, lang)
                        .then_some(JsSubstate::DocComment)
                } else {
                    cur.advance_n(2);
                    comments::scan_block_comment(cur, out, start, lang)
                        .then_some(JsSubstate::BlockComment)
                };
                if suspended.is_some() {
                    return suspended;
                }
            }
            b'/' => {
                if !regex_allowed(out) || !try_scan_regex(cur, out, start, lang) {
                    scan_operator(cur, out, start, lang);
                }
            }
            b'"' => {
                cur.advance();
                return scan_quoted(cur, out, start, b'"', true, lang);
            }
            b'\'' => {
                cur.advance();
                return scan_quoted(cur, out, start, b'\'', true, lang);
            }
            b'`' => {
                cur.advance();
                return self.scan_template_body(cur, out, start, true, lang);
            }
            b'0'..=b'9' => scan_number(cur, out, start, lang),
            b'.' if cur.peek().is_ascii_digit() => scan_number(cur, out, start, lang),
            b'(' | b')' | b'[' | b']' | b'{' | b'}' | b';' | b',' | b'.' => {
                cur.advance();
                out.push(start, cur.pos(), TokenType::Separator, lang);
            }
            b'+' | b'-' | b'*' | b'%' | b'=' | b'<' | b'>' | b'!' | b'&' | b'|' | b'^' | b'~'
            | b'?' | b':' => {
                scan_operator(cur, out, start, lang);
            }
            b if is_identifier_start(b) => {
                cur.eat_while(is_identifier_byte);
                let text = out.line().get(start as usize..cur.pos() as usize).unwrap_or("");
                let ty = keywords::lookup(
                    self.config.javascript_version(),
                    self.config.e4x_supported(),
                    text,
                )
                .unwrap_or(TokenType::Identifier);
                out.push(start, cur.pos(), ty, lang);
            }
            _ => {
                cur.advance_char();
                out.push(start, cur.pos(), TokenType::ErrorIdentifier, lang);
            }
        }
        None
    }

    /// Template-literal text; the opening backtick (if on this line) is
    /// consumed. Templates continue across lines without a continuation
    /// backslash.
    fn scan_template_body(
        &self,
        cur: &mut Cursor<'_>,
        out: &mut TokenListBuilder<'_>,
        start: u32,
        mut valid: bool,
        lang: u8,
    ) -> Option<JsSubstate> {
        let mut seg = start;
        loop {
            match cur.find_byte3(b'`', b'\\', b'$') {
                None => {
                    cur.seek_eol();
                    push_template_text(out, seg, cur.pos(), valid, lang);
                    return Some(template_substate(valid));
                }
                Some(rel) => {
                    cur.advance_n(rel);
                    match cur.current() {
                        b'`' => {
                            cur.advance();
                            push_template_text(out, seg, cur.pos(), valid, lang);
                            return None;
                        }
                        b'$' if cur.peek() == b'{' => {
                            push_template_text(out, seg, cur.pos(), valid, lang);
                            let d = cur.pos();
                            cur.advance_n(2);
                            out.push(d, cur.pos(), TokenType::Separator, lang);
                            if !self.scan_interpolation(cur, out, lang) {
                                return Some(template_substate(valid));
                            }
                            seg = cur.pos();
                        }
                        b'$' => cur.advance(),
                        _ => match scan_escape(cur) {
                            EscapeOutcome::Valid => {}
                            EscapeOutcome::Invalid => valid = false,
                            EscapeOutcome::LineContinuation => {
                                push_template_text(out, seg, cur.pos(), valid, lang);
                                return Some(template_substate(valid));
                            }
                        },
                    }
                }
            }
        }
    }

    /// Expression inside `${…}`; the opening `${` is consumed. Returns
    /// `true` when the matching `}` was found on this line.
    ///
    /// A construct left open at end-of-line inside an interpolation does not
    /// get its own cross-line state; the next line resumes as template text.
    fn scan_interpolation(
        &self,
        cur: &mut Cursor<'_>,
        out: &mut TokenListBuilder<'_>,
        lang: u8,
    ) -> bool {
        let mut depth: u32 = 0;
        while !cur.is_eol() {
            match cur.current() {
                b'}' => {
                    let s = cur.pos();
                    cur.advance();
                    out.push(s, cur.pos(), TokenType::Separator, lang);
                    if depth == 0 {
                        return true;
                    }
                    depth -= 1;
                }
                b'{' => {
                    let s = cur.pos();
                    depth += 1;
                    cur.advance();
                    out.push(s, cur.pos(), TokenType::Separator, lang);
                }
                _ => {
                    let _ = self.scan_token(cur, out, lang);
                }
            }
        }
        false
    }
}

impl TokenScanner for JavaScriptScanner {
    fn scan_line<'s>(
        &mut self,
        line: &'s str,
        incoming_state: i32,
        line_start_document_offset: u32,
    ) -> TokenList<'s> {
        let buf = LineBuffer::new(line);
        let mut cur = buf.cursor();
        let mut out = TokenListBuilder::new(line, line_start_document_offset);

        let resume = JsSubstate::decode(incoming_state);
        if incoming_state < 0 && resume.is_none() {
            trace!(incoming_state, "unrecognized incoming state, scanning from the default state");
        }
        let suspended = self.scan_region(&mut cur, &mut out, LANG, resume);
        out.finish(suspended.map_or(0, JsSubstate::encode))
    }

    fn closest_standard_type(&self, internal_code: i32) -> TokenType {
        match JsSubstate::decode(internal_code) {
            Some(sub) => sub.closest_standard_type(),
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

fn template_substate(valid: bool) -> JsSubstate {
    if valid {
        JsSubstate::TemplateValid
    } else {
        JsSubstate::TemplateInvalid
    }
}

fn push_template_text(
    out: &mut TokenListBuilder<'_>,
    start: u32,
    end: u32,
    valid: bool,
    lang: u8,
) {
    if valid {
        push_with_hyperlink(out, start, end, TokenType::LiteralBackquote, lang);
    } else {
        out.push(start, end, TokenType::ErrorStringDouble, lang);
    }
}

/// The lookbehind rule: may a `/` at the current position open a regex
/// literal?
fn regex_allowed(out: &TokenListBuilder<'_>) -> bool {
    match out.last_significant() {
        None => true,
        Some(t) => match t.token_type() {
            Some(TokenType::Operator) => !matches!(t.lexeme(), "++" | "--"),
            Some(TokenType::Separator) => matches!(t.lexeme(), "(" | "[" | "{" | "," | ";"),
            _ => false,
        },
    }
}

/// Probe for a regex literal at `/`. Commits the cursor and emits the token
/// only when a closing `/` exists on this line; otherwise leaves the cursor
/// untouched and returns `false`.
fn try_scan_regex(
    cur: &mut Cursor<'_>,
    out: &mut TokenListBuilder<'_>,
    start: u32,
    lang: u8,
) -> bool {
    let mut probe = *cur;
    probe.advance();
    let mut in_class = false;
    loop {
        if probe.is_eol() {
            return false;
        }
        match probe.current() {
            b'\\' => {
                probe.advance();
                if probe.is_eol() {
                    return false;
                }
                probe.advance_char();
            }
            b'[' => {
                in_class = true;
                probe.advance();
            }
            b']' => {
                in_class = false;
                probe.advance();
            }
            b'/' if !in_class => {
                probe.advance();
                break;
            }
            _ => probe.advance_char(),
        }
    }
    probe.eat_while(|b| matches!(b, b'd' | b'g' | b'i' | b'm' | b's' | b'u' | b'x' | b'y'));
    *cur = probe;
    out.push(start, cur.pos(), TokenType::Regex, lang);
    true
}

/// Quoted string body; the opening quote is already consumed. Single-quoted
/// strings paint with the char-literal type.
fn scan_quoted(
    cur: &mut Cursor<'_>,
    out: &mut TokenListBuilder<'_>,
    start: u32,
    quote: u8,
    mut valid: bool,
    lang: u8,
) -> Option<JsSubstate> {
    let (ok_ty, err_ty) = if quote == b'"' {
        (TokenType::LiteralStringDouble, TokenType::ErrorStringDouble)
    } else {
        (TokenType::LiteralChar, TokenType::ErrorChar)
    };
    loop {
        match cur.find_byte2(quote, b'\\') {
            None => {
                cur.seek_eol();
                out.push(start, cur.pos(), err_ty, lang);
                return None;
            }
            Some(rel) => {
                cur.advance_n(rel);
                if cur.current() == quote {
                    cur.advance();
                    if valid {
                        push_with_hyperlink(out, start, cur.pos(), ok_ty, lang);
                    } else {
                        out.push(start, cur.pos(), err_ty, lang);
                    }
                    return None;
                }
                match scan_escape(cur) {
                    EscapeOutcome::Valid => {}
                    EscapeOutcome::Invalid => valid = false,
                    EscapeOutcome::LineContinuation => {
                        out.push(start, cur.pos(), if valid { ok_ty } else { err_ty }, lang);
                        return Some(match (quote, valid) {
                            (b'"', true) => JsSubstate::DoubleValid,
                            (b'"', false) => JsSubstate::DoubleInvalid,
                            (_, true) => JsSubstate::SingleValid,
                            (_, false) => JsSubstate::SingleInvalid,
                        });
                    }
                }
            }
        }
    }
}

/// Numeric literal sub-automaton, JS flavor: hex/binary (with the shared
/// hexadecimal paint class, octal included — compatibility quirk), decimal,
/// floats with exponent, and the BigInt `n` suffix. Trailing identifier
/// characters reclassify the span as a number-format error.
fn scan_number(cur: &mut Cursor<'_>, out: &mut TokenListBuilder<'_>, start: u32, lang: u8) {
    let mut ty;
    if cur.current() == b'0' && matches!(cur.peek(), b'x' | b'X') {
        cur.advance_n(2);
        cur.eat_while(|b| b.is_ascii_hexdigit() || b == b'_');
        if cur.current() == b'n' {
            cur.advance();
        }
        ty = TokenType::LiteralNumberHexadecimal;
    } else if cur.current() == b'0' && matches!(cur.peek(), b'b' | b'B') {
        cur.advance_n(2);
        cur.eat_while(|b| matches!(b, b'0' | b'1' | b'_'));
        if cur.current() == b'n' {
            cur.advance();
        }
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
        if !float && cur.current() == b'n' {
            cur.advance();
        }
        ty = if float {
            TokenType::LiteralNumberFloat
        } else if leading_zero && all_octal && digits > 1 {
            TokenType::LiteralNumberHexadecimal
        } else {
            TokenType::LiteralNumberDecimalInt
        };
    }
    if is_identifier_byte(cur.current()) {
        cur.eat_while(is_identifier_byte);
        ty = TokenType::ErrorNumberFormat;
    }
    out.push(start, cur.pos(), ty, lang);
}

/// Longest-match operator munching.
fn scan_operator(cur: &mut Cursor<'_>, out: &mut TokenListBuilder<'_>, start: u32, lang: u8) {
    const MULTI: &[&[u8]] = &[
        b"===", b"!==", b">>>=", b">>>", b"**=", b"**", b"<<=", b">>=", b"&&=", b"&&", b"||=",
        b"||", b"??=", b"??", b"?.", b"=>", b"==", b"!=", b"<=", b">=", b"++", b"--", b"+=",
        b"-=", b"*=", b"/=", b"%=", b"&=", b"|=", b"^=", b"<<", b">>",
    ];
    for op in MULTI {
        if cur.starts_with(op) {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "operator lexemes are at most four bytes"
            )]
            cur.advance_n(op.len() as u32);
            out.push(start, cur.pos(), TokenType::Operator, lang);
            return;
        }
    }
    cur.advance();
    out.push(start, cur.pos(), TokenType::Operator, lang);
}
