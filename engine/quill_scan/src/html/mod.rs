//! HTML composite scanner.
//!
//! Markup itself is simple; the work is in the composition. A line can pass
//! through up to three grammars — markup, embedded CSS inside `<style>`, and
//! embedded JavaScript inside `<script>` — and the cross-line state must say
//! which one the next line starts in, plus that grammar's own substate.
//! States are namespaced by language index: 0 markup, 1 CSS, 2 JavaScript,
//! 3 Handlebars (which has no cross-line states of its own).
//!
//! Inside an embedded region the close tag wins over everything: a
//! `</script>` ends the script region even from the middle of a string or
//! comment. The region is therefore bounded *before* the sub-scanner runs,
//! by searching for the close tag case-insensitively and limiting the
//! cursor, and the markup grammar then consumes the close tag itself.
//!
//! With `handlebars` enabled, `{{ }}` template expressions are recognized
//! in markup text. Delimiters match by length (`{{` pairs with `}}`, `{{{`
//! with `}}}`); a shorter closing run is plain template text.

use tracing::trace;

use quill_token::{TokenList, TokenListBuilder, TokenType};

use crate::config::ScanConfig;
use crate::css::{CssScanner, CssSubstate};
use crate::cursor::Cursor;
use crate::hyperlink::push_with_hyperlink;
use crate::javascript::{JavaScriptScanner, JsSubstate};
use crate::line_buffer::LineBuffer;
use crate::state;
use crate::TokenScanner;

mod tags;


/// Language indices within the composite.
const MARKUP: u8 = 0;
const CSS: u8 = 1;
const JS: u8 = 2;
const HANDLEBARS: u8 = 3;

/// What kind of element an open tag belongs to, for region entry after `>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TagKind {
    Other,
    Script,
    Style,
}

impl TagKind {
    fn code(self) -> u8 {
        match self {
            TagKind::Other => 0,
            TagKind::Script => 1,
            TagKind::Style => 2,
        }
    }

    fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(TagKind::Other),
            1 => Some(TagKind::Script),
            2 => Some(TagKind::Style),
            _ => None,
        }
    }
}

/// Cross-line substates of the markup grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MarkupSubstate {
    /// Open `<!-- -->` comment.
    Comment,
    /// Open `<! >` declaration.
    Dtd,
    /// Open `<? ?>` processing instruction.
    Pi,
    /// Open `<![CDATA[ ]]>` section.
    Cdata,
    /// Inside a tag, between the name and the closing `>`.
    InTag(TagKind),
    /// Open double-quoted attribute value; the tag kind survives so that
    /// `<script src="…` still enters the script region once it closes.
    AttrDouble(TagKind),
    AttrSingle(TagKind),
}

impl MarkupSubstate {
    fn substate_code(self) -> u8 {
        match self {
            MarkupSubstate::Comment => 1,
            MarkupSubstate::Dtd => 2,
            MarkupSubstate::Pi => 3,
            MarkupSubstate::Cdata => 4,
            MarkupSubstate::InTag(k) => 5 + k.code(),
            MarkupSubstate::AttrDouble(k) => 8 + k.code(),
            MarkupSubstate::AttrSingle(k) => 11 + k.code(),
        }
    }

    fn from_substate(code: u8) -> Option<Self> {
        match code {
            1 => Some(MarkupSubstate::Comment),
            2 => Some(MarkupSubstate::Dtd),
            3 => Some(MarkupSubstate::Pi),
            4 => Some(MarkupSubstate::Cdata),
            5..=7 => TagKind::from_code(code - 5).map(MarkupSubstate::InTag),
            8..=10 => TagKind::from_code(code - 8).map(MarkupSubstate::AttrDouble),
            11..=13 => TagKind::from_code(code - 11).map(MarkupSubstate::AttrSingle),
            _ => None,
        }
    }

    fn closest_standard_type(self) -> TokenType {
        match self {
            MarkupSubstate::Comment => TokenType::MarkupComment,
            MarkupSubstate::Dtd => TokenType::MarkupDtd,
            MarkupSubstate::Pi => TokenType::MarkupProcessingInstruction,
            MarkupSubstate::Cdata => TokenType::MarkupCdata,
            MarkupSubstate::InTag(_) => TokenType::MarkupTagName,
            MarkupSubstate::AttrDouble(_) | MarkupSubstate::AttrSingle(_) => {
                TokenType::MarkupTagAttributeValue
            }
        }
    }
}

/// Which grammar a position in the line (or the start of the next line)
/// belongs to, with that grammar's own suspended construct if any.
///
/// Embedded substates are shifted up by one so that "inside the region, in
/// the sub-grammar's default state" gets substate 1 of the region's
/// namespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HtmlState {
    Markup(Option<MarkupSubstate>),
    Css(Option<CssSubstate>),
    Js(Option<JsSubstate>),
}

impl HtmlState {
    fn encode(self) -> i32 {
        match self {
            HtmlState::Markup(None) => 0,
            HtmlState::Markup(Some(m)) => state::encode(MARKUP, m.substate_code()),
            HtmlState::Css(None) => state::encode(CSS, 1),
            HtmlState::Css(Some(s)) => state::encode(CSS, 1 + s.substate_code()),
            HtmlState::Js(None) => state::encode(JS, 1),
            HtmlState::Js(Some(s)) => state::encode(JS, 1 + s.substate_code()),
        }
    }

    fn decode(code: i32) -> Option<Self> {
        let (lang, sub) = state::decode(code)?;
        match lang {
            MARKUP => MarkupSubstate::from_substate(sub).map(|m| HtmlState::Markup(Some(m))),
            CSS if sub == 1 => Some(HtmlState::Css(None)),
            CSS => CssSubstate::from_substate(sub - 1).map(|s| HtmlState::Css(Some(s))),
            JS if sub == 1 => Some(HtmlState::Js(None)),
            JS => JsSubstate::from_substate(sub - 1).map(|s| HtmlState::Js(Some(s))),
            _ => None,
        }
    }
}

/// What the markup grammar ran into.
enum MarkupEvent {
    /// End of line; `Some` when a markup construct is left open.
    Eol(Option<MarkupSubstate>),
    /// A `<script …>` open tag closed; the script region starts here.
    EnterScript,
    /// A `<style …>` open tag closed.
    EnterStyle,
}

/// How one tag's interior ended.
enum TagEvent {
    /// The `>` (or `/>`, reported as [`TagKind::Other`]) was consumed.
    Done(TagKind),
    Suspend(MarkupSubstate),
}

/// The HTML (and Handlebars) composite scanner.
pub struct HtmlScanner {
    handlebars: bool,
    config: ScanConfig,
    css: CssScanner,
    js: JavaScriptScanner,
}

impl HtmlScanner {
    /// `handlebars` additionally recognizes `{{ }}` template expressions in
    /// markup text.
    pub fn new(handlebars: bool, config: ScanConfig) -> Self {
        Self {
            handlebars,
            config,
            css: CssScanner::new(config),
            js: JavaScriptScanner::new(config),
        }
    }

    /// Whether typing `</` after `tag_name` should be auto-completed: void
    /// elements never take a closing tag.
    pub fn should_complete_close_tag(&self, tag_name: &str) -> bool {
        self.config.complete_close_tags()
            && !tags::void_tags().contains(tag_name.to_ascii_lowercase().as_str())
    }

    /// Markup scanning from `resume` until EOL or an embedded region opens.
    fn scan_markup(
        &self,
        cur: &mut Cursor<'_>,
        out: &mut TokenListBuilder<'_>,
        resume: Option<MarkupSubstate>,
    ) -> MarkupEvent {
        if let Some(sub) = resume {
            if let Some(event) = resume_markup(cur, out, sub) {
                return event;
            }
        }
        loop {
            if cur.is_eol() {
                return MarkupEvent::Eol(None);
            }
            let start = cur.pos();
            match cur.current() {
                b' ' | b'\t' => {
                    cur.eat_whitespace();
                    out.push(start, cur.pos(), TokenType::Whitespace, MARKUP);
                }
                b'<' => {
                    if cur.starts_with(b"<!--") {
                        cur.advance_n(4);
                        if finish_comment(cur, out, start) {
                            return MarkupEvent::Eol(Some(MarkupSubstate::Comment));
                        }
                    } else if cur.starts_with(b"<![CDATA[") {
                        cur.advance_n(9);
                        out.push(start, cur.pos(), TokenType::MarkupCdataDelimiter, MARKUP);
                        if finish_cdata(cur, out) {
                            return MarkupEvent::Eol(Some(MarkupSubstate::Cdata));
                        }
                    } else if cur.peek() == b'!' {
                        cur.advance_n(2);
                        if finish_dtd(cur, out, start) {
                            return MarkupEvent::Eol(Some(MarkupSubstate::Dtd));
                        }
                    } else if cur.peek() == b'?' {
                        cur.advance_n(2);
                        if finish_pi(cur, out, start) {
                            return MarkupEvent::Eol(Some(MarkupSubstate::Pi));
                        }
                    } else if cur.peek() == b'/' || is_tag_name_start(cur.peek()) {
                        let closing = cur.peek() == b'/';
                        cur.advance_n(if closing { 2 } else { 1 });
                        out.push(start, cur.pos(), TokenType::MarkupTagDelimiter, MARKUP);
                        let name_start = cur.pos();
                        cur.eat_while(is_tag_name_byte);
                        let name = out
                            .line()
                            .get(name_start as usize..cur.pos() as usize)
                            .unwrap_or("");
                        out.push(name_start, cur.pos(), TokenType::MarkupTagName, MARKUP);
                        // A close tag never re-enters its region.
                        let kind = if closing {
                            TagKind::Other
                        } else if name.eq_ignore_ascii_case("script") {
                            TagKind::Script
                        } else if name.eq_ignore_ascii_case("style") {
                            TagKind::Style
                        } else {
                            TagKind::Other
                        };
                        match scan_in_tag(cur, out, kind) {
                            TagEvent::Done(TagKind::Script) => return MarkupEvent::EnterScript,
                            TagEvent::Done(TagKind::Style) => return MarkupEvent::EnterStyle,
                            TagEvent::Done(TagKind::Other) => {}
                            TagEvent::Suspend(sub) => return MarkupEvent::Eol(Some(sub)),
                        }
                    } else {
                        // Lone `<` in text.
                        cur.advance();
                        out.push(start, cur.pos(), TokenType::Identifier, MARKUP);
                    }
                }
                b'&' => scan_entity(cur, out, start),
                b'{' if self.handlebars && cur.peek() == b'{' => scan_handlebars(cur, out),
                _ => {
                    cur.advance_char();
                    while !cur.is_eol() && !is_text_stop(cur, self.handlebars) {
                        cur.advance_char();
                    }
                    out.push(start, cur.pos(), TokenType::Identifier, MARKUP);
                }
            }
        }
    }
}

impl TokenScanner for HtmlScanner {
    fn scan_line<'s>(
        &mut self,
        line: &'s str,
        incoming_state: i32,
        line_start_document_offset: u32,
    ) -> TokenList<'s> {
        let buf = LineBuffer::new(line);
        let mut cur = buf.cursor();
        let mut out = TokenListBuilder::new(line, line_start_document_offset);

        let decoded = HtmlState::decode(incoming_state);
        if incoming_state < 0 && decoded.is_none() {
            trace!(incoming_state, "unrecognized incoming state, scanning from the default state");
        }
        let mut st = decoded.unwrap_or(HtmlState::Markup(None));
        loop {
            match st {
                HtmlState::Markup(resume) => match self.scan_markup(&mut cur, &mut out, resume) {
                    MarkupEvent::Eol(sub) => {
                        return out.finish(HtmlState::Markup(sub).encode());
                    }
                    MarkupEvent::EnterScript => st = HtmlState::Js(None),
                    MarkupEvent::EnterStyle => st = HtmlState::Css(None),
                },
                HtmlState::Js(resume) => match cur.find_sub_ignore_ascii_case(b"</script>") {
                    Some(rel) => {
                        let mut inner = cur.with_limit(cur.pos() + rel);
                        let _ = self.js.scan_region(&mut inner, &mut out, JS, resume);
                        cur.advance_n(inner.pos() - cur.pos());
                        st = HtmlState::Markup(None);
                    }
                    None => {
                        let suspended = self.js.scan_region(&mut cur, &mut out, JS, resume);
                        return out.finish(HtmlState::Js(suspended).encode());
                    }
                },
                HtmlState::Css(resume) => match cur.find_sub_ignore_ascii_case(b"</style>") {
                    Some(rel) => {
                        let mut inner = cur.with_limit(cur.pos() + rel);
                        let _ = self.css.scan_region(&mut inner, &mut out, CSS, resume);
                        cur.advance_n(inner.pos() - cur.pos());
                        st = HtmlState::Markup(None);
                    }
                    None => {
                        let suspended = self.css.scan_region(&mut cur, &mut out, CSS, resume);
                        return out.finish(HtmlState::Css(suspended).encode());
                    }
                },
            }
        }
    }

    fn closest_standard_type(&self, internal_code: i32) -> TokenType {
        match HtmlState::decode(internal_code) {
            Some(HtmlState::Markup(Some(m))) => m.closest_standard_type(),
            Some(HtmlState::Css(Some(s))) => s.closest_standard_type(),
            Some(HtmlState::Js(Some(s))) => s.closest_standard_type(),
            Some(
                HtmlState::Markup(None) | HtmlState::Css(None) | HtmlState::Js(None),
            ) => TokenType::Identifier,
            None => TokenType::from_code(internal_code).unwrap_or(TokenType::Null),
        }
    }

    fn line_comment_markers(
        &self,
        language_index: u8,
    ) -> (Option<&'static str>, Option<&'static str>) {
        match language_index {
            CSS => (Some("/*"), Some("*/")),
            JS => (Some("//"), None),
            HANDLEBARS => (Some("{{!"), Some("}}")),
            _ => (Some("<!--"), Some("-->")),
        }
    }

    fn curly_braces_denote_code_blocks(&self, language_index: u8) -> bool {
        language_index == CSS || language_index == JS
    }

    fn is_identifier_char(&self, language_index: u8, ch: char) -> bool {
        if language_index == JS {
            ch.is_alphanumeric() || ch == '_' || ch == '$'
        } else {
            ch.is_alphanumeric() || ch == '-' || ch == '_'
        }
    }

    fn config(&self) -> &ScanConfig {
        &self.config
    }

    fn set_config(&mut self, config: ScanConfig) {
        self.config = config;
        self.css.set_config(config);
        self.js.set_config(config);
    }
}

fn is_tag_name_start(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

fn is_tag_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b':'
}

fn is_attr_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b':' || b == b'.' || b >= 0x80
}

/// Does markup text end at the current byte?
fn is_text_stop(cur: &Cursor<'_>, handlebars: bool) -> bool {
    match cur.current() {
        b'<' | b'&' | b' ' | b'\t' => true,
        b'{' => handlebars && cur.peek() == b'{',
        _ => false,
    }
}

/// Re-enter a markup construct suspended on the previous line. `None` means
/// it closed on this line and ordinary markup scanning continues.
fn resume_markup(
    cur: &mut Cursor<'_>,
    out: &mut TokenListBuilder<'_>,
    sub: MarkupSubstate,
) -> Option<MarkupEvent> {
    let start = cur.pos();
    match sub {
        MarkupSubstate::Comment => finish_comment(cur, out, start)
            .then_some(MarkupEvent::Eol(Some(MarkupSubstate::Comment))),
        MarkupSubstate::Dtd => {
            finish_dtd(cur, out, start).then_some(MarkupEvent::Eol(Some(MarkupSubstate::Dtd)))
        }
        MarkupSubstate::Pi => {
            finish_pi(cur, out, start).then_some(MarkupEvent::Eol(Some(MarkupSubstate::Pi)))
        }
        MarkupSubstate::Cdata => {
            finish_cdata(cur, out).then_some(MarkupEvent::Eol(Some(MarkupSubstate::Cdata)))
        }
        MarkupSubstate::InTag(kind) => tag_event(scan_in_tag(cur, out, kind)),
        MarkupSubstate::AttrDouble(kind) => {
            if finish_attr_value(cur, out, start, b'"') {
                return Some(MarkupEvent::Eol(Some(MarkupSubstate::AttrDouble(kind))));
            }
            tag_event(scan_in_tag(cur, out, kind))
        }
        MarkupSubstate::AttrSingle(kind) => {
            if finish_attr_value(cur, out, start, b'\'') {
                return Some(MarkupEvent::Eol(Some(MarkupSubstate::AttrSingle(kind))));
            }
            tag_event(scan_in_tag(cur, out, kind))
        }
    }
}

fn tag_event(ev: TagEvent) -> Option<MarkupEvent> {
    match ev {
        TagEvent::Done(TagKind::Script) => Some(MarkupEvent::EnterScript),
        TagEvent::Done(TagKind::Style) => Some(MarkupEvent::EnterStyle),
        TagEvent::Done(TagKind::Other) => None,
        TagEvent::Suspend(sub) => Some(MarkupEvent::Eol(Some(sub))),
    }
}

/// Interior of a tag, after the name; attributes, `=`, quoted values.
fn scan_in_tag(cur: &mut Cursor<'_>, out: &mut TokenListBuilder<'_>, kind: TagKind) -> TagEvent {
    loop {
        if cur.is_eol() {
            return TagEvent::Suspend(MarkupSubstate::InTag(kind));
        }
        let start = cur.pos();
        match cur.current() {
            b' ' | b'\t' => {
                cur.eat_whitespace();
                out.push(start, cur.pos(), TokenType::Whitespace, MARKUP);
            }
            b'>' => {
                cur.advance();
                out.push(start, cur.pos(), TokenType::MarkupTagDelimiter, MARKUP);
                return TagEvent::Done(kind);
            }
            b'/' if cur.peek() == b'>' => {
                // Self-closing: no region to enter.
                cur.advance_n(2);
                out.push(start, cur.pos(), TokenType::MarkupTagDelimiter, MARKUP);
                return TagEvent::Done(TagKind::Other);
            }
            b'=' => {
                cur.advance();
                out.push(start, cur.pos(), TokenType::Operator, MARKUP);
            }
            b'"' => {
                cur.advance();
                if finish_attr_value(cur, out, start, b'"') {
                    return TagEvent::Suspend(MarkupSubstate::AttrDouble(kind));
                }
            }
            b'\'' => {
                cur.advance();
                if finish_attr_value(cur, out, start, b'\'') {
                    return TagEvent::Suspend(MarkupSubstate::AttrSingle(kind));
                }
            }
            b if is_attr_name_byte(b) => {
                cur.eat_while(is_attr_name_byte);
                out.push(start, cur.pos(), TokenType::MarkupTagAttribute, MARKUP);
            }
            _ => {
                cur.advance_char();
                out.push(start, cur.pos(), TokenType::Identifier, MARKUP);
            }
        }
    }
}

/// Rest of a `<!-- -->` comment; the opener (if on this line) is consumed.
/// Returns `true` when still open at EOL.
fn finish_comment(cur: &mut Cursor<'_>, out: &mut TokenListBuilder<'_>, start: u32) -> bool {
    match cur.find_sub(b"-->") {
        Some(rel) => {
            cur.advance_n(rel + 3);
            push_with_hyperlink(out, start, cur.pos(), TokenType::MarkupComment, MARKUP);
            false
        }
        None => {
            cur.seek_eol();
            push_with_hyperlink(out, start, cur.pos(), TokenType::MarkupComment, MARKUP);
            true
        }
    }
}

fn finish_dtd(cur: &mut Cursor<'_>, out: &mut TokenListBuilder<'_>, start: u32) -> bool {
    match cur.find_byte(b'>') {
        Some(rel) => {
            cur.advance_n(rel + 1);
            out.push(start, cur.pos(), TokenType::MarkupDtd, MARKUP);
            false
        }
        None => {
            cur.seek_eol();
            out.push(start, cur.pos(), TokenType::MarkupDtd, MARKUP);
            true
        }
    }
}

fn finish_pi(cur: &mut Cursor<'_>, out: &mut TokenListBuilder<'_>, start: u32) -> bool {
    match cur.find_sub(b"?>") {
        Some(rel) => {
            cur.advance_n(rel + 2);
            out.push(start, cur.pos(), TokenType::MarkupProcessingInstruction, MARKUP);
            false
        }
        None => {
            cur.seek_eol();
            out.push(start, cur.pos(), TokenType::MarkupProcessingInstruction, MARKUP);
            true
        }
    }
}

/// CDATA content up to `]]>`; content and delimiter are separate tokens.
fn finish_cdata(cur: &mut Cursor<'_>, out: &mut TokenListBuilder<'_>) -> bool {
    let start = cur.pos();
    match cur.find_sub(b"]]>") {
        Some(rel) => {
            cur.advance_n(rel);
            out.push(start, cur.pos(), TokenType::MarkupCdata, MARKUP);
            let delim = cur.pos();
            cur.advance_n(3);
            out.push(delim, cur.pos(), TokenType::MarkupCdataDelimiter, MARKUP);
            false
        }
        None => {
            cur.seek_eol();
            out.push(start, cur.pos(), TokenType::MarkupCdata, MARKUP);
            true
        }
    }
}

/// Attribute value after the opening quote. Returns `true` when the value
/// is still open at EOL.
fn finish_attr_value(
    cur: &mut Cursor<'_>,
    out: &mut TokenListBuilder<'_>,
    start: u32,
    quote: u8,
) -> bool {
    match cur.find_byte(quote) {
        Some(rel) => {
            cur.advance_n(rel + 1);
            out.push(start, cur.pos(), TokenType::MarkupTagAttributeValue, MARKUP);
            false
        }
        None => {
            cur.seek_eol();
            out.push(start, cur.pos(), TokenType::MarkupTagAttributeValue, MARKUP);
            true
        }
    }
}

/// `&name;` or `&#1234;`; without the closing `;` it is plain text.
fn scan_entity(cur: &mut Cursor<'_>, out: &mut TokenListBuilder<'_>, start: u32) {
    cur.advance();
    if cur.current() == b'#' {
        cur.advance();
    }
    cur.eat_while(|b| b.is_ascii_alphanumeric());
    if cur.current() == b';' && cur.pos() > start + 1 {
        cur.advance();
        out.push(start, cur.pos(), TokenType::MarkupEntityReference, MARKUP);
    } else {
        out.push(start, cur.pos(), TokenType::Identifier, MARKUP);
    }
}

fn is_expression_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(b, b'_' | b'-' | b'.' | b'/' | b'#' | b'@' | b'!' | b'$')
        || b >= 0x80
}

/// A `{{ }}` template expression. The opening run (two to four braces) is
/// one Separator; the closing run matches only when it is at least as long,
/// and then exactly the opening length is consumed. Expressions do not cross
/// lines; an unterminated one simply ends at EOL.
fn scan_handlebars(cur: &mut Cursor<'_>, out: &mut TokenListBuilder<'_>) {
    let start = cur.pos();
    let mut open: u32 = 0;
    while cur.current() == b'{' && open < 4 {
        cur.advance();
        open += 1;
    }
    out.push(start, cur.pos(), TokenType::Separator, HANDLEBARS);
    loop {
        if cur.is_eol() {
            return;
        }
        let s = cur.pos();
        match cur.current() {
            b'}' => {
                let mut probe = *cur;
                let mut run: u32 = 0;
                while probe.current() == b'}' {
                    probe.advance();
                    run += 1;
                }
                if run >= open {
                    cur.advance_n(open);
                    out.push(s, cur.pos(), TokenType::Separator, HANDLEBARS);
                    return;
                }
                // Too short to close; plain text inside the expression.
                cur.advance_n(run);
                out.push(s, cur.pos(), TokenType::Identifier, HANDLEBARS);
            }
            b' ' | b'\t' => {
                cur.eat_whitespace();
                out.push(s, cur.pos(), TokenType::Whitespace, HANDLEBARS);
            }
            b'"' | b'\'' => {
                let quote = cur.current();
                cur.advance();
                match cur.find_byte(quote) {
                    Some(rel) => {
                        cur.advance_n(rel + 1);
                        out.push(s, cur.pos(), TokenType::LiteralStringDouble, HANDLEBARS);
                    }
                    None => {
                        cur.seek_eol();
                        out.push(s, cur.pos(), TokenType::ErrorStringDouble, HANDLEBARS);
                    }
                }
            }
            b if is_expression_word_byte(b) => {
                cur.eat_while(is_expression_word_byte);
                out.push(s, cur.pos(), TokenType::Identifier, HANDLEBARS);
            }
            _ => {
                cur.advance_char();
                out.push(s, cur.pos(), TokenType::Operator, HANDLEBARS);
            }
        }
    }
}
