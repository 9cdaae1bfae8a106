//! CSS line scanner.
//!
//! CSS is context-sensitive in a way the curly-brace languages are not: the
//! same word is a selector outside braces, a property name inside them, and
//! a value keyword after a colon. The scanner tracks those three contexts
//! explicitly, and the context itself crosses the line boundary (a rule
//! block left open at EOL resumes in property context on the next line).
//!
//! Comments can open in any context and must return to it when they close,
//! so each context carries its own suspended-comment substate.

use std::sync::OnceLock;

use rustc_hash::FxHashSet;
use tracing::trace;

use quill_token::{TokenList, TokenListBuilder, TokenType};

use crate::comments;
use crate::config::ScanConfig;
use crate::cursor::Cursor;
use crate::hyperlink::push_with_hyperlink;
use crate::line_buffer::LineBuffer;
use crate::state;
use crate::TokenScanner;


/// Language index when scanning standalone (not embedded in markup).
const LANG: u8 = 0;

/// Cross-line substates of the CSS grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CssSubstate {
    /// Inside a `{ }` rule block, before a `:`.
    Property,
    /// After a `:`, before the closing `;` or `}`.
    Value,
    /// Open `/* */` comment that started in selector context.
    CommentSelector,
    CommentProperty,
    CommentValue,
}

impl CssSubstate {
    pub(crate) fn substate_code(self) -> u8 {
        match self {
            CssSubstate::Property => 1,
            CssSubstate::Value => 2,
            CssSubstate::CommentSelector => 3,
            CssSubstate::CommentProperty => 4,
            CssSubstate::CommentValue => 5,
        }
    }

    pub(crate) fn from_substate(code: u8) -> Option<Self> {
        match code {
            1 => Some(CssSubstate::Property),
            2 => Some(CssSubstate::Value),
            3 => Some(CssSubstate::CommentSelector),
            4 => Some(CssSubstate::CommentProperty),
            5 => Some(CssSubstate::CommentValue),
            _ => None,
        }
    }

    pub(crate) fn closest_standard_type(self) -> TokenType {
        match self {
            CssSubstate::Property | CssSubstate::Value => TokenType::Identifier,
            CssSubstate::CommentSelector
            | CssSubstate::CommentProperty
            | CssSubstate::CommentValue => TokenType::CommentMultiline,
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

/// Scanning context within a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Ctx {
    Selector,
    Property,
    Value,
}

impl Ctx {
    fn comment_substate(self) -> CssSubstate {
        match self {
            Ctx::Selector => CssSubstate::CommentSelector,
            Ctx::Property => CssSubstate::CommentProperty,
            Ctx::Value => CssSubstate::CommentValue,
        }
    }

    fn suspend(self) -> Option<CssSubstate> {
        match self {
            Ctx::Selector => None,
            Ctx::Property => Some(CssSubstate::Property),
            Ctx::Value => Some(CssSubstate::Value),
        }
    }
}

/// The CSS line scanner.
pub struct CssScanner {
    config: ScanConfig,
}

impl CssScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Scan CSS until the cursor's end-of-line (which may be an embedded
    /// region's close-tag limit), emitting with `lang`.
    pub(crate) fn scan_region(
        &self,
        cur: &mut Cursor<'_>,
        out: &mut TokenListBuilder<'_>,
        lang: u8,
        resume: Option<CssSubstate>,
    ) -> Option<CssSubstate> {
        let mut ctx = match resume {
            None => Ctx::Selector,
            Some(CssSubstate::Property) => Ctx::Property,
            Some(CssSubstate::Value) => Ctx::Value,
            Some(sub @ (CssSubstate::CommentSelector
            | CssSubstate::CommentProperty
            | CssSubstate::CommentValue)) => {
                let start = cur.pos();
                if comments::scan_block_comment(cur, out, start, lang) {
                    return Some(sub);
                }
                match sub {
                    CssSubstate::CommentSelector => Ctx::Selector,
                    CssSubstate::CommentProperty => Ctx::Property,
                    _ => Ctx::Value,
                }
            }
        };
        while !cur.is_eol() {
            let start = cur.pos();
            // Rules shared by every context.
            match cur.current() {
                b' ' | b'\t' => {
                    cur.eat_whitespace();
                    out.push(start, cur.pos(), TokenType::Whitespace, lang);
                    continue;
                }
                b'/' if cur.peek() == b'*' => {
                    cur.advance_n(2);
                    if comments::scan_block_comment(cur, out, start, lang) {
                        return Some(ctx.comment_substate());
                    }
                    continue;
                }
                b'"' | b'\'' => {
                    let quote = cur.current();
                    cur.advance();
                    scan_css_string(cur, out, start, quote, lang);
                    continue;
                }
                b'{' => {
                    cur.advance();
                    out.push(start, cur.pos(), TokenType::Separator, lang);
                    ctx = Ctx::Property;
                    continue;
                }
                b'}' => {
                    cur.advance();
                    out.push(start, cur.pos(), TokenType::Separator, lang);
                    ctx = Ctx::Selector;
                    continue;
                }
                _ => {}
            }
            match ctx {
                Ctx::Selector => scan_selector_token(cur, out, start, lang),
                Ctx::Property => {
                    if cur.current() == b':' {
                        cur.advance();
                        out.push(start, cur.pos(), TokenType::Operator, lang);
                        ctx = Ctx::Value;
                    } else {
                        scan_property_token(cur, out, start, lang);
                    }
                }
                Ctx::Value => {
                    if cur.current() == b';' {
                        cur.advance();
                        out.push(start, cur.pos(), TokenType::Separator, lang);
                        ctx = Ctx::Property;
                    } else {
                        scan_value_token(cur, out, start, lang);
                    }
                }
            }
        }
        ctx.suspend()
    }
}

impl TokenScanner for CssScanner {
    fn scan_line<'s>(
        &mut self,
        line: &'s str,
        incoming_state: i32,
        line_start_document_offset: u32,
    ) -> TokenList<'s> {
        let buf = LineBuffer::new(line);
        let mut cur = buf.cursor();
        let mut out = TokenListBuilder::new(line, line_start_document_offset);

        let resume = CssSubstate::decode(incoming_state);
        if incoming_state < 0 && resume.is_none() {
            trace!(incoming_state, "unrecognized incoming state, scanning from the default state");
        }
        let suspended = self.scan_region(&mut cur, &mut out, LANG, resume);
        out.finish(suspended.map_or(0, CssSubstate::encode))
    }

    fn closest_standard_type(&self, internal_code: i32) -> TokenType {
        match CssSubstate::decode(internal_code) {
            Some(sub) => sub.closest_standard_type(),
            None => TokenType::from_code(internal_code).unwrap_or(TokenType::Null),
        }
    }

    fn line_comment_markers(
        &self,
        _language_index: u8,
    ) -> (Option<&'static str>, Option<&'static str>) {
        (Some("/*"), Some("*/"))
    }

    fn curly_braces_denote_code_blocks(&self, _language_index: u8) -> bool {
        true
    }

    fn is_identifier_char(&self, _language_index: u8, ch: char) -> bool {
        ch.is_alphanumeric() || ch == '-' || ch == '_'
    }

    fn config(&self) -> &ScanConfig {
        &self.config
    }

    fn set_config(&mut self, config: ScanConfig) {
        self.config = config;
    }
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b >= 0x80
}

fn scan_selector_token(cur: &mut Cursor<'_>, out: &mut TokenListBuilder<'_>, start: u32, lang: u8) {
    match cur.current() {
        b'.' | b'#' if is_name_byte(cur.peek()) => {
            // Class or id selector, marker included.
            cur.advance();
            cur.eat_while(is_name_byte);
            out.push(start, cur.pos(), TokenType::Variable, lang);
        }
        b':' if is_name_byte(cur.peek()) || cur.peek() == b':' => {
            // Pseudo-class/element.
            cur.advance();
            if cur.current() == b':' {
                cur.advance();
            }
            cur.eat_while(is_name_byte);
            out.push(start, cur.pos(), TokenType::Variable, lang);
        }
        b'@' if is_name_byte(cur.peek()) => {
            cur.advance();
            cur.eat_while(is_name_byte);
            out.push(start, cur.pos(), TokenType::Preprocessor, lang);
        }
        b',' | b'(' | b')' | b'[' | b']' => {
            cur.advance();
            out.push(start, cur.pos(), TokenType::Separator, lang);
        }
        b'*' | b'>' | b'+' | b'~' | b'=' | b'|' | b'^' | b'$' => {
            cur.advance();
            out.push(start, cur.pos(), TokenType::Operator, lang);
        }
        b if is_name_byte(b) => {
            cur.eat_while(is_name_byte);
            out.push(start, cur.pos(), TokenType::DataType, lang);
        }
        _ => {
            cur.advance_char();
            out.push(start, cur.pos(), TokenType::ErrorIdentifier, lang);
        }
    }
}

fn scan_property_token(cur: &mut Cursor<'_>, out: &mut TokenListBuilder<'_>, start: u32, lang: u8) {
    match cur.current() {
        b';' => {
            cur.advance();
            out.push(start, cur.pos(), TokenType::Separator, lang);
        }
        b if is_name_byte(b) => {
            cur.eat_while(is_name_byte);
            let text = out.line().get(start as usize..cur.pos() as usize).unwrap_or("");
            let ty = if known_properties().contains(text) {
                TokenType::ReservedWord
            } else {
                TokenType::Identifier
            };
            out.push(start, cur.pos(), ty, lang);
        }
        _ => {
            cur.advance_char();
            out.push(start, cur.pos(), TokenType::ErrorIdentifier, lang);
        }
    }
}

fn scan_value_token(cur: &mut Cursor<'_>, out: &mut TokenListBuilder<'_>, start: u32, lang: u8) {
    match cur.current() {
        b'#' if cur.peek().is_ascii_hexdigit() => {
            cur.advance();
            cur.eat_while(|b| b.is_ascii_hexdigit());
            out.push(start, cur.pos(), TokenType::LiteralNumberHexadecimal, lang);
        }
        b'!' if cur.peek().is_ascii_alphabetic() => {
            // `!important`
            cur.advance();
            cur.eat_while(|b| b.is_ascii_alphabetic());
            out.push(start, cur.pos(), TokenType::Annotation, lang);
        }
        b'0'..=b'9' => scan_dimension(cur, out, start, lang),
        b'.' if cur.peek().is_ascii_digit() => scan_dimension(cur, out, start, lang),
        b',' | b'(' | b')' => {
            cur.advance();
            out.push(start, cur.pos(), TokenType::Separator, lang);
        }
        b'*' | b'+' | b'-' | b'/' | b'=' | b':' => {
            cur.advance();
            out.push(start, cur.pos(), TokenType::Operator, lang);
        }
        b if is_name_byte(b) => {
            cur.eat_while(is_name_byte);
            let ty = if cur.current() == b'(' {
                TokenType::Function
            } else {
                TokenType::Identifier
            };
            out.push(start, cur.pos(), ty, lang);
        }
        _ => {
            cur.advance_char();
            out.push(start, cur.pos(), TokenType::ErrorIdentifier, lang);
        }
    }
}

/// A number with its unit (`12px`, `1.5em`, `100%`) as one token.
fn scan_dimension(cur: &mut Cursor<'_>, out: &mut TokenListBuilder<'_>, start: u32, lang: u8) {
    let mut float = false;
    cur.eat_while(|b| b.is_ascii_digit());
    if cur.current() == b'.' && cur.peek().is_ascii_digit() {
        float = true;
        cur.advance();
        cur.eat_while(|b| b.is_ascii_digit());
    }
    cur.eat_while(|b| b.is_ascii_alphabetic() || b == b'%');
    let ty = if float {
        TokenType::LiteralNumberFloat
    } else {
        TokenType::LiteralNumberDecimalInt
    };
    out.push(start, cur.pos(), ty, lang);
}

/// A string literal; CSS strings do not continue across lines here, an
/// unterminated one is classified as an error and the context is kept.
fn scan_css_string(
    cur: &mut Cursor<'_>,
    out: &mut TokenListBuilder<'_>,
    start: u32,
    quote: u8,
    lang: u8,
) {
    loop {
        match cur.find_byte2(quote, b'\\') {
            None => {
                cur.seek_eol();
                out.push(start, cur.pos(), TokenType::ErrorStringDouble, lang);
                return;
            }
            Some(rel) => {
                cur.advance_n(rel);
                if cur.current() == quote {
                    cur.advance();
                    push_with_hyperlink(out, start, cur.pos(), TokenType::LiteralStringDouble, lang);
                    return;
                }
                // Backslash escapes the next character, closing quote included.
                cur.advance();
                if cur.is_eol() {
                    out.push(start, cur.pos(), TokenType::ErrorStringDouble, lang);
                    return;
                }
                cur.advance_char();
            }
        }
    }
}

/// Property names recognized for the reserved-word paint class.
fn known_properties() -> &'static FxHashSet<&'static str> {
    static PROPERTIES: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    PROPERTIES.get_or_init(|| {
        [
            "align-items",
            "animation",
            "background",
            "background-color",
            "background-image",
            "background-position",
            "background-repeat",
            "background-size",
            "border",
            "border-bottom",
            "border-collapse",
            "border-color",
            "border-left",
            "border-radius",
            "border-right",
            "border-style",
            "border-top",
            "border-width",
            "bottom",
            "box-shadow",
            "box-sizing",
            "clear",
            "color",
            "content",
            "cursor",
            "display",
            "flex",
            "flex-direction",
            "flex-wrap",
            "float",
            "font",
            "font-family",
            "font-size",
            "font-style",
            "font-weight",
            "gap",
            "grid",
            "height",
            "justify-content",
            "left",
            "letter-spacing",
            "line-height",
            "list-style",
            "margin",
            "margin-bottom",
            "margin-left",
            "margin-right",
            "margin-top",
            "max-height",
            "max-width",
            "min-height",
            "min-width",
            "opacity",
            "outline",
            "overflow",
            "overflow-x",
            "overflow-y",
            "padding",
            "padding-bottom",
            "padding-left",
            "padding-right",
            "padding-top",
            "position",
            "right",
            "text-align",
            "text-decoration",
            "text-transform",
            "top",
            "transform",
            "transition",
            "vertical-align",
            "visibility",
            "white-space",
            "width",
            "z-index",
        ]
        .into_iter()
        .collect()
    })
}
