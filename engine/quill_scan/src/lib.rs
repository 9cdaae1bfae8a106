//! Per-language line scanners for the Quill highlighting engine.
//!
//! Each scanner converts one line of source text plus an incoming lexical
//! state into a [`TokenList`] plus an outgoing state, so an editor can
//! re-lex only edited lines while multi-line constructs (open block
//! comments, open strings, embedded `<script>`/`<style>` regions) carry
//! correctly across line boundaries.
//!
//! ```
//! use quill_scan::{create_scanner, Language, ScanConfig};
//!
//! let mut scanner = create_scanner(Language::JavaScript, ScanConfig::default());
//! let first = scanner.scan_line("/* spans", 0, 0);
//! assert!(first.end_state() < 0); // suspended inside the comment
//! let second = scanner.scan_line(" lines */ let x;", first.end_state(), 8);
//! assert_eq!(second.end_state(), 0);
//! ```
//!
//! Scanning never fails: malformed input is *classified* (`Error*` token
//! types), not rejected, and an unrecognized incoming state falls back to
//! the default start state.

mod c_family;
mod comments;
mod config;
mod css;
mod cursor;
mod escape;
mod html;
mod hyperlink;
mod javascript;
mod line_buffer;
mod makefile;
mod plain;
mod shell;
mod state;

pub use c_family::{CDialect, CFamilyScanner};
pub use config::{JsVersion, ParseJsVersionError, ScanConfig};
pub use css::CssScanner;
pub use html::HtmlScanner;
pub use javascript::JavaScriptScanner;
pub use makefile::MakefileScanner;
pub use plain::PlainScanner;
pub use shell::ShellScanner;
pub use state::LANG_STRIDE;

pub use quill_token::{Token, TokenList, TokenListBuilder, TokenType};

use tracing::trace;

/// The languages the factory can build a scanner for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    C,
    Java,
    JavaScript,
    Css,
    Html,
    /// HTML composite with the Handlebars `{{ }}` template sub-grammar
    /// enabled.
    Handlebars,
    Shell,
    Makefile,
    /// Whitespace/word fallback for unknown file types.
    Plain,
}

/// One per-language tokenizer.
///
/// A scanner is cheap to construct and owns nothing but its configuration;
/// all lexical state travels through the `incoming_state`/`end_state`
/// integers, so the same instance can scan lines of any number of documents
/// in any order.
pub trait TokenScanner {
    /// Tokenize one line.
    ///
    /// `incoming_state` is the previous line's [`TokenList::end_state`] (use
    /// `0` for the first line of a document); `line_start_document_offset`
    /// is the byte offset of the line's first character in the whole
    /// document. The returned list covers every byte of `line` and carries
    /// the outgoing state for the next line.
    fn scan_line<'s>(
        &mut self,
        line: &'s str,
        incoming_state: i32,
        line_start_document_offset: u32,
    ) -> TokenList<'s>;

    /// Map an internal (negative) state code to the standard token type it
    /// paints as while the construct is still open — an unterminated string
    /// should look like a string while being edited.
    fn closest_standard_type(&self, internal_code: i32) -> TokenType;

    /// Per-sub-grammar line comment markers: `(start, Some(end))` for
    /// range-style comments (`<!--` … `-->`), `(start, None)` for
    /// to-end-of-line comments, `(None, None)` when the sub-grammar has no
    /// line comment.
    fn line_comment_markers(
        &self,
        language_index: u8,
    ) -> (Option<&'static str>, Option<&'static str>);

    /// Whether `{`/`}` delimit code blocks in the given sub-grammar, for the
    /// editor's auto-indent logic.
    fn curly_braces_denote_code_blocks(&self, language_index: u8) -> bool {
        let _ = language_index;
        false
    }

    /// Whether `ch` can be part of an identifier in the given sub-grammar.
    fn is_identifier_char(&self, language_index: u8, ch: char) -> bool {
        let _ = language_index;
        ch.is_alphanumeric() || ch == '_'
    }

    /// Whether tokens of this type should be marked when the caret sits on
    /// an identical lexeme elsewhere.
    fn mark_occurrences(&self, token_type: TokenType) -> bool {
        matches!(
            token_type,
            TokenType::Identifier | TokenType::Function | TokenType::Variable
        )
    }

    /// Whether the editor should indent the next line one level deeper after
    /// `token` (a single-character `{` or `(` separator in an
    /// indent-sensitive sub-grammar).
    fn should_indent_next_line_after(&self, token: Option<&Token<'_>>) -> bool {
        token.is_some_and(|t| {
            self.curly_braces_denote_code_blocks(t.language_index())
                && (t.is_single_char(TokenType::Separator, '{')
                    || t.is_single_char(TokenType::Separator, '('))
        })
    }

    /// The scanner's configuration.
    fn config(&self) -> &ScanConfig;

    /// Replace the configuration. Affects subsequent scans only.
    fn set_config(&mut self, config: ScanConfig);
}

/// Build the scanner for `language`.
pub fn create_scanner(language: Language, config: ScanConfig) -> Box<dyn TokenScanner> {
    trace!(?language, "creating scanner");
    match language {
        Language::C => Box::new(CFamilyScanner::new(CDialect::C, config)),
        Language::Java => Box::new(CFamilyScanner::new(CDialect::Java, config)),
        Language::JavaScript => Box::new(JavaScriptScanner::new(config)),
        Language::Css => Box::new(CssScanner::new(config)),
        Language::Html => Box::new(HtmlScanner::new(false, config)),
        Language::Handlebars => Box::new(HtmlScanner::new(true, config)),
        Language::Shell => Box::new(ShellScanner::new(config)),
        Language::Makefile => Box::new(MakefileScanner::new(config)),
        Language::Plain => Box::new(PlainScanner::new(config)),
    }
}
