//! Whitespace/word fallback for file types without a dedicated scanner.
//! Stateless; every non-space run is one identifier token.

use tracing::trace;

use quill_token::{TokenList, TokenListBuilder, TokenType};

use crate::config::ScanConfig;
use crate::hyperlink::push_with_hyperlink;
use crate::line_buffer::LineBuffer;
use crate::TokenScanner;

const LANG: u8 = 0;

/// The plain-text scanner.
pub struct PlainScanner {
    config: ScanConfig,
}

impl PlainScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }
}

impl TokenScanner for PlainScanner {
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
            if matches!(cur.current(), b' ' | b'\t') {
                cur.eat_whitespace();
                out.push(start, cur.pos(), TokenType::Whitespace, LANG);
            } else {
                while !cur.is_eol() && !matches!(cur.current(), b' ' | b'\t') {
                    cur.advance_char();
                }
                // Bare URLs are linkable even in plain text.
                push_with_hyperlink(&mut out, start, cur.pos(), TokenType::Identifier, LANG);
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
        (None, None)
    }

    fn config(&self) -> &ScanConfig {
        &self.config
    }

    fn set_config(&mut self, config: ScanConfig) {
        self.config = config;
    }
}

#[cfg(test)]
mod tests {
    use super::PlainScanner;
    use crate::{ScanConfig, TokenList, TokenScanner, TokenType};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn plain(line: &str) -> TokenList<'_> {
        let mut scanner = PlainScanner::new(ScanConfig::default());
        scanner.scan_line(line, 0, 0)
    }

    #[test]
    fn words_and_whitespace() {
        let list = plain("two words  here");
        let toks: Vec<_> = list.paintable().collect();
        assert!(toks[0].is(TokenType::Identifier, "two"));
        assert!(toks[1].is(TokenType::Whitespace, " "));
        assert!(toks[2].is(TokenType::Identifier, "words"));
        assert!(toks[3].is(TokenType::Whitespace, "  "));
        assert!(toks[4].is(TokenType::Identifier, "here"));
        assert_eq!(list.end_state(), 0);
    }

    #[test]
    fn bare_urls_are_hyperlinks() {
        let list = plain("see https://example.com today");
        let link = list.iter().find(|t| t.is_hyperlink()).unwrap();
        assert!(link.is(TokenType::Identifier, "https://example.com"));
    }

    #[test]
    fn empty_line_is_just_the_sentinel() {
        let list = plain("");
        assert_eq!(list.len(), 1);
        assert!(list.paintable().next().is_none());
        assert_eq!(list.end_state(), 0);
    }

    #[test]
    fn any_incoming_state_is_the_default() {
        let normal = plain("x");
        let mut scanner = PlainScanner::new(ScanConfig::default());
        assert_eq!(scanner.scan_line("x", -5, 0), normal);
        assert_eq!(scanner.scan_line("x", 7, 0), normal);
    }

    #[test]
    fn editor_metadata() {
        let scanner = PlainScanner::new(ScanConfig::default());
        assert_eq!(scanner.line_comment_markers(0), (None, None));
        assert!(!scanner.curly_braces_denote_code_blocks(0));
    }

    proptest! {
        #[test]
        fn spans_reconstruct_the_line(line in "[ -~]{0,80}") {
            let list = plain(&line);
            prop_assert_eq!(list.text(), line.clone());
        }
    }
}
