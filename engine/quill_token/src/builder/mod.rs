//! Shared accumulator scanners emit classified spans into.

use crate::token::TokenVec;
use crate::{Token, TokenList, TokenType};

/// Builds the token list for one line as the scanner emits spans.
///
/// Spans must be emitted left-to-right and non-overlapping; zero-length
/// spans are suppressed (the mandatory terminal sentinel is appended by
/// [`finish`](Self::finish)). Offsets are byte offsets into the line and
/// must fall on character boundaries — scanners only ever cut at ASCII
/// structure bytes or whole-character advances, so this holds by
/// construction.
#[derive(Debug)]
pub struct TokenListBuilder<'s> {
    line: &'s str,
    line_document_offset: u32,
    tokens: TokenVec<'s>,
}

impl<'s> TokenListBuilder<'s> {
    /// Start building tokens for `line`, whose first byte sits at
    /// `line_document_offset` within the whole document.
    pub fn new(line: &'s str, line_document_offset: u32) -> Self {
        Self {
            line,
            line_document_offset,
            tokens: TokenVec::new(),
        }
    }

    /// The line under construction.
    pub fn line(&self) -> &'s str {
        self.line
    }

    /// Emit one classified span. Zero-length spans are dropped.
    pub fn push(&mut self, start: u32, end: u32, ty: TokenType, language_index: u8) {
        self.push_raw(start, end, ty, language_index, false);
    }

    /// Emit a URL-shaped sub-span: same type as its enclosing token, flagged
    /// as a hyperlink.
    pub fn push_hyperlink(&mut self, start: u32, end: u32, ty: TokenType, language_index: u8) {
        self.push_raw(start, end, ty, language_index, true);
    }

    fn push_raw(&mut self, start: u32, end: u32, ty: TokenType, language_index: u8, link: bool) {
        if start >= end {
            return;
        }
        let lexeme = self.slice(start, end);
        self.tokens.push(Token::new(
            lexeme,
            ty.code(),
            start,
            self.line_document_offset + start,
            language_index,
            link,
        ));
    }

    /// Last emitted token, if any.
    pub fn last(&self) -> Option<&Token<'s>> {
        self.tokens.last()
    }

    /// Last emitted token that is neither whitespace nor a comment.
    ///
    /// This is the lookbehind the regex-vs-division rule consults.
    pub fn last_significant(&self) -> Option<&Token<'s>> {
        self.tokens
            .iter()
            .rev()
            .find(|t| !t.is_whitespace() && !t.token_type().is_some_and(TokenType::is_comment))
    }

    /// Number of tokens emitted so far.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// `true` when nothing has been emitted yet.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Finish the line, appending the zero-length terminal sentinel.
    ///
    /// `end_state` is the outgoing lexical state: `0` for the default state,
    /// a negative internal code for a suspended construct. The sentinel's
    /// type code is that internal code when suspended, `TokenType::Null`
    /// otherwise — so an empty line scanned from a suspended state yields
    /// exactly one zero-length token carrying the incoming state.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "scanners reject lines longer than u32::MAX upstream"
    )]
    pub fn finish(mut self, end_state: i32) -> TokenList<'s> {
        let sentinel_code = if end_state < 0 {
            end_state
        } else {
            TokenType::Null.code()
        };
        let at = self.line.len() as u32;
        self.tokens.push(Token::new(
            "",
            sentinel_code,
            at,
            self.line_document_offset + at,
            0,
            false,
        ));
        let end_state = if end_state < 0 { end_state } else { 0 };
        TokenList::new(self.tokens, end_state)
    }

    fn slice(&self, start: u32, end: u32) -> &'s str {
        debug_assert!(
            self.line.is_char_boundary(start as usize) && self.line.is_char_boundary(end as usize),
            "span {start}..{end} not on char boundaries"
        );
        self.line.get(start as usize..end as usize).unwrap_or("")
    }
}
