//! Borrowed token and token list views over one line of source text.
//!
//! Tokens reference byte ranges of the line they were scanned from; they are
//! rebuilt wholesale every time the line is re-lexed, never mutated in place.
//! The forward-linked-list contract of the engine is realized as a `Vec`
//! arena with index traversal — no per-node allocation, same iteration
//! order.

use smallvec::SmallVec;

use crate::TokenType;

/// Inline token storage; typical lines stay under a dozen tokens.
pub(crate) type TokenVec<'s> = SmallVec<[Token<'s>; 8]>;

/// One classified lexeme occurrence on a line.
///
/// The final token of every list is a zero-length *terminal sentinel*: its
/// `type_code` is `TokenType::Null` when the line ended in the default state,
/// or the negative internal state code of the suspended construct the line
/// ended inside. A sentinel on an otherwise empty line carries the incoming
/// state unchanged — the "still waiting" signal for wholly-suspended lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'s> {
    lexeme: &'s str,
    type_code: i32,
    start: u32,
    document_offset: u32,
    language_index: u8,
    hyperlink: bool,
}

impl<'s> Token<'s> {
    pub(crate) fn new(
        lexeme: &'s str,
        type_code: i32,
        start: u32,
        document_offset: u32,
        language_index: u8,
        hyperlink: bool,
    ) -> Self {
        Self {
            lexeme,
            type_code,
            start,
            document_offset,
            language_index,
            hyperlink,
        }
    }

    /// The token's text, as a slice of the scanned line.
    #[inline]
    pub fn lexeme(&self) -> &'s str {
        self.lexeme
    }

    /// The raw type code: a paintable [`TokenType`] discriminant, or a
    /// negative internal state code (terminal sentinel only).
    #[inline]
    pub fn type_code(&self) -> i32 {
        self.type_code
    }

    /// The standard token type, if the code is in the paintable taxonomy.
    #[inline]
    pub fn token_type(&self) -> Option<TokenType> {
        TokenType::from_code(self.type_code)
    }

    /// Byte offset of the lexeme start within the line.
    #[inline]
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Byte offset one past the lexeme end within the line.
    #[inline]
    pub fn end(&self) -> u32 {
        self.start + self.length()
    }

    /// Absolute byte offset of the lexeme start within the document.
    #[inline]
    pub fn document_offset(&self) -> u32 {
        self.document_offset
    }

    /// Which sub-grammar this token belongs to (0 = host language).
    #[inline]
    pub fn language_index(&self) -> u8 {
        self.language_index
    }

    /// `true` only for a URL-shaped sub-span carved out of a comment or
    /// string token.
    #[inline]
    pub fn is_hyperlink(&self) -> bool {
        self.hyperlink
    }

    /// Lexeme length in bytes.
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "lexeme is a slice of a line already addressed by u32 offsets"
    )]
    pub fn length(&self) -> u32 {
        self.lexeme.len() as u32
    }

    /// `true` when this token would be painted (positive type code).
    #[inline]
    pub fn is_paintable(&self) -> bool {
        self.type_code > 0
    }

    /// `true` for the zero-length terminal sentinel.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.type_code <= 0
    }

    /// Exact type-and-lexeme match.
    pub fn is(&self, ty: TokenType, lexeme: &str) -> bool {
        self.type_code == ty.code() && self.lexeme == lexeme
    }

    /// Exact match of a single-character token.
    pub fn is_single_char(&self, ty: TokenType, ch: char) -> bool {
        self.type_code == ty.code() && {
            let mut chars = self.lexeme.chars();
            chars.next() == Some(ch) && chars.next().is_none()
        }
    }

    /// `true` for a whitespace token.
    pub fn is_whitespace(&self) -> bool {
        self.type_code == TokenType::Whitespace.code()
    }
}

/// The tokens of one scanned line, in left-to-right order, terminal sentinel
/// last.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenList<'s> {
    tokens: TokenVec<'s>,
    end_state: i32,
}

impl<'s> TokenList<'s> {
    pub(crate) fn new(tokens: TokenVec<'s>, end_state: i32) -> Self {
        Self { tokens, end_state }
    }

    /// First token of the line. This is the terminal sentinel itself when the
    /// line produced no paintable tokens.
    pub fn head(&self) -> Option<&Token<'s>> {
        self.tokens.first()
    }

    /// Token at position `i`, sentinel included.
    pub fn get(&self, i: usize) -> Option<&Token<'s>> {
        self.tokens.get(i)
    }

    /// Number of tokens, terminal sentinel included.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// A list always contains at least the terminal sentinel.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate all tokens, terminal sentinel included.
    pub fn iter(&self) -> std::slice::Iter<'_, Token<'s>> {
        self.tokens.iter()
    }

    /// Iterate only paintable tokens (skips the terminal sentinel).
    pub fn paintable(&self) -> impl Iterator<Item = &Token<'s>> {
        self.tokens.iter().filter(|t| t.is_paintable())
    }

    /// The lexical state to hand to the next line: `TokenType::Null`'s code
    /// (0) for the default state, or a negative internal code for a suspended
    /// multi-line construct.
    pub fn end_state(&self) -> i32 {
        self.end_state
    }

    /// Last paintable token, if any.
    pub fn last_paintable(&self) -> Option<&Token<'s>> {
        self.tokens.iter().rev().find(|t| t.is_paintable())
    }

    /// Reconstruct the scanned text by concatenating paintable lexemes.
    ///
    /// Scanners guarantee this equals the input line exactly — the
    /// total-coverage contract.
    pub fn text(&self) -> String {
        self.tokens.iter().map(Token::lexeme).collect()
    }
}

impl<'a, 's> IntoIterator for &'a TokenList<'s> {
    type Item = &'a Token<'s>;
    type IntoIter = std::slice::Iter<'a, Token<'s>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests;
