//! The closed token type taxonomy.
//!
//! Every paintable token a scanner can emit has a type from this enum.
//! Discriminants are stable, non-negative `i32` values so they can share the
//! cross-line state channel with negative internal scanner codes.

/// Semantic classification of one lexeme.
///
/// `Null` (discriminant 0) is the end-of-line sentinel and is never painted.
/// All other variants are paintable. Negative codes are *not* members of this
/// enum — they are internal scanner states, decoded per scanner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum TokenType {
    /// End-of-line sentinel. Zero-length, never painted.
    Null = 0,

    Identifier = 1,
    ReservedWord = 2,
    /// Secondary keyword class (flow-exit keywords such as `return`/`goto`
    /// in the C family).
    ReservedWord2 = 3,
    DataType = 4,
    Function = 5,

    LiteralBoolean = 6,
    LiteralChar = 7,
    LiteralStringDouble = 8,
    LiteralBackquote = 9,
    LiteralNumberDecimalInt = 10,
    LiteralNumberFloat = 11,
    LiteralNumberHexadecimal = 12,

    CommentEol = 13,
    CommentMultiline = 14,
    CommentDocumentation = 15,
    /// Doc-comment block/inline tag (`@param`, `{@link …}`).
    CommentKeyword = 16,
    /// Inline markup inside a doc comment (`<code>`).
    CommentMarkup = 17,

    Operator = 18,
    Separator = 19,
    Whitespace = 20,
    Variable = 21,
    Annotation = 22,
    Regex = 23,
    Preprocessor = 24,

    ErrorIdentifier = 25,
    ErrorNumberFormat = 26,
    ErrorChar = 27,
    ErrorStringDouble = 28,

    MarkupTagName = 29,
    MarkupTagDelimiter = 30,
    MarkupTagAttribute = 31,
    MarkupTagAttributeValue = 32,
    MarkupComment = 33,
    MarkupDtd = 34,
    MarkupProcessingInstruction = 35,
    MarkupEntityReference = 36,
    MarkupCdata = 37,
    MarkupCdataDelimiter = 38,
}

/// Number of defined token types (one past the highest discriminant).
pub(crate) const NUM_TOKEN_TYPES: i32 = 39;

impl TokenType {
    /// The raw `i32` code of this type.
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Decode a raw code back into a `TokenType`.
    ///
    /// Returns `None` for internal (negative) codes and for codes past the
    /// end of the taxonomy — callers treat both as "not a standard type".
    pub fn from_code(code: i32) -> Option<TokenType> {
        if !(0..NUM_TOKEN_TYPES).contains(&code) {
            return None;
        }
        Some(match code {
            0 => TokenType::Null,
            1 => TokenType::Identifier,
            2 => TokenType::ReservedWord,
            3 => TokenType::ReservedWord2,
            4 => TokenType::DataType,
            5 => TokenType::Function,
            6 => TokenType::LiteralBoolean,
            7 => TokenType::LiteralChar,
            8 => TokenType::LiteralStringDouble,
            9 => TokenType::LiteralBackquote,
            10 => TokenType::LiteralNumberDecimalInt,
            11 => TokenType::LiteralNumberFloat,
            12 => TokenType::LiteralNumberHexadecimal,
            13 => TokenType::CommentEol,
            14 => TokenType::CommentMultiline,
            15 => TokenType::CommentDocumentation,
            16 => TokenType::CommentKeyword,
            17 => TokenType::CommentMarkup,
            18 => TokenType::Operator,
            19 => TokenType::Separator,
            20 => TokenType::Whitespace,
            21 => TokenType::Variable,
            22 => TokenType::Annotation,
            23 => TokenType::Regex,
            24 => TokenType::Preprocessor,
            25 => TokenType::ErrorIdentifier,
            26 => TokenType::ErrorNumberFormat,
            27 => TokenType::ErrorChar,
            28 => TokenType::ErrorStringDouble,
            29 => TokenType::MarkupTagName,
            30 => TokenType::MarkupTagDelimiter,
            31 => TokenType::MarkupTagAttribute,
            32 => TokenType::MarkupTagAttributeValue,
            33 => TokenType::MarkupComment,
            34 => TokenType::MarkupDtd,
            35 => TokenType::MarkupProcessingInstruction,
            36 => TokenType::MarkupEntityReference,
            37 => TokenType::MarkupCdata,
            _ => TokenType::MarkupCdataDelimiter,
        })
    }

    /// `true` for every type except the `Null` sentinel.
    #[inline]
    pub fn is_paintable(self) -> bool {
        self != TokenType::Null
    }

    /// `true` for the comment family (EOL, block, doc, and doc sub-tokens).
    pub fn is_comment(self) -> bool {
        matches!(
            self,
            TokenType::CommentEol
                | TokenType::CommentMultiline
                | TokenType::CommentDocumentation
                | TokenType::CommentKeyword
                | TokenType::CommentMarkup
                | TokenType::MarkupComment
        )
    }

    /// `true` for the string/char literal family (including their error
    /// classifications — an invalid literal still reads as a literal).
    pub fn is_string_literal(self) -> bool {
        matches!(
            self,
            TokenType::LiteralChar
                | TokenType::LiteralStringDouble
                | TokenType::LiteralBackquote
                | TokenType::ErrorChar
                | TokenType::ErrorStringDouble
        )
    }

    /// `true` for the error classifications.
    pub fn is_error(self) -> bool {
        matches!(
            self,
            TokenType::ErrorIdentifier
                | TokenType::ErrorNumberFormat
                | TokenType::ErrorChar
                | TokenType::ErrorStringDouble
        )
    }

    /// `true` for the markup (tag-structured) family.
    pub fn is_markup(self) -> bool {
        self.code() >= TokenType::MarkupTagName.code()
            && self.code() <= TokenType::MarkupCdataDelimiter.code()
    }
}

#[cfg(test)]
mod tests;
