use super::{TokenType, NUM_TOKEN_TYPES};
use pretty_assertions::assert_eq;

#[test]
fn code_round_trips_for_every_type() {
    for code in 0..NUM_TOKEN_TYPES {
        let ty = TokenType::from_code(code);
        assert!(ty.is_some(), "code {code} has no TokenType");
        if let Some(ty) = ty {
            assert_eq!(ty.code(), code);
        }
    }
}

#[test]
fn internal_codes_decode_to_none() {
    assert_eq!(TokenType::from_code(-1), None);
    assert_eq!(TokenType::from_code(-101), None);
    assert_eq!(TokenType::from_code(i32::MIN), None);
}

#[test]
fn out_of_range_codes_decode_to_none() {
    assert_eq!(TokenType::from_code(NUM_TOKEN_TYPES), None);
    assert_eq!(TokenType::from_code(i32::MAX), None);
}

#[test]
fn null_is_not_paintable() {
    assert!(!TokenType::Null.is_paintable());
    assert!(TokenType::Identifier.is_paintable());
    assert!(TokenType::MarkupCdataDelimiter.is_paintable());
}

#[test]
fn comment_family() {
    assert!(TokenType::CommentEol.is_comment());
    assert!(TokenType::CommentDocumentation.is_comment());
    assert!(TokenType::MarkupComment.is_comment());
    assert!(!TokenType::LiteralStringDouble.is_comment());
}

#[test]
fn string_family_includes_error_variants() {
    assert!(TokenType::LiteralStringDouble.is_string_literal());
    assert!(TokenType::ErrorChar.is_string_literal());
    assert!(!TokenType::CommentEol.is_string_literal());
}

#[test]
fn error_family() {
    assert!(TokenType::ErrorNumberFormat.is_error());
    assert!(!TokenType::LiteralNumberFloat.is_error());
}

#[test]
fn markup_family_is_contiguous() {
    assert!(TokenType::MarkupTagName.is_markup());
    assert!(TokenType::MarkupCdataDelimiter.is_markup());
    assert!(!TokenType::Annotation.is_markup());
}
