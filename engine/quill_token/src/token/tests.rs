use crate::{TokenListBuilder, TokenType};
use pretty_assertions::assert_eq;

fn single(line: &str, ty: TokenType) -> crate::TokenList<'_> {
    let mut b = TokenListBuilder::new(line, 0);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "test lines are short"
    )]
    b.push(0, line.len() as u32, ty, 0);
    b.finish(0)
}

#[test]
fn lexeme_is_a_slice_of_the_line() {
    let line = "let x";
    let mut b = TokenListBuilder::new(line, 10);
    b.push(0, 3, TokenType::ReservedWord, 0);
    b.push(3, 4, TokenType::Whitespace, 0);
    b.push(4, 5, TokenType::Identifier, 0);
    let list = b.finish(0);

    let head = list.head().copied();
    assert!(head.is_some());
    if let Some(tok) = head {
        assert_eq!(tok.lexeme(), "let");
        assert_eq!(tok.start(), 0);
        assert_eq!(tok.end(), 3);
        assert_eq!(tok.document_offset(), 10);
        assert_eq!(tok.token_type(), Some(TokenType::ReservedWord));
    }
}

#[test]
fn is_matches_type_and_lexeme() {
    let list = single("for", TokenType::ReservedWord);
    let tok = list.iter().next();
    assert!(tok.is_some_and(|t| t.is(TokenType::ReservedWord, "for")));
    assert!(!tok.is_some_and(|t| t.is(TokenType::Identifier, "for")));
    assert!(!tok.is_some_and(|t| t.is(TokenType::ReservedWord, "fo")));
}

#[test]
fn is_single_char() {
    let list = single("{", TokenType::Separator);
    let tok = list.head();
    assert!(tok.is_some_and(|t| t.is_single_char(TokenType::Separator, '{')));
    assert!(!tok.is_some_and(|t| t.is_single_char(TokenType::Separator, '}')));

    let multi = single("{{", TokenType::Separator);
    assert!(!multi
        .head()
        .is_some_and(|t| t.is_single_char(TokenType::Separator, '{')));
}

#[test]
fn terminal_sentinel_is_zero_length_and_not_paintable() {
    let list = single("x", TokenType::Identifier);
    assert_eq!(list.len(), 2);
    let sentinel = list.get(1);
    assert!(sentinel.is_some_and(|t| t.is_terminal()));
    assert!(sentinel.is_some_and(|t| !t.is_paintable()));
    assert!(sentinel.is_some_and(|t| t.length() == 0));
    assert!(sentinel.is_some_and(|t| t.type_code() == TokenType::Null.code()));
}

#[test]
fn paintable_iterator_skips_sentinel() {
    let mut b = TokenListBuilder::new("ab", 0);
    b.push(0, 1, TokenType::Identifier, 0);
    b.push(1, 2, TokenType::Identifier, 0);
    let list = b.finish(0);
    assert_eq!(list.paintable().count(), 2);
    assert_eq!(list.len(), 3);
}

#[test]
fn text_reconstructs_the_line() {
    let line = "a = 1;";
    let mut b = TokenListBuilder::new(line, 0);
    b.push(0, 1, TokenType::Identifier, 0);
    b.push(1, 2, TokenType::Whitespace, 0);
    b.push(2, 3, TokenType::Operator, 0);
    b.push(3, 4, TokenType::Whitespace, 0);
    b.push(4, 5, TokenType::LiteralNumberDecimalInt, 0);
    b.push(5, 6, TokenType::Separator, 0);
    assert_eq!(b.finish(0).text(), line);
}

#[test]
fn last_paintable_ignores_sentinel() {
    let mut b = TokenListBuilder::new("a ", 0);
    b.push(0, 1, TokenType::Identifier, 0);
    b.push(1, 2, TokenType::Whitespace, 0);
    let list = b.finish(0);
    assert!(list
        .last_paintable()
        .is_some_and(|t| t.is(TokenType::Whitespace, " ")));
}

#[test]
fn language_index_and_hyperlink_flags_carry_through() {
    let line = "x https://a.b";
    let mut b = TokenListBuilder::new(line, 0);
    b.push(0, 2, TokenType::CommentEol, 1);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "test lines are short"
    )]
    b.push_hyperlink(2, line.len() as u32, TokenType::CommentEol, 1);
    let list = b.finish(0);
    let url = list.get(1);
    assert!(url.is_some_and(|t| t.is_hyperlink()));
    assert!(url.is_some_and(|t| t.language_index() == 1));
    assert!(list.head().is_some_and(|t| !t.is_hyperlink()));
}
