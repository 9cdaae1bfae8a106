use super::find_url;
use pretty_assertions::assert_eq;
use quill_token::{TokenListBuilder, TokenType};

fn url_of(text: &str) -> Option<&str> {
    find_url(text).map(|(s, e)| &text[s as usize..e as usize])
}

#[test]
fn scheme_url_is_found() {
    assert_eq!(
        url_of("see https://www.google.com for details"),
        Some("https://www.google.com")
    );
}

#[test]
fn bare_www_is_found() {
    assert_eq!(url_of("visit www.example.org today"), Some("www.example.org"));
}

#[test]
fn ftp_and_custom_schemes() {
    assert_eq!(url_of("ftp://host/path"), Some("ftp://host/path"));
    assert_eq!(url_of("x-proto://a"), Some("x-proto://a"));
}

#[test]
fn single_letter_scheme_is_rejected() {
    assert_eq!(url_of("a://b"), None);
}

#[test]
fn www_inside_a_word_is_not_a_url() {
    assert_eq!(url_of("awww.that is sad"), None);
}

#[test]
fn trailing_sentence_punctuation_is_trimmed() {
    assert_eq!(url_of("go to https://a.example.com."), Some("https://a.example.com"));
    assert_eq!(url_of("(see www.example.com)"), Some("www.example.com"));
}

#[test]
fn url_stops_at_whitespace_and_quotes() {
    assert_eq!(url_of("https://a.b/c next"), Some("https://a.b/c"));
    assert_eq!(url_of("\"https://a.b\" etc"), Some("https://a.b"));
}

#[test]
fn no_url_in_plain_prose() {
    assert_eq!(url_of("nothing to see here"), None);
    assert_eq!(url_of(""), None);
}

#[test]
fn scheme_with_no_host_is_rejected() {
    assert_eq!(url_of("empty:// "), None);
}

#[test]
fn push_splits_span_into_three_tokens() {
    let line = "// see www.example.com now";
    let mut b = TokenListBuilder::new(line, 0);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "test lines are short"
    )]
    super::push_with_hyperlink(&mut b, 0, line.len() as u32, TokenType::CommentEol, 0);
    let list = b.finish(0);

    let toks: Vec<_> = list.paintable().collect();
    assert_eq!(toks.len(), 3);
    assert!(toks[0].is(TokenType::CommentEol, "// see "));
    assert!(!toks[0].is_hyperlink());
    assert!(toks[1].is(TokenType::CommentEol, "www.example.com"));
    assert!(toks[1].is_hyperlink());
    assert!(toks[2].is(TokenType::CommentEol, " now"));
    assert!(!toks[2].is_hyperlink());
}

#[test]
fn only_the_first_url_is_extracted() {
    // Pinned limitation: one URL per enclosing span.
    let line = "// www.first.com and www.second.com";
    let mut b = TokenListBuilder::new(line, 0);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "test lines are short"
    )]
    super::push_with_hyperlink(&mut b, 0, line.len() as u32, TokenType::CommentEol, 0);
    let list = b.finish(0);

    let links: Vec<_> = list.iter().filter(|t| t.is_hyperlink()).collect();
    assert_eq!(links.len(), 1);
    assert!(links[0].is(TokenType::CommentEol, "www.first.com"));
}

#[test]
fn span_without_url_stays_whole() {
    let line = "// plain comment";
    let mut b = TokenListBuilder::new(line, 0);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "test lines are short"
    )]
    super::push_with_hyperlink(&mut b, 0, line.len() as u32, TokenType::CommentEol, 0);
    let list = b.finish(0);
    assert_eq!(list.paintable().count(), 1);
}
