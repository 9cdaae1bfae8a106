use super::ShellScanner;
use crate::{ScanConfig, TokenList, TokenScanner, TokenType};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn scan(line: &str, state: i32) -> TokenList<'_> {
    let mut scanner = ShellScanner::new(ScanConfig::default());
    scanner.scan_line(line, state, 0)
}

fn sh(line: &str) -> TokenList<'_> {
    scan(line, 0)
}

#[test]
fn keywords_builtins_and_words() {
    let list = sh("if cd /tmp/logs");
    let toks: Vec<_> = list.paintable().collect();
    assert!(toks[0].is(TokenType::ReservedWord, "if"));
    assert!(toks[2].is(TokenType::Function, "cd"));
    assert!(toks[4].is(TokenType::Identifier, "/tmp/logs"));
    assert_eq!(list.end_state(), 0);
}

#[test]
fn comment_runs_to_eol_with_hyperlink() {
    let list = sh("make # see https://example.com/ci");
    let toks: Vec<_> = list.paintable().collect();
    assert!(toks[0].is(TokenType::Identifier, "make"));
    let link = toks.iter().find(|t| t.is_hyperlink()).unwrap();
    assert!(link.is(TokenType::CommentEol, "https://example.com/ci"));
}

#[test]
fn variables() {
    let list = sh("echo $HOME ${PATH} $1 $? $$");
    let vars: Vec<_> = list
        .paintable()
        .filter(|t| t.token_type() == Some(TokenType::Variable))
        .map(|t| t.lexeme())
        .collect();
    assert_eq!(vars, vec!["$HOME", "${PATH}", "$1", "$?", "$$"]);
}

#[test]
fn lone_dollar_is_plain_text() {
    let list = sh("a $ b");
    let toks: Vec<_> = list.paintable().collect();
    assert!(toks[2].is(TokenType::Identifier, "$"));
}

#[test]
fn unclosed_brace_variable_is_an_error() {
    let list = sh("echo ${OOPS");
    assert!(list
        .paintable()
        .any(|t| t.is(TokenType::ErrorIdentifier, "${OOPS")));
    assert_eq!(list.end_state(), 0);
}

#[test]
fn single_quoted_strings_stay_on_one_line() {
    let list = sh("'literal $x'");
    assert!(list.head().unwrap().is(TokenType::LiteralChar, "'literal $x'"));

    let list = sh("'unterminated");
    assert!(list.head().unwrap().is(TokenType::ErrorChar, "'unterminated"));
    assert_eq!(list.end_state(), 0);
}

#[test]
fn double_quoted_string_continues_across_lines() {
    let first = sh("msg=\"hello");
    let state = first.end_state();
    assert!(state < 0);
    assert!(first
        .paintable()
        .any(|t| t.is(TokenType::LiteralStringDouble, "\"hello")));

    let blank = scan("", state);
    assert_eq!(blank.len(), 1);
    assert_eq!(blank.head().unwrap().type_code(), state);
    assert_eq!(blank.end_state(), state);

    let last = scan("world\" more", state);
    let toks: Vec<_> = last.paintable().collect();
    assert!(toks[0].is(TokenType::LiteralStringDouble, "world\""));
    assert!(toks[2].is(TokenType::Identifier, "more"));
    assert_eq!(last.end_state(), 0);
}

#[test]
fn escaped_quote_does_not_close_the_string() {
    let list = sh("\"a\\\"b\"");
    assert!(list.head().unwrap().is(TokenType::LiteralStringDouble, "\"a\\\"b\""));
    assert_eq!(list.end_state(), 0);
}

#[test]
fn backquote_command_substitution() {
    let list = sh("now=`date`");
    assert!(list
        .paintable()
        .any(|t| t.is(TokenType::LiteralBackquote, "`date`")));

    let list = sh("`unclosed");
    assert!(list.head().unwrap().is(TokenType::LiteralBackquote, "`unclosed"));
    assert_eq!(list.end_state(), 0);
}

#[test]
fn pipes_and_redirection() {
    let list = sh("cat a | sort > b");
    let ops: Vec<_> = list
        .paintable()
        .filter(|t| t.token_type() == Some(TokenType::Operator))
        .map(|t| t.lexeme())
        .collect();
    assert_eq!(ops, vec!["|", ">"]);
}

#[test]
fn numbers() {
    let list = sh("sleep 30");
    assert!(list
        .paintable()
        .any(|t| t.is(TokenType::LiteralNumberDecimalInt, "30")));
}

#[test]
fn unknown_incoming_state_scans_from_default() {
    let normal = sh("echo hi");
    let mut scanner = ShellScanner::new(ScanConfig::default());
    assert_eq!(scanner.scan_line("echo hi", 99, 0), normal);
    assert_eq!(scanner.scan_line("echo hi", -9999, 0), normal);
}

#[test]
fn closest_standard_types() {
    let mut scanner = ShellScanner::new(ScanConfig::default());
    let open = scanner.scan_line("\"open", 0, 0).end_state();
    assert_eq!(
        scanner.closest_standard_type(open),
        TokenType::LiteralStringDouble
    );
}

#[test]
fn editor_metadata() {
    let scanner = ShellScanner::new(ScanConfig::default());
    assert_eq!(scanner.line_comment_markers(0), (Some("#"), None));
    assert!(!scanner.curly_braces_denote_code_blocks(0));
    assert!(scanner.is_identifier_char(0, '-'));
}

proptest! {
    #[test]
    fn spans_reconstruct_the_line(line in "[ -~]{0,60}", state in -2i32..1) {
        let list = scan(&line, state);
        prop_assert_eq!(list.text(), line.clone());
    }

    #[test]
    fn rescan_is_idempotent(line in "[ -~]{0,60}", state in -110i32..10) {
        let a = scan(&line, state);
        let b = scan(&line, state);
        prop_assert_eq!(a, b);
    }
}
