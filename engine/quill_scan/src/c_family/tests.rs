use super::{CDialect, CFamilyScanner};
use crate::{ScanConfig, TokenList, TokenScanner, TokenType};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn scan(dialect: CDialect, line: &str, state: i32) -> TokenList<'_> {
    let mut scanner = CFamilyScanner::new(dialect, ScanConfig::default());
    scanner.scan_line(line, state, 0)
}

fn java(line: &str) -> TokenList<'_> {
    scan(CDialect::Java, line, 0)
}

fn c(line: &str) -> TokenList<'_> {
    scan(CDialect::C, line, 0)
}

#[test]
fn simple_statement() {
    let list = java("int x = 42;");
    let toks: Vec<_> = list.paintable().collect();
    assert!(toks[0].is(TokenType::DataType, "int"));
    assert!(toks[1].is_whitespace());
    assert!(toks[2].is(TokenType::Identifier, "x"));
    assert!(toks[4].is(TokenType::Operator, "="));
    assert!(toks[6].is(TokenType::LiteralNumberDecimalInt, "42"));
    assert!(toks[7].is_single_char(TokenType::Separator, ';'));
    assert_eq!(list.end_state(), 0);
}

#[test]
fn whitespace_run_is_one_token() {
    let list = c("a \t b");
    let toks: Vec<_> = list.paintable().collect();
    assert_eq!(toks.len(), 3);
    assert!(toks[1].is(TokenType::Whitespace, " \t "));
}

#[test]
fn document_offsets_accumulate() {
    let mut scanner = CFamilyScanner::new(CDialect::Java, ScanConfig::default());
    let list = scanner.scan_line("x + y", 0, 120);
    let toks: Vec<_> = list.paintable().collect();
    assert_eq!(toks[0].document_offset(), 120);
    assert_eq!(toks[2].document_offset(), 122);
    assert_eq!(toks[4].document_offset(), 124);
}

#[test]
fn numeral_with_trailing_letters_is_one_error_token() {
    let list = java("42foo");
    let toks: Vec<_> = list.paintable().collect();
    assert_eq!(toks.len(), 1);
    assert!(toks[0].is(TokenType::ErrorNumberFormat, "42foo"));

    let list = java("0x1ffoo");
    let toks: Vec<_> = list.paintable().collect();
    assert_eq!(toks.len(), 1);
    assert!(toks[0].is(TokenType::ErrorNumberFormat, "0x1ffoo"));
}

#[test]
fn number_varieties() {
    assert!(java("0xFFL").head().unwrap().is(TokenType::LiteralNumberHexadecimal, "0xFFL"));
    assert!(java("0b1010").head().unwrap().is(TokenType::LiteralNumberHexadecimal, "0b1010"));
    assert!(java("3.14f").head().unwrap().is(TokenType::LiteralNumberFloat, "3.14f"));
    assert!(java("1e10").head().unwrap().is(TokenType::LiteralNumberFloat, "1e10"));
    assert!(java("2e-3").head().unwrap().is(TokenType::LiteralNumberFloat, "2e-3"));
    assert!(java(".5").head().unwrap().is(TokenType::LiteralNumberFloat, ".5"));
    assert!(java("100L").head().unwrap().is(TokenType::LiteralNumberDecimalInt, "100L"));
    assert!(java("0").head().unwrap().is(TokenType::LiteralNumberDecimalInt, "0"));
}

#[test]
fn octal_paints_with_the_hexadecimal_type() {
    // Pinned compatibility quirk.
    assert!(c("0777").head().unwrap().is(TokenType::LiteralNumberHexadecimal, "0777"));
    // Leading zero but a non-octal digit: plain decimal.
    assert!(c("089").head().unwrap().is(TokenType::LiteralNumberDecimalInt, "089"));
}

#[test]
fn char_literal_escape_validation() {
    let list = java("'\\n'");
    assert!(list.head().unwrap().is(TokenType::LiteralChar, "'\\n'"));

    let list = java("'\\x'");
    let toks: Vec<_> = list.paintable().collect();
    assert_eq!(toks.len(), 1);
    assert!(toks[0].is(TokenType::ErrorChar, "'\\x'"));
}

#[test]
fn unterminated_char_is_an_error() {
    let list = java("'ab");
    assert!(list.head().unwrap().is(TokenType::ErrorChar, "'ab"));
    assert_eq!(list.end_state(), 0);
}

#[test]
fn string_literals() {
    let list = java("s = \"hello\";");
    let toks: Vec<_> = list.paintable().collect();
    assert!(toks[4].is(TokenType::LiteralStringDouble, "\"hello\""));

    // Invalid escape poisons the whole literal.
    let list = java("\"bad \\q escape\"");
    assert!(list.head().unwrap().is(TokenType::ErrorStringDouble, "\"bad \\q escape\""));

    // Unterminated without a continuation backslash: error, state resets.
    let list = java("\"runs off");
    assert!(list.head().unwrap().is(TokenType::ErrorStringDouble, "\"runs off"));
    assert_eq!(list.end_state(), 0);
}

#[test]
fn backslash_continued_string_crosses_lines() {
    let first = java("x = \"part one \\");
    let toks: Vec<_> = first.paintable().collect();
    assert!(toks.last().unwrap().is(TokenType::LiteralStringDouble, "\"part one \\"));
    let state = first.end_state();
    assert!(state < 0);

    let second = scan(CDialect::Java, "part two\";", state);
    let toks: Vec<_> = second.paintable().collect();
    assert!(toks[0].is(TokenType::LiteralStringDouble, "part two\""));
    assert!(toks[1].is_single_char(TokenType::Separator, ';'));
    assert_eq!(second.end_state(), 0);
}

#[test]
fn continued_string_preserves_the_invalid_flag() {
    let first = java("\"oops \\q then \\");
    let state = first.end_state();
    assert!(state < 0);
    assert!(first.head().unwrap().is(TokenType::ErrorStringDouble, "\"oops \\q then \\"));

    let second = scan(CDialect::Java, "done\"", state);
    assert!(second.head().unwrap().is(TokenType::ErrorStringDouble, "done\""));
}

#[test]
fn eol_comment_with_hyperlink() {
    let list = java("// Hello world https://www.google.com");
    let toks: Vec<_> = list.paintable().collect();
    assert_eq!(toks.len(), 2);
    assert!(toks[0].is(TokenType::CommentEol, "// Hello world "));
    assert!(!toks[0].is_hyperlink());
    assert!(toks[1].is(TokenType::CommentEol, "https://www.google.com"));
    assert!(toks[1].is_hyperlink());
}

#[test]
fn block_comment_continues_across_lines() {
    let first = java("/* Hello world unterminated");
    let toks: Vec<_> = first.paintable().collect();
    assert_eq!(toks.len(), 1);
    assert!(toks[0].is(TokenType::CommentMultiline, "/* Hello world unterminated"));
    let state = first.end_state();
    assert!(state < 0);

    let second = scan(CDialect::Java, " still unterminated", state);
    let toks: Vec<_> = second.paintable().collect();
    assert_eq!(toks.len(), 1);
    assert!(toks[0].is(TokenType::CommentMultiline, " still unterminated"));
    assert_eq!(second.end_state(), state);

    let third = scan(CDialect::Java, " done */ int x;", state);
    let toks: Vec<_> = third.paintable().collect();
    assert!(toks[0].is(TokenType::CommentMultiline, " done */"));
    assert!(toks[2].is(TokenType::DataType, "int"));
    assert_eq!(third.end_state(), 0);
}

#[test]
fn empty_line_inside_comment_keeps_waiting() {
    let state = java("/* open").end_state();
    let list = scan(CDialect::Java, "", state);
    assert_eq!(list.len(), 1);
    let sentinel = list.head().unwrap();
    assert_eq!(sentinel.length(), 0);
    assert_eq!(sentinel.type_code(), state);
    assert_eq!(list.end_state(), state);
}

#[test]
fn doc_comment_tags_and_markup() {
    let list = java("/** Sorts. @param a the {@link List} of <code>int</code> */");
    let toks: Vec<_> = list.paintable().collect();
    let keyword_lexemes: Vec<_> = toks
        .iter()
        .filter(|t| t.is(TokenType::CommentKeyword, t.lexeme()))
        .map(|t| t.lexeme())
        .collect();
    assert_eq!(keyword_lexemes, vec!["@param", "{@link List}"]);
    let markup: Vec<_> = toks
        .iter()
        .filter(|t| t.token_type() == Some(TokenType::CommentMarkup))
        .map(|t| t.lexeme())
        .collect();
    assert_eq!(markup, vec!["<code>", "</code>"]);
    assert_eq!(list.end_state(), 0);
    assert_eq!(list.text(), "/** Sorts. @param a the {@link List} of <code>int</code> */");
}

#[test]
fn doc_comment_continues_across_lines() {
    let first = java("/** The widget's");
    let state = first.end_state();
    assert!(state < 0);
    assert!(first.head().unwrap().is(TokenType::CommentDocumentation, "/** The widget's"));

    let second = scan(CDialect::Java, " * @return nothing */", state);
    let keywords: Vec<_> = second
        .paintable()
        .filter(|t| t.token_type() == Some(TokenType::CommentKeyword))
        .map(|t| t.lexeme())
        .collect();
    assert_eq!(keywords, vec!["@return"]);
    assert_eq!(second.end_state(), 0);
}

#[test]
fn email_address_in_doc_comment_is_not_a_tag() {
    let list = java("/** mail me@example.org */");
    assert!(list
        .paintable()
        .all(|t| t.token_type() != Some(TokenType::CommentKeyword)));
}

#[test]
fn empty_block_comment_is_not_a_doc_comment() {
    let list = java("/**/");
    assert!(list.head().unwrap().is(TokenType::CommentMultiline, "/**/"));
    assert_eq!(list.end_state(), 0);
}

#[test]
fn preprocessor_lines_in_c() {
    let list = c("#include <stdio.h>");
    let toks: Vec<_> = list.paintable().collect();
    assert_eq!(toks.len(), 1);
    assert!(toks[0].is(TokenType::Preprocessor, "#include <stdio.h>"));

    let list = c("  #define MAX 10");
    let toks: Vec<_> = list.paintable().collect();
    assert!(toks[1].is(TokenType::Preprocessor, "#define MAX 10"));
}

#[test]
fn hash_after_code_is_not_a_preprocessor_line() {
    let list = c("x # y");
    let toks: Vec<_> = list.paintable().collect();
    assert!(toks[2].is(TokenType::ErrorIdentifier, "#"));
}

#[test]
fn java_annotations() {
    let list = java("@Override");
    assert!(list.head().unwrap().is(TokenType::Annotation, "@Override"));

    // C has no annotations; a stray `@` is an error.
    let list = c("@foo");
    assert!(list.head().unwrap().is(TokenType::ErrorIdentifier, "@"));
}

#[test]
fn operators_munch_longest_match() {
    let list = java("a >>>= b >>> c >> d");
    let ops: Vec<_> = list
        .paintable()
        .filter(|t| t.token_type() == Some(TokenType::Operator))
        .map(|t| t.lexeme())
        .collect();
    assert_eq!(ops, vec![">>>=", ">>>", ">>"]);
}

#[test]
fn division_is_an_operator() {
    let list = java("a / b");
    let toks: Vec<_> = list.paintable().collect();
    assert!(toks[2].is_single_char(TokenType::Operator, '/'));
}

#[test]
fn unknown_incoming_state_scans_from_default() {
    let normal = java("int x;");
    let mut scanner = CFamilyScanner::new(CDialect::Java, ScanConfig::default());
    assert_eq!(scanner.scan_line("int x;", 99, 0), normal);
    assert_eq!(scanner.scan_line("int x;", -9999, 0), normal);
}

#[test]
fn closest_standard_types() {
    let mut scanner = CFamilyScanner::new(CDialect::Java, ScanConfig::default());
    let comment_state = scanner.scan_line("/* open", 0, 0).end_state();
    assert_eq!(
        scanner.closest_standard_type(comment_state),
        TokenType::CommentMultiline
    );
    let string_state = scanner.scan_line("\"open \\", 0, 0).end_state();
    assert_eq!(
        scanner.closest_standard_type(string_state),
        TokenType::LiteralStringDouble
    );
    // Paintable codes map to themselves; garbage maps to the sentinel type.
    assert_eq!(
        scanner.closest_standard_type(TokenType::Operator.code()),
        TokenType::Operator
    );
    assert_eq!(scanner.closest_standard_type(-424_242), TokenType::Null);
}

#[test]
fn editor_metadata() {
    let scanner = CFamilyScanner::new(CDialect::C, ScanConfig::default());
    assert_eq!(scanner.line_comment_markers(0), (Some("//"), None));
    assert!(scanner.curly_braces_denote_code_blocks(0));
    assert!(scanner.is_identifier_char(0, '$'));
    assert!(!scanner.is_identifier_char(0, '-'));
    assert!(scanner.mark_occurrences(TokenType::Identifier));
    assert!(!scanner.mark_occurrences(TokenType::Whitespace));
}

#[test]
fn indent_after_open_brace() {
    let mut scanner = CFamilyScanner::new(CDialect::Java, ScanConfig::default());
    let list = scanner.scan_line("if (x) {", 0, 0);
    assert!(scanner.should_indent_next_line_after(list.last_paintable()));
    let list = scanner.scan_line("x = y;", 0, 0);
    assert!(!scanner.should_indent_next_line_after(list.last_paintable()));
}

#[test]
fn unicode_identifiers_survive() {
    let list = java("naïve = π;");
    let toks: Vec<_> = list.paintable().collect();
    assert!(toks[0].is(TokenType::Identifier, "naïve"));
    assert!(toks[4].is(TokenType::Identifier, "π"));
    assert_eq!(list.text(), "naïve = π;");
}

proptest! {
    #[test]
    fn spans_reconstruct_the_line(line in "[ -~]{0,60}") {
        for dialect in [CDialect::C, CDialect::Java] {
            let list = scan(dialect, &line, 0);
            prop_assert_eq!(list.text(), line.clone());
        }
    }

    #[test]
    fn rescan_is_idempotent(line in "[ -~]{0,60}", state in -610i32..10) {
        let a = scan(CDialect::Java, &line, state);
        let b = scan(CDialect::Java, &line, state);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn suspended_rescan_reconstructs(line in "[ -~]{0,60}", state in -610i32..0) {
        let list = scan(CDialect::C, &line, state);
        prop_assert_eq!(list.text(), line.clone());
    }
}
