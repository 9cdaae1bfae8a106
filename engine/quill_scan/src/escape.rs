//! Escape sequence validation shared by the string-scanning paths.

use crate::cursor::Cursor;

/// Result of consuming one `\…` escape sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EscapeOutcome {
    /// A recognized escape; cursor sits after it.
    Valid,
    /// Unrecognized or malformed escape; cursor sits after whatever was
    /// consumed. The enclosing literal becomes an error classification.
    Invalid,
    /// Backslash at end of line — the literal continues on the next line.
    LineContinuation,
}

/// Consume the escape sequence at the cursor (which must sit on `\`).
///
/// Recognizes the C-family set: `\b \t \n \f \r \" \' \\`, octal `\NNN`
/// (1–3 digits), hex `\xNN` (1–2 digits), unicode `\uNNNN` (exactly 4
/// digits). `\0` falls under the octal rule.
pub(crate) fn scan_escape(cur: &mut Cursor<'_>) -> EscapeOutcome {
    debug_assert_eq!(cur.current(), b'\\');
    cur.advance();
    if cur.is_eol() {
        return EscapeOutcome::LineContinuation;
    }
    match cur.current() {
        b'b' | b't' | b'n' | b'f' | b'r' | b'"' | b'\'' | b'\\' => {
            cur.advance();
            EscapeOutcome::Valid
        }
        b'0'..=b'7' => {
            let mut digits = 0;
            while digits < 3 && matches!(cur.current(), b'0'..=b'7') {
                cur.advance();
                digits += 1;
            }
            EscapeOutcome::Valid
        }
        b'x' => {
            cur.advance();
            let mut digits = 0;
            while digits < 2 && cur.current().is_ascii_hexdigit() {
                cur.advance();
                digits += 1;
            }
            if digits == 0 {
                EscapeOutcome::Invalid
            } else {
                EscapeOutcome::Valid
            }
        }
        b'u' => {
            cur.advance();
            let mut digits = 0;
            while digits < 4 && cur.current().is_ascii_hexdigit() {
                cur.advance();
                digits += 1;
            }
            if digits == 4 {
                EscapeOutcome::Valid
            } else {
                EscapeOutcome::Invalid
            }
        }
        _ => {
            cur.advance_char();
            EscapeOutcome::Invalid
        }
    }
}
