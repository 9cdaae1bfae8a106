//! JavaScript keyword table, gated by language version.
//!
//! `let` and `yield` become reserved at ES6; `async` and `await` at ES2017.
//! The E4X extension reserves `each` only when the support flag is on.

use crate::config::JsVersion;
use quill_token::TokenType;

pub(super) fn lookup(version: JsVersion, e4x: bool, text: &str) -> Option<TokenType> {
    let len = text.len();
    if !(2..=10).contains(&len) {
        return None;
    }
    match len {
        2 => match text {
            "do" | "if" | "in" => Some(TokenType::ReservedWord),
            _ => None,
        },
        3 => match text {
            "for" | "new" | "try" | "var" => Some(TokenType::ReservedWord),
            "let" if version >= JsVersion::Es6 => Some(TokenType::ReservedWord),
            _ => None,
        },
        4 => match text {
            "case" | "else" | "enum" | "null" | "this" | "void" | "with" => {
                Some(TokenType::ReservedWord)
            }
            "each" if e4x => Some(TokenType::ReservedWord),
            "true" => Some(TokenType::LiteralBoolean),
            "eval" => Some(TokenType::Function),
            _ => None,
        },
        5 => match text {
            "break" | "catch" | "class" | "const" | "super" | "throw" | "while" => {
                Some(TokenType::ReservedWord)
            }
            "yield" if version >= JsVersion::Es6 => Some(TokenType::ReservedWord),
            "async" | "await" if version >= JsVersion::Es2017 => Some(TokenType::ReservedWord),
            "false" => Some(TokenType::LiteralBoolean),
            "alert" | "isNaN" => Some(TokenType::Function),
            _ => None,
        },
        6 => match text {
            "delete" | "export" | "import" | "static" | "switch" | "typeof" => {
                Some(TokenType::ReservedWord)
            }
            "return" => Some(TokenType::ReservedWord2),
            "prompt" => Some(TokenType::Function),
            _ => None,
        },
        7 => match text {
            "default" | "extends" | "finally" => Some(TokenType::ReservedWord),
            "confirm" => Some(TokenType::Function),
            _ => None,
        },
        8 => match text {
            "continue" | "debugger" | "function" => Some(TokenType::ReservedWord),
            "isFinite" | "parseInt" => Some(TokenType::Function),
            _ => None,
        },
        9 => match text {
            "undefined" => Some(TokenType::ReservedWord),
            "decodeURI" | "encodeURI" => Some(TokenType::Function),
            _ => None,
        },
        10 => match text {
            "instanceof" => Some(TokenType::ReservedWord),
            "parseFloat" => Some(TokenType::Function),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::lookup;
    use crate::config::JsVersion;
    use pretty_assertions::assert_eq;
    use quill_token::TokenType;

    #[test]
    fn version_gates_let_and_yield() {
        assert_eq!(lookup(JsVersion::Es3, false, "let"), None);
        assert_eq!(lookup(JsVersion::Es5, false, "yield"), None);
        assert_eq!(
            lookup(JsVersion::Es6, false, "let"),
            Some(TokenType::ReservedWord)
        );
        assert_eq!(
            lookup(JsVersion::Es6, false, "yield"),
            Some(TokenType::ReservedWord)
        );
    }

    #[test]
    fn version_gates_async_await() {
        assert_eq!(lookup(JsVersion::Es6, false, "await"), None);
        assert_eq!(
            lookup(JsVersion::Es2017, false, "async"),
            Some(TokenType::ReservedWord)
        );
        assert_eq!(
            lookup(JsVersion::Es2017, false, "await"),
            Some(TokenType::ReservedWord)
        );
    }

    #[test]
    fn e4x_gates_each() {
        assert_eq!(lookup(JsVersion::Es2017, false, "each"), None);
        assert_eq!(
            lookup(JsVersion::Es2017, true, "each"),
            Some(TokenType::ReservedWord)
        );
    }

    #[test]
    fn ungated_basics() {
        assert_eq!(
            lookup(JsVersion::Es3, false, "function"),
            Some(TokenType::ReservedWord)
        );
        assert_eq!(
            lookup(JsVersion::Es3, false, "return"),
            Some(TokenType::ReservedWord2)
        );
        assert_eq!(
            lookup(JsVersion::Es3, false, "true"),
            Some(TokenType::LiteralBoolean)
        );
        assert_eq!(
            lookup(JsVersion::Es3, false, "parseInt"),
            Some(TokenType::Function)
        );
        assert_eq!(lookup(JsVersion::Es2017, false, "foo"), None);
    }
}
