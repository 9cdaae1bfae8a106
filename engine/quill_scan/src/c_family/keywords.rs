//! Dialect keyword tables for the C family.
//!
//! Lookup happens after maximal-munch identifier scanning: the scanner
//! hands over the exact lexeme and the table answers with a type override,
//! or `None` for a plain identifier. Length-bucketed matches give fast
//! rejection without hashing — C-family keywords are 2–12 characters.

use super::CDialect;
use quill_token::TokenType;

/// Look up a C-family identifier in the dialect's tables.
pub(super) fn lookup(dialect: CDialect, text: &str) -> Option<TokenType> {
    match dialect {
        CDialect::C => lookup_c(text),
        CDialect::Java => lookup_java(text),
    }
}

fn lookup_c(text: &str) -> Option<TokenType> {
    let len = text.len();
    if !(2..=8).contains(&len) {
        return None;
    }
    match len {
        2 => match text {
            "do" | "if" => Some(TokenType::ReservedWord),
            _ => None,
        },
        3 => match text {
            "for" => Some(TokenType::ReservedWord),
            "int" => Some(TokenType::DataType),
            "abs" => Some(TokenType::Function),
            _ => None,
        },
        4 => match text {
            "case" | "else" | "enum" | "goto" => Some(TokenType::ReservedWord),
            "auto" | "bool" | "char" | "long" | "void" => Some(TokenType::DataType),
            "true" => Some(TokenType::LiteralBoolean),
            "exit" | "free" | "puts" => Some(TokenType::Function),
            _ => None,
        },
        5 => match text {
            "break" | "const" | "union" | "while" => Some(TokenType::ReservedWord),
            "float" | "short" => Some(TokenType::DataType),
            "false" => Some(TokenType::LiteralBoolean),
            "abort" | "fopen" | "qsort" => Some(TokenType::Function),
            _ => None,
        },
        6 => match text {
            "extern" | "inline" | "return" | "sizeof" | "static" | "struct" | "switch" => {
                Some(TokenType::ReservedWord)
            }
            "double" | "signed" => Some(TokenType::DataType),
            "calloc" | "fclose" | "malloc" | "memcpy" | "memset" | "printf" | "scanf"
            | "strcat" | "strcmp" | "strcpy" | "strlen" => Some(TokenType::Function),
            _ => None,
        },
        7 => match text {
            "default" | "typedef" => Some(TokenType::ReservedWord),
            "fprintf" | "realloc" | "sprintf" => Some(TokenType::Function),
            _ => None,
        },
        8 => match text {
            "continue" | "register" | "restrict" | "volatile" => Some(TokenType::ReservedWord),
            "unsigned" => Some(TokenType::DataType),
            _ => None,
        },
        _ => None,
    }
}

fn lookup_java(text: &str) -> Option<TokenType> {
    let len = text.len();
    if !(2..=12).contains(&len) {
        return None;
    }
    match len {
        2 => match text {
            "do" | "if" => Some(TokenType::ReservedWord),
            _ => None,
        },
        3 => match text {
            "for" | "new" | "try" | "var" => Some(TokenType::ReservedWord),
            "int" => Some(TokenType::DataType),
            _ => None,
        },
        4 => match text {
            "case" | "else" | "enum" | "goto" | "null" | "this" => Some(TokenType::ReservedWord),
            "byte" | "char" | "long" | "void" => Some(TokenType::DataType),
            "true" => Some(TokenType::LiteralBoolean),
            _ => None,
        },
        5 => match text {
            "break" | "catch" | "class" | "const" | "final" | "super" | "throw" | "while" => {
                Some(TokenType::ReservedWord)
            }
            "float" | "short" => Some(TokenType::DataType),
            "false" => Some(TokenType::LiteralBoolean),
            _ => None,
        },
        6 => match text {
            "assert" | "import" | "native" | "public" | "record" | "static" | "switch"
            | "throws" => Some(TokenType::ReservedWord),
            "return" => Some(TokenType::ReservedWord2),
            "double" => Some(TokenType::DataType),
            _ => None,
        },
        7 => match text {
            "default" | "extends" | "finally" | "package" | "private" => {
                Some(TokenType::ReservedWord)
            }
            "boolean" => Some(TokenType::DataType),
            _ => None,
        },
        8 => match text {
            "abstract" | "continue" | "strictfp" | "volatile" => Some(TokenType::ReservedWord),
            _ => None,
        },
        9 => match text {
            "interface" | "protected" | "transient" => Some(TokenType::ReservedWord),
            _ => None,
        },
        10 => match text {
            "implements" | "instanceof" => Some(TokenType::ReservedWord),
            _ => None,
        },
        12 => match text {
            "synchronized" => Some(TokenType::ReservedWord),
            _ => None,
        },
        _ => None,
    }
}
