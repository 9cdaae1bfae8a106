//! Token model for the Quill per-line highlighting engine.
//!
//! This crate is the data layer the scanners produce into. It knows nothing
//! about any particular language: it defines the closed [`TokenType`]
//! taxonomy, the borrowed [`Token`] / [`TokenList`] views over a single line
//! of source text, and the [`TokenListBuilder`] scanners use to accumulate
//! classified spans.
//!
//! # Cross-line state codes
//!
//! Token type codes are `i32`. Non-negative codes are the paintable
//! [`TokenType`] discriminants (`Null = 0` is the end-of-line sentinel).
//! Negative codes are *internal* scanner states — a suspended multi-line
//! construct (unterminated block comment, open string, embedded sub-language
//! region) carried from one line to the next. Internal codes never appear on
//! a paintable token; they only ride on the zero-length terminal sentinel and
//! on [`TokenList::end_state`].

mod builder;
mod token;
mod token_type;

pub use builder::TokenListBuilder;
pub use token::{Token, TokenList};
pub use token_type::TokenType;
