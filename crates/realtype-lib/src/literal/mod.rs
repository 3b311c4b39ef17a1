//! Literal notation for runtime values.
//!
//! Lets the command line and the check suites name every kind of value:
//!
//! ```text
//! undefined null true NaN -Infinity 42 0x1f 10n "text" /ab+c/gi
//! [1, [2]] { key: 1, "other key": null }
//! Symbol("id") function name() {} new Date(0) new Set([1]) new Map([["k", 1]])
//! new WeakSet() new WeakMap() new Promise() Promise.resolve(1) Promise.reject(1)
//! ```
//!
//! Lexing is done by `logos`; parsing is a small recursive descent.

mod error;
mod lexer;
mod parser;

#[cfg(test)]
mod parser_tests;

pub use error::{LiteralError, LiteralErrorKind};
pub use lexer::{Token, TokenKind, lex};
pub use parser::{MAX_DEPTH, parse_value, parse_values};
