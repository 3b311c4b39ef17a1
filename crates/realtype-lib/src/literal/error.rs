//! Errors raised while reading literal notation.

use std::ops::Range;

use realtype_core::ValueError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind}")]
pub struct LiteralError {
    pub kind: LiteralErrorKind,
    /// Byte range in the source.
    pub span: Range<usize>,
}

impl LiteralError {
    pub fn new(kind: LiteralErrorKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LiteralErrorKind {
    #[error("unexpected character")]
    UnexpectedChar,

    #[error("unterminated string literal")]
    UnterminatedString,

    #[error("invalid escape sequence")]
    InvalidEscape,

    #[error("invalid number literal")]
    InvalidNumber,

    #[error("expected {expected}")]
    UnexpectedToken { expected: &'static str },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("unknown identifier '{0}'")]
    UnknownIdentifier(String),

    #[error("unknown constructor '{0}'")]
    UnknownConstructor(String),

    #[error("expected an array of values")]
    ExpectedArray,

    #[error("map entries must be [key, value] pairs")]
    InvalidMapEntry,

    #[error("unexpected input after value")]
    TrailingInput,

    #[error("values nested more than {} levels deep", super::parser::MAX_DEPTH)]
    RecursionLimitExceeded,

    #[error(transparent)]
    Value(#[from] ValueError),
}
