//! Coarse runtime type, as reported by a basic type check.

use std::fmt;

/// Shallow type of a value.
///
/// Deliberately lossy: `null` and every non-callable composite report
/// `Object`, and NaN and the infinities report `Number`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ShallowType {
    Undefined,
    Boolean,
    Number,
    BigInt,
    String,
    Symbol,
    Function,
    Object,
}

impl ShallowType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::BigInt => "bigint",
            Self::String => "string",
            Self::Symbol => "symbol",
            Self::Function => "function",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ShallowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
