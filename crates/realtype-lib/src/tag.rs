//! Refined type tags.
//!
//! Unlike [`ShallowType`](realtype_core::ShallowType), a tag tells apart
//! what a basic runtime check lumps together: `null` from objects, arrays
//! and collections from plain objects, `NaN` and `Infinity` from numbers.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Semantic type of a value. Exactly one tag applies to any value.
///
/// Variants are declared in classification priority order. Ordering
/// (`Ord`) is the lexicographic order of the labels instead, so
/// `Infinity < NaN < array`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TypeTag {
    Boolean,
    String,
    Undefined,
    Null,
    Infinity,
    NaN,
    Number,
    BigInt,
    Array,
    Function,
    Date,
    RegExp,
    Set,
    Map,
    WeakSet,
    WeakMap,
    Symbol,
    Promise,
    Object,
    /// Fallback for shapes no rule recognizes.
    Unknown,
}

impl TypeTag {
    /// Every tag, in classification priority order.
    pub const ALL: [TypeTag; 20] = [
        TypeTag::Boolean,
        TypeTag::String,
        TypeTag::Undefined,
        TypeTag::Null,
        TypeTag::Infinity,
        TypeTag::NaN,
        TypeTag::Number,
        TypeTag::BigInt,
        TypeTag::Array,
        TypeTag::Function,
        TypeTag::Date,
        TypeTag::RegExp,
        TypeTag::Set,
        TypeTag::Map,
        TypeTag::WeakSet,
        TypeTag::WeakMap,
        TypeTag::Symbol,
        TypeTag::Promise,
        TypeTag::Object,
        TypeTag::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Infinity => "Infinity",
            Self::NaN => "NaN",
            Self::Number => "number",
            Self::BigInt => "bigint",
            Self::Array => "array",
            Self::Function => "function",
            Self::Date => "date",
            Self::RegExp => "regexp",
            Self::Set => "set",
            Self::Map => "map",
            Self::WeakSet => "weakset",
            Self::WeakMap => "weakmap",
            Self::Symbol => "symbol",
            Self::Promise => "promise",
            Self::Object => "object",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialOrd for TypeTag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeTag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown type tag '{0}'")]
pub struct UnknownTypeTag(pub String);

impl FromStr for TypeTag {
    type Err = UnknownTypeTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| UnknownTypeTag(s.to_owned()))
    }
}

impl Serialize for TypeTag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
