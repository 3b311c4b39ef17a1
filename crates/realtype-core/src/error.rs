//! Errors raised while constructing values.

/// A value could not be built from the given parts.
///
/// Only construction can fail. Once a `Value` exists, every inspection
/// over it is total.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueError {
    #[error("invalid regular expression /{pattern}/: {message}")]
    InvalidRegExp { pattern: String, message: String },

    #[error("invalid regular expression flags '{flags}'")]
    InvalidFlags { flags: String },

    /// Millisecond time value outside ±8.64e15 or not finite.
    #[error("time value {0} is out of range")]
    DateOutOfRange(f64),

    #[error("invalid date string '{0}'")]
    InvalidDate(String),
}
