//! Structural equality over sequences, strict identity otherwise.

use realtype_core::Value;

/// Compare two values.
///
/// Arrays are equal when they have the same length and every index-paired
/// element is recursively equal. Any other pair falls back to
/// [`Value::strict_equals`], so non-array composites compare by identity.
/// An array never equals a non-array.
pub fn equal(a: &Value, b: &Value) -> bool {
    match (a.as_array(), b.as_array()) {
        (Some(xs), Some(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| equal(x, y))
        }
        (None, None) => a.strict_equals(b),
        _ => false,
    }
}
