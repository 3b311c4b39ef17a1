//! Conversion from JSON documents.
//!
//! JSON covers only a handful of shapes: `null`, booleans, numbers,
//! strings, arrays and plain objects. Everything else needs literal
//! notation.

use realtype_core::Value;

/// Convert a JSON value. Integers outside the `f64` range lose precision
/// the same way the runtime would.
pub fn value_from_json(json: &serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) => Value::from(s.as_str()),
        serde_json::Value::Array(items) => Value::array(items.iter().map(value_from_json)),
        serde_json::Value::Object(fields) => Value::object(
            fields
                .iter()
                .map(|(key, value)| (key.as_str(), value_from_json(value))),
        ),
    }
}

/// Parse a JSON array of values.
pub fn values_from_json(source: &str) -> Result<Vec<Value>, serde_json::Error> {
    let items: Vec<serde_json::Value> = serde_json::from_str(source)?;
    Ok(items.iter().map(value_from_json).collect())
}
