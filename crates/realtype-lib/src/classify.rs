//! Real-type classification.
//!
//! An ordered list of `(predicate, tag)` rules, first match wins. Order
//! matters: the numeric rules depend on the value rather than its kind,
//! and the final `object` rule only holds once every finer composite rule
//! has been tried.

use realtype_core::{ShallowType, Value};

use crate::tag::TypeTag;

type Rule = (fn(&Value) -> bool, TypeTag);

const RULES: &[Rule] = &[
    (is_boolean, TypeTag::Boolean),
    (is_string, TypeTag::String),
    (is_undefined, TypeTag::Undefined),
    (is_null, TypeTag::Null),
    (is_infinite, TypeTag::Infinity),
    (is_nan, TypeTag::NaN),
    (is_number, TypeTag::Number),
    (is_bigint, TypeTag::BigInt),
    (is_array, TypeTag::Array),
    (is_function, TypeTag::Function),
    (is_date, TypeTag::Date),
    (is_regexp, TypeTag::RegExp),
    (is_set, TypeTag::Set),
    (is_map, TypeTag::Map),
    (is_weak_set, TypeTag::WeakSet),
    (is_weak_map, TypeTag::WeakMap),
    (is_symbol, TypeTag::Symbol),
    (is_promise, TypeTag::Promise),
    (is_shallow_object, TypeTag::Object),
];

/// Map a value to its real type. Total: unrecognized shapes fall back to
/// [`TypeTag::Unknown`].
pub fn classify(value: &Value) -> TypeTag {
    RULES
        .iter()
        .find(|(matches, _)| matches(value))
        .map_or(TypeTag::Unknown, |&(_, tag)| tag)
}

/// Classify each value, preserving order and length.
pub fn classify_many(values: &[Value]) -> Vec<TypeTag> {
    values.iter().map(classify).collect()
}

fn is_boolean(v: &Value) -> bool {
    matches!(v, Value::Bool(_))
}

fn is_string(v: &Value) -> bool {
    matches!(v, Value::String(_))
}

fn is_undefined(v: &Value) -> bool {
    matches!(v, Value::Undefined)
}

fn is_null(v: &Value) -> bool {
    matches!(v, Value::Null)
}

fn is_infinite(v: &Value) -> bool {
    matches!(v, Value::Number(n) if n.is_infinite())
}

// NaN is the only value that fails self-equality.
#[allow(clippy::eq_op)]
fn is_nan(v: &Value) -> bool {
    matches!(v, Value::Number(n) if n != n)
}

fn is_number(v: &Value) -> bool {
    matches!(v, Value::Number(_))
}

fn is_bigint(v: &Value) -> bool {
    matches!(v, Value::BigInt(_))
}

fn is_array(v: &Value) -> bool {
    v.is_array()
}

fn is_function(v: &Value) -> bool {
    matches!(v, Value::Function(_))
}

fn is_date(v: &Value) -> bool {
    matches!(v, Value::Date(_))
}

fn is_regexp(v: &Value) -> bool {
    matches!(v, Value::RegExp(_))
}

fn is_set(v: &Value) -> bool {
    matches!(v, Value::Set(_))
}

fn is_map(v: &Value) -> bool {
    matches!(v, Value::Map(_))
}

fn is_weak_set(v: &Value) -> bool {
    matches!(v, Value::WeakSet(_))
}

fn is_weak_map(v: &Value) -> bool {
    matches!(v, Value::WeakMap(_))
}

fn is_symbol(v: &Value) -> bool {
    matches!(v, Value::Symbol(_))
}

fn is_promise(v: &Value) -> bool {
    matches!(v, Value::Promise(_))
}

fn is_shallow_object(v: &Value) -> bool {
    v.shallow_type() == ShallowType::Object
}
