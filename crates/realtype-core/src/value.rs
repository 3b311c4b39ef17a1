//! Runtime values.
//!
//! Primitives are held by value. Every composite kind sits behind an `Rc`,
//! so cloning a `Value` clones the handle and keeps its identity: two
//! separately built composites are never the same reference, whatever
//! their contents.

use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use indexmap::IndexMap;
use num_bigint::BigInt;

use crate::error::ValueError;
use crate::shallow::ShallowType;

/// Largest magnitude of a millisecond time value.
pub const MAX_TIME_MILLIS: f64 = 8.64e15;

/// Flags accepted after a regular expression literal.
pub const REGEXP_FLAGS: &str = "dgimsuvy";

/// A runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    BigInt(BigInt),
    String(Rc<str>),
    Symbol(Rc<Symbol>),
    /// The only sequence kind.
    Array(Rc<[Value]>),
    Object(Rc<Object>),
    Function(Rc<Function>),
    Date(Rc<Date>),
    RegExp(Rc<RegExp>),
    Set(Rc<Set>),
    Map(Rc<Map>),
    WeakSet(Rc<WeakSet>),
    WeakMap(Rc<WeakMap>),
    Promise(Rc<Promise>),
}

/// Unique token with an optional description.
#[derive(Debug)]
pub struct Symbol {
    description: Option<String>,
}

impl Symbol {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Plain object with insertion-ordered properties.
#[derive(Debug, Default)]
pub struct Object {
    properties: IndexMap<String, Value>,
}

impl Object {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }
}

type NativeFn = dyn Fn(&[Value]) -> Value;

/// Callable value backed by a native closure.
pub struct Function {
    name: Option<String>,
    body: Box<NativeFn>,
}

impl Function {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn call(&self, args: &[Value]) -> Value {
        (self.body)(args)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Calendar instant in UTC.
#[derive(Debug)]
pub struct Date {
    instant: DateTime<Utc>,
}

impl Date {
    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    pub fn timestamp_millis(&self) -> i64 {
        self.instant.timestamp_millis()
    }
}

/// Regular expression: validated source plus flags.
#[derive(Debug)]
pub struct RegExp {
    source: String,
    flags: String,
}

impl RegExp {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }
}

/// Insertion-ordered collection of unique elements.
#[derive(Debug, Default)]
pub struct Set {
    items: Vec<Value>,
}

impl Set {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.items.iter().any(|item| item.same_value_zero(value))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.items.iter()
    }
}

/// Insertion-ordered collection of unique keys mapped to values.
#[derive(Debug, Default)]
pub struct Map {
    entries: Vec<(Value, Value)>,
}

impl Map {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k.same_value_zero(key))
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

/// Weakly held set. Membership is not observable.
#[derive(Debug, Default)]
pub struct WeakSet {
    _opaque: (),
}

/// Weakly held map. Membership is not observable.
#[derive(Debug, Default)]
pub struct WeakMap {
    _opaque: (),
}

/// Settlement state of a promise, fixed at creation.
#[derive(Debug)]
pub enum PromiseState {
    Pending,
    Fulfilled(Value),
    Rejected(Value),
}

/// Handle to a deferred computation.
#[derive(Debug)]
pub struct Promise {
    state: PromiseState,
}

impl Promise {
    pub fn state(&self) -> &PromiseState {
        &self.state
    }
}

// ============================================================================
// Construction
// ============================================================================

impl Value {
    pub fn string(s: impl Into<Rc<str>>) -> Self {
        Value::String(s.into())
    }

    pub fn bigint(n: impl Into<BigInt>) -> Self {
        Value::BigInt(n.into())
    }

    pub fn symbol(description: Option<&str>) -> Self {
        Value::Symbol(Rc::new(Symbol {
            description: description.map(str::to_owned),
        }))
    }

    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Array(items.into_iter().collect())
    }

    /// Build an object. A repeated key keeps its first position and takes
    /// the last value.
    pub fn object<K: Into<String>>(properties: impl IntoIterator<Item = (K, Value)>) -> Self {
        let properties = properties
            .into_iter()
            .map(|(k, v)| (k.into(), v))
            .collect();
        Value::Object(Rc::new(Object { properties }))
    }

    pub fn function(
        name: impl Into<String>,
        body: impl Fn(&[Value]) -> Value + 'static,
    ) -> Self {
        Value::Function(Rc::new(Function {
            name: Some(name.into()),
            body: Box::new(body),
        }))
    }

    pub fn anonymous_function(body: impl Fn(&[Value]) -> Value + 'static) -> Self {
        Value::Function(Rc::new(Function {
            name: None,
            body: Box::new(body),
        }))
    }

    pub fn date(instant: DateTime<Utc>) -> Self {
        Value::Date(Rc::new(Date { instant }))
    }

    /// Build a date from milliseconds since the Unix epoch.
    ///
    /// Fractional milliseconds are truncated toward zero.
    pub fn date_from_millis(millis: f64) -> Result<Self, ValueError> {
        if !millis.is_finite() || millis.abs() > MAX_TIME_MILLIS {
            return Err(ValueError::DateOutOfRange(millis));
        }
        let instant = Utc
            .timestamp_millis_opt(millis.trunc() as i64)
            .single()
            .ok_or(ValueError::DateOutOfRange(millis))?;
        Ok(Self::date(instant))
    }

    /// Build a date from an RFC 3339 timestamp or a bare `YYYY-MM-DD`
    /// (midnight UTC).
    pub fn date_parse(input: &str) -> Result<Self, ValueError> {
        if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
            return Ok(Self::date(instant.with_timezone(&Utc)));
        }
        let day = NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .map_err(|_| ValueError::InvalidDate(input.to_owned()))?;
        let midnight = day
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| ValueError::InvalidDate(input.to_owned()))?;
        Ok(Self::date(Utc.from_utc_datetime(&midnight)))
    }

    /// Build a regular expression, validating both pattern and flags.
    pub fn regexp(source: &str, flags: &str) -> Result<Self, ValueError> {
        validate_flags(flags)?;
        regex_syntax::ParserBuilder::new()
            .case_insensitive(flags.contains('i'))
            .multi_line(flags.contains('m'))
            .dot_matches_new_line(flags.contains('s'))
            .build()
            .parse(source)
            .map_err(|err| ValueError::InvalidRegExp {
                pattern: source.to_owned(),
                message: regexp_error_message(&err),
            })?;
        Ok(Value::RegExp(Rc::new(RegExp {
            source: source.to_owned(),
            flags: flags.to_owned(),
        })))
    }

    /// Build a set. Duplicates under SameValueZero are dropped and `-0`
    /// is stored as `0`.
    pub fn set(items: impl IntoIterator<Item = Value>) -> Self {
        let mut set = Set::default();
        for item in items {
            let item = normalize_zero(item);
            if !set.contains(&item) {
                set.items.push(item);
            }
        }
        Value::Set(Rc::new(set))
    }

    /// Build a map. A repeated key keeps its first position and takes the
    /// last value.
    pub fn map(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        let mut map = Map::default();
        for (key, value) in entries {
            let key = normalize_zero(key);
            match map.entries.iter_mut().find(|(k, _)| k.same_value_zero(&key)) {
                Some(slot) => slot.1 = value,
                None => map.entries.push((key, value)),
            }
        }
        Value::Map(Rc::new(map))
    }

    pub fn weak_set() -> Self {
        Value::WeakSet(Rc::new(WeakSet::default()))
    }

    pub fn weak_map() -> Self {
        Value::WeakMap(Rc::new(WeakMap::default()))
    }

    pub fn promise_pending() -> Self {
        Value::Promise(Rc::new(Promise {
            state: PromiseState::Pending,
        }))
    }

    pub fn promise_resolved(value: Value) -> Self {
        Value::Promise(Rc::new(Promise {
            state: PromiseState::Fulfilled(value),
        }))
    }

    pub fn promise_rejected(reason: Value) -> Self {
        Value::Promise(Rc::new(Promise {
            state: PromiseState::Rejected(reason),
        }))
    }
}

fn validate_flags(flags: &str) -> Result<(), ValueError> {
    let mut seen = String::with_capacity(flags.len());
    for c in flags.chars() {
        if !REGEXP_FLAGS.contains(c) || seen.contains(c) {
            return Err(ValueError::InvalidFlags {
                flags: flags.to_owned(),
            });
        }
        seen.push(c);
    }
    Ok(())
}

fn regexp_error_message(err: &regex_syntax::Error) -> String {
    match err {
        regex_syntax::Error::Parse(e) => e.kind().to_string(),
        regex_syntax::Error::Translate(e) => e.kind().to_string(),
        other => other.to_string(),
    }
}

fn normalize_zero(value: Value) -> Value {
    match value {
        Value::Number(n) if n == 0.0 => Value::Number(0.0),
        other => other,
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s.into())
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::BigInt(n)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items.into())
    }
}

// ============================================================================
// Inspection
// ============================================================================

impl Value {
    /// The coarse type reported by a basic runtime type check.
    pub fn shallow_type(&self) -> ShallowType {
        match self {
            Value::Undefined => ShallowType::Undefined,
            Value::Bool(_) => ShallowType::Boolean,
            Value::Number(_) => ShallowType::Number,
            Value::BigInt(_) => ShallowType::BigInt,
            Value::String(_) => ShallowType::String,
            Value::Symbol(_) => ShallowType::Symbol,
            Value::Function(_) => ShallowType::Function,
            Value::Null
            | Value::Array(_)
            | Value::Object(_)
            | Value::Date(_)
            | Value::RegExp(_)
            | Value::Set(_)
            | Value::Map(_)
            | Value::WeakSet(_)
            | Value::WeakMap(_)
            | Value::Promise(_) => ShallowType::Object,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(&items[..]),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Address of the shared allocation for reference kinds, `None` for
    /// primitives.
    pub fn ref_id(&self) -> Option<usize> {
        let ptr = match self {
            Value::Undefined
            | Value::Null
            | Value::Bool(_)
            | Value::Number(_)
            | Value::BigInt(_)
            | Value::String(_) => return None,
            Value::Symbol(rc) => Rc::as_ptr(rc).cast::<()>(),
            Value::Array(rc) => Rc::as_ptr(rc).cast::<()>(),
            Value::Object(rc) => Rc::as_ptr(rc).cast::<()>(),
            Value::Function(rc) => Rc::as_ptr(rc).cast::<()>(),
            Value::Date(rc) => Rc::as_ptr(rc).cast::<()>(),
            Value::RegExp(rc) => Rc::as_ptr(rc).cast::<()>(),
            Value::Set(rc) => Rc::as_ptr(rc).cast::<()>(),
            Value::Map(rc) => Rc::as_ptr(rc).cast::<()>(),
            Value::WeakSet(rc) => Rc::as_ptr(rc).cast::<()>(),
            Value::WeakMap(rc) => Rc::as_ptr(rc).cast::<()>(),
            Value::Promise(rc) => Rc::as_ptr(rc).cast::<()>(),
        };
        Some(ptr as usize)
    }

    /// Strict equality: no coercion, numbers by IEEE comparison, reference
    /// kinds by identity.
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            _ => match (self.ref_id(), other.ref_id()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }

    /// Strict equality, except NaN equals NaN. Used for collection keys.
    pub fn same_value_zero(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) if a.is_nan() && b.is_nan() => true,
            _ => self.strict_equals(other),
        }
    }
}
