//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use realtype_core::Value;

use crate::literal::{parse_value, parse_values};

/// Parse a literal the crate itself ships. Malformed built-in literals are
/// a programming error.
pub(crate) fn ensure_literal(source: &str) -> Value {
    parse_value(source).unwrap_or_else(|err| {
        panic!("built-in literal `{source}` is malformed: {err} at {:?}", err.span)
    })
}

pub(crate) fn ensure_literals(source: &str) -> Vec<Value> {
    parse_values(source).unwrap_or_else(|err| {
        panic!("built-in literal list `{source}` is malformed: {err} at {:?}", err.span)
    })
}
