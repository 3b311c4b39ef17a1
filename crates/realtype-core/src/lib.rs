#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Runtime value model for realtype.
//!
//! - [`Value`]: closed set of runtime shapes, primitives by value and
//!   composites behind shared handles
//! - [`ShallowType`]: the lossy type a basic runtime check reports
//! - [`Colors`]: terminal palette used when rendering values

mod colors;
mod error;
mod format;
mod shallow;
mod value;

#[cfg(test)]
mod value_tests;

pub use colors::Colors;
pub use error::ValueError;
pub use format::format_number;
pub use shallow::ShallowType;
pub use value::{
    Date, Function, MAX_TIME_MILLIS, Map, Object, Promise, PromiseState, REGEXP_FLAGS, RegExp,
    Set, Symbol, Value, WeakMap, WeakSet,
};

pub use num_bigint::BigInt;
