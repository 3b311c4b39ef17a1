#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Real-type classification over runtime values.
//!
//! This crate contains:
//! - The classifier mapping any [`Value`] to one [`TypeTag`]
//! - Structural equality for arrays, strict identity for everything else
//! - Grouping and uniqueness queries built on the classifier
//! - A literal notation for writing values as text
//! - A check harness that runs named assertions and reports diffs

pub mod aggregate;
pub mod classify;
pub mod equality;
pub mod harness;
pub mod json;
pub mod literal;
pub mod tag;

mod invariants;


pub use aggregate::{TypeStat, all_same_type, all_unique_real_type, count_by_real_type};
pub use classify::{classify, classify_many};
pub use equality::equal;
pub use literal::{LiteralError, LiteralErrorKind, parse_value, parse_values};
pub use tag::{TypeTag, UnknownTypeTag};

pub use realtype_core::{Colors, ShallowType, Value, ValueError};
