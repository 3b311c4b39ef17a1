//! Grouping and uniqueness queries over value lists.

use std::collections::HashSet;
use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use realtype_core::Value;

use crate::classify::classify;
use crate::tag::TypeTag;

/// Number of values sharing one real type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TypeStat {
    pub tag: TypeTag,
    pub count: usize,
}

impl TypeStat {
    pub fn new(tag: TypeTag, count: usize) -> Self {
        Self { tag, count }
    }
}

impl fmt::Display for TypeStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.tag, self.count)
    }
}

/// Whether every value has the same *shallow* type.
///
/// Uses the coarse runtime check on purpose: `null`, `[]` and `{}` all
/// count as the same type here.
pub fn all_same_type(values: &[Value]) -> bool {
    let Some((first, rest)) = values.split_first() else {
        return true;
    };
    let expected = first.shallow_type();
    rest.iter().all(|v| v.shallow_type() == expected)
}

/// Whether no two values share a real type.
pub fn all_unique_real_type(values: &[Value]) -> bool {
    let mut seen = HashSet::with_capacity(values.len());
    values.iter().all(|v| seen.insert(classify(v)))
}

/// Count values per real type, one entry per tag present, sorted by tag
/// label.
pub fn count_by_real_type(values: &[Value]) -> Vec<TypeStat> {
    let mut counts: IndexMap<TypeTag, usize> = IndexMap::new();
    for value in values {
        *counts.entry(classify(value)).or_default() += 1;
    }
    counts.sort_keys();
    counts
        .into_iter()
        .map(|(tag, count)| TypeStat::new(tag, count))
        .collect()
}
