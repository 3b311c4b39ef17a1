//! Run results and failure diffs.

use serde::Serialize;

use super::check::Check;

/// Outcome of running a suite.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<Failure>,
}

/// A failed check, with both sides rendered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub section: String,
    pub description: String,
    pub expected: String,
    pub actual: String,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub(crate) fn record_failure(&mut self, section: &str, check: &Check) {
        self.failed += 1;
        self.failures.push(Failure {
            section: section.to_owned(),
            description: check.description.clone(),
            expected: check.expected.render(),
            actual: check.actual.render(),
        });
    }
}

/// One line of an expected/actual diff.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiffLine {
    Same(String),
    Expected(String),
    Actual(String),
}

/// Line-by-line diff of two renderings, paired by position.
pub fn diff(expected: &str, actual: &str) -> Vec<DiffLine> {
    let expected: Vec<&str> = expected.lines().collect();
    let actual: Vec<&str> = actual.lines().collect();
    let mut lines = Vec::new();

    for i in 0..expected.len().max(actual.len()) {
        match (expected.get(i), actual.get(i)) {
            (Some(e), Some(a)) if e == a => lines.push(DiffLine::Same((*e).to_owned())),
            (e, a) => {
                if let Some(e) = e {
                    lines.push(DiffLine::Expected((*e).to_owned()));
                }
                if let Some(a) = a {
                    lines.push(DiffLine::Actual((*a).to_owned()));
                }
            }
        }
    }

    lines
}
