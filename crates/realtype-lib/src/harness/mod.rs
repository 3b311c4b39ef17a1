//! Assertion harness for named checks.
//!
//! A [`Suite`] groups [`Check`]s into named sections. Running it compares
//! each check's actual outcome against the expected one, reports through a
//! [`Reporter`], and returns a [`Report`]. A failing check is recorded and
//! never stops the checks after it.

mod builtin;
mod check;
mod report;
mod reporter;

#[cfg(test)]
mod runner_tests;

pub use builtin::{SAMPLES, builtin_suite, samples};
pub use check::{Check, Outcome, Section, Suite};
pub use report::{DiffLine, Failure, Report, diff};
pub use reporter::{NoopReporter, PrintReporter, Reporter, Verbosity};
