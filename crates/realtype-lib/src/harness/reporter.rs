//! Reporting for suite runs.
//!
//! Same shape as the VM tracers: a trait called at fixed points of a run,
//! a no-op implementation the compiler removes entirely, and a printing
//! implementation that owns its formatting state.

use std::io::Write;

use realtype_core::Colors;

use super::check::Check;
use super::report::{DiffLine, Report, diff};

/// Verbosity level for report output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Failures with their diffs, then the summary.
    #[default]
    Default,
    /// Section headers and every check, then the summary (-v).
    Verbose,
}

/// Called at each step of a suite run:
/// - `section_started` - before the first check of a section
/// - `check_passed` / `check_failed` - after each comparison
/// - `finished` - once, after the last check
pub trait Reporter {
    fn section_started(&mut self, name: &str);

    fn check_passed(&mut self, section: &str, check: &Check);

    fn check_failed(&mut self, section: &str, check: &Check);

    fn finished(&mut self, report: &Report);
}

/// Reporter that ignores everything.
pub struct NoopReporter;

impl Reporter for NoopReporter {
    #[inline(always)]
    fn section_started(&mut self, _name: &str) {}

    #[inline(always)]
    fn check_passed(&mut self, _section: &str, _check: &Check) {}

    #[inline(always)]
    fn check_failed(&mut self, _section: &str, _check: &Check) {}

    #[inline(always)]
    fn finished(&mut self, _report: &Report) {}
}

/// Reporter that writes human-readable lines to a sink.
///
/// Write errors are dropped: a broken pipe must not turn into a failed
/// check.
pub struct PrintReporter<W: Write> {
    out: W,
    colors: Colors,
    verbosity: Verbosity,
}

impl<W: Write> PrintReporter<W> {
    pub fn new(out: W, colors: Colors, verbosity: Verbosity) -> Self {
        Self {
            out,
            colors,
            verbosity,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_diff(&mut self, check: &Check) {
        let c = self.colors;
        for line in diff(&check.expected.render(), &check.actual.render()) {
            let _ = match line {
                DiffLine::Same(text) => writeln!(self.out, "      {text}"),
                DiffLine::Expected(text) => {
                    writeln!(self.out, "    {}", c.paint(c.green, &format!("- {text}")))
                }
                DiffLine::Actual(text) => {
                    writeln!(self.out, "    {}", c.paint(c.red, &format!("+ {text}")))
                }
            };
        }
    }
}

impl<W: Write> Reporter for PrintReporter<W> {
    fn section_started(&mut self, name: &str) {
        if self.verbosity == Verbosity::Verbose {
            let _ = writeln!(self.out, "{}", self.colors.paint(self.colors.blue, name));
        }
    }

    fn check_passed(&mut self, _section: &str, check: &Check) {
        if self.verbosity == Verbosity::Verbose {
            let c = self.colors;
            let _ = writeln!(self.out, "  {}   {}", c.paint(c.green, "ok"), check.description);
        }
    }

    fn check_failed(&mut self, section: &str, check: &Check) {
        let c = self.colors;
        let fail = c.paint(c.red, "FAIL");
        let _ = match self.verbosity {
            Verbosity::Verbose => writeln!(self.out, "  {fail} {}", check.description),
            Verbosity::Default => writeln!(
                self.out,
                "{fail} {} {} {}",
                c.paint(c.blue, section),
                c.paint(c.dim, ">"),
                check.description
            ),
        };
        self.write_diff(check);
    }

    fn finished(&mut self, report: &Report) {
        let c = self.colors;
        let failed = format!("{} failed", report.failed);
        let failed = if report.failed > 0 {
            c.paint(c.red, &failed)
        } else {
            failed
        };
        let _ = writeln!(self.out, "{} passed, {failed}", report.passed);
    }
}
