//! Checks, sections and suites.

use serde::Serialize;

use crate::aggregate::TypeStat;
use crate::tag::TypeTag;

use super::report::Report;
use super::reporter::Reporter;

/// Anything a core operation returns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Bool(bool),
    Tag(TypeTag),
    Tags(Vec<TypeTag>),
    Stats(Vec<TypeStat>),
}

impl Outcome {
    /// Human-readable rendering. Stats render one per line.
    pub fn render(&self) -> String {
        match self {
            Outcome::Bool(b) => b.to_string(),
            Outcome::Tag(tag) => tag.to_string(),
            Outcome::Tags(tags) => {
                let labels: Vec<&str> = tags.iter().map(|t| t.as_str()).collect();
                format!("[{}]", labels.join(", "))
            }
            Outcome::Stats(stats) if stats.is_empty() => "(no values)".to_owned(),
            Outcome::Stats(stats) => stats
                .iter()
                .map(TypeStat::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

impl From<bool> for Outcome {
    fn from(b: bool) -> Self {
        Outcome::Bool(b)
    }
}

impl From<TypeTag> for Outcome {
    fn from(tag: TypeTag) -> Self {
        Outcome::Tag(tag)
    }
}

impl From<Vec<TypeTag>> for Outcome {
    fn from(tags: Vec<TypeTag>) -> Self {
        Outcome::Tags(tags)
    }
}

impl From<Vec<TypeStat>> for Outcome {
    fn from(stats: Vec<TypeStat>) -> Self {
        Outcome::Stats(stats)
    }
}

/// One labeled comparison of an actual outcome against an expected one.
#[derive(Clone, Debug)]
pub struct Check {
    pub description: String,
    pub actual: Outcome,
    pub expected: Outcome,
}

impl Check {
    pub fn new(
        description: impl Into<String>,
        actual: impl Into<Outcome>,
        expected: impl Into<Outcome>,
    ) -> Self {
        Self {
            description: description.into(),
            actual: actual.into(),
            expected: expected.into(),
        }
    }

    pub fn passed(&self) -> bool {
        self.actual == self.expected
    }
}

/// Named group of checks. The name is only a heading.
#[derive(Clone, Debug)]
pub struct Section {
    pub name: String,
    pub checks: Vec<Check>,
}

impl Section {
    pub fn check(
        &mut self,
        description: impl Into<String>,
        actual: impl Into<Outcome>,
        expected: impl Into<Outcome>,
    ) -> &mut Self {
        self.checks.push(Check::new(description, actual, expected));
        self
    }
}

#[derive(Clone, Debug, Default)]
pub struct Suite {
    pub sections: Vec<Section>,
}

impl Suite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new section and return it for adding checks.
    pub fn section(&mut self, name: impl Into<String>) -> &mut Section {
        self.sections.push(Section {
            name: name.into(),
            checks: Vec::new(),
        });
        let last = self.sections.len() - 1;
        &mut self.sections[last]
    }

    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.checks.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run every check in order.
    pub fn run(&self, reporter: &mut impl Reporter) -> Report {
        let mut report = Report::default();
        for section in &self.sections {
            reporter.section_started(&section.name);
            for check in &section.checks {
                if check.passed() {
                    report.passed += 1;
                    reporter.check_passed(&section.name, check);
                } else {
                    report.record_failure(&section.name, check);
                    reporter.check_failed(&section.name, check);
                }
            }
        }
        reporter.finished(&report);
        report
    }
}
