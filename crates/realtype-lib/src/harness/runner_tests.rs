use realtype_core::Colors;

use super::*;
use crate::aggregate::TypeStat;
use crate::tag::TypeTag;

fn mixed_suite() -> Suite {
    let mut suite = Suite::new();
    suite
        .section("tags")
        .check("true is boolean", TypeTag::Boolean, TypeTag::Boolean)
        .check("wrong", TypeTag::String, TypeTag::Boolean);
    suite.section("stats").check(
        "counts",
        vec![
            TypeStat::new(TypeTag::Boolean, 2),
            TypeStat::new(TypeTag::Null, 1),
        ],
        vec![
            TypeStat::new(TypeTag::Boolean, 3),
            TypeStat::new(TypeTag::Null, 1),
        ],
    );
    suite
}

fn printed(suite: &Suite, verbosity: Verbosity) -> String {
    let mut reporter = PrintReporter::new(Vec::new(), Colors::OFF, verbosity);
    suite.run(&mut reporter);
    String::from_utf8(reporter.into_inner()).unwrap()
}

#[test]
fn failures_do_not_stop_the_run() {
    let suite = mixed_suite();
    assert_eq!(suite.len(), 3);

    let report = suite.run(&mut NoopReporter);
    assert_eq!(report.passed, 1);
    assert_eq!(report.failed, 2);
    assert_eq!(report.total(), 3);
    assert!(!report.is_success());
    assert_eq!(report.failures[0].section, "tags");
    assert_eq!(report.failures[0].expected, "boolean");
    assert_eq!(report.failures[0].actual, "string");
    assert_eq!(report.failures[1].description, "counts");
}

#[test]
fn empty_suite_succeeds() {
    let suite = Suite::new();
    assert!(suite.is_empty());
    let report = suite.run(&mut NoopReporter);
    assert!(report.is_success());
    assert_eq!(report.total(), 0);
}

#[test]
fn outcome_rendering() {
    assert_eq!(Outcome::from(true).render(), "true");
    assert_eq!(Outcome::from(TypeTag::NaN).render(), "NaN");
    assert_eq!(
        Outcome::from(vec![TypeTag::Array, TypeTag::Object]).render(),
        "[array, object]"
    );
    assert_eq!(Outcome::from(Vec::<TypeStat>::new()).render(), "(no values)");
}

#[test]
fn diff_pairs_lines_by_position() {
    assert_eq!(
        diff("a\nb\nc", "a\nx"),
        vec![
            DiffLine::Same("a".to_owned()),
            DiffLine::Expected("b".to_owned()),
            DiffLine::Actual("x".to_owned()),
            DiffLine::Expected("c".to_owned()),
        ]
    );
}

#[test]
fn default_output_shows_failures_only() {
    insta::assert_snapshot!(printed(&mixed_suite(), Verbosity::Default), @r"
    FAIL tags > wrong
        - boolean
        + string
    FAIL stats > counts
        - boolean: 3
        + boolean: 2
          null: 1
    1 passed, 2 failed
    ");
}

#[test]
fn verbose_output_shows_every_check() {
    insta::assert_snapshot!(printed(&mixed_suite(), Verbosity::Verbose), @r"
    tags
      ok   true is boolean
      FAIL wrong
        - boolean
        + string
    stats
      FAIL counts
        - boolean: 3
        + boolean: 2
          null: 1
    1 passed, 2 failed
    ");
}

#[test]
fn colored_summary() {
    let mut suite = Suite::new();
    suite.section("s").check("bad", false, true);
    let mut reporter = PrintReporter::new(Vec::new(), Colors::ON, Verbosity::Default);
    suite.run(&mut reporter);
    let out = String::from_utf8(reporter.into_inner()).unwrap();
    assert!(out.starts_with("\x1b[31mFAIL\x1b[0m \x1b[34ms\x1b[0m"));
    assert!(out.ends_with("0 passed, \x1b[31m1 failed\x1b[0m\n"));
}

#[test]
fn report_serializes_to_json() {
    let report = mixed_suite().run(&mut NoopReporter);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["passed"], 1);
    assert_eq!(json["failed"], 2);
    assert_eq!(json["failures"][1]["expected"], "boolean: 3\nnull: 1");
}

#[test]
fn outcome_serializes_untagged() {
    let stats = Outcome::from(vec![TypeStat::new(TypeTag::Map, 2)]);
    assert_eq!(
        serde_json::to_string(&stats).unwrap(),
        r#"[{"tag":"map","count":2}]"#
    );
    assert_eq!(serde_json::to_string(&Outcome::from(false)).unwrap(), "false");
}
