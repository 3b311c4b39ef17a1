//! The built-in sample values and check suite.

use realtype_core::Value;

use crate::aggregate::{TypeStat, all_same_type, all_unique_real_type, count_by_real_type};
use crate::classify::{classify, classify_many};
use crate::equality::equal;
use crate::invariants::{ensure_literal, ensure_literals};
use crate::tag::TypeTag;

use super::check::Suite;

/// One value of each recognizable kind, in classification priority order.
pub const SAMPLES: &str = r#"
    true, "text", undefined, null, Infinity, NaN, 42, 10n, [1, 2],
    function sample() {}, new Date(0), /ab+c/g, new Set([1]), new Map([["k", 1]]),
    new WeakSet(), new WeakMap(), Symbol("sample"), Promise.resolve(1), { key: "value" }
"#;

/// Parse [`SAMPLES`]. Every call builds fresh composites.
pub fn samples() -> Vec<Value> {
    ensure_literals(SAMPLES)
}

/// Tags of [`samples`], one per recognizable kind.
fn sample_tags() -> Vec<TypeTag> {
    TypeTag::ALL
        .into_iter()
        .filter(|tag| *tag != TypeTag::Unknown)
        .collect()
}

/// The suite exercising every core operation.
pub fn builtin_suite() -> Suite {
    let mut suite = Suite::new();
    let samples = samples();

    let classify_section = suite.section("classify");
    for (value, tag) in samples.iter().zip(sample_tags()) {
        classify_section.check(format!("{value} is {tag}"), classify(value), tag);
    }
    for (source, tag) in [
        ("-Infinity", TypeTag::Infinity),
        ("-0", TypeTag::Number),
        ("0x10", TypeTag::Number),
        ("-5n", TypeTag::BigInt),
        ("[]", TypeTag::Array),
        ("{}", TypeTag::Object),
        ("function () {}", TypeTag::Function),
        ("new Promise()", TypeTag::Promise),
    ] {
        classify_section.check(
            format!("{source} is {tag}"),
            classify(&ensure_literal(source)),
            tag,
        );
    }

    suite
        .section("classify many")
        .check(
            "samples map to distinct tags in order",
            classify_many(&samples),
            sample_tags(),
        )
        .check("empty input yields no tags", classify_many(&[]), Vec::<TypeTag>::new())
        .check(
            "duplicates are kept",
            classify_many(&ensure_literals("1, 1, NaN")),
            vec![TypeTag::Number, TypeTag::Number, TypeTag::NaN],
        );

    let same = |source: &str| all_same_type(&ensure_literals(source));
    suite
        .section("all same type")
        .check("[1, NaN, Infinity] share a shallow type", same("1, NaN, Infinity"), true)
        .check("[null, [], {}] share a shallow type", same("null, [], {}"), true)
        .check("[1, \"1\"] differ", same(r#"1, "1""#), false)
        .check("[function f() {}, {}] differ", same("function f() {}, {}"), false)
        .check("[] is uniform", same(""), true)
        .check("[true] is uniform", same("true"), true);

    let unique = |source: &str| all_unique_real_type(&ensure_literals(source));
    suite
        .section("all unique real type")
        .check(r#"[true, 123, "123"] are unique"#, unique(r#"true, 123, "123""#), true)
        .check("[true, 123, false] collide", unique("true, 123, false"), false)
        .check("[null, [], {}] are unique", unique("null, [], {}"), true)
        .check("[NaN, 1] are unique", unique("NaN, 1"), true)
        .check("samples are unique", all_unique_real_type(&samples), true)
        .check("[] is unique", unique(""), true);

    let count = |source: &str| count_by_real_type(&ensure_literals(source));
    let mut once_each: Vec<TypeStat> = sample_tags()
        .into_iter()
        .map(|tag| TypeStat::new(tag, 1))
        .collect();
    once_each.sort_by_key(|stat| stat.tag);
    suite
        .section("count by real type")
        .check(
            "[true, null, false, true, {}]",
            count("true, null, false, true, {}"),
            vec![
                TypeStat::new(TypeTag::Boolean, 3),
                TypeStat::new(TypeTag::Null, 1),
                TypeStat::new(TypeTag::Object, 1),
            ],
        )
        .check(
            "[1, NaN, Infinity, 2] sorts labels, not counts",
            count("1, NaN, Infinity, 2"),
            vec![
                TypeStat::new(TypeTag::Infinity, 1),
                TypeStat::new(TypeTag::NaN, 1),
                TypeStat::new(TypeTag::Number, 2),
            ],
        )
        .check(
            "samples count once each",
            count_by_real_type(&samples),
            once_each,
        )
        .check("[] has no stats", count(""), Vec::<TypeStat>::new());

    let eq = |a: &str, b: &str| equal(&ensure_literal(a), &ensure_literal(b));
    let shared = ensure_literal("{ k: 1 }");
    suite
        .section("equal")
        .check("[11, 12] == [11, 12]", eq("[11, 12]", "[11, 12]"), true)
        .check("[11, 12] != [11, 12, 13]", eq("[11, 12]", "[11, 12, 13]"), false)
        .check(r#"[11, 12] != ["11", "12"]"#, eq("[11, 12]", r#"["11", "12"]"#), false)
        .check(
            "nested arrays compare deeply",
            eq(r#"[[1, [2]], "a"]"#, r#"[[1, [2]], "a"]"#),
            true,
        )
        .check("[] == []", eq("[]", "[]"), true)
        .check("NaN != NaN", eq("NaN", "NaN"), false)
        .check("0 == -0", eq("0", "-0"), true)
        .check("{} != {}", eq("{}", "{}"), false)
        .check("an object equals itself", equal(&shared, &shared.clone()), true)
        .check("[1] != 1", eq("[1]", "1"), false)
        .check("10n != 10", eq("10n", "10"), false);

    suite
}
