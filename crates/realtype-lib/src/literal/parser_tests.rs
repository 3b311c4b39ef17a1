use indoc::indoc;
use realtype_core::{PromiseState, ShallowType, Value, ValueError};

use super::*;

fn parse(source: &str) -> Value {
    parse_value(source).unwrap()
}

fn render(source: &str) -> String {
    parse(source).to_string()
}

fn error(source: &str) -> LiteralError {
    parse_value(source).unwrap_err()
}

#[test]
fn keywords() {
    assert!(matches!(parse("undefined"), Value::Undefined));
    assert!(matches!(parse("null"), Value::Null));
    assert!(matches!(parse("true"), Value::Bool(true)));
    assert!(matches!(parse("false"), Value::Bool(false)));
    assert!(parse("NaN").as_number().unwrap().is_nan());
    assert_eq!(parse("Infinity").as_number(), Some(f64::INFINITY));
    assert_eq!(parse("-Infinity").as_number(), Some(f64::NEG_INFINITY));
}

#[test]
fn numbers() {
    assert_eq!(parse("42").as_number(), Some(42.0));
    assert_eq!(parse("-1.5").as_number(), Some(-1.5));
    assert_eq!(parse("1e3").as_number(), Some(1000.0));
    assert_eq!(parse(".25").as_number(), Some(0.25));
    assert_eq!(parse("0x1f").as_number(), Some(31.0));
    assert_eq!(parse("0XFF").as_number(), Some(255.0));
    assert_eq!(
        parse(&format!("0x1{}", "f".repeat(32))).as_number(),
        Some(2f64.powi(129))
    );
    assert_eq!(
        parse(&format!("-0x{}", "f".repeat(300))).as_number(),
        Some(f64::NEG_INFINITY)
    );
    assert_eq!(render("-0"), "-0");
    assert_eq!(render("10n"), "10n");
    assert_eq!(render("-7n"), "-7n");
    assert_eq!(render("123456789012345678901234567890n"), "123456789012345678901234567890n");
}

#[test]
fn strings() {
    assert_eq!(render(r#""it's""#), r#""it's""#);
    assert_eq!(render(r"'say \'hi\''"), r#""say 'hi'""#);
    assert_eq!(render(r#""line\nbreak""#), r#""line\nbreak""#);
}

#[test]
fn arrays_and_objects() {
    assert_eq!(render("[]"), "[]");
    assert_eq!(render("[1, [2, [3]],]"), "[1, [2, [3]]]");
    assert_eq!(render("{}"), "{}");
    assert_eq!(
        render(r#"{ a: 1, "b c": [null], }"#),
        r#"{ a: 1, "b c": [null] }"#
    );
}

#[test]
fn symbols_and_functions() {
    assert_eq!(render("Symbol()"), "Symbol()");
    assert_eq!(render(r#"Symbol("id")"#), "Symbol(id)");
    assert_eq!(render("function greet() {}"), "[Function: greet]");
    assert_eq!(render("function () {}"), "[Function (anonymous)]");

    let Value::Function(func) = parse("function f() {}") else {
        panic!("expected a function");
    };
    assert!(matches!(func.call(&[Value::from(1)]), Value::Undefined));
}

#[test]
fn symbols_are_distinct() {
    let values = parse_values(r#"Symbol("x"), Symbol("x")"#).unwrap();
    assert!(!values[0].strict_equals(&values[1]));
}

#[test]
fn dates() {
    assert_eq!(render("new Date(0)"), "1970-01-01T00:00:00.000Z");
    assert_eq!(render("new Date(-1000)"), "1969-12-31T23:59:59.000Z");
    assert_eq!(
        render(r#"new Date("2021-03-04T05:06:07.890Z")"#),
        "2021-03-04T05:06:07.890Z"
    );
    assert_eq!(render("new Date('2020-02-29')"), "2020-02-29T00:00:00.000Z");
}

#[test]
fn regexps() {
    assert_eq!(render("/ab+c/gi"), "/ab+c/gi");
    assert_eq!(render(r"/a\/b/"), r"/a\/b/");
    assert_eq!(render("/[/]/"), "/[/]/");
    assert_eq!(render(r"/a[\]/]+b/g"), r"/a[\]/]+b/g");
    assert_eq!(render("[/[a-z/]/i, 1]"), "[/[a-z/]/i, 1]");
}

#[test]
fn collections() {
    assert_eq!(render("new Set()"), "Set(0) {}");
    assert_eq!(render("new Set([1, 1, 2])"), "Set(2) { 1, 2 }");
    assert_eq!(render("new Map()"), "Map(0) {}");
    assert_eq!(
        render(r#"new Map([["a", 1], ["b", [2]]])"#),
        r#"Map(2) { "a" => 1, "b" => [2] }"#
    );
    assert_eq!(render("new WeakSet()"), "WeakSet { <items unknown> }");
    assert_eq!(render("new WeakMap()"), "WeakMap { <items unknown> }");
}

#[test]
fn promises() {
    assert_eq!(render("new Promise()"), "Promise { <pending> }");
    assert_eq!(render("Promise.resolve([1])"), "Promise { [1] }");
    let Value::Promise(p) = parse("Promise.reject(null)") else {
        panic!("expected a promise");
    };
    assert!(matches!(p.state(), PromiseState::Rejected(Value::Null)));
}

#[test]
fn value_lists() {
    assert!(parse_values("").unwrap().is_empty());
    assert!(parse_values("  ").unwrap().is_empty());

    let values = parse_values(indoc! {r#"
        true, "text", undefined, null,
        new Set([1]), { k: 1 },
    "#})
    .unwrap();
    let shallow: Vec<ShallowType> = values.iter().map(Value::shallow_type).collect();
    assert_eq!(
        shallow,
        [
            ShallowType::Boolean,
            ShallowType::String,
            ShallowType::Undefined,
            ShallowType::Object,
            ShallowType::Object,
            ShallowType::Object,
        ]
    );
}

#[test]
fn error_unexpected_end() {
    let err = error("[1, 2");
    assert_eq!(
        err.kind,
        LiteralErrorKind::UnexpectedEnd {
            expected: "',' or ']'"
        }
    );
    assert_eq!(err.span, 5..5);
    assert_eq!(err.to_string(), "unexpected end of input, expected ',' or ']'");
}

#[test]
fn error_unexpected_token() {
    let err = error("[1 2]");
    assert_eq!(
        err.kind,
        LiteralErrorKind::UnexpectedToken {
            expected: "',' or ']'"
        }
    );
    assert_eq!(err.span, 3..4);

    let err = error("[1,,2]");
    assert_eq!(err.kind, LiteralErrorKind::UnexpectedToken { expected: "a value" });
    assert_eq!(err.span, 3..4);
}

#[test]
fn error_trailing_input() {
    let err = error("1 2");
    assert_eq!(err.kind, LiteralErrorKind::TrailingInput);
    assert_eq!(err.span, 2..3);
}

#[test]
fn error_unknown_names() {
    assert_eq!(
        error("nil").kind,
        LiteralErrorKind::UnknownIdentifier("nil".to_owned())
    );
    let err = error("new Thing()");
    assert_eq!(err.kind, LiteralErrorKind::UnknownConstructor("Thing".to_owned()));
    assert_eq!(err.span, 4..9);
    assert_eq!(
        error("Promise.all([])").kind,
        LiteralErrorKind::UnknownConstructor("Promise.all".to_owned())
    );
}

#[test]
fn error_bad_constructor_arguments() {
    let err = error("new Set(1)");
    assert_eq!(err.kind, LiteralErrorKind::ExpectedArray);
    assert_eq!(err.span, 8..9);

    let err = error("new Map([[1, 2], [3]])");
    assert_eq!(err.kind, LiteralErrorKind::InvalidMapEntry);
    assert_eq!(err.span, 8..21);

    assert_eq!(
        error("new Date(null)").kind,
        LiteralErrorKind::UnexpectedToken {
            expected: "a number or string"
        }
    );
}

#[test]
fn error_wraps_value_errors() {
    let err = error("new Date(1e20)");
    assert_eq!(err.kind, LiteralErrorKind::Value(ValueError::DateOutOfRange(1e20)));
    assert_eq!(err.span, 9..13);

    let err = error(r#"new Date("soon")"#);
    assert_eq!(
        err.kind,
        LiteralErrorKind::Value(ValueError::InvalidDate("soon".to_owned()))
    );

    assert_eq!(
        error("/a/q").kind,
        LiteralErrorKind::Value(ValueError::InvalidFlags {
            flags: "q".to_owned()
        })
    );
    assert!(matches!(
        error("/(a/").kind,
        LiteralErrorKind::Value(ValueError::InvalidRegExp { .. })
    ));
}

#[test]
fn error_minus_without_number() {
    let err = error("-true");
    assert_eq!(
        err.kind,
        LiteralErrorKind::UnexpectedToken {
            expected: "a number after '-'"
        }
    );
    assert_eq!(err.span, 0..5);
}

#[test]
fn nesting_up_to_limit() {
    let depth = MAX_DEPTH as usize;
    let source = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    assert!(parse_value(&source).is_ok());

    let source = format!("{}{}", "{ a: ".repeat(depth - 1), "1 }".repeat(depth - 1));
    assert!(parse_value(&source).is_ok());
}

#[test]
fn error_nesting_too_deep() {
    let depth = 100_000;
    let source = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    let err = error(&source);
    assert_eq!(err.kind, LiteralErrorKind::RecursionLimitExceeded);
    let limit = MAX_DEPTH as usize;
    assert_eq!(err.span, limit..limit + 1);
}

#[test]
fn error_nesting_too_deep_through_constructors() {
    let depth = MAX_DEPTH as usize;
    let source = format!(
        "{}1{}",
        "Promise.resolve(new Set([".repeat(depth),
        "]))".repeat(depth)
    );
    assert_eq!(error(&source).kind, LiteralErrorKind::RecursionLimitExceeded);

    let list = format!("1, {}{}", "[".repeat(depth + 1), "]".repeat(depth + 1));
    assert_eq!(
        parse_values(&list).unwrap_err().kind,
        LiteralErrorKind::RecursionLimitExceeded
    );
}
