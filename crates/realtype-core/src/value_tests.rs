use crate::{PromiseState, ShallowType, Value, ValueError};

#[test]
fn shallow_type_of_primitives() {
    assert_eq!(Value::Undefined.shallow_type(), ShallowType::Undefined);
    assert_eq!(Value::from(true).shallow_type(), ShallowType::Boolean);
    assert_eq!(Value::from(1.5).shallow_type(), ShallowType::Number);
    assert_eq!(Value::bigint(7).shallow_type(), ShallowType::BigInt);
    assert_eq!(Value::from("x").shallow_type(), ShallowType::String);
    assert_eq!(Value::symbol(None).shallow_type(), ShallowType::Symbol);
}

#[test]
fn shallow_type_collapses_numbers() {
    assert_eq!(Value::Number(f64::NAN).shallow_type(), ShallowType::Number);
    assert_eq!(Value::Number(f64::INFINITY).shallow_type(), ShallowType::Number);
    assert_eq!(Value::Number(f64::NEG_INFINITY).shallow_type(), ShallowType::Number);
}

#[test]
fn shallow_type_collapses_composites() {
    let composites = [
        Value::Null,
        Value::array([]),
        Value::object::<&str>([]),
        Value::date_from_millis(0.0).unwrap(),
        Value::regexp("a+", "g").unwrap(),
        Value::set([]),
        Value::map([]),
        Value::weak_set(),
        Value::weak_map(),
        Value::promise_pending(),
    ];
    for value in &composites {
        assert_eq!(value.shallow_type(), ShallowType::Object, "{value}");
    }
    assert_eq!(
        Value::function("f", |_| Value::Undefined).shallow_type(),
        ShallowType::Function
    );
}

#[test]
fn shallow_type_labels() {
    assert_eq!(ShallowType::BigInt.as_str(), "bigint");
    assert_eq!(ShallowType::Object.to_string(), "object");
}

#[test]
fn strict_equals_primitives() {
    assert!(Value::Undefined.strict_equals(&Value::Undefined));
    assert!(Value::Null.strict_equals(&Value::Null));
    assert!(!Value::Null.strict_equals(&Value::Undefined));
    assert!(Value::from(11).strict_equals(&Value::from(11.0)));
    assert!(!Value::from(11).strict_equals(&Value::from("11")));
    assert!(Value::Number(0.0).strict_equals(&Value::Number(-0.0)));
    assert!(!Value::Number(f64::NAN).strict_equals(&Value::Number(f64::NAN)));
    assert!(Value::bigint(10).strict_equals(&Value::bigint(10)));
    assert!(!Value::bigint(10).strict_equals(&Value::from(10)));
}

#[test]
fn strict_equals_composites_by_identity() {
    let obj = Value::object([("a", Value::from(1))]);
    let twin = Value::object([("a", Value::from(1))]);
    assert!(obj.strict_equals(&obj.clone()));
    assert!(!obj.strict_equals(&twin));

    let sym = Value::symbol(Some("id"));
    assert!(sym.strict_equals(&sym.clone()));
    assert!(!sym.strict_equals(&Value::symbol(Some("id"))));
}

#[test]
fn ref_id_only_for_reference_kinds() {
    assert_eq!(Value::from("text").ref_id(), None);
    assert_eq!(Value::bigint(1).ref_id(), None);
    let arr = Value::array([Value::from(1)]);
    assert!(arr.ref_id().is_some());
    assert_eq!(arr.ref_id(), arr.clone().ref_id());
}

#[test]
fn same_value_zero_treats_nan_as_equal() {
    let nan = Value::Number(f64::NAN);
    assert!(nan.same_value_zero(&Value::Number(f64::NAN)));
    assert!(Value::Number(-0.0).same_value_zero(&Value::Number(0.0)));
}

#[test]
fn set_drops_duplicates() {
    let Value::Set(set) = Value::set([
        Value::from(1),
        Value::from(1),
        Value::Number(f64::NAN),
        Value::Number(f64::NAN),
        Value::from("1"),
    ]) else {
        panic!("expected a set");
    };
    assert_eq!(set.len(), 3);
    assert!(set.contains(&Value::from("1")));
    assert!(!set.contains(&Value::from(2)));
}

#[test]
fn set_keeps_distinct_objects() {
    let Value::Set(set) = Value::set([Value::object::<&str>([]), Value::object::<&str>([])])
    else {
        panic!("expected a set");
    };
    assert_eq!(set.len(), 2);
}

#[test]
fn map_overwrites_repeated_key_in_place() {
    let Value::Map(map) = Value::map([
        (Value::from("a"), Value::from(1)),
        (Value::from("b"), Value::from(2)),
        (Value::from("a"), Value::from(3)),
    ]) else {
        panic!("expected a map");
    };
    assert_eq!(map.len(), 2);
    let keys: Vec<String> = map.iter().map(|(k, _)| k.to_string()).collect();
    assert_eq!(keys, ["\"a\"", "\"b\""]);
    assert!(map.get(&Value::from("a")).unwrap().strict_equals(&Value::from(3)));
}

#[test]
fn object_preserves_insertion_order() {
    let Value::Object(obj) = Value::object([
        ("z", Value::from(1)),
        ("a", Value::from(2)),
        ("z", Value::from(3)),
    ]) else {
        panic!("expected an object");
    };
    let keys: Vec<&str> = obj.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["z", "a"]);
    assert!(obj.get("z").unwrap().strict_equals(&Value::from(3)));
}

#[test]
fn function_is_callable() {
    let add = Value::function("add", |args| {
        let sum = args.iter().filter_map(Value::as_number).sum::<f64>();
        Value::Number(sum)
    });
    let Value::Function(func) = &add else {
        panic!("expected a function");
    };
    assert_eq!(func.name(), Some("add"));
    let result = func.call(&[Value::from(2), Value::from(3)]);
    assert_eq!(result.as_number(), Some(5.0));
}

#[test]
fn date_from_millis_range() {
    assert!(Value::date_from_millis(8.64e15).is_ok());
    assert_eq!(
        Value::date_from_millis(8.64e15 + 1.0).unwrap_err(),
        ValueError::DateOutOfRange(8.64e15 + 1.0)
    );
    assert!(matches!(
        Value::date_from_millis(f64::NAN),
        Err(ValueError::DateOutOfRange(_))
    ));
}

#[test]
fn date_from_millis_truncates() {
    let Value::Date(date) = Value::date_from_millis(-1.7).unwrap() else {
        panic!("expected a date");
    };
    assert_eq!(date.timestamp_millis(), -1);
}

#[test]
fn date_parse_formats() {
    let Value::Date(date) = Value::date_parse("2020-01-01").unwrap() else {
        panic!("expected a date");
    };
    assert_eq!(date.timestamp_millis(), 1_577_836_800_000);

    let Value::Date(date) = Value::date_parse("2020-01-01T01:00:00+01:00").unwrap() else {
        panic!("expected a date");
    };
    assert_eq!(date.timestamp_millis(), 1_577_836_800_000);

    assert_eq!(
        Value::date_parse("yesterday").unwrap_err(),
        ValueError::InvalidDate("yesterday".to_owned())
    );
}

#[test]
fn regexp_validation() {
    let Value::RegExp(re) = Value::regexp("ab+c", "gi").unwrap() else {
        panic!("expected a regexp");
    };
    assert_eq!(re.source(), "ab+c");
    assert_eq!(re.flags(), "gi");

    assert!(matches!(
        Value::regexp("(ab", ""),
        Err(ValueError::InvalidRegExp { .. })
    ));
    assert_eq!(
        Value::regexp("a", "gg").unwrap_err(),
        ValueError::InvalidFlags {
            flags: "gg".to_owned()
        }
    );
    assert_eq!(
        Value::regexp("a", "x").unwrap_err(),
        ValueError::InvalidFlags {
            flags: "x".to_owned()
        }
    );
}

#[test]
fn promise_state_is_fixed() {
    let Value::Promise(p) = Value::promise_rejected(Value::from("boom")) else {
        panic!("expected a promise");
    };
    assert!(matches!(p.state(), PromiseState::Rejected(Value::String(s)) if &**s == "boom"));
}

#[test]
fn as_array_only_for_arrays() {
    let arr = Value::from(vec![Value::from(1), Value::from(2)]);
    assert_eq!(arr.as_array().map(<[Value]>::len), Some(2));
    assert!(arr.is_array());
    assert!(Value::set([]).as_array().is_none());
}
