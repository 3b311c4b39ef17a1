use realtype_lib::{Value, equal};
use serde::Serialize;

use super::input::{fail, parse_one};
use super::print_json;

pub struct EqualArgs {
    pub left: String,
    pub right: String,
    pub json: bool,
    pub color: bool,
}

#[derive(Debug, Serialize)]
pub struct Comparison {
    pub left: String,
    pub right: String,
    pub equal: bool,
}

impl Comparison {
    pub fn new(left: &Value, right: &Value) -> Self {
        Self {
            left: left.to_string(),
            right: right.to_string(),
            equal: equal(left, right),
        }
    }
}

pub fn run(args: EqualArgs) {
    let left = parse_one(&args.left).unwrap_or_else(|err| fail(&err, args.color));
    let right = parse_one(&args.right).unwrap_or_else(|err| fail(&err, args.color));
    let comparison = Comparison::new(&left, &right);

    if args.json {
        print_json(&comparison);
        return;
    }
    println!("{}", comparison.equal);
}
