use realtype_lib::{Colors, TypeTag, Value, classify};
use serde::Serialize;

use super::input::{InputArgs, fail, load_values};
use super::print_json;

pub struct ClassifyArgs {
    pub input: InputArgs,
    pub json: bool,
    pub color: bool,
}

#[derive(Debug, Serialize)]
pub struct Classified {
    pub tag: TypeTag,
    pub value: String,
}

pub fn run(args: ClassifyArgs) {
    let values = load_values(&args.input).unwrap_or_else(|err| fail(&err, args.color));

    if args.json {
        print_json(&classified(&values));
        return;
    }
    print!("{}", render(&values, Colors::new(args.color)));
}

pub fn classified(values: &[Value]) -> Vec<Classified> {
    values
        .iter()
        .map(|value| Classified {
            tag: classify(value),
            value: value.to_string(),
        })
        .collect()
}

/// One line per value: the tag padded to the widest label, then the value.
pub fn render(values: &[Value], colors: Colors) -> String {
    let tags: Vec<TypeTag> = values.iter().map(classify).collect();
    let width = tags.iter().map(|t| t.as_str().len()).max().unwrap_or(0);

    let mut out = String::new();
    for (tag, value) in tags.iter().zip(values) {
        let padded = format!("{:<width$}", tag.as_str());
        out.push_str(&colors.paint(colors.blue, &padded));
        out.push_str("  ");
        out.push_str(&value.format(colors));
        out.push('\n');
    }
    out
}
