use realtype_lib::{
    Colors, TypeStat, Value, all_same_type, all_unique_real_type, count_by_real_type,
};
use serde::Serialize;

use super::input::{InputArgs, fail, load_values};
use super::print_json;

pub struct StatsArgs {
    pub input: InputArgs,
    pub json: bool,
    pub color: bool,
}

#[derive(Debug, Serialize)]
pub struct Stats {
    pub total: usize,
    pub counts: Vec<TypeStat>,
    pub all_same_type: bool,
    pub all_unique_real_type: bool,
}

impl Stats {
    pub fn collect(values: &[Value]) -> Self {
        Self {
            total: values.len(),
            counts: count_by_real_type(values),
            all_same_type: all_same_type(values),
            all_unique_real_type: all_unique_real_type(values),
        }
    }
}

pub fn run(args: StatsArgs) {
    let values = load_values(&args.input).unwrap_or_else(|err| fail(&err, args.color));
    let stats = Stats::collect(&values);

    if args.json {
        print_json(&stats);
        return;
    }
    print!("{}", render(&stats, Colors::new(args.color)));
}

pub fn render(stats: &Stats, colors: Colors) -> String {
    let mut out = String::new();
    if stats.counts.is_empty() {
        out.push_str(&colors.paint(colors.dim, "(no values)"));
        out.push('\n');
    }
    for stat in &stats.counts {
        out.push_str(&format!(
            "{}: {}\n",
            colors.paint(colors.blue, stat.tag.as_str()),
            stat.count
        ));
    }

    out.push_str(&colors.paint(colors.dim, &format!("{} values", stats.total)));
    out.push('\n');
    out.push_str(&format!("all same type: {}\n", stats.all_same_type));
    out.push_str(&format!(
        "all unique real type: {}\n",
        stats.all_unique_real_type
    ));
    out
}
