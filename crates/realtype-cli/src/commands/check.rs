use std::io;

use realtype_lib::Colors;
use realtype_lib::harness::{NoopReporter, PrintReporter, Verbosity, builtin_suite};

use super::print_json;

pub struct CheckArgs {
    pub verbose: bool,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let suite = builtin_suite();

    let report = if args.json {
        let report = suite.run(&mut NoopReporter);
        print_json(&report);
        report
    } else {
        let verbosity = if args.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Default
        };
        let colors = Colors::new(args.color);
        let mut reporter = PrintReporter::new(io::stdout().lock(), colors, verbosity);
        suite.run(&mut reporter)
    };

    if !report.is_success() {
        std::process::exit(1);
    }
}
