//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror the command `*Args` but hold the raw color
//! choice; the `From` impls resolve it once the terminal can be inspected.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::classify::ClassifyArgs;
use crate::commands::equal::EqualArgs;
use crate::commands::input::InputArgs;
use crate::commands::stats::StatsArgs;

/// Where the values of `classify` and `stats` come from.
#[derive(Debug, PartialEq, Eq)]
pub struct InputParams {
    pub values: Option<String>,
    pub file: Option<PathBuf>,
    pub input_json: bool,
}

impl InputParams {
    fn from_matches(m: &ArgMatches) -> Self {
        Self {
            values: m.get_one::<String>("values").cloned(),
            file: m.get_one::<PathBuf>("file").cloned(),
            input_json: m.get_flag("input_json"),
        }
    }
}

impl From<InputParams> for InputArgs {
    fn from(p: InputParams) -> Self {
        Self {
            values: p.values,
            file: p.file,
            input_json: p.input_json,
        }
    }
}

pub struct ClassifyParams {
    pub input: InputParams,
    pub json: bool,
    pub color: ColorChoice,
}

impl ClassifyParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<ClassifyParams> for ClassifyArgs {
    fn from(p: ClassifyParams) -> Self {
        Self {
            input: p.input.into(),
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct StatsParams {
    pub input: InputParams,
    pub json: bool,
    pub color: ColorChoice,
}

impl StatsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<StatsParams> for StatsArgs {
    fn from(p: StatsParams) -> Self {
        Self {
            input: p.input.into(),
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct EqualParams {
    pub left: String,
    pub right: String,
    pub json: bool,
    pub color: ColorChoice,
}

impl EqualParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            left: m.get_one::<String>("left").cloned().unwrap_or_default(),
            right: m.get_one::<String>("right").cloned().unwrap_or_default(),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<EqualParams> for EqualArgs {
    fn from(p: EqualParams) -> Self {
        Self {
            left: p.left,
            right: p.right,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub verbose: u8,
    pub json: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            verbose: m.get_count("verbose"),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            verbose: p.verbose > 0,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
