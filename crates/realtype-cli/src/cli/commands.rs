//! Command builders for the CLI.

use clap::Command;

use super::args::*;

pub fn build_cli() -> Command {
    Command::new("realtype")
        .about("Classify runtime values by their real type")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(classify_command())
        .subcommand(stats_command())
        .subcommand(equal_command())
        .subcommand(check_command())
}

/// Add the input args shared by value-consuming commands.
fn with_input_args(cmd: Command) -> Command {
    cmd.arg(values_arg())
        .arg(file_arg())
        .arg(input_json_arg())
        .arg(json_arg())
        .arg(color_arg())
}

/// Tag each value with its real type.
pub fn classify_command() -> Command {
    let cmd = Command::new("classify")
        .about("Print the real type of each value")
        .override_usage(
            "\
  realtype classify <VALUES>
  realtype classify -f <FILE> [--input-json]",
        )
        .after_help(
            r#"EXAMPLES:
  realtype classify '1, "a", [], new Date(0)'
  realtype classify -f values.txt
  echo '[1, null, {}]' | realtype classify --input-json"#,
        );

    with_input_args(cmd)
}

/// Count values per real type and report uniformity.
pub fn stats_command() -> Command {
    let cmd = Command::new("stats")
        .about("Count values by real type")
        .override_usage(
            "\
  realtype stats <VALUES>
  realtype stats -f <FILE> [--input-json]",
        )
        .after_help(
            r#"EXAMPLES:
  realtype stats '1, 2, NaN, "x"'
  realtype stats -f values.json --input-json --json"#,
        );

    with_input_args(cmd)
}

/// Compare two values with structural array equality.
pub fn equal_command() -> Command {
    Command::new("equal")
        .about("Compare two values (arrays structurally, everything else by identity)")
        .after_help(
            r#"EXAMPLES:
  realtype equal '[1, [2]]' '[1, [2]]'   # true
  realtype equal '{}' '{}'               # false"#,
        )
        .arg(left_arg())
        .arg(right_arg())
        .arg(json_arg())
        .arg(color_arg())
}

/// Run the built-in assertion suite.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Run the built-in classification checks")
        .arg(verbose_arg())
        .arg(json_arg())
        .arg(color_arg())
}
