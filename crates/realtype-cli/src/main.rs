mod cli;
mod commands;

use cli::{CheckParams, ClassifyParams, EqualParams, StatsParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("classify", m)) => {
            let params = ClassifyParams::from_matches(m);
            commands::classify::run(params.into());
        }
        Some(("stats", m)) => {
            let params = StatsParams::from_matches(m);
            commands::stats::run(params.into());
        }
        Some(("equal", m)) => {
            let params = EqualParams::from_matches(m);
            commands::equal::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
