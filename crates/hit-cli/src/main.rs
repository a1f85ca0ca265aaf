mod cli;
mod commands;
mod logging;

use cli::{AstParams, CheckParams, FmtParams, GetParams, MergeParams, build_cli, verbosity};

fn main() {
    let matches = build_cli().get_matches();

    if let Some((_, m)) = matches.subcommand() {
        logging::init(verbosity(m));
    }

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("fmt", m)) => {
            let params = FmtParams::from_matches(m);
            commands::fmt::run(params.into());
        }
        Some(("get", m)) => {
            let params = GetParams::from_matches(m);
            commands::get::run(params.into());
        }
        Some(("merge", m)) => {
            let params = MergeParams::from_matches(m);
            commands::merge::run(params.into());
        }
        Some(("ast", m)) => {
            let params = AstParams::from_matches(m);
            commands::ast::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
