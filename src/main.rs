mod app;
mod cli;
mod config;
mod consts;
mod editor;
mod error;
mod forward;
mod utils;
mod worklog;

use std::process::ExitCode;

use cli::Cli;
use config::Config;
use utils::{debug_from_env, set_debug};

fn main() -> ExitCode {
    let cli = Cli::from_env();

    let env_debug = debug_from_env();
    let config = if env_debug {
        Config::load()
    } else {
        Config::load_quiet()
    };
    set_debug(env_debug || config.debug);

    match app::run(cli.invocation(), &config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("worklog: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
