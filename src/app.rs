use tracing::debug;

use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        flags,
        config_file,
        dir,
        json,
        verbose,
        command,
    } = cli;

    let ctx = AppContext::bootstrap(&flags, config_file, dir, json, verbose)?;
    debug!(
        base = %ctx.store.paths().base_dir().display(),
        verbose = ctx.verbose,
        "settings initialised"
    );

    match command {
        Command::Init => commands::init::run(&ctx),
        Command::Show => commands::show::run(&ctx),
        Command::Path => commands::path::run(&ctx),
        Command::Clean => commands::clean::run(&ctx),
    }
}
