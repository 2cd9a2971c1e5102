use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        store,
        host_state,
        json,
        verbose: _,
        command,
    } = cli;

    let mut ctx = AppContext::bootstrap(store, host_state, json)?;

    match command {
        Command::List => commands::list::run(&ctx),
        Command::Create(args) => commands::layout::create(&mut ctx, args),
        Command::Save(args) => commands::layout::save(&mut ctx, args),
        Command::Restore(args) => commands::restore::run(&ctx, args),
        Command::Rename(args) => commands::layout::rename(&mut ctx, args),
        Command::Delete(args) => commands::layout::delete(&mut ctx, args),
        Command::Default(args) => commands::default::run(&mut ctx, args.command),
        Command::Startup => commands::startup::run(&ctx),
    }
}
