use serde::Serialize;

use crate::cli::NameArgs;
use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Debug, Serialize)]
struct RestoreResult<'a> {
    name: &'a str,
    bytes: usize,
}

pub fn run(ctx: &AppContext, args: NameArgs) -> AppResult<()> {
    let mut host = ctx.host()?;
    ctx.store.apply(&args.name, &mut host)?;

    let name = args.name.trim();
    let bytes = ctx.store.restore(name)?.len();
    ctx.output.emit(
        &format!("layout `{name}` restored"),
        &RestoreResult { name, bytes },
    )
}
