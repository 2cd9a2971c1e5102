use serde::Serialize;

use crate::cli::{CreateArgs, NameArgs, RenameArgs};
use crate::context::AppContext;
use crate::error::AppResult;
use crate::host::LayoutHost;

#[derive(Debug, Serialize)]
struct LayoutChange<'a> {
    action: &'static str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    previous: Option<&'a str>,
}

pub fn create(ctx: &mut AppContext, args: CreateArgs) -> AppResult<()> {
    let name = if args.capture {
        let mut host = ctx.host()?;
        let state = host.capture_state();
        ctx.store.create_with_state(&args.name, state)?
    } else {
        ctx.store.create(&args.name)?
    };

    let text = if args.capture {
        format!("layout `{name}` created from the current layout")
    } else {
        format!("layout `{name}` created")
    };
    ctx.output.emit(
        &text,
        &LayoutChange {
            action: "created",
            name: &name,
            previous: None,
        },
    )
}

pub fn save(ctx: &mut AppContext, args: NameArgs) -> AppResult<()> {
    let mut host = ctx.host()?;
    ctx.store.capture_into(&args.name, &mut host)?;

    let name = args.name.trim();
    ctx.output.emit(
        &format!("layout `{name}` saved"),
        &LayoutChange {
            action: "saved",
            name,
            previous: None,
        },
    )
}

pub fn rename(ctx: &mut AppContext, args: RenameArgs) -> AppResult<()> {
    let name = ctx.store.rename(&args.old, &args.new)?;

    let previous = args.old.trim();
    ctx.output.emit(
        &format!("layout `{previous}` renamed to `{name}`"),
        &LayoutChange {
            action: "renamed",
            name: &name,
            previous: Some(previous),
        },
    )
}

pub fn delete(ctx: &mut AppContext, args: NameArgs) -> AppResult<()> {
    ctx.store.delete(&args.name)?;

    let name = args.name.trim();
    ctx.output.emit(
        &format!("layout `{name}` deleted"),
        &LayoutChange {
            action: "deleted",
            name,
            previous: None,
        },
    )
}
