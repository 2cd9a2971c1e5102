use serde::Serialize;

use crate::cli::{DefaultCommand, SetDefaultArgs};
use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Debug, Serialize)]
struct DefaultStatus<'a> {
    default: Option<&'a str>,
}

pub fn run(ctx: &mut AppContext, command: DefaultCommand) -> AppResult<()> {
    match command {
        DefaultCommand::Show => {
            let default = ctx.store.get_default();
            let text = match default {
                Some(name) => format!("default layout: {name}"),
                None => "no default layout".to_string(),
            };
            ctx.output.emit(&text, &DefaultStatus { default })
        }
        DefaultCommand::Set(args) => set(ctx, args),
        DefaultCommand::Clear => {
            let text = if ctx.store.clear_default()? {
                "default layout cleared"
            } else {
                "no default layout"
            };
            ctx.output.emit(text, &DefaultStatus { default: None })
        }
    }
}

fn set(ctx: &mut AppContext, args: SetDefaultArgs) -> AppResult<()> {
    if args.keep_state {
        ctx.store.set_default(&args.name)?;
    } else {
        let mut host = ctx.host()?;
        ctx.store.set_default_with_capture(&args.name, &mut host)?;
    }

    let default = ctx.store.get_default();
    let text = format!("default layout: {}", default.unwrap_or_default());
    ctx.output.emit(&text, &DefaultStatus { default })
}
