use serde::Serialize;
use tracing::warn;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::host;

#[derive(Debug, Serialize)]
struct StartupResult {
    applied: Option<String>,
}

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let applied = apply_default(ctx);

    let text = match applied.as_deref() {
        Some(name) => format!("default layout `{name}` applied"),
        None => "no default layout applied".to_string(),
    };
    ctx.output.emit(&text, &StartupResult { applied })
}

/// Startup never fails: a missing host is logged like any other apply error.
fn apply_default(ctx: &AppContext) -> Option<String> {
    let default = ctx.store.get_default()?;

    let mut file_host = match ctx.host() {
        Ok(file_host) => file_host,
        Err(err) => {
            warn!(layout = %default, error = %err, "cannot apply default layout at startup");
            return None;
        }
    };

    host::apply_default_on_startup(&ctx.store, &mut file_host)
}
