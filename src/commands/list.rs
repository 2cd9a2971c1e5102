use crate::context::AppContext;
use crate::error::AppResult;
use crate::store::LayoutEntry;

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let layouts = ctx.store.list();
    ctx.output.emit_lines(&format_entries(&layouts), &layouts)
}

fn format_entries(layouts: &[LayoutEntry]) -> Vec<String> {
    if layouts.is_empty() {
        return vec!["No saved layouts".to_string()];
    }

    layouts.iter().map(format_entry).collect()
}

fn format_entry(entry: &LayoutEntry) -> String {
    let mut line = entry.name.clone();
    if entry.is_default {
        line.push_str(" (default)");
    }
    if !entry.saved {
        line.push_str(" [unsaved]");
    }
    line
}
