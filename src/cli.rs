use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "docklayout", version, about = "Save and restore dock layouts")]
pub struct Cli {
    #[arg(long, global = true, help = "Layout store file")]
    pub store: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        help = "File holding the host window's current layout state"
    )]
    pub host_state: Option<PathBuf>,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List saved layouts
    List,
    /// Create a layout
    Create(CreateArgs),
    /// Capture the host's current layout into an existing layout
    Save(NameArgs),
    /// Apply a saved layout to the host
    Restore(NameArgs),
    /// Rename a saved layout
    Rename(RenameArgs),
    /// Delete a layout
    Delete(NameArgs),
    /// Show, set or clear the default layout
    Default(DefaultArgs),
    /// Apply the default layout, as done when the host starts
    Startup,
}

#[derive(Debug, Args)]
pub struct NameArgs {
    #[arg(help = "Layout name")]
    pub name: String,
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    #[arg(help = "Layout name")]
    pub name: String,
    #[arg(long, help = "Capture the host's current layout immediately")]
    pub capture: bool,
}

#[derive(Debug, Args)]
pub struct RenameArgs {
    #[arg(help = "Current layout name")]
    pub old: String,
    #[arg(help = "New layout name")]
    pub new: String,
}

#[derive(Debug, Args)]
pub struct DefaultArgs {
    #[command(subcommand)]
    pub command: DefaultCommand,
}

#[derive(Debug, Subcommand)]
pub enum DefaultCommand {
    Show,
    Set(SetDefaultArgs),
    Clear,
}

#[derive(Debug, Args)]
pub struct SetDefaultArgs {
    #[arg(help = "Layout name")]
    pub name: String,
    #[arg(long, help = "Mark as default without capturing the current layout first")]
    pub keep_state: bool,
}
