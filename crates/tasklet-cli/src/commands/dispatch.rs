use crate::cli::{Commands, GlobalFlags};
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Add(args) => commands::add::handle(&args, ctx, flags),
        Commands::Toggle(args) => commands::toggle::handle(&args, ctx, flags),
        Commands::Delete(args) => commands::delete::handle(&args, ctx, flags),
        Commands::List(args) => commands::list::handle(&args, ctx, flags),
        Commands::Stats => commands::stats::handle(ctx, flags),
        Commands::Theme { action } => commands::theme::handle(action, ctx, flags),
        Commands::Dashboard(args) => commands::dashboard::handle(&args, ctx, flags),
        Commands::Session(args) => commands::session::handle(&args, ctx, flags),
    }
}
