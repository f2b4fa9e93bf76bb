use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::IdArgs;
use crate::commands::shared::notice;
use crate::commands::shared::parse::parse_id;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tasklet toggle`.
pub fn handle(args: &IdArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let id = parse_id(&args.id)?;
    let task = ctx.store.toggle_task(id).context("failed to save tasks")?;
    if task.is_none() {
        notice(flags, &format!("no task with ID {id}; nothing toggled"));
    }
    output(&task, flags.format, ctx.store.theme())
}
