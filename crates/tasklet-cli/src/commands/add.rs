use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AddArgs;
use crate::commands::shared::notice;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tasklet add`.
pub fn handle(args: &AddArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let text = args.text.join(" ");
    let created = ctx.store.add_task(&text).context("failed to save tasks")?;
    if created.is_none() {
        notice(flags, "task text is blank; nothing added");
    }
    output(&created, flags.format, ctx.store.theme())
}
