use anyhow::Context;
use tasklet_core::responses::DeleteResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::IdArgs;
use crate::commands::shared::notice;
use crate::commands::shared::parse::parse_id;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tasklet delete`.
pub fn handle(args: &IdArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let id = parse_id(&args.id)?;
    let deleted = ctx.store.delete_task(id).context("failed to save tasks")?;
    if !deleted {
        notice(flags, &format!("no task with ID {id}; nothing deleted"));
    }
    output(&DeleteResponse { id, deleted }, flags.format, ctx.store.theme())
}
