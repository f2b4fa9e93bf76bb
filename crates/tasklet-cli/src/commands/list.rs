use crate::cli::GlobalFlags;
use crate::cli::root_commands::FilterArgs;
use crate::commands::shared::parse::resolve_filter;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tasklet list`.
pub fn handle(args: &FilterArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let filter = resolve_filter(args.filter.as_deref(), ctx.store.filter())?;
    ctx.store.set_filter(filter);
    output(&ctx.store.filtered_tasks(filter), flags.format, ctx.store.theme())
}
