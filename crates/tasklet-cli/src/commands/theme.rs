use anyhow::Context;
use tasklet_core::responses::ThemeResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ThemeCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tasklet theme`.
pub fn handle(
    action: Option<ThemeCommands>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let theme = match action.unwrap_or(ThemeCommands::Show) {
        ThemeCommands::Show => ctx.store.theme(),
        ThemeCommands::Toggle => ctx
            .store
            .toggle_theme()
            .context("failed to save theme preference")?,
    };
    output(&ThemeResponse { theme }, flags.format, theme)
}
