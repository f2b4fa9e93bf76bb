use clap::{Args, Subcommand};

use crate::cli::subcommands::ThemeCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Add a task.
    Add(AddArgs),
    /// Flip a task between active and completed.
    Toggle(IdArgs),
    /// Delete a task. There is no confirmation and no undo.
    #[command(visible_alias = "rm")]
    Delete(IdArgs),
    /// List tasks.
    #[command(visible_alias = "ls")]
    List(FilterArgs),
    /// Task counts.
    Stats,
    /// Show or toggle the light/dark theme.
    Theme {
        #[command(subcommand)]
        action: Option<ThemeCommands>,
    },
    /// Counts, theme and the filtered task list in one view.
    Dashboard(FilterArgs),
    /// Interactive session reading intents from stdin.
    Session(FilterArgs),
}

/// Arguments for `tasklet add`.
#[derive(Clone, Debug, Args)]
pub struct AddArgs {
    /// Task text; multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

/// A single task ID argument.
#[derive(Clone, Debug, Args)]
pub struct IdArgs {
    /// Hydrated data may carry negative IDs.
    #[arg(allow_negative_numbers = true)]
    pub id: String,
}

/// Optional view filter.
#[derive(Clone, Debug, Args)]
pub struct FilterArgs {
    /// all, active or completed (defaults to `general.default_filter`).
    #[arg(long)]
    pub filter: Option<String>,
}
