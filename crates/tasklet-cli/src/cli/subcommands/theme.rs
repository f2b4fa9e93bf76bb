use clap::Subcommand;

/// Theme preference commands.
#[derive(Clone, Copy, Debug, Subcommand)]
pub enum ThemeCommands {
    /// Print the current theme (default).
    Show,
    /// Switch between light and dark.
    Toggle,
}
