use anyhow::anyhow;
use clap::{Parser, ValueEnum};
use tasklet_config::TaskletConfig;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `tasklet` binary.
#[derive(Debug, Parser)]
#[command(name = "tasklet", version, about = "Tasklet - a small persistent to-do list")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to `general.default_format`)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (suppress notices and warnings)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Data directory for the file backend (overrides `storage.dir`)
    #[arg(short, long, global = true)]
    pub data_dir: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    ///
    /// # Errors
    ///
    /// Fails when `--format` is absent and `general.default_format` is not a
    /// known format name.
    pub fn global_flags(&self, config: &TaskletConfig) -> anyhow::Result<GlobalFlags> {
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&config.general.default_format, true).map_err(|_| {
                anyhow!(
                    "invalid general.default_format '{}': expected json, table or raw",
                    config.general.default_format
                )
            })?,
        };

        Ok(GlobalFlags {
            format,
            quiet: self.quiet,
            data_dir: self.data_dir.clone(),
        })
    }
}
