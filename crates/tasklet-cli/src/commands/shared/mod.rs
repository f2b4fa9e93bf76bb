pub mod parse;

use crate::cli::GlobalFlags;

/// Tell the user an intent changed nothing. Suppressed by `--quiet`.
pub fn notice(flags: &GlobalFlags, message: &str) {
    if !flags.quiet {
        eprintln!("tasklet: {message}");
    }
}
