use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

/// Terminal facts resolved once at startup.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiPrefs {
    /// Paint table cells with the theme palette.
    pub table_color: bool,
    /// `COLUMNS`, when set to something usable.
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let color_allowed = std::env::var_os("NO_COLOR").is_none() && !flags.quiet;
    let prefs = UiPrefs {
        table_color: color_allowed
            && flags.format == OutputFormat::Table
            && std::io::stdout().is_terminal(),
        term_width: std::env::var("COLUMNS")
            .ok()
            .and_then(|value| value.parse().ok())
            .filter(|width: &usize| *width >= 40),
    };
    let _ = UI_PREFS.set(prefs);
}

/// Prefs from [`init`]; plain uncolored output before it runs (as in unit tests).
#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}
