use anyhow::Context;
use tasklet_core::enums::Filter;
use tasklet_core::ids::TaskId;

/// Parse a `--filter` value, keeping `current` when none was given.
pub fn resolve_filter(raw: Option<&str>, current: Filter) -> anyhow::Result<Filter> {
    raw.map_or(Ok(current), |value| {
        value
            .parse::<Filter>()
            .context("expected one of: all, active, completed")
    })
}

/// Parse a task ID argument.
pub fn parse_id(raw: &str) -> anyhow::Result<TaskId> {
    raw.parse::<TaskId>()
        .context("task IDs are the integers shown in the `id` column")
}
