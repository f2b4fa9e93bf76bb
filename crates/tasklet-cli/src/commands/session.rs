//! `tasklet session`: a line-oriented loop that forwards intents to the store
//! and redraws the dashboard after each one.

use std::io::{BufRead, IsTerminal, Write};

use anyhow::{Context, bail};
use tasklet_core::enums::Filter;
use tasklet_core::ids::TaskId;
use tasklet_store::{KeyValueStore, TaskStore};

use crate::cli::root_commands::FilterArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::parse::{parse_id, resolve_filter};
use crate::context::AppContext;
use crate::output::{render, render_snapshot};

const HELP: &str = "\
commands:
  add <text>      add a task
  toggle <id>     flip a task between active and completed
  delete <id>     delete a task (alias: rm)
  filter <name>   show all, active or completed tasks
  theme           switch between light and dark
  stats           show task counts
  list            redraw the dashboard
  help            show this help
  quit            leave the session (alias: exit, or end of input)";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Add(String),
    Toggle(TaskId),
    Delete(TaskId),
    Filter(Filter),
    Theme,
    Stats,
    List,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_intent(line: &str) -> anyhow::Result<Option<Intent>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

    let intent = match verb.to_ascii_lowercase().as_str() {
        // Blank text is the store's call, not a parse error.
        "add" => Intent::Add(rest.to_string()),
        "toggle" => Intent::Toggle(parse_id(required(rest, "toggle <id>")?)?),
        "delete" | "rm" => Intent::Delete(parse_id(required(rest, "delete <id>")?)?),
        "filter" => Intent::Filter(resolve_filter(
            Some(required(rest, "filter <all|active|completed>")?),
            Filter::All,
        )?),
        "theme" => Intent::Theme,
        "stats" => Intent::Stats,
        "list" | "ls" => Intent::List,
        "help" | "?" => Intent::Help,
        "quit" | "exit" => Intent::Quit,
        other => bail!("unknown command '{other}' (try `help`)"),
    };
    Ok(Some(intent))
}

fn required<'a>(rest: &'a str, usage: &str) -> anyhow::Result<&'a str> {
    if rest.is_empty() {
        bail!("usage: {usage}");
    }
    Ok(rest)
}

/// Rendering options for a session.
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    pub format: OutputFormat,
    pub quiet: bool,
    pub prompt: bool,
}

/// Handle `tasklet session`.
pub fn handle(args: &FilterArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let filter = resolve_filter(args.filter.as_deref(), ctx.store.filter())?;
    ctx.store.set_filter(filter);

    let stdin = std::io::stdin();
    let options = SessionOptions {
        format: flags.format,
        quiet: flags.quiet,
        prompt: stdin.is_terminal(),
    };

    drive(
        &mut ctx.store,
        stdin.lock(),
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
        options,
    )
}

/// Run the loop until `quit` or end of input.
///
/// Input problems and failed writes are reported on `err` and the loop keeps
/// going. Only I/O errors on `input` or `out` end it early.
pub fn drive<S, R, W, E>(
    store: &mut TaskStore<S>,
    input: R,
    out: &mut W,
    err: &mut E,
    options: SessionOptions,
) -> anyhow::Result<()>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
    E: Write,
{
    writeln!(out, "{}", render_snapshot(&store.snapshot(), options.format)?)?;
    prompt(out, options)?;

    for line in input.lines() {
        let line = line.context("failed to read session input")?;

        let intent = match parse_intent(&line) {
            Ok(Some(intent)) => intent,
            Ok(None) => {
                prompt(out, options)?;
                continue;
            }
            Err(error) => {
                writeln!(err, "error: {error:#}")?;
                prompt(out, options)?;
                continue;
            }
        };

        if intent == Intent::Quit {
            break;
        }

        tracing::debug!(?intent, "session intent");
        if let Err(error) = apply(store, &intent, err, options) {
            writeln!(err, "error: {error:#}")?;
        }

        match intent {
            Intent::Help => writeln!(out, "{HELP}")?,
            Intent::Stats => {
                writeln!(out, "{}", render(&store.counts(), options.format, store.theme())?)?;
            }
            _ => writeln!(out, "{}", render_snapshot(&store.snapshot(), options.format)?)?,
        }
        prompt(out, options)?;
    }

    Ok(())
}

fn apply<S, E>(
    store: &mut TaskStore<S>,
    intent: &Intent,
    err: &mut E,
    options: SessionOptions,
) -> anyhow::Result<()>
where
    S: KeyValueStore,
    E: Write,
{
    let notice = match intent {
        Intent::Add(text) => store
            .add_task(text)
            .context("failed to save tasks")?
            .is_none()
            .then(|| String::from("task text is blank; nothing added")),
        Intent::Toggle(id) => store
            .toggle_task(*id)
            .context("failed to save tasks")?
            .is_none()
            .then(|| format!("no task with ID {id}")),
        Intent::Delete(id) => (!store.delete_task(*id).context("failed to save tasks")?)
            .then(|| format!("no task with ID {id}")),
        Intent::Filter(filter) => {
            store.set_filter(*filter);
            None
        }
        Intent::Theme => {
            store
                .toggle_theme()
                .context("failed to save theme preference")?;
            None
        }
        Intent::Stats | Intent::List | Intent::Help | Intent::Quit => None,
    };

    if let Some(message) = notice.filter(|_| !options.quiet) {
        writeln!(err, "{message}")?;
    }
    Ok(())
}

fn prompt<W: Write>(out: &mut W, options: SessionOptions) -> anyhow::Result<()> {
    if options.prompt {
        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}
