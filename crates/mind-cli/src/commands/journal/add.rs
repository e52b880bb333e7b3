use chrono::Local;
use mind_core::MoodEntry;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_date, parse_mood};
use crate::context::AppContext;
use crate::output::output;
use crate::ui;

#[derive(Debug, Serialize)]
struct AddResponse {
    entry: MoodEntry,
    log_path: String,
}

pub fn run(
    date: Option<&str>,
    mood: Option<&str>,
    note: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let date = match date {
        Some(raw) => parse_date(raw, "date")?,
        None => Local::now().date_naive(),
    };
    let mood = mood.map(parse_mood).transpose()?.unwrap_or_default();

    let entry = ctx
        .store
        .append(&date.to_string(), mood.as_str(), note.unwrap_or_default())?;

    ui::notice(flags, "Saved! View it with `mindease journal list`.");

    output(
        &AddResponse {
            entry,
            log_path: ctx.store.path().display().to_string(),
        },
        flags.format,
    )
}
