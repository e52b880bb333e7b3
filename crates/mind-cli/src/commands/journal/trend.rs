use mind_store::{MoodHistory, TrendPoint};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::ui;

#[derive(Debug, Serialize)]
struct TrendResponse {
    points: Vec<TrendPoint>,
    excluded_from_trend: usize,
}

pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let history = MoodHistory::from_records(&ctx.store.read_all());

    if history.is_empty() {
        ui::notice(flags, ui::EMPTY_LOG_HINT);
    } else if history.trend.is_empty() {
        ui::notice(
            flags,
            "Dates couldn't be parsed for the trend, but your entries are saved.",
        );
    }

    output(
        &TrendResponse {
            points: history.trend,
            excluded_from_trend: history.excluded_from_trend,
        },
        flags.format,
    )
}
