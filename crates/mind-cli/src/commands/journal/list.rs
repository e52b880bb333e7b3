use mind_store::MoodHistory;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::listing_limit;
use crate::context::AppContext;
use crate::output::output;
use crate::ui;

pub fn run(
    hide_notes: bool,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let records = ctx.store.read_all();
    if records.is_empty() {
        ui::notice(flags, ui::EMPTY_LOG_HINT);
    }

    let limit = listing_limit(limit, flags, &ctx.config.general);
    let mut history = MoodHistory::from_records(&records).truncated(limit);
    if hide_notes || !ctx.config.general.show_notes {
        history = history.without_notes();
    }

    output(&history.rows, flags.format)
}
