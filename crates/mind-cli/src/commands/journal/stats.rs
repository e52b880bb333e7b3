use mind_store::MoodStats;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stats = MoodStats::from_records(&ctx.store.read_all());
    output(&stats, flags.format)
}
