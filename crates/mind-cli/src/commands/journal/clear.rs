use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(yes: bool, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !yes {
        anyhow::bail!(
            "refusing to delete every entry in {} without --yes",
            ctx.store.path().display()
        );
    }

    let removed = ctx.store.clear()?;
    output(
        &json!({
            "cleared": removed,
            "log_path": ctx.store.path().display().to_string(),
        }),
        flags.format,
    )
}
