use mind_core::care::{DISCLAIMER, PRIVACY_NOTICE};
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mindease privacy`. Also reports where entries are written.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(
        &json!({
            "privacy": PRIVACY_NOTICE,
            "disclaimer": DISCLAIMER,
            "log_path": ctx.store.path().display().to_string(),
        }),
        flags.format,
    )
}
