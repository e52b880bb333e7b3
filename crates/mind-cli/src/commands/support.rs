use mind_core::care::{EMERGENCY_NOTE, HOTLINES, Hotline, SAFETY_NOTE};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SupportResponse {
    hotlines: &'static [Hotline],
    safety_note: &'static str,
    emergency_note: &'static str,
}

/// Handle `mindease support`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(
        &SupportResponse {
            hotlines: HOTLINES,
            safety_note: SAFETY_NOTE,
            emergency_note: EMERGENCY_NOTE,
        },
        flags.format,
    )
}
