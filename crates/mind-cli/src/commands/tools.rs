use chrono::{Local, Timelike};
use mind_core::care;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ToolCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mindease tools`.
pub fn handle(action: &ToolCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ToolCommands::Breathing { cycles } => {
            let cycles = cycles.unwrap_or(ctx.config.care.breathing_cycles);
            let plan = care::breathing_plan(cycles)?;
            output(&plan, flags.format)
        }
        ToolCommands::Grounding => output(&care::GROUNDING, flags.format),
        ToolCommands::Affirmation { index } => {
            let index = index.unwrap_or_else(|| usize::try_from(Local::now().second()).unwrap_or_default());
            output(
                &json!({ "affirmation": care::affirmation(index) }),
                flags.format,
            )
        }
        ToolCommands::Prompts => output(&care::MINI_PROMPTS, flags.format),
    }
}
