use mind_core::care::{Guidance, guidance_for};
use mind_core::{Analysis, analyze};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AnalyzeArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AnalyzeResponse {
    analysis: Analysis,
    guidance: Guidance,
}

/// Handle `mindease analyze`.
pub fn handle(args: &AnalyzeArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = build(&args.text)?;
    output(&response, flags.format)
}

fn build(words: &[String]) -> anyhow::Result<AnalyzeResponse> {
    let text = words.join(" ");
    if text.trim().is_empty() {
        anyhow::bail!("Please type something to analyze.");
    }

    let analysis = analyze(&text);
    let guidance = guidance_for(analysis.category);
    Ok(AnalyzeResponse { analysis, guidance })
}
