use clap::{Args, Subcommand};

use crate::cli::subcommands::{JournalCommands, ToolCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Mood journal entries and history.
    Journal {
        #[command(subcommand)]
        action: JournalCommands,
    },
    /// Classify how a piece of text sounds and suggest self-care.
    Analyze(AnalyzeArgs),
    /// Self-care tools.
    Tools {
        #[command(subcommand)]
        action: ToolCommands,
    },
    /// Support hotlines.
    Support,
    /// Privacy notice and disclaimer.
    Privacy,
}

/// Arguments for `mindease analyze`.
#[derive(Clone, Debug, Args)]
pub struct AnalyzeArgs {
    /// Text to analyze. Multiple words are joined with spaces.
    pub text: Vec<String>,
}
