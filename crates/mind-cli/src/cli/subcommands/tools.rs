use clap::Subcommand;

/// Self-care tool commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ToolCommands {
    /// Box-breathing timer.
    Breathing {
        #[arg(long, value_parser = clap::value_parser!(u32).range(2..=8))]
        cycles: Option<u32>,
    },
    /// Grounding 5-4-3-2-1 exercise.
    Grounding,
    /// A single affirmation.
    Affirmation {
        /// Pick a specific affirmation instead of rotating by clock.
        #[arg(long)]
        index: Option<usize>,
    },
    /// Reflection prompts.
    Prompts,
}
