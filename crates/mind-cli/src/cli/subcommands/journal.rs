use clap::Subcommand;

/// Mood journal commands.
#[derive(Clone, Debug, Subcommand)]
pub enum JournalCommands {
    /// Save a journal entry.
    Add {
        /// Entry date, YYYY-MM-DD (defaults to today).
        #[arg(long)]
        date: Option<String>,
        /// One of: Happy, Calm, Okay, Worried, Anxious, Stressed, Sad, Angry, Frustrated, Tired.
        #[arg(long)]
        mood: Option<String>,
        /// Optional free-form note.
        #[arg(long)]
        note: Option<String>,
    },
    /// List saved entries, newest first.
    List {
        /// Leave note text out of the listing.
        #[arg(long)]
        hide_notes: bool,
        /// Max rows to show, newest first (0 shows every entry).
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Mood score trend over time.
    Trend,
    /// Summary statistics.
    Stats,
    /// Delete every saved entry.
    Clear {
        /// Confirm deletion.
        #[arg(long)]
        yes: bool,
    },
}
