mod add;
mod clear;
mod list;
mod stats;
mod trend;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::JournalCommands;
use crate::context::AppContext;

/// Handle `mindease journal`.
pub fn handle(action: &JournalCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        JournalCommands::Add { date, mood, note } => add::run(
            date.as_deref(),
            mood.as_deref(),
            note.as_deref(),
            ctx,
            flags,
        ),
        JournalCommands::List { hide_notes, limit } => list::run(*hide_notes, *limit, ctx, flags),
        JournalCommands::Trend => trend::run(ctx, flags),
        JournalCommands::Stats => stats::run(ctx, flags),
        JournalCommands::Clear { yes } => clear::run(*yes, ctx, flags),
    }
}

#[cfg(test)]
mod tests {
    use mind_config::MindConfig;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::handle;
    use crate::cli::subcommands::JournalCommands;
    use crate::cli::{ColorMode, GlobalFlags, OutputFormat};
    use crate::context::AppContext;

    fn setup(temp: &TempDir) -> (AppContext, GlobalFlags) {
        let flags = GlobalFlags {
            format: OutputFormat::Raw,
            limit: None,
            quiet: true,
            verbose: false,
            color: ColorMode::Never,
            log_file: Some(temp.path().join("mood_log.csv").display().to_string()),
        };
        (AppContext::init(MindConfig::default(), &flags), flags)
    }

    fn add(date: &str, mood: &str, note: &str) -> JournalCommands {
        JournalCommands::Add {
            date: Some(date.to_string()),
            mood: Some(mood.to_string()),
            note: Some(note.to_string()),
        }
    }

    #[test]
    fn add_normalizes_mood_label_before_scoring() {
        let temp = TempDir::new().expect("tempdir should create");
        let (ctx, flags) = setup(&temp);

        handle(&add("2024-01-01", "happy", "good day"), &ctx, &flags).expect("add should work");

        let records = ctx.store.read_all();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].mood, "Happy");
        assert_eq!(records[0].score, "5");
    }

    #[test]
    fn add_defaults_to_okay_and_empty_note() {
        let temp = TempDir::new().expect("tempdir should create");
        let (ctx, flags) = setup(&temp);

        let action = JournalCommands::Add {
            date: Some("2024-01-01".to_string()),
            mood: None,
            note: None,
        };
        handle(&action, &ctx, &flags).expect("add should work");

        let records = ctx.store.read_all();
        assert_eq!(records[0].mood, "Okay");
        assert_eq!(records[0].note, "");
        assert_eq!(records[0].score, "3");
    }

    #[test]
    fn add_rejects_bad_input_without_writing() {
        let temp = TempDir::new().expect("tempdir should create");
        let (ctx, flags) = setup(&temp);

        assert!(handle(&add("2024-13-01", "Happy", ""), &ctx, &flags).is_err());
        assert!(handle(&add("2024-01-01", "Elated", ""), &ctx, &flags).is_err());
        assert!(!ctx.store.exists());
    }

    #[test]
    fn clear_requires_confirmation() {
        let temp = TempDir::new().expect("tempdir should create");
        let (ctx, flags) = setup(&temp);

        handle(&add("2024-01-01", "Sad", ""), &ctx, &flags).expect("add should work");

        let err = handle(&JournalCommands::Clear { yes: false }, &ctx, &flags)
            .expect_err("clear without --yes should fail");
        assert!(err.to_string().contains("--yes"));
        assert_eq!(ctx.store.read_all().len(), 1);

        handle(&JournalCommands::Clear { yes: true }, &ctx, &flags).expect("clear should work");
        assert!(ctx.store.read_all().is_empty());
    }

    #[test]
    fn read_views_work_on_empty_log() {
        let temp = TempDir::new().expect("tempdir should create");
        let (ctx, flags) = setup(&temp);

        let list = JournalCommands::List {
            hide_notes: false,
            limit: None,
        };
        handle(&list, &ctx, &flags).expect("list should work");
        handle(&JournalCommands::Trend, &ctx, &flags).expect("trend should work");
        handle(&JournalCommands::Stats, &ctx, &flags).expect("stats should work");
    }
}
