use std::path::PathBuf;

use mind_config::MindConfig;
use mind_store::MoodLogStore;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
#[derive(Debug)]
pub struct AppContext {
    pub config: MindConfig,
    pub store: MoodLogStore,
}

impl AppContext {
    /// Build the context. `--log-file` wins over `store.log_path`.
    pub fn init(config: MindConfig, flags: &GlobalFlags) -> Self {
        let log_path = flags
            .log_file
            .as_deref()
            .map_or_else(|| config.store.log_path(), PathBuf::from);

        tracing::debug!(path = %log_path.display(), "using mood log");

        Self {
            store: MoodLogStore::new(log_path),
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use mind_config::MindConfig;

    use super::AppContext;
    use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

    fn flags(log_file: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit: None,
            quiet: true,
            verbose: false,
            color: ColorMode::Never,
            log_file: log_file.map(str::to_string),
        }
    }

    #[test]
    fn uses_configured_log_path_by_default() {
        let ctx = AppContext::init(MindConfig::default(), &flags(None));
        assert_eq!(ctx.store.path(), Path::new("mood_log.csv"));
    }

    #[test]
    fn log_file_flag_overrides_config() {
        let ctx = AppContext::init(MindConfig::default(), &flags(Some("/tmp/other.csv")));
        assert_eq!(ctx.store.path(), Path::new("/tmp/other.csv"));
    }
}
