use std::path::Path;

use anyhow::Context;
use mind_config::MindConfig;

/// Load `.env` from the working directory (if present), then the layered config.
pub fn load_config() -> anyhow::Result<MindConfig> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    load_dotenv_in(&cwd)?;
    MindConfig::load().context("failed to load mindease configuration")
}

/// Load `<dir>/.env` into the process environment. Returns whether a file was read.
/// Variables already set in the environment win.
fn load_dotenv_in(dir: &Path) -> anyhow::Result<bool> {
    let env_path = dir.join(".env");
    if !env_path.exists() {
        return Ok(false);
    }

    dotenvy::from_path(&env_path)
        .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    tracing::debug!(path = %env_path.display(), "loaded dotenv file");
    Ok(true)
}
