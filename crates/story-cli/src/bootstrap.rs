use anyhow::Context;
use story_config::SetupConfig;

/// Read dotenv files from the working directory, then build the config.
pub fn load_config() -> anyhow::Result<SetupConfig> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    for path in story_config::load_dotenv_from(&cwd) {
        tracing::debug!(path = %path.display(), "loaded dotenv file");
    }

    let config = SetupConfig::load().context("failed to load configuration")?;
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}
