//! # story-config
//!
//! Layered configuration loading for the Storyception table setup using
//! figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`STORYCEPTION_*` prefix, `__` as separator)
//! 2. `NOCODB_*` environment variables (the names the Storyception app uses)
//! 3. Project-level `.storyception/config.toml`
//! 4. User-level `~/.config/storyception/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `STORYCEPTION_NOCODB__BASE_ID` -> `nocodb.base_id`, and the short app
//! names `NOCODB_API_TOKEN`, `NOCODB_BASE_URL`, `NOCODB_BASE_ID`,
//! `NOCODB_TIMEOUT_SECS` map into the same `nocodb` section. Other
//! `NOCODB_*` variables (such as `NOCODB_TABLE_SESSIONS`) are ignored.
//!
//! # Usage
//!
//! ```no_run
//! use story_config::{SetupConfig, load_dotenv_from};
//!
//! load_dotenv_from(&std::env::current_dir().expect("cwd"));
//! let config = SetupConfig::load().expect("config");
//! println!("creating tables under {}", config.nocodb.tables_endpoint());
//! ```

mod error;
mod nocodb;

pub use error::ConfigError;
pub use nocodb::{DEFAULT_BASE_ID, DEFAULT_BASE_URL, NocoDbConfig};

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Keys accepted from the short `NOCODB_*` variables.
const NOCODB_ENV_KEYS: [&str; 4] = ["api_token", "base_url", "base_id", "timeout_secs"];

/// Keys whose environment values are taken verbatim. `Env` parses values, so
/// an all-digit token would otherwise arrive as a number.
const RAW_STRING_KEYS: [&str; 3] = ["api_token", "base_url", "base_id"];

/// Dotenv files read before the figment is built, first match wins per key.
const DOTENV_FILES: [&str; 2] = [".env.local", ".env"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SetupConfig {
    #[serde(default)]
    pub nocodb: NocoDbConfig,
}

impl SetupConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT read dotenv files -- call [`load_dotenv_from`] first for
    /// that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is
    /// invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.nocodb.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".storyception/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Short app variables
        figment = figment.merge(
            Env::prefixed("NOCODB_")
                .filter(|key| {
                    NOCODB_ENV_KEYS
                        .iter()
                        .any(|known| key.as_str().eq_ignore_ascii_case(known))
                })
                .map(|key| format!("nocodb.{}", key.as_str().to_ascii_lowercase()).into()),
        );
        figment = figment.merge(raw_string_vars("NOCODB_"));

        // Layer 4: Namespaced variables (highest priority)
        figment = figment.merge(Env::prefixed("STORYCEPTION_").split("__"));
        figment = figment.merge(raw_string_vars("STORYCEPTION_NOCODB__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("storyception").join("config.toml"))
    }
}

/// Re-read the string-typed `nocodb` keys under `prefix` without parsing.
fn raw_string_vars(prefix: &str) -> Figment {
    RAW_STRING_KEYS.iter().fold(Figment::new(), |figment, key| {
        match Env::var(&format!("{prefix}{key}")) {
            Some(value) => figment.merge(Serialized::default(&format!("nocodb.{key}"), value)),
            None => figment,
        }
    })
}

/// Read `.env.local` then `.env` from `dir` into the process environment.
///
/// Variables already set are never overwritten, so `.env.local` wins over
/// `.env` and the real environment wins over both. Missing files are
/// skipped. Returns the files that were read.
pub fn load_dotenv_from(dir: &Path) -> Vec<PathBuf> {
    DOTENV_FILES
        .iter()
        .map(|name| dir.join(name))
        .filter(|path| path.is_file())
        .filter(|path| dotenvy::from_path(path).is_ok())
        .collect()
}
