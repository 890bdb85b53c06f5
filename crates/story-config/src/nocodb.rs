//! NocoDB connection configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Hosted NocoDB instance used by Storyception.
pub const DEFAULT_BASE_URL: &str = "https://nocodb.v1su4.com";

/// Storyception base (workspace) on the default instance.
pub const DEFAULT_BASE_ID: &str = "pce7ccvwdlz09bx";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_base_id() -> String {
    DEFAULT_BASE_ID.to_string()
}

/// Default per-request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Clone, Deserialize, Serialize)]
pub struct NocoDbConfig {
    /// Instance root URL, without the `/api` path.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Base (workspace) the tables are created in.
    #[serde(default = "default_base_id")]
    pub base_id: String,

    /// API token sent as `xc-token`. Empty means unauthenticated requests.
    #[serde(default)]
    pub api_token: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for NocoDbConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            base_id: default_base_id(),
            api_token: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl std::fmt::Debug for NocoDbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NocoDbConfig")
            .field("base_url", &self.base_url)
            .field("base_id", &self.base_id)
            .field("api_token", &if self.has_token() { "<redacted>" } else { "" })
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl NocoDbConfig {
    /// Whether an API token is present.
    pub fn has_token(&self) -> bool {
        !self.api_token.is_empty()
    }

    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// `{base_url}/api/v2/meta/bases/{base_id}/tables`
    pub fn tables_endpoint(&self) -> String {
        format!(
            "{}/api/v2/meta/bases/{}/tables",
            self.base_url.trim_end_matches('/'),
            self.base_id
        )
    }

    /// Reject values no request could succeed with.
    ///
    /// The token is not checked here; a missing token surfaces as per-table
    /// authorization errors from the server.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a non-http(s) base URL, an
    /// empty base id, or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "nocodb.base_url".into(),
                reason: format!("expected an http(s) URL, got '{}'", self.base_url),
            });
        }
        if self.base_id.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "nocodb.base_id".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "nocodb.timeout_secs".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}
