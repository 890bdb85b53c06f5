//! # story-nocodb
//!
//! NocoDB meta API client and the sequential table provisioner for
//! Storyception.
//!
//! The provisioner posts each catalog table to
//! `{base_url}/api/v2/meta/bases/{base_id}/tables` and classifies the answer:
//! - `200` with table metadata: created, with the new table ID
//! - 4xx mentioning "already exists": skipped
//! - anything else, or a transport failure: error, recorded for that table
//!
//! # Usage
//!
//! ```no_run
//! # async fn run() -> Result<(), story_nocodb::NocoDbError> {
//! use story_config::NocoDbConfig;
//! use story_nocodb::{NocoDbClient, provision};
//!
//! let client = NocoDbClient::new(&NocoDbConfig::default())?;
//! let summary = provision(&client, story_schema::catalog(), |_| {}).await;
//! for line in summary.env_suggestions() {
//!     println!("{line}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod classify;
pub mod provision;

mod client;
mod error;
mod http;

pub use classify::{CreateOutcome, classify};
pub use client::{NocoDbClient, TableMeta};
pub use error::NocoDbError;
pub use http::TOKEN_HEADER;
pub use provision::{
    EnvSuggestion, ProvisionEvent, ProvisionSummary, TableCreator, TableReport, TableStatus,
    provision,
};
