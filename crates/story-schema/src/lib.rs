//! # story-schema
//!
//! Static NocoDB table definitions for Storyception.
//!
//! The catalog is fixed at compile time and only ever serialized into
//! table creation requests:
//! - `storyception_sessions`: one row per user story session
//! - `storyception_beats`: story beats per session
//! - `storyception_branches`: branch options per beat
//! - `storyception_keyframes`: generated keyframe images
//!
//! # Usage
//!
//! ```
//! use story_schema::{catalog, env_var_name};
//!
//! for table in catalog() {
//!     assert!(table.validate().is_ok());
//!     println!("{} -> {}", table.table_name, env_var_name(table.table_name));
//! }
//! ```

mod catalog;
mod column;
mod error;
mod naming;
mod table;

pub use catalog::{catalog, find};
pub use column::{ColumnDef, ColumnKind};
pub use error::SchemaError;
pub use naming::{ENV_PREFIX, TABLE_PREFIX, env_var_name};
pub use table::TableDef;
