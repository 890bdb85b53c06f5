//! Environment variable names for created table IDs.
//!
//! The Storyception app reads table IDs from `NOCODB_TABLE_*` variables
//! (`NOCODB_TABLE_SESSIONS`, `NOCODB_TABLE_BEATS`, ...).

/// Prefix of every table ID variable.
pub const ENV_PREFIX: &str = "NOCODB_TABLE_";

/// Application prefix dropped from upper-cased table names.
pub const TABLE_PREFIX: &str = "STORYCEPTION_";

/// Derive the variable name that holds a table's ID.
///
/// `storyception_beats` becomes `NOCODB_TABLE_BEATS`; names without the
/// application prefix are kept whole.
#[must_use]
pub fn env_var_name(table_name: &str) -> String {
    let upper = table_name.to_uppercase();
    format!("{ENV_PREFIX}{}", upper.replace(TABLE_PREFIX, ""))
}
