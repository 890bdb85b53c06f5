//! Schema validation errors.

use thiserror::Error;

/// A table descriptor that NocoDB would reject or mis-create.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("table '{table}' has no primary value column")]
    MissingPrimary { table: String },

    #[error("table '{table}' has {count} primary value columns, expected one")]
    MultiplePrimary { table: String, count: usize },

    #[error("table '{table}' declares column '{column}' more than once")]
    DuplicateColumn { table: String, column: String },

    #[error("select column '{table}.{column}' has no options")]
    MissingOptions { table: String, column: String },

    #[error("column '{table}.{column}' is not a select column but declares options")]
    UnexpectedOptions { table: String, column: String },
}
