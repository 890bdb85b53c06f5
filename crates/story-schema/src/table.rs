//! Table descriptors.

use std::collections::HashSet;

use serde::Serialize;

use crate::column::{ColumnDef, ColumnKind};
use crate::error::SchemaError;

/// Body of a `POST /api/v2/meta/bases/{base_id}/tables` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableDef {
    /// Physical table name (e.g., `storyception_sessions`).
    pub table_name: &'static str,
    /// Display title shown in the NocoDB UI.
    pub title: &'static str,
    /// Columns in creation order.
    pub columns: &'static [ColumnDef],
}

impl TableDef {
    #[must_use]
    pub const fn new(
        table_name: &'static str,
        title: &'static str,
        columns: &'static [ColumnDef],
    ) -> Self {
        Self {
            table_name,
            title,
            columns,
        }
    }

    /// The column flagged as primary value, if exactly one is.
    #[must_use]
    pub fn primary_column(&self) -> Option<&ColumnDef> {
        let mut primaries = self.columns.iter().filter(|c| c.primary);
        match (primaries.next(), primaries.next()) {
            (Some(column), None) => Some(column),
            _ => None,
        }
    }

    /// Look up a column by its physical name.
    #[must_use]
    pub fn column(&self, column_name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.column_name == column_name)
    }

    /// Check the descriptor before it is sent.
    ///
    /// # Errors
    ///
    /// Returns the first [`SchemaError`] found: primary value count other
    /// than one, a repeated column name, a select column without options,
    /// or options on a non-select column.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let primaries = self.columns.iter().filter(|c| c.primary).count();
        match primaries {
            0 => {
                return Err(SchemaError::MissingPrimary {
                    table: self.table_name.to_string(),
                });
            }
            1 => {}
            count => {
                return Err(SchemaError::MultiplePrimary {
                    table: self.table_name.to_string(),
                    count,
                });
            }
        }

        let mut seen = HashSet::with_capacity(self.columns.len());
        for column in self.columns {
            if !seen.insert(column.column_name) {
                return Err(SchemaError::DuplicateColumn {
                    table: self.table_name.to_string(),
                    column: column.column_name.to_string(),
                });
            }

            let is_select = column.kind == ColumnKind::SingleSelect;
            if is_select && column.option_values().is_empty() {
                return Err(SchemaError::MissingOptions {
                    table: self.table_name.to_string(),
                    column: column.column_name.to_string(),
                });
            }
            if !is_select && column.options.is_some() {
                return Err(SchemaError::UnexpectedOptions {
                    table: self.table_name.to_string(),
                    column: column.column_name.to_string(),
                });
            }
        }

        Ok(())
    }
}
