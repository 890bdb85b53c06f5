//! Column descriptors.

use serde::Serialize;

/// NocoDB UI data type (`uidt`) of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnKind {
    SingleLineText,
    LongText,
    #[serde(rename = "URL")]
    Url,
    Number,
    SingleSelect,
    DateTime,
    Checkbox,
}

impl ColumnKind {
    /// Wire spelling of the kind, as NocoDB expects it in `uidt`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SingleLineText => "SingleLineText",
            Self::LongText => "LongText",
            Self::Url => "URL",
            Self::Number => "Number",
            Self::SingleSelect => "SingleSelect",
            Self::DateTime => "DateTime",
            Self::Checkbox => "Checkbox",
        }
    }
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One column of a table creation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnDef {
    /// Physical column name (e.g., `session_id`).
    pub column_name: &'static str,
    /// Display title shown in the NocoDB UI.
    pub title: &'static str,
    /// Value kind.
    #[serde(rename = "uidt")]
    pub kind: ColumnKind,
    /// Primary value (display) column marker.
    #[serde(rename = "pv", skip_serializing_if = "is_false")]
    pub primary: bool,
    /// Quoted, comma-separated option list for single-select columns,
    /// e.g. `'active','completed'`.
    #[serde(rename = "dtxp", skip_serializing_if = "Option::is_none")]
    pub options: Option<&'static str>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(value: &bool) -> bool {
    !*value
}

impl ColumnDef {
    #[must_use]
    pub const fn new(column_name: &'static str, title: &'static str, kind: ColumnKind) -> Self {
        Self {
            column_name,
            title,
            kind,
            primary: false,
            options: None,
        }
    }

    #[must_use]
    pub const fn text(column_name: &'static str, title: &'static str) -> Self {
        Self::new(column_name, title, ColumnKind::SingleLineText)
    }

    #[must_use]
    pub const fn long_text(column_name: &'static str, title: &'static str) -> Self {
        Self::new(column_name, title, ColumnKind::LongText)
    }

    #[must_use]
    pub const fn url(column_name: &'static str, title: &'static str) -> Self {
        Self::new(column_name, title, ColumnKind::Url)
    }

    #[must_use]
    pub const fn number(column_name: &'static str, title: &'static str) -> Self {
        Self::new(column_name, title, ColumnKind::Number)
    }

    #[must_use]
    pub const fn date_time(column_name: &'static str, title: &'static str) -> Self {
        Self::new(column_name, title, ColumnKind::DateTime)
    }

    #[must_use]
    pub const fn checkbox(column_name: &'static str, title: &'static str) -> Self {
        Self::new(column_name, title, ColumnKind::Checkbox)
    }

    /// Single-select column with its quoted option list.
    #[must_use]
    pub const fn select(
        column_name: &'static str,
        title: &'static str,
        options: &'static str,
    ) -> Self {
        Self {
            options: Some(options),
            ..Self::new(column_name, title, ColumnKind::SingleSelect)
        }
    }

    /// Mark this column as the table's primary value.
    #[must_use]
    pub const fn primary(self) -> Self {
        Self {
            primary: true,
            ..self
        }
    }

    /// Option values with quotes stripped, in declaration order.
    ///
    /// Empty for columns without an option list.
    #[must_use]
    pub fn option_values(&self) -> Vec<&'static str> {
        self.options
            .map(|raw| {
                raw.split(',')
                    .map(|opt| opt.trim().trim_matches('\''))
                    .filter(|opt| !opt.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn plain_column_omits_optional_markers() {
        let column = ColumnDef::text("user_id", "User ID");
        assert_eq!(
            serde_json::to_value(column).unwrap(),
            json!({"column_name": "user_id", "title": "User ID", "uidt": "SingleLineText"})
        );
    }

    #[test]
    fn primary_column_serializes_pv() {
        let column = ColumnDef::text("session_id", "Session ID").primary();
        assert_eq!(
            serde_json::to_value(column).unwrap(),
            json!({
                "column_name": "session_id",
                "title": "Session ID",
                "uidt": "SingleLineText",
                "pv": true
            })
        );
    }

    #[test]
    fn select_column_serializes_dtxp() {
        let column = ColumnDef::select("status", "Status", "'active','completed','abandoned'");
        let value = serde_json::to_value(column).unwrap();
        assert_eq!(value["uidt"], "SingleSelect");
        assert_eq!(value["dtxp"], "'active','completed','abandoned'");
        assert!(value.get("pv").is_none());
    }

    #[test]
    fn url_kind_uses_uppercase_spelling() {
        let value = serde_json::to_value(ColumnDef::url("image_url", "Image URL")).unwrap();
        assert_eq!(value["uidt"], "URL");
        assert_eq!(ColumnKind::Url.to_string(), "URL");
    }

    #[test]
    fn option_values_strip_quotes() {
        let column = ColumnDef::select("status", "Status", "'pending', 'ready','locked'");
        assert_eq!(column.option_values(), vec!["pending", "ready", "locked"]);
        assert!(ColumnDef::number("depth", "Depth").option_values().is_empty());
    }
}
