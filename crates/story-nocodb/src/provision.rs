//! Sequential table provisioning.
//!
//! Every table is attempted exactly once, in catalog order. A failure is
//! recorded on that table's report and the loop moves on; nothing here
//! aborts the batch. Running the batch again is the retry path, relying on
//! NocoDB's name conflict answer for tables that already made it.

use std::future::Future;

use serde::Serialize;
use story_schema::{TableDef, env_var_name};

use crate::classify::CreateOutcome;
use crate::client::NocoDbClient;
use crate::error::NocoDbError;

/// Anything that can create a table from its descriptor.
pub trait TableCreator {
    fn create(&self, table: &TableDef)
    -> impl Future<Output = Result<CreateOutcome, NocoDbError>>;
}

impl TableCreator for NocoDbClient {
    fn create(
        &self,
        table: &TableDef,
    ) -> impl Future<Output = Result<CreateOutcome, NocoDbError>> {
        self.create_table(table)
    }
}

/// Final state of one table after its creation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TableStatus {
    Created {
        id: Option<String>,
    },
    Skipped,
    Failed {
        /// HTTP status, when the server answered.
        http_status: Option<u16>,
        detail: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableReport {
    pub table_name: String,
    pub title: String,
    #[serde(flatten)]
    pub status: TableStatus,
}

impl TableReport {
    #[must_use]
    pub const fn is_created(&self) -> bool {
        matches!(self.status, TableStatus::Created { .. })
    }

    /// ID of a created table, if NocoDB returned one.
    #[must_use]
    pub fn created_id(&self) -> Option<&str> {
        match &self.status {
            TableStatus::Created { id } => id.as_deref(),
            _ => None,
        }
    }
}

/// `NAME=value` line for `.env.local`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvSuggestion {
    pub name: String,
    pub value: String,
}

impl std::fmt::Display for EnvSuggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Progress notifications emitted while the batch runs.
#[derive(Debug, Clone, Copy)]
pub enum ProvisionEvent<'a> {
    /// A request for `table` is about to be sent.
    Started {
        index: usize,
        total: usize,
        table: &'a TableDef,
    },
    /// The attempt for a table has a final status.
    Finished(&'a TableReport),
}

/// Reports for every attempted table, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProvisionSummary {
    pub reports: Vec<TableReport>,
}

impl ProvisionSummary {
    pub fn created(&self) -> impl Iterator<Item = &TableReport> {
        self.reports.iter().filter(|r| r.is_created())
    }

    #[must_use]
    pub fn created_count(&self) -> usize {
        self.created().count()
    }

    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| r.status == TableStatus::Skipped)
            .count()
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.status, TableStatus::Failed { .. }))
            .count()
    }

    /// Variable assignments for created tables that came back with an ID.
    #[must_use]
    pub fn env_suggestions(&self) -> Vec<EnvSuggestion> {
        self.created()
            .filter_map(|r| {
                r.created_id().map(|id| EnvSuggestion {
                    name: env_var_name(&r.table_name),
                    value: id.to_string(),
                })
            })
            .collect()
    }
}

/// Create every table in `tables`, one request at a time.
///
/// `on_event` sees each table start and finish, so callers can print
/// progress as it happens.
pub async fn provision<C, F>(creator: &C, tables: &[TableDef], mut on_event: F) -> ProvisionSummary
where
    C: TableCreator,
    F: FnMut(ProvisionEvent<'_>),
{
    let total = tables.len();
    let mut summary = ProvisionSummary {
        reports: Vec::with_capacity(total),
    };

    for (index, table) in tables.iter().enumerate() {
        on_event(ProvisionEvent::Started {
            index,
            total,
            table,
        });

        let status = match creator.create(table).await {
            Ok(CreateOutcome::Created { id }) => {
                tracing::info!(table = table.table_name, id = ?id, "table created");
                TableStatus::Created { id }
            }
            Ok(CreateOutcome::AlreadyExists) => {
                tracing::info!(table = table.table_name, "table already exists");
                TableStatus::Skipped
            }
            Err(error) => {
                tracing::warn!(
                    table = table.table_name,
                    timeout = error.is_timeout(),
                    %error,
                    "table creation failed"
                );
                TableStatus::Failed {
                    http_status: error.status(),
                    detail: error.detail(),
                }
            }
        };

        let report = TableReport {
            table_name: table.table_name.to_string(),
            title: table.title.to_string(),
            status,
        };
        on_event(ProvisionEvent::Finished(&report));
        summary.reports.push(report);
    }

    summary
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use pretty_assertions::assert_eq;
    use story_schema::ColumnDef;

    use super::*;

    const TABLES: [TableDef; 4] = [
        TableDef::new(
            "storyception_sessions",
            "Sessions",
            &[ColumnDef::text("session_id", "Session ID").primary()],
        ),
        TableDef::new(
            "storyception_beats",
            "Beats",
            &[ColumnDef::text("beat_id", "Beat ID").primary()],
        ),
        TableDef::new(
            "storyception_branches",
            "Branches",
            &[ColumnDef::text("branch_id", "Branch ID").primary()],
        ),
        TableDef::new(
            "storyception_keyframes",
            "Keyframes",
            &[ColumnDef::text("keyframe_id", "Keyframe ID").primary()],
        ),
    ];

    /// Replays canned results and records which tables were asked for.
    struct Scripted {
        results: RefCell<VecDeque<Result<CreateOutcome, NocoDbError>>>,
        calls: RefCell<Vec<String>>,
    }

    impl Scripted {
        fn new(results: Vec<Result<CreateOutcome, NocoDbError>>) -> Self {
            Self {
                results: RefCell::new(results.into()),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl TableCreator for Scripted {
        async fn create(&self, table: &TableDef) -> Result<CreateOutcome, NocoDbError> {
            self.calls.borrow_mut().push(table.table_name.to_string());
            self.results
                .borrow_mut()
                .pop_front()
                .expect("scripted result for every call")
        }
    }

    fn created(id: &str) -> Result<CreateOutcome, NocoDbError> {
        Ok(CreateOutcome::Created {
            id: Some(id.to_string()),
        })
    }

    #[tokio::test]
    async fn mixed_outcomes_are_recorded_per_table() {
        let creator = Scripted::new(vec![
            created("tbl_a"),
            Ok(CreateOutcome::AlreadyExists),
            Err(NocoDbError::Api {
                status: 500,
                message: "internal error".into(),
            }),
            Err(NocoDbError::Parse("truncated body".into())),
        ]);

        let summary = provision(&creator, &TABLES, |_| {}).await;

        assert_eq!(creator.calls.borrow().len(), 4);
        assert_eq!(summary.created_count(), 1);
        assert_eq!(summary.skipped_count(), 1);
        assert_eq!(summary.failed_count(), 2);
        assert_eq!(summary.reports[0].created_id(), Some("tbl_a"));
        assert_eq!(
            summary.reports[2].status,
            TableStatus::Failed {
                http_status: Some(500),
                detail: "API error (500): internal error".into(),
            }
        );
        assert_eq!(
            summary.env_suggestions(),
            vec![EnvSuggestion {
                name: "NOCODB_TABLE_SESSIONS".into(),
                value: "tbl_a".into(),
            }]
        );
    }

    #[tokio::test]
    async fn first_failure_does_not_stop_the_batch() {
        let creator = Scripted::new(vec![
            Err(NocoDbError::Api {
                status: 401,
                message: "Unauthorized".into(),
            }),
            created("tbl_b"),
            created("tbl_c"),
            created("tbl_d"),
        ]);

        let summary = provision(&creator, &TABLES, |_| {}).await;

        assert_eq!(
            *creator.calls.borrow(),
            vec![
                "storyception_sessions",
                "storyception_beats",
                "storyception_branches",
                "storyception_keyframes",
            ]
        );
        assert_eq!(summary.created_count(), 3);
        let names: Vec<_> = summary
            .env_suggestions()
            .into_iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "NOCODB_TABLE_BEATS=tbl_b",
                "NOCODB_TABLE_BRANCHES=tbl_c",
                "NOCODB_TABLE_KEYFRAMES=tbl_d",
            ]
        );
    }

    #[tokio::test]
    async fn created_without_id_gets_no_suggestion() {
        let creator = Scripted::new(vec![Ok(CreateOutcome::Created { id: None })]);
        let summary = provision(&creator, &TABLES[..1], |_| {}).await;
        assert_eq!(summary.created_count(), 1);
        assert!(summary.env_suggestions().is_empty());
    }

    #[tokio::test]
    async fn events_bracket_each_request() {
        let creator = Scripted::new(vec![created("tbl_a"), Ok(CreateOutcome::AlreadyExists)]);
        let mut log = Vec::new();

        provision(&creator, &TABLES[..2], |event| match event {
            ProvisionEvent::Started {
                index,
                total,
                table,
            } => log.push(format!("start {index}/{total} {}", table.table_name)),
            ProvisionEvent::Finished(report) => {
                log.push(format!("done {} created={}", report.table_name, report.is_created()));
            }
        })
        .await;

        assert_eq!(
            log,
            vec![
                "start 0/2 storyception_sessions",
                "done storyception_sessions created=true",
                "start 1/2 storyception_beats",
                "done storyception_beats created=false",
            ]
        );
    }

    #[tokio::test]
    async fn empty_catalog_yields_empty_summary() {
        let creator = Scripted::new(Vec::new());
        let summary = provision(&creator, &[], |_| {}).await;
        assert_eq!(summary, ProvisionSummary::default());
        assert!(summary.env_suggestions().is_empty());
    }

    #[test]
    fn report_serializes_flat() {
        let report = TableReport {
            table_name: "storyception_beats".into(),
            title: "Storyception Beats".into(),
            status: TableStatus::Failed {
                http_status: Some(401),
                detail: "API error (401): Unauthorized".into(),
            },
        };
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({
                "table_name": "storyception_beats",
                "title": "Storyception Beats",
                "outcome": "failed",
                "http_status": 401,
                "detail": "API error (401): Unauthorized"
            })
        );
    }
}
