//! Console text for the setup run.

use std::fmt::Write as _;

use serde::Serialize;
use story_config::NocoDbConfig;
use story_nocodb::{EnvSuggestion, ProvisionSummary, TableReport, TableStatus};
use story_schema::TableDef;

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", rule());
}

/// Title block printed before any request.
#[must_use]
pub fn banner(config: &NocoDbConfig) -> String {
    let mut out = String::new();
    heading(&mut out, "STORYCEPTION - NocoDB Table Setup");
    let _ = writeln!(out, "Base URL: {}", config.base_url);
    let _ = writeln!(out, "Base ID: {}", config.base_id);
    out
}

#[must_use]
pub fn started_line(table: &TableDef) -> String {
    format!("Creating table: {}...", table.title)
}

/// Indented `[OK]` / `[SKIP]` / `[ERROR]` line for a finished table.
#[must_use]
pub fn status_line(report: &TableReport) -> String {
    match &report.status {
        TableStatus::Created { id } => format!(
            "  [OK] Created: {} (ID: {})",
            report.table_name,
            id.as_deref().unwrap_or("unknown")
        ),
        TableStatus::Skipped => format!("  [SKIP] Table already exists: {}", report.table_name),
        TableStatus::Failed { detail, .. } => {
            format!("  [ERROR] {}: {detail}", report.table_name)
        }
    }
}

/// Closing block: created tables, env assignments to copy, sign-off.
#[must_use]
pub fn summary(summary: &ProvisionSummary) -> String {
    let mut out = String::new();
    heading(&mut out, "SUMMARY");

    let created: Vec<&TableReport> = summary.created().collect();
    if created.is_empty() {
        let _ = writeln!(out, "No new tables created (may already exist)");
    } else {
        let _ = writeln!(out, "[OK] Created {} tables:", created.len());
        for report in &created {
            let _ = writeln!(
                out,
                "   - {}: {}",
                report.table_name,
                report.created_id().unwrap_or("unknown")
            );
        }

        let suggestions = summary.env_suggestions();
        if !suggestions.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Add these table IDs to your .env.local:");
            for suggestion in &suggestions {
                let _ = writeln!(out, "   {suggestion}");
            }
        }
    }

    let skipped = summary.skipped_count();
    let failed = summary.failed_count();
    if skipped > 0 || failed > 0 {
        let _ = writeln!(out);
        let _ = writeln!(out, "Skipped: {skipped}, failed: {failed}");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Done! You can now run the Storyception UI.");
    out
}

/// JSON document printed by `setup --format json`.
#[derive(Debug, Serialize)]
pub struct SummaryView<'a> {
    pub base_url: &'a str,
    pub base_id: &'a str,
    pub created: usize,
    pub skipped: usize,
    pub failed: usize,
    pub tables: &'a [TableReport],
    pub env: Vec<EnvSuggestion>,
}

impl<'a> SummaryView<'a> {
    #[must_use]
    pub fn new(config: &'a NocoDbConfig, summary: &'a ProvisionSummary) -> Self {
        Self {
            base_url: &config.base_url,
            base_id: &config.base_id,
            created: summary.created_count(),
            skipped: summary.skipped_count(),
            failed: summary.failed_count(),
            tables: &summary.reports,
            env: summary.env_suggestions(),
        }
    }
}
