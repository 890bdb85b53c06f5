use anyhow::Context;
use story_config::SetupConfig;
use story_nocodb::{NocoDbClient, ProvisionEvent, provision};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::{self, report};
use crate::progress::Progress;

/// Create every catalog table and print the outcome.
///
/// Per-table failures end up in the summary; this only errors when the
/// HTTP client cannot be built or the JSON summary cannot be written.
pub async fn handle(config: &SetupConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = NocoDbClient::new(&config.nocodb).context("failed to create NocoDB client")?;
    let chatty = flags.format == OutputFormat::Text && !flags.quiet;

    if chatty {
        println!("{}", report::banner(&config.nocodb));
    }

    let mut spinner: Option<Progress> = None;
    let summary = provision(&client, story_schema::catalog(), |event| match event {
        ProvisionEvent::Started { table, .. } => {
            if chatty {
                println!("{}", report::started_line(table));
            }
            spinner = Some(Progress::spinner("waiting for NocoDB"));
        }
        ProvisionEvent::Finished(table_report) => {
            if let Some(progress) = spinner.take() {
                progress.finish_clear();
            }
            if chatty {
                println!("{}\n", report::status_line(table_report));
            }
        }
    })
    .await;

    tracing::debug!(
        created = summary.created_count(),
        skipped = summary.skipped_count(),
        failed = summary.failed_count(),
        "setup finished"
    );

    match flags.format {
        OutputFormat::Text => print!("{}", report::summary(&summary)),
        OutputFormat::Json => {
            output::print_json(&report::SummaryView::new(&config.nocodb, &summary))?;
        }
    }

    Ok(())
}
