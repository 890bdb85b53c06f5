use anyhow::Context;
use story_config::SetupConfig;
use story_nocodb::NocoDbClient;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::{self, table};
use crate::ui;

/// List tables already present in the configured base.
pub async fn handle(config: &SetupConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = NocoDbClient::new(&config.nocodb).context("failed to create NocoDB client")?;
    let tables = client
        .list_tables()
        .await
        .with_context(|| format!("failed to list tables at {}", client.tables_endpoint()))?;

    match flags.format {
        OutputFormat::Json => output::print_json(&tables)?,
        OutputFormat::Text => {
            if tables.is_empty() {
                println!("(no tables in base {})", config.nocodb.base_id);
                return Ok(());
            }
            let rows = tables
                .iter()
                .map(|t| {
                    let known = story_schema::find(&t.table_name).is_some();
                    vec![
                        t.id.clone(),
                        t.table_name.clone(),
                        t.title.clone(),
                        if known { "yes" } else { "no" }.to_string(),
                    ]
                })
                .collect::<Vec<_>>();
            println!(
                "{}",
                table::render_table(
                    &["id", "table_name", "title", "storyception"],
                    &rows,
                    ui::prefs().term_width,
                )
            );
        }
    }

    Ok(())
}
