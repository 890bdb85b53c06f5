use story_schema::TableDef;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::{self, table};
use crate::ui;

/// Print the creation payloads for every catalog table. No network access.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let catalog = story_schema::catalog();

    match flags.format {
        OutputFormat::Json => output::print_json(&catalog)?,
        OutputFormat::Text => {
            let rendered = catalog
                .iter()
                .map(|t| render_table_def(t, ui::prefs().term_width))
                .collect::<Vec<_>>();
            println!("{}", rendered.join("\n\n"));
        }
    }

    Ok(())
}

fn render_table_def(def: &TableDef, max_width: Option<usize>) -> String {
    let rows = def
        .columns
        .iter()
        .map(|c| {
            vec![
                c.column_name.to_string(),
                c.title.to_string(),
                c.kind.to_string(),
                if c.primary { "pv" } else { "" }.to_string(),
                c.option_values().join(", "),
            ]
        })
        .collect::<Vec<_>>();

    format!(
        "{} ({}, {} columns)\n{}",
        def.table_name,
        def.title,
        def.columns.len(),
        table::render_table(&["column", "title", "uidt", "", "options"], &rows, max_width)
    )
}
