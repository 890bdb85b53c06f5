//! The Storyception table catalog.

use crate::column::ColumnDef;
use crate::table::TableDef;

static CATALOG: [TableDef; 4] = [
    TableDef::new(
        "storyception_sessions",
        "Storyception Sessions",
        &[
            ColumnDef::text("session_id", "Session ID").primary(),
            ColumnDef::text("user_id", "User ID"),
            ColumnDef::text("archetype", "Archetype"),
            ColumnDef::text("outcome", "Outcome"),
            ColumnDef::url("reference_image_url", "Reference Image URL"),
            ColumnDef::select("status", "Status", "'active','completed','abandoned'"),
            ColumnDef::number("current_beat", "Current Beat"),
            ColumnDef::number("total_beats", "Total Beats"),
            ColumnDef::long_text("story_data", "Story Data (JSON)"),
            ColumnDef::date_time("created_at", "Created At"),
            ColumnDef::date_time("updated_at", "Updated At"),
        ],
    ),
    TableDef::new(
        "storyception_beats",
        "Storyception Beats",
        &[
            ColumnDef::text("beat_id", "Beat ID").primary(),
            ColumnDef::text("session_id", "Session ID"),
            ColumnDef::number("beat_index", "Beat Index"),
            ColumnDef::text("beat_label", "Beat Label"),
            ColumnDef::long_text("beat_description", "Description"),
            ColumnDef::long_text("generated_idea", "Generated Idea"),
            ColumnDef::text("duration", "Duration"),
            ColumnDef::number("percent_of_total", "Percent of Total"),
            ColumnDef::text("selected_branch_id", "Selected Branch ID"),
            ColumnDef::long_text("keyframes_json", "Keyframes (JSON)"),
            ColumnDef::select("status", "Status", "'pending','generating','ready','locked'"),
            ColumnDef::date_time("created_at", "Created At"),
        ],
    ),
    TableDef::new(
        "storyception_branches",
        "Storyception Branches",
        &[
            ColumnDef::text("branch_id", "Branch ID").primary(),
            ColumnDef::text("beat_id", "Beat ID"),
            ColumnDef::text("session_id", "Session ID"),
            ColumnDef::number("branch_index", "Branch Index"),
            ColumnDef::text("branch_type", "Branch Type"),
            ColumnDef::text("title", "Title"),
            ColumnDef::long_text("description", "Description"),
            ColumnDef::text("duration", "Duration"),
            ColumnDef::long_text("keyframes_json", "Keyframes (JSON)"),
            ColumnDef::checkbox("is_selected", "Is Selected"),
            ColumnDef::number("depth", "Inception Depth"),
            ColumnDef::text("parent_branch_id", "Parent Branch ID"),
            ColumnDef::date_time("created_at", "Created At"),
        ],
    ),
    TableDef::new(
        "storyception_keyframes",
        "Storyception Keyframes",
        &[
            ColumnDef::text("keyframe_id", "Keyframe ID").primary(),
            ColumnDef::text("session_id", "Session ID"),
            ColumnDef::text("beat_id", "Beat ID"),
            ColumnDef::text("branch_id", "Branch ID"),
            ColumnDef::number("frame_index", "Frame Index (1-9)"),
            ColumnDef::number("grid_row", "Grid Row"),
            ColumnDef::number("grid_col", "Grid Col"),
            ColumnDef::long_text("prompt", "Prompt"),
            ColumnDef::url("image_url", "Image URL (Garage S3)"),
            ColumnDef::select("status", "Status", "'pending','generating','ready','error'"),
            ColumnDef::date_time("created_at", "Created At"),
        ],
    ),
];

/// All Storyception tables, in creation order.
#[must_use]
pub fn catalog() -> &'static [TableDef] {
    &CATALOG
}

/// Find a catalog table by its physical name.
#[must_use]
pub fn find(table_name: &str) -> Option<&'static TableDef> {
    CATALOG.iter().find(|t| t.table_name == table_name)
}
