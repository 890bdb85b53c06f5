use story_config::SetupConfig;

use crate::cli::{Commands, GlobalFlags};
use crate::commands;

/// Route a network-backed command to its handler.
pub async fn dispatch(
    command: Commands,
    config: &SetupConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Setup => commands::setup::handle(config, flags).await,
        Commands::Tables => commands::tables::handle(config, flags).await,
        Commands::Schema => commands::schema::handle(flags),
    }
}
