use clap::{Parser, Subcommand};

pub mod global;

pub use global::{GlobalFlags, OutputFormat};

/// Top-level CLI parser for the `storyception-setup` binary.
#[derive(Debug, Parser)]
#[command(
    name = "storyception-setup",
    version,
    about = "Create the Storyception tables in NocoDB"
)]
pub struct Cli {
    /// Defaults to `setup` when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format: text, json
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (only the summary is printed)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Create every catalog table, skipping ones that already exist
    Setup,
    /// Print the table creation payloads without sending anything
    Schema,
    /// List the tables that already exist in the configured base
    Tables,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }

    /// The subcommand to run, `setup` when none was given.
    #[must_use]
    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Setup)
    }
}
