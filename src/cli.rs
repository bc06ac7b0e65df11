//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hostblock")]
#[command(author, version, about = "Merge remote domain blocklists into the hosts file")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Mode to run (default: update)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file path
    #[arg(short, long, default_value = "hostblock.yaml", global = true)]
    pub config: PathBuf,

    /// Quiet mode (for cron/systemd timer)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug output)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Download sources and regenerate the hosts file
    Update {
        /// Build and count, but don't write the hosts file
        #[arg(long)]
        dry_run: bool,

        /// Read prior hosts content from this file
        #[arg(long)]
        input: Option<PathBuf>,

        /// Write the result to this file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Address blocked domains are mapped to
        #[arg(long)]
        sentinel: Option<String>,
    },

    /// Remove generated blocks from the hosts file
    Uninstall,

    /// Put back the hosts file saved before the first update
    Restore,

    /// Show blocked entries and generated blocks in the hosts file
    Status {
        /// Address blocked domains were mapped to
        #[arg(long)]
        sentinel: Option<String>,
    },

    /// Show version
    Version,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Update {
            dry_run: false,
            input: None,
            output: None,
            sentinel: None,
        }
    }
}
