//! hostblock - merge remote domain blocklists into the hosts file

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use hostblock::cli::{Cli, Commands};
use hostblock::config::Overrides;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let log_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command.unwrap_or_default() {
        Commands::Update {
            dry_run,
            input,
            output,
            sentinel,
        } => {
            let overrides = Overrides {
                input,
                output,
                sentinel,
            };
            hostblock::commands::update::run(overrides, dry_run, &cli.config).await
        }
        Commands::Uninstall => hostblock::commands::uninstall::run(&cli.config).await,
        Commands::Restore => hostblock::commands::restore::run(&cli.config).await,
        Commands::Status { sentinel } => {
            hostblock::commands::status::run(sentinel, &cli.config).await
        }
        Commands::Version => {
            println!("hostblock {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
