//! Atlas CLI - interactive console for the road network registry

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::io::BufReader;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;
mod shell;

use atlas_storage::{MemoryStorage, StorageBackend};
use config::Config;
use shell::Shell;

#[derive(Parser)]
#[command(name = "atlas")]
#[command(author, version, about = "Register cities and roads, then query routes between them")]
pub struct Cli {
    /// Config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Get the config file path
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(config::default_config_path)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity; logs go to stderr so they never
    // interleave with the shell's prompts on stdout.
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting atlas console");

    let config = Config::load(&cli.config_path())?;

    let storage: Arc<dyn StorageBackend> = Arc::new(MemoryStorage::new());
    storage.initialize().await?;

    let reader = BufReader::new(tokio::io::stdin());
    let writer = tokio::io::stdout();
    let mut shell = Shell::new(reader, writer, storage.clone(), config);
    shell.run().await?;

    storage.close().await?;
    Ok(())
}
