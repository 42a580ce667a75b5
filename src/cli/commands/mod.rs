//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `classify`: Status code classification
//! - `describe`: Album labels from a local JSON listing
//! - `fetch`: Album lookup against the remote catalog
//! - `init_config`: Config file creation

mod classify;
mod describe;
mod fetch;
mod init_config;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;

use crate::config::Config;

pub use classify::cmd_classify;
pub use describe::cmd_describe;
pub use fetch::cmd_fetch_album;
pub use init_config::cmd_init_config;

/// Music Catalog CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Classify an HTTP status code into a catalog outcome
    Classify {
        /// Status code (any integer)
        #[arg(allow_negative_numbers = true)]
        code: i32,
    },
    /// Print display labels for albums in a JSON file
    Describe {
        /// Path to a JSON array of album summaries
        path: PathBuf,
    },
    /// Fetch an album from the remote catalog
    FetchAlbum {
        /// Album id
        id: String,
        /// Catalog base URL (overrides the config file)
        #[arg(long, env = "MUSIC_CATALOG_URL")]
        base_url: Option<String>,
    },
    /// Write the effective configuration to the config file
    InitConfig {
        /// Destination (defaults to the OS config directory)
        #[arg(long)]
        path: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Classify { code } => cmd_classify(*code),
        Commands::Describe { path } => cmd_describe(path),
        Commands::FetchAlbum { id, base_url } => {
            let rt = Runtime::new()?;
            let mut catalog = config.catalog.clone();
            if let Some(url) = base_url {
                catalog.base_url = url.clone();
            }
            cmd_fetch_album(&rt, &catalog, id)
        }
        Commands::InitConfig { path, force } => cmd_init_config(config, path.as_deref(), *force),
    }
}
