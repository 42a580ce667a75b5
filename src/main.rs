//! Music Catalog CLI entry point.

use clap::Parser;
use music_catalog::{cli, config};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    let config = config::load();

    // Initialize logging; RUST_LOG directives are combined with the configured default
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive(config.logging.filter.parse()?))
        .init();

    cli::run_command(&args, &config)
}
