//! Command-line interface for music-catalog.
//!
//! Provides commands for classifying catalog status codes, labelling
//! album listings and fetching albums from the remote catalog.

mod commands;

pub use commands::{Cli, Commands, run_command};
