//! Homeval CLI Library
//!
//! This crate provides the command-line interface for homeval, including:
//!
//! - **Train**: Fit the price model on a CSV dataset and export the bundle
//! - **Serve**: Run the HTTP server over an exported bundle
//!
//! # Example
//!
//! ```bash
//! # Train a model
//! homeval train --data /path/to/train.csv --output /path/to/bundle
//!
//! # Serve a model
//! homeval serve --bundle-dir /path/to/bundle --port 8080
//! ```

pub mod commands;

use clap::{Parser, Subcommand};

pub use commands::{ServeCommand, TrainCommand};

/// Homeval - house price estimation tooling
///
/// Provides the offline training pipeline and the HTTP serving process
/// for the homeval price model.
#[derive(Parser, Debug)]
#[command(name = "homeval")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fit the model on a CSV dataset and export the artifact bundle
    Train(TrainCommand),

    /// Serve an exported bundle over HTTP
    Serve(ServeCommand),
}

/// Result type alias for CLI operations
pub type CliResult<T> = anyhow::Result<T>;
