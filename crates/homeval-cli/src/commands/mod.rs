//! CLI Command Implementations
//!
//! This module contains the implementations for all CLI subcommands:
//!
//! - [`train`]: Offline model fitting and bundle export
//! - [`serve`]: HTTP serving over an exported bundle

mod serve;
mod train;

pub use serve::ServeCommand;
pub use train::TrainCommand;
