// crates/engine/src/lib.rs
pub mod config;
pub mod error;
pub mod filesystem;
pub mod lister;
pub mod listing;
pub mod matcher;
pub mod models;
pub mod options;

use crate::config::Config;
use crate::error::Result;
use crate::filesystem::{DirectorySource, StdDirectory};
use crate::listing::Listing;
use crate::options::ScanMode;

/// Run the configured scan against the real filesystem.
///
/// # Errors
///
/// Returns [`error::EngineError::DirectoryUnreadable`] when the root cannot be
/// listed and [`error::EngineError::InvalidExtension`] for a bad extension.
/// No partial results are returned.
pub fn run(config: &Config) -> Result<Listing> {
    run_with(&StdDirectory, config)
}

/// Same as [`run`], reading directories through `source`.
///
/// # Errors
///
/// See [`run`].
pub fn run_with(source: &dyn DirectorySource, config: &Config) -> Result<Listing> {
    match config.mode {
        ScanMode::Files => lister::list_matching(source, config),
        ScanMode::Models => models::list_models(source, config),
    }
}
