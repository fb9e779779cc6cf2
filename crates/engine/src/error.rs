use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The directory is missing, is not a directory, or could not be read.
    #[error("Cannot read directory '{path}': {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid extension '{0}': must be non-empty and contain no '.' or path separator")]
    InvalidExtension(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
