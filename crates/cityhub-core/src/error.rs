//! Failure taxonomy for dataset loading.
//!
//! None of these reach the presentation layer: [`Loader::load`](crate::Loader::load)
//! logs them and substitutes an empty dataset.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("data file {} not found", path.display())]
    ResourceMissing { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    ParseFailure {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} does not hold a JSON object at the top level", path.display())]
    NotAnObject { path: PathBuf },
}

impl LoadError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::ResourceMissing { path }
            | LoadError::Io { path, .. }
            | LoadError::ParseFailure { path, .. }
            | LoadError::NotAnObject { path } => path,
        }
    }
}
