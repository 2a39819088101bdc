//! Loader — reads a named [`Resource`] from the data directory into a [`Dataset`].
//!
//! [`Loader::try_load`] reports exactly what went wrong. [`Loader::load`] is
//! what request handlers call: it logs any [`LoadError`] and hands back an
//! empty dataset, so rendering code never needs a failure branch.
//!
//! There is no cache. Every call re-reads the file, which keeps each request's
//! data independent of every other request's.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, error};

use crate::{error::LoadError, types::Dataset, types::Resource};

#[derive(Debug, Clone)]
pub struct Loader {
    data_dir: PathBuf,
}

impl Loader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_of(&self, resource: Resource) -> PathBuf {
        self.data_dir.join(resource.file_name())
    }

    /// Read and parse `resource`, reporting the failure if there is one.
    pub fn try_load(&self, resource: Resource) -> Result<Dataset, LoadError> {
        let path = self.path_of(resource);

        let text = std::fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => LoadError::ResourceMissing { path: path.clone() },
            _ => LoadError::Io {
                path: path.clone(),
                source,
            },
        })?;

        let value: Value = serde_json::from_str(&text).map_err(|source| LoadError::ParseFailure {
            path: path.clone(),
            source,
        })?;

        match value {
            Value::Object(root) => Ok(Dataset::from_map(root)),
            _ => Err(LoadError::NotAnObject { path }),
        }
    }

    /// Read and parse `resource`; any failure yields [`Dataset::empty`].
    pub fn load(&self, resource: Resource) -> Dataset {
        match self.try_load(resource) {
            Ok(dataset) => {
                debug!(%resource, keys = dataset.as_map().len(), "dataset loaded");
                dataset
            }
            Err(err) => {
                error!(%resource, error = %err, "dataset unavailable, using empty dataset");
                Dataset::empty()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
