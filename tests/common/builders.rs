//! Test builders — throwaway data directories and in-memory datasets.
//!
//! These builders are designed for readability in test setup, not for
//! production use. They panic on I/O failure rather than returning `Result`.

use std::path::Path;
use std::sync::Arc;

use cityhub::{config::LimitsConfig, web::AppContext, Dataset, Loader, Resource};
use serde_json::Value;
use tempfile::TempDir;

use super::fixtures;

// ---------------------------------------------------------------------------
// DataDirBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for a temporary data directory.
///
/// # Example
///
/// ```rust
/// let data = DataDirBuilder::new()
///     .cities(cities_json())
///     .raw(Resource::Schemes, "{ not json")
///     .build();
/// let loader = data.loader();
/// ```
#[derive(Default)]
pub struct DataDirBuilder {
    files: Vec<(Resource, String)>,
}

impl DataDirBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every resource populated from [`fixtures`].
    pub fn sample() -> Self {
        Self::new()
            .cities(fixtures::cities_json())
            .schemes(fixtures::schemes_json())
            .help_centers(fixtures::help_centers_json())
            .events(fixtures::events_json())
    }

    pub fn json(self, resource: Resource, value: Value) -> Self {
        let text = serde_json::to_string_pretty(&value).unwrap();
        self.raw(resource, text)
    }

    /// Write `contents` verbatim, valid JSON or not.
    pub fn raw(mut self, resource: Resource, contents: impl Into<String>) -> Self {
        self.files.retain(|(r, _)| *r != resource);
        self.files.push((resource, contents.into()));
        self
    }

    pub fn cities(self, value: Value) -> Self {
        self.json(Resource::Cities, value)
    }

    pub fn schemes(self, value: Value) -> Self {
        self.json(Resource::Schemes, value)
    }

    pub fn help_centers(self, value: Value) -> Self {
        self.json(Resource::HelpCenters, value)
    }

    pub fn events(self, value: Value) -> Self {
        self.json(Resource::Events, value)
    }

    pub fn build(self) -> DataDir {
        let dir = tempfile::tempdir().unwrap();
        for (resource, contents) in &self.files {
            std::fs::write(dir.path().join(resource.file_name()), contents).unwrap();
        }
        DataDir { dir }
    }
}

/// A populated temporary data directory, removed on drop.
pub struct DataDir {
    dir: TempDir,
}

impl DataDir {
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn loader(&self) -> Loader {
        Loader::new(self.dir.path())
    }

    pub fn context(&self) -> Arc<AppContext> {
        AppContext::from_parts(self.loader(), LimitsConfig::default())
    }

    /// Replace a resource's file after the directory was built.
    pub fn write(&self, resource: Resource, contents: &str) {
        std::fs::write(self.dir.path().join(resource.file_name()), contents).unwrap();
    }

    pub fn remove(&self, resource: Resource) {
        std::fs::remove_file(self.dir.path().join(resource.file_name())).unwrap();
    }
}

// ---------------------------------------------------------------------------
// In-memory datasets
// ---------------------------------------------------------------------------

/// Wrap a JSON object as a [`Dataset`] without going through the filesystem.
pub fn dataset(value: Value) -> Dataset {
    match value {
        Value::Object(map) => Dataset::from_map(map),
        other => panic!("dataset() needs a JSON object, got {other}"),
    }
}
