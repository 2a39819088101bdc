use std::sync::Arc;

use cityhub_core::{
    config::{Config, LimitsConfig},
    Loader,
};

/// Everything a handler needs, built once at startup and shared by reference.
///
/// Holds no data: each request loads its own datasets through `loader`.
#[derive(Debug)]
pub struct AppContext {
    pub loader: Loader,
    pub limits: LimitsConfig,
}

impl AppContext {
    pub fn new(config: &Config) -> Arc<Self> {
        Self::from_parts(Loader::new(&config.data.dir), config.limits)
    }

    pub fn from_parts(loader: Loader, limits: LimitsConfig) -> Arc<Self> {
        Arc::new(Self { loader, limits })
    }
}
