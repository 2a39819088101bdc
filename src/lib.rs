//! CityHub — municipal information portal.
//!
//! Serves static JSON datasets (cities, help centers, government schemes,
//! events) as HTML pages and a small JSON API. This crate re-exports the
//! member crates so that integration tests and benchmarks can import them
//! from one place.
//!
//! # Architecture
//!
//! ```text
//! data/*.json ──► Loader ──► Filter / Search ──► routes ──► HTML / JSON
//! ```
//!
//! Each request reloads and refilters from disk; there is no shared mutable
//! state between requests.

pub use cityhub_core::{config, error, filter, loader, search, types};
pub use cityhub_core::{Dataset, LoadError, Loader, Record, Resource, NATIONAL};
pub use cityhub_web as web;
