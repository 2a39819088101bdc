//! cityhub-core — data layer for the CityHub municipal portal.
//!
//! This crate exposes the request-time pipeline as public modules, plus the
//! shared record types used across all layers.
//!
//! # Architecture
//!
//! ```text
//! data/*.json ──► Loader ──► Dataset ──► Filter / Search ──► web
//! ```
//!
//! Every request loads fresh datasets and filters them; nothing is cached and
//! nothing is mutated after load.

pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod search;
pub mod types;

pub use error::LoadError;
pub use loader::Loader;
pub use types::{Dataset, Record, Resource, NATIONAL};
