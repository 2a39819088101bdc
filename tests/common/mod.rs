//! Shared test utilities for cityhub integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Data directories are throwaway `tempfile` dirs, so
//! harnesses never touch the checked-in `data/` folder.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
