//! Lifecycle operations over the registry and the backing files.
//!
//! A [`Catalog`] is constructed once per process (see [`bootstrap`]) and
//! passed to whatever surface exposes files, zones and records to callers.

pub mod bootstrap;
pub mod catalog;
pub mod error;

pub use bootstrap::bootstrap;
pub use catalog::{Catalog, FileSnapshot, IngestReport};
pub use error::{CatalogError, CatalogResult};
