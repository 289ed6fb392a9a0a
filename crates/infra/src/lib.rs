//! Infrastructure layer: backing-file content, checksums, hosts text, config.

pub mod config;
pub mod content_store;
pub mod digest;
pub mod hosts;

pub use config::{CatalogConfig, ConfigError};
pub use content_store::{ContentStore, ContentStoreError, FsContentStore, InMemoryContentStore};
pub use digest::digest;
