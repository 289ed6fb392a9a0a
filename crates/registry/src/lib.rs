//! Multi-key identity registry for files, zones and host records.
//!
//! The registry assigns identifiers, keeps one primary and several secondary
//! indexes per entity type, and resolves partial queries to at most one
//! entity. It is plain single-threaded state; callers that share it across
//! threads wrap the whole [`Registry`] in one lock.

pub mod file;
pub mod record;
pub mod registry;
pub mod zone;

mod resolve;
mod table;

pub use file::{File, FileAttrs, FileQuery};
pub use record::{Record, RecordAttrs, RecordQuery};
pub use registry::Registry;
pub use zone::{Zone, ZoneAttrs, ZoneQuery};
