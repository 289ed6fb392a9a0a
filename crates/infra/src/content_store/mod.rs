//! Backing-file content storage, addressed by a file's identifying key (its path).

mod fs;
mod in_memory;
mod r#trait;

pub use fs::FsContentStore;
pub use in_memory::InMemoryContentStore;
pub use r#trait::{ContentStore, ContentStoreError};
