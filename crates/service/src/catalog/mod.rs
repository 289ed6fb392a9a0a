//! The catalog: lifecycle operations sequencing the registry and the content store.
//!
//! Every operation holds the registry lock for its whole duration, backing
//! store I/O included, so callers never observe a half-applied change. A
//! failed operation leaves the registry as it found it.

mod files;
mod ingest;
mod records;
mod zones;

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use zonebook_core::{DomainError, FileId, RecordId, ZoneId};
use zonebook_infra::{CatalogConfig, ContentStore, FsContentStore};
use zonebook_registry::Registry;

use crate::error::{CatalogError, CatalogResult};

pub use files::FileSnapshot;
pub use ingest::IngestReport;

#[derive(Debug)]
pub struct Catalog<S> {
    state: RwLock<State>,
    store: S,
}

/// Everything guarded by the catalog lock.
#[derive(Debug, Default)]
struct State {
    registry: Registry,
    /// Zones and records indexed by [`Catalog::open_file`], per file.
    ingested: HashMap<FileId, Ingested>,
}

#[derive(Debug, Default)]
struct Ingested {
    zones: Vec<ZoneId>,
    records: Vec<RecordId>,
}

impl State {
    /// Unindex `file` together with whatever was ingested from it.
    fn remove_file(&mut self, file: FileId) {
        if let Some(ingested) = self.ingested.remove(&file) {
            // Entries deleted individually since ingestion are already gone.
            for id in ingested.zones {
                self.registry.remove_zone(id);
            }
            for id in ingested.records {
                self.registry.remove_record(id);
            }
        }
        self.registry.remove_file(file);
    }
}

impl<S: ContentStore> Catalog<S> {
    pub fn new(store: S) -> Self {
        Self {
            state: RwLock::new(State::default()),
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run `f` against a read-only view of the registry.
    pub fn with_registry<T>(&self, f: impl FnOnce(&Registry) -> T) -> CatalogResult<T> {
        Ok(f(&self.read()?.registry))
    }

    fn read(&self) -> CatalogResult<RwLockReadGuard<'_, State>> {
        self.state.read().map_err(|_| CatalogError::LockPoisoned)
    }

    fn write(&self) -> CatalogResult<RwLockWriteGuard<'_, State>> {
        self.state.write().map_err(|_| CatalogError::LockPoisoned)
    }
}

impl Catalog<FsContentStore> {
    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(FsContentStore::new(config.content_root.clone()))
    }
}

/// Required identifying attribute check for creation.
fn require(value: &str, what: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{what} is required")));
    }
    Ok(())
}
