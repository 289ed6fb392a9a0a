use tracing::info;

use zonebook_core::{DomainError, Entity, RecordId};
use zonebook_infra::ContentStore;
use zonebook_registry::{Record, RecordAttrs, RecordQuery};

use super::{Catalog, require};
use crate::error::CatalogResult;

impl<S: ContentStore> Catalog<S> {
    pub fn create_record(&self, record: Record) -> CatalogResult<RecordId> {
        require(record.address(), "record address")?;
        if record.names().is_empty() {
            return Err(DomainError::validation("record names are required").into());
        }
        for name in record.names() {
            require(name, "record name")?;
        }

        let id = self.write()?.registry.insert_record(record)?;
        info!(%id, "record created");
        Ok(id)
    }

    pub fn read_record(&self, query: &RecordQuery) -> CatalogResult<Record> {
        let state = self.read()?;
        let registry = &state.registry;
        let record = registry.resolve_record(query).ok_or(DomainError::NotFound)?;
        Ok(record.clone())
    }

    pub fn update_record(&self, query: &RecordQuery, attrs: RecordAttrs) -> CatalogResult<Record> {
        let mut state = self.write()?;
        let registry = &mut state.registry;
        let id = registry
            .resolve_record(query)
            .and_then(Entity::id)
            .ok_or(DomainError::NotFound)?;
        let record = registry.record_mut(id).ok_or(DomainError::NotFound)?;
        *record.attrs_mut() = attrs;
        Ok(record.clone())
    }

    pub fn delete_record(&self, query: &RecordQuery) -> CatalogResult<()> {
        let mut state = self.write()?;
        let registry = &mut state.registry;
        let id = registry
            .resolve_record(query)
            .and_then(Entity::id)
            .ok_or(DomainError::NotFound)?;
        registry.remove_record(id);
        info!(%id, "record deleted");
        Ok(())
    }
}
