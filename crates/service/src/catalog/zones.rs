use tracing::info;

use zonebook_core::{DomainError, Entity, ZoneId};
use zonebook_infra::ContentStore;
use zonebook_registry::{Zone, ZoneAttrs, ZoneQuery};

use super::{Catalog, require};
use crate::error::CatalogResult;

impl<S: ContentStore> Catalog<S> {
    pub fn create_zone(&self, zone: Zone) -> CatalogResult<ZoneId> {
        require(zone.file(), "zone file")?;
        require(zone.name(), "zone name")?;

        let id = self.write()?.registry.insert_zone(zone)?;
        info!(%id, "zone created");
        Ok(id)
    }

    pub fn read_zone(&self, query: &ZoneQuery) -> CatalogResult<Zone> {
        let state = self.read()?;
        let registry = &state.registry;
        let zone = registry.resolve_zone(query).ok_or(DomainError::NotFound)?;
        Ok(zone.clone())
    }

    pub fn update_zone(&self, query: &ZoneQuery, attrs: ZoneAttrs) -> CatalogResult<Zone> {
        let mut state = self.write()?;
        let registry = &mut state.registry;
        let id = registry
            .resolve_zone(query)
            .and_then(Entity::id)
            .ok_or(DomainError::NotFound)?;
        let zone = registry.zone_mut(id).ok_or(DomainError::NotFound)?;
        *zone.attrs_mut() = attrs;
        Ok(zone.clone())
    }

    pub fn delete_zone(&self, query: &ZoneQuery) -> CatalogResult<()> {
        let mut state = self.write()?;
        let registry = &mut state.registry;
        let id = registry
            .resolve_zone(query)
            .and_then(Entity::id)
            .ok_or(DomainError::NotFound)?;
        registry.remove_zone(id);
        info!(%id, "zone deleted");
        Ok(())
    }
}
