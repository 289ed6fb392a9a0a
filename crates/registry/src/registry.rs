//! The registry: identifier allocation and index maintenance for every entity type.

use tracing::debug;

use zonebook_core::{DomainError, DomainResult, Entity, FileId, RecordId, ZoneId};

use crate::file::{File, FileQuery};
use crate::record::{Record, RecordQuery};
use crate::resolve;
use crate::table::Table;
use crate::zone::{Zone, ZoneQuery};

/// Owns every indexed file, zone and record.
///
/// Inserting hands the value to the registry and returns its identifier;
/// removing hands it back with the identifier cleared. Each insert and remove
/// updates the primary and all secondary indexes within a single `&mut self`
/// call, so a resolver never observes a half-filed entity.
#[derive(Debug, Default)]
pub struct Registry {
    files: Table<File>,
    zones: Table<Zone>,
    records: Table<Record>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    // Files

    pub fn resolve_file(&self, query: &FileQuery) -> Option<&File> {
        resolve::file(&self.files, query)
    }

    pub fn file(&self, id: FileId) -> Option<&File> {
        self.files.get(id)
    }

    /// Mutable access to an indexed file. Only its attributes can change.
    pub fn file_mut(&mut self, id: FileId) -> Option<&mut File> {
        self.files.get_mut(id)
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Index `file`, refusing when its path already resolves to a file.
    ///
    /// Re-inserting a value that is already indexed is a no-op.
    pub fn insert_file(&mut self, file: File) -> DomainResult<FileId> {
        if let Some(id) = self.files.resident(&file) {
            return Ok(id);
        }
        if let Some(existing) = self.resolve_file(&FileQuery::identity_of(&file)) {
            return Err(duplicate(existing, format!("path '{}'", file.path())));
        }
        Ok(self.force_insert_file(file))
    }

    /// Index `file` without the duplicate check.
    pub fn force_insert_file(&mut self, file: File) -> FileId {
        let id = self.files.insert(file);
        debug!(kind = File::kind(), %id, "indexed");
        id
    }

    pub fn remove_file(&mut self, id: FileId) -> Option<File> {
        let removed = self.files.remove(id)?;
        debug!(kind = File::kind(), %id, "unindexed");
        Some(removed)
    }

    // Zones

    pub fn resolve_zone(&self, query: &ZoneQuery) -> Option<&Zone> {
        resolve::zone(&self.zones, query)
    }

    pub fn zone(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.get(id)
    }

    pub fn zone_mut(&mut self, id: ZoneId) -> Option<&mut Zone> {
        self.zones.get_mut(id)
    }

    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    pub fn insert_zone(&mut self, zone: Zone) -> DomainResult<ZoneId> {
        if let Some(id) = self.zones.resident(&zone) {
            return Ok(id);
        }
        if let Some(existing) = self.resolve_zone(&ZoneQuery::identity_of(&zone)) {
            let what = format!("name '{}' in file '{}'", zone.name(), zone.file());
            return Err(duplicate(existing, what));
        }
        Ok(self.force_insert_zone(zone))
    }

    pub fn force_insert_zone(&mut self, zone: Zone) -> ZoneId {
        let id = self.zones.insert(zone);
        debug!(kind = Zone::kind(), %id, "indexed");
        id
    }

    pub fn remove_zone(&mut self, id: ZoneId) -> Option<Zone> {
        let removed = self.zones.remove(id)?;
        debug!(kind = Zone::kind(), %id, "unindexed");
        Some(removed)
    }

    // Records

    pub fn resolve_record(&self, query: &RecordQuery) -> Option<&Record> {
        resolve::record(&self.records, query)
    }

    pub fn record(&self, id: RecordId) -> Option<&Record> {
        self.records.get(id)
    }

    pub fn record_mut(&mut self, id: RecordId) -> Option<&mut Record> {
        self.records.get_mut(id)
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn insert_record(&mut self, record: Record) -> DomainResult<RecordId> {
        if let Some(id) = self.records.resident(&record) {
            return Ok(id);
        }
        if let Some(existing) = self.resolve_record(&RecordQuery::identity_of(&record)) {
            let what = format!(
                "address '{}' with names [{}]",
                record.address(),
                record.names().join(", ")
            );
            return Err(duplicate(existing, what));
        }
        Ok(self.force_insert_record(record))
    }

    pub fn force_insert_record(&mut self, record: Record) -> RecordId {
        let id = self.records.insert(record);
        debug!(kind = Record::kind(), %id, "indexed");
        id
    }

    pub fn remove_record(&mut self, id: RecordId) -> Option<Record> {
        let removed = self.records.remove(id)?;
        debug!(kind = Record::kind(), %id, "unindexed");
        Some(removed)
    }
}

fn duplicate<E: Entity>(existing: &E, what: String) -> DomainError
where
    E::Id: core::fmt::Display,
{
    let id = existing.id().map(|id| id.to_string()).unwrap_or_default();
    DomainError::duplicate(format!("{} {what} already indexed as {id}", E::kind()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use zonebook_core::SequentialId;

    #[test]
    fn file_lifecycle_through_the_indexes() {
        let mut registry = Registry::new();
        let id = registry.insert_file(File::new("f")).unwrap();
        assert_eq!(id.get(), 1);

        assert_eq!(registry.resolve_file(&FileQuery::by_id(id)).unwrap().path(), "f");
        let by_path = registry.resolve_file(&FileQuery::by_path("f"));
        assert_eq!(by_path.and_then(Entity::id), Some(id));

        let removed = registry.remove_file(id).unwrap();
        assert_eq!(removed.id(), None);
        assert!(registry.resolve_file(&FileQuery::by_id(id)).is_none());
        assert!(registry.resolve_file(&FileQuery::by_path("f")).is_none());
        assert!(registry.remove_file(id).is_none());
    }

    #[test]
    fn duplicate_path_is_refused_without_mutation() {
        let mut registry = Registry::new();
        registry.insert_file(File::new("f")).unwrap();
        let err = registry.insert_file(File::new("f")).unwrap_err();
        assert!(matches!(err, DomainError::Duplicate(_)));
        assert_eq!(registry.file_count(), 1);

        // The failed attempt did not consume an identifier.
        assert_eq!(registry.insert_file(File::new("g")).unwrap().get(), 2);
    }

    #[test]
    fn reinserting_an_indexed_value_is_idempotent() {
        let mut registry = Registry::new();
        let id = registry.insert_file(File::new("f")).unwrap();
        let copy = registry.file(id).unwrap().clone();
        assert_eq!(registry.insert_file(copy).unwrap(), id);
        assert_eq!(registry.file_count(), 1);
    }

    #[test]
    fn a_value_from_another_registry_is_not_resident() {
        let mut other = Registry::new();
        let foreign_id = other.insert_file(File::new("a")).unwrap();
        let foreign = other.file(foreign_id).unwrap().clone();

        let mut registry = Registry::new();
        let local = registry.insert_file(File::new("b")).unwrap();
        assert_eq!(local, foreign_id);

        let inserted = registry.insert_file(foreign).unwrap();
        assert_ne!(inserted, local);
        assert_eq!(registry.file_count(), 2);
        assert_eq!(registry.file(local).unwrap().path(), "b");
        assert_eq!(registry.file(inserted).unwrap().path(), "a");
    }

    #[test]
    fn a_foreign_record_with_a_colliding_identifier_gets_its_own() {
        let mut other = Registry::new();
        let foreign_id = other.insert_record(Record::new("a", ["n1"])).unwrap();
        let foreign = other.record(foreign_id).unwrap().clone();

        let mut registry = Registry::new();
        let local = registry.insert_record(Record::new("a", ["n2"])).unwrap();
        let inserted = registry.insert_record(foreign).unwrap();

        assert_ne!(inserted, local);
        let by_names = registry.resolve_record(&RecordQuery::by_names(["n1"]));
        assert_eq!(by_names.and_then(Entity::id), Some(inserted));
    }

    #[test]
    fn a_removed_value_can_be_reinserted_under_a_new_identifier() {
        let mut registry = Registry::new();
        let id = registry.insert_file(File::new("f")).unwrap();
        let stale = registry.file(id).unwrap().clone();
        registry.remove_file(id);

        let again = registry.insert_file(stale).unwrap();
        assert_ne!(again, id);
        let found = registry.resolve_file(&FileQuery::by_path("f"));
        assert_eq!(found.and_then(Entity::id), Some(again));
    }

    #[test]
    fn forced_duplicates_make_the_path_ambiguous() {
        let mut registry = Registry::new();
        registry.force_insert_file(File::new("p"));
        registry.force_insert_file(File::new("p"));
        assert!(registry.resolve_file(&FileQuery::by_path("p")).is_none());
    }

    #[test]
    fn zones_in_one_file_are_found_by_name_not_by_file() {
        let mut registry = Registry::new();
        let z1 = registry.insert_zone(Zone::new("f", "z1")).unwrap();
        registry.insert_zone(Zone::new("f", "z2")).unwrap();

        assert!(registry.resolve_zone(&ZoneQuery::by_file("f")).is_none());
        let by_name = registry.resolve_zone(&ZoneQuery::by_name("z1"));
        assert_eq!(by_name.and_then(Entity::id), Some(z1));
    }

    #[test]
    fn duplicate_zone_name_is_scoped_to_its_file() {
        let mut registry = Registry::new();
        registry.insert_zone(Zone::new("f", "z")).unwrap();
        assert!(registry.insert_zone(Zone::new("g", "z")).is_ok());
        assert!(matches!(
            registry.insert_zone(Zone::new("g", "z")),
            Err(DomainError::Duplicate(_))
        ));
    }

    #[test]
    fn records_sharing_an_address_need_names_to_resolve() {
        let mut registry = Registry::new();
        let first = registry.insert_record(Record::new("a", ["n1", "n2"])).unwrap();
        registry.insert_record(Record::new("a", ["n1", "n3"])).unwrap();

        assert!(registry.resolve_record(&RecordQuery::by_address("a")).is_none());
        let query = RecordQuery::by_address("a").with_names(["n2"]);
        assert_eq!(registry.resolve_record(&query).and_then(Entity::id), Some(first));
    }

    #[test]
    fn record_covered_by_an_existing_one_is_a_duplicate() {
        let mut registry = Registry::new();
        registry.insert_record(Record::new("a", ["n1", "n2"])).unwrap();
        assert!(matches!(
            registry.insert_record(Record::new("a", ["n1"])),
            Err(DomainError::Duplicate(_))
        ));
        assert!(registry.insert_record(Record::new("b", ["n1"])).is_ok());
    }

    #[test]
    fn attribute_changes_leave_the_indexes_alone() {
        let mut registry = Registry::new();
        let id = registry.insert_record(Record::new("a", ["n1"])).unwrap();
        let record = registry.record_mut(id).unwrap();
        record.attrs_mut().comment = "edge proxy".to_string();
        record.attrs_mut().managed = true;

        let found = registry.resolve_record(&RecordQuery::by_names(["n1"])).unwrap();
        assert_eq!(found.attrs().comment, "edge proxy");
        assert!(found.attrs().managed);
    }

    proptest! {
        /// Property: every indexed entity resolves from its identifier alone.
        #[test]
        fn every_indexed_entity_resolves_by_id(
            rows in prop::collection::vec(
                ("[a-c]", prop::collection::vec("[a-e]", 1..4)),
                1..20,
            ),
            removals in prop::collection::vec(any::<bool>(), 20),
        ) {
            let mut registry = Registry::new();
            let mut live = Vec::new();
            for (i, (address, names)) in rows.into_iter().enumerate() {
                let id = registry.force_insert_record(Record::new(address, names));
                if removals[i] {
                    registry.remove_record(id);
                } else {
                    live.push(id);
                }
            }

            prop_assert_eq!(registry.record_count(), live.len());
            for id in live {
                let found = registry.resolve_record(&RecordQuery::by_id(id));
                prop_assert_eq!(found.and_then(Entity::id), Some(id));
            }
        }
    }
}
