//! Rebuilding the registry from a backing file.

use tracing::{info, warn};

use zonebook_core::{DomainError, Entity, FileId};
use zonebook_infra::{ContentStore, hosts};
use zonebook_registry::{File, FileQuery, Record, RecordAttrs, Zone};

use super::{Catalog, Ingested, require};
use crate::error::CatalogResult;

/// What [`Catalog::open_file`] indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestReport {
    pub file: FileId,
    pub zones: usize,
    pub records: usize,
    /// Zone sections that collided with an already indexed zone.
    pub skipped_zones: Vec<String>,
}

impl<S: ContentStore> Catalog<S> {
    /// Index an existing backing file together with its zones and host lines.
    ///
    /// A file already indexed under `path` (e.g. via [`Catalog::create_file`])
    /// is reused. Host lines are indexed as they appear, duplicates included, so
    /// that the registry mirrors the file; ambiguity is left to query
    /// resolution. Fails with `Duplicate` when the file's content has already
    /// been ingested, and with `Validation` when the content is not UTF-8.
    pub fn open_file(&self, path: &str) -> CatalogResult<IngestReport> {
        require(path, "file path")?;

        let mut state = self.write()?;
        let existing = state
            .registry
            .resolve_file(&FileQuery::by_path(path))
            .and_then(Entity::id);
        if existing.is_some_and(|id| state.ingested.contains_key(&id)) {
            return Err(DomainError::duplicate(format!("file path '{path}' already open")).into());
        }

        let content = self.store.load(path)?;
        let text = String::from_utf8(content)
            .map_err(|e| DomainError::validation(format!("file '{path}' is not UTF-8: {e}")))?;
        let doc = hosts::parse(&text);

        let file = match existing {
            Some(id) => id,
            None => state.registry.insert_file(File::new(path))?,
        };
        let mut ingested = Ingested::default();
        let mut skipped_zones = Vec::new();

        for name in doc.zones {
            match state.registry.insert_zone(Zone::new(path, name.as_str())) {
                Ok(id) => ingested.zones.push(id),
                Err(e) => {
                    warn!(path, zone = %name, error = %e, "zone skipped");
                    skipped_zones.push(name);
                }
            }
        }

        for line in doc.lines {
            let attrs = RecordAttrs {
                managed: line.managed(),
                comment: line.comment,
                ..RecordAttrs::default()
            };
            let record = Record::new(line.address, line.names).with_attrs(attrs);
            ingested.records.push(state.registry.force_insert_record(record));
        }

        let report = IngestReport {
            file,
            zones: ingested.zones.len(),
            records: ingested.records.len(),
            skipped_zones,
        };
        state.ingested.insert(file, ingested);

        info!(%file, path, zones = report.zones, records = report.records, "file opened");
        Ok(report)
    }
}
