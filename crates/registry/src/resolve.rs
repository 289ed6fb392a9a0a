//! Query resolution.
//!
//! Each resolver maps a partial query to the single entity it describes, or
//! to `None`. "Nothing matched" and "several matched" are deliberately the
//! same outcome: the resolver never guesses between candidates.

use crate::file::{self, File, FileQuery};
use crate::record::{self, Record, RecordQuery};
use crate::table::Table;
use crate::zone::{self, Zone, ZoneQuery};

/// The only item of `candidates`, or `None` when there are zero or several.
fn sole<'a, E: 'a>(mut candidates: impl Iterator<Item = &'a E>) -> Option<&'a E> {
    let first = candidates.next()?;
    match candidates.next() {
        Some(_) => None,
        None => Some(first),
    }
}

/// `filter` is unspecified (empty) or equal to `stored`.
fn agrees(filter: &str, stored: &str) -> bool {
    filter.is_empty() || filter == stored
}

pub(crate) fn file<'a>(files: &'a Table<File>, query: &FileQuery) -> Option<&'a File> {
    if let Some(id) = query.resident() {
        return files.get(id);
    }

    if let Some(id) = query.id {
        let found = files.get(id)?;
        return agrees(&query.path, found.path()).then_some(found);
    }

    if !query.path.is_empty() {
        return sole(files.candidates(file::BY_PATH, &query.path));
    }

    None
}

pub(crate) fn zone<'a>(zones: &'a Table<Zone>, query: &ZoneQuery) -> Option<&'a Zone> {
    if let Some(id) = query.resident() {
        return zones.get(id);
    }

    if let Some(id) = query.id {
        let found = zones.get(id)?;
        let matches = agrees(&query.file, found.file()) && agrees(&query.name, found.name());
        return matches.then_some(found);
    }

    if !query.name.is_empty() {
        let mut named = zones.candidates(zone::BY_NAME, &query.name);
        if query.file.is_empty() {
            return sole(named);
        }
        // First match in insertion order wins.
        return named.find(|z| z.file() == query.file);
    }

    if !query.file.is_empty() {
        return sole(zones.candidates(zone::BY_FILE, &query.file));
    }

    None
}

pub(crate) fn record<'a>(records: &'a Table<Record>, query: &RecordQuery) -> Option<&'a Record> {
    if let Some(id) = query.resident() {
        return records.get(id);
    }

    if let Some(id) = query.id {
        let found = records.get(id)?;
        let matches = agrees(&query.address, found.address()) && found.has_names(&query.names);
        return matches.then_some(found);
    }

    if !query.address.is_empty() {
        let at_address = records.candidates(record::BY_ADDRESS, &query.address);
        if query.names.is_empty() {
            return sole(at_address);
        }
        return sole(at_address.filter(|r| r.has_names(&query.names)));
    }

    // Every name is indexed on its own, so seeding from any queried name and
    // filtering on the full set finds the same candidates.
    if let Some(seed) = query.names.first() {
        return sole(
            records
                .candidates(record::BY_NAME, seed)
                .filter(|r| r.has_names(&query.names)),
        );
    }

    None
}
