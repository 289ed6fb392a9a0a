//! Host records: an address and the names that point at it.

use serde::{Deserialize, Serialize};

use zonebook_core::{Entity, RecordId};

use crate::table::Indexed;

pub(crate) const BY_ADDRESS: usize = 0;
pub(crate) const BY_NAME: usize = 1;

/// A host line, identified by its address and its names.
///
/// Every individual name is indexed, so a record can be found from any
/// subset of its names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    id: Option<RecordId>,
    address: String,
    names: Vec<String>,
    attrs: RecordAttrs,
}

/// Mutable, non-identifying attributes of a [`Record`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordAttrs {
    pub comment: String,
    pub notes: String,
    /// Whether the record sits inside a managed zone section.
    pub managed: bool,
}

impl Record {
    pub fn new<N>(address: impl Into<String>, names: impl IntoIterator<Item = N>) -> Self
    where
        N: Into<String>,
    {
        Self {
            id: None,
            address: address.into(),
            names: names.into_iter().map(Into::into).collect(),
            attrs: RecordAttrs::default(),
        }
    }

    pub fn with_attrs(mut self, attrs: RecordAttrs) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// True when every name in `wanted` is among this record's names.
    pub fn has_names(&self, wanted: &[String]) -> bool {
        wanted.iter().all(|name| self.names.contains(name))
    }

    pub fn attrs(&self) -> &RecordAttrs {
        &self.attrs
    }

    pub fn attrs_mut(&mut self) -> &mut RecordAttrs {
        &mut self.attrs
    }
}

impl Entity for Record {
    type Id = RecordId;

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn kind() -> &'static str {
        "record"
    }
}

impl Indexed for Record {
    const SECONDARY: usize = 2;

    fn index_keys(&self) -> Vec<(usize, &str)> {
        let mut keys = Vec::with_capacity(self.names.len() + 1);
        keys.push((BY_ADDRESS, self.address.as_str()));
        keys.extend(self.names.iter().map(|name| (BY_NAME, name.as_str())));
        keys
    }

    fn set_id(&mut self, id: Option<RecordId>) {
        self.id = id;
    }
}

/// Partial description of a [`Record`].
///
/// An empty address or an empty `names` list is unspecified. `names` matches
/// by containment: a record qualifies when it carries every queried name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordQuery {
    pub id: Option<RecordId>,
    pub address: String,
    pub names: Vec<String>,
    #[serde(skip)]
    resident: Option<RecordId>,
}

impl RecordQuery {
    pub fn by_id(id: RecordId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn by_address(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Self::default()
        }
    }

    pub fn by_names<N>(names: impl IntoIterator<Item = N>) -> Self
    where
        N: Into<String>,
    {
        Self::default().with_names(names)
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_names<N>(mut self, names: impl IntoIterator<Item = N>) -> Self
    where
        N: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    pub(crate) fn identity_of(record: &Record) -> Self {
        Self::by_address(record.address.clone()).with_names(record.names.iter().cloned())
    }

    pub(crate) fn resident(&self) -> Option<RecordId> {
        self.resident
    }
}

impl From<&Record> for RecordQuery {
    fn from(record: &Record) -> Self {
        Self {
            id: record.id,
            address: record.address.clone(),
            names: record.names.clone(),
            resident: record.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_matching_ignores_order_and_extra_names() {
        let record = Record::new("10.0.0.1", ["n1", "n2", "n3"]);
        assert!(record.has_names(&["n3".to_string(), "n1".to_string()]));
        assert!(record.has_names(&[]));
        assert!(!record.has_names(&["n1".to_string(), "x".to_string()]));
    }
}
