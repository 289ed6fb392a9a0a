//! Zones: named sections of a backing file.

use serde::{Deserialize, Serialize};

use zonebook_core::{Entity, ZoneId};

use crate::table::Indexed;

pub(crate) const BY_FILE: usize = 0;
pub(crate) const BY_NAME: usize = 1;

/// A named section of a backing file, identified by `(file, name)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Zone {
    id: Option<ZoneId>,
    file: String,
    name: String,
    attrs: ZoneAttrs,
}

/// Mutable, non-identifying attributes of a [`Zone`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneAttrs {
    pub notes: String,
}

impl Zone {
    pub fn new(file: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: None,
            file: file.into(),
            name: name.into(),
            attrs: ZoneAttrs::default(),
        }
    }

    pub fn with_attrs(mut self, attrs: ZoneAttrs) -> Self {
        self.attrs = attrs;
        self
    }

    /// Path of the file this zone lives in.
    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attrs(&self) -> &ZoneAttrs {
        &self.attrs
    }

    pub fn attrs_mut(&mut self) -> &mut ZoneAttrs {
        &mut self.attrs
    }
}

impl Entity for Zone {
    type Id = ZoneId;

    fn id(&self) -> Option<ZoneId> {
        self.id
    }

    fn kind() -> &'static str {
        "zone"
    }
}

impl Indexed for Zone {
    const SECONDARY: usize = 2;

    fn index_keys(&self) -> Vec<(usize, &str)> {
        vec![(BY_FILE, self.file.as_str()), (BY_NAME, self.name.as_str())]
    }

    fn set_id(&mut self, id: Option<ZoneId>) {
        self.id = id;
    }
}

/// Partial description of a [`Zone`]. Empty strings are unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneQuery {
    pub id: Option<ZoneId>,
    pub file: String,
    pub name: String,
    #[serde(skip)]
    resident: Option<ZoneId>,
}

impl ZoneQuery {
    pub fn by_id(id: ZoneId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn by_file(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            ..Self::default()
        }
    }

    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub(crate) fn identity_of(zone: &Zone) -> Self {
        Self::by_name(zone.name.clone()).with_file(zone.file.clone())
    }

    pub(crate) fn resident(&self) -> Option<ZoneId> {
        self.resident
    }
}

impl From<&Zone> for ZoneQuery {
    fn from(zone: &Zone) -> Self {
        Self {
            id: zone.id,
            file: zone.file.clone(),
            name: zone.name.clone(),
            resident: zone.id,
        }
    }
}
