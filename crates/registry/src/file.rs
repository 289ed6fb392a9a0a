//! Backing files.

use serde::{Deserialize, Serialize};

use zonebook_core::{Entity, FileId};

use crate::table::Indexed;

pub(crate) const BY_PATH: usize = 0;

/// A backing text file, identified by its path.
///
/// The path is fixed at construction; only [`FileAttrs`] can change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct File {
    id: Option<FileId>,
    path: String,
    attrs: FileAttrs,
}

/// Mutable, non-identifying attributes of a [`File`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAttrs {
    pub notes: String,
}

impl File {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            id: None,
            path: path.into(),
            attrs: FileAttrs::default(),
        }
    }

    pub fn with_attrs(mut self, attrs: FileAttrs) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn attrs(&self) -> &FileAttrs {
        &self.attrs
    }

    pub fn attrs_mut(&mut self) -> &mut FileAttrs {
        &mut self.attrs
    }
}

impl Entity for File {
    type Id = FileId;

    fn id(&self) -> Option<FileId> {
        self.id
    }

    fn kind() -> &'static str {
        "file"
    }
}

impl Indexed for File {
    const SECONDARY: usize = 1;

    fn index_keys(&self) -> Vec<(usize, &str)> {
        vec![(BY_PATH, self.path.as_str())]
    }

    fn set_id(&mut self, id: Option<FileId>) {
        self.id = id;
    }
}

/// Partial description of a [`File`]. Empty strings are unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileQuery {
    pub id: Option<FileId>,
    pub path: String,
    #[serde(skip)]
    resident: Option<FileId>,
}

impl FileQuery {
    pub fn by_id(id: FileId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn by_path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Query carrying only the identifying attributes of `file`.
    pub(crate) fn identity_of(file: &File) -> Self {
        Self::by_path(file.path.clone())
    }

    pub(crate) fn resident(&self) -> Option<FileId> {
        self.resident
    }
}

impl From<&File> for FileQuery {
    /// Query that resolves straight back to `file` while it stays indexed.
    fn from(file: &File) -> Self {
        Self {
            id: file.id,
            path: file.path.clone(),
            resident: file.id,
        }
    }
}
