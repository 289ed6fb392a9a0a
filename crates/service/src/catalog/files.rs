use serde::Serialize;
use tracing::info;

use zonebook_core::{DomainError, Entity, FileId};
use zonebook_infra::{ContentStore, digest};
use zonebook_registry::{File, FileAttrs, FileQuery};

use super::{Catalog, require};
use crate::error::CatalogResult;

/// A file as read: its attributes plus the checksum of its current content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSnapshot {
    pub id: FileId,
    pub path: String,
    pub attrs: FileAttrs,
    /// Hex SHA-256 of the backing content at read time.
    pub checksum: String,
}

impl<S: ContentStore> Catalog<S> {
    /// Index `file` and make sure its backing content exists.
    ///
    /// Missing content is created empty; existing content is left untouched.
    pub fn create_file(&self, file: File) -> CatalogResult<FileId> {
        require(file.path(), "file path")?;
        let path = file.path().to_string();

        let mut state = self.write()?;
        let id = state.registry.insert_file(file)?;

        let persisted = match self.store.exists(&path) {
            Ok(true) => Ok(()),
            Ok(false) => self.store.save(&path, b""),
            Err(e) => Err(e),
        };
        if let Err(e) = persisted {
            state.registry.remove_file(id);
            return Err(e.into());
        }

        info!(%id, path = %path, "file created");
        Ok(id)
    }

    pub fn read_file(&self, query: &FileQuery) -> CatalogResult<FileSnapshot> {
        let state = self.read()?;
        let file = state.registry.resolve_file(query).ok_or(DomainError::NotFound)?;
        let content = self.store.load(file.path())?;

        Ok(FileSnapshot {
            id: file.id().ok_or(DomainError::NotFound)?,
            path: file.path().to_string(),
            attrs: file.attrs().clone(),
            checksum: digest(&content),
        })
    }

    /// Replace the mutable attributes of the file `query` resolves to.
    pub fn update_file(&self, query: &FileQuery, attrs: FileAttrs) -> CatalogResult<File> {
        let mut state = self.write()?;
        let registry = &mut state.registry;
        let id = registry
            .resolve_file(query)
            .and_then(Entity::id)
            .ok_or(DomainError::NotFound)?;
        let file = registry.file_mut(id).ok_or(DomainError::NotFound)?;
        *file.attrs_mut() = attrs;
        Ok(file.clone())
    }

    /// Remove the backing content, then unindex the file along with the
    /// zones and records ingested from it.
    ///
    /// The registry is untouched when the content store fails.
    pub fn delete_file(&self, query: &FileQuery) -> CatalogResult<()> {
        let mut state = self.write()?;
        let file = state.registry.resolve_file(query).ok_or(DomainError::NotFound)?;
        let id = file.id().ok_or(DomainError::NotFound)?;

        self.store.remove(file.path())?;
        state.remove_file(id);

        info!(%id, "file deleted");
        Ok(())
    }
}
