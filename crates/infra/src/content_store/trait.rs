use std::sync::Arc;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentStoreError {
    #[error("no content stored for '{0}'")]
    NotFound(String),

    #[error("invalid content key '{0}'")]
    InvalidKey(String),

    #[error("i/o failure for '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

impl ContentStoreError {
    pub(crate) fn io(key: &str, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(key.to_string())
        } else {
            Self::Io {
                key: key.to_string(),
                source,
            }
        }
    }
}

/// Byte-level access to backing files.
///
/// Implementations perform blocking I/O; callers sequence them around
/// registry mutations and never retry on their behalf.
pub trait ContentStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Vec<u8>, ContentStoreError>;

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), ContentStoreError>;

    /// Remove persisted content. Removing absent content is not an error.
    fn remove(&self, key: &str) -> Result<(), ContentStoreError>;

    fn exists(&self, key: &str) -> Result<bool, ContentStoreError> {
        match self.load(key) {
            Ok(_) => Ok(true),
            Err(ContentStoreError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

impl<S> ContentStore for Arc<S>
where
    S: ContentStore + ?Sized,
{
    fn load(&self, key: &str) -> Result<Vec<u8>, ContentStoreError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), ContentStoreError> {
        (**self).save(key, bytes)
    }

    fn remove(&self, key: &str) -> Result<(), ContentStoreError> {
        (**self).remove(key)
    }

    fn exists(&self, key: &str) -> Result<bool, ContentStoreError> {
        (**self).exists(key)
    }
}
