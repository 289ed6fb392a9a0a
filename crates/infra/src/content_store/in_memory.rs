use std::collections::HashMap;
use std::sync::RwLock;

use super::r#trait::{ContentStore, ContentStoreError};

/// In-memory content store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryContentStore {
    inner: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned(key: &str) -> ContentStoreError {
        ContentStoreError::Io {
            key: key.to_string(),
            source: std::io::Error::other("lock poisoned"),
        }
    }
}

impl ContentStore for InMemoryContentStore {
    fn load(&self, key: &str) -> Result<Vec<u8>, ContentStoreError> {
        let map = self.inner.read().map_err(|_| Self::poisoned(key))?;
        map.get(key)
            .cloned()
            .ok_or_else(|| ContentStoreError::NotFound(key.to_string()))
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), ContentStoreError> {
        if key.is_empty() {
            return Err(ContentStoreError::InvalidKey(key.to_string()));
        }
        let mut map = self.inner.write().map_err(|_| Self::poisoned(key))?;
        map.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), ContentStoreError> {
        let mut map = self.inner.write().map_err(|_| Self::poisoned(key))?;
        map.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_removes_bytes() {
        let store = InMemoryContentStore::new();
        assert!(matches!(store.load("hosts"), Err(ContentStoreError::NotFound(_))));

        store.save("hosts", b"127.0.0.1 localhost\n").unwrap();
        assert_eq!(store.load("hosts").unwrap(), b"127.0.0.1 localhost\n");
        assert!(store.exists("hosts").unwrap());

        store.remove("hosts").unwrap();
        store.remove("hosts").unwrap();
        assert!(!store.exists("hosts").unwrap());
    }
}
