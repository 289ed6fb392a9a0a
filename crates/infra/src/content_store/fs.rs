use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::r#trait::{ContentStore, ContentStoreError};

/// Content store over the local filesystem.
///
/// Relative keys resolve under `root`; absolute keys are used as-is.
#[derive(Debug, Clone)]
pub struct FsContentStore {
    root: PathBuf,
}

impl FsContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, key: &str) -> Result<PathBuf, ContentStoreError> {
        if key.is_empty() || key.ends_with('/') {
            return Err(ContentStoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(key))
    }
}

impl ContentStore for FsContentStore {
    fn load(&self, key: &str) -> Result<Vec<u8>, ContentStoreError> {
        let path = self.resolve(key)?;
        fs::read(&path).map_err(|e| ContentStoreError::io(key, e))
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), ContentStoreError> {
        let path = self.resolve(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ContentStoreError::io(key, e))?;
        }
        fs::write(&path, bytes).map_err(|e| ContentStoreError::io(key, e))?;
        debug!(path = %path.display(), len = bytes.len(), "content saved");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), ContentStoreError> {
        let path = self.resolve(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(path = %path.display(), "content removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ContentStoreError::io(key, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn writes_reads_and_removes_under_root() {
        let dir = tempdir().expect("tempdir");
        let store = FsContentStore::new(dir.path());

        store.save("nested/hosts", b"10.0.0.1 web\n").expect("save");
        assert!(dir.path().join("nested/hosts").is_file());
        assert_eq!(store.load("nested/hosts").expect("load"), b"10.0.0.1 web\n");

        store.remove("nested/hosts").expect("remove");
        store.remove("nested/hosts").expect("second remove is a no-op");
        assert!(matches!(
            store.load("nested/hosts"),
            Err(ContentStoreError::NotFound(_))
        ));
    }

    #[test]
    fn rejects_directory_keys() {
        let dir = tempdir().expect("tempdir");
        let store = FsContentStore::new(dir.path());
        assert!(matches!(store.save("", b""), Err(ContentStoreError::InvalidKey(_))));
        assert!(matches!(store.load("dir/"), Err(ContentStoreError::InvalidKey(_))));
    }

    #[test]
    fn removing_a_directory_surfaces_the_io_error() {
        let dir = tempdir().expect("tempdir");
        fs::create_dir(dir.path().join("taken")).expect("mkdir");
        let store = FsContentStore::new(dir.path());
        assert!(matches!(store.remove("taken"), Err(ContentStoreError::Io { .. })));
    }
}
