//! Token persistence
//!
//! The session token is the only state this SDK persists. Lookups are
//! synchronous: the client reads the token at dispatch time on every call.

use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use spoton_common::Error;

/// Fixed file name the token is persisted under
pub const TOKEN_FILE_NAME: &str = "session_token";

/// Synchronous storage for the session token
///
/// `delete` on an absent token is a no-op, so clearing an unauthenticated
/// session is always safe.
pub trait TokenStorage: Debug + Send + Sync {
    /// Read the persisted token, `None` when no user is authenticated
    fn load(&self) -> Result<Option<String>, Error>;
    /// Persist a token, replacing any previous one
    fn store(&self, token: &str) -> Result<(), Error>;
    /// Remove the persisted token
    fn delete(&self) -> Result<(), Error>;
}

/// In-memory token storage
///
/// For tests and for hosts that manage persistence themselves.
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStorage {
    /// Create an empty in-memory storage
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> Result<Option<String>, Error> {
        Ok(self
            .token
            .read()
            .map_err(|_| Error::Storage("token lock poisoned".to_string()))?
            .clone())
    }

    fn store(&self, token: &str) -> Result<(), Error> {
        *self
            .token
            .write()
            .map_err(|_| Error::Storage("token lock poisoned".to_string()))? =
            Some(token.to_string());
        Ok(())
    }

    fn delete(&self) -> Result<(), Error> {
        *self
            .token
            .write()
            .map_err(|_| Error::Storage("token lock poisoned".to_string()))? = None;
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedToken {
    token: String,
}

/// Token storage backed by a JSON file in a work directory
#[derive(Debug, Clone)]
pub struct FileTokenStorage {
    work_dir: PathBuf,
}

impl FileTokenStorage {
    /// Create a storage rooted at `work_dir`
    ///
    /// The directory is created on the first `store`, not here.
    pub fn new<P: AsRef<Path>>(work_dir: P) -> Self {
        Self {
            work_dir: work_dir.as_ref().to_path_buf(),
        }
    }

    fn file_path(&self) -> PathBuf {
        self.work_dir.join(TOKEN_FILE_NAME)
    }
}

impl TokenStorage for FileTokenStorage {
    fn load(&self) -> Result<Option<String>, Error> {
        let path = self.file_path();
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path).map_err(|e| Error::Storage(e.to_string()))?;
        let persisted: PersistedToken = serde_json::from_str(&contents)?;
        Ok(Some(persisted.token))
    }

    fn store(&self, token: &str) -> Result<(), Error> {
        fs::create_dir_all(&self.work_dir).map_err(|e| Error::Storage(e.to_string()))?;
        let json = serde_json::to_string_pretty(&PersistedToken {
            token: token.to_string(),
        })?;
        fs::write(self.file_path(), json).map_err(|e| Error::Storage(e.to_string()))
    }

    fn delete(&self) -> Result<(), Error> {
        let path = self.file_path();
        if !path.exists() {
            return Ok(());
        }
        fs::remove_file(path).map_err(|e| Error::Storage(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryTokenStorage::new();
        assert_eq!(storage.load().expect("load"), None);

        storage.store("t1").expect("store");
        assert_eq!(storage.load().expect("load"), Some("t1".to_string()));

        storage.delete().expect("delete");
        assert_eq!(storage.load().expect("load"), None);
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileTokenStorage::new(dir.path());

        assert_eq!(storage.load().expect("load"), None);

        storage.store("t1").expect("store");
        assert_eq!(storage.load().expect("load"), Some("t1".to_string()));

        storage.store("t2").expect("overwrite");
        assert_eq!(storage.load().expect("load"), Some("t2".to_string()));

        storage.delete().expect("delete");
        assert_eq!(storage.load().expect("load"), None);
    }

    #[test]
    fn test_file_storage_delete_is_noop_when_absent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileTokenStorage::new(dir.path());
        storage.delete().expect("delete without a stored token");
    }
}
