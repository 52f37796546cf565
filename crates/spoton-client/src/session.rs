//! Session state
//!
//! Holds the authenticated user's profile and the bearer token. The token is
//! write-through: every setter change lands in the [`TokenStorage`] backend
//! before the in-memory copy is updated, so a process restart resumes the
//! same session.

use std::sync::{Arc, RwLock};

use spoton_common::{Error, User};

use crate::token_storage::TokenStorage;

/// Current user profile and session token
///
/// Cheaply clonable; clones share the same state and storage backend.
#[derive(Debug, Clone)]
pub struct SessionStore {
    storage: Arc<dyn TokenStorage>,
    token: Arc<RwLock<Option<String>>>,
    user: Arc<RwLock<Option<User>>>,
}

impl SessionStore {
    /// Create a session initialized from persisted storage
    ///
    /// A storage read failure is logged and treated as "not authenticated";
    /// it does not prevent construction.
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        let token = match storage.load() {
            Ok(token) => token,
            Err(err) => {
                tracing::warn!("could not load persisted token: {err}");
                None
            }
        };
        Self {
            storage,
            token: Arc::new(RwLock::new(token)),
            user: Arc::new(RwLock::new(None)),
        }
    }

    /// The current token, captured at call time
    pub fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }

    /// Whether a token is present
    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    /// Replace the token, writing through to persistent storage
    ///
    /// Idempotent: repeating the same value leaves storage and memory
    /// consistent with that value.
    pub fn set_token(&self, token: &str) -> Result<(), Error> {
        self.storage.store(token)?;
        *self
            .token
            .write()
            .map_err(|_| Error::Storage("session lock poisoned".to_string()))? =
            Some(token.to_string());
        Ok(())
    }

    /// The cached user profile
    pub fn user(&self) -> Option<User> {
        self.user.read().ok().and_then(|guard| guard.clone())
    }

    /// Cache the user profile (in-memory only)
    pub fn set_user(&self, user: User) {
        if let Ok(mut guard) = self.user.write() {
            *guard = Some(user);
        }
    }

    /// Drop the profile and token and delete the persisted token
    ///
    /// Deleting an absent token is a no-op, so clearing twice is safe.
    pub fn clear(&self) -> Result<(), Error> {
        self.storage.delete()?;
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
        if let Ok(mut guard) = self.user.write() {
            *guard = None;
        }
        Ok(())
    }
}

/// Application readiness flag
///
/// The second, trivial state container the mini-program carried: a single
/// boolean the host flips once startup work is done.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    ready: Arc<std::sync::atomic::AtomicBool>,
}

impl AppState {
    /// Create an un-ready state
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the readiness flag
    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, std::sync::atomic::Ordering::Release);
    }

    /// Whether the host finished its startup work
    pub fn is_ready(&self) -> bool {
        self.ready.load(std::sync::atomic::Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token_storage::MemoryTokenStorage;

    fn session() -> SessionStore {
        SessionStore::new(Arc::new(MemoryTokenStorage::new()))
    }

    #[test]
    fn test_token_initialized_from_storage() {
        let storage = Arc::new(MemoryTokenStorage::new());
        storage.store("persisted").expect("store");

        let session = SessionStore::new(storage);
        assert_eq!(session.token(), Some("persisted".to_string()));
        assert!(session.is_logged_in());
    }

    #[test]
    fn test_set_token_writes_through() {
        let storage = Arc::new(MemoryTokenStorage::new());
        let session = SessionStore::new(Arc::clone(&storage) as Arc<dyn TokenStorage>);

        session.set_token("t1").expect("set");
        assert_eq!(session.token(), Some("t1".to_string()));
        assert_eq!(storage.load().expect("load"), Some("t1".to_string()));
    }

    #[test]
    fn test_set_token_is_idempotent() {
        let storage = Arc::new(MemoryTokenStorage::new());
        let session = SessionStore::new(Arc::clone(&storage) as Arc<dyn TokenStorage>);

        session.set_token("t1").expect("set");
        session.set_token("t1").expect("set again");
        assert_eq!(session.token(), Some("t1".to_string()));
        assert_eq!(storage.load().expect("load"), Some("t1".to_string()));
    }

    #[test]
    fn test_clear_resets_everything() {
        let storage = Arc::new(MemoryTokenStorage::new());
        let session = SessionStore::new(Arc::clone(&storage) as Arc<dyn TokenStorage>);

        session.set_token("t1").expect("set");
        session.clear().expect("clear");

        assert_eq!(session.token(), None);
        assert_eq!(session.user(), None);
        assert_eq!(storage.load().expect("load"), None);

        // clearing an already-empty session is a no-op
        session.clear().expect("clear twice");
    }

    #[test]
    fn test_clones_share_state() {
        let session = session();
        let clone = session.clone();

        session.set_token("t1").expect("set");
        assert_eq!(clone.token(), Some("t1".to_string()));
    }

    #[test]
    fn test_app_state_ready_flag() {
        let state = AppState::new();
        assert!(!state.is_ready());
        state.set_ready(true);
        assert!(state.is_ready());
    }
}
