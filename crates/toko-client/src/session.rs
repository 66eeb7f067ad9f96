//! # Session Store
//!
//! Holds the authenticated user and bearer token with an explicit
//! `init` / `login` / `logout` lifecycle.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Session Lifecycle                                 │
//! │                                                                         │
//! │  App start ────► init() ──── backend.load() ────► in-memory session    │
//! │                                                                         │
//! │  Login OK ─────► login(session) ── backend.save() ─► in-memory session │
//! │                                                                         │
//! │  Logout /                                                               │
//! │  401 outside ──► logout() ──── backend.clear() ───► (empty)            │
//! │  auth flow                                                              │
//! │                                                                         │
//! │  The backend is injectable: in-memory for tests, a JSON file (the      │
//! │  desktop analog of browser local storage) in production.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! The in-memory slot is wrapped in `RwLock` because service calls read the
//! token concurrently while login/logout writes are rare and quick.

use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, RwLock};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use toko_core::Customer;

use crate::error::{ClientError, ClientResult};

// =============================================================================
// Session
// =============================================================================

/// An authenticated session: the opaque bearer token plus the user record
/// the API returned at login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Opaque bearer token; attached to every outgoing request.
    pub token: String,

    /// The signed-in user.
    pub user: Customer,
}

// =============================================================================
// Persistence Backend
// =============================================================================

/// Where the session survives between runs.
///
/// Implementations must not interpret the token; it is an opaque string
/// owned by the API.
pub trait SessionBackend: Send + Sync {
    /// Loads the persisted session, if any.
    fn load(&self) -> ClientResult<Option<Session>>;

    /// Persists the session.
    fn save(&self, session: &Session) -> ClientResult<()>;

    /// Removes any persisted session.
    fn clear(&self) -> ClientResult<()>;
}

/// In-memory backend for tests: "persists" only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slot: Mutex<Option<Session>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionBackend for MemoryBackend {
    fn load(&self) -> ClientResult<Option<Session>> {
        Ok(self.slot.lock().expect("session backend poisoned").clone())
    }

    fn save(&self, session: &Session) -> ClientResult<()> {
        *self.slot.lock().expect("session backend poisoned") = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        *self.slot.lock().expect("session backend poisoned") = None;
        Ok(())
    }
}

/// JSON-file backend: the desktop analog of browser local storage.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: PathBuf) -> Self {
        FileBackend { path }
    }
}

impl SessionBackend for FileBackend {
    fn load(&self) -> ClientResult<Option<Session>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let session = serde_json::from_str(&contents)
                    .map_err(|e| ClientError::SessionLoadFailed(e.to_string()))?;
                Ok(Some(session))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ClientError::SessionLoadFailed(e.to_string())),
        }
    }

    fn save(&self, session: &Session) -> ClientResult<()> {
        let contents = serde_json::to_string(session)
            .map_err(|e| ClientError::SessionSaveFailed(e.to_string()))?;
        fs::write(&self.path, contents).map_err(|e| ClientError::SessionSaveFailed(e.to_string()))
    }

    fn clear(&self) -> ClientResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::SessionSaveFailed(e.to_string())),
        }
    }
}

// =============================================================================
// Session Store
// =============================================================================

/// The single session object for a client instance.
///
/// Replaces the module-level mutable singleton of a typical web client with
/// an explicit object whose persistence is injected.
pub struct SessionStore {
    backend: Box<dyn SessionBackend>,
    current: RwLock<Option<Session>>,
}

impl SessionStore {
    /// Creates a store over the given backend with no session loaded.
    /// Call [`SessionStore::init`] to restore a persisted session.
    pub fn new(backend: Box<dyn SessionBackend>) -> Self {
        SessionStore {
            backend,
            current: RwLock::new(None),
        }
    }

    /// Restores the persisted session into memory, if one exists.
    pub fn init(&self) -> ClientResult<()> {
        let restored = self.backend.load()?;
        match &restored {
            Some(session) => {
                info!(user_id = %session.user.id, "Restored persisted session");
            }
            None => debug!("No persisted session found"),
        }
        *self.current.write().expect("session lock poisoned") = restored;
        Ok(())
    }

    /// Stores a freshly authenticated session in memory and persists it.
    pub fn login(&self, session: Session) -> ClientResult<()> {
        self.backend.save(&session)?;
        info!(user_id = %session.user.id, "Session established");
        *self.current.write().expect("session lock poisoned") = Some(session);
        Ok(())
    }

    /// Drops the session from memory and from the backend.
    ///
    /// Also invoked by the transport when a 401 arrives outside the auth
    /// allowlist; a failure to clear the backend is logged, not surfaced,
    /// so the in-memory session is gone either way.
    pub fn logout(&self) {
        if let Err(e) = self.backend.clear() {
            warn!(error = %e, "Failed to clear persisted session");
        }
        *self.current.write().expect("session lock poisoned") = None;
        info!("Session cleared");
    }

    /// The bearer token of the current session, if signed in.
    pub fn token(&self) -> Option<String> {
        self.current
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|s| s.token.clone())
    }

    /// The signed-in user, if any.
    pub fn user(&self) -> Option<Customer> {
        self.current
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|s| s.user.clone())
    }

    /// Checks whether a session is present.
    pub fn is_authenticated(&self) -> bool {
        self.current
            .read()
            .expect("session lock poisoned")
            .is_some()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the token
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use toko_core::Role;

    fn test_customer(id: &str) -> Customer {
        Customer {
            id: id.to_string(),
            email: format!("{}@toko.id", id),
            nickname: id.to_string(),
            phone: None,
            address: None,
            postal_code: None,
            role: Role::Customer,
            created_at: Utc::now(),
        }
    }

    fn test_session(id: &str) -> Session {
        Session {
            token: format!("token-{}", id),
            user: test_customer(id),
        }
    }

    #[test]
    fn test_starts_unauthenticated() {
        let store = SessionStore::new(Box::new(MemoryBackend::new()));
        assert!(!store.is_authenticated());
        assert!(store.token().is_none());
        assert!(store.user().is_none());
    }

    #[test]
    fn test_login_logout_lifecycle() {
        let store = SessionStore::new(Box::new(MemoryBackend::new()));

        store.login(test_session("ani")).unwrap();
        assert!(store.is_authenticated());
        assert_eq!(store.token().unwrap(), "token-ani");
        assert_eq!(store.user().unwrap().nickname, "ani");

        store.logout();
        assert!(!store.is_authenticated());
        assert!(store.token().is_none());
    }

    #[test]
    fn test_init_restores_persisted_session() {
        let backend = MemoryBackend::new();
        backend.save(&test_session("budi")).unwrap();

        let store = SessionStore::new(Box::new(backend));
        assert!(!store.is_authenticated()); // not until init

        store.init().unwrap();
        assert!(store.is_authenticated());
        assert_eq!(store.user().unwrap().id, "budi");
    }

    #[test]
    fn test_logout_clears_backend_too() {
        let store = SessionStore::new(Box::new(MemoryBackend::new()));
        store.login(test_session("ani")).unwrap();
        store.logout();

        // Re-init finds nothing persisted
        store.init().unwrap();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_file_backend_roundtrip() {
        let path = std::env::temp_dir().join(format!("toko-session-{}.json", uuid::Uuid::new_v4()));
        let backend = FileBackend::new(path.clone());

        assert!(backend.load().unwrap().is_none());

        let session = test_session("citra");
        backend.save(&session).unwrap();
        assert_eq!(backend.load().unwrap(), Some(session));

        backend.clear().unwrap();
        assert!(backend.load().unwrap().is_none());
        // Clearing twice is fine
        backend.clear().unwrap();

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_file_backend_rejects_garbage() {
        let path = std::env::temp_dir().join(format!("toko-session-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, "not json").unwrap();

        let backend = FileBackend::new(path.clone());
        assert!(matches!(
            backend.load(),
            Err(ClientError::SessionLoadFailed(_))
        ));

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_debug_never_prints_token() {
        let store = SessionStore::new(Box::new(MemoryBackend::new()));
        store.login(test_session("ani")).unwrap();
        let printed = format!("{:?}", store);
        assert!(!printed.contains("token-ani"));
    }
}
