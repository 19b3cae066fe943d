use std::sync::Arc;

use crate::backend::StorageBackend;
use crate::models::UserProfile;

/// Storage key for the auth token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the JSON-serialized user profile.
pub const USER_KEY: &str = "user";

/// The authenticated identity held client-side between requests.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

/// Persisted session state behind an injectable [`StorageBackend`].
///
/// Cheap to clone; the app shell constructs one and hands it to the API
/// client and the auth gate, so tests can swap in [`MemoryBackend`].
///
/// [`MemoryBackend`]: crate::MemoryBackend
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn StorageBackend>,
}

impl SessionStore {
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Platform default: `localStorage` in the browser, memory elsewhere.
    pub fn platform() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(crate::LocalStorageBackend::new())
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::new(crate::MemoryBackend::new())
        }
    }

    /// Persist both halves of the session.
    pub fn save(&self, token: &str, user: &UserProfile) {
        match serde_json::to_string(user) {
            Ok(json) => {
                self.backend.set(TOKEN_KEY, token);
                self.backend.set(USER_KEY, &json);
            }
            Err(err) => tracing::error!("failed to serialize session user: {err}"),
        }
    }

    /// The last saved session, or `None` when absent or unreadable.
    ///
    /// A half-written or unparseable session purges both entries: the client
    /// fails safe to logged-out rather than sending a stale token.
    pub fn load(&self) -> Option<Session> {
        let token = self.backend.get(TOKEN_KEY);
        let user_json = self.backend.get(USER_KEY);
        let (token, user_json) = match (token, user_json) {
            (Some(token), Some(user_json)) => (token, user_json),
            (None, None) => return None,
            _ => {
                self.clear();
                return None;
            }
        };

        match serde_json::from_str::<UserProfile>(&user_json) {
            Ok(user) => Some(Session { token, user }),
            Err(err) => {
                tracing::warn!("discarding unreadable stored session: {err}");
                self.clear();
                None
            }
        }
    }

    /// Purge both entries.
    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;
    use crate::models::Role;

    fn member() -> UserProfile {
        UserProfile {
            id: "u1".to_string(),
            email: "a@b.com".to_string(),
            full_name: "A".to_string(),
            role: Role::Member,
            phone: None,
        }
    }

    #[test]
    fn save_then_load_round_trips_without_any_network() {
        let store = SessionStore::new(MemoryBackend::new());
        store.save("T", &member());

        let session = store.load().unwrap();
        assert_eq!(session.token, "T");
        assert_eq!(session.user, member());
    }

    #[test]
    fn empty_storage_loads_as_absent() {
        let store = SessionStore::new(MemoryBackend::new());
        assert_eq!(store.load(), None);
    }

    #[test]
    fn unparseable_user_purges_both_entries() {
        let backend = MemoryBackend::new();
        backend.set(TOKEN_KEY, "T");
        backend.set(USER_KEY, "{not json");

        let store = SessionStore::new(backend.clone());
        assert_eq!(store.load(), None);
        assert_eq!(backend.get(TOKEN_KEY), None);
        assert_eq!(backend.get(USER_KEY), None);
    }

    #[test]
    fn missing_user_entry_purges_the_dangling_token() {
        let backend = MemoryBackend::new();
        backend.set(TOKEN_KEY, "T");

        let store = SessionStore::new(backend.clone());
        assert_eq!(store.load(), None);
        assert_eq!(backend.get(TOKEN_KEY), None);
    }

    #[test]
    fn clear_logs_the_session_out() {
        let store = SessionStore::new(MemoryBackend::new());
        store.save("T", &member());
        store.clear();
        assert_eq!(store.load(), None);
    }
}
