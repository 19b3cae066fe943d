//! Authentication context and hooks for the UI.

use dioxus::prelude::*;
use session::{Session, SessionStore, UserProfile};

use api::{ApiClient, SharedPaymentProvider};

/// Auth gate state. Resolved from the session store once at startup, then
/// driven by login and logout.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// Initial state while the stored session is read.
    #[default]
    Checking,
    /// No usable session: the login/register screen shows.
    Anonymous,
    /// Signed in; the profile decides which dashboard renders.
    Authenticated(UserProfile),
}

/// Current auth state. Updates when the user logs in or out.
pub fn use_auth() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// The API client injected by the app shell.
pub fn use_api() -> ApiClient {
    use_context()
}

/// The session store injected by the app shell.
pub fn use_session() -> SessionStore {
    use_context()
}

/// The payment provider injected by the app shell.
pub fn use_payments() -> SharedPaymentProvider {
    use_context()
}

fn resolve(loaded: Option<Session>) -> SessionState {
    match loaded {
        Some(session) => SessionState::Authenticated(session.user),
        None => SessionState::Anonymous,
    }
}

/// Provider component that owns the auth gate state machine.
///
/// Reads the persisted session once on mount and never contacts the server
/// for it; the trust boundary is server-side token validation on each
/// request.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let session = use_session();
    let mut state = use_signal(SessionState::default);
    use_context_provider(|| state);

    use_effect(move || {
        state.set(resolve(session.load()));
    });

    rsx! {
        {children}
    }
}

/// Button that clears the stored session and drops back to the login screen.
#[component]
pub fn LogoutButton() -> Element {
    let session = use_session();
    let mut auth = use_auth();

    rsx! {
        button {
            class: "link-button danger",
            onclick: move |_| {
                session.clear();
                auth.set(SessionState::Anonymous);
            },
            "Logout"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use session::{MemoryBackend, Role};

    fn member() -> UserProfile {
        UserProfile {
            id: "1".to_string(),
            email: "a@b.com".to_string(),
            full_name: "A".to_string(),
            role: Role::Member,
            phone: None,
        }
    }

    #[test]
    fn stored_session_resolves_to_authenticated_with_that_user() {
        let store = SessionStore::new(MemoryBackend::new());
        store.save("T", &member());

        // No server involved: the state comes straight from storage.
        assert_eq!(
            resolve(store.load()),
            SessionState::Authenticated(member())
        );
    }

    #[test]
    fn absent_session_resolves_to_anonymous() {
        let store = SessionStore::new(MemoryBackend::new());
        assert_eq!(resolve(store.load()), SessionState::Anonymous);
    }

    #[test]
    fn corrupt_session_resolves_to_anonymous() {
        let backend = MemoryBackend::new();
        use session::{StorageBackend, TOKEN_KEY, USER_KEY};
        backend.set(TOKEN_KEY, "T");
        backend.set(USER_KEY, "{not json");

        let store = SessionStore::new(backend);
        assert_eq!(resolve(store.load()), SessionState::Anonymous);
    }
}
