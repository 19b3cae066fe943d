//! # Session crate — browser-persisted authentication state
//!
//! Holds the two pieces of client state that survive a page reload: the auth
//! token and the signed-in user's profile. Everything else in the app is
//! refetched from the backend.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `backend` | [`StorageBackend`] trait plus the in-memory implementation |
//! | `local` | `localStorage` implementation, web builds only |
//! | `store` | [`SessionStore`]: typed save/load/clear over a backend |
//! | [`models`] | [`UserProfile`] and [`Role`] |
//!
//! No expiry or signature check happens client-side; the backend validates
//! the token on every request.

pub mod models;
pub use models::{Role, UserProfile};

mod backend;
pub use backend::{MemoryBackend, StorageBackend};

#[cfg(target_arch = "wasm32")]
mod local;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStorageBackend;

mod store;
pub use store::{Session, SessionStore, TOKEN_KEY, USER_KEY};
