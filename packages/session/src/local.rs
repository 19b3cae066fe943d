//! `localStorage`-backed session persistence for the web build.
//!
//! Every operation silently degrades when the browser denies storage access
//! (private-mode quirks, sandboxed frames): reads yield `None`, writes are
//! dropped. A client without storage behaves as permanently logged out,
//! which is the fail-safe direction.

use web_sys::Storage;

use crate::backend::StorageBackend;

#[derive(Clone, Debug, Default)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl StorageBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}
