//! Session store backed by the browser's `sessionStorage`.

use confer_core::StoreError;
use confer_layout::{MemoryStore, SessionStore};

/// Wrapper over `window.sessionStorage`.
pub struct BrowserSessionStore {
    storage: web_sys::Storage,
}

impl BrowserSessionStore {
    /// Open the session storage of the current window.
    pub fn open() -> Result<Self, StoreError> {
        let window = web_sys::window().ok_or_else(|| StoreError::Unavailable {
            reason: "no window".to_string(),
        })?;
        let storage = window
            .session_storage()
            .map_err(|e| StoreError::Unavailable {
                reason: format!("{:?}", e),
            })?
            .ok_or_else(|| StoreError::Unavailable {
                reason: "sessionStorage is disabled".to_string(),
            })?;
        Ok(Self { storage })
    }
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.storage
            .set_item(key, &value)
            .map_err(|e| StoreError::Unavailable {
                reason: format!("{:?}", e),
            })
    }
}

/// Store used by the bindings: `sessionStorage` when the browser offers it,
/// an in-memory map otherwise (workers, private modes, tests).
pub enum HostStore {
    Browser(BrowserSessionStore),
    Memory(MemoryStore),
}

impl HostStore {
    /// Prefer `sessionStorage`, falling back to memory with the reason.
    pub fn detect() -> (Self, Option<StoreError>) {
        match BrowserSessionStore::open() {
            Ok(store) => (HostStore::Browser(store), None),
            Err(err) => (HostStore::Memory(MemoryStore::new()), Some(err)),
        }
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self, HostStore::Browser(_))
    }
}

impl std::fmt::Debug for HostStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostStore::Browser(_) => f.write_str("HostStore::Browser"),
            HostStore::Memory(store) => f.debug_tuple("HostStore::Memory").field(store).finish(),
        }
    }
}

impl SessionStore for HostStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            HostStore::Browser(store) => store.get(key),
            HostStore::Memory(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        match self {
            HostStore::Browser(store) => store.set(key, value),
            HostStore::Memory(store) => store.set(key, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confer_layout::{PersistedSize, WebcamSize};

    #[test]
    fn test_memory_fallback_round_trip() {
        let mut store = HostStore::Memory(MemoryStore::new());
        assert!(!store.is_persistent());

        let size = WebcamSize { width: 320.0, height: 240.0 };
        PersistedSize::store_webcam(&mut store, size).expect("memory store accepts writes");
        assert_eq!(PersistedSize::load(&store).webcam, size);
    }
}
