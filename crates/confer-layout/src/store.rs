//! Session-scoped persistence of the manual camera-dock size.
//!
//! The engine reads and writes three keys through a [`SessionStore`]. Values
//! are JSON-encoded strings so the browser's `sessionStorage` can back the
//! store directly.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use confer_core::StoreError;

/// Key holding the last manually chosen camera-dock size.
pub const WEBCAM_SIZE_KEY: &str = "webcamSize";
/// Key marking that defaults were seeded in this session.
pub const LOADED_ONCE_KEY: &str = "hasLayoutEngineLoadedOnce";
/// Key marking that at least one layout pass has been emitted.
pub const LAYOUT_READY_KEY: &str = "layoutReady";

/// Key-value storage scoped to the current session.
pub trait SessionStore {
    /// Raw value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a raw value under `key`.
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}

/// In-process store, used natively and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: IndexMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

impl<S: SessionStore + ?Sized> SessionStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// Manually chosen camera-dock size. A zero axis means "never resized".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WebcamSize {
    pub width: f64,
    pub height: f64,
}

/// Read a JSON value stored under `key`.
pub fn read_json<T, S>(store: &S, key: &str) -> Result<Option<T>, StoreError>
where
    T: for<'de> Deserialize<'de>,
    S: SessionStore + ?Sized,
{
    match store.get(key) {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Malformed { key: key.to_string(), source }),
        None => Ok(None),
    }
}

/// Write `value` as JSON under `key`.
pub fn write_json<T, S>(store: &mut S, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize,
    S: SessionStore + ?Sized,
{
    let raw = serde_json::to_string(value)
        .map_err(|source| StoreError::Encode { key: key.to_string(), source })?;
    store.set(key, raw)
}

/// Typed view of the three engine-owned keys.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PersistedSize {
    pub webcam: WebcamSize,
    pub layout_ready: bool,
    pub has_loaded_once: bool,
}

impl PersistedSize {
    /// Load from a store. Unreadable values are logged and treated as unset.
    pub fn load<S: SessionStore + ?Sized>(store: &S) -> Self {
        Self {
            webcam: read_or_default(store, WEBCAM_SIZE_KEY),
            layout_ready: read_or_default(store, LAYOUT_READY_KEY),
            has_loaded_once: read_or_default(store, LOADED_ONCE_KEY),
        }
    }

    /// Write only the webcam size.
    pub fn store_webcam<S: SessionStore + ?Sized>(
        store: &mut S,
        size: WebcamSize,
    ) -> Result<(), StoreError> {
        write_json(store, WEBCAM_SIZE_KEY, &size)
    }

    pub fn mark_loaded_once<S: SessionStore + ?Sized>(store: &mut S) -> Result<(), StoreError> {
        write_json(store, LOADED_ONCE_KEY, &true)
    }

    pub fn set_layout_ready<S: SessionStore + ?Sized>(
        store: &mut S,
        ready: bool,
    ) -> Result<(), StoreError> {
        write_json(store, LAYOUT_READY_KEY, &ready)
    }
}

fn read_or_default<T, S>(store: &S, key: &str) -> T
where
    T: for<'de> Deserialize<'de> + Default,
    S: SessionStore + ?Sized,
{
    match read_json(store, key) {
        Ok(value) => value.unwrap_or_default(),
        Err(err) => {
            warn!(key, error = %err, "ignoring unreadable session value");
            T::default()
        }
    }
}
