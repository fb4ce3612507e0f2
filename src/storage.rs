//! Key-value persistence for the collapsed flag.
//!
//! Browser builds keep the flag in `window.localStorage`; native builds keep
//! a small JSON map in the user's config directory. Loading and saving are
//! best-effort: failures are logged, the sidebar falls back to expanded and
//! a corrupt stored value is reset.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use tracing::{error, warn};

use crate::error::SidebarResult;

/// Storage key of the collapsed flag
pub const COLLAPSED_KEY: &str = "adminSidebarCollapsed";

/// String key-value store holding JSON-encoded values
pub trait FlagStore {
    fn read(&self, key: &str) -> SidebarResult<Option<String>>;
    fn write(&self, key: &str, value: &str) -> SidebarResult<()>;
}

/// Read the collapsed flag. Absent, unreadable or malformed values all mean
/// "expanded"; an unreadable or malformed value is overwritten with it.
pub fn load_collapsed(store: &dyn FlagStore) -> bool {
    let raw = match store.read(COLLAPSED_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return false,
        Err(e) => {
            error!("Failed to read sidebar collapse state: {}", e);
            save_collapsed(store, false);
            return false;
        }
    };
    match serde_json::from_str::<bool>(&raw) {
        Ok(collapsed) => collapsed,
        Err(e) => {
            error!("Failed to parse sidebar collapse state {:?}: {}", raw, e);
            save_collapsed(store, false);
            false
        }
    }
}

/// Write the collapsed flag; a failure is logged and dropped.
pub fn save_collapsed(store: &dyn FlagStore, collapsed: bool) {
    let result = serde_json::to_string(&collapsed)
        .map_err(Into::into)
        .and_then(|value| store.write(COLLAPSED_KEY, &value));
    if let Err(e) = result {
        error!("Failed to save sidebar collapse state: {}", e);
    }
}

/// In-process store, used by tests and when no persistent backend exists
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl FlagStore for MemoryStore {
    fn read(&self, key: &str) -> SidebarResult<Option<String>> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> SidebarResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;

#[cfg(target_arch = "wasm32")]
mod local {
    use wasm_bindgen::JsValue;

    use super::FlagStore;
    use crate::error::{SidebarError, SidebarResult};

    /// `window.localStorage`
    #[derive(Debug, Default, Clone, Copy)]
    pub struct LocalStorage;

    fn js_error(e: JsValue) -> SidebarError {
        SidebarError::Storage(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
    }

    impl LocalStorage {
        fn storage() -> SidebarResult<web_sys::Storage> {
            let window = web_sys::window()
                .ok_or_else(|| SidebarError::StorageUnavailable("no window".to_string()))?;
            window
                .local_storage()
                .map_err(js_error)?
                .ok_or_else(|| SidebarError::StorageUnavailable("localStorage disabled".to_string()))
        }
    }

    impl FlagStore for LocalStorage {
        fn read(&self, key: &str) -> SidebarResult<Option<String>> {
            Self::storage()?.get_item(key).map_err(js_error)
        }

        fn write(&self, key: &str, value: &str) -> SidebarResult<()> {
            Self::storage()?.set_item(key, value).map_err(js_error)
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::collections::HashMap;
    use std::fs;
    use std::path::{Path, PathBuf};

    use tracing::warn;

    use super::FlagStore;
    use crate::error::{SidebarError, SidebarResult};

    /// JSON object of key → value on disk
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// `<config_dir>/admin-sidebar/storage.json`
        pub fn default_location() -> SidebarResult<Self> {
            let dir = dirs::config_dir()
                .ok_or_else(|| SidebarError::StorageUnavailable("no config directory".to_string()))?;
            Ok(Self::new(dir.join("admin-sidebar").join("storage.json")))
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn load(&self) -> SidebarResult<HashMap<String, String>> {
            if !self.path.exists() {
                return Ok(HashMap::new());
            }
            let content = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&content)?)
        }
    }

    impl FlagStore for FileStore {
        fn read(&self, key: &str) -> SidebarResult<Option<String>> {
            Ok(self.load()?.remove(key))
        }

        fn write(&self, key: &str, value: &str) -> SidebarResult<()> {
            let mut entries = self.load().unwrap_or_else(|e| {
                warn!(
                    "Discarding unreadable store {} while writing '{}': {}",
                    self.path.display(),
                    key,
                    e
                );
                HashMap::new()
            });
            entries.insert(key.to_string(), value.to_string());
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
            Ok(())
        }
    }
}

/// Shared handle to the store backing a sidebar, provided through context.
#[derive(Clone)]
pub struct SharedStore(Rc<dyn FlagStore>);

impl SharedStore {
    pub fn new(store: impl FlagStore + 'static) -> Self {
        Self(Rc::new(store))
    }

    /// The persistent store for the current target, or an in-memory one when
    /// none is reachable.
    pub fn platform() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(LocalStorage)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            match FileStore::default_location() {
                Ok(store) => Self::new(store),
                Err(e) => {
                    warn!("Sidebar state will not persist: {}", e);
                    Self::new(MemoryStore::new())
                }
            }
        }
    }

    pub fn as_store(&self) -> &dyn FlagStore {
        self.0.as_ref()
    }
}

impl PartialEq for SharedStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SharedStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedStore")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SidebarError;

    struct BrokenStore;

    impl FlagStore for BrokenStore {
        fn read(&self, _key: &str) -> SidebarResult<Option<String>> {
            Err(SidebarError::StorageUnavailable("disabled".to_string()))
        }

        fn write(&self, _key: &str, _value: &str) -> SidebarResult<()> {
            Err(SidebarError::Storage("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_load_true() {
        assert!(load_collapsed(&MemoryStore::with_entry(COLLAPSED_KEY, "true")));
    }

    #[test]
    fn test_load_absent_defaults_expanded() {
        assert!(!load_collapsed(&MemoryStore::new()));
    }

    #[test]
    fn test_load_malformed_defaults_expanded() {
        assert!(!load_collapsed(&MemoryStore::with_entry(COLLAPSED_KEY, "{not json")));
        assert!(!load_collapsed(&MemoryStore::with_entry(COLLAPSED_KEY, "\"yes\"")));
    }

    #[test]
    fn test_load_malformed_resets_stored_value() {
        let store = MemoryStore::with_entry(COLLAPSED_KEY, "{not json");
        assert!(!load_collapsed(&store));
        assert_eq!(store.get(COLLAPSED_KEY).as_deref(), Some("false"));
    }

    #[test]
    fn test_load_valid_value_is_not_rewritten() {
        let store = MemoryStore::with_entry(COLLAPSED_KEY, " true ");
        assert!(load_collapsed(&store));
        assert_eq!(store.get(COLLAPSED_KEY).as_deref(), Some(" true "));
    }

    #[test]
    fn test_broken_store_is_not_fatal() {
        assert!(!load_collapsed(&BrokenStore));
        save_collapsed(&BrokenStore, true);
    }

    #[test]
    fn test_save_writes_json() {
        let store = MemoryStore::new();
        save_collapsed(&store, true);
        assert_eq!(store.get(COLLAPSED_KEY).as_deref(), Some("true"));
        save_collapsed(&store, false);
        assert_eq!(store.get(COLLAPSED_KEY).as_deref(), Some("false"));
    }

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("storage.json"));
        assert_eq!(store.read(COLLAPSED_KEY).unwrap(), None);

        save_collapsed(&store, true);
        assert!(load_collapsed(&store));

        // A second instance sees the persisted value
        let reopened = FileStore::new(store.path());
        assert_eq!(reopened.read(COLLAPSED_KEY).unwrap().as_deref(), Some("true"));
    }

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    fn test_file_store_recovers_from_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "garbage").unwrap();
        let store = FileStore::new(&path);

        assert!(store.read(COLLAPSED_KEY).is_err());
        assert!(!load_collapsed(&store));
        // The corrupt file was replaced by the default
        assert_eq!(store.read(COLLAPSED_KEY).unwrap().as_deref(), Some("false"));

        save_collapsed(&store, true);
        assert!(load_collapsed(&store));
    }

    #[test]
    fn test_shared_store_equality_is_identity() {
        let a = SharedStore::new(MemoryStore::new());
        let b = SharedStore::new(MemoryStore::new());
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
