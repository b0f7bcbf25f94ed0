//! Storage boundary: snapshots of the registry state and the theme
//! preference in a string key-value store. No business logic lives here.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::constants::{STORAGE_KEY, THEME_STORAGE_KEY};
use crate::error::{Result, WheelError};
use crate::wheel::RegistryState;

/// A string key-value store such as browser local storage.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store. Clones share the same entries, so a test can keep a
/// handle while a session owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following write fail, as a full or locked store would.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.get() {
            return Err(WheelError::PersistenceWrite(format!("write to {key} refused")));
        }
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WheelStorage<S> {
    store: S,
}

impl<S: KeyValueStore> WheelStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Writes the whole state under the fixed key.
    ///
    /// # Errors
    /// `PersistenceWrite` if the state can't be encoded or the store refuses
    /// the write. The previous snapshot is left in place in either case.
    pub fn save(&self, state: &RegistryState) -> Result<()> {
        let json = serde_json::to_string(state)
            .map_err(|e| WheelError::PersistenceWrite(e.to_string()))?;
        self.store.set_item(STORAGE_KEY, &json)?;
        log::debug!("Saved {} wheels ({} bytes)", state.wheels.len(), json.len());
        Ok(())
    }

    /// Reads the last snapshot. Anything missing, unreadable or empty counts
    /// as "no prior state".
    pub fn load(&self) -> Option<RegistryState> {
        match self.try_load() {
            Ok(state) => state,
            Err(err) => {
                log::warn!("Ignoring stored wheels: {err}");
                None
            }
        }
    }

    fn try_load(&self) -> Result<Option<RegistryState>> {
        let Some(json) = self
            .store
            .get_item(STORAGE_KEY)
            .map_err(|e| WheelError::PersistenceRead(e.to_string()))?
        else {
            log::debug!("No stored wheels under {STORAGE_KEY}");
            return Ok(None);
        };

        let state: RegistryState =
            serde_json::from_str(&json).map_err(|e| WheelError::PersistenceRead(e.to_string()))?;
        if state.wheels.is_empty() {
            return Err(WheelError::PersistenceRead("snapshot has no wheels".into()));
        }
        Ok(Some(state))
    }

    /// Absent or unreadable means light.
    pub fn load_theme(&self) -> Theme {
        match self.store.get_item(THEME_STORAGE_KEY) {
            Ok(Some(value)) if value == Theme::Dark.as_str() => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn save_theme(&self, theme: Theme) -> Result<()> {
        self.store.set_item(THEME_STORAGE_KEY, theme.as_str())
    }
}
