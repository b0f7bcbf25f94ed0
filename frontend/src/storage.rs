use shared::{KeyValueStore, Result, WheelError};
use web_sys::{window, Storage};

/// `window.localStorage`. Private browsing or a disabled store shows up as
/// errors on each access rather than at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<Storage> {
        window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let storage = Self::storage()
            .ok_or_else(|| WheelError::PersistenceRead("localStorage unavailable".into()))?;
        storage
            .get_item(key)
            .map_err(|e| WheelError::PersistenceRead(format!("{e:?}")))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let storage = Self::storage()
            .ok_or_else(|| WheelError::PersistenceWrite("localStorage unavailable".into()))?;
        storage
            .set_item(key, value)
            .map_err(|e| WheelError::PersistenceWrite(format!("{e:?}")))
    }
}
