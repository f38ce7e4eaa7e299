use ghoshna_core::session::KeyValueStore;
use web_sys::Storage;

/// [`KeyValueStore`] over `window.localStorage`. Reads fail soft to `None`
/// when storage is unavailable (private browsing, disabled cookies).
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    log::warn!("localStorage set {key} failed: {e:?}");
                }
            }
            None => log::warn!("localStorage unavailable, {key} not saved"),
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
