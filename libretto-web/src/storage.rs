//! `localStorage`-backed session persistence.

use gloo_storage::{LocalStorage, Storage};
use shared::session::StorageBackend;

/// Durable browser storage, shared with every other same-origin tab.
///
/// Values are stored raw, so the keys written here (`token`, `user`,
/// `theme`) read back exactly as written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStorage;

impl StorageBackend for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(error) = LocalStorage::raw().set_item(key, value) {
            web_sys::console::warn_1(&error);
        }
    }

    fn remove(&self, key: &str) {
        let _ = LocalStorage::raw().remove_item(key);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn roundtrips_raw_values() {
        let storage = BrowserStorage;
        storage.set("libretto-test-key", "value");
        assert_eq!(storage.get("libretto-test-key").as_deref(), Some("value"));
        storage.remove("libretto-test-key");
        assert_eq!(storage.get("libretto-test-key"), None);
    }
}
