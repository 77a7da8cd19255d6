//! Key/value persistence for the signed-in user

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_storage::{LocalStorage, Storage};

/// Minimal string store the session is persisted through
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn delete(&self, key: &str);
}

/// Browser `localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::get(key).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = LocalStorage::set(key, value) {
            log::warn!("Failed to write '{}' to localStorage: {}", key, e);
        }
    }

    fn delete(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// In-memory store; clones share the same map, like tabs sharing localStorage
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn delete(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_clones_share_entries() {
        let storage = MemoryStorage::new();
        let other = storage.clone();

        storage.set("dsp_user", "jane@dsp-example.com");
        assert_eq!(other.get("dsp_user").as_deref(), Some("jane@dsp-example.com"));

        other.delete("dsp_user");
        assert_eq!(storage.get("dsp_user"), None);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::auth::{persist, restore, AuthState, USER_KEY};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_session_round_trips_through_local_storage() {
        let storage = BrowserStorage;

        persist(&storage, &AuthState::signed_in("jane@dsp-example.com"));
        assert_eq!(storage.get(USER_KEY).as_deref(), Some("jane@dsp-example.com"));
        assert_eq!(restore(&storage), AuthState::signed_in("jane@dsp-example.com"));

        persist(&storage, &AuthState::default());
        assert_eq!(storage.get(USER_KEY), None);
        assert!(!restore(&storage).is_authenticated());
    }
}
