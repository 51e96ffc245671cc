//! Thin wrapper over browser `localStorage`.
//!
//! Host builds (tests) have no browser, so they keep values in a per-thread map
//! with the same interface.

#[cfg(target_arch = "wasm32")]
mod imp {
    use web_sys::{Storage, Window};

    pub fn window() -> Result<Window, String> {
        web_sys::window().ok_or_else(|| "No window object".to_string())
    }

    pub fn local_storage() -> Result<Storage, String> {
        window()?
            .local_storage()
            .map_err(|_| "No localStorage".to_string())?
            .ok_or_else(|| "No localStorage".to_string())
    }

    pub fn get_item(key: &str) -> Option<String> {
        local_storage().ok()?.get_item(key).ok().flatten()
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), String> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| format!("Failed to store {}", key))
    }

    pub fn remove_item(key: &str) {
        if let Ok(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get_item(key: &str) -> Option<String> {
        STORE.with(|store| store.borrow().get(key).cloned())
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), String> {
        STORE.with(|store| {
            store.borrow_mut().insert(key.to_string(), value.to_string());
        });
        Ok(())
    }

    pub fn remove_item(key: &str) {
        STORE.with(|store| {
            store.borrow_mut().remove(key);
        });
    }
}

pub use imp::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn set_get_and_remove_round_through_the_store() {
        assert!(get_item("storage-test").is_none());
        set_item("storage-test", "value").unwrap();
        assert_eq!(get_item("storage-test").as_deref(), Some("value"));
        remove_item("storage-test");
        assert!(get_item("storage-test").is_none());
    }
}
