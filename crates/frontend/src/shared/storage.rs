//! Thin wrapper over `window.localStorage`.
//!
//! Storage can be missing (private mode, sandboxed iframes); every accessor
//! degrades to a no-op in that case.

use web_sys::window;

/// Profile name entered on the settings page.
pub const USER_NAME_KEY: &str = "justlaw_user_name";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn set_item(key: &str, value: &str) {
    if let Some(storage) = get_local_storage() {
        if let Err(e) = storage.set_item(key, value) {
            log::warn!("localStorage write failed for {}: {:?}", key, e);
        }
    }
}

pub fn remove_item(key: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(key);
    }
}
