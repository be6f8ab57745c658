//! # localStorage session store — browser-side persistence
//!
//! [`LocalStore`] is the [`SessionStore`] implementation used on the
//! **web platform**. It persists the session keys into the browser's
//! `localStorage` through [`web_sys`], which gives the session exactly the
//! lifetime the product wants: it survives reloads and new tabs, and dies
//! with an explicit logout or expiry-triggered clear.
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors (returning `None` for reads,
//! doing nothing for writes). A blocked or unavailable `localStorage`
//! degrades to "no session" — the user lands on the login screen — rather
//! than crashing the app.

use crate::session::SessionStore;

/// localStorage-backed SessionStore for the web platform.
///
/// Zero-size and `Copy`: the underlying storage handle is re-fetched from
/// the window on every operation, which is how the browser API is meant to
/// be used.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl SessionStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(key);
        }
    }

    fn clear(&self) {
        if let Some(storage) = storage() {
            let _ = storage.clear();
        }
    }
}
