//! Typed access to the browser-persisted tenant session.
//!
//! The session lives in a string key-value store ([`SessionStore`]) under
//! five well-known keys: the bearer token, the user profile, the tenant
//! profile, the cached branding template, and the cached settings blob.
//! All values except the token are JSON-encoded. The keys are always
//! cleared together: a half-valid session (token without profile, or the
//! other way around) must never persist past a logout or expiry.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::models::{DesignTemplate, TenantInfo, UserInfo};

pub const TOKEN_KEY: &str = "tenant_token";
pub const USER_KEY: &str = "tenant_user";
pub const TENANT_KEY: &str = "tenant_info";
pub const DESIGN_KEY: &str = "tenant_design";
pub const SETTINGS_KEY: &str = "tenant_settings";

/// String key-value persistence for session state.
///
/// Implementations swallow storage errors: an unavailable or blocked
/// backing store degrades to "no session" rather than crashing the UI.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
    /// Drop every key, cached blobs included.
    fn clear(&self);
}

/// The authenticated session: token plus user and tenant profiles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserInfo,
    pub tenant: TenantInfo,
}

impl Session {
    /// Whether the embedded token has passed its expiry (fail-closed).
    pub fn is_expired(&self) -> bool {
        crate::token::is_token_expired(&self.token)
    }

    /// Persist this session under the well-known keys.
    pub fn save(&self, store: &impl SessionStore) {
        store.set(TOKEN_KEY, &self.token);
        set_json(store, USER_KEY, &self.user);
        set_json(store, TENANT_KEY, &self.tenant);
    }

    /// Load a previously saved session. None when the token or either
    /// profile is missing or unreadable.
    pub fn load(store: &impl SessionStore) -> Option<Session> {
        let token = store.get(TOKEN_KEY)?;
        let user = get_json(store, USER_KEY)?;
        let tenant = get_json(store, TENANT_KEY)?;
        Some(Session { token, user, tenant })
    }
}

/// Cache the tenant's branding template for offline fallback.
pub fn cache_design(store: &impl SessionStore, design: &DesignTemplate) {
    set_json(store, DESIGN_KEY, design);
}

/// The cached branding template, if one was ever fetched.
pub fn cached_design(store: &impl SessionStore) -> Option<DesignTemplate> {
    get_json(store, DESIGN_KEY)
}

/// Store a JSON-encoded value under `key`.
pub fn set_json<T: Serialize>(store: &impl SessionStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(encoded) => store.set(key, &encoded),
        Err(err) => tracing::warn!("could not encode {key}: {err}"),
    }
}

/// Read a JSON-encoded value from `key`. None on absence or bad JSON.
pub fn get_json<T: DeserializeOwned>(store: &impl SessionStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    serde_json::from_str(&raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::MemoryStore;

    fn sample_session() -> Session {
        Session {
            token: "tok".to_string(),
            user: UserInfo {
                id: "u1".to_string(),
                name: "Asha".to_string(),
                role: Role::TenantAdmin,
            },
            tenant: TenantInfo {
                id: "t1".to_string(),
                name: "Phoenix Computers".to_string(),
            },
        }
    }

    #[test]
    fn save_and_load_round_trip() {
        let store = MemoryStore::new();
        assert!(Session::load(&store).is_none());

        let session = sample_session();
        session.save(&store);
        assert_eq!(Session::load(&store), Some(session));
    }

    #[test]
    fn load_requires_all_three_keys() {
        let store = MemoryStore::new();
        sample_session().save(&store);
        store.remove(USER_KEY);
        assert!(Session::load(&store).is_none());
    }

    #[test]
    fn clear_wipes_cached_blobs_too() {
        let store = MemoryStore::new();
        sample_session().save(&store);
        cache_design(&store, &DesignTemplate::default());
        assert!(cached_design(&store).is_some());

        store.clear();
        assert!(Session::load(&store).is_none());
        assert!(cached_design(&store).is_none());
    }

    #[test]
    fn corrupt_profile_reads_as_no_session() {
        let store = MemoryStore::new();
        sample_session().save(&store);
        store.set(TENANT_KEY, "{not json");
        assert!(Session::load(&store).is_none());
    }
}
