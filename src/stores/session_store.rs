// ============================================================================
// SESSION STORE - Single persisted AuthResult
// ============================================================================
// One record under a fixed key. `save` overwrites, `load` treats a missing
// and a corrupt record the same way (None), `clear` deletes it.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_storage::errors::StorageError as GlooStorageError;
use gloo_storage::{LocalStorage, Storage};

use crate::error::StorageError;
use crate::models::AuthResult;
use crate::utils::constants::STORAGE_KEY_SESSION;

pub trait SessionStore {
    fn save(&self, session: &AuthResult) -> Result<(), StorageError>;
    fn load(&self) -> Option<AuthResult>;
    fn clear(&self);
}

/// Browser localStorage, scoped to the page origin
pub struct LocalSessionStore {
    key: String,
}

impl LocalSessionStore {
    pub fn new() -> Self {
        Self::with_key(STORAGE_KEY_SESSION)
    }

    pub fn with_key(key: &str) -> Self {
        Self { key: key.to_string() }
    }

    /// False in private mode or when storage is disabled
    pub fn is_available() -> bool {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .is_some()
    }
}

impl Default for LocalSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for LocalSessionStore {
    fn save(&self, session: &AuthResult) -> Result<(), StorageError> {
        LocalStorage::set(&self.key, session).map_err(|e| StorageError::Unavailable(e.to_string()))?;
        log::debug!("💾 [SESSION] Session saved");
        Ok(())
    }

    fn load(&self) -> Option<AuthResult> {
        match LocalStorage::get::<AuthResult>(&self.key) {
            Ok(session) => Some(session),
            Err(GlooStorageError::KeyNotFound(_)) => None,
            Err(e) => {
                log::warn!("⚠️ [SESSION] Ignoring unreadable session: {}", e);
                None
            }
        }
    }

    fn clear(&self) {
        LocalStorage::delete(&self.key);
        log::debug!("🗑️ [SESSION] Session cleared");
    }
}

/// Process-local store holding the serialized record
#[derive(Default)]
pub struct MemorySessionStore {
    raw: RefCell<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary stored string, e.g. a corrupt record
    pub fn with_raw(raw: &str) -> Self {
        Self {
            raw: RefCell::new(Some(raw.to_string())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, session: &AuthResult) -> Result<(), StorageError> {
        let json = serde_json::to_string(session)?;
        *self.raw.borrow_mut() = Some(json);
        Ok(())
    }

    fn load(&self) -> Option<AuthResult> {
        let raw = self.raw.borrow();
        let json = raw.as_deref()?;
        match serde_json::from_str(json) {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!("⚠️ [SESSION] Ignoring unreadable session: {}", e);
                None
            }
        }
    }

    fn clear(&self) {
        *self.raw.borrow_mut() = None;
    }
}

/// localStorage when the browser allows it, memory otherwise
pub fn open_session_store() -> Rc<dyn SessionStore> {
    if LocalSessionStore::is_available() {
        Rc::new(LocalSessionStore::new())
    } else {
        log::warn!("⚠️ [SESSION] localStorage unavailable, session will not survive a reload");
        Rc::new(MemorySessionStore::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use serde_json::json;

    fn sample() -> AuthResult {
        serde_json::from_value(json!({
            "access": "tok",
            "refresh": "ref",
            "user": {
                "id": 7,
                "first_name": "Ada",
                "profile_set": true,
                "organization_set": true,
                "provider_rate_set": false,
                "availability_set": false
            }
        }))
        .unwrap()
    }

    #[test]
    fn save_then_load_returns_equal_value() {
        let store = MemorySessionStore::new();
        store.save(&sample()).unwrap();
        assert_eq!(store.load(), Some(sample()));
    }

    #[test]
    fn clear_removes_the_session() {
        let store = MemorySessionStore::new();
        store.save(&sample()).unwrap();
        store.clear();
        assert_eq!(store.load(), None);
        assert_eq!(store.raw(), None);
    }

    #[test]
    fn save_overwrites_previous_session() {
        let store = MemorySessionStore::new();
        store.save(&sample()).unwrap();
        let next = AuthResult {
            access: "tok2".into(),
            user: User::default(),
            extra: Default::default(),
        };
        store.save(&next).unwrap();
        assert_eq!(store.load(), Some(next));
    }

    #[test]
    fn corrupt_record_reads_as_absent() {
        assert_eq!(MemorySessionStore::with_raw("{\"access\": ").load(), None);
        assert_eq!(MemorySessionStore::with_raw("{\"user\": {}}").load(), None);
    }
}
