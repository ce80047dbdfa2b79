//! Current-user session.

use super::storage::LocalStorage;
use crate::models::{Role, UpdateProfile, User};

/// Shared demo password accepted for every account.
pub const MOCK_PASSWORD: &str = "password";

/// Holds the logged-in user and mirrors it to local storage.
///
/// Storage write failures are logged; the in-memory state is kept.
#[derive(Debug)]
pub struct AuthContext {
    storage: LocalStorage,
    key: String,
    current: Option<User>,
}

impl AuthContext {
    /// Restore the session saved under `key`, if any.
    pub fn restore(mut storage: LocalStorage, key: impl Into<String>) -> Self {
        let key = key.into();
        tracing::debug!(path = ?storage.path(), "Session storage opened");
        let current = match storage.get(&key).map(serde_json::from_str::<User>) {
            Some(Ok(user)) => {
                tracing::info!(user = %user.nim_nip, "Session restored");
                Some(user)
            }
            Some(Err(e)) => {
                tracing::warn!(error = %e, "Stored session is invalid, discarding");
                if let Err(e) = storage.remove(&key) {
                    tracing::warn!(error = %e, "Failed to remove invalid session");
                }
                None
            }
            None => None,
        };

        Self { storage, key, current }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.current.as_ref().map(|u| u.role)
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    /// Log in as the user in `directory` with the given NIM/NIP.
    ///
    /// Fails without touching the session on an unknown identifier or
    /// wrong password.
    pub fn login(&mut self, directory: &[User], nim_nip: &str, password: &str) -> bool {
        let Some(user) = directory.iter().find(|u| u.nim_nip == nim_nip) else {
            tracing::info!(nim_nip, "Login failed: unknown user");
            return false;
        };
        if password != MOCK_PASSWORD {
            tracing::info!(nim_nip, "Login failed: wrong password");
            return false;
        }

        tracing::info!(nim_nip, role = %user.role, "Logged in");
        self.current = Some(user.clone());
        self.persist();
        true
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.current.take() {
            tracing::info!(nim_nip = %user.nim_nip, "Logged out");
        }
        if let Err(e) = self.storage.remove(&self.key) {
            tracing::warn!(error = %e, "Failed to clear session");
        }
    }

    /// Merge `update` into the current user and persist it.
    ///
    /// The merged user is written back even when `update` is empty.
    /// Returns false only when logged out.
    pub fn update_profile(&mut self, update: UpdateProfile) -> bool {
        let Some(user) = self.current.as_mut() else {
            return false;
        };
        user.apply(update);
        self.persist();
        true
    }

    fn persist(&mut self) {
        let Some(user) = &self.current else {
            return;
        };
        let result = serde_json::to_string(user)
            .map_err(crate::AppError::from)
            .and_then(|json| self.storage.set(&self.key, json));
        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to persist session");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockStore;

    const KEY: &str = "edurate_user";

    fn fresh() -> (MockStore, AuthContext) {
        (MockStore::seeded(), AuthContext::restore(LocalStorage::in_memory(), KEY))
    }

    #[test]
    fn test_login_success() {
        let (store, mut auth) = fresh();
        assert!(auth.login(&store.users, "NIM001", "password"));

        let user = auth.current_user().unwrap();
        assert_eq!(user.id, "2");
        assert_eq!(user.name, "Ahmad Rizki");
        assert_eq!(auth.role(), Some(Role::Mahasiswa));
    }

    #[test]
    fn test_login_wrong_password_keeps_state() {
        let (store, mut auth) = fresh();
        assert!(!auth.login(&store.users, "NIM001", "wrong"));
        assert!(auth.current_user().is_none());

        assert!(auth.login(&store.users, "NIP001", "password"));
        assert!(!auth.login(&store.users, "NIM001", "wrong"));
        assert_eq!(auth.current_user().map(|u| u.id.as_str()), Some("1"));
    }

    #[test]
    fn test_login_unknown_user() {
        let (store, mut auth) = fresh();
        assert!(!auth.login(&store.users, "NOPE", "password"));
        assert!(!auth.login(&store.users, "nim001", "password"));
        assert!(!auth.is_logged_in());
    }

    #[test]
    fn test_session_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = MockStore::seeded();

        let mut auth = AuthContext::restore(LocalStorage::open(&path), KEY);
        assert!(auth.login(&store.users, "ADMIN001", "password"));
        drop(auth);

        let restored = AuthContext::restore(LocalStorage::open(&path), KEY);
        assert_eq!(restored.role(), Some(Role::Admin));
        assert_eq!(restored.current_user().map(|u| u.id.as_str()), Some("3"));
    }

    #[test]
    fn test_logout_clears_storage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = MockStore::seeded();

        let mut auth = AuthContext::restore(LocalStorage::open(&path), KEY);
        auth.login(&store.users, "NIM001", "password");
        auth.logout();
        assert!(!auth.is_logged_in());

        let restored = AuthContext::restore(LocalStorage::open(&path), KEY);
        assert!(!restored.is_logged_in());
    }

    #[test]
    fn test_corrupt_session_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let mut storage = LocalStorage::open(&path);
        storage.set(KEY, "{\"id\": 42}").unwrap();

        let auth = AuthContext::restore(storage, KEY);
        assert!(!auth.is_logged_in());
        assert!(LocalStorage::open(&path).get(KEY).is_none());
    }

    #[test]
    fn test_update_profile_merges_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = MockStore::seeded();

        let mut auth = AuthContext::restore(LocalStorage::open(&path), KEY);
        auth.login(&store.users, "NIM001", "password");
        let before = auth.current_user().cloned().unwrap();

        assert!(auth.update_profile(UpdateProfile {
            phone: Some("0000".to_string()),
            ..Default::default()
        }));

        let after = auth.current_user().unwrap();
        assert_eq!(after.phone.as_deref(), Some("0000"));
        assert_eq!(
            User {
                phone: before.phone.clone(),
                ..after.clone()
            },
            before
        );

        let restored = AuthContext::restore(LocalStorage::open(&path), KEY);
        assert_eq!(restored.current_user(), Some(after));
    }

    #[test]
    fn test_empty_update_still_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = MockStore::seeded();

        let mut auth = AuthContext::restore(LocalStorage::open(&path), KEY);
        auth.login(&store.users, "NIM001", "password");

        // Session entry removed behind the context's back
        let mut external = LocalStorage::open(&path);
        external.remove(KEY).unwrap();
        assert!(LocalStorage::open(&path).get(KEY).is_none());

        assert!(auth.update_profile(UpdateProfile::default()));

        let restored = AuthContext::restore(LocalStorage::open(&path), KEY);
        assert_eq!(restored.current_user().map(|u| u.id.as_str()), Some("2"));
    }

    #[test]
    fn test_update_profile_logged_out_is_noop() {
        let (_, mut auth) = fresh();
        assert!(!auth.update_profile(UpdateProfile {
            phone: Some("0000".to_string()),
            ..Default::default()
        }));
        assert!(auth.current_user().is_none());
    }
}
