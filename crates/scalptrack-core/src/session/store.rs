//! Single source of truth for the current session.

use std::sync::{Arc, RwLock};

use super::model::{Session, UserIdentity};

/// Shared, synchronously readable session state.
///
/// Cloning the store yields another handle onto the same state. Reads and
/// writes are individually atomic; consumers observe a mutation on their
/// next read. All writers run on the single application task, so no
/// coordination beyond the lock is needed.
#[derive(Debug, Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<Session>>,
}

impl SessionStore {
    /// Creates a store in the initial state: no user, bootstrap pending.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Session::default())),
        }
    }

    /// Returns a snapshot of the current session. No side effects.
    pub fn snapshot(&self) -> Session {
        self.inner.read().unwrap().clone()
    }

    /// Replaces the current identity wholesale.
    ///
    /// `Some` transitions to authenticated, `None` to unauthenticated.
    /// Identities are trusted as-is: they only ever originate from a
    /// successful server call, so no validation happens here. Partial
    /// merges are not offered, which keeps half-written identities
    /// unrepresentable.
    pub fn set_user(&self, user: Option<UserIdentity>) {
        self.inner.write().unwrap().user = user;
    }

    /// Toggles the bootstrap-in-progress flag.
    pub fn set_loading(&self, loading: bool) {
        self.inner.write().unwrap().loading = loading;
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(id: &str) -> UserIdentity {
        UserIdentity {
            id: id.to_string(),
            email: None,
            name: None,
        }
    }

    #[test]
    fn test_initial_state() {
        let store = SessionStore::new();
        let session = store.snapshot();
        assert!(session.user.is_none());
        assert!(session.loading);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_set_user_transitions_auth_state() {
        let store = SessionStore::new();
        store.set_user(Some(identity("1")));
        assert!(store.snapshot().is_authenticated());

        store.set_user(None);
        let session = store.snapshot();
        assert!(!session.is_authenticated());
        assert!(session.user.is_none());
    }

    #[test]
    fn test_set_user_is_total_replace() {
        let store = SessionStore::new();
        store.set_user(Some(UserIdentity {
            id: "1".to_string(),
            email: Some("a@b.com".to_string()),
            name: Some("Alex".to_string()),
        }));
        store.set_user(Some(identity("2")));

        let user = store.snapshot().user.unwrap();
        assert_eq!(user.id, "2");
        // Nothing from the previous identity survives.
        assert!(user.email.is_none());
        assert!(user.name.is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let store = SessionStore::new();
        let other = store.clone();
        other.set_loading(false);
        assert!(!store.snapshot().loading);
    }
}
