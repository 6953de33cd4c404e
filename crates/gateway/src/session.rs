//! In-memory authentication session.

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use stocklens_catalog::User;

/// A signed-in session: the bearer token plus the authenticated user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Shared handle to the current session. Cloning shares state.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<Option<Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self, session: Session) {
        *self.lock() = Some(session);
    }

    pub fn clear(&self) {
        *self.lock() = None;
    }

    pub fn token(&self) -> Option<String> {
        self.lock().as_ref().map(|s| s.token.clone())
    }

    pub fn current(&self) -> Option<Session> {
        self.lock().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.lock().is_some()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Session>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stocklens_catalog::Role;
    use stocklens_core::UserId;

    fn session() -> Session {
        Session {
            token: "tok-1".to_string(),
            user: User {
                user_id: UserId::from_string("u1"),
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                photo: None,
                role: Role::InventoryManager,
            },
        }
    }

    #[test]
    fn store_and_clear_round_trip() {
        let store = SessionStore::new();
        assert!(!store.is_signed_in());
        assert_eq!(store.token(), None);

        store.store(session());
        assert!(store.is_signed_in());
        assert_eq!(store.token().as_deref(), Some("tok-1"));

        store.clear();
        assert!(!store.is_signed_in());
        assert_eq!(store.current(), None);
    }

    #[test]
    fn clones_share_the_same_session() {
        let store = SessionStore::new();
        let other = store.clone();
        store.store(session());
        assert!(other.is_signed_in());
        other.clear();
        assert!(!store.is_signed_in());
    }
}
