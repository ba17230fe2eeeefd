//! Login session tracking.
//!
//! Sessions are a server-side map from an opaque id (carried in a cookie)
//! to the logged-in username. No expiry or rotation; session hardening is
//! out of scope.

use nanoid::nanoid;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Cookie name carrying the session id.
pub const SESSION_COOKIE: &str = "homeval_session";

/// Thread-safe session-id -> username map.
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: RwLock<HashMap<String, String>>,
}

impl SessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session for a username and return the new session id.
    pub fn create(&self, username: impl Into<String>) -> String {
        let id = nanoid!();
        self.inner.write().insert(id.clone(), username.into());
        id
    }

    /// The username behind a session id, if the session is live.
    pub fn username_for(&self, session_id: &str) -> Option<String> {
        self.inner.read().get(session_id).cloned()
    }

    /// End a session. Returns whether it existed.
    pub fn remove(&self, session_id: &str) -> bool {
        self.inner.write().remove(session_id).is_some()
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether there are no live sessions.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

/// Extract this server's session id from a `Cookie` request header value.
pub fn session_id_from_cookies(header: &str) -> Option<&str> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then_some(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_lookup() {
        let store = SessionStore::new();
        let id = store.create("alice");

        assert_eq!(store.username_for(&id).as_deref(), Some("alice"));
        assert_eq!(store.username_for("bogus"), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_ids_are_unique() {
        let store = SessionStore::new();
        let a = store.create("alice");
        let b = store.create("alice");
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove() {
        let store = SessionStore::new();
        let id = store.create("alice");

        assert!(store.remove(&id));
        assert!(!store.remove(&id));
        assert!(store.is_empty());
        assert_eq!(store.username_for(&id), None);
    }

    #[test]
    fn test_session_id_from_cookies() {
        assert_eq!(
            session_id_from_cookies("homeval_session=abc123"),
            Some("abc123")
        );
        assert_eq!(
            session_id_from_cookies("theme=dark; homeval_session=abc123; lang=en"),
            Some("abc123")
        );
        assert_eq!(session_id_from_cookies("theme=dark"), None);
        assert_eq!(session_id_from_cookies(""), None);
    }
}
