//! Shared application state.

use crate::session::SessionStore;
use crate::store::{HouseStore, UserStore};
use homeval_training::ArtifactBundle;
use std::sync::Arc;

/// State handed to every request handler.
///
/// The bundle is loaded once before serving begins and never mutated, so
/// prediction needs no synchronization; the stores carry their own locks.
/// Constructed explicitly rather than living in a global so tests can spin
/// up a state around a fixture bundle.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The artifact bundle, read-only for the process lifetime.
    pub bundle: Arc<ArtifactBundle>,
    /// House listings.
    pub houses: Arc<HouseStore>,
    /// User credentials.
    pub users: Arc<UserStore>,
    /// Live login sessions.
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    /// Create state around a loaded bundle with empty stores.
    pub fn new(bundle: Arc<ArtifactBundle>) -> Self {
        Self {
            bundle,
            houses: Arc::new(HouseStore::new()),
            users: Arc::new(UserStore::new()),
            sessions: Arc::new(SessionStore::new()),
        }
    }
}
