//! Shared application state for all routes.

use crate::db::Database;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// The only path to the store; injected once at composition time.
    pub db: Arc<dyn Database>,
}

impl AppState {
    pub fn new<D: Database + 'static>(db: D) -> Self {
        AppState { db: Arc::new(db) }
    }

    pub fn db(&self) -> &dyn Database {
        self.db.as_ref()
    }
}
