//! Application state shared across Axum route handlers.

use sea_orm::DatabaseConnection;

/// Central application state: the database handle and the user-creation
/// feature flag, injected explicitly instead of read ambiently by handlers.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    create_user_instructor: bool,
}

impl AppState {
    pub fn new(db: DatabaseConnection, create_user_instructor: bool) -> Self {
        Self {
            db,
            create_user_instructor,
        }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Whether the user-creation endpoint is enabled at all.
    pub fn create_user_instructor(&self) -> bool {
        self.create_user_instructor
    }
}
