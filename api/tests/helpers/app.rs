use api::routes::routes;
use api::state::AppState;
use axum::Router;
use migration::Migrator;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::time::Duration;

/// Builds the full application router against a fresh in-memory SQLite
/// database with the create-user gate enabled.
pub async fn make_test_app() -> (Router, DatabaseConnection) {
    make_test_app_with_flag(true).await
}

/// Same as [`make_test_app`] but with an explicit create-user gate value.
pub async fn make_test_app_with_flag(create_user_instructor: bool) -> (Router, DatabaseConnection) {
    // A single long-lived connection: with a larger pool every pooled
    // connection would see its own empty in-memory database.
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1)
        .min_connections(1)
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(600));

    let db = Database::connect(opts)
        .await
        .expect("Failed to open in-memory database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let app = routes(AppState::new(db.clone(), create_user_instructor));
    (app, db)
}
