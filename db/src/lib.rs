pub mod models;

use common::Config;
use sea_orm::{Database, DatabaseConnection};
use std::path::Path;

/// Opens the configured database. Only SQLite is supported: `DATABASE_URL`
/// is either a `sqlite:` DSN or a bare file path.
pub async fn connect() -> DatabaseConnection {
    let path_or_url = Config::global().database_url.clone();
    let url = if path_or_url.starts_with("sqlite:") {
        path_or_url
    } else {
        // Ensure parent directory exists (SQLite won't create intermediate dirs).
        if let Some(parent) = Path::new(&path_or_url).parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        format!("sqlite://{path_or_url}?mode=rwc")
    };

    Database::connect(&url)
        .await
        .expect("Failed to connect to database")
}
