//! Global application configuration.
//!
//! `Config` is a lazily initialized singleton loaded from `.env` and
//! environment variables. All runtime knobs live here, including the
//! `CREATE_USER_INSTRU` feature flag that gates user creation.

use once_cell::sync::OnceCell;
use std::env;

#[derive(Debug)]
pub struct Config {
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_duration_minutes: i64,
    /// Gate for the user-creation endpoint. When off, *all* creates are
    /// rejected, superadmin included (current product behavior).
    pub create_user_instructor: bool,
}

static CONFIG: OnceCell<Config> = OnceCell::new();

impl Config {
    fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Config {
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "gestion-fichas".into()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "api=info".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "api.log".into()),
            log_to_stdout: env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "false".into()) == "true",
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "data/gestion.db".into()),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "dev-secret-change-me".into()),
            jwt_duration_minutes: env::var("JWT_DURATION_MINUTES")
                .ok()
                .and_then(|m| m.parse().ok())
                .unwrap_or(60),
            create_user_instructor: env::var("CREATE_USER_INSTRU")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(true),
        }
    }

    /// Returns the global configuration, loading it on first access.
    pub fn global() -> &'static Self {
        CONFIG.get_or_init(Config::from_env)
    }
}
