//! HTTP route entry point.
//!
//! Route groups:
//! - `/` → liveness payload (public)
//! - `/users` → user management (bearer principal required; role rules per
//!   handler)
//! - `/grupos` → group aggregate statistics (staff only, guard applied as a
//!   route layer)

use axum::Router;

use crate::routes::{grupos::grupos_routes, health::health_routes, users::users_routes};
use crate::state::AppState;

pub mod grupos;
pub mod health;
pub mod users;

/// Builds the complete application router.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .merge(health_routes())
        .nest("/users", users_routes())
        .nest("/grupos", grupos_routes())
        .with_state(app_state)
}
