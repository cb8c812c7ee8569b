//! # Grupos Routes Module
//!
//! Aggregate statistics over training groups ("fichas"), nested under
//! `/grupos`. The whole group is staff-only via the `allow_staff` guard.

use axum::{Router, middleware::from_fn, routing::get};

use crate::auth::guards::allow_staff;
use crate::state::AppState;
use get::{get_nivel_total_grupos, get_total_groups_by_month};

pub mod get;

/// Builds the `/grupos` route group.
///
/// - `GET /grupos/get-nivel-total-grupos` → counts per level
/// - `GET /grupos/get-total-groups-by-month` → counts per end month
pub fn grupos_routes() -> Router<AppState> {
    Router::new()
        .route("/get-nivel-total-grupos", get(get_nivel_total_grupos))
        .route("/get-total-groups-by-month", get(get_total_groups_by_month))
        .route_layer(from_fn(allow_staff))
}
