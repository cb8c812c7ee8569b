//! # Users Routes Module
//!
//! Defines and wires up routes for the `/users` endpoint group.
//!
//! ## Structure
//! - `get.rs` — lookups (by email, by id, by center)
//! - `post.rs` — user creation
//! - `put.rs` — partial update and status toggle
//!
//! Every route requires a bearer principal; the finer role rules live in
//! `crate::auth::rules` and are applied per handler.

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;
use get::{get_user_by_email, get_user_by_id, get_users_by_centro};
use post::create_user;
use put::{modify_status, update_user};

pub mod common;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/users` route group.
///
/// - `POST /users/create` → `create_user`
/// - `GET /users/get-by-email` → `get_user_by_email`
/// - `GET /users/get-by-id` → `get_user_by_id`
/// - `PUT /users/update/{user_id}` → `update_user`
/// - `PUT /users/modify-status/{user_id}` → `modify_status`
/// - `GET /users/get-by-centro` → `get_users_by_centro` (staff only)
pub fn users_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_user))
        .route("/get-by-email", get(get_user_by_email))
        .route("/get-by-id", get(get_user_by_id))
        .route("/update/{user_id}", put(update_user))
        .route("/modify-status/{user_id}", put(modify_status))
        .route("/get-by-centro", get(get_users_by_centro))
}
