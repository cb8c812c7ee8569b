//! # User Lookup Routes
//!
//! - `GET /users/get-by-email?email=` — any authenticated principal
//! - `GET /users/get-by-id?id_usuario=` — any authenticated principal
//! - `GET /users/get-by-centro?cod_centro=` — staff only

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::auth::claims::AuthUser;
use crate::auth::rules;
use crate::response::ApiError;
use crate::routes::users::common::UserOut;
use crate::state::AppState;
use db::models::user::Model as UserModel;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id_usuario: i64,
}

#[derive(Debug, Deserialize)]
pub struct CentroQuery {
    pub cod_centro: i32,
}

/// GET /users/get-by-email
///
/// ### Responses
/// - `200 OK` — the user
/// - `404 Not Found` — no user with this email
/// - `500 Internal Server Error` — database error
pub async fn get_user_by_email(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<EmailQuery>,
) -> Result<Json<UserOut>, ApiError> {
    let user = UserModel::get_by_email(state.db(), &query.email)
        .await?
        .ok_or_else(|| ApiError::NotFound("Usuario no encontrado".into()))?;

    Ok(Json(user.into()))
}

/// GET /users/get-by-id
///
/// ### Responses
/// - `200 OK` — the user
/// - `404 Not Found` — no user with this id
/// - `500 Internal Server Error` — database error
pub async fn get_user_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<IdQuery>,
) -> Result<Json<UserOut>, ApiError> {
    let user = UserModel::get_by_id(state.db(), query.id_usuario)
        .await?
        .ok_or_else(|| ApiError::NotFound("Usuario no encontrado".into()))?;

    Ok(Json(user.into()))
}

/// GET /users/get-by-centro
///
/// Lists the users of a training center. Staff only.
///
/// ### Responses
/// - `200 OK` — the users of the center
/// - `401 Unauthorized` — requester is not superadmin or admin
/// - `404 Not Found` — the center has no users
/// - `500 Internal Server Error` — database error
pub async fn get_users_by_centro(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Query(query): Query<CentroQuery>,
) -> Result<Json<Vec<UserOut>>, ApiError> {
    if !claims.role().is_some_and(rules::is_staff) {
        return Err(ApiError::unauthorized());
    }

    let users = UserModel::get_by_centro(state.db(), query.cod_centro).await?;
    if users.is_empty() {
        return Err(ApiError::NotFound(
            "No se encontraron usuarios para este centro".into(),
        ));
    }

    Ok(Json(users.into_iter().map(UserOut::from).collect()))
}
