//! # User Mutation Routes
//!
//! - `PUT /users/update/{user_id}` — partial update
//! - `PUT /users/modify-status/{user_id}` — toggle the active flag
//!
//! Both share the same rule: superadmins manage anyone, anyone manages their
//! own record, admins manage stored instructors.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::auth::claims::{AuthUser, Claims};
use crate::auth::rules;
use crate::response::{ApiError, Message};
use crate::routes::users::common::UserUpdate;
use crate::state::AppState;
use common::format_validation_errors;
use db::models::user::{Model as UserModel, Role, UserChanges};

/// Applies the shared update/modify-status rule for `claims` against
/// `target_id`, fetching the target's stored role only when the admin branch
/// needs it.
async fn authorize_manage(
    state: &AppState,
    claims: &Claims,
    target_id: i64,
) -> Result<(), ApiError> {
    let requester = claims.role().ok_or_else(ApiError::unauthorized)?;

    let target_stored_role = if requester == Role::Admin && claims.sub != target_id {
        UserModel::get_by_id(state.db(), target_id)
            .await?
            .map(|u| u.id_rol)
    } else {
        None
    };

    if !rules::can_manage_user(requester, claims.sub, target_id, target_stored_role) {
        return Err(ApiError::unauthorized());
    }
    Ok(())
}

/// PUT /users/update/{user_id}
///
/// Partially updates a user. When `correo` is present the email uniqueness
/// pre-check runs again; it matches any row with that email, including the
/// target itself.
///
/// ### Request Body
/// ```json
/// {
///   "nombre_completo": "Nuevo Nombre",  // optional
///   "correo": "nuevo@example.com",      // optional
///   "id_rol": 3,                        // optional
///   "cod_centro": 102                   // optional
/// }
/// ```
///
/// ### Responses
/// - `200 OK` — `{"message": "Usuario actualizado correctamente"}`
/// - `401 Unauthorized` — rule failed
/// - `400 Bad Request` — duplicate email, or no row to update
/// - `422 Unprocessable Entity` — payload validation failed
/// - `500 Internal Server Error` — database error
pub async fn update_user(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(user_id): Path<i64>,
    Json(req): Json<UserUpdate>,
) -> Result<Json<Message>, ApiError> {
    if let Err(e) = req.validate() {
        return Err(ApiError::Validation(format_validation_errors(&e)));
    }

    authorize_manage(&state, &claims, user_id).await?;

    if let Some(correo) = &req.correo {
        if UserModel::get_by_email(state.db(), correo).await?.is_some() {
            return Err(ApiError::BadRequest("Correo ya registrado".into()));
        }
    }

    let changes = UserChanges {
        nombre_completo: req.nombre_completo,
        correo: req.correo,
        id_rol: req.id_rol,
        cod_centro: req.cod_centro,
    };

    if !UserModel::update(state.db(), user_id, changes).await? {
        return Err(ApiError::BadRequest(
            "No se pudo actualizar el usuario".into(),
        ));
    }

    Ok(Json(Message::new("Usuario actualizado correctamente")))
}

/// PUT /users/modify-status/{user_id}
///
/// Flips the user's `estado` flag against its current stored value.
///
/// ### Responses
/// - `200 OK` — `{"message": "Usuario actualizado correctamente"}`
/// - `401 Unauthorized` — rule failed
/// - `404 Not Found` — no user with this id
/// - `500 Internal Server Error` — database error
pub async fn modify_status(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(user_id): Path<i64>,
) -> Result<Json<Message>, ApiError> {
    authorize_manage(&state, &claims, user_id).await?;

    if UserModel::get_by_id(state.db(), user_id).await?.is_none() {
        return Err(ApiError::NotFound("Usuario no encontrado".into()));
    }

    UserModel::toggle_status(state.db(), user_id).await?;

    Ok(Json(Message::new("Usuario actualizado correctamente")))
}
