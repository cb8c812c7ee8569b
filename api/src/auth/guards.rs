//! Route-layer access guards.

use axum::{
    body::Body,
    extract::FromRequestParts,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::auth::claims::AuthUser;
use crate::auth::rules;
use crate::response::ApiError;

/// Extracts the authenticated user from the request and re-inserts it into
/// the extensions for downstream handlers.
async fn extract_and_insert_authuser(
    req: Request<Body>,
) -> Result<(Request<Body>, AuthUser), ApiError> {
    let (mut parts, body) = req.into_parts();
    let user = AuthUser::from_request_parts(&mut parts, &()).await?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user.clone());
    Ok((req, user))
}

/// Staff-only guard (superadmin or admin) for the group-aggregate routes.
/// A token with an unknown role id is denied.
pub async fn allow_staff(req: Request<Body>, next: Next) -> Result<Response, ApiError> {
    let (req, user) = extract_and_insert_authuser(req).await?;

    let staff = user.0.role().is_some_and(rules::is_staff);
    if !staff {
        return Err(ApiError::unauthorized());
    }

    Ok(next.run(req).await)
}
