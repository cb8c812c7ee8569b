pub mod claims;
pub mod extractors;
pub mod guards;
pub mod middleware;
pub mod rules;

pub use claims::{AuthUser, Claims};

use chrono::{Duration, Utc};
use common::Config;
use db::models::user::Role;
use jsonwebtoken::{EncodingKey, Header, encode};

/// Generates a JWT and its expiry timestamp for a given user.
///
/// Token issuance itself lives in the external auth service; this helper
/// exists for tests and tooling that need a principal with known claims.
pub fn generate_jwt(user_id: i64, correo: &str, role: Role) -> (String, String) {
    let config = Config::global();
    let expiry = Utc::now() + Duration::minutes(config.jwt_duration_minutes);

    let claims = Claims {
        sub: user_id,
        correo: correo.to_owned(),
        rol: role.into(),
        exp: expiry.timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .expect("Token encoding failed");

    (token, expiry.to_rfc3339())
}
