use db::models::user::Role;
use serde::{Deserialize, Serialize};

/// The per-request principal, decoded from the bearer token. The role claim
/// is trusted as-is for authorization decisions; only the *target* user's
/// role is re-read from the store where the rules require it.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User id.
    pub sub: i64,
    /// Email address.
    pub correo: String,
    /// Role id: 1 superadmin, 2 admin, 3 instructor.
    pub rol: i32,
    pub exp: usize,
}

impl Claims {
    /// The principal's role, if the claim carries a known role id.
    pub fn role(&self) -> Option<Role> {
        Role::try_from(self.rol).ok()
    }
}

#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);
