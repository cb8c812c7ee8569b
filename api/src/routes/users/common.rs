use db::models::user::{Model as UserModel, Role};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct UserCreate {
    #[validate(length(min = 1, message = "El nombre no puede estar vacío"))]
    pub nombre_completo: String,

    #[validate(email(message = "Formato de correo inválido"))]
    pub correo: String,

    pub id_rol: Role,

    pub cod_centro: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UserUpdate {
    #[validate(length(min = 1, message = "El nombre no puede estar vacío"))]
    pub nombre_completo: Option<String>,

    #[validate(email(message = "Formato de correo inválido"))]
    pub correo: Option<String>,

    pub id_rol: Option<Role>,

    pub cod_centro: Option<i32>,
}

/// User shape returned by all lookup endpoints.
#[derive(Debug, Serialize)]
pub struct UserOut {
    pub id_usuario: i64,
    pub nombre_completo: String,
    pub correo: String,
    pub id_rol: Role,
    pub estado: bool,
    pub cod_centro: i32,
}

impl From<UserModel> for UserOut {
    fn from(user: UserModel) -> Self {
        Self {
            id_usuario: user.id_usuario,
            nombre_completo: user.nombre_completo,
            correo: user.correo,
            id_rol: user.id_rol,
            estado: user.estado,
            cod_centro: user.cod_centro,
        }
    }
}
