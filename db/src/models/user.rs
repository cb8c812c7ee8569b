use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
    Set,
};
use serde::{Deserialize, Serialize};

/// Represents a user in the `usuarios` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "usuarios")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id_usuario: i64,
    /// Full display name.
    pub nombre_completo: String,
    /// Email address. Uniqueness is enforced by an explicit pre-check in the
    /// handlers, not by a storage constraint.
    pub correo: String,
    /// Role within the institution.
    pub id_rol: Role,
    /// Active flag; toggled instead of deleting the row.
    pub estado: bool,
    /// Code of the training center the user belongs to.
    pub cod_centro: i32,
    /// Timestamp when the user was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp when the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Closed set of roles, stored as an integer in `id_rol`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(try_from = "i32", into = "i32")]
pub enum Role {
    #[sea_orm(num_value = 1)]
    SuperAdmin,
    #[sea_orm(num_value = 2)]
    Admin,
    #[sea_orm(num_value = 3)]
    Instructor,
}

impl TryFrom<i32> for Role {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Role::SuperAdmin),
            2 => Ok(Role::Admin),
            3 => Ok(Role::Instructor),
            other => Err(format!("unknown role id: {other}")),
        }
    }
}

impl From<Role> for i32 {
    fn from(role: Role) -> Self {
        match role {
            Role::SuperAdmin => 1,
            Role::Admin => 2,
            Role::Instructor => 3,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("No RelationDef implemented")
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Optional field changes applied by [`Model::update`].
#[derive(Debug, Default, Clone)]
pub struct UserChanges {
    pub nombre_completo: Option<String>,
    pub correo: Option<String>,
    pub id_rol: Option<Role>,
    pub cod_centro: Option<i32>,
}

impl Model {
    pub async fn get_by_email(
        db: &DatabaseConnection,
        correo: &str,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::Correo.eq(correo))
            .one(db)
            .await
    }

    pub async fn get_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Inserts a new user. Callers are expected to have verified that the
    /// email is not already registered; the check-then-insert sequence is not
    /// atomic, so two concurrent creates with the same email can both land.
    pub async fn create(
        db: &DatabaseConnection,
        nombre_completo: &str,
        correo: &str,
        id_rol: Role,
        cod_centro: i32,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let user = ActiveModel {
            nombre_completo: Set(nombre_completo.to_owned()),
            correo: Set(correo.to_owned()),
            id_rol: Set(id_rol),
            estado: Set(true),
            cod_centro: Set(cod_centro),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        user.insert(db).await
    }

    /// Applies the present fields of `changes` to the user. Returns `false`
    /// when no row with this id exists.
    pub async fn update(
        db: &DatabaseConnection,
        id: i64,
        changes: UserChanges,
    ) -> Result<bool, DbErr> {
        let Some(user) = Entity::find_by_id(id).one(db).await? else {
            return Ok(false);
        };

        let mut active = user.into_active_model();
        if let Some(nombre) = changes.nombre_completo {
            active.nombre_completo = Set(nombre);
        }
        if let Some(correo) = changes.correo {
            active.correo = Set(correo);
        }
        if let Some(rol) = changes.id_rol {
            active.id_rol = Set(rol);
        }
        if let Some(centro) = changes.cod_centro {
            active.cod_centro = Set(centro);
        }
        active.updated_at = Set(Utc::now());
        active.update(db).await?;
        Ok(true)
    }

    /// Flips the stored `estado` flag. Returns `false` when the row is
    /// absent; callers surface that as a not-found outcome.
    pub async fn toggle_status(db: &DatabaseConnection, id: i64) -> Result<bool, DbErr> {
        let Some(user) = Entity::find_by_id(id).one(db).await? else {
            return Ok(false);
        };

        let current = user.estado;
        let mut active = user.into_active_model();
        active.estado = Set(!current);
        active.updated_at = Set(Utc::now());
        active.update(db).await?;
        Ok(true)
    }

    pub async fn get_by_centro(
        db: &DatabaseConnection,
        cod_centro: i32,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::CodCentro.eq(cod_centro))
            .order_by_asc(Column::IdUsuario)
            .all(db)
            .await
    }
}
