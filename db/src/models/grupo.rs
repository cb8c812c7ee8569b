use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use sea_orm::{DatabaseConnection, DbErr, FromQueryResult, Set, Statement};
use serde::Serialize;

/// Represents a training group ("ficha") in the `grupos` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "grupos")]
pub struct Model {
    /// Group code, assigned externally (not auto-incremented).
    #[sea_orm(primary_key, auto_increment = false)]
    pub cod_ficha: i64,
    /// Training level name (e.g. "TECNICO", "TECNOLOGO").
    pub nombre_nivel: String,
    /// Group status (e.g. "activo", "finalizado").
    pub estado_grupo: String,
    /// Delivery modality (e.g. "presencial", "virtual").
    pub modalidad: String,
    /// Code of the training center running the group.
    pub cod_centro: i32,
    pub fecha_inicio: NaiveDate,
    pub fecha_fin: NaiveDate,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("No RelationDef implemented")
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Group count per training level, as returned by
/// [`nivel_total_por_centro`].
#[derive(Debug, Clone, PartialEq, FromQueryResult, Serialize)]
pub struct NivelTotalGrupos {
    pub nombre_nivel: String,
    pub total: i64,
}

/// Count of groups finishing in a given month, as returned by
/// [`total_finalizan_por_mes`].
#[derive(Debug, Clone, PartialEq, FromQueryResult, Serialize)]
pub struct TotalGrupoMes {
    pub total: i64,
    pub mes: i32,
}

/// Counts groups per level name for a center, filtered by group status and
/// modality. All values are bound parameters.
pub async fn nivel_total_por_centro(
    db: &DatabaseConnection,
    estado: &str,
    modalidad: &str,
    cod_centro: i32,
) -> Result<Vec<NivelTotalGrupos>, DbErr> {
    let stmt = Statement::from_sql_and_values(
        db.get_database_backend(),
        r#"
        SELECT nombre_nivel, COUNT(cod_ficha) AS total
            FROM grupos
        WHERE estado_grupo = ?
            AND modalidad = ?
            AND cod_centro = ?
        GROUP BY nombre_nivel
        "#,
        [estado.into(), modalidad.into(), cod_centro.into()],
    );
    NivelTotalGrupos::find_by_statement(stmt)
        .all(db)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, cod_centro, "Error counting groups per level");
            e
        })
}

/// Counts the groups of a center whose end date falls in `anio`, grouped by
/// end month ascending. Months with no matching groups produce no row.
pub async fn total_finalizan_por_mes(
    db: &DatabaseConnection,
    anio: i32,
    cod_centro: i32,
) -> Result<Vec<TotalGrupoMes>, DbErr> {
    let stmt = Statement::from_sql_and_values(
        db.get_database_backend(),
        r#"
        SELECT COUNT(cod_ficha) AS total,
               CAST(strftime('%m', fecha_fin) AS INTEGER) AS mes
            FROM grupos
        WHERE CAST(strftime('%Y', fecha_fin) AS INTEGER) = ?
            AND cod_centro = ?
        GROUP BY mes
        ORDER BY mes ASC
        "#,
        [anio.into(), cod_centro.into()],
    );
    TotalGrupoMes::find_by_statement(stmt)
        .all(db)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, anio, cod_centro, "Error counting groups per end month");
            e
        })
}

impl Model {
    /// Inserts a group row. Used by the integration tests.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        db: &DatabaseConnection,
        cod_ficha: i64,
        nombre_nivel: &str,
        estado_grupo: &str,
        modalidad: &str,
        cod_centro: i32,
        fecha_inicio: NaiveDate,
        fecha_fin: NaiveDate,
    ) -> Result<Model, DbErr> {
        let grupo = ActiveModel {
            cod_ficha: Set(cod_ficha),
            nombre_nivel: Set(nombre_nivel.to_owned()),
            estado_grupo: Set(estado_grupo.to_owned()),
            modalidad: Set(modalidad.to_owned()),
            cod_centro: Set(cod_centro),
            fecha_inicio: Set(fecha_inicio),
            fecha_fin: Set(fecha_fin),
        };
        grupo.insert(db).await
    }
}
