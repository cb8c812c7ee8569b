//! # Group Aggregate Routes
//!
//! Both handlers run behind the staff guard; they only translate query
//! parameters into the aggregate queries and map empty results to 404.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::response::ApiError;
use crate::state::AppState;
use db::models::grupo::{self, NivelTotalGrupos, TotalGrupoMes};

#[derive(Debug, Deserialize)]
pub struct NivelTotalQuery {
    pub estado: String,
    pub modalidad: String,
    pub cod_centro: i32,
}

#[derive(Debug, Deserialize)]
pub struct PorMesQuery {
    pub anio: i32,
    pub cod_centro: i32,
}

/// GET /grupos/get-nivel-total-grupos
///
/// Counts groups per level name for a center, filtered by group status and
/// modality.
///
/// ### Responses
/// - `200 OK` — `[{"nombre_nivel": "TECNICO", "total": 4}, ...]`
/// - `401 Unauthorized` — requester is not staff
/// - `404 Not Found` — no groups match the filters
/// - `500 Internal Server Error` — database error
pub async fn get_nivel_total_grupos(
    State(state): State<AppState>,
    Query(query): Query<NivelTotalQuery>,
) -> Result<Json<Vec<NivelTotalGrupos>>, ApiError> {
    let totales = grupo::nivel_total_por_centro(
        state.db(),
        &query.estado,
        &query.modalidad,
        query.cod_centro,
    )
    .await?;

    if totales.is_empty() {
        return Err(ApiError::NotFound("No se encontraron datos".into()));
    }

    Ok(Json(totales))
}

/// GET /grupos/get-total-groups-by-month
///
/// Counts the groups of a center finishing in each month of `anio`, ascending
/// by month. Months with no groups are omitted.
///
/// ### Responses
/// - `200 OK` — `[{"total": 2, "mes": 1}, ...]`
/// - `401 Unauthorized` — requester is not staff
/// - `404 Not Found` — no groups end in that year
/// - `500 Internal Server Error` — database error
pub async fn get_total_groups_by_month(
    State(state): State<AppState>,
    Query(query): Query<PorMesQuery>,
) -> Result<Json<Vec<TotalGrupoMes>>, ApiError> {
    let totales =
        grupo::total_finalizan_por_mes(state.db(), query.anio, query.cod_centro).await?;

    if totales.is_empty() {
        return Err(ApiError::NotFound("No se encontraron datos".into()));
    }

    Ok(Json(totales))
}
