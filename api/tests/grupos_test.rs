mod helpers;

use api::auth::generate_jwt;
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use chrono::NaiveDate;
use db::models::grupo::Model as GrupoModel;
use db::models::user::{Model as UserModel, Role};
use helpers::app::make_test_app;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;

async fn seed_users(db: &DatabaseConnection) -> (UserModel, UserModel) {
    let superadmin = UserModel::create(db, "Súper Admin", "super@test.com", Role::SuperAdmin, 101)
        .await
        .expect("Failed to create superadmin");
    let instructor = UserModel::create(db, "Instructor", "instru@test.com", Role::Instructor, 101)
        .await
        .expect("Failed to create instructor");
    (superadmin, instructor)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn seed_grupos(db: &DatabaseConnection) {
    // Center 101: two active/presencial TECNICO, one active/presencial
    // TECNOLOGO, plus rows that must not match the level filters.
    let rows = [
        (1001, "TECNICO", "activo", "presencial", 101, date(2024, 1, 15), date(2024, 6, 30)),
        (1002, "TECNICO", "activo", "presencial", 101, date(2024, 2, 1), date(2024, 6, 15)),
        (1003, "TECNOLOGO", "activo", "presencial", 101, date(2024, 1, 10), date(2024, 11, 20)),
        (1004, "TECNICO", "finalizado", "presencial", 101, date(2023, 1, 10), date(2023, 12, 1)),
        (1005, "TECNICO", "activo", "virtual", 101, date(2024, 3, 1), date(2024, 9, 30)),
        // Other center, otherwise matching.
        (2001, "TECNICO", "activo", "presencial", 202, date(2024, 1, 15), date(2024, 6, 30)),
    ];

    for (cod_ficha, nivel, estado, modalidad, centro, inicio, fin) in rows {
        GrupoModel::create(db, cod_ficha, nivel, estado, modalidad, centro, inicio, fin)
            .await
            .expect("Failed to seed grupo");
    }
}

fn get_request(uri: &str, user: &UserModel) -> Request<Body> {
    let (token, _) = generate_jwt(user.id_usuario, &user.correo, user.id_rol);
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

async fn get_json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

// --- GET /grupos/get-nivel-total-grupos ---

#[tokio::test]
async fn nivel_totales_grouped_by_level() {
    let (app, db) = make_test_app().await;
    let (superadmin, _) = seed_users(&db).await;
    seed_grupos(&db).await;

    let req = get_request(
        "/grupos/get-nivel-total-grupos?estado=activo&modalidad=presencial&cod_centro=101",
        &superadmin,
    );

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    let mut rows: Vec<(String, i64)> = json
        .as_array()
        .expect("Expected an array")
        .iter()
        .map(|r| {
            (
                r["nombre_nivel"].as_str().unwrap().to_owned(),
                r["total"].as_i64().unwrap(),
            )
        })
        .collect();
    rows.sort();

    assert_eq!(
        rows,
        vec![("TECNICO".to_owned(), 2), ("TECNOLOGO".to_owned(), 1)]
    );
}

#[tokio::test]
async fn nivel_totales_empty_not_found() {
    let (app, db) = make_test_app().await;
    let (superadmin, _) = seed_users(&db).await;
    seed_grupos(&db).await;

    let req = get_request(
        "/grupos/get-nivel-total-grupos?estado=activo&modalidad=presencial&cod_centro=999",
        &superadmin,
    );

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = get_json_body(response).await;
    assert_eq!(json["detail"], "No se encontraron datos");
}

#[tokio::test]
async fn nivel_totales_as_instructor_unauthorized() {
    let (app, db) = make_test_app().await;
    let (_, instructor) = seed_users(&db).await;

    let req = get_request(
        "/grupos/get-nivel-total-grupos?estado=activo&modalidad=presencial&cod_centro=101",
        &instructor,
    );

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = get_json_body(response).await;
    assert_eq!(json["detail"], "Usuario no autorizado");
}

#[tokio::test]
async fn nivel_totales_without_token_unauthorized() {
    let (app, _db) = make_test_app().await;

    let req = Request::builder()
        .method("GET")
        .uri("/grupos/get-nivel-total-grupos?estado=activo&modalidad=presencial&cod_centro=101")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// --- GET /grupos/get-total-groups-by-month ---

#[tokio::test]
async fn monthly_totales_sorted_ascending_without_zero_fill() {
    let (app, db) = make_test_app().await;
    let (superadmin, _) = seed_users(&db).await;
    seed_grupos(&db).await;

    let req = get_request(
        "/grupos/get-total-groups-by-month?anio=2024&cod_centro=101",
        &superadmin,
    );

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    let rows: Vec<(i32, i64)> = json
        .as_array()
        .expect("Expected an array")
        .iter()
        .map(|r| {
            (
                r["mes"].as_i64().unwrap() as i32,
                r["total"].as_i64().unwrap(),
            )
        })
        .collect();

    // June has two endings, September and November one each; every other
    // month produces no row, and months come back ascending.
    assert_eq!(rows, vec![(6, 2), (9, 1), (11, 1)]);
}

#[tokio::test]
async fn monthly_totales_scoped_to_year_and_center() {
    let (app, db) = make_test_app().await;
    let (superadmin, _) = seed_users(&db).await;
    seed_grupos(&db).await;

    let req = get_request(
        "/grupos/get-total-groups-by-month?anio=2023&cod_centro=101",
        &superadmin,
    );

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    let rows = json.as_array().expect("Expected an array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["mes"], 12);
    assert_eq!(rows[0]["total"], 1);
}

#[tokio::test]
async fn monthly_totales_empty_not_found() {
    let (app, db) = make_test_app().await;
    let (superadmin, _) = seed_users(&db).await;
    seed_grupos(&db).await;

    let req = get_request(
        "/grupos/get-total-groups-by-month?anio=2019&cod_centro=101",
        &superadmin,
    );

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn monthly_totales_as_instructor_unauthorized() {
    let (app, db) = make_test_app().await;
    let (_, instructor) = seed_users(&db).await;

    let req = get_request(
        "/grupos/get-total-groups-by-month?anio=2024&cod_centro=101",
        &instructor,
    );

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
