//! Integration tests for API endpoints.
//!
//! Each test builds the full router over a fresh in-memory SQLite database
//! and drives it with `oneshot`, so routing, extraction, services and SQL
//! are all exercised together.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

use restaurant_reservations::{create_app, AppState, Config, Database};

type App = NormalizePath<Router>;

// =============================================================================
// Helpers
// =============================================================================

fn memory_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        ..Config::default()
    }
}

async fn test_app() -> App {
    let config = memory_config();
    let db = Database::connect(&config)
        .await
        .expect("in-memory database should connect");
    create_app(AppState::from_config(Arc::new(db), config))
}

async fn send(app: &App, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

/// `YYYY-MM-DDTHH:MM:SS`, no fractional seconds
fn is_whole_second_timestamp(value: &Value) -> bool {
    value
        .as_str()
        .map(|s| chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").is_ok())
        .unwrap_or(false)
}

fn restaurant_body(name: &str) -> Value {
    json!({
        "nombre": name,
        "ubicacion": "Calle Mayor 1, Madrid",
        "categoria": "Tapas",
        "horario_apertura": "12:00",
        "horario_cierre": "23:30",
        "descripcion": "Tapas de toda la vida",
        "capacidad_maxima": 40,
        "mapa_url": "https://www.google.com/maps/embed?pb=!1m18!1m12",
        "imagen_url": "https://cdn.example.com/tasca.jpg"
    })
}

fn registration(email: &str) -> Value {
    json!({
        "nombre": "Ana",
        "email": email,
        "password": "SecurePass123!",
        "telefono": "600123456"
    })
}

async fn register(app: &App, email: &str) -> i64 {
    let (status, body) = send(app, Method::POST, "/auth/register", Some(registration(email))).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id_usuario"].as_i64().unwrap()
}

async fn create_restaurant(app: &App, name: &str) -> i64 {
    let (status, body) = send(app, Method::POST, "/restaurantes", Some(restaurant_body(name))).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id_restaurante"].as_i64().unwrap()
}

async fn create_opinion(app: &App, user_id: i64, restaurant_id: i64, comment: &str, rating: i64) {
    let (status, body) = send(
        app,
        Method::POST,
        "/opiniones",
        Some(json!({
            "id_usuario": user_id,
            "id_restaurante": restaurant_id,
            "comentario": comment,
            "calificacion": rating
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(is_whole_second_timestamp(&body["fecha_opinion"]));
}

// =============================================================================
// Routing
// =============================================================================

#[tokio::test]
async fn test_root_endpoint_returns_welcome_message() {
    let app = test_app().await;
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("Welcome"));
}

#[tokio::test]
async fn test_health_reports_database() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_health_hides_driver_error_when_database_is_down() {
    let config = memory_config();
    let db = Database::connect(&config)
        .await
        .expect("in-memory database should connect");
    let connection = db.get_connection();
    let app = create_app(AppState::from_config(Arc::new(db), config));

    connection.close().await.expect("pool should close");

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body,
        json!({ "status": "degraded", "database": { "status": "unhealthy" } })
    );
}

#[tokio::test]
async fn test_trailing_slash_reaches_the_same_route() {
    let app = test_app().await;
    create_restaurant(&app, "La Tasca").await;

    let (status, body) = send(&app, Method::GET, "/restaurantes/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = send(&app, Method::GET, "/reservas/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());

    let (status, body) = send(&app, Method::GET, "/restaurantes/1/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nombre"], "La Tasca");
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::GET, "/menus", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Route not found" }));
}

#[tokio::test]
async fn test_unsupported_method_is_json_405() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::PATCH, "/restaurantes/1", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({ "error": "Method not allowed" }));

    let (status, _) = send(&app, Method::DELETE, "/homepage", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_non_integer_id_is_bad_request() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::GET, "/restaurantes/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/reservas"].is_object());
}

// =============================================================================
// Restaurants
// =============================================================================

#[tokio::test]
async fn test_restaurant_create_then_get_returns_same_fields() {
    let app = test_app().await;

    let (status, created) =
        send(&app, Method::POST, "/restaurantes", Some(restaurant_body("La Tasca"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["horario_apertura"], "12:00:00");
    assert_eq!(created["capacidad_maxima"], 40);
    assert_eq!(created["imagen_url"], "https://cdn.example.com/tasca.jpg");

    let id = created["id_restaurante"].as_i64().unwrap();
    let (status, fetched) = send(&app, Method::GET, &format!("/restaurantes/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_restaurant_foreign_map_url_is_stored_as_null() {
    let app = test_app().await;
    let mut body = restaurant_body("La Tasca");
    body["mapa_url"] = json!("https://maps.example.com/place/1");

    let (status, created) = send(&app, Method::POST, "/restaurantes", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(created["mapa_url"].is_null());
}

#[tokio::test]
async fn test_restaurant_delete_then_get_is_404() {
    let app = test_app().await;
    let id = create_restaurant(&app, "La Tasca").await;
    let uri = format!("/restaurantes/{}", id);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());

    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Restaurant not found");

    // Deleting again still succeeds
    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_restaurant_update_missing_is_404() {
    let app = test_app().await;
    let (status, _) = send(
        &app,
        Method::PUT,
        "/restaurantes/999",
        Some(restaurant_body("Nowhere")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_restaurants_filtered_by_owner() {
    let app = test_app().await;
    let owner = register(&app, "owner@example.com").await;
    create_restaurant(&app, "Unowned").await;

    let mut owned = restaurant_body("Owned");
    owned["id_usuario"] = json!(owner);
    let (status, _) = send(&app, Method::POST, "/restaurantes", Some(owned)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, all) = send(&app, Method::GET, "/restaurantes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 2);

    let (_, mine) = send(&app, Method::GET, &format!("/restaurantes?usuario={}", owner), None).await;
    let mine = mine.as_array().unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0]["nombre"], "Owned");
}

#[tokio::test]
async fn test_unknown_payload_field_is_bad_request() {
    let app = test_app().await;
    let mut body = restaurant_body("La Tasca");
    body["estrellas"] = json!(3);

    let (status, body) = send(&app, Method::POST, "/restaurantes", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

// =============================================================================
// Auth and users
// =============================================================================

#[tokio::test]
async fn test_duplicate_registration_is_rejected() {
    let app = test_app().await;

    let (status, first) =
        send(&app, Method::POST, "/auth/register", Some(registration("ana@example.com"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["rol"], "cliente");
    assert!(first.get("password").is_none());

    // The legacy path shares the same handler
    let (status, second) =
        send(&app, Method::POST, "/register", Some(registration("ana@example.com"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(second, json!({ "error": "Email is already registered" }));
}

#[tokio::test]
async fn test_login_checks_password() {
    let app = test_app().await;
    let id = register(&app, "ana@example.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/login",
        Some(json!({ "email": "ana@example.com", "password": "WrongPass123!" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/login",
        Some(json!({ "email": "ana@example.com", "password": "SecurePass123!" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());
    assert_eq!(
        body["user"],
        json!({ "id_usuario": id, "nombre": "Ana", "rol": "cliente" })
    );
    assert!(!body.to_string().contains("argon2"));
}

#[tokio::test]
async fn test_login_unknown_email_is_unauthorized() {
    let app = test_app().await;
    let (status, _) = send(
        &app,
        Method::POST,
        "/auth/login",
        Some(json!({ "email": "nobody@example.com", "password": "SecurePass123!" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_user_profile_update() {
    let app = test_app().await;
    let id = register(&app, "ana@example.com").await;
    register(&app, "luis@example.com").await;
    let uri = format!("/usuarios/{}", id);

    let (status, updated) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "nombre": "Ana María", "email": "ana.maria@example.com", "telefono": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["nombre"], "Ana María");
    assert_eq!(updated["rol"], "cliente");
    assert!(updated["telefono"].is_null());

    let (status, fetched) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, updated);
    assert!(fetched.get("password").is_none());

    // Taking someone else's email
    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "nombre": "Ana", "email": "luis@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email is already registered");
}

#[tokio::test]
async fn test_missing_user_is_404() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::GET, "/usuarios/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");

    let (status, _) = send(
        &app,
        Method::PUT,
        "/usuarios/42",
        Some(json!({ "nombre": "Ghost", "email": "ghost@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Opinions and homepage
// =============================================================================

#[tokio::test]
async fn test_restaurant_opinions_best_first() {
    let app = test_app().await;
    let user = register(&app, "ana@example.com").await;
    let restaurant = create_restaurant(&app, "La Tasca").await;

    create_opinion(&app, user, restaurant, "Normal", 3).await;
    create_opinion(&app, user, restaurant, "Excelente", 5).await;

    let uri = format!("/opiniones/{}", restaurant);
    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "comentario": "Excelente", "calificacion": 5, "usuario": "Ana" },
            { "comentario": "Normal", "calificacion": 3, "usuario": "Ana" }
        ])
    );

    create_opinion(&app, user, restaurant, "Mala", 1).await;
    create_opinion(&app, user, restaurant, "Buena", 4).await;

    let (_, body) = send(&app, Method::GET, &uri, None).await;
    let ratings: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["calificacion"].as_i64().unwrap())
        .collect();
    assert_eq!(ratings, vec![5, 4, 3]);
}

#[tokio::test]
async fn test_opinion_rating_out_of_range() {
    let app = test_app().await;
    let (status, _) = send(
        &app,
        Method::POST,
        "/opiniones",
        Some(json!({ "id_usuario": 1, "id_restaurante": 1, "comentario": "x", "calificacion": 6 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_homepage_lists_categories_and_recent_opinions() {
    let app = test_app().await;
    let (status, _) = send(
        &app,
        Method::POST,
        "/categorias",
        Some(json!({ "nombre_categoria": "Italiana", "imagen_url": "https://cdn.example.com/i.jpg" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let user = register(&app, "ana@example.com").await;
    let restaurant = create_restaurant(&app, "La Tasca").await;
    for i in 1..=7 {
        create_opinion(&app, user, restaurant, &format!("Visita {}", i), 4).await;
    }

    let (status, body) = send(&app, Method::GET, "/homepage", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["categorias"][0]["nombre_categoria"], "Italiana");

    let opinions = body["opiniones"].as_array().unwrap();
    assert_eq!(opinions.len(), 6);
    assert_eq!(opinions[0]["comentario"], "Visita 7");
    assert_eq!(opinions[0]["usuario"], "Ana");
    assert_eq!(opinions[0]["restaurante"], "La Tasca");
}

// =============================================================================
// Categories
// =============================================================================

#[tokio::test]
async fn test_category_crud() {
    let app = test_app().await;
    let (status, created) = send(
        &app,
        Method::POST,
        "/categorias",
        Some(json!({ "nombre_categoria": "Japonesa" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let uri = format!("/categorias/{}", created["id_categoria"]);

    let (status, updated) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "nombre_categoria": "Sushi", "imagen_url": "https://cdn.example.com/s.jpg" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["nombre_categoria"], "Sushi");

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Reservations
// =============================================================================

#[tokio::test]
async fn test_reservation_without_status_is_pending() {
    let app = test_app().await;
    let user = register(&app, "ana@example.com").await;
    create_restaurant(&app, "Primero").await;
    let restaurant = create_restaurant(&app, "Segundo").await;
    assert_eq!((user, restaurant), (1, 2));

    let (status, created) = send(
        &app,
        Method::POST,
        "/reservas",
        Some(json!({
            "id_usuario": 1,
            "id_restaurante": 2,
            "fecha_reserva": "2025-06-01",
            "hora_reserva": "19:00",
            "numero_personas": 4,
            "comentarios": "window seat"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["estado"], "pendiente");
    assert!(is_whole_second_timestamp(&created["fecha_creacion"]));

    let (status, list) = send(&app, Method::GET, "/reservas?id_usuario=1", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["estado"], "pendiente");
    assert_eq!(list[0]["fecha_reserva"], "2025-06-01");
    assert_eq!(list[0]["hora_reserva"], "19:00:00");
    assert_eq!(list[0]["comentarios"], "window seat");
    assert_eq!(list[0]["nombre_restaurante"], "Segundo");
    assert_eq!(list[0]["imagen_restaurante"], "https://cdn.example.com/tasca.jpg");
    assert_eq!(list[0]["fecha_creacion"], created["fecha_creacion"]);
}

#[tokio::test]
async fn test_reservation_update_and_delete() {
    let app = test_app().await;
    let user = register(&app, "ana@example.com").await;
    let restaurant = create_restaurant(&app, "La Tasca").await;

    let (_, created) = send(
        &app,
        Method::POST,
        "/reservas",
        Some(json!({
            "id_usuario": user,
            "id_restaurante": restaurant,
            "fecha_reserva": "2025-06-01",
            "hora_reserva": "21:00:00",
            "numero_personas": 2,
            "estado": "confirmada",
            "comentarios": ""
        })),
    )
    .await;
    assert_eq!(created["estado"], "confirmada");
    let uri = format!("/reservas/{}", created["id_reserva"]);

    // Any status may follow any other
    let (status, updated) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({
            "fecha_reserva": "2025-06-02",
            "hora_reserva": "20:30",
            "numero_personas": 3,
            "estado": "pendiente",
            "comentarios": "cumpleaños"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["estado"], "pendiente");
    assert_eq!(updated["hora_reserva"], "20:30:00");
    assert_eq!(updated["fecha_creacion"], created["fecha_creacion"]);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Reservation not found");
}

#[tokio::test]
async fn test_reservation_update_missing_is_404() {
    let app = test_app().await;
    let (status, _) = send(
        &app,
        Method::PUT,
        "/reservas/77",
        Some(json!({
            "fecha_reserva": "2025-06-02",
            "hora_reserva": "20:30",
            "numero_personas": 3,
            "estado": "cancelada",
            "comentarios": ""
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reservation_for_unknown_restaurant_is_bad_request() {
    let app = test_app().await;
    let user = register(&app, "ana@example.com").await;
    let (status, _) = send(
        &app,
        Method::POST,
        "/reservas",
        Some(json!({
            "id_usuario": user,
            "id_restaurante": 404,
            "fecha_reserva": "2025-06-01",
            "hora_reserva": "19:00",
            "numero_personas": 4,
            "comentarios": ""
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
