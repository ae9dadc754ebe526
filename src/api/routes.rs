//! Application route configuration.

use axum::{
    extract::State,
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method, StatusCode,
    },
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, normalize_path::NormalizePath, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    auth_routes, category_routes, homepage_routes, method_not_allowed, opinion_routes,
    register_alias_routes, reservation_routes, restaurant_routes, route_not_found, user_routes,
};
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::Config;

/// Router wrapped so that `/restaurantes/` and `/restaurantes` resolve alike
pub fn create_app(state: AppState) -> NormalizePath<Router> {
    NormalizePath::trim_trailing_slash(create_router(state))
}

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/", get(root).fallback(method_not_allowed))
        .route("/health", get(health).fallback(method_not_allowed))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/restaurantes", restaurant_routes())
        .nest("/homepage", homepage_routes())
        .nest("/opiniones", opinion_routes())
        .nest("/categorias", category_routes())
        .nest("/auth", auth_routes())
        .merge(register_alias_routes())
        .nest("/usuarios", user_routes())
        .nest("/reservas", reservation_routes())
        .fallback(route_not_found)
        // Global middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Single configured origin, with credentials.
fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION, ACCEPT])
        .allow_credentials(true);

    match config.cors_allowed_origin.parse::<HeaderValue>() {
        Ok(origin) => layer.allow_origin(origin),
        Err(_) => {
            tracing::warn!(
                origin = %config.cors_allowed_origin,
                "Invalid CORS origin, cross-origin requests will be refused"
            );
            layer
        }
    }
}

/// Root endpoint
async fn root() -> &'static str {
    "Welcome to the Restaurant Reservations API"
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    database: ServiceStatus,
}

/// Service status; driver errors stay in the log
#[derive(Serialize)]
struct ServiceStatus {
    status: &'static str,
}

/// Health check endpoint with database connectivity check
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status_code, response) = match state.database.ping().await {
        Ok(_) => (
            StatusCode::OK,
            HealthResponse {
                status: "healthy",
                database: ServiceStatus { status: "healthy" },
            },
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                HealthResponse {
                    status: "degraded",
                    database: ServiceStatus { status: "unhealthy" },
                },
            )
        }
    };

    (status_code, Json(response))
}
