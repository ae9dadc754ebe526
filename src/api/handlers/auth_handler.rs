//! Authentication handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::Serialize;
use utoipa::ToSchema;

use super::method_not_allowed;
use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{LoginUser, RegisterUser, SessionUser, UserResponse};
use crate::errors::AppResult;
use crate::types::Created;

/// Successful login
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Login successful")]
    pub message: String,
    pub user: SessionUser,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register).fallback(method_not_allowed))
        .route("/login", post(login).fallback(method_not_allowed))
}

/// Top-level `/register`, kept for older clients
pub fn register_alias_routes() -> Router<AppState> {
    Router::new().route("/register", post(register).fallback(method_not_allowed))
}

/// Register a new client account
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "Authentication",
    request_body = RegisterUser,
    responses(
        (status = 201, description = "User registered successfully", body = UserResponse),
        (status = 400, description = "Validation error or email already registered")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterUser>,
) -> AppResult<Created<UserResponse>> {
    let user = state.auth_service.register(payload).await?;
    Ok(Created(UserResponse::from(user)))
}

/// Check credentials
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Authentication",
    request_body = LoginUser,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginUser>,
) -> AppResult<Json<LoginResponse>> {
    let user = state.auth_service.login(payload).await?;
    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user: SessionUser::from(user),
    }))
}
