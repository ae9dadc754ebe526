//! Opinion and homepage handlers.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};

use super::method_not_allowed;
use crate::api::extractors::{IdPath, ValidatedJson};
use crate::api::AppState;
use crate::domain::{HomepageData, NewOpinion, Opinion, RestaurantOpinion};
use crate::errors::AppResult;
use crate::types::Created;

pub fn homepage_routes() -> Router<AppState> {
    Router::new().route("/", get(homepage).fallback(method_not_allowed))
}

pub fn opinion_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_opinion).fallback(method_not_allowed))
        .route(
            "/:id_restaurante",
            get(restaurant_opinions).fallback(method_not_allowed),
        )
}

/// Categories plus the six latest opinions
#[utoipa::path(
    get,
    path = "/homepage",
    tag = "Opinions",
    responses(
        (status = 200, description = "Homepage data", body = HomepageData)
    )
)]
pub async fn homepage(State(state): State<AppState>) -> AppResult<Json<HomepageData>> {
    let data = state.opinion_service.homepage().await?;
    Ok(Json(data))
}

/// Three best-rated opinions of a restaurant
#[utoipa::path(
    get,
    path = "/opiniones/{id_restaurante}",
    tag = "Opinions",
    params(
        ("id_restaurante" = i32, Path, description = "Restaurant ID")
    ),
    responses(
        (status = 200, description = "Top opinions, best rating first", body = Vec<RestaurantOpinion>),
        (status = 400, description = "Invalid ID")
    )
)]
pub async fn restaurant_opinions(
    State(state): State<AppState>,
    IdPath(restaurant_id): IdPath,
) -> AppResult<Json<Vec<RestaurantOpinion>>> {
    let opinions = state.opinion_service.top_opinions(restaurant_id).await?;
    Ok(Json(opinions))
}

#[utoipa::path(
    post,
    path = "/opiniones",
    tag = "Opinions",
    request_body = NewOpinion,
    responses(
        (status = 201, description = "Opinion created", body = Opinion),
        (status = 400, description = "Validation error or unknown user/restaurant")
    )
)]
pub async fn create_opinion(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewOpinion>,
) -> AppResult<Created<Opinion>> {
    let opinion = state.opinion_service.create_opinion(payload).await?;
    Ok(Created(opinion))
}
