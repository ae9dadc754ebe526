//! Restaurant handlers.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Deserialize;
use utoipa::IntoParams;

use super::method_not_allowed;
use crate::api::extractors::{ApiQuery, IdPath, ValidatedJson};
use crate::api::AppState;
use crate::domain::{Restaurant, RestaurantInput};
use crate::errors::AppResult;
use crate::types::{Created, MessageResponse};

/// Optional owner filter for the listing
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RestaurantQuery {
    /// Only restaurants owned by this user
    pub usuario: Option<i32>,
}

pub fn restaurant_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_restaurants)
                .post(create_restaurant)
                .fallback(method_not_allowed),
        )
        .route(
            "/:id",
            get(get_restaurant)
                .put(update_restaurant)
                .delete(delete_restaurant)
                .fallback(method_not_allowed),
        )
}

/// List restaurants, optionally by owner
#[utoipa::path(
    get,
    path = "/restaurantes",
    tag = "Restaurants",
    params(RestaurantQuery),
    responses(
        (status = 200, description = "Restaurants", body = Vec<Restaurant>),
        (status = 400, description = "Invalid owner ID")
    )
)]
pub async fn list_restaurants(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<RestaurantQuery>,
) -> AppResult<Json<Vec<Restaurant>>> {
    let restaurants = match query.usuario {
        Some(owner_id) => state.restaurant_service.list_by_owner(owner_id).await?,
        None => state.restaurant_service.list_restaurants().await?,
    };
    Ok(Json(restaurants))
}

#[utoipa::path(
    get,
    path = "/restaurantes/{id}",
    tag = "Restaurants",
    params(
        ("id" = i32, Path, description = "Restaurant ID")
    ),
    responses(
        (status = 200, description = "Restaurant", body = Restaurant),
        (status = 404, description = "Restaurant not found")
    )
)]
pub async fn get_restaurant(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Restaurant>> {
    let restaurant = state.restaurant_service.get_restaurant(id).await?;
    Ok(Json(restaurant))
}

/// Create a restaurant. A map URL that is not a Google Maps embed is stored as null.
#[utoipa::path(
    post,
    path = "/restaurantes",
    tag = "Restaurants",
    request_body = RestaurantInput,
    responses(
        (status = 201, description = "Restaurant created", body = Restaurant),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_restaurant(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RestaurantInput>,
) -> AppResult<Created<Restaurant>> {
    let restaurant = state.restaurant_service.create_restaurant(payload).await?;
    Ok(Created(restaurant))
}

/// Replace every field of a restaurant
#[utoipa::path(
    put,
    path = "/restaurantes/{id}",
    tag = "Restaurants",
    params(
        ("id" = i32, Path, description = "Restaurant ID")
    ),
    request_body = RestaurantInput,
    responses(
        (status = 200, description = "Restaurant updated", body = Restaurant),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Restaurant not found")
    )
)]
pub async fn update_restaurant(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(payload): ValidatedJson<RestaurantInput>,
) -> AppResult<Json<Restaurant>> {
    let restaurant = state
        .restaurant_service
        .update_restaurant(id, payload)
        .await?;
    Ok(Json(restaurant))
}

#[utoipa::path(
    delete,
    path = "/restaurantes/{id}",
    tag = "Restaurants",
    params(
        ("id" = i32, Path, description = "Restaurant ID")
    ),
    responses(
        (status = 200, description = "Restaurant deleted", body = MessageResponse)
    )
)]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    state.restaurant_service.delete_restaurant(id).await?;
    Ok(Json(MessageResponse::new("Restaurant deleted")))
}
