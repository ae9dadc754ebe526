//! Category handlers.

use axum::{extract::State, response::Json, routing::get, Router};

use super::method_not_allowed;
use crate::api::extractors::{IdPath, ValidatedJson};
use crate::api::AppState;
use crate::domain::{Category, CategoryInput};
use crate::errors::AppResult;
use crate::types::{Created, MessageResponse};

pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_categories)
                .post(create_category)
                .fallback(method_not_allowed),
        )
        .route(
            "/:id",
            get(get_category)
                .put(update_category)
                .delete(delete_category)
                .fallback(method_not_allowed),
        )
}

#[utoipa::path(
    get,
    path = "/categorias",
    tag = "Categories",
    responses(
        (status = 200, description = "All categories", body = Vec<Category>)
    )
)]
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = state.category_service.list_categories().await?;
    Ok(Json(categories))
}

#[utoipa::path(
    get,
    path = "/categorias/{id}",
    tag = "Categories",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category", body = Category),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Category>> {
    let category = state.category_service.get_category(id).await?;
    Ok(Json(category))
}

#[utoipa::path(
    post,
    path = "/categorias",
    tag = "Categories",
    request_body = CategoryInput,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CategoryInput>,
) -> AppResult<Created<Category>> {
    let category = state.category_service.create_category(payload).await?;
    Ok(Created(category))
}

#[utoipa::path(
    put,
    path = "/categorias/{id}",
    tag = "Categories",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    request_body = CategoryInput,
    responses(
        (status = 200, description = "Category updated", body = Category),
        (status = 404, description = "Category not found")
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(payload): ValidatedJson<CategoryInput>,
) -> AppResult<Json<Category>> {
    let category = state.category_service.update_category(id, payload).await?;
    Ok(Json(category))
}

#[utoipa::path(
    delete,
    path = "/categorias/{id}",
    tag = "Categories",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category deleted", body = MessageResponse)
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    state.category_service.delete_category(id).await?;
    Ok(Json(MessageResponse::new("Category deleted")))
}
