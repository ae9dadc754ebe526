//! Reservation handlers.

use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use super::method_not_allowed;
use crate::api::extractors::{ApiQuery, IdPath, ValidatedJson};
use crate::api::AppState;
use crate::domain::{NewReservation, Reservation, ReservationChanges};
use crate::errors::AppResult;
use crate::types::{Created, MessageResponse};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReservationQuery {
    /// Only reservations made by this user
    pub id_usuario: Option<i32>,
}

pub fn reservation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_reservations)
                .post(create_reservation)
                .fallback(method_not_allowed),
        )
        .route(
            "/:id",
            get(get_reservation)
                .put(update_reservation)
                .delete(delete_reservation)
                .fallback(method_not_allowed),
        )
}

#[utoipa::path(
    get,
    path = "/reservas",
    tag = "Reservations",
    params(ReservationQuery),
    responses(
        (status = 200, description = "Reservations; filtered by `id_usuario` they are `UserReservation` rows", body = Vec<Reservation>),
        (status = 400, description = "Invalid user ID")
    )
)]
pub async fn list_reservations(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ReservationQuery>,
) -> AppResult<Response> {
    let response = match query.id_usuario {
        Some(user_id) => {
            Json(state.reservation_service.list_for_user(user_id).await?).into_response()
        }
        None => Json(state.reservation_service.list_reservations().await?).into_response(),
    };
    Ok(response)
}

#[utoipa::path(
    get,
    path = "/reservas/{id}",
    tag = "Reservations",
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation", body = Reservation),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn get_reservation(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Reservation>> {
    let reservation = state.reservation_service.get_reservation(id).await?;
    Ok(Json(reservation))
}

/// Book a table; `estado` defaults to `pendiente`
#[utoipa::path(
    post,
    path = "/reservas",
    tag = "Reservations",
    request_body = NewReservation,
    responses(
        (status = 201, description = "Reservation created", body = Reservation),
        (status = 400, description = "Validation error or unknown user/restaurant")
    )
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewReservation>,
) -> AppResult<Created<Reservation>> {
    let reservation = state.reservation_service.create_reservation(payload).await?;
    Ok(Created(reservation))
}

#[utoipa::path(
    put,
    path = "/reservas/{id}",
    tag = "Reservations",
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    request_body = ReservationChanges,
    responses(
        (status = 200, description = "Reservation updated", body = Reservation),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn update_reservation(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(payload): ValidatedJson<ReservationChanges>,
) -> AppResult<Json<Reservation>> {
    let reservation = state
        .reservation_service
        .update_reservation(id, payload)
        .await?;
    Ok(Json(reservation))
}

#[utoipa::path(
    delete,
    path = "/reservas/{id}",
    tag = "Reservations",
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation deleted", body = MessageResponse)
    )
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    state.reservation_service.delete_reservation(id).await?;
    Ok(Json(MessageResponse::new("Reservation deleted")))
}
