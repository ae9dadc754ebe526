//! Reservation domain entity and payloads.
//!
//! Status is free text. Known values are `pendiente`, `confirmada` and
//! `cancelada`; no transition between them is enforced.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::config::RESERVATION_STATUS_PENDING;

/// Stored reservation
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Reservation {
    #[serde(rename = "id_reserva")]
    #[schema(example = 1)]
    pub id: i32,
    #[serde(rename = "id_usuario")]
    pub user_id: i32,
    #[serde(rename = "id_restaurante")]
    pub restaurant_id: i32,
    /// Set by the server on insert
    #[serde(rename = "fecha_creacion")]
    #[schema(value_type = String, example = "2025-05-30T10:00:00")]
    pub created_at: NaiveDateTime,
    #[serde(rename = "fecha_reserva")]
    #[schema(value_type = String, example = "2025-06-01")]
    pub date: NaiveDate,
    #[serde(rename = "hora_reserva", with = "super::time_format")]
    #[schema(value_type = String, example = "19:00:00")]
    pub time: NaiveTime,
    #[serde(rename = "numero_personas")]
    #[schema(example = 4)]
    pub party_size: i32,
    #[serde(rename = "estado")]
    #[schema(example = "pendiente")]
    pub status: String,
    #[serde(rename = "comentarios")]
    pub comments: String,
}

/// Reservation as listed for its user, with the restaurant it is booked at
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UserReservation {
    #[serde(flatten)]
    pub reservation: Reservation,
    #[serde(rename = "nombre_restaurante")]
    #[schema(example = "La Tasca")]
    pub restaurant_name: String,
    #[serde(rename = "imagen_restaurante")]
    pub restaurant_image: Option<String>,
}

/// Reservation creation payload
#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct NewReservation {
    #[serde(rename = "id_usuario")]
    #[schema(example = 1)]
    pub user_id: i32,
    #[serde(rename = "id_restaurante")]
    #[schema(example = 2)]
    pub restaurant_id: i32,
    #[serde(rename = "fecha_reserva")]
    #[schema(value_type = String, example = "2025-06-01")]
    pub date: NaiveDate,
    #[serde(rename = "hora_reserva", with = "super::time_format")]
    #[schema(value_type = String, example = "19:00")]
    pub time: NaiveTime,
    #[serde(rename = "numero_personas")]
    #[validate(range(min = 1, message = "Party size must be at least 1"))]
    #[schema(example = 4)]
    pub party_size: i32,
    /// Defaults to `pendiente`
    #[serde(rename = "estado", default)]
    pub status: Option<String>,
    #[serde(rename = "comentarios")]
    #[schema(example = "window seat")]
    pub comments: String,
}

impl NewReservation {
    /// Status to store: the caller's, or `pendiente` when omitted or blank.
    pub fn status_or_default(&self) -> String {
        self.status
            .as_deref()
            .map(str::trim)
            .filter(|status| !status.is_empty())
            .unwrap_or(RESERVATION_STATUS_PENDING)
            .to_string()
    }
}

/// Full overwrite of the mutable reservation fields
#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ReservationChanges {
    #[serde(rename = "fecha_reserva")]
    #[schema(value_type = String, example = "2025-06-02")]
    pub date: NaiveDate,
    #[serde(rename = "hora_reserva", with = "super::time_format")]
    #[schema(value_type = String, example = "20:30")]
    pub time: NaiveTime,
    #[serde(rename = "numero_personas")]
    #[validate(range(min = 1, message = "Party size must be at least 1"))]
    pub party_size: i32,
    #[serde(rename = "estado")]
    #[validate(length(min = 1, message = "Status is required"))]
    #[schema(example = "confirmada")]
    pub status: String,
    #[serde(rename = "comentarios")]
    pub comments: String,
}
