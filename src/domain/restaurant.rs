//! Restaurant domain entity and its input payload.

use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::config::MAP_EMBED_PATTERN;

static MAP_EMBED: Lazy<Regex> =
    Lazy::new(|| Regex::new(MAP_EMBED_PATTERN).expect("map embed pattern is valid"));

/// Keep a map snippet only if it is a Google Maps embed; anything else
/// (including blank input) is stored as absent.
pub fn normalize_map_url(map_url: Option<String>) -> Option<String> {
    map_url
        .map(|url| url.trim().to_string())
        .filter(|url| MAP_EMBED.is_match(url))
}

/// Restaurant domain entity
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Restaurant {
    #[serde(rename = "id_restaurante")]
    #[schema(example = 1)]
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "ubicacion")]
    pub location: String,
    /// Free-text category label
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "horario_apertura", with = "super::time_format")]
    #[schema(value_type = String, example = "12:00:00")]
    pub opening_time: NaiveTime,
    #[serde(rename = "horario_cierre", with = "super::time_format")]
    #[schema(value_type = String, example = "23:30:00")]
    pub closing_time: NaiveTime,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    #[serde(rename = "capacidad_maxima")]
    pub max_capacity: Option<i32>,
    #[serde(rename = "mapa_url")]
    pub map_url: Option<String>,
    /// Owning user (role `restaurante`)
    #[serde(rename = "id_usuario")]
    pub owner_id: Option<i32>,
    #[serde(rename = "id_categoria")]
    pub category_id: Option<i32>,
    #[serde(rename = "imagen_url")]
    pub image_url: Option<String>,
}

/// Full restaurant record as sent on create and update.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct RestaurantInput {
    #[serde(rename = "nombre")]
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "La Tasca")]
    pub name: String,
    #[serde(rename = "ubicacion")]
    #[validate(length(min = 1, message = "Location is required"))]
    #[schema(example = "Calle Mayor 1, Madrid")]
    pub location: String,
    #[serde(rename = "categoria")]
    #[schema(example = "Tapas")]
    pub category: String,
    #[serde(rename = "horario_apertura", with = "super::time_format")]
    #[schema(value_type = String, example = "12:00")]
    pub opening_time: NaiveTime,
    #[serde(rename = "horario_cierre", with = "super::time_format")]
    #[schema(value_type = String, example = "23:30")]
    pub closing_time: NaiveTime,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "capacidad_maxima", default)]
    #[validate(range(min = 1, message = "Capacity must be positive"))]
    #[schema(example = 40)]
    pub max_capacity: Option<i32>,
    /// Google Maps embed URL or `<iframe>` snippet; dropped if it is neither
    #[serde(rename = "mapa_url", default)]
    pub map_url: Option<String>,
    #[serde(rename = "id_usuario", default)]
    pub owner_id: Option<i32>,
    #[serde(rename = "id_categoria", default)]
    pub category_id: Option<i32>,
    #[serde(rename = "imagen_url", default)]
    #[schema(example = "https://example.com/tasca.jpg")]
    pub image_url: Option<String>,
}

impl RestaurantInput {
    /// Apply storage rules to the raw payload.
    pub fn normalized(mut self) -> Self {
        self.map_url = normalize_map_url(self.map_url);
        self
    }
}
