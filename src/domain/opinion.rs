//! Opinion (review) domain types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Stored opinion
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Opinion {
    #[serde(rename = "id_opinion")]
    pub id: i32,
    #[serde(rename = "comentario")]
    pub comment: String,
    #[serde(rename = "calificacion")]
    #[schema(example = 5)]
    pub rating: i32,
    #[serde(rename = "id_usuario")]
    pub user_id: i32,
    #[serde(rename = "id_restaurante")]
    pub restaurant_id: i32,
    #[serde(rename = "fecha_opinion")]
    #[schema(value_type = String, example = "2025-05-30T21:15:00")]
    pub created_at: NaiveDateTime,
}

/// Opinion as listed on the homepage, with author and restaurant names
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RecentOpinion {
    #[serde(rename = "id_opinion")]
    pub id: i32,
    #[serde(rename = "comentario")]
    pub comment: String,
    #[serde(rename = "calificacion")]
    pub rating: i32,
    #[serde(rename = "usuario")]
    pub author: String,
    #[serde(rename = "restaurante")]
    pub restaurant: String,
}

/// Opinion as listed on a restaurant page
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RestaurantOpinion {
    #[serde(rename = "comentario")]
    pub comment: String,
    #[serde(rename = "calificacion")]
    pub rating: i32,
    #[serde(rename = "usuario")]
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct NewOpinion {
    #[serde(rename = "id_usuario")]
    pub user_id: i32,
    #[serde(rename = "id_restaurante")]
    pub restaurant_id: i32,
    #[serde(rename = "comentario")]
    #[validate(length(min = 1, message = "Comment is required"))]
    #[schema(example = "Great paella")]
    pub comment: String,
    #[serde(rename = "calificacion")]
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    #[schema(example = 5, minimum = 1, maximum = 5)]
    pub rating: i32,
}
