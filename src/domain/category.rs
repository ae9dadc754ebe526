//! Category domain entity.
//!
//! Categories are display groupings for the homepage; restaurants carry
//! their own free-text category label and are not keyed to this table.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Category {
    #[serde(rename = "id_categoria")]
    #[schema(example = 1)]
    pub id: i32,
    #[serde(rename = "nombre_categoria")]
    #[schema(example = "Italiana")]
    pub name: String,
    #[serde(rename = "imagen_url")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CategoryInput {
    #[serde(rename = "nombre_categoria")]
    #[validate(length(min = 1, message = "Category name is required"))]
    #[schema(example = "Italiana")]
    pub name: String,
    #[serde(rename = "imagen_url", default)]
    #[schema(example = "https://cdn.example.com/italiana.jpg")]
    pub image_url: Option<String>,
}
