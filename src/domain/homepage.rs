//! Homepage aggregate.

use serde::Serialize;
use utoipa::ToSchema;

use super::{Category, RecentOpinion};

/// All categories plus the latest opinions, served in one response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HomepageData {
    #[serde(rename = "categorias")]
    pub categories: Vec<Category>,
    #[serde(rename = "opiniones")]
    pub recent_opinions: Vec<RecentOpinion>,
}
