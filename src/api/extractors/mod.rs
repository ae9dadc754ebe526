//! Request extractors that reject with the JSON error body.

mod params;
mod validated_json;

pub use params::{ApiQuery, IdPath};
pub use validated_json::ValidatedJson;
