//! HTTP request handlers.

pub mod auth_handler;
pub mod category_handler;
pub mod opinion_handler;
pub mod reservation_handler;
pub mod restaurant_handler;
pub mod user_handler;

pub use auth_handler::{auth_routes, register_alias_routes};
pub use category_handler::category_routes;
pub use opinion_handler::{homepage_routes, opinion_routes};
pub use reservation_handler::reservation_routes;
pub use restaurant_handler::restaurant_routes;
pub use user_handler::user_routes;

use crate::errors::AppError;

/// Fallback for a known path hit with an unsupported method
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Fallback for paths no route matches
pub async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}
