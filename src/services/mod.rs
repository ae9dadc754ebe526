//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion and reach repositories through the Unit of Work.

mod auth_service;
mod category_service;
pub mod container;
mod opinion_service;
mod reservation_service;
mod restaurant_service;
mod user_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator};
pub use category_service::{CategoryManager, CategoryService};
pub use opinion_service::{OpinionManager, OpinionService};
pub use reservation_service::{ReservationManager, ReservationService};
pub use restaurant_service::{RestaurantManager, RestaurantService};
pub use user_service::{UserManager, UserService};
