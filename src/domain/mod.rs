//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.
//! Serialized field names are the column names the browser client
//! already speaks (`id_restaurante`, `nombre`, ...).

pub mod category;
pub mod homepage;
pub mod opinion;
pub mod password;
pub mod reservation;
pub mod restaurant;
pub mod time_format;
pub mod user;

pub use category::{Category, CategoryInput};
pub use homepage::HomepageData;
pub use opinion::{NewOpinion, Opinion, RecentOpinion, RestaurantOpinion};
pub use password::Password;
pub use reservation::{NewReservation, Reservation, ReservationChanges, UserReservation};
pub use restaurant::{normalize_map_url, Restaurant, RestaurantInput};
pub use user::{LoginUser, RegisterUser, SessionUser, UpdateUser, User, UserResponse, UserRole};
