//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

use chrono::{NaiveDateTime, SubsecRound, Utc};

mod category_repository;
pub(crate) mod entities;
mod opinion_repository;
mod reservation_repository;
mod restaurant_repository;
mod user_repository;

pub use category_repository::{CategoryRepository, CategoryStore};
pub use opinion_repository::{OpinionRepository, OpinionStore};
pub use reservation_repository::{ReservationRepository, ReservationStore};
pub use restaurant_repository::{RestaurantRepository, RestaurantStore};
pub use user_repository::{UserRepository, UserStore};

/// Current UTC time at whole-second precision, matching a MySQL `DATETIME`
pub(crate) fn stamp_now() -> NaiveDateTime {
    Utc::now().naive_utc().trunc_subsecs(0)
}

#[cfg(test)]
pub use category_repository::MockCategoryRepository;
#[cfg(test)]
pub use opinion_repository::MockOpinionRepository;
#[cfg(test)]
pub use reservation_repository::MockReservationRepository;
#[cfg(test)]
pub use restaurant_repository::MockRestaurantRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
