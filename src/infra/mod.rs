//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection pool and migrations
//! - Repositories over the five tables
//! - Unit of Work for repository access

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    CategoryRepository, CategoryStore, OpinionRepository, OpinionStore, ReservationRepository,
    ReservationStore, RestaurantRepository, RestaurantStore, UserRepository, UserStore,
};
pub use unit_of_work::{Persistence, UnitOfWork};

#[cfg(test)]
pub use repositories::{
    MockCategoryRepository, MockOpinionRepository, MockReservationRepository,
    MockRestaurantRepository, MockUserRepository,
};
#[cfg(test)]
pub use unit_of_work::MockUnitOfWork;
