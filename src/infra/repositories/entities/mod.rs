//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.
//! Table and column names match the existing MySQL schema.

pub mod category;
pub mod opinion;
pub mod reservation;
pub mod restaurant;
pub mod user;
