//! Unit of Work: one place that hands out every repository.
//!
//! Services depend on this trait instead of on individual stores, so a
//! single mock can stand in for the whole persistence layer in tests.
//! Every store shares the same pooled connection; none of the operations
//! need a transaction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::repositories::{
    CategoryRepository, CategoryStore, OpinionRepository, OpinionStore, ReservationRepository,
    ReservationStore, RestaurantRepository, RestaurantStore, UserRepository, UserStore,
};

#[cfg(test)]
use mockall::automock;

/// Unit of Work trait for dependency injection.
#[cfg_attr(test, automock)]
pub trait UnitOfWork: Send + Sync {
    fn users(&self) -> Arc<dyn UserRepository>;

    fn restaurants(&self) -> Arc<dyn RestaurantRepository>;

    fn categories(&self) -> Arc<dyn CategoryRepository>;

    fn opinions(&self) -> Arc<dyn OpinionRepository>;

    fn reservations(&self) -> Arc<dyn ReservationRepository>;
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    user_repo: Arc<UserStore>,
    restaurant_repo: Arc<RestaurantStore>,
    category_repo: Arc<CategoryStore>,
    opinion_repo: Arc<OpinionStore>,
    reservation_repo: Arc<ReservationStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            restaurant_repo: Arc::new(RestaurantStore::new(db.clone())),
            category_repo: Arc::new(CategoryStore::new(db.clone())),
            opinion_repo: Arc::new(OpinionStore::new(db.clone())),
            reservation_repo: Arc::new(ReservationStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn restaurants(&self) -> Arc<dyn RestaurantRepository> {
        self.restaurant_repo.clone()
    }

    fn categories(&self) -> Arc<dyn CategoryRepository> {
        self.category_repo.clone()
    }

    fn opinions(&self) -> Arc<dyn OpinionRepository> {
        self.opinion_repo.clone()
    }

    fn reservations(&self) -> Arc<dyn ReservationRepository> {
        self.reservation_repo.clone()
    }
}
