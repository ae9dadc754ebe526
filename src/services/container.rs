//! Service Container - Centralized service access.
//!
//! Handlers reach every use case through this container, which is built
//! once at startup over a single pooled connection.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::{
    AuthService, Authenticator, CategoryManager, CategoryService, OpinionManager, OpinionService,
    ReservationManager, ReservationService, RestaurantManager, RestaurantService, UserManager,
    UserService,
};
use crate::infra::Persistence;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    fn auth(&self) -> Arc<dyn AuthService>;

    fn users(&self) -> Arc<dyn UserService>;

    fn restaurants(&self) -> Arc<dyn RestaurantService>;

    fn categories(&self) -> Arc<dyn CategoryService>;

    fn opinions(&self) -> Arc<dyn OpinionService>;

    fn reservations(&self) -> Arc<dyn ReservationService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
    restaurant_service: Arc<dyn RestaurantService>,
    category_service: Arc<dyn CategoryService>,
    opinion_service: Arc<dyn OpinionService>,
    reservation_service: Arc<dyn ReservationService>,
}

impl Services {
    /// Wire every service over one Unit of Work
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let uow = Arc::new(Persistence::new(db));

        Self {
            auth_service: Arc::new(Authenticator::new(uow.clone())),
            user_service: Arc::new(UserManager::new(uow.clone())),
            restaurant_service: Arc::new(RestaurantManager::new(uow.clone())),
            category_service: Arc::new(CategoryManager::new(uow.clone())),
            opinion_service: Arc::new(OpinionManager::new(uow.clone())),
            reservation_service: Arc::new(ReservationManager::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn restaurants(&self) -> Arc<dyn RestaurantService> {
        self.restaurant_service.clone()
    }

    fn categories(&self) -> Arc<dyn CategoryService> {
        self.category_service.clone()
    }

    fn opinions(&self) -> Arc<dyn OpinionService> {
        self.opinion_service.clone()
    }

    fn reservations(&self) -> Arc<dyn ReservationService> {
        self.reservation_service.clone()
    }
}
