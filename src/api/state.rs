//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{
    AuthService, CategoryService, OpinionService, ReservationService, RestaurantService,
    ServiceContainer, Services, UserService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub user_service: Arc<dyn UserService>,
    pub restaurant_service: Arc<dyn RestaurantService>,
    pub category_service: Arc<dyn CategoryService>,
    pub opinion_service: Arc<dyn OpinionService>,
    pub reservation_service: Arc<dyn ReservationService>,
    /// Connection pool, used directly only by the health check
    pub database: Arc<Database>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Build state with the production service wiring.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let services = Services::from_connection(database.get_connection());
        Self::new(&services, database, config)
    }

    /// Build state from any service container.
    pub fn new(services: &dyn ServiceContainer, database: Arc<Database>, config: Config) -> Self {
        Self {
            auth_service: services.auth(),
            user_service: services.users(),
            restaurant_service: services.restaurants(),
            category_service: services.categories(),
            opinion_service: services.opinions(),
            reservation_service: services.reservations(),
            database,
            config: Arc::new(config),
        }
    }
}
