//! Restaurant service - CRUD over restaurants.
//!
//! Map URLs are normalized here on both create and update, so anything
//! that is not a Google Maps embed is stored as null.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Restaurant, RestaurantInput};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

#[async_trait]
pub trait RestaurantService: Send + Sync {
    async fn list_restaurants(&self) -> AppResult<Vec<Restaurant>>;

    /// Restaurants belonging to one owner account
    async fn list_by_owner(&self, owner_id: i32) -> AppResult<Vec<Restaurant>>;

    async fn get_restaurant(&self, id: i32) -> AppResult<Restaurant>;

    async fn create_restaurant(&self, input: RestaurantInput) -> AppResult<Restaurant>;

    async fn update_restaurant(&self, id: i32, input: RestaurantInput) -> AppResult<Restaurant>;

    /// Succeeds whether or not the restaurant existed
    async fn delete_restaurant(&self, id: i32) -> AppResult<()>;
}

pub struct RestaurantManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> RestaurantManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> RestaurantService for RestaurantManager<U> {
    async fn list_restaurants(&self) -> AppResult<Vec<Restaurant>> {
        self.uow.restaurants().list().await
    }

    async fn list_by_owner(&self, owner_id: i32) -> AppResult<Vec<Restaurant>> {
        self.uow.restaurants().list_by_owner(owner_id).await
    }

    async fn get_restaurant(&self, id: i32) -> AppResult<Restaurant> {
        self.uow
            .restaurants()
            .find_by_id(id)
            .await?
            .ok_or_not_found("Restaurant")
    }

    async fn create_restaurant(&self, input: RestaurantInput) -> AppResult<Restaurant> {
        let restaurant = self.uow.restaurants().create(input.normalized()).await?;
        tracing::info!(restaurant_id = restaurant.id, "Restaurant created");
        Ok(restaurant)
    }

    async fn update_restaurant(&self, id: i32, input: RestaurantInput) -> AppResult<Restaurant> {
        self.uow.restaurants().update(id, input.normalized()).await
    }

    async fn delete_restaurant(&self, id: i32) -> AppResult<()> {
        self.uow.restaurants().delete(id).await?;
        tracing::info!(restaurant_id = id, "Restaurant deleted");
        Ok(())
    }
}
