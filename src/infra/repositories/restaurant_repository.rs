//! Restaurant repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::restaurant::{self, ActiveModel, Entity as RestaurantEntity};
use crate::domain::{Restaurant, RestaurantInput};
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Restaurant>>;

    /// Restaurants owned by the given user
    async fn list_by_owner(&self, owner_id: i32) -> AppResult<Vec<Restaurant>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Restaurant>>;

    /// Insert the record as given; normalization happens in the service
    async fn create(&self, input: RestaurantInput) -> AppResult<Restaurant>;

    /// Overwrite every field of an existing restaurant
    async fn update(&self, id: i32, input: RestaurantInput) -> AppResult<Restaurant>;

    /// Delete by ID; a missing row is not an error
    async fn delete(&self, id: i32) -> AppResult<()>;
}

pub struct RestaurantStore {
    db: DatabaseConnection,
}

impl RestaurantStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Copy every input field onto an active model
fn apply(active: &mut ActiveModel, input: RestaurantInput) {
    active.name = Set(input.name);
    active.location = Set(input.location);
    active.category = Set(input.category);
    active.opening_time = Set(input.opening_time);
    active.closing_time = Set(input.closing_time);
    active.description = Set(input.description);
    active.max_capacity = Set(input.max_capacity);
    active.map_url = Set(input.map_url);
    active.owner_id = Set(input.owner_id);
    active.category_id = Set(input.category_id);
    active.image_url = Set(input.image_url);
}

#[async_trait]
impl RestaurantRepository for RestaurantStore {
    async fn list(&self) -> AppResult<Vec<Restaurant>> {
        let models = RestaurantEntity::find()
            .order_by_asc(restaurant::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Restaurant::from).collect())
    }

    async fn list_by_owner(&self, owner_id: i32) -> AppResult<Vec<Restaurant>> {
        let models = RestaurantEntity::find()
            .filter(restaurant::Column::OwnerId.eq(owner_id))
            .order_by_asc(restaurant::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Restaurant::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Restaurant>> {
        let result = RestaurantEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Restaurant::from))
    }

    async fn create(&self, input: RestaurantInput) -> AppResult<Restaurant> {
        let mut active = ActiveModel { ..Default::default() };
        apply(&mut active, input);

        let model = active
            .insert(&self.db)
            .await
            .map_err(AppError::from_reference_violation)?;
        Ok(Restaurant::from(model))
    }

    async fn update(&self, id: i32, input: RestaurantInput) -> AppResult<Restaurant> {
        let existing = RestaurantEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found("Restaurant")?;

        let mut active: ActiveModel = existing.into();
        apply(&mut active, input);

        let model = active
            .update(&self.db)
            .await
            .map_err(AppError::from_reference_violation)?;
        Ok(Restaurant::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        RestaurantEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }
}
