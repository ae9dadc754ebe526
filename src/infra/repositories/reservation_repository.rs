//! Reservation repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::reservation::{self, ActiveModel, Entity as ReservationEntity};
use super::entities::restaurant;
use super::stamp_now;
use crate::domain::{NewReservation, Reservation, ReservationChanges, UserReservation};
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Reservation>>;

    /// A user's reservations, each with its restaurant's name and image
    async fn list_by_user(&self, user_id: i32) -> AppResult<Vec<UserReservation>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Reservation>>;

    /// Insert with the resolved status; the creation time is set here
    async fn create(&self, input: NewReservation, status: String) -> AppResult<Reservation>;

    /// Overwrite date, time, party size, status and comments
    async fn update(&self, id: i32, changes: ReservationChanges) -> AppResult<Reservation>;

    async fn delete(&self, id: i32) -> AppResult<()>;
}

pub struct ReservationStore {
    db: DatabaseConnection,
}

impl ReservationStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReservationRepository for ReservationStore {
    async fn list(&self) -> AppResult<Vec<Reservation>> {
        let models = ReservationEntity::find()
            .order_by_asc(reservation::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Reservation::from).collect())
    }

    async fn list_by_user(&self, user_id: i32) -> AppResult<Vec<UserReservation>> {
        let rows = ReservationEntity::find()
            .find_also_related(restaurant::Entity)
            .filter(reservation::Column::UserId.eq(user_id))
            .order_by_asc(reservation::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        // id_restaurante cascades on delete, so every row has its restaurant
        Ok(rows
            .into_iter()
            .filter_map(|(model, restaurant)| {
                restaurant.map(|restaurant| UserReservation {
                    reservation: Reservation::from(model),
                    restaurant_name: restaurant.name,
                    restaurant_image: restaurant.image_url,
                })
            })
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Reservation>> {
        let result = ReservationEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Reservation::from))
    }

    async fn create(&self, input: NewReservation, status: String) -> AppResult<Reservation> {
        let active = ActiveModel {
            user_id: Set(input.user_id),
            restaurant_id: Set(input.restaurant_id),
            created_at: Set(stamp_now()),
            date: Set(input.date),
            time: Set(input.time),
            party_size: Set(input.party_size),
            status: Set(status),
            comments: Set(input.comments),
            ..Default::default()
        };

        let model = active
            .insert(&self.db)
            .await
            .map_err(AppError::from_reference_violation)?;
        Ok(Reservation::from(model))
    }

    async fn update(&self, id: i32, changes: ReservationChanges) -> AppResult<Reservation> {
        let existing = ReservationEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found("Reservation")?;

        let mut active: ActiveModel = existing.into();
        active.date = Set(changes.date);
        active.time = Set(changes.time);
        active.party_size = Set(changes.party_size);
        active.status = Set(changes.status);
        active.comments = Set(changes.comments);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Reservation::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        ReservationEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }
}
