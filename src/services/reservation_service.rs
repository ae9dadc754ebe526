//! Reservation service - Booking lifecycle.
//!
//! Status is free text; updates overwrite it without checking transitions.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{NewReservation, Reservation, ReservationChanges, UserReservation};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

#[async_trait]
pub trait ReservationService: Send + Sync {
    async fn list_reservations(&self) -> AppResult<Vec<Reservation>>;

    /// A user's bookings with the restaurant name and image attached
    async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<UserReservation>>;

    async fn get_reservation(&self, id: i32) -> AppResult<Reservation>;

    /// Create a booking; an omitted status becomes `pendiente`
    async fn create_reservation(&self, input: NewReservation) -> AppResult<Reservation>;

    async fn update_reservation(
        &self,
        id: i32,
        changes: ReservationChanges,
    ) -> AppResult<Reservation>;

    async fn delete_reservation(&self, id: i32) -> AppResult<()>;
}

pub struct ReservationManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ReservationManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ReservationService for ReservationManager<U> {
    async fn list_reservations(&self) -> AppResult<Vec<Reservation>> {
        self.uow.reservations().list().await
    }

    async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<UserReservation>> {
        self.uow.reservations().list_by_user(user_id).await
    }

    async fn get_reservation(&self, id: i32) -> AppResult<Reservation> {
        self.uow
            .reservations()
            .find_by_id(id)
            .await?
            .ok_or_not_found("Reservation")
    }

    async fn create_reservation(&self, input: NewReservation) -> AppResult<Reservation> {
        let status = input.status_or_default();
        let reservation = self.uow.reservations().create(input, status).await?;
        tracing::info!(
            reservation_id = reservation.id,
            user_id = reservation.user_id,
            restaurant_id = reservation.restaurant_id,
            "Reservation created"
        );
        Ok(reservation)
    }

    async fn update_reservation(
        &self,
        id: i32,
        changes: ReservationChanges,
    ) -> AppResult<Reservation> {
        self.uow.reservations().update(id, changes).await
    }

    async fn delete_reservation(&self, id: i32) -> AppResult<()> {
        self.uow.reservations().delete(id).await?;
        tracing::info!(reservation_id = id, "Reservation deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RESERVATION_STATUS_CANCELLED, RESERVATION_STATUS_PENDING};
    use crate::errors::AppError;
    use crate::infra::{MockReservationRepository, MockUnitOfWork, ReservationRepository};
    use chrono::{NaiveDate, NaiveTime, Utc};
    use mockall::predicate::eq;

    fn service(repo: MockReservationRepository) -> ReservationManager<MockUnitOfWork> {
        let repo: Arc<dyn ReservationRepository> = Arc::new(repo);
        let mut uow = MockUnitOfWork::new();
        uow.expect_reservations().returning(move || repo.clone());
        ReservationManager::new(Arc::new(uow))
    }

    fn booking(status: Option<&str>) -> NewReservation {
        NewReservation {
            user_id: 1,
            restaurant_id: 2,
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            party_size: 4,
            status: status.map(str::to_string),
            comments: "window seat".to_string(),
        }
    }

    fn stored(input: NewReservation, status: String) -> Reservation {
        Reservation {
            id: 10,
            user_id: input.user_id,
            restaurant_id: input.restaurant_id,
            created_at: Utc::now().naive_utc(),
            date: input.date,
            time: input.time,
            party_size: input.party_size,
            status,
            comments: input.comments,
        }
    }

    #[tokio::test]
    async fn test_create_defaults_status_to_pending() {
        let mut repo = MockReservationRepository::new();
        repo.expect_create()
            .withf(|_, status| status == RESERVATION_STATUS_PENDING)
            .returning(|input, status| Ok(stored(input, status)));

        let reservation = service(repo).create_reservation(booking(None)).await.unwrap();
        assert_eq!(reservation.status, RESERVATION_STATUS_PENDING);
    }

    #[tokio::test]
    async fn test_create_keeps_given_status() {
        let mut repo = MockReservationRepository::new();
        repo.expect_create()
            .withf(|_, status| status == RESERVATION_STATUS_CANCELLED)
            .returning(|input, status| Ok(stored(input, status)));

        let reservation = service(repo)
            .create_reservation(booking(Some(RESERVATION_STATUS_CANCELLED)))
            .await
            .unwrap();
        assert_eq!(reservation.status, RESERVATION_STATUS_CANCELLED);
    }

    #[tokio::test]
    async fn test_get_missing_reservation() {
        let mut repo = MockReservationRepository::new();
        repo.expect_find_by_id().with(eq(99)).returning(|_| Ok(None));

        let err = service(repo).get_reservation(99).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_for_user_keeps_restaurant_details() {
        let mut repo = MockReservationRepository::new();
        repo.expect_list_by_user().with(eq(1)).returning(|_| {
            Ok(vec![UserReservation {
                reservation: stored(booking(None), RESERVATION_STATUS_PENDING.to_string()),
                restaurant_name: "La Tasca".to_string(),
                restaurant_image: Some("https://img.example/tasca.jpg".to_string()),
            }])
        });

        let reservations = service(repo).list_for_user(1).await.unwrap();
        assert_eq!(reservations.len(), 1);
        assert_eq!(reservations[0].restaurant_name, "La Tasca");
        assert_eq!(reservations[0].reservation.user_id, 1);
    }
}
