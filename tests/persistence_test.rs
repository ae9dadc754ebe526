//! Repository tests against an in-memory SQLite database.
//!
//! Covers what the HTTP tests cannot see directly: what deleting a parent
//! row does to its dependents.

use chrono::{NaiveDate, NaiveTime, Timelike};
use tokio_test::{assert_err, assert_ok};

use restaurant_reservations::domain::{
    NewOpinion, NewReservation, RestaurantInput, UpdateUser,
};
use restaurant_reservations::infra::{Database, Persistence, UnitOfWork};
use restaurant_reservations::{AppError, Config};

async fn persistence() -> Persistence {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        ..Config::default()
    };
    let db = assert_ok!(Database::connect(&config).await);
    Persistence::new(db.get_connection())
}

fn restaurant(owner_id: Option<i32>) -> RestaurantInput {
    RestaurantInput {
        name: "La Tasca".to_string(),
        location: "Madrid".to_string(),
        category: "Tapas".to_string(),
        opening_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        closing_time: NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
        description: None,
        max_capacity: None,
        map_url: None,
        owner_id,
        category_id: None,
        image_url: None,
    }
}

fn reservation(user_id: i32, restaurant_id: i32) -> NewReservation {
    NewReservation {
        user_id,
        restaurant_id,
        date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
        party_size: 4,
        status: None,
        comments: String::new(),
    }
}

async fn seed(uow: &Persistence) -> (i32, i32) {
    let user = assert_ok!(
        uow.users()
            .create(
                "Ana".to_string(),
                "ana@example.com".to_string(),
                "$argon2id$placeholder".to_string(),
                None,
            )
            .await
    );
    let restaurant = assert_ok!(uow.restaurants().create(restaurant(Some(user.id))).await);

    assert_ok!(
        uow.reservations()
            .create(reservation(user.id, restaurant.id), "pendiente".to_string())
            .await
    );
    assert_ok!(
        uow.opinions()
            .create(NewOpinion {
                user_id: user.id,
                restaurant_id: restaurant.id,
                comment: "Muy bien".to_string(),
                rating: 4,
            })
            .await
    );

    (user.id, restaurant.id)
}

#[tokio::test]
async fn test_deleting_user_removes_their_bookings_and_orphans_restaurants() {
    let uow = persistence().await;
    let (user_id, restaurant_id) = seed(&uow).await;

    assert_ok!(uow.users().delete(user_id).await);

    assert!(assert_ok!(uow.reservations().list_by_user(user_id).await).is_empty());
    assert!(assert_ok!(uow.opinions().recent(10).await).is_empty());

    let restaurant = assert_ok!(uow.restaurants().find_by_id(restaurant_id).await).unwrap();
    assert_eq!(restaurant.owner_id, None);
}

#[tokio::test]
async fn test_deleting_restaurant_removes_its_bookings_and_opinions() {
    let uow = persistence().await;
    let (user_id, restaurant_id) = seed(&uow).await;

    assert_ok!(uow.restaurants().delete(restaurant_id).await);

    assert!(assert_ok!(uow.reservations().list_by_user(user_id).await).is_empty());
    assert!(assert_ok!(uow.opinions().top_for_restaurant(restaurant_id, 3).await).is_empty());
    assert!(assert_ok!(uow.users().find_by_id(user_id).await).is_some());
}

#[tokio::test]
async fn test_user_reservations_carry_restaurant_name_and_image() {
    let uow = persistence().await;
    let (user_id, restaurant_id) = seed(&uow).await;

    let mut input = restaurant(Some(user_id));
    input.image_url = Some("https://img.example.com/tasca.jpg".to_string());
    assert_ok!(uow.restaurants().update(restaurant_id, input).await);

    let rows = assert_ok!(uow.reservations().list_by_user(user_id).await);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].reservation.restaurant_id, restaurant_id);
    assert_eq!(rows[0].restaurant_name, "La Tasca");
    assert_eq!(
        rows[0].restaurant_image.as_deref(),
        Some("https://img.example.com/tasca.jpg")
    );
    assert_eq!(rows[0].reservation.created_at.nanosecond(), 0);
}

#[tokio::test]
async fn test_duplicate_email_on_insert() {
    let uow = persistence().await;
    seed(&uow).await;

    let err = assert_err!(
        uow.users()
            .create(
                "Otra Ana".to_string(),
                "ana@example.com".to_string(),
                "$argon2id$placeholder".to_string(),
                None,
            )
            .await
    );
    assert!(matches!(err, AppError::Duplicate(_)));
}

#[tokio::test]
async fn test_profile_update_leaves_role_and_hash() {
    let uow = persistence().await;
    let (user_id, _) = seed(&uow).await;

    let updated = assert_ok!(
        uow.users()
            .update_profile(
                user_id,
                UpdateUser {
                    name: "Ana María".to_string(),
                    email: "ana.maria@example.com".to_string(),
                    phone: Some("600000000".to_string()),
                },
            )
            .await
    );
    assert_eq!(updated.name, "Ana María");
    assert_eq!(updated.password_hash, "$argon2id$placeholder");
    assert_eq!(updated.role.as_str(), "cliente");
}
