//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{
    auth_handler, category_handler, opinion_handler, reservation_handler, restaurant_handler,
    user_handler,
};
use crate::domain::{
    Category, CategoryInput, HomepageData, LoginUser, NewOpinion, NewReservation, Opinion,
    RecentOpinion, RegisterUser, Reservation, ReservationChanges, Restaurant, RestaurantInput,
    RestaurantOpinion, SessionUser, UpdateUser, UserReservation, UserResponse, UserRole,
};
use crate::types::MessageResponse;

/// OpenAPI documentation for the Restaurant Reservations API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Restaurant Reservations API",
        version = "0.1.0",
        description = "Restaurants, categories, opinions, users and table reservations",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        // Restaurants
        restaurant_handler::list_restaurants,
        restaurant_handler::get_restaurant,
        restaurant_handler::create_restaurant,
        restaurant_handler::update_restaurant,
        restaurant_handler::delete_restaurant,
        // Opinions
        opinion_handler::homepage,
        opinion_handler::restaurant_opinions,
        opinion_handler::create_opinion,
        // Categories
        category_handler::list_categories,
        category_handler::get_category,
        category_handler::create_category,
        category_handler::update_category,
        category_handler::delete_category,
        // Authentication
        auth_handler::register,
        auth_handler::login,
        // Users
        user_handler::list_users,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
        // Reservations
        reservation_handler::list_reservations,
        reservation_handler::get_reservation,
        reservation_handler::create_reservation,
        reservation_handler::update_reservation,
        reservation_handler::delete_reservation,
    ),
    components(
        schemas(
            Restaurant,
            RestaurantInput,
            Category,
            CategoryInput,
            Opinion,
            NewOpinion,
            RecentOpinion,
            RestaurantOpinion,
            HomepageData,
            UserRole,
            UserResponse,
            SessionUser,
            RegisterUser,
            LoginUser,
            UpdateUser,
            Reservation,
            NewReservation,
            ReservationChanges,
            UserReservation,
            MessageResponse,
            auth_handler::LoginResponse,
        )
    ),
    tags(
        (name = "Restaurants", description = "Restaurant listing and management"),
        (name = "Opinions", description = "Reviews and homepage aggregate"),
        (name = "Categories", description = "Homepage categories"),
        (name = "Authentication", description = "Registration and login"),
        (name = "Users", description = "User profiles"),
        (name = "Reservations", description = "Table bookings")
    )
)]
pub struct ApiDoc;
