//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// User Roles
// =============================================================================

/// Role assigned to every self-registered user
pub const ROLE_CLIENT: &str = "cliente";

/// Role for users that manage a restaurant
pub const ROLE_RESTAURANT_OWNER: &str = "restaurante";

/// Administrator role
pub const ROLE_ADMIN: &str = "admin";

// =============================================================================
// Reservations
// =============================================================================

/// Status stored when a reservation is created without one
pub const RESERVATION_STATUS_PENDING: &str = "pendiente";

/// Status of a reservation accepted by the restaurant
pub const RESERVATION_STATUS_CONFIRMED: &str = "confirmada";

/// Status of a cancelled reservation
pub const RESERVATION_STATUS_CANCELLED: &str = "cancelada";

// =============================================================================
// Opinions
// =============================================================================

/// Number of opinions shown on the homepage
pub const HOMEPAGE_RECENT_OPINIONS: u64 = 6;

/// Number of opinions shown on a restaurant page
pub const RESTAURANT_TOP_OPINIONS: u64 = 3;

// =============================================================================
// Restaurants
// =============================================================================

/// Pattern an embedded Google Maps snippet or URL must match to be stored.
/// Accepts either the bare embed URL or an `<iframe>` whose `src` is one.
pub const MAP_EMBED_PATTERN: &str =
    r#"^(<iframe[^>]*\ssrc=")?https://www\.google\.com/maps/embed\?pb="#;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Origin the browser client is served from
pub const DEFAULT_CORS_ALLOWED_ORIGIN: &str = "http://localhost:3000";

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (for development)
pub const DEFAULT_DATABASE_URL: &str = "mysql://root:@localhost:3306/RestaurantesReservas";

/// Default size of the connection pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: u64 = 8;
