//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::config::{ROLE_ADMIN, ROLE_CLIENT, ROLE_RESTAURANT_OWNER};

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum UserRole {
    #[serde(rename = "cliente")]
    Client,
    #[serde(rename = "restaurante")]
    RestaurantOwner,
    #[serde(rename = "admin")]
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Client => ROLE_CLIENT,
            UserRole::RestaurantOwner => ROLE_RESTAURANT_OWNER,
            UserRole::Admin => ROLE_ADMIN,
        }
    }
}

/// Unknown stored values degrade to the least privileged role.
impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        match s {
            ROLE_ADMIN => UserRole::Admin,
            ROLE_RESTAURANT_OWNER => UserRole::RestaurantOwner,
            _ => UserRole::Client,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User domain entity
#[derive(Debug, Clone, Serialize)]
pub struct User {
    #[serde(rename = "id_usuario")]
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[serde(rename = "telefono")]
    pub phone: Option<String>,
    #[serde(rename = "rol")]
    pub role: UserRole,
}

/// Registration payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct RegisterUser {
    /// Display name
    #[serde(rename = "nombre")]
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Ana García")]
    pub name: String,
    /// Email address, unique across users
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "ana@example.com")]
    pub email: String,
    /// Plain password (minimum 8 characters)
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,
    /// Contact phone
    #[serde(rename = "telefono", default)]
    #[schema(example = "600123456")]
    pub phone: Option<String>,
}

/// Login payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct LoginUser {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "ana@example.com")]
    pub email: String,
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// Profile update payload. Role and password are not editable here.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateUser {
    #[serde(rename = "nombre")]
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    #[schema(example = "Ana García")]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "ana@example.com")]
    pub email: String,
    #[serde(rename = "telefono", default)]
    #[schema(example = "600123456")]
    pub phone: Option<String>,
}

/// User profile (safe to return to client)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UserResponse {
    #[serde(rename = "id_usuario")]
    #[schema(example = 1)]
    pub id: i32,
    #[serde(rename = "nombre")]
    #[schema(example = "Ana García")]
    pub name: String,
    #[schema(example = "ana@example.com")]
    pub email: String,
    #[serde(rename = "telefono")]
    #[schema(example = "600123456")]
    pub phone: Option<String>,
    #[serde(rename = "rol")]
    pub role: UserRole,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            role: user.role,
        }
    }
}

/// Minimal projection handed back on login
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SessionUser {
    #[serde(rename = "id_usuario")]
    #[schema(example = 1)]
    pub id: i32,
    #[serde(rename = "nombre")]
    #[schema(example = "Ana García")]
    pub name: String,
    #[serde(rename = "rol")]
    pub role: UserRole,
}

impl From<User> for SessionUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            role: user.role,
        }
    }
}
