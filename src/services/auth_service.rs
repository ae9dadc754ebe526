//! Authentication service - Registration and credential checks.
//!
//! Password hashing and verification live in the domain `Password` value
//! object; this service only orchestrates lookups and inserts.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{LoginUser, Password, RegisterUser, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new client account
    async fn register(&self, input: RegisterUser) -> AppResult<User>;

    /// Check credentials and return the matching user
    async fn login(&self, input: LoginUser) -> AppResult<User>;
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> Authenticator<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn register(&self, input: RegisterUser) -> AppResult<User> {
        if self.uow.users().find_by_email(&input.email).await?.is_some() {
            return Err(AppError::duplicate("Email"));
        }

        let password_hash = Password::new(&input.password)?.into_string();
        let user = self
            .uow
            .users()
            .create(input.name, input.email, password_hash, input.phone)
            .await?;

        tracing::info!(user_id = user.id, "User registered");
        Ok(user)
    }

    async fn login(&self, input: LoginUser) -> AppResult<User> {
        let user = self.uow.users().find_by_email(&input.email).await?;

        // Unknown emails still pay for a hash verification.
        let stored = match &user {
            Some(user) => Password::from_hash(user.password_hash.clone()),
            None => Password::unmatchable(),
        };
        let password_valid = stored.verify(&input.password);

        match user {
            Some(user) if password_valid => Ok(user),
            _ => Err(AppError::InvalidCredentials),
        }
    }
}
