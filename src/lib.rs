//! Restaurant Reservations API
//!
//! REST backend for browsing restaurants, reading and writing opinions,
//! managing accounts and booking tables, stored in MySQL.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core entities and request payloads
//! - **services**: Application use cases
//! - **infra**: Database, migrations and repositories
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! reservations-api serve --port 8080
//!
//! # Run migrations
//! reservations-api migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{create_app, create_router, AppState};
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use infra::Database;
