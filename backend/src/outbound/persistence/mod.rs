//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the repository ports backed by PostgreSQL via
//! `diesel-async` and a shared `bb8` pool.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Typed errors**: Diesel failures are classified once
//!   (`diesel_error_mapping.rs`) and mapped onto each port's error enum.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use socialbuddy::outbound::persistence::{
//!     DbPool, DieselUserRepository, PoolConfig, run_pending_migrations,
//! };
//!
//! # async fn wire() -> Result<(), Box<dyn std::error::Error>> {
//! let url = "postgres://localhost/socialbuddy";
//! run_pending_migrations(url).await?;
//! let pool = DbPool::new(PoolConfig::new(url)).await?;
//! let users = Arc::new(DieselUserRepository::new(pool));
//! # let _ = users;
//! # Ok(())
//! # }
//! ```

mod diesel_comment_repository;
mod diesel_connection_repository;
mod diesel_error_mapping;
mod diesel_helpers;
mod diesel_post_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_comment_repository::DieselCommentRepository;
pub use diesel_connection_repository::DieselConnectionRepository;
pub use diesel_post_repository::DieselPostRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
