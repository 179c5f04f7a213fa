//! Storage for the salon booking backend
//!
//! A pooled [`DbClient`] over `sqlx::Any` (SQLite or PostgreSQL, chosen by
//! URL) plus the repositories for the three record types: bookings,
//! closed days and blocked slots.
//!
//! # Example
//!
//! ```rust,no_run
//! use salon_db::{init_schema, DbClient, RepositoryFactory, ScheduleRepositoryFactory};
//! use salon_db::repositories::ClosureRepository;
//!
//! async fn closed_days() -> Result<Vec<chrono::NaiveDate>, salon_db::DbError> {
//!     let client = DbClient::from_url("sqlite:data/salon.db").await?;
//!     init_schema(&client).await?;
//!     let repo = ScheduleRepositoryFactory::new().create_repository(client);
//!     repo.list_closures().await
//! }
//! ```

pub mod client;
pub mod error;
pub mod factory;
pub mod repositories;
pub mod repository;
pub mod schema;

pub use client::{DbBackend, DbClient, DbTransaction};
pub use error::DbError;
pub use factory::DbClientFactory;
pub use repository::RepositoryFactory;
pub use schema::init_schema;

pub use repositories::{
    BlockedSlotRepository, BookingRepository, ClosureRepository, ScheduleRepositoryFactory,
    SqlScheduleRepository,
};
