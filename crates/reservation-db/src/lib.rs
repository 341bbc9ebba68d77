//! # reservation-db
//!
//! Database layer implementing the reservation repository with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management and embedded migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - `PgReservationRepository`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use reservation_db::{create_pool, run_migrations, DatabaseConfig, PgReservationRepository};
//!
//! async fn example(app_config: &reservation_common::AppConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::from(&app_config.database)).await?;
//!     run_migrations(&pool).await?;
//!     let repo = PgReservationRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool, MIGRATOR};
pub use repositories::PgReservationRepository;
