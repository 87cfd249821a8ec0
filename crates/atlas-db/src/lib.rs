//! # atlas-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `atlas-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → Entity mappers
//! - Repository implementations, including the transactional report
//!   submission that keeps trust scores in step with their reports
//!
//! ## Usage
//!
//! ```rust,ignore
//! use atlas_db::pool::{create_pool, run_migrations, DatabaseConfig};
//! use atlas_db::repositories::PgPlaceRepository;
//! use atlas_core::traits::PlaceRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     run_migrations(&pool).await?;
//!     let place_repo = PgPlaceRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgImageRepository, PgPlaceRepository, PgReportRepository, PgReviewRepository,
    PgUserRepository,
};
