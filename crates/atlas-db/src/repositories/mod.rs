//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in atlas-core.
//! Each repository handles database operations for a specific domain entity;
//! reports against every subject kind share one implementation.

mod error;
mod image;
mod place;
mod report;
mod review;
mod user;

pub use image::PgImageRepository;
pub use place::PgPlaceRepository;
pub use report::PgReportRepository;
pub use review::PgReviewRepository;
pub use user::PgUserRepository;
