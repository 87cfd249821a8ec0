//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod context;
pub mod error;
pub mod image;
pub mod moderation;
pub mod place;
pub mod review;
pub mod user;

mod validate;

// Re-export all services for convenience
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use image::ImageService;
pub use moderation::ModerationService;
pub use place::PlaceService;
pub use review::ReviewService;
pub use user::UserService;
