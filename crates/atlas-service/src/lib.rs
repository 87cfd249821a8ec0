//! # atlas-service
//!
//! Application layer containing business logic and use cases.

pub mod services;

pub use services::{
    ImageService, ModerationService, PlaceService, ReviewService, ServiceContext,
    ServiceError, ServiceResult, UserService,
};
