//! # atlas-core
//!
//! Domain layer containing entities, value objects, repository traits, and
//! domain errors. This crate has zero dependencies on infrastructure
//! (database, runtime, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Image, NewImage, NewPlace, NewReview, Place, Report, Review, User};
pub use error::DomainError;
pub use traits::{
    ImageRepository, PlaceFilter, PlaceRepository, RepoResult, ReportRepository,
    ReviewRepository, UserRepository,
};
pub use value_objects::{
    BoundingBox, Coordinates, Id, IdParseError, InvalidCoordinates, ReportType, SubjectKind,
    TrustScore, UnknownReportType,
};
