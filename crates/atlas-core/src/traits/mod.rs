//! Repository traits (ports) implemented by the persistence layer

mod repositories;

pub use repositories::{
    ImageRepository, PlaceFilter, PlaceRepository, RepoResult, ReportRepository,
    ReviewRepository, UserRepository,
};
