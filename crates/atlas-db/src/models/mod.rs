//! Database models - SQLx-compatible structs for PostgreSQL tables

mod image;
mod place;
mod report;
mod review;
mod user;

pub use image::ImageModel;
pub use place::PlaceModel;
pub use report::{ReportModel, ReportTypeModel};
pub use review::ReviewModel;
pub use user::UserModel;
