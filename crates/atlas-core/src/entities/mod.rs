//! Domain entities - core business objects

mod image;
mod place;
mod report;
mod review;
mod user;

pub use image::{Image, NewImage};
pub use place::{NewPlace, Place};
pub use report::Report;
pub use review::{NewReview, Review};
pub use user::User;
