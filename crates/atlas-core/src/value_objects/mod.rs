//! Value objects - immutable types that represent domain concepts

mod geo;
mod id;
mod report;
mod trust;

pub use geo::{BoundingBox, Coordinates, InvalidCoordinates};
pub use id::{Id, IdParseError};
pub use report::{ReportType, SubjectKind, UnknownReportType};
pub use trust::TrustScore;
