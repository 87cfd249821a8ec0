//! Report entity <-> model mapper
//!
//! Reports need the subject kind alongside the row, since the row itself only
//! carries the aliased subject id.

use atlas_core::entities::Report;
use atlas_core::value_objects::{Id, SubjectKind};

use crate::models::ReportModel;

/// Convert a ReportModel plus its subject kind into a Report entity
pub fn report_entity(kind: SubjectKind, model: ReportModel) -> Report {
    Report {
        id: Id::new(model.id),
        kind,
        reporter_id: model.user_id.map(Id::new),
        subject_id: Id::new(model.subject_id),
        report_type: model.report_type.into(),
        reported_at: model.reported_at,
    }
}
