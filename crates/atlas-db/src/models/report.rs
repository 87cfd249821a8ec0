//! Report database model
//!
//! The three report tables share one row shape; queries alias the per-table
//! subject column (`place_id`, `review_id`, `image_id`) to `subject_id` so a
//! single model covers them.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use atlas_core::value_objects::ReportType;

/// Database model for reports_place / reports_review / reports_image rows
#[derive(Debug, Clone, FromRow)]
pub struct ReportModel {
    pub id: i64,
    pub user_id: Option<i64>,
    pub subject_id: i64,
    pub report_type: ReportTypeModel,
    pub reported_at: DateTime<Utc>,
}

/// SQLx mapping for the `report_type` PostgreSQL enum.
///
/// The database rejects any value outside this set, so invalid report types
/// never reach a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "report_type", rename_all = "UPPERCASE")]
pub enum ReportTypeModel {
    Incorrect,
    Inappropriate,
    Appropriate,
}

impl From<ReportType> for ReportTypeModel {
    fn from(rt: ReportType) -> Self {
        match rt {
            ReportType::Incorrect => Self::Incorrect,
            ReportType::Inappropriate => Self::Inappropriate,
            ReportType::Appropriate => Self::Appropriate,
        }
    }
}

impl From<ReportTypeModel> for ReportType {
    fn from(model: ReportTypeModel) -> Self {
        match model {
            ReportTypeModel::Incorrect => Self::Incorrect,
            ReportTypeModel::Inappropriate => Self::Inappropriate,
            ReportTypeModel::Appropriate => Self::Appropriate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_type_conversion_round_trip() {
        for rt in [
            ReportType::Incorrect,
            ReportType::Inappropriate,
            ReportType::Appropriate,
        ] {
            assert_eq!(ReportType::from(ReportTypeModel::from(rt)), rt);
        }
    }
}
