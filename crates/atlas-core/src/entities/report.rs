//! Report entity - one user's standing verdict on a subject

use chrono::{DateTime, Utc};

use crate::value_objects::{Id, ReportType, SubjectKind};

/// Report entity
///
/// A user holds at most one live report per subject; re-reporting replaces
/// the verdict and refreshes `reported_at`. `reporter_id` becomes `None`
/// when the reporter is deleted, but the report keeps counting toward the
/// subject's trust score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub id: Id,
    pub kind: SubjectKind,
    pub reporter_id: Option<Id>,
    pub subject_id: Id,
    pub report_type: ReportType,
    pub reported_at: DateTime<Utc>,
}

impl Report {
    /// Check whether the report was filed by the given user
    #[inline]
    pub fn is_by(&self, user_id: Id) -> bool {
        self.reporter_id == Some(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_by() {
        let report = Report {
            id: Id::new(1),
            kind: SubjectKind::Place,
            reporter_id: Some(Id::new(7)),
            subject_id: Id::new(10),
            report_type: ReportType::Inappropriate,
            reported_at: Utc::now(),
        };
        assert!(report.is_by(Id::new(7)));
        assert!(!report.is_by(Id::new(8)));

        let anonymous = Report {
            reporter_id: None,
            ..report
        };
        assert!(!anonymous.is_by(Id::new(7)));
    }
}
