//! Moderation service
//!
//! Community reporting against places, reviews, and images, and the trust
//! scores derived from those reports. One service covers all three subject
//! kinds; callers pick the kind per call.

use atlas_core::entities::Report;
use atlas_core::value_objects::{Id, ReportType, SubjectKind, TrustScore};
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Moderation service
pub struct ModerationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ModerationService<'a> {
    /// Create a new ModerationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// File a report against a subject and get the refreshed trust score.
    ///
    /// A repeat submission by the same reporter replaces their earlier
    /// verdict. Reporting a subject that does not exist is an error.
    #[instrument(skip(self))]
    pub async fn submit_report(
        &self,
        kind: SubjectKind,
        reporter_id: Id,
        subject_id: Id,
        report_type: ReportType,
    ) -> ServiceResult<(Report, TrustScore)> {
        let (report, score) = self
            .ctx
            .report_repo()
            .submit(kind, reporter_id, subject_id, report_type)
            .await?;

        info!(
            kind = %kind,
            subject_id = %subject_id,
            report_type = %report_type,
            score = %score,
            "Report submitted"
        );

        Ok((report, score))
    }

    /// Re-derive a subject's trust score from its live reports.
    ///
    /// Returns `None` when the subject no longer exists; useful for sweeps
    /// over ids that may be deleted concurrently.
    #[instrument(skip(self))]
    pub async fn recalculate(
        &self,
        kind: SubjectKind,
        subject_id: Id,
    ) -> ServiceResult<Option<TrustScore>> {
        let score = self.ctx.report_repo().recalculate(kind, subject_id).await?;

        if let Some(score) = score {
            info!(kind = %kind, subject_id = %subject_id, score = %score, "Trust score recalculated");
        }

        Ok(score)
    }

    /// Get a report by ID
    #[instrument(skip(self))]
    pub async fn get_report(&self, kind: SubjectKind, report_id: Id) -> ServiceResult<Report> {
        self.ctx
            .report_repo()
            .find_by_id(kind, report_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Report", report_id.to_string()))
    }

    /// List all reports filed against a subject
    #[instrument(skip(self))]
    pub async fn reports_for_subject(
        &self,
        kind: SubjectKind,
        subject_id: Id,
    ) -> ServiceResult<Vec<Report>> {
        Ok(self.ctx.report_repo().find_by_subject(kind, subject_id).await?)
    }

    /// List all reports of this kind filed by a user
    #[instrument(skip(self))]
    pub async fn reports_by_user(
        &self,
        kind: SubjectKind,
        reporter_id: Id,
    ) -> ServiceResult<Vec<Report>> {
        Ok(self.ctx.report_repo().find_by_reporter(kind, reporter_id).await?)
    }
}
