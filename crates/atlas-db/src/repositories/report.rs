//! PostgreSQL implementation of ReportRepository
//!
//! One implementation covers reports against places, reviews, and images:
//! the tables differ only in name and subject column, captured in
//! [`SubjectTables`]. The identifiers interpolated into SQL are static
//! strings from that table, never caller input.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;

use atlas_core::entities::Report;
use atlas_core::traits::{RepoResult, ReportRepository};
use atlas_core::value_objects::{Id, ReportType, SubjectKind, TrustScore};

use crate::mappers::report_entity;
use crate::models::{ReportModel, ReportTypeModel};

use super::error::{map_db_error, map_fk_violation, subject_not_found, user_not_found};

/// Table and column names for one subject kind
struct SubjectTables {
    /// Table holding the reports
    reports: &'static str,
    /// Table holding the subject rows
    subjects: &'static str,
    /// Column in the reports table referencing the subject
    subject_fk: &'static str,
}

const fn tables(kind: SubjectKind) -> SubjectTables {
    match kind {
        SubjectKind::Place => SubjectTables {
            reports: "reports_place",
            subjects: "places",
            subject_fk: "place_id",
        },
        SubjectKind::Review => SubjectTables {
            reports: "reports_review",
            subjects: "reviews",
            subject_fk: "review_id",
        },
        SubjectKind::Image => SubjectTables {
            reports: "reports_image",
            subjects: "images",
            subject_fk: "image_id",
        },
    }
}

/// PostgreSQL implementation of ReportRepository
#[derive(Clone)]
pub struct PgReportRepository {
    pool: PgPool,
}

impl PgReportRepository {
    /// Create a new PgReportRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lock the subject row for the rest of the transaction.
    ///
    /// Returns false when the subject does not exist. Concurrent submissions
    /// against the same subject queue up on this lock, so each one derives
    /// the score from a settled report set.
    async fn lock_subject(
        tx: &mut Transaction<'_, Postgres>,
        kind: SubjectKind,
        subject_id: Id,
    ) -> RepoResult<bool> {
        let t = tables(kind);
        let locked: Option<i64> =
            sqlx::query_scalar(&format!("SELECT id FROM {} WHERE id = $1 FOR UPDATE", t.subjects))
                .bind(subject_id.into_inner())
                .fetch_optional(&mut **tx)
                .await
                .map_err(map_db_error)?;

        Ok(locked.is_some())
    }

    /// Re-derive and store the subject's trust score from its live reports.
    ///
    /// Caller must hold the subject row lock.
    async fn store_recalculated(
        tx: &mut Transaction<'_, Postgres>,
        kind: SubjectKind,
        subject_id: Id,
    ) -> RepoResult<TrustScore> {
        let t = tables(kind);

        let types: Vec<ReportTypeModel> = sqlx::query_scalar(&format!(
            "SELECT report_type FROM {} WHERE {} = $1",
            t.reports, t.subject_fk
        ))
        .bind(subject_id.into_inner())
        .fetch_all(&mut **tx)
        .await
        .map_err(map_db_error)?;

        let score = TrustScore::from_reports(types.into_iter().map(ReportType::from));

        sqlx::query(&format!(
            "UPDATE {} SET trust_score = $1 WHERE id = $2",
            t.subjects
        ))
        .bind(score.value())
        .bind(subject_id.into_inner())
        .execute(&mut **tx)
        .await
        .map_err(map_db_error)?;

        Ok(score)
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, kind: SubjectKind, id: Id) -> RepoResult<Option<Report>> {
        let t = tables(kind);

        let result = sqlx::query_as::<_, ReportModel>(&format!(
            "SELECT id, user_id, {} AS subject_id, report_type, reported_at \
             FROM {} WHERE id = $1",
            t.subject_fk, t.reports
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(|model| report_entity(kind, model)))
    }

    #[instrument(skip(self))]
    async fn find_by_subject(
        &self,
        kind: SubjectKind,
        subject_id: Id,
    ) -> RepoResult<Vec<Report>> {
        let t = tables(kind);

        let results = sqlx::query_as::<_, ReportModel>(&format!(
            "SELECT id, user_id, {fk} AS subject_id, report_type, reported_at \
             FROM {} WHERE {fk} = $1 ORDER BY id",
            t.reports,
            fk = t.subject_fk
        ))
        .bind(subject_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results
            .into_iter()
            .map(|model| report_entity(kind, model))
            .collect())
    }

    #[instrument(skip(self))]
    async fn find_by_reporter(
        &self,
        kind: SubjectKind,
        reporter_id: Id,
    ) -> RepoResult<Vec<Report>> {
        let t = tables(kind);

        let results = sqlx::query_as::<_, ReportModel>(&format!(
            "SELECT id, user_id, {} AS subject_id, report_type, reported_at \
             FROM {} WHERE user_id = $1 ORDER BY id",
            t.subject_fk, t.reports
        ))
        .bind(reporter_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results
            .into_iter()
            .map(|model| report_entity(kind, model))
            .collect())
    }

    #[instrument(skip(self))]
    async fn submit(
        &self,
        kind: SubjectKind,
        reporter_id: Id,
        subject_id: Id,
        report_type: ReportType,
    ) -> RepoResult<(Report, TrustScore)> {
        let t = tables(kind);
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        if !Self::lock_subject(&mut tx, kind, subject_id).await? {
            return Err(subject_not_found(kind, subject_id));
        }

        // One live report per (reporter, subject): a resubmission replaces
        // the verdict and refreshes the timestamp instead of adding a row.
        let model = sqlx::query_as::<_, ReportModel>(&format!(
            "INSERT INTO {reports} (user_id, {fk}, report_type, reported_at) \
             VALUES ($1, $2, $3, NOW()) \
             ON CONFLICT (user_id, {fk}) \
             DO UPDATE SET report_type = EXCLUDED.report_type, reported_at = NOW() \
             RETURNING id, user_id, {fk} AS subject_id, report_type, reported_at",
            reports = t.reports,
            fk = t.subject_fk
        ))
        .bind(reporter_id.into_inner())
        .bind(subject_id.into_inner())
        .bind(ReportTypeModel::from(report_type))
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_fk_violation(e, |_| user_not_found(reporter_id)))?;

        let score = Self::store_recalculated(&mut tx, kind, subject_id).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok((report_entity(kind, model), score))
    }

    #[instrument(skip(self))]
    async fn recalculate(
        &self,
        kind: SubjectKind,
        subject_id: Id,
    ) -> RepoResult<Option<TrustScore>> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Unknown subject is a quiet no-op; the transaction is dropped
        // without having written anything.
        if !Self::lock_subject(&mut tx, kind, subject_id).await? {
            return Ok(None);
        }

        let score = Self::store_recalculated(&mut tx, kind, subject_id).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(Some(score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgReportRepository>();
    }

    #[test]
    fn test_tables_metadata() {
        let t = tables(SubjectKind::Review);
        assert_eq!(t.reports, "reports_review");
        assert_eq!(t.subjects, "reviews");
        assert_eq!(t.subject_fk, "review_id");
    }
}
