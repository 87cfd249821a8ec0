//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::entities::{Image, NewImage, NewPlace, NewReview, Place, Report, Review, User};
use crate::error::DomainError;
use crate::value_objects::{Coordinates, Id, ReportType, SubjectKind, TrustScore};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<User>>;

    /// Create a new user; the store assigns the id
    async fn create(&self) -> RepoResult<User>;

    /// Delete a user.
    ///
    /// Their places, reviews, images, and reports survive with the
    /// owner/author/reporter reference nulled out. Deleting an absent user
    /// is a no-op.
    async fn delete(&self, id: Id) -> RepoResult<()>;
}

// ============================================================================
// Place Repository
// ============================================================================

/// Filter options for place listings.
///
/// All criteria are optional and combine with AND. The proximity criterion
/// is a plain coordinate-range box, not a distance computation.
#[derive(Debug, Clone, Default)]
pub struct PlaceFilter {
    pub category: Option<String>,
    pub application: Option<String>,
    pub min_trust: Option<Decimal>,
    pub near: Option<(Coordinates, Decimal)>,
}

impl PlaceFilter {
    /// Filter by category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by source application
    pub fn application(mut self, application: impl Into<String>) -> Self {
        self.application = Some(application.into());
        self
    }

    /// Keep only places with at least this trust score
    pub fn min_trust(mut self, min_trust: Decimal) -> Self {
        self.min_trust = Some(min_trust);
        self
    }

    /// Keep only places within `radius` degrees of `center`
    pub fn near(mut self, center: Coordinates, radius: Decimal) -> Self {
        self.near = Some((center, radius));
        self
    }
}

#[async_trait]
pub trait PlaceRepository: Send + Sync {
    /// Find place by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Place>>;

    /// List places matching the filter
    async fn find_filtered(&self, filter: &PlaceFilter) -> RepoResult<Vec<Place>>;

    /// List places registered by a user
    async fn find_by_owner(&self, owner_id: Id) -> RepoResult<Vec<Place>>;

    /// Create a new place; the store assigns id, base trust score, and
    /// creation time
    async fn create(&self, place: &NewPlace) -> RepoResult<Place>;

    /// Delete a place together with its reviews, images, and reports
    async fn delete(&self, id: Id) -> RepoResult<()>;
}

// ============================================================================
// Review Repository
// ============================================================================

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Find review by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Review>>;

    /// List reviews for a place, optionally requiring a minimum trust score
    async fn find_by_place(&self, place_id: Id, min_trust: Option<Decimal>)
        -> RepoResult<Vec<Review>>;

    /// List reviews written by a user
    async fn find_by_author(&self, author_id: Id) -> RepoResult<Vec<Review>>;

    /// Create a new review
    async fn create(&self, review: &NewReview) -> RepoResult<Review>;

    /// Delete a review together with its reports
    async fn delete(&self, id: Id) -> RepoResult<()>;
}

// ============================================================================
// Image Repository
// ============================================================================

#[async_trait]
pub trait ImageRepository: Send + Sync {
    /// Find image by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Image>>;

    /// List images for a place, optionally requiring a minimum trust score
    async fn find_by_place(&self, place_id: Id, min_trust: Option<Decimal>)
        -> RepoResult<Vec<Image>>;

    /// List images uploaded by a user
    async fn find_by_author(&self, author_id: Id) -> RepoResult<Vec<Image>>;

    /// Create a new image
    async fn create(&self, image: &NewImage) -> RepoResult<Image>;

    /// Delete an image together with its reports
    async fn delete(&self, id: Id) -> RepoResult<()>;
}

// ============================================================================
// Report Repository
// ============================================================================

/// One capability for reports against all subject kinds.
///
/// Reports on places, reviews, and images are stored separately but obey the
/// same rules, so every method takes the [`SubjectKind`] instead of there
/// being three near-identical traits.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Find a report by ID within the given kind's reports
    async fn find_by_id(&self, kind: SubjectKind, id: Id) -> RepoResult<Option<Report>>;

    /// List all reports against a subject
    async fn find_by_subject(&self, kind: SubjectKind, subject_id: Id)
        -> RepoResult<Vec<Report>>;

    /// List all reports of this kind filed by a user
    async fn find_by_reporter(&self, kind: SubjectKind, reporter_id: Id)
        -> RepoResult<Vec<Report>>;

    /// File or replace a report and refresh the subject's trust score.
    ///
    /// A reporter holds at most one report per subject: re-submitting
    /// replaces the verdict and timestamp rather than adding a row. The
    /// report write and the score update happen in one transaction, with the
    /// subject row locked so concurrent submissions serialize; the returned
    /// score is the one actually stored. Fails with the subject's not-found
    /// error if the subject does not exist, and with `UserNotFound` if the
    /// reporter does not.
    async fn submit(
        &self,
        kind: SubjectKind,
        reporter_id: Id,
        subject_id: Id,
        report_type: ReportType,
    ) -> RepoResult<(Report, TrustScore)>;

    /// Re-derive a subject's trust score from its live reports.
    ///
    /// Returns the stored score, or `None` without writing anything when the
    /// subject does not exist. Callers that need a missing subject to be an
    /// error must check for `None`; the quiet path is for maintenance sweeps
    /// over ids that may have been deleted concurrently.
    async fn recalculate(&self, kind: SubjectKind, subject_id: Id)
        -> RepoResult<Option<TrustScore>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_place_filter_builder() {
        let center = Coordinates::new(dec!(60.0), dec!(25.0)).unwrap();
        let filter = PlaceFilter::default()
            .category("cafe")
            .min_trust(dec!(3.0))
            .near(center, dec!(0.5));

        assert_eq!(filter.category.as_deref(), Some("cafe"));
        assert!(filter.application.is_none());
        assert_eq!(filter.min_trust, Some(dec!(3.0)));
        assert_eq!(filter.near, Some((center, dec!(0.5))));
    }

    #[test]
    fn test_place_filter_default_matches_everything() {
        let filter = PlaceFilter::default();
        assert!(filter.category.is_none());
        assert!(filter.application.is_none());
        assert!(filter.min_trust.is_none());
        assert!(filter.near.is_none());
    }
}
