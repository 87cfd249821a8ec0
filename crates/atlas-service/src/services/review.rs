//! Review service
//!
//! Handles review submission and lookup for places.

use atlas_core::entities::{NewReview, Review};
use atlas_core::value_objects::Id;
use atlas_core::DomainError;
use rust_decimal::Decimal;
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::validate::require_optional_max_chars;

const TEXT_MAX: usize = 512;

/// Review service
pub struct ReviewService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReviewService<'a> {
    /// Create a new ReviewService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Submit a review for a place
    #[instrument(skip(self, review), fields(place_id = %review.place_id))]
    pub async fn create_review(&self, review: NewReview) -> ServiceResult<Review> {
        validate_review(&review)?;

        let created = self.ctx.review_repo().create(&review).await?;
        info!(review_id = %created.id, rating = created.rating, "Review created");

        Ok(created)
    }

    /// Get review by ID
    #[instrument(skip(self))]
    pub async fn get_review(&self, review_id: Id) -> ServiceResult<Review> {
        self.ctx
            .review_repo()
            .find_by_id(review_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Review", review_id.to_string()))
    }

    /// List reviews for a place, optionally dropping those whose trust score
    /// has fallen below `min_trust`
    #[instrument(skip(self))]
    pub async fn list_for_place(
        &self,
        place_id: Id,
        min_trust: Option<Decimal>,
    ) -> ServiceResult<Vec<Review>> {
        Ok(self.ctx.review_repo().find_by_place(place_id, min_trust).await?)
    }

    /// List reviews written by a user
    #[instrument(skip(self))]
    pub async fn list_by_author(&self, author_id: Id) -> ServiceResult<Vec<Review>> {
        Ok(self.ctx.review_repo().find_by_author(author_id).await?)
    }

    /// Delete a review together with its reports
    #[instrument(skip(self))]
    pub async fn delete_review(&self, review_id: Id) -> ServiceResult<()> {
        // Verify review exists
        let _review = self
            .ctx
            .review_repo()
            .find_by_id(review_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Review", review_id.to_string()))?;

        self.ctx.review_repo().delete(review_id).await?;
        info!(review_id = %review_id, "Review deleted");

        Ok(())
    }
}

fn validate_review(review: &NewReview) -> ServiceResult<()> {
    if !Review::is_valid_rating(review.rating) {
        return Err(DomainError::InvalidRating(review.rating).into());
    }
    require_optional_max_chars("text", review.text.as_deref(), TEXT_MAX)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_rating_range() {
        for rating in 1..=5 {
            let review = NewReview::new(Id::new(1), Id::new(2), rating);
            assert!(validate_review(&review).is_ok());
        }
    }

    #[test]
    fn test_validate_rejects_out_of_range_rating() {
        for rating in [0, 6, -1] {
            let review = NewReview::new(Id::new(1), Id::new(2), rating);
            let err = validate_review(&review).unwrap_err();
            assert!(err.is_validation());
        }
    }

    #[test]
    fn test_validate_rejects_overlong_text() {
        let mut review = NewReview::new(Id::new(1), Id::new(2), 4);
        review.text = Some("x".repeat(513));
        assert!(validate_review(&review).is_err());

        review.text = Some("x".repeat(512));
        assert!(validate_review(&review).is_ok());
    }
}
