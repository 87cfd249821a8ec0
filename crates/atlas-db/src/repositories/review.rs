//! PostgreSQL implementation of ReviewRepository

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::instrument;

use atlas_core::entities::{NewReview, Review};
use atlas_core::traits::{RepoResult, ReviewRepository};
use atlas_core::value_objects::Id;

use crate::models::ReviewModel;

use super::error::{map_db_error, map_fk_violation, place_not_found, user_not_found};

/// PostgreSQL implementation of ReviewRepository
#[derive(Clone)]
pub struct PgReviewRepository {
    pool: PgPool,
}

impl PgReviewRepository {
    /// Create a new PgReviewRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Review>> {
        let result = sqlx::query_as::<_, ReviewModel>(
            r#"
            SELECT id, user_id, place_id, rating, text, trust_score, created_at
            FROM reviews
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Review::from))
    }

    #[instrument(skip(self))]
    async fn find_by_place(
        &self,
        place_id: Id,
        min_trust: Option<Decimal>,
    ) -> RepoResult<Vec<Review>> {
        let results = match min_trust {
            Some(min_trust) => {
                sqlx::query_as::<_, ReviewModel>(
                    r#"
                    SELECT id, user_id, place_id, rating, text, trust_score, created_at
                    FROM reviews
                    WHERE place_id = $1 AND trust_score >= $2
                    ORDER BY id
                    "#,
                )
                .bind(place_id.into_inner())
                .bind(min_trust)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, ReviewModel>(
                    r#"
                    SELECT id, user_id, place_id, rating, text, trust_score, created_at
                    FROM reviews
                    WHERE place_id = $1
                    ORDER BY id
                    "#,
                )
                .bind(place_id.into_inner())
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Review::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_author(&self, author_id: Id) -> RepoResult<Vec<Review>> {
        let results = sqlx::query_as::<_, ReviewModel>(
            r#"
            SELECT id, user_id, place_id, rating, text, trust_score, created_at
            FROM reviews
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(author_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Review::from).collect())
    }

    #[instrument(skip(self, review), fields(place_id = %review.place_id))]
    async fn create(&self, review: &NewReview) -> RepoResult<Review> {
        let model = sqlx::query_as::<_, ReviewModel>(
            r#"
            INSERT INTO reviews (user_id, place_id, rating, text)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, place_id, rating, text, trust_score, created_at
            "#,
        )
        .bind(review.author_id.into_inner())
        .bind(review.place_id.into_inner())
        .bind(review.rating)
        .bind(review.text.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_fk_violation(e, |constraint| {
                if constraint.contains("user_id") {
                    user_not_found(review.author_id)
                } else {
                    place_not_found(review.place_id)
                }
            })
        })?;

        Ok(Review::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        // Review reports go with it via ON DELETE CASCADE
        sqlx::query(
            r#"
            DELETE FROM reviews WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgReviewRepository>();
    }
}
