//! PostgreSQL implementation of ImageRepository

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::instrument;

use atlas_core::entities::{Image, NewImage};
use atlas_core::traits::{ImageRepository, RepoResult};
use atlas_core::value_objects::Id;

use crate::models::ImageModel;

use super::error::{map_db_error, map_fk_violation, place_not_found, user_not_found};

/// PostgreSQL implementation of ImageRepository
#[derive(Clone)]
pub struct PgImageRepository {
    pool: PgPool,
}

impl PgImageRepository {
    /// Create a new PgImageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ImageRepository for PgImageRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Image>> {
        let result = sqlx::query_as::<_, ImageModel>(
            r#"
            SELECT id, user_id, place_id, image_path, description, trust_score, created_at
            FROM images
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Image::from))
    }

    #[instrument(skip(self))]
    async fn find_by_place(
        &self,
        place_id: Id,
        min_trust: Option<Decimal>,
    ) -> RepoResult<Vec<Image>> {
        let results = match min_trust {
            Some(min_trust) => {
                sqlx::query_as::<_, ImageModel>(
                    r#"
                    SELECT id, user_id, place_id, image_path, description, trust_score, created_at
                    FROM images
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
                sqlx::query_as::<_, ImageModel>(
                    r#"
                    SELECT id, user_id, place_id, image_path, description, trust_score, created_at
                    FROM images
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

        Ok(results.into_iter().map(Image::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_author(&self, author_id: Id) -> RepoResult<Vec<Image>> {
        let results = sqlx::query_as::<_, ImageModel>(
            r#"
            SELECT id, user_id, place_id, image_path, description, trust_score, created_at
            FROM images
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(author_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Image::from).collect())
    }

    #[instrument(skip(self, image), fields(place_id = %image.place_id))]
    async fn create(&self, image: &NewImage) -> RepoResult<Image> {
        let model = sqlx::query_as::<_, ImageModel>(
            r#"
            INSERT INTO images (user_id, place_id, image_path, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, place_id, image_path, description, trust_score, created_at
            "#,
        )
        .bind(image.author_id.into_inner())
        .bind(image.place_id.into_inner())
        .bind(image.path.as_str())
        .bind(image.description.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_fk_violation(e, |constraint| {
                if constraint.contains("user_id") {
                    user_not_found(image.author_id)
                } else {
                    place_not_found(image.place_id)
                }
            })
        })?;

        Ok(Image::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        // Image reports go with it via ON DELETE CASCADE
        sqlx::query(
            r#"
            DELETE FROM images WHERE id = $1
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
        assert_send_sync::<PgImageRepository>();
    }
}
