//! PostgreSQL implementation of PlaceRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use atlas_core::entities::{NewPlace, Place};
use atlas_core::traits::{PlaceFilter, PlaceRepository, RepoResult};
use atlas_core::value_objects::{BoundingBox, Id};

use crate::models::PlaceModel;

use super::error::{map_db_error, map_fk_violation, user_not_found};

/// PostgreSQL implementation of PlaceRepository
#[derive(Clone)]
pub struct PgPlaceRepository {
    pool: PgPool,
}

impl PgPlaceRepository {
    /// Create a new PgPlaceRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlaceRepository for PgPlaceRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Place>> {
        let result = sqlx::query_as::<_, PlaceModel>(
            r#"
            SELECT id, user_id, name, description, category, address, postal_code, city,
                   latitude, longitude, application, trust_score, created_at
            FROM places
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Place::from))
    }

    #[instrument(skip(self))]
    async fn find_filtered(&self, filter: &PlaceFilter) -> RepoResult<Vec<Place>> {
        // The filter criteria are independent, so the WHERE clause is
        // assembled from static fragments with numbered placeholders and the
        // values bound in the same order below.
        let mut sql = String::from(
            "SELECT id, user_id, name, description, category, address, postal_code, city, \
             latitude, longitude, application, trust_score, created_at \
             FROM places WHERE 1=1",
        );

        let mut next_param = 1;
        if filter.category.is_some() {
            sql.push_str(&format!(" AND category = ${next_param}"));
            next_param += 1;
        }
        if filter.application.is_some() {
            sql.push_str(&format!(" AND application = ${next_param}"));
            next_param += 1;
        }
        if filter.min_trust.is_some() {
            sql.push_str(&format!(" AND trust_score >= ${next_param}"));
            next_param += 1;
        }
        if filter.near.is_some() {
            sql.push_str(&format!(
                " AND latitude BETWEEN ${} AND ${} AND longitude BETWEEN ${} AND ${}",
                next_param,
                next_param + 1,
                next_param + 2,
                next_param + 3
            ));
        }
        sql.push_str(" ORDER BY id");

        let mut query = sqlx::query_as::<_, PlaceModel>(&sql);
        if let Some(category) = &filter.category {
            query = query.bind(category.as_str());
        }
        if let Some(application) = &filter.application {
            query = query.bind(application.as_str());
        }
        if let Some(min_trust) = filter.min_trust {
            query = query.bind(min_trust);
        }
        if let Some((center, radius)) = filter.near {
            let bbox = BoundingBox::around(center, radius);
            query = query
                .bind(bbox.latitude_min)
                .bind(bbox.latitude_max)
                .bind(bbox.longitude_min)
                .bind(bbox.longitude_max);
        }

        let results = query
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Place::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_owner(&self, owner_id: Id) -> RepoResult<Vec<Place>> {
        let results = sqlx::query_as::<_, PlaceModel>(
            r#"
            SELECT id, user_id, name, description, category, address, postal_code, city,
                   latitude, longitude, application, trust_score, created_at
            FROM places
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(owner_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Place::from).collect())
    }

    #[instrument(skip(self, place), fields(name = %place.name))]
    async fn create(&self, place: &NewPlace) -> RepoResult<Place> {
        let model = sqlx::query_as::<_, PlaceModel>(
            r#"
            INSERT INTO places (user_id, name, description, category, address, postal_code,
                                city, latitude, longitude, application)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, user_id, name, description, category, address, postal_code, city,
                      latitude, longitude, application, trust_score, created_at
            "#,
        )
        .bind(place.owner_id.into_inner())
        .bind(place.name.as_str())
        .bind(place.description.as_deref())
        .bind(place.category.as_deref())
        .bind(place.address.as_deref())
        .bind(place.postal_code.as_deref())
        .bind(place.city.as_deref())
        .bind(place.coordinates.latitude)
        .bind(place.coordinates.longitude)
        .bind(place.application.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_fk_violation(e, |_| user_not_found(place.owner_id)))?;

        Ok(Place::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        // Reviews, images, and place reports go with it via ON DELETE CASCADE
        sqlx::query(
            r#"
            DELETE FROM places WHERE id = $1
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
        assert_send_sync::<PgPlaceRepository>();
    }
}
