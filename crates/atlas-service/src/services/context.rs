//! Service context - dependency container for services
//!
//! Holds the connection pool and the repositories services work against.
//! There is deliberately no global instance: callers construct a context and
//! pass it to the services that need it.

use std::sync::Arc;

use atlas_core::traits::{
    ImageRepository, PlaceRepository, ReportRepository, ReviewRepository, UserRepository,
};
use atlas_db::{
    PgImageRepository, PgPlaceRepository, PgPool, PgReportRepository, PgReviewRepository,
    PgUserRepository,
};

/// Service context containing all dependencies
///
/// Cloning is cheap: the pool and the repositories are shared handles.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    place_repo: Arc<dyn PlaceRepository>,
    review_repo: Arc<dyn ReviewRepository>,
    image_repo: Arc<dyn ImageRepository>,
    report_repo: Arc<dyn ReportRepository>,
}

impl ServiceContext {
    /// Create a new service context with explicit repository implementations
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        place_repo: Arc<dyn PlaceRepository>,
        review_repo: Arc<dyn ReviewRepository>,
        image_repo: Arc<dyn ImageRepository>,
        report_repo: Arc<dyn ReportRepository>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            place_repo,
            review_repo,
            image_repo,
            report_repo,
        }
    }

    /// Create a context backed by the PostgreSQL repositories on this pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(
            pool.clone(),
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgPlaceRepository::new(pool.clone())),
            Arc::new(PgReviewRepository::new(pool.clone())),
            Arc::new(PgImageRepository::new(pool.clone())),
            Arc::new(PgReportRepository::new(pool)),
        )
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the place repository
    pub fn place_repo(&self) -> &dyn PlaceRepository {
        self.place_repo.as_ref()
    }

    /// Get the review repository
    pub fn review_repo(&self) -> &dyn ReviewRepository {
        self.review_repo.as_ref()
    }

    /// Get the image repository
    pub fn image_repo(&self) -> &dyn ImageRepository {
        self.image_repo.as_ref()
    }

    /// Get the report repository
    pub fn report_repo(&self) -> &dyn ReportRepository {
        self.report_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ServiceContext>();
    }
}
