//! User service
//!
//! Handles user registration and removal. Users carry no profile data; they
//! exist to attribute places, reviews, images, and reports.

use atlas_core::entities::User;
use atlas_core::value_objects::Id;
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self))]
    pub async fn register(&self) -> ServiceResult<User> {
        let user = self.ctx.user_repo().create().await?;
        info!(user_id = %user.id, "User registered");

        Ok(user)
    }

    /// Get user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: Id) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))
    }

    /// Delete a user account.
    ///
    /// Their contributions stay behind with the authorship detached.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: Id) -> ServiceResult<()> {
        // Verify user exists
        let _user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        self.ctx.user_repo().delete(user_id).await?;
        info!(user_id = %user_id, "User account deleted");

        Ok(())
    }
}
