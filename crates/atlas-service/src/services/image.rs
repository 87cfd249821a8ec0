//! Image service
//!
//! Handles image attachment and lookup for places. Only the storage path is
//! tracked here; serving the bytes is someone else's job.

use atlas_core::entities::{Image, NewImage};
use atlas_core::value_objects::Id;
use rust_decimal::Decimal;
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::validate::{require_max_chars, require_non_empty, require_optional_max_chars};

const PATH_MAX: usize = 255;
const DESCRIPTION_MAX: usize = 512;

/// Image service
pub struct ImageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ImageService<'a> {
    /// Create a new ImageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Attach an image to a place
    #[instrument(skip(self, image), fields(place_id = %image.place_id))]
    pub async fn attach_image(&self, image: NewImage) -> ServiceResult<Image> {
        validate_image(&image)?;

        let created = self.ctx.image_repo().create(&image).await?;
        info!(image_id = %created.id, "Image attached");

        Ok(created)
    }

    /// Get image by ID
    #[instrument(skip(self))]
    pub async fn get_image(&self, image_id: Id) -> ServiceResult<Image> {
        self.ctx
            .image_repo()
            .find_by_id(image_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Image", image_id.to_string()))
    }

    /// List images for a place, optionally dropping those whose trust score
    /// has fallen below `min_trust`
    #[instrument(skip(self))]
    pub async fn list_for_place(
        &self,
        place_id: Id,
        min_trust: Option<Decimal>,
    ) -> ServiceResult<Vec<Image>> {
        Ok(self.ctx.image_repo().find_by_place(place_id, min_trust).await?)
    }

    /// List images uploaded by a user
    #[instrument(skip(self))]
    pub async fn list_by_author(&self, author_id: Id) -> ServiceResult<Vec<Image>> {
        Ok(self.ctx.image_repo().find_by_author(author_id).await?)
    }

    /// Delete an image together with its reports
    #[instrument(skip(self))]
    pub async fn delete_image(&self, image_id: Id) -> ServiceResult<()> {
        // Verify image exists
        let _image = self
            .ctx
            .image_repo()
            .find_by_id(image_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Image", image_id.to_string()))?;

        self.ctx.image_repo().delete(image_id).await?;
        info!(image_id = %image_id, "Image deleted");

        Ok(())
    }
}

fn validate_image(image: &NewImage) -> ServiceResult<()> {
    require_non_empty("path", &image.path)?;
    require_max_chars("path", &image.path, PATH_MAX)?;
    require_optional_max_chars("description", image.description.as_deref(), DESCRIPTION_MAX)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_image() {
        let image = NewImage::new(Id::new(1), Id::new(2), "static/images/cafe.jpg");
        assert!(validate_image(&image).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_path() {
        let image = NewImage::new(Id::new(1), Id::new(2), "");
        let err = validate_image(&image).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_validate_rejects_overlong_path() {
        let image = NewImage::new(Id::new(1), Id::new(2), "p".repeat(256));
        assert!(validate_image(&image).is_err());
    }
}
