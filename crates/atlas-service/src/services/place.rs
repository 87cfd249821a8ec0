//! Place service
//!
//! Handles registration and lookup of places in the directory.

use atlas_core::entities::{NewPlace, Place};
use atlas_core::traits::PlaceFilter;
use atlas_core::value_objects::Id;
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::validate::{require_max_chars, require_non_empty, require_optional_max_chars};

const NAME_MAX: usize = 255;
const DESCRIPTION_MAX: usize = 512;
const CATEGORY_MAX: usize = 64;
const ADDRESS_MAX: usize = 255;
const POSTAL_CODE_MAX: usize = 32;
const CITY_MAX: usize = 64;
const APPLICATION_MAX: usize = 64;

/// Place service
pub struct PlaceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PlaceService<'a> {
    /// Create a new PlaceService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new place.
    ///
    /// The coordinates were range-checked when the payload was built; this
    /// validates the text fields against the stored column widths.
    #[instrument(skip(self, place), fields(name = %place.name))]
    pub async fn register_place(&self, place: NewPlace) -> ServiceResult<Place> {
        validate_place(&place)?;

        let created = self.ctx.place_repo().create(&place).await?;
        info!(place_id = %created.id, "Place registered");

        Ok(created)
    }

    /// Get place by ID
    #[instrument(skip(self))]
    pub async fn get_place(&self, place_id: Id) -> ServiceResult<Place> {
        self.ctx
            .place_repo()
            .find_by_id(place_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Place", place_id.to_string()))
    }

    /// List places matching the filter
    #[instrument(skip(self))]
    pub async fn list_places(&self, filter: &PlaceFilter) -> ServiceResult<Vec<Place>> {
        Ok(self.ctx.place_repo().find_filtered(filter).await?)
    }

    /// List places registered by a user
    #[instrument(skip(self))]
    pub async fn list_by_owner(&self, owner_id: Id) -> ServiceResult<Vec<Place>> {
        Ok(self.ctx.place_repo().find_by_owner(owner_id).await?)
    }

    /// Delete a place together with its reviews, images, and reports
    #[instrument(skip(self))]
    pub async fn delete_place(&self, place_id: Id) -> ServiceResult<()> {
        // Verify place exists
        let _place = self
            .ctx
            .place_repo()
            .find_by_id(place_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Place", place_id.to_string()))?;

        self.ctx.place_repo().delete(place_id).await?;
        info!(place_id = %place_id, "Place deleted");

        Ok(())
    }
}

fn validate_place(place: &NewPlace) -> ServiceResult<()> {
    require_non_empty("name", &place.name)?;
    require_max_chars("name", &place.name, NAME_MAX)?;
    require_optional_max_chars("description", place.description.as_deref(), DESCRIPTION_MAX)?;
    require_optional_max_chars("category", place.category.as_deref(), CATEGORY_MAX)?;
    require_optional_max_chars("address", place.address.as_deref(), ADDRESS_MAX)?;
    require_optional_max_chars("postal_code", place.postal_code.as_deref(), POSTAL_CODE_MAX)?;
    require_optional_max_chars("city", place.city.as_deref(), CITY_MAX)?;
    require_optional_max_chars("application", place.application.as_deref(), APPLICATION_MAX)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_core::value_objects::Coordinates;
    use rust_decimal_macros::dec;

    fn helsinki() -> Coordinates {
        Coordinates::new(dec!(60.1699), dec!(24.9384)).unwrap()
    }

    #[test]
    fn test_validate_accepts_minimal_place() {
        let place = NewPlace::new(Id::new(1), "Cafe A", helsinki());
        assert!(validate_place(&place).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let place = NewPlace::new(Id::new(1), "  ", helsinki());
        let err = validate_place(&place).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_validate_rejects_overlong_fields() {
        let mut place = NewPlace::new(Id::new(1), "N".repeat(256), helsinki());
        assert!(validate_place(&place).is_err());

        place.name = "Cafe A".to_string();
        place.postal_code = Some("9".repeat(33));
        assert!(validate_place(&place).is_err());

        place.postal_code = Some("00100".to_string());
        assert!(validate_place(&place).is_ok());
    }
}
