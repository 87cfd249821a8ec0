//! Geographic coordinates and the naive proximity box
//!
//! Proximity filtering is a plain coordinate-range comparison: a square box
//! of +/- radius degrees around a center point. No great-circle distance and
//! no spatial index; that is all the directory needs.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl Coordinates {
    pub const LATITUDE_MIN: Decimal = dec!(-90);
    pub const LATITUDE_MAX: Decimal = dec!(90);
    pub const LONGITUDE_MIN: Decimal = dec!(-180);
    pub const LONGITUDE_MAX: Decimal = dec!(180);

    /// Create coordinates, rejecting values outside the valid ranges
    pub fn new(latitude: Decimal, longitude: Decimal) -> Result<Self, InvalidCoordinates> {
        if latitude < Self::LATITUDE_MIN || latitude > Self::LATITUDE_MAX {
            return Err(InvalidCoordinates::Latitude(latitude));
        }
        if longitude < Self::LONGITUDE_MIN || longitude > Self::LONGITUDE_MAX {
            return Err(InvalidCoordinates::Longitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// Error for out-of-range coordinate values
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidCoordinates {
    #[error("latitude {0} outside [-90, 90]")]
    Latitude(Decimal),
    #[error("longitude {0} outside [-180, 180]")]
    Longitude(Decimal),
}

/// Inclusive coordinate-range box used for proximity filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub latitude_min: Decimal,
    pub latitude_max: Decimal,
    pub longitude_min: Decimal,
    pub longitude_max: Decimal,
}

impl BoundingBox {
    /// Square box of +/- `radius` degrees around `center`.
    ///
    /// The box is not clamped to the valid coordinate ranges; near the poles
    /// or the antimeridian it simply matches nothing on the far side.
    #[must_use]
    pub fn around(center: Coordinates, radius: Decimal) -> Self {
        Self {
            latitude_min: center.latitude - radius,
            latitude_max: center.latitude + radius,
            longitude_min: center.longitude - radius,
            longitude_max: center.longitude + radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_valid() {
        let c = Coordinates::new(dec!(60.1699), dec!(24.9384)).unwrap();
        assert_eq!(c.latitude, dec!(60.1699));
        assert_eq!(c.longitude, dec!(24.9384));
    }

    #[test]
    fn test_coordinates_rejects_bad_latitude() {
        assert_eq!(
            Coordinates::new(dec!(90.1), dec!(0)),
            Err(InvalidCoordinates::Latitude(dec!(90.1)))
        );
        assert_eq!(
            Coordinates::new(dec!(-91), dec!(0)),
            Err(InvalidCoordinates::Latitude(dec!(-91)))
        );
    }

    #[test]
    fn test_coordinates_rejects_bad_longitude() {
        assert_eq!(
            Coordinates::new(dec!(0), dec!(180.5)),
            Err(InvalidCoordinates::Longitude(dec!(180.5)))
        );
    }

    #[test]
    fn test_coordinates_boundary_values_ok() {
        assert!(Coordinates::new(dec!(90), dec!(180)).is_ok());
        assert!(Coordinates::new(dec!(-90), dec!(-180)).is_ok());
    }

    #[test]
    fn test_bounding_box_around() {
        let center = Coordinates::new(dec!(60.0), dec!(25.0)).unwrap();
        let bbox = BoundingBox::around(center, dec!(0.5));
        assert_eq!(bbox.latitude_min, dec!(59.5));
        assert_eq!(bbox.latitude_max, dec!(60.5));
        assert_eq!(bbox.longitude_min, dec!(24.5));
        assert_eq!(bbox.longitude_max, dec!(25.5));
    }
}
