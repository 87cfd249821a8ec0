//! Place entity - a point of interest in the directory

use chrono::{DateTime, Utc};

use crate::value_objects::{Coordinates, Id, TrustScore};

/// Place entity
///
/// `owner_id` is the user who registered the place; it becomes `None` when
/// that user is deleted. The trust score is derived from community reports
/// and is never set directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    pub id: Id,
    pub owner_id: Option<Id>,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub coordinates: Coordinates,
    pub application: Option<String>,
    pub trust_score: TrustScore,
    pub created_at: DateTime<Utc>,
}

impl Place {
    /// Check whether the place is owned by the given user
    #[inline]
    pub fn is_owned_by(&self, user_id: Id) -> bool {
        self.owner_id == Some(user_id)
    }
}

/// Insertion payload for a new place.
///
/// The id, trust score, and creation timestamp are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlace {
    pub owner_id: Id,
    pub name: String,
    pub coordinates: Coordinates,
    pub description: Option<String>,
    pub category: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub application: Option<String>,
}

impl NewPlace {
    /// Create a payload with the required fields; the rest default to None
    pub fn new(owner_id: Id, name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            owner_id,
            name: name.into(),
            coordinates,
            description: None,
            category: None,
            address: None,
            postal_code: None,
            city: None,
            application: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn helsinki() -> Coordinates {
        Coordinates::new(dec!(60.1699), dec!(24.9384)).unwrap()
    }

    #[test]
    fn test_new_place_defaults() {
        let place = NewPlace::new(Id::new(1), "Cafe A", helsinki());
        assert_eq!(place.name, "Cafe A");
        assert_eq!(place.owner_id, Id::new(1));
        assert!(place.category.is_none());
        assert!(place.application.is_none());
    }

    #[test]
    fn test_is_owned_by() {
        let place = Place {
            id: Id::new(10),
            owner_id: Some(Id::new(1)),
            name: "Cafe A".to_string(),
            description: None,
            category: None,
            address: None,
            postal_code: None,
            city: None,
            coordinates: helsinki(),
            application: None,
            trust_score: TrustScore::default(),
            created_at: Utc::now(),
        };
        assert!(place.is_owned_by(Id::new(1)));
        assert!(!place.is_owned_by(Id::new(2)));

        let orphaned = Place {
            owner_id: None,
            ..place
        };
        assert!(!orphaned.is_owned_by(Id::new(1)));
    }
}
