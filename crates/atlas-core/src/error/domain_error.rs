//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{Id, SubjectKind};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Id),

    #[error("Place not found: {0}")]
    PlaceNotFound(Id),

    #[error("Review not found: {0}")]
    ReviewNotFound(Id),

    #[error("Image not found: {0}")]
    ImageNotFound(Id),

    #[error("Report not found: {0}")]
    ReportNotFound(Id),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid rating: {0} (must be between 1 and 5)")]
    InvalidRating(i32),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Not-found error for a report subject of the given kind
    pub fn subject_not_found(kind: SubjectKind, id: Id) -> Self {
        match kind {
            SubjectKind::Place => Self::PlaceNotFound(id),
            SubjectKind::Review => Self::ReviewNotFound(id),
            SubjectKind::Image => Self::ImageNotFound(id),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::PlaceNotFound(_)
                | Self::ReviewNotFound(_)
                | Self::ImageNotFound(_)
                | Self::ReportNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::InvalidRating(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_not_found_maps_kind() {
        let err = DomainError::subject_not_found(SubjectKind::Review, Id::new(3));
        assert!(matches!(err, DomainError::ReviewNotFound(id) if id == Id::new(3)));

        let err = DomainError::subject_not_found(SubjectKind::Image, Id::new(4));
        assert!(matches!(err, DomainError::ImageNotFound(id) if id == Id::new(4)));
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::UserNotFound(Id::new(1)).is_not_found());
        assert!(DomainError::PlaceNotFound(Id::new(1)).is_not_found());
        assert!(!DomainError::DatabaseError("boom".to_string()).is_not_found());
    }

    #[test]
    fn test_is_validation() {
        assert!(DomainError::InvalidRating(9).is_validation());
        assert!(DomainError::ValidationError("bad".to_string()).is_validation());
        assert!(!DomainError::UserNotFound(Id::new(1)).is_validation());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::PlaceNotFound(Id::new(123));
        assert_eq!(err.to_string(), "Place not found: 123");

        let err = DomainError::InvalidRating(7);
        assert_eq!(
            err.to_string(),
            "Invalid rating: 7 (must be between 1 and 5)"
        );
    }
}
