//! Review entity - a user's rating and comments for a place

use chrono::{DateTime, Utc};

use crate::value_objects::{Id, TrustScore};

/// Review entity
///
/// `author_id` becomes `None` when the author is deleted; the review itself
/// survives. Deleting the reviewed place deletes the review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: Id,
    pub author_id: Option<Id>,
    pub place_id: Id,
    pub rating: i32,
    pub text: Option<String>,
    pub trust_score: TrustScore,
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Lowest accepted rating
    pub const RATING_MIN: i32 = 1;
    /// Highest accepted rating
    pub const RATING_MAX: i32 = 5;

    /// Check whether a rating value is within the accepted range
    #[inline]
    pub fn is_valid_rating(rating: i32) -> bool {
        (Self::RATING_MIN..=Self::RATING_MAX).contains(&rating)
    }
}

/// Insertion payload for a new review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub author_id: Id,
    pub place_id: Id,
    pub rating: i32,
    pub text: Option<String>,
}

impl NewReview {
    /// Create a payload with the required fields
    pub fn new(author_id: Id, place_id: Id, rating: i32) -> Self {
        Self {
            author_id,
            place_id,
            rating,
            text: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(Review::is_valid_rating(1));
        assert!(Review::is_valid_rating(5));
        assert!(!Review::is_valid_rating(0));
        assert!(!Review::is_valid_rating(6));
        assert!(!Review::is_valid_rating(-3));
    }

    #[test]
    fn test_new_review_defaults() {
        let review = NewReview::new(Id::new(1), Id::new(10), 4);
        assert_eq!(review.rating, 4);
        assert!(review.text.is_none());
    }
}
