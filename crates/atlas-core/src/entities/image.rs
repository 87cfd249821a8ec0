//! Image entity - a photo attached to a place

use chrono::{DateTime, Utc};

use crate::value_objects::{Id, TrustScore};

/// Image entity
///
/// Only the storage path is kept here; serving the bytes is someone else's
/// job. Deleting the place deletes its images, deleting the uploader does
/// not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub id: Id,
    pub author_id: Option<Id>,
    pub place_id: Id,
    pub path: String,
    pub description: Option<String>,
    pub trust_score: TrustScore,
    pub created_at: DateTime<Utc>,
}

/// Insertion payload for a new image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewImage {
    pub author_id: Id,
    pub place_id: Id,
    pub path: String,
    pub description: Option<String>,
}

impl NewImage {
    /// Create a payload with the required fields
    pub fn new(author_id: Id, place_id: Id, path: impl Into<String>) -> Self {
        Self {
            author_id,
            place_id,
            path: path.into(),
            description: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_image_defaults() {
        let image = NewImage::new(Id::new(1), Id::new(10), "static/images/cafe.jpg");
        assert_eq!(image.path, "static/images/cafe.jpg");
        assert!(image.description.is_none());
    }
}
