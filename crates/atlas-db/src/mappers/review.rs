//! Review entity <-> model mapper

use atlas_core::entities::Review;
use atlas_core::value_objects::{Id, TrustScore};

use crate::models::ReviewModel;

/// Convert ReviewModel to Review entity
impl From<ReviewModel> for Review {
    fn from(model: ReviewModel) -> Self {
        Review {
            id: Id::new(model.id),
            author_id: model.user_id.map(Id::new),
            place_id: Id::new(model.place_id),
            rating: model.rating,
            text: model.text,
            trust_score: TrustScore::new(model.trust_score),
            created_at: model.created_at,
        }
    }
}
