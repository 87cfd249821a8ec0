//! Image entity <-> model mapper

use atlas_core::entities::Image;
use atlas_core::value_objects::{Id, TrustScore};

use crate::models::ImageModel;

/// Convert ImageModel to Image entity
impl From<ImageModel> for Image {
    fn from(model: ImageModel) -> Self {
        Image {
            id: Id::new(model.id),
            author_id: model.user_id.map(Id::new),
            place_id: Id::new(model.place_id),
            path: model.image_path,
            description: model.description,
            trust_score: TrustScore::new(model.trust_score),
            created_at: model.created_at,
        }
    }
}
