//! Place entity <-> model mapper

use atlas_core::entities::Place;
use atlas_core::value_objects::{Coordinates, Id, TrustScore};

use crate::models::PlaceModel;

/// Convert PlaceModel to Place entity
impl From<PlaceModel> for Place {
    fn from(model: PlaceModel) -> Self {
        Place {
            id: Id::new(model.id),
            owner_id: model.user_id.map(Id::new),
            name: model.name,
            description: model.description,
            category: model.category,
            address: model.address,
            postal_code: model.postal_code,
            city: model.city,
            // Stored coordinates were validated on the way in
            coordinates: Coordinates {
                latitude: model.latitude,
                longitude: model.longitude,
            },
            application: model.application,
            trust_score: TrustScore::new(model.trust_score),
            created_at: model.created_at,
        }
    }
}
