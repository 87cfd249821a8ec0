//! User entity <-> model mapper

use atlas_core::entities::User;
use atlas_core::value_objects::Id;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Id::new(model.id),
            created_at: model.created_at,
        }
    }
}
