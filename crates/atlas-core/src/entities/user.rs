//! User entity - a registered contributor
//!
//! Users carry no profile data here; they exist so that places, reviews,
//! images, and reports can be attributed. Deleting a user never deletes
//! their contributions, it only detaches them (the store nulls the
//! references).

use chrono::{DateTime, Utc};

use crate::value_objects::Id;

/// User entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct User {
    pub id: Id,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a User from store-assigned fields
    pub fn new(id: Id, created_at: DateTime<Utc>) -> Self {
        Self { id, created_at }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let now = Utc::now();
        let user = User::new(Id::new(1), now);
        assert_eq!(user.id, Id::new(1));
        assert_eq!(user.created_at, now);
    }
}
