//! Id - store-assigned 64-bit row identifier
//!
//! Identifiers are allocated by the persistence layer (`BIGSERIAL`), so a
//! fresh entity has no id until the store hands one back. `Id` only wraps the
//! value; it never generates one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned row identifier (64-bit)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Id(i64);

impl Id {
    /// Create an Id from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        s.parse::<i64>().map(Id).map_err(|_| IdParseError::InvalidFormat)
    }
}

/// Error when parsing an Id from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid id format")]
    InvalidFormat,
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Id {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<Id> for i64 {
    fn from(id: Id) -> Self {
        id.0
    }
}

impl std::str::FromStr for Id {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Id::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = Id::new(42);
        assert_eq!(id.into_inner(), 42);
    }

    #[test]
    fn test_id_parse() {
        let id = Id::parse("42").unwrap();
        assert_eq!(id.into_inner(), 42);

        assert!(Id::parse("invalid").is_err());
    }

    #[test]
    fn test_id_display() {
        let id = Id::new(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_id_serde_roundtrip() {
        let id = Id::new(42);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "42");

        let back: Id = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_ordering() {
        assert!(Id::new(1) < Id::new(2));
    }
}
