//! Report vocabulary - verdict types and reportable subject kinds

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A reporter's verdict about a subject.
///
/// Each verdict carries a fixed signed weight that feeds the trust score
/// derivation. Note that `Appropriate` is a positive endorsement, not a
/// complaint; the reporting mechanism is used for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportType {
    /// Factually wrong content
    Incorrect,
    /// Offensive or abusive content
    Inappropriate,
    /// Endorsement that the content is fine
    Appropriate,
}

impl ReportType {
    /// Signed contribution of one report of this type to a trust score
    #[must_use]
    pub fn weight(self) -> Decimal {
        match self {
            Self::Incorrect => dec!(-0.4),
            Self::Inappropriate => dec!(-0.8),
            Self::Appropriate => dec!(0.4),
        }
    }

    /// Canonical uppercase name, as stored in the database enum
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Incorrect => "INCORRECT",
            Self::Inappropriate => "INAPPROPRIATE",
            Self::Appropriate => "APPROPRIATE",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReportType {
    type Err = UnknownReportType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INCORRECT" => Ok(Self::Incorrect),
            "INAPPROPRIATE" => Ok(Self::Inappropriate),
            "APPROPRIATE" => Ok(Self::Appropriate),
            _ => Err(UnknownReportType(s.to_string())),
        }
    }
}

/// Error when parsing a ReportType from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown report type: {0}")]
pub struct UnknownReportType(pub String);

/// The kind of entity a report targets.
///
/// Reports against places, reviews, and images live in separate tables but
/// share one submission/recalculation protocol, keyed by this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectKind {
    Place,
    Review,
    Image,
}

impl SubjectKind {
    /// Lowercase name, used in logs
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Place => "place",
            Self::Review => "review",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_weights() {
        assert_eq!(ReportType::Incorrect.weight(), dec!(-0.4));
        assert_eq!(ReportType::Inappropriate.weight(), dec!(-0.8));
        assert_eq!(ReportType::Appropriate.weight(), dec!(0.4));
    }

    #[test]
    fn test_report_type_round_trip() {
        for rt in [
            ReportType::Incorrect,
            ReportType::Inappropriate,
            ReportType::Appropriate,
        ] {
            assert_eq!(rt.as_str().parse::<ReportType>().unwrap(), rt);
        }
    }

    #[test]
    fn test_report_type_parse_rejects_unknown() {
        assert!("SPAM".parse::<ReportType>().is_err());
        assert!("incorrect".parse::<ReportType>().is_err());
    }

    #[test]
    fn test_subject_kind_display() {
        assert_eq!(SubjectKind::Place.to_string(), "place");
        assert_eq!(SubjectKind::Review.to_string(), "review");
        assert_eq!(SubjectKind::Image.to_string(), "image");
    }
}
