//! TrustScore - community-derived quality score for a subject
//!
//! Every reportable subject carries a trust score that is never edited
//! directly: it is always re-derived from the full set of live reports as
//! `clamp(BASE + sum(weights), MIN, MAX)`. Decimal arithmetic keeps the
//! derivation exact (4.0 - 0.8 is 3.2, not 3.1999...).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::ReportType;

/// Derived trust score, always within `[MIN, MAX]` when produced by
/// [`TrustScore::from_reports`]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TrustScore(Decimal);

impl TrustScore {
    /// Lower clamp bound
    pub const MIN: Decimal = dec!(0.0);
    /// Neutral starting score for a subject with no reports
    pub const BASE: Decimal = dec!(4.0);
    /// Upper clamp bound
    pub const MAX: Decimal = dec!(5.0);

    /// Wrap a raw score value (e.g. one read back from the store)
    #[inline]
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Derive the score from the full set of live reports on a subject.
    ///
    /// The derivation is a pure function of the report type multiset:
    /// order does not matter, and recomputing without a change in the
    /// reports yields the same score.
    pub fn from_reports<I>(reports: I) -> Self
    where
        I: IntoIterator<Item = ReportType>,
    {
        let raw = reports
            .into_iter()
            .fold(Self::BASE, |acc, report| acc + report.weight());
        Self(raw.clamp(Self::MIN, Self::MAX))
    }

    /// Get the inner decimal value
    #[inline]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl Default for TrustScore {
    /// A subject with no reports sits at the neutral base score
    fn default() -> Self {
        Self(Self::BASE)
    }
}

impl fmt::Display for TrustScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Decimal> for TrustScore {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<TrustScore> for Decimal {
    fn from(score: TrustScore) -> Self {
        score.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ReportType::{Appropriate, Inappropriate, Incorrect};

    #[test]
    fn test_no_reports_is_base() {
        assert_eq!(TrustScore::from_reports([]), TrustScore::default());
        assert_eq!(TrustScore::default().value(), dec!(4.0));
    }

    #[test]
    fn test_single_inappropriate() {
        let score = TrustScore::from_reports([Inappropriate]);
        assert_eq!(score.value(), dec!(3.2));
    }

    #[test]
    fn test_inappropriate_plus_appropriate() {
        let score = TrustScore::from_reports([Inappropriate, Appropriate]);
        assert_eq!(score.value(), dec!(3.6));
    }

    #[test]
    fn test_incorrect_and_appropriate_cancel() {
        let score = TrustScore::from_reports([Incorrect, Appropriate]);
        assert_eq!(score.value(), dec!(4.0));
    }

    #[test]
    fn test_clamped_to_min_exactly() {
        // 10 * -0.8 drives the raw sum to -4.0; the stored score is
        // exactly 0.0, not a small negative number.
        let score = TrustScore::from_reports(vec![Inappropriate; 10]);
        assert_eq!(score.value(), dec!(0.0));
    }

    #[test]
    fn test_clamped_to_max_exactly() {
        let score = TrustScore::from_reports(vec![Appropriate; 3]);
        assert_eq!(score.value(), dec!(5.0));
    }

    #[test]
    fn test_order_independent() {
        let a = TrustScore::from_reports([Incorrect, Appropriate, Inappropriate]);
        let b = TrustScore::from_reports([Appropriate, Inappropriate, Incorrect]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let reports = [Incorrect, Incorrect, Appropriate];
        assert_eq!(
            TrustScore::from_reports(reports),
            TrustScore::from_reports(reports)
        );
    }

    #[test]
    fn test_exact_decimal_arithmetic() {
        // 4.0 - 0.4 - 0.4 must be exactly 3.2 (binary floats miss this)
        let score = TrustScore::from_reports([Incorrect, Incorrect]);
        assert_eq!(score.value(), dec!(3.2));
    }
}
