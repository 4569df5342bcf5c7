//! Age bucketing

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse age bucket derived from `Age`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeGroup {
    Child,
    Teen,
    Adult,
    Senior,
}

impl AgeGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            AgeGroup::Child => "Child",
            AgeGroup::Teen => "Teen",
            AgeGroup::Adult => "Adult",
            AgeGroup::Senior => "Senior",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered, right-closed bucket edges: a value lands in `(lo, hi]`.
const AGE_BUCKETS: [(f64, f64, AgeGroup); 4] = [
    (0.0, 12.0, AgeGroup::Child),
    (12.0, 18.0, AgeGroup::Teen),
    (18.0, 60.0, AgeGroup::Adult),
    (60.0, 80.0, AgeGroup::Senior),
];

/// Bucket an age into its [`AgeGroup`].
///
/// Values outside every bucket (age exactly 0, above 80, or NaN) yield
/// `None` rather than an error; downstream treats that as a missing
/// categorical value.
///
/// # Example
///
/// ```
/// use predecir::features::{bucket_age, AgeGroup};
///
/// assert_eq!(bucket_age(12.0), Some(AgeGroup::Child)); // upper edge of (0,12]
/// assert_eq!(bucket_age(80.0), Some(AgeGroup::Senior));
/// assert_eq!(bucket_age(0.0), None);
/// assert_eq!(bucket_age(81.0), None);
/// ```
pub fn bucket_age(age: f64) -> Option<AgeGroup> {
    AGE_BUCKETS
        .iter()
        .find(|(lo, hi, _)| age > *lo && age <= *hi)
        .map(|(_, _, group)| *group)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_interiors() {
        assert_eq!(bucket_age(5.0), Some(AgeGroup::Child));
        assert_eq!(bucket_age(15.0), Some(AgeGroup::Teen));
        assert_eq!(bucket_age(22.0), Some(AgeGroup::Adult));
        assert_eq!(bucket_age(70.0), Some(AgeGroup::Senior));
    }

    #[test]
    fn test_right_closed_edges() {
        // Each upper edge belongs to the lower bucket.
        assert_eq!(bucket_age(12.0), Some(AgeGroup::Child));
        assert_eq!(bucket_age(18.0), Some(AgeGroup::Teen));
        assert_eq!(bucket_age(60.0), Some(AgeGroup::Adult));
        assert_eq!(bucket_age(80.0), Some(AgeGroup::Senior));
    }

    #[test]
    fn test_out_of_range_is_missing() {
        assert_eq!(bucket_age(0.0), None);
        assert_eq!(bucket_age(81.0), None);
        assert_eq!(bucket_age(-1.0), None);
        assert_eq!(bucket_age(f64::NAN), None);
    }

    #[test]
    fn test_just_above_lower_edge() {
        assert_eq!(bucket_age(0.001), Some(AgeGroup::Child));
        assert_eq!(bucket_age(12.001), Some(AgeGroup::Teen));
    }

    #[test]
    fn test_display() {
        assert_eq!(AgeGroup::Child.to_string(), "Child");
        assert_eq!(AgeGroup::Senior.to_string(), "Senior");
    }
}
