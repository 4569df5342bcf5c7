//! Raw passenger record

use serde::{Deserialize, Serialize};

/// One traveler's raw attributes, as they arrive from a training file or a
/// prediction request.
///
/// `Age`, `Fare` and `Embarked` are legitimately absent in real data, so they
/// are `Option` rather than a sentinel value. Categorical fields stay as
/// strings: serving-time inputs are unpredictable relative to the training
/// vocabulary, and the pipeline's unknown-category policy needs to see the
/// raw value rather than a parse failure.
///
/// # Example
///
/// ```
/// use predecir::PassengerRecord;
///
/// let rec = PassengerRecord {
///     pclass: 3,
///     sex: "male".to_string(),
///     age: Some(22.0),
///     sibsp: 1,
///     parch: 0,
///     fare: Some(7.25),
///     embarked: Some("S".to_string()),
/// };
/// assert_eq!(rec.sibsp + rec.parch + 1, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassengerRecord {
    /// Ticket class (1, 2 or 3)
    pub pclass: u8,

    /// Sex ("male" / "female" in training data)
    pub sex: String,

    /// Age in years, if known
    pub age: Option<f64>,

    /// Siblings / spouses aboard
    pub sibsp: u32,

    /// Parents / children aboard
    pub parch: u32,

    /// Ticket fare, if known
    pub fare: Option<f64>,

    /// Port of embarkation ("C" / "Q" / "S" in training data), if known
    pub embarked: Option<String>,
}
