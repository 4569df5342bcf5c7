//! The batch feature transform

use super::buckets::{bucket_age, AgeGroup};
use super::stats::{median, mode};
use crate::PassengerRecord;
use serde::{Deserialize, Serialize};

/// A [`PassengerRecord`] plus derived features, imputed against its batch.
///
/// `alone` duplicates `is_alone`; the original feature set carried both
/// names and the trained vocabulary depends on the duplicate, so it stays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineeredRecord {
    pub pclass: u8,
    pub sex: String,
    /// Filled with the batch median; still `None` when the whole batch had
    /// no observed age (the pipeline's frozen imputer absorbs that).
    pub age: Option<f64>,
    pub sibsp: u32,
    pub parch: u32,
    /// Filled with the batch median, same caveat as `age`.
    pub fare: Option<f64>,
    /// Filled with the batch mode, same caveat as `age`.
    pub embarked: Option<String>,
    /// `SibSp + Parch + 1`, always at least 1.
    pub household_size: u32,
    /// 1 iff `household_size == 1`.
    pub is_alone: u8,
    /// Derived from `age` before imputation; `None` for ages outside (0, 80].
    pub age_group: Option<AgeGroup>,
    pub alone: u8,
    /// `"{AgeGroup}_Alone{alone}"`, with `"nan"` for a missing group.
    pub alone_x_age_group: String,
}

/// Map a batch of raw records to engineered records.
///
/// Pure: the same batch always produces bit-identical output. Imputation
/// statistics (median age, median fare, modal embarkation port) come from
/// the batch being transformed, not from any fitted state, so a singleton
/// batch is its own peer group. Derived features are computed from the raw
/// values before imputation; an imputed age never creates an age group.
///
/// # Example
///
/// ```
/// use predecir::{transform, PassengerRecord};
///
/// let batch = vec![PassengerRecord {
///     pclass: 3,
///     sex: "male".to_string(),
///     age: Some(22.0),
///     sibsp: 1,
///     parch: 0,
///     fare: Some(7.25),
///     embarked: Some("S".to_string()),
/// }];
///
/// let engineered = transform(&batch);
/// assert_eq!(engineered[0].household_size, 2);
/// assert_eq!(engineered[0].alone_x_age_group, "Adult_Alone0");
/// ```
pub fn transform(batch: &[PassengerRecord]) -> Vec<EngineeredRecord> {
    let mut out: Vec<EngineeredRecord> = batch.iter().map(engineer_one).collect();

    let ages: Vec<f64> = batch.iter().filter_map(|r| r.age).collect();
    let fares: Vec<f64> = batch.iter().filter_map(|r| r.fare).collect();
    let age_fill = median(&ages);
    let fare_fill = median(&fares);
    let embarked_fill = mode(batch.iter().filter_map(|r| r.embarked.as_deref()));

    for rec in &mut out {
        if rec.age.is_none() {
            rec.age = age_fill;
        }
        if rec.fare.is_none() {
            rec.fare = fare_fill;
        }
        if rec.embarked.is_none() {
            rec.embarked = embarked_fill.clone();
        }
    }

    out
}

fn engineer_one(raw: &PassengerRecord) -> EngineeredRecord {
    let household_size = raw.sibsp + raw.parch + 1;
    let is_alone = u8::from(household_size == 1);
    let age_group = raw.age.and_then(bucket_age);
    let alone = is_alone;
    let group_label = age_group.map_or("nan", AgeGroup::as_str);
    let alone_x_age_group = format!("{group_label}_Alone{alone}");

    EngineeredRecord {
        pclass: raw.pclass,
        sex: raw.sex.clone(),
        age: raw.age,
        sibsp: raw.sibsp,
        parch: raw.parch,
        fare: raw.fare,
        embarked: raw.embarked.clone(),
        household_size,
        is_alone,
        age_group,
        alone,
        alone_x_age_group,
    }
}
