//! Fixed column schema
//!
//! The pipeline owns an explicit, ordered schema rather than inferring
//! column types per call: six numeric columns imputed by median, four
//! categorical columns imputed by most-frequent value. Column order here is
//! the column order of the design matrix.

use crate::features::EngineeredRecord;
use serde::{Deserialize, Serialize};

/// Numeric columns, in design-matrix order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericColumn {
    Age,
    Fare,
    HouseholdSize,
    Pclass,
    SibSp,
    Parch,
}

impl NumericColumn {
    pub const ALL: [NumericColumn; 6] = [
        NumericColumn::Age,
        NumericColumn::Fare,
        NumericColumn::HouseholdSize,
        NumericColumn::Pclass,
        NumericColumn::SibSp,
        NumericColumn::Parch,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NumericColumn::Age => "Age",
            NumericColumn::Fare => "Fare",
            NumericColumn::HouseholdSize => "HouseholdSize",
            NumericColumn::Pclass => "Pclass",
            NumericColumn::SibSp => "SibSp",
            NumericColumn::Parch => "Parch",
        }
    }

    /// Extract this column's value from a record. `None` means missing and
    /// is resolved by the frozen imputer.
    pub fn value(self, rec: &EngineeredRecord) -> Option<f64> {
        match self {
            NumericColumn::Age => rec.age,
            NumericColumn::Fare => rec.fare,
            NumericColumn::HouseholdSize => Some(f64::from(rec.household_size)),
            NumericColumn::Pclass => Some(f64::from(rec.pclass)),
            NumericColumn::SibSp => Some(f64::from(rec.sibsp)),
            NumericColumn::Parch => Some(f64::from(rec.parch)),
        }
    }
}

/// Categorical columns, in design-matrix order after the numeric block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoricalColumn {
    Sex,
    Embarked,
    AgeGroup,
    AloneXAgeGroup,
}

impl CategoricalColumn {
    pub const ALL: [CategoricalColumn; 4] = [
        CategoricalColumn::Sex,
        CategoricalColumn::Embarked,
        CategoricalColumn::AgeGroup,
        CategoricalColumn::AloneXAgeGroup,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CategoricalColumn::Sex => "Sex",
            CategoricalColumn::Embarked => "Embarked",
            CategoricalColumn::AgeGroup => "AgeGroup",
            CategoricalColumn::AloneXAgeGroup => "AloneXAgeGroup",
        }
    }

    pub fn value(self, rec: &EngineeredRecord) -> Option<String> {
        match self {
            CategoricalColumn::Sex => Some(rec.sex.clone()),
            CategoricalColumn::Embarked => rec.embarked.clone(),
            CategoricalColumn::AgeGroup => rec.age_group.map(|g| g.as_str().to_string()),
            CategoricalColumn::AloneXAgeGroup => Some(rec.alone_x_age_group.clone()),
        }
    }
}
