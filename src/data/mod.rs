//! Raw passenger records and tabular ingest
//!
//! The raw input schema is fixed: `Pclass`, `Sex`, `Age`, `SibSp`, `Parch`,
//! `Fare`, `Embarked`, plus the `Survived` label on training files.
//! Identifier and free-text columns (`PassengerId`, `Name`, `Ticket`,
//! `Cabin`) are ignored wherever they appear.

mod dataset;
mod record;

pub use dataset::{load_labeled_csv, LabeledDataset};
pub use record::PassengerRecord;
