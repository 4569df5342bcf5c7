//! CSV ingest for labeled training data

use super::PassengerRecord;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Raw feature columns every input file must carry.
const REQUIRED_FEATURE_COLUMNS: [&str; 7] =
    ["Pclass", "Sex", "Age", "SibSp", "Parch", "Fare", "Embarked"];

/// Label column required on training files.
const LABEL_COLUMN: &str = "Survived";

/// A parsed training file: raw records plus their binary labels.
#[derive(Debug, Clone)]
pub struct LabeledDataset {
    pub records: Vec<PassengerRecord>,
    pub labels: Vec<u8>,
}

impl LabeledDataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// One CSV row. Deserializing by header name means identifier columns
/// (`PassengerId`, `Name`, `Ticket`, `Cabin`) are dropped for free, present
/// or not.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Survived")]
    survived: u8,
    #[serde(rename = "Pclass")]
    pclass: u8,
    #[serde(rename = "Sex")]
    sex: String,
    #[serde(rename = "Age")]
    age: Option<f64>,
    #[serde(rename = "SibSp")]
    sibsp: u32,
    #[serde(rename = "Parch")]
    parch: u32,
    #[serde(rename = "Fare")]
    fare: Option<f64>,
    #[serde(rename = "Embarked")]
    embarked: Option<String>,
}

impl From<RawRow> for PassengerRecord {
    fn from(row: RawRow) -> Self {
        Self {
            pclass: row.pclass,
            sex: row.sex,
            age: row.age,
            sibsp: row.sibsp,
            parch: row.parch,
            fare: row.fare,
            embarked: row.embarked,
        }
    }
}

/// Load a labeled training file.
///
/// # Errors
///
/// * [`Error::InputNotFound`] when the file does not exist
/// * [`Error::MissingColumn`] when the header lacks `Survived` or any raw
///   feature column
/// * [`Error::InvalidInput`] when a label is not 0 or 1
pub fn load_labeled_csv(path: impl AsRef<Path>) -> Result<LabeledDataset> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path).map_err(|e| Error::Csv(e.to_string()))?;

    let headers = reader
        .headers()
        .map_err(|e| Error::Csv(e.to_string()))?
        .clone();
    let has = |name: &str| headers.iter().any(|h| h == name);

    if !has(LABEL_COLUMN) {
        return Err(Error::MissingColumn(LABEL_COLUMN.to_string()));
    }
    for col in REQUIRED_FEATURE_COLUMNS {
        if !has(col) {
            return Err(Error::MissingColumn(col.to_string()));
        }
    }

    let mut records = Vec::new();
    let mut labels = Vec::new();
    for row in reader.deserialize::<RawRow>() {
        let row = row.map_err(|e| Error::Csv(e.to_string()))?;
        if row.survived > 1 {
            return Err(Error::InvalidInput(format!(
                "label must be 0 or 1, got {}",
                row.survived
            )));
        }
        labels.push(row.survived);
        let mut record = PassengerRecord::from(row);
        // Empty strings survive Option<String> deserialization; treat them
        // as absent, same as a missing field.
        if record
            .embarked
            .as_deref()
            .is_some_and(|e| e.trim().is_empty())
        {
            record.embarked = None;
        }
        records.push(record);
    }

    Ok(LabeledDataset { records, labels })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_basic_file() {
        let file = write_csv(
            "Survived,Pclass,Sex,Age,SibSp,Parch,Fare,Embarked\n\
             0,3,male,22,1,0,7.25,S\n\
             1,1,female,38,1,0,71.2833,C\n",
        );

        let ds = load_labeled_csv(file.path()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.labels, vec![0, 1]);
        assert_eq!(ds.records[0].sex, "male");
        assert_eq!(ds.records[1].age, Some(38.0));
    }

    #[test]
    fn test_missing_values_parse_as_none() {
        let file = write_csv(
            "Survived,Pclass,Sex,Age,SibSp,Parch,Fare,Embarked\n\
             1,3,female,,0,0,,\n",
        );

        let ds = load_labeled_csv(file.path()).unwrap();
        assert_eq!(ds.records[0].age, None);
        assert_eq!(ds.records[0].fare, None);
        assert_eq!(ds.records[0].embarked, None);
    }

    #[test]
    fn test_identifier_columns_are_ignored() {
        let file = write_csv(
            "PassengerId,Survived,Pclass,Name,Sex,Age,SibSp,Parch,Ticket,Fare,Cabin,Embarked\n\
             1,0,3,\"Braund, Mr. Owen\",male,22,1,0,A/5 21171,7.25,,S\n",
        );

        let ds = load_labeled_csv(file.path()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].pclass, 3);
    }

    #[test]
    fn test_missing_label_column() {
        let file = write_csv(
            "Pclass,Sex,Age,SibSp,Parch,Fare,Embarked\n\
             3,male,22,1,0,7.25,S\n",
        );

        let err = load_labeled_csv(file.path()).unwrap_err();
        assert!(matches!(err, Error::MissingColumn(c) if c == "Survived"));
    }

    #[test]
    fn test_missing_feature_column() {
        let file = write_csv(
            "Survived,Pclass,Sex,Age,SibSp,Parch,Fare\n\
             0,3,male,22,1,0,7.25\n",
        );

        let err = load_labeled_csv(file.path()).unwrap_err();
        assert!(matches!(err, Error::MissingColumn(c) if c == "Embarked"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_labeled_csv("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, Error::InputNotFound(_)));
    }

    #[test]
    fn test_non_binary_label_rejected() {
        let file = write_csv(
            "Survived,Pclass,Sex,Age,SibSp,Parch,Fare,Embarked\n\
             2,3,male,22,1,0,7.25,S\n",
        );

        let err = load_labeled_csv(file.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
