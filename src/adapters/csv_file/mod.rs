//! CSV adapter: Implementation of DatasetSource.
//!
//! Reads a heart-failure cohort file with a header row. Typing is lenient:
//! a cell that does not parse as its column's type becomes an absent value
//! rather than rejecting the row. Rows the reader cannot split against the
//! header, and rows with no usable cell, are skipped with a warning.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{ExerciseAngina, PatientField, Record, Sex};
use crate::ports::DatasetSource;

/// Error type for ingestion.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("Cannot open dataset: {0}")]
    Unreachable(#[from] std::io::Error),

    #[error("Cannot parse dataset: {0}")]
    Unparseable(#[from] csv::Error),

    #[error("No recognised column in header (expected e.g. Age, Cholesterol, MaxHR)")]
    MissingHeader,

    #[error("Dataset contains no usable rows")]
    NoRecords,
}

/// One row exactly as written in the file.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Age")]
    age: Option<String>,
    #[serde(rename = "Sex")]
    sex: Option<String>,
    #[serde(rename = "ChestPainType")]
    chest_pain_type: Option<String>,
    #[serde(rename = "RestingBP")]
    resting_bp: Option<String>,
    #[serde(rename = "Cholesterol")]
    cholesterol: Option<String>,
    #[serde(rename = "MaxHR")]
    max_hr: Option<String>,
    #[serde(rename = "ExerciseAngina")]
    exercise_angina: Option<String>,
    #[serde(rename = "HeartDisease")]
    heart_disease: Option<String>,
}

impl RawRow {
    fn into_record(self) -> Record {
        Record {
            age: number(self.age.as_deref()),
            sex: self.sex.as_deref().and_then(Sex::from_code),
            chest_pain_type: text(self.chest_pain_type),
            resting_bp: number(self.resting_bp.as_deref()),
            cholesterol: number(self.cholesterol.as_deref()),
            max_hr: number(self.max_hr.as_deref()),
            exercise_angina: self.exercise_angina.as_deref().and_then(ExerciseAngina::from_code),
            heart_disease: number(self.heart_disease.as_deref()).and_then(|v| match v {
                v if v == 0.0 => Some(0),
                v if v == 1.0 => Some(1),
                _ => None,
            }),
        }
    }
}

fn number(raw: Option<&str>) -> Option<f64> {
    raw?.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn text(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// CSV file dataset source.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse records from any reader holding CSV text.
    ///
    /// # Errors
    /// Returns `MissingHeader` when no known column is present and
    /// `NoRecords` when every row was skipped.
    pub fn read_records<R: Read>(reader: R) -> Result<Vec<Record>, IngestError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let known = headers
            .iter()
            .filter(|h| PatientField::from_name(h).is_ok())
            .count();
        if known == 0 {
            return Err(IngestError::MissingHeader);
        }

        let mut records = Vec::new();
        let mut skipped = 0usize;
        for (line, row) in reader.deserialize::<RawRow>().enumerate() {
            match row {
                Ok(row) => {
                    let record = row.into_record();
                    if record.is_empty() {
                        skipped += 1;
                    } else {
                        records.push(record);
                    }
                }
                Err(e) => {
                    // Header is line 1.
                    tracing::warn!(line = line + 2, "Skipping malformed row: {}", e);
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            tracing::warn!(skipped, "Skipped unusable rows");
        }
        if records.is_empty() {
            return Err(IngestError::NoRecords);
        }
        Ok(records)
    }
}

impl DatasetSource for CsvSource {
    type Error = IngestError;

    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<Record>, Self::Error> {
        let file = File::open(&self.path)?;
        let records = Self::read_records(file)?;
        tracing::info!(path = %self.path.display(), records = records.len(), "Dataset parsed");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str =
        "Age,Sex,ChestPainType,RestingBP,Cholesterol,FastingBS,RestingECG,MaxHR,ExerciseAngina,Oldpeak,ST_Slope,HeartDisease";

    fn write_csv(body: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Should create temp file");
        writeln!(file, "{HEADER}").expect("Should write header");
        write!(file, "{body}").expect("Should write body");
        file
    }

    #[test]
    fn test_load_typed_rows() {
        let file = write_csv(
            "40,M,ATA,140,289,0,Normal,172,N,0,Up,0\n49,F,NAP,160,180,0,Normal,156,N,1,Flat,1\n",
        );
        let records = CsvSource::new(file.path()).load().expect("Should load");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].age, Some(40.0));
        assert_eq!(records[0].sex, Some(Sex::Male));
        assert_eq!(records[0].chest_pain_type.as_deref(), Some("ATA"));
        assert_eq!(records[0].max_hr, Some(172.0));
        assert_eq!(records[1].exercise_angina, Some(ExerciseAngina::No));
        assert!(records[1].has_heart_disease());
    }

    #[test]
    fn test_mistyped_cells_become_absent() {
        let file = write_csv("abc,M,,140,n/a,0,Normal,172,N,0,Up,2\n");
        let records = CsvSource::new(file.path()).load().expect("Should load");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].age, None);
        assert_eq!(records[0].cholesterol, None);
        assert_eq!(records[0].chest_pain_type, None);
        assert_eq!(records[0].heart_disease, None);
        assert_eq!(records[0].resting_bp, Some(140.0));
    }

    #[test]
    fn test_malformed_and_empty_rows_are_skipped() {
        let file = write_csv(
            "40,M,ATA,140,289,0,Normal,172,N,0,Up,0\n41,M\n\n,,,,,,,,,,,\n52,F,ASY,120,200,0,Normal,140,Y,1,Flat,1\n",
        );
        let records = CsvSource::new(file.path()).load().expect("Should load");

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].age, Some(52.0));
    }

    #[test]
    fn test_missing_file_is_unreachable() {
        let err = CsvSource::new("/nonexistent/heart.csv")
            .load()
            .expect_err("Should fail");
        assert!(matches!(err, IngestError::Unreachable(_)));
    }

    #[test]
    fn test_unknown_header_is_rejected() {
        let err = CsvSource::read_records("foo,bar\n1,2\n".as_bytes()).expect_err("Should fail");
        assert!(matches!(err, IngestError::MissingHeader));

        let err = CsvSource::read_records("".as_bytes()).expect_err("Should fail");
        assert!(matches!(err, IngestError::MissingHeader));
    }

    #[test]
    fn test_header_only_has_no_records() {
        let file = write_csv("");
        let err = CsvSource::new(file.path()).load().expect_err("Should fail");
        assert!(matches!(err, IngestError::NoRecords));
    }

    #[test]
    fn test_partial_columns_are_accepted() {
        let records = CsvSource::read_records("Age,MaxHR\n50,140\n".as_bytes()).expect("Should load");
        assert_eq!(records[0].age, Some(50.0));
        assert_eq!(records[0].cholesterol, None);
    }
}
