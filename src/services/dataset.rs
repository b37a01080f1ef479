// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity dataset loading.
//!
//! The dataset is read once at startup and never mutated afterwards, so it
//! can be shared by reference across concurrent requests without locking.

use crate::models::{ActivityRecord, UserId};
use crate::time_utils::{format_iso_date, parse_calendar_date};
use chrono::NaiveDate;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Columns that must be present in the header row.
pub const REQUIRED_COLUMNS: [&str; 13] = [
    "UserId",
    "Date",
    "Steps",
    "Total Distance",
    "Very Active Distance",
    "Moderately Active Distance",
    "Light Active Distance",
    "Sedentary Active Distance",
    "Calories Burned",
    "Very Active Minutes",
    "Fairly Active Minutes",
    "Lightly Active Minutes",
    "Sedentary Minutes",
];

/// One CSV row as written in the file, before date parsing.
///
/// Numeric cells go through the lenient readers below, so a blank cell is
/// a missing value rather than a malformed row.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "UserId")]
    user_id: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Steps", deserialize_with = "lenient_count")]
    steps: Option<u64>,
    #[serde(rename = "Total Distance", deserialize_with = "lenient_float")]
    total_distance: Option<f64>,
    #[serde(rename = "Very Active Distance", deserialize_with = "lenient_float")]
    very_active_distance: Option<f64>,
    #[serde(rename = "Moderately Active Distance", deserialize_with = "lenient_float")]
    moderately_active_distance: Option<f64>,
    #[serde(rename = "Light Active Distance", deserialize_with = "lenient_float")]
    light_active_distance: Option<f64>,
    #[serde(rename = "Sedentary Active Distance", deserialize_with = "lenient_float")]
    sedentary_active_distance: Option<f64>,
    #[serde(rename = "Calories Burned", deserialize_with = "lenient_float")]
    calories: Option<f64>,
    #[serde(rename = "Very Active Minutes", deserialize_with = "lenient_count")]
    very_active_minutes: Option<u32>,
    #[serde(rename = "Fairly Active Minutes", deserialize_with = "lenient_count")]
    fairly_active_minutes: Option<u32>,
    #[serde(rename = "Lightly Active Minutes", deserialize_with = "lenient_count")]
    lightly_active_minutes: Option<u32>,
    #[serde(rename = "Sedentary Minutes", deserialize_with = "lenient_count")]
    sedentary_minutes: Option<u32>,
}

impl CsvRow {
    fn into_record(self, line: u64) -> Result<ActivityRecord, LoadError> {
        let date = parse_calendar_date(&self.date).ok_or_else(|| LoadError::InvalidDate {
            line,
            value: self.date.clone(),
        })?;

        Ok(ActivityRecord {
            user_id: UserId::new(&self.user_id),
            date,
            steps: self.steps,
            total_distance: self.total_distance,
            very_active_distance: self.very_active_distance,
            moderately_active_distance: self.moderately_active_distance,
            light_active_distance: self.light_active_distance,
            sedentary_active_distance: self.sedentary_active_distance,
            calories: self.calories,
            very_active_minutes: self.very_active_minutes,
            fairly_active_minutes: self.fairly_active_minutes,
            lightly_active_minutes: self.lightly_active_minutes,
            sedentary_minutes: self.sedentary_minutes,
        })
    }
}

// ─── Lenient numeric cells ───────────────────────────────────

fn lenient_float<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_float_cell(&raw).map_err(de::Error::custom)
}

fn lenient_count<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    let raw = String::deserialize(deserializer)?;
    let count = parse_count_cell(&raw).map_err(de::Error::custom)?;
    count
        .map(|n| {
            T::try_from(n).map_err(|_| de::Error::custom(format!("count {n} is out of range")))
        })
        .transpose()
}

/// Blank, NaN, and infinite cells are missing.
fn parse_float_cell(raw: &str) -> Result<Option<f64>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let value: f64 = raw
        .parse()
        .map_err(|e| format!("invalid number {raw:?}: {e}"))?;
    Ok(value.is_finite().then_some(value))
}

/// Integer cells also accept whole-valued floats such as `5000.0`.
fn parse_count_cell(raw: &str) -> Result<Option<u64>, String> {
    if let Ok(count) = raw.trim().parse::<u64>() {
        return Ok(Some(count));
    }
    match parse_float_cell(raw)? {
        None => Ok(None),
        Some(value) if value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 => {
            Ok(Some(value as u64))
        }
        Some(value) => Err(format!("expected a whole non-negative count, got {value}")),
    }
}

/// Immutable, ordered collection of activity records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<ActivityRecord>,
}

impl Dataset {
    /// Build a dataset from records already in memory.
    pub fn from_records(records: Vec<ActivityRecord>) -> Self {
        Self { records }
    }

    /// Load the dataset from a CSV file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| LoadError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let dataset = Self::load_from_reader(file)?;

        tracing::info!(
            path = %path.display(),
            records = dataset.len(),
            "Loaded activity dataset"
        );
        Ok(dataset)
    }

    /// Load the dataset from CSV text.
    pub fn load_from_csv(csv_data: &str) -> Result<Self, LoadError> {
        Self::load_from_reader(csv_data.as_bytes())
    }

    /// Load the dataset from any CSV byte source.
    ///
    /// Fails on the first malformed row; no partial dataset is returned.
    pub fn load_from_reader<R: Read>(source: R) -> Result<Self, LoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);

        let headers = reader
            .headers()
            .map_err(|e| LoadError::Parse {
                line: 1,
                message: format!("Failed to read header row: {e}"),
            })?
            .clone();

        if let Some(missing) = REQUIRED_COLUMNS
            .iter()
            .find(|column| !headers.iter().any(|h| h == **column))
        {
            return Err(LoadError::MissingColumn(missing.to_string()));
        }

        let mut records = Vec::new();
        for result in reader.records() {
            let row = result.map_err(|e| LoadError::Parse {
                line: e.position().map(|p| p.line()).unwrap_or_default(),
                message: e.to_string(),
            })?;
            let line = row.position().map(|p| p.line()).unwrap_or_default();

            let parsed: CsvRow = row.deserialize(Some(&headers)).map_err(|e| LoadError::Parse {
                line,
                message: e.to_string(),
            })?;
            records.push(parsed.into_record(line)?);
        }

        if let Some((first, last)) = date_bounds(&records) {
            tracing::debug!(
                records = records.len(),
                first = %format_iso_date(first),
                last = %format_iso_date(last),
                "Parsed activity records"
            );
        }

        Ok(Self { records })
    }

    /// All records in file order.
    pub fn records(&self) -> &[ActivityRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct user identifiers in order of first appearance.
    pub fn user_ids(&self) -> Vec<UserId> {
        let mut seen = HashSet::new();
        let mut ids = Vec::new();
        for record in &self.records {
            if seen.insert(&record.user_id) {
                ids.push(record.user_id.clone());
            }
        }
        ids
    }

    /// Earliest and latest record dates, or `None` when empty.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        date_bounds(&self.records)
    }
}

fn date_bounds(records: &[ActivityRecord]) -> Option<(NaiveDate, NaiveDate)> {
    let first = records.iter().map(|r| r.date).min()?;
    let last = records.iter().map(|r| r.date).max()?;
    Some((first, last))
}

/// Errors from loading the dataset. All are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Malformed row at line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("Unparseable date {value:?} at line {line}")]
    InvalidDate { line: u64, value: String },
}
