// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Smart-watch activity record model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the watch owner.
///
/// Kept as the trimmed text from the `UserId` column so both numeric and
/// alphanumeric identifiers compare by exact match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(id.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// One day of smart-watch metrics for one user.
///
/// Numeric cells left blank in the source file are `None`; they are skipped
/// by sums and correlations rather than read as zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityRecord {
    pub user_id: UserId,
    /// Calendar date of the sample (no time component)
    pub date: NaiveDate,
    pub steps: Option<u64>,
    /// Total distance (km)
    pub total_distance: Option<f64>,

    // ─── Distance by intensity (km) ──────────────────────────────
    pub very_active_distance: Option<f64>,
    pub moderately_active_distance: Option<f64>,
    pub light_active_distance: Option<f64>,
    pub sedentary_active_distance: Option<f64>,

    /// Calories burned (kcal)
    pub calories: Option<f64>,

    // ─── Minutes by intensity ────────────────────────────────────
    pub very_active_minutes: Option<u32>,
    pub fairly_active_minutes: Option<u32>,
    pub lightly_active_minutes: Option<u32>,
    pub sedentary_minutes: Option<u32>,
}
