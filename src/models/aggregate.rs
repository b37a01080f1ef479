// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Aggregates computed over a filtered set of activity records.
//!
//! These are recomputed for every dashboard query and never stored.

use serde::Serialize;

use crate::models::ActivityRecord;

/// Number of metrics in the correlation matrix.
pub const CORRELATED_METRIC_COUNT: usize = 7;

/// Headline totals shown on the metric cards and fed to the suggestions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    pub steps: u64,
    /// Total distance (km)
    pub distance: f64,
    /// Calories burned (kcal)
    pub calories: f64,
    pub very_active_minutes: u64,
}

/// Distance summed per intensity bucket (km).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct IntensityDistances {
    pub very_active: f64,
    pub moderately_active: f64,
    pub light_active: f64,
    pub sedentary_active: f64,
}

impl IntensityDistances {
    /// Column labels, in bar-chart order.
    pub const LABELS: [&'static str; 4] = [
        "Very Active Distance",
        "Moderately Active Distance",
        "Light Active Distance",
        "Sedentary Active Distance",
    ];

    pub fn values(&self) -> [f64; 4] {
        [
            self.very_active,
            self.moderately_active,
            self.light_active,
            self.sedentary_active,
        ]
    }
}

/// Minutes summed per intensity bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IntensityMinutes {
    pub very_active: u64,
    pub fairly_active: u64,
    pub lightly_active: u64,
    pub sedentary: u64,
}

impl IntensityMinutes {
    /// Column labels, in bar-chart order.
    pub const LABELS: [&'static str; 4] = [
        "Very Active Minutes",
        "Fairly Active Minutes",
        "Lightly Active Minutes",
        "Sedentary Minutes",
    ];

    pub fn values(&self) -> [u64; 4] {
        [
            self.very_active,
            self.fairly_active,
            self.lightly_active,
            self.sedentary,
        ]
    }
}

/// Numeric columns that take part in the correlation matrix.
///
/// Discriminants double as matrix indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrelatedMetric {
    Steps,
    TotalDistance,
    Calories,
    VeryActiveMinutes,
    FairlyActiveMinutes,
    LightlyActiveMinutes,
    SedentaryMinutes,
}

impl CorrelatedMetric {
    /// All metrics in matrix row/column order.
    pub const ALL: [CorrelatedMetric; CORRELATED_METRIC_COUNT] = [
        CorrelatedMetric::Steps,
        CorrelatedMetric::TotalDistance,
        CorrelatedMetric::Calories,
        CorrelatedMetric::VeryActiveMinutes,
        CorrelatedMetric::FairlyActiveMinutes,
        CorrelatedMetric::LightlyActiveMinutes,
        CorrelatedMetric::SedentaryMinutes,
    ];

    /// Source column name, used as the heatmap axis label.
    pub fn label(self) -> &'static str {
        match self {
            CorrelatedMetric::Steps => "Steps",
            CorrelatedMetric::TotalDistance => "Total Distance",
            CorrelatedMetric::Calories => "Calories Burned",
            CorrelatedMetric::VeryActiveMinutes => "Very Active Minutes",
            CorrelatedMetric::FairlyActiveMinutes => "Fairly Active Minutes",
            CorrelatedMetric::LightlyActiveMinutes => "Lightly Active Minutes",
            CorrelatedMetric::SedentaryMinutes => "Sedentary Minutes",
        }
    }

    /// Read this metric from a record as a float; `None` if the cell was blank.
    pub fn value(self, record: &ActivityRecord) -> Option<f64> {
        match self {
            CorrelatedMetric::Steps => record.steps.map(|s| s as f64),
            CorrelatedMetric::TotalDistance => record.total_distance,
            CorrelatedMetric::Calories => record.calories,
            CorrelatedMetric::VeryActiveMinutes => record.very_active_minutes.map(f64::from),
            CorrelatedMetric::FairlyActiveMinutes => record.fairly_active_minutes.map(f64::from),
            CorrelatedMetric::LightlyActiveMinutes => {
                record.lightly_active_minutes.map(f64::from)
            }
            CorrelatedMetric::SedentaryMinutes => record.sedentary_minutes.map(f64::from),
        }
    }
}

/// Symmetric Pearson correlation matrix over [`CorrelatedMetric::ALL`].
///
/// Undefined entries (no observed values, single sample, zero variance) are
/// NaN and serialize as JSON `null`.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    pub columns: [&'static str; CORRELATED_METRIC_COUNT],
    pub values: [[f64; CORRELATED_METRIC_COUNT]; CORRELATED_METRIC_COUNT],
}

impl CorrelationMatrix {
    pub fn new(values: [[f64; CORRELATED_METRIC_COUNT]; CORRELATED_METRIC_COUNT]) -> Self {
        Self {
            columns: CorrelatedMetric::ALL.map(CorrelatedMetric::label),
            values,
        }
    }

    /// Correlation between two metrics.
    pub fn get(&self, row: CorrelatedMetric, col: CorrelatedMetric) -> f64 {
        self.values[row as usize][col as usize]
    }
}

/// Everything the dashboard derives from one filtered subset.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateResult {
    pub totals: Totals,
    pub distance_by_intensity: IntensityDistances,
    pub minutes_by_intensity: IntensityMinutes,
    pub correlation: CorrelationMatrix,
}
