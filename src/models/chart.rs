// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Chart inputs for the dashboard frontend.
//!
//! These carry data only; the frontend owns styling and rendering.

use serde::Serialize;

/// One sample of a time series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimePoint {
    /// ISO 8601 calendar date
    pub date: String,
    /// `null` when the cell was blank
    pub value: Option<f64>,
}

/// Ordinary-least-squares fit drawn over a scatter plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trendline {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
}

/// Scatter plot points with an optional trend line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// `[x, y]` pairs in subset order
    pub points: Vec<[f64; 2]>,
    /// Absent with fewer than two points or no spread in x
    pub trendline: Option<Trendline>,
}

/// One bar of a bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarItem {
    pub label: &'static str,
    pub value: f64,
}

/// Correlation heatmap.
#[derive(Debug, Clone, Serialize)]
pub struct Heatmap {
    pub labels: Vec<&'static str>,
    /// Row-major; NaN serializes as `null`
    pub values: Vec<Vec<f64>>,
}

/// All chart inputs for one dashboard query.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSet {
    // ─── Time Series ─────────────────────────────────────────────
    pub calories_over_time: Vec<TimePoint>,

    // ─── Scatter With Trend Lines ────────────────────────────────
    pub steps_vs_distance: ScatterSeries,
    pub distance_vs_active_minutes: ScatterSeries,

    // ─── Bar Charts ──────────────────────────────────────────────
    pub distance_by_activity: Vec<BarItem>,
    pub minutes_by_activity: Vec<BarItem>,

    // ─── Heatmap ─────────────────────────────────────────────────
    pub correlation: Heatmap,
}
