// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod aggregate;
pub mod chart;
pub mod record;

pub use aggregate::{
    AggregateResult, CorrelatedMetric, CorrelationMatrix, IntensityDistances, IntensityMinutes,
    Totals,
};
pub use chart::{BarItem, ChartSet, Heatmap, ScatterSeries, TimePoint, Trendline};
pub use record::{ActivityRecord, UserId};
