// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - dashboard computation layer.

pub mod aggregate;
pub mod charts;
pub mod dataset;
pub mod filter;
pub mod query;
pub mod suggestions;

pub use aggregate::aggregate;
pub use dataset::{Dataset, LoadError};
pub use filter::{filter, filter_range, FilterCriteria, InvalidRangeError, Subset};
pub use query::{run_query, DashboardView, MetricCards, QueryResult};
pub use suggestions::{suggest, Suggestions};
