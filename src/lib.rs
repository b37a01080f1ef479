// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Smart-watch activity dashboard backend.
//!
//! Loads a CSV of daily smart-watch activity once at startup and answers
//! dashboard queries: filter by user and date range, aggregate totals and
//! correlations, build chart inputs, and derive health suggestions.

pub mod config;
pub mod error;
pub mod format_utils;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::Dataset;

/// Shared application state.
///
/// The dataset is immutable after startup; handlers only borrow it.
pub struct AppState {
    pub config: Config,
    pub dataset: Dataset,
}
