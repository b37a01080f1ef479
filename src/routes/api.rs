// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard API routes.

use crate::error::{AppError, Result};
use crate::models::{AggregateResult, ChartSet, UserId};
use crate::services::query::{run_query, DashboardView, MetricCards};
use crate::time_utils::{format_iso_date, parse_calendar_date};
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Longest accepted user identifier in a query string.
const MAX_USER_ID_LEN: usize = 64;

/// Dashboard API routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users", get(get_users))
        .route("/api/date-range", get(get_date_range))
        .route("/api/dashboard", get(get_dashboard))
}

// ─── Selection Options ───────────────────────────────────────

#[derive(Serialize)]
pub struct UsersResponse {
    /// Distinct users in dataset order
    pub users: Vec<UserId>,
}

/// List the users available in the dropdown.
async fn get_users(State(state): State<Arc<AppState>>) -> Json<UsersResponse> {
    Json(UsersResponse {
        users: state.dataset.user_ids(),
    })
}

#[derive(Serialize)]
pub struct DateRangeResponse {
    /// Earliest record date (ISO 8601), `null` for an empty dataset
    pub start: Option<String>,
    /// Latest record date (ISO 8601), `null` for an empty dataset
    pub end: Option<String>,
}

/// Default bounds for the date picker.
async fn get_date_range(State(state): State<Arc<AppState>>) -> Json<DateRangeResponse> {
    let bounds = state.dataset.date_bounds();
    Json(DateRangeResponse {
        start: bounds.map(|(start, _)| format_iso_date(start)),
        end: bounds.map(|(_, end)| format_iso_date(end)),
    })
}

// ─── Dashboard ───────────────────────────────────────────────

#[derive(Deserialize)]
struct DashboardQuery {
    user_id: Option<String>,
    /// Inclusive start date
    start_date: Option<String>,
    /// Inclusive end date
    end_date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardStatus {
    /// A user or date bound is missing
    Incomplete,
    Ready,
}

#[derive(Serialize)]
pub struct DashboardResponse {
    pub status: DashboardStatus,
    #[serde(flatten)]
    pub cards: MetricCards,
    /// Suggestion sentences joined with spaces, or "N/A"
    pub health_suggestions: String,
    pub suggestions: Vec<String>,
    pub record_count: Option<usize>,
    pub aggregate: Option<AggregateResult>,
    pub charts: Option<ChartSet>,
}

impl From<DashboardView> for DashboardResponse {
    fn from(view: DashboardView) -> Self {
        let cards = view.cards();
        let health_suggestions = view.suggestion_text();
        match view {
            DashboardView::Incomplete => Self {
                status: DashboardStatus::Incomplete,
                cards,
                health_suggestions,
                suggestions: vec![],
                record_count: None,
                aggregate: None,
                charts: None,
            },
            DashboardView::Ready(result) => {
                let result = *result;
                Self {
                    status: DashboardStatus::Ready,
                    cards,
                    health_suggestions,
                    suggestions: result.suggestions.sentences().to_vec(),
                    record_count: Some(result.record_count),
                    aggregate: Some(result.aggregate),
                    charts: Some(result.charts),
                }
            }
        }
    }
}

/// Treat a missing or blank parameter as absent.
fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_user_id(raw: Option<&str>) -> Result<Option<UserId>> {
    non_blank(raw)
        .map(|id| {
            if id.len() > MAX_USER_ID_LEN {
                return Err(AppError::BadRequest(format!(
                    "'user_id' must be at most {MAX_USER_ID_LEN} characters"
                )));
            }
            Ok(UserId::new(id))
        })
        .transpose()
}

fn parse_date_param(name: &str, raw: Option<&str>) -> Result<Option<NaiveDate>> {
    non_blank(raw)
        .map(|value| {
            parse_calendar_date(value).ok_or_else(|| {
                AppError::BadRequest(format!(
                    "Invalid '{name}' parameter: expected a calendar date (YYYY-MM-DD)"
                ))
            })
        })
        .transpose()
}

/// Filter, aggregate, and summarize the dataset for the current selection.
async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DashboardQuery>,
) -> Result<Json<DashboardResponse>> {
    tracing::debug!(
        user_id = ?params.user_id,
        start_date = ?params.start_date,
        end_date = ?params.end_date,
        "Dashboard query"
    );

    let user_id = parse_user_id(params.user_id.as_deref())?;
    let start = parse_date_param("start_date", params.start_date.as_deref())?;
    let end = parse_date_param("end_date", params.end_date.as_deref())?;

    let view = run_query(&state.dataset, user_id, start, end)?;
    Ok(Json(DashboardResponse::from(view)))
}
