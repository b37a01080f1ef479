// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard query: filter, aggregate, chart, and suggest in one pass.

use crate::format_utils::{calories_card, distance_card, steps_card, PLACEHOLDER};
use crate::models::{AggregateResult, ChartSet, UserId};
use crate::services::aggregate::aggregate;
use crate::services::filter::{filter, FilterCriteria, InvalidRangeError};
use crate::services::suggestions::{suggest, Suggestions};
use crate::services::{charts, Dataset};
use chrono::NaiveDate;
use serde::Serialize;

/// Card texts shown above the charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricCards {
    pub total_steps: String,
    pub total_distance: String,
    pub calories_burned: String,
}

impl MetricCards {
    fn placeholder() -> Self {
        Self {
            total_steps: PLACEHOLDER.to_string(),
            total_distance: PLACEHOLDER.to_string(),
            calories_burned: PLACEHOLDER.to_string(),
        }
    }
}

/// Result of a query where user and both dates were supplied.
#[derive(Debug, Clone)]
pub struct QueryResult {
    pub record_count: usize,
    pub cards: MetricCards,
    pub suggestions: Suggestions,
    pub aggregate: AggregateResult,
    pub charts: ChartSet,
}

/// Dashboard state for one set of user selections.
#[derive(Debug, Clone)]
pub enum DashboardView {
    /// User or a date bound is missing; show placeholders
    Incomplete,
    Ready(Box<QueryResult>),
}

impl DashboardView {
    pub fn cards(&self) -> MetricCards {
        match self {
            DashboardView::Incomplete => MetricCards::placeholder(),
            DashboardView::Ready(result) => result.cards.clone(),
        }
    }

    /// Combined suggestion text, or the placeholder.
    pub fn suggestion_text(&self) -> String {
        match self {
            DashboardView::Incomplete => PLACEHOLDER.to_string(),
            DashboardView::Ready(result) => result.suggestions.combined(),
        }
    }
}

/// Run the dashboard query.
///
/// Any missing selection short-circuits to [`DashboardView::Incomplete`]
/// without touching the dataset.
pub fn run_query(
    dataset: &Dataset,
    user_id: Option<UserId>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<DashboardView, InvalidRangeError> {
    if user_id.is_none() || start.is_none() || end.is_none() {
        return Ok(DashboardView::Incomplete);
    }

    let criteria = FilterCriteria::new(user_id, start, end)?;
    let subset = filter(dataset, &criteria);
    let aggregate = aggregate(&subset);
    let suggestions = suggest(&aggregate.totals);
    let charts = charts::build(&subset, &aggregate);

    let totals = &aggregate.totals;
    let cards = MetricCards {
        total_steps: steps_card(totals.steps),
        total_distance: distance_card(totals.distance),
        calories_burned: calories_card(totals.calories),
    };

    Ok(DashboardView::Ready(Box::new(QueryResult {
        record_count: subset.len(),
        cards,
        suggestions,
        aggregate,
        charts,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "UserId,Date,Steps,Total Distance,Very Active Distance,Moderately Active Distance,Light Active Distance,Sedentary Active Distance,Calories Burned,Very Active Minutes,Fairly Active Minutes,Lightly Active Minutes,Sedentary Minutes\n\
        1,2024-01-01,5000,3.0,1.0,0.5,1.5,0.0,1500,10,5,200,800\n\
        1,2024-01-02,8000,6.0,3.0,1.0,2.0,0.0,2100,40,10,150,700\n";

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_missing_selection_yields_placeholders() {
        let dataset = Dataset::load_from_csv(CSV).unwrap();

        for (user, start, end) in [
            (None, Some(ymd(2024, 1, 1)), Some(ymd(2024, 1, 2))),
            (Some(UserId::from(1)), None, Some(ymd(2024, 1, 2))),
            (Some(UserId::from(1)), Some(ymd(2024, 1, 1)), None),
        ] {
            let view = run_query(&dataset, user, start, end).unwrap();
            assert!(matches!(view, DashboardView::Incomplete));
            assert_eq!(view.cards().total_steps, "N/A");
            assert_eq!(view.cards().calories_burned, "N/A");
            assert_eq!(view.suggestion_text(), "N/A");
        }
    }

    #[test]
    fn test_ready_view_formats_cards() {
        let dataset = Dataset::load_from_csv(CSV).unwrap();

        let view = run_query(
            &dataset,
            Some(UserId::from(1)),
            Some(ymd(2024, 1, 1)),
            Some(ymd(2024, 1, 2)),
        )
        .unwrap();

        let DashboardView::Ready(result) = view else {
            panic!("expected a ready view");
        };
        assert_eq!(result.record_count, 2);
        assert_eq!(result.cards.total_steps, "13,000");
        assert_eq!(result.cards.total_distance, "9.00 km");
        assert_eq!(result.cards.calories_burned, "3,600 kcal");
    }

    #[test]
    fn test_empty_range_is_ready_with_zero_totals() {
        let dataset = Dataset::load_from_csv(CSV).unwrap();

        let view = run_query(
            &dataset,
            Some(UserId::from(1)),
            Some(ymd(2025, 1, 1)),
            Some(ymd(2025, 1, 31)),
        )
        .unwrap();

        let DashboardView::Ready(result) = view else {
            panic!("expected a ready view");
        };
        assert_eq!(result.record_count, 0);
        assert_eq!(result.cards.total_steps, "0");
        assert_eq!(result.cards.total_distance, "0.00 km");
        assert!(result.suggestions.sentences()[0].starts_with("Your total steps are 0."));
    }
}
