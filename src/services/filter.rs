// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Record selection by user and closed date interval.

use crate::models::{ActivityRecord, UserId};
use crate::services::Dataset;
use chrono::NaiveDate;

/// Selection predicate for one dashboard query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Exact user match; `None` keeps every user
    pub user_id: Option<UserId>,
    /// Inclusive lower bound
    pub start: NaiveDate,
    /// Inclusive upper bound
    pub end: NaiveDate,
}

impl FilterCriteria {
    /// Build criteria, requiring both date bounds.
    ///
    /// `start > end` is accepted and simply matches nothing.
    pub fn new(
        user_id: Option<UserId>,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Self, InvalidRangeError> {
        match (start, end) {
            (Some(start), Some(end)) => Ok(Self {
                user_id,
                start,
                end,
            }),
            (None, _) => Err(InvalidRangeError::MissingStart),
            (_, None) => Err(InvalidRangeError::MissingEnd),
        }
    }

    /// Whether a single record satisfies both predicates.
    pub fn matches(&self, record: &ActivityRecord) -> bool {
        let user_ok = self
            .user_id
            .as_ref()
            .map_or(true, |id| *id == record.user_id);
        user_ok && self.start <= record.date && record.date <= self.end
    }
}

/// Records selected from a [`Dataset`], borrowed in dataset order.
#[derive(Debug, Clone, Default)]
pub struct Subset<'a> {
    records: Vec<&'a ActivityRecord>,
}

impl<'a> Subset<'a> {
    pub fn from_records(records: Vec<&'a ActivityRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[&'a ActivityRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a ActivityRecord> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Select records matching `criteria`. Never mutates the dataset.
pub fn filter<'a>(dataset: &'a Dataset, criteria: &FilterCriteria) -> Subset<'a> {
    let records: Vec<&ActivityRecord> = dataset
        .records()
        .iter()
        .filter(|r| criteria.matches(r))
        .collect();

    tracing::debug!(
        user_id = ?criteria.user_id,
        start = %criteria.start,
        end = %criteria.end,
        matched = records.len(),
        total = dataset.len(),
        "Filtered activity records"
    );

    Subset { records }
}

/// Build criteria from optional inputs and filter in one step.
pub fn filter_range<'a>(
    dataset: &'a Dataset,
    user_id: Option<UserId>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<Subset<'a>, InvalidRangeError> {
    let criteria = FilterCriteria::new(user_id, start, end)?;
    Ok(filter(dataset, &criteria))
}

/// A filter was invoked without both date bounds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidRangeError {
    #[error("Start date is required")]
    MissingStart,

    #[error("End date is required")]
    MissingEnd,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(user: u64, date: NaiveDate, steps: u64) -> ActivityRecord {
        ActivityRecord {
            user_id: UserId::from(user),
            date,
            steps: Some(steps),
            total_distance: Some(0.0),
            very_active_distance: Some(0.0),
            moderately_active_distance: Some(0.0),
            light_active_distance: Some(0.0),
            sedentary_active_distance: Some(0.0),
            calories: Some(0.0),
            very_active_minutes: Some(0),
            fairly_active_minutes: Some(0),
            lightly_active_minutes: Some(0),
            sedentary_minutes: Some(0),
        }
    }

    fn sample_dataset() -> Dataset {
        Dataset::from_records(vec![
            record(1, ymd(2024, 1, 3), 30),
            record(2, ymd(2024, 1, 1), 11),
            record(1, ymd(2024, 1, 1), 10),
            record(1, ymd(2024, 1, 2), 20),
            record(2, ymd(2024, 1, 5), 15),
            record(1, ymd(2024, 1, 5), 50),
        ])
    }

    fn steps(subset: &Subset<'_>) -> Vec<u64> {
        subset.iter().filter_map(|r| r.steps).collect()
    }

    #[test]
    fn test_filter_by_user_and_inclusive_range() {
        let dataset = sample_dataset();

        let subset = filter_range(
            &dataset,
            Some(UserId::from(1)),
            Some(ymd(2024, 1, 1)),
            Some(ymd(2024, 1, 3)),
        )
        .unwrap();

        // Dataset order, not date order
        assert_eq!(steps(&subset), vec![30, 10, 20]);
    }

    #[test]
    fn test_filter_without_user_keeps_all_users() {
        let dataset = sample_dataset();

        let subset = filter_range(&dataset, None, Some(ymd(2024, 1, 5)), Some(ymd(2024, 1, 5)))
            .unwrap();

        assert_eq!(steps(&subset), vec![15, 50]);
    }

    #[test]
    fn test_unknown_user_matches_nothing() {
        let dataset = sample_dataset();

        let subset = filter_range(
            &dataset,
            Some(UserId::from(99)),
            Some(ymd(2024, 1, 1)),
            Some(ymd(2024, 12, 31)),
        )
        .unwrap();

        assert!(subset.is_empty());
    }

    #[test]
    fn test_inverted_range_is_empty_not_error() {
        let dataset = sample_dataset();

        let subset = filter_range(
            &dataset,
            Some(UserId::from(1)),
            Some(ymd(2024, 1, 5)),
            Some(ymd(2024, 1, 1)),
        )
        .unwrap();

        assert!(subset.is_empty());
        assert_eq!(dataset.len(), 6);
    }

    #[test]
    fn test_missing_bounds_are_rejected() {
        let dataset = sample_dataset();

        let err = filter_range(&dataset, None, None, Some(ymd(2024, 1, 1))).unwrap_err();
        assert_eq!(err, InvalidRangeError::MissingStart);

        let err = filter_range(&dataset, None, Some(ymd(2024, 1, 1)), None).unwrap_err();
        assert_eq!(err, InvalidRangeError::MissingEnd);
    }

    #[test]
    fn test_every_match_satisfies_predicates() {
        let dataset = sample_dataset();
        let criteria =
            FilterCriteria::new(Some(UserId::from(2)), Some(ymd(2024, 1, 1)), Some(ymd(2024, 1, 4)))
                .unwrap();

        let subset = filter(&dataset, &criteria);

        assert_eq!(subset.len(), 1);
        for r in subset.iter() {
            assert_eq!(r.user_id, UserId::from(2));
            assert!(criteria.start <= r.date && r.date <= criteria.end);
        }
    }
}
