// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Chart inputs built from a filtered subset and its aggregate.

use crate::models::{
    AggregateResult, BarItem, ChartSet, Heatmap, IntensityDistances, IntensityMinutes,
    ScatterSeries, TimePoint, Trendline,
};
use crate::services::filter::Subset;
use crate::time_utils::format_iso_date;

/// Build every dashboard chart input for one query.
///
/// Scatter plots drop rows missing either coordinate; the calorie series
/// keeps them as gaps.
pub fn build(subset: &Subset<'_>, aggregate: &AggregateResult) -> ChartSet {
    let calories_over_time = subset
        .iter()
        .map(|r| TimePoint {
            date: format_iso_date(r.date),
            value: r.calories,
        })
        .collect();

    let steps_vs_distance = scatter(
        "Steps vs Total Distance",
        "Steps",
        "Total Distance",
        subset
            .iter()
            .filter_map(|r| Some([r.steps? as f64, r.total_distance?]))
            .collect(),
    );

    let distance_vs_active_minutes = scatter(
        "Total Distance vs Active Minutes",
        "Total Distance",
        "Very Active Minutes",
        subset
            .iter()
            .filter_map(|r| Some([r.total_distance?, f64::from(r.very_active_minutes?)]))
            .collect(),
    );

    let distance_by_activity = IntensityDistances::LABELS
        .into_iter()
        .zip(aggregate.distance_by_intensity.values())
        .map(|(label, value)| BarItem { label, value })
        .collect();

    let minutes_by_activity = IntensityMinutes::LABELS
        .into_iter()
        .zip(aggregate.minutes_by_intensity.values())
        .map(|(label, value)| BarItem {
            label,
            value: value as f64,
        })
        .collect();

    let correlation = Heatmap {
        labels: aggregate.correlation.columns.to_vec(),
        values: aggregate
            .correlation
            .values
            .iter()
            .map(|row| row.to_vec())
            .collect(),
    };

    ChartSet {
        calories_over_time,
        steps_vs_distance,
        distance_vs_active_minutes,
        distance_by_activity,
        minutes_by_activity,
        correlation,
    }
}

fn scatter(
    title: &'static str,
    x_label: &'static str,
    y_label: &'static str,
    points: Vec<[f64; 2]>,
) -> ScatterSeries {
    let trendline = ols_trendline(&points);
    ScatterSeries {
        title,
        x_label,
        y_label,
        points,
        trendline,
    }
}

/// Ordinary least squares fit of `y` on `x`.
///
/// Returns `None` with fewer than two points or no spread in `x`.
pub fn ols_trendline(points: &[[f64; 2]]) -> Option<Trendline> {
    if points.len() < 2 {
        return None;
    }

    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p[0]).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p[1]).sum::<f64>() / n;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for [x, y] in points {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if sxx.abs() < f64::EPSILON {
        return None;
    }

    let slope = sxy / sxx;
    let intercept = slope.mul_add(-mean_x, mean_y);
    // Constant y is fit exactly by a flat line
    let r_squared = if syy == 0.0 {
        1.0
    } else {
        (sxy * sxy) / (sxx * syy)
    };

    Some(Trendline {
        slope,
        intercept,
        r_squared,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityRecord, UserId};
    use crate::services::aggregate::aggregate;
    use chrono::NaiveDate;

    fn record(day: u32, steps: u64, distance: f64, calories: f64, very: u32) -> ActivityRecord {
        ActivityRecord {
            user_id: UserId::from(1),
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            steps: Some(steps),
            total_distance: Some(distance),
            very_active_distance: Some(1.0),
            moderately_active_distance: Some(2.0),
            light_active_distance: Some(3.0),
            sedentary_active_distance: Some(0.5),
            calories: Some(calories),
            very_active_minutes: Some(very),
            fairly_active_minutes: Some(1),
            lightly_active_minutes: Some(2),
            sedentary_minutes: Some(3),
        }
    }

    #[test]
    fn test_ols_exact_line() {
        let fit = ols_trendline(&[[0.0, 1.0], [1.0, 3.0], [2.0, 5.0]]).unwrap();

        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept - 1.0).abs() < 1e-12);
        assert!((fit.r_squared - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_ols_requires_spread_in_x() {
        assert_eq!(ols_trendline(&[]), None);
        assert_eq!(ols_trendline(&[[1.0, 2.0]]), None);
        assert_eq!(ols_trendline(&[[1.0, 2.0], [1.0, 5.0]]), None);
    }

    #[test]
    fn test_build_chart_set() {
        let rows = [
            record(2, 8000, 6.0, 2100.0, 40),
            record(1, 5000, 3.0, 1500.0, 10),
        ];
        let subset = Subset::from_records(rows.iter().collect());
        let agg = aggregate(&subset);

        let charts = build(&subset, &agg);

        // Time series keeps subset order
        assert_eq!(charts.calories_over_time[0].date, "2024-01-02");
        assert_eq!(charts.calories_over_time[1].value, Some(1500.0));

        assert_eq!(charts.steps_vs_distance.points.len(), 2);
        let fit = charts.steps_vs_distance.trendline.unwrap();
        assert!((fit.slope - 0.001).abs() < 1e-12);
        assert_eq!(charts.distance_vs_active_minutes.points[0], [6.0, 40.0]);

        let labels: Vec<&str> = charts.distance_by_activity.iter().map(|b| b.label).collect();
        assert_eq!(labels, IntensityDistances::LABELS.to_vec());
        assert_eq!(charts.distance_by_activity[2].value, 6.0);
        assert_eq!(charts.minutes_by_activity[3].value, 6.0);

        assert_eq!(charts.correlation.labels.len(), 7);
        assert_eq!(charts.correlation.values[0][0], 1.0);
    }

    #[test]
    fn test_scatter_skips_rows_with_missing_cells() {
        let mut rows = [
            record(1, 5000, 3.0, 1500.0, 10),
            record(2, 8000, 6.0, 2100.0, 40),
            record(3, 9000, 7.0, 2200.0, 50),
        ];
        rows[1].total_distance = None;
        rows[2].calories = None;
        let subset = Subset::from_records(rows.iter().collect());
        let agg = aggregate(&subset);

        let charts = build(&subset, &agg);

        assert_eq!(
            charts.steps_vs_distance.points,
            vec![[5000.0, 3.0], [9000.0, 7.0]]
        );
        assert_eq!(charts.distance_vs_active_minutes.points.len(), 2);
        assert_eq!(charts.calories_over_time.len(), 3);
        assert_eq!(charts.calories_over_time[2].value, None);
    }

    #[test]
    fn test_build_on_empty_subset() {
        let subset = Subset::default();
        let agg = aggregate(&subset);

        let charts = build(&subset, &agg);

        assert!(charts.calories_over_time.is_empty());
        assert!(charts.steps_vs_distance.trendline.is_none());
        assert!(charts.minutes_by_activity.iter().all(|b| b.value == 0.0));
    }
}
