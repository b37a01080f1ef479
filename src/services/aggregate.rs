// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Totals, per-intensity sums, and the correlation matrix for a subset.

use crate::models::aggregate::CORRELATED_METRIC_COUNT;
use crate::models::{
    AggregateResult, CorrelatedMetric, CorrelationMatrix, IntensityDistances, IntensityMinutes,
    Totals,
};
use crate::services::filter::Subset;

/// Aggregate a filtered subset.
///
/// An empty subset yields zero totals and an all-NaN correlation matrix.
/// Missing cells add nothing to the sums, and integer sums saturate rather
/// than wrap.
pub fn aggregate(subset: &Subset<'_>) -> AggregateResult {
    let mut totals = Totals::default();
    let mut distances = IntensityDistances::default();
    let mut minutes = IntensityMinutes::default();

    for r in subset.iter() {
        totals.steps = totals.steps.saturating_add(r.steps.unwrap_or(0));
        totals.distance += r.total_distance.unwrap_or(0.0);
        totals.calories += r.calories.unwrap_or(0.0);
        totals.very_active_minutes = totals
            .very_active_minutes
            .saturating_add(minutes_or_zero(r.very_active_minutes));

        distances.very_active += r.very_active_distance.unwrap_or(0.0);
        distances.moderately_active += r.moderately_active_distance.unwrap_or(0.0);
        distances.light_active += r.light_active_distance.unwrap_or(0.0);
        distances.sedentary_active += r.sedentary_active_distance.unwrap_or(0.0);

        minutes.very_active = minutes
            .very_active
            .saturating_add(minutes_or_zero(r.very_active_minutes));
        minutes.fairly_active = minutes
            .fairly_active
            .saturating_add(minutes_or_zero(r.fairly_active_minutes));
        minutes.lightly_active = minutes
            .lightly_active
            .saturating_add(minutes_or_zero(r.lightly_active_minutes));
        minutes.sedentary = minutes
            .sedentary
            .saturating_add(minutes_or_zero(r.sedentary_minutes));
    }

    AggregateResult {
        totals,
        distance_by_intensity: distances,
        minutes_by_intensity: minutes,
        correlation: correlation_matrix(subset),
    }
}

fn minutes_or_zero(value: Option<u32>) -> u64 {
    value.map_or(0, u64::from)
}

/// Pairwise Pearson correlation over [`CorrelatedMetric::ALL`].
///
/// Each pair of columns is correlated over the rows where both cells are
/// present. Diagonal entries are 1.0 when the column has at least one value.
/// Off-diagonal entries are NaN when either column has zero variance or
/// fewer than two complete pairs remain.
pub fn correlation_matrix(subset: &Subset<'_>) -> CorrelationMatrix {
    let columns: Vec<Vec<Option<f64>>> = CorrelatedMetric::ALL
        .iter()
        .map(|metric| subset.iter().map(|r| metric.value(r)).collect())
        .collect();

    let mut values = [[f64::NAN; CORRELATED_METRIC_COUNT]; CORRELATED_METRIC_COUNT];
    if subset.is_empty() {
        return CorrelationMatrix::new(values);
    }

    for i in 0..CORRELATED_METRIC_COUNT {
        if columns[i].iter().any(Option::is_some) {
            values[i][i] = 1.0;
        }
        for j in (i + 1)..CORRELATED_METRIC_COUNT {
            let (xs, ys): (Vec<f64>, Vec<f64>) = columns[i]
                .iter()
                .zip(&columns[j])
                .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
                .unzip();
            let r = pearson(&xs, &ys);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    CorrelationMatrix::new(values)
}

/// Sample Pearson correlation coefficient, clamped to [-1, 1].
///
/// Returns NaN for mismatched lengths, fewer than two samples, or zero
/// variance in either input.
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    if xs.len() != ys.len() || xs.len() < 2 {
        return f64::NAN;
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let (mut sum_xy, mut sum_xx, mut sum_yy) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sum_xy += dx * dy;
        sum_xx += dx * dx;
        sum_yy += dy * dy;
    }

    let denominator = (sum_xx * sum_yy).sqrt();
    if denominator == 0.0 {
        return f64::NAN;
    }
    (sum_xy / denominator).clamp(-1.0, 1.0)
}
