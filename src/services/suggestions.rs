// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rule-based health suggestions derived from subset totals.

use crate::format_utils::{thousands, thousands_f64};
use crate::models::Totals;
use serde::Serialize;

/// Below this many steps, recommend the minimum.
pub const MIN_STEPS: u64 = 7_000;
/// Below this many steps, recommend the daily goal.
pub const GOAL_STEPS: u64 = 10_000;
/// Recommended walking distance (km).
pub const MIN_DISTANCE_KM: f64 = 5.0;
/// Calorie burn that counts as a healthy amount (kcal).
pub const MIN_CALORIES: f64 = 2_000.0;
/// Recommended very-active minutes.
pub const MIN_VERY_ACTIVE_MINUTES: u64 = 30;

/// One sentence per analyzed metric, always in the order
/// steps, distance, calories, active minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Suggestions(Vec<String>);

impl Suggestions {
    pub fn sentences(&self) -> &[String] {
        &self.0
    }

    /// All sentences joined with single spaces.
    pub fn combined(&self) -> String {
        self.0.join(" ")
    }
}

/// Build the suggestion list for a set of totals.
pub fn suggest(totals: &Totals) -> Suggestions {
    Suggestions(vec![
        steps_sentence(totals.steps),
        distance_sentence(totals.distance),
        calories_sentence(totals.calories),
        active_minutes_sentence(totals.very_active_minutes),
    ])
}

fn steps_sentence(steps: u64) -> String {
    let shown = thousands(steps);
    if steps < MIN_STEPS {
        format!(
            "Your total steps are {shown}. Consider increasing your daily step count to at least 7,000 for better health."
        )
    } else if steps < GOAL_STEPS {
        format!(
            "Great job! You have taken {shown} steps. Try to reach 10,000 steps a day for optimal health."
        )
    } else {
        format!("Fantastic! You've taken {shown} steps. Keep up the great work!")
    }
}

fn distance_sentence(km: f64) -> String {
    if km < MIN_DISTANCE_KM {
        format!(
            "You have covered {km:.2} km. Aim for at least 5 km of walking per day to stay active."
        )
    } else {
        format!(
            "Excellent! You've covered {km:.2} km. You're meeting the recommended activity levels."
        )
    }
}

fn calories_sentence(kcal: f64) -> String {
    let shown = thousands_f64(kcal);
    if kcal < MIN_CALORIES {
        format!(
            "You've burned {shown} kcal. Increase physical activity to burn more calories and maintain a healthy weight."
        )
    } else {
        format!(
            "You're doing well! You've burned {shown} kcal, which is a good amount for maintaining fitness."
        )
    }
}

fn active_minutes_sentence(minutes: u64) -> String {
    if minutes < MIN_VERY_ACTIVE_MINUTES {
        format!(
            "Try to increase your very active minutes. You're currently at {minutes} minutes, but 30+ minutes daily is recommended."
        )
    } else {
        format!("You're doing great with {minutes} active minutes. Keep it up!")
    }
}
