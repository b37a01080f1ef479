// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Display formatting for metric cards and suggestion text.

/// Text shown on every card when the query is incomplete.
pub const PLACEHOLDER: &str = "N/A";

/// Insert `,` between groups of three digits in the integer part.
///
/// Works on any decimal rendering, e.g. `"-1234.5"` becomes `"-1,234.5"`.
fn group_digits(rendered: &str) -> String {
    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(idx) => unsigned.split_at(idx),
        None => (unsigned, ""),
    };

    let mut grouped = String::with_capacity(rendered.len() + int_part.len() / 3);
    grouped.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.push_str(frac_part);
    grouped
}

/// Integer with thousands separators: `13000` -> `"13,000"`.
pub fn thousands(value: u64) -> String {
    group_digits(&value.to_string())
}

/// Float with thousands separators, using the shortest exact rendering.
///
/// Whole values print without a fractional part (`3600.0` -> `"3,600"`).
pub fn thousands_f64(value: f64) -> String {
    group_digits(&value.to_string())
}

/// Steps card text.
pub fn steps_card(steps: u64) -> String {
    thousands(steps)
}

/// Distance card text: `"9.00 km"`.
pub fn distance_card(km: f64) -> String {
    format!("{km:.2} km")
}

/// Calories card text: `"3,600 kcal"`.
pub fn calories_card(kcal: f64) -> String {
    format!("{} kcal", thousands_f64(kcal))
}
