//! Daily donation totals for the funding chart.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use cubik_core::entities::Contribution;
use serde::Serialize;

/// Sum of donations on one UTC calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyTotal {
    pub day: NaiveDate,
    pub total: f64,
}

/// One point per UTC day from `today - window_days` through `today`.
///
/// Days without donations are `0.0`. Donations outside the window are
/// dropped.
#[must_use]
pub fn daily_funding_series<'a>(
    contributions: impl IntoIterator<Item = &'a Contribution>,
    today: NaiveDate,
    window_days: u32,
) -> Vec<DailyTotal> {
    let start = today
        .checked_sub_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MIN);

    let mut by_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    let mut outside = 0usize;
    for contribution in contributions {
        let day = contribution.created_at.date_naive();
        if day < start || day > today {
            outside += 1;
            continue;
        }
        *by_day.entry(day).or_insert(0.0) += contribution.amount;
    }

    if outside > 0 {
        tracing::debug!(outside, %start, %today, "dropped contributions outside chart window");
    }

    start
        .iter_days()
        .take_while(|day| *day <= today)
        .map(|day| DailyTotal {
            day,
            total: by_day.get(&day).copied().unwrap_or(0.0),
        })
        .collect()
}
