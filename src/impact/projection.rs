//! Calendar-aware forward projection of the current daily rates.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::impact::aggregate::PortfolioSnapshot;

/// Default horizon of the forward series.
pub const DEFAULT_HORIZON_MONTHS: u32 = 12;

/// One forward month of projected savings versus email footprint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionPoint {
    pub month_label: String,
    pub kg_saved: f64,
    pub kg_email: f64,
    pub kg_net: f64,
}

/// Number of days in a calendar month, leap years included.
pub fn days_in_month(year: i32, month: u32) -> i64 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("month in 1..=12");
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("first of month");
    (next - first).num_days()
}

/// Project the snapshot's current daily rates across the next
/// `horizon_months` calendar months, the start month included as point 0.
///
/// Each point multiplies the constant daily rates by that month's actual day
/// count; this is an "if nothing changes" series, not a forecast model.
pub fn project(
    snapshot: &PortfolioSnapshot,
    start: NaiveDate,
    horizon_months: u32,
) -> Vec<ProjectionPoint> {
    let mut year = start.year();
    let mut month = start.month();
    let mut points = Vec::with_capacity(horizon_months as usize);

    for _ in 0..horizon_months {
        let first = NaiveDate::from_ymd_opt(year, month, 1).expect("month in 1..=12");
        let days = days_in_month(year, month) as f64;
        let kg_saved = snapshot.total_kg_avoided * days;
        let kg_email = snapshot.email_kg_per_day * days;
        points.push(ProjectionPoint {
            month_label: first.format("%b").to_string(),
            kg_saved,
            kg_email,
            kg_net: kg_saved - kg_email,
        });

        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }

    points
}
