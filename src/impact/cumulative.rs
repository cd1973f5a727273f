//! Cumulative-since-install extrapolation.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::domain::{CountryParams, CumulativeImpact, Device};
use crate::impact::calculator::daily_impact;

/// Whole days between midnight of the install date and `as_of`, floored at
/// zero so a future-dated install counts nothing.
fn elapsed_days(install_date: NaiveDate, as_of: DateTime<Utc>) -> i64 {
    let installed_at = install_date.and_time(NaiveTime::MIN);
    (as_of.naive_utc() - installed_at).num_days().max(0)
}

/// One device's impact integrated over the days since its install date.
///
/// A straight extrapolation of the current daily impact - it assumes today's
/// configuration and parameters held for every elapsed day, and is recomputed
/// from scratch on every call.
pub fn cumulative_impact(
    device: &Device,
    params: &CountryParams,
    as_of: DateTime<Utc>,
) -> CumulativeImpact {
    let daily = daily_impact(device, params).daily();
    let days = elapsed_days(device.install_date, as_of);
    let factor = days as f64;

    CumulativeImpact {
        energy_kwh: daily.energy_kwh * factor,
        kg_avoided: daily.kg_avoided * factor,
        money_saved: daily.money_saved * factor,
        elapsed_days: days,
    }
}

/// Portfolio-level cumulative totals: per-device sums, with `elapsed_days`
/// carrying the longest-installed device's span.
pub fn cumulative_totals(
    devices: &[Device],
    params: &CountryParams,
    as_of: DateTime<Utc>,
) -> CumulativeImpact {
    devices
        .iter()
        .map(|device| cumulative_impact(device, params, as_of))
        .fold(CumulativeImpact::ZERO, |acc, item| CumulativeImpact {
            energy_kwh: acc.energy_kwh + item.energy_kwh,
            kg_avoided: acc.kg_avoided + item.kg_avoided,
            money_saved: acc.money_saved + item.money_saved,
            elapsed_days: acc.elapsed_days.max(item.elapsed_days),
        })
}
