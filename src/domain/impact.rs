use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// One device's estimated impact over a single day: on-site energy shifted,
/// emissions avoided, and money saved. Money may be negative (an EV that costs
/// more to charge than its fuel baseline); avoided emissions never are.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyImpact {
    pub energy_kwh: f64,
    pub kg_avoided: f64,
    pub money_saved: f64,
}

impl DailyImpact {
    pub const ZERO: DailyImpact = DailyImpact {
        energy_kwh: 0.0,
        kg_avoided: 0.0,
        money_saved: 0.0,
    };
}

impl Add for DailyImpact {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            energy_kwh: self.energy_kwh + rhs.energy_kwh,
            kg_avoided: self.kg_avoided + rhs.kg_avoided,
            money_saved: self.money_saved + rhs.money_saved,
        }
    }
}

impl AddAssign for DailyImpact {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Daily impact extrapolated over the whole days elapsed since install.
///
/// This assumes today's configuration and parameters applied unchanged for
/// every elapsed day; it is an estimate, not a metered history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CumulativeImpact {
    pub energy_kwh: f64,
    pub kg_avoided: f64,
    pub money_saved: f64,
    pub elapsed_days: i64,
}

impl CumulativeImpact {
    pub const ZERO: CumulativeImpact = CumulativeImpact {
        energy_kwh: 0.0,
        kg_avoided: 0.0,
        money_saved: 0.0,
        elapsed_days: 0,
    };
}

/// Outcome of computing a device's daily impact.
///
/// `Unsupported` is the explicit form of the zero-impact fallback for device
/// records with an unrecognized type: aggregation stays total-preserving, but
/// callers can observe and report the skipped device instead of silently
/// absorbing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImpactOutcome {
    Computed(DailyImpact),
    Unsupported,
}

impl ImpactOutcome {
    /// The daily triple, with `Unsupported` resolving to zero.
    pub fn daily(&self) -> DailyImpact {
        match self {
            ImpactOutcome::Computed(impact) => *impact,
            ImpactOutcome::Unsupported => DailyImpact::ZERO,
        }
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, ImpactOutcome::Computed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_impact_sum() {
        let a = DailyImpact {
            energy_kwh: 1.5,
            kg_avoided: 0.5,
            money_saved: 2.0,
        };
        let b = DailyImpact {
            energy_kwh: 0.5,
            kg_avoided: 0.25,
            money_saved: -1.0,
        };
        let sum = a + b;
        assert_eq!(sum.energy_kwh, 2.0);
        assert_eq!(sum.kg_avoided, 0.75);
        assert_eq!(sum.money_saved, 1.0);

        let mut acc = DailyImpact::ZERO;
        acc += a;
        acc += b;
        assert_eq!(acc, sum);
    }

    #[test]
    fn test_unsupported_resolves_to_zero() {
        let outcome = ImpactOutcome::Unsupported;
        assert!(!outcome.is_supported());
        assert_eq!(outcome.daily(), DailyImpact::ZERO);
    }
}
