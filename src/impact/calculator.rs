//! Per-device-type daily impact formulas.
//!
//! All formulas are pure functions of the device configuration and the
//! effective country parameters. Absent or non-finite numeric inputs count as
//! zero at the point of use so no NaN ever reaches an aggregate.

use crate::domain::{
    defaults, CountryParams, DailyImpact, Device, DeviceConfig, EvConfig, GeyserConfig,
    ImpactOutcome, SolarConfig,
};

pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

fn field_or(value: Option<f64>, fallback: f64) -> f64 {
    finite_or_zero(value.unwrap_or(fallback))
}

/// Compute one device's daily impact under the given parameters.
///
/// Devices with an unrecognized type yield [`ImpactOutcome::Unsupported`]
/// rather than an error, so a portfolio with stale records still aggregates.
pub fn daily_impact(device: &Device, params: &CountryParams) -> ImpactOutcome {
    match &device.config {
        DeviceConfig::Solar(cfg) => ImpactOutcome::Computed(solar_daily(cfg, params)),
        DeviceConfig::Ev(cfg) => ImpactOutcome::Computed(ev_daily(cfg, params)),
        DeviceConfig::SolarGeyser(cfg) => ImpactOutcome::Computed(geyser_daily(cfg, params)),
        DeviceConfig::Unknown => ImpactOutcome::Unsupported,
    }
}

/// PV: generation scaled by performance ratio, then by the self-consumption
/// share. Only on-site consumption counts toward savings.
fn solar_daily(cfg: &SolarConfig, params: &CountryParams) -> DailyImpact {
    let capacity_kw = field_or(cfg.capacity_kw, 0.0);
    let insolation = field_or(cfg.insolation, params.solar_yield_kwh_per_kw_per_day);
    let performance_ratio = field_or(cfg.performance_ratio, defaults::PERFORMANCE_RATIO);
    let self_consumption = field_or(cfg.self_consumption, defaults::PV_SELF_CONSUMPTION);

    let daily_gen_kwh = capacity_kw * insolation * performance_ratio;
    let used_on_site_kwh = daily_gen_kwh * self_consumption;

    DailyImpact {
        energy_kwh: used_on_site_kwh,
        kg_avoided: used_on_site_kwh * params.emission_factor_kg_per_kwh,
        money_saved: used_on_site_kwh * params.tariff_per_kwh,
    }
}

/// EV substitution: grid charging versus the combustion baseline.
///
/// Avoided emissions are floored at zero (a dirtier-than-baseline EV avoids
/// nothing); money saved is not floored and goes negative when charging costs
/// exceed the displaced fuel.
fn ev_daily(cfg: &EvConfig, params: &CountryParams) -> DailyImpact {
    let km_per_day = field_or(cfg.km_per_day, 0.0);
    let ev_kwh_per_km = field_or(cfg.ev_kwh_per_km, defaults::EV_KWH_PER_KM);
    let ice_kg_per_km = field_or(cfg.ice_kg_per_km, defaults::ICE_KG_PER_KM);
    let ice_l_per_100km = field_or(cfg.ice_l_per_100km, defaults::ICE_L_PER_100KM);

    let ev_energy_kwh = km_per_day * ev_kwh_per_km;
    let ev_emissions_kg = ev_energy_kwh * params.emission_factor_kg_per_kwh;
    let ice_emissions_kg = km_per_day * ice_kg_per_km;

    let fuel_cost = km_per_day * (ice_l_per_100km / 100.0) * params.fuel_price_per_litre;
    let electricity_cost = ev_energy_kwh * params.tariff_per_kwh;

    DailyImpact {
        energy_kwh: ev_energy_kwh,
        kg_avoided: (ice_emissions_kg - ev_emissions_kg).max(0.0),
        money_saved: fuel_cost - electricity_cost,
    }
}

/// Solar geyser: displaced electric water-heating energy.
fn geyser_daily(cfg: &GeyserConfig, params: &CountryParams) -> DailyImpact {
    let tank_litres = field_or(cfg.tank_litres, 0.0);
    let kwh_per_litre = field_or(
        cfg.kwh_per_litre_per_day,
        defaults::GEYSER_KWH_PER_LITRE_PER_DAY,
    );

    let saved_kwh = tank_litres * kwh_per_litre;

    DailyImpact {
        energy_kwh: saved_kwh,
        kg_avoided: saved_kwh * params.emission_factor_kg_per_kwh,
        money_saved: saved_kwh * params.tariff_per_kwh,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CountryCode;
    use chrono::NaiveDate;
    use rstest::rstest;

    const EPS: f64 = 1e-9;

    fn device(config: DeviceConfig) -> Device {
        Device::new(
            "test device",
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            config,
        )
    }

    fn za() -> &'static CountryParams {
        CountryParams::get(CountryCode::Za)
    }

    #[test]
    fn test_solar_daily_za_scenario() {
        // 5 kW * 5.5 * 0.85 = 23.375 kWh generated, 80% used on-site.
        let d = device(DeviceConfig::Solar(SolarConfig {
            capacity_kw: Some(5.0),
            insolation: Some(5.5),
            performance_ratio: Some(0.85),
            self_consumption: Some(0.8),
        }));
        let impact = daily_impact(&d, za()).daily();
        assert!((impact.energy_kwh - 18.7).abs() < EPS);
        assert!((impact.kg_avoided - 16.83).abs() < EPS);
        assert!((impact.money_saved - 56.1).abs() < EPS);
    }

    #[test]
    fn test_solar_defaults_fill_absent_fields() {
        let d = device(DeviceConfig::Solar(SolarConfig {
            capacity_kw: Some(5.0),
            ..Default::default()
        }));
        // Country insolation 5.5, performance ratio 0.85, self-consumption 0.8.
        let impact = daily_impact(&d, za()).daily();
        assert!((impact.energy_kwh - 5.0 * 5.5 * 0.85 * 0.8).abs() < EPS);
    }

    #[test]
    fn test_ev_daily_za_scenario() {
        let d = device(DeviceConfig::Ev(EvConfig {
            km_per_day: Some(35.0),
            ev_kwh_per_km: Some(0.15),
            ice_kg_per_km: Some(0.192),
            ice_l_per_100km: Some(7.5),
        }));
        let impact = daily_impact(&d, za()).daily();
        assert!((impact.energy_kwh - 5.25).abs() < EPS);
        // ICE 6.72 kg - EV 4.725 kg.
        assert!((impact.kg_avoided - 1.995).abs() < EPS);
        // Fuel 65.625 - electricity 15.75.
        assert!((impact.money_saved - 49.875).abs() < EPS);
    }

    #[test]
    fn test_ev_avoided_kg_floors_at_zero_but_money_can_go_negative() {
        // A thirsty EV on a dirty grid with cheap fuel: emissions worse than
        // the baseline, charging dearer than petrol.
        let d = device(DeviceConfig::Ev(EvConfig {
            km_per_day: Some(50.0),
            ev_kwh_per_km: Some(0.40),
            ice_kg_per_km: Some(0.10),
            ice_l_per_100km: Some(4.0),
        }));
        let impact = daily_impact(&d, za()).daily();
        assert_eq!(impact.kg_avoided, 0.0);
        // Fuel 50*0.04*25 = 50.0, electricity 20*3.0 = 60.0.
        assert!((impact.money_saved - (-10.0)).abs() < EPS);
    }

    #[test]
    fn test_geyser_daily() {
        let d = device(DeviceConfig::SolarGeyser(GeyserConfig {
            tank_litres: Some(200.0),
            kwh_per_litre_per_day: Some(0.018),
        }));
        let impact = daily_impact(&d, za()).daily();
        assert!((impact.energy_kwh - 3.6).abs() < EPS);
        assert!((impact.kg_avoided - 3.24).abs() < EPS);
        assert!((impact.money_saved - 10.8).abs() < EPS);
    }

    #[test]
    fn test_unknown_type_counts_zero_without_error() {
        let d = device(DeviceConfig::Unknown);
        let outcome = daily_impact(&d, za());
        assert!(!outcome.is_supported());
        assert_eq!(outcome.daily(), DailyImpact::ZERO);
    }

    #[rstest]
    #[case::solar(DeviceConfig::Solar(SolarConfig::default()))]
    #[case::ev(DeviceConfig::Ev(EvConfig::default()))]
    #[case::geyser(DeviceConfig::SolarGeyser(GeyserConfig::default()))]
    fn test_empty_configs_yield_zero(#[case] config: DeviceConfig) {
        // With every field absent the driving quantity defaults to zero, so
        // the whole triple must be zero rather than NaN.
        let impact = daily_impact(&device(config), za()).daily();
        assert_eq!(impact.energy_kwh, 0.0);
        assert_eq!(impact.kg_avoided, 0.0);
        assert_eq!(impact.money_saved, 0.0);
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    fn test_non_finite_inputs_count_as_zero(#[case] bad: f64) {
        let d = device(DeviceConfig::Solar(SolarConfig {
            capacity_kw: Some(bad),
            ..Default::default()
        }));
        let impact = daily_impact(&d, za()).daily();
        assert_eq!(impact.energy_kwh, 0.0);
        assert!(impact.kg_avoided.is_finite());
    }
}
