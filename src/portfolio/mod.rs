//! The mutable input set the impact engine computes over: country selection,
//! device list, email profile, and the user-editable tariff and emission
//! factor. All derived figures (snapshots, cumulatives, projections) are
//! recomputed from this state on demand; nothing is cached.

pub mod transfer;

pub use transfer::{ImportError, ImportReport, SCHEMA_VERSION};

use chrono::{DateTime, Months, NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::{
    CountryCode, CountryParams, CumulativeImpact, Device, DeviceConfig, EmailProfile, EvConfig,
    GeyserConfig, SolarConfig,
};
use crate::impact::{
    aggregate, cumulative_totals, project, PortfolioSnapshot, ProjectionPoint,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Portfolio {
    pub country: CountryCode,
    pub devices: Vec<Device>,
    pub email: EmailProfile,
    pub tariff_per_kwh: f64,
    pub emission_factor_kg_per_kwh: f64,
}

impl Portfolio {
    /// An empty portfolio on the given country's default parameters.
    pub fn new(country: CountryCode) -> Self {
        let params = CountryParams::get(country);
        Self {
            country,
            devices: Vec::new(),
            email: EmailProfile::default(),
            tariff_per_kwh: params.tariff_per_kwh,
            emission_factor_kg_per_kwh: params.emission_factor_kg_per_kwh,
        }
    }

    /// A starter portfolio: rooftop PV, a daily-driver EV, and a 200 L solar
    /// geyser with staggered install dates, plus a typical email profile.
    pub fn demo(country: CountryCode, today: NaiveDate) -> Self {
        let params = CountryParams::get(country);
        let months_ago =
            |n: u32| today.checked_sub_months(Months::new(n)).unwrap_or(today);

        let mut portfolio = Self::new(country);
        portfolio.devices = vec![
            Device::new(
                "Rooftop PV",
                months_ago(4),
                DeviceConfig::Solar(SolarConfig {
                    capacity_kw: Some(5.0),
                    insolation: Some(params.solar_yield_kwh_per_kw_per_day),
                    performance_ratio: Some(crate::domain::defaults::PERFORMANCE_RATIO),
                    self_consumption: Some(crate::domain::defaults::PV_SELF_CONSUMPTION),
                }),
            ),
            Device::new(
                "Daily Driver EV",
                months_ago(2),
                DeviceConfig::Ev(EvConfig {
                    km_per_day: Some(35.0),
                    ev_kwh_per_km: Some(crate::domain::defaults::EV_KWH_PER_KM),
                    ice_kg_per_km: Some(crate::domain::defaults::ICE_KG_PER_KM),
                    ice_l_per_100km: Some(crate::domain::defaults::ICE_L_PER_100KM),
                }),
            ),
            Device::new(
                "Solar Geyser 200L",
                months_ago(1),
                DeviceConfig::SolarGeyser(GeyserConfig {
                    tank_litres: Some(200.0),
                    kwh_per_litre_per_day: Some(
                        crate::domain::defaults::GEYSER_KWH_PER_LITRE_PER_DAY,
                    ),
                }),
            ),
        ];
        portfolio.email = EmailProfile {
            emails_per_day: 40.0,
            pct_with_attachments: 0.35,
            ..EmailProfile::default()
        };
        portfolio
    }

    /// The selected country's constants with the portfolio's tariff and
    /// emission factor substituted - the only form in which user overrides
    /// reach the calculators.
    pub fn effective_params(&self) -> CountryParams {
        let mut params = *CountryParams::get(self.country);
        params.tariff_per_kwh = self.tariff_per_kwh;
        params.emission_factor_kg_per_kwh = self.emission_factor_kg_per_kwh;
        params
    }

    /// Switch country. Contract: the tariff and emission factor reset to the
    /// new country's defaults; re-apply overrides afterwards if they should
    /// survive the switch.
    pub fn set_country(&mut self, country: CountryCode) {
        let params = CountryParams::get(country);
        self.country = country;
        self.tariff_per_kwh = params.tariff_per_kwh;
        self.emission_factor_kg_per_kwh = params.emission_factor_kg_per_kwh;
    }

    /// Newest devices list first.
    pub fn add_device(&mut self, device: Device) {
        self.devices.insert(0, device);
    }

    /// Returns false when no device carried the id.
    pub fn remove_device(&mut self, id: Uuid) -> bool {
        let before = self.devices.len();
        self.devices.retain(|d| d.id != id);
        self.devices.len() < before
    }

    pub fn set_email(&mut self, email: EmailProfile) {
        self.email = email;
    }

    pub fn snapshot(&self) -> PortfolioSnapshot {
        aggregate(&self.devices, &self.email, &self.effective_params())
    }

    pub fn cumulative(&self, as_of: DateTime<Utc>) -> CumulativeImpact {
        cumulative_totals(&self.devices, &self.effective_params(), as_of)
    }

    pub fn projection(&self, start: NaiveDate, horizon_months: u32) -> Vec<ProjectionPoint> {
        project(&self.snapshot(), start, horizon_months)
    }
}
