//! Portfolio-level aggregation of device impacts net of the email footprint.

use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use crate::domain::{CountryParams, DailyImpact, Device, EmailProfile};
use crate::impact::calculator::daily_impact;
use crate::impact::email::daily_email_kg;

/// Floor applied to entries of the mix view so that zero-impact categories
/// stay present instead of collapsing out of the share entirely.
pub const MIN_MIX_KG: f64 = 0.001;

/// Label used for the email entry of the breakdown and mix views.
const EMAIL_LABEL: &str = "Email consumption";

/// One device's daily line in the portfolio snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceDaily {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: String,
    #[serde(flatten)]
    pub impact: DailyImpact,
}

/// The portfolio's current daily position: per-device impacts, totals, the
/// email footprint, and the net of the two. Derived on every call and owned
/// by the caller; nothing here is cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSnapshot {
    pub per_device: Vec<DeviceDaily>,
    pub total_money_saved: f64,
    pub total_kg_avoided: f64,
    pub email_kg_per_day: f64,
    pub net_kg_per_day: f64,
}

/// One labelled entry of a breakdown or mix view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareEntry {
    pub label: String,
    pub kg_per_day: f64,
}

/// Aggregate all devices and the email profile into a snapshot.
///
/// Summation is a plain fold over per-device triples, so the totals are
/// order-independent up to floating-point associativity. Devices with an
/// unrecognized type contribute the zero triple and are logged.
pub fn aggregate(
    devices: &[Device],
    email: &EmailProfile,
    params: &CountryParams,
) -> PortfolioSnapshot {
    let mut per_device = Vec::with_capacity(devices.len());
    let mut totals = DailyImpact::ZERO;

    for device in devices {
        let outcome = daily_impact(device, params);
        if !outcome.is_supported() {
            warn!(
                device_id = %device.id,
                name = %device.name,
                "device type not recognized; counting zero impact"
            );
        }
        let impact = outcome.daily();
        totals += impact;
        per_device.push(DeviceDaily {
            id: device.id,
            kind: device.config.type_tag(),
            name: device.name.clone(),
            impact,
        });
    }

    let email_kg_per_day = daily_email_kg(email);

    PortfolioSnapshot {
        per_device,
        total_money_saved: totals.money_saved,
        total_kg_avoided: totals.kg_avoided,
        email_kg_per_day,
        net_kg_per_day: totals.kg_avoided - email_kg_per_day,
    }
}

impl PortfolioSnapshot {
    /// Signed per-source view: email counts negative, each device counts its
    /// (non-negative) avoided kg.
    pub fn breakdown(&self) -> Vec<ShareEntry> {
        let mut entries = Vec::with_capacity(self.per_device.len() + 1);
        entries.push(ShareEntry {
            label: EMAIL_LABEL.to_string(),
            kg_per_day: -self.email_kg_per_day,
        });
        entries.extend(self.per_device.iter().map(|d| ShareEntry {
            label: d.name.clone(),
            kg_per_day: d.impact.kg_avoided,
        }));
        entries
    }

    /// Magnitude-only share view, floored at [`MIN_MIX_KG`] per entry so a
    /// zero-impact category still shows up with a sliver.
    pub fn mix(&self) -> Vec<ShareEntry> {
        let mut entries: Vec<ShareEntry> = self
            .per_device
            .iter()
            .map(|d| ShareEntry {
                label: d.name.clone(),
                kg_per_day: d.impact.kg_avoided.max(MIN_MIX_KG),
            })
            .collect();
        entries.push(ShareEntry {
            label: EMAIL_LABEL.to_string(),
            kg_per_day: self.email_kg_per_day.max(MIN_MIX_KG),
        });
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        CountryCode, DeviceConfig, EvConfig, GeyserConfig, SolarConfig,
    };
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn za() -> &'static CountryParams {
        CountryParams::get(CountryCode::Za)
    }

    fn install_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    fn demo_email() -> EmailProfile {
        EmailProfile {
            emails_per_day: 40.0,
            pct_with_attachments: 0.35,
            base_grams: 4.0,
            attach_grams: 19.0,
        }
    }

    fn sample_devices() -> Vec<Device> {
        vec![
            Device::new(
                "Rooftop PV",
                install_date(),
                DeviceConfig::Solar(SolarConfig {
                    capacity_kw: Some(5.0),
                    insolation: Some(5.5),
                    performance_ratio: Some(0.85),
                    self_consumption: Some(0.8),
                }),
            ),
            Device::new(
                "Daily Driver EV",
                install_date(),
                DeviceConfig::Ev(EvConfig {
                    km_per_day: Some(35.0),
                    ev_kwh_per_km: Some(0.15),
                    ice_kg_per_km: Some(0.192),
                    ice_l_per_100km: Some(7.5),
                }),
            ),
            Device::new(
                "Solar Geyser 200L",
                install_date(),
                DeviceConfig::SolarGeyser(GeyserConfig {
                    tank_litres: Some(200.0),
                    kwh_per_litre_per_day: Some(0.018),
                }),
            ),
        ]
    }

    #[test]
    fn test_snapshot_totals_and_net() {
        let devices = sample_devices();
        let snapshot = aggregate(&devices, &demo_email(), za());

        assert_eq!(snapshot.per_device.len(), 3);
        // Solar 16.83 + EV 1.995 + geyser 3.24 kg/day.
        assert!((snapshot.total_kg_avoided - 22.065).abs() < 1e-9);
        // Solar 56.1 + EV 49.875 + geyser 10.8 per day.
        assert!((snapshot.total_money_saved - 116.775).abs() < 1e-9);
        assert!((snapshot.email_kg_per_day - 0.37).abs() < 1e-9);
        assert!(
            (snapshot.net_kg_per_day - (snapshot.total_kg_avoided - 0.37)).abs() < 1e-9
        );
    }

    #[test]
    fn test_net_can_go_negative() {
        let email = EmailProfile {
            emails_per_day: 1000.0,
            pct_with_attachments: 1.0,
            base_grams: 4.0,
            attach_grams: 19.0,
        };
        let snapshot = aggregate(&[], &email, za());
        assert_eq!(snapshot.total_kg_avoided, 0.0);
        assert!(snapshot.net_kg_per_day < 0.0);
    }

    #[test]
    fn test_unknown_devices_preserve_totals() {
        let devices = sample_devices();
        let mut with_unknown = devices.clone();
        with_unknown.push(Device::new(
            "Mystery box",
            install_date(),
            DeviceConfig::Unknown,
        ));

        let base = aggregate(&devices, &demo_email(), za());
        let extended = aggregate(&with_unknown, &demo_email(), za());
        assert_eq!(extended.per_device.len(), 4);
        assert!((extended.total_kg_avoided - base.total_kg_avoided).abs() < 1e-12);
        assert!((extended.total_money_saved - base.total_money_saved).abs() < 1e-12);
    }

    #[test]
    fn test_breakdown_signs() {
        let snapshot = aggregate(&sample_devices(), &demo_email(), za());
        let breakdown = snapshot.breakdown();
        assert_eq!(breakdown.len(), 4);
        assert_eq!(breakdown[0].label, "Email consumption");
        assert!(breakdown[0].kg_per_day < 0.0);
        assert!(breakdown[1..].iter().all(|e| e.kg_per_day >= 0.0));
    }

    #[test]
    fn test_mix_floors_zero_categories() {
        let devices = vec![Device::new(
            "Empty PV",
            install_date(),
            DeviceConfig::Solar(SolarConfig::default()),
        )];
        let snapshot = aggregate(&devices, &EmailProfile::default(), za());
        let mix = snapshot.mix();
        assert_eq!(mix.len(), 2);
        assert!(mix.iter().all(|e| e.kg_per_day >= MIN_MIX_KG));
    }

    proptest! {
        #[test]
        fn prop_aggregate_is_order_independent(
            order in Just(vec![0usize, 1, 2]).prop_shuffle()
        ) {
            let devices = sample_devices();
            let reordered: Vec<Device> =
                order.iter().map(|&i| devices[i].clone()).collect();
            let a = aggregate(&devices, &demo_email(), za());
            let b = aggregate(&reordered, &demo_email(), za());
            prop_assert!((a.total_kg_avoided - b.total_kg_avoided).abs() < 1e-9);
            prop_assert!((a.total_money_saved - b.total_money_saved).abs() < 1e-9);
            prop_assert!((a.net_kg_per_day - b.net_kg_per_day).abs() < 1e-9);
        }
    }
}
