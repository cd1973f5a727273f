use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A device in the household portfolio.
///
/// The wire shape is `{id, name, installDate, type, config}` where `config`'s
/// fields are determined by `type`; the two travel together as the
/// adjacently-tagged [`DeviceConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "installDate")]
    pub install_date: NaiveDate,
    #[serde(flatten)]
    pub config: DeviceConfig,
}

impl Device {
    pub fn new(name: impl Into<String>, install_date: NaiveDate, config: DeviceConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            install_date,
            config,
        }
    }
}

/// Type-tagged device configuration.
///
/// Records with a tag outside the supported set deserialize into `Unknown`
/// instead of failing, so a partially-migrated portfolio still loads; such
/// devices always count zero impact (see the impact calculator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "config", rename_all = "snake_case")]
pub enum DeviceConfig {
    Solar(SolarConfig),
    Ev(EvConfig),
    SolarGeyser(GeyserConfig),
    #[serde(other)]
    Unknown,
}

impl DeviceConfig {
    /// The wire tag for this configuration.
    pub fn type_tag(&self) -> &'static str {
        match self {
            DeviceConfig::Solar(_) => "solar",
            DeviceConfig::Ev(_) => "ev",
            DeviceConfig::SolarGeyser(_) => "solar_geyser",
            DeviceConfig::Unknown => "unknown",
        }
    }

    /// Display name used when a device is added without one.
    pub fn default_name(&self) -> &'static str {
        match self {
            DeviceConfig::Solar(_) => "Solar PV",
            DeviceConfig::Ev(_) => "Electric Vehicle",
            DeviceConfig::SolarGeyser(_) => "Solar Geyser",
            DeviceConfig::Unknown => "Unknown Device",
        }
    }
}

/// Rooftop PV configuration. Absent fields fall back to the country's solar
/// yield and the global performance-ratio / self-consumption defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SolarConfig {
    #[serde(rename = "capacityKW", default, skip_serializing_if = "Option::is_none")]
    pub capacity_kw: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insolation: Option<f64>,
    #[serde(
        rename = "performanceRatio",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub performance_ratio: Option<f64>,
    #[serde(
        rename = "selfConsumption",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub self_consumption: Option<f64>,
}

/// EV-substitution configuration: daily driving displaced from a combustion
/// baseline onto grid electricity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EvConfig {
    #[serde(rename = "kmPerDay", default, skip_serializing_if = "Option::is_none")]
    pub km_per_day: Option<f64>,
    #[serde(rename = "evKWhPerKm", default, skip_serializing_if = "Option::is_none")]
    pub ev_kwh_per_km: Option<f64>,
    #[serde(rename = "iceKgPerKm", default, skip_serializing_if = "Option::is_none")]
    pub ice_kg_per_km: Option<f64>,
    #[serde(
        rename = "iceLPer100km",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ice_l_per_100km: Option<f64>,
}

/// Solar water-heater configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeyserConfig {
    #[serde(rename = "tankLitres", default, skip_serializing_if = "Option::is_none")]
    pub tank_litres: Option<f64>,
    #[serde(
        rename = "kWhPerLitrePerDay",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub kwh_per_litre_per_day: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_device_wire_shape() {
        let device = Device::new(
            "Rooftop PV",
            date(2025, 4, 1),
            DeviceConfig::Solar(SolarConfig {
                capacity_kw: Some(5.0),
                insolation: Some(5.5),
                performance_ratio: Some(0.85),
                self_consumption: Some(0.8),
            }),
        );

        let json = serde_json::to_value(&device).unwrap();
        assert_eq!(json["type"], "solar");
        assert_eq!(json["installDate"], "2025-04-01");
        assert_eq!(json["config"]["capacityKW"], 5.0);
        assert_eq!(json["config"]["performanceRatio"], 0.85);
        assert_eq!(json["config"]["selfConsumption"], 0.8);

        let back: Device = serde_json::from_value(json).unwrap();
        assert_eq!(back, device);
    }

    #[test]
    fn test_ev_config_keys() {
        let json = serde_json::json!({
            "id": "2c18b0b4-7471-4fb5-9f27-3f9f1b2c6d3e",
            "name": "Daily Driver EV",
            "installDate": "2025-06-01",
            "type": "ev",
            "config": { "kmPerDay": 35, "evKWhPerKm": 0.15,
                        "iceKgPerKm": 0.192, "iceLPer100km": 7.5 }
        });
        let device: Device = serde_json::from_value(json).unwrap();
        match device.config {
            DeviceConfig::Ev(cfg) => {
                assert_eq!(cfg.km_per_day, Some(35.0));
                assert_eq!(cfg.ice_l_per_100km, Some(7.5));
            }
            other => panic!("expected ev config, got {other:?}"),
        }
    }

    #[test]
    fn test_partial_config_tolerated() {
        let json = serde_json::json!({
            "id": "2c18b0b4-7471-4fb5-9f27-3f9f1b2c6d3e",
            "name": "Geyser",
            "installDate": "2025-06-01",
            "type": "solar_geyser",
            "config": { "tankLitres": 200 }
        });
        let device: Device = serde_json::from_value(json).unwrap();
        match device.config {
            DeviceConfig::SolarGeyser(cfg) => {
                assert_eq!(cfg.tank_litres, Some(200.0));
                assert_eq!(cfg.kwh_per_litre_per_day, None);
            }
            other => panic!("expected geyser config, got {other:?}"),
        }
    }

    #[test]
    fn test_unrecognized_type_becomes_unknown() {
        let json = serde_json::json!({
            "id": "2c18b0b4-7471-4fb5-9f27-3f9f1b2c6d3e",
            "name": "Heat pump",
            "installDate": "2025-06-01",
            "type": "heat_pump",
            "config": { "copFactor": 3.5 }
        });
        let device: Device = serde_json::from_value(json).unwrap();
        assert_eq!(device.config, DeviceConfig::Unknown);
        assert_eq!(device.config.type_tag(), "unknown");
    }
}
