//! Import/export of the persisted portfolio state.
//!
//! Export always emits the complete, pretty-printed object; import tolerates
//! partial objects field by field, but rejects syntactically invalid payloads
//! outright without touching existing state.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::domain::{CountryCode, Device, EmailProfile};
use crate::portfolio::Portfolio;

/// Version stamped into every export and validated on import.
pub const SCHEMA_VERSION: u64 = 1;

/// A rejected import. No portfolio state changes when one of these is
/// returned; field-level problems inside a well-formed payload are tolerated
/// instead (see [`ImportReport`]).
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("import payload is not valid JSON: {0}")]
    InvalidSyntax(String),
    #[error("import payload must be a JSON object")]
    NotAnObject,
    #[error("unsupported schema version {found} (expected {SCHEMA_VERSION})")]
    UnsupportedVersion { found: u64 },
}

/// Which top-level fields an import applied and which it skipped as absent or
/// invalid.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub applied: Vec<&'static str>,
    pub skipped: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
struct ExportedState<'a> {
    version: u64,
    country: CountryCode,
    devices: &'a [Device],
    #[serde(rename = "emailCfg")]
    email_cfg: &'a EmailProfile,
    tariff: f64,
    #[serde(rename = "emissionFactor")]
    emission_factor: f64,
}

impl Portfolio {
    /// The complete persisted state as pretty-printed JSON. Importing the
    /// result into any portfolio reproduces an equivalent snapshot.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&ExportedState {
            version: SCHEMA_VERSION,
            country: self.country,
            devices: &self.devices,
            email_cfg: &self.email,
            tariff: self.tariff_per_kwh,
            emission_factor: self.emission_factor_kg_per_kwh,
        })
    }

    /// Apply a persisted-state payload field by field.
    ///
    /// The country applies before the tariff and emission factor so that an
    /// explicit override in the payload survives the country-switch reset.
    pub fn import_json(&mut self, payload: &str) -> Result<ImportReport, ImportError> {
        let value: Value = serde_json::from_str(payload)
            .map_err(|e| ImportError::InvalidSyntax(e.to_string()))?;
        let obj = value.as_object().ok_or(ImportError::NotAnObject)?;

        if let Some(version) = obj.get("version") {
            match version.as_u64() {
                Some(SCHEMA_VERSION) => {}
                found => {
                    return Err(ImportError::UnsupportedVersion {
                        found: found.unwrap_or(0),
                    })
                }
            }
        }

        let mut report = ImportReport::default();

        if let Some(v) = obj.get("country") {
            match serde_json::from_value::<CountryCode>(v.clone()) {
                Ok(country) => {
                    self.set_country(country);
                    report.applied.push("country");
                }
                Err(err) => {
                    warn!(%err, "import: ignoring invalid country");
                    report.skipped.push("country");
                }
            }
        }

        if let Some(v) = obj.get("devices") {
            match serde_json::from_value::<Vec<Device>>(v.clone()) {
                Ok(devices) => {
                    self.devices = devices;
                    report.applied.push("devices");
                }
                Err(err) => {
                    warn!(%err, "import: ignoring invalid devices list");
                    report.skipped.push("devices");
                }
            }
        }

        if let Some(v) = obj.get("emailCfg") {
            match serde_json::from_value::<EmailProfile>(v.clone()) {
                Ok(email) => {
                    self.email = email;
                    report.applied.push("emailCfg");
                }
                Err(err) => {
                    warn!(%err, "import: ignoring invalid email profile");
                    report.skipped.push("emailCfg");
                }
            }
        }

        if let Some(v) = obj.get("tariff") {
            match v.as_f64().filter(|t| t.is_finite()) {
                Some(tariff) => {
                    self.tariff_per_kwh = tariff;
                    report.applied.push("tariff");
                }
                None => {
                    warn!("import: ignoring non-numeric tariff");
                    report.skipped.push("tariff");
                }
            }
        }

        if let Some(v) = obj.get("emissionFactor") {
            match v.as_f64().filter(|f| f.is_finite()) {
                Some(factor) => {
                    self.emission_factor_kg_per_kwh = factor;
                    report.applied.push("emissionFactor");
                }
                None => {
                    warn!("import: ignoring non-numeric emission factor");
                    report.skipped.push("emissionFactor");
                }
            }
        }

        Ok(report)
    }
}
