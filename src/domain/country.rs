use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use thiserror::Error;

/// Returned when a country code is not in the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown country code: {0}")]
pub struct UnknownCountry(pub String);

/// Supported country selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum CountryCode {
    Uk,
    Us,
    Za,
}

/// Economic and physical constants for one country.
///
/// The table is immutable; user-edited tariffs or emission factors travel as
/// overridden copies (see `Portfolio::effective_params`), never as mutations
/// of these rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CountryParams {
    pub code: CountryCode,
    pub name: &'static str,
    pub currency_code: &'static str,
    pub currency_symbol: &'static str,
    pub tariff_per_kwh: f64,
    pub emission_factor_kg_per_kwh: f64,
    pub fuel_price_per_litre: f64,
    pub solar_yield_kwh_per_kw_per_day: f64,
}

const COUNTRIES: [CountryParams; 3] = [
    CountryParams {
        code: CountryCode::Uk,
        name: "United Kingdom",
        currency_code: "GBP",
        currency_symbol: "\u{a3}",
        tariff_per_kwh: 0.30,
        emission_factor_kg_per_kwh: 0.20,
        fuel_price_per_litre: 1.70,
        solar_yield_kwh_per_kw_per_day: 2.7,
    },
    CountryParams {
        code: CountryCode::Us,
        name: "United States",
        currency_code: "USD",
        currency_symbol: "$",
        tariff_per_kwh: 0.16,
        emission_factor_kg_per_kwh: 0.40,
        fuel_price_per_litre: 0.95,
        solar_yield_kwh_per_kw_per_day: 4.0,
    },
    CountryParams {
        code: CountryCode::Za,
        name: "South Africa",
        currency_code: "ZAR",
        currency_symbol: "R",
        tariff_per_kwh: 3.0,
        emission_factor_kg_per_kwh: 0.90,
        fuel_price_per_litre: 25.0,
        solar_yield_kwh_per_kw_per_day: 5.5,
    },
];

impl CountryParams {
    /// Constants for a known country. Infallible once the code is typed.
    pub fn get(code: CountryCode) -> &'static CountryParams {
        match code {
            CountryCode::Uk => &COUNTRIES[0],
            CountryCode::Us => &COUNTRIES[1],
            CountryCode::Za => &COUNTRIES[2],
        }
    }

    /// Registry lookup for untrusted code strings (imports, query params).
    pub fn lookup(code: &str) -> Result<&'static CountryParams, UnknownCountry> {
        code.parse::<CountryCode>()
            .map(Self::get)
            .map_err(|_| UnknownCountry(code.to_string()))
    }

    /// All supported countries in registry order.
    pub fn all() -> &'static [CountryParams] {
        &COUNTRIES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_countries() {
        let za = CountryParams::lookup("ZA").unwrap();
        assert_eq!(za.code, CountryCode::Za);
        assert_eq!(za.currency_code, "ZAR");
        assert_eq!(za.tariff_per_kwh, 3.0);
        assert_eq!(za.emission_factor_kg_per_kwh, 0.90);
        assert_eq!(za.fuel_price_per_litre, 25.0);
        assert_eq!(za.solar_yield_kwh_per_kw_per_day, 5.5);

        assert_eq!(CountryParams::lookup("UK").unwrap().code, CountryCode::Uk);
        assert_eq!(CountryParams::lookup("US").unwrap().code, CountryCode::Us);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(CountryParams::lookup("za").unwrap().code, CountryCode::Za);
        assert_eq!(CountryParams::lookup("uK").unwrap().code, CountryCode::Uk);
    }

    #[test]
    fn test_lookup_unknown_country_fails() {
        let err = CountryParams::lookup("SE").unwrap_err();
        assert_eq!(err, UnknownCountry("SE".to_string()));
    }

    #[test]
    fn test_code_serialization() {
        let json = serde_json::to_string(&CountryCode::Za).unwrap();
        assert_eq!(json, "\"ZA\"");
        let code: CountryCode = serde_json::from_str("\"UK\"").unwrap();
        assert_eq!(code, CountryCode::Uk);
    }

    #[test]
    fn test_all_lists_every_registry_row() {
        let codes: Vec<_> = CountryParams::all().iter().map(|c| c.code).collect();
        assert_eq!(
            codes,
            vec![CountryCode::Uk, CountryCode::Us, CountryCode::Za]
        );
    }
}
