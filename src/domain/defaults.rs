//! Global fallback constants applied when a device or email config omits a
//! field. Country-specific fallbacks (solar insolation) live in the country
//! registry instead.

/// PV system performance ratio (inverter, wiring, soiling losses).
pub const PERFORMANCE_RATIO: f64 = 0.85;

/// Share of PV generation consumed on-site rather than exported.
pub const PV_SELF_CONSUMPTION: f64 = 0.8;

/// EV drivetrain consumption in kWh per km.
pub const EV_KWH_PER_KM: f64 = 0.15;

/// Tailpipe emissions of the displaced combustion car in kg CO2e per km.
pub const ICE_KG_PER_KM: f64 = 0.192;

/// Fuel economy of the displaced combustion car in litres per 100 km.
pub const ICE_L_PER_100KM: f64 = 7.5;

/// Electric geyser energy displaced per litre of tank volume per day.
pub const GEYSER_KWH_PER_LITRE_PER_DAY: f64 = 0.018;

/// Footprint of a plain email in grams CO2e.
pub const EMAIL_BASE_GRAMS: f64 = 4.0;

/// Footprint of an email carrying an attachment in grams CO2e.
pub const EMAIL_ATTACH_GRAMS: f64 = 19.0;
