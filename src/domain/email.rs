use serde::{Deserialize, Serialize};

use crate::domain::defaults;

/// Daily email activity, the portfolio's offsetting footprint.
///
/// Grams-per-email figures default to the published estimates for plain and
/// attachment-carrying mail; volume and attachment share default to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmailProfile {
    #[serde(rename = "emailsPerDay", default)]
    pub emails_per_day: f64,
    #[serde(rename = "pctWithAttachments", default)]
    pub pct_with_attachments: f64,
    #[serde(rename = "baseGrams", default = "default_base_grams")]
    pub base_grams: f64,
    #[serde(rename = "attachGrams", default = "default_attach_grams")]
    pub attach_grams: f64,
}

fn default_base_grams() -> f64 {
    defaults::EMAIL_BASE_GRAMS
}

fn default_attach_grams() -> f64 {
    defaults::EMAIL_ATTACH_GRAMS
}

impl Default for EmailProfile {
    fn default() -> Self {
        Self {
            emails_per_day: 0.0,
            pct_with_attachments: 0.0,
            base_grams: defaults::EMAIL_BASE_GRAMS,
            attach_grams: defaults::EMAIL_ATTACH_GRAMS,
        }
    }
}
