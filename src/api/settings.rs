use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    api::{error::ApiError, response::ApiResponse},
    controller::AppState,
    domain::{CountryCode, CountryParams},
};

/// Current economic settings: the selected country plus the user-editable
/// tariff and emission factor (which may differ from the country defaults).
#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    country: CountryCode,
    tariff: f64,
    #[serde(rename = "emissionFactor")]
    emission_factor: f64,
    defaults: &'static CountryParams,
}

/// Partial settings update.
///
/// When `country` is present it applies first and resets the tariff and
/// emission factor to the new country's defaults; values also present in the
/// same request then override the reset.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSettingsRequest {
    country: Option<String>,
    #[validate(range(min = 0.0))]
    tariff: Option<f64>,
    #[serde(rename = "emissionFactor")]
    #[validate(range(min = 0.0))]
    emission_factor: Option<f64>,
}

/// GET /api/v1/settings
pub async fn get_settings(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<SettingsResponse>>, ApiError> {
    let portfolio = state.portfolio.read().await;
    Ok(Json(ApiResponse::success(SettingsResponse {
        country: portfolio.country,
        tariff: portfolio.tariff_per_kwh,
        emission_factor: portfolio.emission_factor_kg_per_kwh,
        defaults: CountryParams::get(portfolio.country),
    })))
}

/// PUT /api/v1/settings
pub async fn update_settings(
    State(state): State<AppState>,
    Json(request): Json<UpdateSettingsRequest>,
) -> Result<Json<ApiResponse<SettingsResponse>>, ApiError> {
    request.validate()?;

    let country = match &request.country {
        Some(code) => Some(CountryParams::lookup(code)?.code),
        None => None,
    };

    let response = {
        let mut portfolio = state.portfolio.write().await;
        if let Some(country) = country {
            portfolio.set_country(country);
        }
        if let Some(tariff) = request.tariff {
            portfolio.tariff_per_kwh = tariff;
        }
        if let Some(factor) = request.emission_factor {
            portfolio.emission_factor_kg_per_kwh = factor;
        }
        SettingsResponse {
            country: portfolio.country,
            tariff: portfolio.tariff_per_kwh,
            emission_factor: portfolio.emission_factor_kg_per_kwh,
            defaults: CountryParams::get(portfolio.country),
        }
    };

    state.persist().await;
    Ok(Json(ApiResponse::success(response)))
}

/// GET /api/v1/countries - The supported country registry
pub async fn list_countries(
    State(_state): State<AppState>,
) -> Result<Json<ApiResponse<&'static [CountryParams]>>, ApiError> {
    let countries = CountryParams::all();
    Ok(Json(ApiResponse::success(countries).with_count(countries.len())))
}
