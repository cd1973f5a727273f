use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    api::{error::ApiError, response::ApiResponse},
    controller::AppState,
    domain::EmailProfile,
    impact::daily_email_kg,
};

/// The email profile together with the footprint it currently implies.
#[derive(Debug, Serialize)]
pub struct EmailResponse {
    profile: EmailProfile,
    daily_kg: f64,
}

/// Partial email profile update. Absent fields keep their current values.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateEmailRequest {
    #[serde(rename = "emailsPerDay")]
    #[validate(range(min = 0.0))]
    emails_per_day: Option<f64>,
    #[serde(rename = "pctWithAttachments")]
    #[validate(range(min = 0.0, max = 1.0))]
    pct_with_attachments: Option<f64>,
    #[serde(rename = "baseGrams")]
    #[validate(range(min = 0.0))]
    base_grams: Option<f64>,
    #[serde(rename = "attachGrams")]
    #[validate(range(min = 0.0))]
    attach_grams: Option<f64>,
}

/// GET /api/v1/email
pub async fn get_email(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<EmailResponse>>, ApiError> {
    let profile = state.portfolio.read().await.email;
    Ok(Json(ApiResponse::success(EmailResponse {
        daily_kg: daily_email_kg(&profile),
        profile,
    })))
}

/// PUT /api/v1/email
pub async fn update_email(
    State(state): State<AppState>,
    Json(request): Json<UpdateEmailRequest>,
) -> Result<Json<ApiResponse<EmailResponse>>, ApiError> {
    request.validate()?;

    let profile = {
        let mut portfolio = state.portfolio.write().await;
        let mut profile = portfolio.email;
        if let Some(n) = request.emails_per_day {
            profile.emails_per_day = n;
        }
        if let Some(p) = request.pct_with_attachments {
            profile.pct_with_attachments = p;
        }
        if let Some(g) = request.base_grams {
            profile.base_grams = g;
        }
        if let Some(g) = request.attach_grams {
            profile.attach_grams = g;
        }
        portfolio.set_email(profile);
        profile
    };

    state.persist().await;
    Ok(Json(ApiResponse::success(EmailResponse {
        daily_kg: daily_email_kg(&profile),
        profile,
    })))
}
