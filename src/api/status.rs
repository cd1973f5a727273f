use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{
    api::{error::ApiError, response::ApiResponse},
    controller::AppState,
    domain::CumulativeImpact,
    impact::{
        credit_progress, CreditProgress, PortfolioSnapshot, ProjectionPoint, ShareEntry,
        DEFAULT_HORIZON_MONTHS,
    },
};

/// Everything the dashboard needs in one call: the daily snapshot, the
/// since-install cumulative totals, credit progress, and the two share views.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    snapshot: PortfolioSnapshot,
    cumulative: CumulativeImpact,
    credit: CreditProgress,
    breakdown: Vec<ShareEntry>,
    mix: Vec<ShareEntry>,
}

/// GET /api/v1/status - Full portfolio position
pub async fn get_status(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<StatusResponse>>, ApiError> {
    let portfolio = state.portfolio.read().await;
    let snapshot = portfolio.snapshot();
    let cumulative = portfolio.cumulative(Utc::now());
    let credit = credit_progress(snapshot.net_kg_per_day);
    let breakdown = snapshot.breakdown();
    let mix = snapshot.mix();

    Ok(Json(ApiResponse::success(StatusResponse {
        snapshot,
        cumulative,
        credit,
        breakdown,
        mix,
    })))
}

/// GET /api/v1/snapshot - Daily aggregates only
pub async fn get_snapshot(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<PortfolioSnapshot>>, ApiError> {
    let snapshot = state.portfolio.read().await.snapshot();
    Ok(Json(ApiResponse::success(snapshot)))
}

#[derive(Debug, Deserialize)]
pub struct ProjectionQuery {
    pub months: Option<u32>,
}

/// Cap on the projection horizon, to keep response sizes sane.
const MAX_HORIZON_MONTHS: u32 = 120;

/// GET /api/v1/projection - Calendar-aware forward series from this month
pub async fn get_projection(
    State(state): State<AppState>,
    Query(query): Query<ProjectionQuery>,
) -> Result<Json<ApiResponse<Vec<ProjectionPoint>>>, ApiError> {
    let months = query.months.unwrap_or(DEFAULT_HORIZON_MONTHS);
    if months > MAX_HORIZON_MONTHS {
        return Err(ApiError::ValidationError(format!(
            "months must be at most {MAX_HORIZON_MONTHS}"
        )));
    }

    let series = state
        .portfolio
        .read()
        .await
        .projection(Utc::now().date_naive(), months);
    let count = series.len();
    Ok(Json(ApiResponse::success(series).with_count(count)))
}
