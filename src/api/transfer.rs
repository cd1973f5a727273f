use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    api::{error::ApiError, response::ApiResponse},
    controller::AppState,
    portfolio::ImportReport,
};

/// GET /api/v1/export - The complete persisted state, pretty-printed
///
/// Served as a raw JSON document rather than wrapped in the response
/// envelope, so the body can be saved to a file and re-imported as-is.
pub async fn export_state(State(state): State<AppState>) -> Result<Response, ApiError> {
    let json = state.portfolio.read().await.export_json()?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"eco-credits-data.json\"",
            ),
        ],
        json,
    )
        .into_response())
}

/// POST /api/v1/import - Apply a previously exported document
///
/// A malformed payload is rejected whole with no state change; a well-formed
/// but partial one applies field by field, and the report says which fields
/// landed.
pub async fn import_state(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<ApiResponse<ImportReport>>, ApiError> {
    let report = state.portfolio.write().await.import_json(&body)?;

    state.persist().await;
    tracing::info!(applied = ?report.applied, skipped = ?report.skipped, "state imported");
    Ok(Json(ApiResponse::success(report)))
}
