use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    api::{error::ApiError, response::ApiResponse},
    controller::AppState,
    domain::{CumulativeImpact, DailyImpact, Device, DeviceConfig},
    impact::{cumulative_impact, daily_impact},
};

/// One device with its current daily and since-install figures.
#[derive(Debug, Serialize)]
pub struct DeviceEntry {
    #[serde(flatten)]
    device: Device,
    daily: DailyImpact,
    cumulative: CumulativeImpact,
}

/// Request to add a new device. Name and install date are optional; the type
/// tag and config travel exactly as in the persisted format.
#[derive(Debug, Deserialize)]
pub struct AddDeviceRequest {
    name: Option<String>,
    #[serde(rename = "installDate")]
    install_date: Option<NaiveDate>,
    #[serde(flatten)]
    config: DeviceConfig,
}

/// GET /api/v1/devices - List devices with their impact figures
pub async fn list_devices(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<DeviceEntry>>>, ApiError> {
    let portfolio = state.portfolio.read().await;
    let params = portfolio.effective_params();
    let as_of = Utc::now();

    let entries: Vec<DeviceEntry> = portfolio
        .devices
        .iter()
        .map(|device| DeviceEntry {
            device: device.clone(),
            daily: daily_impact(device, &params).daily(),
            cumulative: cumulative_impact(device, &params, as_of),
        })
        .collect();

    let count = entries.len();
    Ok(Json(ApiResponse::success(entries).with_count(count)))
}

/// POST /api/v1/devices - Add a device
pub async fn add_device(
    State(state): State<AppState>,
    Json(request): Json<AddDeviceRequest>,
) -> Result<Json<ApiResponse<DeviceEntry>>, ApiError> {
    if matches!(request.config, DeviceConfig::Unknown) {
        return Err(ApiError::ValidationError(
            "unsupported device type; expected solar, ev, or solar_geyser".to_string(),
        ));
    }

    let name = request
        .name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| request.config.default_name().to_string());
    let install_date = request.install_date.unwrap_or_else(|| Utc::now().date_naive());
    let device = Device::new(name, install_date, request.config);

    let response = {
        let mut portfolio = state.portfolio.write().await;
        let params = portfolio.effective_params();
        let entry = DeviceEntry {
            device: device.clone(),
            daily: daily_impact(&device, &params).daily(),
            cumulative: cumulative_impact(&device, &params, Utc::now()),
        };
        portfolio.add_device(device);
        entry
    };

    state.persist().await;
    tracing::info!(
        device_id = %response.device.id,
        kind = response.device.config.type_tag(),
        "device added"
    );
    Ok(Json(ApiResponse::success(response)))
}

/// DELETE /api/v1/devices/:id - Remove a device
pub async fn delete_device(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let removed = state.portfolio.write().await.remove_device(id);
    if !removed {
        return Err(ApiError::NotFound(format!("Device with ID {id} not found")));
    }

    state.persist().await;
    tracing::info!(device_id = %id, "device removed");
    Ok(Json(ApiResponse::success(())))
}
