use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::api::{devices, email, health, settings, status, trading, transfer};
use crate::controller::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/status", get(status::get_status))
        .route("/snapshot", get(status::get_snapshot))
        .route("/projection", get(status::get_projection))
        .route(
            "/devices",
            get(devices::list_devices).post(devices::add_device),
        )
        .route("/devices/:id", delete(devices::delete_device))
        .route("/email", get(email::get_email).put(email::update_email))
        .route(
            "/settings",
            get(settings::get_settings).put(settings::update_settings),
        )
        .route("/countries", get(settings::list_countries))
        .route("/export", get(transfer::export_state))
        .route("/import", post(transfer::import_state))
        .route("/trading/preview", get(trading::get_trading_preview))
        .route("/healthz", get(health::healthz))
        .with_state(state)
}
