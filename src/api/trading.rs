use axum::{extract::State, Json};
use serde::Serialize;

use crate::{
    api::{error::ApiError, response::ApiResponse},
    controller::AppState,
    impact::{credit_progress, CreditProgress, OrderBookPreview, OrderLevel, ORDER_BOOK_PREVIEW},
};

/// Static market preview plus the portfolio's current credit accrual. The
/// order book is demonstration data; nothing here places or matches orders.
#[derive(Debug, Serialize)]
pub struct TradingPreviewResponse {
    credit: CreditProgress,
    best_bid: Option<OrderLevel>,
    best_ask: Option<OrderLevel>,
    order_book: OrderBookPreview,
}

/// GET /api/v1/trading/preview
pub async fn get_trading_preview(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<TradingPreviewResponse>>, ApiError> {
    let net_kg_per_day = state.portfolio.read().await.snapshot().net_kg_per_day;
    let book = ORDER_BOOK_PREVIEW.clone();

    Ok(Json(ApiResponse::success(TradingPreviewResponse {
        credit: credit_progress(net_kg_per_day),
        best_bid: book.best_bid().copied(),
        best_ask: book.best_ask().copied(),
        order_book: book,
    })))
}
