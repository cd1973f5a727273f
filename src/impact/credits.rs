//! Carbon-credit progress and the static market preview.

use once_cell::sync::Lazy;
use serde::Serialize;

/// Nominal size of one carbon credit in kg CO2e.
pub const TONNE_KG: f64 = 1000.0;

/// Progress toward minting one nominal carbon credit from the current net
/// daily rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CreditProgress {
    /// Net credits accrued per day, in tonnes; negative while the portfolio
    /// emits more than it saves.
    pub daily_credits_t: f64,
    /// Share of one credit accrued per day, clamped to 0-100.
    pub progress_percent: f64,
    /// Whole days until the first full credit at the current rate; `None`
    /// while the net rate is not positive.
    pub days_to_first_credit: Option<u64>,
}

/// Derive credit progress from the net daily kg figure.
pub fn credit_progress(net_kg_per_day: f64) -> CreditProgress {
    let daily_credits_t = net_kg_per_day / TONNE_KG;
    let days_to_first_credit = if daily_credits_t > 0.0 {
        Some((1.0 / daily_credits_t).ceil() as u64)
    } else {
        None
    };

    CreditProgress {
        daily_credits_t,
        progress_percent: (daily_credits_t * 100.0).clamp(0.0, 100.0),
        days_to_first_credit,
    }
}

/// One price level of the demo order book.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrderLevel {
    pub price_per_tonne: f64,
    pub quantity_t: f64,
}

/// Static demonstration order book for the trading preview.
///
/// No matching or order placement happens anywhere in this crate; these
/// levels exist purely so the preview has something to show.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderBookPreview {
    pub bids: Vec<OrderLevel>,
    pub asks: Vec<OrderLevel>,
}

impl OrderBookPreview {
    /// Highest bid, if any.
    pub fn best_bid(&self) -> Option<&OrderLevel> {
        self.bids.first()
    }

    /// Lowest ask, if any.
    pub fn best_ask(&self) -> Option<&OrderLevel> {
        self.asks.first()
    }
}

/// Demo order book levels, best price first.
pub static ORDER_BOOK_PREVIEW: Lazy<OrderBookPreview> = Lazy::new(|| OrderBookPreview {
    bids: vec![
        OrderLevel { price_per_tonne: 7.8, quantity_t: 0.2 },
        OrderLevel { price_per_tonne: 7.5, quantity_t: 0.5 },
        OrderLevel { price_per_tonne: 7.1, quantity_t: 1.0 },
    ],
    asks: vec![
        OrderLevel { price_per_tonne: 8.2, quantity_t: 0.1 },
        OrderLevel { price_per_tonne: 8.6, quantity_t: 0.3 },
        OrderLevel { price_per_tonne: 9.0, quantity_t: 0.7 },
    ],
});
