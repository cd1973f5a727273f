pub mod aggregate;
pub mod calculator;
pub mod credits;
pub mod cumulative;
pub mod email;
pub mod projection;

pub use aggregate::{aggregate, DeviceDaily, PortfolioSnapshot, ShareEntry, MIN_MIX_KG};
pub use calculator::daily_impact;
pub use credits::{
    credit_progress, CreditProgress, OrderBookPreview, OrderLevel, ORDER_BOOK_PREVIEW, TONNE_KG,
};
pub use cumulative::{cumulative_impact, cumulative_totals};
pub use email::daily_email_kg;
pub use projection::{days_in_month, project, ProjectionPoint, DEFAULT_HORIZON_MONTHS};
