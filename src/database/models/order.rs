use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Order summary row joined with its most recent status-history entry.
/// Monetary columns are NUMERIC and decode into exact decimals; weight is a
/// physical measure and stays floating-point.
#[derive(Debug, Clone, FromRow)]
pub struct OrderSummaryRow {
    pub order_id: i32,
    pub order_type: String,
    pub total_weight: f64,
    pub total_sales: Decimal,
    pub total_shipping: Decimal,
    pub total_tax: Decimal,
    pub sub_total: Decimal,
    pub user_fullname: String,
    pub supplier_name: String,
    pub last_status: Option<String>,
    pub last_status_date: Option<DateTime<Utc>>,
    pub modified_date: DateTime<Utc>,
}
