use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Manufacture job joined with its product
#[derive(Debug, Clone, FromRow)]
pub struct JobWithProduct {
    pub manufacture_id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub product_unit: String,
}

/// One entry of the append-only status log, oldest first
#[derive(Debug, Clone, FromRow)]
pub struct ManufactureStatusEntry {
    pub status: String,
    pub date: DateTime<Utc>,
}

/// Material line item joined with the product it references
#[derive(Debug, Clone, FromRow)]
pub struct MaterialWithProduct {
    pub material_id: i32,
    pub quantity: Decimal,
    pub product_id: i32,
    pub product_name: String,
    pub product_unit: String,
}
