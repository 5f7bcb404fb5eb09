//! Wire-format DTOs. Every entity leaves the service through one of these
//! projections; persisted rows are never serialized directly. Enumerated
//! fields serialize as their symbolic name for stability across versions.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::database::models::{
    JobWithProduct, ManufactureStatusEntry, MaterialWithProduct, OrderSummaryRow, User,
};
use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    SuperAdmin,
    User,
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SuperAdmin" => Ok(UserRole::SuperAdmin),
            "User" => Ok(UserRole::User),
            other => Err(format!("unknown user role: {}", other)),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::SuperAdmin => write!(f, "SuperAdmin"),
            UserRole::User => write!(f, "User"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    Purchase,
    Sales,
}

impl FromStr for OrderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Purchase" => Ok(OrderType::Purchase),
            "Sales" => Ok(OrderType::Sales),
            other => Err(format!("unknown order type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileDto {
    pub user_id: i32,
    pub full_name: String,
    pub username: String,
    pub role: UserRole,
}

impl UserProfileDto {
    pub fn from_row(user: &User) -> Result<Self, ApiError> {
        let role = UserRole::from_str(&user.role).map_err(|e| {
            tracing::error!("User {} has invalid role column: {}", user.user_id, e);
            ApiError::internal_server_error("An error occurred while processing your request")
        })?;

        Ok(Self {
            user_id: user.user_id,
            full_name: user.full_name.clone(),
            username: user.username.clone(),
            role,
        })
    }
}

/// Payload returned by a successful login
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    pub token: String,
    pub expires_in: i64,
    pub profile: UserProfileDto,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub product_id: i32,
    pub name: String,
    pub unit: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusEntryDto {
    pub status: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialDto {
    pub material_id: i32,
    pub quantity: Decimal,
    pub product: ProductDto,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManufactureJobDto {
    pub manufacture_id: i32,
    pub product: ProductDto,
    pub status_history: Vec<StatusEntryDto>,
    pub materials: Vec<MaterialDto>,
}

impl ManufactureJobDto {
    pub fn from_rows(
        job: &JobWithProduct,
        history: &[ManufactureStatusEntry],
        materials: &[MaterialWithProduct],
    ) -> Self {
        Self {
            manufacture_id: job.manufacture_id,
            product: ProductDto {
                product_id: job.product_id,
                name: job.product_name.clone(),
                unit: job.product_unit.clone(),
            },
            status_history: history
                .iter()
                .map(|entry| StatusEntryDto {
                    status: entry.status.clone(),
                    date: entry.date,
                })
                .collect(),
            materials: materials
                .iter()
                .map(|material| MaterialDto {
                    material_id: material.material_id,
                    quantity: material.quantity,
                    product: ProductDto {
                        product_id: material.product_id,
                        name: material.product_name.clone(),
                        unit: material.product_unit.clone(),
                    },
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusDto {
    pub status: String,
    pub date: DateTime<Utc>,
}

/// Flat order summary, mirroring the shape trading clients consume
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleOrderDto {
    pub order_id: i32,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub total_weight: f64,
    pub total_sales: Decimal,
    pub total_shipping: Decimal,
    pub total_tax: Decimal,
    pub sub_total: Decimal,
    pub user_fullname: String,
    pub supplier_name: String,
    pub last_status: Option<OrderStatusDto>,
    pub modified_date: DateTime<Utc>,
}

impl SimpleOrderDto {
    pub fn from_row(row: &OrderSummaryRow) -> Result<Self, ApiError> {
        let order_type = OrderType::from_str(&row.order_type).map_err(|e| {
            tracing::error!("Order {} has invalid type column: {}", row.order_id, e);
            ApiError::internal_server_error("An error occurred while processing your request")
        })?;

        let last_status = match (&row.last_status, row.last_status_date) {
            (Some(status), Some(date)) => Some(OrderStatusDto {
                status: status.clone(),
                date,
            }),
            _ => None,
        };

        Ok(Self {
            order_id: row.order_id,
            order_type,
            total_weight: row.total_weight,
            total_sales: row.total_sales,
            total_shipping: row.total_shipping,
            total_tax: row.total_tax,
            sub_total: row.sub_total,
            user_fullname: row.user_fullname.clone(),
            supplier_name: row.supplier_name.clone(),
            last_status,
            modified_date: row.modified_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_serialize_as_symbolic_names() {
        let user = User {
            user_id: 7,
            full_name: "Alice A".into(),
            username: "alice".into(),
            password_hash: "$argon2id$...".into(),
            role: "SuperAdmin".into(),
        };
        let dto = UserProfileDto::from_row(&user).expect("dto");
        let json = serde_json::to_value(&dto).expect("json");

        assert_eq!(json["userId"], 7);
        assert_eq!(json["fullName"], "Alice A");
        assert_eq!(json["role"], "SuperAdmin");
        assert!(json.get("passwordHash").is_none());
    }

    #[test]
    fn unknown_role_is_an_internal_error() {
        let user = User {
            user_id: 1,
            full_name: "B".into(),
            username: "b".into(),
            password_hash: String::new(),
            role: "Wizard".into(),
        };
        let err = UserProfileDto::from_row(&user).unwrap_err();
        assert!(err.is_internal());
    }

    #[test]
    fn order_type_serializes_by_name_and_decimals_are_exact() {
        let row = OrderSummaryRow {
            order_id: 3,
            order_type: "Sales".into(),
            total_weight: 12.5,
            total_sales: Decimal::new(199999, 2), // 1999.99
            total_shipping: Decimal::new(1500, 2),
            total_tax: Decimal::new(11000, 2),
            sub_total: Decimal::new(212499, 2),
            user_fullname: "Alice A".into(),
            supplier_name: "Acme Steel".into(),
            last_status: Some("Shipped".into()),
            last_status_date: Some(Utc::now()),
            modified_date: Utc::now(),
        };
        let dto = SimpleOrderDto::from_row(&row).expect("dto");
        let json = serde_json::to_value(&dto).expect("json");

        assert_eq!(json["type"], "Sales");
        assert_eq!(json["totalSales"], "1999.99");
        assert_eq!(json["lastStatus"]["status"], "Shipped");
    }

    #[test]
    fn manufacture_dto_keeps_all_materials() {
        let job = JobWithProduct {
            manufacture_id: 5,
            product_id: 9,
            product_name: "Steel Door".into(),
            product_unit: "pcs".into(),
        };
        let history = vec![ManufactureStatusEntry {
            status: "Queued".into(),
            date: Utc::now(),
        }];
        let materials = vec![
            MaterialWithProduct {
                material_id: 1,
                quantity: Decimal::new(25, 1),
                product_id: 11,
                product_name: "Sheet".into(),
                product_unit: "kg".into(),
            },
            MaterialWithProduct {
                material_id: 2,
                quantity: Decimal::new(4, 0),
                product_id: 12,
                product_name: "Hinge".into(),
                product_unit: "pcs".into(),
            },
        ];

        let dto = ManufactureJobDto::from_rows(&job, &history, &materials);
        assert_eq!(dto.materials.len(), 2);
        assert_eq!(dto.status_history.len(), 1);
        assert_eq!(dto.product.name, "Steel Door");
        assert_eq!(dto.materials[1].product.name, "Hinge");
    }
}
