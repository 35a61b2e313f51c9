//! Shipping Method Model

use serde::{Deserialize, Serialize};

/// Shipping method entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ShippingMethod {
    pub id: i64,
    /// Unique short code, e.g. "STD", "EXP"
    pub code: String,
    pub name: String,
    /// Display string for delivery estimates, e.g. "3-7 business days"
    pub estimated_days: String,
    pub is_active: bool,
}

/// Create method payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingMethodCreate {
    pub code: String,
    pub name: String,
    pub estimated_days: String,
}

/// Update method payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingMethodUpdate {
    pub code: Option<String>,
    pub name: Option<String>,
    pub estimated_days: Option<String>,
    pub is_active: Option<bool>,
}
