//! Shipping Zone Model

use serde::{Deserialize, Serialize};

/// Shipping zone entity — a postcode region sharing one rate table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ShippingZone {
    pub id: i64,
    pub name: String,
    /// Postcode pattern: literal digits plus `x` wildcards, e.g. "2xxx"
    pub postcode_pattern: String,
    pub is_active: bool,
}

/// Create zone payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingZoneCreate {
    pub name: String,
    pub postcode_pattern: String,
}

/// Update zone payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingZoneUpdate {
    pub name: Option<String>,
    pub postcode_pattern: Option<String>,
    pub is_active: Option<bool>,
}
