//! Shipping Rate Model

use serde::{Deserialize, Serialize};

/// Shipping rate entity — a weight tier with a flat price for one
/// zone + method pair
///
/// Weight ranges are inclusive at both ends; `max_weight_g = None` means
/// unbounded. For a given zone + method the tiers are expected to be
/// contiguous and non-overlapping, but this is not enforced at write time:
/// resolution is first-match in ascending `min_weight_g` order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ShippingRate {
    pub id: i64,
    pub zone_id: i64,
    pub method_id: i64,
    /// Lower bound in grams (inclusive)
    pub min_weight_g: i64,
    /// Upper bound in grams (inclusive); None = unbounded
    pub max_weight_g: Option<i64>,
    /// Price in cents
    pub price_cents: i64,
    pub currency: String,
    pub is_active: bool,
}

/// Create rate payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingRateCreate {
    pub zone_id: i64,
    pub method_id: i64,
    pub min_weight_g: i64,
    pub max_weight_g: Option<i64>,
    pub price_cents: i64,
    pub currency: Option<String>,
}

/// Update rate payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingRateUpdate {
    pub zone_id: Option<i64>,
    pub method_id: Option<i64>,
    pub min_weight_g: Option<i64>,
    pub max_weight_g: Option<i64>,
    pub price_cents: Option<i64>,
    pub currency: Option<String>,
    pub is_active: Option<bool>,
}
