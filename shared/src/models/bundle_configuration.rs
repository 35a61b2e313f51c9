//! Bundle Configuration Model

use serde::{Deserialize, Serialize};

/// Weight-compatibility classification snapshot
///
/// Derived from the configuration's total weight and stored alongside the
/// totals so historical records keep the label they were sold under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightCompatibility {
    /// Tier label, e.g. "<5kg"
    pub threshold: String,
    /// Human-readable description, e.g. "Day-pack compatible"
    pub description: String,
    pub compatible: bool,
}

/// Bundle configuration entity — a priced selection of a bundle's options
///
/// Totals and `weight_compatibility` are derived: recomputed and
/// overwritten on every create/update, never independently editable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct BundleConfiguration {
    pub id: i64,
    pub bundle_id: i64,
    /// Owning user; None for guest-created configurations
    pub user_id: Option<i64>,
    /// Optional label given by the user
    pub name: Option<String>,
    /// Option key → bool, plus "solar_panel_size" → "10W" | "15W" | "20W"
    #[cfg_attr(feature = "db", sqlx(json))]
    pub configuration_data: serde_json::Map<String, serde_json::Value>,
    pub total_price_cents: i64,
    pub total_weight_g: i64,
    /// Generated, unique: `{PREFIX}-{8 uppercase alphanumeric}`
    pub sku: String,
    /// 32-character random token for public read-only access
    pub share_token: Option<String>,
    #[cfg_attr(feature = "db", sqlx(json))]
    pub weight_compatibility: WeightCompatibility,
    pub is_active: bool,
    /// Created timestamp (milliseconds since epoch)
    pub created_at: i64,
}

/// Configure bundle payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleConfigurationCreate {
    pub configuration: serde_json::Map<String, serde_json::Value>,
    pub name: Option<String>,
    pub user_id: Option<i64>,
}

/// Update configuration payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleConfigurationUpdate {
    pub configuration: Option<serde_json::Map<String, serde_json::Value>>,
    pub name: Option<String>,
}
