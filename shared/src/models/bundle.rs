//! Bundle Model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A configurable option attached to a bundle
///
/// Storefront display metadata. Pricing uses the server's fixed option
/// table, not these values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleOption {
    pub name: String,
    /// Price delta in cents
    pub price_cents: i64,
    /// Weight delta in grams
    pub weight_g: i64,
    pub available: bool,
}

/// Bundle entity — a base product plus optional add-ons
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Bundle {
    pub id: i64,
    pub name: String,
    /// Prefix for generated configuration SKUs, e.g. "BCK"
    pub sku_prefix: String,
    /// Base price in cents
    pub price_cents: i64,
    /// Base weight in grams (0 if the bundle has no physical base item)
    pub base_weight_g: i64,
    /// Declarative option metadata, keyed by option key
    #[cfg_attr(feature = "db", sqlx(json))]
    pub available_options: BTreeMap<String, BundleOption>,
    /// Selection map applied when the client submits no overrides
    #[cfg_attr(feature = "db", sqlx(json))]
    pub default_configuration: serde_json::Map<String, serde_json::Value>,
    pub is_active: bool,
}
