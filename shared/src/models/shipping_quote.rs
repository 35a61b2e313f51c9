//! Shipping Quote Payloads

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Shipping quote request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingQuoteRequest {
    /// 4-digit postcode
    pub postcode: String,
    /// Parcel weight in grams
    pub weight_g: i64,
    /// Method code; defaults to standard post when absent
    pub method_code: Option<String>,
}

/// Shipping quote response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingQuote {
    pub zone: String,
    pub method: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub weight_kg: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub shipping_cost: Decimal,
    pub currency: String,
    pub estimated_delivery: String,
}
