//! Bundle Configuration Pricer
//!
//! Deterministic summation of a bundle's base price/weight and the selected
//! option deltas, plus weight-compatibility classification. Pure
//! computation; persistence belongs to the caller.

use serde_json::{Map, Value};
use shared::models::{Bundle, WeightCompatibility};
use thiserror::Error;

/// Fixed boolean option deltas: (key, price cents, weight grams).
///
/// These reproduce the legacy fixture values and are intentionally not read
/// from the bundle's `available_options` metadata.
const BOOLEAN_OPTIONS: &[(&str, i64, i64)] = &[
    ("espresso_module", 15_000, 800),
    ("filter_attachment", 7_500, 300),
    ("fan_accessory", 4_500, 200),
];

/// Selection key for the solar panel enum option.
pub const SOLAR_PANEL_KEY: &str = "solar_panel_size";

/// Solar panel size option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolarPanelSize {
    W10,
    W15,
    W20,
}

impl SolarPanelSize {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "10W" => Some(Self::W10),
            "15W" => Some(Self::W15),
            "20W" => Some(Self::W20),
            _ => None,
        }
    }

    /// (price cents, weight grams) delta for this size
    fn deltas(self) -> (i64, i64) {
        match self {
            Self::W10 => (2_500, 250),
            Self::W15 => (5_000, 400),
            Self::W20 => (10_000, 600),
        }
    }
}

/// Pricing failure
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("invalid solar_panel_size {0:?} (expected one of 10W, 15W, 20W)")]
    InvalidSolarPanelSize(String),
}

/// Priced configuration totals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedConfiguration {
    pub total_price_cents: i64,
    pub total_weight_g: i64,
    pub weight_compatibility: WeightCompatibility,
}

/// Price a selection map against its bundle.
///
/// Boolean options add their deltas when the selection is JSON `true`.
/// `solar_panel_size` defaults to 10W when absent and must be one of the
/// three supported sizes when present — an invalid size is rejected before
/// any summation, never silently defaulted. Unknown keys are accepted and
/// ignored so new option keys can ship ahead of pricing support.
pub fn price_configuration(
    bundle: &Bundle,
    selections: &Map<String, Value>,
) -> Result<PricedConfiguration, PricingError> {
    let panel = match selections.get(SOLAR_PANEL_KEY) {
        None => SolarPanelSize::W10,
        Some(Value::String(size)) => SolarPanelSize::parse(size)
            .ok_or_else(|| PricingError::InvalidSolarPanelSize(size.clone()))?,
        Some(other) => return Err(PricingError::InvalidSolarPanelSize(other.to_string())),
    };

    let mut total_price_cents = bundle.price_cents;
    let mut total_weight_g = bundle.base_weight_g;

    for &(key, price_cents, weight_g) in BOOLEAN_OPTIONS {
        if selections.get(key).and_then(Value::as_bool) == Some(true) {
            total_price_cents += price_cents;
            total_weight_g += weight_g;
        }
    }

    let (panel_price, panel_weight) = panel.deltas();
    total_price_cents += panel_price;
    total_weight_g += panel_weight;

    Ok(PricedConfiguration {
        total_price_cents,
        total_weight_g,
        weight_compatibility: classify_weight(total_weight_g),
    })
}

/// Classify a total weight into a pack-compatibility tier.
///
/// Boundaries are 5 kg and 10 kg, with the middle tier inclusive at both
/// ends: exactly 5000 g is "5-10kg", exactly 10000 g still is.
pub fn classify_weight(total_weight_g: i64) -> WeightCompatibility {
    if total_weight_g < 5_000 {
        WeightCompatibility {
            threshold: "<5kg".to_string(),
            description: "Day-pack compatible".to_string(),
            compatible: true,
        }
    } else if total_weight_g <= 10_000 {
        WeightCompatibility {
            threshold: "5-10kg".to_string(),
            description: "Overnight pack compatible".to_string(),
            compatible: true,
        }
    } else {
        WeightCompatibility {
            threshold: ">10kg".to_string(),
            description: "Base camp setup".to_string(),
            compatible: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn make_bundle() -> Bundle {
        Bundle {
            id: 1,
            name: "Basecamp Kitchen Bundle".to_string(),
            sku_prefix: "BCK".to_string(),
            price_cents: 29_999,
            base_weight_g: 2_500,
            available_options: BTreeMap::new(),
            default_configuration: Map::new(),
            is_active: true,
        }
    }

    fn selections(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_empty_selections_price_base_plus_default_panel() {
        let priced = price_configuration(&make_bundle(), &Map::new()).expect("priced");
        assert_eq!(priced.total_price_cents, 32_499);
        assert_eq!(priced.total_weight_g, 2_750);
        assert_eq!(priced.weight_compatibility.threshold, "<5kg");
    }

    #[test]
    fn test_all_options_with_20w_panel() {
        let sel = selections(&[
            ("espresso_module", json!(true)),
            ("filter_attachment", json!(true)),
            ("fan_accessory", json!(true)),
            ("solar_panel_size", json!("20W")),
        ]);
        let priced = price_configuration(&make_bundle(), &sel).expect("priced");
        assert_eq!(priced.total_price_cents, 81_999);
        assert_eq!(priced.total_weight_g, 4_600);
        assert_eq!(priced.weight_compatibility.threshold, "<5kg");
    }

    #[test]
    fn test_false_options_add_nothing() {
        let sel = selections(&[
            ("espresso_module", json!(false)),
            ("filter_attachment", json!(false)),
            ("fan_accessory", json!(false)),
        ]);
        let priced = price_configuration(&make_bundle(), &sel).expect("priced");
        assert_eq!(priced.total_price_cents, 32_499);
        assert_eq!(priced.total_weight_g, 2_750);
    }

    #[test]
    fn test_15w_panel_deltas() {
        let sel = selections(&[("solar_panel_size", json!("15W"))]);
        let priced = price_configuration(&make_bundle(), &sel).expect("priced");
        assert_eq!(priced.total_price_cents, 34_999);
        assert_eq!(priced.total_weight_g, 2_900);
    }

    #[test]
    fn test_invalid_panel_size_rejected() {
        let sel = selections(&[("solar_panel_size", json!("50W"))]);
        let err = price_configuration(&make_bundle(), &sel).unwrap_err();
        assert_eq!(err, PricingError::InvalidSolarPanelSize("50W".to_string()));
    }

    #[test]
    fn test_non_string_panel_size_rejected() {
        let sel = selections(&[("solar_panel_size", json!(20))]);
        assert!(price_configuration(&make_bundle(), &sel).is_err());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let sel = selections(&[
            ("grinder_module", json!(true)),
            ("color", json!("sage")),
        ]);
        let priced = price_configuration(&make_bundle(), &sel).expect("priced");
        assert_eq!(priced.total_price_cents, 32_499);
        assert_eq!(priced.total_weight_g, 2_750);
    }

    #[test]
    fn test_non_bool_option_value_ignored() {
        let sel = selections(&[("espresso_module", json!("yes"))]);
        let priced = price_configuration(&make_bundle(), &sel).expect("priced");
        assert_eq!(priced.total_price_cents, 32_499);
    }

    // ========== Classification boundaries ==========

    #[test]
    fn test_classify_day_pack() {
        let c = classify_weight(4_750);
        assert_eq!(c.threshold, "<5kg");
        assert_eq!(c.description, "Day-pack compatible");
        assert!(c.compatible);
    }

    #[test]
    fn test_classify_overnight_pack() {
        let c = classify_weight(7_500);
        assert_eq!(c.threshold, "5-10kg");
        assert_eq!(c.description, "Overnight pack compatible");
        assert!(c.compatible);
    }

    #[test]
    fn test_classify_base_camp() {
        let c = classify_weight(12_000);
        assert_eq!(c.threshold, ">10kg");
        assert_eq!(c.description, "Base camp setup");
        assert!(!c.compatible);
    }

    #[test]
    fn test_classify_inclusive_boundaries() {
        // 5 kg and 10 kg both land in the middle tier.
        assert_eq!(classify_weight(4_999).threshold, "<5kg");
        assert_eq!(classify_weight(5_000).threshold, "5-10kg");
        assert_eq!(classify_weight(10_000).threshold, "5-10kg");
        assert_eq!(classify_weight(10_001).threshold, ">10kg");
    }
}
