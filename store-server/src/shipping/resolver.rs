//! Shipping Rate Resolver
//!
//! Weight-tier lookup plus cents → display-amount conversion.
//! Money stays in integer cents until the API response is assembled.

use rust_decimal::Decimal;
use shared::models::ShippingRate;

/// First active rate whose weight range contains `weight_g`.
///
/// `rates` must be ordered ascending by `min_weight_g` (the repository
/// query order). Ranges are inclusive at both ends; `max_weight_g = None`
/// is unbounded. When adjacent tiers share a boundary weight, the
/// lower-starting tier wins — first match, not best fit.
pub fn first_covering_rate<'a>(
    weight_g: i64,
    rates: &'a [ShippingRate],
) -> Option<&'a ShippingRate> {
    rates
        .iter()
        .filter(|r| r.is_active)
        .find(|r| r.min_weight_g <= weight_g && r.max_weight_g.is_none_or(|max| max >= weight_g))
}

/// Convert integer cents to a decimal currency amount (2 dp).
pub fn cents_to_amount(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// Convert integer grams to kilograms (3 dp).
pub fn grams_to_kg(grams: i64) -> Decimal {
    Decimal::new(grams, 3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::ToPrimitive;

    fn make_rate(id: i64, min_weight_g: i64, max_weight_g: Option<i64>, price_cents: i64) -> ShippingRate {
        ShippingRate {
            id,
            zone_id: 1,
            method_id: 1,
            min_weight_g,
            max_weight_g,
            price_cents,
            currency: "AUD".to_string(),
            is_active: true,
        }
    }

    #[test]
    fn test_weight_inside_tier() {
        let rates = vec![
            make_rate(1, 0, Some(1000), 895),
            make_rate(2, 1000, Some(5000), 1295),
        ];
        let rate = first_covering_rate(400, &rates).expect("rate");
        assert_eq!(rate.id, 1);
        let rate = first_covering_rate(2500, &rates).expect("rate");
        assert_eq!(rate.id, 2);
    }

    #[test]
    fn test_shared_boundary_takes_lower_tier() {
        // Both tiers contain 1000 g; the lower-starting tier wins.
        let rates = vec![
            make_rate(1, 0, Some(1000), 895),
            make_rate(2, 1000, Some(5000), 1295),
        ];
        let rate = first_covering_rate(1000, &rates).expect("rate");
        assert_eq!(rate.id, 1);
    }

    #[test]
    fn test_unbounded_tier_covers_everything_above() {
        let rates = vec![
            make_rate(1, 0, Some(1000), 895),
            make_rate(2, 1000, None, 1295),
        ];
        let rate = first_covering_rate(999_999, &rates).expect("rate");
        assert_eq!(rate.id, 2);
    }

    #[test]
    fn test_uncovered_weight_returns_none() {
        let rates = vec![make_rate(1, 0, Some(1000), 895)];
        assert!(first_covering_rate(1001, &rates).is_none());
        assert!(first_covering_rate(25_001, &[]).is_none());
    }

    #[test]
    fn test_inactive_rate_skipped() {
        let mut inactive = make_rate(1, 0, Some(1000), 895);
        inactive.is_active = false;
        let rates = vec![inactive, make_rate(2, 0, Some(1000), 995)];
        let rate = first_covering_rate(500, &rates).expect("rate");
        assert_eq!(rate.id, 2);
    }

    #[test]
    fn test_cents_to_amount() {
        assert_eq!(cents_to_amount(895).to_f64(), Some(8.95));
        assert_eq!(cents_to_amount(0).to_f64(), Some(0.0));
    }

    #[test]
    fn test_grams_to_kg() {
        assert_eq!(grams_to_kg(2500).to_f64(), Some(2.5));
        assert_eq!(grams_to_kg(999).to_f64(), Some(0.999));
    }
}
