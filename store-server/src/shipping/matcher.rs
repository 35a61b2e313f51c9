//! Shipping Zone Matcher
//!
//! Logic for resolving a postcode to a zone via `x`-wildcard patterns.

use regex::Regex;
use shared::models::ShippingZone;

/// Compile a postcode pattern into an anchored regex.
///
/// Each literal `x` becomes the digit class `\d`; digits stand for
/// themselves. Anything else makes the pattern unusable and returns None.
fn compile_pattern(pattern: &str) -> Option<Regex> {
    if pattern.is_empty() || !pattern.chars().all(|c| c.is_ascii_digit() || c == 'x') {
        return None;
    }
    let body = pattern.replace('x', r"\d");
    Regex::new(&format!("^{body}$")).ok()
}

/// Resolve a postcode to the first matching active zone.
///
/// Iteration follows the caller's slice order — ascending id as loaded by
/// the repository. Overlapping patterns resolve to the earliest zone; the
/// ordering is part of the contract, not an accident.
pub fn resolve_zone<'a>(postcode: &str, zones: &'a [ShippingZone]) -> Option<&'a ShippingZone> {
    for zone in zones.iter().filter(|z| z.is_active) {
        match compile_pattern(&zone.postcode_pattern) {
            Some(re) if re.is_match(postcode) => return Some(zone),
            Some(_) => {}
            None => {
                tracing::debug!(
                    zone_id = zone.id,
                    pattern = %zone.postcode_pattern,
                    "skipping malformed postcode pattern"
                );
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_zone(id: i64, pattern: &str) -> ShippingZone {
        ShippingZone {
            id,
            name: format!("Zone {id}"),
            postcode_pattern: pattern.to_string(),
            is_active: true,
        }
    }

    #[test]
    fn test_wildcard_pattern_matches() {
        let zones = vec![make_zone(1, "2xxx"), make_zone(2, "3xxx")];
        let zone = resolve_zone("2000", &zones).expect("zone");
        assert_eq!(zone.id, 1);
        let zone = resolve_zone("3056", &zones).expect("zone");
        assert_eq!(zone.id, 2);
    }

    #[test]
    fn test_literal_pattern_matches_exactly() {
        let zones = vec![make_zone(1, "2600")];
        assert!(resolve_zone("2600", &zones).is_some());
        assert!(resolve_zone("2601", &zones).is_none());
    }

    #[test]
    fn test_no_match_returns_none() {
        let zones = vec![make_zone(1, "2xxx")];
        assert!(resolve_zone("9000", &zones).is_none());
    }

    #[test]
    fn test_overlapping_patterns_first_wins() {
        // "26xx" also matches "2xxx"; slice order decides.
        let zones = vec![make_zone(1, "2xxx"), make_zone(2, "26xx")];
        let zone = resolve_zone("2600", &zones).expect("zone");
        assert_eq!(zone.id, 1);

        let reversed = vec![make_zone(2, "26xx"), make_zone(1, "2xxx")];
        let zone = resolve_zone("2600", &reversed).expect("zone");
        assert_eq!(zone.id, 2);
    }

    #[test]
    fn test_inactive_zone_skipped() {
        let mut inactive = make_zone(1, "2xxx");
        inactive.is_active = false;
        let zones = vec![inactive, make_zone(2, "2xxx")];
        let zone = resolve_zone("2000", &zones).expect("zone");
        assert_eq!(zone.id, 2);
    }

    #[test]
    fn test_malformed_pattern_skipped() {
        let zones = vec![make_zone(1, "2**x"), make_zone(2, "2xxx")];
        let zone = resolve_zone("2000", &zones).expect("zone");
        assert_eq!(zone.id, 2);
    }

    #[test]
    fn test_anchoring_rejects_partial_match() {
        // Without anchors "2xx" would match inside "2000".
        let zones = vec![make_zone(1, "2xx")];
        assert!(resolve_zone("2000", &zones).is_none());
    }
}
