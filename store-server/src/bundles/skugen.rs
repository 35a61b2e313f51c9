//! SKU and Share-Token Generation
//!
//! Random identifier generation with the RNG injected so tests can seed it.
//! Uniqueness is enforced by the storage layer's unique indexes, not here;
//! callers retry on conflict.

use rand::Rng;

/// Uppercase alphanumeric alphabet for SKU suffixes.
const SKU_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Mixed-case alphanumeric alphabet for share tokens.
const TOKEN_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Suffix length for generated SKUs.
pub const SKU_SUFFIX_LEN: usize = 8;

/// Length of generated share tokens.
pub const SHARE_TOKEN_LEN: usize = 32;

/// Generate a SKU: `{PREFIX}-{8 uppercase alphanumeric}`.
pub fn generate_sku(rng: &mut impl Rng, prefix: &str) -> String {
    let suffix: String = (0..SKU_SUFFIX_LEN)
        .map(|_| SKU_ALPHABET[rng.gen_range(0..SKU_ALPHABET.len())] as char)
        .collect();
    format!("{prefix}-{suffix}")
}

/// Generate a 32-character share token.
pub fn generate_share_token(rng: &mut impl Rng) -> String {
    (0..SHARE_TOKEN_LEN)
        .map(|_| TOKEN_ALPHABET[rng.gen_range(0..TOKEN_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_sku_format() {
        let mut rng = StdRng::seed_from_u64(7);
        let re = regex::Regex::new(r"^BCK-[A-Z0-9]{8}$").unwrap();
        for _ in 0..100 {
            let sku = generate_sku(&mut rng, "BCK");
            assert!(re.is_match(&sku), "bad sku: {sku}");
        }
    }

    #[test]
    fn test_share_token_format() {
        let mut rng = StdRng::seed_from_u64(7);
        let token = generate_share_token(&mut rng);
        assert_eq!(token.len(), SHARE_TOKEN_LEN);
        assert!(token.bytes().all(|b| b.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = generate_sku(&mut StdRng::seed_from_u64(42), "BCK");
        let b = generate_sku(&mut StdRng::seed_from_u64(42), "BCK");
        assert_eq!(a, b);
    }

    #[test]
    fn test_no_collisions_over_thousand_generations() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut skus = HashSet::new();
        let mut tokens = HashSet::new();
        for _ in 0..1000 {
            assert!(skus.insert(generate_sku(&mut rng, "BCK")));
            assert!(tokens.insert(generate_share_token(&mut rng)));
        }
    }
}
