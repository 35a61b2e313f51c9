//! Bundle Configuration Service
//!
//! Orchestrates pricing, identifier generation, and persistence for bundle
//! configurations.

use serde_json::{Map, Value};
use shared::models::{Bundle, BundleConfiguration};
use sqlx::SqlitePool;

use crate::bundles::pricer;
use crate::bundles::skugen;
use crate::db::repository::bundle_configuration::{self, NewBundleConfiguration};
use crate::db::repository::RepoError;
use crate::utils::AppError;

/// Attempts before giving up on sku/share_token uniqueness conflicts.
const MAX_GENERATION_ATTEMPTS: u32 = 5;

/// Price and persist a new configuration for `bundle`.
///
/// Generated sku/share_token collisions surface as unique-index conflicts
/// from the insert; both identifiers are regenerated and the insert retried,
/// bounded at [`MAX_GENERATION_ATTEMPTS`]. Conflicts never reach the caller.
pub async fn create_configuration(
    pool: &SqlitePool,
    bundle: &Bundle,
    configuration: Map<String, Value>,
    name: Option<String>,
    user_id: Option<i64>,
) -> Result<BundleConfiguration, AppError> {
    let priced = pricer::price_configuration(bundle, &configuration)?;

    for attempt in 1..=MAX_GENERATION_ATTEMPTS {
        // ThreadRng is not Send; keep it scoped so the handler future stays Send
        let (sku, share_token) = {
            let mut rng = rand::thread_rng();
            (
                skugen::generate_sku(&mut rng, &bundle.sku_prefix),
                skugen::generate_share_token(&mut rng),
            )
        };
        let record = NewBundleConfiguration {
            bundle_id: bundle.id,
            user_id,
            name: name.clone(),
            configuration_data: configuration.clone(),
            total_price_cents: priced.total_price_cents,
            total_weight_g: priced.total_weight_g,
            sku,
            share_token,
            weight_compatibility: priced.weight_compatibility.clone(),
        };
        match bundle_configuration::insert(pool, &record).await {
            Ok(saved) => return Ok(saved),
            Err(RepoError::Duplicate(_)) => {
                tracing::warn!(
                    bundle_id = bundle.id,
                    attempt,
                    "generated sku/share_token collided, retrying"
                );
            }
            Err(e) => return Err(e.into()),
        }
    }

    Err(AppError::Internal(format!(
        "exhausted {MAX_GENERATION_ATTEMPTS} attempts generating a unique sku/share_token"
    )))
}

/// Re-price and persist changes to an existing configuration.
///
/// Totals and the classification snapshot are always recomputed from the
/// effective selections; sku and share_token stay fixed.
pub async fn update_configuration(
    pool: &SqlitePool,
    existing: &BundleConfiguration,
    bundle: &Bundle,
    configuration: Option<Map<String, Value>>,
    name: Option<String>,
) -> Result<BundleConfiguration, AppError> {
    let configuration = configuration.unwrap_or_else(|| existing.configuration_data.clone());
    let priced = pricer::price_configuration(bundle, &configuration)?;
    let name = name.or_else(|| existing.name.clone());

    let saved = bundle_configuration::update_priced(
        pool,
        existing.id,
        &configuration,
        name.as_deref(),
        priced.total_price_cents,
        priced.total_weight_g,
        &priced.weight_compatibility,
    )
    .await?;
    Ok(saved)
}
