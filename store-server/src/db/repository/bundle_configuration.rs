//! Bundle Configuration Repository

use super::{RepoError, RepoResult};
use shared::models::{BundleConfiguration, WeightCompatibility};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, bundle_id, user_id, name, configuration_data, total_price_cents, total_weight_g, sku, share_token, weight_compatibility, is_active, created_at";

/// Insert record for a new configuration
///
/// Built server-side: sku/share_token come from the generator, totals and
/// classification from the pricer.
#[derive(Debug, Clone)]
pub struct NewBundleConfiguration {
    pub bundle_id: i64,
    pub user_id: Option<i64>,
    pub name: Option<String>,
    pub configuration_data: serde_json::Map<String, serde_json::Value>,
    pub total_price_cents: i64,
    pub total_weight_g: i64,
    pub sku: String,
    pub share_token: String,
    pub weight_compatibility: WeightCompatibility,
}

/// Insert a configuration.
///
/// A sku/share_token collision trips the unique indexes and surfaces as
/// [`RepoError::Duplicate`]; the caller regenerates and retries.
pub async fn insert(
    pool: &SqlitePool,
    record: &NewBundleConfiguration,
) -> RepoResult<BundleConfiguration> {
    let configuration_json = serde_json::to_string(&record.configuration_data)
        .unwrap_or_else(|_| "{}".to_string());
    let compatibility_json = serde_json::to_string(&record.weight_compatibility)
        .unwrap_or_else(|_| "{}".to_string());

    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO bundle_configuration (bundle_id, user_id, name, configuration_data, total_price_cents, total_weight_g, sku, share_token, weight_compatibility, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(record.bundle_id)
    .bind(record.user_id)
    .bind(&record.name)
    .bind(configuration_json)
    .bind(record.total_price_cents)
    .bind(record.total_weight_g)
    .bind(&record.sku)
    .bind(&record.share_token)
    .bind(compatibility_json)
    .bind(shared::util::now_millis())
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create bundle configuration".into()))
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<BundleConfiguration>> {
    let config = sqlx::query_as::<_, BundleConfiguration>(&format!(
        "SELECT {COLUMNS} FROM bundle_configuration WHERE id = ?",
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(config)
}

/// Resolve an active configuration by its public share token.
pub async fn find_by_share_token(
    pool: &SqlitePool,
    token: &str,
) -> RepoResult<Option<BundleConfiguration>> {
    let config = sqlx::query_as::<_, BundleConfiguration>(&format!(
        "SELECT {COLUMNS} FROM bundle_configuration WHERE share_token = ? AND is_active = 1 LIMIT 1",
    ))
    .bind(token)
    .fetch_optional(pool)
    .await?;
    Ok(config)
}

/// Overwrite a configuration's selections and derived totals.
///
/// sku and share_token are never touched here; they are fixed at creation.
pub async fn update_priced(
    pool: &SqlitePool,
    id: i64,
    configuration_data: &serde_json::Map<String, serde_json::Value>,
    name: Option<&str>,
    total_price_cents: i64,
    total_weight_g: i64,
    weight_compatibility: &WeightCompatibility,
) -> RepoResult<BundleConfiguration> {
    let configuration_json =
        serde_json::to_string(configuration_data).unwrap_or_else(|_| "{}".to_string());
    let compatibility_json =
        serde_json::to_string(weight_compatibility).unwrap_or_else(|_| "{}".to_string());

    let rows = sqlx::query(
        "UPDATE bundle_configuration SET configuration_data = ?1, name = ?2, total_price_cents = ?3, total_weight_g = ?4, weight_compatibility = ?5 WHERE id = ?6",
    )
    .bind(configuration_json)
    .bind(name)
    .bind(total_price_cents)
    .bind(total_weight_g)
    .bind(compatibility_json)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Bundle configuration {id} not found"
        )));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Bundle configuration {id} not found")))
}
