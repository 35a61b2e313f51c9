//! Bundle Repository
//!
//! Bundles are created by seed or back-office tooling and read-only here.

use super::RepoResult;
use shared::models::Bundle;
use sqlx::SqlitePool;

const COLUMNS: &str =
    "id, name, sku_prefix, price_cents, base_weight_g, available_options, default_configuration, is_active";

pub async fn find_active(pool: &SqlitePool) -> RepoResult<Vec<Bundle>> {
    let bundles = sqlx::query_as::<_, Bundle>(&format!(
        "SELECT {COLUMNS} FROM bundle WHERE is_active = 1 ORDER BY id",
    ))
    .fetch_all(pool)
    .await?;
    Ok(bundles)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Bundle>> {
    let bundle = sqlx::query_as::<_, Bundle>(&format!("SELECT {COLUMNS} FROM bundle WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(bundle)
}
