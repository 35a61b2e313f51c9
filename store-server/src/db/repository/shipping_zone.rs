//! Shipping Zone Repository

use super::{RepoError, RepoResult};
use shared::models::{ShippingZone, ShippingZoneCreate, ShippingZoneUpdate};
use sqlx::SqlitePool;

/// Active zones in ascending-id order.
///
/// The matcher's first-match contract depends on this ordering.
pub async fn find_active(pool: &SqlitePool) -> RepoResult<Vec<ShippingZone>> {
    let zones = sqlx::query_as::<_, ShippingZone>(
        "SELECT id, name, postcode_pattern, is_active FROM shipping_zone WHERE is_active = 1 ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(zones)
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<ShippingZone>> {
    let zones = sqlx::query_as::<_, ShippingZone>(
        "SELECT id, name, postcode_pattern, is_active FROM shipping_zone ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(zones)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<ShippingZone>> {
    let zone = sqlx::query_as::<_, ShippingZone>(
        "SELECT id, name, postcode_pattern, is_active FROM shipping_zone WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(zone)
}

pub async fn create(pool: &SqlitePool, data: ShippingZoneCreate) -> RepoResult<ShippingZone> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO shipping_zone (name, postcode_pattern) VALUES (?, ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.postcode_pattern)
    .fetch_one(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create shipping zone".into()))
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: ShippingZoneUpdate,
) -> RepoResult<ShippingZone> {
    let rows = sqlx::query(
        "UPDATE shipping_zone SET name = COALESCE(?1, name), postcode_pattern = COALESCE(?2, postcode_pattern), is_active = COALESCE(?3, is_active) WHERE id = ?4",
    )
    .bind(data.name)
    .bind(data.postcode_pattern)
    .bind(data.is_active)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Shipping zone {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Shipping zone {id} not found")))
}

/// Soft delete: rates referencing the zone stay in place but stop resolving.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("UPDATE shipping_zone SET is_active = 0 WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
