//! Shipping Rate Repository

use super::{RepoError, RepoResult};
use shared::models::{ShippingRate, ShippingRateCreate, ShippingRateUpdate};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, zone_id, method_id, min_weight_g, max_weight_g, price_cents, currency, is_active";

/// Active rates for one zone + method, ordered ascending by min_weight_g.
///
/// The resolver's first-covering-tier contract depends on this ordering.
pub async fn find_for_zone_method(
    pool: &SqlitePool,
    zone_id: i64,
    method_id: i64,
) -> RepoResult<Vec<ShippingRate>> {
    let rates = sqlx::query_as::<_, ShippingRate>(&format!(
        "SELECT {COLUMNS} FROM shipping_rate WHERE zone_id = ? AND method_id = ? AND is_active = 1 ORDER BY min_weight_g",
    ))
    .bind(zone_id)
    .bind(method_id)
    .fetch_all(pool)
    .await?;
    Ok(rates)
}

/// All rates, optionally filtered by zone and/or method (admin listing).
pub async fn find_filtered(
    pool: &SqlitePool,
    zone_id: Option<i64>,
    method_id: Option<i64>,
) -> RepoResult<Vec<ShippingRate>> {
    let mut sql = format!("SELECT {COLUMNS} FROM shipping_rate WHERE 1 = 1");
    if zone_id.is_some() {
        sql.push_str(" AND zone_id = ?");
    }
    if method_id.is_some() {
        sql.push_str(" AND method_id = ?");
    }
    sql.push_str(" ORDER BY zone_id, method_id, min_weight_g");

    let mut query = sqlx::query_as::<_, ShippingRate>(&sql);
    if let Some(z) = zone_id {
        query = query.bind(z);
    }
    if let Some(m) = method_id {
        query = query.bind(m);
    }
    let rates = query.fetch_all(pool).await?;
    Ok(rates)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<ShippingRate>> {
    let rate = sqlx::query_as::<_, ShippingRate>(&format!(
        "SELECT {COLUMNS} FROM shipping_rate WHERE id = ?",
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(rate)
}

pub async fn create(pool: &SqlitePool, data: ShippingRateCreate) -> RepoResult<ShippingRate> {
    let currency = data.currency.unwrap_or_else(|| "AUD".to_string());
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO shipping_rate (zone_id, method_id, min_weight_g, max_weight_g, price_cents, currency) VALUES (?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(data.zone_id)
    .bind(data.method_id)
    .bind(data.min_weight_g)
    .bind(data.max_weight_g)
    .bind(data.price_cents)
    .bind(currency)
    .fetch_one(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create shipping rate".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: ShippingRateUpdate) -> RepoResult<ShippingRate> {
    let rows = sqlx::query(
        "UPDATE shipping_rate SET zone_id = COALESCE(?1, zone_id), method_id = COALESCE(?2, method_id), min_weight_g = COALESCE(?3, min_weight_g), max_weight_g = COALESCE(?4, max_weight_g), price_cents = COALESCE(?5, price_cents), currency = COALESCE(?6, currency), is_active = COALESCE(?7, is_active) WHERE id = ?8",
    )
    .bind(data.zone_id)
    .bind(data.method_id)
    .bind(data.min_weight_g)
    .bind(data.max_weight_g)
    .bind(data.price_cents)
    .bind(data.currency)
    .bind(data.is_active)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Shipping rate {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Shipping rate {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("UPDATE shipping_rate SET is_active = 0 WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
