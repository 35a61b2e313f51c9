//! Shipping Method Repository

use super::{RepoError, RepoResult};
use shared::models::{ShippingMethod, ShippingMethodCreate, ShippingMethodUpdate};
use sqlx::SqlitePool;

pub async fn find_active(pool: &SqlitePool) -> RepoResult<Vec<ShippingMethod>> {
    let methods = sqlx::query_as::<_, ShippingMethod>(
        "SELECT id, code, name, estimated_days, is_active FROM shipping_method WHERE is_active = 1 ORDER BY code",
    )
    .fetch_all(pool)
    .await?;
    Ok(methods)
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<ShippingMethod>> {
    let methods = sqlx::query_as::<_, ShippingMethod>(
        "SELECT id, code, name, estimated_days, is_active FROM shipping_method ORDER BY code",
    )
    .fetch_all(pool)
    .await?;
    Ok(methods)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<ShippingMethod>> {
    let method = sqlx::query_as::<_, ShippingMethod>(
        "SELECT id, code, name, estimated_days, is_active FROM shipping_method WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(method)
}

pub async fn find_by_code(pool: &SqlitePool, code: &str) -> RepoResult<Option<ShippingMethod>> {
    let method = sqlx::query_as::<_, ShippingMethod>(
        "SELECT id, code, name, estimated_days, is_active FROM shipping_method WHERE code = ? AND is_active = 1 LIMIT 1",
    )
    .bind(code)
    .fetch_optional(pool)
    .await?;
    Ok(method)
}

pub async fn create(pool: &SqlitePool, data: ShippingMethodCreate) -> RepoResult<ShippingMethod> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO shipping_method (code, name, estimated_days) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(&data.code)
    .bind(&data.name)
    .bind(&data.estimated_days)
    .fetch_one(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create shipping method".into()))
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: ShippingMethodUpdate,
) -> RepoResult<ShippingMethod> {
    let rows = sqlx::query(
        "UPDATE shipping_method SET code = COALESCE(?1, code), name = COALESCE(?2, name), estimated_days = COALESCE(?3, estimated_days), is_active = COALESCE(?4, is_active) WHERE id = ?5",
    )
    .bind(data.code)
    .bind(data.name)
    .bind(data.estimated_days)
    .bind(data.is_active)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Shipping method {id} not found"
        )));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Shipping method {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("UPDATE shipping_method SET is_active = 0 WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
