//! Shipping Rate API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::{ShippingRate, ShippingRateCreate, ShippingRateUpdate};

use crate::core::ServerState;
use crate::db::repository::{shipping_method, shipping_rate, shipping_zone};
use crate::utils::{AppError, AppResult};

/// Query filters for the rate listing
#[derive(Debug, Deserialize)]
pub struct RateListQuery {
    pub zone_id: Option<i64>,
    pub method_id: Option<i64>,
}

/// GET /api/shipping/rates - list rates, optionally filtered
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<RateListQuery>,
) -> AppResult<Json<Vec<ShippingRate>>> {
    let rates =
        shipping_rate::find_filtered(&state.db.pool, query.zone_id, query.method_id).await?;
    Ok(Json(rates))
}

/// GET /api/shipping/rates/:id - fetch a single rate
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ShippingRate>> {
    let rate = shipping_rate::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Shipping rate {id} not found")))?;
    Ok(Json(rate))
}

/// POST /api/shipping/rates - create a rate
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ShippingRateCreate>,
) -> AppResult<Json<ShippingRate>> {
    validate_weight_range(payload.min_weight_g, payload.max_weight_g)?;
    if payload.price_cents < 0 {
        return Err(AppError::Validation(
            "price_cents must not be negative".to_string(),
        ));
    }

    // Resolve referenced records up front for a 404 instead of a raw
    // foreign-key failure.
    shipping_zone::find_by_id(&state.db.pool, payload.zone_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Shipping zone {} not found", payload.zone_id))
        })?;
    shipping_method::find_by_id(&state.db.pool, payload.method_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Shipping method {} not found", payload.method_id))
        })?;

    let rate = shipping_rate::create(&state.db.pool, payload).await?;
    Ok(Json(rate))
}

/// PUT /api/shipping/rates/:id - update a rate
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ShippingRateUpdate>,
) -> AppResult<Json<ShippingRate>> {
    if let Some(min) = payload.min_weight_g {
        validate_weight_range(min, payload.max_weight_g)?;
    }
    if let Some(price) = payload.price_cents
        && price < 0
    {
        return Err(AppError::Validation(
            "price_cents must not be negative".to_string(),
        ));
    }

    let rate = shipping_rate::update(&state.db.pool, id, payload).await?;
    Ok(Json(rate))
}

/// DELETE /api/shipping/rates/:id - deactivate a rate
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let result = shipping_rate::delete(&state.db.pool, id).await?;
    Ok(Json(result))
}

fn validate_weight_range(min_weight_g: i64, max_weight_g: Option<i64>) -> Result<(), AppError> {
    if min_weight_g < 0 {
        return Err(AppError::Validation(
            "min_weight_g must not be negative".to_string(),
        ));
    }
    if let Some(max) = max_weight_g
        && max < min_weight_g
    {
        return Err(AppError::Validation(
            "max_weight_g must not be below min_weight_g".to_string(),
        ));
    }
    Ok(())
}
