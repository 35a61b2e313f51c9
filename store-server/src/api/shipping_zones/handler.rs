//! Shipping Zone API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{ShippingZone, ShippingZoneCreate, ShippingZoneUpdate};

use crate::core::ServerState;
use crate::db::repository::shipping_zone;
use crate::utils::validation::{
    MAX_NAME_LEN, validate_optional_text, validate_postcode_pattern, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// GET /api/shipping/zones - list all zones
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<ShippingZone>>> {
    let zones = shipping_zone::find_all(&state.db.pool).await?;
    Ok(Json(zones))
}

/// GET /api/shipping/zones/:id - fetch a single zone
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ShippingZone>> {
    let zone = shipping_zone::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Shipping zone {id} not found")))?;
    Ok(Json(zone))
}

/// POST /api/shipping/zones - create a zone
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ShippingZoneCreate>,
) -> AppResult<Json<ShippingZone>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_postcode_pattern(&payload.postcode_pattern)?;

    let zone = shipping_zone::create(&state.db.pool, payload).await?;
    Ok(Json(zone))
}

/// PUT /api/shipping/zones/:id - update a zone
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ShippingZoneUpdate>,
) -> AppResult<Json<ShippingZone>> {
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    if let Some(pattern) = &payload.postcode_pattern {
        validate_postcode_pattern(pattern)?;
    }

    let zone = shipping_zone::update(&state.db.pool, id, payload).await?;
    Ok(Json(zone))
}

/// DELETE /api/shipping/zones/:id - deactivate a zone
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let result = shipping_zone::delete(&state.db.pool, id).await?;
    Ok(Json(result))
}
