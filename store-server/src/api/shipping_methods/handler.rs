//! Shipping Method API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{ShippingMethod, ShippingMethodCreate, ShippingMethodUpdate};

use crate::core::ServerState;
use crate::db::repository::shipping_method;
use crate::utils::validation::{
    MAX_CODE_LEN, MAX_ESTIMATE_LEN, MAX_NAME_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// GET /api/shipping/methods - list all methods
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<ShippingMethod>>> {
    let methods = shipping_method::find_all(&state.db.pool).await?;
    Ok(Json(methods))
}

/// GET /api/shipping/methods/:id - fetch a single method
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ShippingMethod>> {
    let method = shipping_method::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Shipping method {id} not found")))?;
    Ok(Json(method))
}

/// POST /api/shipping/methods - create a method
///
/// A duplicate code trips the unique index and surfaces as 409.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ShippingMethodCreate>,
) -> AppResult<Json<ShippingMethod>> {
    validate_required_text(&payload.code, "code", MAX_CODE_LEN)?;
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.estimated_days, "estimated_days", MAX_ESTIMATE_LEN)?;

    let method = shipping_method::create(&state.db.pool, payload).await?;
    Ok(Json(method))
}

/// PUT /api/shipping/methods/:id - update a method
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ShippingMethodUpdate>,
) -> AppResult<Json<ShippingMethod>> {
    validate_optional_text(&payload.code, "code", MAX_CODE_LEN)?;
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.estimated_days, "estimated_days", MAX_ESTIMATE_LEN)?;

    let method = shipping_method::update(&state.db.pool, id, payload).await?;
    Ok(Json(method))
}

/// DELETE /api/shipping/methods/:id - deactivate a method
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let result = shipping_method::delete(&state.db.pool, id).await?;
    Ok(Json(result))
}
