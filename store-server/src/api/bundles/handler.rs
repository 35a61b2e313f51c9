//! Bundle API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{
    Bundle, BundleConfiguration, BundleConfigurationCreate, BundleConfigurationUpdate,
};

use crate::bundles::service;
use crate::core::ServerState;
use crate::db::repository::{bundle, bundle_configuration};
use crate::utils::validation::{MAX_NAME_LEN, validate_optional_text};
use crate::utils::{AppError, AppResult};

/// GET /api/bundles - list active bundles
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Bundle>>> {
    let bundles = bundle::find_active(&state.db.pool).await?;
    Ok(Json(bundles))
}

/// GET /api/bundles/:id - fetch a single active bundle
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Bundle>> {
    let bundle = load_active_bundle(&state, id).await?;
    Ok(Json(bundle))
}

/// POST /api/bundles/:id/configure - price and persist a configuration
pub async fn configure(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<BundleConfigurationCreate>,
) -> AppResult<Json<BundleConfiguration>> {
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;

    let bundle = load_active_bundle(&state, id).await?;
    let config = service::create_configuration(
        &state.db.pool,
        &bundle,
        payload.configuration,
        payload.name,
        payload.user_id,
    )
    .await?;
    Ok(Json(config))
}

/// PUT /api/bundles/configurations/:id - update and re-price a configuration
pub async fn update_configuration(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<BundleConfigurationUpdate>,
) -> AppResult<Json<BundleConfiguration>> {
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;

    let existing = bundle_configuration::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Bundle configuration {id} not found")))?;
    let bundle = load_active_bundle(&state, existing.bundle_id).await?;

    let config = service::update_configuration(
        &state.db.pool,
        &existing,
        &bundle,
        payload.configuration,
        payload.name,
    )
    .await?;
    Ok(Json(config))
}

/// GET /api/bundles/shared/:token - resolve a configuration by share token
pub async fn get_shared(
    State(state): State<ServerState>,
    Path(token): Path<String>,
) -> AppResult<Json<BundleConfiguration>> {
    let config = bundle_configuration::find_by_share_token(&state.db.pool, &token)
        .await?
        .ok_or_else(|| AppError::NotFound("Shared configuration not found".to_string()))?;
    Ok(Json(config))
}

async fn load_active_bundle(state: &ServerState, id: i64) -> Result<Bundle, AppError> {
    bundle::find_by_id(&state.db.pool, id)
        .await?
        .filter(|b| b.is_active)
        .ok_or_else(|| AppError::NotFound(format!("Bundle {id} not found")))
}
