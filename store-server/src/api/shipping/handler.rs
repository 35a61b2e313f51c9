//! Shipping Quote API Handlers

use axum::{Json, extract::State};
use shared::models::{ShippingQuote, ShippingQuoteRequest};

use crate::core::ServerState;
use crate::db::repository::{shipping_method, shipping_rate, shipping_zone};
use crate::shipping::{matcher, resolver};
use crate::utils::validation::{validate_postcode, validate_weight_g};
use crate::utils::{AppError, AppResult};

/// Method applied when the request does not name one.
const DEFAULT_METHOD_CODE: &str = "STD";

/// POST /api/shipping/quote - price a parcel for a postcode
///
/// The two not-found outcomes are deliberately distinct: E1101 means "we
/// don't ship to that postcode", E1102 means "we ship there but no tier
/// covers that weight" — the storefront offers a contact-for-quote path on
/// the latter.
pub async fn quote(
    State(state): State<ServerState>,
    Json(payload): Json<ShippingQuoteRequest>,
) -> AppResult<Json<ShippingQuote>> {
    validate_postcode(&payload.postcode)?;
    validate_weight_g(payload.weight_g)?;

    let zones = shipping_zone::find_active(&state.db.pool).await?;
    let zone = matcher::resolve_zone(&payload.postcode, &zones).ok_or_else(|| {
        AppError::ZoneNotFound(format!(
            "No shipping zone covers postcode {}",
            payload.postcode
        ))
    })?;

    let method_code = payload.method_code.as_deref().unwrap_or(DEFAULT_METHOD_CODE);
    let method = shipping_method::find_by_code(&state.db.pool, method_code)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Shipping method {method_code} not found")))?;

    let rates = shipping_rate::find_for_zone_method(&state.db.pool, zone.id, method.id).await?;
    let rate = resolver::first_covering_rate(payload.weight_g, &rates).ok_or_else(|| {
        AppError::RateNotFound(format!(
            "No {} rate covers {} g in {}",
            method.code, payload.weight_g, zone.name
        ))
    })?;

    Ok(Json(ShippingQuote {
        zone: zone.name.clone(),
        method: method.name.clone(),
        weight_kg: resolver::grams_to_kg(payload.weight_g),
        shipping_cost: resolver::cents_to_amount(rate.price_cents),
        currency: rate.currency.clone(),
        estimated_delivery: method.estimated_days.clone(),
    }))
}
