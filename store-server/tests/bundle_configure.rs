//! Bundle configurator API integration tests
//!
//! Exercises configure → share-token lookup → update against the seeded
//! Basecamp Kitchen Bundle (29999 cents, 2500 g base).

use axum::body::Body;
use http::{Method, Request, StatusCode};
use serde_json::{Value, json};
use store_server::{Config, ServerState, api};
use tower::ServiceExt;

async fn test_state() -> (tempfile::TempDir, ServerState) {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = Config::with_overrides(dir.path().to_string_lossy(), 0);
    let state = ServerState::initialize(&config).await.expect("state");
    (dir, state)
}

async fn request_json(
    state: &ServerState,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let app = api::build_app(state.clone());
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn configure_with_defaults_prices_base_plus_10w_panel() {
    let (_dir, state) = test_state().await;
    let (status, body) = request_json(
        &state,
        Method::POST,
        "/api/bundles/1/configure",
        Some(json!({"configuration": {}})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_price_cents"], 32499);
    assert_eq!(body["total_weight_g"], 2750);
    assert_eq!(body["weight_compatibility"]["threshold"], "<5kg");
    assert_eq!(body["weight_compatibility"]["compatible"], true);

    let sku = body["sku"].as_str().expect("sku");
    let re = regex::Regex::new(r"^BCK-[A-Z0-9]{8}$").unwrap();
    assert!(re.is_match(sku), "bad sku: {sku}");

    let token = body["share_token"].as_str().expect("share_token");
    assert_eq!(token.len(), 32);
}

#[tokio::test]
async fn configure_with_all_options_and_20w_panel() {
    let (_dir, state) = test_state().await;
    let (status, body) = request_json(
        &state,
        Method::POST,
        "/api/bundles/1/configure",
        Some(json!({
            "configuration": {
                "espresso_module": true,
                "filter_attachment": true,
                "fan_accessory": true,
                "solar_panel_size": "20W"
            },
            "name": "Full kit"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_price_cents"], 81999);
    assert_eq!(body["total_weight_g"], 4600);
    assert_eq!(body["weight_compatibility"]["threshold"], "<5kg");
    assert_eq!(body["name"], "Full kit");
}

#[tokio::test]
async fn configure_rejects_invalid_panel_size() {
    let (_dir, state) = test_state().await;
    let (status, body) = request_json(
        &state,
        Method::POST,
        "/api/bundles/1/configure",
        Some(json!({"configuration": {"solar_panel_size": "50W"}})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");
}

#[tokio::test]
async fn configure_unknown_bundle_returns_not_found() {
    let (_dir, state) = test_state().await;
    let (status, body) = request_json(
        &state,
        Method::POST,
        "/api/bundles/999/configure",
        Some(json!({"configuration": {}})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "E0003");
}

#[tokio::test]
async fn share_token_round_trip() {
    let (_dir, state) = test_state().await;
    let (status, created) = request_json(
        &state,
        Method::POST,
        "/api/bundles/1/configure",
        Some(json!({"configuration": {"espresso_module": true}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let token = created["share_token"].as_str().expect("share_token");
    let (status, fetched) = request_json(
        &state,
        Method::GET,
        &format!("/api/bundles/shared/{token}"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["sku"], created["sku"]);
    assert_eq!(fetched["total_price_cents"], created["total_price_cents"]);
}

#[tokio::test]
async fn unknown_share_token_returns_not_found() {
    let (_dir, state) = test_state().await;
    let (status, body) = request_json(
        &state,
        Method::GET,
        "/api/bundles/shared/AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "E0003");
}

#[tokio::test]
async fn update_reprices_and_keeps_identifiers() {
    let (_dir, state) = test_state().await;
    let (status, created) = request_json(
        &state,
        Method::POST,
        "/api/bundles/1/configure",
        Some(json!({"configuration": {}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_i64().expect("id");

    let (status, updated) = request_json(
        &state,
        Method::PUT,
        &format!("/api/bundles/configurations/{id}"),
        Some(json!({
            "configuration": {
                "espresso_module": true,
                "solar_panel_size": "15W"
            }
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // 29999 + 15000 (espresso) + 5000 (15W panel)
    assert_eq!(updated["total_price_cents"], 49999);
    // 2500 + 800 + 400
    assert_eq!(updated["total_weight_g"], 3700);
    assert_eq!(updated["sku"], created["sku"]);
    assert_eq!(updated["share_token"], created["share_token"]);
}

#[tokio::test]
async fn configurations_get_distinct_identifiers() {
    let (_dir, state) = test_state().await;
    let mut skus = std::collections::HashSet::new();
    let mut tokens = std::collections::HashSet::new();
    for _ in 0..10 {
        let (status, body) = request_json(
            &state,
            Method::POST,
            "/api/bundles/1/configure",
            Some(json!({"configuration": {}})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(skus.insert(body["sku"].as_str().unwrap().to_string()));
        assert!(tokens.insert(body["share_token"].as_str().unwrap().to_string()));
    }
}

#[tokio::test]
async fn update_with_invalid_panel_size_leaves_record_untouched() {
    let (_dir, state) = test_state().await;
    let (_, created) = request_json(
        &state,
        Method::POST,
        "/api/bundles/1/configure",
        Some(json!({"configuration": {}})),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = request_json(
        &state,
        Method::PUT,
        &format!("/api/bundles/configurations/{id}"),
        Some(json!({"configuration": {"solar_panel_size": "50W"}})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");

    // Rejected before pricing: the stored totals are unchanged
    let (_, fetched) = request_json(
        &state,
        Method::GET,
        &format!(
            "/api/bundles/shared/{}",
            created["share_token"].as_str().unwrap()
        ),
        None,
    )
    .await;
    assert_eq!(fetched["total_price_cents"], 32499);
    assert_eq!(fetched["total_weight_g"], 2750);
}
