//! Bundle API module

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/bundles", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/configure", post(handler::configure))
        .route("/configurations/{id}", put(handler::update_configuration))
        .route("/shared/{token}", get(handler::get_shared))
}
