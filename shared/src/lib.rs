//! Shared types for the Waypoint store platform
//!
//! Common types used by the store server and its clients: shipping and
//! bundle models, request/response payloads, and small utilities.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`
//! so API clients can depend on this crate without pulling in sqlx.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
