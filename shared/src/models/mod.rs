//! Data models
//!
//! Shared between store-server and frontend (via API).
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).
//! Money is integer cents, weight is integer grams.

pub mod bundle;
pub mod bundle_configuration;
pub mod shipping_method;
pub mod shipping_quote;
pub mod shipping_rate;
pub mod shipping_zone;

// Re-exports
pub use bundle::*;
pub use bundle_configuration::*;
pub use shipping_method::*;
pub use shipping_quote::*;
pub use shipping_rate::*;
pub use shipping_zone::*;
