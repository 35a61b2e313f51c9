//! Waypoint Store Server - configurable-bundle storefront backend
//!
//! # Architecture overview
//!
//! - **Shipping engine** (`shipping`): postcode → zone → weight-tiered rate
//!   resolution
//! - **Bundle configurator** (`bundles`): option pricing, weight
//!   classification, SKU / share-token generation
//! - **Database** (`db`): embedded SQLite storage via sqlx
//! - **HTTP API** (`api`): RESTful API interface
//!
//! # Module structure
//!
//! ```text
//! store-server/src/
//! ├── core/          # config, state, server
//! ├── api/           # HTTP routes and handlers
//! ├── shipping/      # zone matching + rate resolution
//! ├── bundles/       # pricing, generation, configuration service
//! ├── db/            # database layer
//! └── utils/         # errors, validation, logging
//! ```

pub mod api;
pub mod bundles;
pub mod core;
pub mod db;
pub mod shipping;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
 _       __                             _       __
| |     / /___ ___  ______  ____  _____(_)___  / /_
| | /| / / __ `/ / / / __ \/ __ \/ ___/ / __ \/ __/
| |/ |/ / /_/ / /_/ / /_/ / /_/ / /__/ / / / / /_
|__/|__/\__,_/\__, / .___/\____/\___/_/_/ /_/\__/
             /____/_/            store server
"#
    );
}

/// Set up the process environment: dotenv and logging.
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}
