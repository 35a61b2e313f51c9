//! Bundle Configurator Module
//!
//! Pricing for bundle option selections, SKU / share-token generation, and
//! the create/update orchestration that persists priced configurations.

pub mod pricer;
pub mod service;
pub mod skugen;

pub use pricer::*;
pub use skugen::*;
