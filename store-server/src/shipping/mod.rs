//! Shipping Rate Engine Module
//!
//! Postcode → zone → weight-tiered rate resolution. Both halves are pure
//! functions over records the repository has already materialized.

pub mod matcher;
pub mod resolver;

pub use matcher::*;
pub use resolver::*;
