//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `membership` - Catalog, pricing engine, and purchase receipts

pub mod foundation;
pub mod membership;
