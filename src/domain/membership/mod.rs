//! Membership domain module.
//!
//! Handles the plan/feature catalog and membership pricing.
//!
//! # Module Structure
//!
//! - `catalog` - Immutable plan and feature catalog
//! - `plan` / `feature` - Catalog entries
//! - `member_count` - Validated member count
//! - `resolution` - Feature key resolution
//! - `pricing` - Pricing engine and breakdown
//! - `purchase` - Confirmed purchase receipt

mod catalog;
mod errors;
mod feature;
mod member_count;
mod plan;
mod pricing;
mod purchase;
mod resolution;

pub use catalog::Catalog;
pub use errors::PricingError;
pub use feature::Feature;
pub use member_count::MemberCount;
pub use plan::Plan;
pub use pricing::{
    calculate_total_cost, PriceQuote, PricingBreakdown, PricingEngine, PricingRules, SpecialOffer,
};
pub use purchase::MembershipPurchase;
pub use resolution::{resolve_features, ResolvedFeatures};
