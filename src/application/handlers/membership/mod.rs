//! Membership handlers.
//!
//! ## Commands
//! - Confirming a quote into a purchase receipt
//!
//! ## Queries
//! - Pricing a plan/feature/member selection

mod confirm_membership;
mod quote_membership;

// Commands
pub use confirm_membership::{
    ConfirmMembershipCommand, ConfirmMembershipHandler, ConfirmMembershipResult,
};

// Queries
pub use quote_membership::{QuoteMembershipHandler, QuoteMembershipQuery, QuoteMembershipResult};
