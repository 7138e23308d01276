//! Confirmed membership purchase (receipt).

use serde::Serialize;

use super::{MemberCount, PriceQuote};
use crate::domain::foundation::{PurchaseId, Timestamp};

/// Record of a quote the member accepted.
///
/// Receipts are produced once per confirmation and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MembershipPurchase {
    pub id: PurchaseId,
    pub plan: String,
    pub member_count: MemberCount,
    pub feature_names: Vec<String>,
    pub total_cost: u64,
    pub confirmed_at: Timestamp,
}

impl MembershipPurchase {
    /// Creates a receipt for an accepted quote.
    pub fn confirm(plan: impl Into<String>, member_count: MemberCount, quote: &PriceQuote) -> Self {
        Self {
            id: PurchaseId::new(),
            plan: plan.into(),
            member_count,
            feature_names: quote.breakdown.feature_names.clone(),
            total_cost: quote.final_cost,
            confirmed_at: Timestamp::now(),
        }
    }
}
