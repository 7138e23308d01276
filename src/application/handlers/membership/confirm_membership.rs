//! ConfirmMembershipHandler - Command handler for accepting a quote.

use crate::domain::membership::{MemberCount, MembershipPurchase, PriceQuote};

/// Command to confirm a previously computed quote.
#[derive(Debug, Clone)]
pub struct ConfirmMembershipCommand {
    pub plan: String,
    pub member_count: MemberCount,
    pub quote: PriceQuote,
}

/// Result of a confirmation.
pub type ConfirmMembershipResult = MembershipPurchase;

/// Handler that turns an accepted quote into a purchase receipt.
///
/// No payment is taken; the receipt is the only record of the purchase.
#[derive(Debug, Default)]
pub struct ConfirmMembershipHandler;

impl ConfirmMembershipHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: ConfirmMembershipCommand) -> ConfirmMembershipResult {
        let purchase = MembershipPurchase::confirm(cmd.plan, cmd.member_count, &cmd.quote);

        tracing::info!(
            purchase_id = %purchase.id,
            plan = %purchase.plan,
            members = purchase.member_count.get(),
            total = purchase.total_cost,
            "Membership confirmed"
        );

        purchase
    }
}
