//! Text rendering for the membership shell.
//!
//! Pure functions returning the lines to print, so layout is testable
//! without a prompt.

use crate::domain::membership::{Catalog, MemberCount, PriceQuote, PricingRules};

pub const WELCOME: &str = "Welcome to the Gym Membership Management System";

/// Plan menu, preceded by a blank line.
pub fn plan_menu(catalog: &Catalog) -> Vec<String> {
    let mut lines = vec![String::new(), "--- GYM MEMBERSHIP PLANS ---".to_string()];
    lines.extend(
        catalog
            .plans()
            .iter()
            .map(|plan| format!("- {}: ${}", plan.name(), plan.base_price())),
    );
    lines
}

/// Feature menu, preceded by a blank line.
pub fn feature_menu(catalog: &Catalog) -> Vec<String> {
    let mut lines = vec![String::new(), "--- ADDITIONAL FEATURES ---".to_string()];
    lines.extend(catalog.features().iter().map(|feature| {
        let mut line = format!("{}. {} (${})", feature.key(), feature.name(), feature.cost());
        if feature.is_premium() {
            line.push_str(" [PREMIUM]");
        }
        line
    }));
    lines
}

/// Notice shown once the member count qualifies for the group discount.
pub fn group_discount_notice(rules: &PricingRules) -> String {
    format!(
        ">> NOTE: Group discount of {} will be applied!",
        rules.group_discount
    )
}

/// Confirmation summary, ending with the final total.
///
/// Adjustment lines appear only when their amount is non-zero.
pub fn confirmation_summary(
    plan: &str,
    members: MemberCount,
    quote: &PriceQuote,
    rules: &PricingRules,
) -> Vec<String> {
    let breakdown = &quote.breakdown;
    let features = if breakdown.feature_names.is_empty() {
        "None".to_string()
    } else {
        breakdown.feature_names.join(", ")
    };

    let mut lines = vec![
        String::new(),
        "--- CONFIRMATION ---".to_string(),
        format!("Plan: {} (x{} members)", plan, members),
        format!("Features: {}", features),
        format!("Gross Total: ${:.2}", breakdown.gross_total),
    ];

    if breakdown.surcharge > 0.0 {
        lines.push(format!(
            "Premium Surcharge (+{}): +${:.2}",
            rules.premium_surcharge, breakdown.surcharge
        ));
    }
    if breakdown.group_discount > 0.0 {
        lines.push(format!(
            "Group Discount (-{}): -${:.2}",
            rules.group_discount, breakdown.group_discount
        ));
    }
    if breakdown.special_discount > 0.0 {
        lines.push(format!(
            "Special Offer Discount: -${:.2}",
            breakdown.special_discount
        ));
    }

    lines.push(String::new());
    lines.push(format!("FINAL TOTAL COST: ${}", quote.final_cost));
    lines
}
