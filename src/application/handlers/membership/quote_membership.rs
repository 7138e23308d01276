//! QuoteMembershipHandler - Query handler for pricing a membership selection.

use std::sync::Arc;

use crate::domain::membership::{
    Catalog, MemberCount, PriceQuote, PricingEngine, PricingError, PricingRules,
};

/// Query to price a plan, feature selection, and member count.
#[derive(Debug, Clone)]
pub struct QuoteMembershipQuery {
    pub plan: String,
    pub feature_keys: Vec<String>,
    pub member_count: MemberCount,
}

/// Result of a successful quote.
pub type QuoteMembershipResult = PriceQuote;

/// Handler for pricing membership selections against a shared catalog.
pub struct QuoteMembershipHandler {
    catalog: Arc<Catalog>,
    rules: PricingRules,
}

impl QuoteMembershipHandler {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_rules(catalog, PricingRules::standard().clone())
    }

    pub fn with_rules(catalog: Arc<Catalog>, rules: PricingRules) -> Self {
        Self { catalog, rules }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rules(&self) -> &PricingRules {
        &self.rules
    }

    pub fn handle(
        &self,
        query: &QuoteMembershipQuery,
    ) -> Result<QuoteMembershipResult, PricingError> {
        let result = PricingEngine::with_rules(&self.catalog, &self.rules).calculate_total_cost(
            &query.plan,
            &query.feature_keys,
            query.member_count,
        );

        match &result {
            Ok(quote) => tracing::debug!(
                plan = %query.plan,
                members = query.member_count.get(),
                features = query.feature_keys.len(),
                gross = quote.breakdown.gross_total,
                final_cost = quote.final_cost,
                "Computed membership quote"
            ),
            Err(err) => tracing::warn!(code = %err.code(), "Quote rejected: {}", err),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::membership::Plan;

    fn query(plan: &str, keys: &[&str], members: i64) -> QuoteMembershipQuery {
        QuoteMembershipQuery {
            plan: plan.to_string(),
            feature_keys: keys.iter().map(|k| k.to_string()).collect(),
            member_count: MemberCount::try_new(members).unwrap(),
        }
    }

    #[test]
    fn quotes_against_standard_catalog() {
        let handler = QuoteMembershipHandler::new(Arc::new(Catalog::standard().clone()));
        let quote = handler.handle(&query("Family", &[], 4)).unwrap();
        assert_eq!(quote.final_cost, 490);
        assert_eq!(quote.breakdown.special_discount, 50.0);
    }

    #[test]
    fn quotes_against_custom_catalog() {
        let catalog = Catalog::try_new(vec![Plan::try_new("Student", 30).unwrap()], vec![])
            .unwrap();
        let handler = QuoteMembershipHandler::new(Arc::new(catalog));

        assert_eq!(handler.handle(&query("Student", &[], 1)).unwrap().final_cost, 30);
        assert_eq!(
            handler.handle(&query("Basic", &[], 1)),
            Err(PricingError::invalid_plan("Basic"))
        );
    }

    #[test]
    fn custom_rules_are_applied() {
        let rules = PricingRules {
            group_min_members: 5,
            ..PricingRules::standard().clone()
        };
        let handler =
            QuoteMembershipHandler::with_rules(Arc::new(Catalog::standard().clone()), rules);

        let quote = handler.handle(&query("Basic", &[], 2)).unwrap();
        assert_eq!(quote.breakdown.group_discount, 0.0);
        assert_eq!(quote.final_cost, 100);
    }

    #[test]
    fn unknown_feature_is_reported() {
        let handler = QuoteMembershipHandler::new(Arc::new(Catalog::standard().clone()));
        let result = handler.handle(&query("Basic", &["2", "5"], 1));
        assert_eq!(result, Err(PricingError::invalid_feature_key("5")));
    }
}
