//! Pricing engine - surcharge, group discount, and special offer chain.
//!
//! # Algorithm
//!
//! Each stage works on the running total of the previous one:
//!
//! 1. `gross = (plan_base + feature_cost) * members`
//! 2. premium surcharge: `+15%` of gross if any selected feature is premium
//! 3. group discount: `-10%` of the surcharged total if `members >= 2`
//! 4. special offer: flat `-50` above 400, else `-20` above 200 (strict `>`)
//! 5. clamp at zero, then truncate toward zero
//!
//! The stage order and truncation are observable in the final price and
//! must not change.

use serde::Serialize;

use super::resolution::resolve_features;
use super::{Catalog, MemberCount, PricingError};
use crate::domain::foundation::Percentage;

/// Flat discount granted when the post-group total exceeds `threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecialOffer {
    pub threshold: f64,
    pub discount: f64,
}

/// Rates and thresholds applied by the pricing engine.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingRules {
    pub premium_surcharge: Percentage,
    pub group_discount: Percentage,
    pub group_min_members: u32,
    /// Offers ordered by descending threshold; the first match wins.
    pub special_offers: &'static [SpecialOffer],
}

static STANDARD_RULES: PricingRules = PricingRules {
    premium_surcharge: Percentage::new(15),
    group_discount: Percentage::new(10),
    group_min_members: 2,
    special_offers: &[
        SpecialOffer {
            threshold: 400.0,
            discount: 50.0,
        },
        SpecialOffer {
            threshold: 200.0,
            discount: 20.0,
        },
    ],
};

impl PricingRules {
    /// Returns the standard gym pricing rules.
    pub fn standard() -> &'static PricingRules {
        &STANDARD_RULES
    }

    /// Returns the flat special-offer discount for a post-group total.
    pub fn special_discount_for(&self, after_group: f64) -> f64 {
        self.special_offers
            .iter()
            .find(|offer| after_group > offer.threshold)
            .map(|offer| offer.discount)
            .unwrap_or(0.0)
    }
}

/// Itemised adjustments behind a quote. Display only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingBreakdown {
    pub gross_total: f64,
    pub surcharge: f64,
    pub group_discount: f64,
    pub special_discount: f64,
    pub feature_names: Vec<String>,
}

/// Final integer cost plus the breakdown that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceQuote {
    pub final_cost: u64,
    pub breakdown: PricingBreakdown,
}

impl PriceQuote {
    /// Splits the quote into `(final_cost, breakdown)`.
    pub fn into_parts(self) -> (u64, PricingBreakdown) {
        (self.final_cost, self.breakdown)
    }
}

/// Stateless pricing engine over a borrowed catalog.
#[derive(Debug, Clone, Copy)]
pub struct PricingEngine<'a> {
    catalog: &'a Catalog,
    rules: &'a PricingRules,
}

impl<'a> PricingEngine<'a> {
    /// Creates an engine with the standard rules.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_rules(catalog, PricingRules::standard())
    }

    /// Creates an engine with custom rules.
    pub fn with_rules(catalog: &'a Catalog, rules: &'a PricingRules) -> Self {
        Self { catalog, rules }
    }

    /// Computes the total cost of a membership selection.
    ///
    /// # Errors
    ///
    /// - `InvalidPlan` if `plan_name` is not in the catalog (checked first)
    /// - `InvalidFeatureKey` for the first unknown feature key
    pub fn calculate_total_cost<K: AsRef<str>>(
        &self,
        plan_name: &str,
        feature_keys: &[K],
        member_count: MemberCount,
    ) -> Result<PriceQuote, PricingError> {
        let plan = self
            .catalog
            .plan(plan_name)
            .ok_or_else(|| PricingError::invalid_plan(plan_name))?;
        let features = resolve_features(self.catalog, feature_keys)?;
        let members = member_count.get();

        let per_member = u64::from(plan.base_price()) + features.total_cost;
        let gross_total = per_member.saturating_mul(u64::from(members)) as f64;

        let surcharge = if features.has_premium {
            self.rules.premium_surcharge.of(gross_total)
        } else {
            0.0
        };
        let after_surcharge = gross_total + surcharge;

        let group_discount = if members >= self.rules.group_min_members {
            self.rules.group_discount.of(after_surcharge)
        } else {
            0.0
        };
        let after_group = after_surcharge - group_discount;

        let special_discount = self.rules.special_discount_for(after_group);
        let final_total = (after_group - special_discount).max(0.0);

        Ok(PriceQuote {
            final_cost: final_total.trunc() as u64,
            breakdown: PricingBreakdown {
                gross_total,
                surcharge,
                group_discount,
                special_discount,
                feature_names: features.names,
            },
        })
    }
}

/// Computes a quote against the standard catalog and rules.
pub fn calculate_total_cost<K: AsRef<str>>(
    plan_name: &str,
    feature_keys: &[K],
    member_count: MemberCount,
) -> Result<PriceQuote, PricingError> {
    PricingEngine::new(Catalog::standard()).calculate_total_cost(
        plan_name,
        feature_keys,
        member_count,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::membership::{Feature, Plan};
    use proptest::prelude::*;

    const NO_FEATURES: &[&str] = &[];

    fn members(n: i64) -> MemberCount {
        MemberCount::try_new(n).unwrap()
    }

    fn cost(plan: &str, features: &[&str], n: i64) -> u64 {
        calculate_total_cost(plan, features, members(n))
            .unwrap()
            .final_cost
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Reference scenarios
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn basic_plan_single_member_no_features() {
        assert_eq!(cost("Basic", NO_FEATURES, 1), 50);
    }

    #[test]
    fn premium_plan_with_standard_feature() {
        assert_eq!(cost("Premium", &["2"], 1), 120);
    }

    #[test]
    fn group_discount_for_two_members() {
        assert_eq!(cost("Basic", NO_FEATURES, 2), 90);
    }

    #[test]
    fn premium_surcharge_truncates_half() {
        // 90 + 13.5 = 103.5
        let quote = calculate_total_cost("Basic", &["3"], MemberCount::ONE).unwrap();
        assert_eq!(quote.final_cost, 103);
        assert_eq!(quote.breakdown.surcharge, 13.5);
    }

    #[test]
    fn special_offer_twenty_above_two_hundred() {
        assert_eq!(cost("Family", NO_FEATURES, 2), 250);
    }

    #[test]
    fn special_offer_fifty_above_four_hundred() {
        assert_eq!(cost("Family", NO_FEATURES, 4), 490);
    }

    #[test]
    fn surcharge_group_and_special_combined() {
        let (final_cost, breakdown) = calculate_total_cost("Premium", &["4"], members(2))
            .unwrap()
            .into_parts();
        assert_eq!(final_cost, 311);
        assert_eq!(breakdown.gross_total, 320.0);
        assert_eq!(breakdown.surcharge, 48.0);
        assert!((breakdown.group_discount - 36.8).abs() < 1e-9);
        assert_eq!(breakdown.special_discount, 20.0);
        assert_eq!(breakdown.feature_names, vec!["Nutritional Plan"]);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Thresholds and errors
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn special_offer_threshold_is_strict() {
        let rules = PricingRules::standard();
        assert_eq!(rules.special_discount_for(200.0), 0.0);
        assert_eq!(rules.special_discount_for(200.01), 20.0);
        assert_eq!(rules.special_discount_for(400.0), 20.0);
        assert_eq!(rules.special_discount_for(400.01), 50.0);
    }

    #[test]
    fn exactly_two_hundred_gets_no_special_offer() {
        // Group discount disabled so the running total lands exactly on 200.
        let catalog = Catalog::try_new(vec![Plan::try_new("Duo", 100).unwrap()], vec![])
            .unwrap();
        let rules = PricingRules {
            group_min_members: 3,
            ..PricingRules::standard().clone()
        };
        let quote = PricingEngine::with_rules(&catalog, &rules)
            .calculate_total_cost("Duo", NO_FEATURES, members(2))
            .unwrap();
        assert_eq!(quote.breakdown.group_discount, 0.0);
        assert_eq!(quote.breakdown.special_discount, 0.0);
        assert_eq!(quote.final_cost, 200);
    }

    #[test]
    fn unknown_plan_fails_before_features_are_checked() {
        let result = calculate_total_cost("Gold", &["99"], MemberCount::ONE);
        assert_eq!(result, Err(PricingError::invalid_plan("Gold")));
    }

    #[test]
    fn unknown_feature_fails_even_with_valid_keys() {
        let result = calculate_total_cost("Basic", &["1", "7", "3"], MemberCount::ONE);
        assert_eq!(result, Err(PricingError::invalid_feature_key("7")));
    }

    #[test]
    fn clamp_keeps_cost_at_zero() {
        let rules = PricingRules {
            special_offers: &[SpecialOffer {
                threshold: 0.0,
                discount: 1_000.0,
            }],
            ..PricingRules::standard().clone()
        };
        let quote = PricingEngine::with_rules(Catalog::standard(), &rules)
            .calculate_total_cost("Basic", NO_FEATURES, MemberCount::ONE)
            .unwrap();
        assert_eq!(quote.final_cost, 0);
    }

    #[test]
    fn free_features_still_trigger_premium_surcharge() {
        let catalog = Catalog::try_new(
            vec![Plan::try_new("Basic", 100).unwrap()],
            vec![Feature::try_new("vip", "VIP Lounge", 0, true).unwrap()],
        )
        .unwrap();
        let quote = PricingEngine::new(&catalog)
            .calculate_total_cost("Basic", &["vip"], MemberCount::ONE)
            .unwrap();
        assert_eq!(quote.breakdown.surcharge, 15.0);
        assert_eq!(quote.final_cost, 115);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Properties
    // ════════════════════════════════════════════════════════════════════════════

    fn plan_name() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec!["Basic", "Premium", "Family"])
    }

    fn feature_keys() -> impl Strategy<Value = Vec<&'static str>> {
        prop::collection::vec(prop::sample::select(vec!["1", "2", "3", "4"]), 0..6)
    }

    proptest! {
        #[test]
        fn special_discount_is_one_of_three_tiers(
            plan in plan_name(),
            keys in feature_keys(),
            n in 1i64..50,
        ) {
            let quote = calculate_total_cost(plan, &keys, members(n)).unwrap();
            let b = &quote.breakdown;
            let after_group = b.gross_total + b.surcharge - b.group_discount;
            let expected = if after_group > 400.0 {
                50.0
            } else if after_group > 200.0 {
                20.0
            } else {
                0.0
            };
            prop_assert_eq!(b.special_discount, expected);
        }

        #[test]
        fn group_discount_applies_iff_two_or_more(
            plan in plan_name(),
            keys in feature_keys(),
            n in 1i64..50,
        ) {
            let quote = calculate_total_cost(plan, &keys, members(n)).unwrap();
            prop_assert_eq!(quote.breakdown.group_discount > 0.0, n >= 2);
        }

        #[test]
        fn surcharge_applies_iff_premium_selected(
            plan in plan_name(),
            keys in feature_keys(),
            n in 1i64..50,
        ) {
            let quote = calculate_total_cost(plan, &keys, members(n)).unwrap();
            let has_premium = keys.iter().any(|k| *k == "3" || *k == "4");
            prop_assert_eq!(quote.breakdown.surcharge > 0.0, has_premium);
        }

        #[test]
        fn final_cost_is_truncated_net_total(
            plan in plan_name(),
            keys in feature_keys(),
            n in 1i64..50,
        ) {
            let quote = calculate_total_cost(plan, &keys, members(n)).unwrap();
            let b = &quote.breakdown;
            let net = b.gross_total + b.surcharge - b.group_discount - b.special_discount;
            prop_assert!(net >= 0.0);
            prop_assert_eq!(quote.final_cost, net.floor() as u64);
        }

        #[test]
        fn unknown_plan_always_fails(
            plan in "[a-z]{1,12}",
            keys in feature_keys(),
            n in 1i64..50,
        ) {
            let result = calculate_total_cost(&plan, &keys, members(n));
            prop_assert_eq!(result, Err(PricingError::invalid_plan(plan.clone())));
        }

        #[test]
        fn unknown_key_always_fails(
            plan in plan_name(),
            mut keys in feature_keys(),
            position in 0usize..6,
            n in 1i64..50,
        ) {
            let position = position.min(keys.len());
            keys.insert(position, "9");
            let result = calculate_total_cost(plan, &keys, members(n));
            prop_assert_eq!(result, Err(PricingError::invalid_feature_key("9")));
        }
    }
}
