//! Plan and feature catalog.
//!
//! The catalog is read-only once built. The standard catalog is initialised
//! lazily on first use and lives for the whole process.
//!
//! # Standard Catalog
//!
//! | Plan | Base price |
//! |------|------------|
//! | Basic | 50 |
//! | Premium | 100 |
//! | Family | 150 |
//!
//! | Key | Feature | Cost | Premium |
//! |-----|---------|------|---------|
//! | 1 | Personal Training | 30 | No |
//! | 2 | Group Classes | 20 | No |
//! | 3 | Sauna Access | 40 | Yes |
//! | 4 | Nutritional Plan | 60 | Yes |

use once_cell::sync::Lazy;
use std::collections::HashSet;

use super::{Feature, Plan};
use crate::domain::foundation::ValidationError;

static STANDARD_CATALOG: Lazy<Catalog> = Lazy::new(|| Catalog {
    plans: vec![
        Plan::builtin("Basic", 50),
        Plan::builtin("Premium", 100),
        Plan::builtin("Family", 150),
    ],
    features: vec![
        Feature::builtin("1", "Personal Training", 30, false),
        Feature::builtin("2", "Group Classes", 20, false),
        Feature::builtin("3", "Sauna Access", 40, true),
        Feature::builtin("4", "Nutritional Plan", 60, true),
    ],
});

/// Immutable set of plans and features, kept in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    plans: Vec<Plan>,
    features: Vec<Feature>,
}

impl Catalog {
    /// Returns the built-in catalog.
    pub fn standard() -> &'static Catalog {
        &STANDARD_CATALOG
    }

    /// Builds a catalog from validated plans and features.
    ///
    /// Names and keys carry no surrounding whitespace once validated, so the
    /// duplicate checks compare exactly what a trimmed lookup would match.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if there are no plans
    /// - `Duplicate` if two plans share a name or two features share a key
    pub fn try_new(plans: Vec<Plan>, features: Vec<Feature>) -> Result<Self, ValidationError> {
        if plans.is_empty() {
            return Err(ValidationError::empty_field("catalog.plans"));
        }

        let mut names = HashSet::new();
        for plan in &plans {
            if !names.insert(plan.name()) {
                return Err(ValidationError::duplicate("plan.name", plan.name()));
            }
        }

        let mut keys = HashSet::new();
        for feature in &features {
            if !keys.insert(feature.key()) {
                return Err(ValidationError::duplicate("feature.key", feature.key()));
            }
        }

        Ok(Self { plans, features })
    }

    /// Looks up a plan by exact name.
    pub fn plan(&self, name: &str) -> Option<&Plan> {
        self.plans.iter().find(|p| p.name() == name)
    }

    /// Looks up a feature by exact key.
    pub fn feature(&self, key: &str) -> Option<&Feature> {
        self.features.iter().find(|f| f.key() == key)
    }

    /// All plans in display order.
    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    /// All features in display order.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_has_three_plans_in_order() {
        let names: Vec<_> = Catalog::standard().plans().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Basic", "Premium", "Family"]);
    }

    #[test]
    fn standard_plan_prices() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.plan("Basic").map(Plan::base_price), Some(50));
        assert_eq!(catalog.plan("Premium").map(Plan::base_price), Some(100));
        assert_eq!(catalog.plan("Family").map(Plan::base_price), Some(150));
    }

    #[test]
    fn standard_features_flag_premium_correctly() {
        let catalog = Catalog::standard();
        let premium: Vec<_> = catalog
            .features()
            .iter()
            .filter(|f| f.is_premium())
            .map(|f| f.key())
            .collect();
        assert_eq!(premium, vec!["3", "4"]);
    }

    #[test]
    fn plan_lookup_is_case_sensitive() {
        assert!(Catalog::standard().plan("basic").is_none());
        assert!(Catalog::standard().plan(" Basic").is_none());
    }

    #[test]
    fn unknown_feature_is_none() {
        assert!(Catalog::standard().feature("5").is_none());
    }

    #[test]
    fn empty_plan_list_is_rejected() {
        let result = Catalog::try_new(vec![], vec![]);
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn duplicate_plan_name_is_rejected() {
        let plans = vec![
            Plan::try_new("Basic", 50).unwrap(),
            Plan::try_new("Basic", 60).unwrap(),
        ];
        let result = Catalog::try_new(plans, vec![]);
        assert_eq!(result, Err(ValidationError::duplicate("plan.name", "Basic")));
    }

    #[test]
    fn duplicate_feature_key_is_rejected() {
        let plans = vec![Plan::try_new("Basic", 50).unwrap()];
        let features = vec![
            Feature::try_new("1", "Yoga", 10, false).unwrap(),
            Feature::try_new("1", "Pilates", 10, false).unwrap(),
        ];
        let result = Catalog::try_new(plans, features);
        assert_eq!(result, Err(ValidationError::duplicate("feature.key", "1")));
    }

    #[test]
    fn padded_duplicate_plan_cannot_be_built() {
        assert!(Plan::try_new("Basic ", 60).is_err());
        let plans = vec![Plan::try_new("Basic", 50).unwrap()];
        let catalog = Catalog::try_new(plans, vec![]).unwrap();
        assert!(catalog.plan("Basic").is_some());
    }

    #[test]
    fn catalog_without_features_is_allowed() {
        let plans = vec![Plan::try_new("Basic", 50).unwrap()];
        assert!(Catalog::try_new(plans, vec![]).is_ok());
    }
}
