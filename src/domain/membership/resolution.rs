//! Feature resolution - turns selected keys into cost, names, and premium flag.

use super::{Catalog, PricingError};

/// Summary of the features selected for one quote.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedFeatures {
    /// Sum of the selected feature costs (per member).
    pub total_cost: u64,
    /// Display names in the order the keys were supplied.
    pub names: Vec<String>,
    /// True if any selected feature is premium.
    pub has_premium: bool,
}

/// Resolves feature keys against the catalog.
///
/// Keys are not deduplicated: a key given twice is charged twice and
/// listed twice. Resolution stops at the first unknown key.
pub fn resolve_features<K: AsRef<str>>(
    catalog: &Catalog,
    keys: &[K],
) -> Result<ResolvedFeatures, PricingError> {
    let mut resolved = ResolvedFeatures::default();

    for key in keys {
        let key = key.as_ref();
        let feature = catalog
            .feature(key)
            .ok_or_else(|| PricingError::invalid_feature_key(key))?;

        resolved.total_cost += u64::from(feature.cost());
        resolved.names.push(feature.name().to_string());
        resolved.has_premium |= feature.is_premium();
    }

    Ok(resolved)
}
