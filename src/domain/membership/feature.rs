//! Optional add-on features.

use serde::Serialize;

use crate::domain::foundation::ValidationError;

/// An add-on feature that can be attached to any plan.
///
/// Premium features trigger the premium surcharge on the whole quote.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Feature {
    key: String,
    name: String,
    cost: u32,
    premium: bool,
}

impl Feature {
    /// Creates a feature, validating key and name.
    ///
    /// The key is matched exactly against trimmed user input, so it may not
    /// carry surrounding whitespace or the `,` selection separator.
    pub fn try_new(
        key: impl Into<String>,
        name: impl Into<String>,
        cost: u32,
        premium: bool,
    ) -> Result<Self, ValidationError> {
        let key = key.into();
        let name = name.into();
        if key.trim().is_empty() {
            return Err(ValidationError::empty_field("feature.key"));
        }
        if key.trim() != key {
            return Err(ValidationError::invalid_format(
                "feature.key",
                "must not have leading or trailing whitespace",
            ));
        }
        if key.contains(',') {
            return Err(ValidationError::invalid_format(
                "feature.key",
                "must not contain ','",
            ));
        }
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("feature.name"));
        }
        Ok(Self {
            key,
            name,
            cost,
            premium,
        })
    }

    pub(super) fn builtin(key: &str, name: &str, cost: u32, premium: bool) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            cost,
            premium,
        }
    }

    /// Returns the selection key (e.g. "3").
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the flat cost per member.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Returns true if selecting this feature triggers the premium surcharge.
    pub fn is_premium(&self) -> bool {
        self.premium
    }
}
