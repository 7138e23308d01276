//! Membership plan definitions.
//!
//! A plan is a named membership tier with a fixed base price per member.

use serde::Serialize;

use crate::domain::foundation::ValidationError;

/// A membership plan from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Plan {
    name: String,
    base_price: u32,
}

impl Plan {
    /// Creates a plan, validating name and price.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    /// - `InvalidFormat` if the name has leading or trailing whitespace
    /// - `OutOfRange` if the base price is zero
    pub fn try_new(name: impl Into<String>, base_price: u32) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("plan.name"));
        }
        if name.trim() != name {
            return Err(ValidationError::invalid_format(
                "plan.name",
                "must not have leading or trailing whitespace",
            ));
        }
        if base_price == 0 {
            return Err(ValidationError::out_of_range(
                "plan.base_price",
                1,
                i64::from(u32::MAX),
                0,
            ));
        }
        Ok(Self { name, base_price })
    }

    /// Builds one of the built-in plans. Callers guarantee validity.
    pub(super) fn builtin(name: &str, base_price: u32) -> Self {
        Self {
            name: name.to_string(),
            base_price,
        }
    }

    /// Returns the plan name used for lookup and display.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the base price per member.
    pub fn base_price(&self) -> u32 {
        self.base_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_plan_is_created() {
        let plan = Plan::try_new("Student", 30).unwrap();
        assert_eq!(plan.name(), "Student");
        assert_eq!(plan.base_price(), 30);
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(matches!(
            Plan::try_new("   ", 30),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn padded_name_is_rejected() {
        for name in [" Gold", "Gold ", " Gold ", "Gold\t"] {
            assert!(
                matches!(
                    Plan::try_new(name, 40),
                    Err(ValidationError::InvalidFormat { .. })
                ),
                "name {:?}",
                name
            );
        }
    }

    #[test]
    fn inner_spaces_are_allowed() {
        assert!(Plan::try_new("Off Peak", 40).is_ok());
    }

    #[test]
    fn zero_price_is_rejected() {
        assert!(matches!(
            Plan::try_new("Free", 0),
            Err(ValidationError::OutOfRange { actual: 0, .. })
        ));
    }
}
