//! Pricing error types.
//!
//! Both errors are input-validation failures. They are never retryable and
//! the engine never returns a partial result alongside them.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors returned by the pricing engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Plan name is not in the catalog.
    #[error("Invalid membership plan: '{0}'")]
    InvalidPlan(String),

    /// A selected feature key is not in the catalog.
    #[error("Invalid feature key: {0}")]
    InvalidFeatureKey(String),
}

impl PricingError {
    pub fn invalid_plan(name: impl Into<String>) -> Self {
        PricingError::InvalidPlan(name.into())
    }

    pub fn invalid_feature_key(key: impl Into<String>) -> Self {
        PricingError::InvalidFeatureKey(key.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PricingError::InvalidPlan(_) => ErrorCode::InvalidPlan,
            PricingError::InvalidFeatureKey(_) => ErrorCode::InvalidFeatureKey,
        }
    }
}

impl From<PricingError> for DomainError {
    fn from(err: PricingError) -> Self {
        let detail = match &err {
            PricingError::InvalidPlan(name) => ("plan", name.clone()),
            PricingError::InvalidFeatureKey(key) => ("feature_key", key.clone()),
        };
        DomainError::new(err.code(), err.to_string()).with_detail(detail.0, detail.1)
    }
}
