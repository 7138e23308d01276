//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the membership domain.

mod errors;
mod ids;
mod percentage;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::PurchaseId;
pub use percentage::Percentage;
pub use timestamp::Timestamp;
