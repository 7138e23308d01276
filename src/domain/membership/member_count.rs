//! Member count value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Number of members signing up together. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct MemberCount(u32);

impl MemberCount {
    /// A single member.
    pub const ONE: Self = Self(1);

    /// Creates a MemberCount, rejecting values below one.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        u32::try_from(value)
            .ok()
            .filter(|v| *v >= 1)
            .map(Self)
            .ok_or_else(|| {
                ValidationError::out_of_range("member_count", 1, i64::from(u32::MAX), value)
            })
    }

    /// Returns the raw count.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for MemberCount {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<MemberCount> for u32 {
    fn from(count: MemberCount) -> Self {
        count.0
    }
}

impl fmt::Display for MemberCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
