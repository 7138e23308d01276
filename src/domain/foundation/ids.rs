//! Strongly-typed identifier value objects.

use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a confirmed membership purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PurchaseId(Uuid);

impl PurchaseId {
    /// Creates a new random PurchaseId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PurchaseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PurchaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purchase_ids_are_unique() {
        assert_ne!(PurchaseId::new(), PurchaseId::new());
    }

    #[test]
    fn purchase_id_is_a_v4_uuid() {
        let id = PurchaseId::new();
        let parsed = Uuid::parse_str(&id.to_string()).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn purchase_id_serializes_as_plain_string() {
        let id = PurchaseId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }
}
