//! Catalog source configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the plan/feature catalog comes from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// YAML catalog file. The built-in catalog is used when unset.
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.path {
            Some(path) if path.as_os_str().is_empty() => Err(ValidationError::EmptyCatalogPath),
            _ => Ok(()),
        }
    }
}
