//! YAML catalog loader.
//!
//! Reads a plan/feature catalog from a YAML document:
//!
//! ```yaml
//! plans:
//!   - { name: Basic, base_price: 50 }
//! features:
//!   - { key: "1", name: Personal Training, cost: 30, premium: false }
//! ```
//!
//! The file is read once at startup; the resulting `Catalog` is immutable.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::domain::membership::{Catalog, Feature, Plan};

/// Errors raised while loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("Failed to read catalog file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(#[from] ValidationError),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDocument {
    plans: Vec<PlanRecord>,
    #[serde(default)]
    features: Vec<FeatureRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlanRecord {
    name: String,
    base_price: u32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FeatureRecord {
    key: String,
    name: String,
    cost: u32,
    #[serde(default)]
    premium: bool,
}

/// Loads catalogs from YAML files or strings.
pub struct YamlCatalogLoader;

impl YamlCatalogLoader {
    /// Reads and validates a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Catalog, CatalogLoadError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::parse(&contents)?;
        tracing::info!(
            path = %path.display(),
            plans = catalog.plans().len(),
            features = catalog.features().len(),
            "Loaded membership catalog"
        );
        Ok(catalog)
    }

    /// Parses and validates a catalog document.
    pub fn parse(contents: &str) -> Result<Catalog, CatalogLoadError> {
        let document: CatalogDocument = serde_yaml::from_str(contents)?;

        let plans = document
            .plans
            .into_iter()
            .map(|p| Plan::try_new(p.name, p.base_price))
            .collect::<Result<Vec<_>, _>>()?;

        let features = document
            .features
            .into_iter()
            .map(|f| Feature::try_new(f.key, f.name, f.cost, f.premium))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Catalog::try_new(plans, features)?)
    }
}
