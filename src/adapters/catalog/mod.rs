//! Catalog adapters - load a membership catalog from external files.
//!
//! - `YamlCatalogLoader` - YAML catalog file

mod yaml_catalog;

pub use yaml_catalog::{CatalogLoadError, YamlCatalogLoader};
