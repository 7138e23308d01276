//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `console` - `Prompt` over stdin/stdout or any reader/writer pair
//! - `catalog` - Catalog loading from YAML files

pub mod catalog;
pub mod console;

pub use catalog::{CatalogLoadError, YamlCatalogLoader};
pub use console::ConsolePrompt;
