//! Interactive shell configuration

use serde::Deserialize;

/// Interactive shell options
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ShellConfig {
    /// Print the confirmed purchase receipt as one JSON line
    #[serde(default)]
    pub print_receipt_json: bool,
}
