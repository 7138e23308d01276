//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `Prompt` - Line-oriented user interaction for the membership shell

mod prompt;

pub use prompt::Prompt;
