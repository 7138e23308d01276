//! Prompt port for line-oriented user interaction.
//!
//! The membership shell talks to the user only through this port, so the
//! same flow runs against a terminal or an in-memory script.
//!
//! # Example
//!
//! ```ignore
//! use gym_membership::ports::Prompt;
//!
//! fn ask_plan(prompt: &mut dyn Prompt) -> Result<Option<String>, DomainError> {
//!     prompt.say("--- GYM MEMBERSHIP PLANS ---")?;
//!     prompt.ask("Enter the name of the plan you want (e.g., Basic): ")
//! }
//! ```

use crate::domain::foundation::DomainError;

/// Port for interactive text input/output.
pub trait Prompt {
    /// Writes one line of output.
    fn say(&mut self, line: &str) -> Result<(), DomainError>;

    /// Writes `question` without a trailing newline and reads one line.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(line))` - the answer, without its line terminator
    /// - `Ok(None)` - input is exhausted
    /// - `Err(DomainError)` - the underlying stream failed
    fn ask(&mut self, question: &str) -> Result<Option<String>, DomainError>;
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn say(&mut self, line: &str) -> Result<(), DomainError> {
        (**self).say(line)
    }

    fn ask(&mut self, question: &str) -> Result<Option<String>, DomainError> {
        (**self).ask(question)
    }
}
