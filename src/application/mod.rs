//! Application layer - Commands, Queries, Handlers, and the interactive shell.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;
pub mod shell;

pub use handlers::{
    ConfirmMembershipCommand, ConfirmMembershipHandler, QuoteMembershipHandler,
    QuoteMembershipQuery,
};
pub use shell::{AbortReason, MembershipShell, ShellOutcome};
