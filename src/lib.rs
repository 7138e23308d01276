//! Gym Membership - membership pricing engine and purchase prompt.
//!
//! The core is [`domain::membership::PricingEngine`]: a pure calculation
//! from plan, features, and member count to a final integer cost with an
//! itemised breakdown. The interactive flow in [`application::shell`]
//! collects those inputs and confirms the purchase.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
