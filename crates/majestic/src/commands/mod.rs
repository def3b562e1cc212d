//! Command implementations for the majestic CLI
//!
//! Each command module handles the CLI interface and delegates to
//! majestic-content / majestic-config for actual implementation.

pub mod check;
pub mod inspect;
